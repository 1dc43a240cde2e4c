//! `awql-http` is a blocking, database-style driver for the AdWords report
//! download API.
//!
//! A connection is opened from a DSN, a statement is prepared and bound, and
//! the downloaded CSV report is exposed as forward-only [`Rows`]:
//! - [`Connection::open`] / [`AwqlDriver::open`]
//! - [`Connection::authenticate`]
//! - [`Connection::prepare`], [`Statement::query`]
//! - [`Rows::next_into`], [`Rows::columns`]
//!
//! ```no_run
//! use awql_http::{Connection, Value};
//!
//! let mut conn = Connection::open("123-456-7890|dEve1op3er7okeN|ya29.AcC3s57okeN")?;
//! let rows = conn
//!     .prepare("SELECT CampaignName, Clicks FROM CAMPAIGN_PERFORMANCE_REPORT WHERE CampaignStatus = ?")?
//!     .query([Value::text("ENABLED")])?;
//! for row in rows {
//!     println!("{row:?}");
//! }
//! # Ok::<(), awql_http::AwqlError>(())
//! ```

mod auth;
mod connection;
mod credential;
mod decode;
mod error;
mod options;
mod params;
mod rows;
mod statement;
mod types;
mod value;
mod wire;

pub mod dsn;

pub use connection::{AwqlDriver, Connection};
pub use credential::{
    Credential, RefreshableToken, StaticToken, EXPIRY_DELTA_SECS, STATIC_TOKEN_LIFETIME_DAYS,
};
pub use decode::decode_api_error;
pub use dsn::{Dsn, DsnAuth};
pub use error::AwqlError;
pub use options::{ConnectionOptions, ReportOptions, REPORT_URL, TOKEN_URL};
pub use params::{bind, count_placeholders, Params};
pub use rows::Rows;
pub use statement::Statement;
pub use types::{ConnectionConfig, Identity, Table};
pub use value::Value;

pub type Result<T> = std::result::Result<T, AwqlError>;
