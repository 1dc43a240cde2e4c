use crate::{Credential, ReportOptions};

/// Report rows as string cells. Row 0 is the header.
pub type Table = Vec<Vec<String>>;

/// Account addressed by a connection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    /// Client customer id, e.g. `123-456-7890`.
    pub account_id: String,
    /// Report API version appended to the download URL.
    pub api_version: String,
    pub developer_token: String,
}

/// Everything a connection needs, decoded from a DSN.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectionConfig {
    pub identity: Identity,
    pub credential: Option<Credential>,
    pub report: ReportOptions,
}
