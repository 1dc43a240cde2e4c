use std::fmt;

use reqwest::blocking::Client;

use crate::{
    auth, dsn, AwqlError, ConnectionConfig, ConnectionOptions, Credential, Identity,
    ReportOptions, Result, Statement,
};

/// Opens connections. Holds the endpoints and the shared HTTP client.
///
/// ```no_run
/// use awql_http::AwqlDriver;
///
/// let conn = AwqlDriver::new()
///     .open("123-456-7890|dEve1op3er7okeN|ya29.AcC3s57okeN")
///     .expect("valid DSN");
/// ```
#[derive(Clone, Debug, Default)]
pub struct AwqlDriver {
    http: Client,
    options: ConnectionOptions,
}

impl AwqlDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides endpoints and timeouts.
    pub fn with_options(mut self, options: ConnectionOptions) -> Self {
        self.options = options;
        self
    }

    /// Opens a connection from a DSN. Performs no I/O.
    pub fn open(&self, dsn: &str) -> Result<Connection> {
        Ok(self.connect(dsn::parse(dsn)?))
    }

    /// Opens a connection from an already decoded configuration.
    pub fn connect(&self, config: ConnectionConfig) -> Connection {
        Connection {
            http: self.http.clone(),
            identity: config.identity,
            credential: config.credential,
            report: config.report,
            options: self.options.clone(),
        }
    }
}

/// Connection to the report download API.
///
/// Owns its credential exclusively; refreshes mutate it in place, hence the
/// `&mut self` receivers.
pub struct Connection {
    pub(crate) http: Client,
    pub(crate) identity: Identity,
    pub(crate) credential: Option<Credential>,
    pub(crate) report: ReportOptions,
    pub(crate) options: ConnectionOptions,
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("account_id", &self.identity.account_id)
            .field("api_version", &self.identity.api_version)
            .field("developer_token", &"<redacted>")
            .field("credential", &self.credential)
            .field("report", &self.report)
            .field("options", &self.options)
            .finish()
    }
}

impl Connection {
    /// Opens a connection with the default endpoints.
    pub fn open(dsn: &str) -> Result<Self> {
        AwqlDriver::new().open(dsn)
    }

    /// Opens a connection from the DSN in `AWQL_DSN`.
    ///
    /// Returns an error message if the variable is missing, empty, or not a
    /// valid DSN.
    pub fn from_env() -> std::result::Result<Self, String> {
        let dsn = std::env::var("AWQL_DSN")
            .map_err(|_| "missing AWQL_DSN environment variable".to_owned())?;
        if dsn.trim().is_empty() {
            return Err("AWQL_DSN is set but empty".to_owned());
        }
        Self::open(dsn.trim()).map_err(|err| format!("AWQL_DSN is invalid: {err}"))
    }

    /// Overrides the report formatting flags.
    pub fn with_report_options(mut self, report: ReportOptions) -> Self {
        self.report = report;
        self
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    pub fn report_options(&self) -> &ReportOptions {
        &self.report
    }

    /// Makes sure the credential, if any, carries a live access token.
    ///
    /// Only a refreshable credential that is no longer valid causes a call to
    /// the token endpoint; every other case returns without I/O.
    pub fn authenticate(&mut self) -> Result<()> {
        match &mut self.credential {
            None | Some(Credential::Static(_)) => Ok(()),
            Some(Credential::Refreshable(token)) => {
                if token.is_valid() {
                    return Ok(());
                }
                auth::refresh(&self.http, &self.options, token)
            }
        }
    }

    /// Returns a statement bound to this connection.
    pub fn prepare(&mut self, query: impl Into<String>) -> Result<Statement<'_>> {
        let query = query.into();
        if query.trim().is_empty() {
            return Err(AwqlError::EmptyQuery);
        }
        Ok(Statement::new(self, query))
    }

    /// Releases the connection.
    pub fn close(self) -> Result<()> {
        Ok(())
    }
}
