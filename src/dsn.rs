//! Data source names.
//!
//! Accepted shapes:
//! - `AccountId[:ApiVersion]|DeveloperToken`
//! - `AccountId[:ApiVersion]|DeveloperToken|AccessToken`
//! - `AccountId[:ApiVersion]|DeveloperToken|ClientId|ClientSecret|RefreshToken`

use std::{fmt, str::FromStr};

use crate::{
    AwqlError, ConnectionConfig, Credential, Identity, RefreshableToken, ReportOptions, Result,
    StaticToken,
};

/// API version used when the DSN does not name one.
pub const DEFAULT_API_VERSION: &str = "v201809";

const SEGMENT_SEP: char = '|';
const VERSION_SEP: char = ':';

/// Parses a DSN into the configuration of a connection. Performs no I/O.
pub fn parse(dsn: &str) -> Result<ConnectionConfig> {
    dsn.parse::<Dsn>()?.into_config()
}

/// Authentication part of a DSN.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum DsnAuth {
    #[default]
    None,
    AccessToken(String),
    Client {
        client_id: String,
        client_secret: String,
        refresh_token: String,
    },
}

/// Structured DSN, renderable back to its string form.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Dsn {
    pub account_id: String,
    pub api_version: Option<String>,
    pub developer_token: String,
    pub auth: DsnAuth,
}

impl Dsn {
    pub fn new(account_id: impl Into<String>, developer_token: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            developer_token: developer_token.into(),
            ..Self::default()
        }
    }

    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.auth = DsnAuth::AccessToken(token.into());
        self
    }

    pub fn with_client(
        mut self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        refresh_token: impl Into<String>,
    ) -> Self {
        self.auth = DsnAuth::Client {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            refresh_token: refresh_token.into(),
        };
        self
    }

    /// Validates the identity fields and builds the credential.
    ///
    /// Access tokens get a long fixed lifetime; client credentials start
    /// without expiry so the first use triggers a refresh.
    pub fn into_config(self) -> Result<ConnectionConfig> {
        if self.account_id.is_empty() {
            return Err(AwqlError::MissingAccountId);
        }
        if self.developer_token.is_empty() {
            return Err(AwqlError::MissingDeveloperToken);
        }

        let credential = match self.auth {
            DsnAuth::None => None,
            DsnAuth::AccessToken(token) if token.is_empty() => return Err(AwqlError::InvalidToken),
            DsnAuth::AccessToken(token) => Some(Credential::Static(StaticToken::bearer(token))),
            DsnAuth::Client {
                client_id,
                client_secret,
                refresh_token,
            } => Some(Credential::Refreshable(RefreshableToken::new(
                client_id,
                client_secret,
                refresh_token,
            ))),
        };

        Ok(ConnectionConfig {
            identity: Identity {
                account_id: self.account_id,
                api_version: self
                    .api_version
                    .filter(|version| !version.is_empty())
                    .unwrap_or_else(|| DEFAULT_API_VERSION.to_owned()),
                developer_token: self.developer_token,
            },
            credential,
            report: ReportOptions::default(),
        })
    }
}

impl FromStr for Dsn {
    type Err = AwqlError;

    fn from_str(dsn: &str) -> Result<Self> {
        let parts: Vec<&str> = dsn.split(SEGMENT_SEP).collect();
        let auth = match parts.as_slice() {
            [_, _] => DsnAuth::None,
            [_, _, token] => DsnAuth::AccessToken((*token).to_owned()),
            [_, _, client_id, client_secret, refresh_token] => DsnAuth::Client {
                client_id: (*client_id).to_owned(),
                client_secret: (*client_secret).to_owned(),
                refresh_token: (*refresh_token).to_owned(),
            },
            _ => return Err(AwqlError::MalformedConfig),
        };

        let (account_id, api_version) = match parts[0].split_once(VERSION_SEP) {
            Some((id, version)) => (id, Some(version.to_owned())),
            None => (parts[0], None),
        };
        if account_id.is_empty() {
            return Err(AwqlError::MissingAccountId);
        }
        if parts[1].is_empty() {
            return Err(AwqlError::MissingDeveloperToken);
        }

        Ok(Self {
            account_id: account_id.to_owned(),
            api_version,
            developer_token: parts[1].to_owned(),
            auth,
        })
    }
}

impl fmt::Display for Dsn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.account_id)?;
        if let Some(version) = self.api_version.as_deref().filter(|v| !v.is_empty()) {
            write!(f, "{VERSION_SEP}{version}")?;
        }
        write!(f, "{SEGMENT_SEP}{}", self.developer_token)?;
        match &self.auth {
            DsnAuth::None => Ok(()),
            DsnAuth::AccessToken(token) => write!(f, "{SEGMENT_SEP}{token}"),
            DsnAuth::Client {
                client_id,
                client_secret,
                refresh_token,
            } => write!(
                f,
                "{SEGMENT_SEP}{client_id}{SEGMENT_SEP}{client_secret}{SEGMENT_SEP}{refresh_token}"
            ),
        }
    }
}

impl fmt::Debug for Dsn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let auth = match &self.auth {
            DsnAuth::None => "none",
            DsnAuth::AccessToken(_) => "access_token",
            DsnAuth::Client { .. } => "client",
        };
        f.debug_struct("Dsn")
            .field("account_id", &self.account_id)
            .field("api_version", &self.api_version)
            .field("developer_token", &"<redacted>")
            .field("auth", &auth)
            .finish()
    }
}
