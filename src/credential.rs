use std::fmt;

use chrono::{DateTime, Duration, Utc};

/// Margin in seconds subtracted from the expiry before a token counts as valid.
pub const EXPIRY_DELTA_SECS: i64 = 10;

/// Lifetime in days given to access tokens passed directly in the DSN.
///
/// Long enough to never expire within a process lifetime.
pub const STATIC_TOKEN_LIFETIME_DAYS: i64 = 365;

pub(crate) const DEFAULT_TOKEN_TYPE: &str = "Bearer";

/// Access token supplied as-is. Never refreshed.
#[derive(Clone, PartialEq, Eq)]
pub struct StaticToken {
    pub access_token: String,
    pub token_type: String,
    pub expiry: DateTime<Utc>,
}

impl StaticToken {
    /// Wraps a bearer token expiring after [`STATIC_TOKEN_LIFETIME_DAYS`].
    pub fn bearer(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: DEFAULT_TOKEN_TYPE.to_owned(),
            expiry: Utc::now() + Duration::days(STATIC_TOKEN_LIFETIME_DAYS),
        }
    }
}

/// OAuth client credentials able to mint new access tokens.
#[derive(Clone, PartialEq, Eq)]
pub struct RefreshableToken {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
    pub access_token: String,
    pub token_type: String,
    /// `None` until the first successful refresh.
    pub expiry: Option<DateTime<Utc>>,
}

impl RefreshableToken {
    /// Builds a credential with no access token yet, so the first use refreshes.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        refresh_token: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            refresh_token: refresh_token.into(),
            access_token: String::new(),
            token_type: String::new(),
            expiry: None,
        }
    }

    /// Whether the current access token is still live.
    pub fn is_valid(&self) -> bool {
        still_live(self.expiry, Utc::now())
    }

    /// Whether all client fields needed by the refresh grant are present.
    pub fn can_refresh(&self) -> bool {
        !self.client_id.is_empty()
            && !self.client_secret.is_empty()
            && !self.refresh_token.is_empty()
    }
}

/// Credential attached to an authenticated connection.
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    Static(StaticToken),
    Refreshable(RefreshableToken),
}

impl Credential {
    /// Whether the access token can be used right now.
    pub fn is_valid(&self) -> bool {
        self.is_valid_at(Utc::now())
    }

    /// Whether the access token can be used at `now`.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        match self {
            Self::Static(token) => still_live(Some(token.expiry), now),
            Self::Refreshable(token) => still_live(token.expiry, now),
        }
    }

    pub fn is_refreshable(&self) -> bool {
        match self {
            Self::Static(_) => false,
            Self::Refreshable(token) => token.can_refresh(),
        }
    }

    /// Value of the `Authorization` header, e.g. `Bearer ya29.abc`.
    pub fn authorization(&self) -> String {
        let (token_type, access_token) = match self {
            Self::Static(token) => (&token.token_type, &token.access_token),
            Self::Refreshable(token) => (&token.token_type, &token.access_token),
        };
        let token_type = if token_type.is_empty() {
            DEFAULT_TOKEN_TYPE
        } else {
            token_type.as_str()
        };
        format!("{token_type} {access_token}")
    }
}

fn still_live(expiry: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    expiry.is_some_and(|expiry| expiry - Duration::seconds(EXPIRY_DELTA_SECS) > now)
}

impl fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticToken")
            .field("access_token", &"<redacted>")
            .field("token_type", &self.token_type)
            .field("expiry", &self.expiry)
            .finish()
    }
}

impl fmt::Debug for RefreshableToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RefreshableToken")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .field("access_token", &"<redacted>")
            .field("token_type", &self.token_type)
            .field("expiry", &self.expiry)
            .finish()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(token) => token.fmt(f),
            Self::Refreshable(token) => token.fmt(f),
        }
    }
}
