use std::time::Duration;

use chrono::Utc;
use reqwest::{blocking::Client, header, StatusCode};

use crate::{
    credential::DEFAULT_TOKEN_TYPE, wire::TokenResponse, AwqlError, ConnectionOptions,
    RefreshableToken, Result,
};

/// Exchanges the refresh token for a new access token and stores it in place.
///
/// The token is left untouched when any step fails.
pub(crate) fn refresh(
    http: &Client,
    options: &ConnectionOptions,
    token: &mut RefreshableToken,
) -> Result<()> {
    if !token.can_refresh() {
        return Err(AwqlError::InvalidToken);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(client_id = %token.client_id, "refreshing access token");

    let response = http
        .post(&options.token_url)
        .header(header::ACCEPT, "application/json")
        .timeout(Duration::from_millis(options.token_timeout_ms))
        .form(&[
            ("client_id", token.client_id.as_str()),
            ("client_secret", token.client_secret.as_str()),
            ("refresh_token", token.refresh_token.as_str()),
            ("grant_type", "refresh_token"),
        ])
        .send()
        .map_err(AwqlError::NetworkUnreachable)?;

    let status = response.status();
    let body = response.text().map_err(AwqlError::NetworkUnreachable)?;

    match status {
        StatusCode::OK => {}
        StatusCode::BAD_REQUEST => return Err(AwqlError::InvalidToken),
        other => {
            #[cfg(feature = "tracing")]
            tracing::debug!(status = other.as_u16(), "token endpoint unavailable");

            return Err(AwqlError::ServiceUnavailable {
                status: other.as_u16(),
            });
        }
    }

    let fresh: TokenResponse =
        serde_json::from_str(&body).map_err(|_| AwqlError::InvalidToken)?;
    if fresh.expires_in == 0 || fresh.access_token.is_empty() {
        return Err(AwqlError::InvalidToken);
    }

    let expiry = i64::try_from(fresh.expires_in)
        .ok()
        .and_then(chrono::Duration::try_seconds)
        .and_then(|lifetime| Utc::now().checked_add_signed(lifetime))
        .ok_or(AwqlError::InvalidToken)?;

    token.access_token = fresh.access_token;
    token.token_type = if fresh.token_type.is_empty() {
        DEFAULT_TOKEN_TYPE.to_owned()
    } else {
        fresh.token_type
    };
    token.expiry = Some(expiry);

    #[cfg(feature = "tracing")]
    tracing::debug!(expires_in = fresh.expires_in, "access token refreshed");

    Ok(())
}
