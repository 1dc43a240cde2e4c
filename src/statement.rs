use std::time::Duration;

use reqwest::{header, StatusCode};

use crate::{
    decode::decode_api_error,
    params::{bind, count_placeholders},
    AwqlError, Connection, Params, Result, Rows,
};

const REPORT_FORMAT: &str = "CSV";

/// Query prepared on a connection.
///
/// Executing consumes the statement: arguments are bound once, then the
/// report is downloaded.
#[derive(Debug)]
pub struct Statement<'c> {
    conn: &'c mut Connection,
    query: String,
    num_input: usize,
}

impl<'c> Statement<'c> {
    pub(crate) fn new(conn: &'c mut Connection, query: String) -> Self {
        let num_input = count_placeholders(&query);
        Self {
            conn,
            query,
            num_input,
        }
    }

    /// Query text as prepared.
    pub fn sql(&self) -> &str {
        &self.query
    }

    /// Number of `?` placeholders expecting an argument.
    pub fn num_input(&self) -> usize {
        self.num_input
    }

    /// Binds `params`, downloads the report and returns its rows.
    pub fn query<P: Into<Params>>(self, params: P) -> Result<Rows> {
        let payload = self.download(params)?;
        Rows::from_csv(&payload)
    }

    /// Binds `params` and returns the raw CSV payload of the report.
    ///
    /// A failed token refresh is reported as [`AwqlError::InvalidToken`]; call
    /// [`Connection::authenticate`] directly to see why it failed.
    ///
    /// Meant for callers persisting the payload themselves; parse it later
    /// with [`Rows::from_csv`] or [`Rows::from_path`].
    pub fn download<P: Into<Params>>(self, params: P) -> Result<String> {
        let query = bind(&self.query, &params.into())?;

        // Any refresh failure means the statement cannot be authorized.
        self.conn
            .authenticate()
            .map_err(|_| AwqlError::InvalidToken)?;
        download_report(self.conn, &query)
    }

    pub fn close(self) -> Result<()> {
        Ok(())
    }
}

fn download_report(conn: &Connection, query: &str) -> Result<String> {
    let url = format!("{}{}", conn.options.report_url, conn.identity.api_version);

    let mut request = conn
        .http
        .post(&url)
        .header(header::ACCEPT, "*/*")
        .header("clientCustomerId", &conn.identity.account_id)
        .header("developerToken", &conn.identity.developer_token)
        .timeout(Duration::from_millis(conn.options.report_timeout_ms))
        .form(&[("__rdquery", query), ("__fmt", REPORT_FORMAT)]);
    for (name, value) in conn.report.headers() {
        request = request.header(name, value);
    }
    if let Some(credential) = &conn.credential {
        request = request.header(header::AUTHORIZATION, credential.authorization());
    }

    let response = request.send().map_err(AwqlError::NetworkUnreachable)?;
    let status = response.status();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        account_id = %conn.identity.account_id,
        status = status.as_u16(),
        "report download answered"
    );

    match status {
        StatusCode::OK => response.text().map_err(AwqlError::NetworkUnreachable),
        StatusCode::BAD_REQUEST => {
            let body = response.bytes().map_err(AwqlError::NetworkUnreachable)?;
            Err(AwqlError::ApiRejected(decode_api_error(&body)?))
        }
        other => Err(AwqlError::ServiceUnavailable {
            status: other.as_u16(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use crate::{AwqlError, Connection, Value};

    #[test]
    fn counts_inputs_of_the_original_template() {
        let mut conn = Connection::open("123-456-7890|dEve1op3er7okeN").expect("must open");
        let stmt = conn
            .prepare("SELECT x WHERE y = ? AND z = ?")
            .expect("must prepare");
        assert_eq!(stmt.num_input(), 2);
        assert_eq!(stmt.sql(), "SELECT x WHERE y = ? AND z = ?");
    }

    #[test]
    fn mismatched_arguments_fail_before_any_request() {
        let mut conn = Connection::open("123-456-7890|dEve1op3er7okeN|id|secret|refresh")
            .expect("must open");
        let err = conn
            .prepare("SELECT x WHERE y = ? AND z = ?")
            .expect("must prepare")
            .query([Value::integer(1)])
            .expect_err("must fail");
        assert!(matches!(
            err,
            AwqlError::BindingMismatch {
                expected: 2,
                actual: 1
            }
        ));
    }
}
