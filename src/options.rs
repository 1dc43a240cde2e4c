/// OAuth token endpoint used to exchange refresh tokens.
pub const TOKEN_URL: &str = "https://accounts.google.com/o/oauth2/token";
/// Report download endpoint; the API version is appended to it.
pub const REPORT_URL: &str = "https://adwords.google.com/api/adwords/reportdownload/";

/// Configures endpoints and timeouts of a connection.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConnectionOptions {
    /// OAuth token endpoint.
    pub token_url: String,
    /// Report download endpoint prefix, suffixed with the API version.
    pub report_url: String,
    /// Token refresh timeout in milliseconds.
    pub token_timeout_ms: u64,
    /// Report download timeout in milliseconds.
    pub report_timeout_ms: u64,
}

impl Default for ConnectionOptions {
    fn default() -> Self {
        Self {
            token_url: TOKEN_URL.to_owned(),
            report_url: REPORT_URL.to_owned(),
            token_timeout_ms: 4_000,
            report_timeout_ms: 30_000,
        }
    }
}

/// Report formatting flags sent as request headers.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ReportOptions {
    pub skip_report_header: bool,
    pub skip_column_header: bool,
    pub skip_report_summary: bool,
    pub include_zero_impressions: bool,
    pub use_raw_enum_values: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            skip_report_header: true,
            skip_column_header: false,
            skip_report_summary: true,
            include_zero_impressions: false,
            use_raw_enum_values: false,
        }
    }
}

impl ReportOptions {
    /// Header name/value pairs in the form the report endpoint expects.
    pub(crate) fn headers(&self) -> [(&'static str, &'static str); 5] {
        [
            ("includeZeroImpressions", bool_str(self.include_zero_impressions)),
            ("skipColumnHeader", bool_str(self.skip_column_header)),
            ("skipReportHeader", bool_str(self.skip_report_header)),
            ("skipReportSummary", bool_str(self.skip_report_summary)),
            ("useRawEnumValues", bool_str(self.use_raw_enum_values)),
        ]
    }
}

fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
