use serde::Deserialize;

/// OAuth refresh grant response.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: u64,
}

/// Body of an HTTP 400 answer from the report download endpoint.
///
/// ```xml
/// <reportDownloadError>
///   <ApiError>
///     <type>ReportDefinitionError.CUSTOMER_SERVING_TYPE_REPORT_MISMATCH</type>
///     <trigger></trigger>
///     <fieldPath>selector</fieldPath>
///   </ApiError>
/// </reportDownloadError>
/// ```
#[derive(Debug, Deserialize)]
#[serde(rename = "reportDownloadError")]
pub struct ReportDownloadError {
    #[serde(rename = "ApiError", alias = "APIError", default)]
    pub api_error: ApiError,
}

#[derive(Debug, Default, Deserialize)]
pub struct ApiError {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub trigger: String,
    #[serde(rename = "fieldPath", default)]
    pub field_path: String,
}
