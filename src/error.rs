/// Error type returned by this crate.
///
/// Display strings follow the `Category.CODE` vocabulary of the report
/// download API so they read the same as errors decoded from the service.
#[derive(Debug, thiserror::Error)]
pub enum AwqlError {
    /// DSN does not have 2, 3 or 5 pipe-separated segments.
    #[error("ConnectionError.BAD_DSN")]
    MalformedConfig,
    /// DSN has an empty account id segment.
    #[error("ConnectionError.ADWORDS_ID")]
    MissingAccountId,
    /// DSN has an empty developer token segment.
    #[error("ConnectionError.DEVELOPER_TOKEN")]
    MissingDeveloperToken,
    /// Credential cannot be refreshed, or the OAuth endpoint rejected it.
    #[error("ConnectionError.INVALID_ACCESS_TOKEN")]
    InvalidToken,
    /// No HTTP response was obtained (connect failure, timeout, broken body).
    #[error("ConnectionError.NOT_FOUND: {0}")]
    NetworkUnreachable(#[source] reqwest::Error),
    /// Upstream answered with an unexpected status code.
    #[error("ConnectionError.SERVICE_UNAVAILABLE (HTTP {status})")]
    ServiceUnavailable { status: u16 },
    /// Structured error decoded from the report download XML envelope.
    #[error("{0}")]
    ApiRejected(String),
    /// Argument count differs from the number of `?` placeholders.
    #[error("QueryError.BINDING_NOT_MATCH: expected {expected} argument(s), got {actual}")]
    BindingMismatch { expected: usize, actual: usize },
    /// Cannot prepare a statement without query text.
    #[error("QueryError.EMPTY_QUERY")]
    EmptyQuery,
    /// The row iterator is exhausted. Normal termination, not a failure.
    #[error("end of data")]
    EndOfData,
    /// Row buffer length differs from the row width.
    #[error("InternalError.COLUMN_MISMATCH: row has {expected} column(s), buffer has {actual}")]
    ColumnMismatch { expected: usize, actual: usize },
    /// An error envelope was expected but the body was empty.
    #[error("InternalError.MISSING_DATA_SOURCE")]
    MissingDataSource,
    /// Malformed XML error envelope.
    #[error(transparent)]
    Xml(#[from] quick_xml::de::DeError),
    /// Malformed CSV payload.
    #[error(transparent)]
    Csv(#[from] csv::Error),
    /// Payload file could not be opened.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AwqlError {
    /// Returns `true` for the end-of-data sentinel raised by [`crate::Rows`].
    pub fn is_end_of_data(&self) -> bool {
        matches!(self, Self::EndOfData)
    }
}
