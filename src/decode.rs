use std::io::Read;

use crate::{
    wire::{self, ReportDownloadError},
    AwqlError, Result,
};

/// Decodes the XML body of a rejected report request into its message.
///
/// Malformed XML surfaces the parser error itself.
pub fn decode_api_error(body: &[u8]) -> Result<String> {
    if body.is_empty() {
        return Err(AwqlError::MissingDataSource);
    }
    let text = String::from_utf8_lossy(body);
    let envelope: ReportDownloadError = quick_xml::de::from_str(&text)?;
    Ok(api_error_message(&envelope.api_error))
}

pub(crate) fn api_error_message(error: &wire::ApiError) -> String {
    match error.field_path.as_str() {
        "" if error.trigger.is_empty() => error.kind.clone(),
        "" => format!("{} ({})", error.kind, error.trigger),
        "selector" => error.kind.clone(),
        field => format!("{} on {}", error.kind, field),
    }
}

/// Reads a CSV payload into a table of string cells, header row included.
pub(crate) fn decode_table<R: Read>(reader: R) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(reader);

    reader
        .records()
        .map(|record| {
            record
                .map(|record| record.iter().map(str::to_owned).collect())
                .map_err(AwqlError::from)
        })
        .collect()
}
