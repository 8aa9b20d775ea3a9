//! Local supplemental sources and the JSON document writer.
//!
//! Wookieepedia exports come as CSV (one record per row, header-derived
//! keys, every value a string) or as JSON (an array of objects, or a single
//! object). Output documents are pretty-printed with two-space indentation,
//! UTF-8, non-ASCII characters written verbatim, and always overwrite the
//! target file whole.

use std::path::Path;

use holonet_logic::error::{json_type_name, RecordError};
use holonet_logic::record::{into_record, Record};
use serde_json::Value;

use crate::error::ClientError;

/// Read a CSV file into one record per row.
pub fn read_records(path: &Path) -> Result<Vec<Record>, ClientError> {
    let text = std::fs::read_to_string(path).map_err(|source| ClientError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_records(&text).map_err(|source| ClientError::Csv {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse CSV text with a header row. A leading byte-order mark is ignored.
pub fn parse_records(text: &str) -> Result<Vec<Record>, csv::Error> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let record: Record = headers
            .iter()
            .zip(row.iter())
            .map(|(key, value)| (key.to_string(), Value::String(value.to_string())))
            .collect();
        records.push(record);
    }
    Ok(records)
}

/// Read any JSON document.
pub fn read_document(path: &Path) -> Result<Value, ClientError> {
    let text = std::fs::read_to_string(path).map_err(|source| ClientError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ClientError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a JSON array of objects.
pub fn read_record_list(path: &Path) -> Result<Vec<Record>, ClientError> {
    match read_document(path)? {
        Value::Array(items) => Ok(items
            .into_iter()
            .map(into_record)
            .collect::<Result<Vec<_>, _>>()?),
        other => Err(RecordError::NotAList {
            found: json_type_name(&other),
        }
        .into()),
    }
}

/// Read a JSON file holding a single object.
pub fn read_record(path: &Path) -> Result<Record, ClientError> {
    Ok(into_record(read_document(path)?)?)
}

/// Write `document` to `path`, replacing any existing file.
pub fn write_document(path: &Path, document: &Value) -> Result<(), ClientError> {
    let mut text = serde_json::to_string_pretty(document).map_err(|source| ClientError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    text.push('\n');
    std::fs::write(path, text).map_err(|source| ClientError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("wrote {}", path.display());
    Ok(())
}
