//! Encoding and validating `.nebu` text.
//!
//! Decoding runs in stages so each failure maps to a distinct error:
//! JSON syntax, then signature, then payload shape, then individual records.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::{Map, Value};

use super::document::{BackupDocument, RestoredBackup};
use super::format::BackupFormat;
use crate::error::{CodecError, DataField};

/// Serializes a document to indented JSON.
///
/// Output uses 2-space indentation and ends with a newline.
///
/// # Errors
///
/// Returns [`CodecError::Serialization`] if serialization fails.
pub fn encode_document(document: &BackupDocument) -> Result<String, CodecError> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"  ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    document
        .serialize(&mut serializer)
        .map_err(CodecError::Serialization)?;

    // serde_json only emits valid UTF-8
    let mut json = String::from_utf8_lossy(&buffer).into_owned();
    json.push('\n');
    Ok(json)
}

/// Parses and validates backup text.
///
/// Absent or `null` `data`, `data.tabs` and `data.scratchpads` are read as
/// empty. The timestamp is informational and never causes a failure.
///
/// # Errors
///
/// - [`CodecError::Parse`] for malformed JSON
/// - [`CodecError::UnrecognizedFormat`] for a missing or unknown signature
/// - [`CodecError::CorruptedData`] when a payload section has the wrong shape
/// - [`CodecError::InvalidRecord`] when a tab or scratchpad is malformed
pub fn decode_document(text: &str) -> Result<RestoredBackup, CodecError> {
    let root: Value = serde_json::from_str(text).map_err(CodecError::Parse)?;

    let format = root
        .get("signature")
        .and_then(Value::as_str)
        .and_then(BackupFormat::from_signature)
        .ok_or(CodecError::UnrecognizedFormat)?;

    let created_at = root
        .get("timestamp")
        .and_then(Value::as_str)
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|timestamp| timestamp.with_timezone(&Utc));

    let empty = Map::new();
    let data = match root.get(DataField::Payload.key()) {
        None | Some(Value::Null) => &empty,
        Some(Value::Object(data)) => data,
        Some(_) => return Err(CodecError::CorruptedData(DataField::Payload)),
    };

    let tabs = extract_records(data, DataField::Tabs)?;
    let scratchpads = extract_records(data, DataField::Scratchpads)?;

    Ok(RestoredBackup {
        format,
        created_at,
        tabs,
        scratchpads,
    })
}

fn extract_records<T: DeserializeOwned>(
    data: &Map<String, Value>,
    field: DataField,
) -> Result<Vec<T>, CodecError> {
    let items = match data.get(field.key()) {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(_) => return Err(CodecError::CorruptedData(field)),
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            T::deserialize(item).map_err(|source| CodecError::InvalidRecord {
                field,
                index,
                source,
            })
        })
        .collect()
}
