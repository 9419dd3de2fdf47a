//! Domain error types

use std::fmt;

use thiserror::Error;

/// A location inside the backup payload that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataField {
    /// The `data` object itself.
    Payload,
    /// The `data.tabs` array.
    Tabs,
    /// The `data.scratchpads` array.
    Scratchpads,
}

impl DataField {
    /// Returns the JSON key of this field.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Payload => "data",
            Self::Tabs => "tabs",
            Self::Scratchpads => "scratchpads",
        }
    }
}

impl fmt::Display for DataField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Payload => write!(f, "payload"),
            Self::Tabs => write!(f, "tab"),
            Self::Scratchpads => write!(f, "scratchpad"),
        }
    }
}

/// Errors raised while encoding or decoding a backup document.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The text is not valid JSON.
    #[error("{0}")]
    Parse(#[source] serde_json::Error),

    /// The signature is missing or does not name a known format.
    #[error("Invalid or unrecognized file format. Expected a .nebu file.")]
    UnrecognizedFormat,

    /// A payload section is present but has the wrong shape.
    #[error("Backup file {0} data is corrupted or has an invalid format.")]
    CorruptedData(DataField),

    /// A single record does not match its schema.
    #[error("Backup file {field} record #{index} is invalid: {source}")]
    InvalidRecord {
        /// The array holding the record.
        field: DataField,
        /// Position of the record in its array.
        index: usize,
        /// The underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },

    /// A value could not be serialized to JSON.
    #[error("Could not serialize data to JSON: {0}")]
    Serialization(#[source] serde_json::Error),
}
