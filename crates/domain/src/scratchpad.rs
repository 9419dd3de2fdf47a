//! Scratchpad document record.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A freeform text document that tabs can link to.
///
/// Timestamps are kept as the ISO-8601 text they were stored with, so
/// records written by other clients round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scratchpad {
    /// Unique identifier.
    pub id: String,

    /// Document title.
    pub title: String,

    /// Document body.
    pub content: String,

    /// Creation time (ISO-8601).
    pub created_at: String,

    /// Last modification time (ISO-8601).
    pub updated_at: String,
}

impl Scratchpad {
    /// Creates a scratchpad whose creation and update times are both `now`.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        let stamp = iso_timestamp(now);
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            created_at: stamp.clone(),
            updated_at: stamp,
        }
    }

    /// Replaces the content and bumps `updated_at`.
    pub fn edit(&mut self, content: impl Into<String>, now: DateTime<Utc>) {
        self.content = content.into();
        self.updated_at = iso_timestamp(now);
    }
}

// Millisecond precision with a `Z` suffix, e.g. `2024-03-01T10:00:00.000Z`.
fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
