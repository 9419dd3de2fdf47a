//! Board tab record.

use serde::{Deserialize, Serialize};

/// A saved browser tab, shown as a card on the board.
///
/// Serialized with camelCase keys; optional fields are omitted when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    /// Unique identifier. Uniqueness is not enforced here.
    pub id: String,

    /// Page title.
    pub title: String,

    /// Page URL.
    pub url: String,

    /// Free-text notes.
    pub notes: String,

    /// Ordered tag list.
    pub tags: Vec<String>,

    /// Preview image reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Identifier of the scratchpad this tab links to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_scratchpad_id: Option<String>,
}

impl Tab {
    /// Creates a tab with empty notes and no tags.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            url: url.into(),
            notes: String::new(),
            tags: Vec::new(),
            image_url: None,
            linked_scratchpad_id: None,
        }
    }

    /// Sets the notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Appends a tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Sets the preview image reference.
    #[must_use]
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Links the tab to a scratchpad.
    #[must_use]
    pub fn linked_to(mut self, scratchpad_id: impl Into<String>) -> Self {
        self.linked_scratchpad_id = Some(scratchpad_id.into());
        self
    }
}
