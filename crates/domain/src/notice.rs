//! User-facing notices raised by board actions.

/// Visual weight of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastVariant {
    /// Neutral confirmation.
    #[default]
    Default,
    /// Failure that needs the user's attention.
    Destructive,
}

/// A short notification with a title and description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Headline.
    pub title: String,
    /// Body text.
    pub description: String,
    /// Visual weight.
    pub variant: ToastVariant,
}

impl Toast {
    /// Creates a neutral toast.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Default,
        }
    }

    /// Creates a destructive toast.
    #[must_use]
    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: ToastVariant::Destructive,
            ..Self::new(title, description)
        }
    }

    /// Returns true for destructive toasts.
    #[must_use]
    pub fn is_destructive(&self) -> bool {
        self.variant == ToastVariant::Destructive
    }
}
