//! Notifier that writes toasts to the log.

use nebula_application::ports::Notifier;
use nebula_domain::{Toast, ToastVariant};
use tracing::{info, warn};

/// Reports toasts as log events: neutral ones at `info`, destructive ones at `warn`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl TracingNotifier {
    /// Creates a new notifier.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Notifier for TracingNotifier {
    fn notify(&self, toast: Toast) {
        match toast.variant {
            ToastVariant::Default => info!(title = %toast.title, "{}", toast.description),
            ToastVariant::Destructive => warn!(title = %toast.title, "{}", toast.description),
        }
    }
}
