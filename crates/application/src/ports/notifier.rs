//! Notification port

use nebula_domain::Toast;

/// Port for surfacing short messages to the user.
pub trait Notifier: Send + Sync {
    /// Shows a toast.
    fn notify(&self, toast: Toast);
}
