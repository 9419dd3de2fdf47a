//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod cancellation;
mod clock;
mod file_system;
mod key_value_store;
mod notifier;

pub use cancellation::{CancellationReceiver, CancellationToken};
pub use clock::Clock;
pub use file_system::{FileSystem, FileSystemError};
pub use key_value_store::{KeyValueStore, StorageError};
pub use notifier::Notifier;
