//! Persistence implementations: file system and key-value stores.

mod file_key_value_store;
mod file_system;
mod memory_key_value_store;

pub use file_key_value_store::*;
pub use file_system::*;
pub use memory_key_value_store::*;
