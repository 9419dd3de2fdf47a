//! Application use cases (business logic orchestration).

mod board_header;
mod export_backup;
mod import_backup;
mod scratchpads;

pub use board_header::*;
pub use export_backup::*;
pub use import_backup::*;
pub use scratchpads::{LoadScratchpads, SCRATCHPAD_STORAGE_KEY, SaveScratchpads};
