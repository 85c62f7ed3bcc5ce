//! dirmap Core Library
//!
//! Provides the terminal-independent state behind dirmap:
//! - Directory listing (parent marker + subdirectories)
//! - Navigable directory panes (source / destination)
//! - The ordered rule list and its focus model
//! - The top-level focus cursor
//! - The run hook where a transformation engine plugs in
//!
//! Rendering and key handling live in `dirmap-tui`; nothing here touches the terminal.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{ListingError, ListingResult, NavigationError, RunError};
pub use services::{list_directories, DirectoryPane, RuleListPanel};
pub use traits::{NoopRunner, OutputSink, RuleRunner, RunRequest};
pub use types::{AbsolutePath, DirectoryEntry, FocusCursor, FocusRegion, RuleSlot, PARENT_MARKER};
