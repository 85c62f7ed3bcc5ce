//! Data types shared across the services

mod entry;
mod focus;
mod path;
mod rule;

pub use entry::{DirectoryEntry, PARENT_MARKER};
pub use focus::{FocusCursor, FocusRegion};
pub use path::AbsolutePath;
pub use rule::RuleSlot;
