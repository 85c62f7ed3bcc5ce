//! Path helpers shared by the listing and pane services.

pub mod path;

pub use path::{clean, join_clean};
