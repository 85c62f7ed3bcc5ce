//! Service layer: directory listing, panes and the rule list

mod listing;
mod pane;
mod rules;

pub use listing::list_directories;
pub use pane::DirectoryPane;
pub use rules::RuleListPanel;
