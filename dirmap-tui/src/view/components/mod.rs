//! UI 组件

pub mod output;
pub mod pane;
pub mod rules;
pub mod statusbar;
