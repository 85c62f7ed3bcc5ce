//!
//! src/backend/mod.rs
//! Backend 层：与 UI 无关的服务
//!
//! 目录与规则的状态由 `dirmap-core` 提供，这里只剩配置服务：
//!     mod config_service;     // 读取 config.json
//!

mod config_service;

pub use config_service::{AppConfig, ConfigService, LocalConfigService};
