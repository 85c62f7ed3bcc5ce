//! 配置服务

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::i18n::Language;
use crate::view::theme::Theme;

/// 输出面板默认保留的行数
pub const DEFAULT_OUTPUT_CAPACITY: usize = 500;

/// 应用配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub theme: Theme,
    pub language: String,
    pub log_level: String,
    pub output_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            language: "en-US".to_string(),
            log_level: "info".to_string(),
            output_capacity: DEFAULT_OUTPUT_CAPACITY,
        }
    }
}

impl AppConfig {
    /// 解析 JSON 配置，缺省字段取默认值
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// 配置的界面语言，无法识别时为英语
    pub fn language(&self) -> Language {
        Language::from_code(&self.language).unwrap_or_default()
    }
}

/// 配置服务 trait
pub trait ConfigService {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;
}

/// 本地配置服务
pub struct LocalConfigService {
    path: Option<PathBuf>,
}

impl LocalConfigService {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    /// 默认配置文件位置：`<config_dir>/dirmap/config.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("dirmap").join("config.json"))
    }

    fn read(path: &Path) -> Result<Option<String>> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Cannot read config {}", path.display())),
        }
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        let Some(path) = self.path.as_deref() else {
            return Ok(AppConfig::default());
        };
        match Self::read(path)? {
            Some(content) => AppConfig::from_json(&content)
                .with_context(|| format!("Invalid config {}", path.display())),
            None => Ok(AppConfig::default()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = AppConfig::from_json(r#"{ "theme": "light" }"#).unwrap();
        assert!(matches!(config.theme, Theme::Light));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.output_capacity, DEFAULT_OUTPUT_CAPACITY);
        assert_eq!(config.language(), Language::EnUs);
    }

    #[test]
    fn test_language_code() {
        let config = AppConfig::from_json(r#"{ "language": "zh-CN" }"#).unwrap();
        assert_eq!(config.language(), Language::ZhCn);

        let config = AppConfig::from_json(r#"{ "language": "klingon" }"#).unwrap();
        assert_eq!(config.language(), Language::EnUs);
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let service = LocalConfigService::new(Some(dir.path().join("config.json")));
        let config = service.load().unwrap();
        assert_eq!(config.output_capacity, DEFAULT_OUTPUT_CAPACITY);
    }

    #[test]
    fn test_no_config_dir_is_default() {
        let config = LocalConfigService::new(None).load().unwrap();
        assert_eq!(config.language, "en-US");
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        let err = LocalConfigService::new(Some(path)).load().unwrap_err();
        assert!(err.to_string().starts_with("Invalid config"));
    }

    #[test]
    fn test_file_values_are_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "logLevel": "debug", "outputCapacity": 10 }"#).unwrap();
        let config = LocalConfigService::new(Some(path)).load().unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.output_capacity, 10);
    }
}
