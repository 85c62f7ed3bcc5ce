//! dirmap TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置服务 (`backend/`)
//!
//! 目录列表、面板导航与规则列表的状态都在 `dirmap-core` 中，
//! 这里只负责把按键翻译成消息、更新状态并渲染。
//!
//!
//! main.rs 执行：
//!
//!     Cli::parse()            // 解析并校验源/目标目录
//!     load_config()           // 读取配置（主题、语言、日志级别）
//!     init_logging()          // 日志写入文件（终端处于原始模式）
//!     model::App::new()       // 构建两个目录面板，失败则直接退出
//!     init_terminal()
//!     app::run()              // 主循环，直到 F10 退出
//!     restore_terminal()      // 无论成功与否，都恢复终端

mod app;
mod backend;
mod cli;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

#[cfg(test)]
mod test_support;

use anyhow::{Context, Result};
use clap::Parser;
use dirmap_core::NoopRunner;

use backend::{AppConfig, ConfigService, LocalConfigService};
use cli::Cli;
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 解析参数并校验目录
    let cli = Cli::parse();
    let (source, destination) = cli.directories()?;

    // 2. 加载配置
    let config = load_config(&cli);
    view::theme::set_theme(config.theme);
    i18n::set_language(config.language());

    // 3. 初始化日志
    if let Some(log_path) = init_logging(&config.log_level) {
        log::info!(
            "dirmap started: {} -> {} (log file {})",
            source.display(),
            destination.display(),
            log_path.display()
        );
    }

    // 4. 创建应用实例（在进入备用屏幕前，以便错误正常输出）
    let mut app = model::App::new(
        &source,
        &destination,
        config.output_capacity,
        Box::new(NoopRunner),
    )
    .context("Cannot start session")?;

    // 5. 初始化终端并运行主循环
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app);

    // 6. 恢复终端（无论成功失败都执行）
    let restored = restore_terminal(&mut terminal);
    finish_session(result, restored)
}

/// 记录会话结果；主循环的错误优先于恢复终端的错误
fn finish_session(result: Result<()>, restored: Result<()>) -> Result<()> {
    match &result {
        Err(e) => log::error!("Session ended abnormally: {e:#}"),
        Ok(()) => log::info!("Session ended"),
    }
    if let Err(e) = restored {
        log::error!("Cannot restore terminal: {e:#}");
        return result.and(Err(e));
    }
    result
}

/// 读取配置文件；格式错误时提示并使用默认值
fn load_config(cli: &Cli) -> AppConfig {
    let service = LocalConfigService::new(
        cli.config
            .clone()
            .or_else(LocalConfigService::default_path),
    );
    match service.load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: {e:#}; using default settings");
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;

    use super::*;

    #[test]
    fn test_loop_error_wins_over_restore_error() {
        let err = finish_session(Err(anyhow!("loop")), Err(anyhow!("restore"))).unwrap_err();
        assert_eq!(err.to_string(), "loop");
    }

    #[test]
    fn test_restore_error_is_returned_after_clean_loop() {
        let err = finish_session(Ok(()), Err(anyhow!("restore"))).unwrap_err();
        assert_eq!(err.to_string(), "restore");
    }

    #[test]
    fn test_clean_session() {
        assert!(finish_session(Ok(()), Ok(())).is_ok());
    }
}
