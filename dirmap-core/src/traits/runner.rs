//! 规则执行钩子

use serde::Serialize;

use crate::error::RunError;
use crate::types::AbsolutePath;

/// 一次执行请求：源目录、目标目录与按顺序排列的规则
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunRequest<'a> {
    pub source: &'a AbsolutePath,
    pub destination: &'a AbsolutePath,
    pub rules: Vec<String>,
}

/// 执行输出的接收端（逐行）
pub trait OutputSink {
    fn push_line(&mut self, line: String);
}

impl OutputSink for Vec<String> {
    fn push_line(&mut self, line: String) {
        self.push(line);
    }
}

/// 规则执行引擎
///
/// 执行期间产生的文本逐行写入 `output`。
pub trait RuleRunner {
    fn run(&mut self, request: &RunRequest<'_>, output: &mut dyn OutputSink) -> Result<(), RunError>;
}

/// 默认执行器：什么都不做
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRunner;

impl RuleRunner for NoopRunner {
    fn run(&mut self, request: &RunRequest<'_>, _output: &mut dyn OutputSink) -> Result<(), RunError> {
        log::debug!(
            "Run requested ({} -> {}, {} rules); no runner installed",
            request.source,
            request.destination,
            request.rules.len()
        );
        Ok(())
    }
}
