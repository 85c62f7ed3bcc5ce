//! 输出面板状态

use std::collections::VecDeque;

use chrono::{DateTime, Local};
use dirmap_core::OutputSink;

/// 输出行级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputLevel {
    Info,
    Error,
}

/// 一行输出
#[derive(Debug, Clone)]
pub struct OutputLine {
    pub time: DateTime<Local>,
    pub level: OutputLevel,
    pub text: String,
}

/// 输出面板
#[derive(Debug)]
pub struct OutputLog {
    lines: VecDeque<OutputLine>,
    capacity: usize,
}

impl OutputLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.push(OutputLevel::Info, text.into());
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push(OutputLevel::Error, text.into());
    }

    fn push(&mut self, level: OutputLevel, text: String) {
        // 多行文本拆成多行；空文本保留为一个空行
        let parts: Vec<&str> = if text.is_empty() {
            vec![""]
        } else {
            text.lines().collect()
        };
        for line in parts {
            if self.lines.len() == self.capacity {
                self.lines.pop_front();
            }
            self.lines.push_back(OutputLine {
                time: Local::now(),
                level,
                text: line.to_string(),
            });
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &OutputLine> {
        self.lines.iter()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl OutputSink for OutputLog {
    fn push_line(&mut self, line: String) {
        self.info(line);
    }
}
