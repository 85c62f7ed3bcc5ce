//! Extension points consumed by the shell

mod runner;

pub use runner::{NoopRunner, OutputSink, RuleRunner, RunRequest};
