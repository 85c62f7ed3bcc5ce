//! 命令行参数

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "dirmap",
    version,
    about = "Maps a directory onto a new one given a set of transformations."
)]
pub struct Cli {
    /// Source directory to transform
    pub source: Option<PathBuf>,

    /// Destination directory to write to
    pub destination: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// 目录的角色，用于错误提示
#[derive(Debug, Clone, Copy)]
enum DirectoryRole {
    Source,
    Destination,
}

impl DirectoryRole {
    fn label(self) -> &'static str {
        match self {
            Self::Source => "Source",
            Self::Destination => "Destination",
        }
    }
}

impl Cli {
    /// 校验源/目标目录，缺省时使用当前工作目录
    pub fn directories(&self) -> Result<(PathBuf, PathBuf)> {
        let source = resolve_directory(self.source.clone(), DirectoryRole::Source)?;
        let destination = resolve_directory(self.destination.clone(), DirectoryRole::Destination)?;
        Ok((source, destination))
    }
}

fn resolve_directory(path: Option<PathBuf>, role: DirectoryRole) -> Result<PathBuf> {
    let Some(path) = path else {
        return std::env::current_dir().context("Cannot get current working directory");
    };

    let Ok(metadata) = fs::metadata(&path) else {
        bail!("Cannot stat directory {}", path.display());
    };
    if !metadata.is_dir() {
        bail!("{} directory is not actually a directory!", role.label());
    }
    Ok(path)
}
