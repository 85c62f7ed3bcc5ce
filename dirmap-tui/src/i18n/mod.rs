//! 国际化
//!
//! 所有界面文本通过 `t()` 获取，语言在启动时由配置决定。

use std::sync::atomic::{AtomicUsize, Ordering};

mod en_us;
pub mod keys;
mod zh_cn;

pub use keys::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// 英语（美国）
    #[default]
    EnUs,
    /// 简体中文（中国）
    ZhCn,
}

impl Language {
    /// 从语言代码解析
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en-US" | "en" => Some(Language::EnUs),
            "zh-CN" | "zh" => Some(Language::ZhCn),
            _ => None,
        }
    }
}

static CURRENT_LANGUAGE: AtomicUsize = AtomicUsize::new(0); // 0 = EnUs

pub fn t() -> &'static Translations {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => &zh_cn::TRANSLATIONS,
        _ => &en_us::TRANSLATIONS,
    }
}

pub fn set_language(lang: Language) {
    let index = match lang {
        Language::EnUs => 0,
        Language::ZhCn => 1,
    };
    CURRENT_LANGUAGE.store(index, Ordering::Relaxed);
}
