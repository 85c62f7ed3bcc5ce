//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 区域分类**：文本归属于它出现的区域
//! 2. **输出面板中的消息归 `output.*`**
//! 3. **键盘提示归 `hints.*`**：按键名称和操作提示

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本
    pub common: CommonTexts,
    /// 键盘提示（按键名称 + 动作词）
    pub hints: HintTexts,
    /// 目录面板文本
    pub panes: PaneTexts,
    /// 规则面板文本
    pub rules: RuleTexts,
    /// 输出面板文本
    pub output: OutputTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

pub struct CommonTexts {
    pub app_name: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

pub struct HintTexts {
    pub keys: KeyNames,
    pub actions: ActionTexts,
}

/// 按键名称
pub struct KeyNames {
    pub tab: &'static str,
    pub enter: &'static str,
    pub arrows_ud: &'static str,
    pub down: &'static str,
    pub f1: &'static str,
    pub f2: &'static str,
    pub f9: &'static str,
    pub f10: &'static str,
    pub alt_r: &'static str,
}

/// 动作词
pub struct ActionTexts {
    pub switch_panel: &'static str,
    pub move_up_down: &'static str,
    pub open: &'static str,
    pub refresh: &'static str,
    pub add_rule: &'static str,
    pub delete_rule: &'static str,
    pub next_rule: &'static str,
    pub run: &'static str,
    pub quit: &'static str,
}

// ============================================================================
// 目录面板
// ============================================================================

pub struct PaneTexts {
    pub source: &'static str,
    pub destination: &'static str,
}

// ============================================================================
// 规则面板
// ============================================================================

pub struct RuleTexts {
    pub title: &'static str,
    /// 每个规则编辑框的标题
    pub slot_title: &'static str,
    pub empty: &'static str,
}

// ============================================================================
// 输出面板
// ============================================================================

pub struct OutputTexts {
    pub title: &'static str,
    pub navigation_failed: &'static str,
    pub run_failed: &'static str,
}
