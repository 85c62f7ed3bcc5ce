//! 简体中文翻译 (zh-CN)

use super::keys::{
    ActionTexts, CommonTexts, HintTexts, KeyNames, OutputTexts, PaneTexts, RuleTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "dirmap",
    },

    hints: HintTexts {
        keys: KeyNames {
            tab: "Tab",
            enter: "Enter",
            arrows_ud: "↑↓",
            down: "↓",
            f1: "F1",
            f2: "F2",
            f9: "F9",
            f10: "F10",
            alt_r: "Alt+r",
        },
        actions: ActionTexts {
            switch_panel: "切换面板",
            move_up_down: "移动",
            open: "打开",
            refresh: "刷新",
            add_rule: "添加规则",
            delete_rule: "删除末尾规则",
            next_rule: "下一条规则",
            run: "执行",
            quit: "退出",
        },
    },

    panes: PaneTexts {
        source: "源目录",
        destination: "目标目录",
    },

    rules: RuleTexts {
        title: "规则",
        slot_title: "函数",
        empty: "暂无规则，按 F1 添加。",
    },

    output: OutputTexts {
        title: "脚本输出",
        navigation_failed: "无法进入目录",
        run_failed: "执行失败",
    },
};
