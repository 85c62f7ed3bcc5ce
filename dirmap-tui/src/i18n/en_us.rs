//! 英文翻译 (en-US)

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
            switch_panel: "Switch panel",
            move_up_down: "Move",
            open: "Open",
            refresh: "Refresh",
            add_rule: "Add rule",
            delete_rule: "Delete last rule",
            next_rule: "Next rule",
            run: "Run",
            quit: "Quit",
        },
    },

    panes: PaneTexts {
        source: "Source",
        destination: "Destination",
    },

    rules: RuleTexts {
        title: "Rules",
        slot_title: "Function",
        empty: "No rules. Press F1 to add one.",
    },

    output: OutputTexts {
        title: "Script Output",
        navigation_failed: "Navigation failed",
        run_failed: "Run failed",
    },
};
