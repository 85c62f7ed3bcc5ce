//! 目录面板更新逻辑

use dirmap_core::NavigationError;

use crate::i18n::t;
use crate::message::{PaneMessage, PaneSide};
use crate::model::App;

/// 处理目录面板消息
pub fn update(app: &mut App, side: PaneSide, msg: PaneMessage) {
    let pane = app.pane_mut(side);
    match msg {
        PaneMessage::SelectPrevious => pane.select_previous(),
        PaneMessage::SelectNext => pane.select_next(),
        PaneMessage::SelectFirst => pane.select_first(),
        PaneMessage::SelectLast => pane.select_last(),
        PaneMessage::Confirm => {
            let result = pane.confirm();
            report(app, side, result);
        }
        PaneMessage::Refresh => {
            let result = pane.refresh();
            report(app, side, result);
        }
    }
}

/// 导航失败不退出：面板保持原路径，错误写入输出面板
fn report(app: &mut App, side: PaneSide, result: Result<(), NavigationError>) {
    let Err(e) = result else {
        return;
    };
    if e.is_expected() {
        log::warn!("{side:?} pane: {e}");
    } else {
        log::error!("{side:?} pane: {e}");
    }
    app.output
        .error(format!("{}: {e}", t().output.navigation_failed));
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use super::*;
    use crate::model::OutputLevel;
    use crate::test_support::test_app;

    #[test]
    fn test_panes_navigate_independently() {
        let (_tmp, mut app) = test_app();
        let start = app.source.current_path().clone();

        update(&mut app, PaneSide::Source, PaneMessage::SelectNext);
        update(&mut app, PaneSide::Source, PaneMessage::Confirm);

        assert_ne!(app.source.current_path(), &start);
        assert_eq!(app.destination.current_path(), &start);

        update(&mut app, PaneSide::Source, PaneMessage::SelectFirst);
        update(&mut app, PaneSide::Source, PaneMessage::Confirm);
        assert_eq!(app.source.current_path(), &start);
    }

    #[test]
    fn test_refresh_picks_up_new_directory() {
        let (tmp, mut app) = test_app();
        assert_eq!(app.destination.entries().len(), 3);

        fs::create_dir(tmp.path().join("d")).unwrap();
        update(&mut app, PaneSide::Destination, PaneMessage::Refresh);

        assert_eq!(app.destination.entries().len(), 4);
        assert_eq!(app.source.entries().len(), 3);
        assert_eq!(app.output.len(), 0);
    }

    #[test]
    fn test_refresh_of_removed_directory_is_reported() {
        let (tmp, mut app) = test_app();
        update(&mut app, PaneSide::Source, PaneMessage::SelectLast);
        update(&mut app, PaneSide::Source, PaneMessage::Confirm);
        let inside = app.source.current_path().clone();
        fs::remove_dir(tmp.path().join(inside.base_name())).unwrap();

        update(&mut app, PaneSide::Source, PaneMessage::Refresh);

        assert_eq!(app.source.current_path(), &inside);
        let last = app.output.lines().last().unwrap();
        assert_eq!(last.level, OutputLevel::Error);
    }

    #[test]
    fn test_navigation_error_is_reported_not_fatal() {
        let (tmp, mut app) = test_app();
        let start = app.source.current_path().clone();

        update(&mut app, PaneSide::Source, PaneMessage::SelectLast);
        let target = app.source.selected_entry().unwrap().name.clone();
        fs::remove_dir(tmp.path().join(&target)).unwrap();

        update(&mut app, PaneSide::Source, PaneMessage::Confirm);

        assert_eq!(app.source.current_path(), &start);
        assert!(!app.should_quit);
        let last = app.output.lines().last().unwrap();
        assert_eq!(last.level, OutputLevel::Error);
        assert!(last.text.contains(&target));
    }
}
