//! Settings page

use appconsole_app::ConsoleConfig;

use crate::backend::tasks;
use crate::i18n::{self, t};
use crate::message::ContentMessage;
use crate::model::state::SettingItem;
use crate::model::{App, FocusPanel};
use crate::view::theme;

pub fn update(app: &mut App, msg: ContentMessage) {
    match msg {
        ContentMessage::SelectPrevious => app.settings.select_previous(),
        ContentMessage::SelectNext => app.settings.select_next(),
        ContentMessage::SelectFirst => app.settings.selected = 0,
        ContentMessage::SelectLast => app.settings.selected = SettingItem::ALL.len() - 1,
        ContentMessage::TogglePrev => change(app, false),
        ContentMessage::ToggleNext | ContentMessage::Confirm | ContentMessage::Toggle => {
            change(app, true);
        }
        _ => {}
    }
}

fn change(app: &mut App, forward: bool) {
    match app.settings.current() {
        SettingItem::Theme => {
            let next = if forward {
                app.settings.theme.next()
            } else {
                app.settings.theme.prev()
            };
            app.settings.theme = next;
            theme::set_theme(next);
        }
        SettingItem::Language => {
            let next = if forward {
                app.settings.language.next()
            } else {
                app.settings.language.prev()
            };
            app.settings.language = next;
            i18n::set_language(next);
            log::info!("Language switched to {}", next.code());
            app.backend.spawn(tasks::persist_language(
                ConsoleConfig::default_path(),
                next.code(),
            ));
        }
        SettingItem::Sidebar => {
            app.sidebar_open = !app.sidebar_open;
            if !app.sidebar_open {
                app.focus = FocusPanel::Content;
            }
            let state = app.backend.state().clone();
            app.backend
                .spawn(tasks::persist_sidebar(state, app.sidebar_open));
        }
    }
}

/// A preference finished saving.
pub fn persisted(app: &mut App, result: Result<(), String>) {
    if let Err(e) = result {
        log::warn!("Failed to save preference: {e}");
        app.set_status(format!("{}: {e}", t().modal.error_title));
    }
}
