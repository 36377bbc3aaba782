//! Content area dispatch

use crate::message::ContentMessage;
use crate::model::state::{with_panel, PanelRecord};
use crate::model::{App, Page};

use super::{canvas, cutoff, panels, settings};

pub fn update(app: &mut App, msg: ContentMessage) {
    match app.current_page {
        Page::Canvas => canvas::update(app, msg),
        Page::Panel(kind) => with_panel!(kind, R => list_update::<R>(app, msg)),
        Page::Cutoff => cutoff::update(app, msg),
        Page::Settings => settings::update(app, msg),
        Page::PublicContent { .. } => public_update(app, msg),
        Page::Login => {}
    }
}

fn list_update<R: PanelRecord + Default>(app: &mut App, msg: ContentMessage) {
    let view = R::view_mut(&mut app.panels);
    match msg {
        ContentMessage::SelectPrevious => view.select_previous(),
        ContentMessage::SelectNext => view.select_next(),
        ContentMessage::SelectFirst => view.select_first(),
        ContentMessage::SelectLast => view.select_last(),
        ContentMessage::Add => panels::add::<R>(app),
        ContentMessage::Confirm | ContentMessage::Edit => panels::edit::<R>(app),
        ContentMessage::Delete => panels::ask_delete::<R>(app),
        ContentMessage::Toggle => panels::toggle::<R>(app),
        _ => {}
    }
}

/// Public pages browse the cached markdown documents.
fn public_update(app: &mut App, msg: ContentMessage) {
    let view = &mut app.panels.markdown;
    match msg {
        ContentMessage::SelectPrevious => view.select_previous(),
        ContentMessage::SelectNext => view.select_next(),
        _ => {}
    }
}
