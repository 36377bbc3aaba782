//! Sidebar navigation

use crate::message::NavigationMessage;
use crate::model::{App, FocusPanel, NavItemId};

pub fn update(app: &mut App, msg: NavigationMessage) {
    match msg {
        NavigationMessage::SelectPrevious => app.navigation.select_previous(),
        NavigationMessage::SelectNext => app.navigation.select_next(),
        NavigationMessage::SelectFirst => app.navigation.selected = 0,
        NavigationMessage::SelectLast => {
            app.navigation.selected = app.navigation.items.len().saturating_sub(1);
        }
        NavigationMessage::Confirm => {
            let Some(item) = app.navigation.current_item() else {
                return;
            };
            match (item.id, item.id.page()) {
                (NavItemId::Logout, _) => super::login::logout(app),
                (_, Some(page)) => {
                    super::open_page(app, page);
                    app.focus = FocusPanel::Content;
                }
                (_, None) => {}
            }
        }
    }
}
