//! Sidebar navigation

use appconsole_api::Realm;

use crate::i18n::t;
use crate::model::page::{Page, PanelKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItemId {
    Canvas,
    Panel(PanelKind),
    Cutoff,
    Settings,
    Logout,
}

impl NavItemId {
    /// Page the entry opens; `Logout` opens none.
    pub fn page(self) -> Option<Page> {
        match self {
            Self::Canvas => Some(Page::Canvas),
            Self::Panel(kind) => Some(Page::Panel(kind)),
            Self::Cutoff => Some(Page::Cutoff),
            Self::Settings => Some(Page::Settings),
            Self::Logout => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NavItem {
    pub id: NavItemId,
    pub icon: &'static str,
}

impl NavItem {
    const fn new(id: NavItemId, icon: &'static str) -> Self {
        Self { id, icon }
    }

    pub fn label(&self) -> &'static str {
        let nav = &t().nav;
        match self.id {
            NavItemId::Canvas => nav.canvas,
            NavItemId::Panel(kind) => kind.title(),
            NavItemId::Cutoff => nav.cutoff,
            NavItemId::Settings => nav.settings,
            NavItemId::Logout => nav.logout,
        }
    }
}

pub struct NavigationState {
    pub items: Vec<NavItem>,
    pub selected: usize,
}

impl NavigationState {
    /// Entries of a realm's dashboard. Members only browse the catalogue.
    pub fn for_realm(realm: Realm) -> Self {
        let items = match realm {
            Realm::Admin => vec![
                NavItem::new(NavItemId::Canvas, "▣"),
                NavItem::new(NavItemId::Panel(PanelKind::Rewards), "★"),
                NavItem::new(NavItemId::Panel(PanelKind::Promos), "%"),
                NavItem::new(NavItemId::Panel(PanelKind::Feedback), "✉"),
                NavItem::new(NavItemId::Panel(PanelKind::Markdown), "¶"),
                NavItem::new(NavItemId::Panel(PanelKind::Sessions), "@"),
                NavItem::new(NavItemId::Cutoff, "◷"),
                NavItem::new(NavItemId::Panel(PanelKind::ActivityLog), "≡"),
                NavItem::new(NavItemId::Settings, "⚙"),
                NavItem::new(NavItemId::Logout, "⏻"),
            ],
            Realm::Member => vec![
                NavItem::new(NavItemId::Panel(PanelKind::Rewards), "★"),
                NavItem::new(NavItemId::Panel(PanelKind::Promos), "%"),
                NavItem::new(NavItemId::Settings, "⚙"),
                NavItem::new(NavItemId::Logout, "⏻"),
            ],
        };
        Self { items, selected: 0 }
    }

    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn select_next(&mut self) {
        if self.selected < self.items.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    pub fn current_item(&self) -> Option<&NavItem> {
        self.items.get(self.selected)
    }

    /// Move the cursor to the entry of `page`, if it has one.
    pub fn select_page(&mut self, page: Page) {
        if let Some(index) = self.items.iter().position(|i| i.id.page() == Some(page)) {
            self.selected = index;
        }
    }

    /// First page of the dashboard.
    pub fn home(&self) -> Page {
        self.items
            .iter()
            .find_map(|i| i.id.page())
            .unwrap_or(Page::Settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_dashboard_has_no_editor() {
        let nav = NavigationState::for_realm(Realm::Member);
        assert!(nav.items.iter().all(|i| i.id != NavItemId::Canvas));
        assert_eq!(nav.home(), Page::Panel(PanelKind::Rewards));
    }

    #[test]
    fn admin_home_is_the_canvas() {
        let mut nav = NavigationState::for_realm(Realm::Admin);
        assert_eq!(nav.home(), Page::Canvas);
        nav.select_page(Page::Cutoff);
        assert_eq!(nav.current_item().map(|i| i.id), Some(NavItemId::Cutoff));
    }

    #[test]
    fn cursor_stops_at_the_ends() {
        let mut nav = NavigationState::for_realm(Realm::Member);
        nav.select_previous();
        assert_eq!(nav.selected, 0);
        for _ in 0..10 {
            nav.select_next();
        }
        assert_eq!(nav.selected, nav.items.len() - 1);
    }
}
