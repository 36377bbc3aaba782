//! Settings page state

use crate::i18n::{self, Language};
use crate::view::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingItem {
    Theme,
    Language,
    Sidebar,
}

impl SettingItem {
    pub const ALL: [SettingItem; 3] = [Self::Theme, Self::Language, Self::Sidebar];
}

#[derive(Debug)]
pub struct SettingsState {
    pub selected: usize,
    pub theme: Theme,
    pub language: Language,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            selected: 0,
            theme: Theme::default(),
            language: i18n::current_language(),
        }
    }
}

impl SettingsState {
    pub fn current(&self) -> SettingItem {
        SettingItem::ALL[self.selected.min(SettingItem::ALL.len() - 1)]
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < SettingItem::ALL.len() {
            self.selected += 1;
        }
    }
}
