//! Canvas editor page state
//!
//! The app configuration lives in a [`DocumentController`]; the screen
//! being edited is copied into a [`CanvasEditor`] and written back into
//! the configuration draft after every change, so publishing always sends
//! what the preview shows.

use appconsole_core::editor::{CanvasEditor, PreviewMode, SettingsSection};
use appconsole_core::panels::DocumentController;
use appconsole_core::types::{AppConfig, HeaderDisplayType};

/// One row of the screen settings form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsRow {
    Section(SettingsSection),
    Title,
    HeaderStyle,
    DisplayType,
    BalanceVariant,
    MenuItem(usize),
    AddMenuItem,
    HeaderFade,
    DragHandle,
    CarouselHeight,
    ActionButton(usize),
    AddActionButton,
    Background,
    SetBackgroundUrl,
    UploadBackground,
}

/// Rows of the settings form; rows of closed sections are left out.
pub fn settings_rows(editor: &CanvasEditor) -> Vec<SettingsRow> {
    let screen = editor.screen();
    let mut rows = Vec::new();
    for section in SettingsSection::ALL {
        rows.push(SettingsRow::Section(section));
        if !editor.is_section_open(section) {
            continue;
        }
        match section {
            SettingsSection::Basic => {
                rows.extend([
                    SettingsRow::Title,
                    SettingsRow::HeaderStyle,
                    SettingsRow::DisplayType,
                ]);
                match screen.header_display_type {
                    HeaderDisplayType::BalanceCards => rows.push(SettingsRow::BalanceVariant),
                    HeaderDisplayType::MenuIcons => {
                        rows.extend(
                            (0..screen.header_menu_items.len()).map(SettingsRow::MenuItem),
                        );
                        rows.push(SettingsRow::AddMenuItem);
                    }
                    HeaderDisplayType::None => {}
                }
            }
            SettingsSection::Display => rows.extend([
                SettingsRow::HeaderFade,
                SettingsRow::DragHandle,
                SettingsRow::CarouselHeight,
            ]),
            SettingsSection::ActionButtons => {
                rows.extend((0..screen.action_buttons.len()).map(SettingsRow::ActionButton));
                rows.push(SettingsRow::AddActionButton);
            }
            SettingsSection::HeaderBackground => {
                if screen.header_background().is_some() {
                    rows.push(SettingsRow::Background);
                }
                rows.extend([SettingsRow::SetBackgroundUrl, SettingsRow::UploadBackground]);
            }
        }
    }
    rows
}

#[derive(Debug, Default)]
pub struct CanvasState {
    pub config: DocumentController<AppConfig>,
    /// Index into the draft's screen list.
    pub screen_index: usize,
    pub editor: Option<CanvasEditor>,
    /// Cursor in [`settings_rows`].
    pub settings_cursor: usize,
    pub mounted: bool,
    pub uploading: bool,
}

impl CanvasState {
    pub fn screen_count(&self) -> usize {
        self.config.draft().screens.len()
    }

    /// Open the screen at `index` in a fresh editor.
    pub fn open_screen(&mut self, index: usize) {
        let mode = self.preview_mode();
        self.screen_index = index.min(self.screen_count().saturating_sub(1));
        self.editor = self
            .config
            .draft()
            .screens
            .get(self.screen_index)
            .cloned()
            .map(|screen| {
                let mut editor = CanvasEditor::new(screen);
                editor.set_preview_mode(mode);
                editor
            });
        self.settings_cursor = 0;
    }

    /// Follow the configuration after it was loaded or saved. An editor
    /// with unpublished changes is kept as it is.
    pub fn sync_editor(&mut self) {
        if self.editor.as_ref().is_some_and(CanvasEditor::is_dirty) {
            return;
        }
        let selected = self.editor.as_ref().and_then(|e| e.selected().map(str::to_string));
        self.open_screen(self.screen_index);
        if let Some(editor) = self.editor.as_mut() {
            editor.select(selected.as_deref());
        }
    }

    /// Write the edited screen back into the configuration draft.
    pub fn commit_editor(&mut self) {
        if let Some(editor) = &self.editor {
            let screen = editor.screen().clone();
            self.config.edit(|config| config.upsert_screen(screen));
        }
    }

    pub fn preview_mode(&self) -> PreviewMode {
        self.editor
            .as_ref()
            .map_or(PreviewMode::Mobile, CanvasEditor::preview_mode)
    }

    pub fn settings_rows(&self) -> Vec<SettingsRow> {
        self.editor.as_ref().map(settings_rows).unwrap_or_default()
    }

    pub fn current_settings_row(&self) -> Option<SettingsRow> {
        self.settings_rows().get(self.settings_cursor).copied()
    }

    /// Keep the settings cursor on a row after sections closed.
    pub fn clamp_settings_cursor(&mut self) {
        let len = self.settings_rows().len();
        if self.settings_cursor >= len {
            self.settings_cursor = len.saturating_sub(1);
        }
    }

    pub fn has_unpublished_changes(&self) -> bool {
        self.config.is_dirty() || self.editor.as_ref().is_some_and(CanvasEditor::is_dirty)
    }
}
