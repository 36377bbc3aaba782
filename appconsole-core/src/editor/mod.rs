//! Screen/widget editor (Canvas)
//!
//! [`CanvasEditor`] owns the working [`ScreenConfig`] plus UI-local state
//! (preview mode, collapsible settings sections, selection, alert).
//! Every mutation builds the next screen value and swaps it in, bumping
//! [`CanvasEditor::revision`]; previews re-render from [`CanvasEditor::screen`].
//!
//! Widgets are addressed by `instanceId` only. Index-addressed operations
//! (action buttons, header menu items) treat an out-of-range index as a
//! caller bug: nothing changes and a warning is logged.

mod upload;

pub use upload::extract_uploaded_url;

use std::collections::HashSet;

use serde_json::Value;
use uuid::Uuid;

use crate::types::{
    ActionButton, ContentSection, HeaderDisplayType, HeaderMenuItem, HeaderStyle, ScreenConfig,
    WidgetKind, HEADER_BACKGROUND_KEY, MAX_ACTION_BUTTONS,
};

/// Right-hand pane of the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewMode {
    /// Live phone-frame simulation.
    #[default]
    Mobile,
    /// Screen settings form.
    Settings,
}

/// Collapsible sections of the settings form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsSection {
    Basic,
    Display,
    ActionButtons,
    HeaderBackground,
}

impl SettingsSection {
    pub const ALL: [SettingsSection; 4] = [
        Self::Basic,
        Self::Display,
        Self::ActionButtons,
        Self::HeaderBackground,
    ];
}

/// Modal alert raised by an editor action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorAlert {
    /// Tried to add a third action button.
    MaxActionButtons,
    /// An upload response carried no usable URL.
    UploadFailed,
}

/// Keyboard reorder direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// Mutation surface of one screen.
#[derive(Debug, Clone)]
pub struct CanvasEditor {
    screen: ScreenConfig,
    preview_mode: PreviewMode,
    open_sections: HashSet<SettingsSection>,
    selected: Option<String>,
    alert: Option<EditorAlert>,
    dirty: bool,
    revision: u64,
}

/// Fresh instance id for a widget with semantic id `id`, unique among `taken`.
pub fn new_instance_id(id: &str, taken: &HashSet<&str>) -> String {
    let prefix = if id.trim().is_empty() { "widget" } else { id };
    loop {
        let suffix = Uuid::new_v4().simple().to_string();
        let candidate = format!("{prefix}-{}", &suffix[..12]);
        if !taken.contains(candidate.as_str()) {
            return candidate;
        }
    }
}

/// Give every widget a non-empty instance id that is unique within the screen.
///
/// Returns whether anything changed.
fn repair_instance_ids(screen: &mut ScreenConfig) -> bool {
    let mut seen: HashSet<String> = HashSet::new();
    let mut repaired = false;
    for index in 0..screen.content.len() {
        let current = screen.content[index].instance_id.clone();
        if current.is_empty() || seen.contains(&current) {
            let taken: HashSet<&str> = screen
                .content
                .iter()
                .map(|w| w.instance_id.as_str())
                .chain(seen.iter().map(String::as_str))
                .collect();
            let fresh = new_instance_id(&screen.content[index].id, &taken);
            log::info!(
                "Screen '{}': assigning instance id {fresh} to widget #{index}",
                screen.screen
            );
            screen.content[index].instance_id.clone_from(&fresh);
            seen.insert(fresh);
            repaired = true;
        } else {
            seen.insert(current);
        }
    }
    repaired
}

impl CanvasEditor {
    /// Start editing a screen.
    ///
    /// Widgets loaded without an instance id, or with a duplicate one, get
    /// a fresh id; the editor is then dirty so the fix gets published.
    pub fn new(mut screen: ScreenConfig) -> Self {
        let dirty = repair_instance_ids(&mut screen);
        Self {
            screen,
            preview_mode: PreviewMode::default(),
            open_sections: HashSet::from([SettingsSection::Basic]),
            selected: None,
            alert: None,
            dirty,
            revision: 0,
        }
    }

    // ===== Accessors =====

    /// Current screen value.
    pub fn screen(&self) -> &ScreenConfig {
        &self.screen
    }

    /// Consume the editor, returning the edited screen.
    pub fn into_screen(self) -> ScreenConfig {
        self.screen
    }

    /// Incremented by every mutation that changed the screen.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the current screen as published.
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    pub fn preview_mode(&self) -> PreviewMode {
        self.preview_mode
    }

    pub fn set_preview_mode(&mut self, mode: PreviewMode) {
        self.preview_mode = mode;
    }

    pub fn is_section_open(&self, section: SettingsSection) -> bool {
        self.open_sections.contains(&section)
    }

    /// Open a closed section or close an open one.
    pub fn toggle_section(&mut self, section: SettingsSection) {
        if !self.open_sections.remove(&section) {
            self.open_sections.insert(section);
        }
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The selected widget.
    pub fn selected_widget(&self) -> Option<&ContentSection> {
        let id = self.selected.as_deref()?;
        self.screen.content.iter().find(|w| w.instance_id == id)
    }

    /// Select a widget by instance id; unknown ids clear the selection.
    pub fn select(&mut self, instance_id: Option<&str>) {
        self.selected = instance_id
            .filter(|id| self.screen.position_of(id).is_some())
            .map(str::to_string);
    }

    pub fn alert(&self) -> Option<&EditorAlert> {
        self.alert.as_ref()
    }

    pub fn show_max_buttons_alert(&self) -> bool {
        self.alert == Some(EditorAlert::MaxActionButtons)
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Build the next screen from the current one and swap it in.
    fn commit(&mut self, change: impl FnOnce(&mut ScreenConfig)) {
        let mut next = self.screen.clone();
        change(&mut next);
        if next != self.screen {
            self.screen = next;
            self.dirty = true;
            self.revision += 1;
        }
    }

    fn taken_ids(&self) -> HashSet<&str> {
        self.screen
            .content
            .iter()
            .map(|w| w.instance_id.as_str())
            .collect()
    }

    // ===== Action buttons =====

    /// Append the default action button.
    ///
    /// With [`MAX_ACTION_BUTTONS`] already present nothing changes and the
    /// max-buttons alert is raised. Returns whether a button was added.
    pub fn add_action_button(&mut self) -> bool {
        if self.screen.action_buttons.len() >= MAX_ACTION_BUTTONS {
            self.alert = Some(EditorAlert::MaxActionButtons);
            return false;
        }
        self.commit(|s| s.action_buttons.push(ActionButton::default()));
        true
    }

    pub fn remove_action_button(&mut self, index: usize) -> bool {
        if index >= self.screen.action_buttons.len() {
            log::warn!("remove_action_button: index {index} out of range");
            return false;
        }
        self.commit(|s| {
            s.action_buttons.remove(index);
        });
        true
    }

    pub fn update_action_button(
        &mut self,
        index: usize,
        update: impl FnOnce(&mut ActionButton),
    ) -> bool {
        if index >= self.screen.action_buttons.len() {
            log::warn!("update_action_button: index {index} out of range");
            return false;
        }
        self.commit(|s| update(&mut s.action_buttons[index]));
        true
    }

    // ===== Header background =====

    /// Set the header background. Only one is supported: the whole map is
    /// replaced with `{"bg_1": url}`.
    pub fn add_header_background(&mut self, url: impl Into<String>) {
        let url = url.into();
        self.commit(|s| {
            s.header_background_url.clear();
            s.header_background_url
                .insert(HEADER_BACKGROUND_KEY.to_string(), url);
        });
    }

    /// Clear the header background. The whole map is emptied, whatever `key` is.
    pub fn remove_header_background(&mut self, key: &str) {
        log::debug!("Removing header background (requested key '{key}')");
        self.commit(|s| s.header_background_url.clear());
    }

    /// Use an upload response as the header background.
    ///
    /// Returns the extracted URL, or `None` (raising
    /// [`EditorAlert::UploadFailed`]) when the response has no usable URL.
    pub fn apply_background_upload(&mut self, response: &Value, api_base: &str) -> Option<String> {
        let Some(url) = extract_uploaded_url(response, api_base) else {
            self.alert = Some(EditorAlert::UploadFailed);
            return None;
        };
        self.add_header_background(url.clone());
        Some(url)
    }

    /// Raise [`EditorAlert::UploadFailed`] for an upload that produced no URL.
    pub fn report_upload_failure(&mut self) {
        self.alert = Some(EditorAlert::UploadFailed);
    }

    // ===== Widgets =====

    /// Reorder by drag and drop: move `active_id` to the position of `over_id`.
    ///
    /// Nothing happens unless both ids resolve and differ.
    pub fn handle_drag_end(&mut self, active_id: &str, over_id: &str) -> bool {
        if active_id == over_id {
            return false;
        }
        let (Some(from), Some(to)) = (
            self.screen.position_of(active_id),
            self.screen.position_of(over_id),
        ) else {
            return false;
        };
        self.commit(|s| {
            let widget = s.content.remove(from);
            s.content.insert(to, widget);
        });
        true
    }

    /// Move a widget one slot up or down.
    pub fn move_widget(&mut self, instance_id: &str, direction: MoveDirection) -> bool {
        let Some(index) = self.screen.position_of(instance_id) else {
            return false;
        };
        let neighbour = match direction {
            MoveDirection::Up => index.checked_sub(1),
            MoveDirection::Down => Some(index + 1),
        };
        let Some(over) = neighbour
            .and_then(|i| self.screen.content.get(i))
            .map(|w| w.instance_id.clone())
        else {
            return false;
        };
        self.handle_drag_end(instance_id, &over)
    }

    /// Append a widget of `kind` with its defaults and select it.
    pub fn add_widget(&mut self, kind: &WidgetKind) -> String {
        let instance_id = new_instance_id(kind.default_id(), &self.taken_ids());
        let widget = ContentSection::with_defaults(kind, instance_id.clone());
        self.commit(|s| s.content.push(widget));
        self.selected = Some(instance_id.clone());
        instance_id
    }

    /// Edit a widget in place. `instanceId` cannot be changed this way.
    pub fn update_widget(
        &mut self,
        instance_id: &str,
        update: impl FnOnce(&mut ContentSection),
    ) -> bool {
        let Some(index) = self.screen.position_of(instance_id) else {
            log::warn!("update_widget: no widget {instance_id}");
            return false;
        };
        self.commit(|s| {
            let widget = &mut s.content[index];
            update(widget);
            widget.instance_id = instance_id.to_string();
        });
        true
    }

    pub fn delete_widget(&mut self, instance_id: &str) -> bool {
        let Some(index) = self.screen.position_of(instance_id) else {
            return false;
        };
        self.commit(|s| {
            s.content.remove(index);
        });
        if self.selected.as_deref() == Some(instance_id) {
            self.selected = None;
        }
        true
    }

    /// Copy a widget right after itself under a new instance id and select the copy.
    pub fn duplicate_widget(&mut self, instance_id: &str) -> Option<String> {
        let index = self.screen.position_of(instance_id)?;
        let mut copy = self.screen.content[index].clone();
        copy.instance_id = new_instance_id(&copy.id, &self.taken_ids());
        let new_id = copy.instance_id.clone();
        self.commit(|s| s.content.insert(index + 1, copy));
        self.selected = Some(new_id.clone());
        Some(new_id)
    }

    // ===== Screen settings =====

    pub fn set_title(&mut self, title: &str) {
        let title = title.trim();
        let title = (!title.is_empty()).then(|| title.to_string());
        self.commit(|s| s.title = title);
    }

    pub fn set_header_style(&mut self, style: HeaderStyle) {
        self.commit(|s| s.header_style = style);
    }

    pub fn set_header_display_type(&mut self, display: HeaderDisplayType) {
        self.commit(|s| s.header_display_type = display);
    }

    pub fn set_header_fade(&mut self, fade: bool) {
        self.commit(|s| s.header_fade = fade);
    }

    pub fn set_show_drag_handle(&mut self, show: bool) {
        self.commit(|s| s.show_drag_handle = show);
    }

    pub fn set_carousel_height(&mut self, height: Option<u32>) {
        self.commit(|s| s.carousel_height = height);
    }

    pub fn set_header_balance_variant(&mut self, variant: Option<i64>) {
        self.commit(|s| s.header_balance_variant = variant);
    }

    // ===== Header menu icons =====

    pub fn add_header_menu_item(&mut self, item: HeaderMenuItem) {
        self.commit(|s| s.header_menu_items.push(item));
    }

    pub fn update_header_menu_item(
        &mut self,
        index: usize,
        update: impl FnOnce(&mut HeaderMenuItem),
    ) -> bool {
        if index >= self.screen.header_menu_items.len() {
            log::warn!("update_header_menu_item: index {index} out of range");
            return false;
        }
        self.commit(|s| update(&mut s.header_menu_items[index]));
        true
    }

    pub fn remove_header_menu_item(&mut self, index: usize) -> bool {
        if index >= self.screen.header_menu_items.len() {
            log::warn!("remove_header_menu_item: index {index} out of range");
            return false;
        }
        self.commit(|s| {
            s.header_menu_items.remove(index);
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn widget(id: &str, instance_id: &str) -> ContentSection {
        ContentSection {
            id: id.to_string(),
            instance_id: instance_id.to_string(),
            ..ContentSection::default()
        }
    }

    fn abc() -> CanvasEditor {
        let mut screen = ScreenConfig::new("home");
        screen.content = vec![widget("title", "1"), widget("cards", "2"), widget("history", "3")];
        CanvasEditor::new(screen)
    }

    fn order(editor: &CanvasEditor) -> Vec<&str> {
        editor
            .screen()
            .content
            .iter()
            .map(|w| w.instance_id.as_str())
            .collect()
    }

    fn assert_unique_ids(editor: &CanvasEditor) {
        let ids = order(editor);
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len(), "duplicate instance ids: {ids:?}");
    }

    #[test]
    fn add_action_button_caps_at_two() {
        let mut editor = CanvasEditor::new(ScreenConfig::new("home"));
        assert!(editor.add_action_button());
        assert!(editor.add_action_button());
        assert_eq!(
            editor.screen().action_buttons,
            vec![ActionButton::default(), ActionButton::default()]
        );
        assert!(!editor.show_max_buttons_alert());

        let before = editor.screen().clone();
        assert!(!editor.add_action_button());
        assert_eq!(editor.screen(), &before);
        assert!(editor.show_max_buttons_alert());

        editor.dismiss_alert();
        assert!(editor.alert().is_none());
    }

    #[test]
    fn action_button_index_out_of_range_is_noop() {
        let mut editor = CanvasEditor::new(ScreenConfig::new("home"));
        editor.add_action_button();
        let revision = editor.revision();
        assert!(!editor.remove_action_button(3));
        assert!(!editor.update_action_button(1, |b| b.icon = "x".into()));
        assert_eq!(editor.revision(), revision);

        assert!(editor.update_action_button(0, |b| b.icon = "qr".into()));
        assert_eq!(editor.screen().action_buttons[0].icon, "qr");
        assert!(editor.remove_action_button(0));
        assert!(editor.screen().action_buttons.is_empty());
    }

    #[test]
    fn header_background_add_then_remove_is_empty() {
        let mut editor = CanvasEditor::new(ScreenConfig::new("home"));
        editor.add_header_background("https://cdn/a.png");
        editor.add_header_background("https://cdn/b.png");
        assert_eq!(editor.screen().header_background_url.len(), 1);
        assert_eq!(
            editor.screen().header_background_url[HEADER_BACKGROUND_KEY],
            "https://cdn/b.png"
        );

        editor.remove_header_background("whatever");
        assert!(editor.screen().header_background_url.is_empty());
    }

    #[test]
    fn background_upload() {
        let mut editor = CanvasEditor::new(ScreenConfig::new("home"));
        let url = editor.apply_background_upload(
            &json!({"asset": {"filename": "/uploads/bg.png"}}),
            "https://api.example.com",
        );
        assert_eq!(url.as_deref(), Some("https://api.example.com/uploads/bg.png"));
        assert_eq!(
            editor.screen().header_background(),
            Some("https://api.example.com/uploads/bg.png")
        );

        assert!(editor
            .apply_background_upload(&json!({"error": "too big"}), "https://api.example.com")
            .is_none());
        assert_eq!(editor.alert(), Some(&EditorAlert::UploadFailed));
        assert!(editor.screen().header_background().is_some());
    }

    #[test]
    fn drag_b_over_a() {
        let mut editor = abc();
        assert!(editor.handle_drag_end("2", "1"));
        assert_eq!(order(&editor), vec!["2", "1", "3"]);
    }

    #[test]
    fn drag_onto_itself_is_noop() {
        let mut editor = abc();
        let before = editor.screen().clone();
        assert!(!editor.handle_drag_end("2", "2"));
        assert_eq!(editor.screen(), &before);
        assert_eq!(editor.revision(), 0);
        assert!(!editor.is_dirty());
    }

    #[test]
    fn drag_with_unknown_id_is_noop() {
        let mut editor = abc();
        assert!(!editor.handle_drag_end("2", "missing"));
        assert!(!editor.handle_drag_end("missing", "1"));
        assert_eq!(order(&editor), vec!["1", "2", "3"]);
    }

    #[test]
    fn drag_down_moves_after_target() {
        let mut editor = abc();
        assert!(editor.handle_drag_end("1", "3"));
        assert_eq!(order(&editor), vec!["2", "3", "1"]);
    }

    #[test]
    fn keyboard_move() {
        let mut editor = abc();
        assert!(editor.move_widget("3", MoveDirection::Up));
        assert_eq!(order(&editor), vec!["1", "3", "2"]);
        assert!(!editor.move_widget("1", MoveDirection::Up));
        assert!(!editor.move_widget("2", MoveDirection::Down));
    }

    #[test]
    fn duplicate_mints_new_instance_id_after_source() {
        let mut editor = abc();
        let copy = editor.duplicate_widget("2").unwrap();
        assert_ne!(copy, "2");
        assert_eq!(order(&editor)[2], copy);
        assert_eq!(editor.selected(), Some(copy.as_str()));
        assert_eq!(editor.screen().content[2].id, "cards");
        assert_unique_ids(&editor);

        for _ in 0..20 {
            editor.duplicate_widget(&copy);
        }
        assert_unique_ids(&editor);
    }

    #[test]
    fn loaded_duplicates_are_repaired() {
        let mut screen = ScreenConfig::new("home");
        screen.content = vec![widget("title", "x"), widget("title", "x"), widget("cards", "")];
        let editor = CanvasEditor::new(screen);
        assert_unique_ids(&editor);
        assert_eq!(order(&editor)[0], "x");
        assert!(editor.screen().content.iter().all(|w| !w.instance_id.is_empty()));
        assert!(editor.is_dirty());
    }

    #[test]
    fn add_update_delete_widget() {
        let mut editor = abc();
        let id = editor.add_widget(&WidgetKind::BannerSlider);
        assert_eq!(editor.selected(), Some(id.as_str()));
        assert_eq!(editor.selected_widget().map(ContentSection::kind), Some(WidgetKind::BannerSlider));

        assert!(editor.update_widget(&id, |w| {
            w.height = Some(200);
            w.instance_id = "hijack".into();
        }));
        let w = editor.selected_widget().unwrap();
        assert_eq!(w.height, Some(200));
        assert_eq!(w.instance_id, id);

        assert!(editor.delete_widget(&id));
        assert!(editor.selected().is_none());
        assert_eq!(order(&editor), vec!["1", "2", "3"]);
        assert!(!editor.delete_widget(&id));
    }

    #[test]
    fn mutations_replace_screen_and_mark_dirty() {
        let mut editor = abc();
        let before = editor.screen().clone();
        editor.set_header_style(HeaderStyle::NameBalance);
        assert_ne!(editor.screen(), &before);
        assert!(editor.is_dirty());
        assert_eq!(editor.revision(), 1);

        editor.set_header_style(HeaderStyle::NameBalance);
        assert_eq!(editor.revision(), 1);

        editor.mark_saved();
        assert!(!editor.is_dirty());
    }

    #[test]
    fn screen_settings() {
        let mut editor = abc();
        editor.set_title("  Beranda ");
        editor.set_header_display_type(HeaderDisplayType::BalanceCards);
        editor.set_header_fade(true);
        editor.set_show_drag_handle(true);
        editor.set_carousel_height(Some(220));
        editor.set_header_balance_variant(Some(4));
        let s = editor.screen();
        assert_eq!(s.title.as_deref(), Some("Beranda"));
        assert_eq!(s.header_display_type, HeaderDisplayType::BalanceCards);
        assert!(s.header_fade && s.show_drag_handle);
        assert_eq!(s.carousel_height, Some(220));
        assert_eq!(s.header_balance_variant, Some(4));

        editor.set_title("");
        assert_eq!(editor.screen().title, None);
    }

    #[test]
    fn header_menu_items() {
        let mut editor = abc();
        editor.add_header_menu_item(HeaderMenuItem {
            title: "Scan".into(),
            route: Some("/scan".into()),
            ..HeaderMenuItem::default()
        });
        assert!(editor.update_header_menu_item(0, |i| i.text_size = Some(12)));
        assert_eq!(editor.screen().header_menu_items[0].text_size, Some(12));
        assert!(!editor.remove_header_menu_item(5));
        assert!(editor.remove_header_menu_item(0));
        assert!(editor.screen().header_menu_items.is_empty());
    }

    #[test]
    fn ui_state() {
        let mut editor = abc();
        assert_eq!(editor.preview_mode(), PreviewMode::Mobile);
        editor.set_preview_mode(PreviewMode::Settings);
        assert_eq!(editor.preview_mode(), PreviewMode::Settings);

        assert!(editor.is_section_open(SettingsSection::Basic));
        editor.toggle_section(SettingsSection::Basic);
        editor.toggle_section(SettingsSection::HeaderBackground);
        assert!(!editor.is_section_open(SettingsSection::Basic));
        assert!(editor.is_section_open(SettingsSection::HeaderBackground));

        editor.select(Some("2"));
        assert_eq!(editor.selected(), Some("2"));
        editor.select(Some("nope"));
        assert_eq!(editor.selected(), None);
        assert_eq!(editor.revision(), 0);
    }
}
