//! Canvas editor page
//!
//! In the phone preview the cursor walks the widgets of the screen; in the
//! settings view it walks the settings rows. Every editor
//! change is committed into the configuration draft right away, and
//! `Save` publishes the whole draft.

use std::path::PathBuf;

use appconsole_core::editor::{CanvasEditor, MoveDirection, PreviewMode};
use appconsole_core::error::CoreResult;
use appconsole_core::panels::{ConfigService, RefreshTicket};
use appconsole_core::preview::BalanceVariant;
use appconsole_core::types::{
    ActionButton, AppConfig, HeaderDisplayType, HeaderMenuItem, HeaderStyle, ScreenConfig,
    WidgetKind,
};

use crate::backend::tasks;
use crate::i18n::t;
use crate::message::ContentMessage;
use crate::model::state::{
    DeleteTarget, FormField, FormRecord, FormTarget, InputTarget, Modal, SettingsRow,
};
use crate::model::{App, Page};
use crate::view::theme;

fn config_service(app: &App) -> ConfigService {
    app.backend.state().document::<AppConfig>(app.realm)
}

// ===== Loading =====

pub fn open(app: &mut App) {
    if !app.canvas.mounted {
        let cached = app.backend.block_on(config_service(app).cached());
        app.canvas.config.mount(cached);
        app.canvas.mounted = true;
        let index = app.canvas.screen_index;
        app.canvas.open_screen(index);
    }
    refresh(app, false);
}

pub fn refresh(app: &mut App, force: bool) {
    let ticket = if force {
        Some(app.canvas.config.force_refresh())
    } else {
        app.canvas.config.begin_refresh()
    };
    if let Some(ticket) = ticket {
        let service = config_service(app);
        app.backend.spawn(tasks::refresh_config(service, ticket));
    }
}

pub fn config_loaded(app: &mut App, ticket: RefreshTicket, result: CoreResult<AppConfig>) {
    if !app.canvas.config.finish_refresh(ticket, result) {
        return;
    }
    app.canvas.sync_editor();
    app.canvas.clamp_settings_cursor();
    follow_brand_color(app);
    if app.current_page == Page::Canvas {
        app.clear_status();
    }
}

/// The console accent tracks the published primary color, falling back to
/// the locally configured one.
fn follow_brand_color(app: &App) {
    let fallback = app.backend.state().config.theme_color.as_deref();
    theme::set_accent(app.canvas.config.value().primary_color().or(fallback));
}

fn publish(app: &mut App) {
    if !app.can_mutate() {
        app.set_status(t().common.read_only);
        return;
    }
    app.canvas.commit_editor();
    let Some(draft) = app.canvas.config.begin_save() else {
        return;
    };
    log::info!("Publishing app configuration ({} screens)", draft.screens.len());
    app.set_status(t().canvas.publishing);
    let service = config_service(app);
    app.backend.spawn(tasks::publish_config(service, draft));
}

pub fn published(app: &mut App, result: CoreResult<AppConfig>) {
    let ok = result.is_ok();
    app.canvas.config.finish_save(result);
    if ok {
        let canvas = &mut app.canvas;
        if let Some(editor) = canvas.editor.as_mut() {
            // Edits made while publishing stay unpublished.
            let published = canvas
                .config
                .value()
                .screens
                .iter()
                .any(|s| s == editor.screen());
            if published {
                editor.mark_saved();
            }
        }
        app.canvas.sync_editor();
        follow_brand_color(app);
    }
    if app.current_page == Page::Canvas {
        app.clear_status();
    }
}

pub fn background_uploaded(app: &mut App, screen: &str, url: Option<String>) {
    app.canvas.uploading = false;
    let editing = app
        .canvas
        .editor
        .as_ref()
        .is_some_and(|e| e.screen().screen == screen);
    if editing {
        mutate(app, |editor| match url {
            Some(url) => editor.add_header_background(url),
            None => editor.report_upload_failure(),
        });
        return;
    }
    // The user moved to another screen meanwhile.
    match url {
        Some(url) => app.canvas.config.edit(|config| {
            if let Some(target) = config.screens.iter_mut().find(|s| s.screen == screen) {
                target.header_background_url.clear();
                target
                    .header_background_url
                    .insert(appconsole_core::types::HEADER_BACKGROUND_KEY.to_string(), url);
            }
        }),
        None => app.set_status(t().canvas.upload_failed),
    }
}

// ===== Editing =====

/// Apply a change to the open editor, surface its alert and write the
/// screen back into the draft.
fn mutate(app: &mut App, change: impl FnOnce(&mut CanvasEditor)) -> bool {
    if !app.can_mutate() {
        app.set_status(t().common.read_only);
        return false;
    }
    let Some(editor) = app.canvas.editor.as_mut() else {
        return false;
    };
    change(editor);
    if let Some(alert) = editor.alert().cloned() {
        app.modal.show(Modal::Alert(alert));
    }
    app.canvas.commit_editor();
    app.canvas.clamp_settings_cursor();
    true
}

fn selected_widget_id(app: &App) -> Option<String> {
    app.canvas
        .editor
        .as_ref()
        .and_then(|e| e.selected().map(str::to_string))
}

fn select_widget_at(app: &mut App, pick: impl FnOnce(Option<usize>, usize) -> usize) {
    let Some(editor) = app.canvas.editor.as_mut() else {
        return;
    };
    let content = &editor.screen().content;
    if content.is_empty() {
        return;
    }
    let current = editor.selected().and_then(|id| editor.screen().position_of(id));
    let index = pick(current, content.len()).min(content.len() - 1);
    let id = content[index].instance_id.clone();
    editor.select(Some(&id));
}

fn move_cursor(app: &mut App, msg: &ContentMessage) {
    if app.canvas.preview_mode() == PreviewMode::Settings {
        let len = app.canvas.settings_rows().len();
        let cursor = &mut app.canvas.settings_cursor;
        match msg {
            ContentMessage::SelectPrevious => *cursor = cursor.saturating_sub(1),
            ContentMessage::SelectNext if *cursor + 1 < len => *cursor += 1,
            ContentMessage::SelectFirst => *cursor = 0,
            ContentMessage::SelectLast => *cursor = len.saturating_sub(1),
            _ => {}
        }
        return;
    }
    match msg {
        ContentMessage::SelectPrevious => {
            select_widget_at(app, |current, _| current.map_or(0, |i| i.saturating_sub(1)));
        }
        ContentMessage::SelectNext => {
            select_widget_at(app, |current, _| current.map_or(0, |i| i + 1));
        }
        ContentMessage::SelectFirst => select_widget_at(app, |_, _| 0),
        ContentMessage::SelectLast => select_widget_at(app, |_, len| len - 1),
        _ => {}
    }
}

fn switch_screen(app: &mut App, forward: bool) {
    let count = app.canvas.screen_count();
    if count == 0 {
        return;
    }
    app.canvas.commit_editor();
    let current = app.canvas.screen_index;
    let next = if forward {
        (current + 1) % count
    } else {
        (current + count - 1) % count
    };
    app.canvas.open_screen(next);
}

pub fn update(app: &mut App, msg: ContentMessage) {
    let settings = app.canvas.preview_mode() == PreviewMode::Settings;
    match msg {
        ContentMessage::SelectPrevious
        | ContentMessage::SelectNext
        | ContentMessage::SelectFirst
        | ContentMessage::SelectLast => move_cursor(app, &msg),

        ContentMessage::TogglePreview => {
            if let Some(editor) = app.canvas.editor.as_mut() {
                let mode = match editor.preview_mode() {
                    PreviewMode::Mobile => PreviewMode::Settings,
                    PreviewMode::Settings => PreviewMode::Mobile,
                };
                editor.set_preview_mode(mode);
            }
        }

        ContentMessage::PrevScreen => switch_screen(app, false),
        ContentMessage::NextScreen => switch_screen(app, true),

        ContentMessage::NewScreen => {
            if !app.can_mutate() {
                app.set_status(t().common.read_only);
                return;
            }
            let f = &t().form;
            app.modal.show_form(
                FormTarget::NewScreen,
                t().modal.new_screen_title,
                vec![FormField::new(f.screen_key, ""), FormField::new(f.title, "")],
            );
        }

        ContentMessage::Save => publish(app),

        ContentMessage::Upload => ask_upload(app),

        ContentMessage::Confirm | ContentMessage::Edit if settings => activate_row(app),
        ContentMessage::Confirm | ContentMessage::Edit => edit_widget(app),

        ContentMessage::Add if settings => match app.canvas.current_settings_row() {
            Some(SettingsRow::ActionButton(_) | SettingsRow::AddActionButton) => {
                mutate(app, |e| {
                    e.add_action_button();
                });
            }
            Some(SettingsRow::MenuItem(_) | SettingsRow::AddMenuItem) => {
                show_menu_item_form(app, None);
            }
            _ => show_widget_picker(app),
        },
        ContentMessage::Add => show_widget_picker(app),

        ContentMessage::Delete => ask_delete(app, settings),

        ContentMessage::Toggle | ContentMessage::ToggleNext if settings => cycle_row(app, true),
        ContentMessage::TogglePrev if settings => cycle_row(app, false),
        ContentMessage::Toggle | ContentMessage::TogglePrev | ContentMessage::ToggleNext => {}

        ContentMessage::Duplicate => {
            if let Some(id) = selected_widget_id(app) {
                mutate(app, |e| {
                    e.duplicate_widget(&id);
                });
            }
        }

        ContentMessage::MoveUp | ContentMessage::MoveDown => {
            let direction = if matches!(msg, ContentMessage::MoveUp) {
                MoveDirection::Up
            } else {
                MoveDirection::Down
            };
            if let Some(id) = selected_widget_id(app) {
                mutate(app, |e| {
                    e.move_widget(&id, direction);
                });
            }
        }
    }
}

fn show_widget_picker(app: &mut App) {
    if !app.can_mutate() {
        app.set_status(t().common.read_only);
        return;
    }
    if app.canvas.editor.is_some() {
        app.modal.show_widget_picker();
    }
}

fn edit_widget(app: &mut App) {
    if !app.can_mutate() {
        app.set_status(t().common.read_only);
        return;
    }
    let Some(widget) = app
        .canvas
        .editor
        .as_ref()
        .and_then(CanvasEditor::selected_widget)
    else {
        return;
    };
    let title = format!("{}: {}", t().modal.edit_title, widget.kind().label());
    let target = FormTarget::Widget {
        instance_id: widget.instance_id.clone(),
    };
    let fields = widget.form_fields();
    app.modal.show_form(target, title, fields);
}

fn show_menu_item_form(app: &mut App, index: Option<usize>) {
    if !app.can_mutate() {
        app.set_status(t().common.read_only);
        return;
    }
    let Some(editor) = app.canvas.editor.as_ref() else {
        return;
    };
    let item = match index {
        Some(i) => match editor.screen().header_menu_items.get(i) {
            Some(item) => item.clone(),
            None => return,
        },
        None => HeaderMenuItem::default(),
    };
    let title = match index {
        Some(_) => format!("{}: {}", t().modal.edit_title, t().canvas.menu_icon),
        None => t().canvas.add_menu_icon.to_string(),
    };
    app.modal
        .show_form(FormTarget::MenuItem(index), title, item.form_fields());
}

fn show_action_button_form(app: &mut App, index: usize) {
    if !app.can_mutate() {
        app.set_status(t().common.read_only);
        return;
    }
    let Some(button) = app
        .canvas
        .editor
        .as_ref()
        .and_then(|e| e.screen().action_buttons.get(index))
    else {
        return;
    };
    let title = format!("{} {}", t().canvas.action_button, index + 1);
    let fields = button.form_fields();
    app.modal
        .show_form(FormTarget::ActionButton(index), title, fields);
}

fn ask_input(app: &mut App, target: InputTarget) {
    if !app.can_mutate() {
        app.set_status(t().common.read_only);
        return;
    }
    let Some(screen) = app.canvas.editor.as_ref().map(CanvasEditor::screen) else {
        return;
    };
    let (c, f, m) = (&t().canvas, &t().form, &t().modal);
    let (title, label, value) = match target {
        InputTarget::ScreenTitle => (c.title, f.title, screen.title.clone().unwrap_or_default()),
        InputTarget::CarouselHeight => (
            c.carousel_height,
            f.height,
            screen.carousel_height.map(|h| h.to_string()).unwrap_or_default(),
        ),
        InputTarget::BackgroundUrl => (
            m.background_url_title,
            f.url,
            screen.header_background().unwrap_or_default().to_string(),
        ),
        InputTarget::UploadBackground => (m.upload_title, f.file_path, String::new()),
    };
    app.modal.show_input(target, title, label, value);
}

fn ask_upload(app: &mut App) {
    if app.canvas.uploading {
        app.set_status(t().canvas.uploading);
        return;
    }
    ask_input(app, InputTarget::UploadBackground);
}

fn activate_row(app: &mut App) {
    let Some(row) = app.canvas.current_settings_row() else {
        return;
    };
    match row {
        SettingsRow::Section(section) => {
            if let Some(editor) = app.canvas.editor.as_mut() {
                editor.toggle_section(section);
            }
            app.canvas.clamp_settings_cursor();
        }
        SettingsRow::Title => ask_input(app, InputTarget::ScreenTitle),
        SettingsRow::CarouselHeight => ask_input(app, InputTarget::CarouselHeight),
        SettingsRow::SetBackgroundUrl | SettingsRow::Background => {
            ask_input(app, InputTarget::BackgroundUrl);
        }
        SettingsRow::UploadBackground => ask_upload(app),
        SettingsRow::MenuItem(i) => show_menu_item_form(app, Some(i)),
        SettingsRow::AddMenuItem => show_menu_item_form(app, None),
        SettingsRow::ActionButton(i) => show_action_button_form(app, i),
        SettingsRow::AddActionButton => {
            mutate(app, |e| {
                e.add_action_button();
            });
        }
        SettingsRow::HeaderStyle
        | SettingsRow::DisplayType
        | SettingsRow::BalanceVariant
        | SettingsRow::HeaderFade
        | SettingsRow::DragHandle => cycle_row(app, true),
    }
}

fn cycle<T: Copy + PartialEq>(all: &[T], current: T, forward: bool) -> T {
    let len = all.len();
    let at = all.iter().position(|v| *v == current).unwrap_or(0);
    let next = if forward { (at + 1) % len } else { (at + len - 1) % len };
    all[next]
}

/// Step the value of a choice row, or flip a switch row.
fn cycle_row(app: &mut App, forward: bool) {
    let Some(row) = app.canvas.current_settings_row() else {
        return;
    };
    match row {
        SettingsRow::HeaderStyle => {
            mutate(app, |e| {
                let next = cycle(HeaderStyle::ALL, e.screen().header_style, forward);
                e.set_header_style(next);
            });
        }
        SettingsRow::DisplayType => {
            mutate(app, |e| {
                let next = cycle(&HeaderDisplayType::ALL, e.screen().header_display_type, forward);
                e.set_header_display_type(next);
            });
        }
        SettingsRow::BalanceVariant => {
            mutate(app, |e| {
                let current = BalanceVariant::from_number(e.screen().header_balance_variant);
                let next = cycle(&BalanceVariant::ALL, current, forward);
                e.set_header_balance_variant(Some(next.number()));
            });
        }
        SettingsRow::HeaderFade => {
            mutate(app, |e| {
                let fade = !e.screen().header_fade;
                e.set_header_fade(fade);
            });
        }
        SettingsRow::DragHandle => {
            mutate(app, |e| {
                let show = !e.screen().show_drag_handle;
                e.set_show_drag_handle(show);
            });
        }
        _ => {}
    }
}

fn ask_delete(app: &mut App, settings: bool) {
    if !app.can_mutate() {
        app.set_status(t().common.read_only);
        return;
    }
    let Some(editor) = app.canvas.editor.as_ref() else {
        return;
    };
    let screen = editor.screen();
    if settings {
        let (target, label) = match app.canvas.current_settings_row() {
            Some(SettingsRow::ActionButton(i)) => (
                DeleteTarget::ActionButton(i),
                format!("{} {}", t().canvas.action_button, i + 1),
            ),
            Some(SettingsRow::MenuItem(i)) => (
                DeleteTarget::HeaderMenuItem(i),
                screen
                    .header_menu_items
                    .get(i)
                    .map(|m| m.title.clone())
                    .unwrap_or_default(),
            ),
            Some(SettingsRow::Background) => (
                DeleteTarget::HeaderBackground,
                t().canvas.background.to_string(),
            ),
            _ => return,
        };
        app.modal.show_confirm_delete(target, label);
        return;
    }
    match editor.selected_widget() {
        Some(widget) => {
            let label = widget
                .title
                .clone()
                .unwrap_or_else(|| widget.kind().label().to_string());
            let target = DeleteTarget::Widget {
                instance_id: widget.instance_id.clone(),
            };
            app.modal.show_confirm_delete(target, label);
        }
        // Nothing selected: the screen itself.
        None => {
            let name = screen.screen.clone();
            let label = screen.display_title().to_string();
            app.modal
                .show_confirm_delete(DeleteTarget::Screen(name), label);
        }
    }
}

// ===== Modal results =====

pub(super) fn pick_widget(app: &mut App, index: usize) {
    if let Some(kind) = WidgetKind::ADDABLE.get(index) {
        mutate(app, |e| {
            e.add_widget(kind);
        });
    }
}

pub(super) fn submit_widget_form(
    app: &mut App,
    instance_id: &str,
    values: &[String],
) -> Result<(), String> {
    let Some(mut widget) = app.canvas.editor.as_ref().and_then(|e| {
        e.screen()
            .position_of(instance_id)
            .map(|i| e.screen().content[i].clone())
    }) else {
        return Err(format!("{} {instance_id}", t().common.no_data));
    };
    widget.apply_form(values)?;
    mutate(app, |e| {
        e.update_widget(instance_id, |w| *w = widget);
    });
    Ok(())
}

pub(super) fn submit_action_button_form(
    app: &mut App,
    index: usize,
    values: &[String],
) -> Result<(), String> {
    let mut button = app
        .canvas
        .editor
        .as_ref()
        .and_then(|e| e.screen().action_buttons.get(index).cloned())
        .unwrap_or_else(ActionButton::default);
    button.apply_form(values)?;
    mutate(app, |e| {
        e.update_action_button(index, |b| *b = button);
    });
    Ok(())
}

pub(super) fn submit_menu_item_form(
    app: &mut App,
    index: Option<usize>,
    values: &[String],
) -> Result<(), String> {
    let existing = index.and_then(|i| {
        app.canvas
            .editor
            .as_ref()
            .and_then(|e| e.screen().header_menu_items.get(i).cloned())
    });
    let mut item = existing.unwrap_or_default();
    item.apply_form(values)?;
    if item.title.is_empty() {
        return Err(format!("{}: {}", t().form.title, t().common.no_data));
    }
    mutate(app, |e| match index {
        Some(i) => {
            e.update_header_menu_item(i, |m| *m = item);
        }
        None => e.add_header_menu_item(item),
    });
    Ok(())
}

pub(super) fn submit_new_screen(app: &mut App, values: &[String]) -> Result<(), String> {
    let key = values.first().map_or("", |v| v.trim());
    if key.is_empty() || key.contains(char::is_whitespace) {
        return Err(format!("{}: '{key}'", t().form.screen_key));
    }
    if app.canvas.config.draft().screen(key).is_some() {
        return Err(format!("{}: '{key}' exists", t().form.screen_key));
    }
    let mut screen = ScreenConfig::new(key);
    screen.title = values
        .get(1)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());
    app.canvas.commit_editor();
    app.canvas.config.edit(|config| config.upsert_screen(screen));
    let last = app.canvas.screen_count().saturating_sub(1);
    app.canvas.open_screen(last);
    log::info!("Added screen '{key}'");
    Ok(())
}

pub(super) fn submit_input(app: &mut App, target: InputTarget, value: &str) -> Result<(), String> {
    let value = value.trim();
    match target {
        InputTarget::ScreenTitle => {
            mutate(app, |e| e.set_title(value));
        }
        InputTarget::CarouselHeight => {
            let height = if value.is_empty() {
                None
            } else {
                Some(
                    value
                        .parse::<u32>()
                        .map_err(|_| format!("{}: '{value}' is not a number", t().form.height))?,
                )
            };
            mutate(app, |e| e.set_carousel_height(height));
        }
        InputTarget::BackgroundUrl => {
            mutate(app, |e| {
                if value.is_empty() {
                    e.remove_header_background(appconsole_core::types::HEADER_BACKGROUND_KEY);
                } else {
                    e.add_header_background(value);
                }
            });
        }
        InputTarget::UploadBackground => {
            if value.is_empty() {
                return Err(format!("{}: {}", t().form.file_path, t().common.no_data));
            }
            let Some(screen) = app
                .canvas
                .editor
                .as_ref()
                .map(|e| e.screen().screen.clone())
            else {
                return Ok(());
            };
            let uploads = app.backend.state().uploads(app.realm);
            app.canvas.uploading = true;
            app.set_status(t().canvas.uploading);
            app.backend.spawn(tasks::upload_background(
                uploads,
                PathBuf::from(value),
                screen,
            ));
        }
    }
    Ok(())
}

pub(super) fn confirm_delete(app: &mut App, target: &DeleteTarget) {
    match target {
        DeleteTarget::Widget { instance_id } => {
            mutate(app, |e| {
                e.delete_widget(instance_id);
            });
        }
        DeleteTarget::ActionButton(i) => {
            mutate(app, |e| {
                e.remove_action_button(*i);
            });
        }
        DeleteTarget::HeaderMenuItem(i) => {
            mutate(app, |e| {
                e.remove_header_menu_item(*i);
            });
        }
        DeleteTarget::HeaderBackground => {
            mutate(app, |e| {
                e.remove_header_background(appconsole_core::types::HEADER_BACKGROUND_KEY);
            });
        }
        DeleteTarget::Screen(name) => {
            if !app.can_mutate() {
                return;
            }
            app.canvas.config.edit(|config| {
                config.remove_screen(name);
            });
            let index = app.canvas.screen_index;
            app.canvas.open_screen(index);
            log::info!("Removed screen '{name}'");
        }
        DeleteTarget::Panel { .. } | DeleteTarget::CutoffTime(_) => {}
    }
}

/// Close the editor alert shown in the modal.
pub(super) fn dismiss_alert(app: &mut App) {
    if let Some(editor) = app.canvas.editor.as_mut() {
        editor.dismiss_alert();
    }
}
