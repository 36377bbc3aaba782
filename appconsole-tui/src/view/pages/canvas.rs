//! Canvas editor page
//!
//! Screen tabs on top, the widget list on the left and either the phone
//! preview or the screen settings on the right.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use appconsole_core::editor::{CanvasEditor, PreviewMode, SettingsSection};
use appconsole_core::preview::{render_canvas, render_mobile, BalanceVariant, HeaderContext};
use appconsole_core::theme::palette_or_default;
use appconsole_core::types::ScreenConfig;

use crate::i18n::t;
use crate::model::state::SettingsRow;
use crate::model::App;
use crate::util::text::fit;
use crate::view::components::{phone, toast};
use crate::view::theme::{colors, Styles};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let canvas = &app.canvas;
    let Some(editor) = &canvas.editor else {
        let message = if canvas.config.is_loading() {
            t().common.loading
        } else {
            t().canvas.no_screens
        };
        let lines = vec![
            Line::from(""),
            Line::styled(format!("  {message}"), Style::default().fg(Color::Gray)),
        ];
        frame.render_widget(Paragraph::new(lines), area);
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    render_tabs(app, frame, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(rows[1]);
    render_widget_list(editor, frame, columns[0]);
    match editor.preview_mode() {
        PreviewMode::Mobile => render_phone(app, editor, frame, columns[1]),
        PreviewMode::Settings => render_settings(app, editor, frame, columns[1]),
    }

    render_footer(app, frame, rows[2]);
}

fn render_tabs(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let mut spans = vec![Span::raw(" ")];
    for (i, screen) in app.canvas.config.draft().screens.iter().enumerate() {
        let style = if i == app.canvas.screen_index {
            Style::default()
                .fg(c.selected_fg)
                .bg(c.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(c.muted)
        };
        spans.push(Span::styled(format!(" {} ", screen.screen), style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_widget_list(editor: &CanvasEditor, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", t().canvas.widgets))
        .borders(Borders::ALL)
        .border_style(Styles::border(editor.preview_mode() == PreviewMode::Mobile));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cards = render_canvas(editor.screen(), editor.selected());
    if cards.is_empty() {
        frame.render_widget(
            Paragraph::new(format!(" {}", t().canvas.empty_screen)).style(Styles::muted()),
            inner,
        );
        return;
    }

    let width = inner.width as usize;
    let selected = cards.iter().position(|card| card.selected);
    let items: Vec<ListItem> = cards
        .iter()
        .map(|card| {
            let kind_style = if card.kind.known {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::Yellow)
            };
            let label_width = card.kind.label.chars().count() + 4;
            ListItem::new(Line::from(vec![
                Span::raw("  "),
                Span::styled(card.kind.label.clone(), kind_style.add_modifier(Modifier::BOLD)),
                Span::raw("  "),
                Span::styled(
                    fit(&card.summary, width.saturating_sub(label_width)),
                    Style::default().fg(Color::Gray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).highlight_style(Styles::selected());
    let mut state = ListState::default();
    state.select(selected);
    frame.render_stateful_widget(list, inner, &mut state);
}

fn render_phone(app: &App, editor: &CanvasEditor, frame: &mut Frame, area: Rect) {
    let draft = app.canvas.config.draft();
    let screen = editor.screen();
    let app_title = draft.app_title.as_deref().unwrap_or(t().common.app_name);
    let ctx = HeaderContext::sample_now(screen.display_title(), app_title);
    let preview = render_mobile(screen, draft.navigation.as_ref(), &ctx, editor.selected());
    let palette = palette_or_default(draft.primary_color());
    phone::render(&preview, &palette, frame, area);
}

fn render_settings(app: &App, editor: &CanvasEditor, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", t().canvas.screen_settings))
        .borders(Borders::ALL)
        .border_style(Styles::border(true));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let screen = editor.screen();
    let rows = app.canvas.settings_rows();
    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| ListItem::new(settings_line(editor, screen, *row, inner.width as usize)))
        .collect();

    let list = List::new(items).highlight_style(Styles::selected());
    let mut state = ListState::default();
    state.select(Some(app.canvas.settings_cursor.min(rows.len().saturating_sub(1))));
    frame.render_stateful_widget(list, inner, &mut state);
}

fn section_label(section: SettingsSection) -> &'static str {
    let texts = &t().canvas;
    match section {
        SettingsSection::Basic => texts.section_basic,
        SettingsSection::Display => texts.section_display,
        SettingsSection::ActionButtons => texts.section_action_buttons,
        SettingsSection::HeaderBackground => texts.section_header_background,
    }
}

fn on_off(value: bool) -> String {
    let common = &t().common;
    if value { common.on } else { common.off }.to_string()
}

fn settings_line(
    editor: &CanvasEditor,
    screen: &ScreenConfig,
    row: SettingsRow,
    width: usize,
) -> Line<'static> {
    let texts = &t().canvas;
    let c = colors();

    let (label, value): (String, Option<String>) = match row {
        SettingsRow::Section(section) => {
            let marker = if editor.is_section_open(section) { "▾" } else { "▸" };
            return Line::styled(
                format!("{marker} {}", section_label(section)),
                Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
            );
        }
        SettingsRow::Title => (
            texts.title.into(),
            Some(screen.title.clone().unwrap_or_default()),
        ),
        SettingsRow::HeaderStyle => (
            texts.header_style.into(),
            Some(format!("◀ {} ▶", screen.header_style.label())),
        ),
        SettingsRow::DisplayType => (
            texts.display_type.into(),
            Some(format!("◀ {} ▶", screen.header_display_type.as_str())),
        ),
        SettingsRow::BalanceVariant => {
            let variant = BalanceVariant::from_number(screen.header_balance_variant);
            (texts.balance_variant.into(), Some(format!("◀ {} ▶", variant.number())))
        }
        SettingsRow::MenuItem(i) => (
            format!("{} {}", texts.menu_icon, i + 1),
            screen.header_menu_items.get(i).map(|item| item.title.clone()),
        ),
        SettingsRow::AddMenuItem => (texts.add_menu_icon.into(), None),
        SettingsRow::HeaderFade => (texts.header_fade.into(), Some(on_off(screen.header_fade))),
        SettingsRow::DragHandle => (texts.drag_handle.into(), Some(on_off(screen.show_drag_handle))),
        SettingsRow::CarouselHeight => (
            texts.carousel_height.into(),
            Some(
                screen
                    .carousel_height
                    .map_or_else(|| t().common.none.to_string(), |h| h.to_string()),
            ),
        ),
        SettingsRow::ActionButton(i) => (
            format!("{} {}", texts.action_button, i + 1),
            screen
                .action_buttons
                .get(i)
                .map(|b| format!("{} → {}", b.icon, b.route)),
        ),
        SettingsRow::AddActionButton => (texts.add_action_button.into(), None),
        SettingsRow::Background => (
            texts.background.into(),
            screen.header_background().map(str::to_string),
        ),
        SettingsRow::SetBackgroundUrl => (texts.set_background_url.into(), None),
        SettingsRow::UploadBackground => (texts.upload_background.into(), None),
    };

    let label = format!("   {label:<22}");
    let value = value
        .map(|v| fit(&v, width.saturating_sub(label.chars().count())))
        .unwrap_or_default();
    Line::from(vec![
        Span::styled(label, Style::default().fg(c.muted)),
        Span::styled(value, Style::default().fg(c.highlight)),
    ])
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let canvas = &app.canvas;
    let line = if canvas.config.is_saving() {
        Line::styled(format!(" {}", texts.canvas.publishing), Style::default().fg(Color::Yellow))
    } else if canvas.uploading {
        Line::styled(format!(" {}", texts.canvas.uploading), Style::default().fg(Color::Yellow))
    } else if let Some(toast) = toast::line(canvas.config.toast()) {
        toast
    } else if canvas.has_unpublished_changes() {
        Line::styled(format!(" * {}", texts.common.unsaved), Style::default().fg(colors().warning))
    } else {
        Line::from("")
    };
    frame.render_widget(Paragraph::new(line), area);
}
