//! Settings page

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::state::SettingItem;
use crate::model::App;
use crate::view::theme::colors;

/// Label column, by display width.
const LABEL_WIDTH: usize = 20;
/// Value column including the arrows.
const VALUE_WIDTH: usize = 20;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = &t().settings;
    let c = colors();
    let settings = &app.settings;

    let mut lines = vec![Line::from("")];
    for (i, item) in SettingItem::ALL.iter().enumerate() {
        let (label, value) = match item {
            SettingItem::Theme => (texts.theme, settings.theme.label()),
            SettingItem::Language => (texts.language, settings.language.display_name()),
            SettingItem::Sidebar => (
                texts.sidebar,
                if app.sidebar_open {
                    texts.shown
                } else {
                    texts.hidden
                },
            ),
        };
        lines.push(setting_row(label, value, settings.selected == i));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(""));

    let config = &app.backend.state().config;
    let data_dir = config.resolved_data_dir();
    for (label, value) in [
        (texts.api_base, config.api_base_url.clone()),
        (texts.data_dir, data_dir.display().to_string()),
    ] {
        let padding = LABEL_WIDTH.saturating_sub(label.width());
        lines.push(Line::from(vec![
            Span::styled(format!("  {label}{}", " ".repeat(padding)), Style::default().fg(c.muted)),
            Span::styled(value, Style::default().fg(c.fg)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn setting_row<'a>(label: &'a str, value: &'a str, selected: bool) -> Line<'a> {
    let c = colors();
    let prefix = if selected { "▶ " } else { "  " };
    let label_style = if selected {
        Style::default().fg(c.fg).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.muted)
    };
    let value_style = if selected {
        Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.highlight)
    };

    let label_padding = LABEL_WIDTH.saturating_sub(label.width());
    let space = VALUE_WIDTH.saturating_sub(4);
    let left = space.saturating_sub(value.width()) / 2;
    let right = space.saturating_sub(value.width()).saturating_sub(left);

    Line::from(vec![
        Span::styled(prefix, label_style),
        Span::styled(format!("{label}{}", " ".repeat(label_padding)), label_style),
        Span::styled("◀ ", Style::default().fg(c.muted)),
        Span::styled(
            format!("{}{value}{}", " ".repeat(left), " ".repeat(right)),
            value_style,
        ),
        Span::styled(" ▶", Style::default().fg(c.muted)),
    ])
}
