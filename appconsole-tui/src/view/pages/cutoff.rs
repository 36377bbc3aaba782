//! Cutoff times page

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::components::toast;
use crate::view::theme::colors;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let document = &app.cutoff.document;
    let config = document.draft();

    let mut lines = vec![Line::from("")];
    let enabled = if config.enabled {
        Span::styled(texts.common.on, Style::default().fg(c.success))
    } else {
        Span::styled(texts.common.off, Style::default().fg(c.muted))
    };
    lines.push(Line::from(vec![
        Span::styled(format!("  {:<16}", texts.cutoff.enabled), Style::default().fg(c.muted)),
        enabled,
    ]));
    lines.push(Line::from(vec![
        Span::styled(format!("  {:<16}", texts.cutoff.timezone), Style::default().fg(c.muted)),
        Span::styled(config.timezone.clone(), Style::default().fg(c.fg)),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::styled(
        format!("  {}", texts.cutoff.times),
        Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
    ));

    if config.times.is_empty() {
        let message = if document.is_loading() {
            texts.common.loading
        } else {
            texts.cutoff.empty
        };
        lines.push(Line::styled(format!("    {message}"), Style::default().fg(Color::Gray)));
    }
    for (i, time) in config.times.iter().enumerate() {
        let selected = i == app.cutoff.selected;
        let style = if selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let prefix = if selected { "  ▶ " } else { "    " };
        lines.push(Line::styled(format!("{prefix}{:<6} {}", time.time, time.label), style));
    }

    lines.push(Line::from(""));
    if document.is_saving() {
        lines.push(Line::styled(
            format!(" {}", texts.cutoff.saving),
            Style::default().fg(Color::Yellow),
        ));
    } else if document.is_dirty() {
        lines.push(Line::styled(
            format!(" * {}", texts.common.unsaved),
            Style::default().fg(c.warning),
        ));
    }
    if let Some(toast) = toast::line(document.toast()) {
        lines.push(toast);
    }

    frame.render_widget(Paragraph::new(lines), area);
}
