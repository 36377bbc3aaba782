//! Modal dialogs

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use appconsole_core::editor::EditorAlert;
use appconsole_core::types::WidgetKind;

use crate::i18n::t;
use crate::model::state::{FormField, Modal};
use crate::model::App;
use crate::util::text::{fit, tail};

pub fn render(app: &App, frame: &mut Frame) {
    let Some(modal) = &app.modal.active else {
        return;
    };

    match modal {
        Modal::Help => render_help(frame),
        Modal::Error { title, message } => render_message(frame, title, message, Color::Red),
        Modal::Alert(alert) => {
            let message = match alert {
                EditorAlert::MaxActionButtons => t().canvas.max_buttons_alert,
                EditorAlert::UploadFailed => t().canvas.upload_failed,
            };
            render_message(frame, t().modal.alert_title, message, Color::Yellow);
        }
        Modal::ConfirmDelete { label, focus, .. } => render_confirm_delete(frame, label, *focus),
        Modal::Form {
            title,
            fields,
            focus,
            error,
            ..
        } => render_form(frame, title, fields, *focus, error.as_deref()),
        Modal::WidgetPicker { selected } => render_widget_picker(frame, *selected),
        Modal::Input {
            title,
            label,
            value,
            error,
            ..
        } => render_input(frame, title, label, value, error.as_deref()),
    }
}

/// Centered area of at most `width` x `height`.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Clear the area, draw the frame and return the inner area.
fn dialog(frame: &mut Frame, area: Rect, title: &str, color: Color) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(Color::Black));
    frame.render_widget(block, area);
    Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    )
}

fn render_message(frame: &mut Frame, title: &str, message: &str, color: Color) {
    let area = centered_rect(56, 9, frame.area());
    let inner = dialog(frame, area, title, color);
    let lines = vec![
        Line::from(""),
        Line::styled(message.to_string(), Style::default().fg(Color::White)),
        Line::from(""),
        Line::styled("Enter / Esc", Style::default().fg(Color::DarkGray)),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

fn render_help(frame: &mut Frame) {
    let help = &t().help;
    let height = help.rows.len() as u16 + 4;
    let area = centered_rect(64, height, frame.area());
    let inner = dialog(frame, area, help.title, Color::Cyan);

    let key_width = help
        .rows
        .iter()
        .map(|(keys, _)| keys.width())
        .max()
        .unwrap_or(0);
    let mut lines = vec![Line::from("")];
    for (keys, action) in help.rows {
        let pad = key_width.saturating_sub(keys.width());
        lines.push(Line::from(vec![
            Span::styled(format!("  {keys}{}  ", " ".repeat(pad)), Style::default().fg(Color::Yellow)),
            Span::styled(*action, Style::default().fg(Color::White)),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_confirm_delete(frame: &mut Frame, label: &str, focus: usize) {
    let m = &t().modal;
    let area = centered_rect(48, 9, frame.area());
    let inner = dialog(frame, area, m.confirm_delete_title, Color::Red);

    let cancel_style = if focus == 0 {
        Style::default().fg(Color::Black).bg(Color::White)
    } else {
        Style::default().fg(Color::White)
    };
    let confirm_style = if focus == 1 {
        Style::default().fg(Color::Black).bg(Color::Red)
    } else {
        Style::default().fg(Color::Red)
    };

    let shown = fit(label, inner.width.saturating_sub(4) as usize);
    let lines = vec![
        Line::from(""),
        Line::styled(format!("  {}?", m.confirm_delete_prompt), Style::default().fg(Color::White)),
        Line::styled(format!("  \"{shown}\""), Style::default().fg(Color::Yellow)),
        Line::from(""),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!(" {} ", m.cancel_button), cancel_style),
            Span::raw("    "),
            Span::styled(format!(" {} ", m.delete_button), confirm_style),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_form(
    frame: &mut Frame,
    title: &str,
    fields: &[FormField],
    focus: usize,
    error: Option<&str>,
) {
    // label + value + blank per field, error, hint, borders
    let height = fields.len() as u16 * 3 + 5;
    let area = centered_rect(60, height, frame.area());
    let inner = dialog(frame, area, title, Color::Cyan);
    let value_width = inner.width.saturating_sub(4) as usize;

    let mut lines = Vec::new();
    for (i, field) in fields.iter().enumerate() {
        let focused = i == focus;
        lines.push(Line::styled(field.label, Style::default().fg(Color::Gray)));
        let shown = if focused {
            // keep the end of long values visible while typing
            format!("  {}▎", tail(&field.value, value_width.saturating_sub(1)))
        } else {
            format!("  {}", fit(&field.value, value_width))
        };
        let style = if focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::styled(shown, style));
        lines.push(Line::from(""));
    }
    match error {
        Some(error) => lines.push(Line::styled(error.to_string(), Style::default().fg(Color::Red))),
        None => lines.push(Line::from("")),
    }
    lines.push(Line::styled(t().modal.form_hint, Style::default().fg(Color::DarkGray)));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_input(frame: &mut Frame, title: &str, label: &str, value: &str, error: Option<&str>) {
    let area = centered_rect(60, 9, frame.area());
    let inner = dialog(frame, area, title, Color::Cyan);
    let width = inner.width.saturating_sub(5) as usize;

    let mut lines = vec![
        Line::styled(label.to_string(), Style::default().fg(Color::Gray)),
        Line::styled(
            format!("  {}▎", tail(value, width)),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
    ];
    if let Some(error) = error {
        lines.push(Line::styled(error.to_string(), Style::default().fg(Color::Red)));
    }
    lines.push(Line::styled(t().modal.form_hint, Style::default().fg(Color::DarkGray)));
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_widget_picker(frame: &mut Frame, selected: usize) {
    let height = WidgetKind::ADDABLE.len() as u16 + 4;
    let area = centered_rect(40, height, frame.area());
    let inner = dialog(frame, area, t().modal.add_widget_title, Color::Cyan);

    let mut lines = vec![Line::from("")];
    for (i, kind) in WidgetKind::ADDABLE.iter().enumerate() {
        let line = if i == selected {
            Line::styled(
                format!("▶ {}", kind.label()),
                Style::default().fg(Color::Black).bg(Color::Cyan),
            )
        } else {
            Line::styled(format!("  {}", kind.label()), Style::default().fg(Color::White))
        };
        lines.push(line);
    }
    frame.render_widget(Paragraph::new(lines), inner);
}
