//! Login page

use chrono::Utc;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use appconsole_api::Realm;

use crate::i18n::t;
use crate::model::state::LoginStep;
use crate::model::App;
use crate::view::theme::{colors, Styles};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = &t().login;
    let c = colors();
    let login = &app.login;

    let width = 52.min(area.width);
    let height = 14.min(area.height);
    let boxed = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );
    let title = match login.realm {
        Realm::Admin => texts.admin_title,
        Realm::Member => texts.member_title,
    };
    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Styles::border(true));
    let inner = block.inner(boxed);
    frame.render_widget(block, boxed);

    let field = |label: &str, value: &str, placeholder: &str, active: bool| {
        let shown = if value.is_empty() && !active {
            Span::styled(placeholder.to_string(), Style::default().fg(c.muted))
        } else if active {
            Span::styled(
                format!("{value}▎"),
                Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(value.to_string(), Style::default().fg(c.fg))
        };
        vec![
            Line::styled(format!("  {label}"), Style::default().fg(c.muted)),
            Line::from(vec![Span::raw("    "), shown]),
        ]
    };

    let mut lines = vec![Line::from("")];
    match login.step {
        LoginStep::Phone => {
            lines.extend(field(
                texts.phone_label,
                &login.phone,
                texts.phone_placeholder,
                !login.pending,
            ));
        }
        LoginStep::Code => {
            lines.push(Line::from(vec![
                Span::styled(format!("  {} ", texts.code_sent_to), Style::default().fg(c.muted)),
                Span::styled(login.sent_to().to_string(), Style::default().fg(c.fg)),
            ]));
            lines.push(Line::from(""));
            lines.extend(field(texts.code_label, &login.code, "", !login.pending));
            lines.push(Line::from(""));
            let remaining = login.resend_remaining(Utc::now());
            let countdown = if remaining > 0 {
                format!("  {} {remaining}s", texts.resend_in)
            } else {
                format!("  {}", texts.resend_ready)
            };
            lines.push(Line::styled(countdown, Style::default().fg(c.muted)));
        }
    }

    lines.push(Line::from(""));
    if login.pending {
        let busy = match login.step {
            LoginStep::Phone => texts.sending,
            LoginStep::Code => texts.verifying,
        };
        lines.push(Line::styled(format!("  {busy}"), Style::default().fg(Color::Yellow)));
    } else if let Some(error) = &login.error {
        lines.push(Line::styled(format!("  {error}"), Style::default().fg(c.error)));
    } else if let Some(info) = &login.info {
        lines.push(Line::styled(format!("  {info}"), Style::default().fg(c.success)));
    }

    frame.render_widget(
        Paragraph::new(lines).wrap(ratatui::widgets::Wrap { trim: false }),
        inner,
    );
}
