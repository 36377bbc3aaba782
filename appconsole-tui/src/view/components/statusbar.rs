//! Status bar

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use appconsole_core::editor::PreviewMode;

use crate::i18n::t;
use crate::model::{App, FocusPanel, Page};
use crate::view::theme::Styles;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    if let Some(msg) = &app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// Key hints for the focused area of the current page.
fn hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let h = &t().hints;
    let mut hints = Vec::new();

    match app.current_page {
        Page::Login => {
            hints.push(("Enter", h.submit));
            hints.push(("Alt+r", h.resend));
            hints.push(("Tab", h.switch_realm));
            hints.push(("Esc", h.back));
            hints.push(("Alt+q", h.quit));
            return hints;
        }
        Page::PublicContent { .. } => {
            hints.push(("↑↓", h.navigate));
            hints.push(("Esc", h.back));
            hints.push(("Alt+q", h.quit));
            return hints;
        }
        _ => {}
    }

    if app.sidebar_open {
        hints.push(("Tab", h.switch_panel));
    }

    match app.focus {
        FocusPanel::Navigation if app.sidebar_open => {
            hints.push(("↑↓", h.navigate));
            hints.push(("Enter", h.open));
        }
        _ => match app.current_page {
            Page::Canvas => {
                hints.push(("↑↓", h.select));
                hints.push(("[ ]", h.screens));
                hints.push(("Alt+p", h.preview));
                if app.can_mutate() {
                    if app.canvas.preview_mode() == PreviewMode::Settings {
                        hints.push(("←→", h.change));
                    } else {
                        hints.push(("Alt+a", h.add));
                        hints.push(("Shift+↑↓", h.reorder));
                        hints.push(("Alt+c", h.duplicate));
                    }
                    hints.push(("Alt+s", h.publish));
                }
            }
            Page::Panel(kind) => {
                hints.push(("↑↓", h.select));
                let caps = kind.capabilities();
                if app.can_mutate() {
                    if caps.create {
                        hints.push(("Alt+a", h.add));
                    }
                    if caps.edit {
                        hints.push(("Alt+e", h.edit));
                    }
                    if caps.toggle {
                        hints.push(("Alt+t", h.toggle));
                    }
                    if caps.delete {
                        hints.push(("Alt+d", h.delete));
                    }
                }
            }
            Page::Cutoff => {
                hints.push(("↑↓", h.select));
                if app.can_mutate() {
                    hints.push(("Alt+a", h.add));
                    hints.push(("Alt+t", h.toggle));
                    hints.push(("Alt+s", h.save));
                }
            }
            Page::Settings => {
                hints.push(("↑↓", h.select));
                hints.push(("←→", h.change));
            }
            Page::Login | Page::PublicContent { .. } => {}
        },
    }

    hints.push(("Alt+r", h.refresh));
    hints.push(("Alt+h", h.help));
    hints.push(("Alt+q", h.quit));
    hints
}
