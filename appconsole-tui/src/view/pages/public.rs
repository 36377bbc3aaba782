//! Public content pages
//!
//! Drawn from the cached markdown documents; nothing is fetched without a
//! session.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use appconsole_core::types::MarkdownDoc;

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::Styles;

pub fn render(app: &App, slug: Option<&'static str>, frame: &mut Frame, area: Rect) {
    let view = &app.panels.markdown;
    let docs: Vec<&MarkdownDoc> = view
        .controller
        .items()
        .iter()
        .filter(|doc| doc.published)
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);
    frame.render_widget(
        Paragraph::new(format!(" {}", t().public.login_hint)).style(Styles::muted()),
        chunks[1],
    );

    match slug {
        Some(slug) => {
            let doc = docs.iter().find(|doc| doc.slug == slug).copied();
            render_document(doc, frame, chunks[0]);
        }
        None if docs.is_empty() => render_document(None, frame, chunks[0]),
        None => {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(28), Constraint::Min(20)])
                .split(chunks[0]);
            let selected = view.selected.min(docs.len() - 1);
            let items: Vec<ListItem> = docs
                .iter()
                .map(|doc| ListItem::new(format!(" {}", doc.title)))
                .collect();
            let list = List::new(items)
                .block(
                    Block::default()
                        .title(format!(" {} ", t().public.content_title))
                        .borders(Borders::ALL)
                        .border_style(Styles::border(true)),
                )
                .highlight_style(Styles::selected());
            let mut state = ListState::default();
            state.select(Some(selected));
            frame.render_stateful_widget(list, columns[0], &mut state);
            render_document(Some(docs[selected]), frame, columns[1]);
        }
    }
}

fn render_document(doc: Option<&MarkdownDoc>, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border(false));
    let Some(doc) = doc else {
        let lines = vec![
            Line::from(""),
            Line::styled(format!("  {}", t().public.not_cached), Style::default().fg(Color::Gray)),
        ];
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }).block(block), area);
        return;
    };

    let mut lines = vec![
        Line::styled(
            format!(" {}", doc.title),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
    ];
    lines.extend(doc.content.lines().map(|line| Line::from(format!(" {line}"))));
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }).block(block), area);
}
