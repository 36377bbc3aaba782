//! List panels

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::state::{with_panel, PanelRecord, PanelView};
use crate::model::{App, PanelKind};
use crate::util::text::fit;
use crate::view::components::toast;

pub fn render(app: &App, kind: PanelKind, frame: &mut Frame, area: Rect) {
    with_panel!(kind, R => render_view(R::view(&app.panels), frame, area));
}

fn render_view<R: PanelRecord>(view: &PanelView<R>, frame: &mut Frame, area: Rect) {
    let controller = &view.controller;
    let footer = toast::line(controller.toast()).or_else(|| {
        controller.is_creating().then(|| {
            Line::styled(
                format!(" {}", t().panels.creating),
                Style::default().fg(Color::Yellow),
            )
        })
    });

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(u16::from(footer.is_some()))])
        .split(area);

    if controller.items().is_empty() {
        render_empty(controller.is_loading(), frame, chunks[0]);
    } else {
        render_list(view, frame, chunks[0]);
    }
    if let Some(footer) = footer {
        frame.render_widget(Paragraph::new(footer), chunks[1]);
    }
}

fn render_empty(loading: bool, frame: &mut Frame, area: Rect) {
    let texts = t();
    let message = if loading {
        texts.common.loading
    } else {
        texts.panels.empty
    };
    let content = vec![
        Line::from(""),
        Line::styled(format!("  {message}"), Style::default().fg(Color::Gray)),
    ];
    frame.render_widget(Paragraph::new(content), area);
}

fn render_list<R: PanelRecord>(view: &PanelView<R>, frame: &mut Frame, area: Rect) {
    let controller = &view.controller;
    let width = area.width as usize;

    let items: Vec<ListItem> = controller
        .items()
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let selected = i == view.selected;
            let busy = controller.is_busy(record.id());

            let (flag_icon, flag_color) = match record.is_active() {
                Some(true) => ("●", Color::Green),
                Some(false) => ("○", Color::Gray),
                None => (" ", Color::Gray),
            };
            let flag = record
                .is_active()
                .map(|active| format!(" [{}]", R::flag_label(active)))
                .unwrap_or_default();
            let busy_mark = if busy {
                format!(" ({}…)", t().panels.busy)
            } else {
                String::new()
            };

            let base = if selected {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default().fg(Color::White)
            };
            let label_style = if selected {
                base.add_modifier(Modifier::BOLD)
            } else {
                base
            };
            let dim = if selected {
                base
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let label = record.label();
            let detail = record.detail();
            let used = 4 + label.chars().count() + flag.chars().count() + busy_mark.chars().count();
            let detail = if detail.is_empty() {
                String::new()
            } else {
                format!("  {}", fit(&detail, width.saturating_sub(used + 2)))
            };

            ListItem::new(Line::from(vec![
                Span::raw("  "),
                Span::styled(flag_icon, Style::default().fg(flag_color)),
                Span::raw(" "),
                Span::styled(label, label_style),
                Span::styled(flag, dim),
                Span::styled(busy_mark, Style::default().fg(Color::Yellow)),
                Span::styled(detail, dim),
            ]))
        })
        .collect();

    let mut state = ListState::default();
    state.select(Some(view.selected));
    frame.render_stateful_widget(List::new(items), area, &mut state);
}
