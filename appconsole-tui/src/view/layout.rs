//! Main layout

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, Page};

use super::components;
use super::pages;
use super::theme::{colors, Styles};

pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // title bar + content + status bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(size);

    render_title_bar(app, frame, main_layout[0]);

    if app.current_page.is_full_screen() {
        match app.current_page {
            Page::PublicContent { slug } => pages::public::render(app, slug, frame, main_layout[1]),
            _ => pages::login::render(app, frame, main_layout[1]),
        }
    } else if app.sidebar_open {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(24), Constraint::Min(20)])
            .split(main_layout[1]);
        components::navigation::render(app, frame, columns[0]);
        render_page_content(app, frame, columns[1]);
    } else {
        render_page_content(app, frame, main_layout[1]);
    }

    components::statusbar::render(app, frame, main_layout[2]);

    // on top of everything
    components::modal::render(app, frame);
}

fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let texts = t();
    let realm = match app.realm {
        appconsole_api::Realm::Admin => texts.common.admin,
        appconsole_api::Realm::Member => texts.common.member,
    };
    let mut title = format!(" {} · {realm}", texts.common.app_name);
    if let Some(name) = &app.user_name {
        title.push_str(&format!(" · {} {name}", texts.settings.signed_in_as));
    }
    if app.backend.is_busy() {
        title.push_str(&format!(" · {}", texts.common.loading));
    }
    let bar = Paragraph::new(title).style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(bar, area);
}

fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", app.current_page.title()))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_content()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    match app.current_page {
        Page::Canvas => pages::canvas::render(app, frame, inner),
        Page::Panel(kind) => pages::panels::render(app, kind, frame, inner),
        Page::Cutoff => pages::cutoff::render(app, frame, inner),
        Page::Settings => pages::settings::render(app, frame, inner),
        Page::Login | Page::PublicContent { .. } => {}
    }
}
