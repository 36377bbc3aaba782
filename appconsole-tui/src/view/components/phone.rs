//! Phone frame preview
//!
//! Draws a [`MobilePreview`] as text inside a narrow frame. Colors come
//! from the app's own palette, not from the console theme.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use appconsole_core::preview::{
    BalanceCardPreview, LinkPreview, MobilePreview, PreviewNode, SectionPreview, TilePreview,
};
use appconsole_core::theme::Palette;
use appconsole_core::types::HeaderDisplayType;

use crate::i18n::t;
use crate::util::text::{center, fit, pad};
use crate::view::theme::rgb;

/// Columns of the phone screen.
pub const PHONE_WIDTH: u16 = 38;

pub fn render(preview: &MobilePreview, palette: &Palette, frame: &mut Frame, area: Rect) {
    let width = PHONE_WIDTH.min(area.width);
    let area = Rect::new(area.x + (area.width - width) / 2, area.y, width, area.height);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Gray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = inner.width as usize;
    let mut lines = header_lines(preview, palette, cols);
    if preview.show_drag_handle {
        lines.push(Line::styled(center("──────", cols), Style::default().fg(Color::DarkGray)));
    }

    let mut selected_range = None;
    for section in &preview.sections {
        let start = lines.len();
        lines.extend(section_lines(section, palette, cols));
        if section.selected {
            selected_range = Some((start, lines.len()));
        }
    }
    if preview.sections.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            center(t().canvas.empty_screen, cols),
            Style::default().fg(Color::DarkGray),
        ));
    }

    // Keep the bottom bar pinned and the selected widget in view.
    let nav = nav_lines(preview, palette, cols);
    let body_height = (inner.height as usize).saturating_sub(nav.len());
    let scroll = match selected_range {
        Some((start, end)) if end > body_height => (end - body_height).min(start),
        _ => 0,
    };

    let body = Rect::new(inner.x, inner.y, inner.width, body_height as u16);
    frame.render_widget(Paragraph::new(lines).scroll((scroll as u16, 0)), body);

    if !nav.is_empty() {
        let nav_area = Rect::new(
            inner.x,
            inner.y + body_height as u16,
            inner.width,
            nav.len() as u16,
        );
        frame.render_widget(Paragraph::new(nav), nav_area);
    }
}

fn header_lines(preview: &MobilePreview, palette: &Palette, cols: usize) -> Vec<Line<'static>> {
    let header = &preview.header;
    let style = Style::default()
        .bg(rgb(palette.base))
        .fg(rgb(palette.contrast_text));
    let mut lines = Vec::new();

    let buttons: String = header
        .action_buttons
        .iter()
        .map(|b| if b.is_valid() { "◉" } else { "⚠" })
        .collect::<Vec<_>>()
        .join(" ");
    let top_width = cols.saturating_sub(buttons.chars().count() + 1);
    lines.push(Line::styled(
        format!(" {}{buttons}", pad(&header.top_text, top_width)),
        style,
    ));
    lines.push(Line::styled(
        pad(&format!(" {}", header.main_text), cols),
        style.add_modifier(Modifier::BOLD),
    ));
    if let Some(balance) = &header.balance_text {
        lines.push(Line::styled(pad(&format!(" {balance}"), cols), style));
    }

    match header.display {
        HeaderDisplayType::BalanceCards => {
            if let Some(card) = &header.balance_card {
                lines.extend(balance_lines(card, palette, cols));
            }
        }
        HeaderDisplayType::MenuIcons => {
            lines.extend(tile_rows(&header.menu_icons, 4, cols, style));
        }
        HeaderDisplayType::None => {}
    }

    if let Some(url) = &header.background_url {
        let fade = if header.fade { " ░" } else { "" };
        lines.push(Line::styled(
            pad(&format!(" ▨ {}{fade}", fit(url, cols.saturating_sub(6))), cols),
            Style::default().bg(rgb(palette.dark)).fg(rgb(palette.contrast_text)),
        ));
    }
    lines
}

fn balance_lines(card: &BalanceCardPreview, palette: &Palette, cols: usize) -> Vec<Line<'static>> {
    let style = if card.filled {
        Style::default().bg(rgb(palette.dark)).fg(rgb(palette.contrast_text))
    } else {
        Style::default().bg(Color::White).fg(Color::Black)
    };
    let inner = cols.saturating_sub(4);
    let mut lines = Vec::new();
    if card.bordered {
        lines.push(Line::styled(format!(" ┌{}┐ ", "─".repeat(inner)), style));
    }
    for text in &card.lines {
        let body = pad(text, inner);
        let line = if card.bordered {
            format!(" │{body}│ ")
        } else {
            format!("  {body}  ")
        };
        lines.push(Line::styled(line, style));
    }
    if !card.actions.is_empty() {
        let actions = card
            .actions
            .iter()
            .map(|a| format!("[{a}]"))
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(Line::styled(format!("  {}  ", pad(&actions, inner)), style));
    }
    if card.bordered {
        lines.push(Line::styled(format!(" └{}┘ ", "─".repeat(inner)), style));
    }
    lines
}

fn tile_rows(tiles: &[TilePreview], columns: usize, cols: usize, style: Style) -> Vec<Line<'static>> {
    let columns = columns.max(1);
    let cell = (cols / columns).max(1);
    tiles
        .chunks(columns)
        .map(|row| {
            let text: String = row
                .iter()
                .map(|tile| {
                    let marker = if tile.link.is_valid() { "▢" } else { "⚠" };
                    center(&format!("{marker} {}", tile.link.label), cell)
                })
                .collect();
            Line::styled(pad(&text, cols), style)
        })
        .collect()
}

fn link_marker(link: &LinkPreview) -> &'static str {
    if !link.is_valid() {
        " ⚠"
    } else if link.target.is_some() {
        " →"
    } else {
        ""
    }
}

fn section_lines(section: &SectionPreview, palette: &Palette, cols: usize) -> Vec<Line<'static>> {
    let gutter = if section.selected { "▌" } else { " " };
    let gutter_style = Style::default().fg(rgb(palette.base));
    let width = cols.saturating_sub(1);
    let plain = Style::default().fg(Color::White);
    let dim = Style::default().fg(Color::Gray);

    let mut body: Vec<(String, Style)> = Vec::new();
    for _ in 0..section.margin.top.min(24) / 8 {
        body.push((String::new(), plain));
    }
    match &section.node {
        PreviewNode::Title {
            text,
            subtitle,
            text_size,
        } => {
            let style = if *text_size >= 18 {
                plain.add_modifier(Modifier::BOLD)
            } else {
                plain
            };
            body.push((text.clone(), style));
            if let Some(subtitle) = subtitle {
                body.push((subtitle.clone(), dim));
            }
        }
        PreviewNode::BannerSlider {
            height,
            auto_play,
            slides,
        } => {
            let play = if *auto_play { "▶" } else { "❚❚" };
            let first = slides
                .first()
                .map(|s| format!("{}{}", fit(&s.image_url, width.saturating_sub(10)), link_marker(&s.link)))
                .unwrap_or_default();
            let rows = (*height / 60).clamp(2, 5) as usize;
            let fill = Style::default().bg(rgb(palette.lighter)).fg(Color::Black);
            body.push((center(&format!("🖼 {first}"), width), fill));
            for _ in 1..rows {
                body.push((" ".repeat(width), fill));
            }
            let dots: String = (0..slides.len()).map(|i| if i == 0 { "●" } else { "○" }).collect();
            body.push((center(&format!("{dots} {play}"), width), dim));
        }
        PreviewNode::MenuGroup {
            title,
            columns,
            tiles,
        } => {
            if let Some(title) = title {
                body.push((title.clone(), plain.add_modifier(Modifier::BOLD)));
            }
            for line in tile_rows(tiles, *columns as usize, width, plain) {
                body.push((line.to_string(), plain));
            }
        }
        PreviewNode::History { title, rows } => {
            body.push((title.clone(), plain.add_modifier(Modifier::BOLD)));
            for i in 0..*rows {
                body.push((format!("• #{} ·········· Rp ···", i + 1), dim));
            }
        }
        PreviewNode::Cards { title, cards } => {
            if let Some(title) = title {
                body.push((title.clone(), plain.add_modifier(Modifier::BOLD)));
            }
            for card in cards {
                body.push((
                    format!("▭ {}{}", card.link.label, link_marker(&card.link)),
                    plain,
                ));
                if let Some(subtitle) = &card.subtitle {
                    body.push((format!("  {subtitle}"), dim));
                }
            }
        }
        PreviewNode::BalanceCard(card) => {
            for line in balance_lines(card, palette, width) {
                body.push((line.to_string(), Style::default().fg(rgb(palette.base))));
            }
        }
        PreviewNode::Placeholder { id } => {
            body.push((format!("? {}: {id}", t().canvas.unknown_widget), dim));
        }
    }
    for _ in 0..section.margin.bottom.min(24) / 8 {
        body.push((String::new(), plain));
    }

    let mut lines: Vec<Line<'static>> = Vec::new();
    let framed = section.framed;
    if framed {
        body.insert(0, (format!("┌{}┐", "─".repeat(width.saturating_sub(2))), dim));
        body.push((format!("└{}┘", "─".repeat(width.saturating_sub(2))), dim));
    }
    for (text, style) in body {
        lines.push(Line::from(vec![
            Span::styled(gutter, gutter_style),
            Span::styled(fit(&text, width), style),
        ]));
    }
    lines
}

fn nav_lines(preview: &MobilePreview, palette: &Palette, cols: usize) -> Vec<Line<'static>> {
    let Some(nav) = &preview.bottom_nav else {
        return Vec::new();
    };
    let mut labels: Vec<&LinkPreview> = nav.items.iter().collect();
    if let Some(more) = &nav.more {
        labels.push(more);
    }
    if labels.is_empty() {
        return Vec::new();
    }
    let cell = (cols / labels.len()).max(1);
    let text: String = labels
        .iter()
        .map(|l| center(&format!("{}{}", l.label, link_marker(l)), cell))
        .collect();
    vec![
        Line::styled("─".repeat(cols), Style::default().fg(Color::DarkGray)),
        Line::styled(
            pad(&text, cols),
            Style::default().fg(rgb(palette.base)).add_modifier(Modifier::BOLD),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use appconsole_core::preview::{render_mobile, HeaderContext};
    use appconsole_core::theme::palette_or_default;
    use appconsole_core::types::{ScreenConfig, WidgetKind};
    use appconsole_core::editor::CanvasEditor;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(editor: &CanvasEditor, selected: Option<&str>) -> String {
        let ctx = HeaderContext::sample_now("Beranda", "Demo");
        let preview = render_mobile(editor.screen(), None, &ctx, selected);
        let palette = palette_or_default(None);
        let mut terminal = Terminal::new(TestBackend::new(40, 30)).unwrap();
        terminal
            .draw(|frame| render(&preview, &palette, frame, frame.area()))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn empty_screen_says_so() {
        let editor = CanvasEditor::new(ScreenConfig::new("home"));
        assert!(screen_text(&editor, None).contains(t().canvas.empty_screen));
    }

    #[test]
    fn selected_widget_gets_the_gutter() {
        let mut editor = CanvasEditor::new(ScreenConfig::new("home"));
        let id = editor.add_widget(&WidgetKind::Title);
        let text = screen_text(&editor, Some(&id));
        assert!(text.contains('▌'));
    }
}
