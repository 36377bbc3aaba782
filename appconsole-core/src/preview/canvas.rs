//! Desktop canvas summary of a screen's widgets

use serde::Serialize;

use crate::preview::balance::BalanceVariant;
use crate::preview::mobile::{menu_columns, DEFAULT_BANNER_HEIGHT, DEFAULT_HISTORY_LIMIT};
use crate::types::{ContentSection, ScreenConfig, WidgetKind};

/// One row of the canvas list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanvasCard {
    pub instance_id: String,
    pub kind: WidgetKindLabel,
    /// One-line description of the widget's content.
    pub summary: String,
    pub selected: bool,
}

/// Kind shown on a canvas card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetKindLabel {
    pub label: String,
    pub known: bool,
}

fn count(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("1 {one}")
    } else {
        format!("{n} {many}")
    }
}

/// One-line description of a widget.
pub fn summarize(widget: &ContentSection) -> String {
    match widget.kind() {
        WidgetKind::Title => match (&widget.title, &widget.subtitle) {
            (Some(title), Some(sub)) => format!("\"{title}\" / {sub}"),
            (Some(title), None) => format!("\"{title}\""),
            _ => "(empty title)".to_string(),
        },
        WidgetKind::BannerSlider => format!(
            "{}, {}px",
            count(widget.banners.as_ref().map_or(0, Vec::len), "banner", "banners"),
            widget.height.unwrap_or(DEFAULT_BANNER_HEIGHT)
        ),
        WidgetKind::MenuGroup => format!(
            "{}{}, {} columns",
            widget
                .title
                .as_ref()
                .map(|t| format!("{t}: "))
                .unwrap_or_default(),
            count(widget.items.as_ref().map_or(0, Vec::len), "item", "items"),
            menu_columns(widget)
        ),
        WidgetKind::History => format!(
            "last {} transactions",
            widget.limit.unwrap_or(DEFAULT_HISTORY_LIMIT)
        ),
        WidgetKind::Cards => count(widget.cards.as_ref().map_or(0, Vec::len), "card", "cards"),
        WidgetKind::BalanceCard => {
            format!("variant {}", BalanceVariant::from_number(widget.variant).number())
        }
        WidgetKind::Unknown(id) => format!("unsupported widget '{id}'"),
    }
}

/// Render the canvas list. Pure.
pub fn render_canvas(screen: &ScreenConfig, selected: Option<&str>) -> Vec<CanvasCard> {
    screen
        .content
        .iter()
        .map(|w| {
            let kind = w.kind();
            CanvasCard {
                instance_id: w.instance_id.clone(),
                kind: WidgetKindLabel {
                    label: kind.label().to_string(),
                    known: !matches!(kind, WidgetKind::Unknown(_)),
                },
                summary: summarize(w),
                selected: selected == Some(w.instance_id.as_str()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn cards_follow_content_order() {
        let screen: ScreenConfig = serde_json::from_value(json!({
            "screen": "home",
            "content": [
                {"id": "title", "instanceId": "t", "title": "Halo"},
                {"id": "banner_slider", "instanceId": "b", "banners": [{"imageUrl": "a.png"}]},
                {"id": "balance_card", "instanceId": "c", "variant": 12},
                {"id": "weird", "instanceId": "w"}
            ]
        }))
        .unwrap();
        let cards = render_canvas(&screen, Some("b"));
        let ids: Vec<_> = cards.iter().map(|c| c.instance_id.as_str()).collect();
        assert_eq!(ids, vec!["t", "b", "c", "w"]);
        assert_eq!(cards[0].summary, "\"Halo\"");
        assert_eq!(cards[1].summary, "1 banner, 120px");
        assert!(cards[1].selected);
        assert_eq!(cards[2].summary, "variant 1");
        assert!(!cards[3].kind.known);
    }

    #[test]
    fn zero_columns_read_as_the_default() {
        let screen: ScreenConfig = serde_json::from_value(json!({
            "screen": "home",
            "content": [{"id": "menu_group", "instanceId": "m", "columns": 0, "items": []}]
        }))
        .unwrap();
        let cards = render_canvas(&screen, None);
        assert_eq!(cards[0].summary, "0 items, 4 columns");
    }
}
