//! Widget (`ContentSection`) model
//!
//! A widget is discriminated by its free-form `id`. The known ids select a
//! rendering branch; any other id that carries `items` is a menu group.
//! Identity for selection, reorder, delete and duplicate is `instanceId`,
//! never `id`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::navigation::RouteArgs;

/// Known widget ids.
pub mod ids {
    pub const TITLE: &str = "title";
    pub const BANNER_SLIDER: &str = "banner_slider";
    pub const HISTORY: &str = "history";
    pub const CARDS: &str = "cards";
    pub const BALANCE_CARD: &str = "balance_card";
    /// Default id given to new menu groups. Any unknown id with `items` is a menu group too.
    pub const MENU_GROUP: &str = "menu_group";
}

/// Rendering branch of a widget, derived from `id` and payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    Title,
    BannerSlider,
    MenuGroup,
    History,
    Cards,
    BalanceCard,
    /// Unrecognized id without `items`; rendered as a placeholder.
    Unknown(String),
}

impl WidgetKind {
    /// Kinds offered by the "add widget" palette, in palette order.
    pub const ADDABLE: [WidgetKind; 6] = [
        Self::Title,
        Self::BannerSlider,
        Self::MenuGroup,
        Self::History,
        Self::Cards,
        Self::BalanceCard,
    ];

    /// Display name.
    pub fn label(&self) -> &str {
        match self {
            Self::Title => "Title",
            Self::BannerSlider => "Banner Slider",
            Self::MenuGroup => "Menu Group",
            Self::History => "History",
            Self::Cards => "Cards",
            Self::BalanceCard => "Balance Card",
            Self::Unknown(id) => id,
        }
    }

    /// Id written into a new widget of this kind.
    pub fn default_id(&self) -> &str {
        match self {
            Self::Title => ids::TITLE,
            Self::BannerSlider => ids::BANNER_SLIDER,
            Self::MenuGroup => ids::MENU_GROUP,
            Self::History => ids::HISTORY,
            Self::Cards => ids::CARDS,
            Self::BalanceCard => ids::BALANCE_CARD,
            Self::Unknown(id) => id,
        }
    }
}

/// Box spacing in pixels. Missing sides are zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spacing {
    #[serde(default)]
    pub top: u32,
    #[serde(default)]
    pub right: u32,
    #[serde(default)]
    pub bottom: u32,
    #[serde(default)]
    pub left: u32,
}

impl Spacing {
    /// Same value on every side.
    pub fn uniform(value: u32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Whether every side is zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// Card-like frame drawn around a widget.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(rename = "borderRadius", default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<u32>,
    #[serde(rename = "borderColor", default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(rename = "backgroundColor", default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub shadow: bool,
}

/// One slide of a banner slider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Banner {
    #[serde(rename = "imageUrl", alias = "image", default)]
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "routeArgs", default, skip_serializing_if = "Option::is_none")]
    pub route_args: Option<RouteArgs>,
}

/// Icon tile of a menu group; also used for header menu icons.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(rename = "iconUrl", alias = "icon", default)]
    pub icon_url: String,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "textSize", default, skip_serializing_if = "Option::is_none")]
    pub text_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "routeArgs", default, skip_serializing_if = "Option::is_none")]
    pub route_args: Option<RouteArgs>,
}

/// Header menu icon: same shape as a menu group tile.
pub type HeaderMenuItem = MenuItem;

/// One card of a cards widget.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Card {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(rename = "imageUrl", alias = "image", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "routeArgs", default, skip_serializing_if = "Option::is_none")]
    pub route_args: Option<RouteArgs>,
}

/// One renderable block of a screen.
///
/// Optional payloads are present only for the kinds that use them; an
/// absent field means "use the default", not "explicitly empty". Fields
/// this model does not know are kept in `extra` and written back as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentSection {
    pub id: String,
    #[serde(rename = "instanceId", default)]
    pub instance_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(rename = "textSize", default, skip_serializing_if = "Option::is_none")]
    pub text_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(rename = "autoPlay", default, skip_serializing_if = "Option::is_none")]
    pub auto_play: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banners: Option<Vec<Banner>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<MenuItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cards: Option<Vec<Card>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame: Option<FrameConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<Spacing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<Spacing>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ContentSection {
    /// Rendering branch of this widget.
    pub fn kind(&self) -> WidgetKind {
        match self.id.as_str() {
            ids::TITLE => WidgetKind::Title,
            ids::BANNER_SLIDER => WidgetKind::BannerSlider,
            ids::HISTORY => WidgetKind::History,
            ids::CARDS => WidgetKind::Cards,
            ids::BALANCE_CARD => WidgetKind::BalanceCard,
            _ if self.items.is_some() => WidgetKind::MenuGroup,
            other => WidgetKind::Unknown(other.to_string()),
        }
    }

    /// New widget of `kind` with its starter payload and the given instance id.
    pub fn with_defaults(kind: &WidgetKind, instance_id: impl Into<String>) -> Self {
        let mut section = Self {
            id: kind.default_id().to_string(),
            instance_id: instance_id.into(),
            ..Self::default()
        };
        match kind {
            WidgetKind::Title => {
                section.title = Some("New title".to_string());
                section.text_size = Some(18);
            }
            WidgetKind::BannerSlider => {
                section.banners = Some(Vec::new());
                section.auto_play = Some(true);
            }
            WidgetKind::MenuGroup => {
                section.title = Some("Menu".to_string());
                section.items = Some(Vec::new());
                section.columns = Some(4);
            }
            WidgetKind::History => {
                section.title = Some("History".to_string());
                section.limit = Some(3);
            }
            WidgetKind::Cards => section.cards = Some(Vec::new()),
            WidgetKind::BalanceCard => section.variant = Some(1),
            WidgetKind::Unknown(_) => {}
        }
        section
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn section(value: Value) -> ContentSection {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn kind_from_known_ids() {
        assert_eq!(section(json!({"id": "title"})).kind(), WidgetKind::Title);
        assert_eq!(
            section(json!({"id": "banner_slider"})).kind(),
            WidgetKind::BannerSlider
        );
        assert_eq!(
            section(json!({"id": "balance_card"})).kind(),
            WidgetKind::BalanceCard
        );
    }

    #[test]
    fn any_id_with_items_is_menu_group() {
        let w = section(json!({"id": "layanan", "items": []}));
        assert_eq!(w.kind(), WidgetKind::MenuGroup);
        let w = section(json!({"id": "layanan"}));
        assert_eq!(w.kind(), WidgetKind::Unknown("layanan".into()));
    }

    #[test]
    fn unknown_fields_survive_roundtrip() {
        let input = json!({
            "id": "cards",
            "instanceId": "cards-1",
            "cards": [{"title": "A"}],
            "backgroundGradient": ["#fff", "#000"]
        });
        let w = section(input.clone());
        assert_eq!(w.extra["backgroundGradient"], json!(["#fff", "#000"]));
        assert_eq!(serde_json::to_value(&w).unwrap(), input);
    }

    #[test]
    fn absent_payloads_stay_absent() {
        let w = section(json!({"id": "history", "instanceId": "h"}));
        assert!(w.limit.is_none());
        let out = serde_json::to_value(&w).unwrap();
        assert_eq!(out, json!({"id": "history", "instanceId": "h"}));
    }

    #[test]
    fn defaults_keep_kind() {
        for kind in WidgetKind::ADDABLE {
            let w = ContentSection::with_defaults(&kind, "x");
            assert_eq!(w.kind(), kind);
        }
    }

    #[test]
    fn icon_alias_accepted() {
        let item: MenuItem =
            serde_json::from_value(json!({"icon": "https://cdn/x.png", "title": "Pulsa"})).unwrap();
        assert_eq!(item.icon_url, "https://cdn/x.png");
    }
}
