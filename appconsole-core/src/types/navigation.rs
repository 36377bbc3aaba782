//! Bottom navigation model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Open bag of navigation parameters.
pub type RouteArgs = Map<String, Value>;

/// Visual style of the bottom navigation bar (1–4).
///
/// Unknown numbers read as [`NavigationStyle::Classic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum NavigationStyle {
    /// Icon with label underneath.
    #[default]
    Classic,
    /// Floating pill bar.
    Floating,
    /// Centre item raised as a primary action.
    CenterAction,
    /// Icons only.
    IconOnly,
}

impl NavigationStyle {
    pub const ALL: [NavigationStyle; 4] = [
        Self::Classic,
        Self::Floating,
        Self::CenterAction,
        Self::IconOnly,
    ];

    /// Stored number.
    pub fn number(self) -> i64 {
        match self {
            Self::Classic => 1,
            Self::Floating => 2,
            Self::CenterAction => 3,
            Self::IconOnly => 4,
        }
    }
}

impl From<i64> for NavigationStyle {
    fn from(n: i64) -> Self {
        match n {
            2 => Self::Floating,
            3 => Self::CenterAction,
            4 => Self::IconOnly,
            _ => Self::Classic,
        }
    }
}

impl From<NavigationStyle> for i64 {
    fn from(style: NavigationStyle) -> Self {
        style.number()
    }
}

/// One entry of the bottom navigation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "routeArgs", default, skip_serializing_if = "Option::is_none")]
    pub route_args: Option<RouteArgs>,
    /// Inactive items are kept in the document but not rendered.
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// Bottom navigation descriptor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavigationConfig {
    #[serde(default)]
    pub style: NavigationStyle,
    #[serde(rename = "mainMenu", default)]
    pub main_menu: Vec<NavigationItem>,
    #[serde(rename = "moreMenu", default, skip_serializing_if = "Option::is_none")]
    pub more_menu: Option<NavigationItem>,
}

impl NavigationConfig {
    /// Main menu items that are rendered, in order.
    pub fn visible_items(&self) -> impl Iterator<Item = &NavigationItem> {
        self.main_menu.iter().filter(|item| item.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn style_out_of_range_reads_as_classic() {
        let nav: NavigationConfig = serde_json::from_value(json!({"style": 9})).unwrap();
        assert_eq!(nav.style, NavigationStyle::Classic);
        let nav: NavigationConfig = serde_json::from_value(json!({"style": 3})).unwrap();
        assert_eq!(nav.style, NavigationStyle::CenterAction);
        assert_eq!(serde_json::to_value(&nav).unwrap()["style"], 3);
    }

    #[test]
    fn inactive_items_are_kept_but_hidden() {
        let nav: NavigationConfig = serde_json::from_value(json!({
            "mainMenu": [
                {"title": "Home", "icon": "home", "route": "/home"},
                {"title": "Promo", "icon": "tag", "route": "/promo", "active": false}
            ]
        }))
        .unwrap();
        assert_eq!(nav.main_menu.len(), 2);
        let visible: Vec<_> = nav.visible_items().map(|i| i.title.as_str()).collect();
        assert_eq!(visible, vec!["Home"]);
    }
}
