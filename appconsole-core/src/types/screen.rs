//! Screen model

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::widget::{ContentSection, HeaderMenuItem};

/// Maximum number of header action buttons per screen.
pub const MAX_ACTION_BUTTONS: usize = 2;

/// Key used for the single supported header background.
pub const HEADER_BACKGROUND_KEY: &str = "bg_1";

macro_rules! header_styles {
    ($($variant:ident => $code:literal, $label:literal;)+) => {
        /// What the screen header shows (greeting, name, titles, balance).
        ///
        /// Unrecognized strings read as [`HeaderStyle::GreetingName`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum HeaderStyle {
            #[default]
            $($variant,)+
        }

        impl HeaderStyle {
            /// Every style, in picker order.
            pub const ALL: &'static [HeaderStyle] = &[$(Self::$variant,)+];

            /// Stored code.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $code,)+
                }
            }

            /// Human readable name.
            pub fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }

            /// Parse a stored code.
            pub fn parse(code: &str) -> Option<Self> {
                match code {
                    $($code => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

header_styles! {
    GreetingName => "greeting_name", "Greeting + name";
    GreetingNameBalance => "greeting_name_balance", "Greeting + name + balance";
    NameOnly => "name_only", "Name";
    NameBalance => "name_balance", "Name + balance";
    TitleOnly => "title_only", "Screen title";
    TitleBalance => "title_balance", "Screen title + balance";
    AppTitle => "app_title", "App title";
    AppTitleBalance => "app_title_balance", "App title + balance";
    GreetingOnly => "greeting_only", "Greeting";
    GreetingBalance => "greeting_balance", "Greeting + balance";
    GreetingTitle => "greeting_title", "Greeting + screen title";
    GreetingTitleBalance => "greeting_title_balance", "Greeting + screen title + balance";
    NameTitle => "name_title", "Name + screen title";
    NameTitleBalance => "name_title_balance", "Name + screen title + balance";
    AppTitleName => "app_title_name", "App title + name";
    AppTitleGreeting => "app_title_greeting", "App title + greeting";
    BalanceOnly => "balance_only", "Balance";
}

impl From<String> for HeaderStyle {
    fn from(code: String) -> Self {
        Self::parse(&code).unwrap_or_default()
    }
}

impl From<HeaderStyle> for String {
    fn from(style: HeaderStyle) -> Self {
        style.as_str().to_string()
    }
}

/// What sits under the header text.
///
/// Unrecognized strings read as [`HeaderDisplayType::None`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HeaderDisplayType {
    #[default]
    None,
    BalanceCards,
    MenuIcons,
}

impl HeaderDisplayType {
    pub const ALL: [HeaderDisplayType; 3] = [Self::None, Self::BalanceCards, Self::MenuIcons];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::BalanceCards => "balance_cards",
            Self::MenuIcons => "menu_icons",
        }
    }
}

impl From<String> for HeaderDisplayType {
    fn from(code: String) -> Self {
        match code.as_str() {
            "balance_cards" => Self::BalanceCards,
            "menu_icons" => Self::MenuIcons,
            _ => Self::None,
        }
    }
}

impl From<HeaderDisplayType> for String {
    fn from(t: HeaderDisplayType) -> Self {
        t.as_str().to_string()
    }
}

/// Icon button in the top-right corner of the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionButton {
    pub icon: String,
    pub route: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub tooltip: String,
}

impl Default for ActionButton {
    fn default() -> Self {
        Self {
            icon: "settings".to_string(),
            route: "/pusat_bantuan".to_string(),
            kind: "standard".to_string(),
            tooltip: "Help Center".to_string(),
        }
    }
}

/// One named screen of the app.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreenConfig {
    pub screen: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub header_style: HeaderStyle,
    #[serde(default)]
    pub header_display_type: HeaderDisplayType,
    /// At most [`MAX_ACTION_BUTTONS`]; enforced by the editor.
    #[serde(default)]
    pub action_buttons: Vec<ActionButton>,
    #[serde(rename = "headerBackgroundUrl", default)]
    pub header_background_url: BTreeMap<String, String>,
    #[serde(rename = "headerFade", default)]
    pub header_fade: bool,
    #[serde(default)]
    pub show_drag_handle: bool,
    #[serde(rename = "carouselHeight", default, skip_serializing_if = "Option::is_none")]
    pub carousel_height: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub header_menu_items: Vec<HeaderMenuItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_balance_variant: Option<i64>,
    /// Widgets in rendering order.
    #[serde(default)]
    pub content: Vec<ContentSection>,
}

impl ScreenConfig {
    /// Empty screen with the given key.
    pub fn new(screen: impl Into<String>) -> Self {
        Self {
            screen: screen.into(),
            ..Self::default()
        }
    }

    /// Title shown in previews: the explicit title, else the screen key.
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or(&self.screen)
    }

    /// The header background, if one is set.
    pub fn header_background(&self) -> Option<&str> {
        self.header_background_url.values().next().map(String::as_str)
    }

    /// Position of the widget with `instance_id`.
    pub fn position_of(&self, instance_id: &str) -> Option<usize> {
        self.content.iter().position(|w| w.instance_id == instance_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn seventeen_header_styles_roundtrip_their_codes() {
        assert_eq!(HeaderStyle::ALL.len(), 17);
        for style in HeaderStyle::ALL {
            assert_eq!(HeaderStyle::parse(style.as_str()), Some(*style));
        }
    }

    #[test]
    fn unknown_header_style_reads_as_greeting_name() {
        let screen: ScreenConfig =
            serde_json::from_value(json!({"screen": "home", "header_style": "fancy"})).unwrap();
        assert_eq!(screen.header_style, HeaderStyle::GreetingName);
    }

    #[test]
    fn document_field_names() {
        let screen: ScreenConfig = serde_json::from_value(json!({
            "screen": "home",
            "header_style": "name_balance",
            "header_display_type": "menu_icons",
            "headerBackgroundUrl": {"bg_1": "https://cdn/bg.png"},
            "headerFade": true,
            "show_drag_handle": true,
            "carouselHeight": 200,
            "content": [{"id": "title", "instanceId": "t1", "title": "Hi"}]
        }))
        .unwrap();
        assert_eq!(screen.header_style, HeaderStyle::NameBalance);
        assert_eq!(screen.header_display_type, HeaderDisplayType::MenuIcons);
        assert_eq!(screen.header_background(), Some("https://cdn/bg.png"));
        assert!(screen.header_fade);
        assert_eq!(screen.carousel_height, Some(200));
        assert_eq!(screen.position_of("t1"), Some(0));

        let out = serde_json::to_value(&screen).unwrap();
        assert_eq!(out["headerFade"], true);
        assert_eq!(out["header_style"], "name_balance");
    }

    #[test]
    fn action_button_default_shape() {
        let json = serde_json::to_value(ActionButton::default()).unwrap();
        assert_eq!(
            json,
            json!({
                "icon": "settings",
                "route": "/pusat_bantuan",
                "type": "standard",
                "tooltip": "Help Center"
            })
        );
    }

    #[test]
    fn display_title_falls_back_to_key() {
        let mut screen = ScreenConfig::new("home");
        assert_eq!(screen.display_title(), "home");
        screen.title = Some("Beranda".into());
        assert_eq!(screen.display_title(), "Beranda");
    }
}
