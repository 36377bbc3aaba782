//! Global app configuration document

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::navigation::NavigationConfig;
use crate::types::screen::ScreenConfig;

/// Theme section of the configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Base color (`#rrggbb`) every other shade is derived from.
    #[serde(rename = "primaryColor", default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
}

/// The document the mobile app reads at startup: screens, bottom
/// navigation and theme.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(rename = "appTitle", default, skip_serializing_if = "Option::is_none")]
    pub app_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigation: Option<NavigationConfig>,
    #[serde(default)]
    pub screens: Vec<ScreenConfig>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AppConfig {
    /// Screen with the given key.
    pub fn screen(&self, name: &str) -> Option<&ScreenConfig> {
        self.screens.iter().find(|s| s.screen == name)
    }

    /// Keys of every screen, in document order.
    pub fn screen_names(&self) -> Vec<&str> {
        self.screens.iter().map(|s| s.screen.as_str()).collect()
    }

    /// Replace the screen with the same key, or append it.
    pub fn upsert_screen(&mut self, screen: ScreenConfig) {
        match self.screens.iter_mut().find(|s| s.screen == screen.screen) {
            Some(existing) => *existing = screen,
            None => self.screens.push(screen),
        }
    }

    /// Remove a screen; returns it when it existed.
    pub fn remove_screen(&mut self, name: &str) -> Option<ScreenConfig> {
        let index = self.screens.iter().position(|s| s.screen == name)?;
        Some(self.screens.remove(index))
    }

    /// Configured primary color, if any.
    pub fn primary_color(&self) -> Option<&str> {
        self.theme.as_ref()?.primary_color.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upsert_replaces_by_key_or_appends() {
        let mut config = AppConfig::default();
        config.upsert_screen(ScreenConfig::new("home"));
        config.upsert_screen(ScreenConfig::new("profile"));

        let mut home = ScreenConfig::new("home");
        home.title = Some("Beranda".into());
        config.upsert_screen(home);

        assert_eq!(config.screen_names(), vec!["home", "profile"]);
        assert_eq!(
            config.screen("home").and_then(|s| s.title.as_deref()),
            Some("Beranda")
        );
    }

    #[test]
    fn remove_screen() {
        let mut config = AppConfig::default();
        config.upsert_screen(ScreenConfig::new("home"));
        assert!(config.remove_screen("missing").is_none());
        assert!(config.remove_screen("home").is_some());
        assert!(config.screens.is_empty());
    }

    #[test]
    fn parses_document() {
        let config: AppConfig = serde_json::from_str(
            r##"{"appTitle":"Kasir","theme":{"primaryColor":"#1e88e5"},"screens":[{"screen":"home"}],"version":3}"##,
        )
        .unwrap();
        assert_eq!(config.app_title.as_deref(), Some("Kasir"));
        assert_eq!(config.primary_color(), Some("#1e88e5"));
        assert_eq!(config.extra["version"], 3);
    }
}
