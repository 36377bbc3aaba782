//! Route-argument normalizer
//!
//! Turns the many navigable shapes of the app document (banners, menu
//! tiles, header icons, action buttons, bottom-nav items) into one
//! canonical [`NavigationDescriptor`], and checks it. Everything here is
//! pure; previews call it for every navigable item on every render.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::types::{
    ActionButton, Banner, Card, MenuItem, NavigationItem, Promo, RouteArgs,
};

/// Marker set in the args of navigation that starts inside a web view.
pub const FROM_WEB_VIEW_KEY: &str = "__fromWebView";

/// Key under which the originating item's payload is kept.
pub const SOURCE_DATA_KEY: &str = "_bannerData";

/// Raw navigation input.
#[derive(Debug, Clone, Default)]
pub struct RouteArgsInput {
    pub route: Option<String>,
    pub url: Option<String>,
    pub title: Option<String>,
    /// Payload of the originating item, kept verbatim.
    pub source_data: Option<Value>,
    pub from_web_view: bool,
    pub custom_args: RouteArgs,
}

/// Canonical navigation target.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NavigationDescriptor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "routeArgs")]
    pub args: RouteArgs,
}

impl NavigationDescriptor {
    /// Short human readable target: the route, else the URL.
    pub fn target(&self) -> Option<&str> {
        self.route.as_deref().or(self.url.as_deref())
    }

    /// Whether navigation starts from a web view.
    pub fn is_from_web_view(&self) -> bool {
        self.args.get(FROM_WEB_VIEW_KEY) == Some(&Value::Bool(true))
    }
}

/// Outcome of [`validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    })
}

/// Build the canonical descriptor.
///
/// Blank strings count as absent. Custom args are merged first, so the
/// reserved keys always win.
pub fn build_descriptor(input: RouteArgsInput) -> NavigationDescriptor {
    let mut args = input.custom_args;
    if input.from_web_view {
        args.insert(FROM_WEB_VIEW_KEY.to_string(), Value::Bool(true));
    }
    if let Some(data) = input.source_data {
        args.insert(SOURCE_DATA_KEY.to_string(), data);
    }

    NavigationDescriptor {
        route: non_blank(input.route),
        url: non_blank(input.url),
        title: non_blank(input.title),
        args,
    }
}

/// Check that exactly one of `route` / `url` is set.
///
/// Never fails; problems are collected in [`ValidationResult::errors`].
pub fn validate(descriptor: &NavigationDescriptor) -> ValidationResult {
    let mut errors = Vec::new();
    match (&descriptor.route, &descriptor.url) {
        (Some(_), Some(_)) => {
            errors.push("Set either a route or a URL, not both".to_string());
        }
        (None, None) => errors.push("A route or a URL is required".to_string()),
        _ => {}
    }
    if let Some(args) = descriptor.args.get(FROM_WEB_VIEW_KEY) {
        if !args.is_boolean() {
            errors.push(format!("'{FROM_WEB_VIEW_KEY}' must be a boolean"));
        }
    }
    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// Whether a URL leaves the app (opened in a web view / browser).
pub fn is_external_url(url: &str) -> bool {
    let lower = url.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Anything the app can navigate from.
pub trait Navigable {
    fn nav_route(&self) -> Option<&str>;
    fn nav_url(&self) -> Option<&str>;
    fn nav_title(&self) -> Option<&str>;

    fn nav_args(&self) -> Option<&RouteArgs> {
        None
    }

    /// Payload forwarded under [`SOURCE_DATA_KEY`].
    fn source_data(&self) -> Option<Value> {
        None
    }
}

/// Descriptor of a navigable item.
pub fn descriptor_for(item: &dyn Navigable) -> NavigationDescriptor {
    build_descriptor(RouteArgsInput {
        route: item.nav_route().map(str::to_string),
        url: item.nav_url().map(str::to_string),
        title: item.nav_title().map(str::to_string),
        source_data: item.source_data(),
        from_web_view: false,
        custom_args: item.nav_args().cloned().unwrap_or_else(Map::new),
    })
}

macro_rules! navigable_leaf {
    ($($ty:ty),+) => {$(
        impl Navigable for $ty {
            fn nav_route(&self) -> Option<&str> {
                self.route.as_deref()
            }
            fn nav_url(&self) -> Option<&str> {
                self.url.as_deref()
            }
            fn nav_title(&self) -> Option<&str> {
                Some(&self.title)
            }
            fn nav_args(&self) -> Option<&RouteArgs> {
                self.route_args.as_ref()
            }
        }
    )+};
}

navigable_leaf!(MenuItem, Card, NavigationItem, Promo);

impl Navigable for Banner {
    fn nav_route(&self) -> Option<&str> {
        self.route.as_deref()
    }
    fn nav_url(&self) -> Option<&str> {
        self.url.as_deref()
    }
    fn nav_title(&self) -> Option<&str> {
        self.title.as_deref()
    }
    fn nav_args(&self) -> Option<&RouteArgs> {
        self.route_args.as_ref()
    }
    fn source_data(&self) -> Option<Value> {
        serde_json::to_value(self).ok()
    }
}

impl Navigable for ActionButton {
    fn nav_route(&self) -> Option<&str> {
        Some(&self.route)
    }
    fn nav_url(&self) -> Option<&str> {
        None
    }
    fn nav_title(&self) -> Option<&str> {
        Some(&self.tooltip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn input(route: Option<&str>, url: Option<&str>) -> RouteArgsInput {
        RouteArgsInput {
            route: route.map(str::to_string),
            url: url.map(str::to_string),
            ..RouteArgsInput::default()
        }
    }

    #[test]
    fn both_route_and_url_is_invalid() {
        let result = validate(&build_descriptor(input(Some("/promo"), Some("https://x.id"))));
        assert!(!result.is_valid);
        assert!(!result.errors.is_empty());
    }

    #[test]
    fn neither_route_nor_url_is_invalid() {
        let result = validate(&build_descriptor(input(None, Some("   "))));
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn exactly_one_is_valid() {
        assert!(validate(&build_descriptor(input(Some("/promo"), None))).is_valid);
        assert!(validate(&build_descriptor(input(None, Some("https://x.id")))).is_valid);
    }

    #[test]
    fn web_view_marker_and_source_data() {
        let mut custom = Map::new();
        custom.insert("id".into(), json!(5));
        custom.insert(FROM_WEB_VIEW_KEY.into(), json!("spoofed"));
        let d = build_descriptor(RouteArgsInput {
            route: Some("/detail_promo".into()),
            from_web_view: true,
            source_data: Some(json!({"imageUrl": "a.png", "nested": {"k": [1, 2]}})),
            custom_args: custom,
            ..RouteArgsInput::default()
        });
        assert!(d.is_from_web_view());
        assert_eq!(d.args["id"], 5);
        assert_eq!(
            d.args[SOURCE_DATA_KEY],
            json!({"imageUrl": "a.png", "nested": {"k": [1, 2]}})
        );
    }

    #[test]
    fn banner_descriptor_carries_banner_payload() {
        let banner = Banner {
            image_url: "https://cdn/b.png".into(),
            title: Some("Promo".into()),
            url: Some("https://shop.id".into()),
            ..Banner::default()
        };
        let d = descriptor_for(&banner);
        assert_eq!(d.target(), Some("https://shop.id"));
        assert_eq!(d.args[SOURCE_DATA_KEY]["imageUrl"], "https://cdn/b.png");
        assert!(validate(&d).is_valid);
    }

    #[test]
    fn action_button_targets_its_route() {
        let d = descriptor_for(&ActionButton::default());
        assert_eq!(d.route.as_deref(), Some("/pusat_bantuan"));
        assert_eq!(d.title.as_deref(), Some("Help Center"));
    }

    #[test]
    fn external_urls() {
        assert!(is_external_url("https://example.com"));
        assert!(is_external_url("HTTP://example.com"));
        assert!(!is_external_url("/promo"));
        assert!(!is_external_url("mailto:a@b.c"));
    }
}
