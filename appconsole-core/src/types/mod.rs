//! Type definition module

mod app_config;
mod navigation;
mod panels;
mod route;
mod screen;
mod widget;

pub use app_config::{AppConfig, ThemeConfig};
pub use navigation::{NavigationConfig, NavigationItem, NavigationStyle, RouteArgs};
pub use panels::{
    is_valid_cutoff_time, ActivityLog, CutoffConfig, CutoffTime, Feedback, MarkdownDoc, Promo,
    Reward, SessionRecord,
};
pub use route::Route;
pub use screen::{
    ActionButton, HeaderDisplayType, HeaderStyle, ScreenConfig, HEADER_BACKGROUND_KEY,
    MAX_ACTION_BUTTONS,
};
pub use widget::{
    ids as widget_ids, Banner, Card, ContentSection, FrameConfig, HeaderMenuItem, MenuItem,
    Spacing, WidgetKind,
};
