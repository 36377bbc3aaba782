//! Model layer: all application state.

mod app;
mod focus;
mod navigation;
mod page;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use navigation::{NavItem, NavItemId, NavigationState};
pub use page::{Page, PanelKind, PRIVACY_POLICY_SLUG};
