//! Widget preview renderers
//!
//! Pure functions from a screen (and optional bottom navigation) to a
//! tree the front-end draws: [`render_mobile`] simulates the phone frame,
//! [`render_canvas`] lists the widgets for the desktop canvas. Inputs are
//! never mutated and partially specified widgets fall back to defaults.

mod balance;
mod canvas;
mod header;
mod mobile;

pub use balance::{render_balance, BalanceCardPreview, BalanceVariant};
pub use canvas::{render_canvas, summarize, CanvasCard, WidgetKindLabel};
pub use header::{greeting_for_hour, header_content, HeaderContent, HeaderContext};
pub use mobile::{
    render_mobile, render_widget, BottomNavPreview, CardPreview, HeaderPreview, LinkPreview,
    MobilePreview, PreviewNode, SectionPreview, SlidePreview, TilePreview,
    DEFAULT_BANNER_HEIGHT, DEFAULT_CAROUSEL_HEIGHT, DEFAULT_HISTORY_LIMIT, DEFAULT_MENU_COLUMNS,
    DEFAULT_TITLE_TEXT_SIZE,
};
