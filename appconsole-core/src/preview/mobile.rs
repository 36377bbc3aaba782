//! Phone-frame simulation of a screen

use serde::Serialize;

use crate::preview::balance::{render_balance, BalanceCardPreview, BalanceVariant};
use crate::preview::header::{header_content, HeaderContext};
use crate::route_args::{descriptor_for, validate, Navigable};
use crate::types::{
    Banner, Card, ContentSection, HeaderDisplayType, MenuItem, NavigationConfig, NavigationItem,
    NavigationStyle, ScreenConfig, Spacing, WidgetKind,
};

pub const DEFAULT_BANNER_HEIGHT: u32 = 120;
pub const DEFAULT_MENU_COLUMNS: u32 = 4;
pub const DEFAULT_HISTORY_LIMIT: u32 = 3;
pub const DEFAULT_CAROUSEL_HEIGHT: u32 = 160;
pub const DEFAULT_TITLE_TEXT_SIZE: u32 = 16;

/// Column count of a menu grid; zero counts as unset.
pub(crate) fn menu_columns(widget: &ContentSection) -> u32 {
    widget.columns.filter(|c| *c > 0).unwrap_or(DEFAULT_MENU_COLUMNS)
}

/// Where a navigable element leads, as shown in previews.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkPreview {
    pub label: String,
    /// Route or URL; `None` when neither is set.
    pub target: Option<String>,
    /// Validation problems of the element's target.
    pub problems: Vec<String>,
}

impl LinkPreview {
    fn of(label: impl Into<String>, item: &dyn Navigable) -> Self {
        let descriptor = descriptor_for(item);
        let result = validate(&descriptor);
        Self {
            label: label.into(),
            target: descriptor.target().map(str::to_string),
            problems: result.errors,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.problems.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlidePreview {
    pub image_url: String,
    pub link: LinkPreview,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TilePreview {
    pub icon_url: String,
    pub text_size: Option<u32>,
    pub link: LinkPreview,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardPreview {
    pub subtitle: Option<String>,
    pub image_url: Option<String>,
    pub link: LinkPreview,
}

/// Visual approximation of one widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PreviewNode {
    Title {
        text: String,
        subtitle: Option<String>,
        text_size: u32,
    },
    BannerSlider {
        height: u32,
        auto_play: bool,
        slides: Vec<SlidePreview>,
    },
    MenuGroup {
        title: Option<String>,
        columns: u32,
        tiles: Vec<TilePreview>,
    },
    History {
        title: String,
        rows: u32,
    },
    Cards {
        title: Option<String>,
        cards: Vec<CardPreview>,
    },
    BalanceCard(BalanceCardPreview),
    /// Widget id this renderer does not know.
    Placeholder {
        id: String,
    },
}

/// One widget in the phone frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionPreview {
    pub instance_id: String,
    pub selected: bool,
    pub framed: bool,
    pub padding: Spacing,
    pub margin: Spacing,
    pub node: PreviewNode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderPreview {
    pub top_text: String,
    pub main_text: String,
    /// Balance line shown next to the text when the style includes it.
    pub balance_text: Option<String>,
    pub display: HeaderDisplayType,
    /// Balance card under the header (`balance_cards` display type).
    pub balance_card: Option<BalanceCardPreview>,
    /// Icon row under the header (`menu_icons` display type).
    pub menu_icons: Vec<TilePreview>,
    pub action_buttons: Vec<LinkPreview>,
    pub background_url: Option<String>,
    pub fade: bool,
    pub carousel_height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BottomNavPreview {
    pub style: NavigationStyle,
    pub items: Vec<LinkPreview>,
    pub more: Option<LinkPreview>,
}

/// The whole phone frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MobilePreview {
    pub header: HeaderPreview,
    pub show_drag_handle: bool,
    pub sections: Vec<SectionPreview>,
    pub bottom_nav: Option<BottomNavPreview>,
}

fn tile(item: &MenuItem) -> TilePreview {
    TilePreview {
        icon_url: item.icon_url.clone(),
        text_size: item.text_size,
        link: LinkPreview::of(item.title.clone(), item),
    }
}

fn slide(banner: &Banner) -> SlidePreview {
    SlidePreview {
        image_url: banner.image_url.clone(),
        link: LinkPreview::of(banner.title.clone().unwrap_or_default(), banner),
    }
}

fn card(card: &Card) -> CardPreview {
    CardPreview {
        subtitle: card.subtitle.clone(),
        image_url: card.image_url.clone(),
        link: LinkPreview::of(card.title.clone(), card),
    }
}

fn nav_link(item: &NavigationItem) -> LinkPreview {
    LinkPreview::of(item.title.clone(), item)
}

/// Render one widget. Missing fields take their defaults.
pub fn render_widget(widget: &ContentSection, ctx: &HeaderContext) -> PreviewNode {
    match widget.kind() {
        WidgetKind::Title => PreviewNode::Title {
            text: widget.title.clone().unwrap_or_default(),
            subtitle: widget.subtitle.clone(),
            text_size: widget.text_size.unwrap_or(DEFAULT_TITLE_TEXT_SIZE),
        },
        WidgetKind::BannerSlider => PreviewNode::BannerSlider {
            height: widget.height.unwrap_or(DEFAULT_BANNER_HEIGHT),
            auto_play: widget.auto_play.unwrap_or(true),
            slides: widget.banners.iter().flatten().map(slide).collect(),
        },
        WidgetKind::MenuGroup => PreviewNode::MenuGroup {
            title: widget.title.clone(),
            columns: menu_columns(widget),
            tiles: widget.items.iter().flatten().map(tile).collect(),
        },
        WidgetKind::History => PreviewNode::History {
            title: widget.title.clone().unwrap_or_else(|| "Riwayat".to_string()),
            rows: widget.limit.unwrap_or(DEFAULT_HISTORY_LIMIT),
        },
        WidgetKind::Cards => PreviewNode::Cards {
            title: widget.title.clone(),
            cards: widget.cards.iter().flatten().map(card).collect(),
        },
        WidgetKind::BalanceCard => {
            PreviewNode::BalanceCard(render_balance(BalanceVariant::from_number(widget.variant), ctx))
        }
        WidgetKind::Unknown(id) => PreviewNode::Placeholder { id },
    }
}

fn render_header(screen: &ScreenConfig, ctx: &HeaderContext) -> HeaderPreview {
    let content = header_content(screen.header_style, ctx);
    let display = screen.header_display_type;

    HeaderPreview {
        top_text: content.top_text,
        main_text: content.main_text,
        balance_text: content.show_balance.then(|| ctx.balance.clone()),
        display,
        balance_card: (display == HeaderDisplayType::BalanceCards).then(|| {
            render_balance(BalanceVariant::from_number(screen.header_balance_variant), ctx)
        }),
        menu_icons: if display == HeaderDisplayType::MenuIcons {
            screen.header_menu_items.iter().map(tile).collect()
        } else {
            Vec::new()
        },
        action_buttons: screen
            .action_buttons
            .iter()
            .map(|b| LinkPreview::of(b.icon.clone(), b))
            .collect(),
        background_url: screen.header_background().map(str::to_string),
        fade: screen.header_fade,
        carousel_height: screen.carousel_height.unwrap_or(DEFAULT_CAROUSEL_HEIGHT),
    }
}

fn render_bottom_nav(nav: &NavigationConfig) -> BottomNavPreview {
    BottomNavPreview {
        style: nav.style,
        items: nav.visible_items().map(nav_link).collect(),
        more: nav.more_menu.as_ref().map(nav_link),
    }
}

/// Render the phone frame for a screen.
///
/// Pure: the inputs are only read.
pub fn render_mobile(
    screen: &ScreenConfig,
    navigation: Option<&NavigationConfig>,
    ctx: &HeaderContext,
    selected: Option<&str>,
) -> MobilePreview {
    MobilePreview {
        header: render_header(screen, ctx),
        show_drag_handle: screen.show_drag_handle,
        sections: screen
            .content
            .iter()
            .map(|w| SectionPreview {
                instance_id: w.instance_id.clone(),
                selected: selected == Some(w.instance_id.as_str()),
                framed: w.frame.as_ref().is_some_and(|f| f.enabled),
                padding: w.padding.unwrap_or_default(),
                margin: w.margin.unwrap_or_default(),
                node: render_widget(w, ctx),
            })
            .collect(),
        bottom_nav: navigation.map(render_bottom_nav),
    }
}
