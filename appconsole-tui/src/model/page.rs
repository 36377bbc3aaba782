//! Pages

use appconsole_core::panels::{Capabilities, PanelResource};

use crate::i18n::t;
use crate::model::state::with_panel;

/// The list panels of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    Rewards,
    Promos,
    Feedback,
    Markdown,
    Sessions,
    ActivityLog,
}

impl PanelKind {
    pub const ALL: [PanelKind; 6] = [
        Self::Rewards,
        Self::Promos,
        Self::Feedback,
        Self::Markdown,
        Self::Sessions,
        Self::ActivityLog,
    ];

    pub fn title(self) -> &'static str {
        let nav = &t().nav;
        match self {
            Self::Rewards => nav.rewards,
            Self::Promos => nav.promos,
            Self::Feedback => nav.feedback,
            Self::Markdown => nav.markdown,
            Self::Sessions => nav.sessions,
            Self::ActivityLog => nav.activity,
        }
    }

    pub fn capabilities(self) -> Capabilities {
        with_panel!(self, R => <R as PanelResource>::CAPABILITIES)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    Canvas,
    Panel(PanelKind),
    Cutoff,
    Settings,
    /// Public markdown page read from the local cache. `None` lists every
    /// cached document.
    PublicContent { slug: Option<&'static str> },
}

/// Slug of the markdown document shown on the privacy policy route.
pub const PRIVACY_POLICY_SLUG: &str = "privacy-policy";

impl Page {
    pub fn title(self) -> &'static str {
        let texts = t();
        match self {
            Self::Login => texts.common.app_name,
            Self::Canvas => texts.nav.canvas,
            Self::Panel(kind) => kind.title(),
            Self::Cutoff => texts.nav.cutoff,
            Self::Settings => texts.nav.settings,
            Self::PublicContent { slug: Some(_) } => texts.public.privacy_title,
            Self::PublicContent { slug: None } => texts.public.content_title,
        }
    }

    /// Pages drawn without the dashboard shell.
    pub fn is_full_screen(self) -> bool {
        matches!(self, Self::Login | Self::PublicContent { .. })
    }
}
