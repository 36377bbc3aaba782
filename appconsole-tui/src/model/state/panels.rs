//! List panel states

use appconsole_core::panels::{PanelController, PanelResource};
use appconsole_core::types::{ActivityLog, Feedback, MarkdownDoc, Promo, Reward, SessionRecord};

use crate::i18n::t;
use crate::model::page::PanelKind;
use crate::model::state::form::FormRecord;

/// One list panel: the controller plus the cursor.
#[derive(Debug)]
pub struct PanelView<R> {
    pub controller: PanelController<R>,
    pub selected: usize,
    /// Whether the cache has been painted since the last reset.
    pub mounted: bool,
}

impl<R: PanelResource> Default for PanelView<R> {
    fn default() -> Self {
        Self {
            controller: PanelController::new(),
            selected: 0,
            mounted: false,
        }
    }
}

impl<R: PanelResource> PanelView<R> {
    pub fn selected_item(&self) -> Option<&R> {
        self.controller.items().get(self.selected)
    }

    /// Keep the cursor on a row after the list shrank.
    pub fn clamp_selection(&mut self) {
        let len = self.controller.items().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.controller.items().len() {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.controller.items().len().saturating_sub(1);
    }
}

/// Every list panel of the dashboard.
#[derive(Debug, Default)]
pub struct PanelsState {
    pub rewards: PanelView<Reward>,
    pub promos: PanelView<Promo>,
    pub feedback: PanelView<Feedback>,
    pub markdown: PanelView<MarkdownDoc>,
    pub sessions: PanelView<SessionRecord>,
    pub activity: PanelView<ActivityLog>,
}

/// A record type shown in one of the [`PanelsState`] panels.
pub trait PanelRecord: PanelResource + FormRecord {
    const KIND: PanelKind;

    fn view(panels: &PanelsState) -> &PanelView<Self>;
    fn view_mut(panels: &mut PanelsState) -> &mut PanelView<Self>;

    /// Word shown for the toggleable flag.
    fn flag_label(active: bool) -> &'static str {
        let p = &t().panels;
        if active {
            p.active
        } else {
            p.inactive
        }
    }
}

macro_rules! panel_record {
    ($record:ty, $kind:ident, $field:ident) => {
        impl PanelRecord for $record {
            const KIND: PanelKind = PanelKind::$kind;

            fn view(panels: &PanelsState) -> &PanelView<Self> {
                &panels.$field
            }

            fn view_mut(panels: &mut PanelsState) -> &mut PanelView<Self> {
                &mut panels.$field
            }
        }
    };
}

panel_record!(Reward, Rewards, rewards);
panel_record!(Promo, Promos, promos);
panel_record!(SessionRecord, Sessions, sessions);
panel_record!(ActivityLog, ActivityLog, activity);

impl PanelRecord for Feedback {
    const KIND: PanelKind = PanelKind::Feedback;

    fn view(panels: &PanelsState) -> &PanelView<Self> {
        &panels.feedback
    }

    fn view_mut(panels: &mut PanelsState) -> &mut PanelView<Self> {
        &mut panels.feedback
    }

    fn flag_label(resolved: bool) -> &'static str {
        if resolved {
            t().panels.resolved
        } else {
            t().panels.open
        }
    }
}

impl PanelRecord for MarkdownDoc {
    const KIND: PanelKind = PanelKind::Markdown;

    fn view(panels: &PanelsState) -> &PanelView<Self> {
        &panels.markdown
    }

    fn view_mut(panels: &mut PanelsState) -> &mut PanelView<Self> {
        &mut panels.markdown
    }

    fn flag_label(published: bool) -> &'static str {
        if published {
            t().panels.published
        } else {
            t().panels.draft
        }
    }
}

/// Run `$body` with `$R` bound to the record type of a [`PanelKind`].
///
/// ```ignore
/// with_panel!(kind, R => refresh::<R>(app))
/// ```
macro_rules! with_panel {
    ($kind:expr, $R:ident => $body:expr) => {
        match $kind {
            $crate::model::PanelKind::Rewards => {
                type $R = ::appconsole_core::types::Reward;
                $body
            }
            $crate::model::PanelKind::Promos => {
                type $R = ::appconsole_core::types::Promo;
                $body
            }
            $crate::model::PanelKind::Feedback => {
                type $R = ::appconsole_core::types::Feedback;
                $body
            }
            $crate::model::PanelKind::Markdown => {
                type $R = ::appconsole_core::types::MarkdownDoc;
                $body
            }
            $crate::model::PanelKind::Sessions => {
                type $R = ::appconsole_core::types::SessionRecord;
                $body
            }
            $crate::model::PanelKind::ActivityLog => {
                type $R = ::appconsole_core::types::ActivityLog;
                $body
            }
        }
    };
}

pub(crate) use with_panel;

#[cfg(test)]
mod tests {
    use super::*;

    fn reward(id: &str) -> Reward {
        Reward {
            id: id.into(),
            name: format!("Reward {id}"),
            points: 10,
            ..Reward::default()
        }
    }

    #[test]
    fn cursor_stays_inside_the_list() {
        let mut view = PanelView::<Reward>::default();
        view.controller.mount(vec![reward("1"), reward("2"), reward("3")]);
        view.select_next();
        view.select_next();
        view.select_next();
        assert_eq!(view.selected, 2);
        view.select_first();
        view.select_previous();
        assert_eq!(view.selected, 0);
        view.select_last();
        assert_eq!(view.selected_item().map(|r| r.id.as_str()), Some("3"));
    }

    #[test]
    fn clamping_follows_a_removed_row() {
        let mut view = PanelView::<Reward>::default();
        view.controller.mount(vec![reward("1"), reward("2")]);
        view.selected = 1;
        assert!(view.controller.begin_delete("2"));
        view.clamp_selection();
        assert_eq!(view.selected, 0);
    }

    #[test]
    fn every_kind_maps_to_its_record() {
        for kind in PanelKind::ALL {
            let resource = with_panel!(kind, R => <R as PanelResource>::RESOURCE);
            let own_kind = with_panel!(kind, R => <R as PanelRecord>::KIND);
            assert_eq!(own_kind, kind, "{resource}");
        }
    }
}
