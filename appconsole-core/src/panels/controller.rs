//! List panel UI state

use std::collections::HashMap;
use std::time::Instant;

use crate::error::{CoreError, CoreResult};
use crate::panels::{PanelResource, PanelService, Toast};

/// Handle of a started refresh. Only the ticket of the latest refresh is
/// accepted by [`PanelController::finish_refresh`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct RefreshTicket {
    generation: u64,
}

impl RefreshTicket {
    pub(crate) fn new(generation: u64) -> Self {
        Self { generation }
    }

    pub(crate) fn generation(self) -> u64 {
        self.generation
    }
}

/// Optimistic change waiting for the backend.
#[derive(Debug, Clone)]
enum Pending<R> {
    /// Record replaced locally; `previous` is restored on failure.
    Changed { local: R, previous: R },
    /// Record removed locally from `index`.
    Removed { index: usize, previous: R },
}

/// State of a list panel.
#[derive(Debug)]
pub struct PanelController<R> {
    items: Vec<R>,
    loading: bool,
    pending: HashMap<String, Pending<R>>,
    creating: usize,
    generation: u64,
    in_flight: Option<u64>,
    toast: Option<Toast>,
    session_expired: bool,
}

impl<R: PanelResource> Default for PanelController<R> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            pending: HashMap::new(),
            creating: 0,
            generation: 0,
            in_flight: None,
            toast: None,
            session_expired: false,
        }
    }
}

impl<R: PanelResource> PanelController<R> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Accessors =====

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn item(&self, id: &str) -> Option<&R> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether a mutation of `id` is waiting for the backend.
    pub fn is_busy(&self, id: &str) -> bool {
        self.pending.contains_key(id)
    }

    /// Whether a create is waiting for the backend.
    pub fn is_creating(&self) -> bool {
        self.creating > 0
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    pub fn dismiss_toast(&mut self) {
        self.toast = None;
    }

    /// Drop the toast once its time is up.
    pub fn expire_toast(&mut self, now: Instant) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired(now)) {
            self.toast = None;
        }
    }

    /// Set when a call failed because the session is gone; the front-end
    /// sends the user back to the login page.
    pub fn session_expired(&self) -> bool {
        self.session_expired
    }

    fn fail(&mut self, context: &str, err: &CoreError) {
        if err.requires_login() {
            self.session_expired = true;
        }
        self.toast = Some(Toast::from_error(context, err));
    }

    // ===== Loading =====

    /// Paint cached records before the first refresh.
    pub fn mount(&mut self, cached: Vec<R>) {
        if self.items.is_empty() {
            self.items = cached;
        }
    }

    /// Start a refresh unless one is already running.
    pub fn begin_refresh(&mut self) -> Option<RefreshTicket> {
        if self.in_flight.is_some() {
            log::debug!("{} refresh already in flight", R::RESOURCE);
            return None;
        }
        Some(self.force_refresh())
    }

    /// Start a refresh; the result of any running refresh will be ignored.
    pub fn force_refresh(&mut self) -> RefreshTicket {
        self.generation += 1;
        self.in_flight = Some(self.generation);
        self.loading = true;
        RefreshTicket {
            generation: self.generation,
        }
    }

    /// Apply a refresh result. Returns `false` for a superseded ticket.
    ///
    /// Records with a pending change keep their local version; records
    /// removed locally stay removed.
    pub fn finish_refresh(&mut self, ticket: RefreshTicket, result: CoreResult<Vec<R>>) -> bool {
        if self.in_flight != Some(ticket.generation) {
            log::debug!("Dropping stale {} refresh", R::RESOURCE);
            return false;
        }
        self.in_flight = None;
        self.loading = false;

        match result {
            Ok(fresh) => {
                self.items = fresh
                    .into_iter()
                    .filter_map(|item| match self.pending.get(item.id()) {
                        Some(Pending::Changed { local, .. }) => Some(local.clone()),
                        Some(Pending::Removed { .. }) => None,
                        None => Some(item),
                    })
                    .collect();
            }
            Err(e) => self.fail("Refresh failed", &e),
        }
        true
    }

    // ===== Save =====

    /// Apply an edit locally. New records (empty id) are only added once
    /// the backend returns them.
    ///
    /// Returns `false` when the record already has a change in flight.
    pub fn stage_edit(&mut self, item: &R) -> bool {
        let id = item.id().to_string();
        if id.is_empty() {
            self.creating += 1;
            return true;
        }
        if self.pending.contains_key(&id) {
            return false;
        }
        let Some(slot) = self.items.iter_mut().find(|i| i.id() == id) else {
            log::warn!("{}: no record with id {id} to edit", R::RESOURCE);
            return false;
        };
        let previous = std::mem::replace(slot, item.clone());
        self.pending.insert(
            id,
            Pending::Changed {
                local: item.clone(),
                previous,
            },
        );
        true
    }

    /// Settle a save started with [`Self::stage_edit`].
    pub fn finish_save(&mut self, staged: &R, result: CoreResult<R>) {
        let id = staged.id();
        if id.is_empty() {
            self.creating = self.creating.saturating_sub(1);
        }
        match result {
            Ok(saved) => {
                if id.is_empty() {
                    self.items.push(saved);
                } else {
                    self.pending.remove(id);
                    self.replace(id, saved);
                }
                self.toast = Some(Toast::success("Saved"));
            }
            Err(e) => {
                if let Some(Pending::Changed { previous, .. }) = self.pending.remove(id) {
                    self.replace(id, previous);
                }
                self.fail("Save failed", &e);
            }
        }
    }

    // ===== Delete =====

    /// Remove a record locally. Returns `false` when it is unknown or busy.
    pub fn begin_delete(&mut self, id: &str) -> bool {
        if self.pending.contains_key(id) {
            return false;
        }
        let Some(index) = self.items.iter().position(|i| i.id() == id) else {
            return false;
        };
        let previous = self.items.remove(index);
        self.pending
            .insert(id.to_string(), Pending::Removed { index, previous });
        true
    }

    /// Settle a delete; the record is put back where it was on failure.
    pub fn finish_delete(&mut self, id: &str, result: CoreResult<()>) {
        let pending = self.pending.remove(id);
        match result {
            Ok(()) => self.toast = Some(Toast::success("Deleted")),
            Err(e) => {
                if let Some(Pending::Removed { index, previous }) = pending {
                    let index = index.min(self.items.len());
                    self.items.insert(index, previous);
                }
                self.fail("Delete failed", &e);
            }
        }
    }

    // ===== Toggle =====

    /// Flip a record's flag locally and return the record as it was, to
    /// send to the backend.
    pub fn begin_toggle(&mut self, id: &str) -> Option<R> {
        if self.pending.contains_key(id) {
            return None;
        }
        let slot = self.items.iter_mut().find(|i| i.id() == id)?;
        let active = slot.is_active()?;
        let previous = slot.clone();
        slot.set_active(!active);
        self.pending.insert(
            id.to_string(),
            Pending::Changed {
                local: slot.clone(),
                previous: previous.clone(),
            },
        );
        Some(previous)
    }

    pub fn finish_toggle(&mut self, id: &str, result: CoreResult<R>) {
        let pending = self.pending.remove(id);
        match result {
            Ok(updated) => self.replace(id, updated),
            Err(e) => {
                if let Some(Pending::Changed { previous, .. }) = pending {
                    self.replace(id, previous);
                }
                self.fail("Update failed", &e);
            }
        }
    }

    fn replace(&mut self, id: &str, item: R) {
        if let Some(slot) = self.items.iter_mut().find(|i| i.id() == id) {
            *slot = item;
        }
    }

    // ===== In-place I/O =====

    /// Paint from cache, then refresh.
    pub async fn mount_with(&mut self, service: &PanelService<R>) {
        self.mount(service.cached().await);
        self.refresh_with(service).await;
    }

    pub async fn refresh_with(&mut self, service: &PanelService<R>) {
        if let Some(ticket) = self.begin_refresh() {
            let result = service.fetch().await;
            self.finish_refresh(ticket, result);
        }
    }

    pub async fn save_with(&mut self, service: &PanelService<R>, item: R) {
        if self.stage_edit(&item) {
            let result = service.save(&item).await;
            self.finish_save(&item, result);
        }
    }

    pub async fn delete_with(&mut self, service: &PanelService<R>, id: &str) {
        if self.begin_delete(id) {
            let result = service.delete(id).await;
            self.finish_delete(id, result);
        }
    }

    pub async fn toggle_with(&mut self, service: &PanelService<R>, id: &str) {
        if let Some(original) = self.begin_toggle(id) {
            let result = service.toggle(&original).await;
            self.finish_toggle(id, result);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panels::ToastKind;
    use crate::test_utils::{create_test_context, login};
    use crate::types::Promo;
    use appconsole_api::{ApiError, Realm, Resource};
    use serde_json::json;

    fn promo(id: &str, title: &str) -> Promo {
        Promo {
            id: id.into(),
            title: title.into(),
            active: true,
            ..Promo::default()
        }
    }

    fn network_error() -> CoreError {
        CoreError::Api(ApiError::NetworkError {
            endpoint: "GET /promo".into(),
            detail: "offline".into(),
        })
    }

    #[test]
    fn second_refresh_is_refused_while_one_runs() {
        let mut panel = PanelController::<Promo>::new();
        let ticket = panel.begin_refresh();
        assert!(ticket.is_some());
        assert!(panel.begin_refresh().is_none());
        assert!(panel.is_loading());
    }

    #[test]
    fn superseded_refresh_is_ignored() {
        let mut panel = PanelController::<Promo>::new();
        let old = panel.force_refresh();
        let new = panel.force_refresh();

        assert!(!panel.finish_refresh(old, Ok(vec![promo("1", "old")])));
        assert!(panel.items().is_empty());
        assert!(panel.is_loading());

        assert!(panel.finish_refresh(new, Ok(vec![promo("1", "new")])));
        assert_eq!(panel.items()[0].title, "new");
        assert!(!panel.is_loading());
    }

    #[test]
    fn failed_refresh_clears_loading_and_keeps_cache() {
        let mut panel = PanelController::<Promo>::new();
        panel.mount(vec![promo("1", "cached")]);
        let ticket = panel.force_refresh();
        panel.finish_refresh(ticket, Err(network_error()));

        assert!(!panel.is_loading());
        assert_eq!(panel.items()[0].title, "cached");
        assert_eq!(panel.toast().map(|t| t.kind), Some(ToastKind::Error));
        assert!(!panel.session_expired());
    }

    #[test]
    fn refresh_keeps_pending_edits() {
        let mut panel = PanelController::<Promo>::new();
        panel.mount(vec![promo("1", "A"), promo("2", "B")]);
        assert!(panel.stage_edit(&promo("1", "A edited")));
        assert!(panel.begin_delete("2"));

        let ticket = panel.force_refresh();
        panel.finish_refresh(
            ticket,
            Ok(vec![promo("1", "A"), promo("2", "B"), promo("3", "C")]),
        );

        let titles: Vec<_> = panel.items().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["A edited", "C"]);
    }

    #[test]
    fn failed_save_reverts() {
        let mut panel = PanelController::<Promo>::new();
        panel.mount(vec![promo("1", "A")]);
        let edited = promo("1", "A edited");
        panel.stage_edit(&edited);
        assert!(panel.is_busy("1"));
        assert!(!panel.stage_edit(&promo("1", "again")));

        panel.finish_save(&edited, Err(network_error()));
        assert_eq!(panel.items()[0].title, "A");
        assert!(!panel.is_busy("1"));
    }

    #[test]
    fn failed_delete_restores_position() {
        let mut panel = PanelController::<Promo>::new();
        panel.mount(vec![promo("1", "A"), promo("2", "B"), promo("3", "C")]);
        panel.begin_delete("2");
        assert_eq!(panel.items().len(), 2);

        panel.finish_delete("2", Err(network_error()));
        assert_eq!(panel.items()[1].id, "2");
    }

    #[test]
    fn toggle_is_optimistic_and_reverted_on_failure() {
        let mut panel = PanelController::<Promo>::new();
        panel.mount(vec![promo("1", "A")]);

        let sent = panel.begin_toggle("1").unwrap();
        assert!(sent.active);
        assert!(!panel.items()[0].active);
        assert!(panel.begin_toggle("1").is_none());

        panel.finish_toggle("1", Err(network_error()));
        assert!(panel.items()[0].active);
    }

    #[test]
    fn missing_session_flags_expiry() {
        let mut panel = PanelController::<Promo>::new();
        let ticket = panel.force_refresh();
        panel.finish_refresh(ticket, Err(CoreError::MissingSession(Realm::Admin)));
        assert!(panel.session_expired());
    }

    #[tokio::test]
    async fn mount_paints_cache_then_refreshes() {
        let (ctx, api) = create_test_context();
        login(&ctx, Realm::Admin).await;
        let service = PanelService::<Promo>::new(ctx.clone(), Realm::Admin);
        service.store_cache(&[promo("1", "cached")]).await;
        api.set_list(Resource::Promos, json!({"success": true, "data": [{"id": 1, "title": "fresh"}]}))
            .await;

        let mut panel = PanelController::new();
        panel.mount_with(&service).await;

        assert_eq!(panel.items()[0].title, "fresh");
        assert!(!panel.is_loading());
        assert_eq!(service.cached().await[0].title, "fresh");
    }

    #[tokio::test]
    async fn create_appends_backend_record() {
        let (ctx, _api) = create_test_context();
        login(&ctx, Realm::Admin).await;
        let service = PanelService::<Promo>::new(ctx, Realm::Admin);

        let mut panel = PanelController::new();
        panel.save_with(&service, promo("", "Baru")).await;

        assert_eq!(panel.items().len(), 1);
        assert!(!panel.items()[0].id.is_empty());
        assert!(!panel.is_creating());
        assert_eq!(panel.toast().map(|t| t.kind), Some(ToastKind::Success));
    }

    #[tokio::test]
    async fn toggle_without_session_reverts_and_flags_expiry() {
        let (ctx, api) = create_test_context();
        let service = PanelService::<Promo>::new(ctx, Realm::Admin);

        let mut panel = PanelController::new();
        panel.mount(vec![promo("1", "A")]);
        panel.toggle_with(&service, "1").await;

        assert!(panel.items()[0].active);
        assert!(panel.session_expired());
        assert_eq!(api.mutation_calls().await, 0);
    }
}
