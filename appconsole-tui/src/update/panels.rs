//! List panels: loading, forms and mutations
//!
//! Every function is generic over the record type; callers holding a
//! [`PanelKind`](crate::model::PanelKind) pick the type with `with_panel!`.

use appconsole_core::error::CoreResult;
use appconsole_core::panels::{PanelService, RefreshTicket};

use crate::backend::tasks;
use crate::i18n::t;
use crate::model::state::{DeleteTarget, FormTarget, PanelRecord};
use crate::model::{App, Page};

fn service<R: PanelRecord>(app: &App) -> PanelService<R> {
    app.backend.state().panel::<R>(app.realm)
}

/// Paint the cached records once per session.
pub fn mount_cache<R: PanelRecord>(app: &mut App) {
    if R::view(&app.panels).mounted {
        return;
    }
    let cached = app.backend.block_on(service::<R>(app).cached());
    let view = R::view_mut(&mut app.panels);
    view.controller.mount(cached);
    view.mounted = true;
    view.clamp_selection();
}

pub fn open<R: PanelRecord>(app: &mut App) {
    mount_cache::<R>(app);
    refresh::<R>(app, false);
}

/// Fetch the list. Without `force` a running refresh is left alone.
pub fn refresh<R: PanelRecord>(app: &mut App, force: bool) {
    let controller = &mut R::view_mut(&mut app.panels).controller;
    let ticket = if force {
        Some(controller.force_refresh())
    } else {
        controller.begin_refresh()
    };
    match ticket {
        Some(ticket) => {
            let service = service::<R>(app);
            app.backend.spawn(tasks::refresh_panel(service, ticket));
        }
        None if force => {}
        None => log::debug!("{} refresh already running", R::RESOURCE),
    }
}

pub fn refreshed<R: PanelRecord>(app: &mut App, ticket: RefreshTicket, result: CoreResult<Vec<R>>) {
    let view = R::view_mut(&mut app.panels);
    if !view.controller.finish_refresh(ticket, result) {
        log::debug!("Dropped stale {} refresh", R::RESOURCE);
        return;
    }
    view.clamp_selection();
    if app.current_page == Page::Panel(R::KIND) {
        app.clear_status();
    }
}

/// Whether the user may run an action the panel offers as `allowed`.
fn permitted(app: &mut App, allowed: bool) -> bool {
    if !app.can_mutate() {
        app.set_status(t().common.read_only);
        return false;
    }
    if !allowed {
        app.set_status(t().panels.not_allowed);
        return false;
    }
    true
}

// ===== Actions =====

pub fn add<R: PanelRecord + Default>(app: &mut App) {
    if !permitted(app, R::CAPABILITIES.create) {
        return;
    }
    let title = format!("{} {}", t().modal.new_title, R::KIND.title());
    app.modal.show_form(
        FormTarget::Panel {
            kind: R::KIND,
            id: None,
        },
        title,
        R::default().form_fields(),
    );
}

pub fn edit<R: PanelRecord>(app: &mut App) {
    if !permitted(app, R::CAPABILITIES.edit) {
        return;
    }
    let Some(item) = R::view(&app.panels).selected_item() else {
        return;
    };
    if R::view(&app.panels).controller.is_busy(item.id()) {
        app.set_status(t().panels.busy);
        return;
    }
    let target = FormTarget::Panel {
        kind: R::KIND,
        id: Some(item.id().to_string()),
    };
    let title = format!("{}: {}", t().modal.edit_title, item.label());
    let fields = item.form_fields();
    app.modal.show_form(target, title, fields);
}

pub fn ask_delete<R: PanelRecord>(app: &mut App) {
    if !permitted(app, R::CAPABILITIES.delete) {
        return;
    }
    let Some(item) = R::view(&app.panels).selected_item() else {
        return;
    };
    let target = DeleteTarget::Panel {
        kind: R::KIND,
        id: item.id().to_string(),
    };
    let label = item.label();
    app.modal.show_confirm_delete(target, label);
}

pub fn toggle<R: PanelRecord>(app: &mut App) {
    if !permitted(app, R::CAPABILITIES.toggle) {
        return;
    }
    let view = R::view_mut(&mut app.panels);
    let Some(id) = view.selected_item().map(|item| item.id().to_string()) else {
        return;
    };
    match view.controller.begin_toggle(&id) {
        Some(original) => {
            let service = service::<R>(app);
            app.backend.spawn(tasks::toggle_record(service, original));
        }
        None => app.set_status(t().panels.busy),
    }
}

/// Write submitted form values into a record and send it.
///
/// `id` is `None` for a new record. An error keeps the form open.
pub fn submit_form<R: PanelRecord + Default>(
    app: &mut App,
    id: Option<&str>,
    values: &[String],
) -> Result<(), String> {
    let view = R::view(&app.panels);
    let mut record = match id {
        Some(id) => view
            .controller
            .item(id)
            .cloned()
            .ok_or_else(|| format!("{} {id}: {}", R::RESOURCE, t().common.no_data))?,
        None => R::default(),
    };
    record.apply_form(values)?;
    let problems = record.validate();
    if !problems.is_empty() {
        return Err(problems.join("; "));
    }

    if !R::view_mut(&mut app.panels).controller.stage_edit(&record) {
        return Err(t().panels.busy.to_string());
    }
    let service = service::<R>(app);
    app.backend.spawn(tasks::save_record(service, record));
    Ok(())
}

pub fn confirm_delete<R: PanelRecord>(app: &mut App, id: &str) {
    let view = R::view_mut(&mut app.panels);
    if !view.controller.begin_delete(id) {
        app.set_status(t().panels.busy);
        return;
    }
    view.clamp_selection();
    let service = service::<R>(app);
    app.backend
        .spawn(tasks::delete_record(service, id.to_string()));
}

// ===== Results =====

pub fn saved<R: PanelRecord>(app: &mut App, staged: &R, result: CoreResult<R>) {
    let view = R::view_mut(&mut app.panels);
    let created = staged.id().is_empty();
    let new_id = result.as_ref().ok().map(|r| r.id().to_string());
    view.controller.finish_save(staged, result);
    if let (true, Some(id)) = (created, new_id) {
        if let Some(at) = view.controller.items().iter().position(|r| r.id() == id) {
            view.selected = at;
        }
    }
    view.clamp_selection();
}

pub fn deleted<R: PanelRecord>(app: &mut App, id: &str, result: CoreResult<()>) {
    let view = R::view_mut(&mut app.panels);
    view.controller.finish_delete(id, result);
    view.clamp_selection();
}

pub fn toggled<R: PanelRecord>(app: &mut App, id: &str, result: CoreResult<R>) {
    R::view_mut(&mut app.panels)
        .controller
        .finish_toggle(id, result);
}
