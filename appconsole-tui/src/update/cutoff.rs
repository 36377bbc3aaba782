//! Cutoff times page

use appconsole_core::error::CoreResult;
use appconsole_core::panels::{DocumentService, RefreshTicket};
use appconsole_core::types::{CutoffConfig, CutoffTime};

use crate::backend::tasks;
use crate::i18n::t;
use crate::message::ContentMessage;
use crate::model::state::{DeleteTarget, FormRecord, FormTarget};
use crate::model::{App, Page};

fn service(app: &App) -> DocumentService<CutoffConfig> {
    app.backend.state().document::<CutoffConfig>(app.realm)
}

pub fn open(app: &mut App) {
    if !app.cutoff.mounted {
        let cached = app.backend.block_on(service(app).cached());
        app.cutoff.document.mount(cached);
        app.cutoff.mounted = true;
    }
    refresh(app, false);
}

pub fn refresh(app: &mut App, force: bool) {
    let document = &mut app.cutoff.document;
    let ticket = if force {
        Some(document.force_refresh())
    } else {
        document.begin_refresh()
    };
    if let Some(ticket) = ticket {
        let service = service(app);
        app.backend.spawn(tasks::refresh_cutoff(service, ticket));
    }
}

pub fn loaded(app: &mut App, ticket: RefreshTicket, result: CoreResult<CutoffConfig>) {
    if !app.cutoff.document.finish_refresh(ticket, result) {
        return;
    }
    let len = app.cutoff.times().len();
    if app.cutoff.selected >= len {
        app.cutoff.selected = len.saturating_sub(1);
    }
    if app.current_page == Page::Cutoff {
        app.clear_status();
    }
}

pub fn saved(app: &mut App, result: CoreResult<CutoffConfig>) {
    app.cutoff.document.finish_save(result);
    if app.current_page == Page::Cutoff {
        app.clear_status();
    }
}

pub fn update(app: &mut App, msg: ContentMessage) {
    match msg {
        ContentMessage::SelectPrevious => app.cutoff.select_previous(),
        ContentMessage::SelectNext => app.cutoff.select_next(),
        ContentMessage::SelectFirst => app.cutoff.select_first(),
        ContentMessage::SelectLast => app.cutoff.select_last(),
        _ if !app.can_mutate() => app.set_status(t().common.read_only),
        ContentMessage::Add => show_form(app, None),
        ContentMessage::Confirm | ContentMessage::Edit => {
            let index = app.cutoff.selected;
            if app.cutoff.selected_time().is_some() {
                show_form(app, Some(index));
            }
        }
        ContentMessage::Delete => {
            let index = app.cutoff.selected;
            if let Some(time) = app.cutoff.selected_time() {
                let label = format!("{} {}", time.label, time.time);
                app.modal
                    .show_confirm_delete(DeleteTarget::CutoffTime(index), label);
            }
        }
        ContentMessage::Toggle => app.cutoff.toggle_enabled(),
        ContentMessage::Save => save(app),
        _ => {}
    }
}

fn show_form(app: &mut App, index: Option<usize>) {
    let time = index
        .and_then(|i| app.cutoff.times().get(i).cloned())
        .unwrap_or_default();
    let title = match index {
        Some(_) => format!("{}: {}", t().modal.edit_title, t().cutoff.times),
        None => format!("{} {}", t().modal.new_title, t().cutoff.times),
    };
    app.modal
        .show_form(FormTarget::CutoffTime(index), title, time.form_fields());
}

fn save(app: &mut App) {
    let Some(draft) = app.cutoff.document.begin_save() else {
        return;
    };
    log::info!("Saving {} cutoff times", draft.times.len());
    app.set_status(t().cutoff.saving);
    let service = service(app);
    app.backend.spawn(tasks::save_cutoff(service, draft));
}

pub(super) fn submit_form(
    app: &mut App,
    index: Option<usize>,
    values: &[String],
) -> Result<(), String> {
    let mut time = CutoffTime::default();
    time.apply_form(values)?;
    app.cutoff.put_time(index, time);
    Ok(())
}

pub(super) fn confirm_delete(app: &mut App, index: usize) {
    app.cutoff.remove_time(index);
}
