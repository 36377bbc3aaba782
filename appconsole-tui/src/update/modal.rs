//! Modal dialogs

use crate::message::ModalMessage;
use crate::model::state::{with_panel, DeleteTarget, FormTarget, InputTarget, Modal};
use crate::model::App;

use super::{canvas, cutoff, panels};

pub fn update(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Close => close(app),
        ModalMessage::NextField | ModalMessage::ToggleDeleteFocus => app.modal.focus_next(),
        ModalMessage::PrevField => app.modal.focus_previous(),
        ModalMessage::Input(c) => app.modal.input(c),
        ModalMessage::Backspace => app.modal.backspace(),
        ModalMessage::Confirm => confirm(app),
    }
}

fn close(app: &mut App) {
    if matches!(app.modal.active, Some(Modal::Alert(_))) {
        canvas::dismiss_alert(app);
    }
    app.modal.close();
}

fn confirm(app: &mut App) {
    // Taken out so a handler may open the next modal (an editor alert).
    let Some(modal) = app.modal.active.take() else {
        return;
    };
    match modal {
        Modal::Help | Modal::Error { .. } => {}
        Modal::Alert(_) => canvas::dismiss_alert(app),

        Modal::ConfirmDelete { focus: 0, .. } => {}
        Modal::ConfirmDelete { target, .. } => delete(app, &target),

        Modal::WidgetPicker { selected } => canvas::pick_widget(app, selected),

        Modal::Form {
            target,
            title,
            fields,
            focus,
            ..
        } => {
            let values: Vec<String> = fields.iter().map(|f| f.value.clone()).collect();
            if let Err(message) = submit_form(app, &target, &values) {
                app.modal.show(Modal::Form {
                    target,
                    title,
                    fields,
                    focus,
                    error: Some(message),
                });
            }
        }

        Modal::Input {
            target,
            title,
            label,
            value,
            ..
        } => {
            if let Err(message) = submit_input(app, target, &value) {
                app.modal.show(Modal::Input {
                    target,
                    title,
                    label,
                    value,
                    error: Some(message),
                });
            }
        }
    }
}

fn submit_form(app: &mut App, target: &FormTarget, values: &[String]) -> Result<(), String> {
    match target {
        FormTarget::Panel { kind, id } => {
            with_panel!(*kind, R => panels::submit_form::<R>(app, id.as_deref(), values))
        }
        FormTarget::Widget { instance_id } => canvas::submit_widget_form(app, instance_id, values),
        FormTarget::ActionButton(index) => canvas::submit_action_button_form(app, *index, values),
        FormTarget::MenuItem(index) => canvas::submit_menu_item_form(app, *index, values),
        FormTarget::CutoffTime(index) => cutoff::submit_form(app, *index, values),
        FormTarget::NewScreen => canvas::submit_new_screen(app, values),
    }
}

fn submit_input(app: &mut App, target: InputTarget, value: &str) -> Result<(), String> {
    canvas::submit_input(app, target, value)
}

fn delete(app: &mut App, target: &DeleteTarget) {
    match target {
        DeleteTarget::Panel { kind, id } => {
            with_panel!(*kind, R => panels::confirm_delete::<R>(app, id));
        }
        DeleteTarget::CutoffTime(index) => cutoff::confirm_delete(app, *index),
        DeleteTarget::Widget { .. }
        | DeleteTarget::ActionButton(_)
        | DeleteTarget::HeaderMenuItem(_)
        | DeleteTarget::HeaderBackground
        | DeleteTarget::Screen(_) => canvas::confirm_delete(app, target),
    }
}
