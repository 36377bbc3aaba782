//! Modal dialog state

use appconsole_core::editor::EditorAlert;
use appconsole_core::types::WidgetKind;

use crate::model::page::PanelKind;
use crate::model::state::form::FormField;

/// What a confirmed delete removes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteTarget {
    Panel { kind: PanelKind, id: String },
    Widget { instance_id: String },
    CutoffTime(usize),
    ActionButton(usize),
    HeaderMenuItem(usize),
    HeaderBackground,
    Screen(String),
}

/// What a submitted form writes to. `None` indexes/ids create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormTarget {
    Panel { kind: PanelKind, id: Option<String> },
    Widget { instance_id: String },
    ActionButton(usize),
    MenuItem(Option<usize>),
    CutoffTime(Option<usize>),
    NewScreen,
}

/// What a single-line input writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputTarget {
    ScreenTitle,
    CarouselHeight,
    BackgroundUrl,
    /// Path of a local image to upload as the header background.
    UploadBackground,
}

#[derive(Debug, Clone)]
pub enum Modal {
    Help,
    Error {
        title: String,
        message: String,
    },
    /// Alert raised by the canvas editor.
    Alert(EditorAlert),
    ConfirmDelete {
        target: DeleteTarget,
        label: String,
        /// 0 = cancel, 1 = delete
        focus: usize,
    },
    Form {
        target: FormTarget,
        title: String,
        fields: Vec<FormField>,
        focus: usize,
        error: Option<String>,
    },
    WidgetPicker {
        selected: usize,
    },
    Input {
        target: InputTarget,
        title: String,
        label: &'static str,
        value: String,
        error: Option<String>,
    },
}

#[derive(Debug, Default)]
pub struct ModalState {
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn show(&mut self, modal: Modal) {
        self.active = Some(modal);
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }

    pub fn show_error(&mut self, title: &str, message: &str) {
        self.active = Some(Modal::Error {
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    pub fn show_confirm_delete(&mut self, target: DeleteTarget, label: impl Into<String>) {
        self.active = Some(Modal::ConfirmDelete {
            target,
            label: label.into(),
            focus: 0,
        });
    }

    pub fn show_form(&mut self, target: FormTarget, title: impl Into<String>, fields: Vec<FormField>) {
        self.active = Some(Modal::Form {
            target,
            title: title.into(),
            fields,
            focus: 0,
            error: None,
        });
    }

    pub fn show_input(
        &mut self,
        target: InputTarget,
        title: impl Into<String>,
        label: &'static str,
        value: impl Into<String>,
    ) {
        self.active = Some(Modal::Input {
            target,
            title: title.into(),
            label,
            value: value.into(),
            error: None,
        });
    }

    pub fn show_widget_picker(&mut self) {
        self.active = Some(Modal::WidgetPicker { selected: 0 });
    }

    /// Move focus to the next field, button or option.
    pub fn focus_next(&mut self) {
        match &mut self.active {
            Some(Modal::Form { fields, focus, .. }) if !fields.is_empty() => {
                *focus = (*focus + 1) % fields.len();
            }
            Some(Modal::ConfirmDelete { focus, .. }) => *focus = 1 - (*focus).min(1),
            Some(Modal::WidgetPicker { selected }) => {
                *selected = (*selected + 1) % WidgetKind::ADDABLE.len();
            }
            _ => {}
        }
    }

    pub fn focus_previous(&mut self) {
        match &mut self.active {
            Some(Modal::Form { fields, focus, .. }) if !fields.is_empty() => {
                *focus = (*focus + fields.len() - 1) % fields.len();
            }
            Some(Modal::ConfirmDelete { focus, .. }) => *focus = 1 - (*focus).min(1),
            Some(Modal::WidgetPicker { selected }) => {
                let len = WidgetKind::ADDABLE.len();
                *selected = (*selected + len - 1) % len;
            }
            _ => {}
        }
    }

    /// Type into the focused text field.
    pub fn input(&mut self, c: char) {
        match &mut self.active {
            Some(Modal::Form {
                fields,
                focus,
                error,
                ..
            }) => {
                if let Some(field) = fields.get_mut(*focus) {
                    field.value.push(c);
                    *error = None;
                }
            }
            Some(Modal::Input { value, error, .. }) => {
                value.push(c);
                *error = None;
            }
            _ => {}
        }
    }

    pub fn backspace(&mut self) {
        match &mut self.active {
            Some(Modal::Form { fields, focus, .. }) => {
                if let Some(field) = fields.get_mut(*focus) {
                    field.value.pop();
                }
            }
            Some(Modal::Input { value, .. }) => {
                value.pop();
            }
            _ => {}
        }
    }

    /// Show a problem inside an open form or input instead of closing it.
    pub fn set_error(&mut self, message: String) {
        match &mut self.active {
            Some(Modal::Form { error, .. } | Modal::Input { error, .. }) => *error = Some(message),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ModalState {
        let mut modal = ModalState::default();
        modal.show_form(
            FormTarget::NewScreen,
            "New",
            vec![FormField::new("A", ""), FormField::new("B", "x")],
        );
        modal
    }

    #[test]
    fn form_focus_wraps() {
        let mut modal = form();
        modal.focus_previous();
        modal.input('1');
        modal.focus_next();
        modal.input('2');
        let Some(Modal::Form { fields, focus, .. }) = &modal.active else {
            panic!("form expected");
        };
        assert_eq!(*focus, 0);
        assert_eq!(fields[0].value, "2");
        assert_eq!(fields[1].value, "x1");
    }

    #[test]
    fn typing_clears_the_error() {
        let mut modal = form();
        modal.set_error("bad".into());
        modal.input('a');
        assert!(matches!(modal.active, Some(Modal::Form { error: None, .. })));
    }

    #[test]
    fn delete_focus_toggles() {
        let mut modal = ModalState::default();
        modal.show_confirm_delete(DeleteTarget::HeaderBackground, "bg");
        modal.focus_next();
        assert!(matches!(modal.active, Some(Modal::ConfirmDelete { focus: 1, .. })));
        modal.focus_next();
        assert!(matches!(modal.active, Some(Modal::ConfirmDelete { focus: 0, .. })));
    }

    #[test]
    fn picker_cycles_over_addable_widgets() {
        let mut modal = ModalState::default();
        modal.show_widget_picker();
        modal.focus_previous();
        assert!(matches!(
            modal.active,
            Some(Modal::WidgetPicker { selected }) if selected == WidgetKind::ADDABLE.len() - 1
        ));
    }
}
