//! Dialog messages

#[derive(Debug, Clone)]
pub enum ModalMessage {
    Close,
    NextField,
    PrevField,
    /// Submit the form, confirm the delete or pick the widget.
    Confirm,
    /// Move between Cancel and Delete.
    ToggleDeleteFocus,
    Input(char),
    Backspace,
}
