//! Key dispatch

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, LoginMessage, ModalMessage, NavigationMessage};
use crate::model::state::Modal;
use crate::model::{App, Page};

/// Wait up to `timeout` for the next terminal event.
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // Resize redraws on the next frame
        _ => AppMessage::Noop,
    }
}

/// Plain typing: no modifier, or shift for capitals and symbols.
fn typed_char(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            Some(c)
        }
        _ => None,
    }
}

fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // Press only; some terminals also report release and repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if app.modal.is_open() {
        return handle_modal_keys(key, app);
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    match app.current_page {
        Page::Login => return handle_login_keys(key),
        Page::PublicContent { .. } => return handle_public_keys(key),
        _ => {}
    }

    if DefaultKeymap::HELP.matches(&key) || (key.modifiers.is_empty() && key.code == KeyCode::Char('?')) {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }
    if DefaultKeymap::LOGOUT.matches(&key) {
        return AppMessage::Logout;
    }
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }
    if DefaultKeymap::SWITCH_FOCUS.matches(&key) {
        return AppMessage::ToggleFocus;
    }

    if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else {
        handle_content_keys(key, app)
    }
}

fn handle_login_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::RESEND_OTP.matches(&key) {
        return AppMessage::Login(LoginMessage::Resend);
    }
    match key.code {
        KeyCode::Enter => AppMessage::Login(LoginMessage::Submit),
        KeyCode::Esc => AppMessage::Login(LoginMessage::Back),
        KeyCode::Tab => AppMessage::Login(LoginMessage::SwitchRealm),
        KeyCode::Backspace => AppMessage::Login(LoginMessage::Backspace),
        _ => typed_char(&key).map_or(AppMessage::Noop, |c| {
            AppMessage::Login(LoginMessage::Input(c))
        }),
    }
}

fn handle_public_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Esc => AppMessage::GoBack,
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        _ => AppMessage::Noop,
    }
}

fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Navigation(NavigationMessage::SelectNext),
        KeyCode::Enter => AppMessage::Navigation(NavigationMessage::Confirm),
        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),
        _ => AppMessage::Noop,
    }
}

fn handle_content_keys(key: KeyEvent, app: &App) -> AppMessage {
    let actions = [
        (DefaultKeymap::ACTION_ADD, ContentMessage::Add),
        (DefaultKeymap::ACTION_EDIT, ContentMessage::Edit),
        (DefaultKeymap::ACTION_DELETE, ContentMessage::Delete),
        (DefaultKeymap::ACTION_TOGGLE, ContentMessage::Toggle),
        (DefaultKeymap::ACTION_SAVE, ContentMessage::Save),
    ];
    if let Some((_, msg)) = actions.into_iter().find(|(binding, _)| binding.matches(&key)) {
        return AppMessage::Content(msg);
    }

    match app.current_page {
        Page::Canvas => handle_canvas_keys(key),
        Page::Settings => handle_settings_keys(key),
        _ => handle_list_keys(key),
    }
}

fn handle_list_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Enter => AppMessage::Content(ContentMessage::Confirm),
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),
        _ => AppMessage::Noop,
    }
}

fn handle_canvas_keys(key: KeyEvent) -> AppMessage {
    let actions = [
        (DefaultKeymap::DUPLICATE, ContentMessage::Duplicate),
        (DefaultKeymap::PREVIEW_MODE, ContentMessage::TogglePreview),
        (DefaultKeymap::UPLOAD, ContentMessage::Upload),
        (DefaultKeymap::NEW_SCREEN, ContentMessage::NewScreen),
        (DefaultKeymap::MOVE_UP, ContentMessage::MoveUp),
        (DefaultKeymap::MOVE_DOWN, ContentMessage::MoveDown),
        (DefaultKeymap::PREV_SCREEN, ContentMessage::PrevScreen),
        (DefaultKeymap::NEXT_SCREEN, ContentMessage::NextScreen),
    ];
    if let Some((_, msg)) = actions.into_iter().find(|(binding, _)| binding.matches(&key)) {
        return AppMessage::Content(msg);
    }
    match key.code {
        KeyCode::Left | KeyCode::Char('h') if key.modifiers.is_empty() => {
            AppMessage::Content(ContentMessage::TogglePrev)
        }
        KeyCode::Right | KeyCode::Char('l') if key.modifiers.is_empty() => {
            AppMessage::Content(ContentMessage::ToggleNext)
        }
        _ => handle_list_keys(key),
    }
}

fn handle_settings_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => AppMessage::Content(ContentMessage::TogglePrev),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Enter => {
            AppMessage::Content(ContentMessage::ToggleNext)
        }
        _ => handle_list_keys(key),
    }
}

fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) | (KeyModifiers::NONE, KeyCode::Esc) => {
            return AppMessage::Modal(ModalMessage::Close);
        }
        _ => {}
    }

    let Some(modal) = &app.modal.active else {
        return AppMessage::Noop;
    };

    match modal {
        Modal::Form { .. } => handle_form_keys(key),
        Modal::Input { .. } => match key.code {
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
            KeyCode::Backspace => AppMessage::Modal(ModalMessage::Backspace),
            _ => typed_char(&key).map_or(AppMessage::Noop, |c| {
                AppMessage::Modal(ModalMessage::Input(c))
            }),
        },
        Modal::ConfirmDelete { .. } => match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                AppMessage::Modal(ModalMessage::ToggleDeleteFocus)
            }
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
            _ => AppMessage::Noop,
        },
        Modal::WidgetPicker { .. } => match key.code {
            KeyCode::Up | KeyCode::Char('k') => AppMessage::Modal(ModalMessage::PrevField),
            KeyCode::Down | KeyCode::Char('j') => AppMessage::Modal(ModalMessage::NextField),
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
            _ => AppMessage::Noop,
        },
        Modal::Help | Modal::Error { .. } | Modal::Alert(_) => match key.code {
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Close),
            _ => AppMessage::Noop,
        },
    }
}

fn handle_form_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Tab | KeyCode::Down => AppMessage::Modal(ModalMessage::NextField),
        KeyCode::BackTab | KeyCode::Up => AppMessage::Modal(ModalMessage::PrevField),
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
        KeyCode::Backspace => AppMessage::Modal(ModalMessage::Backspace),
        _ => typed_char(&key).map_or(AppMessage::Noop, |c| {
            AppMessage::Modal(ModalMessage::Input(c))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(modifiers: KeyModifiers, code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn typing_accepts_shifted_symbols_only() {
        assert_eq!(typed_char(&press(KeyModifiers::SHIFT, KeyCode::Char('+'))), Some('+'));
        assert_eq!(typed_char(&press(KeyModifiers::NONE, KeyCode::Char('7'))), Some('7'));
        assert_eq!(typed_char(&press(KeyModifiers::ALT, KeyCode::Char('r'))), None);
    }

    #[test]
    fn login_keys() {
        assert!(matches!(
            handle_login_keys(press(KeyModifiers::ALT, KeyCode::Char('r'))),
            AppMessage::Login(LoginMessage::Resend)
        ));
        assert!(matches!(
            handle_login_keys(press(KeyModifiers::NONE, KeyCode::Tab)),
            AppMessage::Login(LoginMessage::SwitchRealm)
        ));
        assert!(matches!(
            handle_login_keys(press(KeyModifiers::NONE, KeyCode::Char('0'))),
            AppMessage::Login(LoginMessage::Input('0'))
        ));
    }

    #[test]
    fn canvas_shortcuts() {
        assert!(matches!(
            handle_canvas_keys(press(KeyModifiers::SHIFT, KeyCode::Up)),
            AppMessage::Content(ContentMessage::MoveUp)
        ));
        assert!(matches!(
            handle_canvas_keys(press(KeyModifiers::NONE, KeyCode::Up)),
            AppMessage::Content(ContentMessage::SelectPrevious)
        ));
        assert!(matches!(
            handle_canvas_keys(press(KeyModifiers::NONE, KeyCode::Char(']'))),
            AppMessage::Content(ContentMessage::NextScreen)
        ));
        assert!(matches!(
            handle_canvas_keys(press(KeyModifiers::ALT, KeyCode::Char('p'))),
            AppMessage::Content(ContentMessage::TogglePreview)
        ));
    }

    #[test]
    fn form_keys_type_into_fields() {
        assert!(matches!(
            handle_form_keys(press(KeyModifiers::NONE, KeyCode::Char('j'))),
            AppMessage::Modal(ModalMessage::Input('j'))
        ));
        assert!(matches!(
            handle_form_keys(press(KeyModifiers::SHIFT, KeyCode::BackTab)),
            AppMessage::Modal(ModalMessage::PrevField)
        ));
    }
}
