//! Key bindings

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    pub const fn shift(code: KeyCode) -> Self {
        Self::new(KeyModifiers::SHIFT, code)
    }

    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

pub struct DefaultKeymap;

impl DefaultKeymap {
    // Global
    pub const QUIT: KeyBinding = KeyBinding::alt(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::alt(KeyCode::Char('h'));
    pub const REFRESH: KeyBinding = KeyBinding::alt(KeyCode::Char('r'));
    pub const LOGOUT: KeyBinding = KeyBinding::alt(KeyCode::Char('l'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);
    pub const SWITCH_FOCUS: KeyBinding = KeyBinding::key(KeyCode::Tab);

    // Records
    pub const ACTION_ADD: KeyBinding = KeyBinding::alt(KeyCode::Char('a'));
    pub const ACTION_EDIT: KeyBinding = KeyBinding::alt(KeyCode::Char('e'));
    pub const ACTION_DELETE: KeyBinding = KeyBinding::alt(KeyCode::Char('d'));
    pub const ACTION_TOGGLE: KeyBinding = KeyBinding::alt(KeyCode::Char('t'));
    pub const ACTION_SAVE: KeyBinding = KeyBinding::alt(KeyCode::Char('s'));

    // Canvas
    pub const DUPLICATE: KeyBinding = KeyBinding::alt(KeyCode::Char('c'));
    pub const PREVIEW_MODE: KeyBinding = KeyBinding::alt(KeyCode::Char('p'));
    pub const UPLOAD: KeyBinding = KeyBinding::alt(KeyCode::Char('u'));
    pub const NEW_SCREEN: KeyBinding = KeyBinding::alt(KeyCode::Char('n'));
    pub const MOVE_UP: KeyBinding = KeyBinding::shift(KeyCode::Up);
    pub const MOVE_DOWN: KeyBinding = KeyBinding::shift(KeyCode::Down);
    pub const PREV_SCREEN: KeyBinding = KeyBinding::key(KeyCode::Char('['));
    pub const NEXT_SCREEN: KeyBinding = KeyBinding::key(KeyCode::Char(']'));

    // Login
    pub const RESEND_OTP: KeyBinding = KeyBinding::alt(KeyCode::Char('r'));
}
