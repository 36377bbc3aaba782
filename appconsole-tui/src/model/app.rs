//! Application model

use appconsole_api::Realm;

use crate::backend::Backend;
use crate::model::state::{
    CanvasState, CutoffState, LoginState, ModalState, PanelsState, SettingsState,
};
use crate::model::{FocusPanel, NavigationState, Page};

pub struct App {
    pub should_quit: bool,

    pub focus: FocusPanel,
    pub navigation: NavigationState,
    pub current_page: Page,
    /// Realm of the dashboard being shown.
    pub realm: Realm,
    /// Display name returned by the last login.
    pub user_name: Option<String>,
    pub status_message: Option<String>,
    pub sidebar_open: bool,

    // === Page states ===
    pub login: LoginState,
    pub canvas: CanvasState,
    pub panels: PanelsState,
    pub cutoff: CutoffState,
    pub settings: SettingsState,

    pub modal: ModalState,

    pub backend: Backend,
}

impl App {
    pub fn new(backend: Backend, sidebar_open: bool) -> Self {
        let realm = backend.state().config.realm;
        Self {
            should_quit: false,
            focus: FocusPanel::Navigation,
            navigation: NavigationState::for_realm(realm),
            current_page: Page::Login,
            realm,
            user_name: None,
            status_message: None,
            sidebar_open,
            login: LoginState::new(realm),
            canvas: CanvasState::default(),
            panels: PanelsState::default(),
            cutoff: CutoffState::default(),
            settings: SettingsState::default(),
            modal: ModalState::default(),
            backend,
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Whether the signed-in user may change data. Members browse only.
    pub fn can_mutate(&self) -> bool {
        self.realm == Realm::Admin
    }

    /// Drop everything loaded under the previous session. Controllers keep
    /// their expired flag for good, so they are replaced.
    pub fn reset_session_state(&mut self) {
        self.canvas = CanvasState::default();
        self.panels = PanelsState::default();
        self.cutoff = CutoffState::default();
        self.modal.close();
        self.user_name = None;
    }
}
