//! Page and dialog states

mod canvas;
mod cutoff;
mod form;
mod login;
mod modal;
mod panels;
mod settings;

pub use canvas::{settings_rows, CanvasState, SettingsRow};
pub use cutoff::CutoffState;
pub use form::{FormField, FormRecord};
pub use login::{LoginState, LoginStep};
pub use modal::{DeleteTarget, FormTarget, InputTarget, Modal, ModalState};
pub(crate) use panels::with_panel;
pub use panels::{PanelRecord, PanelView, PanelsState};
pub use settings::{SettingItem, SettingsState};
