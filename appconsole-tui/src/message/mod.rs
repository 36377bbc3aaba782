//! Message layer
//!
//! ```text
//!   Event ──translate──▶ Message ──consume──▶ Update ──mutate──▶ Model
//!     ▲                                          │
//!     └────────────── View reads Model ◀─────────┘
//! ```
//!
//! Every key press and every finished backend task is expressed as a
//! message; only the update layer changes the model.
//!
//! - [`AppMessage`]: global actions and the sub-message envelopes
//! - [`NavigationMessage`]: sidebar
//! - [`ContentMessage`]: the page in the content area
//! - [`ModalMessage`]: the open dialog
//! - [`LoginMessage`]: the login page

mod app;
mod content;
mod login;
mod modal;
mod navigation;

pub use app::AppMessage;
pub use content::ContentMessage;
pub use login::LoginMessage;
pub use modal::ModalMessage;
pub use navigation::NavigationMessage;
