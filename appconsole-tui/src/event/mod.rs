//! Event layer: turns terminal input into messages.
//!
//! [`poll_event`] waits for input with a timeout so the loop keeps
//! drawing (countdowns, toasts, finished tasks) while the user is idle.
//! [`handle_event`] maps a key to an [`AppMessage`](crate::message::AppMessage):
//!
//! 1. an open dialog gets every key first
//! 2. the full-screen pages (login, public content) have their own keys
//! 3. global shortcuts
//! 4. sidebar or content keys, depending on focus

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
