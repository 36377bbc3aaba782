//! Infrastructure unrelated to the console itself: terminal setup, log
//! files and text measuring.

mod logging;
pub mod text;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
