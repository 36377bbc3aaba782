//! Mobile-app console TUI
//!
//! ## Architecture
//!
//! Elm Architecture (TEA):
//! - **Model**: application state (`model/`)
//! - **Message**: what happened (`message/`)
//! - **Update**: the only code that changes the model (`update/`)
//! - **View**: draws the model (`view/`)
//! - **Event**: turns key presses into messages (`event/`)
//! - **Backend**: runs network work on a tokio runtime and hands the
//!   results back to the loop (`backend/`)
//!
//! `main()` loads the configuration, starts logging, builds the
//! `AppState`, restores stored sessions, then runs the loop in the
//! alternate screen. The terminal is restored whether the loop failed or
//! not.
//!
//! An optional argument picks the first page by its web route, e.g.
//! `appconsole /login` for the member login or `appconsole /privacy-policy`.

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::{Context, Result};

use appconsole_app::{AppStateBuilder, ConsoleConfig, NoopStartupHooks};
use appconsole_core::types::Route;

use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<()> {
    // 1. Configuration and logging
    let config = ConsoleConfig::load().context("Failed to load configuration")?;
    let _log_guard = init_logging(&config.resolved_data_dir().join("logs"))?;
    tracing::info!("Starting appconsole against {}", config.api_base_url);

    if let Some(language) = i18n::Language::from_code(&config.language) {
        i18n::set_language(language);
    }
    view::theme::set_accent(config.theme_color.as_deref());

    // 2. Services and stored sessions
    let state = Arc::new(
        AppStateBuilder::new()
            .config(config)
            .build()
            .context("Failed to initialize services")?,
    );
    let backend = backend::Backend::new(Arc::clone(&state))?;
    let startup = backend.block_on(state.run_startup(&NoopStartupHooks));
    let sidebar_open = backend.block_on(state.sidebar_open());

    let requested = std::env::args().nth(1).map(|path| Route::parse(&path));
    let mut app = model::App::new(backend, sidebar_open);
    update::start(&mut app, requested, startup);

    // 3. Main loop
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app);

    // 4. Restore the terminal whatever happened
    restore_terminal(&mut terminal)?;
    tracing::info!("appconsole stopped");
    result
}
