//! Update layer: applies messages and task results to the model.
//!
//! Key messages arrive through [`update`]. Finished backend tasks call the
//! result handlers of the page modules (`login::verified`,
//! `panels::refreshed`, ...) directly from their job.
//!
//! After every message the session guard runs: a page whose controller
//! saw the session vanish sends the user back to the login page.

pub mod canvas;
mod content;
pub mod cutoff;
pub mod login;
mod modal;
mod navigation;
pub mod panels;
pub mod settings;
#[cfg(test)]
mod tests;

use std::time::Instant;

use appconsole_api::Realm;
use appconsole_app::StartupReport;
use appconsole_core::types::Route;

use crate::i18n::t;
use crate::message::AppMessage;
use crate::model::state::{with_panel, LoginState, PanelRecord};
use crate::model::{App, FocusPanel, NavigationState, Page, PanelKind};

pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            if app.sidebar_open && !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Navigation(nav_msg) => navigation::update(app, nav_msg),

        AppMessage::Content(content_msg) => content::update(app, content_msg),

        AppMessage::Modal(modal_msg) => modal::update(app, modal_msg),

        AppMessage::Login(login_msg) => login::update(app, login_msg),

        AppMessage::GoBack => go_back(app),

        AppMessage::Refresh => refresh_page(app),

        AppMessage::ShowHelp => app.modal.show_help(),

        AppMessage::Logout => login::logout(app),

        AppMessage::ClearStatus => app.clear_status(),

        AppMessage::Tick => expire_toasts(app, Instant::now()),

        AppMessage::Noop => {}
    }
    guard_session(app);
}

/// Pick the first page from the requested route and the restored sessions.
pub fn start(app: &mut App, requested: Option<Route>, startup: StartupReport) {
    let route = requested
        .unwrap_or_else(|| Route::home_for(app.realm))
        .guard(|realm| startup.has_session(realm));
    log::info!("Starting at {}", route.path());

    match route {
        Route::Admin => enter_dashboard(app, Realm::Admin, None),
        Route::WebReport => enter_dashboard(app, Realm::Member, None),
        Route::AdminLogin => go_to_login(app, Realm::Admin),
        Route::Login => go_to_login(app, Realm::Member),
        Route::PrivacyPolicy => {
            app.current_page = Page::PublicContent {
                slug: Some(crate::model::PRIVACY_POLICY_SLUG),
            };
            panels::mount_cache::<appconsole_core::types::MarkdownDoc>(app);
        }
        Route::Content => {
            app.current_page = Page::PublicContent { slug: None };
            panels::mount_cache::<appconsole_core::types::MarkdownDoc>(app);
        }
    }
}

/// Show the dashboard of `realm` on its home page.
pub fn enter_dashboard(app: &mut App, realm: Realm, user_name: Option<String>) {
    app.realm = realm;
    app.user_name = user_name;
    app.navigation = NavigationState::for_realm(realm);
    app.focus = if app.sidebar_open {
        FocusPanel::Navigation
    } else {
        FocusPanel::Content
    };
    let home = app.navigation.home();
    open_page(app, home);
}

pub fn go_to_login(app: &mut App, realm: Realm) {
    app.reset_session_state();
    app.realm = realm;
    app.login = LoginState::new(realm);
    app.current_page = Page::Login;
}

/// Switch to `page` and load what it shows.
pub fn open_page(app: &mut App, page: Page) {
    app.current_page = page;
    app.navigation.select_page(page);
    app.clear_status();
    match page {
        Page::Canvas => canvas::open(app),
        Page::Panel(kind) => with_panel!(kind, R => panels::open::<R>(app)),
        Page::Cutoff => cutoff::open(app),
        Page::Login | Page::Settings | Page::PublicContent { .. } => {}
    }
}

fn go_back(app: &mut App) {
    if app.modal.is_open() {
        app.modal.close();
        app.clear_status();
        return;
    }
    match app.current_page {
        Page::PublicContent { .. } => go_to_login(app, app.realm),
        _ if app.focus.is_content() && app.sidebar_open => app.focus = FocusPanel::Navigation,
        _ => app.clear_status(),
    }
}

fn refresh_page(app: &mut App) {
    app.set_status(t().common.refreshing);
    match app.current_page {
        Page::Canvas => canvas::refresh(app, true),
        Page::Panel(kind) => with_panel!(kind, R => panels::refresh::<R>(app, true)),
        Page::Cutoff => cutoff::refresh(app, true),
        Page::Login | Page::Settings | Page::PublicContent { .. } => app.clear_status(),
    }
}

fn expire_toasts(app: &mut App, now: Instant) {
    app.canvas.config.expire_toast(now);
    app.cutoff.document.expire_toast(now);
    for kind in PanelKind::ALL {
        with_panel!(kind, R => R::view_mut(&mut app.panels).controller.expire_toast(now));
    }
}

/// Whether any controller of the dashboard lost its session.
fn session_expired(app: &App) -> bool {
    app.canvas.config.session_expired()
        || app.cutoff.document.session_expired()
        || PanelKind::ALL
            .into_iter()
            .any(|kind| with_panel!(kind, R => R::view(&app.panels).controller.session_expired()))
}

fn guard_session(app: &mut App) {
    if app.current_page.is_full_screen() || !session_expired(app) {
        return;
    }
    log::warn!("{} session expired, back to login", app.realm);
    go_to_login(app, app.realm);
    app.set_status(t().common.session_expired);
}

/// Apply every job that has arrived.
pub fn apply_jobs(app: &mut App) {
    for job in app.backend.drain() {
        job(app);
    }
    guard_session(app);
}
