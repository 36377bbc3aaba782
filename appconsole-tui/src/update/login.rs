//! Login and logout

use appconsole_api::Realm;
use appconsole_core::error::CoreResult;
use appconsole_core::services::{LoginOutcome, OtpRequest};
use chrono::Utc;

use crate::backend::tasks;
use crate::i18n::t;
use crate::message::LoginMessage;
use crate::model::state::LoginStep;
use crate::model::{App, Page};

pub fn update(app: &mut App, msg: LoginMessage) {
    match msg {
        LoginMessage::Input(c) => app.login.input(c),
        LoginMessage::Backspace => app.login.backspace(),
        LoginMessage::Submit => submit(app),
        LoginMessage::Resend => resend(app),
        LoginMessage::SwitchRealm => {
            if !app.login.pending {
                app.login.switch_realm();
                app.realm = app.login.realm;
            }
        }
        LoginMessage::Back => match app.login.step {
            LoginStep::Code if !app.login.pending => app.login.back_to_phone(),
            LoginStep::Code => {}
            LoginStep::Phone => app.should_quit = true,
        },
    }
}

fn submit(app: &mut App) {
    let login = &mut app.login;
    if login.pending {
        return;
    }
    match login.step {
        LoginStep::Phone => {
            if login.phone.trim().is_empty() {
                return;
            }
            send_otp(app);
        }
        LoginStep::Code => {
            if login.code.is_empty() {
                return;
            }
            login.pending = true;
            login.error = None;
            login.info = Some(t().login.verifying.to_string());
            let state = app.backend.state().clone();
            let (realm, phone, code) = (login.realm, login.sent_to().to_string(), login.code.clone());
            app.backend
                .spawn(tasks::verify_otp(state, realm, phone, code));
        }
    }
}

fn resend(app: &mut App) {
    if app.login.step != LoginStep::Code || !app.login.can_resend(Utc::now()) {
        return;
    }
    send_otp(app);
}

fn send_otp(app: &mut App) {
    let login = &mut app.login;
    login.pending = true;
    login.error = None;
    login.info = Some(t().login.sending.to_string());
    let phone = match login.step {
        LoginStep::Phone => login.phone.clone(),
        LoginStep::Code => login.sent_to().to_string(),
    };
    let state = app.backend.state().clone();
    app.backend
        .spawn(tasks::request_otp(state, login.realm, phone));
}

/// An OTP request finished.
pub fn otp_sent(app: &mut App, realm: Realm, result: CoreResult<OtpRequest>) {
    if app.current_page != Page::Login || app.login.realm != realm {
        log::debug!("Dropping OTP answer for {realm}, login form moved on");
        return;
    }
    match result {
        Ok(request) => app.login.otp_sent(request),
        Err(e) => {
            log::warn!("OTP request failed: {e}");
            app.login.failed(e.to_string());
        }
    }
}

/// An OTP verification finished.
pub fn verified(app: &mut App, realm: Realm, result: CoreResult<LoginOutcome>) {
    if app.current_page != Page::Login || app.login.realm != realm {
        log::debug!("Dropping login answer for {realm}, login form moved on");
        return;
    }
    match result {
        Ok(outcome) => {
            let name = outcome.name.clone();
            super::enter_dashboard(app, outcome.realm, name);
            let who = app.user_name.clone().unwrap_or_else(|| app.realm.to_string());
            app.set_status(format!("{} {who}", t().login.welcome));
        }
        Err(e) => {
            log::warn!("OTP verification failed: {e}");
            app.login.code.clear();
            app.login.failed(e.to_string());
        }
    }
}

/// Start logging out of the current realm.
pub fn logout(app: &mut App) {
    if app.current_page.is_full_screen() {
        return;
    }
    app.set_status(t().common.logging_out);
    let state = app.backend.state().clone();
    app.backend.spawn(tasks::logout(state, app.realm));
}

pub fn logged_out(app: &mut App, realm: Realm, result: CoreResult<()>) {
    if let Err(e) = result {
        log::error!("Logout of {realm} failed: {e}");
        app.modal.show_error(t().modal.error_title, &e.to_string());
        return;
    }
    super::go_to_login(app, realm);
    app.set_status(t().common.logged_out);
}
