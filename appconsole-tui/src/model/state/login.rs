//! Login page state

use chrono::{DateTime, Utc};

use appconsole_api::Realm;
use appconsole_core::services::OtpRequest;

/// Longest OTP the backend issues.
const MAX_CODE_LEN: usize = 8;
const MAX_PHONE_LEN: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginStep {
    /// Typing the phone number.
    #[default]
    Phone,
    /// OTP sent, typing the code.
    Code,
}

/// Two-step phone/OTP login form.
#[derive(Debug, Clone, Default)]
pub struct LoginState {
    pub realm: Realm,
    pub step: LoginStep,
    pub phone: String,
    pub code: String,
    /// Last successful OTP request.
    pub request: Option<OtpRequest>,
    /// A request or verification is running.
    pub pending: bool,
    pub error: Option<String>,
    pub info: Option<String>,
}

impl LoginState {
    pub fn new(realm: Realm) -> Self {
        Self {
            realm,
            ..Self::default()
        }
    }

    /// Start over in another realm.
    pub fn switch_realm(&mut self) {
        let realm = match self.realm {
            Realm::Admin => Realm::Member,
            Realm::Member => Realm::Admin,
        };
        *self = Self::new(realm);
    }

    /// Feed a typed character to the current field; anything the field
    /// does not accept is ignored.
    pub fn input(&mut self, c: char) {
        if self.pending {
            return;
        }
        match self.step {
            LoginStep::Phone => {
                let accepted = c.is_ascii_digit() || matches!(c, '+' | ' ' | '-');
                if accepted && self.phone.len() < MAX_PHONE_LEN {
                    self.phone.push(c);
                }
            }
            LoginStep::Code => {
                if c.is_ascii_digit() && self.code.len() < MAX_CODE_LEN {
                    self.code.push(c);
                }
            }
        }
        self.error = None;
    }

    pub fn backspace(&mut self) {
        if self.pending {
            return;
        }
        match self.step {
            LoginStep::Phone => self.phone.pop(),
            LoginStep::Code => self.code.pop(),
        };
    }

    /// Back from the code step to the phone step.
    pub fn back_to_phone(&mut self) {
        self.step = LoginStep::Phone;
        self.code.clear();
        self.error = None;
        self.info = None;
    }

    /// Record a delivered OTP and move to the code step.
    pub fn otp_sent(&mut self, request: OtpRequest) {
        self.pending = false;
        self.error = None;
        self.info = request.challenge.message.clone();
        self.phone.clone_from(&request.phone);
        self.step = LoginStep::Code;
        self.code.clear();
        self.request = Some(request);
    }

    pub fn failed(&mut self, message: String) {
        self.pending = false;
        self.info = None;
        self.error = Some(message);
    }

    /// Phone number the code was sent to, normalized by the backend call.
    pub fn sent_to(&self) -> &str {
        self.request.as_ref().map_or(&self.phone, |r| &r.phone)
    }

    /// Seconds until another OTP may be requested.
    pub fn resend_remaining(&self, now: DateTime<Utc>) -> u64 {
        self.request
            .as_ref()
            .map_or(0, |r| r.countdown.remaining_secs(now))
    }

    pub fn can_resend(&self, now: DateTime<Utc>) -> bool {
        !self.pending
            && self
                .request
                .as_ref()
                .is_none_or(|r| r.countdown.can_resend(now))
    }
}
