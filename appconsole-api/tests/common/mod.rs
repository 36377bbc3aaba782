//! Shared helpers for live backend tests

#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use appconsole_api::{create_api, ClientOptions, ConsoleApi, SessionCredentials};

/// Skip the test when a required environment variable is missing.
#[macro_export]
macro_rules! skip_if_no_env {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("skipping: missing environment variable {}", $var);
                return;
            }
        )+
    };
}

/// Live test context built from the environment.
pub struct TestContext {
    pub api: Arc<dyn ConsoleApi>,
    pub session: SessionCredentials,
}

impl TestContext {
    /// `APPCONSOLE_TEST_API`, `APPCONSOLE_TEST_SESSION_KEY`, `APPCONSOLE_TEST_AUTH_SEED`
    pub fn from_env() -> Option<Self> {
        let base = env::var("APPCONSOLE_TEST_API").ok()?;
        let session_key = env::var("APPCONSOLE_TEST_SESSION_KEY").ok()?;
        let auth_seed = env::var("APPCONSOLE_TEST_AUTH_SEED").ok()?;
        let api = create_api(ClientOptions::new(base)).ok()?;
        Some(Self {
            api,
            session: SessionCredentials::new(session_key, auth_seed),
        })
    }
}
