//! Key-value store key names
//!
//! These names are shared with the web console, so existing browser
//! storage exports can be imported as-is.

use appconsole_api::{Realm, Resource};

/// Sidebar open/closed flag (`"true"` / `"false"`).
pub const SIDEBAR_OPEN: &str = "sidebarOpen";

/// Key holding the session key of a realm.
pub fn session_key(realm: Realm) -> &'static str {
    match realm {
        Realm::Admin => "adminSessionKey",
        Realm::Member => "memberSessionKey",
    }
}

/// Key holding the auth seed of a realm.
pub fn auth_seed(realm: Realm) -> &'static str {
    match realm {
        Realm::Admin => "adminAuthSeed",
        Realm::Member => "memberAuthSeed",
    }
}

/// Key holding the optional session token of a realm.
pub fn session_token(realm: Realm) -> &'static str {
    match realm {
        Realm::Admin => "adminToken",
        Realm::Member => "memberToken",
    }
}

/// Key holding the JSON list of recent failed login timestamps.
pub fn login_attempts(realm: Realm) -> String {
    format!("loginAttempts:{realm}")
}

/// Key holding the lockout expiry timestamp (epoch milliseconds).
pub fn login_lockout_until(realm: Realm) -> String {
    format!("loginLockoutUntil:{realm}")
}

/// Key holding the cached list or document of a resource.
pub fn cache(resource: Resource) -> String {
    format!("cache:{}", resource.key())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_names() {
        assert_eq!(session_key(Realm::Admin), "adminSessionKey");
        assert_eq!(auth_seed(Realm::Member), "memberAuthSeed");
        assert_eq!(login_attempts(Realm::Admin), "loginAttempts:admin");
        assert_eq!(login_lockout_until(Realm::Member), "loginLockoutUntil:member");
        assert_eq!(cache(Resource::Rewards), "cache:rewards");
    }
}
