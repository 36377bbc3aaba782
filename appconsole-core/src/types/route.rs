//! Console routes

use appconsole_api::Realm;

/// Pages of the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/adminlogin`
    AdminLogin,
    /// `/admin` dashboard
    Admin,
    /// `/login` (member)
    Login,
    /// `/webreport` member dashboard
    WebReport,
    /// `/privacy-policy`
    PrivacyPolicy,
    /// `/content` public markdown pages
    Content,
}

impl Route {
    /// Parse a path; unknown paths go to [`Route::Login`].
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "/adminlogin" => Self::AdminLogin,
            "/admin" => Self::Admin,
            "/webreport" => Self::WebReport,
            "/privacy-policy" => Self::PrivacyPolicy,
            "/content" => Self::Content,
            _ => Self::Login,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::AdminLogin => "/adminlogin",
            Self::Admin => "/admin",
            Self::Login => "/login",
            Self::WebReport => "/webreport",
            Self::PrivacyPolicy => "/privacy-policy",
            Self::Content => "/content",
        }
    }

    /// Realm whose session the page needs, if any.
    pub fn requires_session(self) -> Option<Realm> {
        match self {
            Self::Admin => Some(Realm::Admin),
            Self::WebReport => Some(Realm::Member),
            _ => None,
        }
    }

    /// Login page of a realm.
    pub fn login_for(realm: Realm) -> Self {
        match realm {
            Realm::Admin => Self::AdminLogin,
            Realm::Member => Self::Login,
        }
    }

    /// Landing page after logging into a realm.
    pub fn home_for(realm: Realm) -> Self {
        match realm {
            Realm::Admin => Self::Admin,
            Realm::Member => Self::WebReport,
        }
    }

    /// Apply the session guard: protected pages without a session
    /// redirect to the realm's login page.
    pub fn guard(self, has_session: impl Fn(Realm) -> bool) -> Self {
        match self.requires_session() {
            Some(realm) if !has_session(realm) => Self::login_for(realm),
            _ => self,
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_paths() {
        assert_eq!(Route::parse("/adminlogin"), Route::AdminLogin);
        assert_eq!(Route::parse("/admin/"), Route::Admin);
        assert_eq!(Route::parse("/webreport?tab=1"), Route::WebReport);
        assert_eq!(Route::parse("/privacy-policy"), Route::PrivacyPolicy);
    }

    #[test]
    fn unknown_paths_fall_back_to_login() {
        assert_eq!(Route::parse("/"), Route::Login);
        assert_eq!(Route::parse("/nope"), Route::Login);
        assert_eq!(Route::parse(""), Route::Login);
    }

    #[test]
    fn path_parse_roundtrip() {
        for route in [
            Route::AdminLogin,
            Route::Admin,
            Route::Login,
            Route::WebReport,
            Route::PrivacyPolicy,
            Route::Content,
        ] {
            assert_eq!(Route::parse(route.path()), route);
        }
    }

    #[test]
    fn guard_redirects_without_session() {
        assert_eq!(Route::Admin.guard(|_| false), Route::AdminLogin);
        assert_eq!(Route::WebReport.guard(|_| false), Route::Login);
        assert_eq!(Route::Admin.guard(|r| r == Realm::Admin), Route::Admin);
        assert_eq!(Route::Content.guard(|_| false), Route::Content);
    }
}
