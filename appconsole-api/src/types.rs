use serde::{Deserialize, Serialize};

// ============ Realm ============

/// Which side of the console a session belongs to.
///
/// Admins and members log in through different endpoints and keep their
/// session material under different storage keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Realm {
    /// Console administrators (`/adminlogin`, `/admin`).
    Admin,
    /// App members (`/login`, `/webreport`).
    #[default]
    Member,
}

impl Realm {
    /// Path prefix of the realm's auth endpoints.
    pub fn auth_prefix(self) -> &'static str {
        match self {
            Self::Admin => "/admin",
            Self::Member => "/member",
        }
    }

    /// Lowercase name, used in storage keys and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Member => "member",
        }
    }
}

impl std::fmt::Display for Realm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============ Session ============

/// Session material sent with every authenticated request.
///
/// Mapped to the `Session-Key`, `Auth-Seed` and `X-Token` headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionCredentials {
    /// Session key issued by `verify`.
    pub session_key: String,
    /// Per-session auth seed issued by `verify`.
    pub auth_seed: String,
    /// Optional bearer-like token; falls back to the session key when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl SessionCredentials {
    /// Create session credentials without a separate token.
    pub fn new(session_key: impl Into<String>, auth_seed: impl Into<String>) -> Self {
        Self {
            session_key: session_key.into(),
            auth_seed: auth_seed.into(),
            token: None,
        }
    }

    /// Value of the `X-Token` header.
    pub fn x_token(&self) -> &str {
        self.token.as_deref().unwrap_or(&self.session_key)
    }
}

// ============ Auth ============

/// Result of requesting an OTP for a phone number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpChallenge {
    /// Message from the backend (e.g. "OTP terkirim").
    #[serde(default)]
    pub message: Option<String>,
    /// Seconds until the OTP expires, if the backend says.
    #[serde(default, alias = "expiresIn")]
    pub expires_in: Option<u64>,
    /// Seconds the client must wait before asking for a new OTP.
    #[serde(default, alias = "resendAfter")]
    pub resend_after: Option<u64>,
}

/// Session issued after a successful OTP verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifiedSession {
    #[serde(alias = "sessionKey")]
    pub session_key: String,
    #[serde(alias = "authSeed")]
    pub auth_seed: String,
    #[serde(default)]
    pub token: Option<String>,
    /// Display name of the logged-in user, if returned.
    #[serde(default, alias = "displayName")]
    pub name: Option<String>,
}

impl From<VerifiedSession> for SessionCredentials {
    fn from(v: VerifiedSession) -> Self {
        Self {
            session_key: v.session_key,
            auth_seed: v.auth_seed,
            token: v.token,
        }
    }
}

// ============ Resources ============

/// Backend collections and documents the console manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    /// Rewards catalogue ("hadiah").
    Rewards,
    /// Promotions.
    Promos,
    /// Member feedback.
    Feedback,
    /// Markdown documents (privacy policy, terms, ...).
    Markdown,
    /// Active login sessions.
    Sessions,
    /// Daily cutoff times (singleton document).
    Cutoff,
    /// Admin activity log (read-only).
    ActivityLogs,
    /// Global app configuration document (screens, navigation, theme).
    AppConfig,
}

impl Resource {
    /// Every resource, in sidebar order.
    pub fn all() -> &'static [Resource] {
        &[
            Self::Rewards,
            Self::Promos,
            Self::Feedback,
            Self::Markdown,
            Self::Sessions,
            Self::Cutoff,
            Self::ActivityLogs,
            Self::AppConfig,
        ]
    }

    /// Collection path on the backend.
    pub fn path(self) -> &'static str {
        match self {
            Self::Rewards => "/hadiah",
            Self::Promos => "/promo",
            Self::Feedback => "/feedback",
            Self::Markdown => "/markdown",
            Self::Sessions => "/sessions",
            Self::Cutoff => "/cutoff",
            Self::ActivityLogs => "/admin/activity-logs",
            Self::AppConfig => "/config",
        }
    }

    /// Stable identifier used in cache keys and logs.
    pub fn key(self) -> &'static str {
        match self {
            Self::Rewards => "rewards",
            Self::Promos => "promos",
            Self::Feedback => "feedback",
            Self::Markdown => "markdown",
            Self::Sessions => "sessions",
            Self::Cutoff => "cutoff",
            Self::ActivityLogs => "activity_logs",
            Self::AppConfig => "app_config",
        }
    }

    /// Whether the backend stores a single document instead of a collection.
    pub fn is_document(self) -> bool {
        matches!(self, Self::Cutoff | Self::AppConfig)
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

// ============ Upload ============

/// A file to upload as an asset.
#[derive(Debug, Clone)]
pub struct AssetUpload {
    /// Original file name, sent as the multipart file name.
    pub file_name: String,
    /// MIME type, e.g. `image/png`.
    pub mime_type: String,
    /// File contents.
    pub bytes: Vec<u8>,
}

impl AssetUpload {
    /// Guess the MIME type from the file extension.
    pub fn guess_mime(file_name: &str) -> &'static str {
        let ext = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "png" => "image/png",
            "jpg" | "jpeg" => "image/jpeg",
            "gif" => "image/gif",
            "webp" => "image/webp",
            "svg" => "image/svg+xml",
            _ => "application/octet-stream",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn x_token_falls_back_to_session_key() {
        let mut creds = SessionCredentials::new("sk-1", "seed-1");
        assert_eq!(creds.x_token(), "sk-1");
        creds.token = Some("tok".to_string());
        assert_eq!(creds.x_token(), "tok");
    }

    #[test]
    fn verified_session_accepts_camel_case() {
        let json = r#"{"sessionKey":"a","authSeed":"b","displayName":"Rina"}"#;
        let v: VerifiedSession = serde_json::from_str(json).unwrap();
        assert_eq!(v.session_key, "a");
        assert_eq!(v.name.as_deref(), Some("Rina"));
    }

    #[test]
    fn documents_are_cutoff_and_config() {
        let docs: Vec<_> = Resource::all().iter().filter(|r| r.is_document()).collect();
        assert_eq!(docs, vec![&Resource::Cutoff, &Resource::AppConfig]);
    }

    #[test]
    fn mime_guessing() {
        assert_eq!(AssetUpload::guess_mime("banner.PNG"), "image/png");
        assert_eq!(AssetUpload::guess_mime("x"), "application/octet-stream");
    }
}
