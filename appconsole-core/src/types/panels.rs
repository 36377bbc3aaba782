//! Management panel records
//!
//! Each struct keeps unknown backend fields in `extra` so an edit never
//! drops columns this console does not know about.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::navigation::RouteArgs;
use crate::utils::{datetime, id};

fn default_true() -> bool {
    true
}

/// Reward ("hadiah") members can redeem points for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reward {
    #[serde(default, deserialize_with = "id::deserialize")]
    pub id: String,
    #[serde(alias = "nama", default)]
    pub name: String,
    #[serde(alias = "deskripsi", default)]
    pub description: String,
    #[serde(alias = "poin", default)]
    pub points: u32,
    #[serde(alias = "stok", default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
    #[serde(rename = "imageUrl", alias = "image", alias = "gambar", default)]
    pub image_url: String,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Promotion shown in the app.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Promo {
    #[serde(default, deserialize_with = "id::deserialize")]
    pub id: String,
    #[serde(alias = "judul", default)]
    pub title: String,
    #[serde(alias = "deskripsi", default)]
    pub description: String,
    #[serde(rename = "imageUrl", alias = "image", alias = "gambar", default)]
    pub image_url: String,
    /// `YYYY-MM-DD`
    #[serde(rename = "startDate", default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// `YYYY-MM-DD`
    #[serde(rename = "endDate", default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "routeArgs", default, skip_serializing_if = "Option::is_none")]
    pub route_args: Option<RouteArgs>,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Member feedback entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    #[serde(default, deserialize_with = "id::deserialize")]
    pub id: String,
    #[serde(alias = "nama", default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(alias = "pesan", default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(
        rename = "createdAt",
        alias = "created_at",
        default,
        with = "datetime::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub resolved: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Markdown document (privacy policy, terms, help pages).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarkdownDoc {
    #[serde(default, deserialize_with = "id::deserialize")]
    pub id: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default = "default_true")]
    pub published: bool,
    #[serde(
        rename = "updatedAt",
        alias = "updated_at",
        default,
        with = "datetime::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Login session known to the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(default, deserialize_with = "id::deserialize")]
    pub id: String,
    #[serde(alias = "nama", default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(
        rename = "lastActive",
        alias = "last_active",
        default,
        with = "datetime::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_active: Option<DateTime<Utc>>,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Admin activity log entry (read-only).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityLog {
    #[serde(default, deserialize_with = "id::deserialize")]
    pub id: String,
    #[serde(default)]
    pub admin: String,
    #[serde(default)]
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(
        rename = "createdAt",
        alias = "created_at",
        default,
        with = "datetime::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

/// One daily cutoff.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CutoffTime {
    #[serde(default)]
    pub label: String,
    /// `HH:MM`, 24h.
    pub time: String,
}

/// Daily cutoff configuration (singleton document).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutoffConfig {
    #[serde(default)]
    pub times: Vec<CutoffTime>,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_timezone() -> String {
    "Asia/Jakarta".to_string()
}

impl Default for CutoffConfig {
    fn default() -> Self {
        Self {
            times: Vec::new(),
            timezone: default_timezone(),
            enabled: true,
            extra: Map::new(),
        }
    }
}

/// Whether `value` is a 24h `HH:MM` time.
pub fn is_valid_cutoff_time(value: &str) -> bool {
    let Some((h, m)) = value.split_once(':') else {
        return false;
    };
    let two_digits = |s: &str| s.len() == 2 && s.bytes().all(|b| b.is_ascii_digit());
    if !two_digits(h) || !two_digits(m) {
        return false;
    }
    matches!(
        (h.parse::<u8>(), m.parse::<u8>()),
        (Ok(h), Ok(m)) if h < 24 && m < 60
    )
}

impl CutoffConfig {
    /// Every validation problem, empty when the config can be saved.
    pub fn validation_errors(&self) -> Vec<String> {
        self.times
            .iter()
            .enumerate()
            .filter(|(_, t)| !is_valid_cutoff_time(&t.time))
            .map(|(i, t)| format!("Cutoff #{}: '{}' is not a valid HH:MM time", i + 1, t.time))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reward_accepts_indonesian_field_names() {
        let reward: Reward = serde_json::from_value(json!({
            "id": 7,
            "nama": "Voucher 50rb",
            "poin": 500,
            "stok": 12,
            "gambar": "/uploads/v.png",
            "kategori": "voucher"
        }))
        .unwrap();
        assert_eq!(reward.id, "7");
        assert_eq!(reward.name, "Voucher 50rb");
        assert_eq!(reward.points, 500);
        assert_eq!(reward.stock, Some(12));
        assert!(reward.active);
        assert_eq!(reward.extra["kategori"], "voucher");
    }

    #[test]
    fn cutoff_time_format() {
        for ok in ["00:00", "09:30", "23:59"] {
            assert!(is_valid_cutoff_time(ok), "{ok}");
        }
        for bad in ["24:00", "9:30", "12:60", "12-30", "", "ab:cd", "12:3x", "+1:30"] {
            assert!(!is_valid_cutoff_time(bad), "{bad}");
        }
    }

    #[test]
    fn cutoff_validation_lists_each_bad_entry() {
        let config = CutoffConfig {
            times: vec![
                CutoffTime {
                    label: "Pagi".into(),
                    time: "10:00".into(),
                },
                CutoffTime {
                    label: "Malam".into(),
                    time: "25:00".into(),
                },
            ],
            ..CutoffConfig::default()
        };
        let errors = config.validation_errors();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("25:00"));
    }

    #[test]
    fn feedback_timestamp_formats() {
        let fb: Feedback = serde_json::from_value(json!({
            "id": "f1",
            "message": "Aplikasi bagus",
            "created_at": "2024-05-01 08:30:00"
        }))
        .unwrap();
        assert!(fb.created_at.is_some());
        assert!(!fb.resolved);
    }
}
