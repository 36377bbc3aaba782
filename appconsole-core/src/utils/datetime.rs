//! Datetime serialization/deserialization helpers.
//!
//! The backend is not consistent about timestamps. Accepted inputs:
//! - RFC3339 strings (`2024-05-01T08:30:00Z`)
//! - SQL-style strings without zone, read as UTC (`2024-05-01 08:30:00`)
//! - Unix timestamps, seconds or milliseconds
//!
//! Serialization always writes RFC3339.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    String(String),
    I64(i64),
    U64(u64),
}

impl RawTimestamp {
    fn into_datetime(self) -> Result<DateTime<Utc>, String> {
        match self {
            Self::String(s) => parse_timestamp(&s).ok_or_else(|| format!("Invalid timestamp: {s}")),
            Self::I64(ts) => parse_unix_timestamp(ts).ok_or_else(|| "Invalid Unix timestamp".into()),
            Self::U64(ts) => i64::try_from(ts)
                .ok()
                .and_then(parse_unix_timestamp)
                .ok_or_else(|| "Invalid Unix timestamp".into()),
        }
    }
}

/// Serializes `DateTime<Utc>` as an RFC3339 string.
pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&dt.to_rfc3339())
}

/// Deserializes `DateTime<Utc>` from any accepted input.
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    RawTimestamp::deserialize(deserializer)?
        .into_datetime()
        .map_err(serde::de::Error::custom)
}

/// `Option<DateTime<Utc>>` serializer/deserializer helpers.
///
/// `null`, a missing field and an empty string all read as `None`.
pub mod option {
    use super::{DateTime, Deserialize, Deserializer, RawTimestamp, Serializer, Utc};

    /// Serializes `Option<DateTime<Utc>>` as RFC3339 or `null`.
    pub fn serialize<S>(dt: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match dt {
            Some(dt) => serializer.serialize_some(&dt.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }

    /// Deserializes `Option<DateTime<Utc>>`.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<RawTimestamp>::deserialize(deserializer)? {
            Some(RawTimestamp::String(s)) if s.trim().is_empty() => Ok(None),
            Some(raw) => raw.into_datetime().map(Some).map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

/// Parses an RFC3339 or SQL-style timestamp string.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Parses a Unix timestamp with second/millisecond auto-detection.
fn parse_unix_timestamp(ts: i64) -> Option<DateTime<Utc>> {
    // Values larger than 10^11 are interpreted as milliseconds.
    if ts > 100_000_000_000 {
        DateTime::from_timestamp_millis(ts)
    } else {
        DateTime::from_timestamp(ts, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Debug, Serialize, Deserialize)]
    struct Stamped {
        #[serde(default, with = "option")]
        at: Option<DateTime<Utc>>,
    }

    fn at(json: &str) -> Option<DateTime<Utc>> {
        serde_json::from_str::<Stamped>(json).unwrap().at
    }

    #[test]
    fn accepts_every_backend_format() {
        let expected = parse_timestamp("2024-05-01T08:30:00Z");
        assert!(expected.is_some());
        assert_eq!(at(r#"{"at":"2024-05-01 08:30:00"}"#), expected);
        assert_eq!(at(r#"{"at":1714552200}"#), expected);
        assert_eq!(at(r#"{"at":1714552200000}"#), expected);
    }

    #[test]
    fn empty_and_missing_are_none() {
        assert_eq!(at(r#"{"at":""}"#), None);
        assert_eq!(at(r#"{"at":null}"#), None);
        assert_eq!(at("{}"), None);
    }

    #[test]
    fn garbage_is_an_error() {
        assert!(serde_json::from_str::<Stamped>(r#"{"at":"yesterday"}"#).is_err());
    }

    #[test]
    fn serializes_rfc3339() {
        let s = Stamped {
            at: parse_timestamp("2024-05-01 08:30:00"),
        };
        assert_eq!(
            serde_json::to_string(&s).unwrap(),
            r#"{"at":"2024-05-01T08:30:00+00:00"}"#
        );
    }
}
