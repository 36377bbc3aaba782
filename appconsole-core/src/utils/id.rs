//! Item id helpers.
//!
//! Some backend tables use numeric primary keys, others string slugs.
//! Ids are always handled as strings on this side.

use serde::{Deserialize, Deserializer};

/// Deserializes a string or integer id into a `String`; `null` or missing becomes `""`.
pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        String(String),
        I64(i64),
        U64(u64),
    }

    Ok(match Option::<RawId>::deserialize(deserializer)? {
        Some(RawId::String(s)) => s,
        Some(RawId::I64(n)) => n.to_string(),
        Some(RawId::U64(n)) => n.to_string(),
        None => String::new(),
    })
}
