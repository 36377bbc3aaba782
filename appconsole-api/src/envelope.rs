//! Response envelope normalization
//!
//! The backend is not consistent about how it wraps payloads. A list can
//! come back as a bare array, as `{"success": true, "data": [...]}` or as
//! `{"data": [...]}`. Every caller goes through [`normalize`] or
//! [`normalize_list`] instead of unwrapping ad hoc.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{ApiError, Result};

/// One of the backend's response shapes.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    /// `{"success": bool, "data": T, "message": "..."}`
    Wrapped {
        success: bool,
        #[serde(default = "Option::default")]
        data: Option<T>,
        #[serde(default)]
        message: Option<String>,
    },
    /// `{"data": T}`
    Data { data: T },
    /// The payload itself.
    Bare(T),
}

impl<T> Envelope<T> {
    /// Unwrap the payload, turning `success: false` into [`ApiError::Rejected`].
    pub fn into_data(self, endpoint: &str) -> Result<Option<T>> {
        match self {
            Self::Wrapped {
                success: false,
                message,
                ..
            } => Err(ApiError::Rejected {
                endpoint: endpoint.to_string(),
                raw_message: message.unwrap_or_else(|| "Request failed".to_string()),
            }),
            Self::Wrapped { data, .. } => Ok(data),
            Self::Data { data } | Self::Bare(data) => Ok(Some(data)),
        }
    }
}

/// Decode a single payload from any envelope shape.
pub fn normalize<T>(value: Value, endpoint: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let envelope: Envelope<T> = decode(value, endpoint)?;
    envelope
        .into_data(endpoint)?
        .ok_or_else(|| ApiError::ParseError {
            endpoint: endpoint.to_string(),
            detail: "response envelope carries no data".to_string(),
        })
}

/// Decode a list payload from any envelope shape.
///
/// A successful envelope without `data` yields an empty list.
pub fn normalize_list<T>(value: Value, endpoint: &str) -> Result<Vec<T>>
where
    T: DeserializeOwned,
{
    let envelope: Envelope<Vec<T>> = decode(value, endpoint)?;
    Ok(envelope.into_data(endpoint)?.unwrap_or_default())
}

/// Check a mutation response: only an explicit `success: false` is a failure.
pub fn ensure_success(value: &Value, endpoint: &str) -> Result<()> {
    if value.get("success").and_then(Value::as_bool) == Some(false) {
        return Err(ApiError::Rejected {
            endpoint: endpoint.to_string(),
            raw_message: message_of(value).unwrap_or_else(|| "Request failed".to_string()),
        });
    }
    Ok(())
}

/// Human readable `message` (or `error`) carried by a response, if any.
pub fn message_of(value: &Value) -> Option<String> {
    value
        .get("message")
        .or_else(|| value.get("error"))
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn decode<T>(value: Value, endpoint: &str) -> Result<Envelope<T>>
where
    T: DeserializeOwned,
{
    serde_json::from_value(value).map_err(|e| ApiError::ParseError {
        endpoint: endpoint.to_string(),
        detail: format!("unexpected response shape: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Promo {
        id: String,
    }

    #[test]
    fn bare_array() {
        let items: Vec<Promo> = normalize_list(json!([{"id": "a"}, {"id": "b"}]), "t").unwrap();
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn success_data_wrapper() {
        let items: Vec<Promo> =
            normalize_list(json!({"success": true, "data": [{"id": "a"}]}), "t").unwrap();
        assert_eq!(items, vec![Promo { id: "a".into() }]);
    }

    #[test]
    fn data_only_wrapper() {
        let items: Vec<Promo> = normalize_list(json!({"data": [{"id": "z"}]}), "t").unwrap();
        assert_eq!(items[0].id, "z");
    }

    #[test]
    fn success_without_data_is_empty_list() {
        let items: Vec<Promo> = normalize_list(json!({"success": true}), "t").unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn unsuccessful_envelope_is_rejected() {
        let result: Result<Vec<Promo>> = normalize_list(
            json!({"success": false, "message": "Session tidak valid"}),
            "GET /promos",
        );
        match result {
            Err(ApiError::Rejected { raw_message, .. }) => {
                assert_eq!(raw_message, "Session tidak valid");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn wrong_shape_is_parse_error() {
        let result: Result<Vec<Promo>> = normalize_list(json!({"items": 3}), "t");
        assert!(matches!(result, Err(ApiError::ParseError { .. })));
    }

    #[test]
    fn single_payload_from_wrapper() {
        let promo: Promo = normalize(json!({"success": true, "data": {"id": "p"}}), "t").unwrap();
        assert_eq!(promo.id, "p");
    }

    #[test]
    fn ensure_success_only_fails_on_explicit_false() {
        assert!(ensure_success(&json!({"ok": 1}), "t").is_ok());
        assert!(ensure_success(&json!({"success": true}), "t").is_ok());
        assert!(ensure_success(&json!({"success": false, "error": "nope"}), "t").is_err());
    }
}
