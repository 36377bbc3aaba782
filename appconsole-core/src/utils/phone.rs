//! Indonesian phone number normalization.
//!
//! The backend keys members by `62…` numbers. Users type `0812…`,
//! `+62 812-…` or `812…`; all of those normalize to `62812…`.

use crate::error::{CoreError, CoreResult};

const COUNTRY_CODE: &str = "62";
const MIN_DIGITS: usize = 10;
const MAX_DIGITS: usize = 15;

/// Normalize a phone number to the `62…` form.
pub fn normalize_phone(input: &str) -> CoreResult<String> {
    let compact: String = input
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')' | '.'))
        .collect();
    let compact = compact.strip_prefix('+').unwrap_or(&compact);

    if compact.is_empty() {
        return Err(CoreError::ValidationError("Phone number is required".into()));
    }
    if !compact.chars().all(|c| c.is_ascii_digit()) {
        return Err(CoreError::ValidationError(format!(
            "Phone number may only contain digits: {input}"
        )));
    }

    let normalized = if compact.starts_with(COUNTRY_CODE) {
        compact.to_string()
    } else if let Some(rest) = compact.strip_prefix('0') {
        format!("{COUNTRY_CODE}{rest}")
    } else if compact.starts_with('8') {
        format!("{COUNTRY_CODE}{compact}")
    } else {
        return Err(CoreError::ValidationError(format!(
            "Not an Indonesian phone number: {input}"
        )));
    };

    if !(MIN_DIGITS..=MAX_DIGITS).contains(&normalized.len()) {
        return Err(CoreError::ValidationError(format!(
            "Phone number has the wrong length: {input}"
        )));
    }
    Ok(normalized)
}
