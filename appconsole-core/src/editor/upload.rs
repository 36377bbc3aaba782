//! Public URL extraction from asset upload responses

use serde_json::Value;

use crate::route_args::is_external_url;

/// Paths tried in order; the first non-blank string wins.
const CANDIDATES: [&[&str]; 5] = [
    &["filename"],
    &["asset", "filename"],
    &["file_url"],
    &["public_url"],
    &["asset", "public_url"],
];

fn lookup<'a>(value: &'a Value, path: &[&str]) -> Option<&'a str> {
    path.iter()
        .try_fold(value, |v, key| v.get(key))?
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Best-effort public URL of an uploaded asset.
///
/// Looks at the response itself and at its `data` envelope. Relative
/// paths are made absolute against `api_base`. Returns `None` when no
/// candidate is found; callers leave the edited field unchanged.
pub fn extract_uploaded_url(response: &Value, api_base: &str) -> Option<String> {
    let roots = [Some(response), response.get("data")];
    let found = roots
        .into_iter()
        .flatten()
        .find_map(|root| CANDIDATES.iter().find_map(|path| lookup(root, path)))?;

    if is_external_url(found) {
        return Some(found.to_string());
    }
    if let Some(rest) = found.strip_prefix("//") {
        return Some(format!("https://{rest}"));
    }
    let base = api_base.trim().trim_end_matches('/');
    if base.is_empty() {
        log::warn!("Upload returned relative path '{found}' but no API base is configured");
        return None;
    }
    Some(format!("{base}/{}", found.trim_start_matches('/')))
}
