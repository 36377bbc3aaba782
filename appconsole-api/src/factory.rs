//! Client factory functions.

use std::sync::Arc;

use crate::client::{ClientOptions, HttpConsoleApi};
use crate::error::Result;
use crate::traits::ConsoleApi;

/// Creates a [`ConsoleApi`] instance for the given backend.
///
/// The client is wrapped in `Arc<dyn ConsoleApi>` for sharing across async
/// tasks and for substitution with test doubles.
///
/// # Examples
///
/// ```rust,no_run
/// use appconsole_api::{create_api, ClientOptions};
///
/// let api = create_api(ClientOptions::new("https://api.example.com")).unwrap();
/// assert_eq!(api.base_url(), "https://api.example.com");
/// ```
pub fn create_api(options: ClientOptions) -> Result<Arc<dyn ConsoleApi>> {
    log::debug!("Creating console API client for {}", options.base_url);
    Ok(Arc::new(HttpConsoleApi::new(options)?))
}
