//! This module provides construction of the HTTP client used for
//! registration requests.

use std::time::Duration;

/// Default bound on a registration exchange.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Creates the HTTP client shared by all registration requests.
///
/// The timeout bounds the whole exchange; delivery is single-shot, so no
/// retry middleware is layered on top.
pub fn create_http_client(timeout: Duration) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder().timeout(timeout).build()
}
