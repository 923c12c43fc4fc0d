//! This module provides the HTTP client used for registration requests.

mod client;

pub use client::{DEFAULT_TIMEOUT, create_http_client};
