//! # Work registration
//!
//! This module submits publish events to the configured timestamping API and
//! extracts the returned work identifier.
//!
//! ## Core Components
//!
//! - **`PublishNotifier`**: issues the registration request. One outbound
//!   POST per publish event, bounded by the HTTP client's timeout, with no
//!   retry.
//! - **`RegistrationPayload`**: the wire form of a publish event, located in
//!   the `payload` module. Its key names and comma-joined `tags` field are a
//!   fixed contract with the endpoint.
//! - **`NotifyError`**: the failure taxonomy — transport, malformed
//!   response, missing identifier. Callers that only care about presence
//!   collapse it to an empty [`PublishResult`](crate::models::PublishResult).

pub mod error;
pub mod payload;
mod notifier;

pub use error::NotifyError;
pub use notifier::{Credentials, PublishNotifier};
