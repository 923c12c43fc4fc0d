//! Error types for the notification component.

use thiserror::Error;

/// Defines the possible failures of a single registration attempt.
///
/// Every variant collapses to "no identifier obtained" for embedding callers;
/// the distinction exists so programmatic callers can tell a dead endpoint
/// from a response that changed shape.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// Network-level failure: connection error, timeout, or a non-success
    /// status from the endpoint. Non-2xx statuses are not distinguished from
    /// transport errors.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not a JSON object.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The response was a JSON object without a usable `workId` field.
    #[error("response missing workId")]
    MissingIdentifier,
}
