//! This module defines the work-identifier types returned by the API.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier the timestamping service assigns to a registered work.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkId(String);

impl WorkId {
    /// Wraps a raw identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the identifier, returning the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for WorkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of a publish event as seen by embedding callers: either an
/// identifier was obtained or it was not. The failure kind is carried by
/// `NotifyError` for callers that want it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PublishResult {
    /// The identifier returned by the service, if any.
    pub work_id: Option<WorkId>,
}

impl From<Option<WorkId>> for PublishResult {
    fn from(work_id: Option<WorkId>) -> Self {
        Self { work_id }
    }
}
