//! Persistence seam for work identifiers.

use std::{collections::HashMap, sync::Mutex};

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use thiserror::Error;

/// Errors surfaced by a work-identifier store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing storage rejected or lost the write.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Host-platform storage of work identifiers, keyed by article id.
///
/// An article has at most one identifier at a time; `set_work_id` replaces
/// whatever was stored, and the empty string means "no verified work".
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WorkIdStore: Send + Sync {
    /// Stores the identifier for an article, replacing any previous value.
    async fn set_work_id(&self, post_id: u64, work_id: &str) -> Result<(), StoreError>;

    /// Retrieves the stored identifier for an article, if one was ever set.
    async fn get_work_id(&self, post_id: u64) -> Result<Option<String>, StoreError>;
}

/// In-memory store for tests and single-process embeddings.
#[derive(Debug, Default)]
pub struct InMemoryWorkIdStore {
    entries: Mutex<HashMap<u64, String>>,
}

impl InMemoryWorkIdStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WorkIdStore for InMemoryWorkIdStore {
    async fn set_work_id(&self, post_id: u64, work_id: &str) -> Result<(), StoreError> {
        let mut entries =
            self.entries.lock().map_err(|e| StoreError::Backend(e.to_string()))?;
        entries.insert(post_id, work_id.to_string());
        Ok(())
    }

    async fn get_work_id(&self, post_id: u64) -> Result<Option<String>, StoreError> {
        let entries = self.entries.lock().map_err(|e| StoreError::Backend(e.to_string()))?;
        Ok(entries.get(&post_id).cloned())
    }
}
