//! # Publish-event orchestration
//!
//! This module runs the full registration cycle for one publish event:
//! gate the event, resolve the author name, send the registration request,
//! and persist the returned work identifier.
//!
//! ## Workflow
//!
//! 1. The event is skipped outright unless posting is active, an API token is
//!    configured, and the article is actually published.
//! 2. The author name is the configured override, or the article author's
//!    display name when no override is set.
//! 3. The stored identifier is cleared to the empty string *before* the call,
//!    then overwritten on success. A failed call therefore leaves the article
//!    unverified rather than showing a stale identifier.
//! 4. Registration failures are logged and swallowed; only store failures
//!    propagate to the caller.

mod store;

pub use store::{InMemoryWorkIdStore, StoreError, WorkIdStore};

use std::sync::Arc;

use thiserror::Error;

use crate::{
    models::{PostRecord, PostStatus, PublishRequest, WorkId},
    notification::{Credentials, PublishNotifier},
};

/// Errors that abort a publish cycle.
#[derive(Debug, Error)]
pub enum PublisherError {
    /// The identifier store failed; the cycle cannot record its outcome.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// The slice of configuration the publisher consumes.
#[derive(Debug, Clone)]
pub struct PublishSettings {
    /// Author override; empty means "use the article author's display name".
    pub author: String,
    /// Whether articles are registered automatically on publish.
    pub active: bool,
    /// Endpoint credentials.
    pub credentials: Credentials,
}

/// What a publish cycle did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    /// Gating rejected the event; nothing was sent or stored.
    Skipped,
    /// The service registered the work under this identifier.
    Registered(WorkId),
    /// The registration attempt failed; the stored identifier was cleared.
    NotRegistered,
}

/// Drives one registration cycle per publish event.
pub struct PublishService<S> {
    notifier: PublishNotifier,
    store: Arc<S>,
    settings: PublishSettings,
}

impl<S: WorkIdStore> PublishService<S> {
    /// Creates a service over a notifier, an identifier store, and the
    /// configured settings.
    pub fn new(notifier: PublishNotifier, store: Arc<S>, settings: PublishSettings) -> Self {
        Self { notifier, store, settings }
    }

    /// Handles one publish event end to end.
    ///
    /// Concurrent events for the same article are not coordinated; the last
    /// write to the store wins.
    pub async fn handle_publish(
        &self,
        post: &PostRecord,
    ) -> Result<PublishOutcome, PublisherError> {
        if !self.settings.active
            || self.settings.credentials.token.is_empty()
            || post.status != PostStatus::Published
        {
            tracing::debug!(post_id = post.id, "publish event skipped");
            return Ok(PublishOutcome::Skipped);
        }

        let request = PublishRequest::for_post(post, self.resolve_author_name(post));

        // At most one identifier per article, never a stale one: clear first,
        // rewrite only on success.
        self.store.set_work_id(post.id, "").await?;

        match self.notifier.notify(&request, &self.settings.credentials).await {
            Ok(work_id) => {
                self.store.set_work_id(post.id, work_id.as_str()).await?;
                tracing::debug!(post_id = post.id, work_id = %work_id, "work registered");
                Ok(PublishOutcome::Registered(work_id))
            }
            Err(error) => {
                tracing::warn!(post_id = post.id, %error, "work registration failed");
                Ok(PublishOutcome::NotRegistered)
            }
        }
    }

    fn resolve_author_name(&self, post: &PostRecord) -> String {
        if self.settings.author.is_empty() {
            post.author_display_name.clone()
        } else {
            self.settings.author.clone()
        }
    }
}
