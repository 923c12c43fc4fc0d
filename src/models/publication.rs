//! This module defines the article-side data models consumed by the publisher.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Publication state of an article on the host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    /// The article is publicly published.
    Published,
    /// The article is an unpublished draft.
    Draft,
}

/// A snapshot of an article as the host platform sees it at publish time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    /// Host-platform identifier of the article.
    pub id: u64,

    /// Article title.
    pub title: String,

    /// Full article body.
    pub content: String,

    /// Display name of the account that authored the article. Used when no
    /// author override is configured.
    pub author_display_name: String,

    /// Tag names in the order the platform reports them.
    pub tags: Vec<String>,

    /// Creation timestamp.
    pub created_at: DateTime<FixedOffset>,

    /// Last-modification timestamp.
    pub modified_at: DateTime<FixedOffset>,

    /// Current publication state.
    pub status: PostStatus,
}

/// The data registered with the timestamping API for one publish event.
///
/// Constructed fresh per event and never persisted. Fields are taken as-is;
/// empty strings are legal everywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishRequest {
    /// Article title.
    pub title: String,
    /// Full article body.
    pub content_body: String,
    /// Resolved author name (override or account display name).
    pub author_name: String,
    /// Tag names, in order.
    pub tags: Vec<String>,
    /// Creation timestamp.
    pub created_at: DateTime<FixedOffset>,
    /// Last-modification timestamp.
    pub modified_at: DateTime<FixedOffset>,
}

impl PublishRequest {
    /// Builds a request from an article snapshot and an already-resolved
    /// author name.
    pub fn for_post(post: &PostRecord, author_name: String) -> Self {
        Self {
            title: post.title.clone(),
            content_body: post.content.clone(),
            author_name,
            tags: post.tags.clone(),
            created_at: post.created_at,
            modified_at: post.modified_at,
        }
    }
}
