//! A set of helpers for testing

use chrono::DateTime;

use crate::models::{PostRecord, PostStatus, PublishRequest};

const CREATED: &str = "2020-01-01T00:00:00+00:00";
const MODIFIED: &str = "2020-01-02T00:00:00+00:00";

/// A builder for creating `PublishRequest` instances for testing.
#[derive(Debug, Clone)]
pub struct PublishRequestBuilder {
    title: String,
    content_body: String,
    author_name: String,
    tags: Vec<String>,
}

impl PublishRequestBuilder {
    /// Creates a new `PublishRequestBuilder` with default field values.
    pub fn new() -> Self {
        Self {
            title: "Hello".to_string(),
            content_body: "Body text".to_string(),
            author_name: "Jane Doe".to_string(),
            tags: Vec::new(),
        }
    }

    /// Sets the article title.
    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Sets the resolved author name.
    pub fn author_name(mut self, author_name: &str) -> Self {
        self.author_name = author_name.to_string();
        self
    }

    /// Sets the tag names.
    pub fn tags(mut self, tags: Vec<&str>) -> Self {
        self.tags = tags.into_iter().map(str::to_string).collect();
        self
    }

    /// Builds the `PublishRequest` with the provided or default values.
    pub fn build(self) -> PublishRequest {
        PublishRequest {
            title: self.title,
            content_body: self.content_body,
            author_name: self.author_name,
            tags: self.tags,
            created_at: DateTime::parse_from_rfc3339(CREATED).unwrap(),
            modified_at: DateTime::parse_from_rfc3339(MODIFIED).unwrap(),
        }
    }
}

impl Default for PublishRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A builder for creating `PostRecord` instances for testing.
#[derive(Debug, Clone)]
pub struct PostRecordBuilder {
    id: u64,
    title: String,
    content: String,
    author_display_name: String,
    tags: Vec<String>,
    status: PostStatus,
}

impl PostRecordBuilder {
    /// Creates a new `PostRecordBuilder` with default field values.
    pub fn new() -> Self {
        Self {
            id: 1,
            title: "Hello".to_string(),
            content: "Body text".to_string(),
            author_display_name: "Account Owner".to_string(),
            tags: Vec::new(),
            status: PostStatus::Published,
        }
    }

    /// Sets the article id.
    pub fn id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    /// Sets the article title.
    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Sets the author account's display name.
    pub fn author_display_name(mut self, name: &str) -> Self {
        self.author_display_name = name.to_string();
        self
    }

    /// Sets the tag names.
    pub fn tags(mut self, tags: Vec<&str>) -> Self {
        self.tags = tags.into_iter().map(str::to_string).collect();
        self
    }

    /// Marks the article as an unpublished draft.
    pub fn draft(mut self) -> Self {
        self.status = PostStatus::Draft;
        self
    }

    /// Builds the `PostRecord` with the provided or default values.
    pub fn build(self) -> PostRecord {
        PostRecord {
            id: self.id,
            title: self.title,
            content: self.content,
            author_display_name: self.author_display_name,
            tags: self.tags,
            created_at: DateTime::parse_from_rfc3339(CREATED).unwrap(),
            modified_at: DateTime::parse_from_rfc3339(MODIFIED).unwrap(),
            status: self.status,
        }
    }
}

impl Default for PostRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}
