//! Wire payload for work registration.
//!
//! The endpoint accepts a flat JSON object; the key names and the
//! comma-joined `tags` form are part of the wire contract and must not
//! change shape.

use chrono::SecondsFormat;
use serde::Serialize;

use crate::models::PublishRequest;

/// The JSON body POSTed to the works endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationPayload {
    /// Work name (the article title).
    pub name: String,

    /// Last-modification time, RFC 3339 with numeric offset.
    #[serde(rename = "datePublished")]
    pub date_published: String,

    /// Creation time, RFC 3339 with numeric offset.
    #[serde(rename = "dateCreated")]
    pub date_created: String,

    /// Resolved author name.
    pub author: String,

    /// Tag names joined with commas, no separator spaces; empty when the
    /// article carries no tags.
    pub tags: String,

    /// Full article body.
    pub content: String,
}

impl From<&PublishRequest> for RegistrationPayload {
    fn from(request: &PublishRequest) -> Self {
        Self {
            name: request.title.clone(),
            date_published: request.modified_at.to_rfc3339_opts(SecondsFormat::Secs, false),
            date_created: request.created_at.to_rfc3339_opts(SecondsFormat::Secs, false),
            author: request.author_name.clone(),
            tags: request.tags.join(","),
            content: request.content_body.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;
    use serde_json::json;

    use super::*;

    fn request_with_tags(tags: Vec<String>) -> PublishRequest {
        PublishRequest {
            title: "Hello".to_string(),
            content_body: "Body text".to_string(),
            author_name: "Jane Doe".to_string(),
            tags,
            created_at: DateTime::parse_from_rfc3339("2020-01-01T00:00:00+00:00").unwrap(),
            modified_at: DateTime::parse_from_rfc3339("2020-01-02T00:00:00+00:00").unwrap(),
        }
    }

    #[test]
    fn tags_are_comma_joined_without_spaces() {
        let request = request_with_tags(vec!["poetry".to_string(), "tech".to_string()]);
        let payload = RegistrationPayload::from(&request);
        assert_eq!(payload.tags, "poetry,tech");
    }

    #[test]
    fn no_tags_serialize_as_empty_string() {
        let request = request_with_tags(vec![]);
        let payload = RegistrationPayload::from(&request);
        assert_eq!(payload.tags, "");
    }

    #[test]
    fn payload_matches_wire_contract() {
        let request = request_with_tags(vec!["x".to_string()]);
        let payload = RegistrationPayload::from(&request);

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "name": "Hello",
                "datePublished": "2020-01-02T00:00:00+00:00",
                "dateCreated": "2020-01-01T00:00:00+00:00",
                "author": "Jane Doe",
                "tags": "x",
                "content": "Body text"
            })
        );
    }
}
