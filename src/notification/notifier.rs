//! Work registration against the configured endpoint.

use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use url::Url;

use super::{error::NotifyError, payload::RegistrationPayload};
use crate::models::{PublishRequest, WorkId};

/// Credentials for the works endpoint.
///
/// The URL is absolute by construction; the token is expected to be non-empty
/// because callers gate publishing on it being configured.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Absolute URL of the works endpoint.
    pub endpoint_url: Url,
    /// API token sent verbatim in the `token` header.
    pub token: String,
}

/// Submits publish events to the timestamping API.
///
/// Stateless apart from the shared HTTP client; every call issues exactly one
/// outbound request.
#[derive(Debug, Clone)]
pub struct PublishNotifier {
    client: reqwest::Client,
}

impl PublishNotifier {
    /// Creates a notifier on top of an already-configured HTTP client.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Registers one publish event and returns the work identifier the
    /// service assigned.
    ///
    /// Single-shot: no retry. The request is bounded by the client's
    /// timeout, so the call always returns. Non-success statuses surface as
    /// [`NotifyError::Transport`], the same as connection errors.
    pub async fn notify(
        &self,
        request: &PublishRequest,
        credentials: &Credentials,
    ) -> Result<WorkId, NotifyError> {
        let payload = RegistrationPayload::from(request);

        tracing::debug!(endpoint = %credentials.endpoint_url, name = %payload.name, "registering work");

        let response = self
            .client
            .post(credentials.endpoint_url.clone())
            .header(CONTENT_TYPE, "application/json")
            .header("token", credentials.token.as_str())
            .json(&payload)
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        extract_work_id(&body)
    }
}

/// Pulls the `workId` field out of a response body.
///
/// String identifiers are taken verbatim; other scalar values are rendered to
/// their JSON string form. A `null` identifier counts as missing.
fn extract_work_id(body: &str) -> Result<WorkId, NotifyError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| NotifyError::MalformedResponse(e.to_string()))?;

    let object = value.as_object().ok_or_else(|| {
        NotifyError::MalformedResponse("response is not a JSON object".to_string())
    })?;

    match object.get("workId") {
        None | Some(Value::Null) => Err(NotifyError::MissingIdentifier),
        Some(Value::String(id)) => Ok(WorkId::new(id.clone())),
        Some(other) => Ok(WorkId::new(other.to_string())),
    }
}
