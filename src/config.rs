//! Configuration module for poet-notifier.

use std::time::Duration;

use config::{Config, ConfigError, File};
use serde::Deserialize;
use url::Url;

use crate::{notification::Credentials, publisher::PublishSettings};

fn default_api_url() -> Url {
    Url::parse("https://api.frost.po.et/works").expect("default API URL is valid")
}

fn default_active() -> bool {
    true
}

fn default_timeout_secs() -> u64 {
    30
}

/// Application configuration for poet-notifier.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// URL of the works endpoint.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// API token sent in the `token` header. Publishing stays off until one
    /// is configured.
    #[serde(default)]
    pub token: String,
    /// Author name override. Empty means "use the article author's display
    /// name".
    #[serde(default)]
    pub author: String,
    /// Whether articles are registered automatically on publish.
    #[serde(default = "default_active")]
    pub active: bool,
    /// Request timeout for registration calls, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl AppConfig {
    /// Creates a new `AppConfig` by reading from the configuration file.
    ///
    /// With no explicit path, `poet.yaml` in the working directory is used
    /// when present and the documented defaults apply otherwise. An explicit
    /// path must exist.
    pub fn new(path: Option<&str>) -> Result<Self, ConfigError> {
        let file = File::with_name(path.unwrap_or("poet")).required(path.is_some());
        let s = Config::builder().add_source(file).build()?;
        s.try_deserialize()
    }

    /// True when the posting feature flag is on and a token is configured.
    pub fn is_posting_enabled(&self) -> bool {
        self.active && !self.token.is_empty()
    }

    /// The request timeout as a `Duration`.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Assembles the endpoint credentials.
    pub fn credentials(&self) -> Credentials {
        Credentials { endpoint_url: self.api_url.clone(), token: self.token.clone() }
    }

    /// Assembles the publisher's view of this configuration.
    pub fn publish_settings(&self) -> PublishSettings {
        PublishSettings {
            author: self.author.clone(),
            active: self.active,
            credentials: self.credentials(),
        }
    }
}
