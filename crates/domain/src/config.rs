//! Configuration management

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::constants::{ADMIN_API_PATH_PREFIX, ADMIN_API_VERSION, POSTS_RESOURCE};

/// Admin API key in `"<key id>:<hex secret>"` form.
///
/// Held as a [`SecretString`] so it is redacted in `Debug` and wiped on drop.
/// It is never serialized.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "String")]
pub struct Credential(SecretString);

impl Credential {
    /// Wrap raw key material.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(SecretString::from(raw.into()))
    }

    /// True when the key is blank.
    pub fn is_empty(&self) -> bool {
        self.0.expose_secret().trim().is_empty()
    }
}

impl ExposeSecret<str> for Credential {
    fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }
}

impl From<&str> for Credential {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Credential {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Publishing configuration, passed explicitly into every entry point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishConfig {
    /// Site URL of the Ghost instance (e.g. `https://blog.example.com`)
    #[serde(alias = "url")]
    pub endpoint_url: String,
    /// Admin API key
    #[serde(skip_serializing, alias = "admin_api_key", alias = "adminToken")]
    pub credential: Credential,
    /// Dump payloads and responses to the diagnostics log
    #[serde(default, alias = "debug")]
    pub debug_log: bool,
}

impl PublishConfig {
    /// Config with diagnostics off.
    pub fn new(endpoint_url: impl Into<String>, credential: impl Into<Credential>) -> Self {
        Self { endpoint_url: endpoint_url.into(), credential: credential.into(), debug_log: false }
    }

    /// Toggle the diagnostics log.
    pub fn with_debug_log(mut self, enabled: bool) -> Self {
        self.debug_log = enabled;
        self
    }

    /// Base of the versioned Admin API, e.g. `https://blog.example.com/ghost/api/v4`.
    pub fn admin_api_base(&self) -> String {
        format!(
            "{}{}/{}",
            self.endpoint_url.trim().trim_end_matches('/'),
            ADMIN_API_PATH_PREFIX,
            ADMIN_API_VERSION
        )
    }

    /// Full URL for creating posts from HTML.
    pub fn posts_url(&self) -> String {
        format!("{}/{}", self.admin_api_base(), POSTS_RESOURCE)
    }
}
