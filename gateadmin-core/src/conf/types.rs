use serde::Deserialize;
use std::fmt;
use std::time::Duration;
use url::Url;

pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Validated settings for talking to one admin server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: Url,
    pub timeout: Duration,
    pub credentials: Option<Credentials>,
}

impl ClientConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            credentials: None,
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub access_key: String,
    pub secret_key: String,
}

impl Credentials {
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
        }
    }
}

// Keeps the secret out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

/// The file as written, before environment overrides and validation.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawClientConfig {
    pub base_url: Option<String>,
    pub timeout_ms: Option<u64>,
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
}
