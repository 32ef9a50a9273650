use crate::conf::types::{ClientConfig, Credentials, DEFAULT_TIMEOUT_MS, RawClientConfig};
use crate::conf::ConfigError;
use std::fs;
use std::path::Path;
use std::time::Duration;
use url::Url;

pub const ENV_BASE_URL: &str = "GATEADMIN_BASE_URL";
pub const ENV_TIMEOUT_MS: &str = "GATEADMIN_TIMEOUT_MS";
pub const ENV_ACCESS_KEY: &str = "GATEADMIN_ACCESS_KEY";
pub const ENV_SECRET_KEY: &str = "GATEADMIN_SECRET_KEY";

/// Loads `path`, applies `GATEADMIN_*` overrides from the process environment
/// and validates the result.
pub fn load_config(path: &Path) -> Result<ClientConfig, ConfigError> {
    load_config_with_env(path, |key| std::env::var(key).ok())
}

/// Like [`load_config`] with an explicit variable lookup.
pub fn load_config_with_env<F>(path: &Path, env: F) -> Result<ClientConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = parse_file(path)?;
    resolve(raw, env)
}

/// Builds a config from the environment alone.
pub fn config_from_env<F>(env: F) -> Result<ClientConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    resolve(RawClientConfig::default(), env)
}

pub(crate) fn parse_file(path: &Path) -> Result<RawClientConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    hcl::from_str(&text).map_err(|e| ConfigError::parse(path, e))
}

pub(crate) fn resolve<F>(mut raw: RawClientConfig, env: F) -> Result<ClientConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    //--------------------------------------------------------------------------
    // Environment overrides
    //--------------------------------------------------------------------------
    if let Some(url) = env(ENV_BASE_URL) {
        raw.base_url = Some(url);
    }
    if let Some(timeout) = env(ENV_TIMEOUT_MS) {
        let parsed = timeout
            .trim()
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidTimeout { value: timeout })?;
        raw.timeout_ms = Some(parsed);
    }
    if let Some(key) = env(ENV_ACCESS_KEY) {
        raw.access_key = Some(key);
    }
    if let Some(key) = env(ENV_SECRET_KEY) {
        raw.secret_key = Some(key);
    }

    //--------------------------------------------------------------------------
    // Validation
    //--------------------------------------------------------------------------
    let base_url = parse_base_url(raw.base_url.as_deref().ok_or(ConfigError::MissingBaseUrl)?)?;

    let timeout_ms = raw.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS);
    if timeout_ms == 0 {
        return Err(ConfigError::InvalidTimeout {
            value: timeout_ms.to_string(),
        });
    }

    let credentials = match (raw.access_key, raw.secret_key) {
        (Some(access_key), Some(secret_key)) => Some(Credentials {
            access_key,
            secret_key,
        }),
        (None, None) => None,
        _ => return Err(ConfigError::PartialCredentials),
    };

    Ok(ClientConfig {
        base_url,
        timeout: Duration::from_millis(timeout_ms),
        credentials,
    })
}

fn parse_base_url(value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value).map_err(|e| ConfigError::invalid_base_url(value, e))?;
    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(ConfigError::invalid_base_url(
                value,
                format!("unsupported scheme '{other}'"),
            ));
        }
    }
    if url.host().is_none() {
        return Err(ConfigError::invalid_base_url(value, "missing host"));
    }
    Ok(url)
}
