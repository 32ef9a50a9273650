use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    //-------------------------------------------------------------------------
    // IO / Parsing
    //-------------------------------------------------------------------------
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse HCL in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: hcl::Error,
    },

    //-------------------------------------------------------------------------
    // Validation
    //-------------------------------------------------------------------------
    #[error("missing base_url")]
    MissingBaseUrl,

    #[error("invalid base_url '{value}': {reason}")]
    InvalidBaseUrl { value: String, reason: String },

    #[error("invalid timeout '{value}': expected a positive number of milliseconds")]
    InvalidTimeout { value: String },

    #[error("access_key and secret_key must be given together")]
    PartialCredentials,
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: hcl::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_base_url(value: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidBaseUrl {
            value: value.into(),
            reason: reason.to_string(),
        }
    }
}
