use http::StatusCode;
use thiserror::Error;

/// Errors surfaced by every repository operation.
///
/// Only two conditions are classified from the response status: a version
/// conflict and an authentication failure. Everything else the exchange
/// reports is carried unchanged inside [`TransportError`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server rejected a write because the client's known version is stale.
    ///
    /// The entity must be re-read before the write is attempted again; resending
    /// the same payload will keep conflicting.
    #[error("client version conflict (server version {})", .server_version.as_deref().unwrap_or("unknown"))]
    VersionConflict { server_version: Option<String> },

    /// Credentials were rejected or have expired.
    #[error("unauthorized: credentials rejected or expired")]
    Unauthorized,

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl ClientError {
    pub fn is_version_conflict(&self) -> bool {
        matches!(self, Self::VersionConflict { .. })
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// True when the caller has to re-read the target entity before retrying.
    pub fn requires_refetch(&self) -> bool {
        self.is_version_conflict()
    }

    /// HTTP status of the failed exchange, when one was received.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::VersionConflict { .. } => Some(StatusCode::CONFLICT),
            Self::Unauthorized => Some(StatusCode::UNAUTHORIZED),
            Self::Transport(TransportError::Status { status, .. }) => Some(*status),
            Self::Transport(_) => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(TransportError::Http(err))
    }
}

#[derive(Debug, Error)]
pub enum TransportError {
    //-------------------------------------------------------------------------
    // Exchange
    //-------------------------------------------------------------------------
    #[error("http exchange failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server responded with {status}: {body}")]
    Status { status: StatusCode, body: String },

    //-------------------------------------------------------------------------
    // Payloads
    //-------------------------------------------------------------------------
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    //-------------------------------------------------------------------------
    // Request construction
    //-------------------------------------------------------------------------
    #[error("cannot build request url from '{base}': {reason}")]
    InvalidUrl { base: String, reason: String },

    #[error("invalid value for header '{name}'")]
    InvalidHeader { name: &'static str },
}

impl TransportError {
    pub fn status(status: StatusCode, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }
}
