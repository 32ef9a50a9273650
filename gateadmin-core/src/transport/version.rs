use crate::error::TransportError;
use crate::transport::{
    CLIENT_VERSION_HEADER, ExchangeRequest, ExchangeResponse, Rejection, SERVER_VERSION_HEADER,
    Session, Stage, StageResult,
};
use http::{HeaderValue, StatusCode};
use tracing::{info, warn};

/// Optimistic concurrency on the admin API.
///
/// Every request carries the known version in `X-Client-Version`. A `409`
/// rejects the exchange as a version conflict and leaves the known version
/// alone, as does a `401`. Any other response advertising a different
/// `X-Server-Version` moves the known version forward to it.
pub struct VersionStage {
    session: Session,
}

impl VersionStage {
    pub fn new(session: Session) -> Self {
        Self { session }
    }
}

impl Stage for VersionStage {
    fn name(&self) -> &'static str {
        "version"
    }

    fn on_request(&self, request: &mut ExchangeRequest) -> StageResult {
        match HeaderValue::from_str(&self.session.known_version()) {
            Ok(value) => {
                request.headers.insert(CLIENT_VERSION_HEADER, value);
                StageResult::Continue
            }
            Err(_) => StageResult::Error(TransportError::InvalidHeader {
                name: CLIENT_VERSION_HEADER,
            }),
        }
    }

    fn on_response(&self, response: &mut ExchangeResponse) -> StageResult {
        let advertised = response.header(SERVER_VERSION_HEADER).map(str::to_owned);

        match response.status {
            StatusCode::CONFLICT => {
                return StageResult::Reject(Rejection::VersionConflict {
                    server_version: advertised,
                });
            }
            StatusCode::UNAUTHORIZED => return StageResult::Continue,
            _ => {}
        }

        if let Some(version) = advertised {
            if version != self.session.known_version() {
                let previous = self.session.set_known_version(version.clone());
                info!(from = %previous, to = %version, "adopted server version");
            }
        }
        StageResult::Continue
    }

    fn on_reject(&self, rejection: &Rejection) {
        if let Rejection::VersionConflict { server_version } = rejection {
            warn!(
                known_version = %self.session.known_version(),
                server_version = server_version.as_deref().unwrap_or("unknown"),
                "version conflict, entity must be re-read"
            );
        }
    }
}
