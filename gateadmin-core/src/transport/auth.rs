use crate::error::TransportError;
use crate::transport::{
    ExchangeRequest, ExchangeResponse, Rejection, Session, Stage, StageResult,
};
use http::header::AUTHORIZATION;
use http::{HeaderValue, StatusCode};
use tracing::warn;

/// Attaches the session's bearer token and classifies `401 Unauthorized`.
///
/// A rejected token is dropped from the session; the caller has to log in
/// again.
pub struct AuthStage {
    session: Session,
}

impl AuthStage {
    pub fn new(session: Session) -> Self {
        Self { session }
    }
}

impl Stage for AuthStage {
    fn name(&self) -> &'static str {
        "auth"
    }

    fn on_request(&self, request: &mut ExchangeRequest) -> StageResult {
        let Some(token) = self.session.token() else {
            return StageResult::Continue;
        };
        match HeaderValue::from_str(&format!("Bearer {token}")) {
            Ok(mut value) => {
                value.set_sensitive(true);
                request.headers.insert(AUTHORIZATION, value);
                StageResult::Continue
            }
            Err(_) => StageResult::Error(TransportError::InvalidHeader {
                name: "authorization",
            }),
        }
    }

    fn on_response(&self, response: &mut ExchangeResponse) -> StageResult {
        if response.status != StatusCode::UNAUTHORIZED {
            return StageResult::Continue;
        }
        self.session.clear_token();
        StageResult::Reject(Rejection::Unauthorized)
    }

    fn on_reject(&self, _rejection: &Rejection) {
        warn!(stage = self.name(), "admin server rejected credentials");
    }
}
