//! HTTP transport carrying the optimistic-concurrency protocol.
//!
//! A [`VersionedTransport`] wraps one [`Exchange`] with an ordered list of
//! [`Stage`]s. Request stages run before the exchange, response stages after
//! it, and the first stage that does not continue ends the call.

mod auth;
mod exchange;
mod request_id;
mod session;
mod stage;
#[cfg(test)]
pub(crate) mod tests;
mod version;

pub use auth::AuthStage;
pub use exchange::{Exchange, ExchangeRequest, ExchangeResponse, ReqwestExchange, ResourcePath};
pub use request_id::RequestIdStage;
pub use session::{INITIAL_VERSION, Session};
pub use stage::{Rejection, Stage, StagePipeline, StageResult};
pub use version::VersionStage;

use crate::error::{ClientError, TransportError};
use http::StatusCode;
use std::sync::Arc;
use tracing::debug;

pub const CLIENT_VERSION_HEADER: &str = "x-client-version";
pub const SERVER_VERSION_HEADER: &str = "x-server-version";
pub const REQUEST_ID_HEADER: &str = "x-request-id";

pub struct VersionedTransport {
    exchange: Arc<dyn Exchange>,
    session: Session,
    stages: Vec<Arc<dyn Stage>>,
}

impl VersionedTransport {
    /// Transport with the standard stages: request id, auth, version.
    pub fn new(exchange: Arc<dyn Exchange>, session: Session) -> Self {
        let stages: Vec<Arc<dyn Stage>> = vec![
            Arc::new(RequestIdStage),
            Arc::new(AuthStage::new(session.clone())),
            Arc::new(VersionStage::new(session.clone())),
        ];
        Self::with_stages(exchange, session, stages)
    }

    pub fn with_stages(
        exchange: Arc<dyn Exchange>,
        session: Session,
        stages: Vec<Arc<dyn Stage>>,
    ) -> Self {
        Self {
            exchange,
            session,
            stages,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn known_version(&self) -> String {
        self.session.known_version()
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Runs one exchange through the pipeline.
    ///
    /// Returns the response only for a 2xx status. A `409` is always
    /// [`ClientError::VersionConflict`] and a `401` always
    /// [`ClientError::Unauthorized`], whichever stages are installed; other
    /// statuses become [`TransportError::Status`].
    pub async fn send(&self, mut request: ExchangeRequest) -> Result<ExchangeResponse, ClientError> {
        StagePipeline::run_on_request(&self.stages, &mut request).into_result()?;

        let method = request.method.clone();
        let path = request.path.to_string();
        let request_id = request.header(REQUEST_ID_HEADER).map(str::to_owned);

        let mut response = self.exchange.perform(request).await?;

        debug!(
            method = %method,
            path = %path,
            status = response.status.as_u16(),
            request_id = request_id.as_deref().unwrap_or("-"),
            "admin exchange"
        );

        StagePipeline::run_on_response(&self.stages, &mut response).into_result()?;

        // Stage lists without auth or version stages still classify both statuses.
        match response.status {
            StatusCode::CONFLICT => Err(ClientError::VersionConflict {
                server_version: response.header(SERVER_VERSION_HEADER).map(str::to_owned),
            }),
            StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
            status if !status.is_success() => {
                Err(TransportError::status(status, response.text()).into())
            }
            _ => Ok(response),
        }
    }
}
