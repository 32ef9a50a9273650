use crate::error::{ClientError, TransportError};
use crate::transport::{ExchangeRequest, ExchangeResponse};
use std::sync::Arc;

/// One step of the transport pipeline.
///
/// Stages tag outgoing requests and inspect incoming responses. Every hook
/// has a default implementation that continues, so a stage overrides only the
/// side it cares about. Stages must not panic; expected failures are reported
/// through [`StageResult`].
pub trait Stage: Send + Sync {
    /// Short name used in log events.
    fn name(&self) -> &'static str;

    /// Called before the request is handed to the exchange.
    fn on_request(&self, _request: &mut ExchangeRequest) -> StageResult {
        StageResult::Continue
    }

    /// Called with the response, before its status is turned into an error.
    fn on_response(&self, _response: &mut ExchangeResponse) -> StageResult {
        StageResult::Continue
    }

    /// Called on the stage that rejected the exchange.
    fn on_reject(&self, _rejection: &Rejection) {}

    /// Called on the stage that failed.
    fn on_error(&self, _err: &TransportError) {}
}

#[derive(Debug)]
pub enum StageResult {
    /// Continue with the next stage.
    Continue,

    /// Stop the pipeline with a classified, expected outcome.
    Reject(Rejection),

    /// Stop the pipeline because the stage itself could not do its work.
    Error(TransportError),
}

impl StageResult {
    pub fn into_result(self) -> Result<(), ClientError> {
        match self {
            Self::Continue => Ok(()),
            Self::Reject(rejection) => Err(rejection.into()),
            Self::Error(err) => Err(err.into()),
        }
    }
}

/// Response conditions the protocol classifies instead of passing through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    VersionConflict { server_version: Option<String> },
    Unauthorized,
}

impl From<Rejection> for ClientError {
    fn from(rejection: Rejection) -> Self {
        match rejection {
            Rejection::VersionConflict { server_version } => {
                ClientError::VersionConflict { server_version }
            }
            Rejection::Unauthorized => ClientError::Unauthorized,
        }
    }
}

/// Runs stages in order, stopping at the first one that does not continue.
pub struct StagePipeline;

impl StagePipeline {
    pub fn run_on_request(stages: &[Arc<dyn Stage>], request: &mut ExchangeRequest) -> StageResult {
        for stage in stages {
            match stage.on_request(request) {
                StageResult::Continue => continue,
                r => return Self::notify(stage.as_ref(), r),
            }
        }
        StageResult::Continue
    }

    pub fn run_on_response(
        stages: &[Arc<dyn Stage>],
        response: &mut ExchangeResponse,
    ) -> StageResult {
        for stage in stages {
            match stage.on_response(response) {
                StageResult::Continue => continue,
                r => return Self::notify(stage.as_ref(), r),
            }
        }
        StageResult::Continue
    }

    fn notify(stage: &dyn Stage, result: StageResult) -> StageResult {
        match &result {
            StageResult::Continue => {}
            StageResult::Reject(rejection) => stage.on_reject(rejection),
            StageResult::Error(err) => stage.on_error(err),
        }
        result
    }
}
