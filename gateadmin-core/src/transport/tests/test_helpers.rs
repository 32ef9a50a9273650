use crate::error::ClientError;
use crate::transport::{
    Exchange, ExchangeRequest, ExchangeResponse, SERVER_VERSION_HEADER, Session,
    VersionedTransport,
};
use async_trait::async_trait;
use http::StatusCode;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Exchange that replays queued outcomes and records every request it sees.
///
/// With nothing queued it answers `200` with an empty body.
#[derive(Default)]
pub(crate) struct ScriptedExchange {
    script: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<ExchangeRequest>>,
}

pub(crate) enum Scripted {
    Respond(ExchangeResponse),
    Delayed(Duration, ExchangeResponse),
    Fail(ClientError),
}

impl ScriptedExchange {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn push(&self, response: ExchangeResponse) {
        self.script
            .lock()
            .unwrap()
            .push_back(Scripted::Respond(response));
    }

    pub(crate) fn push_delayed(&self, delay: Duration, response: ExchangeResponse) {
        self.script
            .lock()
            .unwrap()
            .push_back(Scripted::Delayed(delay, response));
    }

    pub(crate) fn push_failure(&self, err: ClientError) {
        self.script.lock().unwrap().push_back(Scripted::Fail(err));
    }

    pub(crate) fn requests(&self) -> Vec<ExchangeRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn last_request(&self) -> ExchangeRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request recorded")
    }
}

#[async_trait]
impl Exchange for ScriptedExchange {
    async fn perform(&self, request: ExchangeRequest) -> Result<ExchangeResponse, ClientError> {
        self.requests.lock().unwrap().push(request);
        let next = self.script.lock().unwrap().pop_front();
        match next {
            Some(Scripted::Respond(response)) => Ok(response),
            Some(Scripted::Delayed(delay, response)) => {
                tokio::time::sleep(delay).await;
                Ok(response)
            }
            Some(Scripted::Fail(err)) => Err(err),
            None => Ok(ExchangeResponse::new(StatusCode::OK)),
        }
    }
}

pub(crate) fn transport_over(exchange: &Arc<ScriptedExchange>) -> VersionedTransport {
    VersionedTransport::new(exchange.clone(), Session::new())
}

pub(crate) fn ok_with_version(version: &str) -> ExchangeResponse {
    ExchangeResponse::new(StatusCode::OK).with_header(SERVER_VERSION_HEADER, version)
}

pub(crate) fn json_ok(body: serde_json::Value) -> ExchangeResponse {
    ExchangeResponse::new(StatusCode::OK).with_body(body.to_string())
}
