use crate::transport::{ExchangeRequest, REQUEST_ID_HEADER, Stage, StageResult};
use http::HeaderValue;
use uuid::Uuid;

/// Tags each request with a fresh `X-Request-Id` unless the caller set one.
pub struct RequestIdStage;

impl Stage for RequestIdStage {
    fn name(&self) -> &'static str {
        "request_id"
    }

    fn on_request(&self, request: &mut ExchangeRequest) -> StageResult {
        if request.headers.contains_key(REQUEST_ID_HEADER) {
            return StageResult::Continue;
        }
        // A hyphenated uuid is always a valid header value.
        if let Ok(value) = HeaderValue::from_str(&Uuid::new_v4().to_string()) {
            request.headers.insert(REQUEST_ID_HEADER, value);
        }
        StageResult::Continue
    }
}
