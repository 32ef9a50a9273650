use crate::error::{ClientError, TransportError};
use async_trait::async_trait;
use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::{HeaderMap, HeaderValue, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;
use url::Url;

/// The raw HTTP round-trip the transport is built around.
///
/// Failures are returned unchanged to the caller; nothing above this trait
/// retries.
#[async_trait]
pub trait Exchange: Send + Sync {
    async fn perform(&self, request: ExchangeRequest) -> Result<ExchangeResponse, ClientError>;
}

/// Path below the admin server's base url, kept as raw segments.
///
/// Segments are percent-encoded only when the url is built, so names holding
/// `/`, spaces or `?` address a single segment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourcePath {
    segments: Vec<String>,
}

impl ResourcePath {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    pub fn join(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("/");
        }
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct ExchangeRequest {
    pub method: Method,
    pub path: ResourcePath,
    pub query: Vec<(String, String)>,
    pub headers: HeaderMap,
    pub body: Option<Bytes>,
}

impl ExchangeRequest {
    pub fn new(method: Method, path: ResourcePath) -> Self {
        Self {
            method,
            path,
            query: Vec::new(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    pub fn get(path: ResourcePath) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: ResourcePath) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: ResourcePath) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: ResourcePath) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn with_query<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.query
            .extend(pairs.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn with_json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, TransportError> {
        let bytes = serde_json::to_vec(body).map_err(TransportError::Encode)?;
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        self.body = Some(Bytes::from(bytes));
        Ok(self)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Absolute url of this request below `base`.
    pub fn url(&self, base: &Url) -> Result<Url, TransportError> {
        let mut url = base.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| TransportError::InvalidUrl {
                    base: base.to_string(),
                    reason: "url cannot be a base".to_string(),
                })?;
            path.pop_if_empty();
            path.extend(self.path.segments());
        }
        if self.query.is_empty() {
            url.set_query(None);
        } else {
            url.query_pairs_mut()
                .clear()
                .extend_pairs(self.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }
        Ok(url)
    }
}

#[derive(Debug, Clone)]
pub struct ExchangeResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl ExchangeResponse {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: Bytes::new(),
        }
    }

    pub fn with_header(mut self, name: &'static str, value: &str) -> Self {
        if let Ok(value) = HeaderValue::from_str(value) {
            self.headers.append(name, value);
        }
        self
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Header lookup; names are case-insensitive.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, TransportError> {
        serde_json::from_slice(&self.body).map_err(TransportError::Decode)
    }
}

/// [`Exchange`] over a pooled `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestExchange {
    base: Url,
    client: reqwest::Client,
}

impl ReqwestExchange {
    pub fn new(base: Url, timeout: Duration) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { base, client })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }
}

#[async_trait]
impl Exchange for ReqwestExchange {
    async fn perform(&self, request: ExchangeRequest) -> Result<ExchangeResponse, ClientError> {
        let url = request.url(&self.base)?;

        let mut builder = self
            .client
            .request(request.method, url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        Ok(ExchangeResponse {
            status,
            headers,
            body,
        })
    }
}
