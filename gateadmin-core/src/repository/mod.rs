//! Typed operations over the admin API.
//!
//! Every call goes through the [`VersionedTransport`], so writes are subject
//! to the version protocol and reads keep the known version fresh. A write
//! failing with [`ClientError::VersionConflict`] must be preceded by a fresh
//! read of the target before it is attempted again.

mod auth;
mod catalog;
mod config;
mod discovery;
mod paths;
mod plugin;
#[cfg(test)]
mod tests;

use crate::error::ClientError;
use crate::transport::{ExchangeRequest, Session, VersionedTransport};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;

#[derive(Clone)]
pub struct ConfigRepository {
    transport: Arc<VersionedTransport>,
}

impl ConfigRepository {
    pub fn new(transport: Arc<VersionedTransport>) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &Arc<VersionedTransport> {
        &self.transport
    }

    pub fn session(&self) -> &Session {
        self.transport.session()
    }

    //-------------------------------------------------------------------------
    // Exchange helpers
    //-------------------------------------------------------------------------

    async fn fetch<T: DeserializeOwned>(&self, request: ExchangeRequest) -> Result<T, ClientError> {
        let response = self.transport.send(request).await?;
        Ok(response.json()?)
    }

    /// A `null` (or empty) body reads as `None`.
    async fn fetch_optional<T: DeserializeOwned>(
        &self,
        request: ExchangeRequest,
    ) -> Result<Option<T>, ClientError> {
        let response = self.transport.send(request).await?;
        if response.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        Ok(response.json::<Option<T>>()?)
    }

    async fn write<B: Serialize + ?Sized>(
        &self,
        request: ExchangeRequest,
        body: &B,
    ) -> Result<(), ClientError> {
        self.execute(request.with_json(body)?).await
    }

    async fn execute(&self, request: ExchangeRequest) -> Result<(), ClientError> {
        self.transport.send(request).await.map(|_| ())
    }
}
