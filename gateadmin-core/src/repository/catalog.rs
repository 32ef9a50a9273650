use crate::error::ClientError;
use crate::model::PluginAttributes;
use crate::repository::{ConfigRepository, paths};
use crate::transport::ExchangeRequest;
use serde_json::Value;

impl ConfigRepository {
    /// Codes of every plugin type the server knows.
    pub async fn plugin_list(&self) -> Result<Vec<String>, ClientError> {
        self.fetch(ExchangeRequest::get(paths::catalog("list")))
            .await
    }

    pub async fn plugin_attr_all(&self) -> Result<Vec<PluginAttributes>, ClientError> {
        self.fetch(ExchangeRequest::get(paths::catalog("attr-all")))
            .await
    }

    pub async fn plugin_attr(&self, code: &str) -> Result<Option<PluginAttributes>, ClientError> {
        self.fetch_optional(ExchangeRequest::get(paths::catalog_entry("attr", code)))
            .await
    }

    /// JSON schema of a plugin's `spec`, as the server publishes it.
    pub async fn plugin_schema(&self, code: &str) -> Result<Option<Value>, ClientError> {
        self.fetch_optional(ExchangeRequest::get(paths::catalog_entry("schema", code)))
            .await
    }
}
