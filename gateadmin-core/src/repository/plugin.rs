use crate::error::ClientError;
use crate::identity::PluginIdentityResolver;
use crate::model::{PluginConfig, PluginInstanceId};
use crate::repository::{ConfigRepository, paths};
use crate::transport::ExchangeRequest;
use http::Method;
use serde_json::Value;

/// Request against the flat plugin namespace; the identity travels only in
/// the query string.
fn plugin_request(method: Method, id: &PluginInstanceId) -> ExchangeRequest {
    let query = PluginIdentityResolver::encode(id);
    ExchangeRequest::new(method, paths::plugin()).with_query(
        query
            .pairs()
            .iter()
            .map(|(key, value)| (*key, value.clone())),
    )
}

impl ConfigRepository {
    /// The stored `spec` of one instance, paired with the id it was read by.
    pub async fn get_plugin(&self, id: &PluginInstanceId) -> Result<Option<PluginConfig>, ClientError> {
        let spec: Option<Value> = self
            .fetch_optional(plugin_request(Method::GET, id))
            .await?;
        Ok(spec.map(|spec| PluginConfig::new(id.clone(), spec)))
    }

    pub async fn post_plugin(&self, config: &PluginConfig) -> Result<(), ClientError> {
        self.write(plugin_request(Method::POST, &config.id), &config.spec)
            .await
    }

    pub async fn put_plugin(&self, config: &PluginConfig) -> Result<(), ClientError> {
        self.write(plugin_request(Method::PUT, &config.id), &config.spec)
            .await
    }

    pub async fn delete_plugin(&self, id: &PluginInstanceId) -> Result<(), ClientError> {
        self.execute(plugin_request(Method::DELETE, id)).await
    }

    pub async fn get_plugins_by_code(&self, code: &str) -> Result<Vec<PluginConfig>, ClientError> {
        self.fetch(ExchangeRequest::get(paths::plugins_by_code(code)))
            .await
    }

    pub async fn get_all_plugins(&self) -> Result<Vec<PluginConfig>, ClientError> {
        self.fetch(ExchangeRequest::get(paths::all_plugins())).await
    }
}
