use crate::error::ClientError;
use crate::model::{BackendHost, InstanceHealth, ReloadTarget};
use crate::repository::{ConfigRepository, paths};
use crate::transport::ExchangeRequest;

impl ConfigRepository {
    pub async fn instance_health(&self) -> Result<InstanceHealth, ClientError> {
        self.fetch(ExchangeRequest::get(paths::instance("health")))
            .await
    }

    pub async fn instance_list(&self) -> Result<Vec<String>, ClientError> {
        self.fetch(ExchangeRequest::get(paths::instance("list")))
            .await
    }

    /// Asks one running gateway instance to reload part of its config.
    pub async fn reload(&self, target: &ReloadTarget) -> Result<(), ClientError> {
        let request =
            ExchangeRequest::get(paths::reload(target.kind())).with_query(target.query());
        self.execute(request).await
    }

    pub async fn backends(&self) -> Result<Vec<BackendHost>, ClientError> {
        self.fetch(ExchangeRequest::get(paths::backends())).await
    }
}
