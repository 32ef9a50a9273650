use crate::error::ClientError;
use crate::model::{Config, ConfigItem, Gateway, NamedMap, Route};
use crate::repository::{ConfigRepository, paths};
use crate::transport::ExchangeRequest;

//-----------------------------------------------------------------------------
// Whole config
//-----------------------------------------------------------------------------
impl ConfigRepository {
    pub async fn get_config(&self) -> Result<Config, ClientError> {
        self.fetch(ExchangeRequest::get(paths::config())).await
    }

    pub async fn post_config(&self, config: &Config) -> Result<(), ClientError> {
        self.write(ExchangeRequest::post(paths::config()), config)
            .await
    }

    pub async fn put_config(&self, config: &Config) -> Result<(), ClientError> {
        self.write(ExchangeRequest::put(paths::config()), config).await
    }

    /// Gateway names in server order.
    pub async fn get_config_names(&self) -> Result<Vec<String>, ClientError> {
        self.fetch(ExchangeRequest::get(paths::config_names()))
            .await
    }
}

//-----------------------------------------------------------------------------
// Config items
//-----------------------------------------------------------------------------
impl ConfigRepository {
    pub async fn get_config_item(&self, gateway: &str) -> Result<Option<ConfigItem>, ClientError> {
        self.fetch_optional(ExchangeRequest::get(paths::config_item(gateway)))
            .await
    }

    pub async fn post_config_item(
        &self,
        gateway: &str,
        item: &ConfigItem,
    ) -> Result<(), ClientError> {
        self.write(ExchangeRequest::post(paths::config_item(gateway)), item)
            .await
    }

    pub async fn put_config_item(&self, gateway: &str, item: &ConfigItem) -> Result<(), ClientError> {
        self.write(ExchangeRequest::put(paths::config_item(gateway)), item)
            .await
    }

    pub async fn delete_config_item(&self, gateway: &str) -> Result<(), ClientError> {
        self.execute(ExchangeRequest::delete(paths::config_item(gateway)))
            .await
    }
}

//-----------------------------------------------------------------------------
// Gateways
//-----------------------------------------------------------------------------
impl ConfigRepository {
    pub async fn get_gateway(&self, gateway: &str) -> Result<Option<Gateway>, ClientError> {
        self.fetch_optional(ExchangeRequest::get(paths::gateway(gateway)))
            .await
    }

    pub async fn post_gateway(&self, gateway: &str, value: &Gateway) -> Result<(), ClientError> {
        self.write(ExchangeRequest::post(paths::gateway(gateway)), value)
            .await
    }

    pub async fn put_gateway(&self, gateway: &str, value: &Gateway) -> Result<(), ClientError> {
        self.write(ExchangeRequest::put(paths::gateway(gateway)), value)
            .await
    }

    pub async fn delete_gateway(&self, gateway: &str) -> Result<(), ClientError> {
        self.execute(ExchangeRequest::delete(paths::gateway(gateway)))
            .await
    }
}

//-----------------------------------------------------------------------------
// Routes
//-----------------------------------------------------------------------------
impl ConfigRepository {
    pub async fn get_route(&self, gateway: &str, route: &str) -> Result<Option<Route>, ClientError> {
        self.fetch_optional(ExchangeRequest::get(paths::route(gateway, route)))
            .await
    }

    pub async fn post_route(
        &self,
        gateway: &str,
        route: &str,
        value: &Route,
    ) -> Result<(), ClientError> {
        self.write(ExchangeRequest::post(paths::route(gateway, route)), value)
            .await
    }

    pub async fn put_route(&self, gateway: &str, route: &str, value: &Route) -> Result<(), ClientError> {
        self.write(ExchangeRequest::put(paths::route(gateway, route)), value)
            .await
    }

    pub async fn delete_route(&self, gateway: &str, route: &str) -> Result<(), ClientError> {
        self.execute(ExchangeRequest::delete(paths::route(gateway, route)))
            .await
    }

    pub async fn get_route_names(&self, gateway: &str) -> Result<Vec<String>, ClientError> {
        self.fetch(ExchangeRequest::get(paths::route_names(gateway)))
            .await
    }

    /// Every route of `gateway`, keyed by name in server order.
    pub async fn get_all_routes(&self, gateway: &str) -> Result<NamedMap<Route>, ClientError> {
        self.fetch(ExchangeRequest::get(paths::all_routes(gateway)))
            .await
    }

    pub async fn delete_all_routes(&self, gateway: &str) -> Result<(), ClientError> {
        self.execute(ExchangeRequest::delete(paths::all_routes(gateway)))
            .await
    }
}
