use crate::model::{Gateway, NamedMap, PluginConfig, Route};
use serde::{Deserialize, Serialize};

/// One gateway's full configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ConfigItem {
    pub gateway: Gateway,

    #[serde(default)]
    pub routes: NamedMap<Route>,
}

impl ConfigItem {
    pub fn new(gateway: Gateway) -> Self {
        Self {
            gateway,
            routes: NamedMap::new(),
        }
    }

    /// Adds or replaces a route, keyed by its `route_name`.
    pub fn with_route(mut self, route: Route) -> Self {
        self.routes.insert(route.route_name.clone(), route);
        self
    }
}

/// The whole configuration: every gateway by name, plus the global plugin table.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub gateways: NamedMap<ConfigItem>,

    /// Plugin instances keyed the way the server keys them.
    #[serde(default)]
    pub plugins: NamedMap<PluginConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_port: Option<u16>,
}

impl Config {
    pub fn gateway_names(&self) -> impl Iterator<Item = &str> {
        self.gateways.keys()
    }
}
