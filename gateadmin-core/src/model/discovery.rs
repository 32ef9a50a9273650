use std::collections::BTreeMap;

/// Health of each gateway instance known to the admin server, by instance id.
pub type InstanceHealth = BTreeMap<String, bool>;

/// What a running gateway instance should reload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReloadTarget {
    Global {
        instance: String,
    },
    Gateway {
        instance: String,
        gateway: String,
    },
    Route {
        instance: String,
        gateway: String,
        route: String,
    },
}

impl ReloadTarget {
    /// Last path segment of the reload endpoint.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Global { .. } => "global",
            Self::Gateway { .. } => "gateway",
            Self::Route { .. } => "route",
        }
    }

    pub fn instance(&self) -> &str {
        match self {
            Self::Global { instance }
            | Self::Gateway { instance, .. }
            | Self::Route { instance, .. } => instance,
        }
    }

    pub(crate) fn query(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Global { instance } => vec![("instance", instance.clone())],
            Self::Gateway { instance, gateway } => vec![
                ("instance", instance.clone()),
                ("gateway", gateway.clone()),
            ],
            Self::Route {
                instance,
                gateway,
                route,
            } => vec![
                ("instance", instance.clone()),
                ("gateway", gateway.clone()),
                ("route", route.clone()),
            ],
        }
    }
}
