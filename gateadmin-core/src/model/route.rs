use crate::model::PluginInstanceId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named HTTP routing unit under a gateway.
///
/// `priority` is a passthrough: when several routes match the same request the
/// higher value wins, but that choice is made by the gateway, never here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Route {
    pub route_name: String,

    /// Matched against the Host header, in order.
    pub hostnames: Option<Vec<String>>,

    #[serde(default)]
    pub plugins: Vec<PluginInstanceId>,

    #[serde(default)]
    pub rules: Vec<Rule>,

    pub priority: i64,
}

/// Match conditions, filters and backends within a route.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Rule {
    /// Any one match selects the rule.
    pub matches: Option<Vec<RouteMatch>>,

    #[serde(default)]
    pub plugins: Vec<PluginInstanceId>,

    #[serde(default)]
    pub backends: Vec<BackendRef>,

    pub timeout_ms: Option<u64>,
}

/// Where matching requests are forwarded.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BackendRef {
    pub host: BackendHost,
    pub port: u16,
    pub timeout_ms: Option<u64>,
    pub protocol: Option<BackendProtocol>,
    /// Relative share of traffic (weight / sum of weights).
    pub weight: u16,
    /// Outermost plugin first.
    #[serde(default)]
    pub plugins: Vec<PluginInstanceId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind")]
pub enum BackendHost {
    Host {
        host: String,
    },
    K8sService {
        name: String,
        #[serde(alias = "ns")]
        namespace: Option<String>,
    },
    File {
        path: String,
    },
}

impl fmt::Display for BackendHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Host { host } => write!(f, "{host}"),
            Self::K8sService {
                name,
                namespace: Some(ns),
            } => write!(f, "{name}.{ns}"),
            Self::K8sService {
                name,
                namespace: None,
            } => write!(f, "{name}"),
            Self::File { path } => write!(f, "{path}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendProtocol {
    Http,
    Https,
}

//-----------------------------------------------------------------------------
// Match conditions (carried, never evaluated)
//-----------------------------------------------------------------------------

/// All present conditions must hold for the match to apply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteMatch {
    pub path: Option<PathMatch>,
    pub header: Option<Vec<HeaderMatch>>,
    pub query: Option<Vec<QueryMatch>>,
    pub method: Option<Vec<MethodMatch>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", content = "value")]
pub enum PathMatch {
    Exact(String),
    Prefix(String),
    Regular(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HeaderMatch {
    Exact { name: String, value: String },
    Regular { name: String, re: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QueryMatch {
    Exact { key: String, value: String },
    Regular { key: String, re: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct MethodMatch(pub String);
