use crate::model::PluginInstanceId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::IpAddr;

/// Listener and protocol configuration of one gateway.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Gateway {
    /// Globally unique gateway name.
    pub name: String,

    #[serde(default)]
    pub parameters: GatewayParameters,

    #[serde(default)]
    pub listeners: Vec<Listener>,

    /// Gateway-level plugins, outermost first.
    #[serde(default, alias = "filters")]
    pub plugins: Vec<PluginInstanceId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GatewayParameters {
    pub redis_url: Option<String>,
    pub log_level: Option<String>,
    pub lang: Option<String>,
    pub ignore_tls_verification: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Listener {
    /// Unique within its gateway.
    pub name: String,
    pub ip: Option<IpAddr>,
    pub port: u16,
    pub protocol: ProtocolConfig,
    pub hostname: Option<String>,
}

/// Application protocol accepted by a listener.
///
/// TLS settings exist only on the `https` variant.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ProtocolConfig {
    Http,
    Https { tls: TlsConfig },
}

impl ProtocolConfig {
    pub fn tls(&self) -> Option<&TlsConfig> {
        match self {
            Self::Http => None,
            Self::Https { tls } => Some(tls),
        }
    }
}

impl fmt::Display for ProtocolConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http => write!(f, "http"),
            Self::Https { .. } => write!(f, "https"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TlsConfig {
    pub mode: TlsMode,
    pub key: String,
    pub cert: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum TlsMode {
    Terminate,
    #[default]
    Passthrough,
}
