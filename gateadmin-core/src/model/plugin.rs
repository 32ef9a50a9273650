use crate::identity::{IdentityError, WireIdentity};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Addressable instance of a plugin type.
///
/// `code` names the plugin type. An instance is further identified by a
/// numeric `uid`, by a `name`, or by nothing at all (the single instance of
/// its code). On the wire the variant is flattened next to `code`:
/// `{code, uid}`, `{code, name}` or `{code}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "WireIdentity", into = "WireIdentity")]
pub enum PluginInstanceId {
    Uid { code: String, uid: u64 },
    Named { code: String, name: PluginName },
    Mono { code: String },
}

impl PluginInstanceId {
    pub fn uid(code: impl Into<String>, uid: u64) -> Self {
        Self::Uid {
            code: code.into(),
            uid,
        }
    }

    pub fn named(code: impl Into<String>, name: impl Into<String>) -> Result<Self, IdentityError> {
        Ok(Self::Named {
            code: code.into(),
            name: PluginName::new(name)?,
        })
    }

    pub fn mono(code: impl Into<String>) -> Self {
        Self::Mono { code: code.into() }
    }

    pub fn code(&self) -> &str {
        match self {
            Self::Uid { code, .. } | Self::Named { code, .. } | Self::Mono { code } => code,
        }
    }
}

impl fmt::Display for PluginInstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uid { code, uid } => write!(f, "{code}[uid={uid}]"),
            Self::Named { code, name } => write!(f, "{code}[name={name}]"),
            Self::Mono { code } => write!(f, "{code}"),
        }
    }
}

/// Instance name: non-empty, ASCII alphanumerics and hyphens only.
///
/// Uniqueness within a plugin code is enforced by the server.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct PluginName(String);

impl PluginName {
    pub fn new(name: impl Into<String>) -> Result<Self, IdentityError> {
        let name = name.into();
        if name.is_empty() {
            return Err(IdentityError::InvalidName {
                name,
                reason: "name is empty",
            });
        }
        if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(IdentityError::InvalidName {
                name,
                reason: "only alphanumeric characters and hyphens are allowed",
            });
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PluginName {
    type Error = IdentityError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PluginName> for String {
    fn from(name: PluginName) -> Self {
        name.0
    }
}

impl AsRef<str> for PluginName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PluginName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A plugin instance together with its own configuration.
///
/// `spec` is opaque here; its schema belongs to the plugin.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PluginConfig {
    #[serde(flatten)]
    pub id: PluginInstanceId,
    pub spec: Value,
}

impl PluginConfig {
    pub fn new(id: PluginInstanceId, spec: Value) -> Self {
        Self { id, spec }
    }

    pub fn code(&self) -> &str {
        self.id.code()
    }
}

impl From<PluginConfig> for PluginInstanceId {
    fn from(config: PluginConfig) -> Self {
        config.id
    }
}

//-----------------------------------------------------------------------------
// Plugin catalog
//-----------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PluginAttributes {
    pub code: String,
    /// A mono plugin has exactly one, unnamed, instance.
    #[serde(default)]
    pub mono: bool,
    #[serde(default)]
    pub meta: PluginMetaData,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PluginMetaData {
    pub authors: Option<String>,
    pub description: Option<String>,
    pub version: Option<String>,
    pub homepage: Option<String>,
    pub repository: Option<String>,
}
