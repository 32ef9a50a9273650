use crate::identity::IdentityError;
use crate::model::{PluginInstanceId, PluginName};
use serde::{Deserialize, Serialize};

/// Flat JSON shape of a plugin identity: `{code, uid?, name?}`.
#[derive(Debug, Deserialize, Serialize)]
pub struct WireIdentity {
    #[serde(default)]
    code: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    uid: Option<WireUid>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

/// Uids are written as JSON integers. Older writers sent them as strings, so
/// both forms are read; neither passes through `f64`.
#[derive(Debug, Deserialize, Serialize)]
#[serde(untagged)]
enum WireUid {
    Int(u64),
    Text(String),
}

impl WireUid {
    fn into_u64(self) -> Result<u64, IdentityError> {
        match self {
            Self::Int(uid) => Ok(uid),
            Self::Text(text) => super::parse_uid(&text),
        }
    }
}

impl TryFrom<WireIdentity> for PluginInstanceId {
    type Error = IdentityError;

    fn try_from(wire: WireIdentity) -> Result<Self, Self::Error> {
        if wire.code.is_empty() {
            return Err(IdentityError::MissingCode);
        }
        match (wire.uid, wire.name) {
            (Some(_), Some(_)) => Err(IdentityError::AmbiguousInstance),
            (Some(uid), None) => Ok(PluginInstanceId::Uid {
                code: wire.code,
                uid: uid.into_u64()?,
            }),
            (None, Some(name)) => Ok(PluginInstanceId::Named {
                code: wire.code,
                name: PluginName::new(name)?,
            }),
            (None, None) => Ok(PluginInstanceId::Mono { code: wire.code }),
        }
    }
}

impl From<PluginInstanceId> for WireIdentity {
    fn from(id: PluginInstanceId) -> Self {
        match id {
            PluginInstanceId::Uid { code, uid } => Self {
                code,
                uid: Some(WireUid::Int(uid)),
                name: None,
            },
            PluginInstanceId::Named { code, name } => Self {
                code,
                uid: None,
                name: Some(name.into()),
            },
            PluginInstanceId::Mono { code } => Self {
                code,
                uid: None,
                name: None,
            },
        }
    }
}
