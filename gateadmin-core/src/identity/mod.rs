//! Query encoding of plugin instance identities.
//!
//! A plugin instance is addressed on the plugin endpoints purely through the
//! query string: `code` always, plus `uid` or `name` depending on the variant.

mod error;
#[cfg(test)]
mod tests;
mod wire;

pub use error::IdentityError;
pub use wire::WireIdentity;

use crate::model::{PluginInstanceId, PluginName};

pub const CODE_KEY: &str = "code";
pub const UID_KEY: &str = "uid";
pub const NAME_KEY: &str = "name";

/// Canonical query pairs for one plugin identity.
///
/// Always starts with `code`; each key appears at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityQuery {
    pairs: Vec<(&'static str, String)>,
}

impl IdentityQuery {
    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// `application/x-www-form-urlencoded` rendering, e.g. `code=c1&uid=42`.
    pub fn to_query_string(&self) -> String {
        let mut out = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.pairs {
            out.append_pair(key, value);
        }
        out.finish()
    }
}

impl<'a> IntoIterator for &'a IdentityQuery {
    type Item = &'a (&'static str, String);
    type IntoIter = std::slice::Iter<'a, (&'static str, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

/// Stateless translator between [`PluginInstanceId`] and its query form.
pub struct PluginIdentityResolver;

impl PluginIdentityResolver {
    pub fn encode(id: &PluginInstanceId) -> IdentityQuery {
        let mut pairs = Vec::with_capacity(2);
        pairs.push((CODE_KEY, id.code().to_owned()));
        match id {
            PluginInstanceId::Uid { uid, .. } => pairs.push((UID_KEY, uid.to_string())),
            PluginInstanceId::Named { name, .. } => pairs.push((NAME_KEY, name.to_string())),
            PluginInstanceId::Mono { .. } => {}
        }
        IdentityQuery { pairs }
    }

    /// Rebuilds an identity from query pairs.
    ///
    /// Keys other than `code`, `uid` and `name` are ignored. Any of those three
    /// appearing twice is rejected rather than resolved by position.
    pub fn decode<I, K, V>(pairs: I) -> Result<PluginInstanceId, IdentityError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut code: Option<String> = None;
        let mut uid: Option<String> = None;
        let mut name: Option<String> = None;

        for (key, value) in pairs {
            let slot = match key.as_ref() {
                CODE_KEY => &mut code,
                UID_KEY => &mut uid,
                NAME_KEY => &mut name,
                _ => continue,
            };
            if slot.is_some() {
                return Err(IdentityError::DuplicateKey {
                    key: key.as_ref().to_owned(),
                });
            }
            *slot = Some(value.as_ref().to_owned());
        }

        let code = match code {
            Some(code) if !code.is_empty() => code,
            _ => return Err(IdentityError::MissingCode),
        };

        match (uid, name) {
            (Some(_), Some(_)) => Err(IdentityError::AmbiguousInstance),
            (Some(uid), None) => Ok(PluginInstanceId::Uid {
                code,
                uid: parse_uid(&uid)?,
            }),
            (None, Some(name)) => Ok(PluginInstanceId::Named {
                code,
                name: PluginName::new(name)?,
            }),
            (None, None) => Ok(PluginInstanceId::Mono { code }),
        }
    }

    /// Parses a raw query string such as `code=c1&name=n1`.
    pub fn decode_query(query: &str) -> Result<PluginInstanceId, IdentityError> {
        Self::decode(url::form_urlencoded::parse(query.as_bytes()))
    }
}

/// Decimal digits only; no sign, no exponent, no fraction.
pub(crate) fn parse_uid(raw: &str) -> Result<u64, IdentityError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(IdentityError::InvalidUid {
            value: raw.to_owned(),
        });
    }
    raw.parse::<u64>().map_err(|_| IdentityError::InvalidUid {
        value: raw.to_owned(),
    })
}
