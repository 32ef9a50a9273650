use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    #[error("plugin identity is missing 'code'")]
    MissingCode,

    #[error("plugin identity carries both 'uid' and 'name'")]
    AmbiguousInstance,

    #[error("plugin identity repeats key '{key}'")]
    DuplicateKey { key: String },

    #[error("invalid plugin uid '{value}': expected an unsigned integer")]
    InvalidUid { value: String },

    #[error("invalid plugin name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },
}
