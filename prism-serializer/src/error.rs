//! Codec error types.

use prism_api::InvalidKeyError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JsonError {
    #[error("malformed json: {0}")]
    Syntax(#[from] serde_json::Error),

    #[error("expected {expected} for {field:?}")]
    UnexpectedType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("missing field {0:?}")]
    MissingField(&'static str),

    #[error("component object has no content field")]
    MissingContent,

    #[error("component tree is {depth} levels deep, the limit is {limit}")]
    TooDeep { depth: usize, limit: usize },

    #[error("component array is empty")]
    EmptyArray,

    #[error("unknown color {0:?}")]
    UnknownColor(String),

    #[error("unknown {kind} action {name:?}")]
    UnknownAction { kind: &'static str, name: String },

    #[error("invalid key: {0}")]
    InvalidKey(#[from] InvalidKeyError),

    #[error("invalid uuid: {0}")]
    InvalidUuid(#[from] uuid::Error),
}
