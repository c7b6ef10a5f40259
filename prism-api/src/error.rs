//! Component error types.

use thiserror::Error;

/// Linking two components would make a node reachable from itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("component cycle detected between {this} and {that}")]
pub struct CycleError {
    /// Short description of the component being modified.
    pub this: String,
    /// Short description of the component that would be linked in.
    pub that: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidKeyError {
    #[error("invalid key namespace: {0:?}")]
    Namespace(String),

    #[error("invalid key value: {0:?}")]
    Value(String),
}
