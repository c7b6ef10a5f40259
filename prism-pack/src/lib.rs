//! Prism Pack - Resource pack requests.
//!
//! A [`ResourcePackRequest`] tells a client which pack to fetch and whether it
//! must accept it. Requests come from [`ResourcePackRequestBuilder`], either
//! synchronously with a known hash or through
//! [`compute_hash_and_build`](ResourcePackRequestBuilder::compute_hash_and_build),
//! which hashes the pack in the background.

mod builder;
mod error;
mod hash;
mod pending;
mod request;

pub use builder::ResourcePackRequestBuilder;
pub use error::{HashError, ResourcePackError};
pub use hash::{HashContext, HashSettings, HashSource, Sha1HashSource};
pub use pending::PendingRequest;
pub use request::ResourcePackRequest;

// Re-exported so callers don't need their own `url` dependency.
pub use url::Url;
