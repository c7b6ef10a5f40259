//! Prism Serializer - Codecs between components and wire formats.
//!
//! A codec implements [`ComponentSerializer`]. Two ship here:
//! - [`JsonComponentSerializer`]: the JSON chat format
//! - [`PlainTextSerializer`]: unstyled text

mod error;
mod json;
mod options;
mod plain;

use prism_api::Component;

pub use error::JsonError;
pub use json::JsonComponentSerializer;
pub use options::JsonOptions;
pub use plain::PlainTextSerializer;

/// Converts components to and from an external representation.
///
/// Round trips must be lossless for every field the representation can hold.
pub trait ComponentSerializer {
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    fn serialize(&self, component: &Component) -> Result<Self::Output, Self::Error>;

    fn deserialize(&self, input: &Self::Output) -> Result<Component, Self::Error>;
}
