//! JSON component codec.

mod decode;
mod encode;
mod names;

use prism_api::Component;
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::{ComponentSerializer, JsonError, JsonOptions};

/// Codec between components and the JSON chat format.
#[derive(Debug, Clone, Default)]
pub struct JsonComponentSerializer {
    options: JsonOptions,
}

impl JsonComponentSerializer {
    pub fn new(options: JsonOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &JsonOptions {
        &self.options
    }

    /// Encode into a JSON tree without rendering it to a string.
    ///
    /// Unlike [`serialize`](ComponentSerializer::serialize) this does not
    /// check the nesting limit, so callers must bound the tree's depth.
    pub fn to_tree(&self, component: &Component) -> JsonValue {
        encode::encode(component, &self.options)
    }

    /// Decode a JSON tree.
    pub fn from_tree(&self, tree: &JsonValue) -> Result<Component, JsonError> {
        decode::decode(tree).inspect_err(|e| debug!("Failed to decode component tree: {}", e))
    }

    pub fn from_json(&self, input: &str) -> Result<Component, JsonError> {
        let tree: JsonValue = serde_json::from_str(input).inspect_err(|e| {
            debug!("Rejected malformed component json: {}", e);
        })?;
        self.from_tree(&tree)
    }
}

impl ComponentSerializer for JsonComponentSerializer {
    type Output = String;
    type Error = JsonError;

    fn serialize(&self, component: &Component) -> Result<String, JsonError> {
        let depth = encode::depth(component);
        if depth > encode::MAX_DEPTH {
            debug!("Refusing to encode component tree of depth {}", depth);
            return Err(JsonError::TooDeep {
                depth,
                limit: encode::MAX_DEPTH,
            });
        }
        let tree = self.to_tree(component);
        let rendered = if self.options.pretty {
            serde_json::to_string_pretty(&tree)?
        } else {
            serde_json::to_string(&tree)?
        };
        Ok(rendered)
    }

    fn deserialize(&self, input: &String) -> Result<Component, JsonError> {
        self.from_json(input)
    }
}
