//! Data component values carried by item hover events.

use serde_json::Value as JsonValue;

/// An opaque data component value attached to an item.
///
/// The wrapped element is whatever the wire format produced. `Removed` marks
/// a component that was explicitly removed from the item's prototype, which is
/// different from the component being absent.
///
/// Equality and hashing are those of the wrapped element, so numerically
/// equal floats such as `0.0` and `-0.0` hash alike.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DataComponentValue {
    Json(JsonValue),
    Removed,
}

impl DataComponentValue {
    pub fn json(element: impl Into<JsonValue>) -> Self {
        DataComponentValue::Json(element.into())
    }

    pub fn element(&self) -> Option<&JsonValue> {
        match self {
            DataComponentValue::Json(element) => Some(element),
            DataComponentValue::Removed => None,
        }
    }

    pub fn is_removed(&self) -> bool {
        matches!(self, DataComponentValue::Removed)
    }
}
