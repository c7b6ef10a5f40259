//! JSON codec settings.

use serde::{Deserialize, Serialize};

/// Settings for [`JsonComponentSerializer`](crate::JsonComponentSerializer).
///
/// Missing fields fall back to their defaults, so hosts can embed a partial
/// table in their own configuration files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JsonOptions {
    /// Write childless, unstyled text components as bare strings.
    pub compact_text: bool,
    /// Write RGB colors as the nearest named color, for clients that predate
    /// hex colors.
    pub downsample_colors: bool,
    /// Write `show_text` hovers with the legacy `value` field instead of
    /// `contents`.
    pub legacy_hover_value: bool,
    /// Pretty-print serialized strings.
    pub pretty: bool,
}

impl JsonOptions {
    /// Options for clients that only understand the pre-hex format.
    pub fn legacy() -> Self {
        Self {
            downsample_colors: true,
            legacy_hover_value: true,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_table_uses_defaults() {
        let options: JsonOptions = serde_json::from_str(r#"{"compact_text": true}"#).unwrap();
        assert!(options.compact_text);
        assert!(!options.downsample_colors);
        assert!(!options.legacy_hover_value);
    }

    #[test]
    fn test_legacy_preset() {
        let options = JsonOptions::legacy();
        assert!(options.downsample_colors);
        assert!(options.legacy_hover_value);
        assert!(!options.compact_text);
    }
}
