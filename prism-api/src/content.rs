//! Variant-specific payloads of a component.

use crate::{Component, Key};

/// Where an nbt component reads its data from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NbtSource {
    /// Block entity at a position, written as in commands (`~ ~1 ~`).
    Block(String),
    /// Entities matched by a selector.
    Entity(String),
    /// Command storage.
    Storage(Key),
}

/// The content of a component. Style and children live in the envelope.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Content {
    Text(String),
    Translatable {
        key: String,
        args: Vec<Component>,
        fallback: Option<String>,
    },
    Keybind(String),
    Score {
        name: String,
        objective: String,
    },
    Selector {
        pattern: String,
        separator: Option<Component>,
    },
    Nbt {
        path: String,
        interpret: bool,
        separator: Option<Component>,
        source: NbtSource,
    },
}

impl Content {
    pub fn text(content: impl Into<String>) -> Self {
        Content::Text(content.into())
    }

    /// Short human-readable label, used in error messages and logs.
    pub fn describe(&self) -> String {
        const LIMIT: usize = 32;
        let (kind, detail) = match self {
            Content::Text(text) => ("text", text.as_str()),
            Content::Translatable { key, .. } => ("translatable", key.as_str()),
            Content::Keybind(keybind) => ("keybind", keybind.as_str()),
            Content::Score { name, .. } => ("score", name.as_str()),
            Content::Selector { pattern, .. } => ("selector", pattern.as_str()),
            Content::Nbt { path, .. } => ("nbt", path.as_str()),
        };
        if detail.chars().count() > LIMIT {
            let truncated: String = detail.chars().take(LIMIT).collect();
            format!("{}({:?}...)", kind, truncated)
        } else {
            format!("{}({:?})", kind, detail)
        }
    }

    /// Text contributed to a plain-text flattening.
    pub fn plain_text(&self) -> &str {
        match self {
            Content::Text(text) => text,
            Content::Translatable { key, fallback, .. } => fallback.as_deref().unwrap_or(key),
            Content::Keybind(keybind) => keybind,
            Content::Selector { pattern, .. } => pattern,
            Content::Score { .. } | Content::Nbt { .. } => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_truncates() {
        assert_eq!(Content::text("hi").describe(), "text(\"hi\")");
        let long = Content::text("x".repeat(40));
        assert_eq!(long.describe(), format!("text({:?}...)", "x".repeat(32)));
    }

    #[test]
    fn test_plain_text() {
        let translatable = Content::Translatable {
            key: "chat.type.text".to_string(),
            args: Vec::new(),
            fallback: None,
        };
        assert_eq!(translatable.plain_text(), "chat.type.text");

        let with_fallback = Content::Translatable {
            key: "mod.greeting".to_string(),
            args: Vec::new(),
            fallback: Some("Hello".to_string()),
        };
        assert_eq!(with_fallback.plain_text(), "Hello");

        let score = Content::Score {
            name: "@p".to_string(),
            objective: "kills".to_string(),
        };
        assert_eq!(score.plain_text(), "");
    }
}
