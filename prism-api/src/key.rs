//! Namespaced identifiers (`namespace:value`).

use std::fmt;
use std::str::FromStr;

use crate::error::InvalidKeyError;

/// A namespaced identifier such as `minecraft:stone`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key {
    namespace: String,
    value: String,
}

impl Key {
    pub const MINECRAFT_NAMESPACE: &'static str = "minecraft";

    /// Create a key from its parts, validating both.
    pub fn new(namespace: impl Into<String>, value: impl Into<String>) -> Result<Self, InvalidKeyError> {
        let namespace = namespace.into();
        let value = value.into();
        if namespace.is_empty() || !namespace.chars().all(is_namespace_char) {
            return Err(InvalidKeyError::Namespace(namespace));
        }
        if value.is_empty() || !value.chars().all(is_value_char) {
            return Err(InvalidKeyError::Value(value));
        }
        Ok(Self { namespace, value })
    }

    /// Create a key in the `minecraft` namespace.
    pub fn minecraft(value: impl Into<String>) -> Result<Self, InvalidKeyError> {
        Self::new(Self::MINECRAFT_NAMESPACE, value)
    }

    /// Parse `namespace:value`, or `value` alone in the default namespace.
    pub fn parse(input: &str) -> Result<Self, InvalidKeyError> {
        match input.split_once(':') {
            Some((namespace, value)) => Self::new(namespace, value),
            None => Self::minecraft(input),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// The `namespace:value` string.
    pub fn as_string(&self) -> String {
        format!("{}:{}", self.namespace, self.value)
    }
}

fn is_namespace_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '_' | '-' | '.')
}

fn is_value_char(c: char) -> bool {
    is_namespace_char(c) || c == '/'
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.value)
    }
}

impl FromStr for Key {
    type Err = InvalidKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_namespace() {
        let key = Key::parse("prism:items/gem").unwrap();
        assert_eq!(key.namespace(), "prism");
        assert_eq!(key.value(), "items/gem");
        assert_eq!(key.to_string(), "prism:items/gem");
    }

    #[test]
    fn test_parse_default_namespace() {
        let key: Key = "stone".parse().unwrap();
        assert_eq!(key, Key::minecraft("stone").unwrap());
        assert_eq!(key.as_string(), "minecraft:stone");
    }

    #[test]
    fn test_rejects_invalid_characters() {
        assert!(matches!(Key::parse("Upper:case"), Err(InvalidKeyError::Namespace(_))));
        assert!(matches!(Key::parse("ns:has space"), Err(InvalidKeyError::Value(_))));
        assert!(matches!(Key::parse("ns/slash:value"), Err(InvalidKeyError::Namespace(_))));
        assert!(Key::parse(":").is_err());
    }
}
