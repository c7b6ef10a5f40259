//! Plain-text codec.

use std::convert::Infallible;

use prism_api::Component;

use crate::ComponentSerializer;

/// Flattens a tree to its text and reads text back as a single leaf.
///
/// Styling is dropped on the way out. Translatable nodes contribute their
/// fallback or key, score and nbt nodes contribute nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextSerializer;

impl ComponentSerializer for PlainTextSerializer {
    type Output = String;
    type Error = Infallible;

    fn serialize(&self, component: &Component) -> Result<String, Infallible> {
        Ok(component.to_plain_text())
    }

    fn deserialize(&self, input: &String) -> Result<Component, Infallible> {
        Ok(Component::text(input.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_api::TextColor;

    #[test]
    fn test_flattens_children_in_order() {
        let component = Component::text("a")
            .append(Component::text("b").with_color(TextColor::RED))
            .unwrap()
            .append(Component::keybind("key.jump"))
            .unwrap()
            .append(Component::score("Steve", "kills"))
            .unwrap();
        assert_eq!(PlainTextSerializer.serialize(&component).unwrap(), "abkey.jump");
    }

    #[test]
    fn test_deserialize_is_single_leaf() {
        let component = PlainTextSerializer.deserialize(&"hello".to_string()).unwrap();
        assert_eq!(component, Component::text("hello"));
        assert!(!component.has_styling());
    }
}
