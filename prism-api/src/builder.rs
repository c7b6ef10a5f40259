//! Builder for assembling a component in one go.

use crate::{
    ClickEvent, Component, Content, DecorationState, HoverEvent, Style, TextColor, TextDecoration,
};

/// Accumulates content, style and children, then produces a [`Component`].
///
/// The built node is new, so nothing can reach it yet and building never
/// fails with a cycle.
#[derive(Debug, Clone)]
pub struct ComponentBuilder {
    content: Content,
    children: Vec<Component>,
    style: Style,
}

impl ComponentBuilder {
    pub fn new(content: Content) -> Self {
        Self {
            content,
            children: Vec::new(),
            style: Style::empty(),
        }
    }

    pub fn content(mut self, content: Content) -> Self {
        self.content = content;
        self
    }

    pub fn append(mut self, child: impl Into<Component>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn append_all(mut self, children: impl IntoIterator<Item = Component>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn color(mut self, color: impl Into<Option<TextColor>>) -> Self {
        self.style = self.style.with_color(color);
        self
    }

    /// Apply `color` only if nothing is set yet.
    pub fn color_if_absent(self, color: TextColor) -> Self {
        if self.style.color().is_some() {
            self
        } else {
            self.color(color)
        }
    }

    pub fn decoration(mut self, decoration: TextDecoration, state: impl Into<DecorationState>) -> Self {
        self.style = self.style.with_decoration(decoration, state);
        self
    }

    /// Set the same state on several decorations.
    pub fn decorations(
        mut self,
        decorations: impl IntoIterator<Item = TextDecoration>,
        state: impl Into<DecorationState>,
    ) -> Self {
        let state = state.into();
        for decoration in decorations {
            self.style = self.style.with_decoration(decoration, state);
        }
        self
    }

    pub fn click_event(mut self, event: impl Into<Option<ClickEvent>>) -> Self {
        self.style = self.style.with_click_event(event);
        self
    }

    pub fn hover_event(mut self, event: impl Into<Option<HoverEvent>>) -> Self {
        self.style = self.style.with_hover_event(event);
        self
    }

    pub fn insertion(mut self, insertion: impl Into<Option<String>>) -> Self {
        self.style = self.style.with_insertion(insertion);
        self
    }

    /// Replace the accumulated style.
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Overlay the explicit values of `style` on the accumulated style.
    pub fn merge_style(mut self, style: &Style) -> Self {
        self.style = self.style.merge(style);
        self
    }

    pub fn reset_style(mut self) -> Self {
        self.style = Style::empty();
        self
    }

    pub fn build(self) -> Component {
        Component::from_parts(self.content, self.children, self.style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_collects_everything() {
        let child = Component::text("child");
        let component = Component::builder(Content::text("root"))
            .color(TextColor::GREEN)
            .decorations([TextDecoration::Bold, TextDecoration::Italic], true)
            .decoration(TextDecoration::Italic, false)
            .click_event(ClickEvent::copy_to_clipboard("root"))
            .insertion("root".to_string())
            .append(child.clone())
            .append("tail")
            .build();

        assert_eq!(component.color(), Some(TextColor::GREEN));
        assert!(component.has_decoration(TextDecoration::Bold));
        assert_eq!(component.decoration(TextDecoration::Italic), DecorationState::False);
        assert_eq!(component.insertion(), Some("root"));
        assert_eq!(component.children().len(), 2);
        assert!(component.children()[0].ptr_eq(&child));
        assert_eq!(component.to_plain_text(), "rootchildtail");
    }

    #[test]
    fn test_to_builder_round_trip() {
        let original = Component::text("a")
            .with_color(TextColor::RED)
            .append(Component::text("b"))
            .unwrap();
        let rebuilt = original.to_builder().build();

        assert_eq!(rebuilt, original);
        assert!(!rebuilt.ptr_eq(&original));
    }

    #[test]
    fn test_builder_hover_may_embed_existing_component() {
        let existing = Component::text("existing");
        let built = Component::builder(Content::text("new"))
            .hover_event(HoverEvent::show_text(existing.clone()))
            .append(existing.clone())
            .build();

        assert!(built.contains(&existing));
        // The new node is not reachable from what it embeds
        assert!(!existing.contains(&built));
    }

    #[test]
    fn test_color_if_absent() {
        let keeps = Component::builder(Content::text("x"))
            .color(TextColor::RED)
            .color_if_absent(TextColor::BLUE)
            .build();
        assert_eq!(keeps.color(), Some(TextColor::RED));

        let fills = Component::builder(Content::text("x")).color_if_absent(TextColor::BLUE).build();
        assert_eq!(fills.color(), Some(TextColor::BLUE));
    }
}
