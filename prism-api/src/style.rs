//! The style envelope shared by every component variant.

use std::collections::BTreeSet;

use crate::{ClickEvent, DecorationState, Decorations, HoverEvent, TextColor, TextDecoration};

/// Immutable style values of a single component.
///
/// Every field is explicit state on this component only. Inherited values are
/// never stored here; callers resolve them at query time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Style {
    color: Option<TextColor>,
    decorations: Decorations,
    click_event: Option<ClickEvent>,
    hover_event: Option<HoverEvent>,
    insertion: Option<String>,
}

impl Style {
    /// A style with nothing set.
    pub const fn empty() -> Self {
        Self {
            color: None,
            decorations: Decorations::new(),
            click_event: None,
            hover_event: None,
            insertion: None,
        }
    }

    pub fn color(&self) -> Option<TextColor> {
        self.color
    }

    pub fn decoration(&self, decoration: TextDecoration) -> DecorationState {
        self.decorations.get(decoration)
    }

    pub fn decorations(&self) -> &Decorations {
        &self.decorations
    }

    /// Resolve decorations against a set of defaults for unset kinds.
    pub fn decorations_with_defaults(&self, defaults: &BTreeSet<TextDecoration>) -> BTreeSet<TextDecoration> {
        self.decorations.resolve(defaults)
    }

    pub fn click_event(&self) -> Option<&ClickEvent> {
        self.click_event.as_ref()
    }

    pub fn hover_event(&self) -> Option<&HoverEvent> {
        self.hover_event.as_ref()
    }

    pub fn insertion(&self) -> Option<&str> {
        self.insertion.as_deref()
    }

    pub fn with_color(mut self, color: impl Into<Option<TextColor>>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_decoration(mut self, decoration: TextDecoration, state: impl Into<DecorationState>) -> Self {
        self.decorations = self.decorations.with(decoration, state.into());
        self
    }

    pub fn with_decorations(mut self, decorations: Decorations) -> Self {
        self.decorations = decorations;
        self
    }

    pub fn with_click_event(mut self, event: impl Into<Option<ClickEvent>>) -> Self {
        self.click_event = event.into();
        self
    }

    /// Set the hover event without a cycle check.
    ///
    /// A detached style cannot form a cycle; the check happens when the style
    /// is attached to a component.
    pub fn with_hover_event(mut self, event: impl Into<Option<HoverEvent>>) -> Self {
        self.hover_event = event.into();
        self
    }

    pub(crate) fn take_hover_event(&mut self) -> Option<HoverEvent> {
        self.hover_event.take()
    }

    pub fn with_insertion(mut self, insertion: impl Into<Option<String>>) -> Self {
        self.insertion = insertion.into();
        self
    }

    /// Take `that`'s color if it has one.
    pub fn merge_color(self, that: &Style) -> Self {
        match that.color {
            Some(color) => self.with_color(color),
            None => self,
        }
    }

    /// Take every decoration `that` sets explicitly, `True` or `False`.
    pub fn merge_decorations(mut self, that: &Style) -> Self {
        self.decorations = self.decorations.merge(&that.decorations);
        self
    }

    /// Take `that`'s click event, hover event and insertion where set.
    pub fn merge_events(mut self, that: &Style) -> Self {
        if let Some(click) = &that.click_event {
            self.click_event = Some(click.clone());
        }
        if let Some(hover) = &that.hover_event {
            self.hover_event = Some(hover.clone());
        }
        if let Some(insertion) = &that.insertion {
            self.insertion = Some(insertion.clone());
        }
        self
    }

    /// Overlay everything `that` sets explicitly.
    pub fn merge(self, that: &Style) -> Self {
        self.merge_color(that).merge_decorations(that).merge_events(that)
    }

    /// Whether nothing is set.
    pub fn is_empty(&self) -> bool {
        self.color.is_none()
            && !self.decorations.any_set()
            && self.click_event.is_none()
            && self.hover_event.is_none()
            && self.insertion.is_none()
    }
}
