//! The component tree.
//!
//! A [`Component`] is a cheap handle onto an immutable node. Every operation
//! that "changes" a component returns a new node and leaves the receiver as it
//! was, so sub-trees can be shared between any number of parents and threads.
//!
//! Two notions of sameness apply:
//! - `==` and hashing are structural (content, style and children).
//! - [`Component::contains`] and cycle detection use node identity. Cloning a
//!   handle keeps the identity, while [`Component::copy`] and every persistent
//!   update produce a new one.

use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::{
    ClickEvent, ComponentBuilder, Content, CycleError, DecorationState, HoverEvent, Key,
    NbtSource, Style, TextColor, TextDecoration,
};

/// The canonical empty children sequence.
pub static EMPTY_COMPONENT_LIST: &[Component] = &[];

/// An immutable node in a styled text tree.
#[derive(Clone)]
pub struct Component(Arc<Node>);

#[derive(Debug, Clone)]
struct Node {
    content: Content,
    children: Vec<Component>,
    style: Style,
}

impl Node {
    /// Move every component this node owns into `pending`.
    fn detach_into(&mut self, pending: &mut Vec<Component>) {
        pending.append(&mut self.children);
        match &mut self.content {
            Content::Translatable { args, .. } => pending.append(args),
            Content::Selector { separator, .. } | Content::Nbt { separator, .. } => pending.extend(separator.take()),
            Content::Text(_) | Content::Keybind(_) | Content::Score { .. } => {}
        }
        match self.style.take_hover_event() {
            Some(HoverEvent::ShowText(text)) => pending.push(text),
            Some(HoverEvent::ShowEntity(entity)) => pending.extend(entity.name),
            Some(HoverEvent::ShowItem(_)) | None => {}
        }
    }
}

// Uniquely owned descendants are torn down from a worklist, not recursively.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_into(&mut pending);
        while let Some(Component(node)) = pending.pop() {
            if let Ok(mut node) = Arc::try_unwrap(node) {
                node.detach_into(&mut pending);
            }
        }
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Primitive values accepted by [`Component::of`].
pub trait Primitive: sealed::Sealed {
    fn to_text(&self) -> String;
}

macro_rules! display_primitive {
    ($($ty:ty),*) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Primitive for $ty {
                fn to_text(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

display_primitive!(bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! float_primitive {
    ($($ty:ty),*) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Primitive for $ty {
                // `{:?}` keeps the fractional part: `1.0`, not `1`
                fn to_text(&self) -> String {
                    format!("{:?}", self)
                }
            }
        )*
    };
}

float_primitive!(f32, f64);

/// Which edges a reachability walk follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edges {
    Children,
    ChildrenAndHover,
}

impl Component {
    pub(crate) fn from_parts(content: Content, children: Vec<Component>, style: Style) -> Self {
        Self(Arc::new(Node {
            content,
            children,
            style,
        }))
    }

    /// A leaf with the given content and no style.
    pub fn new(content: Content) -> Self {
        Self::from_parts(content, Vec::new(), Style::empty())
    }

    /// An empty text component.
    pub fn empty() -> Self {
        Self::text("")
    }

    pub fn newline() -> Self {
        Self::text("\n")
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::new(Content::Text(content.into()))
    }

    /// A plain text leaf holding the string form of a primitive value.
    ///
    /// Floats always keep a fractional part and use Rust's spelling for
    /// special values (`inf`, `NaN`).
    ///
    /// ```
    /// use prism_api::Component;
    ///
    /// assert_eq!(Component::of(true), Component::text("true"));
    /// assert_eq!(Component::of(42), Component::text("42"));
    /// assert_eq!(Component::of(1.0), Component::text("1.0"));
    /// ```
    pub fn of(value: impl Primitive) -> Self {
        Self::text(value.to_text())
    }

    pub fn translatable(key: impl Into<String>, args: impl IntoIterator<Item = Component>) -> Self {
        Self::new(Content::Translatable {
            key: key.into(),
            args: args.into_iter().collect(),
            fallback: None,
        })
    }

    pub fn translatable_with_fallback(
        key: impl Into<String>,
        args: impl IntoIterator<Item = Component>,
        fallback: impl Into<String>,
    ) -> Self {
        Self::new(Content::Translatable {
            key: key.into(),
            args: args.into_iter().collect(),
            fallback: Some(fallback.into()),
        })
    }

    pub fn keybind(keybind: impl Into<String>) -> Self {
        Self::new(Content::Keybind(keybind.into()))
    }

    pub fn score(name: impl Into<String>, objective: impl Into<String>) -> Self {
        Self::new(Content::Score {
            name: name.into(),
            objective: objective.into(),
        })
    }

    pub fn selector(pattern: impl Into<String>, separator: Option<Component>) -> Self {
        Self::new(Content::Selector {
            pattern: pattern.into(),
            separator,
        })
    }

    pub fn nbt(path: impl Into<String>, interpret: bool, separator: Option<Component>, source: NbtSource) -> Self {
        Self::new(Content::Nbt {
            path: path.into(),
            interpret,
            separator,
            source,
        })
    }

    /// Storage-backed nbt component, a common shorthand.
    pub fn storage_nbt(path: impl Into<String>, storage: Key) -> Self {
        Self::nbt(path, false, None, NbtSource::Storage(storage))
    }

    pub fn builder(content: Content) -> ComponentBuilder {
        ComponentBuilder::new(content)
    }

    /// A builder pre-filled with this component's content, style and children.
    pub fn to_builder(&self) -> ComponentBuilder {
        ComponentBuilder::new(self.0.content.clone())
            .style(self.0.style.clone())
            .append_all(self.0.children.iter().cloned())
    }

    pub fn content(&self) -> &Content {
        &self.0.content
    }

    /// Ordered children; [`EMPTY_COMPONENT_LIST`] for a leaf.
    pub fn children(&self) -> &[Component] {
        if self.0.children.is_empty() {
            EMPTY_COMPONENT_LIST
        } else {
            &self.0.children
        }
    }

    pub fn style(&self) -> &Style {
        &self.0.style
    }

    /// Whether both handles point at the same node.
    pub fn ptr_eq(&self, other: &Component) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Whether `that` is this node or reachable from it through children or
    /// hover content.
    pub fn contains(&self, that: &Component) -> bool {
        self.reaches(that, Edges::ChildrenAndHover)
    }

    /// Whether `that` is this node or reachable from it through children only.
    pub fn contains_child(&self, that: &Component) -> bool {
        self.reaches(that, Edges::Children)
    }

    fn reaches(&self, that: &Component, edges: Edges) -> bool {
        let mut visited: HashSet<*const Node> = HashSet::new();
        let mut stack: Vec<&Component> = vec![self];

        while let Some(current) = stack.pop() {
            if current.ptr_eq(that) {
                return true;
            }
            // Shared sub-trees only need one visit
            if !visited.insert(Arc::as_ptr(&current.0)) {
                continue;
            }
            if edges == Edges::ChildrenAndHover {
                if let Some(hover) = current.hover_event().and_then(HoverEvent::component) {
                    stack.push(hover);
                }
            }
            stack.extend(current.0.children.iter().rev());
        }

        false
    }

    /// Fail if linking `that` below this component would create a cycle.
    pub fn detect_cycle(&self, that: &Component) -> Result<(), CycleError> {
        if that.contains(self) {
            let error = CycleError {
                this: self.0.content.describe(),
                that: that.0.content.describe(),
            };
            tracing::debug!("rejected component link: {}", error);
            return Err(error);
        }
        Ok(())
    }

    fn update(&self, apply: impl FnOnce(&mut Node)) -> Component {
        let mut node = (*self.0).clone();
        apply(&mut node);
        Component(Arc::new(node))
    }

    /// A new component with `component` as its last child.
    pub fn append(&self, component: impl Into<Component>) -> Result<Component, CycleError> {
        let component = component.into();
        self.detect_cycle(&component)?;
        Ok(self.update(|node| node.children.push(component)))
    }

    /// A new component whose children are replaced by `children`.
    pub fn with_children(&self, children: impl IntoIterator<Item = Component>) -> Result<Component, CycleError> {
        let children: Vec<Component> = children.into_iter().collect();
        for child in &children {
            self.detect_cycle(child)?;
        }
        Ok(self.update(|node| node.children = children))
    }

    /// A structurally equal component with its own identity.
    pub fn copy(&self) -> Component {
        self.update(|_| {})
    }

    pub fn with_content(&self, content: Content) -> Component {
        self.update(|node| node.content = content)
    }

    /// Replace the whole style, checking any hover content for cycles.
    pub fn with_style(&self, style: Style) -> Result<Component, CycleError> {
        if let Some(hover) = style.hover_event().and_then(HoverEvent::component) {
            self.detect_cycle(hover)?;
        }
        Ok(self.update(|node| node.style = style))
    }

    pub fn color(&self) -> Option<TextColor> {
        self.0.style.color()
    }

    pub fn with_color(&self, color: impl Into<Option<TextColor>>) -> Component {
        let color = color.into();
        self.update(|node| node.style = node.style.clone().with_color(color))
    }

    /// The explicit state of a decoration, ignoring inheritance.
    pub fn decoration(&self, decoration: TextDecoration) -> DecorationState {
        self.0.style.decoration(decoration)
    }

    pub fn has_decoration(&self, decoration: TextDecoration) -> bool {
        self.decoration(decoration) == DecorationState::True
    }

    /// Set a decoration from a flag or a tri-state; `NotSet` clears it.
    pub fn with_decoration(&self, decoration: TextDecoration, state: impl Into<DecorationState>) -> Component {
        let state = state.into();
        self.update(|node| node.style = node.style.clone().with_decoration(decoration, state))
    }

    /// Decorations explicitly switched on.
    pub fn decorations(&self) -> BTreeSet<TextDecoration> {
        self.decorations_with_defaults(&BTreeSet::new())
    }

    /// Decorations switched on, with `defaults` filling in unset kinds.
    pub fn decorations_with_defaults(&self, defaults: &BTreeSet<TextDecoration>) -> BTreeSet<TextDecoration> {
        self.0.style.decorations_with_defaults(defaults)
    }

    pub fn click_event(&self) -> Option<&ClickEvent> {
        self.0.style.click_event()
    }

    pub fn with_click_event(&self, event: impl Into<Option<ClickEvent>>) -> Component {
        let event = event.into();
        self.update(|node| node.style = node.style.clone().with_click_event(event))
    }

    pub fn hover_event(&self) -> Option<&HoverEvent> {
        self.0.style.hover_event()
    }

    /// Set the hover event. Embedded hover content must not reach this node.
    pub fn with_hover_event(&self, event: impl Into<Option<HoverEvent>>) -> Result<Component, CycleError> {
        let event = event.into();
        if let Some(hover) = event.as_ref().and_then(HoverEvent::component) {
            self.detect_cycle(hover)?;
        }
        Ok(self.update(|node| node.style = node.style.clone().with_hover_event(event)))
    }

    pub fn insertion(&self) -> Option<&str> {
        self.0.style.insertion()
    }

    pub fn with_insertion(&self, insertion: impl Into<Option<String>>) -> Component {
        let insertion = insertion.into();
        self.update(|node| node.style = node.style.clone().with_insertion(insertion))
    }

    /// Merge color, decorations, events and insertion from `that`.
    ///
    /// Values `that` sets explicitly win; values it leaves unset keep this
    /// component's value.
    pub fn merge_style(&self, that: &Component) -> Result<Component, CycleError> {
        self.with_style(self.0.style.clone().merge(&that.0.style))
    }

    pub fn merge_color(&self, that: &Component) -> Component {
        self.update(|node| node.style = node.style.clone().merge_color(&that.0.style))
    }

    pub fn merge_decorations(&self, that: &Component) -> Component {
        self.update(|node| node.style = node.style.clone().merge_decorations(&that.0.style))
    }

    /// Merge click event, hover event and insertion from `that`.
    pub fn merge_events(&self, that: &Component) -> Result<Component, CycleError> {
        self.with_style(self.0.style.clone().merge_events(&that.0.style))
    }

    pub fn reset_style(&self) -> Component {
        self.update(|node| node.style = Style::empty())
    }

    pub fn has_styling(&self) -> bool {
        !self.0.style.is_empty()
    }

    /// Depth-first concatenation of every node's text.
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        let mut stack = vec![self];
        while let Some(current) = stack.pop() {
            out.push_str(current.0.content.plain_text());
            stack.extend(current.0.children.iter().rev());
        }
        out
    }
}

impl PartialEq for Component {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((a, b)) = pending.pop() {
            if a.ptr_eq(b) {
                continue;
            }
            if a.0.content != b.0.content
                || a.0.style != b.0.style
                || a.0.children.len() != b.0.children.len()
            {
                return false;
            }
            pending.extend(a.0.children.iter().zip(&b.0.children));
        }
        true
    }
}

impl Eq for Component {}

impl Hash for Component {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut stack = vec![self];
        while let Some(current) = stack.pop() {
            current.0.content.hash(state);
            current.0.style.hash(state);
            current.0.children.len().hash(state);
            stack.extend(current.0.children.iter().rev());
        }
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("Component");
        debug.field("content", &self.0.content);
        if !self.0.style.is_empty() {
            debug.field("style", &self.0.style);
        }
        if !self.0.children.is_empty() {
            debug.field("children", &self.0.children);
        }
        debug.finish()
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_plain_text())
    }
}

impl From<&str> for Component {
    fn from(text: &str) -> Self {
        Component::text(text)
    }
}

impl From<String> for Component {
    fn from(text: String) -> Self {
        Component::text(text)
    }
}

impl From<ComponentBuilder> for Component {
    fn from(builder: ComponentBuilder) -> Self {
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_reflexive() {
        let a = Component::text("a");
        assert!(a.contains(&a));
        assert!(a.contains(&a.clone()));
    }

    #[test]
    fn test_unrelated_components_are_not_contained() {
        let a = Component::text("same");
        let b = Component::text("same");
        // Structurally equal, but different nodes
        assert_eq!(a, b);
        assert!(!a.contains(&b));
        assert!(!b.contains(&a));
    }

    #[test]
    fn test_self_append_is_a_cycle() {
        let a = Component::text("a");
        let err = a.append(a.clone()).unwrap_err();
        assert!(err.to_string().contains("cycle"));
    }

    #[test]
    fn test_append_preserves_receiver() {
        let parent = Component::text("parent");
        let child = Component::text("child");
        let appended = parent.append(child.clone()).unwrap();

        assert!(parent.children().is_empty());
        assert_eq!(appended.children(), &[child.clone()]);
        assert!(appended.contains(&child));
        assert!(appended.contains_child(&child));
        assert!(!parent.contains(&child));
    }

    #[test]
    fn test_children_keep_insertion_order() {
        let parts: Vec<Component> = (0..5).map(Component::of).collect();
        let mut tree = Component::empty();
        for part in &parts {
            tree = tree.append(part.clone()).unwrap();
        }
        assert_eq!(tree.children(), parts.as_slice());
        assert_eq!(tree.to_plain_text(), "01234");

        let styled = tree.with_color(TextColor::GOLD).reset_style();
        assert_eq!(styled.children(), parts.as_slice());
    }

    #[test]
    fn test_leaf_children_is_canonical_empty() {
        let leaf = Component::text("leaf");
        assert!(std::ptr::eq(leaf.children(), EMPTY_COMPONENT_LIST));
    }

    #[test]
    fn test_contains_through_hover() {
        let inner = Component::text("inner");
        let tooltip = Component::text("tooltip").append(inner.clone()).unwrap();
        let owner = Component::text("owner")
            .with_hover_event(HoverEvent::show_text(tooltip.clone()))
            .unwrap();

        assert!(owner.contains(&tooltip));
        assert!(owner.contains(&inner));
        assert!(!owner.contains_child(&inner));
    }

    #[test]
    fn test_hover_embedding_container_is_rejected() {
        let b = Component::text("b");
        let a = Component::text("a").append(b.clone()).unwrap();

        let result = b.with_hover_event(HoverEvent::show_text(a.clone()));
        assert!(result.is_err());
    }

    #[test]
    fn test_entity_name_takes_part_in_cycle_detection() {
        let owner = Component::text("owner");
        let name = Component::text("name").append(owner.clone()).unwrap();
        let hover = HoverEvent::show_entity(Key::minecraft("pig").unwrap(), uuid::Uuid::nil(), Some(name));
        assert!(owner.with_hover_event(hover).is_err());
    }

    #[test]
    fn test_copy_is_equal_but_distinct() {
        let original = Component::text("x")
            .with_color(TextColor::AQUA)
            .append(Component::text("y"))
            .unwrap();
        let copy = original.copy();

        assert_eq!(copy, original);
        assert!(!copy.ptr_eq(&original));
        assert!(copy.children()[0].ptr_eq(&original.children()[0]));
    }

    #[test]
    fn test_decoration_set_and_clear() {
        let a = Component::text("a");
        for decoration in TextDecoration::ALL {
            let set = a.with_decoration(decoration, true);
            assert_eq!(set.decoration(decoration), DecorationState::True);
            assert!(set.has_decoration(decoration));

            let cleared = set.with_decoration(decoration, DecorationState::NotSet);
            assert_eq!(cleared.decoration(decoration), DecorationState::NotSet);
            assert!(!cleared.has_styling());
        }
    }

    #[test]
    fn test_decorations_with_defaults() {
        let k = TextDecoration::Underlined;
        let unset = Component::text("a");
        let off = unset.with_decoration(k, false);
        let on = unset.with_decoration(k, true);
        let defaults = BTreeSet::from([k]);

        assert!(!unset.decorations_with_defaults(&BTreeSet::new()).contains(&k));
        assert!(unset.decorations_with_defaults(&defaults).contains(&k));
        assert!(!off.decorations_with_defaults(&defaults).contains(&k));
        assert!(on.decorations_with_defaults(&BTreeSet::new()).contains(&k));
        assert_eq!(on.decorations(), BTreeSet::from([k]));
    }

    #[test]
    fn test_merge_color_law() {
        let red = Component::text("a").with_color(TextColor::RED);
        let blue = Component::text("b").with_color(TextColor::BLUE);
        let plain = Component::text("c");

        assert_eq!(red.merge_color(&blue).color(), Some(TextColor::BLUE));
        assert_eq!(red.merge_color(&plain).color(), Some(TextColor::RED));
        assert_eq!(plain.merge_color(&plain).color(), None);
    }

    #[test]
    fn test_merge_decorations_that_wins_on_conflict() {
        let this = Component::text("a")
            .with_decoration(TextDecoration::Bold, true)
            .with_decoration(TextDecoration::Italic, false);
        let that = Component::text("b")
            .with_decoration(TextDecoration::Bold, false)
            .with_decoration(TextDecoration::Obfuscated, true);

        let merged = this.merge_decorations(&that);
        assert_eq!(merged.decoration(TextDecoration::Bold), DecorationState::False);
        assert_eq!(merged.decoration(TextDecoration::Italic), DecorationState::False);
        assert_eq!(merged.decoration(TextDecoration::Obfuscated), DecorationState::True);
    }

    #[test]
    fn test_merge_events_copies_set_values_only() {
        let this = Component::text("a").with_insertion("keep".to_string());
        let that = Component::text("b").with_click_event(ClickEvent::open_url("https://example.org"));

        let merged = this.merge_events(&that).unwrap();
        assert_eq!(merged.insertion(), Some("keep"));
        assert_eq!(merged.click_event(), Some(&ClickEvent::open_url("https://example.org")));
    }

    #[test]
    fn test_merge_events_rejects_hover_cycle() {
        let this = Component::text("this");
        let that = Component::text("that")
            .with_hover_event(HoverEvent::show_text(this.clone()))
            .unwrap();
        // Hover content of `that` would point back at `this`
        assert!(this.merge_events(&that).is_err());
        assert!(this.merge_style(&that).is_err());
    }

    #[test]
    fn test_reset_style() {
        let styled = Component::text("a")
            .with_color(TextColor::Rgb(1, 2, 3))
            .with_decoration(TextDecoration::Strikethrough, true)
            .with_click_event(ClickEvent::suggest_command("/help"))
            .with_insertion("ins".to_string())
            .with_hover_event(HoverEvent::show_text(Component::text("tip")))
            .unwrap();

        assert!(styled.has_styling());
        let reset = styled.reset_style();
        assert!(!reset.has_styling());
        assert_eq!(reset.content(), styled.content());
    }

    #[test]
    fn test_of_primitives() {
        let component = Component::of(true);
        assert_eq!(component.content(), &Content::Text("true".to_string()));
        assert!(component.children().is_empty());
        assert!(!component.has_styling());

        assert_eq!(Component::of('x'), Component::text("x"));
        assert_eq!(Component::of(-7i64), Component::text("-7"));
        assert_eq!(Component::of(2.5f64), Component::text("2.5"));
        assert_eq!(Component::of(1.0f64), Component::text("1.0"));
        assert_eq!(Component::of(-0.5f32), Component::text("-0.5"));
        assert_eq!(Component::of(u64::MAX), Component::text("18446744073709551615"));
    }

    #[test]
    fn test_with_children_checks_each_child() {
        let parent = Component::text("p");
        let looped = Component::text("l")
            .with_hover_event(HoverEvent::show_text(parent.clone()))
            .unwrap();
        assert!(parent.with_children([Component::text("ok"), looped]).is_err());

        let replaced = parent.with_children([Component::text("ok")]).unwrap();
        assert_eq!(replaced.to_plain_text(), "pok");
    }

    #[test]
    fn test_components_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Component>();
    }
}
