//! Click and hover interactions attached to a component's style.

use std::collections::BTreeMap;
use std::fmt;

use uuid::Uuid;

use crate::{Component, DataComponentValue, Key};

/// What happens when a client clicks a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClickAction {
    OpenUrl,
    OpenFile,
    RunCommand,
    SuggestCommand,
    ChangePage,
    CopyToClipboard,
}

impl ClickAction {
    pub const ALL: [ClickAction; 6] = [
        ClickAction::OpenUrl,
        ClickAction::OpenFile,
        ClickAction::RunCommand,
        ClickAction::SuggestCommand,
        ClickAction::ChangePage,
        ClickAction::CopyToClipboard,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            ClickAction::OpenUrl => "open_url",
            ClickAction::OpenFile => "open_file",
            ClickAction::RunCommand => "run_command",
            ClickAction::SuggestCommand => "suggest_command",
            ClickAction::ChangePage => "change_page",
            ClickAction::CopyToClipboard => "copy_to_clipboard",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.name() == name)
    }
}

impl fmt::Display for ClickAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A click interaction: an action and its string payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClickEvent {
    action: ClickAction,
    value: String,
}

impl ClickEvent {
    pub fn new(action: ClickAction, value: impl Into<String>) -> Self {
        Self {
            action,
            value: value.into(),
        }
    }

    pub fn open_url(url: impl Into<String>) -> Self {
        Self::new(ClickAction::OpenUrl, url)
    }

    pub fn open_file(path: impl Into<String>) -> Self {
        Self::new(ClickAction::OpenFile, path)
    }

    pub fn run_command(command: impl Into<String>) -> Self {
        Self::new(ClickAction::RunCommand, command)
    }

    pub fn suggest_command(command: impl Into<String>) -> Self {
        Self::new(ClickAction::SuggestCommand, command)
    }

    pub fn change_page(page: u32) -> Self {
        Self::new(ClickAction::ChangePage, page.to_string())
    }

    pub fn copy_to_clipboard(text: impl Into<String>) -> Self {
        Self::new(ClickAction::CopyToClipboard, text)
    }

    pub fn action(&self) -> ClickAction {
        self.action
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Item shown by a `show_item` hover.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShowItem {
    pub item: Key,
    pub count: i32,
    /// Data components keyed by component type, in key order.
    pub components: BTreeMap<Key, DataComponentValue>,
}

impl ShowItem {
    pub fn new(item: Key, count: i32) -> Self {
        Self {
            item,
            count,
            components: BTreeMap::new(),
        }
    }

    pub fn with_component(mut self, key: Key, value: DataComponentValue) -> Self {
        self.components.insert(key, value);
        self
    }
}

/// Entity shown by a `show_entity` hover.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShowEntity {
    pub kind: Key,
    pub id: Uuid,
    pub name: Option<Component>,
}

/// A hover interaction.
///
/// `ShowText` and a named `ShowEntity` embed a component. That component is
/// not one of the owner's children but it still takes part in cycle detection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HoverEvent {
    ShowText(Component),
    ShowItem(ShowItem),
    ShowEntity(ShowEntity),
}

impl HoverEvent {
    pub fn show_text(text: impl Into<Component>) -> Self {
        HoverEvent::ShowText(text.into())
    }

    pub fn show_item(item: Key, count: i32) -> Self {
        HoverEvent::ShowItem(ShowItem::new(item, count))
    }

    pub fn show_entity(kind: Key, id: Uuid, name: Option<Component>) -> Self {
        HoverEvent::ShowEntity(ShowEntity { kind, id, name })
    }

    /// The wire name of this hover's action.
    pub const fn action_name(&self) -> &'static str {
        match self {
            HoverEvent::ShowText(_) => "show_text",
            HoverEvent::ShowItem(_) => "show_item",
            HoverEvent::ShowEntity(_) => "show_entity",
        }
    }

    /// The embedded component, if this hover carries one.
    pub fn component(&self) -> Option<&Component> {
        match self {
            HoverEvent::ShowText(text) => Some(text),
            HoverEvent::ShowEntity(entity) => entity.name.as_ref(),
            HoverEvent::ShowItem(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_constructors() {
        let event = ClickEvent::change_page(3);
        assert_eq!(event.action(), ClickAction::ChangePage);
        assert_eq!(event.value(), "3");

        let event = ClickEvent::run_command("/spawn");
        assert_eq!(event.action().to_string(), "run_command");
        assert_eq!(ClickAction::from_name("copy_to_clipboard"), Some(ClickAction::CopyToClipboard));
        assert_eq!(ClickAction::from_name("open_menu"), None);
    }

    #[test]
    fn test_hover_embedded_component() {
        let text = Component::text("tooltip");
        assert_eq!(HoverEvent::show_text(text.clone()).component(), Some(&text));

        let item = HoverEvent::show_item(Key::minecraft("stone").unwrap(), 2);
        assert_eq!(item.component(), None);
        assert_eq!(item.action_name(), "show_item");

        let anonymous = HoverEvent::show_entity(Key::minecraft("pig").unwrap(), Uuid::nil(), None);
        assert_eq!(anonymous.component(), None);
    }
}
