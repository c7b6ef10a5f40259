//! Prism API - Styled text components shared by every Prism crate.
//!
//! This crate contains the component data model:
//! - Component tree with persistent updates and cycle detection
//! - Content variants (text, translatable, keybind, score, selector, nbt)
//! - Style envelope (color, tri-state decorations, click/hover events, insertion)
//! - Namespaced keys and item data component values

mod builder;
mod color;
mod component;
mod content;
mod data_component;
mod decoration;
mod error;
mod event;
mod key;
mod style;

pub use builder::ComponentBuilder;
pub use color::{NamedColor, TextColor};
pub use component::{Component, EMPTY_COMPONENT_LIST, Primitive};
pub use content::{Content, NbtSource};
pub use data_component::DataComponentValue;
pub use decoration::{DecorationState, Decorations, TextDecoration};
pub use error::{CycleError, InvalidKeyError};
pub use event::{ClickAction, ClickEvent, HoverEvent, ShowEntity, ShowItem};
pub use key::Key;
pub use style::Style;
