//! Text decorations and their tri-state values.

use std::collections::BTreeSet;
use std::fmt;

/// A binary style attribute that can be applied to a component.
///
/// The declaration order is the canonical iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TextDecoration {
    Obfuscated,
    Bold,
    Strikethrough,
    Underlined,
    Italic,
}

impl TextDecoration {
    /// Every decoration, in canonical order.
    pub const ALL: [TextDecoration; 5] = [
        TextDecoration::Obfuscated,
        TextDecoration::Bold,
        TextDecoration::Strikethrough,
        TextDecoration::Underlined,
        TextDecoration::Italic,
    ];

    /// The name used on the wire.
    pub const fn name(self) -> &'static str {
        match self {
            TextDecoration::Obfuscated => "obfuscated",
            TextDecoration::Bold => "bold",
            TextDecoration::Strikethrough => "strikethrough",
            TextDecoration::Underlined => "underlined",
            TextDecoration::Italic => "italic",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|decoration| decoration.name() == name)
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for TextDecoration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Explicit state of a decoration on a single component.
///
/// `NotSet` means the value is inherited from the parent (or a caller-supplied
/// default); it is distinct from `False`, which switches the decoration off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DecorationState {
    #[default]
    NotSet,
    False,
    True,
}

impl DecorationState {
    /// `None` for `NotSet`, otherwise the explicit flag.
    pub const fn as_bool(self) -> Option<bool> {
        match self {
            DecorationState::NotSet => None,
            DecorationState::False => Some(false),
            DecorationState::True => Some(true),
        }
    }

    pub const fn is_set(self) -> bool {
        !matches!(self, DecorationState::NotSet)
    }
}

impl From<bool> for DecorationState {
    fn from(flag: bool) -> Self {
        if flag {
            DecorationState::True
        } else {
            DecorationState::False
        }
    }
}

impl From<Option<bool>> for DecorationState {
    fn from(flag: Option<bool>) -> Self {
        flag.map_or(DecorationState::NotSet, DecorationState::from)
    }
}

/// Explicit decoration states for every kind, stored canonically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Decorations([DecorationState; 5]);

impl Decorations {
    pub const fn new() -> Self {
        Self([DecorationState::NotSet; 5])
    }

    pub const fn get(&self, decoration: TextDecoration) -> DecorationState {
        self.0[decoration.index()]
    }

    pub fn with(mut self, decoration: TextDecoration, state: DecorationState) -> Self {
        self.0[decoration.index()] = state;
        self
    }

    /// Kinds explicitly set to `True`, or left `NotSet` and present in `defaults`.
    pub fn resolve(&self, defaults: &BTreeSet<TextDecoration>) -> BTreeSet<TextDecoration> {
        TextDecoration::ALL
            .into_iter()
            .filter(|decoration| match self.get(*decoration) {
                DecorationState::True => true,
                DecorationState::NotSet => defaults.contains(decoration),
                DecorationState::False => false,
            })
            .collect()
    }

    /// Overlay every explicit state from `that` onto `self`.
    pub fn merge(self, that: &Decorations) -> Self {
        TextDecoration::ALL
            .into_iter()
            .fold(self, |merged, decoration| match that.get(decoration) {
                DecorationState::NotSet => merged,
                state => merged.with(decoration, state),
            })
    }

    pub fn any_set(&self) -> bool {
        self.0.iter().any(|state| state.is_set())
    }

    /// Explicit states in canonical order, skipping `NotSet`.
    pub fn iter_set(&self) -> impl Iterator<Item = (TextDecoration, bool)> + '_ {
        TextDecoration::ALL
            .into_iter()
            .filter_map(|decoration| self.get(decoration).as_bool().map(|flag| (decoration, flag)))
    }
}
