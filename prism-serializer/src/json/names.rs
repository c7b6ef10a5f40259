//! Field names of the JSON component format.

pub(crate) const TEXT: &str = "text";
pub(crate) const TRANSLATE: &str = "translate";
pub(crate) const TRANSLATE_WITH: &str = "with";
pub(crate) const TRANSLATE_FALLBACK: &str = "fallback";
pub(crate) const KEYBIND: &str = "keybind";
pub(crate) const SCORE: &str = "score";
pub(crate) const SCORE_NAME: &str = "name";
pub(crate) const SCORE_OBJECTIVE: &str = "objective";
pub(crate) const SELECTOR: &str = "selector";
pub(crate) const SEPARATOR: &str = "separator";
pub(crate) const NBT: &str = "nbt";
pub(crate) const NBT_INTERPRET: &str = "interpret";
pub(crate) const NBT_BLOCK: &str = "block";
pub(crate) const NBT_ENTITY: &str = "entity";
pub(crate) const NBT_STORAGE: &str = "storage";
pub(crate) const EXTRA: &str = "extra";
pub(crate) const COLOR: &str = "color";
pub(crate) const INSERTION: &str = "insertion";
pub(crate) const CLICK_EVENT: &str = "clickEvent";
pub(crate) const HOVER_EVENT: &str = "hoverEvent";
pub(crate) const ACTION: &str = "action";
pub(crate) const VALUE: &str = "value";
pub(crate) const CONTENTS: &str = "contents";
pub(crate) const HOVER_ID: &str = "id";
pub(crate) const HOVER_COUNT: &str = "count";
pub(crate) const HOVER_COMPONENTS: &str = "components";
pub(crate) const HOVER_TYPE: &str = "type";
pub(crate) const HOVER_NAME: &str = "name";

/// Prefix marking a removed data component in an item's component map.
pub(crate) const REMOVED_PREFIX: &str = "!";
