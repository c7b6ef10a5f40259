//! Component → JSON tree.

use prism_api::{ClickEvent, Component, Content, DataComponentValue, HoverEvent, NbtSource, Style};
use serde_json::{Map, Value as JsonValue};

use super::names::*;
use crate::JsonOptions;

/// Deepest tree [`encode`] is asked to handle.
pub(crate) const MAX_DEPTH: usize = 512;

/// Nesting depth through children, translation arguments, separators and
/// hover content, walked without recursion.
pub(crate) fn depth(component: &Component) -> usize {
    let mut deepest = 0;
    let mut stack = vec![(component, 1)];
    while let Some((current, level)) = stack.pop() {
        deepest = deepest.max(level);
        stack.extend(current.children().iter().map(|child| (child, level + 1)));
        match current.content() {
            Content::Translatable { args, .. } => stack.extend(args.iter().map(|arg| (arg, level + 1))),
            Content::Selector { separator, .. } | Content::Nbt { separator, .. } => {
                stack.extend(separator.iter().map(|separator| (separator, level + 1)))
            }
            _ => {}
        }
        if let Some(hover) = current.hover_event().and_then(HoverEvent::component) {
            stack.push((hover, level + 1));
        }
    }
    deepest
}

pub(crate) fn encode(component: &Component, options: &JsonOptions) -> JsonValue {
    if options.compact_text && component.children().is_empty() && !component.has_styling() {
        if let Content::Text(text) = component.content() {
            return JsonValue::String(text.clone());
        }
    }

    let mut object = Map::new();
    encode_content(component.content(), &mut object, options);
    encode_style(component.style(), &mut object, options);

    if !component.children().is_empty() {
        let children = component
            .children()
            .iter()
            .map(|child| encode(child, options))
            .collect();
        object.insert(EXTRA.to_string(), JsonValue::Array(children));
    }

    JsonValue::Object(object)
}

fn encode_content(content: &Content, object: &mut Map<String, JsonValue>, options: &JsonOptions) {
    match content {
        Content::Text(text) => {
            object.insert(TEXT.to_string(), JsonValue::from(text.as_str()));
        }
        Content::Translatable { key, args, fallback } => {
            object.insert(TRANSLATE.to_string(), JsonValue::from(key.as_str()));
            if let Some(fallback) = fallback {
                object.insert(TRANSLATE_FALLBACK.to_string(), JsonValue::from(fallback.as_str()));
            }
            if !args.is_empty() {
                let args = args.iter().map(|arg| encode(arg, options)).collect();
                object.insert(TRANSLATE_WITH.to_string(), JsonValue::Array(args));
            }
        }
        Content::Keybind(keybind) => {
            object.insert(KEYBIND.to_string(), JsonValue::from(keybind.as_str()));
        }
        Content::Score { name, objective } => {
            let mut score = Map::new();
            score.insert(SCORE_NAME.to_string(), JsonValue::from(name.as_str()));
            score.insert(SCORE_OBJECTIVE.to_string(), JsonValue::from(objective.as_str()));
            object.insert(SCORE.to_string(), JsonValue::Object(score));
        }
        Content::Selector { pattern, separator } => {
            object.insert(SELECTOR.to_string(), JsonValue::from(pattern.as_str()));
            if let Some(separator) = separator {
                object.insert(SEPARATOR.to_string(), encode(separator, options));
            }
        }
        Content::Nbt {
            path,
            interpret,
            separator,
            source,
        } => {
            object.insert(NBT.to_string(), JsonValue::from(path.as_str()));
            object.insert(NBT_INTERPRET.to_string(), JsonValue::Bool(*interpret));
            if let Some(separator) = separator {
                object.insert(SEPARATOR.to_string(), encode(separator, options));
            }
            let (field, value) = match source {
                NbtSource::Block(position) => (NBT_BLOCK, position.clone()),
                NbtSource::Entity(selector) => (NBT_ENTITY, selector.clone()),
                NbtSource::Storage(key) => (NBT_STORAGE, key.as_string()),
            };
            object.insert(field.to_string(), JsonValue::String(value));
        }
    }
}

fn encode_style(style: &Style, object: &mut Map<String, JsonValue>, options: &JsonOptions) {
    if let Some(color) = style.color() {
        let name = if options.downsample_colors {
            color.nearest_named().name().to_string()
        } else {
            color.to_string()
        };
        object.insert(COLOR.to_string(), JsonValue::String(name));
    }

    for (decoration, flag) in style.decorations().iter_set() {
        object.insert(decoration.name().to_string(), JsonValue::Bool(flag));
    }

    if let Some(insertion) = style.insertion() {
        object.insert(INSERTION.to_string(), JsonValue::from(insertion));
    }
    if let Some(click) = style.click_event() {
        object.insert(CLICK_EVENT.to_string(), encode_click(click));
    }
    if let Some(hover) = style.hover_event() {
        object.insert(HOVER_EVENT.to_string(), encode_hover(hover, options));
    }
}

fn encode_click(click: &ClickEvent) -> JsonValue {
    let mut object = Map::new();
    object.insert(ACTION.to_string(), JsonValue::from(click.action().name()));
    object.insert(VALUE.to_string(), JsonValue::from(click.value()));
    JsonValue::Object(object)
}

fn encode_hover(hover: &HoverEvent, options: &JsonOptions) -> JsonValue {
    let mut object = Map::new();
    object.insert(ACTION.to_string(), JsonValue::from(hover.action_name()));

    match hover {
        HoverEvent::ShowText(text) => {
            let field = if options.legacy_hover_value { VALUE } else { CONTENTS };
            object.insert(field.to_string(), encode(text, options));
        }
        HoverEvent::ShowItem(item) => {
            let mut contents = Map::new();
            contents.insert(HOVER_ID.to_string(), JsonValue::String(item.item.as_string()));
            contents.insert(HOVER_COUNT.to_string(), JsonValue::from(item.count));
            if !item.components.is_empty() {
                let components = item
                    .components
                    .iter()
                    .map(|(key, value)| match value {
                        DataComponentValue::Json(element) => (key.as_string(), element.clone()),
                        DataComponentValue::Removed => (
                            format!("{}{}", REMOVED_PREFIX, key.as_string()),
                            JsonValue::Object(Map::new()),
                        ),
                    })
                    .collect();
                contents.insert(HOVER_COMPONENTS.to_string(), JsonValue::Object(components));
            }
            object.insert(CONTENTS.to_string(), JsonValue::Object(contents));
        }
        HoverEvent::ShowEntity(entity) => {
            let mut contents = Map::new();
            contents.insert(HOVER_TYPE.to_string(), JsonValue::String(entity.kind.as_string()));
            contents.insert(
                HOVER_ID.to_string(),
                JsonValue::String(entity.id.hyphenated().to_string()),
            );
            if let Some(name) = &entity.name {
                contents.insert(HOVER_NAME.to_string(), encode(name, options));
            }
            object.insert(CONTENTS.to_string(), JsonValue::Object(contents));
        }
    }

    JsonValue::Object(object)
}
