//! JSON tree → Component.

use std::collections::BTreeMap;

use prism_api::{
    ClickAction, ClickEvent, Component, Content, DataComponentValue, HoverEvent, Key, NbtSource,
    ShowEntity, ShowItem, Style, TextColor, TextDecoration,
};
use serde_json::{Map, Value as JsonValue};
use uuid::Uuid;

use super::names::*;
use crate::JsonError;

type Object = Map<String, JsonValue>;

pub(crate) fn decode(value: &JsonValue) -> Result<Component, JsonError> {
    match value {
        JsonValue::String(text) => Ok(Component::text(text.as_str())),
        JsonValue::Bool(_) | JsonValue::Number(_) => Ok(Component::text(value.to_string())),
        // `[parent, child, child, ...]`
        JsonValue::Array(items) => {
            let (first, rest) = items.split_first().ok_or(JsonError::EmptyArray)?;
            let children = rest.iter().map(decode).collect::<Result<Vec<_>, _>>()?;
            Ok(decode(first)?.to_builder().append_all(children).build())
        }
        JsonValue::Object(object) => decode_object(object),
        JsonValue::Null => Err(JsonError::UnexpectedType {
            field: "component",
            expected: "a string, array or object",
        }),
    }
}

fn decode_object(object: &Object) -> Result<Component, JsonError> {
    let content = decode_content(object)?;
    let style = decode_style(object)?;
    let children = match object.get(EXTRA) {
        Some(JsonValue::Array(items)) => items.iter().map(decode).collect::<Result<Vec<_>, _>>()?,
        Some(_) => {
            return Err(JsonError::UnexpectedType {
                field: EXTRA,
                expected: "an array",
            })
        }
        None => Vec::new(),
    };

    Ok(Component::builder(content).style(style).append_all(children).build())
}

fn decode_content(object: &Object) -> Result<Content, JsonError> {
    if let Some(text) = object.get(TEXT) {
        let text = match text {
            JsonValue::String(text) => text.clone(),
            JsonValue::Bool(_) | JsonValue::Number(_) => text.to_string(),
            _ => {
                return Err(JsonError::UnexpectedType {
                    field: TEXT,
                    expected: "a string",
                })
            }
        };
        return Ok(Content::Text(text));
    }

    if let Some(key) = optional_string(object, TRANSLATE)? {
        let args = match object.get(TRANSLATE_WITH) {
            Some(JsonValue::Array(items)) => items.iter().map(decode).collect::<Result<Vec<_>, _>>()?,
            Some(_) => {
                return Err(JsonError::UnexpectedType {
                    field: TRANSLATE_WITH,
                    expected: "an array",
                })
            }
            None => Vec::new(),
        };
        let fallback = optional_string(object, TRANSLATE_FALLBACK)?;
        return Ok(Content::Translatable { key, args, fallback });
    }

    if let Some(keybind) = optional_string(object, KEYBIND)? {
        return Ok(Content::Keybind(keybind));
    }

    if let Some(score) = object.get(SCORE) {
        let score = score.as_object().ok_or(JsonError::UnexpectedType {
            field: SCORE,
            expected: "an object",
        })?;
        return Ok(Content::Score {
            name: required_string(score, SCORE_NAME)?,
            objective: required_string(score, SCORE_OBJECTIVE)?,
        });
    }

    if let Some(pattern) = optional_string(object, SELECTOR)? {
        return Ok(Content::Selector {
            pattern,
            separator: optional_component(object, SEPARATOR)?,
        });
    }

    if let Some(path) = optional_string(object, NBT)? {
        let interpret = optional_bool(object, NBT_INTERPRET)?.unwrap_or(false);
        let source = if let Some(position) = optional_string(object, NBT_BLOCK)? {
            NbtSource::Block(position)
        } else if let Some(selector) = optional_string(object, NBT_ENTITY)? {
            NbtSource::Entity(selector)
        } else if let Some(storage) = optional_string(object, NBT_STORAGE)? {
            NbtSource::Storage(Key::parse(&storage)?)
        } else {
            return Err(JsonError::MissingField(NBT_STORAGE));
        };
        return Ok(Content::Nbt {
            path,
            interpret,
            separator: optional_component(object, SEPARATOR)?,
            source,
        });
    }

    Err(JsonError::MissingContent)
}

fn decode_style(object: &Object) -> Result<Style, JsonError> {
    let mut style = Style::empty();

    if let Some(color) = optional_string(object, COLOR)? {
        let parsed = TextColor::parse(&color).ok_or(JsonError::UnknownColor(color))?;
        style = style.with_color(parsed);
    }

    for decoration in TextDecoration::ALL {
        if let Some(flag) = optional_bool(object, decoration.name())? {
            style = style.with_decoration(decoration, flag);
        }
    }

    if let Some(insertion) = optional_string(object, INSERTION)? {
        style = style.with_insertion(insertion);
    }

    if let Some(click) = object.get(CLICK_EVENT) {
        let click = click.as_object().ok_or(JsonError::UnexpectedType {
            field: CLICK_EVENT,
            expected: "an object",
        })?;
        style = style.with_click_event(decode_click(click)?);
    }

    if let Some(hover) = object.get(HOVER_EVENT) {
        let hover = hover.as_object().ok_or(JsonError::UnexpectedType {
            field: HOVER_EVENT,
            expected: "an object",
        })?;
        style = style.with_hover_event(decode_hover(hover)?);
    }

    Ok(style)
}

fn decode_click(object: &Object) -> Result<ClickEvent, JsonError> {
    let name = required_string(object, ACTION)?;
    let action = ClickAction::from_name(&name).ok_or(JsonError::UnknownAction { kind: "click", name })?;
    // change_page has been sent as a number by some servers
    let value = match object.get(VALUE) {
        Some(JsonValue::String(value)) => value.clone(),
        Some(JsonValue::Number(page)) => page.to_string(),
        Some(_) => {
            return Err(JsonError::UnexpectedType {
                field: VALUE,
                expected: "a string",
            })
        }
        None => return Err(JsonError::MissingField(VALUE)),
    };
    Ok(ClickEvent::new(action, value))
}

fn decode_hover(object: &Object) -> Result<HoverEvent, JsonError> {
    let name = required_string(object, ACTION)?;
    let contents = object
        .get(CONTENTS)
        .or_else(|| object.get(VALUE))
        .ok_or(JsonError::MissingField(CONTENTS))?;

    match name.as_str() {
        "show_text" => Ok(HoverEvent::ShowText(decode(contents)?)),
        "show_item" => decode_show_item(contents).map(HoverEvent::ShowItem),
        "show_entity" => decode_show_entity(contents).map(HoverEvent::ShowEntity),
        _ => Err(JsonError::UnknownAction {
            kind: "hover",
            name: name.clone(),
        }),
    }
}

fn decode_show_item(contents: &JsonValue) -> Result<ShowItem, JsonError> {
    let object = match contents {
        // Bare item id
        JsonValue::String(id) => return Ok(ShowItem::new(Key::parse(id)?, 1)),
        JsonValue::Object(object) => object,
        _ => {
            return Err(JsonError::UnexpectedType {
                field: CONTENTS,
                expected: "an item object",
            })
        }
    };

    let item = Key::parse(&required_string(object, HOVER_ID)?)?;
    let count = match object.get(HOVER_COUNT) {
        Some(count) => count
            .as_i64()
            .and_then(|count| i32::try_from(count).ok())
            .ok_or(JsonError::UnexpectedType {
                field: HOVER_COUNT,
                expected: "a 32-bit integer",
            })?,
        None => 1,
    };

    let mut components = BTreeMap::new();
    if let Some(map) = object.get(HOVER_COMPONENTS) {
        let map = map.as_object().ok_or(JsonError::UnexpectedType {
            field: HOVER_COMPONENTS,
            expected: "an object",
        })?;
        for (raw_key, element) in map {
            match raw_key.strip_prefix(REMOVED_PREFIX) {
                Some(removed) => {
                    components.insert(Key::parse(removed)?, DataComponentValue::Removed);
                }
                None => {
                    components.insert(Key::parse(raw_key)?, DataComponentValue::Json(element.clone()));
                }
            }
        }
    }

    Ok(ShowItem {
        item,
        count,
        components,
    })
}

fn decode_show_entity(contents: &JsonValue) -> Result<ShowEntity, JsonError> {
    let object = contents.as_object().ok_or(JsonError::UnexpectedType {
        field: CONTENTS,
        expected: "an entity object",
    })?;
    Ok(ShowEntity {
        kind: Key::parse(&required_string(object, HOVER_TYPE)?)?,
        id: Uuid::parse_str(&required_string(object, HOVER_ID)?)?,
        name: optional_component(object, HOVER_NAME)?,
    })
}

fn optional_string(object: &Object, field: &'static str) -> Result<Option<String>, JsonError> {
    match object.get(field) {
        Some(JsonValue::String(value)) => Ok(Some(value.clone())),
        Some(_) => Err(JsonError::UnexpectedType {
            field,
            expected: "a string",
        }),
        None => Ok(None),
    }
}

fn required_string(object: &Object, field: &'static str) -> Result<String, JsonError> {
    optional_string(object, field)?.ok_or(JsonError::MissingField(field))
}

fn optional_bool(object: &Object, field: &'static str) -> Result<Option<bool>, JsonError> {
    match object.get(field) {
        Some(JsonValue::Bool(flag)) => Ok(Some(*flag)),
        Some(_) => Err(JsonError::UnexpectedType {
            field,
            expected: "a boolean",
        }),
        None => Ok(None),
    }
}

fn optional_component(object: &Object, field: &'static str) -> Result<Option<Component>, JsonError> {
    object.get(field).map(decode).transpose()
}
