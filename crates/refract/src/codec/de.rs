//! Wire document → element tree

use serde_json::Value;

use crate::element::{Content, Element, ElementKind};
use crate::error::{RefractError, Result};
use crate::pair::KeyValuePair;
use crate::registry::Registry;

/// Decode a wire document, dispatching element names through the
/// registry. Unknown names fall back to a base element carrying the
/// name.
pub(crate) fn from_refract(registry: &Registry, doc: &Value) -> Result<Element> {
    let map = doc
        .as_object()
        .ok_or_else(|| RefractError::decode("wire document must be a JSON object"))?;
    let name = map
        .get("element")
        .and_then(Value::as_str)
        .ok_or_else(|| RefractError::decode("wire document requires a string `element` name"))?;

    let element = registry.build(name);
    if let Some(meta) = map.get("meta") {
        decode_properties(registry, &element.meta(), meta)?;
    }
    if let Some(attributes) = map.get("attributes") {
        decode_properties(registry, &element.attributes(), attributes)?;
    }
    if let Some(content) = map.get("content") {
        decode_content(registry, &element, content)?;
    }
    Ok(element)
}

/// Decode one meta/attributes mapping, accepting both historical
/// encodings per entry: explicit (a nested wire document) and shorthand
/// (a raw value, auto-boxed).
fn decode_properties(registry: &Registry, target: &Element, value: &Value) -> Result<()> {
    let map = value
        .as_object()
        .ok_or_else(|| RefractError::decode("meta and attributes must be JSON objects"))?;
    for (key, entry) in map {
        let decoded = if is_wire_document(entry) {
            from_refract(registry, entry)?
        } else {
            registry.to_element(entry.clone())
        };
        target.set(key.as_str(), decoded)?;
    }
    Ok(())
}

fn is_wire_document(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|map| map.get("element").is_some_and(Value::is_string))
}

fn decode_content(registry: &Registry, element: &Element, content: &Value) -> Result<()> {
    match element.kind() {
        ElementKind::Null | ElementKind::Boolean | ElementKind::Number | ElementKind::String => {
            if content.is_array() || content.is_object() {
                return Err(RefractError::decode(format!(
                    "element `{}` requires scalar content",
                    element.name()
                )));
            }
            element.set_content(content.clone())
        }
        ElementKind::Array => {
            let items = content.as_array().ok_or_else(|| {
                RefractError::decode("array element content must be a sequence of wire documents")
            })?;
            let children = items
                .iter()
                .map(|item| from_refract(registry, item))
                .collect::<Result<Vec<_>>>()?;
            element.set_content(children)
        }
        ElementKind::Object => {
            let items = content.as_array().ok_or_else(|| {
                RefractError::decode("object element content must be a sequence of member documents")
            })?;
            let mut members = Vec::with_capacity(items.len());
            for item in items {
                let member = from_refract(registry, item)?;
                if !matches!(member.content(), Content::Pair(_)) {
                    return Err(RefractError::decode(
                        "object element members require key/value content",
                    ));
                }
                members.push(member);
            }
            element.set_content(members)
        }
        ElementKind::Member => decode_pair(registry, element, content),
        _ => decode_by_shape(registry, element, content),
    }
}

/// Content decode for the base element and custom kinds, where only the
/// document shape can tell us what the content is.
fn decode_by_shape(registry: &Registry, element: &Element, content: &Value) -> Result<()> {
    if is_wire_document(content) {
        let child = from_refract(registry, content)?;
        return element.set_content(child);
    }
    match content {
        Value::Object(map) if map.contains_key("key") => decode_pair(registry, element, content),
        Value::Object(_) => Err(RefractError::decode(format!(
            "unrecognized content shape for element `{}`",
            element.name()
        ))),
        Value::Array(items) => {
            let children = items
                .iter()
                .map(|item| {
                    if is_wire_document(item) {
                        from_refract(registry, item)
                    } else {
                        Ok(registry.to_element(item.clone()))
                    }
                })
                .collect::<Result<Vec<_>>>()?;
            element.set_content(children)
        }
        scalar => element.set_content(scalar.clone()),
    }
}

fn decode_pair(registry: &Registry, element: &Element, content: &Value) -> Result<()> {
    let map = content.as_object().ok_or_else(|| {
        RefractError::decode("member element content must hold `key` and `value` documents")
    })?;
    let key_doc = map
        .get("key")
        .ok_or_else(|| RefractError::decode("member element content requires a `key` document"))?;
    let mut pair = KeyValuePair::new();
    pair.set_key(Some(from_refract(registry, key_doc)?));
    if let Some(value_doc) = map.get("value") {
        pair.set_value(Some(from_refract(registry, value_doc)?));
    }
    element.set_content(pair)
}
