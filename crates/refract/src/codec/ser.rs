//! Element tree → wire document

use serde_json::{Map, Value};

use crate::element::{Content, Element};

/// Encode an element tree as a Refract wire document.
///
/// Meta and attributes are emitted in the explicit encoding (every entry
/// a nested wire document) and omitted entirely when unmaterialized or
/// empty. Content takes the shape matching the element's kind: a raw
/// scalar, a nested document, a sequence of documents, or a
/// `{key, value}` pair of documents.
pub fn to_refract(element: &Element) -> Value {
    let mut doc = Map::new();
    doc.insert("element".to_owned(), Value::String(element.name()));

    if let Some(meta) = element.existing_meta() {
        if let Some(properties) = properties(&meta) {
            doc.insert("meta".to_owned(), Value::Object(properties));
        }
    }
    if let Some(attributes) = element.existing_attributes() {
        if let Some(properties) = properties(&attributes) {
            doc.insert("attributes".to_owned(), Value::Object(properties));
        }
    }

    match element.content() {
        Content::Empty => {}
        Content::Value(value) => {
            doc.insert("content".to_owned(), value);
        }
        Content::Element(child) => {
            doc.insert("content".to_owned(), to_refract(&child));
        }
        Content::Elements(items) => {
            doc.insert(
                "content".to_owned(),
                Value::Array(items.iter().map(to_refract).collect()),
            );
        }
        Content::Pair(pair) => {
            let mut map = Map::new();
            if let Some(key) = pair.key() {
                map.insert("key".to_owned(), to_refract(key));
            }
            if let Some(value) = pair.value() {
                map.insert("value".to_owned(), to_refract(value));
            }
            doc.insert("content".to_owned(), Value::Object(map));
        }
    }

    Value::Object(doc)
}

/// Explicit-form properties for a mapping-shaped meta/attributes
/// element; `None` when there is nothing to emit.
fn properties(map_element: &Element) -> Option<Map<String, Value>> {
    let mut out = Map::new();
    for member in map_element.children().elements() {
        let key = match member.key().and_then(|key| key.to_value()) {
            Some(Value::String(key)) => key,
            Some(other) => other.to_string(),
            None => continue,
        };
        if let Some(value) = member.value() {
            out.insert(key, to_refract(&value));
        }
    }
    if out.is_empty() {
        None
    } else {
        Some(out)
    }
}

impl serde::Serialize for Element {
    /// Serialize the element as its Refract wire document.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        to_refract(self).serialize(serializer)
    }
}
