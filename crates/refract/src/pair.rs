//! The key/value content holder used by member-shaped elements

use serde_json::{Map, Value};

use crate::element::Element;

/// A two-slot (key, value) content holder.
///
/// Member-shaped elements store one of these as their content. Both slots
/// are optional; when present, the slot elements are owned children of the
/// element whose content is this pair.
///
/// `Clone` duplicates the slot *handles* (the cloned pair still refers to
/// the same nodes); use [`KeyValuePair::deep_clone`] for an independent copy.
#[derive(Debug, Clone, Default)]
pub struct KeyValuePair {
    key: Option<Element>,
    value: Option<Element>,
}

impl KeyValuePair {
    /// Create an empty pair.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pair holding only a key.
    pub fn with_key(key: Element) -> Self {
        KeyValuePair {
            key: Some(key),
            value: None,
        }
    }

    /// Create a pair holding a key and a value.
    pub fn with_key_value(key: Element, value: Element) -> Self {
        KeyValuePair {
            key: Some(key),
            value: Some(value),
        }
    }

    /// The key slot.
    pub fn key(&self) -> Option<&Element> {
        self.key.as_ref()
    }

    /// The value slot.
    pub fn value(&self) -> Option<&Element> {
        self.value.as_ref()
    }

    /// Replace the key slot.
    pub fn set_key(&mut self, key: Option<Element>) {
        self.key = key;
    }

    /// Replace the value slot.
    pub fn set_value(&mut self, value: Option<Element>) {
        self.value = value;
    }

    /// Deep-copy both slots, producing a pair with no shared state.
    pub fn deep_clone(&self) -> Self {
        KeyValuePair {
            key: self.key.as_ref().map(Element::deep_clone),
            value: self.value.as_ref().map(Element::deep_clone),
        }
    }

    /// Unwrap the pair to a raw `{"key": …, "value": …}` mapping.
    ///
    /// An absent slot, or a slot element with no content, contributes
    /// `null`.
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert(
            "key".to_owned(),
            self.key
                .as_ref()
                .and_then(Element::to_value)
                .unwrap_or(Value::Null),
        );
        map.insert(
            "value".to_owned(),
            self.value
                .as_ref()
                .and_then(Element::to_value)
                .unwrap_or(Value::Null),
        );
        Value::Object(map)
    }

    /// The present slot elements, key first.
    pub(crate) fn children(&self) -> Vec<Element> {
        self.key.iter().chain(self.value.iter()).cloned().collect()
    }
}

impl PartialEq for KeyValuePair {
    /// Structural equality: both slots compare by raw value.
    fn eq(&self, other: &Self) -> bool {
        let raw = |slot: &Option<Element>| slot.as_ref().and_then(Element::to_value);
        raw(&self.key) == raw(&other.key) && raw(&self.value) == raw(&other.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_compares_raw_values() {
        let a = KeyValuePair::with_key_value(Element::string("name"), Element::string("doe"));
        let b = KeyValuePair::with_key_value(Element::string("name"), Element::string("doe"));
        let c = KeyValuePair::with_key(Element::string("name"));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn deep_clone_copies_both_slots() {
        let pair = KeyValuePair::with_key_value(Element::string("name"), Element::string("doe"));
        let cloned = pair.deep_clone();

        assert_eq!(pair, cloned);
        assert!(!pair.key().unwrap().ptr_eq(cloned.key().unwrap()));
        assert!(!pair.value().unwrap().ptr_eq(cloned.value().unwrap()));
    }
}
