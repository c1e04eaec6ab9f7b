//! Keyed views over sequences of member elements

use std::ops::{Deref, DerefMut};

use serde_json::Value;

use super::ArraySlice;
use crate::element::Element;
use crate::error::Result;

/// An [`ArraySlice`] specialized for member-shaped elements, adding
/// key-based lookup.
///
/// Keys compare by raw-value equality of each member's key element.
/// `set` preserves the position of an existing key and appends new
/// keys; `remove` deletes at most one member, the first by position.
#[derive(Clone, Default, Debug)]
pub struct ObjectSlice {
    inner: ArraySlice,
}

impl ObjectSlice {
    /// Create a detached slice over the given member elements.
    pub fn new(members: Vec<Element>) -> ObjectSlice {
        ObjectSlice {
            inner: ArraySlice::new(members),
        }
    }

    /// A slice mirroring an object-shaped element's content.
    pub(crate) fn with_origin(members: Vec<Element>, origin: Element) -> ObjectSlice {
        ObjectSlice {
            inner: ArraySlice::with_origin(members, origin),
        }
    }

    /// Consume the slice, yielding its member handles.
    pub fn into_elements(self) -> Vec<Element> {
        self.inner.into_elements()
    }

    /// The ordered raw key values of the members.
    pub fn keys(&self) -> Vec<Value> {
        self.inner
            .compact_map(|member| member.key().and_then(|key| key.to_value()))
    }

    /// The first member whose key equals `key`.
    pub fn get_member(&self, key: &str) -> Option<Element> {
        let key = Value::String(key.to_owned());
        self.inner
            .iter()
            .find(|member| member.key().and_then(|k| k.to_value()).as_ref() == Some(&key))
            .cloned()
    }

    /// The value element of the first member whose key equals `key`.
    pub fn get(&self, key: &str) -> Option<Element> {
        self.get_member(key).and_then(|member| member.value())
    }

    /// The raw value of the first member whose key equals `key`.
    pub fn get_value(&self, key: &str) -> Option<Value> {
        self.get(key).and_then(|value| value.to_value())
    }

    /// Upsert: replace the value of an existing key in place (the member
    /// keeps its position), or append a new member.
    pub fn set(&mut self, key: &str, value: impl Into<Element>) -> Result<()> {
        if let Some(member) = self.get_member(key) {
            return member.set_value(value);
        }
        let member = Element::member(Element::string(key), value)?;
        self.inner.push(member)
    }

    /// Remove the first member whose key equals `key`, returning it.
    pub fn remove(&mut self, key: &str) -> Result<Option<Element>> {
        let raw = Value::String(key.to_owned());
        let index = self
            .inner
            .iter()
            .position(|member| member.key().and_then(|k| k.to_value()).as_ref() == Some(&raw));
        let index = match index {
            Some(index) => index,
            None => return Ok(None),
        };
        if let Some(origin) = self.inner.origin.clone() {
            let removed = origin.remove(key)?;
            self.inner.elements.remove(index);
            return Ok(removed);
        }
        Ok(Some(self.inner.elements.remove(index)))
    }
}

impl Deref for ObjectSlice {
    type Target = ArraySlice;

    fn deref(&self) -> &ArraySlice {
        &self.inner
    }
}

impl DerefMut for ObjectSlice {
    fn deref_mut(&mut self) -> &mut ArraySlice {
        &mut self.inner
    }
}

impl From<Vec<Element>> for ObjectSlice {
    fn from(members: Vec<Element>) -> ObjectSlice {
        ObjectSlice::new(members)
    }
}
