//! Mapping operations for object-shaped elements
//!
//! An object-shaped element holds an ordered sequence of member elements.
//! All lookups compare keys by raw-value equality; `set` preserves the
//! first-seen position of an existing key and appends new keys.

use serde_json::Value;

use super::{Content, Element};
use crate::error::Result;
use crate::slice::ObjectSlice;

impl Element {
    /// A keyed view over the member children. Mutations on the returned
    /// slice write through to this element's content.
    pub fn members(&self) -> ObjectSlice {
        match self.content() {
            Content::Elements(items) => ObjectSlice::with_origin(items, self.clone()),
            _ => ObjectSlice::new(Vec::new()),
        }
    }

    /// The first member element whose key equals `key`.
    pub fn get_member(&self, key: &str) -> Option<Element> {
        self.find_member(&Value::String(key.to_owned()))
    }

    /// The value element of the first member whose key equals `key`.
    pub fn get(&self, key: &str) -> Option<Element> {
        self.get_member(key).and_then(|member| member.value())
    }

    /// The raw value of the first member whose key equals `key`.
    pub fn get_value(&self, key: &str) -> Option<Value> {
        self.get(key).and_then(|value| value.to_value())
    }

    /// Upsert a member: replace the value of an existing key in place,
    /// or append a new member to the end.
    pub fn set(&self, key: impl Into<Value>, value: impl Into<Element>) -> Result<()> {
        let key = key.into();
        let value = value.into();
        self.ensure_mutable()?;
        if let Some(member) = self.find_member(&key) {
            return member.set_value(value);
        }
        let member = Element::member(Element::from_value(key), value)?;
        self.push(member)
    }

    /// Remove the first member whose key equals `key`, returning it
    /// detached from the tree.
    pub fn remove(&self, key: &str) -> Result<Option<Element>> {
        self.ensure_mutable()?;
        let key = Value::String(key.to_owned());
        let index = match self.member_index(&key) {
            Some(index) => index,
            None => return Ok(None),
        };
        let removed = {
            let mut data = self.inner.borrow_mut();
            match &mut data.content {
                Content::Elements(items) => items.remove(index),
                _ => return Ok(None),
            }
        };
        removed.set_parent(None);
        Ok(Some(removed))
    }

    /// The ordered raw key values of the member children.
    pub fn keys(&self) -> Vec<Value> {
        match self.content() {
            Content::Elements(items) => items
                .iter()
                .filter_map(|member| member.key().and_then(|key| key.to_value()))
                .collect(),
            _ => Vec::new(),
        }
    }

    fn find_member(&self, key: &Value) -> Option<Element> {
        match self.content() {
            Content::Elements(items) => items
                .into_iter()
                .find(|member| member.key().and_then(|k| k.to_value()).as_ref() == Some(key)),
            _ => None,
        }
    }

    fn member_index(&self, key: &Value) -> Option<usize> {
        match self.content() {
            Content::Elements(items) => items
                .iter()
                .position(|member| member.key().and_then(|k| k.to_value()).as_ref() == Some(key)),
            _ => None,
        }
    }
}
