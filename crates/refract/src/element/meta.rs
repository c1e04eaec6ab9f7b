//! Meta and attributes: lazy mapping elements and their convenience
//! properties

use serde_json::Value;

use super::{Content, Element, ElementKind};
use crate::error::{RefractError, Result};

impl Element {
    /// The element's metadata mapping, materialized on first access.
    ///
    /// When the owning element is frozen the mapping is created already
    /// frozen, so the lazy accessor never hands out a transiently
    /// mutable node.
    pub fn meta(&self) -> Element {
        let existing = self.existing_meta();
        if let Some(meta) = existing {
            return meta;
        }
        let meta = self.new_property_map();
        self.store_meta(Some(meta.clone()));
        meta
    }

    /// The element's attributes mapping, materialized on first access.
    /// Same lazy/frozen rule as [`Element::meta`].
    pub fn attributes(&self) -> Element {
        let existing = self.existing_attributes();
        if let Some(attributes) = existing {
            return attributes;
        }
        let attributes = self.new_property_map();
        self.store_attributes(Some(attributes.clone()));
        attributes
    }

    fn new_property_map(&self) -> Element {
        let map = Element::object();
        map.set_parent(Some(self));
        if self.is_frozen() {
            map.freeze();
        }
        map
    }

    /// Replace the metadata wholesale. Accepts a mapping-shaped element
    /// or a raw mapping (auto-boxed).
    pub fn set_meta(&self, meta: impl Into<Element>) -> Result<()> {
        let meta = meta.into();
        self.ensure_mutable()?;
        self.check_adoptable(&meta)?;
        if let Some(previous) = self.existing_meta() {
            previous.set_parent(None);
        }
        meta.set_parent(Some(self));
        self.store_meta(Some(meta));
        Ok(())
    }

    /// Replace the attributes wholesale. Same contract as
    /// [`Element::set_meta`].
    pub fn set_attributes(&self, attributes: impl Into<Element>) -> Result<()> {
        let attributes = attributes.into();
        self.ensure_mutable()?;
        self.check_adoptable(&attributes)?;
        if let Some(previous) = self.existing_attributes() {
            previous.set_parent(None);
        }
        attributes.set_parent(Some(self));
        self.store_attributes(Some(attributes));
        Ok(())
    }

    /// Look up a meta property, falling back to a default element. The
    /// default is born frozen when the owner is frozen, and is not
    /// stored back into meta.
    fn meta_property(&self, name: &str, default: impl FnOnce() -> Element) -> Element {
        if let Some(value) = self.meta().get(name) {
            return value;
        }
        let value = default();
        if self.is_frozen() {
            value.freeze();
        }
        value
    }

    // ═══════════════════════════════════════════════════════════════════
    // Convenience meta properties
    // ═══════════════════════════════════════════════════════════════════

    /// The `id` meta property.
    pub fn id(&self) -> Option<Element> {
        self.meta().get("id")
    }

    /// Set the `id` meta property.
    pub fn set_id(&self, id: impl Into<String>) -> Result<()> {
        self.meta().set("id", Element::string(id))
    }

    /// The `classes` meta property, defaulting to an empty array element.
    pub fn classes(&self) -> Element {
        self.meta_property("classes", Element::empty_array)
    }

    /// Set the `classes` meta property from a raw sequence value.
    pub fn set_classes(&self, classes: impl Into<Value>) -> Result<()> {
        self.meta().set("classes", Element::from_value(classes.into()))
    }

    /// The `title` meta property.
    pub fn title(&self) -> Option<Element> {
        self.meta().get("title")
    }

    /// Set the `title` meta property.
    pub fn set_title(&self, title: impl Into<String>) -> Result<()> {
        self.meta().set("title", Element::string(title))
    }

    /// The `description` meta property.
    pub fn description(&self) -> Option<Element> {
        self.meta().get("description")
    }

    /// Set the `description` meta property.
    pub fn set_description(&self, description: impl Into<String>) -> Result<()> {
        self.meta().set("description", Element::string(description))
    }

    /// The `links` meta property, defaulting to an empty array element of
    /// link elements.
    pub fn links(&self) -> Element {
        self.meta_property("links", Element::empty_array)
    }

    /// Set the `links` meta property.
    pub fn set_links(&self, links: impl Into<Element>) -> Result<()> {
        self.meta().set("links", links)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Link and ref accessors
    // ═══════════════════════════════════════════════════════════════════

    /// The `relation` attribute (link elements).
    pub fn relation(&self) -> Option<Element> {
        self.attributes().get("relation")
    }

    /// The `href` attribute (link elements).
    pub fn href(&self) -> Option<Element> {
        self.attributes().get("href")
    }

    /// The `path` attribute (ref elements).
    pub fn path(&self) -> Option<Element> {
        self.attributes().get("path")
    }

    /// Build a ref element pointing back at this element by `id`.
    ///
    /// The ref's content is the raw id value and its `path` attribute is
    /// `path`, defaulting to `"element"`. Fails with `MissingIdentifier`
    /// when no usable `id` is set.
    pub fn to_ref(&self, path: Option<&str>) -> Result<Element> {
        let id = self.id().and_then(|id| id.to_value());
        let id = match id {
            Some(Value::String(s)) if s.is_empty() => return Err(RefractError::MissingIdentifier),
            Some(Value::Null) | None => return Err(RefractError::MissingIdentifier),
            Some(value) => value,
        };
        let reference = Element::of_kind(ElementKind::Ref);
        reference.set_content_unchecked(Content::from(id));
        reference
            .attributes()
            .set("path", Element::string(path.unwrap_or("element")))?;
        Ok(reference)
    }
}
