//! The element node type and its core invariants
//!
//! An [`Element`] is a cheap-to-clone handle onto a tree node. All
//! mutators take `&self` and go through interior mutability; the handle
//! is deliberately single-threaded (`Rc`/`RefCell` with a `Weak` parent
//! back-reference, so parent links never form an ownership cycle).

mod content;
mod display;
mod meta;
mod object;
mod traverse;

pub use content::Content;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use serde_json::Value;

use crate::error::{RefractError, Result};
use crate::pair::KeyValuePair;

// ═══════════════════════════════════════════════════════════════════════
// Element kinds
// ═══════════════════════════════════════════════════════════════════════

/// The built-in taxonomy an element can belong to.
///
/// The kind is fixed at construction time and drives wire-format codec
/// dispatch; renaming an element does not change its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// The base, untyped element
    Element,
    /// JSON null
    Null,
    /// A boolean scalar
    Boolean,
    /// A numeric scalar
    Number,
    /// A string scalar
    String,
    /// An ordered sequence of elements
    Array,
    /// A sequence of member elements (a mapping)
    Object,
    /// A single key/value pair
    Member,
    /// A hyperlink (relation/href held in attributes)
    Link,
    /// A reference to another element by id
    Ref,
}

impl ElementKind {
    /// The primitive tag this kind serializes to, if it is a scalar kind.
    pub fn primitive(self) -> Option<&'static str> {
        match self {
            ElementKind::Null => Some("null"),
            ElementKind::Boolean => Some("boolean"),
            ElementKind::Number => Some("number"),
            ElementKind::String => Some("string"),
            _ => None,
        }
    }

    /// The default element name for this kind.
    pub fn name(self) -> &'static str {
        match self {
            ElementKind::Element => "element",
            ElementKind::Null => "null",
            ElementKind::Boolean => "boolean",
            ElementKind::Number => "number",
            ElementKind::String => "string",
            ElementKind::Array => "array",
            ElementKind::Object => "object",
            ElementKind::Member => "member",
            ElementKind::Link => "link",
            ElementKind::Ref => "ref",
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Node storage
// ═══════════════════════════════════════════════════════════════════════

struct ElementData {
    name: String,
    kind: ElementKind,
    meta: Option<Element>,
    attributes: Option<Element>,
    content: Content,
    parent: Weak<RefCell<ElementData>>,
    frozen: bool,
}

/// A typed tree node wrapping content, metadata, and attributes.
///
/// `Element` is a handle: `Clone` produces another handle onto the same
/// node (use [`Element::deep_clone`] for an independent subtree).
/// Equality (`PartialEq`) is structural, comparing unwrapped raw values;
/// use [`Element::ptr_eq`] for node identity.
///
/// Invariants enforced at mutation time:
/// - an element has at most one parent; adopting an element that already
///   belongs elsewhere fails with
///   [`OwnershipViolation`](crate::RefractError::OwnershipViolation)
/// - once frozen, an element and every reachable descendant refuse all
///   mutation with [`FrozenViolation`](crate::RefractError::FrozenViolation)
#[derive(Clone)]
pub struct Element {
    inner: Rc<RefCell<ElementData>>,
}

impl Element {
    // ═══════════════════════════════════════════════════════════════════
    // Construction
    // ═══════════════════════════════════════════════════════════════════

    /// Create a base element with no content.
    pub fn new() -> Element {
        Element::of_kind(ElementKind::Element)
    }

    /// Create an empty element of the given kind, named after the kind.
    ///
    /// This is the construction seam for registered element types: a
    /// registry factory picks the kind (which drives codec dispatch) and
    /// the registry renames the element to the registered name.
    pub fn of_kind(kind: ElementKind) -> Element {
        Element {
            inner: Rc::new(RefCell::new(ElementData {
                name: kind.name().to_owned(),
                kind,
                meta: None,
                attributes: None,
                content: Content::Empty,
                parent: Weak::new(),
                frozen: false,
            })),
        }
    }

    /// Create a base element holding the given content.
    ///
    /// Fails with `OwnershipViolation` when the content carries an
    /// element that already has a parent.
    pub fn with_content(content: impl Into<Content>) -> Result<Element> {
        let element = Element::new();
        element.set_content(content)?;
        Ok(element)
    }

    /// A null element.
    pub fn null() -> Element {
        let element = Element::of_kind(ElementKind::Null);
        element.set_content_unchecked(Content::Value(Value::Null));
        element
    }

    /// A boolean element.
    pub fn boolean(value: bool) -> Element {
        let element = Element::of_kind(ElementKind::Boolean);
        element.set_content_unchecked(Content::Value(Value::Bool(value)));
        element
    }

    /// A number element. Accepts anything that converts to a JSON number.
    pub fn number(value: impl Into<Value>) -> Element {
        let element = Element::of_kind(ElementKind::Number);
        element.set_content_unchecked(Content::Value(value.into()));
        element
    }

    /// A string element.
    pub fn string(value: impl Into<String>) -> Element {
        let element = Element::of_kind(ElementKind::String);
        element.set_content_unchecked(Content::Value(Value::String(value.into())));
        element
    }

    /// An array element over the given items.
    ///
    /// Fails with `OwnershipViolation` when an item already has a parent.
    pub fn array<I>(items: I) -> Result<Element>
    where
        I: IntoIterator,
        I::Item: Into<Element>,
    {
        let element = Element::empty_array();
        element.set_content(items.into_iter().map(Into::into).collect::<Vec<_>>())?;
        Ok(element)
    }

    /// An empty object element (a mapping of member elements).
    pub fn object() -> Element {
        let element = Element::of_kind(ElementKind::Object);
        element.set_content_unchecked(Content::Elements(Vec::new()));
        element
    }

    /// A member element pairing a key with a value.
    ///
    /// Fails with `OwnershipViolation` when either slot already has a
    /// parent.
    pub fn member(key: impl Into<Element>, value: impl Into<Element>) -> Result<Element> {
        let element = Element::of_kind(ElementKind::Member);
        element.set_content(KeyValuePair::with_key_value(key.into(), value.into()))?;
        Ok(element)
    }

    /// A member element holding only a key.
    pub fn member_with_key(key: impl Into<Element>) -> Result<Element> {
        let element = Element::of_kind(ElementKind::Member);
        element.set_content(KeyValuePair::with_key(key.into()))?;
        Ok(element)
    }

    /// An empty link element. Relation and href live in its attributes.
    pub fn link() -> Element {
        Element::of_kind(ElementKind::Link)
    }

    /// A ref element pointing at the given target id.
    pub fn ref_element(target: impl Into<Value>) -> Element {
        let element = Element::of_kind(ElementKind::Ref);
        element.set_content_unchecked(Content::from(target.into()));
        element
    }

    /// An array element with an empty sequence (rather than no content).
    pub(crate) fn empty_array() -> Element {
        let element = Element::of_kind(ElementKind::Array);
        element.set_content_unchecked(Content::Elements(Vec::new()));
        element
    }

    // ═══════════════════════════════════════════════════════════════════
    // Identity
    // ═══════════════════════════════════════════════════════════════════

    /// The element name (type tag). Defaults to the kind's name.
    pub fn name(&self) -> String {
        self.inner.borrow().name.clone()
    }

    /// Rename the element. The kind is unchanged.
    pub fn set_name(&self, name: impl Into<String>) -> Result<()> {
        self.ensure_mutable()?;
        self.rename(name);
        Ok(())
    }

    pub(crate) fn rename(&self, name: impl Into<String>) {
        self.inner.borrow_mut().name = name.into();
    }

    /// The element's kind, fixed at construction.
    pub fn kind(&self) -> ElementKind {
        self.inner.borrow().kind
    }

    /// The primitive tag this element's content maps to when serialized,
    /// or `None` for non-scalar elements.
    pub fn primitive(&self) -> Option<&'static str> {
        self.kind().primitive()
    }

    /// Whether this element has been frozen.
    pub fn is_frozen(&self) -> bool {
        self.inner.borrow().frozen
    }

    /// Node identity: whether two handles refer to the same node.
    pub fn ptr_eq(&self, other: &Element) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Parent linkage
    // ═══════════════════════════════════════════════════════════════════

    /// The containing element, if this element is attached to a tree.
    pub fn parent(&self) -> Option<Element> {
        self.inner.borrow().parent.upgrade().map(|inner| Element { inner })
    }

    pub(crate) fn set_parent(&self, parent: Option<&Element>) {
        self.inner.borrow_mut().parent = match parent {
            Some(parent) => Rc::downgrade(&parent.inner),
            None => Weak::new(),
        };
    }

    pub(crate) fn ensure_mutable(&self) -> Result<()> {
        let data = self.inner.borrow();
        if data.frozen {
            return Err(RefractError::frozen(&data.name));
        }
        Ok(())
    }

    /// An element may be adopted only when it is unparented or already a
    /// child of `self`. Adopting an ancestor (or `self`) would create a
    /// content cycle and is rejected the same way.
    pub(crate) fn check_adoptable(&self, child: &Element) -> Result<()> {
        if let Some(parent) = child.parent() {
            if !parent.ptr_eq(self) {
                return Err(RefractError::ownership(child.name()));
            }
        }
        if child.ptr_eq(self) {
            return Err(RefractError::ownership(child.name()));
        }
        let mut ancestor = self.parent();
        while let Some(current) = ancestor {
            if current.ptr_eq(child) {
                return Err(RefractError::ownership(child.name()));
            }
            ancestor = current.parent();
        }
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════
    // Content
    // ═══════════════════════════════════════════════════════════════════

    /// The element's content. The returned variant shares node handles
    /// with the element.
    pub fn content(&self) -> Content {
        self.inner.borrow().content.clone()
    }

    /// Replace the content.
    ///
    /// Raw values auto-box into typed elements; sequences, mappings,
    /// pairs, and slices unwrap into owned children. The new content is
    /// validated before the previous children are detached, so a failed
    /// replacement leaves the tree untouched.
    pub fn set_content(&self, content: impl Into<Content>) -> Result<()> {
        let content = content.into();
        self.ensure_mutable()?;
        let children = content.children();
        for child in &children {
            self.check_adoptable(child)?;
        }
        let previous = self.content();
        for old in previous.children() {
            old.set_parent(None);
        }
        for child in &children {
            child.set_parent(Some(self));
        }
        self.inner.borrow_mut().content = content;
        Ok(())
    }

    /// Install content that is known to carry only fresh, unparented
    /// children (constructors and the codec).
    pub(crate) fn set_content_unchecked(&self, content: Content) {
        for child in content.children() {
            child.set_parent(Some(self));
        }
        self.inner.borrow_mut().content = content;
    }

    // ═══════════════════════════════════════════════════════════════════
    // Sequence mutation
    // ═══════════════════════════════════════════════════════════════════

    /// Append an element (auto-boxing raw values) to sequence content.
    ///
    /// Empty content becomes a sequence on first append.
    ///
    /// # Panics
    ///
    /// Panics when the content is a scalar, a single element, or a pair.
    pub fn push(&self, item: impl Into<Element>) -> Result<()> {
        self.insert_at(usize::MAX, item.into())
    }

    /// Prepend an element (auto-boxing raw values) to sequence content.
    ///
    /// # Panics
    ///
    /// Panics when the content is not a sequence (see [`Element::push`]).
    pub fn unshift(&self, item: impl Into<Element>) -> Result<()> {
        self.insert_at(0, item.into())
    }

    fn insert_at(&self, index: usize, item: Element) -> Result<()> {
        self.ensure_mutable()?;
        self.check_adoptable(&item)?;
        {
            let mut data = self.inner.borrow_mut();
            match &mut data.content {
                Content::Empty => data.content = Content::Elements(Vec::new()),
                Content::Elements(_) => {}
                _ => panic!("cannot append to non-sequence element content"),
            }
        }
        item.set_parent(Some(self));
        let mut data = self.inner.borrow_mut();
        if let Content::Elements(items) = &mut data.content {
            let index = index.min(items.len());
            items.insert(index, item);
        }
        Ok(())
    }

    /// Remove and return the first element of sequence content. Returns
    /// `Ok(None)` when the content holds no removable element.
    pub fn shift(&self) -> Result<Option<Element>> {
        self.ensure_mutable()?;
        let removed = {
            let mut data = self.inner.borrow_mut();
            match &mut data.content {
                Content::Elements(items) if !items.is_empty() => Some(items.remove(0)),
                _ => None,
            }
        };
        if let Some(element) = &removed {
            element.set_parent(None);
        }
        Ok(removed)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Member-shaped accessors
    // ═══════════════════════════════════════════════════════════════════

    /// The key element, when the content is a key/value pair.
    pub fn key(&self) -> Option<Element> {
        match self.content() {
            Content::Pair(pair) => pair.key().cloned(),
            _ => None,
        }
    }

    /// The value element, when the content is a key/value pair.
    pub fn value(&self) -> Option<Element> {
        match self.content() {
            Content::Pair(pair) => pair.value().cloned(),
            _ => None,
        }
    }

    /// Replace the value slot of pair content, detaching the previous
    /// value.
    ///
    /// # Panics
    ///
    /// Panics when the content is not a key/value pair.
    pub fn set_value(&self, value: impl Into<Element>) -> Result<()> {
        let value = value.into();
        self.ensure_mutable()?;
        let pair = match self.content() {
            Content::Pair(pair) => pair,
            _ => panic!("set_value requires key/value content"),
        };
        self.check_adoptable(&value)?;
        if let Some(previous) = pair.value() {
            previous.set_parent(None);
        }
        value.set_parent(Some(self));
        let mut data = self.inner.borrow_mut();
        if let Content::Pair(pair) = &mut data.content {
            pair.set_value(Some(value));
        }
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════
    // Unwrapping, equality, cloning, freezing
    // ═══════════════════════════════════════════════════════════════════

    /// Recursively unwrap the content to a plain raw value.
    ///
    /// Returns `None` for an element with no content. Inside composites,
    /// a child with no content contributes `null`. Object-kind elements
    /// unwrap to a mapping (member keys coerced to strings); member-kind
    /// content unwraps to `{"key": …, "value": …}`.
    pub fn to_value(&self) -> Option<Value> {
        let kind = self.kind();
        match self.content() {
            Content::Empty => None,
            Content::Value(value) => Some(value),
            Content::Element(child) => child.to_value(),
            Content::Elements(items) => {
                if kind == ElementKind::Object {
                    let mut map = serde_json::Map::new();
                    for item in items {
                        if let Content::Pair(pair) = item.content() {
                            let key = pair
                                .key()
                                .and_then(Element::to_value)
                                .unwrap_or(Value::Null);
                            let key = match key {
                                Value::String(s) => s,
                                other => other.to_string(),
                            };
                            let value = pair
                                .value()
                                .and_then(Element::to_value)
                                .unwrap_or(Value::Null);
                            map.insert(key, value);
                        }
                    }
                    Some(Value::Object(map))
                } else {
                    Some(Value::Array(
                        items
                            .iter()
                            .map(|item| item.to_value().unwrap_or(Value::Null))
                            .collect(),
                    ))
                }
            }
            Content::Pair(pair) => Some(pair.to_value()),
        }
    }

    /// Structural equality against another element.
    pub fn equals(&self, other: &Element) -> bool {
        self.to_value() == other.to_value()
    }

    /// Deep copy: a new unfrozen, unparented element with independently
    /// cloned name, meta, attributes, and content. A clone of a frozen
    /// element is deliberately mutable again.
    pub fn deep_clone(&self) -> Element {
        let (name, kind, meta, attributes, content) = {
            let data = self.inner.borrow();
            (
                data.name.clone(),
                data.kind,
                data.meta.clone(),
                data.attributes.clone(),
                data.content.clone(),
            )
        };
        let element = Element::of_kind(kind);
        element.rename(name);
        if let Some(meta) = meta {
            let cloned = meta.deep_clone();
            cloned.set_parent(Some(&element));
            element.inner.borrow_mut().meta = Some(cloned);
        }
        if let Some(attributes) = attributes {
            let cloned = attributes.deep_clone();
            cloned.set_parent(Some(&element));
            element.inner.borrow_mut().attributes = Some(cloned);
        }
        let content = match content {
            Content::Empty => Content::Empty,
            Content::Value(value) => Content::Value(value),
            Content::Element(child) => Content::Element(child.deep_clone()),
            Content::Elements(items) => {
                Content::Elements(items.iter().map(Element::deep_clone).collect())
            }
            Content::Pair(pair) => Content::Pair(pair.deep_clone()),
        };
        element.set_content_unchecked(content);
        element
    }

    /// Freeze this element and every reachable descendant, fixing parent
    /// links. Idempotent and terminal: no mutation can succeed afterwards.
    ///
    /// Meta/attributes that were never materialized stay lazy and will be
    /// born frozen on first access.
    pub fn freeze(&self) {
        if self.is_frozen() {
            return;
        }
        self.inner.borrow_mut().frozen = true;
        let (meta, attributes) = {
            let data = self.inner.borrow();
            (data.meta.clone(), data.attributes.clone())
        };
        if let Some(meta) = meta {
            meta.set_parent(Some(self));
            meta.freeze();
        }
        if let Some(attributes) = attributes {
            attributes.set_parent(Some(self));
            attributes.freeze();
        }
        for child in self.content().children() {
            child.set_parent(Some(self));
            child.freeze();
        }
    }

    pub(crate) fn existing_meta(&self) -> Option<Element> {
        self.inner.borrow().meta.clone()
    }

    pub(crate) fn existing_attributes(&self) -> Option<Element> {
        self.inner.borrow().attributes.clone()
    }

    pub(crate) fn store_meta(&self, meta: Option<Element>) {
        self.inner.borrow_mut().meta = meta;
    }

    pub(crate) fn store_attributes(&self, attributes: Option<Element>) {
        self.inner.borrow_mut().attributes = attributes;
    }
}

impl Default for Element {
    fn default() -> Self {
        Element::new()
    }
}

impl PartialEq for Element {
    /// Structural equality via [`Element::to_value`].
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl PartialEq<Value> for Element {
    /// Compare the unwrapped content against a raw value.
    fn eq(&self, other: &Value) -> bool {
        self.to_value().as_ref() == Some(other)
    }
}
