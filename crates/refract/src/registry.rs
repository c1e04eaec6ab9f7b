//! The element registry: name-keyed factories for polymorphic
//! construction

use indexmap::IndexMap;
use serde_json::Value;

use crate::codec;
use crate::element::{Content, Element, ElementKind};
use crate::error::Result;
use crate::pair::KeyValuePair;

/// Factory producing an empty element of a registered type.
///
/// A factory decides the element's [`ElementKind`], which drives codec
/// content dispatch; the registry renames the produced element to the
/// registered name.
pub type ElementFactory = Box<dyn Fn() -> Element>;

/// A namespace mapping element names to constructors.
///
/// The registry is the sole integration point for domain element types:
/// third parties register factories and the codec dispatches through
/// them during decode and auto-boxing.
///
/// # Example
///
/// ```
/// use refract::{Element, ElementKind, Registry};
///
/// let mut registry = Registry::new();
/// registry.register("tags", || Element::of_kind(ElementKind::Array));
///
/// let element = registry.build("tags");
/// assert_eq!(element.name(), "tags");
/// assert_eq!(element.kind(), ElementKind::Array);
/// ```
pub struct Registry {
    factories: IndexMap<String, ElementFactory>,
}

impl Registry {
    /// A registry pre-loaded with the minimal primitive element set:
    /// `null`, `boolean`, `number`, `string`, `array`, `object`,
    /// `member`, `link`, and `ref`.
    pub fn new() -> Registry {
        let mut registry = Registry::empty();
        registry.register("null", || Element::of_kind(ElementKind::Null));
        registry.register("boolean", || Element::of_kind(ElementKind::Boolean));
        registry.register("number", || Element::of_kind(ElementKind::Number));
        registry.register("string", || Element::of_kind(ElementKind::String));
        registry.register("array", || Element::of_kind(ElementKind::Array));
        registry.register("object", || Element::of_kind(ElementKind::Object));
        registry.register("member", || Element::of_kind(ElementKind::Member));
        registry.register("link", || Element::of_kind(ElementKind::Link));
        registry.register("ref", || Element::of_kind(ElementKind::Ref));
        registry
    }

    /// A registry with no factories at all.
    pub fn empty() -> Registry {
        Registry {
            factories: IndexMap::new(),
        }
    }

    /// Register a factory under an element name, replacing any previous
    /// registration.
    pub fn register(&mut self, name: impl Into<String>, factory: impl Fn() -> Element + 'static) {
        self.factories.insert(name.into(), Box::new(factory));
    }

    /// The factory registered under `name`, if any.
    pub fn get_element_class(&self, name: &str) -> Option<&ElementFactory> {
        self.factories.get(name)
    }

    /// Construct an element for `name`, falling back to a base element
    /// when the name is unregistered. The result is always named `name`.
    pub fn build(&self, name: &str) -> Element {
        let element = match self.factories.get(name) {
            Some(factory) => factory(),
            None => Element::new(),
        };
        element.rename(name);
        element
    }

    /// Auto-box a raw value into the corresponding registered element
    /// type: null, boolean, number, string, sequence (array of boxed
    /// items), or mapping (object of member elements).
    pub fn to_element(&self, value: Value) -> Element {
        match value {
            Value::Array(items) => {
                let element = self.build("array");
                element.set_content_unchecked(Content::Elements(
                    items.into_iter().map(|item| self.to_element(item)).collect(),
                ));
                element
            }
            Value::Object(map) => {
                let element = self.build("object");
                let members = map
                    .into_iter()
                    .map(|(key, value)| {
                        let member = self.build("member");
                        member.set_content_unchecked(Content::Pair(KeyValuePair::with_key_value(
                            self.to_element(Value::String(key)),
                            self.to_element(value),
                        )));
                        member
                    })
                    .collect();
                element.set_content_unchecked(Content::Elements(members));
                element
            }
            scalar => {
                let name = match &scalar {
                    Value::Null => "null",
                    Value::Bool(_) => "boolean",
                    Value::Number(_) => "number",
                    _ => "string",
                };
                let element = self.build(name);
                element.set_content_unchecked(Content::Value(scalar));
                element
            }
        }
    }

    /// Decode a wire document into an element tree, dispatching element
    /// names through this registry.
    pub fn from_refract(&self, doc: &Value) -> Result<Element> {
        codec::de::from_refract(self, doc)
    }

    /// Encode an element tree as a wire document. Equivalent to the free
    /// [`to_refract`](crate::to_refract) function.
    pub fn to_refract(&self, element: &Element) -> Value {
        codec::to_refract(element)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Registry::new()
    }
}
