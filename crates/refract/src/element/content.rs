//! Content variants and the auto-boxing conversions into them

use serde_json::Value;

use super::{Element, ElementKind};
use crate::pair::KeyValuePair;
use crate::slice::{ArraySlice, ObjectSlice};

/// The polymorphic content of an element. Exactly one variant is active
/// at a time.
#[derive(Clone, Default)]
pub enum Content {
    /// No content (the "undefined" value)
    #[default]
    Empty,
    /// A scalar primitive: null, boolean, number, or string.
    ///
    /// Raw arrays and mappings never land here; they auto-box into
    /// [`Content::Elements`] on the way in.
    Value(Value),
    /// A single child element
    Element(Element),
    /// An ordered sequence of child elements
    Elements(Vec<Element>),
    /// A key/value pair (member-shaped elements)
    Pair(KeyValuePair),
}

impl Content {
    /// Whether this is the empty variant.
    pub fn is_empty(&self) -> bool {
        matches!(self, Content::Empty)
    }

    /// The immediate child elements this content owns: all sequence
    /// items, the single element, or the pair's key then value.
    pub(crate) fn children(&self) -> Vec<Element> {
        match self {
            Content::Empty | Content::Value(_) => Vec::new(),
            Content::Element(child) => vec![child.clone()],
            Content::Elements(items) => items.clone(),
            Content::Pair(pair) => pair.children(),
        }
    }
}

impl From<Value> for Content {
    /// Raw scalars become scalar content; raw sequences and mappings box
    /// into element sequences (mappings as member elements).
    fn from(value: Value) -> Content {
        match value {
            Value::Array(items) => {
                Content::Elements(items.into_iter().map(Element::from_value).collect())
            }
            Value::Object(map) => Content::Elements(
                map.into_iter()
                    .map(|(key, value)| {
                        Element::member_unchecked(Element::string(key), Element::from_value(value))
                    })
                    .collect(),
            ),
            scalar => Content::Value(scalar),
        }
    }
}

impl From<Element> for Content {
    fn from(element: Element) -> Content {
        Content::Element(element)
    }
}

impl From<Vec<Element>> for Content {
    fn from(elements: Vec<Element>) -> Content {
        Content::Elements(elements)
    }
}

impl From<KeyValuePair> for Content {
    fn from(pair: KeyValuePair) -> Content {
        Content::Pair(pair)
    }
}

impl From<ArraySlice> for Content {
    /// Unwrap a slice into a plain owned sequence.
    fn from(slice: ArraySlice) -> Content {
        Content::Elements(slice.into_elements())
    }
}

impl From<ObjectSlice> for Content {
    fn from(slice: ObjectSlice) -> Content {
        Content::Elements(slice.into_elements())
    }
}

impl From<&str> for Content {
    fn from(value: &str) -> Content {
        Content::Value(Value::String(value.to_owned()))
    }
}

impl From<String> for Content {
    fn from(value: String) -> Content {
        Content::Value(Value::String(value))
    }
}

impl From<bool> for Content {
    fn from(value: bool) -> Content {
        Content::Value(Value::Bool(value))
    }
}

impl From<i64> for Content {
    fn from(value: i64) -> Content {
        Content::Value(Value::from(value))
    }
}

impl From<f64> for Content {
    fn from(value: f64) -> Content {
        Content::Value(Value::from(value))
    }
}

impl Element {
    /// Box a raw value into the corresponding typed element.
    ///
    /// This is the single conversion covering the whole raw-value
    /// taxonomy: null, boolean, number, string, sequence, and mapping
    /// (the latter two recurse through their items).
    pub fn from_value(value: Value) -> Element {
        match value {
            Value::Null => Element::null(),
            Value::Bool(value) => Element::boolean(value),
            Value::Number(value) => Element::number(value),
            Value::String(value) => Element::string(value),
            Value::Array(items) => {
                let element = Element::of_kind(ElementKind::Array);
                element.set_content_unchecked(Content::Elements(
                    items.into_iter().map(Element::from_value).collect(),
                ));
                element
            }
            Value::Object(map) => {
                let element = Element::of_kind(ElementKind::Object);
                element.set_content_unchecked(Content::Elements(
                    map.into_iter()
                        .map(|(key, value)| {
                            Element::member_unchecked(
                                Element::string(key),
                                Element::from_value(value),
                            )
                        })
                        .collect(),
                ));
                element
            }
        }
    }

    /// Build a member from slot elements known to be fresh and
    /// unparented.
    pub(crate) fn member_unchecked(key: Element, value: Element) -> Element {
        let element = Element::of_kind(ElementKind::Member);
        element.set_content_unchecked(Content::Pair(KeyValuePair::with_key_value(key, value)));
        element
    }
}

impl From<Value> for Element {
    fn from(value: Value) -> Element {
        Element::from_value(value)
    }
}

impl From<&str> for Element {
    fn from(value: &str) -> Element {
        Element::string(value)
    }
}

impl From<String> for Element {
    fn from(value: String) -> Element {
        Element::string(value)
    }
}

impl From<bool> for Element {
    fn from(value: bool) -> Element {
        Element::boolean(value)
    }
}

impl From<i64> for Element {
    fn from(value: i64) -> Element {
        Element::number(value)
    }
}

impl From<f64> for Element {
    fn from(value: f64) -> Element {
        Element::number(value)
    }
}
