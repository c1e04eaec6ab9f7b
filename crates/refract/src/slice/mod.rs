//! Ordered, non-owning views over element sequences
//!
//! A slice never owns its elements: the handles it holds alias nodes
//! that keep whatever parent they already have. A slice produced from an
//! element's sequence content carries that element as its *origin*, and
//! the mutation passthroughs write through to the origin's content
//! (enforcing the frozen and ownership rules and updating parent links);
//! a detached slice mutates only its local vector.

mod object;

pub use object::ObjectSlice;

use serde_json::Value;

use crate::element::{Element, ElementKind};
use crate::error::Result;

// ═══════════════════════════════════════════════════════════════════════
// Predicates
// ═══════════════════════════════════════════════════════════════════════

/// A normalized element predicate.
///
/// `filter`, `reject`, and `find` accept anything convertible into one:
/// an element-name string, an [`ElementKind`] capability tag, or a
/// callback built with [`Predicate::when`]. All three forms funnel
/// through the single [`Predicate::matches`] test.
pub enum Predicate<'a> {
    /// Match elements whose name equals the string
    Name(String),
    /// Match elements of the given kind (an "is-a" test)
    Kind(ElementKind),
    /// Match elements satisfying the callback
    Callback(Box<dyn Fn(&Element) -> bool + 'a>),
}

impl<'a> Predicate<'a> {
    /// Wrap a callback as a predicate.
    pub fn when(callback: impl Fn(&Element) -> bool + 'a) -> Predicate<'a> {
        Predicate::Callback(Box::new(callback))
    }

    /// Test an element against the predicate.
    pub fn matches(&self, element: &Element) -> bool {
        match self {
            Predicate::Name(name) => element.name() == *name,
            Predicate::Kind(kind) => element.kind() == *kind,
            Predicate::Callback(callback) => callback(element),
        }
    }
}

impl From<&str> for Predicate<'_> {
    fn from(name: &str) -> Self {
        Predicate::Name(name.to_owned())
    }
}

impl From<String> for Predicate<'_> {
    fn from(name: String) -> Self {
        Predicate::Name(name)
    }
}

impl From<ElementKind> for Predicate<'_> {
    fn from(kind: ElementKind) -> Self {
        Predicate::Kind(kind)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// ArraySlice
// ═══════════════════════════════════════════════════════════════════════

/// An ordered, index-addressable view over a sequence of elements, with
/// lazy/functional combinators.
#[derive(Clone, Default, Debug)]
pub struct ArraySlice {
    pub(crate) elements: Vec<Element>,
    pub(crate) origin: Option<Element>,
}

impl ArraySlice {
    /// Create a detached slice over the given elements.
    pub fn new(elements: Vec<Element>) -> ArraySlice {
        ArraySlice {
            elements,
            origin: None,
        }
    }

    /// A slice mirroring an element's sequence content; mutations write
    /// through to the origin.
    pub(crate) fn with_origin(elements: Vec<Element>, origin: Element) -> ArraySlice {
        ArraySlice {
            elements,
            origin: Some(origin),
        }
    }

    /// The underlying element handles.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Consume the slice, yielding its element handles.
    pub fn into_elements(self) -> Vec<Element> {
        self.elements
    }

    /// Iterate over the element handles.
    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.elements.iter()
    }

    /// Number of elements in the slice.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the slice holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The first element, if any.
    pub fn first(&self) -> Option<Element> {
        self.elements.first().cloned()
    }

    /// The element at `index`, if in bounds.
    pub fn get(&self, index: usize) -> Option<Element> {
        self.elements.get(index).cloned()
    }

    /// The raw value of the element at `index`.
    pub fn get_value(&self, index: usize) -> Option<Value> {
        self.get(index).and_then(|element| element.to_value())
    }

    /// Unwrap every element to its raw value; elements with no content
    /// contribute `null`.
    pub fn to_value(&self) -> Vec<Value> {
        self.elements
            .iter()
            .map(|element| element.to_value().unwrap_or(Value::Null))
            .collect()
    }

    /// Map every element through `f`, yielding the plain results.
    pub fn map<T>(&self, f: impl FnMut(&Element) -> T) -> Vec<T> {
        self.elements.iter().map(f).collect()
    }

    /// The elements satisfying the predicate, as a new detached slice.
    pub fn filter<'a>(&self, predicate: impl Into<Predicate<'a>>) -> ArraySlice {
        let predicate = predicate.into();
        ArraySlice::new(
            self.elements
                .iter()
                .filter(|element| predicate.matches(element))
                .cloned()
                .collect(),
        )
    }

    /// The elements *not* satisfying the predicate.
    pub fn reject<'a>(&self, predicate: impl Into<Predicate<'a>>) -> ArraySlice {
        let predicate = predicate.into();
        ArraySlice::new(
            self.elements
                .iter()
                .filter(|element| !predicate.matches(element))
                .cloned()
                .collect(),
        )
    }

    /// The first element satisfying the predicate.
    pub fn find<'a>(&self, predicate: impl Into<Predicate<'a>>) -> Option<Element> {
        let predicate = predicate.into();
        self.elements
            .iter()
            .find(|element| predicate.matches(element))
            .cloned()
    }

    /// Call `f` with every element and its index.
    pub fn for_each(&self, mut f: impl FnMut(&Element, usize)) {
        for (index, element) in self.elements.iter().enumerate() {
            f(element, index);
        }
    }

    /// Fold the elements into an accumulator, starting from `initial`.
    pub fn reduce<A>(&self, initial: A, mut f: impl FnMut(A, &Element) -> A) -> A {
        let mut accumulator = initial;
        for element in &self.elements {
            accumulator = f(accumulator, element);
        }
        accumulator
    }

    /// Map every element to a sequence and flatten one level.
    pub fn flat_map<T, I>(&self, f: impl FnMut(&Element) -> I) -> Vec<T>
    where
        I: IntoIterator<Item = T>,
    {
        self.elements.iter().flat_map(f).collect()
    }

    /// Map every element through `f`, dropping `None` results.
    pub fn compact_map<T>(&self, f: impl FnMut(&Element) -> Option<T>) -> Vec<T> {
        self.elements.iter().filter_map(f).collect()
    }

    /// Whether any element's raw value equals `value`.
    pub fn includes(&self, value: &Value) -> bool {
        self.elements
            .iter()
            .any(|element| element.to_value().as_ref() == Some(value))
    }

    // ═══════════════════════════════════════════════════════════════════
    // Mutation passthroughs
    // ═══════════════════════════════════════════════════════════════════

    /// Append an element (auto-boxing raw values). Writes through to the
    /// origin's content when the slice has one.
    pub fn push(&mut self, item: impl Into<Element>) -> Result<()> {
        let item = item.into();
        if let Some(origin) = &self.origin {
            origin.push(item.clone())?;
        }
        self.elements.push(item);
        Ok(())
    }

    /// Alias of [`ArraySlice::push`].
    pub fn add(&mut self, item: impl Into<Element>) -> Result<()> {
        self.push(item)
    }

    /// Prepend an element (auto-boxing raw values). Writes through to
    /// the origin's content when the slice has one.
    pub fn unshift(&mut self, item: impl Into<Element>) -> Result<()> {
        let item = item.into();
        if let Some(origin) = &self.origin {
            origin.unshift(item.clone())?;
        }
        self.elements.insert(0, item);
        Ok(())
    }

    /// Remove and return the first element. Writes through to the
    /// origin's content when the slice has one.
    pub fn shift(&mut self) -> Result<Option<Element>> {
        if let Some(origin) = &self.origin {
            let removed = origin.shift()?;
            if removed.is_some() && !self.elements.is_empty() {
                self.elements.remove(0);
            }
            return Ok(removed);
        }
        if self.elements.is_empty() {
            Ok(None)
        } else {
            Ok(Some(self.elements.remove(0)))
        }
    }
}

impl From<Vec<Element>> for ArraySlice {
    fn from(elements: Vec<Element>) -> ArraySlice {
        ArraySlice::new(elements)
    }
}

impl<'s> IntoIterator for &'s ArraySlice {
    type Item = &'s Element;
    type IntoIter = std::slice::Iter<'s, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicate_forms_normalize_to_one_test() {
        let string = Element::string("one");
        let base = Element::new();

        let by_name = Predicate::from("string");
        let by_kind = Predicate::from(ElementKind::String);
        let by_callback = Predicate::when(|element| element.to_value().is_some());

        assert!(by_name.matches(&string));
        assert!(!by_name.matches(&base));
        assert!(by_kind.matches(&string));
        assert!(!by_kind.matches(&base));
        assert!(by_callback.matches(&string));
        assert!(!by_callback.matches(&base));
    }

    #[test]
    fn renaming_changes_name_matches_but_not_kind_matches() {
        let element = Element::string("one");
        element.set_name("annotation").unwrap();

        assert!(!Predicate::from("string").matches(&element));
        assert!(Predicate::from("annotation").matches(&element));
        assert!(Predicate::from(ElementKind::String).matches(&element));
    }
}
