//! Tree traversal and the staged recursive query

use super::{Content, Element};
use crate::slice::ArraySlice;

impl Element {
    /// The immediate child elements as a slice.
    ///
    /// Sequence content yields all items (and the slice writes mutations
    /// through to this element); single-element content yields that
    /// element; pair content yields the key then the value; scalar or
    /// empty content yields an empty slice.
    pub fn children(&self) -> ArraySlice {
        match self.content() {
            Content::Elements(items) => ArraySlice::with_origin(items, self.clone()),
            Content::Element(child) => ArraySlice::new(vec![child]),
            Content::Pair(pair) => ArraySlice::new(pair.children()),
            _ => ArraySlice::new(Vec::new()),
        }
    }

    /// All descendants in pre-order: each child followed immediately by
    /// its own recursive children.
    pub fn recursive_children(&self) -> ArraySlice {
        let mut out = Vec::new();
        collect_recursive(self, &mut out);
        ArraySlice::new(out)
    }

    /// The chain of containing elements, ordered from the immediate
    /// parent outward to the root. `self` is excluded.
    pub fn parents(&self) -> ArraySlice {
        let mut out = Vec::new();
        let mut current = self.parent();
        while let Some(parent) = current {
            out.push(parent.clone());
            current = parent.parent();
        }
        ArraySlice::new(out)
    }

    /// Search the subtree for descendants matching a chain of element
    /// names.
    ///
    /// With one name this is a pre-order search collecting every
    /// descendant with that name, in discovery order. With several
    /// names the search is staged: each later name searches only within
    /// the subtrees of the previous stage's matches, so an element
    /// survives to the final result only when a chain of ancestors
    /// matches the earlier names in order. Results share identity with
    /// the tree, so their `parents` reflect true ancestry.
    pub fn find_recursive(&self, names: &[&str]) -> ArraySlice {
        let Some((first, rest)) = names.split_first() else {
            return ArraySlice::new(Vec::new());
        };
        let mut matches = matches_by_name(self, first);
        for name in rest {
            let mut narrowed = Vec::new();
            for matched in &matches {
                narrowed.extend(matches_by_name(matched, name));
            }
            matches = narrowed;
        }
        ArraySlice::new(matches)
    }
}

fn collect_recursive(element: &Element, out: &mut Vec<Element>) {
    for child in element.children().elements() {
        out.push(child.clone());
        collect_recursive(child, out);
    }
}

fn matches_by_name(element: &Element, name: &str) -> Vec<Element> {
    let mut out = Vec::new();
    for child in element.children().elements() {
        if child.name() == name {
            out.push(child.clone());
        }
        out.extend(matches_by_name(child, name));
    }
    out
}
