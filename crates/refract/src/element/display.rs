//! Debug formatting for elements and content
//!
//! Rendering follows the content edge only; parent links are never
//! traversed, so cyclic-looking handles cannot recurse.

use std::fmt;

use super::{Content, Element};

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.inner.borrow();
        match &data.content {
            Content::Empty => write!(f, "{}", data.name),
            content => write!(f, "{} {:?}", data.name, content),
        }
    }
}

impl fmt::Debug for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Content::Empty => write!(f, "()"),
            Content::Value(value) => write!(f, "{}", value),
            Content::Element(child) => write!(f, "({:?})", child),
            Content::Elements(items) => f.debug_list().entries(items.iter()).finish(),
            Content::Pair(pair) => {
                write!(f, "{{")?;
                match pair.key() {
                    Some(key) => write!(f, "{:?}", key)?,
                    None => write!(f, "_")?,
                }
                write!(f, ": ")?;
                match pair.value() {
                    Some(value) => write!(f, "{:?}", value)?,
                    None => write!(f, "_")?,
                }
                write!(f, "}}")
            }
        }
    }
}
