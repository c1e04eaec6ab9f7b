//! # Refract
//!
//! A typed document tree (the "element" model) with a bidirectional
//! JSON-shaped wire codec.
//!
//! Every node is an [`Element`] carrying a name, lazy meta/attributes
//! mappings, polymorphic content, and a weak parent back-reference.
//! Trees are built by explicit construction or by decoding wire
//! documents, navigated through [`ArraySlice`]/[`ObjectSlice`] views,
//! and finalized with a terminal, recursive [`Element::freeze`].
//!
//! ## Architecture
//!
//! - **Element core**: node identity, single-parent ownership, freezing,
//!   structural equality, deep cloning
//! - **Slices**: ordered/keyed non-owning views with functional
//!   combinators and normalized predicates
//! - **Registry**: name→factory dispatch for polymorphic construction
//! - **Codec**: raw values ↔ element trees ↔ wire documents
//!
//! ## Example
//!
//! ```
//! use refract::{to_refract, Registry};
//!
//! let registry = Registry::new();
//! let element = registry.to_element(serde_json::json!({ "name": "Doe" }));
//! assert_eq!(element.name(), "object");
//!
//! let doc = to_refract(&element);
//! assert_eq!(doc["element"], "object");
//!
//! let decoded = registry.from_refract(&doc).unwrap();
//! assert_eq!(decoded.to_value(), element.to_value());
//! ```
//!
//! The model is single-threaded by design: element handles are
//! reference-counted with interior mutability, and ownership plus the
//! frozen flag are the only sharing disciplines it needs.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod element;
pub mod error;
pub mod pair;
pub mod registry;
pub mod slice;

pub use codec::to_refract;
pub use element::{Content, Element, ElementKind};
pub use error::{RefractError, Result};
pub use pair::KeyValuePair;
pub use registry::{ElementFactory, Registry};
pub use slice::{ArraySlice, ObjectSlice, Predicate};

/// Raw values and wire documents are JSON-shaped.
pub use serde_json::Value;
