//! The Refract wire codec
//!
//! Wire documents are JSON-shaped values of the form
//! `{element, meta?, attributes?, content?}`. Decode accepts both the
//! shorthand (raw values) and explicit (nested wire documents) historical
//! encodings for meta/attributes entries; encode always emits the
//! explicit form.

pub(crate) mod de;
mod ser;

pub use ser::to_refract;
