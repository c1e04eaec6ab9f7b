//! Error types for element tree operations

use thiserror::Error;

/// Main error type for element tree and codec operations.
///
/// Every failure is surfaced synchronously at the point of violation;
/// no operation leaves the tree partially mutated.
#[derive(Error, Debug)]
pub enum RefractError {
    /// A mutation was attempted against a frozen element, its content,
    /// or its materialized meta/attributes.
    #[error("cannot modify frozen element `{element}`")]
    FrozenViolation {
        /// Name of the element that refused the mutation
        element: String,
    },

    /// An element that already has a parent was assigned as the child of
    /// a different element. Re-parenting must go through removal first.
    #[error("element `{element}` already has a parent; detach it before re-parenting")]
    OwnershipViolation {
        /// Name of the element that could not be adopted
        element: String,
    },

    /// A ref element was requested from an element without an `id`.
    #[error("element has no `id`; cannot build a ref element")]
    MissingIdentifier,

    /// A wire document is missing the required shape for its declared
    /// element kind.
    #[error("malformed wire document: {reason}")]
    DecodeError {
        /// What was wrong with the document
        reason: String,
    },
}

impl RefractError {
    pub(crate) fn frozen(element: impl Into<String>) -> Self {
        RefractError::FrozenViolation {
            element: element.into(),
        }
    }

    pub(crate) fn ownership(element: impl Into<String>) -> Self {
        RefractError::OwnershipViolation {
            element: element.into(),
        }
    }

    pub(crate) fn decode(reason: impl Into<String>) -> Self {
        RefractError::DecodeError {
            reason: reason.into(),
        }
    }
}

/// Result type alias for element tree operations.
pub type Result<T> = std::result::Result<T, RefractError>;
