//! Error types for question construction and submission.
//!
//! Lifecycle hooks never fail; these cover the two places where a caller can
//! ask for something the model cannot do.

use thiserror::Error;

/// A question definition that cannot be turned into a runnable question.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthoringError {
    /// `selectable` must be at least 1.
    #[error("question '{0}' has selectable = 0")]
    ZeroSelectable(String),

    /// A question needs something to select.
    #[error("question '{0}' has no items")]
    NoItems(String),
}

/// A submission the lifecycle must refuse.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// No item is active.
    #[error("select at least one item before submitting")]
    NothingSelected,

    /// The question is locked (already submitted or out of attempts).
    #[error("question is not enabled for interaction")]
    Disabled,
}
