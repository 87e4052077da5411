//! choicekit-core: the selection question model.
//!
//! Answer capture and restore, correctness judging, scoring, feedback
//! selection and interaction reporting for "select N items from a set"
//! questions.

pub mod collection;
pub mod error;
pub mod feedback;
pub mod interaction;
pub mod lifecycle;
pub mod model;
pub mod parser;
pub mod question;
pub mod results;
pub mod scoring;
pub mod traits;

pub use question::{SelectionQuestion, Submission};
