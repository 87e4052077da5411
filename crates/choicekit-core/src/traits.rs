//! Collaborator seams.
//!
//! The selection model composes a question lifecycle and an item collection
//! rather than inheriting from them. Default in-memory implementations live in
//! `lifecycle` and `collection`; embedders can supply their own.

use crate::interaction::InteractionRecord;
use crate::model::{FeedbackConfig, Item};
use crate::results::Judgement;

// ---------------------------------------------------------------------------
// Question lifecycle
// ---------------------------------------------------------------------------

/// Generic question state machine: submission, enablement, attempts.
pub trait QuestionLifecycle {
    /// Whether the learner may currently interact with the question.
    fn is_enabled(&self) -> bool;

    fn set_enabled(&mut self, enabled: bool);

    /// Whether an answer has been submitted.
    fn is_submitted(&self) -> bool;

    /// Hook invoked to mark submission complete (and to re-arm with `false`).
    fn set_submitted(&mut self, submitted: bool);

    /// Attempts remaining; `None` means unlimited.
    fn attempts_left(&self) -> Option<u32>;

    fn set_attempts_left(&mut self, attempts_left: Option<u32>);

    /// Consume one attempt.
    fn record_attempt(&mut self);

    /// The question's own title.
    fn title(&self) -> &str;

    /// Optional feedback-title resolution hook.
    fn feedback_title(&self, _feedback: &FeedbackConfig) -> Option<String> {
        None
    }
}

// ---------------------------------------------------------------------------
// Item collection
// ---------------------------------------------------------------------------

/// Ordered set of selectable child items and their activation primitives.
pub trait ItemCollection {
    /// Children in current display order.
    fn children(&self) -> &[Item];

    fn children_mut(&mut self) -> &mut [Item];

    /// Replace the display order wholesale.
    fn set_children(&mut self, items: Vec<Item>);

    /// Active children, in display order.
    fn active_items(&self) -> Vec<&Item> {
        self.children().iter().filter(|item| item.is_active).collect()
    }

    /// Set the active flag of the item whose stable index is `index`.
    fn toggle_active(&mut self, index: usize, active: bool);

    /// Deactivate every item.
    fn reset_active_items(&mut self);
}

// ---------------------------------------------------------------------------
// Scoring policy
// ---------------------------------------------------------------------------

/// Turns a judgement into a numeric score.
pub trait ScorePolicy {
    fn score(&self, judgement: &Judgement, question_weight: f64) -> f64;
}

// ---------------------------------------------------------------------------
// Tracking sink
// ---------------------------------------------------------------------------

/// Consumer of interaction records (e.g. a learning-record store adapter).
pub trait TrackingSink {
    fn record(&mut self, record: &InteractionRecord) -> anyhow::Result<()>;
}
