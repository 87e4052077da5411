//! Core data model types for choicekit.
//!
//! Authored definitions (what a content author writes in a question set) and
//! the runtime `Item` a learner interacts with.

use serde::{Deserialize, Serialize};

/// An authored selection question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionDefinition {
    /// Unique identifier for this question.
    pub id: String,
    /// Question title, used as the fallback feedback title.
    pub title: String,
    /// Optional display title shown instead of `title`.
    #[serde(default)]
    pub display_title: Option<String>,
    /// Question body text.
    #[serde(default)]
    pub body: String,
    /// Maximum number of items that may be active at once (1 = single select).
    #[serde(default = "default_selectable")]
    pub selectable: usize,
    /// Shuffle item display order once at setup time.
    #[serde(default)]
    pub is_random: bool,
    /// Points awarded for a fully correct submission.
    #[serde(default = "default_question_weight")]
    pub question_weight: f64,
    /// Number of attempts allowed (0 = unlimited).
    #[serde(default = "default_attempts")]
    pub attempts: u32,
    /// Authored feedback; when absent no feedback is computed.
    #[serde(default)]
    pub feedback: Option<FeedbackConfig>,
    /// The selectable items, in authored order.
    #[serde(default)]
    pub items: Vec<ItemDefinition>,
}

fn default_selectable() -> usize {
    1
}

fn default_question_weight() -> f64 {
    1.0
}

fn default_attempts() -> u32 {
    1
}

/// An authored selectable option.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemDefinition {
    /// Display label.
    pub text: String,
    /// Whether this item belongs to the correct answer.
    #[serde(default)]
    pub should_be_selected: bool,
    /// Individual feedback shown in single-select mode.
    #[serde(default)]
    pub feedback: Option<String>,
}

/// Authored feedback texts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedbackConfig {
    /// Feedback title override.
    #[serde(default)]
    pub title: Option<String>,
    /// Shown on a fully correct answer.
    #[serde(default)]
    pub correct: String,
    /// Shown when at least one required item was selected but the answer is
    /// not fully correct. Falls back to `incorrect` when absent.
    #[serde(default)]
    pub partly_correct: Option<AttemptFeedback>,
    /// Shown on an incorrect answer.
    #[serde(default)]
    pub incorrect: AttemptFeedback,
}

/// Feedback text that differs depending on whether attempts remain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttemptFeedback {
    /// Shown once no attempts remain.
    #[serde(rename = "final", default)]
    pub final_text: String,
    /// Shown while attempts remain; `final` is used when absent.
    #[serde(default)]
    pub not_final: Option<String>,
}

impl AttemptFeedback {
    /// Pick the text for the current attempt state.
    pub fn text(&self, is_final: bool) -> &str {
        match (&self.not_final, is_final) {
            (Some(not_final), false) => not_final,
            _ => &self.final_text,
        }
    }
}

/// A named collection of questions loaded from one file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionSet {
    /// Unique identifier for this question set.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Description of this question set.
    #[serde(default)]
    pub description: String,
    /// The questions in this set.
    #[serde(default)]
    pub questions: Vec<QuestionDefinition>,
}

impl QuestionSet {
    /// Look up a question by id.
    pub fn question(&self, id: &str) -> Option<&QuestionDefinition> {
        self.questions.iter().find(|q| q.id == id)
    }
}

/// A selectable item at runtime.
///
/// `index` is assigned once from the authored position and travels with the
/// item through any display-order shuffle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub index: usize,
    pub text: String,
    pub should_be_selected: bool,
    pub feedback: Option<String>,
    pub is_active: bool,
    pub is_correct: bool,
}

impl Item {
    pub fn new(index: usize, definition: &ItemDefinition) -> Self {
        Self {
            index,
            text: definition.text.clone(),
            should_be_selected: definition.should_be_selected,
            feedback: definition.feedback.clone(),
            is_active: false,
            is_correct: false,
        }
    }
}
