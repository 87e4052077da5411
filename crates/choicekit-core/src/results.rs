//! Result value objects: judging outcome, recorded answer and saved state.
//!
//! `Judgement::compute` is a pure function of the item slice; the question
//! model applies the result to its own state in one place.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::Item;

/// Outcome of one judging pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Judgement {
    /// Every required item active and no other item active.
    pub answered_correctly: bool,
    /// Items authored as part of the correct answer.
    pub number_of_required_answers: usize,
    /// Required items that are active.
    pub number_of_correct_answers: usize,
    /// Active items that are not required (false positives).
    pub number_of_incorrect_answers: usize,
    /// Stable indexes of items that are both required and active, ascending.
    pub correct_item_indexes: Vec<usize>,
}

impl Judgement {
    /// Judge the current activation state of `items`.
    pub fn compute(items: &[Item]) -> Self {
        let mut judgement = Judgement::default();

        for item in items {
            if item.should_be_selected {
                judgement.number_of_required_answers += 1;
                if item.is_active {
                    judgement.number_of_correct_answers += 1;
                    judgement.correct_item_indexes.push(item.index);
                }
            } else if item.is_active {
                judgement.number_of_incorrect_answers += 1;
            }
        }

        judgement.correct_item_indexes.sort_unstable();
        judgement.answered_correctly = judgement.number_of_correct_answers
            == judgement.number_of_required_answers
            && judgement.number_of_incorrect_answers == 0;
        judgement
    }

    pub fn is_at_least_one_correct_selection(&self) -> bool {
        self.number_of_correct_answers > 0
    }
}

/// The learner's committed selection, one flag per item in ascending
/// stable-index order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserAnswer(Vec<bool>);

impl UserAnswer {
    /// Snapshot the activation state of `items`, ordered by `index` rather
    /// than display order.
    pub fn capture(items: &[Item]) -> Self {
        let mut sorted: Vec<&Item> = items.iter().collect();
        sorted.sort_by_key(|item| item.index);
        Self(sorted.into_iter().map(|item| item.is_active).collect())
    }

    /// Whether the item with stable index `index` was active.
    ///
    /// An index past the recorded answer reads as inactive.
    pub fn is_active(&self, index: usize) -> bool {
        self.0.get(index).copied().unwrap_or(false)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl From<Vec<bool>> for UserAnswer {
    fn from(flags: Vec<bool>) -> Self {
        Self(flags)
    }
}

/// Persisted shape of a question's answer state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedState {
    pub question_id: String,
    pub user_answer: UserAnswer,
    pub is_submitted: bool,
    /// `None` means unlimited.
    #[serde(default)]
    pub attempts_left: Option<u32>,
    pub saved_at: DateTime<Utc>,
}

impl SavedState {
    /// Save the state as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize state")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write state to {}", path.display()))?;
        Ok(())
    }

    /// Load a state from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read state from {}", path.display()))?;
        let state: SavedState =
            serde_json::from_str(&content).context("failed to parse state JSON")?;
        Ok(state)
    }
}
