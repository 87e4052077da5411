//! The selection question model.
//!
//! `SelectionQuestion` owns a question lifecycle and an item collection as
//! named fields and layers selection semantics on top: randomisation,
//! submission gating, answer capture and restore, judging, scoring, feedback
//! and interaction reporting.
//!
//! Hooks are silent no-ops when they do not apply, so a lifecycle driver can
//! call them unconditionally.

use chrono::Utc;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::collection::Items;
use crate::error::{AuthoringError, SubmitError};
use crate::feedback::{select_feedback, Feedback, FeedbackContext};
use crate::interaction::{self, InteractionObject, InteractionRecord, RESPONSE_TYPE};
use crate::lifecycle::Lifecycle;
use crate::model::{FeedbackConfig, Item, QuestionDefinition};
use crate::results::{Judgement, SavedState, UserAnswer};
use crate::scoring::BinaryScore;
use crate::traits::{ItemCollection, QuestionLifecycle, ScorePolicy};

/// Summary of an accepted submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub is_correct: bool,
    pub score: f64,
    pub judgement: Judgement,
    pub feedback: Option<Feedback>,
    pub response: String,
    pub attempts_left: Option<u32>,
}

/// A "select N items from a set" question.
pub struct SelectionQuestion<L = Lifecycle, C = Items> {
    id: String,
    lifecycle: L,
    items: C,
    selectable: usize,
    is_random: bool,
    is_radio: bool,
    question_weight: f64,
    feedback_config: Option<FeedbackConfig>,
    score_policy: Box<dyn ScorePolicy>,

    user_answer: UserAnswer,
    judgement: Judgement,
    is_correct: bool,
    score: f64,
    is_at_least_one_correct_selection: bool,
    feedback: Option<Feedback>,
}

impl SelectionQuestion<Lifecycle, Items> {
    /// Build a question with the default in-memory lifecycle and collection.
    pub fn new(definition: &QuestionDefinition) -> Result<Self, AuthoringError> {
        Self::with_parts(
            definition,
            Lifecycle::from_definition(definition),
            Items::from_definitions(&definition.items),
        )
    }
}

impl<L: QuestionLifecycle, C: ItemCollection> SelectionQuestion<L, C> {
    /// Build a question around caller-supplied collaborators.
    pub fn with_parts(
        definition: &QuestionDefinition,
        lifecycle: L,
        items: C,
    ) -> Result<Self, AuthoringError> {
        if definition.selectable == 0 {
            return Err(AuthoringError::ZeroSelectable(definition.id.clone()));
        }
        if items.children().is_empty() {
            return Err(AuthoringError::NoItems(definition.id.clone()));
        }

        Ok(Self {
            id: definition.id.clone(),
            lifecycle,
            items,
            selectable: definition.selectable,
            is_random: definition.is_random,
            is_radio: definition.selectable == 1,
            question_weight: definition.question_weight,
            feedback_config: definition.feedback.clone(),
            score_policy: Box::new(BinaryScore),
            user_answer: UserAnswer::default(),
            judgement: Judgement::default(),
            is_correct: false,
            score: 0.0,
            is_at_least_one_correct_selection: false,
            feedback: None,
        })
    }

    /// Replace the default all-or-nothing scoring.
    pub fn with_score_policy(mut self, policy: impl ScorePolicy + 'static) -> Self {
        self.score_policy = Box::new(policy);
        self
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn lifecycle(&self) -> &L {
        &self.lifecycle
    }

    pub fn lifecycle_mut(&mut self) -> &mut L {
        &mut self.lifecycle
    }

    pub fn items(&self) -> &C {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut C {
        &mut self.items
    }

    /// Items in current display order.
    pub fn children(&self) -> &[Item] {
        self.items.children()
    }

    pub fn selectable(&self) -> usize {
        self.selectable
    }

    /// Display-mode flag: radio buttons instead of checkboxes.
    pub fn is_radio(&self) -> bool {
        self.is_radio
    }

    pub fn question_weight(&self) -> f64 {
        self.question_weight
    }

    pub fn user_answer(&self) -> &UserAnswer {
        &self.user_answer
    }

    /// Result of the last judging pass.
    pub fn judgement(&self) -> &Judgement {
        &self.judgement
    }

    pub fn is_correct(&self) -> bool {
        self.is_correct
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn number_of_correct_answers(&self) -> usize {
        self.judgement.number_of_correct_answers
    }

    pub fn number_of_required_answers(&self) -> usize {
        self.judgement.number_of_required_answers
    }

    pub fn is_at_least_one_correct_selection(&self) -> bool {
        self.is_at_least_one_correct_selection
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    // -----------------------------------------------------------------------
    // Setup
    // -----------------------------------------------------------------------

    /// Shuffle display order with the thread-local RNG.
    pub fn setup_randomisation(&mut self) {
        self.setup_randomisation_with(&mut rand::thread_rng());
    }

    /// Shuffle display order once; no-op unless random and enabled.
    pub fn setup_randomisation_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if !self.is_random || !self.lifecycle.is_enabled() {
            return;
        }
        let mut children = self.items.children().to_vec();
        children.shuffle(rng);
        self.items.set_children(children);
        tracing::debug!(question = %self.id, "item order randomised");
    }

    // -----------------------------------------------------------------------
    // Selection
    // -----------------------------------------------------------------------

    /// Whether the active-item count has reached `selectable`.
    pub fn is_at_active_limit(&self) -> bool {
        self.items.active_items().len() == self.selectable
    }

    pub fn is_single_select(&self) -> bool {
        self.selectable == 1
    }

    /// The last active item in display order, if any.
    pub fn last_active_item(&self) -> Option<&Item> {
        self.items.active_items().last().copied()
    }

    /// Learner toggles the item with stable index `index`.
    ///
    /// Single select replaces the current selection; multi select refuses to
    /// activate past the cap. Returns whether anything changed.
    pub fn select(&mut self, index: usize) -> bool {
        if !self.lifecycle.is_enabled() {
            return false;
        }
        let Some(is_active) = self
            .items
            .children()
            .iter()
            .find(|item| item.index == index)
            .map(|item| item.is_active)
        else {
            return false;
        };

        if is_active {
            self.items.toggle_active(index, false);
            return true;
        }

        if self.is_single_select() {
            if let Some(previous) = self.last_active_item().map(|item| item.index) {
                self.items.toggle_active(previous, false);
            }
        } else if self.is_at_active_limit() {
            return false;
        }

        self.items.toggle_active(index, true);
        true
    }

    // -----------------------------------------------------------------------
    // Submission
    // -----------------------------------------------------------------------

    /// At least one item is active.
    pub fn can_submit(&self) -> bool {
        !self.items.active_items().is_empty()
    }

    /// Record the live activation state, ordered by stable index.
    pub fn store_user_answer(&mut self) {
        self.user_answer = UserAnswer::capture(self.items.children());
    }

    /// Judge the current activation state and apply the derived fields.
    ///
    /// Per-item `is_correct` flags are recomputed from scratch on every call.
    pub fn judge_correctness(&mut self) -> bool {
        let judgement = Judgement::compute(self.items.children());

        for item in self.items.children_mut() {
            item.is_correct = judgement
                .correct_item_indexes
                .binary_search(&item.index)
                .is_ok();
        }
        self.is_at_least_one_correct_selection = judgement.is_at_least_one_correct_selection();
        let answered_correctly = judgement.answered_correctly;
        self.judgement = judgement;
        answered_correctly
    }

    /// Judge and store the overall result in `is_correct`.
    pub fn mark_question(&mut self) {
        self.is_correct = self.judge_correctness();
    }

    pub fn set_score(&mut self) {
        let mut judgement = self.judgement.clone();
        judgement.answered_correctly = self.is_correct;
        self.score = self.score_policy.score(&judgement, self.question_weight);
    }

    /// Compute feedback; no-op when the question has no feedback configured.
    pub fn setup_feedback(&mut self) {
        let feedback = {
            let Some(config) = self.feedback_config.as_ref() else {
                return;
            };

            let title = self
                .lifecycle
                .feedback_title(config)
                .unwrap_or_else(|| self.lifecycle.title().to_string());

            let ctx = FeedbackContext {
                is_correct: self.is_correct,
                is_partly_correct: self.is_at_least_one_correct_selection,
                is_single_select: self.is_single_select(),
                active_item: self.last_active_item(),
                is_final: self.lifecycle.attempts_left() == Some(0),
                title,
            };
            select_feedback(config, &ctx)
        };
        self.feedback = Some(feedback);
    }

    pub fn is_partly_correct(&self) -> bool {
        self.is_at_least_one_correct_selection
    }

    /// Full submission pipeline: gate, attempt, submit, store, judge, score,
    /// feedback. The question is locked afterwards until `reset`.
    pub fn submit(&mut self) -> Result<Submission, SubmitError> {
        if !self.lifecycle.is_enabled() || self.lifecycle.attempts_left() == Some(0) {
            return Err(SubmitError::Disabled);
        }
        if !self.can_submit() {
            return Err(SubmitError::NothingSelected);
        }

        self.lifecycle.record_attempt();
        self.lifecycle.set_submitted(true);
        self.store_user_answer();
        self.mark_question();
        self.set_score();
        self.setup_feedback();
        self.lifecycle.set_enabled(false);

        tracing::info!(
            question = %self.id,
            correct = self.is_correct,
            score = self.score,
            "answer submitted"
        );

        Ok(Submission {
            is_correct: self.is_correct,
            score: self.score,
            judgement: self.judgement.clone(),
            feedback: self.feedback.clone(),
            response: self.response(),
            attempts_left: self.lifecycle.attempts_left(),
        })
    }

    // -----------------------------------------------------------------------
    // Restore and reset
    // -----------------------------------------------------------------------

    /// Re-apply the recorded answer and replay the post-submission pipeline.
    ///
    /// No-op unless the question was submitted. Items are looked up by stable
    /// index, never by display position.
    pub fn restore_user_answers(&mut self) {
        if !self.lifecycle.is_submitted() {
            return;
        }

        let states: Vec<(usize, bool)> = self
            .items
            .children()
            .iter()
            .map(|item| (item.index, self.user_answer.is_active(item.index)))
            .collect();
        for (index, active) in states {
            self.items.toggle_active(index, active);
        }

        self.lifecycle.set_submitted(true);
        self.mark_question();
        self.set_score();
        self.setup_feedback();

        tracing::debug!(question = %self.id, correct = self.is_correct, "answer restored");
    }

    /// Deactivate every item and clear the partly-correct flag.
    pub fn reset_items(&mut self) {
        self.items.reset_active_items();
        self.is_at_least_one_correct_selection = false;
    }

    pub fn reset_user_answer(&mut self) {
        self.user_answer.clear();
    }

    /// Re-arm for a new attempt. Stays locked when no attempts remain.
    pub fn reset(&mut self) {
        self.reset_items();
        self.reset_user_answer();
        self.feedback = None;
        self.lifecycle.set_submitted(false);
        let exhausted = self.lifecycle.attempts_left() == Some(0);
        self.lifecycle.set_enabled(!exhausted);
    }

    /// Snapshot the persisted answer state.
    pub fn save_state(&self) -> SavedState {
        SavedState {
            question_id: self.id.clone(),
            user_answer: self.user_answer.clone(),
            is_submitted: self.lifecycle.is_submitted(),
            attempts_left: self.lifecycle.attempts_left(),
            saved_at: Utc::now(),
        }
    }

    /// Apply a saved state and restore the submitted answer, if any.
    ///
    /// A state saved for another question is ignored.
    pub fn load_state(&mut self, state: &SavedState) {
        if state.question_id != self.id {
            tracing::warn!(
                question = %self.id,
                saved = %state.question_id,
                "ignoring state saved for another question"
            );
            return;
        }

        self.user_answer = state.user_answer.clone();
        self.lifecycle.set_attempts_left(state.attempts_left);
        self.lifecycle.set_submitted(state.is_submitted);
        self.lifecycle
            .set_enabled(!state.is_submitted && state.attempts_left != Some(0));
        self.restore_user_answers();
    }

    // -----------------------------------------------------------------------
    // Interaction reporting
    // -----------------------------------------------------------------------

    pub fn interaction_object(&self) -> InteractionObject {
        InteractionObject::from_items(self.items.children())
    }

    /// 1-based ids of the active items, comma-joined.
    pub fn response(&self) -> String {
        interaction::response(self.items.children())
    }

    pub fn response_type(&self) -> &'static str {
        RESPONSE_TYPE
    }

    /// Build the record handed to a tracking sink.
    pub fn interaction_record(&self) -> InteractionRecord {
        InteractionRecord {
            id: Uuid::new_v4(),
            question_id: self.id.clone(),
            timestamp: Utc::now(),
            response_type: self.response_type().to_string(),
            interaction: self.interaction_object(),
            response: self.response(),
            result: self.is_correct.into(),
            weighting: self.question_weight,
            score: self.score,
        }
    }
}
