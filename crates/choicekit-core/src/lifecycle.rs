//! Default in-memory question lifecycle.

use crate::model::{FeedbackConfig, QuestionDefinition};
use crate::traits::QuestionLifecycle;

/// Submission, enablement and attempt state for one question instance.
#[derive(Debug, Clone)]
pub struct Lifecycle {
    title: String,
    display_title: Option<String>,
    is_enabled: bool,
    is_submitted: bool,
    /// `None` when the authored allowance is 0 (unlimited).
    attempts_left: Option<u32>,
}

impl Lifecycle {
    pub fn new(title: impl Into<String>, attempts: u32) -> Self {
        Self {
            title: title.into(),
            display_title: None,
            is_enabled: true,
            is_submitted: false,
            attempts_left: allowance(attempts),
        }
    }

    pub fn from_definition(definition: &QuestionDefinition) -> Self {
        Self::new(definition.title.clone(), definition.attempts)
            .with_display_title(definition.display_title.clone())
    }

    pub fn with_display_title(mut self, display_title: Option<String>) -> Self {
        self.display_title = display_title.filter(|t| !t.trim().is_empty());
        self
    }
}

fn allowance(attempts: u32) -> Option<u32> {
    if attempts == 0 {
        None
    } else {
        Some(attempts)
    }
}

impl QuestionLifecycle for Lifecycle {
    fn is_enabled(&self) -> bool {
        self.is_enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.is_enabled = enabled;
    }

    fn is_submitted(&self) -> bool {
        self.is_submitted
    }

    fn set_submitted(&mut self, submitted: bool) {
        self.is_submitted = submitted;
    }

    fn attempts_left(&self) -> Option<u32> {
        self.attempts_left
    }

    fn set_attempts_left(&mut self, attempts_left: Option<u32>) {
        self.attempts_left = attempts_left;
    }

    fn record_attempt(&mut self) {
        if let Some(left) = self.attempts_left.as_mut() {
            *left = left.saturating_sub(1);
        }
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn feedback_title(&self, feedback: &FeedbackConfig) -> Option<String> {
        feedback
            .title
            .clone()
            .filter(|t| !t.trim().is_empty())
            .or_else(|| self.display_title.clone())
    }
}
