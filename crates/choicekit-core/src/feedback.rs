//! Feedback variant selection.
//!
//! Priority, first match wins: correct, partly correct, individual item
//! feedback (single select only), incorrect.

use serde::{Deserialize, Serialize};

use crate::model::{FeedbackConfig, Item};

/// Which feedback branch fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FeedbackVariant {
    Correct,
    PartlyCorrect,
    /// Feedback authored on the single active item.
    Individual { item_index: usize },
    Incorrect,
}

/// Resolved feedback ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub variant: FeedbackVariant,
    pub title: String,
    pub message: String,
}

/// Inputs to feedback selection beyond the authored config.
#[derive(Debug, Clone)]
pub struct FeedbackContext<'a> {
    pub is_correct: bool,
    /// At least one required item is active.
    pub is_partly_correct: bool,
    pub is_single_select: bool,
    /// The active item in single-select mode, if any.
    pub active_item: Option<&'a Item>,
    /// No attempts remain.
    pub is_final: bool,
    /// Title from the feedback-title hook, else the question title.
    pub title: String,
}

/// Select the feedback variant and resolve its texts.
pub fn select_feedback(config: &FeedbackConfig, ctx: &FeedbackContext<'_>) -> Feedback {
    let (variant, message) = if ctx.is_correct {
        (FeedbackVariant::Correct, config.correct.clone())
    } else if ctx.is_partly_correct {
        let text = config
            .partly_correct
            .as_ref()
            .unwrap_or(&config.incorrect)
            .text(ctx.is_final);
        (FeedbackVariant::PartlyCorrect, text.to_string())
    } else if let Some((index, text)) = individual_feedback(ctx) {
        (FeedbackVariant::Individual { item_index: index }, text)
    } else {
        (
            FeedbackVariant::Incorrect,
            config.incorrect.text(ctx.is_final).to_string(),
        )
    };

    Feedback {
        variant,
        title: ctx.title.clone(),
        message,
    }
}

fn individual_feedback(ctx: &FeedbackContext<'_>) -> Option<(usize, String)> {
    if !ctx.is_single_select {
        return None;
    }
    let item = ctx.active_item?;
    item.feedback
        .as_ref()
        .filter(|text| !text.is_empty())
        .map(|text| (item.index, text.clone()))
}
