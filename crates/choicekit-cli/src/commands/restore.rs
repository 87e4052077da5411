//! The `choicekit restore` command.

use std::path::PathBuf;

use anyhow::Result;

use choicekit_core::results::SavedState;
use choicekit_core::SelectionQuestion;

use crate::config::{load_config_from, OutputFormat};

pub fn execute(
    question_set: PathBuf,
    state_path: PathBuf,
    format: Option<OutputFormat>,
    config: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config.as_deref())?;
    let state = SavedState::load_json(&state_path)?;
    let definition = super::find_question(&question_set, &state.question_id)?;
    let mut question = SelectionQuestion::new(&definition)?;

    if !state.is_submitted {
        println!("State for '{}' has no submitted answer.", state.question_id);
        return Ok(());
    }
    if state.user_answer.len() != definition.items.len() {
        anyhow::bail!(
            "saved answer has {} entries but question '{}' has {} items",
            state.user_answer.len(),
            definition.id,
            definition.items.len()
        );
    }

    question.load_state(&state);
    tracing::info!(
        question = %question.id(),
        saved_at = %state.saved_at,
        "replayed saved answer"
    );

    match format.unwrap_or(config.default_format) {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&question.interaction_record())?
            );
        }
        OutputFormat::Text => super::print_outcome(&question),
    }

    Ok(())
}
