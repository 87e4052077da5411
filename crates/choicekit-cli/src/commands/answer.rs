//! The `choicekit answer` command.

use std::fs::OpenOptions;
use std::path::PathBuf;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use choicekit_core::interaction::{InteractionRecord, JsonLinesSink};
use choicekit_core::traits::TrackingSink;
use choicekit_core::{SelectionQuestion, Submission};

use crate::config::{load_config_from, OutputFormat};

#[derive(Serialize)]
struct AnswerOutput<'a> {
    submission: &'a Submission,
    interaction: &'a InteractionRecord,
}

pub fn execute(
    question_set: PathBuf,
    question_id: String,
    select: String,
    format: Option<OutputFormat>,
    save: bool,
    track: Option<PathBuf>,
    config: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config.as_deref())?;
    let definition = super::find_question(&question_set, &question_id)?;
    let mut question = SelectionQuestion::new(&definition)?;

    match config.random_seed {
        Some(seed) => question.setup_randomisation_with(&mut StdRng::seed_from_u64(seed)),
        None => question.setup_randomisation(),
    }

    let selections = parse_selections(&select, definition.items.len())?;
    if selections.len() > question.selectable() {
        anyhow::bail!(
            "at most {} item(s) may be selected, got {}",
            question.selectable(),
            selections.len()
        );
    }
    for index in selections {
        question.select(index);
    }

    let submission = question.submit()?;
    let record = question.interaction_record();

    if let Some(path) = track {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("failed to open tracking file: {}", path.display()))?;
        JsonLinesSink::new(file).record(&record)?;
        tracing::debug!(path = %path.display(), "appended interaction record");
    }

    match format.unwrap_or(config.default_format) {
        OutputFormat::Json => {
            let output = AnswerOutput {
                submission: &submission,
                interaction: &record,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => super::print_outcome(&question),
    }

    if save {
        let path = config.state_dir.join(format!("{}.json", question.id()));
        question.save_state().save_json(&path)?;
        tracing::info!(question = %question.id(), path = %path.display(), "saved answer state");
        if format.unwrap_or(config.default_format) == OutputFormat::Text {
            println!("Saved state to {}", path.display());
        }
    }

    Ok(())
}

/// Parse 1-based, comma-separated item numbers into stable indexes.
fn parse_selections(select: &str, item_count: usize) -> Result<Vec<usize>> {
    let mut indexes = Vec::new();
    for part in select.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let number: usize = part
            .parse()
            .with_context(|| format!("invalid item number: {part}"))?;
        if number == 0 || number > item_count {
            anyhow::bail!("item number {number} out of range 1..={item_count}");
        }
        let index = number - 1;
        if indexes.contains(&index) {
            anyhow::bail!("item {number} selected more than once");
        }
        indexes.push(index);
    }
    Ok(indexes)
}
