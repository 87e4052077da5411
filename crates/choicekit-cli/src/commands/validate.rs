//! The `choicekit validate` command.

use std::path::PathBuf;

use anyhow::Result;

use choicekit_core::parser::{load_question_sets, validate_question_set};

pub fn execute(question_set_path: PathBuf) -> Result<()> {
    let sets = load_question_sets(&question_set_path)?;

    let mut total_warnings = 0;

    for set in &sets {
        println!(
            "Question set: {} ({} questions)",
            set.name,
            set.questions.len()
        );

        let warnings = validate_question_set(set);
        for w in &warnings {
            let prefix = w
                .question_id
                .as_ref()
                .map(|id| format!("  [{id}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All question sets valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
