//! The `choicekit inspect` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;

use choicekit_core::SelectionQuestion;

pub fn execute(question_set: PathBuf, question_id: String) -> Result<()> {
    let definition = super::find_question(&question_set, &question_id)?;
    let question = SelectionQuestion::new(&definition)?;

    println!("{} ({})", definition.title, definition.id);
    if !definition.body.is_empty() {
        println!("{}", definition.body);
    }
    let mode = if question.is_radio() {
        "single select".to_string()
    } else {
        format!("select up to {}", question.selectable())
    };
    println!(
        "Mode: {mode}, weight {}, random order: {}",
        question.question_weight(),
        definition.is_random
    );

    let mut table = Table::new();
    table.set_header(vec!["Id", "Text", "Correct", "Feedback"]);
    for item in question.children() {
        table.add_row(vec![
            (item.index + 1).to_string(),
            item.text.clone(),
            if item.should_be_selected { "yes" } else { "" }.to_string(),
            item.feedback.clone().unwrap_or_default(),
        ]);
    }
    println!("{table}");

    println!("Response type: {}", question.response_type());
    println!(
        "{}",
        serde_json::to_string_pretty(&question.interaction_object())?
    );

    Ok(())
}
