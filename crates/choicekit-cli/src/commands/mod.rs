pub mod answer;
pub mod init;
pub mod inspect;
pub mod restore;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};

use choicekit_core::feedback::FeedbackVariant;
use choicekit_core::model::QuestionDefinition;
use choicekit_core::parser::load_question_sets;
use choicekit_core::SelectionQuestion;

/// Find a question by id in a question set file or directory.
pub(crate) fn find_question(path: &Path, question_id: &str) -> Result<QuestionDefinition> {
    let sets = load_question_sets(path)?;
    sets.iter()
        .find_map(|set| set.question(question_id))
        .cloned()
        .with_context(|| format!("question '{question_id}' not found in {}", path.display()))
}

/// Print the judged state of a submitted question.
pub(crate) fn print_outcome(question: &SelectionQuestion) {
    let verdict = if question.is_correct() {
        "correct"
    } else if question.is_partly_correct() {
        "partly correct"
    } else {
        "incorrect"
    };

    println!("Question: {}", question.id());
    println!("Result: {verdict}");
    println!(
        "Score: {} / {}",
        question.score(),
        question.question_weight()
    );
    println!(
        "Correct selections: {} of {}",
        question.number_of_correct_answers(),
        question.number_of_required_answers()
    );
    println!("Response: {}", question.response());

    if let Some(feedback) = question.feedback() {
        let kind = match feedback.variant {
            FeedbackVariant::Correct => "correct",
            FeedbackVariant::PartlyCorrect => "partly correct",
            FeedbackVariant::Individual { .. } => "item",
            FeedbackVariant::Incorrect => "incorrect",
        };
        println!("Feedback ({kind}): {}", feedback.title);
        println!("  {}", feedback.message);
    }
}
