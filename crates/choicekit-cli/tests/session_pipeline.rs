//! End-to-end session tests against the bundled question set.
//!
//! These drive a question through select → submit → track → save → resume
//! the way an embedding lifecycle would.

use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;

use choicekit_core::feedback::FeedbackVariant;
use choicekit_core::interaction::{InteractionResult, JsonLinesSink};
use choicekit_core::model::QuestionDefinition;
use choicekit_core::parser::parse_question_set;
use choicekit_core::results::SavedState;
use choicekit_core::traits::{ItemCollection, QuestionLifecycle, TrackingSink};
use choicekit_core::SelectionQuestion;

fn definition(id: &str) -> QuestionDefinition {
    let set = parse_question_set(Path::new("../../question-sets/geography.toml")).unwrap();
    set.question(id).unwrap().clone()
}

#[test]
fn second_attempt_after_partly_correct_first() {
    let mut question = SelectionQuestion::new(&definition("german-rivers")).unwrap();

    question.select(0);
    let first = question.submit().unwrap();
    assert!(!first.is_correct);
    assert_eq!(first.attempts_left, Some(1));
    let feedback = first.feedback.unwrap();
    assert_eq!(feedback.variant, FeedbackVariant::PartlyCorrect);
    assert_eq!(feedback.message, "Partly right. Have another look.");

    question.reset();
    assert!(question.user_answer().is_empty());
    assert!(question.items().active_items().is_empty());

    question.select(0);
    question.select(2);
    let second = question.submit().unwrap();
    assert!(second.is_correct);
    assert_eq!(second.score, 3.0);
    assert_eq!(second.attempts_left, Some(0));
    assert_eq!(
        question.user_answer().as_slice(),
        &[true, false, true, false]
    );
}

#[test]
fn final_attempt_uses_final_feedback() {
    let mut question = SelectionQuestion::new(&definition("german-rivers")).unwrap();

    question.select(1);
    question.submit().unwrap();
    assert_eq!(question.feedback().unwrap().message, "Not quite. Try again.");

    question.reset();
    question.select(3);
    question.submit().unwrap();
    let feedback = question.feedback().unwrap();
    assert_eq!(feedback.variant, FeedbackVariant::Incorrect);
    assert_eq!(
        feedback.message,
        "The Rhine and the Danube flow through Germany."
    );
}

#[test]
fn shuffled_question_reports_and_resumes_by_stable_index() {
    let mut def = definition("german-rivers");
    def.is_random = true;

    let mut question = SelectionQuestion::new(&def).unwrap();
    question.setup_randomisation_with(&mut StdRng::seed_from_u64(3));
    question.select(2);
    question.select(0);
    question.submit().unwrap();

    let mut sink = JsonLinesSink::new(Vec::new());
    let record = question.interaction_record();
    sink.record(&record).unwrap();
    assert_eq!(record.result, InteractionResult::Correct);
    assert_eq!(record.response, "1,3");
    assert_eq!(record.interaction.correct_responses_pattern, vec!["1[,]3"]);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("german-rivers.json");
    question.save_state().save_json(&path).unwrap();

    let mut resumed = SelectionQuestion::new(&def).unwrap();
    resumed.setup_randomisation_with(&mut StdRng::seed_from_u64(99));
    resumed.load_state(&SavedState::load_json(&path).unwrap());

    assert!(resumed.is_correct());
    assert_eq!(resumed.score(), question.score());
    assert_eq!(resumed.response(), "1,3");
    assert_eq!(resumed.user_answer(), question.user_answer());
    assert!(resumed.lifecycle().is_submitted());
    assert!(!resumed.lifecycle().is_enabled());

    let lines = String::from_utf8(sink.into_inner()).unwrap();
    assert_eq!(lines.lines().count(), 1);
}

#[test]
fn resuming_unsubmitted_state_leaves_question_open() {
    let def = definition("capital-france");
    let question = SelectionQuestion::new(&def).unwrap();
    let state = question.save_state();
    assert!(!state.is_submitted);

    let mut resumed = SelectionQuestion::new(&def).unwrap();
    resumed.load_state(&state);
    assert!(resumed.lifecycle().is_enabled());
    assert!(resumed.feedback().is_none());
    assert!(resumed.select(0));
    assert!(resumed.submit().unwrap().is_correct);
}
