//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const GEOGRAPHY: &str = "../../question-sets/geography.toml";

fn choicekit() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("choicekit").unwrap();
    cmd.env_remove("CHOICEKIT_SEED").env_remove("RUST_LOG");
    cmd
}

fn answer(question: &str, select: &str) -> Command {
    let mut cmd = choicekit();
    cmd.arg("answer")
        .arg("--question-set")
        .arg(GEOGRAPHY)
        .arg("--question")
        .arg(question)
        .arg("--select")
        .arg(select);
    cmd
}

#[test]
fn validate_valid_question_set() {
    choicekit()
        .arg("validate")
        .arg("--question-set")
        .arg(GEOGRAPHY)
        .assert()
        .success()
        .stdout(predicate::str::contains("3 questions"))
        .stdout(predicate::str::contains("All question sets valid"));
}

#[test]
fn validate_directory() {
    choicekit()
        .arg("validate")
        .arg("--question-set")
        .arg("../../question-sets")
        .assert()
        .success()
        .stdout(predicate::str::contains("Geography Basics"));
}

#[test]
fn validate_reports_warnings() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(
        &path,
        r#"
[question_set]
id = "broken"
name = "Broken"

[[questions]]
id = "unanswerable"
title = "Nothing is right"
[[questions.items]]
text = "a"
"#,
    )
    .unwrap();

    choicekit()
        .arg("validate")
        .arg("--question-set")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("[unanswerable] WARNING"))
        .stdout(predicate::str::contains("1 warning(s) found"));
}

#[test]
fn validate_nonexistent_file() {
    choicekit()
        .arg("validate")
        .arg("--question-set")
        .arg("nonexistent.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn inspect_shows_interaction_object() {
    choicekit()
        .arg("inspect")
        .arg("--question-set")
        .arg(GEOGRAPHY)
        .arg("--question")
        .arg("german-rivers")
        .assert()
        .success()
        .stdout(predicate::str::contains("select up to 3"))
        .stdout(predicate::str::contains("Danube"))
        .stdout(predicate::str::contains("Response type: choice"))
        .stdout(predicate::str::contains("correctResponsesPattern"))
        .stdout(predicate::str::contains("1[,]3"));
}

#[test]
fn inspect_unknown_question() {
    choicekit()
        .arg("inspect")
        .arg("--question-set")
        .arg(GEOGRAPHY)
        .arg("--question")
        .arg("no-such-question")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn answer_fully_correct() {
    answer("german-rivers", "1,3")
        .assert()
        .success()
        .stdout(predicate::str::contains("Result: correct"))
        .stdout(predicate::str::contains("Score: 3 / 3"))
        .stdout(predicate::str::contains("Response: 1,3"))
        .stdout(predicate::str::contains("Feedback (correct): German rivers"));
}

#[test]
fn answer_partly_correct_with_attempts_left() {
    answer("german-rivers", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Result: partly correct"))
        .stdout(predicate::str::contains("Score: 0 / 3"))
        .stdout(predicate::str::contains("Have another look."));
}

#[test]
fn answer_false_positive_is_not_correct() {
    answer("german-rivers", "1,2,3")
        .assert()
        .success()
        .stdout(predicate::str::contains("Result: partly correct"))
        .stdout(predicate::str::contains("Correct selections: 2 of 2"));
}

#[test]
fn answer_single_select_item_feedback() {
    answer("capital-france", "2")
        .assert()
        .success()
        .stdout(predicate::str::contains("Result: incorrect"))
        .stdout(predicate::str::contains("Feedback (item): Capital of France"))
        .stdout(predicate::str::contains("Lyon is the third largest city"));
}

#[test]
fn answer_randomised_question_by_stable_index() {
    answer("largest-ocean", "1")
        .env("CHOICEKIT_SEED", "7")
        .assert()
        .success()
        .stdout(predicate::str::contains("Result: correct"))
        .stdout(predicate::str::contains("Response: 1"));
}

#[test]
fn answer_json_output() {
    let output = answer("german-rivers", "3,1")
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["submission"]["is_correct"], true);
    assert_eq!(value["submission"]["score"], 3.0);
    assert_eq!(value["interaction"]["type"], "choice");
    assert_eq!(value["interaction"]["response"], "1,3");
    assert_eq!(value["interaction"]["correctResponsesPattern"][0], "1[,]3");
    assert_eq!(value["interaction"]["choices"][3]["id"], "4");
    assert_eq!(value["interaction"]["choices"][3]["description"], "Thames");
    assert_eq!(value["interaction"]["result"], "correct");
}

#[test]
fn answer_rejects_too_many_selections() {
    answer("capital-france", "1,2")
        .assert()
        .failure()
        .stderr(predicate::str::contains("at most 1 item(s)"));
}

#[test]
fn answer_rejects_empty_selection() {
    answer("capital-france", "")
        .assert()
        .failure()
        .stderr(predicate::str::contains("select at least one item"));
}

#[test]
fn answer_rejects_out_of_range_item() {
    answer("capital-france", "4")
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn answer_appends_tracking_record() {
    let dir = TempDir::new().unwrap();
    let track = dir.path().join("interactions.jsonl");

    answer("capital-france", "1")
        .arg("--track")
        .arg(&track)
        .assert()
        .success();
    answer("capital-france", "3")
        .arg("--track")
        .arg(&track)
        .assert()
        .success();

    let content = std::fs::read_to_string(&track).unwrap();
    let lines: Vec<serde_json::Value> = content
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["result"], "correct");
    assert_eq!(lines[0]["weighting"], 2.0);
    assert_eq!(lines[1]["result"], "incorrect");
    assert_eq!(lines[1]["response"], "3");
}

#[test]
fn save_then_restore() {
    let dir = TempDir::new().unwrap();
    let state_dir = dir.path().join("state");
    let config = dir.path().join("choicekit.toml");
    std::fs::write(
        &config,
        format!("state_dir = {:?}\n", state_dir.display().to_string()),
    )
    .unwrap();

    answer("german-rivers", "1,3")
        .arg("--save")
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved state to"))
        .stderr(predicate::str::contains("saved answer state"));

    let state = state_dir.join("german-rivers.json");
    assert!(state.exists());

    choicekit()
        .arg("restore")
        .arg("--question-set")
        .arg(GEOGRAPHY)
        .arg("--state")
        .arg(&state)
        .assert()
        .success()
        .stdout(predicate::str::contains("Result: correct"))
        .stdout(predicate::str::contains("Response: 1,3"))
        .stderr(predicate::str::contains("replayed saved answer"));
}

#[test]
fn restore_missing_state() {
    choicekit()
        .arg("restore")
        .arg("--question-set")
        .arg(GEOGRAPHY)
        .arg("--state")
        .arg("no_such_state.json")
        .assert()
        .failure();
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    choicekit()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created choicekit.toml"))
        .stdout(predicate::str::contains("Created question-sets/example.toml"));

    assert!(dir.path().join("choicekit.toml").exists());
    assert!(dir.path().join("question-sets/example.toml").exists());

    choicekit()
        .current_dir(dir.path())
        .arg("validate")
        .arg("--question-set")
        .arg("question-sets/example.toml")
        .assert()
        .success()
        .stdout(predicate::str::contains("All question sets valid"));
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    choicekit()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    choicekit()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn help_output() {
    choicekit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Selection question scoring and interaction reporting",
        ));
}

#[test]
fn version_output() {
    choicekit()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("choicekit"));
}
