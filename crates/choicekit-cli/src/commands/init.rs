//! The `choicekit init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("choicekit.toml").exists() {
        println!("choicekit.toml already exists, skipping.");
    } else {
        std::fs::write("choicekit.toml", SAMPLE_CONFIG)?;
        println!("Created choicekit.toml");
    }

    std::fs::create_dir_all("question-sets")?;
    let example_path = std::path::Path::new("question-sets/example.toml");
    if example_path.exists() {
        println!("question-sets/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_QUESTION_SET)?;
        println!("Created question-sets/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Run: choicekit validate --question-set question-sets/example.toml");
    println!("  2. Run: choicekit inspect --question-set question-sets/example.toml --question primes");
    println!(
        "  3. Run: choicekit answer --question-set question-sets/example.toml --question primes --select 1,3"
    );

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# choicekit configuration

# Seed item shuffling for reproducible sessions (or set CHOICEKIT_SEED).
# random_seed = 42

state_dir = "./choicekit-state"
default_format = "text"
"#;

const EXAMPLE_QUESTION_SET: &str = r#"[question_set]
id = "example"
name = "Example Question Set"
description = "A small set to get started"

[[questions]]
id = "primes"
title = "Prime numbers"
body = "Select all prime numbers."
selectable = 3
question_weight = 1
attempts = 2

[questions.feedback]
correct = "Correct, 2, 5 and 7 are prime."

[questions.feedback.partly_correct]
final = "Some of your selections were prime. The primes were 2, 5 and 7."
not_final = "You found some of the primes. Try again."

[questions.feedback.incorrect]
final = "The primes were 2, 5 and 7."
not_final = "Not quite. Try again."

[[questions.items]]
text = "2"
should_be_selected = true

[[questions.items]]
text = "4"

[[questions.items]]
text = "5"
should_be_selected = true

[[questions.items]]
text = "7"
should_be_selected = true

[[questions]]
id = "largest-ocean"
title = "Largest ocean"
body = "Which is the largest ocean?"
selectable = 1
is_random = true

[questions.feedback]
correct = "Yes, the Pacific."

[questions.feedback.incorrect]
final = "The Pacific is the largest ocean."

[[questions.items]]
text = "Pacific"
should_be_selected = true

[[questions.items]]
text = "Atlantic"
feedback = "The Atlantic is the second largest."

[[questions.items]]
text = "Indian"
"#;
