//! TOML question set parser.
//!
//! Loads question sets from TOML files and directories, and validates them.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{QuestionDefinition, QuestionSet};

/// Intermediate TOML structure for parsing question set files.
#[derive(Debug, Deserialize)]
struct TomlQuestionFile {
    question_set: TomlQuestionSetHeader,
    #[serde(default)]
    questions: Vec<QuestionDefinition>,
}

#[derive(Debug, Deserialize)]
struct TomlQuestionSetHeader {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
}

/// Parse a single TOML file into a `QuestionSet`.
pub fn parse_question_set(path: &Path) -> Result<QuestionSet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read question set file: {}", path.display()))?;

    parse_question_set_str(&content, path)
}

/// Parse a TOML string into a `QuestionSet`.
pub fn parse_question_set_str(content: &str, source_path: &Path) -> Result<QuestionSet> {
    let parsed: TomlQuestionFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    Ok(QuestionSet {
        id: parsed.question_set.id,
        name: parsed.question_set.name,
        description: parsed.question_set.description,
        questions: parsed.questions,
    })
}

/// Recursively load all `.toml` question set files from a directory.
pub fn load_question_directory(dir: &Path) -> Result<Vec<QuestionSet>> {
    let mut sets = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|entry| entry.path());

    for entry in entries {
        let path = entry.path();

        if path.is_dir() {
            sets.extend(load_question_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_question_set(&path) {
                Ok(set) => sets.push(set),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(sets)
}

/// Load a file or, for a directory, every question set beneath it.
pub fn load_question_sets(path: &Path) -> Result<Vec<QuestionSet>> {
    if path.is_dir() {
        load_question_directory(path)
    } else {
        Ok(vec![parse_question_set(path)?])
    }
}

/// A warning from question set validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question ID (if applicable).
    pub question_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a question set for common authoring mistakes.
pub fn validate_question_set(set: &QuestionSet) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    let mut seen_ids = HashSet::new();
    for question in &set.questions {
        if !seen_ids.insert(&question.id) {
            warnings.push(warn(question, format!("duplicate question ID: {}", question.id)));
        }
    }

    for question in &set.questions {
        warnings.extend(validate_question(question));
    }

    warnings
}

fn validate_question(question: &QuestionDefinition) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    let item_count = question.items.len();
    let required = question
        .items
        .iter()
        .filter(|item| item.should_be_selected)
        .count();

    if item_count == 0 {
        warnings.push(warn(question, "question has no items".into()));
    }

    if question.selectable == 0 {
        warnings.push(warn(question, "selectable must be at least 1".into()));
    } else if question.selectable > item_count && item_count > 0 {
        warnings.push(warn(
            question,
            format!(
                "selectable ({}) exceeds item count ({item_count})",
                question.selectable
            ),
        ));
    }

    if item_count > 0 && required == 0 {
        warnings.push(warn(
            question,
            "no item has should_be_selected = true; the question cannot be answered correctly"
                .into(),
        ));
    }

    if question.selectable > 0 && required > question.selectable {
        warnings.push(warn(
            question,
            format!(
                "{required} required items but only {} selectable",
                question.selectable
            ),
        ));
    }

    for (index, item) in question.items.iter().enumerate() {
        if item.text.trim().is_empty() {
            warnings.push(warn(question, format!("item {} has empty text", index + 1)));
        }
    }

    warnings
}

fn warn(question: &QuestionDefinition, message: String) -> ValidationWarning {
    ValidationWarning {
        question_id: Some(question.id.clone()),
        message,
    }
}
