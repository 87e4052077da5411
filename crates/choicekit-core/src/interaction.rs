//! Interaction reporting in the `cmi.interactions` choice format.
//!
//! Field names, 1-based ids and the `[,]` delimiter are consumed verbatim by
//! tracking sinks. Everything here enumerates items by stable index so a
//! shuffled display order never leaks into a report.

use std::io::Write;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::Item;
use crate::traits::TrackingSink;

/// `cmi.interactions.n.type` for selection questions.
pub const RESPONSE_TYPE: &str = "choice";

/// Separates values within one correct-response pattern.
pub const PATTERN_DELIMITER: &str = "[,]";

/// Separates values in a learner response.
pub const RESPONSE_DELIMITER: &str = ",";

/// One reportable choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// 1-based stable index; 0 is reserved for "no response".
    pub id: String,
    pub description: String,
}

/// Choices and the correct-response pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionObject {
    pub correct_responses_pattern: Vec<String>,
    pub choices: Vec<Choice>,
}

impl InteractionObject {
    pub fn from_items(items: &[Item]) -> Self {
        let sorted = by_index(items);

        let choices = sorted
            .iter()
            .map(|item| Choice {
                id: report_id(item),
                description: item.text.clone(),
            })
            .collect();

        let pattern = sorted
            .iter()
            .filter(|item| item.should_be_selected)
            .map(|item| report_id(item))
            .collect::<Vec<_>>()
            .join(PATTERN_DELIMITER);

        Self {
            correct_responses_pattern: vec![pattern],
            choices,
        }
    }
}

/// 1-based ids of the active items, comma-joined (e.g. `"1,3"`).
pub fn response(items: &[Item]) -> String {
    by_index(items)
        .into_iter()
        .filter(|item| item.is_active)
        .map(report_id)
        .collect::<Vec<_>>()
        .join(RESPONSE_DELIMITER)
}

fn by_index(items: &[Item]) -> Vec<&Item> {
    let mut sorted: Vec<&Item> = items.iter().collect();
    sorted.sort_by_key(|item| item.index);
    sorted
}

fn report_id(item: &Item) -> String {
    (item.index + 1).to_string()
}

/// `cmi.interactions.n.result`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionResult {
    Correct,
    Incorrect,
}

impl From<bool> for InteractionResult {
    fn from(correct: bool) -> Self {
        if correct {
            InteractionResult::Correct
        } else {
            InteractionResult::Incorrect
        }
    }
}

/// A complete interaction entry handed to a tracking sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionRecord {
    pub id: Uuid,
    pub question_id: String,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type")]
    pub response_type: String,
    #[serde(flatten)]
    pub interaction: InteractionObject,
    pub response: String,
    pub result: InteractionResult,
    pub weighting: f64,
    pub score: f64,
}

/// Writes each record as one JSON line.
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TrackingSink for JsonLinesSink<W> {
    fn record(&mut self, record: &InteractionRecord) -> Result<()> {
        let line = serde_json::to_string(record).context("failed to serialize interaction")?;
        writeln!(self.writer, "{line}").context("failed to write interaction")?;
        Ok(())
    }
}
