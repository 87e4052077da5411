//! Score policies.

use crate::results::Judgement;
use crate::traits::ScorePolicy;

/// Full question weight for a correct answer, zero otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryScore;

impl ScorePolicy for BinaryScore {
    fn score(&self, judgement: &Judgement, question_weight: f64) -> f64 {
        if judgement.answered_correctly {
            question_weight
        } else {
            0.0
        }
    }
}
