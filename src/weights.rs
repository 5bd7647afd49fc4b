//! Fixed question weight table.
//!
//! Each row says how to turn one answer into raw points and how those points
//! split across subscales. Rows are plain data so that each one can be
//! tested on its own; the aggregator never branches on question ids.
//!
//! | Id  | Kind     | Full points | Distribution           |
//! |-----|----------|-------------|------------------------|
//! | B1  | rating   | 4           | R1                     |
//! | B2  | ranking  | 4           | R1 70%, R2 30%         |
//! | B3  | single   | 2           | R5                     |
//! | B4  | single   | 2           | R5                     |
//! | B5  | multi    | 2           | R1                     |
//! | B6  | ranking  | 4           | R1 40%, R2 40%, R3 20% |
//! | B7  | single   | 2           | R1 50%, R5 50%         |
//! | B8  | single   | 2           | R3                     |
//! | B9  | ranking  | 4           | R1 50%, R3 50%         |
//! | B10 | single   | 2           | R1 40%, R2 30%, R3 30% |

use std::collections::BTreeSet;

use serde::Serialize;

use crate::answers::AnswerValue;
use crate::ranking::ranking_similarity;
use crate::subscale::Subscale;
use crate::subscale::Subscale::{BusinessRisk as C, Metrics as B, OutcomeFocus as A, StopRule as E};

/// Presentation type of a question, as the catalog declares it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    Rating,
    Ranking,
    SingleChoice,
    MultiChoice,
}

/// How an answer value becomes raw points.
#[derive(Debug, Clone, Copy)]
pub enum Evaluation {
    /// Scale answer: `value - lowest`, clamped to `0..=full_points`.
    Rating { lowest: i64 },
    /// Ranking answer: similarity to `ideal`, rescaled to `0..=full_points`.
    Ranking { ideal: &'static [i64] },
    /// Single choice: listed indices earn the paired points, all others 0.
    Choice { awards: &'static [(i64, f64)] },
    /// Multi choice: `hit` per correct index selected, minus `penalty` per
    /// incorrect index selected, clamped to `0..=full_points`.
    Multi {
        correct: &'static [i64],
        hit: f64,
        penalty: f64,
    },
}

/// Fraction of a question's points routed to one subscale.
#[derive(Debug, Clone, Copy)]
pub struct Share {
    pub subscale: Subscale,
    pub fraction: f64,
}

const fn share(subscale: Subscale, fraction: f64) -> Share {
    Share { subscale, fraction }
}

#[derive(Debug, Clone, Copy)]
pub struct WeightEntry {
    pub question_id: &'static str,
    /// Number of options shown; for rating questions, the number of scale points.
    pub option_count: usize,
    /// Raw points for a perfect answer.
    pub full_points: f64,
    pub evaluation: Evaluation,
    pub shares: &'static [Share],
}

pub const B2_IDEAL: [i64; 5] = [1, 2, 1, 3, 2];
pub const B6_IDEAL: [i64; 7] = [3, 3, 2, 3, 1, 1, 3];
pub const B9_IDEAL: [i64; 6] = [3, 3, 3, 2, 1, 1];
pub const B5_CORRECT: [i64; 2] = [1, 3];

pub static WEIGHT_TABLE: [WeightEntry; 10] = [
    WeightEntry {
        question_id: "B1",
        option_count: 5,
        full_points: 4.0,
        evaluation: Evaluation::Rating { lowest: 1 },
        shares: &[share(A, 1.0)],
    },
    WeightEntry {
        question_id: "B2",
        option_count: 5,
        full_points: 4.0,
        evaluation: Evaluation::Ranking { ideal: &B2_IDEAL },
        shares: &[share(A, 0.7), share(B, 0.3)],
    },
    WeightEntry {
        question_id: "B3",
        option_count: 2,
        full_points: 2.0,
        evaluation: Evaluation::Choice { awards: &[(0, 2.0)] },
        shares: &[share(E, 1.0)],
    },
    WeightEntry {
        question_id: "B4",
        option_count: 3,
        full_points: 2.0,
        evaluation: Evaluation::Choice {
            awards: &[(1, 2.0), (0, 1.0)],
        },
        shares: &[share(E, 1.0)],
    },
    WeightEntry {
        question_id: "B5",
        option_count: 6,
        full_points: 2.0,
        evaluation: Evaluation::Multi {
            correct: &B5_CORRECT,
            hit: 1.0,
            penalty: 0.5,
        },
        shares: &[share(A, 1.0)],
    },
    WeightEntry {
        question_id: "B6",
        option_count: 7,
        full_points: 4.0,
        evaluation: Evaluation::Ranking { ideal: &B6_IDEAL },
        shares: &[share(A, 0.4), share(B, 0.4), share(C, 0.2)],
    },
    WeightEntry {
        question_id: "B7",
        option_count: 2,
        full_points: 2.0,
        evaluation: Evaluation::Choice { awards: &[(1, 2.0)] },
        shares: &[share(A, 0.5), share(E, 0.5)],
    },
    WeightEntry {
        question_id: "B8",
        option_count: 4,
        full_points: 2.0,
        evaluation: Evaluation::Choice { awards: &[(0, 2.0)] },
        shares: &[share(C, 1.0)],
    },
    WeightEntry {
        question_id: "B9",
        option_count: 6,
        full_points: 4.0,
        evaluation: Evaluation::Ranking { ideal: &B9_IDEAL },
        shares: &[share(A, 0.5), share(C, 0.5)],
    },
    WeightEntry {
        question_id: "B10",
        option_count: 5,
        full_points: 2.0,
        evaluation: Evaluation::Choice { awards: &[(4, 2.0)] },
        shares: &[share(A, 0.4), share(B, 0.3), share(C, 0.3)],
    },
];

/// Look up the weight row for a question id.
pub fn weight_entry(question_id: &str) -> Option<&'static WeightEntry> {
    WEIGHT_TABLE.iter().find(|e| e.question_id == question_id)
}

impl WeightEntry {
    pub fn kind(&self) -> QuestionKind {
        match self.evaluation {
            Evaluation::Rating { .. } => QuestionKind::Rating,
            Evaluation::Ranking { .. } => QuestionKind::Ranking,
            Evaluation::Choice { .. } => QuestionKind::SingleChoice,
            Evaluation::Multi { .. } => QuestionKind::MultiChoice,
        }
    }

    /// Raw points for `value`, or `None` when the value has the wrong shape
    /// for this question.
    pub fn raw_points(&self, value: &AnswerValue) -> Option<f64> {
        let points = match self.evaluation {
            Evaluation::Rating { lowest } => {
                let v = value.as_index()?;
                (v.saturating_sub(lowest) as f64).clamp(0.0, self.full_points)
            }
            Evaluation::Ranking { ideal } => {
                let ranks = value.as_indices()?;
                ranking_similarity(ranks, ideal) / self.option_count as f64 * self.full_points
            }
            Evaluation::Choice { awards } => {
                let v = value.as_index()?;
                awards
                    .iter()
                    .find(|(index, _)| *index == v)
                    .map_or(0.0, |(_, pts)| *pts)
            }
            Evaluation::Multi {
                correct,
                hit,
                penalty,
            } => {
                let selected: BTreeSet<i64> = value.as_indices()?.iter().copied().collect();
                let raw: f64 = selected
                    .iter()
                    .map(|i| if correct.contains(i) { hit } else { -penalty })
                    .sum();
                raw.clamp(0.0, self.full_points)
            }
        };
        Some(points)
    }

    /// Maximum points this question can route to each of its subscales.
    pub fn max_contributions(&self) -> impl Iterator<Item = (Subscale, f64)> + '_ {
        self.shares
            .iter()
            .map(move |s| (s.subscale, self.full_points * s.fraction))
    }
}
