//! Optional strict pre-pass over an answer set.
//!
//! Scoring tolerates partial and malformed input on purpose; callers that
//! want a guarantee that every question was answered sensibly run this
//! first and decide what to do with the issues.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::answers::{AnswerSet, AnswerValue};
use crate::weights::{weight_entry, Evaluation, QuestionKind, WeightEntry, WEIGHT_TABLE};

/// Highest priority a ranking answer may assign.
pub const TOP_PRIORITIES: i64 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnswerIssue {
    #[error("{question}: no answer")]
    Missing { question: &'static str },
    #[error("{question}: unknown question")]
    UnknownQuestion { question: String },
    #[error("{question}: expected a {expected:?} answer")]
    WrongShape {
        question: &'static str,
        expected: QuestionKind,
    },
    #[error("{question}: rating {value} outside {min}..={max}")]
    RatingOutOfRange {
        question: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
    #[error("{question}: option index {index} outside 0..{options}")]
    OptionOutOfRange {
        question: &'static str,
        index: i64,
        options: usize,
    },
    #[error("{question}: option {index} selected more than once")]
    DuplicateSelection { question: &'static str, index: i64 },
    #[error("{question}: ranking has {got} entries, expected {expected}")]
    RankingLength {
        question: &'static str,
        got: usize,
        expected: usize,
    },
    #[error("{question}: priority {value} outside 0..=3")]
    PriorityOutOfRange { question: &'static str, value: i64 },
    #[error("{question}: priorities 1, 2 and 3 must each be assigned exactly once")]
    PrioritiesNotAssigned { question: &'static str },
}

/// Returned by [`ensure_complete`] when at least one issue was found.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("answer set has {} issue(s); first: {}", .issues.len(), first_issue(.issues))]
pub struct IncompleteAnswers {
    pub issues: Vec<AnswerIssue>,
}

fn first_issue(issues: &[AnswerIssue]) -> String {
    issues
        .first()
        .map_or_else(|| "none".to_string(), ToString::to_string)
}

/// Every problem found, in weight-table order followed by unknown ids.
pub fn check_completeness(answers: &AnswerSet) -> Vec<AnswerIssue> {
    let mut issues = Vec::new();

    for entry in &WEIGHT_TABLE {
        match answers.get(entry.question_id) {
            None => issues.push(AnswerIssue::Missing {
                question: entry.question_id,
            }),
            Some(value) => check_answer(entry, value, &mut issues),
        }
    }

    for id in answers.question_ids() {
        if weight_entry(id).is_none() {
            issues.push(AnswerIssue::UnknownQuestion {
                question: id.to_string(),
            });
        }
    }

    issues
}

pub fn ensure_complete(answers: &AnswerSet) -> Result<(), IncompleteAnswers> {
    let issues = check_completeness(answers);
    if issues.is_empty() {
        Ok(())
    } else {
        Err(IncompleteAnswers { issues })
    }
}

fn check_answer(entry: &WeightEntry, value: &AnswerValue, issues: &mut Vec<AnswerIssue>) {
    let question = entry.question_id;
    let wrong_shape = AnswerIssue::WrongShape {
        question,
        expected: entry.kind(),
    };

    match entry.evaluation {
        Evaluation::Rating { lowest } => {
            let Some(v) = value.as_index() else {
                issues.push(wrong_shape);
                return;
            };
            let highest = lowest + entry.option_count as i64 - 1;
            if !(lowest..=highest).contains(&v) {
                issues.push(AnswerIssue::RatingOutOfRange {
                    question,
                    value: v,
                    min: lowest,
                    max: highest,
                });
            }
        }
        Evaluation::Choice { .. } => {
            let Some(v) = value.as_index() else {
                issues.push(wrong_shape);
                return;
            };
            if !option_in_range(v, entry.option_count) {
                issues.push(AnswerIssue::OptionOutOfRange {
                    question,
                    index: v,
                    options: entry.option_count,
                });
            }
        }
        Evaluation::Multi { .. } => {
            let Some(selected) = value.as_indices() else {
                issues.push(wrong_shape);
                return;
            };
            let mut seen = BTreeSet::new();
            for &index in selected {
                if !option_in_range(index, entry.option_count) {
                    issues.push(AnswerIssue::OptionOutOfRange {
                        question,
                        index,
                        options: entry.option_count,
                    });
                } else if !seen.insert(index) {
                    issues.push(AnswerIssue::DuplicateSelection { question, index });
                }
            }
        }
        Evaluation::Ranking { .. } => {
            let Some(ranks) = value.as_indices() else {
                issues.push(wrong_shape);
                return;
            };
            check_ranking(question, ranks, entry.option_count, issues);
        }
    }
}

fn option_in_range(index: i64, options: usize) -> bool {
    usize::try_from(index).is_ok_and(|i| i < options)
}

fn check_ranking(
    question: &'static str,
    ranks: &[i64],
    options: usize,
    issues: &mut Vec<AnswerIssue>,
) {
    if ranks.len() != options {
        issues.push(AnswerIssue::RankingLength {
            question,
            got: ranks.len(),
            expected: options,
        });
    }

    let mut out_of_range = false;
    for &value in ranks {
        if !(0..=TOP_PRIORITIES).contains(&value) {
            issues.push(AnswerIssue::PriorityOutOfRange { question, value });
            out_of_range = true;
        }
    }
    if out_of_range {
        return;
    }

    let assigned: Vec<i64> = ranks.iter().copied().filter(|&v| v > 0).collect();
    let distinct: BTreeSet<i64> = assigned.iter().copied().collect();
    if assigned.len() != TOP_PRIORITIES as usize || distinct.len() != TOP_PRIORITIES as usize {
        issues.push(AnswerIssue::PrioritiesNotAssigned { question });
    }
}
