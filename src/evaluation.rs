//! Offline evaluation over synthetic respondents.
//!
//! Draws seeded random, well-formed answer sets, scores them through the
//! real engine and summarizes how the archetype ladder distributes them.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::answers::{Answer, AnswerSet};
use crate::archetype::ArchetypeId;
use crate::completeness::TOP_PRIORITIES;
use crate::engine::score_answers;
use crate::weights::{Evaluation, WeightEntry, WEIGHT_TABLE};

/// Probability that a synthetic respondent ticks any one multi-choice option.
const MULTI_SELECT_RATE: f64 = 0.35;

#[derive(Debug, Clone, Serialize)]
pub struct SyntheticSummary {
    pub respondents: usize,
    pub seed: u64,
    pub overall_min: u8,
    pub overall_max: u8,
    pub overall_mean: f64,
    pub archetype_counts: BTreeMap<ArchetypeId, usize>,
}

/// Answer set that earns every available point.
pub fn perfect_answers() -> AnswerSet {
    WEIGHT_TABLE
        .iter()
        .map(|entry| match entry.evaluation {
            Evaluation::Rating { lowest } => {
                Answer::index(entry.question_id, lowest + entry.option_count as i64 - 1)
            }
            Evaluation::Ranking { ideal } => Answer::indices(entry.question_id, ideal.to_vec()),
            Evaluation::Choice { awards } => {
                let best = awards
                    .iter()
                    .max_by(|a, b| a.1.total_cmp(&b.1))
                    .map_or(0, |(index, _)| *index);
                Answer::index(entry.question_id, best)
            }
            Evaluation::Multi { correct, .. } => Answer::indices(entry.question_id, correct.to_vec()),
        })
        .collect()
}

/// A random answer set that would pass the completeness check.
pub fn random_answers(rng: &mut StdRng) -> AnswerSet {
    WEIGHT_TABLE
        .iter()
        .map(|entry| random_answer(entry, rng))
        .collect()
}

fn random_answer(entry: &WeightEntry, rng: &mut StdRng) -> Answer {
    let options = entry.option_count;
    match entry.evaluation {
        Evaluation::Rating { lowest } => {
            Answer::index(entry.question_id, rng.gen_range(lowest..lowest + options as i64))
        }
        Evaluation::Choice { .. } => {
            Answer::index(entry.question_id, rng.gen_range(0..options as i64))
        }
        Evaluation::Multi { .. } => {
            let selected: Vec<i64> = (0..options as i64)
                .filter(|_| rng.gen_bool(MULTI_SELECT_RATE))
                .collect();
            Answer::indices(entry.question_id, selected)
        }
        Evaluation::Ranking { .. } => {
            let mut positions: Vec<usize> = (0..options).collect();
            positions.shuffle(rng);
            let mut ranks = vec![0_i64; options];
            for (priority, &pos) in (1..=TOP_PRIORITIES).zip(&positions) {
                ranks[pos] = priority;
            }
            Answer::indices(entry.question_id, ranks)
        }
    }
}

pub fn run_synthetic_suite(respondents: usize, seed: u64) -> SyntheticSummary {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut archetype_counts = BTreeMap::new();
    let mut overall_min = u8::MAX;
    let mut overall_max = 0;
    let mut overall_sum = 0.0;

    for _ in 0..respondents {
        let result = score_answers(&random_answers(&mut rng));
        *archetype_counts.entry(result.archetype.id).or_insert(0) += 1;
        overall_min = overall_min.min(result.overall_score);
        overall_max = overall_max.max(result.overall_score);
        overall_sum += f64::from(result.overall_score);
    }

    SyntheticSummary {
        respondents,
        seed,
        overall_min: if respondents == 0 { 0 } else { overall_min },
        overall_max,
        overall_mean: if respondents == 0 {
            0.0
        } else {
            overall_sum / respondents as f64
        },
        archetype_counts,
    }
}
