//! Scoring pipeline: answers -> subscale totals -> percentages -> archetype.

use serde::Serialize;
use tracing::debug;

use crate::aggregate::aggregate;
use crate::answers::AnswerSet;
use crate::archetype::{classify, Archetype, Classification, ARCHETYPE_RULES};
use crate::normalize::{normalize, SubscalePercentages};
use crate::subscale::{Bucket, Subscale, SubscaleAccumulator};

/// Earned and max points for one measured subscale, as reported.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SubscalePoints {
    pub subscale: Subscale,
    pub earned: f64,
    pub max: f64,
}

/// Everything downstream consumers get from one scoring run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    /// Summed earned over summed max across R1, R2, R3, R5, as 0..=100.
    pub overall_score: u8,
    pub subscale_percentages: SubscalePercentages,
    pub subscale_points: Vec<SubscalePoints>,
    pub archetype: &'static Archetype,
    /// 1-based ladder rung that produced `archetype`.
    pub rule_index: usize,
}

/// Score a completed (or partial) answer set.
///
/// Pure and infallible: unknown questions are ignored, missing ones simply
/// do not contribute, and a zero maximum reads as 0%. When nothing at all
/// was measured the ladder is not consulted and the default archetype is
/// returned, since zero percentages would otherwise read as a low-scoring
/// profile.
pub fn score_answers(answers: &AnswerSet) -> TestResult {
    let acc = aggregate(answers);
    let normalized = normalize(&acc);

    let classification = if acc.measured_totals().max > 0.0 {
        classify(&normalized.percentages)
    } else {
        default_classification()
    };
    debug!(
        overall = normalized.overall,
        archetype = ?classification.archetype.id,
        rule = classification.rule_index,
        "scored answer set"
    );

    TestResult {
        overall_score: normalized.overall,
        subscale_percentages: normalized.percentages,
        subscale_points: points(&acc),
        archetype: classification.archetype,
        rule_index: classification.rule_index,
    }
}

fn default_classification() -> Classification {
    let rule_index = ARCHETYPE_RULES.len();
    Classification {
        archetype: ARCHETYPE_RULES[rule_index - 1].archetype,
        rule_index,
    }
}

fn points(acc: &SubscaleAccumulator) -> Vec<SubscalePoints> {
    Subscale::MEASURED
        .into_iter()
        .map(|subscale| {
            let Bucket { earned, max } = acc.bucket(subscale);
            SubscalePoints {
                subscale,
                earned,
                max,
            }
        })
        .collect()
}
