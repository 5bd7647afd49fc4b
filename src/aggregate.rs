//! Fold an answer set into per-subscale earned/max totals.

use tracing::{debug, warn};

use crate::answers::AnswerSet;
use crate::subscale::SubscaleAccumulator;
use crate::weights::{weight_entry, WEIGHT_TABLE};

/// Accumulate earned and maximum points for every answered question.
///
/// Rows are visited in weight-table order so the floating-point sums do not
/// depend on how the caller ordered its answers. Unanswered questions add
/// nothing to either side. A value with the wrong shape still counts as
/// answered and earns zero. Unknown question ids are skipped.
pub fn aggregate(answers: &AnswerSet) -> SubscaleAccumulator {
    let mut acc = SubscaleAccumulator::new();

    for entry in &WEIGHT_TABLE {
        let Some(value) = answers.get(entry.question_id) else {
            continue;
        };
        let raw = entry.raw_points(value).unwrap_or_else(|| {
            warn!(
                question = entry.question_id,
                kind = ?entry.kind(),
                "answer has the wrong shape for its question; scoring as zero"
            );
            0.0
        });
        for share in entry.shares {
            acc.credit(
                share.subscale,
                raw * share.fraction,
                entry.full_points * share.fraction,
            );
        }
    }

    for id in answers.question_ids() {
        if weight_entry(id).is_none() {
            debug!(question = id, "skipping answer for unknown question");
        }
    }

    acc
}
