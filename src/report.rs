//! Report assembly for scored answer sets.

use serde::Serialize;

use crate::answers::AnswerSet;
use crate::engine::TestResult;
use crate::feedback::{build_feedback, Feedback, FeedbackConfig};
use crate::normalize::Reading;
use crate::subscale::Subscale;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    /// blake3 of the canonical answer set, for correlating reruns.
    pub answers_hash: String,
    pub answered: usize,
    pub result: TestResult,
    pub feedback: Feedback,
}

pub fn build_report(
    answers: &AnswerSet,
    result: &TestResult,
    config: &FeedbackConfig,
) -> ScoreReport {
    ScoreReport {
        answers_hash: hash_answers(answers),
        answered: answers.len(),
        result: result.clone(),
        feedback: build_feedback(result, config),
    }
}

pub fn render_report_markdown(report: &ScoreReport) -> String {
    let result = &report.result;
    let archetype = result.archetype;

    let mut out = String::new();
    out.push_str("# Outcome Thinking Report\n\n");
    out.push_str(&format!("- Answers hash: `{}`\n", report.answers_hash));
    out.push_str(&format!("- Questions answered: {}\n", report.answered));
    out.push_str(&format!(
        "- Overall score: {} ({:?})\n",
        result.overall_score, report.feedback.overall_band
    ));
    out.push_str(&format!(
        "- Archetype: {} (rule {})\n",
        archetype.name, result.rule_index
    ));

    out.push_str("\n## Subscales\n\n");
    for subscale in Subscale::ALL {
        let value = match result.subscale_percentages.reading(subscale) {
            Reading::Percent(p) => format!("{p}%"),
            Reading::NotApplicable => "n/a".to_string(),
        };
        out.push_str(&format!(
            "- {} {}: {}\n",
            subscale.code(),
            subscale.label(),
            value
        ));
    }

    out.push_str(&format!("\n## {}\n\n{}\n", archetype.name, archetype.description));
    push_list(&mut out, "Strengths", archetype.strengths);
    push_list(&mut out, "Risks", archetype.risks);
    push_list(&mut out, "Development steps", archetype.development_steps);

    out.push_str("\n## Exercises\n\n");
    for exercise in &report.feedback.exercises {
        out.push_str(&format!(
            "- **{}**: {} ({})\n",
            exercise.title, exercise.description, exercise.action
        ));
    }

    out
}

fn push_list(out: &mut String, heading: &str, items: &[&str]) {
    out.push_str(&format!("\n### {heading}\n\n"));
    for item in items {
        out.push_str(&format!("- {item}\n"));
    }
}

fn hash_answers(answers: &AnswerSet) -> String {
    let bytes = serde_json::to_vec(&answers.to_answers()).unwrap_or_default();
    blake3::hash(&bytes).to_hex().to_string()
}
