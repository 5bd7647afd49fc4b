//! Respondent answers and the answer-file loader.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raw answer payload. The shape is interpreted by the question's weight row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    /// Rating value (1..=5) or single-choice option index.
    Index(i64),
    /// Ranking vector (one entry per option, 0 = unranked) or multi-choice selection.
    Indices(Vec<i64>),
    /// Anything else the front end sent (text, null, objects). Never scores.
    Other(serde_json::Value),
}

impl Default for AnswerValue {
    fn default() -> Self {
        AnswerValue::Other(serde_json::Value::Null)
    }
}

impl AnswerValue {
    pub fn as_index(&self) -> Option<i64> {
        match self {
            AnswerValue::Index(v) => Some(*v),
            AnswerValue::Indices(_) | AnswerValue::Other(_) => None,
        }
    }

    pub fn as_indices(&self) -> Option<&[i64]> {
        match self {
            AnswerValue::Indices(v) => Some(v),
            AnswerValue::Index(_) | AnswerValue::Other(_) => None,
        }
    }
}

/// A single (question, value) pair as submitted by the quiz front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: String,
    #[serde(default)]
    pub value: AnswerValue,
}

impl Answer {
    pub fn new(question_id: impl Into<String>, value: AnswerValue) -> Self {
        Self {
            question_id: question_id.into(),
            value,
        }
    }

    pub fn index(question_id: impl Into<String>, value: i64) -> Self {
        Self::new(question_id, AnswerValue::Index(value))
    }

    pub fn indices(question_id: impl Into<String>, values: impl Into<Vec<i64>>) -> Self {
        Self::new(question_id, AnswerValue::Indices(values.into()))
    }
}

/// Answers keyed by question id. Later answers for the same id replace earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    by_question: BTreeMap<String, AnswerValue>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, answer: Answer) {
        self.by_question.insert(answer.question_id, answer.value);
    }

    pub fn get(&self, question_id: &str) -> Option<&AnswerValue> {
        self.by_question.get(question_id)
    }

    pub fn len(&self) -> usize {
        self.by_question.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_question.is_empty()
    }

    pub fn question_ids(&self) -> impl Iterator<Item = &str> {
        self.by_question.keys().map(String::as_str)
    }

    /// Answers in canonical (question id) order.
    pub fn to_answers(&self) -> Vec<Answer> {
        self.by_question
            .iter()
            .map(|(id, value)| Answer::new(id.clone(), value.clone()))
            .collect()
    }

    pub fn from_json_str(raw: &str) -> Result<Self, AnswerLoadError> {
        let file: AnswerFile = serde_json::from_str(raw)?;
        Ok(file.into_answers().into_iter().collect())
    }
}

impl FromIterator<Answer> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = Answer>>(iter: I) -> Self {
        let mut set = AnswerSet::new();
        for answer in iter {
            set.insert(answer);
        }
        set
    }
}

/// Accepted answer-file layouts: a bare array or an object with an `answers` field.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AnswerFile {
    Bare(Vec<Answer>),
    Wrapped { answers: Vec<Answer> },
}

impl AnswerFile {
    fn into_answers(self) -> Vec<Answer> {
        match self {
            AnswerFile::Bare(answers) | AnswerFile::Wrapped { answers } => answers,
        }
    }
}

#[derive(Debug, Error)]
pub enum AnswerLoadError {
    #[error("failed to read answers: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse answers: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_answers_from_path(path: impl AsRef<Path>) -> Result<AnswerSet, AnswerLoadError> {
    let raw = std::fs::read_to_string(path.as_ref())?;
    AnswerSet::from_json_str(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_answer_for_a_question_wins() {
        let set: AnswerSet = vec![
            Answer::index("B1", 2),
            Answer::index("B3", 0),
            Answer::index("B1", 5),
        ]
        .into_iter()
        .collect();

        assert_eq!(set.len(), 2);
        assert_eq!(set.get("B1"), Some(&AnswerValue::Index(5)));
    }

    #[test]
    fn parses_bare_and_wrapped_files() {
        let bare = r#"[{"questionId":"B1","value":4},{"questionId":"B2","value":[1,2,0,3,0]}]"#;
        let wrapped = r#"{"answers":[{"questionId":"B5","value":[1,3]}]}"#;

        let a = AnswerSet::from_json_str(bare).unwrap();
        assert_eq!(a.get("B1"), Some(&AnswerValue::Index(4)));
        assert_eq!(
            a.get("B2"),
            Some(&AnswerValue::Indices(vec![1, 2, 0, 3, 0]))
        );

        let b = AnswerSet::from_json_str(wrapped).unwrap();
        assert_eq!(b.get("B5").and_then(AnswerValue::as_indices), Some(&[1, 3][..]));
    }

    #[test]
    fn foreign_values_do_not_reject_the_file() {
        let raw = r#"[
            {"questionId":"B1","value":5},
            {"questionId":"email","value":"a@b.c"},
            {"questionId":"B3","value":null},
            {"questionId":"B4"},
            {"questionId":"B7","value":{"picked":1}}
        ]"#;

        let set = AnswerSet::from_json_str(raw).unwrap();
        assert_eq!(set.len(), 5);
        assert_eq!(set.get("B1"), Some(&AnswerValue::Index(5)));
        assert_eq!(
            set.get("email"),
            Some(&AnswerValue::Other(serde_json::json!("a@b.c")))
        );
        assert_eq!(set.get("B3"), Some(&AnswerValue::default()));
        assert_eq!(set.get("B4"), Some(&AnswerValue::default()));
        assert!(set.get("B7").and_then(AnswerValue::as_index).is_none());
        assert!(set.get("B7").and_then(AnswerValue::as_indices).is_none());
    }

    #[test]
    fn foreign_values_score_zero_on_known_questions() {
        let raw = r#"[
            {"questionId":"B1","value":5},
            {"questionId":"email","value":"a@b.c"},
            {"questionId":"B3","value":null}
        ]"#;
        let result = crate::score_answers(&AnswerSet::from_json_str(raw).unwrap());

        // R1 4/4 from B1, R5 0/2 from the null B3; the email entry is skipped.
        assert_eq!(result.subscale_percentages.outcome_focus, 100);
        assert_eq!(result.subscale_percentages.stop_rule, 0);
        assert_eq!(result.overall_score, 67);
    }

    #[test]
    fn rejects_garbage_json() {
        assert!(matches!(
            AnswerSet::from_json_str("{not json"),
            Err(AnswerLoadError::Json(_))
        ));
    }
}
