#![forbid(unsafe_code)]

//! # outcome-assess
//!
//! Scoring engine for a ten-question self-assessment of outcome-based
//! thinking.
//!
//! A completed answer set is folded through a fixed question weight table
//! into four measured subscales (outcome focus, metrics, business risk,
//! stop-rule discipline), normalized to percentages, and classified into one
//! of twelve archetypes by an ordered threshold ladder. Scoring is pure and
//! never fails: unknown questions are ignored, missing ones contribute
//! nothing, and the last rung of the ladder always matches.
//!
//! ```
//! use outcome_assess::{score_answers, Answer, AnswerSet};
//!
//! let answers: AnswerSet = vec![Answer::index("B1", 5), Answer::index("B3", 0)]
//!     .into_iter()
//!     .collect();
//! let result = score_answers(&answers);
//! assert_eq!(result.overall_score, 100);
//! ```

pub mod aggregate;
pub mod answers;
pub mod archetype;
pub mod completeness;
pub mod engine;
pub mod evaluation;
pub mod feedback;
pub mod normalize;
pub mod ranking;
pub mod report;
pub mod subscale;
pub mod weights;

pub use answers::{load_answers_from_path, Answer, AnswerLoadError, AnswerSet, AnswerValue};
pub use archetype::{classify, Archetype, ArchetypeId, Classification};
pub use completeness::{check_completeness, ensure_complete, AnswerIssue, IncompleteAnswers};
pub use engine::{score_answers, TestResult};
pub use feedback::{FeedbackConfig, ScoreBand};
pub use normalize::{Reading, SubscalePercentages};
pub use ranking::ranking_similarity;
pub use subscale::{Subscale, SubscaleAccumulator};
