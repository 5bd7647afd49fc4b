//! Score bands and micro-exercise suggestions layered on top of a result.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::TestResult;
use crate::normalize::SubscalePercentages;
use crate::subscale::Subscale;

/// Tunable thresholds for feedback. Scoring itself is not configurable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    /// Percentages at or above this read as `Strong`.
    pub strong_threshold: u8,
    /// Percentages at or above this (and below strong) read as `Moderate`.
    pub moderate_threshold: u8,
    /// Subscales below this get a targeted exercise.
    pub exercise_threshold: u8,
    /// Below this many targeted exercises, the general one is appended.
    pub min_exercises: usize,
    pub max_exercises: usize,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            strong_threshold: 80,
            moderate_threshold: 60,
            exercise_threshold: 60,
            min_exercises: 3,
            max_exercises: 5,
        }
    }
}

#[derive(Debug, Error)]
pub enum FeedbackConfigError {
    #[error("failed to read feedback config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse feedback config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid feedback config: {0}")]
    Invalid(String),
}

impl FeedbackConfig {
    pub fn validate(&self) -> Result<(), FeedbackConfigError> {
        for (name, v) in [
            ("strong_threshold", self.strong_threshold),
            ("moderate_threshold", self.moderate_threshold),
            ("exercise_threshold", self.exercise_threshold),
        ] {
            if v > 100 {
                return Err(FeedbackConfigError::Invalid(format!("{name} must be <= 100")));
            }
        }
        if self.moderate_threshold > self.strong_threshold {
            return Err(FeedbackConfigError::Invalid(
                "moderate_threshold must not exceed strong_threshold".to_string(),
            ));
        }
        if self.max_exercises == 0 {
            return Err(FeedbackConfigError::Invalid(
                "max_exercises must be >= 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn band(&self, percent: u8) -> ScoreBand {
        if percent >= self.strong_threshold {
            ScoreBand::Strong
        } else if percent >= self.moderate_threshold {
            ScoreBand::Moderate
        } else {
            ScoreBand::Low
        }
    }
}

pub fn load_feedback_config(path: impl AsRef<Path>) -> Result<FeedbackConfig, FeedbackConfigError> {
    let raw = std::fs::read_to_string(path.as_ref())?;
    let config: FeedbackConfig = serde_json::from_str(&raw)?;
    config.validate()?;
    Ok(config)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Strong,
    Moderate,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Exercise {
    pub title: &'static str,
    pub description: &'static str,
    pub action: &'static str,
}

const OUTCOME_FOCUS_EXERCISE: Exercise = Exercise {
    title: "Focus on results",
    description: "Every morning ask yourself: what concrete result do I want to get today?",
    action: "Write down one or two key results for the day",
};

const METRICS_EXERCISE: Exercise = Exercise {
    title: "Measure progress",
    description: "Pick two or three key metrics for your projects and track them weekly",
    action: "Set up a simple metrics table",
};

const BUSINESS_RISK_EXERCISE: Exercise = Exercise {
    title: "Think like the business",
    description: "Before deciding, ask: how will this affect business results?",
    action: "Study the company's core business metrics",
};

const STOP_RULE_EXERCISE: Exercise = Exercise {
    title: "Decision discipline",
    description: "Set clear readiness criteria before starting work on a task",
    action: "Practice making decisions against a timer",
};

const GENERAL_EXERCISE: Exercise = Exercise {
    title: "Outcome thinking",
    description: "Regularly ask yourself why you are doing this and what result the user gets",
    action: "Keep a results journal",
};

fn exercise_for(subscale: Subscale) -> Option<Exercise> {
    match subscale {
        Subscale::OutcomeFocus => Some(OUTCOME_FOCUS_EXERCISE),
        Subscale::Metrics => Some(METRICS_EXERCISE),
        Subscale::BusinessRisk => Some(BUSINESS_RISK_EXERCISE),
        Subscale::StopRule => Some(STOP_RULE_EXERCISE),
        Subscale::CareTone => None,
    }
}

/// Exercises for weak subscales, topped up with the general one when short.
pub fn suggest_exercises(
    percentages: &SubscalePercentages,
    config: &FeedbackConfig,
) -> Vec<Exercise> {
    let mut exercises: Vec<Exercise> = Subscale::MEASURED
        .iter()
        .filter(|&&s| {
            percentages
                .reading(s)
                .percent()
                .is_some_and(|p| p < config.exercise_threshold)
        })
        .filter_map(|&s| exercise_for(s))
        .collect();

    if exercises.len() < config.min_exercises {
        exercises.push(GENERAL_EXERCISE);
    }
    exercises.truncate(config.max_exercises);
    exercises
}

#[derive(Debug, Clone, Serialize)]
pub struct SubscaleFeedback {
    pub subscale: Subscale,
    pub label: &'static str,
    pub percent: u8,
    pub band: ScoreBand,
}

#[derive(Debug, Clone, Serialize)]
pub struct Feedback {
    pub overall_band: ScoreBand,
    pub subscales: Vec<SubscaleFeedback>,
    pub exercises: Vec<Exercise>,
}

pub fn build_feedback(result: &TestResult, config: &FeedbackConfig) -> Feedback {
    let percentages = &result.subscale_percentages;
    let subscales = Subscale::MEASURED
        .iter()
        .filter_map(|&s| {
            let percent = percentages.reading(s).percent()?;
            Some(SubscaleFeedback {
                subscale: s,
                label: s.label(),
                percent,
                band: config.band(percent),
            })
        })
        .collect();

    Feedback {
        overall_band: config.band(result.overall_score),
        subscales,
        exercises: suggest_exercises(percentages, config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_follow_thresholds() {
        let config = FeedbackConfig::default();
        assert_eq!(config.band(80), ScoreBand::Strong);
        assert_eq!(config.band(79), ScoreBand::Moderate);
        assert_eq!(config.band(60), ScoreBand::Moderate);
        assert_eq!(config.band(59), ScoreBand::Low);
    }

    #[test]
    fn strong_profile_gets_only_the_general_exercise() {
        let p = SubscalePercentages::new(90, 90, 90, 90);
        let exercises = suggest_exercises(&p, &FeedbackConfig::default());
        assert_eq!(exercises, vec![GENERAL_EXERCISE]);
    }

    #[test]
    fn weak_profile_gets_one_exercise_per_weak_subscale() {
        let p = SubscalePercentages::new(10, 20, 30, 40);
        let exercises = suggest_exercises(&p, &FeedbackConfig::default());
        assert_eq!(
            exercises,
            vec![
                OUTCOME_FOCUS_EXERCISE,
                METRICS_EXERCISE,
                BUSINESS_RISK_EXERCISE,
                STOP_RULE_EXERCISE
            ]
        );
    }

    #[test]
    fn two_weak_subscales_are_topped_up() {
        let p = SubscalePercentages::new(10, 90, 90, 50);
        let exercises = suggest_exercises(&p, &FeedbackConfig::default());
        assert_eq!(
            exercises,
            vec![OUTCOME_FOCUS_EXERCISE, STOP_RULE_EXERCISE, GENERAL_EXERCISE]
        );
    }

    #[test]
    fn max_exercises_caps_the_list() {
        let config = FeedbackConfig {
            max_exercises: 2,
            ..FeedbackConfig::default()
        };
        let p = SubscalePercentages::new(0, 0, 0, 0);
        assert_eq!(suggest_exercises(&p, &config).len(), 2);
    }

    #[test]
    fn partial_config_fills_defaults_and_validates() {
        let config: FeedbackConfig = serde_json::from_str(r#"{"strong_threshold": 90}"#).unwrap();
        assert_eq!(config.strong_threshold, 90);
        assert_eq!(config.moderate_threshold, 60);
        assert!(config.validate().is_ok());

        let bad = FeedbackConfig {
            moderate_threshold: 95,
            ..config
        };
        assert!(matches!(bad.validate(), Err(FeedbackConfigError::Invalid(_))));
    }
}
