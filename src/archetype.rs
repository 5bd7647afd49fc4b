//! Archetype records and the ordered classification ladder.
//!
//! Twelve rules over the four measured percentages (R1, R2, R3, R5). The
//! ladder is checked top to bottom and the first match wins; the last rule
//! always matches, so classification is total.
//!
//! ## Ladder
//!
//! 1. Cross-functional integrator: R1, R2, R3 >= 70 and R5 >= 60
//! 2. Process workhorse: R1, R2, R3 < 40
//! 3. Business driver: R1 >= 70, R2 < 50, R3 >= 70
//! 4. Outcome engineer: R1 >= 70, R2 >= 70, R3 < 50
//! 5. Goal romantic: R1 >= 70, R2 < 50, R3 < 50
//! 6. Metrics collector: R1 < 50, R2 >= 70, R3 < 50
//! 7. Experimenter without stop rules: R5 < 50 and mean(R1, R2, R3) >= 50
//! 8. Risk safekeeper: R3 >= 70 and mean(R1, R2) < 70
//! 9. Systemic practitioner: R1, R2, R3 all within 60..=70
//! 10. Disciplined executor: R1 >= 60, R5 >= 70, R2 < 60, R3 < 60
//! 11. Analyst-consultant: R2 >= 70, R3 >= 70, R1 < 60, R5 < 60
//! 12. Developing practitioner: always

use serde::Serialize;

use crate::normalize::SubscalePercentages;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArchetypeId {
    CrossFunctionalIntegrator,
    ProcessWorkhorse,
    BusinessDriver,
    OutcomeEngineer,
    GoalRomantic,
    MetricsCollector,
    ExperimenterWithoutStopRules,
    RiskSafekeeper,
    SystemicPractitioner,
    DisciplinedExecutor,
    AnalystConsultant,
    DevelopingPractitioner,
}

/// Static narrative payload for one archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Archetype {
    pub id: ArchetypeId,
    pub name: &'static str,
    pub description: &'static str,
    pub strengths: &'static [&'static str],
    pub risks: &'static [&'static str],
    pub development_steps: &'static [&'static str],
}

/// One rung of the ladder.
#[derive(Clone, Copy)]
pub struct ArchetypeRule {
    pub archetype: &'static Archetype,
    pub matches: fn(&SubscalePercentages) -> bool,
}

impl std::fmt::Debug for ArchetypeRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArchetypeRule")
            .field("archetype", &self.archetype.id)
            .finish_non_exhaustive()
    }
}

/// Outcome of classification: the archetype plus the 1-based rule that matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub archetype: &'static Archetype,
    pub rule_index: usize,
}

// ---------------------------------------------------------------------
//  Predicates
// ---------------------------------------------------------------------

fn mean(values: &[u8]) -> f64 {
    values.iter().map(|&v| f64::from(v)).sum::<f64>() / values.len() as f64
}

fn integrator(p: &SubscalePercentages) -> bool {
    p.outcome_focus >= 70 && p.metrics >= 70 && p.business_risk >= 70 && p.stop_rule >= 60
}

fn process_workhorse(p: &SubscalePercentages) -> bool {
    p.outcome_focus < 40 && p.metrics < 40 && p.business_risk < 40
}

fn business_driver(p: &SubscalePercentages) -> bool {
    p.outcome_focus >= 70 && p.metrics < 50 && p.business_risk >= 70
}

fn outcome_engineer(p: &SubscalePercentages) -> bool {
    p.outcome_focus >= 70 && p.metrics >= 70 && p.business_risk < 50
}

fn goal_romantic(p: &SubscalePercentages) -> bool {
    p.outcome_focus >= 70 && p.metrics < 50 && p.business_risk < 50
}

fn metrics_collector(p: &SubscalePercentages) -> bool {
    p.outcome_focus < 50 && p.metrics >= 70 && p.business_risk < 50
}

fn experimenter(p: &SubscalePercentages) -> bool {
    p.stop_rule < 50 && mean(&[p.outcome_focus, p.metrics, p.business_risk]) >= 50.0
}

fn risk_safekeeper(p: &SubscalePercentages) -> bool {
    p.business_risk >= 70 && mean(&[p.outcome_focus, p.metrics]) < 70.0
}

fn systemic_practitioner(p: &SubscalePercentages) -> bool {
    let band = 60..=70;
    band.contains(&p.outcome_focus) && band.contains(&p.metrics) && band.contains(&p.business_risk)
}

fn disciplined_executor(p: &SubscalePercentages) -> bool {
    p.outcome_focus >= 60 && p.stop_rule >= 70 && p.metrics < 60 && p.business_risk < 60
}

fn analyst_consultant(p: &SubscalePercentages) -> bool {
    p.metrics >= 70 && p.business_risk >= 70 && p.outcome_focus < 60 && p.stop_rule < 60
}

fn always(_: &SubscalePercentages) -> bool {
    true
}

// ---------------------------------------------------------------------
//  Records
// ---------------------------------------------------------------------

pub static CROSS_FUNCTIONAL_INTEGRATOR: Archetype = Archetype {
    id: ArchetypeId::CrossFunctionalIntegrator,
    name: "Cross-functional integrator",
    description: concat!(
        "You balance outcomes, metrics, business context and discipline with ease. ",
        "You see the whole picture and make well-weighed decisions.",
    ),
    strengths: &["Systems thinking", "Balance across all aspects", "Strategic planning"],
    risks: &["Possible slowness", "Perfectionism", "Difficulty delegating"],
    development_steps: &[
        "Build up your decision speed",
        "Learn to delegate the details",
        "Focus on the key metrics",
    ],
};

pub static PROCESS_WORKHORSE: Archetype = Archetype {
    id: ArchetypeId::ProcessWorkhorse,
    name: "Process workhorse",
    description: concat!(
        "You focus on executing processes well, but can lose sight of the end ",
        "result and the business context.",
    ),
    strengths: &["Quality of execution", "Following procedures", "Reliability"],
    risks: &[
        "Losing focus on results",
        "Ignoring metrics",
        "Underestimating business context",
    ],
    development_steps: &[
        "Learn the key business metrics",
        "Tie your work to its results",
        "Ask 'why?' more often",
    ],
};

pub static BUSINESS_DRIVER: Archetype = Archetype {
    id: ArchetypeId::BusinessDriver,
    name: "Business driver",
    description: concat!(
        "You understand the business context well and focus on results, but may ",
        "underestimate the importance of metrics.",
    ),
    strengths: &["Business thinking", "Focus on results", "Understanding of risk"],
    risks: &["Too little measurement", "Intuitive decisions", "Hard to scale"],
    development_steps: &[
        "Introduce a metrics system",
        "Study analytics",
        "Document what works",
    ],
};

pub static OUTCOME_ENGINEER: Archetype = Archetype {
    id: ArchetypeId::OutcomeEngineer,
    name: "Outcome engineer",
    description: concat!(
        "You work masterfully with results and metrics, but may underestimate ",
        "business risks and constraints.",
    ),
    strengths: &[
        "Measurable results",
        "Analytical thinking",
        "Process optimization",
    ],
    risks: &[
        "Ignoring business context",
        "Underestimating risk",
        "Local optimization",
    ],
    development_steps: &[
        "Study the company's business model",
        "Account for financial constraints",
        "Consult the business team",
    ],
};

pub static GOAL_ROMANTIC: Archetype = Archetype {
    id: ArchetypeId::GoalRomantic,
    name: "Goal romantic",
    description: concat!(
        "You focus on results very well, but can miss the importance of ",
        "measurement and business context.",
    ),
    strengths: &["Clear goals", "Team motivation", "Vision of the result"],
    risks: &[
        "No measurement",
        "Ignoring constraints",
        "Overestimating what is possible",
    ],
    development_steps: &[
        "Introduce a measurement system",
        "Learn the business constraints",
        "Break goals into measurable stages",
    ],
};

pub static METRICS_COLLECTOR: Archetype = Archetype {
    id: ArchetypeId::MetricsCollector,
    name: "Metrics collector",
    description: concat!(
        "You work very well with data and metrics, but can lose focus on the ",
        "end result.",
    ),
    strengths: &[
        "Analytical skills",
        "Measurement accuracy",
        "Spotting patterns",
    ],
    risks: &[
        "Losing focus on results",
        "Analysis paralysis",
        "Metrics for their own sake",
    ],
    development_steps: &[
        "Connect metrics to business results",
        "Focus on the key indicators",
        "Make data-driven decisions",
    ],
};

pub static EXPERIMENTER_WITHOUT_STOP_RULES: Archetype = Archetype {
    id: ArchetypeId::ExperimenterWithoutStopRules,
    name: "Experimenter without stop rules",
    description: concat!(
        "You understand results and context well, but can struggle to make ",
        "final decisions.",
    ),
    strengths: &[
        "Openness to experiments",
        "Flexible thinking",
        "Searching for better solutions",
    ],
    risks: &[
        "Endless iterations",
        "Missed deadlines",
        "Uncertainty for the team",
    ],
    development_steps: &[
        "Set clear definitions of done",
        "Practice deciding under uncertainty",
        "Adopt time-boxing",
    ],
};

pub static RISK_SAFEKEEPER: Archetype = Archetype {
    id: ArchetypeId::RiskSafekeeper,
    name: "Risk safekeeper",
    description: concat!(
        "You understand business context and risk very well, but can be too ",
        "cautious in pursuing results.",
    ),
    strengths: &["Risk management", "Business thinking", "Preventing mistakes"],
    risks: &[
        "Excessive caution",
        "Slow decisions",
        "Missed opportunities",
    ],
    development_steps: &[
        "Balance risks against opportunities",
        "Practice rapid prototyping",
        "Study lean approaches",
    ],
};

pub static SYSTEMIC_PRACTITIONER: Archetype = Archetype {
    id: ArchetypeId::SystemicPractitioner,
    name: "Systemic practitioner",
    description: concat!(
        "You show a balanced approach to every aspect of outcome-based thinking ",
        "with good room to grow.",
    ),
    strengths: &["Balanced approach", "Systemic view", "Growth potential"],
    risks: &[
        "Limited depth in specific areas",
        "Diffuse focus",
        "Average at everything",
    ],
    development_steps: &[
        "Pick one or two areas to go deep on",
        "Build expertise step by step",
        "Find a mentor in your strong areas",
    ],
};

pub static DISCIPLINED_EXECUTOR: Archetype = Archetype {
    id: ArchetypeId::DisciplinedExecutor,
    name: "Disciplined executor",
    description: concat!(
        "You combine a focus on results with strong discipline, but can miss ",
        "analytics and business context.",
    ),
    strengths: &[
        "Execution discipline",
        "Meeting deadlines",
        "Focus on results",
    ],
    risks: &[
        "Too little analytics",
        "Ignoring business context",
        "Rigid approach",
    ],
    development_steps: &[
        "Learn the key metrics",
        "Develop business thinking",
        "Add flexibility to your processes",
    ],
};

pub static ANALYST_CONSULTANT: Archetype = Archetype {
    id: ArchetypeId::AnalystConsultant,
    name: "Analyst-consultant",
    description: concat!(
        "You work very well with data and understand the business, but can lose ",
        "focus on the end result.",
    ),
    strengths: &[
        "Deep analysis",
        "Business consulting",
        "Strategic thinking",
    ],
    risks: &[
        "Losing focus on results",
        "Slow decisions",
        "Over-valuing analysis",
    ],
    development_steps: &[
        "Connect analysis to action",
        "Focus on the key results",
        "Practice fast decision making",
    ],
};

pub static DEVELOPING_PRACTITIONER: Archetype = Archetype {
    id: ArchetypeId::DevelopingPractitioner,
    name: "Developing practitioner",
    description: concat!(
        "You are in the process of developing outcome-based thinking. You have ",
        "strengths that can be developed further.",
    ),
    strengths: &[
        "Growth potential",
        "Openness to development",
        "Basic grasp of the principles",
    ],
    risks: &[
        "Uneven skill development",
        "Lack of focus",
        "Need for structure",
    ],
    development_steps: &[
        "Choose a priority area to develop",
        "Study best practices",
        "Seek feedback from colleagues",
    ],
};

pub static ARCHETYPE_RULES: [ArchetypeRule; 12] = [
    ArchetypeRule {
        archetype: &CROSS_FUNCTIONAL_INTEGRATOR,
        matches: integrator,
    },
    ArchetypeRule {
        archetype: &PROCESS_WORKHORSE,
        matches: process_workhorse,
    },
    ArchetypeRule {
        archetype: &BUSINESS_DRIVER,
        matches: business_driver,
    },
    ArchetypeRule {
        archetype: &OUTCOME_ENGINEER,
        matches: outcome_engineer,
    },
    ArchetypeRule {
        archetype: &GOAL_ROMANTIC,
        matches: goal_romantic,
    },
    ArchetypeRule {
        archetype: &METRICS_COLLECTOR,
        matches: metrics_collector,
    },
    ArchetypeRule {
        archetype: &EXPERIMENTER_WITHOUT_STOP_RULES,
        matches: experimenter,
    },
    ArchetypeRule {
        archetype: &RISK_SAFEKEEPER,
        matches: risk_safekeeper,
    },
    ArchetypeRule {
        archetype: &SYSTEMIC_PRACTITIONER,
        matches: systemic_practitioner,
    },
    ArchetypeRule {
        archetype: &DISCIPLINED_EXECUTOR,
        matches: disciplined_executor,
    },
    ArchetypeRule {
        archetype: &ANALYST_CONSULTANT,
        matches: analyst_consultant,
    },
    ArchetypeRule {
        archetype: &DEVELOPING_PRACTITIONER,
        matches: always,
    },
];

/// First matching rung of the ladder.
pub fn classify(percentages: &SubscalePercentages) -> Classification {
    ARCHETYPE_RULES
        .iter()
        .enumerate()
        .find(|(_, rule)| (rule.matches)(percentages))
        .map(|(i, rule)| Classification {
            archetype: rule.archetype,
            rule_index: i + 1,
        })
        .unwrap_or(Classification {
            archetype: &DEVELOPING_PRACTITIONER,
            rule_index: ARCHETYPE_RULES.len(),
        })
}

/// All archetype records in ladder order.
pub fn archetypes() -> impl Iterator<Item = &'static Archetype> {
    ARCHETYPE_RULES.iter().map(|rule| rule.archetype)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(a: u8, b: u8, c: u8, e: u8) -> SubscalePercentages {
        SubscalePercentages::new(a, b, c, e)
    }

    #[test]
    fn every_record_has_three_of_each_list() {
        for archetype in archetypes() {
            assert_eq!(archetype.strengths.len(), 3, "{:?}", archetype.id);
            assert_eq!(archetype.risks.len(), 3, "{:?}", archetype.id);
            assert_eq!(archetype.development_steps.len(), 3, "{:?}", archetype.id);
        }
    }

    #[test]
    fn ids_are_unique_and_default_is_last() {
        let mut ids: Vec<_> = archetypes().map(|a| a.id).collect();
        assert_eq!(ids.last(), Some(&ArchetypeId::DevelopingPractitioner));
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 12);
    }

    #[test]
    fn mean_thresholds_use_real_arithmetic() {
        // (50 + 50 + 49) / 3 = 49.67 < 50
        assert!(!experimenter(&p(50, 50, 49, 0)));
        assert!(experimenter(&p(51, 50, 49, 0)));
        // (69 + 70) / 2 = 69.5 < 70
        assert!(risk_safekeeper(&p(69, 70, 70, 0)));
        assert!(!risk_safekeeper(&p(70, 70, 70, 0)));
    }

    #[test]
    fn systemic_band_is_inclusive() {
        assert!(systemic_practitioner(&p(60, 70, 65, 0)));
        assert!(!systemic_practitioner(&p(59, 70, 65, 0)));
        assert!(!systemic_practitioner(&p(60, 71, 65, 0)));
    }

    #[test]
    fn zeros_fall_through_to_process_workhorse() {
        let c = classify(&p(0, 0, 0, 0));
        assert_eq!(c.archetype.id, ArchetypeId::ProcessWorkhorse);
        assert_eq!(c.rule_index, 2);
    }
}
