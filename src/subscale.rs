//! Subscale taxonomy and the per-subscale point accumulator.
//!
//! Five slots, four measured. `CareTone` (R4) keeps the taxonomy stable for
//! consumers that expect five columns; nothing ever credits it.

use serde::Serialize;

/// One dimension of outcome-based thinking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Subscale {
    /// R1: outcome vs process focus.
    #[serde(rename = "R1")]
    OutcomeFocus,
    /// R2: metrics and threshold discipline.
    #[serde(rename = "R2")]
    Metrics,
    /// R3: money, risk and quality awareness.
    #[serde(rename = "R3")]
    BusinessRisk,
    /// R4: reserved, never measured.
    #[serde(rename = "R4")]
    CareTone,
    /// R5: stop-rule discipline.
    #[serde(rename = "R5")]
    StopRule,
}

impl Subscale {
    /// All five slots in taxonomy order.
    pub const ALL: [Subscale; 5] = [
        Subscale::OutcomeFocus,
        Subscale::Metrics,
        Subscale::BusinessRisk,
        Subscale::CareTone,
        Subscale::StopRule,
    ];

    /// The four slots that take part in scoring and classification.
    pub const MEASURED: [Subscale; 4] = [
        Subscale::OutcomeFocus,
        Subscale::Metrics,
        Subscale::BusinessRisk,
        Subscale::StopRule,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Subscale::OutcomeFocus => "R1",
            Subscale::Metrics => "R2",
            Subscale::BusinessRisk => "R3",
            Subscale::CareTone => "R4",
            Subscale::StopRule => "R5",
        }
    }

    /// Human-readable label used in reports.
    pub fn label(self) -> &'static str {
        match self {
            Subscale::OutcomeFocus => "Outcome vs process",
            Subscale::Metrics => "Metrics and thresholds",
            Subscale::BusinessRisk => "Money, risk, quality",
            Subscale::CareTone => "CARE tone",
            Subscale::StopRule => "Stop-rule discipline",
        }
    }

    pub fn is_measured(self) -> bool {
        self != Subscale::CareTone
    }

    fn slot(self) -> usize {
        match self {
            Subscale::OutcomeFocus => 0,
            Subscale::Metrics => 1,
            Subscale::BusinessRisk => 2,
            Subscale::CareTone => 3,
            Subscale::StopRule => 4,
        }
    }
}

/// Earned and maximum-possible points for one subscale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Bucket {
    pub earned: f64,
    pub max: f64,
}

/// Running earned/max totals for all five subscales.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubscaleAccumulator {
    buckets: [Bucket; 5],
}

impl SubscaleAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `earned` out of a possible `max` to `subscale`.
    ///
    /// Credits aimed at the unmeasured slot are dropped so that it stays at
    /// zero on both sides.
    pub fn credit(&mut self, subscale: Subscale, earned: f64, max: f64) {
        if !subscale.is_measured() {
            return;
        }
        let bucket = &mut self.buckets[subscale.slot()];
        bucket.earned += earned;
        bucket.max += max;
    }

    pub fn bucket(&self, subscale: Subscale) -> Bucket {
        self.buckets[subscale.slot()]
    }

    /// Summed earned and max points across the measured subscales.
    pub fn measured_totals(&self) -> Bucket {
        Subscale::MEASURED
            .iter()
            .map(|&s| self.bucket(s))
            .fold(Bucket::default(), |acc, b| Bucket {
                earned: acc.earned + b.earned,
                max: acc.max + b.max,
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = (Subscale, Bucket)> + '_ {
        Subscale::ALL.iter().map(move |&s| (s, self.bucket(s)))
    }
}
