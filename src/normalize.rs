//! Convert accumulated points into 0..=100 percentages.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::subscale::{Subscale, SubscaleAccumulator};

/// Marker reported for the unmeasured subscale.
pub const NOT_APPLICABLE: &str = "n/a";

/// `round(earned / max * 100)`, or 0 when nothing could be earned.
pub fn percentage(earned: f64, max: f64) -> u8 {
    if max > 0.0 {
        ((earned / max) * 100.0).round().clamp(0.0, 100.0) as u8
    } else {
        0
    }
}

/// A reported subscale value: a percentage, or the not-applicable marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reading {
    Percent(u8),
    NotApplicable,
}

impl Reading {
    pub fn percent(self) -> Option<u8> {
        match self {
            Reading::Percent(p) => Some(p),
            Reading::NotApplicable => None,
        }
    }
}

impl Serialize for Reading {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Reading::Percent(p) => serializer.serialize_u8(*p),
            Reading::NotApplicable => serializer.serialize_str(NOT_APPLICABLE),
        }
    }
}

/// Percentages for the four measured subscales.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubscalePercentages {
    pub outcome_focus: u8,
    pub metrics: u8,
    pub business_risk: u8,
    pub stop_rule: u8,
}

impl SubscalePercentages {
    pub fn new(outcome_focus: u8, metrics: u8, business_risk: u8, stop_rule: u8) -> Self {
        Self {
            outcome_focus,
            metrics,
            business_risk,
            stop_rule,
        }
    }

    pub fn reading(&self, subscale: Subscale) -> Reading {
        match subscale {
            Subscale::OutcomeFocus => Reading::Percent(self.outcome_focus),
            Subscale::Metrics => Reading::Percent(self.metrics),
            Subscale::BusinessRisk => Reading::Percent(self.business_risk),
            Subscale::CareTone => Reading::NotApplicable,
            Subscale::StopRule => Reading::Percent(self.stop_rule),
        }
    }
}

/// Serialized as a five-slot map keyed `R1`..`R5`.
impl Serialize for SubscalePercentages {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Subscale::ALL.len()))?;
        for subscale in Subscale::ALL {
            map.serialize_entry(subscale.code(), &self.reading(subscale))?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalized {
    pub overall: u8,
    pub percentages: SubscalePercentages,
}

/// Per-subscale percentages plus the overall percentage.
///
/// The overall figure is the ratio of summed earned points to summed max
/// points over the measured subscales, not the mean of their percentages.
pub fn normalize(acc: &SubscaleAccumulator) -> Normalized {
    let pct = |s: Subscale| {
        let bucket = acc.bucket(s);
        percentage(bucket.earned, bucket.max)
    };
    let totals = acc.measured_totals();

    Normalized {
        overall: percentage(totals.earned, totals.max),
        percentages: SubscalePercentages {
            outcome_focus: pct(Subscale::OutcomeFocus),
            metrics: pct(Subscale::Metrics),
            business_risk: pct(Subscale::BusinessRisk),
            stop_rule: pct(Subscale::StopRule),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_max_is_zero_percent() {
        assert_eq!(percentage(0.0, 0.0), 0);
        assert_eq!(percentage(3.0, 0.0), 0);
    }

    #[test]
    fn rounds_half_up() {
        assert_eq!(percentage(1.0, 8.0), 13); // 12.5
        assert_eq!(percentage(1.0, 3.0), 33);
        assert_eq!(percentage(2.0, 3.0), 67);
    }

    #[test]
    fn overall_uses_point_sums() {
        let mut acc = SubscaleAccumulator::new();
        acc.credit(Subscale::OutcomeFocus, 4.0, 4.0);
        acc.credit(Subscale::StopRule, 0.0, 1.0);

        let n = normalize(&acc);
        assert_eq!(n.percentages.outcome_focus, 100);
        assert_eq!(n.percentages.stop_rule, 0);
        assert_eq!(n.overall, 80);
    }

    #[test]
    fn serializes_five_slots_with_marker() {
        let p = SubscalePercentages::new(10, 20, 30, 50);
        let json = serde_json::to_value(p).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"R1": 10, "R2": 20, "R3": 30, "R4": "n/a", "R5": 50})
        );
    }
}
