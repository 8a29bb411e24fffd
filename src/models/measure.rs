// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Body measurement records from `measure/getmeas`.
//!
//! The server reports each measurement as an integer value plus a signed
//! power-of-ten exponent (`unit`), e.g. value 805 with unit -2 is 8.05 kg.
//! [`scale`] turns a raw pair into its decimal value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Scale a raw integer measurement by its power-of-ten unit exponent.
pub fn scale(value: i64, unit: i32) -> f64 {
    value as f64 * 10f64.powi(unit)
}

/// The measure type codes the library knows how to name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureType {
    Weight,
    Height,
    FatFreeMass,
    FatRatio,
    FatMassWeight,
    DiastolicBloodPressure,
    SystolicBloodPressure,
    HeartPulse,
}

impl MeasureType {
    /// All known measure types, in documentation order.
    pub const ALL: [MeasureType; 8] = [
        MeasureType::Weight,
        MeasureType::Height,
        MeasureType::FatFreeMass,
        MeasureType::FatRatio,
        MeasureType::FatMassWeight,
        MeasureType::DiastolicBloodPressure,
        MeasureType::SystolicBloodPressure,
        MeasureType::HeartPulse,
    ];

    /// The wire code for this measure type.
    pub fn code(&self) -> i64 {
        match self {
            MeasureType::Weight => 1,
            MeasureType::Height => 4,
            MeasureType::FatFreeMass => 5,
            MeasureType::FatRatio => 6,
            MeasureType::FatMassWeight => 8,
            MeasureType::DiastolicBloodPressure => 9,
            MeasureType::SystolicBloodPressure => 10,
            MeasureType::HeartPulse => 11,
        }
    }

    /// Map a wire code back to a known type, if any.
    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }
}

/// One raw `{type, value, unit}` triple as reported by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measure {
    /// Wire type code; kept raw so unknown codes survive the round trip.
    #[serde(rename = "type")]
    pub kind: i64,
    pub value: i64,
    pub unit: i32,
}

impl Measure {
    /// The decimal value, `value * 10^unit`.
    pub fn scaled(&self) -> f64 {
        scale(self.value, self.unit)
    }
}

/// One server-reported batch of measurements taken at a point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasureGroup {
    /// Server-assigned group id.
    pub grpid: u64,
    /// Ambiguity attribute code (1 and 4 mean ambiguous attribution).
    pub attrib: i64,
    /// 1 for an actual measure, 2 for a user-set target.
    pub category: i64,
    /// When the measurement was taken.
    pub date: DateTime<Utc>,
    /// IANA timezone, shared across the whole response.
    pub timezone: String,
    /// Raw measure triples in server order.
    pub measures: Vec<Measure>,
}

impl MeasureGroup {
    /// The scaled value for a measure type, or `None` if the group carries
    /// no triple of that type. On duplicate type codes the first wins.
    pub fn measure(&self, kind: MeasureType) -> Option<f64> {
        let code = kind.code();
        self.measures
            .iter()
            .find(|m| m.kind == code)
            .map(Measure::scaled)
    }

    pub fn weight(&self) -> Option<f64> {
        self.measure(MeasureType::Weight)
    }

    pub fn height(&self) -> Option<f64> {
        self.measure(MeasureType::Height)
    }

    pub fn fat_free_mass(&self) -> Option<f64> {
        self.measure(MeasureType::FatFreeMass)
    }

    pub fn fat_ratio(&self) -> Option<f64> {
        self.measure(MeasureType::FatRatio)
    }

    pub fn fat_mass_weight(&self) -> Option<f64> {
        self.measure(MeasureType::FatMassWeight)
    }

    pub fn diastolic_blood_pressure(&self) -> Option<f64> {
        self.measure(MeasureType::DiastolicBloodPressure)
    }

    pub fn systolic_blood_pressure(&self) -> Option<f64> {
        self.measure(MeasureType::SystolicBloodPressure)
    }

    pub fn heart_pulse(&self) -> Option<f64> {
        self.measure(MeasureType::HeartPulse)
    }

    /// Whether the measurement's user attribution is ambiguous.
    pub fn is_ambiguous(&self) -> bool {
        self.attrib == 1 || self.attrib == 4
    }

    /// Whether this group is an actual measure (as opposed to a target).
    pub fn is_measure(&self) -> bool {
        self.category == 1
    }

    /// Whether this group is a user-set target.
    pub fn is_target(&self) -> bool {
        self.category == 2
    }
}

/// The full `measure/getmeas` response: ordered groups plus
/// collection-level metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Measures {
    /// Server-side last-update time.
    pub updatetime: DateTime<Utc>,
    /// IANA timezone for every group in the collection.
    pub timezone: String,
    /// Measure groups in server order.
    pub groups: Vec<MeasureGroup>,
}

impl Measures {
    pub fn iter(&self) -> std::slice::Iter<'_, MeasureGroup> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl<'a> IntoIterator for &'a Measures {
    type Item = &'a MeasureGroup;
    type IntoIter = std::slice::Iter<'a, MeasureGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

impl IntoIterator for Measures {
    type Item = MeasureGroup;
    type IntoIter = std::vec::IntoIter<MeasureGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_negative_exponent() {
        assert!((scale(805, -2) - 8.05).abs() < 1e-9);
        assert!((scale(181, -2) - 1.81).abs() < 1e-9);
        assert!((scale(5, -3) - 0.005).abs() < 1e-9);
    }

    #[test]
    fn test_scale_zero_and_positive_exponent() {
        assert_eq!(scale(70, 0), 70.0);
        assert_eq!(scale(7, 1), 70.0);
    }

    #[test]
    fn test_scale_matches_definition_for_all_known_types() {
        for kind in MeasureType::ALL {
            let m = Measure {
                kind: kind.code(),
                value: 123,
                unit: -1,
            };
            assert_eq!(m.scaled(), 123f64 * 10f64.powi(-1));
        }
    }

    #[test]
    fn test_measure_type_codes() {
        assert_eq!(MeasureType::Weight.code(), 1);
        assert_eq!(MeasureType::HeartPulse.code(), 11);
        assert_eq!(MeasureType::from_code(10), Some(MeasureType::SystolicBloodPressure));
        assert_eq!(MeasureType::from_code(99), None);
    }

    fn group_with(measures: Vec<Measure>) -> MeasureGroup {
        MeasureGroup {
            grpid: 1,
            attrib: 0,
            category: 1,
            date: DateTime::from_timestamp(1000, 0).unwrap(),
            timezone: "UTC".to_string(),
            measures,
        }
    }

    #[test]
    fn test_absent_type_yields_none() {
        let group = group_with(vec![Measure {
            kind: 1,
            value: 805,
            unit: -2,
        }]);
        assert!(group.weight().is_some());
        assert_eq!(group.height(), None);
        assert_eq!(group.heart_pulse(), None);
    }

    #[test]
    fn test_first_match_wins_on_duplicate_types() {
        let group = group_with(vec![
            Measure {
                kind: 1,
                value: 805,
                unit: -2,
            },
            Measure {
                kind: 1,
                value: 900,
                unit: -2,
            },
        ]);
        assert!((group.weight().unwrap() - 8.05).abs() < 1e-9);
    }

    #[test]
    fn test_category_and_attrib_helpers() {
        let mut group = group_with(vec![]);
        assert!(group.is_measure());
        assert!(!group.is_target());
        assert!(!group.is_ambiguous());

        group.category = 2;
        group.attrib = 4;
        assert!(group.is_target());
        assert!(group.is_ambiguous());
    }
}
