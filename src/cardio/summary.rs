use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{adjusted_distance, fill_missing_fields, map_to_cardio_category, round2, CardioCategory};
use crate::models::Workout;

/// Totals for one cardio category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotals {
    pub sessions: u32,
    pub raw_km: f64,
    pub adjusted_km: f64,
    pub minutes: u32,
}

/// Cardio distances aggregated across workouts, raw and multiplier-adjusted
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardioSummary {
    pub by_category: BTreeMap<CardioCategory, CategoryTotals>,
    pub total_raw_km: f64,
    pub total_adjusted_km: f64,
    pub total_minutes: u32,
}

impl CardioSummary {
    /// Aggregate the cardio workouts among `workouts`.
    ///
    /// Missing distances are derived on a copy before weighting; the input is
    /// left untouched.
    pub fn from_workouts<'a, I>(workouts: I) -> Self
    where
        I: IntoIterator<Item = &'a Workout>,
    {
        let mut summary = CardioSummary::default();

        for workout in workouts.into_iter().filter(|w| w.is_cardio()) {
            let filled = fill_missing_fields(workout);
            let raw = filled.distance_km.unwrap_or(0.0);
            let adjusted = adjusted_distance(filled.distance_km, None, &filled.name);
            let minutes = filled.duration_min.unwrap_or(0);

            let totals = summary
                .by_category
                .entry(map_to_cardio_category(&filled.name))
                .or_default();
            totals.sessions += 1;
            totals.raw_km = round2(totals.raw_km + raw);
            totals.adjusted_km = round2(totals.adjusted_km + adjusted);
            totals.minutes += minutes;

            summary.total_raw_km = round2(summary.total_raw_km + raw);
            summary.total_adjusted_km = round2(summary.total_adjusted_km + adjusted);
            summary.total_minutes += minutes;
        }

        summary
    }

    pub fn is_empty(&self) -> bool {
        self.by_category.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_summary_weights_each_category() {
        let workouts = parse("러닝 5km 30분, 사이클 10km 40분, 로잉머신 2km 15분, 스쿼트 100kg 5세트");
        let summary = CardioSummary::from_workouts(&workouts);

        assert_eq!(summary.by_category.len(), 3);
        assert_eq!(summary.total_raw_km, 17.0);
        assert_eq!(summary.total_adjusted_km, 10.2);
        assert_eq!(summary.total_minutes, 85);

        let cycle = &summary.by_category[&CardioCategory::Cycle];
        assert_eq!(cycle.sessions, 1);
        assert_eq!(cycle.raw_km, 10.0);
        assert_eq!(cycle.adjusted_km, 4.0);
    }

    #[test]
    fn test_summary_uses_derived_distance_without_mutating() {
        let workouts = parse("러닝머신 시속 10 30분");
        let mut stripped = workouts[0].clone();
        stripped.distance_km = None;

        let summary = CardioSummary::from_workouts([&stripped]);
        assert_eq!(summary.total_raw_km, 5.0);
        assert_eq!(stripped.distance_km, None);
    }

    #[test]
    fn test_summary_ignores_non_cardio() {
        let workouts = parse("스쿼트 5세트, 요가 30분");
        assert!(CardioSummary::from_workouts(&workouts).is_empty());
    }
}
