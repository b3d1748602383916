//! Cardio normalization for aggregate reporting.
//!
//! Different cardio machines cover very different distances for the same
//! effort. Each cardio exercise is mapped to a [`CardioCategory`] whose
//! multiplier converts raw distance into an adjusted distance. Everything here
//! works on copies; stored workouts keep their raw values.

pub mod presentation;
pub mod summary;

pub use presentation::{cardio_category_label, cardio_icon, cardio_multiplier_text};
pub use summary::{CardioSummary, CategoryTotals};

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::Workout;

/// Fairness bucket of a cardio exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardioCategory {
    Running,
    Stepmill,
    Rowing,
    Cycle,
    Other,
}

// Tested in this order; first hit wins
const CATEGORY_KEYWORDS: &[(CardioCategory, &[&str])] = &[
    (
        CardioCategory::Running,
        &["러닝", "달리기", "조깅", "마라톤", "트레드밀", "running", "jogging", "treadmill"],
    ),
    (
        CardioCategory::Stepmill,
        &["천국의 계단", "천국의계단", "스텝밀", "계단", "stepmill", "stair"],
    ),
    (CardioCategory::Rowing, &["로잉", "조정", "rowing", "rower"]),
    (
        CardioCategory::Cycle,
        &["사이클", "자전거", "스피닝", "바이크", "cycle", "cycling", "bike", "spinning"],
    ),
    (
        CardioCategory::Other,
        &["걷기", "워킹", "수영", "줄넘기", "일립티컬", "등산", "walking", "elliptical"],
    ),
];

impl CardioCategory {
    pub const ALL: [CardioCategory; 5] = [
        CardioCategory::Running,
        CardioCategory::Stepmill,
        CardioCategory::Rowing,
        CardioCategory::Cycle,
        CardioCategory::Other,
    ];

    pub fn multiplier(&self) -> f64 {
        match self {
            CardioCategory::Running => 1.0,
            CardioCategory::Stepmill => 1.0,
            CardioCategory::Rowing => 0.6,
            CardioCategory::Cycle => 0.4,
            CardioCategory::Other => 0.3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CardioCategory::Running => "running",
            CardioCategory::Stepmill => "stepmill",
            CardioCategory::Rowing => "rowing",
            CardioCategory::Cycle => "cycle",
            CardioCategory::Other => "other",
        }
    }
}

impl fmt::Display for CardioCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Round to two decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn map_to_cardio_category(name: &str) -> CardioCategory {
    let name = name.to_lowercase();
    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| name.contains(k)))
        .map(|(category, _)| *category)
        .unwrap_or(CardioCategory::Other)
}

pub fn multiplier_for(name: &str) -> f64 {
    map_to_cardio_category(name).multiplier()
}

/// Distance weighted by the cardio multiplier of `name`.
///
/// An incline-corrected `adjusted_dist_km` takes precedence over the raw
/// `distance_km`. Missing or zero distance gives 0.
pub fn adjusted_distance(distance_km: Option<f64>, adjusted_dist_km: Option<f64>, name: &str) -> f64 {
    let base = adjusted_dist_km.or(distance_km).unwrap_or(0.0);
    if base == 0.0 {
        return 0.0;
    }
    round2(base * multiplier_for(name))
}

/// Derive a missing distance or speed of a cardio workout from the other fields.
///
/// Populated fields are never overwritten and non-cardio workouts are returned
/// unchanged.
pub fn fill_missing_fields(workout: &Workout) -> Workout {
    let mut filled = workout.clone();
    if !filled.is_cardio() {
        return filled;
    }

    if let (None, Some(speed), Some(minutes)) = (filled.distance_km, filled.speed_kph, filled.duration_min) {
        filled.distance_km = Some(round2(speed * minutes as f64 / 60.0));
    }

    if let (None, Some(distance), Some(minutes)) = (filled.speed_kph, filled.distance_km, filled.duration_min) {
        if minutes > 0 {
            filled.speed_kph = Some(round2(distance / (minutes as f64 / 60.0)));
        }
    }

    filled
}
