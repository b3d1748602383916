use serde::{Deserialize, Serialize};

use super::taxonomy::{Category, Target, WorkoutType};

/// One workout parsed from a single text segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub name: String,
    pub sets: Option<u32>,
    pub reps: Option<u32>,
    pub weight_kg: Option<f64>,
    pub duration_min: Option<u32>,
    pub distance_km: Option<f64>,
    /// `M:SS` per kilometre
    pub pace: Option<String>,
    pub speed_kph: Option<f64>,
    pub incline_percent: Option<u32>,
    pub resistance_level: Option<u32>,
    pub category: Category,
    #[serde(rename = "type")]
    pub workout_type: WorkoutType,
    /// Set iff `workout_type` is strength
    pub target: Option<Target>,
    pub note: Option<String>,
}

impl Workout {
    /// Create a workout with only a name; every other field is empty
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sets: None,
            reps: None,
            weight_kg: None,
            duration_min: None,
            distance_km: None,
            pace: None,
            speed_kph: None,
            incline_percent: None,
            resistance_level: None,
            category: Category::default(),
            workout_type: WorkoutType::default(),
            target: None,
            note: None,
        }
    }

    pub fn is_cardio(&self) -> bool {
        self.workout_type == WorkoutType::Cardio
    }

    pub fn is_strength(&self) -> bool {
        self.workout_type == WorkoutType::Strength
    }

    /// Lifted volume (sets x reps x weight), when all three are known
    pub fn volume_kg(&self) -> Option<f64> {
        match (self.sets, self.reps, self.weight_kg) {
            (Some(sets), Some(reps), Some(weight)) => Some(sets as f64 * reps as f64 * weight),
            _ => None,
        }
    }
}
