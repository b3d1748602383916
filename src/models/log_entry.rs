use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::taxonomy::{Category, WorkoutType};
use super::workout::Workout;
use crate::parser::{normalize, RuleBasedParser, WorkoutParser};

/// A dated log of one dictated or typed description and the workouts parsed from it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: String,
    pub date: NaiveDate,
    pub raw_text: String,
    pub normalized_text: String,
    pub workouts: Vec<Workout>,
    pub created_at: DateTime<Utc>,
}

impl LogEntry {
    /// Create an entry from already parsed workouts
    pub fn new(
        date: NaiveDate,
        raw_text: String,
        normalized_text: String,
        workouts: Vec<Workout>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date,
            raw_text,
            normalized_text,
            workouts,
            created_at: Utc::now(),
        }
    }

    /// Normalize and parse `raw_text` with the rule-based parser
    pub fn from_text(date: NaiveDate, raw_text: &str) -> Self {
        Self::from_text_with(date, raw_text, &RuleBasedParser)
    }

    /// Normalize `raw_text` and parse it with any parser sharing the workout contract
    pub fn from_text_with(date: NaiveDate, raw_text: &str, parser: &dyn WorkoutParser) -> Self {
        let normalized_text = normalize(raw_text);
        let workouts = parser.parse(&normalized_text);
        Self::new(date, raw_text.to_string(), normalized_text, workouts)
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }
}

/// Filter criteria for listing log entries
#[derive(Debug, Default)]
pub struct LogFilter {
    pub category: Option<Category>,
    pub workout_type: Option<WorkoutType>,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
}

impl LogFilter {
    pub fn matches(&self, entry: &LogEntry) -> bool {
        if let Some(from) = self.from_date {
            if entry.date < from {
                return false;
            }
        }

        if let Some(to) = self.to_date {
            if entry.date > to {
                return false;
            }
        }

        if self.category.is_none() && self.workout_type.is_none() {
            return true;
        }

        entry.workouts.iter().any(|w| self.matches_workout(w))
    }

    pub fn matches_workout(&self, workout: &Workout) -> bool {
        if let Some(category) = self.category {
            if workout.category != category {
                return false;
            }
        }

        if let Some(workout_type) = self.workout_type {
            if workout.workout_type != workout_type {
                return false;
            }
        }

        true
    }
}
