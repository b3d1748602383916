//! Rule-based parsing of Korean workout descriptions into structured records.
//!
//! ```
//! use workout_nlp::{normalize, parse, WorkoutType};
//!
//! let workouts = parse(&normalize("스쿼트 80kg 4세트 8회, 런닝 30분"));
//! assert_eq!(workouts.len(), 2);
//! assert_eq!(workouts[0].weight_kg, Some(80.0));
//! assert_eq!(workouts[1].workout_type, WorkoutType::Cardio);
//! ```

pub mod cardio;
pub mod models;
pub mod parser;

pub use cardio::{
    adjusted_distance, cardio_category_label, cardio_icon, cardio_multiplier_text,
    fill_missing_fields as fill_missing_cardio_fields, map_to_cardio_category, multiplier_for,
    CardioCategory, CardioSummary,
};
pub use models::{Category, LogEntry, LogFilter, Target, TaxonomyParseError, Workout, WorkoutType};
pub use parser::{normalize, parse, parse_text, RuleBasedParser, WorkoutParser};
