//! Rule-based parsing of Korean workout descriptions.

pub mod classifier;
pub mod name;
pub mod normalizer;
pub mod numbers;
pub mod registry;
pub mod segment;

pub use classifier::{classify, extract_note, Classification};
pub use name::find_name;
pub use normalizer::{normalize, NormalizationRule};
pub use numbers::{extract_numbers, ExtractedNumbers};
pub use registry::known_exercises;
pub use segment::split_segments;

use crate::models::Workout;

/// Anything that turns normalized text into workouts.
///
/// The rule-based parser and an external AI-backed parser share this contract,
/// so callers can swap one for the other.
pub trait WorkoutParser {
    /// Short identifier used in logs
    fn name(&self) -> &str;

    fn parse(&self, normalized_text: &str) -> Vec<Workout>;
}

/// Deterministic parser built from the normalization, extraction and
/// classification tables in this module
#[derive(Debug, Default, Clone, Copy)]
pub struct RuleBasedParser;

impl WorkoutParser for RuleBasedParser {
    fn name(&self) -> &str {
        "rules"
    }

    fn parse(&self, normalized_text: &str) -> Vec<Workout> {
        parse(normalized_text)
    }
}

/// Parse one segment; `None` when no exercise name can be recovered
pub fn parse_segment(segment: &str) -> Option<Workout> {
    let Some(name) = find_name(segment) else {
        tracing::debug!(segment, "Dropping segment without an exercise name");
        return None;
    };

    let numbers = extract_numbers(segment);
    let classification = classify(&name);

    Some(Workout {
        name,
        sets: numbers.sets,
        reps: numbers.reps,
        weight_kg: numbers.weight_kg,
        duration_min: numbers.duration_min,
        distance_km: numbers.distance_km,
        pace: numbers.pace,
        speed_kph: numbers.speed_kph,
        incline_percent: numbers.incline_percent,
        resistance_level: numbers.resistance_level,
        category: classification.category,
        workout_type: classification.workout_type,
        target: classification.target,
        note: extract_note(segment),
    })
}

/// Parse already normalized text into workouts, one per recognizable segment
pub fn parse(normalized_text: &str) -> Vec<Workout> {
    let workouts: Vec<Workout> = split_segments(normalized_text)
        .into_iter()
        .filter_map(parse_segment)
        .collect();

    tracing::debug!(count = workouts.len(), "Parsed workouts");
    workouts
}

/// Normalize raw text, then parse it
pub fn parse_text(raw_text: &str) -> Vec<Workout> {
    parse(&normalize(raw_text))
}
