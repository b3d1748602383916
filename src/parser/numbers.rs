//! Numeric field extraction.
//!
//! Every rule runs against the original segment. Where two fields share a
//! surface form (킬로 for weight or distance, 분 for pace or duration) the tie is
//! broken by the order of the assignments in [`extract_numbers`].

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

/// Largest minute count still read as a pace (minutes per km) rather than a duration
pub const PACE_MINUTE_THRESHOLD: u32 = 10;

/// Numeric fields found in a segment; `None` where nothing matched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedNumbers {
    pub sets: Option<u32>,
    pub reps: Option<u32>,
    pub weight_kg: Option<f64>,
    pub duration_min: Option<u32>,
    pub distance_km: Option<f64>,
    pub pace: Option<String>,
    pub speed_kph: Option<f64>,
    pub incline_percent: Option<u32>,
    pub resistance_level: Option<u32>,
}

macro_rules! pattern {
    ($re:expr) => {
        Lazy::new(|| Regex::new($re).expect("numeric pattern must compile"))
    };
}

static SETS: Lazy<Regex> = pattern!(r"(\d+)\s*세트");
static REPS: Lazy<Regex> = pattern!(r"(\d+)\s*(?:회|개|번)");
static WEIGHT: Lazy<Regex> = pattern!(r"(?i)(\d+(?:\.\d+)?)\s*(?:kg|킬로|키로)");
static DISTANCE: Lazy<Regex> = pattern!(r"(?i)(\d+(?:\.\d+)?)\s*(?:km|킬로|키로)");
static PACE_MIN_SEC: Lazy<Regex> = pattern!(r"(\d+)\s*분\s*(\d+)\s*초");
// Group 2 and 3 mark a minute count that is part of "N분간" or "N분 M초"
static PACE_MIN: Lazy<Regex> = pattern!(r"(\d+)\s*분(간)?(\s*\d+\s*초)?");
static PACE_COLON: Lazy<Regex> = pattern!(r"(\d+):(\d+)");
static DURATION_MIN: Lazy<Regex> = pattern!(r"(\d+)\s*분(?:간)?");
static DURATION_HOURS: Lazy<Regex> = pattern!(r"(\d+(?:\.\d+)?)\s*시간");
static MULTIPLIER: Lazy<Regex> = pattern!(r"(?i)(\d+)\s*x\s*(\d+)");
static SPEED: Lazy<Regex> =
    pattern!(r"(?i)시속\s*(\d+(?:\.\d+)?)\s*(?:km|킬로|키로)?\s*(?:속도로|로|/h|퍼아워)?");
static INCLINE: Lazy<Regex> = pattern!(r"(?:인클라인|경사|오르막)\s*(\d+)\s*(?:%|도)?");
static RESISTANCE: Lazy<Regex> = pattern!(r"(?:레벨|저항|기어)\s*(\d+)");

fn parse_group<T: std::str::FromStr>(caps: &Captures<'_>, index: usize) -> Option<T> {
    caps.get(index).and_then(|m| m.as_str().parse().ok())
}

fn first_int(re: &Regex, text: &str) -> Option<u32> {
    re.captures(text).and_then(|caps| parse_group(&caps, 1))
}

fn first_decimal(re: &Regex, text: &str) -> Option<f64> {
    re.captures(text).and_then(|caps| parse_group(&caps, 1))
}

/// "N분" on its own, not "N분간" and not the minutes of "N분 M초"
fn bare_minutes(text: &str) -> Option<u32> {
    PACE_MIN
        .captures_iter(text)
        .find(|caps| caps.get(2).is_none() && caps.get(3).is_none())
        .and_then(|caps| parse_group(&caps, 1))
}

fn format_pace(minutes: &str, seconds: &str) -> String {
    format!("{}:{:0>2}", minutes, seconds)
}

/// Extract every numeric field from a segment
pub fn extract_numbers(segment: &str) -> ExtractedNumbers {
    let mut out = ExtractedNumbers::default();

    out.sets = first_int(&SETS, segment);
    out.reps = first_int(&REPS, segment);

    // Weight and distance share 킬로/키로; a weight anywhere in the segment wins
    out.weight_kg = first_decimal(&WEIGHT, segment);
    if out.weight_kg.is_none() {
        out.distance_km = first_decimal(&DISTANCE, segment);
    }

    // Pace: each later form overwrites an earlier one, colon form last
    if let Some(caps) = PACE_MIN_SEC.captures(segment) {
        out.pace = Some(format_pace(&caps[1], &caps[2]));
    }
    if let Some(minutes) = bare_minutes(segment) {
        if minutes <= PACE_MINUTE_THRESHOLD {
            out.pace = Some(format!("{}:00", minutes));
        }
    }
    if let Some(caps) = PACE_COLON.captures(segment) {
        out.pace = Some(format_pace(&caps[1], &caps[2]));
    }

    // Minutes only count as duration when they were not read as a pace
    if out.pace.is_none() {
        out.duration_min = first_int(&DURATION_MIN, segment);
    }
    // Hours always win over minutes
    if let Some(hours) = DURATION_HOURS
        .captures(segment)
        .and_then(|caps| parse_group::<f64>(&caps, 1))
    {
        out.duration_min = Some((hours * 60.0).round() as u32);
    }

    // "NxM" means N reps for M sets and overrides the counter words
    if let Some(caps) = MULTIPLIER.captures(segment) {
        if let (Some(reps), Some(sets)) = (parse_group(&caps, 1), parse_group(&caps, 2)) {
            out.reps = Some(reps);
            out.sets = Some(sets);
        }
    }

    // The speed phrase is read after distance, so its own unit may already be the distance
    if let Some(speed_kph) = first_decimal(&SPEED, segment) {
        out.speed_kph = Some(speed_kph);
        if let (Some(minutes), None) = (out.duration_min, out.distance_km) {
            let derived = speed_kph * minutes as f64 / 60.0;
            tracing::debug!(speed_kph, minutes, derived, "Derived distance from speed");
            out.distance_km = Some(derived);
        }
    }

    out.incline_percent = first_int(&INCLINE, segment);
    out.resistance_level = first_int(&RESISTANCE, segment);

    out
}
