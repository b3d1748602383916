use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a taxonomy value cannot be parsed from a string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaxonomyParseError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
    #[error("Unknown workout type: {0}")]
    UnknownType(String),
    #[error("Unknown target: {0}")]
    UnknownTarget(String),
}

/// Where the workout happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Gym,
    Snowboard,
    Running,
    Sports,
    Home,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Gym,
        Category::Snowboard,
        Category::Running,
        Category::Sports,
        Category::Home,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Gym => "gym",
            Category::Snowboard => "snowboard",
            Category::Running => "running",
            Category::Sports => "sports",
            Category::Home => "home",
        }
    }

    /// Korean display label
    pub fn label(&self) -> &'static str {
        match self {
            Category::Gym => "헬스",
            Category::Snowboard => "스노보드",
            Category::Running => "러닝",
            Category::Sports => "스포츠",
            Category::Home => "홈트",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = TaxonomyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TaxonomyParseError::UnknownCategory(s.to_string()))
    }
}

/// Physiological mode of the workout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutType {
    Strength,
    Cardio,
    Flexibility,
    Skill,
    #[default]
    Unknown,
}

impl WorkoutType {
    pub const ALL: [WorkoutType; 5] = [
        WorkoutType::Strength,
        WorkoutType::Cardio,
        WorkoutType::Flexibility,
        WorkoutType::Skill,
        WorkoutType::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutType::Strength => "strength",
            WorkoutType::Cardio => "cardio",
            WorkoutType::Flexibility => "flexibility",
            WorkoutType::Skill => "skill",
            WorkoutType::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WorkoutType::Strength => "근력",
            WorkoutType::Cardio => "유산소",
            WorkoutType::Flexibility => "유연성",
            WorkoutType::Skill => "기술",
            WorkoutType::Unknown => "기타",
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutType {
    type Err = TaxonomyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WorkoutType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TaxonomyParseError::UnknownType(s.to_string()))
    }
}

/// Body region emphasis, only meaningful for strength workouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    Core,
    Upper,
    Lower,
    Full,
    None,
}

impl Target {
    pub const ALL: [Target; 5] = [
        Target::Core,
        Target::Upper,
        Target::Lower,
        Target::Full,
        Target::None,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Target::Core => "core",
            Target::Upper => "upper",
            Target::Lower => "lower",
            Target::Full => "full",
            Target::None => "none",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Target {
    type Err = TaxonomyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Target::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TaxonomyParseError::UnknownTarget(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(Category::default(), Category::Gym);
        assert_eq!(WorkoutType::default(), WorkoutType::Unknown);
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("snowboard".parse::<Category>(), Ok(Category::Snowboard));
        assert_eq!(" GYM ".parse::<Category>(), Ok(Category::Gym));
        assert!(matches!(
            "pool".parse::<Category>(),
            Err(TaxonomyParseError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_type_round_trips_through_display() {
        for t in WorkoutType::ALL {
            assert_eq!(t.to_string().parse::<WorkoutType>(), Ok(t));
        }
    }

    #[test]
    fn test_serde_uses_lowercase() {
        let json = serde_json::to_string(&Target::Upper).unwrap();
        assert_eq!(json, "\"upper\"");
    }
}
