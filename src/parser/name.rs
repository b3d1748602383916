use once_cell::sync::Lazy;
use regex::Regex;

use super::registry::find_known_exercise;

/// Intensity adverbs that never name an exercise
pub(crate) const INTENSITY_ADVERBS: &[&str] = &[
    "빡세게",
    "가볍게",
    "천천히",
    "빠르게",
    "열심히",
    "힘들게",
    "쉽게",
    "무겁게",
];

static NUMERIC_TOKENS: Lazy<Regex> = Lazy::new(|| {
    let adverbs = INTENSITY_ADVERBS.join("|");
    Regex::new(&format!(
        r"(?i)\([^)]*\)|\d+\s*x\s*\d+|\d+\s*:\s*\d+|\d+(?:\.\d+)?\s*(?:시간|분간|분|초)|\d+\s*(?:세트|회|개|번)|\d+(?:\.\d+)?\s*(?:kg|km|킬로|키로)|{adverbs}"
    ))
    .expect("numeric token pattern must compile")
});

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern must compile"));

/// Find the exercise name in a segment.
///
/// A known exercise contained in the segment wins. Otherwise numbers, units and
/// intensity adverbs are stripped and whatever is left is used, if it is longer
/// than one character.
pub fn find_name(segment: &str) -> Option<String> {
    if let Some(known) = find_known_exercise(segment) {
        return Some(known.to_string());
    }

    let stripped = NUMERIC_TOKENS.replace_all(segment, " ");
    let residue = WHITESPACE.replace_all(stripped.trim(), " ");

    if residue.chars().count() > 1 {
        Some(residue.into_owned())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_exercise_wins() {
        assert_eq!(find_name("스쿼트 80kg 4세트 8회"), Some("스쿼트".to_string()));
        assert_eq!(find_name("오늘 데드리프트 5x5"), Some("데드리프트".to_string()));
    }

    #[test]
    fn test_residue_after_stripping_numbers() {
        assert_eq!(find_name("수영 30분"), Some("수영".to_string()));
        assert_eq!(find_name("케틀벨 스윙 24kg 3x15"), Some("케틀벨 스윙".to_string()));
        assert_eq!(find_name("줄넘기 1000번 빡세게"), Some("줄넘기".to_string()));
        assert_eq!(find_name("등산 2.5시간"), Some("등산".to_string()));
        assert_eq!(find_name("수영 (자유형) 1km"), Some("수영".to_string()));
    }

    #[test]
    fn test_nothing_left() {
        assert_eq!(find_name("빡세게"), None);
        assert_eq!(find_name("30분"), None);
        assert_eq!(find_name("5:30 3세트"), None);
        assert_eq!(find_name("a 10kg"), None);
    }
}
