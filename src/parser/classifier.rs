//! Two-axis classification of exercise names.
//!
//! `category` (where) and `type` (what kind) are decided independently from
//! keyword tables. `target` is only decided for strength exercises.

use once_cell::sync::Lazy;
use regex::Regex;

use super::registry::is_known_exercise;
use crate::models::{Category, Target, WorkoutType};

const SNOWBOARD_KEYWORDS: &[&str] = &["스노보드", "보드", "카빙", "슬로프", "지빙", "스키"];
const RUNNING_KEYWORDS: &[&str] = &["러닝", "마라톤", "인터벌 러닝", "트랙"];
const SPORTS_KEYWORDS: &[&str] = &[
    "축구", "풋살", "농구", "배구", "야구", "테니스", "배드민턴", "탁구", "골프", "볼링", "수영",
    "클라이밍",
];
const HOME_KEYWORDS: &[&str] = &["홈트", "맨몸", "푸시업", "플랭크", "크런치", "버피", "요가", "스트레칭"];

const SKILL_KEYWORDS: &[&str] = &[
    "스노보드", "보드", "카빙", "지빙", "트릭", "스키", "드리블", "스윙 연습", "서브", "skill", "drill",
];
const CARDIO_KEYWORDS: &[&str] = &[
    "러닝", "마라톤", "걷기", "워킹", "천국의 계단", "계단", "로잉", "사이클", "수영", "줄넘기",
    "버피", "인터벌", "유산소", "등산", "cardio", "running", "jogging", "treadmill", "cycling",
    "bike", "rowing", "walking",
];
const FLEXIBILITY_KEYWORDS: &[&str] = &["스트레칭", "요가", "필라테스", "폼롤러", "모빌리티"];
const STRENGTH_KEYWORDS: &[&str] = &[
    "스쿼트", "데드", "프레스", "로우", "컬", "레이즈", "익스텐션", "풀업", "친업", "딥스",
    "푸시업", "런지", "플랭크", "크런치", "덤벨", "바벨", "케틀벨", "케이블", "머신", "스미스",
];

const CORE_KEYWORDS: &[&str] = &["플랭크", "크런치", "복근", "코어", "싯업", "윗몸", "레그레이즈", "레그 레이즈"];
const UPPER_KEYWORDS: &[&str] = &[
    "벤치", "오버헤드", "숄더", "어깨", "가슴", "풀업", "친업", "랫풀", "로우", "레터럴", "바이셉스",
    "트라이셉스", "이두", "삼두", "딥스", "푸시업", "플라이",
];
const LOWER_KEYWORDS: &[&str] = &["스쿼트", "런지", "레그", "하체", "카프", "힙"];
const FULL_KEYWORDS: &[&str] = &["데드리프트", "버피", "클린", "스내치", "쓰러스터", "케틀벨", "전신"];

/// Style and intensity words recorded as the workout note
const NOTE_KEYWORDS: &[&str] = &[
    "빡세게",
    "가볍게",
    "천천히",
    "빠르게",
    "열심히",
    "힘들게",
    "무겁게",
    "드롭세트",
    "슈퍼세트",
    "인터벌",
    "워밍업",
    "쿨다운",
];

static PARENTHESIZED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(([^)]*)\)").expect("note pattern must compile"));

fn contains_any(name: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| name.contains(&k.to_lowercase()))
}

/// Where the workout happened
pub fn classify_category(name: &str) -> Category {
    let name = name.to_lowercase();
    if contains_any(&name, SNOWBOARD_KEYWORDS) {
        Category::Snowboard
    } else if contains_any(&name, RUNNING_KEYWORDS) {
        Category::Running
    } else if contains_any(&name, SPORTS_KEYWORDS) {
        Category::Sports
    } else if contains_any(&name, HOME_KEYWORDS) {
        Category::Home
    } else {
        Category::Gym
    }
}

/// What kind of exercise it is
pub fn classify_type(name: &str) -> WorkoutType {
    let lowered = name.to_lowercase();
    if contains_any(&lowered, SKILL_KEYWORDS) {
        WorkoutType::Skill
    } else if contains_any(&lowered, CARDIO_KEYWORDS) {
        WorkoutType::Cardio
    } else if contains_any(&lowered, FLEXIBILITY_KEYWORDS) {
        WorkoutType::Flexibility
    } else if contains_any(&lowered, STRENGTH_KEYWORDS) || is_known_exercise(name) {
        WorkoutType::Strength
    } else {
        WorkoutType::Unknown
    }
}

/// Body region of a strength exercise
pub fn classify_target(name: &str) -> Target {
    let name = name.to_lowercase();
    if contains_any(&name, CORE_KEYWORDS) {
        Target::Core
    } else if contains_any(&name, UPPER_KEYWORDS) {
        Target::Upper
    } else if contains_any(&name, LOWER_KEYWORDS) {
        Target::Lower
    } else if contains_any(&name, FULL_KEYWORDS) {
        Target::Full
    } else {
        Target::None
    }
}

/// Result of classifying one exercise name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub category: Category,
    pub workout_type: WorkoutType,
    pub target: Option<Target>,
}

/// Classify a name on both axes, adding a target for strength exercises
pub fn classify(name: &str) -> Classification {
    let workout_type = classify_type(name);
    let target = (workout_type == WorkoutType::Strength).then(|| classify_target(name));

    Classification {
        category: classify_category(name),
        workout_type,
        target,
    }
}

/// Note for a segment: parenthesized text first, then the first style keyword
pub fn extract_note(segment: &str) -> Option<String> {
    // Blank parentheses carry no note; fall through to the keywords
    if let Some(note) = PARENTHESIZED
        .captures_iter(segment)
        .map(|caps| caps[1].trim().to_string())
        .find(|note| !note.is_empty())
    {
        return Some(note);
    }

    NOTE_KEYWORDS
        .iter()
        .find(|k| segment.contains(*k))
        .map(|k| k.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_priority() {
        assert_eq!(classify_category("스노보드 카빙"), Category::Snowboard);
        assert_eq!(classify_category("러닝"), Category::Running);
        assert_eq!(classify_category("러닝머신"), Category::Running);
        assert_eq!(classify_category("수영"), Category::Sports);
        assert_eq!(classify_category("푸시업"), Category::Home);
        assert_eq!(classify_category("스쿼트"), Category::Gym);
        assert_eq!(classify_category("처음 보는 운동"), Category::Gym);
    }

    #[test]
    fn test_type_priority() {
        assert_eq!(classify_type("스노보드"), WorkoutType::Skill);
        assert_eq!(classify_type("러닝"), WorkoutType::Cardio);
        assert_eq!(classify_type("Treadmill"), WorkoutType::Cardio);
        assert_eq!(classify_type("요가"), WorkoutType::Flexibility);
        assert_eq!(classify_type("벤치프레스"), WorkoutType::Strength);
        assert_eq!(classify_type("처음 보는 운동"), WorkoutType::Unknown);
    }

    #[test]
    fn test_known_exercise_defaults_to_strength() {
        // 버피 is known but hits the cardio list first
        assert_eq!(classify_type("버피"), WorkoutType::Cardio);
        // no strength keyword, only registry membership
        assert_eq!(classify_type("랫풀다운"), WorkoutType::Strength);
    }

    #[test]
    fn test_target_priority() {
        assert_eq!(classify_target("플랭크"), Target::Core);
        assert_eq!(classify_target("벤치프레스"), Target::Upper);
        assert_eq!(classify_target("사이드 레터럴 레이즈"), Target::Upper);
        assert_eq!(classify_target("레그 프레스"), Target::Lower);
        assert_eq!(classify_target("스쿼트"), Target::Lower);
        assert_eq!(classify_target("데드리프트"), Target::Full);
        assert_eq!(classify_target("케이블 머신"), Target::None);
    }

    #[test]
    fn test_axes_are_independent() {
        let c = classify("스노보드");
        assert_eq!(c.category, Category::Snowboard);
        assert_eq!(c.workout_type, WorkoutType::Skill);
        assert_eq!(c.target, None);

        let c = classify("푸시업");
        assert_eq!(c.category, Category::Home);
        assert_eq!(c.workout_type, WorkoutType::Strength);
        assert_eq!(c.target, Some(Target::Upper));
    }

    #[test]
    fn test_note_prefers_parentheses() {
        assert_eq!(extract_note("스쿼트 5세트 (무릎 조심) 빡세게"), Some("무릎 조심".to_string()));
        assert_eq!(extract_note("스쿼트 5세트 빡세게"), Some("빡세게".to_string()));
        assert_eq!(extract_note("스쿼트 5세트"), None);
        assert_eq!(extract_note("스쿼트 ( ) 5세트"), None);
        assert_eq!(extract_note("스쿼트 () 5세트 빡세게"), Some("빡세게".to_string()));
    }

    #[test]
    fn test_note_keyword_list_order() {
        assert_eq!(extract_note("천천히 그리고 빡세게"), Some("빡세게".to_string()));
    }
}
