/// Canonical exercise names, in match priority order.
///
/// Longer names that contain a shorter one (러닝머신 / 러닝) must come first.
const KNOWN_EXERCISES: &[&str] = &[
    "스쿼트",
    "데드리프트",
    "벤치프레스",
    "오버헤드 프레스",
    "레그 프레스",
    "레그 익스텐션",
    "레그 컬",
    "런지",
    "풀업",
    "랫풀다운",
    "바벨 로우",
    "사이드 레터럴 레이즈",
    "바이셉스 컬",
    "딥스",
    "푸시업",
    "플랭크",
    "크런치",
    "버피",
    "러닝머신",
    "러닝",
    "천국의 계단",
    "로잉머신",
    "사이클",
    "스트레칭",
];

pub fn known_exercises() -> &'static [&'static str] {
    KNOWN_EXERCISES
}

pub fn is_known_exercise(name: &str) -> bool {
    KNOWN_EXERCISES.contains(&name)
}

/// First known exercise contained in `segment`
pub fn find_known_exercise(segment: &str) -> Option<&'static str> {
    KNOWN_EXERCISES
        .iter()
        .copied()
        .find(|name| segment.contains(name))
}
