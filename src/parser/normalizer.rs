//! Lexical normalization of dictated workout text.
//!
//! Speech recognition and casual typing produce many spellings of the same
//! exercise. The rule table below collapses them into the canonical names the
//! rest of the parser knows about.

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

/// An ordered (pattern, canonical replacement) pair
#[derive(Debug)]
pub struct NormalizationRule {
    pub pattern: Regex,
    pub replacement: &'static str,
}

impl NormalizationRule {
    fn new(pattern: &str, replacement: &'static str) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("normalization rule pattern must compile"),
            replacement,
        }
    }

    /// Replace every match in `text`
    pub fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, NoExpand(self.replacement))
            .into_owned()
    }
}

// Order is load-bearing: later rules consume the output of earlier ones
// (스쿼드 -> 스쿼트 before 바벨 스쿼트 -> 스쿼트, 런닝 -> 러닝 before 러닝 머신 -> 러닝머신).
static RULES: Lazy<Vec<NormalizationRule>> = Lazy::new(|| {
    vec![
        // Units
        NormalizationRule::new(r"[킬키]로\s*그램", "kg"),
        NormalizationRule::new(r"[킬키]로\s*미터", "km"),
        NormalizationRule::new(r"셋트|쎄트", "세트"),
        // Strength
        NormalizationRule::new(
            r"사레레|사이드\s*[레래][터러]럴\s*레이즈|사이드\s*레이즈",
            "사이드 레터럴 레이즈",
        ),
        NormalizationRule::new(r"스쿼드|스퀏|스쿠앗", "스쿼트"),
        NormalizationRule::new(r"(?:(?:바벨|백)\s*)+스쿼트", "스쿼트"),
        NormalizationRule::new(r"데[드들]\s*리프트", "데드리프트"),
        NormalizationRule::new(r"벤치(?:\s*프[레래]스)?", "벤치프레스"),
        NormalizationRule::new(
            r"오버\s*헤드\s*프[레래]스|밀리터리\s*프[레래]스|숄더\s*프[레래]스",
            "오버헤드 프레스",
        ),
        NormalizationRule::new(r"레그\s*프[레래]스", "레그 프레스"),
        NormalizationRule::new(r"[랫렛]\s*풀\s*다운", "랫풀다운"),
        NormalizationRule::new(r"턱걸이|풀\s*업", "풀업"),
        NormalizationRule::new(r"팔굽혀\s*펴기|푸[쉬시]\s*업", "푸시업"),
        NormalizationRule::new(r"플랭그|프랭크", "플랭크"),
        NormalizationRule::new(r"버[피핏](?:\s*테스트)+|버핏", "버피"),
        NormalizationRule::new(r"바이셉\s*컬|이두\s*컬|덤벨\s*컬", "바이셉스 컬"),
        // Cardio
        NormalizationRule::new(r"런닝", "러닝"),
        NormalizationRule::new(r"달리기|조깅", "러닝"),
        NormalizationRule::new(r"트레드\s*밀|러닝\s+머신", "러닝머신"),
        NormalizationRule::new(r"천국의?\s*계단|스텝\s*밀", "천국의 계단"),
        NormalizationRule::new(r"로잉(?:\s*머신)?", "로잉머신"),
        NormalizationRule::new(r"실내\s*자전거|자전거|스피닝|싸이클", "사이클"),
        // Other
        NormalizationRule::new(r"스노우?\s*보드", "스노보드"),
        NormalizationRule::new(r"스트래칭", "스트레칭"),
    ]
});

/// The normalization rules in application order
pub fn rules() -> &'static [NormalizationRule] {
    &RULES
}

/// Trim `text` and rewrite colloquial exercise names into canonical ones
pub fn normalize(text: &str) -> String {
    normalize_with(text, RULES.iter())
}

/// Apply `rules` in the given order, each over the output of the previous one
pub fn normalize_with<'a, I>(text: &str, rules: I) -> String
where
    I: IntoIterator<Item = &'a NormalizationRule>,
{
    rules
        .into_iter()
        .fold(text.trim().to_string(), |acc, rule| {
            let next = rule.apply(&acc);
            if next != acc {
                tracing::trace!(pattern = %rule.pattern, "{} -> {}", acc, next);
            }
            next
        })
}
