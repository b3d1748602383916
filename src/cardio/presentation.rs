use super::{map_to_cardio_category, CardioCategory};

impl CardioCategory {
    pub fn icon(&self) -> &'static str {
        match self {
            CardioCategory::Running => "🏃",
            CardioCategory::Stepmill => "🪜",
            CardioCategory::Rowing => "🚣",
            CardioCategory::Cycle => "🚴",
            CardioCategory::Other => "💪",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CardioCategory::Running => "러닝",
            CardioCategory::Stepmill => "천국의 계단",
            CardioCategory::Rowing => "로잉",
            CardioCategory::Cycle => "사이클",
            CardioCategory::Other => "기타 유산소",
        }
    }

    /// Empty for the neutral multiplier, `×0.4` style otherwise
    pub fn multiplier_text(&self) -> String {
        let multiplier = self.multiplier();
        if multiplier == 1.0 {
            String::new()
        } else {
            format!("×{}", multiplier)
        }
    }
}

pub fn cardio_icon(name: &str) -> &'static str {
    map_to_cardio_category(name).icon()
}

pub fn cardio_multiplier_text(name: &str) -> String {
    map_to_cardio_category(name).multiplier_text()
}

pub fn cardio_category_label(name: &str) -> &'static str {
    map_to_cardio_category(name).label()
}
