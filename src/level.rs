use serde::Serialize;

/// ストレス度の段階
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StressLevel {
    Low,
    Moderate,
    High,
    VeryHigh,
}

/// Upper bounds are inclusive. Scores outside 0..=100 land in the nearest
/// end band.
pub fn classify(score: i64) -> StressLevel {
    match score {
        score if score <= 25 => StressLevel::Low,
        score if score <= 50 => StressLevel::Moderate,
        score if score <= 75 => StressLevel::High,
        _ => StressLevel::VeryHigh,
    }
}

impl StressLevel {
    pub fn label(self) -> &'static str {
        match self {
            StressLevel::Low => "Low Stress",
            StressLevel::Moderate => "Moderate Stress",
            StressLevel::High => "High Stress",
            StressLevel::VeryHigh => "Very High Stress",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            StressLevel::Low => "😎",
            StressLevel::Moderate => "🙂",
            StressLevel::High => "😰",
            StressLevel::VeryHigh => "🆘",
        }
    }

    /// Hex color: teal, blue, amber, red.
    pub fn color(self) -> &'static str {
        match self {
            StressLevel::Low => "#00f5c4",
            StressLevel::Moderate => "#3b82f6",
            StressLevel::High => "#f59e0b",
            StressLevel::VeryHigh => "#ef4444",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            StressLevel::Low => "You're well-prepared and calm. Keep the momentum going!",
            StressLevel::Moderate => {
                "A little nervous — totally normal! Stay consistent and trust your prep."
            }
            StressLevel::High => {
                "You're feeling the pressure. Take short breaks and breathe deeply."
            }
            StressLevel::VeryHigh => {
                "Don't panic! Make a simple plan right now and get some sleep tonight."
            }
        }
    }
}
