use serde::Serialize;

use crate::{select_tips, Answers, Stress, StressLevel, StressPoints, Tip};

/// Everything shown to the user for one set of answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prediction {
    pub score: i64,
    pub label: &'static str,
    pub emoji: &'static str,
    pub color: &'static str,
    pub message: &'static str,
    pub tips: Vec<Tip>,
    #[serde(skip)]
    pub level: StressLevel,
    #[serde(skip)]
    pub points: StressPoints,
}

pub fn predict(answers: &Answers) -> Prediction {
    let points = StressPoints::from(answers);
    let score = points.score();
    let level = points.level();
    tracing::debug!(?answers, points = ?points.scores(), score, ?level, "stress predicted");
    Prediction {
        score,
        label: level.label(),
        emoji: level.emoji(),
        color: level.color(),
        message: level.message(),
        tips: select_tips(answers),
        level,
        points,
    }
}
