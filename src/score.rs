use crate::{Answers, Stress};

/// 項目ごとのストレス点
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StressPoints {
    pub days_until_exam: i64,
    pub hours_studied: i64,
    pub confidence: i64,
    pub sleep_quality: i64,
    pub exams_this_week: i64,
}

impl From<&Answers> for StressPoints {
    fn from(answers: &Answers) -> Self {
        Self {
            days_until_exam: days_points(answers.days_until_exam),
            hours_studied: hours_points(answers.hours_studied),
            confidence: flipped_points(answers.confidence),
            sleep_quality: flipped_points(answers.sleep_quality),
            exams_this_week: exams_points(answers.exams_this_week),
        }
    }
}

impl Stress for StressPoints {
    fn scores(&self) -> [i64; 5] {
        [
            self.days_until_exam,
            self.hours_studied,
            self.confidence,
            self.sleep_quality,
            self.exams_this_week,
        ]
    }
}

/// Overall stress score for a set of answers.
pub fn calculate_stress(answers: &Answers) -> i64 {
    StressPoints::from(answers).score()
}

// Ladders are checked top-down; the first rung reached wins.
fn days_points(days: i32) -> i64 {
    match days {
        14.. => 10,
        7.. => 40,
        3.. => 70,
        _ => 95,
    }
}

fn hours_points(hours: i32) -> i64 {
    match hours {
        20.. => 10,
        10.. => 30,
        5.. => 60,
        _ => 85,
    }
}

/// 1〜5 の自己評価を逆転させる。範囲外もそのまま計算する。
fn flipped_points(rating: i32) -> i64 {
    (6 - i64::from(rating)) * 20
}

fn exams_points(exams: i32) -> i64 {
    match exams {
        1 => 20,
        2 => 45,
        3 => 65,
        _ => 88,
    }
}
