pub mod answers;
pub mod bulk;
pub mod config;
pub mod console;
pub mod level;
pub mod policy;
pub mod prediction;
pub mod questions;
pub mod score;
pub mod tips;
pub mod web;

pub use answers::{Answers, Field};
pub use bulk::read_bulk;
pub use config::Config;
pub use level::{classify, StressLevel};
pub use policy::InputPolicy;
pub use prediction::{predict, Prediction};
pub use questions::QUESTIONS;
pub use score::{calculate_stress, StressPoints};
pub use tips::{select_tips, Tip};

use thiserror::Error;

/// Anything that can be reduced to the five per-dimension stress points.
pub trait Stress {
    /// Points in questionnaire order: days, hours, confidence, sleep, exams.
    ///
    /// Computed in `i64` so that any `i32` answer scores without overflow.
    fn scores(&self) -> [i64; 5];

    /// Rounded mean of [`Stress::scores`].
    ///
    /// The sum of five integers divided by five can only end in .0, .2, .4,
    /// .6 or .8, so there is never a tie to break. Half-to-even is used to
    /// keep the rule explicit.
    fn score(&self) -> i64 {
        let sum: i64 = self.scores().iter().sum();
        (sum as f64 / 5.0).round_ties_even() as i64
    }

    fn level(&self) -> StressLevel {
        classify(self.score())
    }
}

#[derive(Debug, Error)]
pub enum Error {
    /// 回答欠落、または整数ではない
    ///
    /// `field` is `None` when the input is not a mapping at all.
    #[error("invalid answers: {reason}")]
    InvalidAnswers {
        field: Option<Field>,
        reason: String,
    },
    /// 想定範囲外 (reject ポリシーのみ)
    #[error("`{field}` must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: Field,
        value: i32,
        min: i32,
        max: i32,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod test {
    use super::*;

    struct Fixed([i64; 5]);

    impl Stress for Fixed {
        fn scores(&self) -> [i64; 5] {
            self.0
        }
    }

    #[test]
    fn test_score_rounds_to_nearest() {
        // 93.6
        assert_eq!(Fixed([95, 85, 100, 100, 88]).score(), 94);
        // 16.0
        assert_eq!(Fixed([10, 10, 20, 20, 20]).score(), 16);
        // 16.4
        assert_eq!(Fixed([12, 10, 20, 20, 20]).score(), 16);
        // 16.6
        assert_eq!(Fixed([13, 10, 20, 20, 20]).score(), 17);
        // 16.8
        assert_eq!(Fixed([14, 10, 20, 20, 20]).score(), 17);
    }

    #[test]
    fn test_score_rounds_negative_mean() {
        // -4.4 and -4.6
        assert_eq!(Fixed([-22, 0, 0, 0, 0]).score(), -4);
        assert_eq!(Fixed([-23, 0, 0, 0, 0]).score(), -5);
    }

    #[test]
    fn test_mean_of_five_never_ties() {
        for sum in -1000..1000_i64 {
            let mean = sum as f64 / 5.0;
            assert_ne!((mean - mean.trunc()).abs(), 0.5);
        }
    }

    #[test]
    fn test_score_of_extreme_points() {
        // i32::MIN confidence: (6 + 2147483648) * 20
        assert_eq!(Fixed([10, 10, 42_949_673_080, 20, 20]).score(), 8_589_934_628);
        // i32::MAX confidence: (6 - 2147483647) * 20
        assert_eq!(Fixed([10, 10, -42_949_672_820, 20, 20]).score(), -8_589_934_552);
    }

    #[test]
    fn test_level_from_score() {
        assert_eq!(Fixed([10, 10, 20, 20, 20]).level(), StressLevel::Low);
        assert_eq!(Fixed([95, 85, 100, 100, 88]).level(), StressLevel::VeryHigh);
    }

    #[test]
    fn test_error_messages() {
        let error = Error::OutOfRange {
            field: Field::Confidence,
            value: 7,
            min: 1,
            max: 5,
        };
        assert_eq!(error.to_string(), "`confidence` must be between 1 and 5, got 7");
        assert_eq!(
            Error::InvalidAnswers {
                field: Some(Field::DaysUntilExam),
                reason: "missing field `days_until_exam`".to_string(),
            }
            .to_string(),
            "invalid answers: missing field `days_until_exam`"
        );
    }
}
