use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Error;

/// 設問の項目
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    DaysUntilExam,
    HoursStudied,
    Confidence,
    SleepQuality,
    ExamsThisWeek,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::DaysUntilExam,
        Field::HoursStudied,
        Field::Confidence,
        Field::SleepQuality,
        Field::ExamsThisWeek,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Field::DaysUntilExam => "days_until_exam",
            Field::HoursStudied => "hours_studied",
            Field::Confidence => "confidence",
            Field::SleepQuality => "sleep_quality",
            Field::ExamsThisWeek => "exams_this_week",
        }
    }

    /// Short key used by the web form.
    pub fn alias(self) -> &'static str {
        match self {
            Field::DaysUntilExam => "days",
            Field::HoursStudied => "hours",
            Field::Confidence => "confidence",
            Field::SleepQuality => "sleep",
            Field::ExamsThisWeek => "exams",
        }
    }

    /// Declared answer range. Scoring does not enforce it.
    pub fn range(self) -> RangeInclusive<i32> {
        match self {
            Field::DaysUntilExam => 1..=60,
            Field::HoursStudied => 0..=100,
            Field::Confidence | Field::SleepQuality => 1..=5,
            Field::ExamsThisWeek => 1..=10,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One person's five answers.
///
/// Values are kept exactly as given, out-of-range ones included. Range
/// handling belongs to [`crate::InputPolicy`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Answers {
    #[serde(alias = "days")]
    pub days_until_exam: i32,
    #[serde(alias = "hours")]
    pub hours_studied: i32,
    pub confidence: i32,
    #[serde(alias = "sleep")]
    pub sleep_quality: i32,
    #[serde(alias = "exams")]
    pub exams_this_week: i32,
}

impl Answers {
    pub fn new(
        days_until_exam: i32,
        hours_studied: i32,
        confidence: i32,
        sleep_quality: i32,
        exams_this_week: i32,
    ) -> Self {
        Self {
            days_until_exam,
            hours_studied,
            confidence,
            sleep_quality,
            exams_this_week,
        }
    }

    pub fn get(&self, field: Field) -> i32 {
        match field {
            Field::DaysUntilExam => self.days_until_exam,
            Field::HoursStudied => self.hours_studied,
            Field::Confidence => self.confidence,
            Field::SleepQuality => self.sleep_quality,
            Field::ExamsThisWeek => self.exams_this_week,
        }
    }

    /// Copy with one answer replaced.
    pub fn with(mut self, field: Field, value: i32) -> Self {
        match field {
            Field::DaysUntilExam => self.days_until_exam = value,
            Field::HoursStudied => self.hours_studied = value,
            Field::Confidence => self.confidence = value,
            Field::SleepQuality => self.sleep_quality = value,
            Field::ExamsThisWeek => self.exams_this_week = value,
        }
        self
    }

    /// 受信した JSON から回答を取り出す
    ///
    /// Each field may be sent under its full name or its short alias, as a
    /// JSON integer, an integral float or a numeric string. Anything else is
    /// rejected rather than defaulted.
    pub fn from_json(value: &Value) -> Result<Self, Error> {
        let object = value
            .as_object()
            .ok_or_else(|| Error::InvalidAnswers {
                field: None,
                reason: "expected a JSON object".to_string(),
            })?;
        Field::ALL.iter().try_fold(Answers::default(), |answers, &field| -> Result<Answers, Error> {
            let raw = object
                .get(field.name())
                .or_else(|| object.get(field.alias()))
                .ok_or_else(|| Error::InvalidAnswers {
                    field: Some(field),
                    reason: format!("missing field `{}`", field),
                })?;
            Ok(answers.with(field, integral(field, raw)?))
        })
    }
}

fn integral(field: Field, value: &Value) -> Result<i32, Error> {
    let parsed = match value {
        Value::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|float| float.fract() == 0.0)
                .map(|float| float as i64)
        }),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    };
    parsed
        .and_then(|number| i32::try_from(number).ok())
        .ok_or_else(|| Error::InvalidAnswers {
            field: Some(field),
            reason: format!("`{}` must be an integer, got {}", field, value),
        })
}
