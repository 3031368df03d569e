use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::Field;

pub static QUESTIONS: Lazy<Questionnaire> = Lazy::new(|| {
    serde_json::from_str(include_str!("../resources/questions.json"))
        .expect("resources/questions.json is embedded at build time and must parse")
});

#[derive(Debug, Clone, Deserialize)]
pub struct Question {
    pub field: Field,
    pub text: String,
    /// 回答の目安。無ければ範囲を表示する
    pub hint: Option<String>,
}

impl Question {
    pub fn min(&self) -> i32 {
        *self.field.range().start()
    }

    pub fn max(&self) -> i32 {
        *self.field.range().end()
    }

    /// `How confident do you feel? (1 = not at all, 5 = very confident)`
    pub fn prompt(&self) -> String {
        match self.hint {
            Some(ref hint) => format!("{} ({})", self.text, hint),
            None => format!("{} ({}–{})", self.text, self.min(), self.max()),
        }
    }
}

/// Shape served to web clients.
#[derive(Debug, Serialize)]
pub struct QuestionView<'a> {
    pub field: Field,
    pub text: &'a str,
    pub prompt: String,
    pub min: i32,
    pub max: i32,
}

impl<'a> From<&'a Question> for QuestionView<'a> {
    fn from(question: &'a Question) -> Self {
        QuestionView {
            field: question.field,
            text: &question.text,
            prompt: question.prompt(),
            min: question.min(),
            max: question.max(),
        }
    }
}

/// 設問票のマスタ表現
#[derive(Debug, Deserialize)]
pub struct Questionnaire {
    pub title: String,
    pub intro: Vec<String>,
    pub questions: Vec<Question>,
}

impl Questionnaire {
    /// 項目を指定して設問を取得する
    pub fn question(&self, field: Field) -> Option<&Question> {
        self.questions.iter().find(|question| question.field == field)
    }

    pub fn views(&self) -> Vec<QuestionView<'_>> {
        self.questions.iter().map(QuestionView::from).collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_questions_cover_every_field_in_order() {
        let fields: Vec<Field> = QUESTIONS.questions.iter().map(|q| q.field).collect();
        assert_eq!(fields, Field::ALL.to_vec());
    }

    #[test]
    fn test_question() {
        assert_eq!(
            QUESTIONS.question(Field::Confidence).map(|q| q.text.as_str()),
            Some("How confident do you feel?")
        );
        assert!(QUESTIONS.question(Field::ExamsThisWeek).is_some());
    }

    #[test]
    fn test_prompt() {
        let days = QUESTIONS.question(Field::DaysUntilExam).unwrap();
        assert_eq!(days.prompt(), "How many days until your exam? (1–60)");
        let sleep = QUESTIONS.question(Field::SleepQuality).unwrap();
        assert_eq!(sleep.prompt(), "How is your sleep lately? (1 = terrible, 5 = great)");
        assert_eq!((sleep.min(), sleep.max()), (1, 5));
    }

    #[test]
    fn test_views() {
        let views = QUESTIONS.views();
        assert_eq!(views.len(), 5);
        assert_eq!(views[1].min, 0);
        assert_eq!(views[1].max, 100);
    }
}
