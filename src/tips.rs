use serde::Serialize;

use crate::Answers;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Tip {
    pub icon: &'static str,
    pub text: &'static str,
}

struct Rule {
    applies: fn(&Answers) -> bool,
    tip: Tip,
}

/// Checked in this order; every matching rule contributes its tip.
const RULES: [Rule; 5] = [
    Rule {
        applies: poor_sleep,
        tip: Tip {
            icon: "🛌",
            text: "Prioritise sleep — even one good night massively improves memory and focus.",
        },
    },
    Rule {
        applies: little_study,
        tip: Tip {
            icon: "📖",
            text: "Try the Pomodoro technique: 25 min study, 5 min break. Small sessions add up fast.",
        },
    },
    Rule {
        applies: exam_imminent,
        tip: Tip {
            icon: "⚡",
            text: "Focus only on the highest-priority topics. No time to cover everything — be strategic.",
        },
    },
    Rule {
        applies: low_confidence,
        tip: Tip {
            icon: "💪",
            text: "Review past exam papers or flashcards — seeing familiar questions builds confidence quickly.",
        },
    },
    Rule {
        applies: crowded_week,
        tip: Tip {
            icon: "📅",
            text: "Make a mini timetable — assign each exam its own colour-coded study block.",
        },
    },
];

pub const GREAT_SHAPE: Tip = Tip {
    icon: "✅",
    text: "You're in great shape! Stay consistent, eat well, and trust your preparation.",
};

fn poor_sleep(answers: &Answers) -> bool {
    answers.sleep_quality <= 2
}

fn little_study(answers: &Answers) -> bool {
    answers.hours_studied < 5
}

fn exam_imminent(answers: &Answers) -> bool {
    answers.days_until_exam <= 3
}

fn low_confidence(answers: &Answers) -> bool {
    answers.confidence <= 2
}

fn crowded_week(answers: &Answers) -> bool {
    answers.exams_this_week >= 3
}

/// 回答に応じたアドバイス。空にはならない。
pub fn select_tips(answers: &Answers) -> Vec<Tip> {
    let tips: Vec<Tip> = RULES
        .iter()
        .filter(|rule| (rule.applies)(answers))
        .map(|rule| rule.tip)
        .collect();
    if tips.is_empty() {
        vec![GREAT_SHAPE]
    } else {
        tips
    }
}
