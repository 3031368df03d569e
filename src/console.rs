use std::io::{BufRead, ErrorKind, Write};

use crate::questions::{Question, Questionnaire};
use crate::{Answers, Error, Prediction};

const RULE: &str = "==================================================";

/// 回答が得られるまで同じ設問を繰り返す
///
/// Returns [`Error::Io`] with `UnexpectedEof` if input ends first.
pub fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    number: usize,
    question: &Question,
) -> Result<i32, Error> {
    let mut buffer = String::new();
    loop {
        write!(output, "{}. {}: ", number, question.prompt())?;
        output.flush()?;
        buffer.clear();
        if input.read_line(&mut buffer)? == 0 {
            return Err(std::io::Error::new(ErrorKind::UnexpectedEof, "no answer given").into());
        }
        match buffer.trim().parse::<i32>() {
            Ok(value) if question.field.range().contains(&value) => return Ok(value),
            Ok(_) => writeln!(
                output,
                "  ⚠️  Please enter a number between {} and {}.",
                question.min(),
                question.max()
            )?,
            Err(_) => writeln!(output, "  ⚠️  That doesn't look like a number. Try again!")?,
        }
    }
}

pub fn collect_answers<R: BufRead, W: Write>(
    questionnaire: &Questionnaire,
    input: &mut R,
    output: &mut W,
) -> Result<Answers, Error> {
    writeln!(output)?;
    writeln!(output, "{}", RULE)?;
    writeln!(output, "      📚 {} 📚", questionnaire.title)?;
    writeln!(output, "{}", RULE)?;
    for line in &questionnaire.intro {
        writeln!(output, "{}", line)?;
    }
    writeln!(output)?;

    let mut answers = Answers::default();
    for (index, question) in questionnaire.questions.iter().enumerate() {
        let value = ask(input, output, index + 1, question)?;
        answers = answers.with(question.field, value);
    }
    Ok(answers)
}

pub fn render<W: Write>(prediction: &Prediction, output: &mut W) -> Result<(), Error> {
    writeln!(output)?;
    writeln!(output, "{}", RULE)?;
    writeln!(output, "           📊 YOUR RESULTS")?;
    writeln!(output, "{}", RULE)?;
    writeln!(output, "  Stress Score : {} / 100", prediction.score)?;
    writeln!(
        output,
        "  Stress Level : {} {}",
        prediction.emoji,
        prediction.label.to_uppercase()
    )?;
    writeln!(output, "  {}", prediction.message)?;
    writeln!(output)?;
    writeln!(output, "  💡 TIPS FOR YOU:")?;
    for tip in &prediction.tips {
        writeln!(output, "     • {} {}", tip.icon, tip.text)?;
    }
    writeln!(output)?;
    writeln!(output, "{}", RULE)?;
    writeln!(output, "  Good luck on your exam! You've got this! 🌟")?;
    writeln!(output, "{}", RULE)?;
    writeln!(output)?;
    Ok(())
}
