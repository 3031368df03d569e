use clap::ValueEnum;

use crate::{Answers, Error, Field};

/// What the front ends do with answers outside a field's declared range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum InputPolicy {
    /// Score the values as given.
    #[default]
    PassThrough,
    /// Pull each value into its declared range first.
    Clamp,
    /// Refuse the answers with [`Error::OutOfRange`].
    Reject,
}

impl InputPolicy {
    pub fn apply(self, answers: Answers) -> Result<Answers, Error> {
        match self {
            InputPolicy::PassThrough => Ok(answers),
            InputPolicy::Clamp => Ok(Field::ALL.iter().fold(answers, |answers, &field| {
                let range = field.range();
                let value = answers.get(field).clamp(*range.start(), *range.end());
                answers.with(field, value)
            })),
            InputPolicy::Reject => {
                for field in Field::ALL {
                    let range = field.range();
                    let value = answers.get(field);
                    if !range.contains(&value) {
                        tracing::debug!(%field, value, "answer rejected");
                        return Err(Error::OutOfRange {
                            field,
                            value,
                            min: *range.start(),
                            max: *range.end(),
                        });
                    }
                }
                Ok(answers)
            }
        }
    }
}
