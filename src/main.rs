use std::io::{stdin, stdout};

use exam_stresscheck::console::{collect_answers, render};
use exam_stresscheck::{predict, Error, QUESTIONS};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Interactive exam stress check. Every answer is re-asked until it is in
/// range, so no input policy applies here.
fn main() -> Result<(), Error> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let mut input = stdin().lock();
    let mut output = stdout().lock();
    let answers = collect_answers(&QUESTIONS, &mut input, &mut output)?;
    render(&predict(&answers), &mut output)?;
    Ok(())
}
