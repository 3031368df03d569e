use clap::Parser;
use exam_stresscheck::bulk::score_row;
use exam_stresscheck::{read_bulk, Error, InputPolicy};
use std::fs::File;
use std::io::BufReader;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Scores every row of a CSV file of answers.
#[derive(Parser)]
struct Args {
    /// CSV with columns id,days_until_exam,hours_studied,confidence,sleep_quality,exams_this_week
    path: String,

    /// Print one JSON object per row
    #[arg(long)]
    json: bool,

    /// How answers outside their declared range are treated
    #[arg(long, env = "STRESSCHECK_INPUT_POLICY", value_enum, default_value_t = InputPolicy::PassThrough)]
    input_policy: InputPolicy,
}

fn main() -> Result<(), Error> {
    let args = Args::parse();
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let reader = BufReader::new(File::open(&args.path)?);
    for (line, row) in read_bulk(reader).enumerate() {
        match score_row(row, args.input_policy, args.json) {
            Ok(output) => println!("{}", output),
            Err(e) => tracing::warn!(row = line + 1, "skipped: {}", e),
        }
    }
    Ok(())
}
