use std::path::Path;

use clap::Parser;
use questionbank::{ConvertError, Result, convert};
use tracing_subscriber::EnvFilter;

/// Fixed input path, resolved against the working directory.
const INPUT_PATH: &str = "question.txt";
/// Fixed output path, created or overwritten on every run.
const OUTPUT_PATH: &str = "questions.xlsx";

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(_cli: Cli) -> Result<()> {
    init_tracing()?;

    let input = Path::new(INPUT_PATH);
    if !input.exists() {
        return Err(ConvertError::MissingInput(input.to_path_buf()));
    }

    convert::text_to_excel(input, Path::new(OUTPUT_PATH))
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| ConvertError::Logging(error.to_string()))
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Group the questions in question.txt into one spreadsheet row each."
)]
struct Cli {}
