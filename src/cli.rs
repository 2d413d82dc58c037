//! Command-line interface implementation for aocgen.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for aocgen.
#[derive(Parser, Debug)]
#[command(author, version, about = "aocgen: Advent of Code solution scaffolding tool", long_about = None)]
pub struct Args {
    /// Puzzle day (1-25)
    #[arg(short, long)]
    pub day: u32,

    /// Puzzle year. Defaults to the most recent event: the current year
    /// during December, the previous year otherwise.
    #[arg(short, long)]
    pub year: Option<u32>,

    /// Directory the `y{year}/d{day}` scaffold is created in
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub workdir: PathBuf,

    /// Session cookie used to download the puzzle input.
    /// Falls back to the AOC_SESSION environment variable, then to the
    /// `session` field of the configuration file.
    #[arg(short, long, value_name = "SESSION")]
    pub cookie: Option<String>,

    /// Overwrite files that already exist instead of skipping them
    #[arg(short, long)]
    pub force: bool,

    /// Configuration file (JSON or YAML). Defaults to aocgen.json,
    /// aocgen.yml or aocgen.yaml in the working directory, if present.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Returns
/// * `Args` - Parsed command line arguments
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
