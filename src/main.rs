//! aocgen's main application entry point.
//! Parses arguments, resolves the configuration and runs the scaffolder,
//! then prints a summary of what was written and skipped.

use aocgen::{
    cli::{get_args, Args},
    config::resolve,
    constants::SESSION_ENV,
    error::{default_error_handler, Result},
    fetch::HttpFetcher,
    logger::init_logger,
    processor::{InputStatus, Scaffolder},
    renderer::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Reads the session environment variable and today's date
/// 2. Resolves a validated request, merging in the configuration file
/// 3. Renders templates, downloads the input and writes files
/// 4. Prints one line per planned file
fn run(args: Args) -> Result<()> {
    let today = chrono::Local::now().date_naive();
    let env_session = std::env::var(SESSION_ENV).ok();
    let settings = resolve(&args, env_session, today)?;

    let renderer = MiniJinjaRenderer::new();
    let fetcher = HttpFetcher::new(&settings.host, settings.timeout)?;
    let scaffolder = Scaffolder::new(&renderer, &fetcher);

    let report = scaffolder.run(settings.request)?;

    for file in &report.files {
        println!("{}: '{}'", file.outcome, file.path.display());
    }
    if report.input == InputStatus::NoCredential {
        println!(
            "No session cookie configured, puzzle input was not downloaded. \
             Pass --cookie or set {SESSION_ENV} to fetch it."
        );
    }

    println!("Scaffold ready in {}.", report.dir.display());
    Ok(())
}
