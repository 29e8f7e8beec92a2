//! yamlguard CLI binary entry point.
//! Resolves settings, runs the validator, and maps the result to an exit code.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;
use yamlguard::cli::Cli;
use yamlguard::error::Error;
use yamlguard::output::Reporter;
use yamlguard::{config, lint};

fn main() {
    // Diagnostics for the tool itself go to stderr; stdout carries the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let eff = config::resolve_effective(
        cli.quiet,
        cli.verbose,
        cli.github_actions,
        cli.no_color,
        config::env_no_color(),
        config::stdout_is_tty(),
    );
    tracing::debug!(?eff, files = cli.files.len(), "starting");

    let mut reporter = Reporter::stdout(&eff);
    let code = match lint::run_lint(&cli.files, &eff, &mut reporter) {
        Ok(result) => match reporter.summary(&result) {
            Ok(()) => result.exit_code(),
            Err(e) => fail(&Error::Io(e)),
        },
        Err(Error::Usage) => match Cli::command().print_help() {
            Ok(()) => Error::Usage.exit_code(),
            Err(e) => fail(&Error::Io(e)),
        },
        Err(e) => fail(&e),
    };
    std::process::exit(code);
}

fn fail(err: &Error) -> i32 {
    tracing::error!(%err, "run aborted");
    eprintln!("{}", err);
    err.exit_code()
}
