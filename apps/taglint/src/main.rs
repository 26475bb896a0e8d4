//! taglint CLI binary entry point.
//! Lints one file and prints the report; exit code 0 iff no errors.

use clap::error::ErrorKind;
use clap::Parser;
use std::process::ExitCode;
use taglint::cli::{Cli, USAGE};
use taglint::{config, lint, logging, output, utils, Registry};
use tracing::debug;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if clap_owns_exit(e.kind()) => e.exit(),
        Err(_) => {
            println!("{}", USAGE);
            return ExitCode::FAILURE;
        }
    };

    let eff = config::resolve_effective(None, cli.output.as_deref(), cli.no_color);
    let color = utils::use_colors(eff.color) && eff.output != "json";
    logging::init(cli.verbose, color);
    debug!(root = %eff.root.display(), output = %eff.output, "resolved config");

    if config::config_unreadable(&eff.root) {
        eprintln!(
            "{} {}",
            utils::note_prefix(color),
            "taglint config could not be parsed; using defaults."
        );
    }

    let registry = Registry::builtin();
    match lint::lint_file(&cli.file, &registry) {
        Ok(report) => {
            println!("{}", output::render_report(&report, &eff.output, color));
            if report.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(err) => {
            println!("{}", output::render_fatal(&err, &eff.output, color));
            ExitCode::FAILURE
        }
    }
}

/// Help, version and bad flag values go through clap's own reporting; every
/// other parse failure is an argument-count problem and prints the usage line.
fn clap_owns_exit(kind: ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion | ErrorKind::InvalidValue
    )
}
