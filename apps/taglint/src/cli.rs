//! CLI argument parsing via `clap`.

use clap::Parser;
use std::path::PathBuf;

pub const USAGE: &str = "Usage: taglint <json_file>";
pub const OUTPUT_MODES: [&str; 2] = ["human", "json"];

#[derive(Parser, Debug)]
#[command(
    name = "taglint",
    version,
    about = "Lint a JSON array of tagKey/value objects",
    long_about = "taglint — check a JSON tag file for structure, required fields, and known tag values.\n\nErrors fail the run; warnings are informational.\n\nConfiguration precedence: CLI > taglint.toml > defaults.",
    after_help = "Examples:\n  taglint tags.json\n  taglint tags.json --output json\n  taglint -vv tags.json"
)]
/// Top-level CLI options.
pub struct Cli {
    #[arg(help = "Path to the JSON tag file")]
    pub file: PathBuf,
    #[arg(
        long,
        value_parser = OUTPUT_MODES,
        help = "Output mode: human|json (default: human)"
    )]
    pub output: Option<String>,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Disable colored output")]
    pub no_color: bool,
    #[arg(
        short,
        long,
        action = clap::ArgAction::Count,
        help = "Increase log verbosity on stderr"
    )]
    pub verbose: u8,
}
