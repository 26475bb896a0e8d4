//! taglint core library.
//!
//! Lints a JSON array of `{"tagKey", "value"}` objects: document shape,
//! required fields, and per-tag-key value rules.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `lint`: File/source entry points producing a `Report`.
//! - `checks`: Structural and field checks.
//! - `rules`: Registry of tag-key value validators.
//! - `line_index`: Heuristic item-to-line mapping for messages.
//! - `models`: Report and summary structs.
//! - `output`: Human/JSON printers.
//! - `error`: Fatal failures (missing file, invalid JSON).
//! - `logging`: `tracing` subscriber setup.
//! - `utils`: Terminal helpers.
pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod line_index;
pub mod lint;
pub mod logging;
pub mod models;
pub mod output;
pub mod rules;
pub mod utils;

pub use error::LintError;
pub use lint::{lint_file, lint_source};
pub use models::Report;
pub use rules::Registry;
