//! Lint runner for tag documents.
//!
//! Each call builds its own `Report` and `LineIndex`, so repeated runs share
//! no state. Read and decode failures short-circuit with a `LintError` and
//! produce no findings.

use crate::checks::run_checks;
use crate::error::{LintError, Result};
use crate::line_index::LineIndex;
use crate::models::Report;
use crate::rules::Registry;
use serde_json::Value as Json;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Read `path` completely and lint its contents.
pub fn lint_file(path: &Path, registry: &Registry) -> Result<Report> {
    let source = fs::read_to_string(path).map_err(|e| LintError::read(path, e))?;
    debug!(path = %path.display(), bytes = source.len(), "loaded input");
    let report = lint_source(&source, registry)?;
    info!(
        path = %path.display(),
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        "lint finished"
    );
    Ok(report)
}

/// Decode `source` and run all checks. Decoding is all-or-nothing.
pub fn lint_source(source: &str, registry: &Registry) -> Result<Report> {
    let doc: Json = serde_json::from_str(source).map_err(|e| LintError::decode(&e))?;
    let lines = LineIndex::build(source);
    debug!(mapped_items = lines.len(), "built line index");
    if let Json::Array(items) = &doc {
        debug!(items = items.len(), "checking tag items");
    }
    let mut report = Report::new();
    run_checks(&doc, &lines, registry, &mut report);
    Ok(report)
}
