//! Output rendering for lint reports.
//!
//! Supports `human` (default) and `json` outputs. Rendering is pure and
//! returns a `String`; the binary decides where it goes and which exit code
//! follows.

use crate::error::LintError;
use crate::models::Report;
use crate::utils;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;
use std::fmt::Write;

/// Render a finished report in the requested output mode.
pub fn render_report(report: &Report, output: &str, color: bool) -> String {
    match output {
        "json" => serde_json::to_string_pretty(&compose_report_json(report))
            .unwrap_or_else(|_| String::from("{}")),
        _ => render_human(report, color),
    }
}

/// Render a fatal failure. No findings accompany it.
pub fn render_fatal(err: &LintError, output: &str, color: bool) -> String {
    match output {
        "json" => serde_json::to_string_pretty(&json!({"ok": false, "fatal": err.to_string()}))
            .unwrap_or_else(|_| String::from("{}")),
        _ => format!("{} {}", utils::error_prefix(color), err),
    }
}

fn render_human(report: &Report, color: bool) -> String {
    if report.is_clean() {
        let ok = "✅ No issues found!";
        return if color { ok.green().bold().to_string() } else { ok.to_string() };
    }
    let mut out = String::new();
    if !report.errors.is_empty() {
        let head = format!("❌ {} Error(s):", report.errors.len());
        section(&mut out, &head, &report.errors, color.then_some(Tone::Red));
    }
    if !report.warnings.is_empty() {
        let head = format!("⚠️  {} Warning(s):", report.warnings.len());
        section(&mut out, &head, &report.warnings, color.then_some(Tone::Yellow));
    }
    // trailing newline is added by println!
    out.truncate(out.trim_end().len());
    out
}

#[derive(Clone, Copy)]
enum Tone {
    Red,
    Yellow,
}

fn section(out: &mut String, head: &str, items: &[String], tone: Option<Tone>) {
    let head = match tone {
        Some(Tone::Red) => head.red().bold().to_string(),
        Some(Tone::Yellow) => head.yellow().bold().to_string(),
        None => head.to_string(),
    };
    let _ = writeln!(out, "{}", head);
    for msg in items {
        let _ = writeln!(out, "  • {}", msg);
    }
}

/// Compose report JSON object (pure) for testing/snapshot purposes.
pub fn compose_report_json(report: &Report) -> JsonVal {
    json!({
        "ok": report.is_success(),
        "errors": report.errors,
        "warnings": report.warnings,
        "summary": report.summary(),
    })
}
