//! Terminal helpers shared by the binary and printers.

use owo_colors::OwoColorize;

/// Colors are on unless disabled on the command line, in config, or via `NO_COLOR`.
pub fn use_colors(enabled: bool) -> bool {
    enabled && std::env::var_os("NO_COLOR").is_none()
}

pub fn error_prefix(color: bool) -> String {
    if color {
        "❌ Error:".red().bold().to_string()
    } else {
        "❌ Error:".to_string()
    }
}

pub fn note_prefix(color: bool) -> String {
    if color {
        "note:".cyan().bold().to_string()
    } else {
        "note:".to_string()
    }
}
