//! Shared data models for lint findings and printers.

use serde::Serialize;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
/// Findings collected by one lint run. Severity is the list a message is in.
pub struct Report {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Aggregated counts used by printers.
pub struct Summary {
    pub errors: usize,
    pub warnings: usize,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    pub fn warn(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    /// A run passes when no errors were recorded; warnings never fail it.
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    pub fn summary(&self) -> Summary {
        Summary {
            errors: self.errors.len(),
            warnings: self.warnings.len(),
        }
    }
}
