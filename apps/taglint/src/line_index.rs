//! Best-effort mapping from array item positions to source lines.
//!
//! The index is rebuilt from the raw text, not the parsed value: every line
//! containing `{` is assumed to open the next item. Multiple objects on one
//! line, nested objects, and braces inside strings all skew the result, so
//! line numbers are only used to decorate messages and never affect findings.

use std::collections::HashMap;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
/// Item position (0-based) to line number (1-based).
pub struct LineIndex {
    lines: HashMap<usize, usize>,
}

impl LineIndex {
    /// Scan `source` line by line and record one item per line with `{`.
    pub fn build(source: &str) -> Self {
        let mut lines = HashMap::new();
        let mut current: Option<usize> = None;
        for (n, line) in source.lines().enumerate() {
            if !line.contains('{') {
                continue;
            }
            let item = current.map_or(0, |c| c + 1);
            current = Some(item);
            lines.insert(item, n + 1);
        }
        Self { lines }
    }

    pub fn line_of(&self, item: usize) -> Option<usize> {
        self.lines.get(&item).copied()
    }

    /// Message suffix for `item`: `" (line N)"`, or empty when unknown.
    pub fn suffix(&self, item: usize) -> String {
        match self.line_of(item) {
            Some(n) => format!(" (line {})", n),
            None => String::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
