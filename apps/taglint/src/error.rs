//! Fatal failures that abort a lint run before any check executes.

use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, LintError>;

#[derive(Debug, thiserror::Error)]
pub enum LintError {
    #[error("File '{}' not found", path.display())]
    NotFound { path: PathBuf },

    #[error("Could not read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid JSON - {reason} at line {line}")]
    Decode { reason: String, line: usize },
}

impl LintError {
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Read { path, source }
        }
    }

    /// Keep the decoder's reason and line; its column is dropped.
    pub fn decode(err: &serde_json::Error) -> Self {
        let full = err.to_string();
        let suffix = format!(" at line {} column {}", err.line(), err.column());
        let reason = full.strip_suffix(&suffix).unwrap_or(&full).to_string();
        Self::Decode {
            reason,
            line: err.line(),
        }
    }
}
