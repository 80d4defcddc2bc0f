use std::path::PathBuf;

use thiserror::Error;

use crate::utils::DateParseError;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Input file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Invalid training data in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Bad {field} for '{training}' ({person}): {source}")]
    DateParse {
        person: String,
        training: String,
        field: &'static str,
        #[source]
        source: DateParseError,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Exit code for failures that aren't a `ReportError` (config, logging setup)
pub const EXIT_OTHER: u8 = 1;

impl ReportError {
    /// Process exit code for this failure
    pub fn exit_code(&self) -> u8 {
        match self {
            ReportError::FileNotFound { .. } => 2,
            ReportError::Parse { .. } => 3,
            ReportError::DateParse { .. } => 4,
            ReportError::Io { .. } => 5,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReportError::Io {
            path: path.into(),
            source,
        }
    }
}
