//! Error types for tokenizing, decoding and classifying HOI4 script data.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while decoding script files or post-processing them.
///
/// Parse errors carry the offending token, its 1-based line number and the
/// full text of that line so the caller can point at the problem.
#[derive(Error, Debug)]
pub enum ScriptError {
    /// An `=` or `{` appeared where a key was expected.
    #[error("unexpected token '{token}' while searching for key in line {line}: {line_text}")]
    MalformedKey {
        token: String,
        line: usize,
        line_text: String,
    },

    /// An `=` or `}` appeared where a value was expected.
    #[error("unexpected token '{token}' while searching for value in line {line}: {line_text}")]
    MalformedValue {
        token: String,
        line: usize,
        line_text: String,
    },

    /// Blocks were nested deeper than `ParseOptions::max_depth`.
    #[error("blocks nested deeper than {limit} levels in line {line}: {line_text}")]
    NestingTooDeep {
        limit: usize,
        line: usize,
        line_text: String,
    },

    /// A unit definition mixes ship and non-ship sub-units. Reported by the
    /// unit classifier, never returned as a hard failure.
    #[error("unit '{unit}' mixes ship sub-units ({ships}) with non-ship sub-units ({others})")]
    InconsistentSubUnitCategory {
        unit: String,
        ships: usize,
        others: usize,
    },

    /// Reading the input failed (including invalid UTF-8).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error attributed to a particular file or directory.
    #[error("{}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: Box<ScriptError>,
    },
}

impl ScriptError {
    /// Wrap this error with the path it came from.
    pub fn in_file(self, path: impl Into<PathBuf>) -> Self {
        ScriptError::File {
            path: path.into(),
            source: Box::new(self),
        }
    }

    /// The 1-based source line of a parse error, looking through `File` wrappers.
    pub fn line(&self) -> Option<usize> {
        match self {
            ScriptError::MalformedKey { line, .. }
            | ScriptError::MalformedValue { line, .. }
            | ScriptError::NestingTooDeep { line, .. } => Some(*line),
            ScriptError::File { source, .. } => source.line(),
            _ => None,
        }
    }
}

/// Convenience alias used throughout hoi4-script-core.
pub type Result<T> = std::result::Result<T, ScriptError>;
