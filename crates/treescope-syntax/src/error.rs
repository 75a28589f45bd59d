//! Error types for syntax detection

use std::path::PathBuf;

/// Errors during parsing and detection
#[derive(Debug, thiserror::Error)]
pub enum SyntaxError {
    /// No supported language for file extension
    #[error("no supported language for extension: '{0}'")]
    UnsupportedExtension(String),

    /// Parser initialization failed (grammar/runtime version mismatch)
    #[error("parser initialization failed: {0}")]
    ParserInit(String),

    /// Tree-sitter returned no tree
    #[error("parse failed for {0}")]
    ParseFailed(String),

    /// IO error during file read
    #[error("io error reading {path}: {source}")]
    Io {
        /// Path that failed to read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
}

impl SyntaxError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for detection operations
pub type SyntaxResult<T> = Result<T, SyntaxError>;
