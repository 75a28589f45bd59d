//! Native showcase semantics
//!
//! The behavior demonstrated by the Python fixture, expressed as plain Rust:
//! a [`Person`] record with a greeting, the even-squares sequence, and a
//! scoped write of the greeting file.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Literal written by [`write_greeting`]
pub const GREETING: &str = "Hello, Tree-sitter!";

/// Plain record with a name, an age, and a greeting behavior
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Display name
    pub name: String,

    /// Age in years
    pub age: u32,
}

impl Person {
    /// Create a new person
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    /// Produce the greeting string for this person
    ///
    /// `Person::new("Alice", 30).greet()` yields exactly `"Hello, Alice!"`.
    #[inline]
    #[must_use]
    pub fn greet(&self) -> String {
        format!("Hello, {}!", self.name)
    }

    /// Coarse age classification, mirroring the Rust fixture's `match`
    #[inline]
    #[must_use]
    pub fn age_bracket(&self) -> AgeBracket {
        match self.age {
            0..=17 => AgeBracket::Minor,
            18..=60 => AgeBracket::Adult,
            _ => AgeBracket::Senior,
        }
    }
}

/// Coarse age classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeBracket {
    /// 0 through 17
    Minor,
    /// 18 through 60
    Adult,
    /// 61 and above
    Senior,
}

/// Squares of the even values in `0..limit`
///
/// `even_squares(10)` yields exactly `[0, 4, 16, 36, 64]`.
#[must_use]
pub fn even_squares(limit: u32) -> Vec<u64> {
    (0..limit)
        .filter(|x| x % 2 == 0)
        .map(|x| u64::from(x) * u64::from(x))
        .collect()
}

/// Errors from the scoped greeting write
#[derive(Debug, thiserror::Error)]
pub enum ShowcaseError {
    /// IO error while creating or writing the greeting file
    #[error("io error writing {path}: {source}")]
    Io {
        /// Target path of the failed write
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
}

impl ShowcaseError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Write [`GREETING`] to `path` in write/truncate mode
///
/// The handle is closed when this function returns, success or failure.
///
/// # Errors
/// Returns [`ShowcaseError::Io`] if the file cannot be created or written.
pub fn write_greeting(path: &Path) -> Result<(), ShowcaseError> {
    let mut file = File::create(path).map_err(|e| ShowcaseError::io_error(path, e))?;
    file.write_all(GREETING.as_bytes())
        .map_err(|e| ShowcaseError::io_error(path, e))?;
    debug!(path = %path.display(), bytes = GREETING.len(), "wrote greeting");
    Ok(())
}
