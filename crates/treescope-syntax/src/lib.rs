//! Treescope Syntax Detection
//!
//! Parses source files with tree-sitter and reports occurrences of
//! language-specific "special" syntax structures.
//!
//! # Overview
//!
//! - [`Language`]: Supported languages with extensions, grammar, and the
//!   special node kinds to look for
//! - [`SyntaxParser`]: Wraps a tree-sitter parser; produces reports from
//!   source strings or files
//! - [`SyntaxReport`]: Per-file result with the tree s-expression and every
//!   detected structure
//!
//! # Example
//!
//! ```rust
//! use treescope_syntax::{Language, SyntaxParser};
//!
//! # fn example() -> Result<(), treescope_syntax::SyntaxError> {
//! let mut parser = SyntaxParser::new();
//! let report = parser.parse_source("demo.py", "with open('x') as f: pass", Language::Python)?;
//! assert!(report.contains_kind("with_statement"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod detect;
pub mod error;
pub mod language;
pub mod report;

// Re-exports
pub use detect::SyntaxParser;
pub use error::{SyntaxError, SyntaxResult};
pub use language::Language;
pub use report::{SpecialStructure, SyntaxReport};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
