//! Supported languages and their special syntax structures

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Supported programming languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// Python
    Python,
    /// Rust
    Rust,
    /// JavaScript
    JavaScript,
}

impl Language {
    /// All supported languages
    #[inline]
    #[must_use]
    pub fn all() -> &'static [Language] {
        &[Language::Python, Language::Rust, Language::JavaScript]
    }

    /// Get file extensions for this language
    #[inline]
    #[must_use]
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Language::Python => &["py"],
            Language::Rust => &["rs"],
            Language::JavaScript => &["js", "jsx", "mjs"],
        }
    }

    /// Detect language from file extension
    #[inline]
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.trim_start_matches('.');
        match ext {
            "py" => Some(Language::Python),
            "rs" => Some(Language::Rust),
            "js" | "jsx" | "mjs" => Some(Language::JavaScript),
            _ => None,
        }
    }

    /// Detect language from a file path's extension
    #[inline]
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    /// Get human-readable name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Rust => "rust",
            Language::JavaScript => "javascript",
        }
    }

    /// Get the tree-sitter grammar for this language
    #[inline]
    #[must_use]
    pub fn grammar(&self) -> tree_sitter::Language {
        match self {
            Language::Python => tree_sitter_python::LANGUAGE.into(),
            Language::Rust => tree_sitter_rust::LANGUAGE.into(),
            Language::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
        }
    }

    /// Node kinds treated as this language's special syntax structures
    #[inline]
    #[must_use]
    pub fn special_nodes(&self) -> &'static [&'static str] {
        match self {
            Language::Python => &["decorator", "list_comprehension", "with_statement"],
            Language::Rust => &["lifetime", "match_expression", "impl_item"],
            Language::JavaScript => &["arrow_function", "await_expression", "object_pattern"],
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
