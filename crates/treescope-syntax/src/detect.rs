//! Tree-sitter parsing and special-structure collection

use crate::error::SyntaxError;
use crate::language::Language;
use crate::report::{SpecialStructure, SyntaxReport};
use std::path::Path;
use tracing::debug;

/// Parser producing [`SyntaxReport`]s
///
/// Wraps a single tree-sitter parser; the grammar is switched per call, so
/// one instance handles every supported language.
pub struct SyntaxParser {
    inner: tree_sitter::Parser,
}

impl std::fmt::Debug for SyntaxParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyntaxParser").finish_non_exhaustive()
    }
}

impl SyntaxParser {
    /// Create a new parser
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: tree_sitter::Parser::new(),
        }
    }

    /// Parse a source string under the given language
    ///
    /// `file_name` is carried into the report verbatim.
    ///
    /// # Errors
    /// Returns [`SyntaxError::ParserInit`] if the grammar cannot be loaded
    /// and [`SyntaxError::ParseFailed`] if tree-sitter returns no tree.
    pub fn parse_source(
        &mut self,
        file_name: &str,
        source: &str,
        language: Language,
    ) -> Result<SyntaxReport, SyntaxError> {
        self.inner
            .set_language(&language.grammar())
            .map_err(|e| SyntaxError::ParserInit(e.to_string()))?;

        let tree = self
            .inner
            .parse(source, None)
            .ok_or_else(|| SyntaxError::ParseFailed(file_name.to_string()))?;

        let root = tree.root_node();
        let mut structures = Vec::new();
        collect_special(root, language.special_nodes(), &mut structures);

        debug!(
            file = file_name,
            language = %language,
            structures = structures.len(),
            "parsed source"
        );

        Ok(SyntaxReport {
            file_name: file_name.to_string(),
            language,
            sexp: root.to_sexp(),
            structures,
            has_errors: root.has_error(),
        })
    }

    /// Read and parse a file, detecting the language from its extension
    ///
    /// # Errors
    /// Returns [`SyntaxError::UnsupportedExtension`] for unknown extensions
    /// and [`SyntaxError::Io`] if the file cannot be read.
    pub fn parse_file(&mut self, path: &Path) -> Result<SyntaxReport, SyntaxError> {
        let language = Language::from_path(path).ok_or_else(|| {
            let ext = path
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or_default();
            SyntaxError::UnsupportedExtension(ext.to_string())
        })?;

        let source =
            std::fs::read_to_string(path).map_err(|e| SyntaxError::io_error(path, e))?;

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();

        self.parse_source(file_name, &source, language)
    }
}

impl Default for SyntaxParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Collect special structures by preorder walk
fn collect_special(
    node: tree_sitter::Node<'_>,
    special: &[&str],
    out: &mut Vec<SpecialStructure>,
) {
    if special.contains(&node.kind()) {
        let start = node.start_position();
        out.push(SpecialStructure {
            kind: node.kind().to_string(),
            span: node.byte_range(),
            line: start.row + 1,
            column: start.column + 1,
        });
    }

    for i in 0..node.child_count() {
        if let Some(child) = node.child(i) {
            collect_special(child, special, out);
        }
    }
}
