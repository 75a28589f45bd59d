//! Per-file detection results

use crate::language::Language;
use serde::{Deserialize, Serialize};

/// One occurrence of a special syntax structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialStructure {
    /// Node kind as named by the grammar (e.g. `list_comprehension`)
    pub kind: String,

    /// Byte range in the source
    pub span: std::ops::Range<usize>,

    /// 1-based start line
    pub line: usize,

    /// 1-based start column
    pub column: usize,
}

/// Detection result for one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxReport {
    /// File name the source was parsed under
    pub file_name: String,

    /// Detected language
    pub language: Language,

    /// S-expression of the root node
    pub sexp: String,

    /// Special structures in source order
    pub structures: Vec<SpecialStructure>,

    /// Whether the tree contains parse errors
    pub has_errors: bool,
}

impl SyntaxReport {
    /// Check whether any structure of `kind` was detected
    #[inline]
    #[must_use]
    pub fn contains_kind(&self, kind: &str) -> bool {
        self.structures.iter().any(|s| s.kind == kind)
    }

    /// Number of detected structures of `kind`
    #[inline]
    #[must_use]
    pub fn count_of(&self, kind: &str) -> usize {
        self.structures.iter().filter(|s| s.kind == kind).count()
    }

    /// Distinct detected kinds, in first-seen order
    #[must_use]
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = Vec::new();
        for s in &self.structures {
            if !kinds.contains(&s.kind.as_str()) {
                kinds.push(&s.kind);
            }
        }
        kinds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn report_with(kinds: &[&str]) -> SyntaxReport {
        SyntaxReport {
            file_name: "demo.py".to_string(),
            language: Language::Python,
            sexp: "(module)".to_string(),
            structures: kinds
                .iter()
                .map(|k| SpecialStructure {
                    kind: (*k).to_string(),
                    span: 0..1,
                    line: 1,
                    column: 1,
                })
                .collect(),
            has_errors: false,
        }
    }

    #[test]
    fn contains_and_count() {
        let report = report_with(&["decorator", "decorator", "with_statement"]);
        assert!(report.contains_kind("decorator"));
        assert!(!report.contains_kind("lifetime"));
        assert_eq!(report.count_of("decorator"), 2);
        assert_eq!(report.count_of("with_statement"), 1);
    }

    #[test]
    fn kinds_deduplicates_in_order() {
        let report = report_with(&["decorator", "with_statement", "decorator"]);
        assert_eq!(report.kinds(), vec!["decorator", "with_statement"]);
    }

    #[test]
    fn report_serializes_to_json() {
        let report = report_with(&["decorator"]);
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"file_name\":\"demo.py\""));
        assert!(json.contains("\"kind\":\"decorator\""));
    }
}
