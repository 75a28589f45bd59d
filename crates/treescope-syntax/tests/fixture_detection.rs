//! Detection over the bundled showcase fixtures
//!
//! Each fixture must exhibit every special structure its language advertises.

use std::path::Path;

use treescope_fixture::sources;
use treescope_syntax::{Language, SyntaxParser};

fn parse_fixture(fixture: &sources::Fixture) -> treescope_syntax::SyntaxReport {
    let language = Language::from_path(Path::new(fixture.file_name))
        .unwrap_or_else(|| panic!("no language for {}", fixture.file_name));
    let mut parser = SyntaxParser::new();
    parser
        .parse_source(fixture.file_name, fixture.source, language)
        .unwrap_or_else(|e| panic!("parse {} failed: {e}", fixture.file_name))
}

#[test]
fn python_fixture_shows_all_special_nodes() {
    let report = parse_fixture(&sources::PYTHON);

    assert_eq!(report.language, Language::Python);
    assert!(!report.has_errors);
    assert!(report.sexp.starts_with("(module"));
    assert!(report.contains_kind("decorator"));
    assert_eq!(report.count_of("list_comprehension"), 1);
    assert_eq!(report.count_of("with_statement"), 1);
}

#[test]
fn rust_fixture_shows_all_special_nodes() {
    let report = parse_fixture(&sources::RUST);

    assert_eq!(report.language, Language::Rust);
    assert!(!report.has_errors);
    assert!(report.sexp.starts_with("(source_file"));
    assert!(report.contains_kind("lifetime"));
    assert_eq!(report.count_of("match_expression"), 1);
    assert_eq!(report.count_of("impl_item"), 1);
}

#[test]
fn javascript_fixture_shows_all_special_nodes() {
    let report = parse_fixture(&sources::JAVASCRIPT);

    assert_eq!(report.language, Language::JavaScript);
    assert!(!report.has_errors);
    assert!(report.sexp.starts_with("(program"));
    assert_eq!(report.count_of("arrow_function"), 2);
    assert_eq!(report.count_of("await_expression"), 2);
    assert!(report.count_of("object_pattern") >= 1);
}

#[test]
fn fixture_reports_serialize_to_json() {
    let reports: Vec<_> = sources::ALL.iter().map(parse_fixture).collect();

    let json = serde_json::to_string_pretty(&reports).unwrap();
    assert!(json.contains("example.py"));
    assert!(json.contains("example.rs"));
    assert!(json.contains("example.js"));
}

#[test]
fn every_fixture_maps_to_a_language() {
    for fixture in &sources::ALL {
        assert!(
            Language::from_path(Path::new(fixture.file_name)).is_some(),
            "{} has no language mapping",
            fixture.file_name
        );
    }
}
