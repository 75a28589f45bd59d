//! Embedded fixture sources
//!
//! The showcase files under `fixtures/` are compiled into the crate so the
//! detector and its tests work without touching the file system.

/// A named, byte-stable fixture source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fixture {
    /// File name the fixture is published under (extension carries the language)
    pub file_name: &'static str,

    /// Full source text
    pub source: &'static str,
}

/// Python showcase: decorators, list comprehensions, `with` statements
pub const PYTHON: Fixture = Fixture {
    file_name: "example.py",
    source: include_str!("../../../fixtures/example.py"),
};

/// Rust showcase: lifetimes, `match` expressions, `impl` blocks
pub const RUST: Fixture = Fixture {
    file_name: "example.rs",
    source: include_str!("../../../fixtures/example.rs"),
};

/// JavaScript showcase: arrow functions, `await`, object destructuring
pub const JAVASCRIPT: Fixture = Fixture {
    file_name: "example.js",
    source: include_str!("../../../fixtures/example.js"),
};

/// All bundled fixtures, in report order
pub const ALL: [Fixture; 3] = [PYTHON, RUST, JAVASCRIPT];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_are_nonempty() {
        for fixture in ALL {
            assert!(!fixture.source.is_empty(), "{} is empty", fixture.file_name);
        }
    }

    #[test]
    fn python_fixture_carries_contract_lines() {
        assert!(PYTHON.source.contains("@dataclass"));
        assert!(PYTHON.source.contains("[x**2 for x in range(10) if x % 2 == 0]"));
        assert!(PYTHON.source.contains("f.write('Hello, Tree-sitter!')"));
    }

    #[test]
    fn file_names_have_expected_extensions() {
        assert!(PYTHON.file_name.ends_with(".py"));
        assert!(RUST.file_name.ends_with(".rs"));
        assert!(JAVASCRIPT.file_name.ends_with(".js"));
    }
}
