//! Treescope Fixtures
//!
//! Canonical showcase fixtures for the syntax detector, plus a native
//! rendition of the behavior the Python fixture demonstrates.
//!
//! # Overview
//!
//! - [`sources`]: Byte-stable example source files (Python, Rust,
//!   JavaScript), embedded from the repository `fixtures/` directory.
//!   Their content is part of the detection contract.
//! - [`showcase`]: The Python fixture's semantics, expressed natively:
//!   a [`showcase::Person`] record with a greeting, the even-squares
//!   sequence, and a scoped greeting-file write.
//!
//! # Example
//!
//! ```rust
//! use treescope_fixture::showcase::{even_squares, Person};
//!
//! let person = Person::new("Alice", 30);
//! assert_eq!(person.greet(), "Hello, Alice!");
//! assert_eq!(even_squares(10), vec![0, 4, 16, 36, 64]);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod showcase;
pub mod sources;

// Re-exports
pub use showcase::{even_squares, write_greeting, AgeBracket, Person, ShowcaseError, GREETING};
pub use sources::Fixture;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
