//! Regular expression matching by Brzozowski derivatives.
//!
//! ```
//! use regex_deriv::{matches, RegexStorage};
//!
//! let storage = RegexStorage::new();
//! // (a|b)*c
//! let regex = storage.seq(
//!     storage.star(storage.alt(storage.symbol("a"), storage.symbol("b"))),
//!     storage.symbol("c"),
//! );
//! assert!(matches(regex, vec!["a", "b", "a", "b", "c"]));
//! assert!(!matches(regex, vec!["a", "b", "a", "b"]));
//! ```

mod arena_regex;
mod display;
mod parse;

pub use arena_regex::{matches, Regex, RegexContents, RegexStorage};
pub use parse::{parse_regex, ParseError};
