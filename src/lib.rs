//! A small regular-expression compiler with a budget-bounded backtracking
//! matcher.
//!
//! # Example
//!
//! ```rust
//! use kleene::{compile, scan, try_match_at};
//!
//! let pattern = compile("(a|b)*c").unwrap();
//! let line: Vec<char> = "xababc".chars().collect();
//!
//! // Anchored at offset 1: star takes "abab", then "c".
//! assert_eq!(try_match_at(&pattern, 1, &line), Some(5));
//! assert_eq!(try_match_at(&pattern, 0, &line), None);
//!
//! let found: Vec<String> = scan::find_all(&pattern, &line)
//!     .map(|m| m.text(&line))
//!     .collect();
//! assert_eq!(found, ["ababc"]);
//! ```

pub mod limits;
pub mod pattern;
pub mod scan;
pub mod shell;

pub use limits::{DEFAULT_BUDGET, Limits};
pub use pattern::{CompiledPattern, PatternError, compile, compile_with, try_match_at};
pub use scan::{InputTooLong, Match};
pub use shell::{Console, Shell, StdConsole};
