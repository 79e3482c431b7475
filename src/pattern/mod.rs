//! Pattern compiler and backtracking matching engine.
//!
//! # Pattern syntax
//!
//! | Token    | Meaning                                                  |
//! |----------|----------------------------------------------------------|
//! | `c`      | The character `c`                                        |
//! | `.`      | Any one character                                        |
//! | `\c`     | The character `c`, even if it is one of `.()\|*\`        |
//! | `XY`     | `X` followed by `Y`                                      |
//! | `X*`     | Zero or more `X` (binds to the preceding atom or group)  |
//! | `X\|Y`   | The longer of `X` and `Y`; lowest precedence             |
//! | `(X)`    | Grouping                                                 |
//! | `(X\|)`  | An empty side of `\|` matches the empty string           |
//!
//! A pattern ends at the first newline or at the end of the string.

pub mod ast;
pub mod compiled;
pub mod matcher;
pub mod parser;

pub use compiled::{CompiledPattern, compile, compile_with, try_match_at};
pub use parser::{PatternError, parse};
