//! Enumerate every non-overlapping match in a line.

use std::ops::Range;

use crate::limits::Limits;
use crate::pattern::matcher::is_end;
use crate::pattern::{CompiledPattern, try_match_at};

/// One non-empty match found by [`find_all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub start: usize,
    pub len: usize,
}

impl Match {
    pub fn range(&self) -> Range<usize> {
        self.start..self.start + self.len
    }

    /// The matched characters of `line` as a string.
    pub fn text(&self, line: &[char]) -> String {
        line[self.range()].iter().collect()
    }
}

/// The input line is longer than [`Limits::max_input_len`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputTooLong {
    pub len: usize,
    pub max: usize,
}

impl std::fmt::Display for InputTooLong {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Input too long: {} characters (max {})", self.len, self.max)
    }
}

impl std::error::Error for InputTooLong {}

/// Number of characters before the end-of-line marker.
pub fn line_len(line: &[char]) -> usize {
    (0..=line.len())
        .find(|&pos| is_end(line, pos))
        .unwrap_or(line.len())
}

/// Iterator over the matches of a pattern in a line. Created by [`find_all`].
pub struct Matches<'p, 'l> {
    pattern: &'p CompiledPattern,
    line: &'l [char],
    pos: usize,
}

impl Iterator for Matches<'_, '_> {
    type Item = Match;

    fn next(&mut self) -> Option<Match> {
        while !is_end(self.line, self.pos) {
            let start = self.pos;
            let len = try_match_at(self.pattern, start, self.line).unwrap_or(0);
            self.pos += len.max(1);
            if len > 0 {
                return Some(Match { start, len });
            }
        }
        None
    }
}

/// Scan `line` left to right, trying an anchored match at each position.
///
/// A match advances the scan past its end; an empty or failed match advances
/// it by one. Empty matches are not reported.
pub fn find_all<'p, 'l>(pattern: &'p CompiledPattern, line: &'l [char]) -> Matches<'p, 'l> {
    Matches {
        pattern,
        line,
        pos: 0,
    }
}

/// [`find_all`], refusing lines longer than `limits.max_input_len`.
pub fn find_all_checked(
    pattern: &CompiledPattern,
    line: &[char],
    limits: &Limits,
) -> Result<Vec<Match>, InputTooLong> {
    check_input(line, limits)?;
    let found: Vec<Match> = find_all(pattern, line).collect();
    tracing::debug!(len = line_len(line), matches = found.len(), "scanned line");
    Ok(found)
}

pub fn check_input(line: &[char], limits: &Limits) -> Result<(), InputTooLong> {
    let len = line_len(line);
    if len > limits.max_input_len {
        return Err(InputTooLong {
            len,
            max: limits.max_input_len,
        });
    }
    Ok(())
}
