//! Compiled patterns and the anchored-match entry point.

use crate::limits::Limits;

use super::ast::Node;
use super::matcher::match_node;
use super::parser::{PatternError, parse, pattern_len};

/// A parsed pattern ready for matching.
///
/// The tree is never mutated after compilation, so one compiled pattern can
/// be matched any number of times, from any number of threads.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    root: Node,
    budget: usize,
}

impl CompiledPattern {
    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn budget(&self) -> usize {
        self.budget
    }

    /// Anchored match against a string slice. See [`try_match_at`].
    pub fn match_str(&self, text: &str, start: usize) -> Option<usize> {
        let haystack: Vec<char> = text.chars().collect();
        try_match_at(self, start, &haystack)
    }
}

/// Compile `pattern` with [`Limits::default`].
pub fn compile(pattern: &str) -> Result<CompiledPattern, PatternError> {
    compile_with(pattern, &Limits::default())
}

/// Compile `pattern`, enforcing `limits`.
pub fn compile_with(pattern: &str, limits: &Limits) -> Result<CompiledPattern, PatternError> {
    let len = pattern_len(pattern);
    if len > limits.max_pattern_len {
        return Err(PatternError::PatternTooLong {
            len,
            max: limits.max_pattern_len,
        });
    }

    let root = parse(pattern)?;
    if limits.strict_repetition && root.has_nullable_star() {
        return Err(PatternError::NonTerminatingRepetition);
    }

    tracing::debug!(len, nodes = root.node_count(), "compiled pattern");
    Ok(CompiledPattern {
        root,
        budget: limits.budget,
    })
}

/// Match `pattern` starting exactly at `start`.
///
/// Returns the length of the longest match the backtracking search finds, or
/// `None`. A zero-length match is `Some(0)`.
pub fn try_match_at(pattern: &CompiledPattern, start: usize, haystack: &[char]) -> Option<usize> {
    match_node(&pattern.root, haystack, start, pattern.budget)
}
