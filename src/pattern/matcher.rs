//! Budget-bounded backtracking matcher.
//!
//! All positions are **character** (not byte) indices into the haystack. A
//! position is at the end of input when it is past the slice or holds a
//! newline or NUL.
//!
//! Every function here returns the longest match it can find within `budget`
//! characters, or `None`. Concatenation relies on that: it backtracks by
//! rerunning its left operand with a smaller budget.

use super::ast::{Literal, Node};

/// Match `node` starting at `start`, consuming at most `budget` characters.
///
/// Returns the match length, or `None` when there is no match. A returned
/// length never exceeds `budget`.
pub fn match_node(node: &Node, haystack: &[char], start: usize, budget: usize) -> Option<usize> {
    match node {
        Node::Empty => Some(0),
        Node::Literal(lit) => match_literal(*lit, haystack, start, budget),
        Node::Concatenation(left, right) => {
            match_concatenation(left, right, haystack, start, budget)
        }
        Node::Star(inner) => Some(match_star(inner, haystack, start, budget)),
        Node::Alternation(left, right) => {
            let left_len = match_node(left, haystack, start, budget);
            let right_len = match_node(right, haystack, start, budget);
            // Both sides are always evaluated; the longer wins, `None` loses.
            left_len.max(right_len)
        }
    }
}

/// True when `pos` is at the end of input.
pub fn is_end(haystack: &[char], pos: usize) -> bool {
    haystack.get(pos).is_none_or(|&c| c == '\n' || c == '\0')
}

fn match_literal(lit: Literal, haystack: &[char], start: usize, budget: usize) -> Option<usize> {
    if budget < 1 || is_end(haystack, start) {
        return None;
    }
    if lit.accepts(haystack[start]) {
        Some(1)
    } else {
        None
    }
}

/// Greedy left operand, backing off one candidate at a time.
///
/// Each retry hands `left` a budget one less than its previous match, which
/// yields the next-longest match `left` can make.
fn match_concatenation(
    left: &Node,
    right: &Node,
    haystack: &[char],
    start: usize,
    budget: usize,
) -> Option<usize> {
    let mut left_budget = budget;
    loop {
        let left_len = match_node(left, haystack, start, left_budget)?;
        debug_assert!(left_len <= left_budget);
        if let Some(right_len) = match_node(right, haystack, start + left_len, budget - left_len) {
            return Some(left_len + right_len);
        }
        if left_len == 0 {
            return None;
        }
        tracing::trace!(start, left_len, "concatenation backtracking");
        left_budget = left_len - 1;
    }
}

/// Repeat `inner` until it fails, stopping early on a zero-length repetition
/// so that a nullable inner expression cannot loop forever.
fn match_star(inner: &Node, haystack: &[char], start: usize, budget: usize) -> usize {
    let mut total = 0usize;
    while let Some(len) = match_node(inner, haystack, start + total, budget - total) {
        if len == 0 {
            break;
        }
        total += len;
    }
    total
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::parser::parse;

    const BIG: usize = 65_535;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn mat(pattern: &str, text: &str, start: usize) -> Option<usize> {
        let node = parse(pattern).unwrap();
        match_node(&node, &chars(text), start, BIG)
    }

    fn mat_budget(pattern: &str, text: &str, budget: usize) -> Option<usize> {
        let node = parse(pattern).unwrap();
        match_node(&node, &chars(text), 0, budget)
    }

    // --- End marker ---

    #[test]
    fn end_marker_positions() {
        let hay = chars("ab\ncd");
        assert!(!is_end(&hay, 0));
        assert!(!is_end(&hay, 1));
        assert!(is_end(&hay, 2));
        assert!(is_end(&hay, 5));
        assert!(is_end(&chars("a\0"), 1));
    }

    // --- Empty ---

    #[test]
    fn empty_matches_zero_anywhere() {
        let hay = chars("abc");
        assert_eq!(match_node(&Node::Empty, &hay, 0, BIG), Some(0));
        assert_eq!(match_node(&Node::Empty, &hay, 3, 0), Some(0));
        assert_eq!(match_node(&Node::Empty, &hay, 10, BIG), Some(0));
    }

    // --- Literals ---

    #[test]
    fn literal_matches_same_char() {
        for (pos, c) in "hello".chars().enumerate() {
            let pattern = c.to_string();
            assert_eq!(mat(&pattern, "hello", pos), Some(1), "{c} at {pos}");
        }
    }

    #[test]
    fn literal_rejects_other_char() {
        assert_eq!(mat("x", "hello", 0), None);
        assert_eq!(mat("l", "hello", 1), None);
    }

    #[test]
    fn literal_needs_budget() {
        assert_eq!(mat_budget("a", "a", 0), None);
        assert_eq!(mat_budget("a", "a", 1), Some(1));
    }

    #[test]
    fn wildcard_matches_any_char() {
        assert_eq!(mat(".", "x", 0), Some(1));
        assert_eq!(mat(".", ".", 0), Some(1));
        assert_eq!(mat(".", " ", 0), Some(1));
    }

    #[test]
    fn wildcard_never_matches_at_end() {
        assert_eq!(mat(".", "", 0), None);
        assert_eq!(mat(".", "ab", 2), None);
        assert_eq!(mat(".", "\n", 0), None);
    }

    #[test]
    fn escaped_dot_is_literal() {
        assert_eq!(mat("\\.", ".", 0), Some(1));
        assert_eq!(mat("\\.", "x", 0), None);
    }

    // --- Concatenation ---

    #[test]
    fn concatenation_in_order() {
        assert_eq!(mat("abc", "abcd", 0), Some(3));
        assert_eq!(mat("abc", "abd", 0), None);
        assert_eq!(mat("bc", "abcd", 1), Some(2));
    }

    #[test]
    fn concatenation_backtracks_star() {
        assert_eq!(mat("a*a", "aaa", 0), Some(3));
    }

    #[test]
    fn concatenation_backtracks_to_zero() {
        assert_eq!(mat("a*ab", "ab", 0), Some(2));
    }

    #[test]
    fn concatenation_fails_when_left_exhausted() {
        assert_eq!(mat("a*b", "aaa", 0), None);
    }

    #[test]
    fn concatenation_respects_budget() {
        assert_eq!(mat_budget("a*", "aaaa", 2), Some(2));
        assert_eq!(mat_budget("a*b", "aab", 2), None);
        assert_eq!(mat_budget("a*b", "aab", 3), Some(3));
    }

    #[test]
    fn wildcard_star_backtracks_to_last_occurrence() {
        assert_eq!(mat(".*x", "axbxc", 0), Some(4));
    }

    // --- Star ---

    #[test]
    fn star_is_greedy() {
        assert_eq!(mat(".*", "hello", 0), Some(5));
    }

    #[test]
    fn star_stops_at_newline() {
        assert_eq!(mat(".*", "hel\nlo", 0), Some(3));
    }

    #[test]
    fn star_matches_zero_times() {
        assert_eq!(mat("a*", "bbb", 0), Some(0));
    }

    #[test]
    fn star_over_group() {
        assert_eq!(mat("(ab)*", "ababa", 0), Some(4));
    }

    #[test]
    fn star_over_nullable_terminates() {
        assert_eq!(mat("(a|)*", "aab", 0), Some(2));
        assert_eq!(mat("(a*)*b", "aab", 0), Some(3));
        assert_eq!(mat("()*", "abc", 0), Some(0));
    }

    // --- Alternation ---

    #[test]
    fn alternation_longest_wins() {
        assert_eq!(mat("a|ab", "abc", 0), Some(2));
        assert_eq!(mat("ab|a", "abc", 0), Some(2));
    }

    #[test]
    fn alternation_either_side() {
        assert_eq!(mat("x|b", "b", 0), Some(1));
        assert_eq!(mat("b|x", "b", 0), Some(1));
        assert_eq!(mat("x|y", "b", 0), None);
    }

    #[test]
    fn alternation_under_star() {
        assert_eq!(mat("(a|b)*c", "ababc", 0), Some(5));
    }

    #[test]
    fn empty_alternative() {
        assert_eq!(mat("(a|)b", "b", 0), Some(1));
        assert_eq!(mat("(a|)b", "ab", 0), Some(2));
        assert_eq!(mat("(|a)b", "ab", 0), Some(2));
    }

    #[test]
    fn combined_example() {
        // ((ab)*|d)a(|.)b
        assert_eq!(mat("((ab)*|d)a(|.)b", "ababab", 0), Some(6));
        assert_eq!(mat("((ab)*|d)a(|.)b", "dab", 0), Some(3));
        assert_eq!(mat("((ab)*|d)a(|.)b", "ab", 0), Some(2));
        assert_eq!(mat("((ab)*|d)a(|.)b", "dx", 0), None);
    }

    #[test]
    fn result_never_exceeds_budget() {
        for budget in 0..6 {
            let len = mat_budget("(a|b)*.*", "abab", budget).unwrap();
            assert!(len <= budget);
        }
    }
}
