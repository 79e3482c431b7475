//! Recursive descent parser for pattern strings.

use std::iter::Peekable;
use std::str::Chars;

use phf::{Map, phf_map};

use super::ast::Node;

/// Errors that can occur while compiling a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    UnterminatedGroup,
    DanglingEscape,
    PatternTooLong { len: usize, max: usize },
    NonTerminatingRepetition,
}

impl std::fmt::Display for PatternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnterminatedGroup => write!(f, "Unterminated group '(' in pattern"),
            Self::DanglingEscape => write!(f, "Escape '\\' at end of pattern"),
            Self::PatternTooLong { len, max } => {
                write!(f, "Pattern too long: {len} characters (max {max})")
            }
            Self::NonTerminatingRepetition => {
                write!(f, "'*' applied to an expression that can match the empty string")
            }
        }
    }
}

impl std::error::Error for PatternError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meta {
    Wildcard,
    Escape,
    Open,
    Close,
    Alternate,
    Star,
    End,
}

/// Characters with a special meaning outside an escape.
const METACHARS: Map<char, Meta> = phf_map! {
    '.' => Meta::Wildcard,
    '\\' => Meta::Escape,
    '(' => Meta::Open,
    ')' => Meta::Close,
    '|' => Meta::Alternate,
    '*' => Meta::Star,
    '\n' => Meta::End,
    '\0' => Meta::End,
};

fn is_end(ch: char) -> bool {
    METACHARS.get(&ch) == Some(&Meta::End)
}

/// Parse a pattern string into a [`Node`] tree.
///
/// Parsing stops at the first newline, NUL, or end of string. An unmatched
/// `)` at the top level also ends the pattern; anything after it is ignored.
pub fn parse(input: &str) -> Result<Node, PatternError> {
    let mut parser = Parser {
        chars: input.chars().peekable(),
    };
    let root = parser.parse_pattern()?;
    if parser.peek_meta() == Some(Meta::Close) {
        tracing::debug!("unmatched ')' ends the pattern");
    }
    Ok(root)
}

/// Number of pattern characters before the terminator.
pub fn pattern_len(input: &str) -> usize {
    input.chars().take_while(|&c| !is_end(c)).count()
}

struct Parser<'a> {
    chars: Peekable<Chars<'a>>,
}

impl Parser<'_> {
    /// `pattern := term* ( '|' pattern )?`
    ///
    /// Returns at end of pattern or at a `)`, leaving the `)` unconsumed.
    fn parse_pattern(&mut self) -> Result<Node, PatternError> {
        let mut left: Option<Node> = None;
        loop {
            match self.peek_meta() {
                Some(Meta::End) | Some(Meta::Close) => break,
                Some(Meta::Alternate) => {
                    self.chars.next(); // consume '|'
                    let right = self.parse_pattern()?;
                    left = Some(Node::alternation(left.unwrap_or(Node::Empty), right));
                    continue;
                }
                _ => {}
            }
            let Some(ch) = self.chars.next() else {
                break;
            };
            let term = self.parse_term(ch)?;
            left = Some(match left {
                Some(prev) => Node::concat(prev, term),
                None => term,
            });
        }
        Ok(left.unwrap_or(Node::Empty))
    }

    /// `term := atom '*'?` where `ch` is the first character of the atom.
    fn parse_term(&mut self, ch: char) -> Result<Node, PatternError> {
        let atom = self.parse_atom(ch)?;
        if self.peek_meta() == Some(Meta::Star) {
            self.chars.next();
            return Ok(Node::star(atom));
        }
        Ok(atom)
    }

    fn parse_atom(&mut self, ch: char) -> Result<Node, PatternError> {
        match METACHARS.get(&ch) {
            Some(Meta::Wildcard) => Ok(Node::wildcard()),
            Some(Meta::Escape) => match self.chars.next() {
                Some(c) if !is_end(c) => Ok(Node::literal(c)),
                _ => Err(PatternError::DanglingEscape),
            },
            Some(Meta::Open) => {
                let inner = self.parse_pattern()?;
                match self.chars.next() {
                    Some(')') => Ok(inner),
                    _ => Err(PatternError::UnterminatedGroup),
                }
            }
            // A '*' with nothing to repeat is an ordinary character.
            _ => Ok(Node::literal(ch)),
        }
    }

    /// Classify the next character. End of string reads as [`Meta::End`];
    /// `None` means an ordinary character.
    fn peek_meta(&mut self) -> Option<Meta> {
        match self.chars.peek() {
            None => Some(Meta::End),
            Some(c) => METACHARS.get(c).copied(),
        }
    }
}
