//! AST types for compiled patterns.

/// One node of a compiled pattern.
///
/// Children are owned through `Box`, so a tree has no sharing and no cycles,
/// and dropping the root releases every node exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Exactly one input character.
    Literal(Literal),
    /// `left` followed by `right`.
    Concatenation(Box<Node>, Box<Node>),
    /// Zero or more repetitions of the inner node.
    Star(Box<Node>),
    /// `left` or `right`; the longer match wins.
    Alternation(Box<Node>, Box<Node>),
    /// The empty string. Produced for every zero-length subexpression.
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Literal {
    Char(char),
    /// `.`: any character except the end marker.
    Wildcard,
}

impl Literal {
    pub fn accepts(self, ch: char) -> bool {
        match self {
            Literal::Char(c) => c == ch,
            Literal::Wildcard => true,
        }
    }
}

impl Node {
    pub fn literal(ch: char) -> Self {
        Node::Literal(Literal::Char(ch))
    }

    pub fn wildcard() -> Self {
        Node::Literal(Literal::Wildcard)
    }

    pub fn concat(left: Node, right: Node) -> Self {
        Node::Concatenation(Box::new(left), Box::new(right))
    }

    pub fn star(inner: Node) -> Self {
        Node::Star(Box::new(inner))
    }

    pub fn alternation(left: Node, right: Node) -> Self {
        Node::Alternation(Box::new(left), Box::new(right))
    }

    /// True when this node can match the empty string.
    pub fn is_nullable(&self) -> bool {
        match self {
            Node::Empty | Node::Star(_) => true,
            Node::Literal(_) => false,
            Node::Concatenation(left, right) => left.is_nullable() && right.is_nullable(),
            Node::Alternation(left, right) => left.is_nullable() || right.is_nullable(),
        }
    }

    /// True when some `Star` in this tree repeats a nullable expression.
    pub fn has_nullable_star(&self) -> bool {
        match self {
            Node::Empty | Node::Literal(_) => false,
            Node::Star(inner) => inner.is_nullable() || inner.has_nullable_star(),
            Node::Concatenation(left, right) | Node::Alternation(left, right) => {
                left.has_nullable_star() || right.has_nullable_star()
            }
        }
    }

    pub fn node_count(&self) -> usize {
        match self {
            Node::Empty | Node::Literal(_) => 1,
            Node::Star(inner) => 1 + inner.node_count(),
            Node::Concatenation(left, right) | Node::Alternation(left, right) => {
                1 + left.node_count() + right.node_count()
            }
        }
    }
}
