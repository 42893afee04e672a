use super::{Category, Class, Opcode, Repeat};

/// One element of a parsed pattern.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Node {
    Literal(char),
    NotLiteral(char),
    Any, // .
    In(Class),
    Category(Category),

    /// Alternatives separated by `|`.
    Branch(Vec<Vec<Node>>),

    /// A group. `group` is the 1-based capture index, `None` for `(?:...)`.
    Subpattern {
        group: Option<usize>,
        body: Vec<Node>,
    },

    // Lookaround
    Assert(Vec<Node>),    // (?=...) (?<=...)
    AssertNot(Vec<Node>), // (?!...) (?<!...)

    GroupRef(usize), // \1, (?P=name)

    MinRepeat(Repeat), // *? +? ?? {m,n}?
    MaxRepeat(Repeat), // * + ? {m,n}

    At(AtCode),
}

impl Node {
    #[must_use]
    pub const fn opcode(&self) -> Opcode {
        match self {
            Node::Literal(_) => Opcode::Literal,
            Node::NotLiteral(_) => Opcode::NotLiteral,
            Node::Any => Opcode::Any,
            Node::In(_) => Opcode::In,
            Node::Category(_) => Opcode::Category,
            Node::Branch(_) => Opcode::Branch,
            Node::Subpattern { .. } => Opcode::Subpattern,
            Node::Assert(_) => Opcode::Assert,
            Node::AssertNot(_) => Opcode::AssertNot,
            Node::GroupRef(_) => Opcode::GroupRef,
            Node::MinRepeat(_) => Opcode::MinRepeat,
            Node::MaxRepeat(_) => Opcode::MaxRepeat,
            Node::At(_) => Opcode::At,
        }
    }

    /// A capturing group with the given index.
    #[must_use]
    pub fn group(group: usize, body: Vec<Node>) -> Self {
        Node::Subpattern {
            group: Some(group),
            body,
        }
    }

    /// A greedy repetition of `body`.
    #[must_use]
    pub fn repeat(min: usize, max: usize, body: Vec<Node>) -> Self {
        Node::MaxRepeat(Repeat { min, max, body })
    }

    /// Literal nodes for each character of `s`.
    #[must_use]
    pub fn literals(s: &str) -> Vec<Node> {
        s.chars().map(Node::Literal).collect()
    }
}

/// Zero-width position assertions.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AtCode {
    Beginning,       // ^
    BeginningString, // \A
    End,             // $
    EndString,       // \Z
    Boundary,        // \b
    NonBoundary,     // \B
}
