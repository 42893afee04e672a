use std::{fmt, str::FromStr};

/// The kind tag of a pattern node, named after the parser opcodes the node
/// tree is modelled on.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Opcode {
    Literal,
    NotLiteral,
    Any,
    In,
    Range,
    Category,
    Branch,
    Subpattern,
    Assert,
    AssertNot,
    GroupRef,
    MinRepeat,
    MaxRepeat,
    Negate,
    At,
}

impl Opcode {
    pub const ALL: [Opcode; 15] = [
        Opcode::Literal,
        Opcode::NotLiteral,
        Opcode::Any,
        Opcode::In,
        Opcode::Range,
        Opcode::Category,
        Opcode::Branch,
        Opcode::Subpattern,
        Opcode::Assert,
        Opcode::AssertNot,
        Opcode::GroupRef,
        Opcode::MinRepeat,
        Opcode::MaxRepeat,
        Opcode::Negate,
        Opcode::At,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Opcode::Literal => "literal",
            Opcode::NotLiteral => "not_literal",
            Opcode::Any => "any",
            Opcode::In => "in",
            Opcode::Range => "range",
            Opcode::Category => "category",
            Opcode::Branch => "branch",
            Opcode::Subpattern => "subpattern",
            Opcode::Assert => "assert",
            Opcode::AssertNot => "assert_not",
            Opcode::GroupRef => "groupref",
            Opcode::MinRepeat => "min_repeat",
            Opcode::MaxRepeat => "max_repeat",
            Opcode::Negate => "negate",
            Opcode::At => "at",
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Opcode {
    type Err = crate::Error;

    /// Parses an opcode name case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Opcode::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| crate::Error::UnsupportedOpcode(s.to_owned()))
    }
}
