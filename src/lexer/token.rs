use crate::ast::{AtCode, Category};

/// A pattern string token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A normal character.
    Literal(char),
    /// A character given by a `\` escape, including `\n`, `\x41` etc.
    EscapedLiteral(char),
    /// `.`
    Any,
    /// `^`
    Caret,
    /// `$`
    Dollar,
    /// `|`
    Pipe,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`. Only produced inside a set.
    RBracket,
    /// `-`. Only produced inside a set.
    Minus,
    /// `*`
    Star,
    /// `+`
    Plus,
    /// `?`
    Question,
    /// `{m}`, `{m,}`, `{,n}` or `{m,n}`. An open upper bound is `None`.
    Counted { min: usize, max: Option<usize> },
    /// `\d`, `\W` etc.
    Category(Category),
    /// `\A`, `\Z`, `\b`, `\B`.
    Anchor(AtCode),
    /// `\1` ... `\99`.
    GroupRef(usize),
}

impl Token {
    /// Returns the character a token stands for when it is used literally.
    #[must_use]
    pub const fn to_char(self) -> Option<char> {
        Some(match self {
            Token::Literal(c) | Token::EscapedLiteral(c) => c,
            Token::Any => '.',
            Token::Caret => '^',
            Token::Dollar => '$',
            Token::Pipe => '|',
            Token::LParen => '(',
            Token::RParen => ')',
            Token::LBracket => '[',
            Token::RBracket => ']',
            Token::Minus => '-',
            Token::Star => '*',
            Token::Plus => '+',
            Token::Question => '?',
            Token::Counted { .. }
            | Token::Category(_)
            | Token::Anchor(_)
            | Token::GroupRef(_) => return None,
        })
    }

    /// Returns `true` for tokens that repeat the preceding item.
    #[must_use]
    pub const fn is_quantifier(self) -> bool {
        matches!(
            self,
            Token::Star | Token::Plus | Token::Question | Token::Counted { .. }
        )
    }
}

/// A [`Token`] with associated position information.
#[derive(Clone, Copy, Debug, Eq)]
pub struct PosToken {
    /// The start byte offset of the token in the pattern string.
    pub pos: usize,
    /// The token.
    pub token: Token,
}

impl core::ops::Deref for PosToken {
    type Target = Token;

    fn deref(&self) -> &Self::Target {
        &self.token
    }
}

impl PartialEq for PosToken {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.token == other.token
    }
}
