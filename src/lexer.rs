use super::{
    Result,
    ast::{AtCode, Category, MAXREPEAT},
    parser::SyntaxError,
};

pub mod token;

pub use token::{PosToken, Token};

fn is_octal_digit(c: char) -> bool {
    matches!(c, '0'..='7')
}

/// Splits a pattern string into [`Token`]s.
///
/// The lexer has two modes: [`Lexer::next_token`] for the pattern body and
/// [`Lexer::next_set_token`] for the inside of a `[...]` set. The parser
/// decides which one to call.
#[derive(Clone, Debug)]
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    verbose: bool,
}

impl<'a> Lexer<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            pos: 0,
            verbose: false,
        }
    }

    /// In verbose mode whitespace and `#` comments between tokens are skipped.
    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    #[must_use]
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// The current byte offset into the pattern.
    #[must_use]
    pub fn tell(&self) -> usize {
        self.pos
    }

    #[must_use]
    pub fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consumes `c` if it is the next character.
    pub fn eat(&mut self, c: char) -> bool {
        if self.peek_char() == Some(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consumes everything up to and including `terminator`, returning the
    /// text before it. Returns `None` without consuming anything if the
    /// terminator never appears.
    pub fn read_until(&mut self, terminator: char) -> Option<&'a str> {
        let rest = &self.input[self.pos..];
        let end = rest.find(terminator)?;
        self.pos += end + terminator.len_utf8();
        Some(&rest[..end])
    }

    /// Returns the next pattern token without consuming it.
    pub fn peek(&self) -> Result<Option<PosToken>> {
        self.clone().next_token()
    }

    /// Returns the next set token without consuming it.
    pub fn peek_set(&self) -> Result<Option<PosToken>> {
        self.clone().next_set_token()
    }

    /// Lexes the next token of the pattern body.
    pub fn next_token(&mut self) -> Result<Option<PosToken>> {
        if self.verbose {
            self.skip_ignored();
        }

        let pos = self.pos;
        let Some(c) = self.bump() else {
            return Ok(None);
        };

        let token = match c {
            '.' => Token::Any,
            '^' => Token::Caret,
            '$' => Token::Dollar,
            '|' => Token::Pipe,
            '(' => Token::LParen,
            ')' => Token::RParen,
            '[' => Token::LBracket,
            '*' => Token::Star,
            '+' => Token::Plus,
            '?' => Token::Question,
            '{' => self.counted(pos)?.unwrap_or(Token::Literal('{')),
            '\\' => self.escape(pos, false)?,
            c => Token::Literal(c),
        };

        Ok(Some(PosToken { pos, token }))
    }

    /// Lexes the next token inside a `[...]` set.
    pub fn next_set_token(&mut self) -> Result<Option<PosToken>> {
        let pos = self.pos;
        let Some(c) = self.bump() else {
            return Ok(None);
        };

        let token = match c {
            ']' => Token::RBracket,
            '-' => Token::Minus,
            '\\' => self.escape(pos, true)?,
            c => Token::Literal(c),
        };

        Ok(Some(PosToken { pos, token }))
    }

    fn skip_ignored(&mut self) {
        while let Some(c) = self.peek_char() {
            if c == '#' {
                if self.read_until('\n').is_none() {
                    self.pos = self.input.len();
                }
            } else if c.is_whitespace() {
                self.bump();
            } else {
                break;
            }
        }
    }

    fn digits(&mut self) -> &'a str {
        let start = self.pos;
        while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
            self.pos += 1;
        }
        &self.input[start..self.pos]
    }

    /// Lexes the rest of a `{m,n}` quantifier. If the braces do not form a
    /// quantifier, nothing is consumed and `None` is returned.
    fn counted(&mut self, pos: usize) -> Result<Option<Token>> {
        let start = self.pos;
        let lo = self.digits();
        let hi = if self.eat(',') {
            Some(self.digits())
        } else {
            None
        };

        if (lo.is_empty() && hi.is_none()) || !self.eat('}') {
            self.pos = start;
            return Ok(None);
        }

        let parse = |digits: &str| match digits.parse::<usize>() {
            Ok(n) if n < MAXREPEAT => Ok(n),
            _ => Err(SyntaxError::RepeatTooLarge.at(pos)),
        };

        let min = if lo.is_empty() { 0 } else { parse(lo)? };
        let max = match hi {
            None => Some(min),
            Some("") => None,
            Some(hi) => Some(parse(hi)?),
        };

        Ok(Some(Token::Counted { min, max }))
    }

    fn escape(&mut self, pos: usize, in_set: bool) -> Result<Token> {
        let Some(c) = self.bump() else {
            return Err(SyntaxError::TrailingBackslash.at(pos));
        };

        if let Some(category) = Category::from_escape(c) {
            return Ok(Token::Category(category));
        }

        let literal = match c {
            'a' => '\x07',
            'f' => '\x0c',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'v' => '\x0b',
            'b' if in_set => '\x08',
            'x' => self.hex(pos, 2)?,
            'u' => self.hex(pos, 4)?,
            'U' => self.hex(pos, 8)?,
            '0' => self.octal(pos, '0')?,
            '1'..='9' if in_set => {
                if is_octal_digit(c) {
                    self.octal(pos, c)?
                } else {
                    return Err(SyntaxError::BadEscape(c).at(pos));
                }
            }
            '1'..='9' => return self.group_ref_or_octal(pos, c),
            'A' if !in_set => return Ok(Token::Anchor(AtCode::BeginningString)),
            'Z' if !in_set => return Ok(Token::Anchor(AtCode::EndString)),
            'b' => return Ok(Token::Anchor(AtCode::Boundary)),
            'B' if !in_set => return Ok(Token::Anchor(AtCode::NonBoundary)),
            c if c.is_ascii_alphanumeric() => {
                return Err(SyntaxError::BadEscape(c).at(pos));
            }
            c => c,
        };

        Ok(Token::EscapedLiteral(literal))
    }

    fn hex(&mut self, pos: usize, len: usize) -> Result<char> {
        let rest = &self.input[self.pos..];
        let digits = rest
            .get(..len)
            .filter(|digits| digits.chars().all(|c| c.is_ascii_hexdigit()))
            .ok_or_else(|| SyntaxError::IncompleteEscape.at(pos))?;
        let c = u32::from_str_radix(digits, 16)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(|| SyntaxError::IncompleteEscape.at(pos))?;
        self.pos += len;
        Ok(c)
    }

    /// Lexes up to two more octal digits after `first`.
    fn octal(&mut self, pos: usize, first: char) -> Result<char> {
        let mut value = first.to_digit(8).unwrap_or_default();
        for _ in 0..2 {
            match self.peek_char().and_then(|c| c.to_digit(8)) {
                Some(digit) => {
                    value = value * 8 + digit;
                    self.pos += 1;
                }
                None => break,
            }
        }
        u8::try_from(value)
            .map(char::from)
            .map_err(|_| SyntaxError::OctalTooLarge(value).at(pos))
    }

    /// `\1` to `\99` are group references, but three octal digits (`\101`)
    /// are a character.
    fn group_ref_or_octal(&mut self, pos: usize, first: char) -> Result<Token> {
        let rest = &self.input[self.pos..];
        let mut next = rest.chars();
        if is_octal_digit(first)
            && next.next().is_some_and(is_octal_digit)
            && next.next().is_some_and(is_octal_digit)
        {
            return self.octal(pos, first).map(Token::EscapedLiteral);
        }

        let mut group = first.to_digit(10).map_or(0, |d| d as usize);
        if let Some(digit) = self.peek_char().and_then(|c| c.to_digit(10)) {
            group = group * 10 + digit as usize;
            self.pos += 1;
        }
        Ok(Token::GroupRef(group))
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(Some(token)) => Some(Ok(token.token)),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}
