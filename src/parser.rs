use super::{
    Error, Result,
    ast::{AstRoot, AtCode, Class, ClassItem, MAXREPEAT, Node, Repeat},
    charset,
    lexer::{Lexer, PosToken, Token},
};
use std::collections::HashMap;

/// Why a pattern string could not be parsed.
#[derive(Debug, Eq, thiserror::Error, PartialEq)]
pub enum SyntaxError {
    #[error("bad escape (end of pattern)")]
    TrailingBackslash,

    #[error("bad escape '\\{0}'")]
    BadEscape(char),

    #[error("incomplete escape")]
    IncompleteEscape,

    #[error("octal escape value \\{0:o} outside of range 0-0o377")]
    OctalTooLarge(u32),

    #[error("unterminated character set")]
    UnterminatedSet,

    #[error("bad character range")]
    BadRange,

    #[error(transparent)]
    CharSet(#[from] charset::Error),

    #[error("nothing to repeat")]
    NothingToRepeat,

    #[error("multiple repeat")]
    MultipleRepeat,

    #[error("the repetition number is too large")]
    RepeatTooLarge,

    #[error("missing ), unterminated subpattern")]
    MissingParen,

    #[error("unbalanced parenthesis")]
    UnbalancedParen,

    #[error("missing group name")]
    MissingGroupName,

    #[error("bad character in group name '{0}'")]
    BadGroupName(String),

    #[error("redefinition of group name '{0}'")]
    DuplicateGroupName(String),

    #[error("unknown group name '{0}'")]
    UnknownGroupName(String),

    #[error("invalid group reference {0}")]
    InvalidGroupReference(usize),

    #[error("cannot refer to an open group")]
    OpenGroupReference,

    #[error("unknown extension ?{0}")]
    UnknownExtension(char),

    #[error("unexpected end of pattern")]
    UnexpectedEnd,

    #[error("unknown flag")]
    UnknownFlag,

    #[error("missing ), unterminated comment")]
    UnterminatedComment,
}

impl SyntaxError {
    #[must_use]
    pub(crate) fn at(self, pos: usize) -> Error {
        Error::InvalidInput { pos, err: self }
    }
}

/// Options that change how a pattern string is read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flags {
    /// Ignore whitespace and `#` comments outside of sets, like `(?x)`.
    pub verbose: bool,
}

impl Flags {
    pub const VERBOSE: Flags = Flags { verbose: true };
}

/// Parses a regular expression into an AST.
///
/// # Errors
///
/// If the pattern string cannot be parsed, an [`Error`] is returned.
pub fn parse_pattern(pattern: &str, flags: Flags) -> Result<AstRoot> {
    Parser::new(pattern, flags).parse()
}

/// Converts a pattern string into an AST.
struct Parser<'a> {
    lexer: Lexer<'a>,
    group_count: usize,
    open_groups: Vec<usize>,
    group_names: HashMap<&'a str, usize>,
}

impl<'a> Parser<'a> {
    fn new(pattern: &'a str, flags: Flags) -> Self {
        let mut lexer = Lexer::new(pattern);
        lexer.set_verbose(flags.verbose);
        Parser {
            lexer,
            group_count: 0,
            open_groups: Vec::new(),
            group_names: HashMap::new(),
        }
    }

    fn parse(mut self) -> Result<AstRoot> {
        let ast = self.parse_alternation()?;

        if let Some(PosToken { pos, .. }) = self.lexer.next_token()? {
            return Err(SyntaxError::UnbalancedParen.at(pos));
        }

        Ok(AstRoot::new(ast, self.group_count))
    }

    fn parse_alternation(&mut self) -> Result<Vec<Node>> {
        let first = self.parse_sequence()?;
        if !self.peek_is(Token::Pipe)? {
            return Ok(first);
        }

        let mut branches = vec![first];
        while self.peek_is(Token::Pipe)? {
            self.lexer.next_token()?;
            branches.push(self.parse_sequence()?);
        }

        Ok(vec![Node::Branch(branches)])
    }

    fn parse_sequence(&mut self) -> Result<Vec<Node>> {
        let mut nodes = Vec::new();

        while let Some(PosToken { token, .. }) = self.lexer.peek()?
            && !matches!(token, Token::Pipe | Token::RParen)
        {
            if let Some(node) = self.parse_item()? {
                nodes.push(node);
            }
        }

        Ok(nodes)
    }

    fn peek_is(&self, expected: Token) -> Result<bool> {
        Ok(self.lexer.peek()?.is_some_and(|t| t.token == expected))
    }

    fn parse_item(&mut self) -> Result<Option<Node>> {
        let Some(item) = self.parse_base()? else {
            return Ok(None);
        };

        let Some(PosToken { pos, token }) = self.lexer.peek()? else {
            return Ok(Some(item));
        };
        let Some((min, max)) = repeat_bounds(token) else {
            return Ok(Some(item));
        };
        self.lexer.next_token()?;

        if matches!(item, Node::At(_)) {
            return Err(SyntaxError::NothingToRepeat.at(pos));
        }
        if min > max {
            return Err(Error::InvalidRepetition { min, max });
        }

        let repeat = Repeat {
            min,
            max,
            body: vec![item],
        };

        let node = match self.lexer.peek()?.map(|t| t.token) {
            Some(Token::Question) => {
                self.lexer.next_token()?;
                Node::MinRepeat(repeat)
            }
            Some(Token::Plus) => {
                return Err(Error::UnsupportedOpcode("possessive_repeat".to_string()));
            }
            _ => Node::MaxRepeat(repeat),
        };

        if let Some(PosToken { pos, token }) = self.lexer.peek()?
            && token.is_quantifier()
        {
            return Err(SyntaxError::MultipleRepeat.at(pos));
        }

        Ok(Some(node))
    }

    fn parse_base(&mut self) -> Result<Option<Node>> {
        let Some(PosToken { pos, token }) = self.lexer.next_token()? else {
            return Ok(None);
        };

        let node = match token {
            Token::Literal(c) | Token::EscapedLiteral(c) => Node::Literal(c),
            Token::RBracket => Node::Literal(']'),
            Token::Minus => Node::Literal('-'),
            Token::Any => Node::Any,
            Token::Caret => Node::At(AtCode::Beginning),
            Token::Dollar => Node::At(AtCode::End),
            Token::Anchor(code) => Node::At(code),
            Token::Category(category) => Node::Category(category),
            Token::GroupRef(group) => self.group_ref(pos, group)?,
            Token::LBracket => self.parse_set(pos)?,
            Token::LParen => return self.parse_group(pos),
            Token::Star | Token::Plus | Token::Question | Token::Counted { .. } => {
                return Err(SyntaxError::NothingToRepeat.at(pos));
            }
            Token::Pipe | Token::RParen => return Err(SyntaxError::UnbalancedParen.at(pos)),
        };

        Ok(Some(node))
    }

    fn parse_set(&mut self, open_pos: usize) -> Result<Node> {
        let mut items = Vec::new();
        let negated = self.lexer.eat('^');

        if self.lexer.eat(']') {
            items.push(ClassItem::Literal(']'));
        }

        loop {
            let Some(PosToken { pos, token }) = self.lexer.next_set_token()? else {
                return Err(SyntaxError::UnterminatedSet.at(open_pos));
            };

            let start = match token {
                Token::RBracket => break,
                Token::Category(category) => {
                    items.push(ClassItem::Category(category));
                    continue;
                }
                token => token.to_char().ok_or_else(|| SyntaxError::BadRange.at(pos))?,
            };

            if !self.lexer.peek_set()?.is_some_and(|t| t.token == Token::Minus) {
                items.push(ClassItem::Literal(start));
                continue;
            }

            // `a-` followed by `]` keeps the `-` as a literal for the next
            // iteration.
            let mut ahead = self.lexer.clone();
            ahead.next_set_token()?;
            match ahead.next_set_token()? {
                None => return Err(SyntaxError::UnterminatedSet.at(open_pos)),
                Some(PosToken {
                    token: Token::RBracket,
                    ..
                }) => items.push(ClassItem::Literal(start)),
                Some(PosToken { token, .. }) => {
                    let end = token.to_char().ok_or_else(|| SyntaxError::BadRange.at(pos))?;
                    if start > end {
                        return Err(SyntaxError::from(charset::Error::Range(start, end)).at(pos));
                    }
                    items.push(ClassItem::Range(start, end));
                    self.lexer = ahead;
                }
            }
        }

        if let [ClassItem::Literal(c)] = items[..] {
            return Ok(if negated {
                Node::NotLiteral(c)
            } else {
                Node::Literal(c)
            });
        }

        Ok(Node::In(Class { negated, items }))
    }

    fn parse_group(&mut self, open_pos: usize) -> Result<Option<Node>> {
        if !self.lexer.eat('?') {
            return self.capture(open_pos, None).map(Some);
        }

        let Some(c) = self.lexer.bump() else {
            return Err(SyntaxError::UnexpectedEnd.at(open_pos));
        };

        let node = match c {
            ':' => Node::Subpattern {
                group: None,
                body: self.group_body(open_pos)?,
            },
            '=' => Node::Assert(self.group_body(open_pos)?),
            '!' => Node::AssertNot(self.group_body(open_pos)?),
            '<' if self.lexer.eat('=') => Node::Assert(self.group_body(open_pos)?),
            '<' if self.lexer.eat('!') => Node::AssertNot(self.group_body(open_pos)?),
            '<' => {
                let name = self.group_name('>')?;
                self.capture(open_pos, Some(name))?
            }
            'P' if self.lexer.eat('<') => {
                let name = self.group_name('>')?;
                self.capture(open_pos, Some(name))?
            }
            'P' if self.lexer.eat('=') => {
                let name = self.group_name(')')?;
                let group = *self
                    .group_names
                    .get(name)
                    .ok_or_else(|| SyntaxError::UnknownGroupName(name.to_string()).at(open_pos))?;
                self.group_ref(open_pos, group)?
            }
            '#' => {
                if self.lexer.read_until(')').is_none() {
                    return Err(SyntaxError::UnterminatedComment.at(open_pos));
                }
                return Ok(None);
            }
            '(' => return Err(Error::UnsupportedOpcode("groupref_exists".to_string())),
            '>' => return Err(Error::UnsupportedOpcode("atomic_group".to_string())),
            c if is_flag(c) || c == '-' => return self.inline_flags(open_pos, c),
            c => return Err(SyntaxError::UnknownExtension(c).at(open_pos)),
        };

        Ok(Some(node))
    }

    /// Handles `(?imsx)` and `(?imsx-imsx:...)`. Only `x` changes how the
    /// pattern is read; the other flags do not affect generation.
    fn inline_flags(&mut self, open_pos: usize, first: char) -> Result<Option<Node>> {
        let mut verbose = None;
        let mut enable = true;
        let mut c = first;
        loop {
            match c {
                'x' => verbose = Some(enable),
                '-' if enable => enable = false,
                c if is_flag(c) => {}
                ')' if enable => {
                    if let Some(verbose) = verbose {
                        self.lexer.set_verbose(verbose);
                    }
                    return Ok(None);
                }
                ':' => break,
                _ => return Err(SyntaxError::UnknownFlag.at(open_pos)),
            }
            c = self
                .lexer
                .bump()
                .ok_or_else(|| SyntaxError::UnknownFlag.at(open_pos))?;
        }

        let outer = self.lexer.verbose();
        if let Some(verbose) = verbose {
            self.lexer.set_verbose(verbose);
        }
        let body = self.group_body(open_pos);
        self.lexer.set_verbose(outer);

        Ok(Some(Node::Subpattern {
            group: None,
            body: body?,
        }))
    }

    fn group_name(&mut self, terminator: char) -> Result<&'a str> {
        let pos = self.lexer.tell();
        let Some(name) = self.lexer.read_until(terminator) else {
            return Err(SyntaxError::MissingGroupName.at(pos));
        };
        if name.is_empty() {
            return Err(SyntaxError::MissingGroupName.at(pos));
        }
        let mut chars = name.chars();
        let valid = chars
            .next()
            .is_some_and(|c| c == '_' || c.is_alphabetic())
            && chars.all(|c| c == '_' || c.is_alphanumeric());
        if valid {
            Ok(name)
        } else {
            Err(SyntaxError::BadGroupName(name.to_string()).at(pos))
        }
    }

    fn capture(&mut self, open_pos: usize, name: Option<&'a str>) -> Result<Node> {
        self.group_count += 1;
        let index = self.group_count;

        if let Some(name) = name
            && self.group_names.insert(name, index).is_some()
        {
            return Err(SyntaxError::DuplicateGroupName(name.to_string()).at(open_pos));
        }

        self.open_groups.push(index);
        let body = self.group_body(open_pos)?;
        self.open_groups.pop();

        Ok(Node::group(index, body))
    }

    fn group_body(&mut self, open_pos: usize) -> Result<Vec<Node>> {
        let body = self.parse_alternation()?;
        match self.lexer.next_token()? {
            Some(PosToken {
                token: Token::RParen,
                ..
            }) => Ok(body),
            _ => Err(SyntaxError::MissingParen.at(open_pos)),
        }
    }

    fn group_ref(&self, pos: usize, group: usize) -> Result<Node> {
        if group == 0 || group > self.group_count {
            return Err(SyntaxError::InvalidGroupReference(group).at(pos));
        }
        if self.open_groups.contains(&group) {
            return Err(SyntaxError::OpenGroupReference.at(pos));
        }
        Ok(Node::GroupRef(group))
    }
}

fn is_flag(c: char) -> bool {
    matches!(c, 'a' | 'i' | 'L' | 'm' | 's' | 'u' | 'x')
}

fn repeat_bounds(token: Token) -> Option<(usize, usize)> {
    match token {
        Token::Star => Some((0, MAXREPEAT)),
        Token::Plus => Some((1, MAXREPEAT)),
        Token::Question => Some((0, 1)),
        Token::Counted { min, max } => Some((min, max.unwrap_or(MAXREPEAT))),
        _ => None,
    }
}
