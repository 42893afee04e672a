use xeger::{
    Category, Error, Result, SyntaxError,
    ast::AtCode,
    lexer::{Lexer, Token},
};

fn lex_all(input: &str) -> Result<Vec<Token>> {
    Lexer::new(input).collect()
}

fn lex_set(input: &str) -> Result<Vec<Token>> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next_set_token()? {
        tokens.push(token.token);
    }
    Ok(tokens)
}

#[test]
fn test_basic_tokens_lexer() -> Result<()> {
    assert_eq!(
        lex_all("abc")?,
        vec![
            Token::Literal('a'),
            Token::Literal('b'),
            Token::Literal('c')
        ]
    );
    assert_eq!(
        lex_all("a.c")?,
        vec![Token::Literal('a'), Token::Any, Token::Literal('c')]
    );
    assert_eq!(
        lex_all("()[|")?,
        vec![Token::LParen, Token::RParen, Token::LBracket, Token::Pipe]
    );
    assert_eq!(
        lex_all("^$*+?")?,
        vec![
            Token::Caret,
            Token::Dollar,
            Token::Star,
            Token::Plus,
            Token::Question
        ]
    );
    assert_eq!(lex_all("]-")?, vec![Token::Literal(']'), Token::Literal('-')]);
    assert_eq!(lex_all("é")?, vec![Token::Literal('é')]);
    Ok(())
}

#[test]
fn test_counted_lexer() -> Result<()> {
    assert_eq!(
        lex_all("{3}")?,
        vec![Token::Counted {
            min: 3,
            max: Some(3)
        }]
    );
    assert_eq!(
        lex_all("{2,}{,5}{1,4}{,}")?,
        vec![
            Token::Counted { min: 2, max: None },
            Token::Counted {
                min: 0,
                max: Some(5)
            },
            Token::Counted {
                min: 1,
                max: Some(4)
            },
            Token::Counted { min: 0, max: None },
        ]
    );
    Ok(())
}

#[test]
fn test_brace_literal_lexer() -> Result<()> {
    assert_eq!(
        lex_all("{}")?,
        vec![Token::Literal('{'), Token::Literal('}')]
    );
    assert_eq!(
        lex_all("{a}")?,
        vec![Token::Literal('{'), Token::Literal('a'), Token::Literal('}')]
    );
    assert_eq!(
        lex_all("{1,2")?,
        vec![
            Token::Literal('{'),
            Token::Literal('1'),
            Token::Literal(','),
            Token::Literal('2')
        ]
    );
    Ok(())
}

#[test]
fn test_escape_tokens_lexer() -> Result<()> {
    assert_eq!(
        lex_all(r"\.\\\[")?,
        vec![
            Token::EscapedLiteral('.'),
            Token::EscapedLiteral('\\'),
            Token::EscapedLiteral('[')
        ]
    );
    assert_eq!(
        lex_all(r"\n\t\x41é\0\101")?,
        vec![
            Token::EscapedLiteral('\n'),
            Token::EscapedLiteral('\t'),
            Token::EscapedLiteral('A'),
            Token::Literal('é'),
            Token::EscapedLiteral('\0'),
            Token::EscapedLiteral('A'),
        ]
    );
    assert_eq!(
        lex_all(r"\d\W\s")?,
        vec![
            Token::Category(Category::Digit),
            Token::Category(Category::NotWord),
            Token::Category(Category::Space)
        ]
    );
    assert_eq!(
        lex_all(r"\A\b\B\Z")?,
        vec![
            Token::Anchor(AtCode::BeginningString),
            Token::Anchor(AtCode::Boundary),
            Token::Anchor(AtCode::NonBoundary),
            Token::Anchor(AtCode::EndString)
        ]
    );
    assert_eq!(
        lex_all(r"\1\12")?,
        vec![Token::GroupRef(1), Token::GroupRef(12)]
    );
    Ok(())
}

#[test]
fn test_set_tokens_lexer() -> Result<()> {
    assert_eq!(
        lex_set(r"a-z]")?,
        vec![
            Token::Literal('a'),
            Token::Minus,
            Token::Literal('z'),
            Token::RBracket
        ]
    );
    assert_eq!(
        lex_set(r"\b\d*\1")?,
        vec![
            Token::EscapedLiteral('\x08'),
            Token::Category(Category::Digit),
            Token::Literal('*'),
            Token::EscapedLiteral('\x01')
        ]
    );
    Ok(())
}

#[test]
fn test_verbose_lexer() -> Result<()> {
    let mut lexer = Lexer::new("a b # comment\n  c");
    lexer.set_verbose(true);
    assert_eq!(
        lexer.collect::<Result<Vec<_>>>()?,
        vec![
            Token::Literal('a'),
            Token::Literal('b'),
            Token::Literal('c')
        ]
    );
    Ok(())
}

#[test]
fn test_peek_does_not_consume() -> Result<()> {
    let mut lexer = Lexer::new("ab");
    assert_eq!(lexer.peek()?.map(|t| t.token), Some(Token::Literal('a')));
    assert_eq!(lexer.next_token()?.map(|t| t.token), Some(Token::Literal('a')));
    assert_eq!(lexer.tell(), 1);
    Ok(())
}

#[test]
fn test_error_lexer() {
    assert_eq!(
        lex_all(r"ab\"),
        Err(Error::InvalidInput {
            pos: 2,
            err: SyntaxError::TrailingBackslash
        })
    );
    assert_eq!(
        lex_all(r"\q"),
        Err(Error::InvalidInput {
            pos: 0,
            err: SyntaxError::BadEscape('q')
        })
    );
    assert_eq!(
        lex_all(r"\xg1"),
        Err(Error::InvalidInput {
            pos: 0,
            err: SyntaxError::IncompleteEscape
        })
    );
    assert_eq!(
        lex_all(r"\777"),
        Err(Error::InvalidInput {
            pos: 0,
            err: SyntaxError::OctalTooLarge(0o777)
        })
    );
    assert_eq!(
        lex_set(r"\A"),
        Err(Error::InvalidInput {
            pos: 0,
            err: SyntaxError::BadEscape('A')
        })
    );
}
