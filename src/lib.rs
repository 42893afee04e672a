//! Generate random strings that match a regular expression.
//!
//! Patterns are parsed into a tree of [`Node`]s which the [`Generator`] walks,
//! picking random characters, alternatives and repetition counts as it goes.
//! Node trees can also be built by hand or by another parser.
//!
//! ```
//! let s = xeger::xeger(r"[a-f0-9]{8}-(ab|cd)").unwrap();
//! assert_eq!(s.len(), 11);
//! ```

#![warn(clippy::pedantic, rust_2018_idioms)]
#![allow(clippy::missing_errors_doc, clippy::too_many_lines)]

pub mod alphabet;
pub mod ast;
pub mod charset;
pub mod generator;
pub mod lexer;
pub mod parser;

pub use self::{
    alphabet::Alphabet,
    ast::{AstRoot, Category, Class, ClassItem, MAXREPEAT, Node, Opcode},
    charset::CharSet,
    generator::{Config, Generator, generate, xeger},
    lexer::{Lexer, Token},
    parser::{Flags, SyntaxError, parse_pattern},
};

/// The default cap on unbounded repetitions.
pub const DEFAULT_LIMIT: usize = 10;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A backreference to a group that has not produced anything yet.
    #[error("reference to unset group {0}")]
    UnboundReference(usize),

    /// A construct outside the supported opcode set.
    #[error("unsupported opcode '{0}'")]
    UnsupportedOpcode(String),

    /// A repetition whose lower bound exceeds its upper bound.
    #[error("invalid repetition {{{min},{max}}}")]
    InvalidRepetition { min: usize, max: usize },

    /// The pattern could not be turned into a node tree.
    #[error("{err} at {pos}")]
    InvalidInput { pos: usize, err: SyntaxError },

    /// A character class with no candidate characters, e.g. `[^\x00-\xff]`.
    #[error("character class has nothing to choose from")]
    EmptyClass,
}

pub type Result<T> = std::result::Result<T, Error>;
