//! Random string generation from a pattern's node tree.
//!
//! Known limitation: lookaround is not evaluated against its surroundings.
//! `(?=...)` emits its body as if the lookahead text were part of the match
//! and `(?!...)` emits nothing, so output of patterns using lookaround is not
//! guaranteed to match them.

use super::{
    DEFAULT_LIMIT, Error, Result,
    alphabet::Alphabet,
    ast::{Class, ClassItem, Node, Repeat},
    charset::CharSet,
    parser::{Flags, parse_pattern},
};
use rand::{
    Rng,
    rngs::ThreadRng,
    seq::SliceRandom,
};

mod state;

use state::State;

/// Generator settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// The most repetitions generated for an unbounded quantifier such as `*`,
    /// unless the quantifier's own minimum is larger.
    pub limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Generates random strings from node trees.
///
/// The generator owns its random number generator. Capture groups are
/// tracked per call to [`Generator::generate`], so one instance can be used
/// for any number of calls.
#[derive(Debug)]
pub struct Generator<R = ThreadRng> {
    rng: R,
    config: Config,
}

impl Default for Generator<ThreadRng> {
    fn default() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl<R: Rng> Generator<R> {
    /// Creates a generator drawing from `rng`. Pass a seeded RNG for
    /// reproducible output.
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self::with_config(rng, Config::default())
    }

    #[must_use]
    pub fn with_config(rng: R, config: Config) -> Self {
        Self { rng, config }
    }

    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.config.limit = limit;
        self
    }

    #[must_use]
    pub fn config(&self) -> Config {
        self.config
    }

    /// Generates a string by concatenating the output of each node in order.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::UnboundReference`] if a backreference is reached
    /// before its group, [`Error::InvalidRepetition`] for a repetition with
    /// `min > max` and [`Error::EmptyClass`] for a class with no candidates.
    pub fn generate(&mut self, nodes: &[Node]) -> Result<String> {
        let limit = self.config.limit;
        tracing::debug!(nodes = nodes.len(), limit, "xeger.generate");

        let mut state = State::new(&mut self.rng, Alphabet::global(), limit);
        let mut out = String::new();
        match state.emit_all(nodes, &mut out) {
            Ok(()) => {
                tracing::debug!(len = out.chars().count(), "xeger.generate.done");
                Ok(out)
            }
            Err(err) => {
                tracing::debug!(error = %err, "xeger.generate.failed");
                Err(err)
            }
        }
    }

    /// Parses `pattern` and generates a string from it.
    pub fn xeger(&mut self, pattern: &str) -> Result<String> {
        self.xeger_with_flags(pattern, Flags::default())
    }

    pub fn xeger_with_flags(&mut self, pattern: &str, flags: Flags) -> Result<String> {
        let ast = parse_pattern(pattern, flags)?;
        self.generate(&ast)
    }
}

/// Generates a string from `nodes` with the thread-local RNG, capping
/// unbounded repetitions at `limit`.
pub fn generate(nodes: &[Node], limit: usize) -> Result<String> {
    Generator::<ThreadRng>::default().with_limit(limit).generate(nodes)
}

/// Generates a string matching `pattern` with the thread-local RNG and the
/// default limit.
pub fn xeger(pattern: &str) -> Result<String> {
    Generator::<ThreadRng>::default().xeger(pattern)
}

impl<R: Rng + ?Sized> State<'_, R> {
    fn emit_all(&mut self, nodes: &[Node], out: &mut String) -> Result<()> {
        for node in nodes {
            self.emit(node, out)?;
        }
        Ok(())
    }

    fn emit(&mut self, node: &Node, out: &mut String) -> Result<()> {
        tracing::trace!(opcode = %node.opcode(), "xeger.node");
        match node {
            Node::Literal(c) => out.push(*c),
            Node::NotLiteral(c) => {
                let candidates = self.alphabet.base().difference(&CharSet::from_chars([*c]));
                out.push(self.choose(&candidates)?);
            }
            Node::Any => {
                let candidates = self.alphabet.base().difference(&CharSet::from_chars(['\n']));
                out.push(self.choose(&candidates)?);
            }
            Node::In(class) => out.push(self.choose_in(class)?),
            Node::Category(category) => {
                let candidates = self.alphabet.category(*category);
                out.push(self.choose(candidates)?);
            }
            Node::Branch(branches) => {
                if let Some(branch) = branches.choose(&mut *self.rng) {
                    tracing::trace!(alternatives = branches.len(), "xeger.branch");
                    self.emit_all(branch, out)?;
                }
            }
            Node::Subpattern { group, body } => {
                let start = out.len();
                self.emit_all(body, out)?;
                if let Some(group) = group.filter(|&group| group != 0) {
                    self.capture(group, &out[start..]);
                }
            }
            Node::Assert(body) => self.emit_all(body, out)?,
            Node::AssertNot(_) | Node::At(_) => {}
            Node::GroupRef(group) => {
                let text = self
                    .captured(*group)
                    .ok_or(Error::UnboundReference(*group))?;
                out.push_str(text);
            }
            Node::MinRepeat(repeat) | Node::MaxRepeat(repeat) => self.emit_repeat(repeat, out)?,
        }

        Ok(())
    }

    fn emit_repeat(&mut self, repeat: &Repeat, out: &mut String) -> Result<()> {
        let Repeat { min, max, body } = repeat;
        if min > max {
            return Err(Error::InvalidRepetition {
                min: *min,
                max: *max,
            });
        }

        let count = self.rng.gen_range(*min..=repeat.effective_max(self.limit));
        tracing::trace!(min, max, count, "xeger.repeat");

        for _ in 0..count {
            self.emit_all(body, out)?;
        }
        Ok(())
    }

    /// Picks one character for a class. Every pooled character is equally
    /// likely, so a category contributes weight in proportion to its size.
    fn choose_in(&mut self, class: &Class) -> Result<char> {
        let mut pool = Vec::new();
        for item in &class.items {
            match *item {
                ClassItem::Literal(c) => pool.push(c),
                ClassItem::Range(low, high) => pool.extend(low..=high),
                ClassItem::Category(category) => {
                    pool.extend(self.alphabet.category(category).chars());
                }
            }
        }

        if class.negated {
            let complement = self
                .alphabet
                .base()
                .difference(&CharSet::from_chars(pool));
            return self.choose(&complement);
        }

        pool.choose(&mut *self.rng).copied().ok_or(Error::EmptyClass)
    }

    fn choose(&mut self, candidates: &CharSet) -> Result<char> {
        candidates.choose(&mut *self.rng).ok_or(Error::EmptyClass)
    }
}
