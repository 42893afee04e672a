//! The registry of named character sets used by the generator.
//!
//! Every set is drawn from the 256 code points of the Latin-1 base alphabet.
//! The registry is built once on first use and never mutated afterwards, so it
//! can be shared freely between threads.

use super::{ast::Category, charset::CharSet};
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

static GLOBAL: Lazy<Alphabet> = Lazy::new(Alphabet::new);

const WHITESPACE: &str = " \t\n\r\x0b\x0c";

/// Named character sets.
#[derive(Debug)]
pub struct Alphabet {
    sets: BTreeMap<&'static str, CharSet>,
}

impl Alphabet {
    /// Returns the process-wide registry.
    #[must_use]
    pub fn global() -> &'static Alphabet {
        &GLOBAL
    }

    fn new() -> Self {
        let latin1 = CharSet::full();
        let uppercase = CharSet::from_boundaries([b'A', b'Z' + 1]);
        let lowercase = CharSet::from_boundaries([b'a', b'z' + 1]);
        let letters = uppercase.union(&lowercase);
        let digits = CharSet::from_boundaries([b'0', b'9' + 1]);
        let punctuation = CharSet::from_boundaries([
            b'!',
            b'/' + 1,
            b':',
            b'@' + 1,
            b'[',
            b'`' + 1,
            b'{',
            b'~' + 1,
        ]);
        let whitespace = CharSet::from_chars(WHITESPACE.chars());
        let alnum = letters.union(&digits);
        let word = alnum.union(&CharSet::from_chars(['_']));

        let sets = BTreeMap::from([
            ("latin1", latin1.clone()),
            (
                "printable",
                alnum.union(&punctuation).union(&whitespace),
            ),
            ("letters", letters.clone()),
            ("uppercase", uppercase),
            ("lowercase", lowercase),
            ("digits", digits.clone()),
            ("punctuation", punctuation),
            ("nondigits", latin1.difference(&digits)),
            ("nonletters", latin1.difference(&letters)),
            ("whitespace", whitespace.clone()),
            ("nonwhitespace", latin1.difference(&whitespace)),
            ("normal", alnum.union(&CharSet::from_chars([' ']))),
            ("word", word.clone()),
            ("nonword", latin1.difference(&word)),
            (
                "postalsafe",
                alnum.union(&CharSet::from_chars(" .-#/".chars())),
            ),
            ("urlsafe", alnum.union(&CharSet::from_chars("-._~".chars()))),
            ("domainsafe", alnum.union(&CharSet::from_chars(['-']))),
        ]);

        Alphabet { sets }
    }

    /// Looks up a named set, e.g. `"digits"` or `"urlsafe"`.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&CharSet> {
        self.sets.get(name)
    }

    /// Iterates over the registered set names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.sets.keys().copied()
    }

    /// The full base alphabet.
    #[must_use]
    pub fn base(&self) -> &CharSet {
        self.named("latin1")
    }

    /// The set a category escape such as `\d` or `\W` stands for.
    #[must_use]
    pub fn category(&self, category: Category) -> &CharSet {
        self.named(category.set_name())
    }

    fn named(&self, name: &str) -> &CharSet {
        // Names passed here are compile-time constants registered in `new`.
        &self.sets[name]
    }
}
