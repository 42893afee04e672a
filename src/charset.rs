//! Single-byte character set types.

use rand::Rng;
use std::ops::Bound;

/// The number of code points in the base alphabet.
pub const BASE_SIZE: usize = 256;

/// The error type used by [`CharSet`].
#[derive(Debug, Eq, thiserror::Error, PartialEq)]
pub enum Error {
    /// An invalid range was given.
    #[error("invalid range ({0:?} > {1:?})")]
    Range(char, char),
}

/// A set of characters drawn from the 256-entry base alphabet.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CharSet {
    bytes: [bool; BASE_SIZE],
}

impl Default for CharSet {
    fn default() -> Self {
        Self::new()
    }
}

impl CharSet {
    /// Creates a new empty character set.
    #[must_use]
    pub const fn new() -> Self {
        CharSet {
            bytes: [false; BASE_SIZE],
        }
    }

    /// Creates a character set holding the entire base alphabet.
    #[must_use]
    pub const fn full() -> Self {
        CharSet {
            bytes: [true; BASE_SIZE],
        }
    }

    /// Creates a character set from the characters of `chars`. Characters
    /// outside the base alphabet are ignored.
    #[must_use]
    pub fn from_chars(chars: impl IntoIterator<Item = char>) -> Self {
        let mut set = Self::new();
        for c in chars {
            set.add_char(c);
        }
        set
    }

    /// Creates a character set from sorted `[start, end)` boundaries, see
    /// [`CharSet::fill`].
    #[must_use]
    pub(crate) fn from_boundaries(indexes: impl IntoIterator<Item = u8>) -> Self {
        let mut set = Self::new();
        set.fill(indexes, false);
        set
    }

    /// Adds the given byte to the character set.
    #[inline]
    pub const fn add_byte(&mut self, b: u8) {
        self.bytes[b as usize] = true;
    }

    /// Adds the given character to the character set. Returns `false` if the
    /// character lies outside the base alphabet.
    #[inline]
    pub fn add_char(&mut self, c: char) -> bool {
        match u8::try_from(c) {
            Ok(b) => {
                self.add_byte(b);
                true
            }
            Err(_) => false,
        }
    }

    /// Adds a range of characters to the character set. The part of the range
    /// beyond the base alphabet is ignored.
    ///
    /// # Errors
    ///
    /// If the start of the range is after the end of the range, an [`Error`]
    /// is returned.
    pub fn add_range(&mut self, start: char, end: char) -> Result<(), Error> {
        if start > end {
            return Err(Error::Range(start, end));
        }
        let Ok(start) = u8::try_from(start) else {
            return Ok(());
        };
        let end = u8::try_from(end).unwrap_or(u8::MAX);
        self.bytes[to_usize(start..=end)].fill(true);
        Ok(())
    }

    /// Sets alternating runs of the set from a sorted list of boundaries.
    /// With `invert == false` the first run (`[b0, b1)`) is on.
    #[inline]
    fn fill(&mut self, indexes: impl IntoIterator<Item = u8>, invert: bool) {
        let indexes = indexes.into_iter().map(usize::from);

        let mut on = invert;
        let mut index = 0;
        for next in indexes {
            if on {
                self.bytes[index..next].fill(true);
            }
            on = !on;
            index = next;
        }

        if on {
            self.bytes[index..BASE_SIZE].fill(true);
        }
    }

    /// Returns `true` if the character set contains the given character.
    #[inline]
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        u8::try_from(c).is_ok_and(|b| self.bytes[usize::from(b)])
    }

    /// Inverts the character set with respect to the base alphabet.
    #[inline]
    pub fn invert(&mut self) {
        for slot in &mut self.bytes {
            *slot = !*slot;
        }
    }

    /// Returns the union of two sets.
    #[must_use]
    pub fn union(&self, other: &CharSet) -> CharSet {
        let mut set = self.clone();
        for (slot, &theirs) in set.bytes.iter_mut().zip(&other.bytes) {
            *slot |= theirs;
        }
        set
    }

    /// Returns the characters of `self` that are not in `other`.
    #[must_use]
    pub fn difference(&self, other: &CharSet) -> CharSet {
        let mut set = self.clone();
        for (slot, &theirs) in set.bytes.iter_mut().zip(&other.bytes) {
            *slot &= !theirs;
        }
        set
    }

    /// Returns the number of characters in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.iter().filter(|&&on| on).count()
    }

    /// Returns `true` if the set holds no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.bytes.contains(&true)
    }

    /// Iterates over the members of the set in code point order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        (0..=u8::MAX)
            .filter(|&b| self.bytes[usize::from(b)])
            .map(char::from)
    }

    /// Picks one member uniformly at random, or `None` if the set is empty.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<char> {
        let len = self.len();
        if len == 0 {
            return None;
        }
        self.chars().nth(rng.gen_range(0..len))
    }
}

#[inline]
fn to_usize<R: std::ops::RangeBounds<u8>>(r: R) -> (Bound<usize>, Bound<usize>) {
    (
        r.start_bound().map(|n| usize::from(*n)),
        r.end_bound().map(|n| usize::from(*n)),
    )
}
