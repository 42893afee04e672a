use crate::alphabet::Alphabet;
use std::collections::HashMap;

/// Everything one top-level generation call works with. A fresh `State` is
/// created per call, so captures never leak from one call into the next.
pub(super) struct State<'r, R: ?Sized> {
    pub rng: &'r mut R,
    pub alphabet: &'static Alphabet,
    pub limit: usize,
    /// Group index to the text the group produced most recently.
    pub captures: HashMap<usize, String>,
}

impl<'r, R: ?Sized> State<'r, R> {
    pub fn new(rng: &'r mut R, alphabet: &'static Alphabet, limit: usize) -> Self {
        Self {
            rng,
            alphabet,
            limit,
            captures: HashMap::new(),
        }
    }

    pub fn capture(&mut self, group: usize, text: &str) {
        match self.captures.get_mut(&group) {
            Some(slot) => {
                slot.clear();
                slot.push_str(text);
            }
            None => {
                self.captures.insert(group, text.to_owned());
            }
        }
    }

    pub fn captured(&self, group: usize) -> Option<&str> {
        self.captures.get(&group).map(String::as_str)
    }
}
