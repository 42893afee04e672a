use super::Node;

/// The `max` of a repetition without an upper bound (`*`, `+`, `{m,}`).
pub const MAXREPEAT: usize = u32::MAX as usize;

/// A counted repetition of `body`, `min..=max` times.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Repeat {
    pub min: usize,
    pub max: usize,
    pub body: Vec<Node>,
}

impl Repeat {
    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        self.max == MAXREPEAT
    }

    /// The upper bound actually used when generating: `max`, capped at
    /// `limit` but never below `min`.
    #[must_use]
    pub fn effective_max(&self, limit: usize) -> usize {
        self.max.min(limit.max(self.min))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repeat(min: usize, max: usize) -> Repeat {
        Repeat {
            min,
            max,
            body: Vec::new(),
        }
    }

    #[test]
    fn test_effective_max() {
        assert_eq!(repeat(0, MAXREPEAT).effective_max(10), 10);
        assert_eq!(repeat(0, 3).effective_max(10), 3);
        assert_eq!(repeat(15, MAXREPEAT).effective_max(10), 15);
        assert_eq!(repeat(15, 20).effective_max(10), 15);
        assert_eq!(repeat(3, 3).effective_max(0), 3);
        assert_eq!(repeat(0, MAXREPEAT).effective_max(0), 0);
    }
}
