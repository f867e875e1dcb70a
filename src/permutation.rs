use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

/// Ordered sequence of the integers `0..len`, shuffled at most once before
/// being printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence(pub Vec<usize>);

impl Sequence {
    /// `[0, 1, ..., count - 1]` in ascending order.
    pub fn identity(count: usize) -> Self {
        Sequence((0..count).collect())
    }

    /// Builds the identity sequence and shuffles it with `rng`.
    pub fn generate(count: usize, rng: &mut impl Rng) -> Self {
        let mut sequence = Sequence::identity(count);
        sequence.shuffle(rng);
        sequence
    }

    /// In-place Fisher-Yates shuffle: walks from the last index down,
    /// swapping each slot with a uniformly chosen index at or below it.
    pub fn shuffle(&mut self, rng: &mut impl Rng) {
        self.0.shuffle(rng);
        debug_assert!(self.is_permutation());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// True when every value in `0..len` appears exactly once.
    pub fn is_permutation(&self) -> bool {
        let mut seen = vec![false; self.0.len()];
        for &value in &self.0 {
            match seen.get_mut(value) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }
        true
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut values = self.0.iter();
        if let Some(first) = values.next() {
            write!(f, "{first}")?;
            for value in values {
                write!(f, " {value}")?;
            }
        }
        Ok(())
    }
}
