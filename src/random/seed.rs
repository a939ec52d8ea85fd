//! Seed sequences for deterministic generator construction.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Ordered list of 32-bit words used to seed a generator.
///
/// An empty sequence means "no explicit seed". Non-empty sequences are
/// expanded into the generator's full seed; the expansion depends on both the
/// order and the number of words, so `[0, 1]`, `[1, 0]` and `[0, 1, 0]` all
/// seed differently.
///
/// ```
/// use rsl::SeedSequence;
///
/// let seed = SeedSequence::from([0, 1]);
/// assert_eq!(seed.len(), 2);
/// assert!(SeedSequence::new().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SeedSequence {
    words: Vec<u32>,
}

impl SeedSequence {
    /// The empty sequence.
    pub const fn new() -> Self {
        SeedSequence { words: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The raw words, in order.
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Expands the words into a full `StdRng` seed.
    pub(crate) fn expand(&self) -> <StdRng as SeedableRng>::Seed {
        let mut mixer = StdRng::seed_from_u64(self.words.len() as u64);
        for &word in &self.words {
            mixer = StdRng::seed_from_u64(mixer.next_u64() ^ u64::from(word));
        }
        let mut seed = <StdRng as SeedableRng>::Seed::default();
        mixer.fill_bytes(&mut seed);
        seed
    }

    /// Builds a generator from this sequence.
    pub(crate) fn generator(&self) -> StdRng {
        StdRng::from_seed(self.expand())
    }
}

impl From<Vec<u32>> for SeedSequence {
    fn from(words: Vec<u32>) -> Self {
        SeedSequence { words }
    }
}

impl From<&[u32]> for SeedSequence {
    fn from(words: &[u32]) -> Self {
        SeedSequence { words: words.to_vec() }
    }
}

impl<const N: usize> From<[u32; N]> for SeedSequence {
    fn from(words: [u32; N]) -> Self {
        SeedSequence { words: words.to_vec() }
    }
}

impl FromIterator<u32> for SeedSequence {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        SeedSequence { words: iter.into_iter().collect() }
    }
}
