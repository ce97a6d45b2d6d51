use rand_chacha::ChaCha8Rng;
use rand_core::{OsRng, RngCore, SeedableRng, TryRngCore};

/// Deterministic, seedable randomness source backed by ChaCha8.
///
/// A [`Source`] is explicitly constructed and threaded through any function
/// that needs randomness; there is no hidden global state. Use [`new_seed`]
/// to derive a fresh seed from the operating system.
pub struct Source {
    source: ChaCha8Rng,
}

/// Returns a fresh 32-byte seed from the operating system entropy source.
pub fn new_seed() -> [u8; 32] {
    let mut seed: [u8; 32] = [0u8; 32];
    OsRng
        .try_fill_bytes(&mut seed)
        .expect("OS entropy source unavailable");
    seed
}

impl Source {
    pub fn new(seed: [u8; 32]) -> Source {
        Source {
            source: ChaCha8Rng::from_seed(seed),
        }
    }

    /// Derives a new seed from this source.
    pub fn new_seed(&mut self) -> [u8; 32] {
        let mut seed: [u8; 32] = [0u8; 32];
        self.source.fill_bytes(&mut seed);
        seed
    }

    /// Forks an independent source seeded from this one.
    pub fn branch(&mut self) -> Self {
        Source::new(self.new_seed())
    }

    /// Uniform value in `[0, max)` by rejection under the given mask.
    /// The mask must cover `max-1` for the rejection loop to terminate.
    #[inline(always)]
    pub fn next_u64n(&mut self, max: u64, mask: u64) -> u64 {
        let mut x: u64 = self.next_u64() & mask;
        while x >= max {
            x = self.next_u64() & mask;
        }
        x
    }

    /// Fills a word slice with uniform bits.
    #[inline(always)]
    pub fn fill_words(&mut self, words: &mut [u64]) {
        words.iter_mut().for_each(|w| *w = self.source.next_u64());
    }
}

impl RngCore for Source {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        self.source.next_u32()
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        self.source.next_u64()
    }

    #[inline(always)]
    fn fill_bytes(&mut self, bytes: &mut [u8]) {
        self.source.fill_bytes(bytes)
    }
}
