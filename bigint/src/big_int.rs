use kernel::word_significant_ref;
use zeroize::Zeroize;

use crate::error::Error;
use crate::sign::Sign;

pub const WORD_BITS: usize = 64;
pub const WORD_BYTES: usize = 8;

/// Buffer growth granularity in words, amortizing reallocation.
pub const GROWTH_QUANTUM: usize = 8;

/// Sign-and-magnitude arbitrary-precision integer.
///
/// The magnitude is an exclusively owned little-endian word buffer; high
/// zero words may be present transiently. A magnitude of all zero words
/// always carries [`Sign::NonNegative`] (canonical zero). Copies deep-copy
/// the word buffer; there is no sharing between instances.
#[derive(Clone)]
pub struct BigInt {
    pub(crate) sign: Sign,
    pub(crate) mag: Vec<u64>,
}

impl BigInt {
    /// Canonical zero.
    pub fn new() -> BigInt {
        BigInt {
            sign: Sign::NonNegative,
            mag: Vec::new(),
        }
    }

    pub(crate) fn from_parts(sign: Sign, mag: Vec<u64>) -> BigInt {
        let mut v: BigInt = BigInt { sign, mag };
        v.canonicalize();
        v
    }

    /// Ensures the magnitude buffer holds at least `n` words, reallocating
    /// to the next [`GROWTH_QUANTUM`] multiple and zero-filling new high
    /// words. Existing words are preserved; the buffer never shrinks.
    pub fn grow_to(&mut self, n: usize) -> Result<(), Error> {
        if n <= self.mag.len() {
            return Ok(());
        }
        let rounded: usize = n
            .checked_add(GROWTH_QUANTUM - 1)
            .map(|r| r - (r % GROWTH_QUANTUM))
            .filter(|r| r.checked_mul(WORD_BYTES).is_some_and(|b| b <= isize::MAX as usize))
            .ok_or(Error::Allocation(n))?;
        self.mag.resize(rounded, 0);
        Ok(())
    }

    /// Number of words required to represent the magnitude without leading
    /// zero words; 0 for zero.
    #[inline(always)]
    pub fn significant_words(&self) -> usize {
        word_significant_ref(&self.mag)
    }

    /// Current word capacity of the magnitude buffer.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.mag.len()
    }

    #[inline(always)]
    pub fn is_zero(&self) -> bool {
        self.significant_words() == 0
    }

    #[inline(always)]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Bit length of the magnitude (0 for zero).
    pub fn bits(&self) -> usize {
        let sw: usize = self.significant_words();
        if sw == 0 {
            return 0;
        }
        (sw - 1) * WORD_BITS + (WORD_BITS - self.mag[sw - 1].leading_zeros() as usize)
    }

    /// Byte length of the magnitude (0 for zero).
    #[inline(always)]
    pub fn bytes(&self) -> usize {
        self.bits().div_ceil(8)
    }

    /// Word at index `i`, reading past the buffer as zero.
    #[inline(always)]
    pub(crate) fn word(&self, i: usize) -> u64 {
        self.mag.get(i).copied().unwrap_or(0)
    }

    /// Resets the value to canonical zero, retaining the buffer.
    pub fn set_zero(&mut self) {
        self.mag.fill(0);
        self.sign = Sign::NonNegative;
    }

    /// Restores the zero invariant: an all-zero magnitude drops its sign.
    #[inline(always)]
    pub(crate) fn canonicalize(&mut self) {
        if self.significant_words() == 0 {
            self.sign = Sign::NonNegative;
        }
    }
}

impl Default for BigInt {
    fn default() -> Self {
        Self::new()
    }
}

impl From<u64> for BigInt {
    fn from(w: u64) -> BigInt {
        let mag: Vec<u64> = if w == 0 { Vec::new() } else { vec![w] };
        BigInt {
            sign: Sign::NonNegative,
            mag,
        }
    }
}

impl Zeroize for BigInt {
    fn zeroize(&mut self) {
        self.mag.zeroize();
        self.sign = Sign::NonNegative;
    }
}
