use sampling::Source;

use crate::big_int::{BigInt, WORD_BITS};
use crate::error::Error;

impl BigInt {
    /// Draws a non-negative value of at most `bits` random bits from the
    /// source, optionally forcing the top bit so the result has exactly
    /// `bits` bits. Zero `bits` yields canonical zero.
    pub fn random(bits: usize, top_set: bool, source: &mut Source) -> Result<BigInt, Error> {
        let mut v: BigInt = BigInt::new();
        if bits == 0 {
            return Ok(v);
        }
        let words: usize = bits.div_ceil(WORD_BITS);
        v.grow_to(words)?;
        source.fill_words(&mut v.mag[..words]);

        let top_bits: usize = bits - (words - 1) * WORD_BITS;
        if top_bits < WORD_BITS {
            v.mag[words - 1] &= (1u64 << top_bits) - 1;
        }
        if top_set {
            v.mag[words - 1] |= 1u64 << (top_bits - 1);
        }
        v.canonicalize();
        Ok(v)
    }
}
