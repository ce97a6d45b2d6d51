use kernel::{word_shl_ref, word_shr_ref};

use crate::big_int::{BigInt, WORD_BITS};
use crate::error::Error;

impl BigInt {
    /// `self <<= n`, growing the magnitude by the whole-word shift plus one
    /// extra word when residual bits spill over.
    pub fn shl_inplace(&mut self, n: usize) -> Result<(), Error> {
        let sig: usize = self.significant_words();
        if sig == 0 || n == 0 {
            return Ok(());
        }
        let word_shift: usize = n / WORD_BITS;
        let bit_shift: usize = n % WORD_BITS;
        let need: usize = sig + word_shift + (bit_shift > 0) as usize;
        self.grow_to(need)?;
        word_shl_ref(&mut self.mag[..need], word_shift, bit_shift);
        Ok(())
    }

    /// `self >>= n`. A value shifted down to nothing becomes canonical zero.
    pub fn shr_inplace(&mut self, n: usize) {
        let sig: usize = self.significant_words();
        if sig == 0 || n == 0 {
            return;
        }
        word_shr_ref(&mut self.mag[..sig], n / WORD_BITS, n % WORD_BITS);
        self.canonicalize();
    }

    /// Bit `i` of the magnitude, reading past the top as zero.
    #[inline(always)]
    pub fn bit(&self, i: usize) -> bool {
        (self.word(i / WORD_BITS) >> (i % WORD_BITS)) & 1 == 1
    }
}
