use std::cmp::Ordering;

use kernel::{word_add_ref, word_add_word_ref, word_cmp_ref, word_significant_ref, word_sub_ref, word_sub_rev_ref};

use crate::big_int::BigInt;
use crate::error::Error;
use crate::sign::Sign;

impl BigInt {
    /// Signed addition of a raw magnitude/sign pair.
    ///
    /// Matching signs reduce to an unsigned add with the sign unchanged.
    /// Differing signs resolve by unsigned magnitude comparison: the larger
    /// magnitude's sign wins and the smaller is subtracted from it; equal
    /// magnitudes yield canonical zero. Sign and length bookkeeping happen
    /// only after the word-level operation has succeeded.
    pub(crate) fn add_signed(&mut self, other_mag: &[u64], other_sign: Sign) -> Result<(), Error> {
        let b_sig: usize = word_significant_ref(other_mag);

        if self.sign == other_sign {
            let n: usize = self.significant_words().max(b_sig) + 1;
            self.grow_to(n)?;
            let carry: u64 = word_add_ref(&mut self.mag, &other_mag[..b_sig]);
            debug_assert_eq!(carry, 0);
            return Ok(());
        }

        match word_cmp_ref(&self.mag, other_mag) {
            Ordering::Less => {
                self.grow_to(b_sig)?;
                let borrow: u64 = word_sub_rev_ref(&mut self.mag, &other_mag[..b_sig]);
                debug_assert_eq!(borrow, 0);
                self.sign = other_sign;
            }
            Ordering::Equal => {
                self.set_zero();
            }
            Ordering::Greater => {
                let borrow: u64 = word_sub_ref(&mut self.mag, &other_mag[..b_sig]);
                debug_assert_eq!(borrow, 0);
            }
        }
        Ok(())
    }

    /// `self += a`.
    pub fn add_inplace(&mut self, a: &BigInt) -> Result<(), Error> {
        self.add_signed(&a.mag, a.sign)
    }

    /// `self -= a`, realized as addition of the flipped sign (harmless for a
    /// zero subtrahend, whose magnitude contributes nothing).
    pub fn sub_inplace(&mut self, a: &BigInt) -> Result<(), Error> {
        self.add_signed(&a.mag, a.sign.flip())
    }

    /// Magnitude-level `|self| += w`; the sign is untouched.
    pub(crate) fn add_word_inplace(&mut self, w: u64) -> Result<(), Error> {
        let n: usize = self.significant_words() + 1;
        self.grow_to(n)?;
        let carry: u64 = word_add_word_ref(&mut self.mag, w);
        debug_assert_eq!(carry, 0);
        Ok(())
    }
}
