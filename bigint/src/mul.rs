use kernel::{word_mul_ref, word_scale_ref, word_sqr_ref};

use crate::big_int::BigInt;
use crate::error::Error;
use crate::scratch::Scratch;
use crate::sign::Sign;

impl BigInt {
    /// Scratch words required by [`BigInt::mul_inplace`] for these operands.
    pub fn mul_scratch_words(a: &BigInt, b: &BigInt) -> usize {
        a.significant_words() + b.significant_words() + 1
    }

    /// Scratch words required by [`BigInt::sqr_inplace`].
    pub fn sqr_scratch_words(a: &BigInt) -> usize {
        2 * a.significant_words() + 1
    }

    /// `self *= a`. The result sign is the XOR of the operand signs. A zero
    /// operand short-circuits to canonical zero and a single-word operand
    /// takes the linear scale path; the general case multiplies into the
    /// caller-supplied scratch and adopts the product as the new magnitude.
    pub fn mul_inplace(&mut self, a: &BigInt, scratch: &mut Scratch) -> Result<(), Error> {
        let a_sig: usize = self.significant_words();
        let b_sig: usize = a.significant_words();
        let sign: Sign = self.sign.xor(a.sign);

        if a_sig == 0 || b_sig == 0 {
            self.set_zero();
            return Ok(());
        }

        if b_sig == 1 {
            let w: u64 = a.mag[0];
            self.grow_to(a_sig + 1)?;
            let carry: u64 = word_scale_ref(&mut self.mag[..a_sig], w);
            self.mag[a_sig] = carry;
            self.sign = sign;
            return Ok(());
        }

        if a_sig == 1 {
            let w: u64 = self.mag[0];
            self.grow_to(b_sig + 1)?;
            self.mag[..b_sig].copy_from_slice(&a.mag[..b_sig]);
            self.mag[b_sig..].fill(0);
            let carry: u64 = word_scale_ref(&mut self.mag[..b_sig], w);
            self.mag[b_sig] = carry;
            self.sign = sign;
            return Ok(());
        }

        let prod_len: usize = a_sig + b_sig;
        let (prod, _) = scratch.take_words(prod_len + 1);
        word_mul_ref(prod, &self.mag[..a_sig], &a.mag[..b_sig]);

        self.grow_to(prod_len)?;
        self.mag[..prod_len].copy_from_slice(&prod[..prod_len]);
        self.mag[prod_len..].fill(0);
        self.sign = sign;
        Ok(())
    }

    /// `self = self * self`; the result is always non-negative.
    pub fn sqr_inplace(&mut self, scratch: &mut Scratch) -> Result<(), Error> {
        let sig: usize = self.significant_words();
        if sig == 0 {
            self.set_zero();
            return Ok(());
        }

        let prod_len: usize = 2 * sig;
        let (prod, _) = scratch.take_words(prod_len + 1);
        word_sqr_ref(prod, &self.mag[..sig]);

        self.grow_to(prod_len)?;
        self.mag[..prod_len].copy_from_slice(&prod[..prod_len]);
        self.mag[prod_len..].fill(0);
        self.sign = Sign::NonNegative;
        Ok(())
    }

    /// Magnitude-level `|self| *= w`; the sign is untouched (a zero scale
    /// clears to canonical zero).
    pub(crate) fn scale_word_inplace(&mut self, w: u64) -> Result<(), Error> {
        let sig: usize = self.significant_words();
        if sig == 0 {
            return Ok(());
        }
        if w == 0 {
            self.set_zero();
            return Ok(());
        }
        self.grow_to(sig + 1)?;
        let carry: u64 = word_scale_ref(&mut self.mag[..sig], w);
        self.mag[sig] = carry;
        Ok(())
    }
}
