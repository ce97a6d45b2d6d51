use std::cmp::Ordering;

use kernel::{word_cmp_ref, word_sub_into_ref, word_sub_ref};

use crate::big_int::BigInt;
use crate::error::Error;
use crate::sign::Sign;

impl BigInt {
    fn check_non_negative(&self, b: &BigInt, m: &BigInt) -> Result<(), Error> {
        if self.sign == Sign::Negative || b.sign == Sign::Negative || m.sign == Sign::Negative {
            return Err(Error::InvalidArgument(
                "modular helpers require non-negative operands",
            ));
        }
        Ok(())
    }

    /// `self = (self + b) mod m` for operands already in `[0, m)`. The raw
    /// sum is reduced by a single conditional subtraction.
    pub fn mod_add(&mut self, b: &BigInt, m: &BigInt) -> Result<(), Error> {
        self.check_non_negative(b, m)?;
        self.add_inplace(b)?;
        let m_sig: usize = m.significant_words();
        if word_cmp_ref(&self.mag, &m.mag) != Ordering::Less {
            let borrow: u64 = word_sub_ref(&mut self.mag, &m.mag[..m_sig]);
            debug_assert_eq!(borrow, 0);
            self.canonicalize();
        }
        Ok(())
    }

    /// `self = (self - b) mod m` for operands in `[0, m)`. The magnitudes
    /// are compared first and the modulus added back once when the
    /// subtraction would underflow, so equal-length operands take a uniform
    /// word-level path rather than branching on the secret difference sign.
    pub fn mod_sub(&mut self, b: &BigInt, m: &BigInt) -> Result<(), Error> {
        self.check_non_negative(b, m)?;
        let b_sig: usize = b.significant_words();
        if word_cmp_ref(&self.mag, &b.mag) == Ordering::Less {
            self.add_inplace(m)?;
        }
        let borrow: u64 = word_sub_ref(&mut self.mag, &b.mag[..b_sig]);
        debug_assert_eq!(borrow, 0);
        self.canonicalize();
        Ok(())
    }

    /// Repeatedly subtracts `m` while the borrow-checked subtraction does
    /// not underflow, swapping in the reduced buffer each round. The
    /// iteration count is however far above the modulus the value sits
    /// (typically at most one round in modular use).
    pub fn reduce_below(&mut self, m: &BigInt) -> Result<(), Error> {
        if self.sign == Sign::Negative || m.sign == Sign::Negative {
            return Err(Error::InvalidArgument(
                "modular helpers require non-negative operands",
            ));
        }
        let m_sig: usize = m.significant_words();
        if m_sig == 0 {
            return Err(Error::DivideByZero);
        }

        let len: usize = self.significant_words().max(m_sig);
        self.grow_to(len)?;
        let mut tmp: Vec<u64> = vec![0u64; len];
        loop {
            let borrow: u64 = word_sub_into_ref(&mut tmp, &self.mag[..len], &m.mag[..m_sig]);
            if borrow != 0 {
                break;
            }
            self.mag[..len].copy_from_slice(&tmp);
        }
        self.canonicalize();
        Ok(())
    }
}
