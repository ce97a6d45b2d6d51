use kernel::{word_div_rem_ref, word_rem_ref};

use crate::big_int::BigInt;
use crate::error::Error;
use crate::sign::Sign;

impl BigInt {
    /// Canonical non-negative remainder `self mod m` for a single-word
    /// modulus. A power-of-two modulus reduces to masking the low word; the
    /// general path runs the kernel remainder most-significant word first.
    /// A negative value with a non-zero magnitude remainder maps to
    /// `m - r`, so the result is always in `[0, m)`.
    pub fn rem_word(&self, m: u64) -> Result<u64, Error> {
        if m == 0 {
            return Err(Error::DivideByZero);
        }
        let r: u64 = if m.is_power_of_two() {
            self.word(0) & (m - 1)
        } else {
            let sig: usize = self.significant_words();
            word_rem_ref(&self.mag[..sig], m)
        };
        if self.sign == Sign::Negative && r != 0 {
            Ok(m - r)
        } else {
            Ok(r)
        }
    }

    /// Collapses the value to `self mod m` (canonical, non-negative).
    pub fn rem_word_inplace(&mut self, m: u64) -> Result<(), Error> {
        let r: u64 = self.rem_word(m)?;
        self.mag.fill(0);
        if r != 0 {
            self.grow_to(1)?;
            self.mag[0] = r;
        }
        self.sign = Sign::NonNegative;
        Ok(())
    }

    /// Magnitude-level single-word division: the quotient replaces the
    /// magnitude and the raw remainder of the magnitude is returned. The
    /// sign is preserved unless the quotient collapses to zero.
    pub fn div_rem_word_inplace(&mut self, m: u64) -> Result<u64, Error> {
        if m == 0 {
            return Err(Error::DivideByZero);
        }
        let sig: usize = self.significant_words();
        if sig == 0 {
            return Ok(0);
        }
        let r: u64 = word_div_rem_ref(&mut self.mag[..sig], m);
        self.canonicalize();
        Ok(r)
    }
}
