use std::ops::{
    Add, AddAssign, Mul, MulAssign, Neg, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};

use crate::big_int::BigInt;
use crate::error::Error;
use crate::scratch::ScratchOwned;
use crate::sign::Sign;

// Operator sugar over the fallible in-place API. The only failure mode for
// these operators is an allocation overflow, which is fatal per the error
// contract, hence the panic here.
fn ok(result: Result<(), Error>) {
    if let Err(e) = result {
        panic!("big integer operation failed: {}", e);
    }
}

impl AddAssign<&BigInt> for BigInt {
    fn add_assign(&mut self, rhs: &BigInt) {
        ok(self.add_inplace(rhs));
    }
}

impl SubAssign<&BigInt> for BigInt {
    fn sub_assign(&mut self, rhs: &BigInt) {
        ok(self.sub_inplace(rhs));
    }
}

impl MulAssign<&BigInt> for BigInt {
    fn mul_assign(&mut self, rhs: &BigInt) {
        let mut scratch: ScratchOwned = ScratchOwned::alloc(BigInt::mul_scratch_words(self, rhs));
        ok(self.mul_inplace(rhs, scratch.borrow()));
    }
}

impl Add<&BigInt> for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> BigInt {
        let mut out: BigInt = self.clone();
        out += rhs;
        out
    }
}

impl Sub<&BigInt> for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: &BigInt) -> BigInt {
        let mut out: BigInt = self.clone();
        out -= rhs;
        out
    }
}

impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &BigInt) -> BigInt {
        let mut out: BigInt = self.clone();
        out *= rhs;
        out
    }
}

impl Add for BigInt {
    type Output = BigInt;

    fn add(mut self, rhs: BigInt) -> BigInt {
        self += &rhs;
        self
    }
}

impl Sub for BigInt {
    type Output = BigInt;

    fn sub(mut self, rhs: BigInt) -> BigInt {
        self -= &rhs;
        self
    }
}

impl Mul for BigInt {
    type Output = BigInt;

    fn mul(mut self, rhs: BigInt) -> BigInt {
        self *= &rhs;
        self
    }
}

impl ShlAssign<usize> for BigInt {
    fn shl_assign(&mut self, n: usize) {
        ok(self.shl_inplace(n));
    }
}

impl ShrAssign<usize> for BigInt {
    fn shr_assign(&mut self, n: usize) {
        self.shr_inplace(n);
    }
}

impl Shl<usize> for BigInt {
    type Output = BigInt;

    fn shl(mut self, n: usize) -> BigInt {
        self <<= n;
        self
    }
}

impl Shr<usize> for BigInt {
    type Output = BigInt;

    fn shr(mut self, n: usize) -> BigInt {
        self >>= n;
        self
    }
}

impl RemAssign<u64> for BigInt {
    /// Panics on a zero modulus, like the native `%`.
    fn rem_assign(&mut self, m: u64) {
        if let Err(e) = self.rem_word_inplace(m) {
            panic!("big integer operation failed: {}", e);
        }
    }
}

impl Rem<u64> for &BigInt {
    type Output = u64;

    /// Panics on a zero modulus, like the native `%`.
    fn rem(self, m: u64) -> u64 {
        match self.rem_word(m) {
            Ok(r) => r,
            Err(e) => panic!("big integer operation failed: {}", e),
        }
    }
}

impl Rem<u64> for BigInt {
    type Output = u64;

    /// Panics on a zero modulus, like the native `%`.
    fn rem(self, m: u64) -> u64 {
        &self % m
    }
}

impl Rem<&BigInt> for &BigInt {
    type Output = BigInt;

    /// Division stays word-granular: the modulus must fit in a single
    /// significant word. Panics on a zero or multi-word modulus.
    fn rem(self, m: &BigInt) -> BigInt {
        assert!(
            m.significant_words() <= 1,
            "modulus wider than one word; use reduce_below"
        );
        BigInt::from(self % m.word(0))
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> BigInt {
        if !self.is_zero() {
            self.sign = self.sign.flip();
        }
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        -self.clone()
    }
}

impl BigInt {
    /// Absolute value.
    pub fn abs(&self) -> BigInt {
        let mut out: BigInt = self.clone();
        out.sign = Sign::NonNegative;
        out
    }
}
