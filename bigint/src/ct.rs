use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use crate::big_int::BigInt;
use crate::error::Error;
use crate::sign::Sign;

impl BigInt {
    /// Branchless conditional assignment: `self = other` when `choice` is
    /// set, unchanged otherwise. Every word position up to the larger
    /// buffer length is blended through a full-word mask, so the executed
    /// instruction sequence and access pattern are independent of `choice`.
    /// Buffer lengths are treated as public.
    pub fn conditional_assign(&mut self, choice: Choice, other: &BigInt) -> Result<(), Error> {
        self.grow_to(other.mag.len())?;
        for i in 0..self.mag.len() {
            let w: u64 = if i < other.mag.len() { other.mag[i] } else { 0 };
            self.mag[i] = u64::conditional_select(&self.mag[i], &w, choice);
        }
        let s: u8 = u8::conditional_select(&(self.sign as u8), &(other.sign as u8), choice);
        self.sign = Sign::from_u8(s);
        Ok(())
    }

    /// Branchless table lookup: `out = candidates[secret_index]`, touching
    /// every candidate unconditionally and OR-accumulating the one whose
    /// position equality mask is set. An out-of-range index leaves `out`
    /// zero.
    pub fn constant_time_lookup(
        out: &mut BigInt,
        candidates: &[BigInt],
        secret_index: usize,
    ) -> Result<(), Error> {
        let width: usize = candidates.iter().map(|c| c.mag.len()).max().unwrap_or(0);
        out.grow_to(width)?;
        out.set_zero();

        let mut sign_acc: u8 = 0;
        for (i, candidate) in candidates.iter().enumerate() {
            let hit: Choice = (i as u64).ct_eq(&(secret_index as u64));
            for j in 0..out.mag.len() {
                let w: u64 = if j < candidate.mag.len() {
                    candidate.mag[j]
                } else {
                    0
                };
                out.mag[j] |= u64::conditional_select(&0, &w, hit);
            }
            sign_acc |= u8::conditional_select(&0, &(candidate.sign as u8), hit);
        }
        out.sign = Sign::from_u8(sign_acc);
        out.canonicalize();
        Ok(())
    }
}
