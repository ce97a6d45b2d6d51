use std::cmp::Ordering;

use kernel::word_cmp_ref;

use crate::big_int::BigInt;
use crate::sign::Sign;

impl BigInt {
    /// Three-way comparison. With `consider_sign`, differing signs
    /// short-circuit (the zero invariant guarantees the negative operand is
    /// non-zero) and a shared negative sign inverts the magnitude ordering;
    /// without it, the comparison is over magnitudes alone.
    pub fn compare(&self, other: &BigInt, consider_sign: bool) -> Ordering {
        if consider_sign {
            match (self.sign, other.sign) {
                (Sign::NonNegative, Sign::Negative) => Ordering::Greater,
                (Sign::Negative, Sign::NonNegative) => Ordering::Less,
                (Sign::NonNegative, Sign::NonNegative) => word_cmp_ref(&self.mag, &other.mag),
                (Sign::Negative, Sign::Negative) => word_cmp_ref(&self.mag, &other.mag).reverse(),
            }
        } else {
            word_cmp_ref(&self.mag, &other.mag)
        }
    }

    /// Optimized comparison against a single machine word. Any value wider
    /// than one significant word is greater than any word; negative values
    /// are always less.
    pub fn compare_word(&self, w: u64) -> Ordering {
        if self.sign == Sign::Negative {
            return Ordering::Less;
        }
        if self.significant_words() > 1 {
            return Ordering::Greater;
        }
        self.word(0).cmp(&w)
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other, true) == Ordering::Equal
    }
}

impl Eq for BigInt {}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other, true)
    }
}
