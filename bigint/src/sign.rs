/// Two-valued sign tag paired with a magnitude. Canonical zero always
/// carries [`Sign::NonNegative`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u8)]
pub enum Sign {
    NonNegative = 0,
    Negative = 1,
}

impl Sign {
    #[inline(always)]
    pub fn flip(self) -> Sign {
        match self {
            Sign::NonNegative => Sign::Negative,
            Sign::Negative => Sign::NonNegative,
        }
    }

    /// Sign of a product: negative iff exactly one factor is negative.
    #[inline(always)]
    pub fn xor(self, other: Sign) -> Sign {
        if self == other {
            Sign::NonNegative
        } else {
            Sign::Negative
        }
    }

    /// Branch-free byte-to-sign map for mask-selected sign bytes. The
    /// discriminants are the byte values; the mask keeps the cast in range.
    #[inline(always)]
    pub(crate) fn from_u8(v: u8) -> Sign {
        unsafe { std::mem::transmute::<u8, Sign>(v & 1) }
    }
}
