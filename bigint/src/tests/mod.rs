//! Cross-checks against `num-bigint` over seeded random inputs.

mod codec;
mod modular;

use num_bigint::{BigInt as Oracle, Sign as OracleSign};
use sampling::Source;

use crate::big_int::BigInt;
use crate::codec::Base;
use crate::sign::Sign;

pub(crate) fn to_oracle(v: &BigInt) -> Oracle {
    let sign: OracleSign = match (v.is_zero(), v.sign()) {
        (true, _) => OracleSign::NoSign,
        (false, Sign::NonNegative) => OracleSign::Plus,
        (false, Sign::Negative) => OracleSign::Minus,
    };
    Oracle::from_bytes_be(sign, &v.encode(Base::Bin))
}

pub(crate) fn from_oracle(o: &Oracle) -> BigInt {
    let (sign, bytes) = o.to_bytes_be();
    let mut v: BigInt = BigInt::from_bytes(&bytes, Base::Bin).unwrap();
    if sign == OracleSign::Minus {
        v = -v;
    }
    v
}

/// Seeded random value with exactly `bits` significant bits.
pub(crate) fn random_value(source: &mut Source, bits: usize, negative: bool) -> BigInt {
    let v: BigInt = BigInt::random(bits, true, source).unwrap();
    if negative { -v } else { v }
}

pub(crate) fn test_source() -> Source {
    Source::new([0u8; 32])
}
