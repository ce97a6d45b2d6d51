use std::fmt;
use std::fmt::Write as _;
use std::str::FromStr;

use kernel::{word_div_rem_ref, word_significant_ref};

use crate::big_int::BigInt;
use crate::error::Error;
use crate::sign::Sign;

/// Textual/binary representation selector for the codec entry points.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Base {
    Bin,
    Hex,
    Dec,
}

// Largest power of ten in a word; decimal conversion peels this many
// digits per division pass.
const DEC_CHUNK_BASE: u64 = 10_000_000_000_000_000_000;
const DEC_CHUNK_DIGITS: usize = 19;

impl BigInt {
    /// Size of the output of [`BigInt::encode`] for the given base. Exact
    /// for binary, an upper bound for hex and decimal (28/93 over-estimates
    /// log10(2)).
    pub fn encoded_size(&self, base: Base) -> usize {
        match base {
            Base::Bin => self.bytes(),
            Base::Hex => 2 * self.bytes(),
            Base::Dec => self.bits() * 28 / 93 + 1,
        }
    }

    /// Encodes the magnitude: big-endian bytes for binary (empty for zero),
    /// ASCII digits for hex and decimal (`b"0"` for zero). The sign is not
    /// encoded.
    pub fn encode(&self, base: Base) -> Vec<u8> {
        match base {
            Base::Bin => {
                let mut out: Vec<u8> = vec![0u8; self.bytes()];
                let n: usize = out.len();
                self.write_bytes_be(&mut out, n);
                out
            }
            Base::Hex => self.to_hex_ascii().into_bytes(),
            Base::Dec => self.to_dec_ascii().into_bytes(),
        }
    }

    /// Big-endian binary encode into a caller-supplied buffer; returns the
    /// number of bytes written.
    pub fn encode_into(&self, out: &mut [u8]) -> Result<usize, Error> {
        let n: usize = self.bytes();
        if out.len() < n {
            return Err(Error::Encoding {
                need: n,
                have: out.len(),
            });
        }
        self.write_bytes_be(out, n);
        Ok(n)
    }

    /// Copies the significant words into a caller-supplied fixed-size word
    /// buffer, zero-filling the rest.
    pub fn copy_words_into(&self, out: &mut [u64]) -> Result<(), Error> {
        let sig: usize = self.significant_words();
        if out.len() < sig {
            return Err(Error::Encoding {
                need: sig,
                have: out.len(),
            });
        }
        out[..sig].copy_from_slice(&self.mag[..sig]);
        out[sig..].fill(0);
        Ok(())
    }

    /// Decodes a non-negative value from a byte buffer under the given
    /// base: big-endian raw bytes for binary, ASCII digits for hex and
    /// decimal (empty digit strings are malformed).
    pub fn from_bytes(bytes: &[u8], base: Base) -> Result<BigInt, Error> {
        match base {
            Base::Bin => Self::from_bytes_be(bytes),
            Base::Hex => Self::from_ascii_digits(bytes, 16),
            Base::Dec => Self::from_ascii_digits(bytes, 10),
        }
    }

    /// Binary decode bounded to `max_bits`: any excess high bits are
    /// right-shifted away.
    pub fn from_bytes_bounded(bytes: &[u8], max_bits: usize) -> Result<BigInt, Error> {
        let mut v: BigInt = Self::from_bytes_be(bytes)?;
        let bits: usize = v.bits();
        if bits > max_bits {
            v.shr_inplace(bits - max_bits);
        }
        Ok(v)
    }

    /// Parses an optionally `-`-signed, optionally `0x`-prefixed string
    /// (hex with the prefix, decimal without).
    pub fn from_string(s: &str) -> Result<BigInt, Error> {
        let (negative, rest) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let v: BigInt = match rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
            Some(digits) => Self::from_ascii_digits(digits.as_bytes(), 16)?,
            None => Self::from_ascii_digits(rest.as_bytes(), 10)?,
        };
        let sign: Sign = if negative { Sign::Negative } else { Sign::NonNegative };
        Ok(BigInt::from_parts(sign, v.mag))
    }

    /// Parses a hex string, with or without a `0x` prefix.
    pub fn from_hex(s: &str) -> Result<BigInt, Error> {
        let digits: &str = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        Self::from_ascii_digits(digits.as_bytes(), 16)
    }

    fn from_bytes_be(bytes: &[u8]) -> Result<BigInt, Error> {
        let mut v: BigInt = BigInt::new();
        v.grow_to(bytes.len().div_ceil(8))?;
        for (i, &b) in bytes.iter().rev().enumerate() {
            v.mag[i / 8] |= (b as u64) << (8 * (i % 8));
        }
        Ok(v)
    }

    fn from_ascii_digits(bytes: &[u8], radix: u64) -> Result<BigInt, Error> {
        if bytes.is_empty() {
            return Err(Error::Decoding("empty digit string".into()));
        }
        let mut v: BigInt = BigInt::new();
        for &c in bytes {
            let d: u64 = (c as char)
                .to_digit(radix as u32)
                .ok_or_else(|| Error::Decoding(format!("invalid digit {:?}", c as char)))?
                as u64;
            v.scale_word_inplace(radix)?;
            v.add_word_inplace(d)?;
        }
        Ok(v)
    }

    // Successive byte extraction from the magnitude, most-significant first.
    fn write_bytes_be(&self, out: &mut [u8], n: usize) {
        for i in 0..n {
            out[n - 1 - i] = (self.word(i / 8) >> (8 * (i % 8))) as u8;
        }
    }

    fn to_hex_ascii(&self) -> String {
        let n: usize = self.bytes();
        if n == 0 {
            return String::from("0");
        }
        let mut buf: Vec<u8> = vec![0u8; n];
        self.write_bytes_be(&mut buf, n);
        let mut s: String = String::with_capacity(2 * n);
        let _ = write!(s, "{:x}", buf[0]);
        for &b in &buf[1..] {
            let _ = write!(s, "{:02x}", b);
        }
        s
    }

    fn to_dec_ascii(&self) -> String {
        let sig: usize = self.significant_words();
        if sig == 0 {
            return String::from("0");
        }
        let mut tmp: Vec<u64> = self.mag[..sig].to_vec();
        let mut groups: Vec<u64> = Vec::new();
        let mut len: usize = sig;
        while len > 0 {
            groups.push(word_div_rem_ref(&mut tmp[..len], DEC_CHUNK_BASE));
            len = word_significant_ref(&tmp[..len]);
        }
        let mut s: String = String::with_capacity(groups.len() * DEC_CHUNK_DIGITS);
        let _ = write!(s, "{}", groups[groups.len() - 1]);
        for &g in groups.iter().rev().skip(1) {
            let _ = write!(s, "{:019}", g);
        }
        s
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sign == Sign::Negative {
            f.write_char('-')?;
        }
        f.write_str(&self.to_dec_ascii())
    }
}

impl fmt::LowerHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sign == Sign::Negative {
            f.write_char('-')?;
        }
        f.write_str(&self.to_hex_ascii())
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl FromStr for BigInt {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigInt::from_string(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_round_trip() {
        let v: BigInt = BigInt::from_hex("0123456789abcdef0011223344556677").unwrap();
        let bytes: Vec<u8> = v.encode(Base::Bin);
        assert_eq!(BigInt::from_bytes(&bytes, Base::Bin).unwrap(), v);
    }

    #[test]
    fn zero_encodes_empty_binary() {
        assert!(BigInt::new().encode(Base::Bin).is_empty());
        assert_eq!(BigInt::new().bytes(), 0);
        assert!(BigInt::from_bytes(&[], Base::Bin).unwrap().is_zero());
    }

    #[test]
    fn leading_zero_bytes_are_dropped_on_decode() {
        let v: BigInt = BigInt::from_bytes(&[0, 0, 1, 0], Base::Bin).unwrap();
        assert_eq!(v, BigInt::from(256));
        assert_eq!(v.bytes(), 2);
    }

    #[test]
    fn hex_round_trip() {
        for s in ["ff", "1", "deadbeefcafef00d123456789", "a0000000000000000"] {
            let v: BigInt = BigInt::from_hex(s).unwrap();
            assert_eq!(v.encode(Base::Hex), s.as_bytes());
        }
    }

    #[test]
    fn from_hex_with_prefix() {
        assert_eq!(BigInt::from_hex("0xFF").unwrap(), BigInt::from(255));
        assert_eq!(BigInt::from_hex("ff").unwrap(), BigInt::from(255));
    }

    #[test]
    fn decimal_round_trip() {
        for s in ["0", "7", "18446744073709551616", "340282366920938463463374607431768211455"] {
            let v: BigInt = BigInt::from_bytes(s.as_bytes(), Base::Dec).unwrap();
            assert_eq!(v.encode(Base::Dec), s.as_bytes());
        }
    }

    #[test]
    fn string_parse_sign_and_prefix() {
        assert_eq!(BigInt::from_string("-10").unwrap(), -BigInt::from(10));
        assert_eq!(BigInt::from_string("0x10").unwrap(), BigInt::from(16));
        assert_eq!(BigInt::from_string("-0x10").unwrap(), -BigInt::from(16));
        // "-0" is canonical zero
        let v: BigInt = BigInt::from_string("-0").unwrap();
        assert!(v.is_zero());
        assert_eq!(v.sign(), Sign::NonNegative);
    }

    #[test]
    fn malformed_input_rejected() {
        assert!(matches!(BigInt::from_string(""), Err(Error::Decoding(_))));
        assert!(matches!(BigInt::from_string("12a"), Err(Error::Decoding(_))));
        assert!(matches!(BigInt::from_hex("xyz"), Err(Error::Decoding(_))));
        assert!(matches!(BigInt::from_string("0x"), Err(Error::Decoding(_))));
    }

    #[test]
    fn encode_into_checks_capacity() {
        let v: BigInt = BigInt::from(0x1_0000);
        let mut small: [u8; 2] = [0; 2];
        assert_eq!(
            v.encode_into(&mut small),
            Err(Error::Encoding { need: 3, have: 2 })
        );
        let mut fit: [u8; 4] = [0xaa; 4];
        assert_eq!(v.encode_into(&mut fit), Ok(3));
        assert_eq!(&fit[..3], &[1, 0, 0]);
    }

    #[test]
    fn copy_words_into_checks_capacity() {
        let mut v: BigInt = BigInt::from(5);
        v.shl_inplace(64).unwrap();
        let mut one: [u64; 1] = [0];
        assert!(matches!(
            v.copy_words_into(&mut one),
            Err(Error::Encoding { need: 2, have: 1 })
        ));
        let mut four: [u64; 4] = [7; 4];
        v.copy_words_into(&mut four).unwrap();
        assert_eq!(four, [0, 5, 0, 0]);
    }

    #[test]
    fn bounded_decode_discards_high_bits() {
        // 0x0180 is 9 bits; bounding to 8 shifts one bit away: 0xC0
        let v: BigInt = BigInt::from_bytes_bounded(&[0x01, 0x80], 8).unwrap();
        assert_eq!(v, BigInt::from(0xC0));
        // wide enough bound is a plain decode
        let v: BigInt = BigInt::from_bytes_bounded(&[0x01, 0x80], 16).unwrap();
        assert_eq!(v, BigInt::from(0x180));
    }

    #[test]
    fn encoded_size_upper_bounds() {
        let v: BigInt = BigInt::from_string("99999999999999999999").unwrap();
        assert!(v.encoded_size(Base::Dec) >= v.encode(Base::Dec).len());
        assert_eq!(v.encoded_size(Base::Bin), v.encode(Base::Bin).len());
        assert!(v.encoded_size(Base::Hex) >= v.encode(Base::Hex).len());
    }

    #[test]
    fn display_and_hex_formatting() {
        let v: BigInt = -BigInt::from(255);
        assert_eq!(format!("{}", v), "-255");
        assert_eq!(format!("{:x}", v), "-ff");
        assert_eq!(format!("{}", BigInt::new()), "0");
    }
}
