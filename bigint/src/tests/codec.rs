use sampling::Source;

use crate::big_int::BigInt;
use crate::codec::Base;
use crate::error::Error;
use crate::tests::{random_value, test_source, to_oracle};

#[test]
fn round_trip_all_bases() {
    let mut source: Source = test_source();
    for bits in [1usize, 7, 64, 65, 300, 1024] {
        let v: BigInt = random_value(&mut source, bits, false);
        for base in [Base::Bin, Base::Hex, Base::Dec] {
            let encoded: Vec<u8> = v.encode(base);
            assert!(encoded.len() <= v.encoded_size(base), "{:?}", base);
            let back: BigInt = BigInt::from_bytes(&encoded, base).unwrap();
            assert_eq!(back, v, "{:?}", base);
        }
    }
}

#[test]
fn binary_encoding_of_zero_is_empty() {
    let zero: BigInt = BigInt::new();
    assert!(zero.encode(Base::Bin).is_empty());
    assert_eq!(zero.encode(Base::Hex), b"0");
    assert_eq!(zero.encode(Base::Dec), b"0");
}

#[test]
fn binary_encoding_has_no_leading_zero_byte() {
    let v: BigInt = BigInt::from(256);
    assert_eq!(v.encode(Base::Bin), vec![0x01, 0x00]);
}

#[test]
fn decimal_matches_oracle() {
    let mut source: Source = test_source();
    for bits in [64usize, 300] {
        for negative in [false, true] {
            let v: BigInt = random_value(&mut source, bits, negative);
            assert_eq!(v.to_string(), to_oracle(&v).to_string());
        }
    }
}

#[test]
fn hex_formatting_matches_oracle() {
    let mut source: Source = test_source();
    let v: BigInt = random_value(&mut source, 200, false);
    assert_eq!(format!("{:x}", v), format!("{:x}", to_oracle(&v)));
}

#[test]
fn from_hex_accepts_prefix_and_case() {
    assert_eq!(BigInt::from_hex("0xFF").unwrap(), BigInt::from(255));
    assert_eq!(BigInt::from_hex("ff").unwrap(), BigInt::from(255));
    assert_eq!(
        BigInt::from_hex("0Xdeadbeef").unwrap(),
        BigInt::from(0xdead_beef)
    );
}

#[test]
fn from_string_parses_signed_decimal() {
    assert_eq!("1234".parse::<BigInt>().unwrap(), BigInt::from(1234));
    assert_eq!("-1234".parse::<BigInt>().unwrap(), -BigInt::from(1234));
    let big: BigInt = "340282366920938463463374607431768211456"
        .parse::<BigInt>()
        .unwrap();
    assert_eq!(big, BigInt::from(1) << 128);
}

#[test]
fn malformed_input_is_rejected() {
    assert!(matches!(
        "12a4".parse::<BigInt>(),
        Err(Error::Decoding(_))
    ));
    assert!(matches!("".parse::<BigInt>(), Err(Error::Decoding(_))));
    assert!(matches!(BigInt::from_hex("0x"), Err(Error::Decoding(_))));
    assert!(matches!(
        BigInt::from_bytes(b"zz", Base::Hex),
        Err(Error::Decoding(_))
    ));
}

#[test]
fn bounded_decode_never_exceeds_bound() {
    let mut source: Source = test_source();
    let v: BigInt = random_value(&mut source, 300, false);
    let bytes: Vec<u8> = v.encode(Base::Bin);
    for max_bits in [1usize, 8, 64, 299, 300, 4096] {
        let bounded: BigInt = BigInt::from_bytes_bounded(&bytes, max_bits).unwrap();
        assert!(bounded.bits() <= max_bits);
        if max_bits >= 300 {
            assert_eq!(bounded, v);
        }
    }
}

#[test]
fn encode_into_reports_short_buffer() {
    let v: BigInt = BigInt::from(0x0102_0304);
    let mut buf: [u8; 2] = [0u8; 2];
    match v.encode_into(&mut buf) {
        Err(Error::Encoding { need, have }) => {
            assert_eq!(need, 4);
            assert_eq!(have, 2);
        }
        other => panic!("expected short-buffer error, got {:?}", other),
    }
    let mut big: [u8; 16] = [0xAA; 16];
    let n: usize = v.encode_into(&mut big).unwrap();
    assert_eq!(n, 4);
    assert_eq!(&big[..4], &[0x01, 0x02, 0x03, 0x04]);
    // Bytes past the encoding are untouched.
    assert_eq!(big[4], 0xAA);
}

#[test]
fn copy_words_into_pads_with_zeros() {
    let v: BigInt = BigInt::from(7);
    let mut out: [u64; 3] = [u64::MAX; 3];
    v.copy_words_into(&mut out).unwrap();
    assert_eq!(out, [7, 0, 0]);
    let mut short: [u64; 0] = [];
    assert!(matches!(
        v.copy_words_into(&mut short),
        Err(Error::Encoding { .. })
    ));
}
