use num_bigint::BigInt as Oracle;
use sampling::Source;

use crate::big_int::BigInt;
use crate::tests::{random_value, test_source, to_oracle};

fn euclid_mod(a: &Oracle, m: &Oracle) -> Oracle {
    let r: Oracle = a % m;
    if r < Oracle::from(0u32) { r + m } else { r }
}

#[test]
fn mod_add_matches_oracle() {
    let mut source: Source = test_source();
    for bits in [64usize, 257] {
        let m: BigInt = random_value(&mut source, bits, false);
        for _ in 0..8 {
            let mut a: BigInt = random_value(&mut source, bits, false);
            a.reduce_below(&m).unwrap();
            let mut b: BigInt = random_value(&mut source, bits, false);
            b.reduce_below(&m).unwrap();
            let want: Oracle = euclid_mod(&(to_oracle(&a) + to_oracle(&b)), &to_oracle(&m));
            a.mod_add(&b, &m).unwrap();
            assert_eq!(to_oracle(&a), want);
            assert!(a.compare(&m, false) == std::cmp::Ordering::Less);
        }
    }
}

#[test]
fn mod_sub_matches_oracle() {
    let mut source: Source = test_source();
    for bits in [64usize, 257] {
        let m: BigInt = random_value(&mut source, bits, false);
        for _ in 0..8 {
            let mut a: BigInt = random_value(&mut source, bits, false);
            a.reduce_below(&m).unwrap();
            let mut b: BigInt = random_value(&mut source, bits, false);
            b.reduce_below(&m).unwrap();
            let want: Oracle = euclid_mod(&(to_oracle(&a) - to_oracle(&b)), &to_oracle(&m));
            a.mod_sub(&b, &m).unwrap();
            assert_eq!(to_oracle(&a), want);
        }
    }
}

#[test]
fn reduce_below_matches_oracle() {
    let mut source: Source = test_source();
    let m: BigInt = random_value(&mut source, 100, false);
    for bits in [1usize, 99, 100, 101, 104] {
        let mut v: BigInt = random_value(&mut source, bits, false);
        let want: Oracle = euclid_mod(&to_oracle(&v), &to_oracle(&m));
        v.reduce_below(&m).unwrap();
        assert_eq!(to_oracle(&v), want, "bits={}", bits);
    }
}

#[test]
fn word_modulo_matches_oracle() {
    let mut source: Source = test_source();
    for m in [5u64, 1 << 32, u64::MAX] {
        for negative in [false, true] {
            let v: BigInt = random_value(&mut source, 300, negative);
            let want: Oracle = euclid_mod(&to_oracle(&v), &Oracle::from(m));
            assert_eq!(Oracle::from(v.rem_word(m).unwrap()), want);
        }
    }
}

#[test]
fn word_modulo_of_negative_is_non_negative() {
    // -17 mod 5 = 3, never -2
    let v: BigInt = -BigInt::from(17);
    assert_eq!(v.rem_word(5).unwrap(), 3);
    assert_eq!(BigInt::from(17).rem_word(5).unwrap(), 2);
}

#[test]
fn div_rem_word_matches_oracle() {
    let mut source: Source = test_source();
    let v: BigInt = random_value(&mut source, 300, false);
    for m in [3u64, 10_000_000_000_000_000_000] {
        let mut q: BigInt = v.clone();
        let r: u64 = q.div_rem_word_inplace(m).unwrap();
        assert_eq!(to_oracle(&q), to_oracle(&v) / Oracle::from(m));
        assert_eq!(Oracle::from(r), to_oracle(&v) % Oracle::from(m));
    }
}
