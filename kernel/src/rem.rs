/// Running remainder of the magnitude modulo a single non-zero word,
/// consuming words most-significant first.
pub fn word_rem_ref(a: &[u64], m: u64) -> u64 {
    #[cfg(debug_assertions)]
    {
        assert!(m != 0);
    }

    let mut rem: u128 = 0;
    for &w in a.iter().rev() {
        rem = ((rem << 64) | w as u128) % m as u128;
    }
    rem as u64
}

/// In-place single-word division: the quotient overwrites `a`, the remainder
/// is returned. `m` must be non-zero.
pub fn word_div_rem_ref(a: &mut [u64], m: u64) -> u64 {
    #[cfg(debug_assertions)]
    {
        assert!(m != 0);
    }

    let mut rem: u128 = 0;
    for w in a.iter_mut().rev() {
        let cur: u128 = (rem << 64) | *w as u128;
        *w = (cur / m as u128) as u64;
        rem = cur % m as u128;
    }
    rem as u64
}
