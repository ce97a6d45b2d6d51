/// `acc += b` with carry propagation through all of `acc`.
/// Requires `acc.len() >= b.len()`; returns the carry out of the top word.
pub fn word_add_ref(acc: &mut [u64], b: &[u64]) -> u64 {
    #[cfg(debug_assertions)]
    {
        assert!(acc.len() >= b.len());
    }

    let mut carry: u64 = 0;
    for i in 0..b.len() {
        let (s, c0) = acc[i].overflowing_add(b[i]);
        let (s, c1) = s.overflowing_add(carry);
        acc[i] = s;
        carry = (c0 | c1) as u64;
    }
    for i in b.len()..acc.len() {
        let (s, c0) = acc[i].overflowing_add(carry);
        acc[i] = s;
        carry = c0 as u64;
    }
    carry
}

/// `acc += w` with carry propagation; returns the carry out of the top word.
pub fn word_add_word_ref(acc: &mut [u64], w: u64) -> u64 {
    let mut carry: u64 = w;
    for a in acc.iter_mut() {
        let (s, c0) = a.overflowing_add(carry);
        *a = s;
        carry = c0 as u64;
    }
    carry
}
