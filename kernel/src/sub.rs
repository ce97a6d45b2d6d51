/// `acc -= b` with borrow propagation through all of `acc`.
/// Requires `acc.len() >= b.len()`; returns the final borrow
/// (1 iff the subtraction underflowed).
pub fn word_sub_ref(acc: &mut [u64], b: &[u64]) -> u64 {
    #[cfg(debug_assertions)]
    {
        assert!(acc.len() >= b.len());
    }

    let mut borrow: u64 = 0;
    for i in 0..b.len() {
        let (d, b0) = acc[i].overflowing_sub(b[i]);
        let (d, b1) = d.overflowing_sub(borrow);
        acc[i] = d;
        borrow = (b0 | b1) as u64;
    }
    for i in b.len()..acc.len() {
        let (d, b0) = acc[i].overflowing_sub(borrow);
        acc[i] = d;
        borrow = b0 as u64;
    }
    borrow
}

/// Reversed subtract `acc = b - acc`, treating `b` beyond its length as
/// zero words. Requires `acc.len() >= b.len()`; returns the final borrow.
pub fn word_sub_rev_ref(acc: &mut [u64], b: &[u64]) -> u64 {
    #[cfg(debug_assertions)]
    {
        assert!(acc.len() >= b.len());
    }

    let mut borrow: u64 = 0;
    for i in 0..acc.len() {
        let w: u64 = if i < b.len() { b[i] } else { 0 };
        let (d, b0) = w.overflowing_sub(acc[i]);
        let (d, b1) = d.overflowing_sub(borrow);
        acc[i] = d;
        borrow = (b0 | b1) as u64;
    }
    borrow
}

/// Out-of-place `res = a - b`, treating either operand beyond its length as
/// zero words. Requires `res.len() >= a.len() >= b.len()`; returns the final
/// borrow without touching the inputs.
pub fn word_sub_into_ref(res: &mut [u64], a: &[u64], b: &[u64]) -> u64 {
    #[cfg(debug_assertions)]
    {
        assert!(res.len() >= a.len());
        assert!(a.len() >= b.len());
    }

    let mut borrow: u64 = 0;
    for i in 0..a.len() {
        let w: u64 = if i < b.len() { b[i] } else { 0 };
        let (d, b0) = a[i].overflowing_sub(w);
        let (d, b1) = d.overflowing_sub(borrow);
        res[i] = d;
        borrow = (b0 | b1) as u64;
    }
    res[a.len()..].fill(0);
    borrow
}
