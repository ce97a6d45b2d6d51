/// In-place single-word multiply `acc *= w`; returns the carry out of the
/// top word.
pub fn word_scale_ref(acc: &mut [u64], w: u64) -> u64 {
    let mut carry: u128 = 0;
    for a in acc.iter_mut() {
        let t: u128 = (*a as u128) * (w as u128) + carry;
        *a = t as u64;
        carry = t >> 64;
    }
    carry as u64
}

/// Multiply-accumulate row `acc += a * w`, propagating the carry through the
/// remainder of `acc`. Requires `acc.len() >= a.len()`; returns the carry out
/// of the top word.
#[inline(always)]
pub fn word_scale_add_ref(acc: &mut [u64], a: &[u64], w: u64) -> u64 {
    #[cfg(debug_assertions)]
    {
        assert!(acc.len() >= a.len());
    }

    let mut carry: u128 = 0;
    for i in 0..a.len() {
        let t: u128 = acc[i] as u128 + (a[i] as u128) * (w as u128) + carry;
        acc[i] = t as u64;
        carry = t >> 64;
    }
    let mut c: u64 = carry as u64;
    for i in a.len()..acc.len() {
        let (s, c0) = acc[i].overflowing_add(c);
        acc[i] = s;
        c = c0 as u64;
    }
    c
}

/// Schoolbook full product `res = a * b`. Requires
/// `res.len() >= a.len() + b.len()`; `res` is zeroed first.
pub fn word_mul_ref(res: &mut [u64], a: &[u64], b: &[u64]) {
    #[cfg(debug_assertions)]
    {
        assert!(res.len() >= a.len() + b.len());
    }

    res.fill(0);
    for i in 0..a.len() {
        let carry: u64 = word_scale_add_ref(&mut res[i..i + b.len()], b, a[i]);
        res[i + b.len()] = carry;
    }
}

/// Squaring specialization `res = a * a`: cross terms computed once and
/// doubled, then the diagonal added. Requires `res.len() >= 2 * a.len()`;
/// `res` is zeroed first.
pub fn word_sqr_ref(res: &mut [u64], a: &[u64]) {
    let n: usize = a.len();

    #[cfg(debug_assertions)]
    {
        assert!(res.len() >= 2 * n);
    }

    res.fill(0);

    for i in 0..n {
        let mut carry: u128 = 0;
        for j in i + 1..n {
            let t: u128 = res[i + j] as u128 + (a[i] as u128) * (a[j] as u128) + carry;
            res[i + j] = t as u64;
            carry = t >> 64;
        }
        if i + 1 < n {
            res[i + n] = carry as u64;
        }
    }

    // Double the cross terms.
    let mut top: u64 = 0;
    for w in res[..2 * n].iter_mut() {
        let t: u64 = *w >> 63;
        *w = (*w << 1) | top;
        top = t;
    }

    // Add the diagonal a[i]^2.
    let mut carry: u64 = 0;
    for i in 0..n {
        let sq: u128 = (a[i] as u128) * (a[i] as u128);
        let (lo, c0) = res[2 * i].overflowing_add(sq as u64);
        let (lo, c1) = lo.overflowing_add(carry);
        res[2 * i] = lo;
        let (hi, c2) = res[2 * i + 1].overflowing_add((sq >> 64) as u64);
        let (hi, c3) = hi.overflowing_add((c0 | c1) as u64);
        res[2 * i + 1] = hi;
        carry = (c2 | c3) as u64;
    }
}
