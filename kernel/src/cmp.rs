use std::cmp::Ordering;

/// Number of significant words: index of the highest non-zero word plus one,
/// 0 for an all-zero slice.
#[inline(always)]
pub fn word_significant_ref(a: &[u64]) -> usize {
    a.iter().rposition(|&w| w != 0).map_or(0, |i| i + 1)
}

/// Unsigned magnitude comparison over slices of possibly different lengths.
/// High zero words are ignored on both sides.
pub fn word_cmp_ref(a: &[u64], b: &[u64]) -> Ordering {
    let a_len: usize = word_significant_ref(a);
    let b_len: usize = word_significant_ref(b);

    if a_len != b_len {
        return a_len.cmp(&b_len);
    }

    for i in (0..a_len).rev() {
        if a[i] != b[i] {
            return a[i].cmp(&b[i]);
        }
    }

    Ordering::Equal
}
