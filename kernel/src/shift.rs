/// In-place left shift by `word_shift` whole words plus `bit_shift` residual
/// bits (`bit_shift < 64`), carrying bits across word boundaries. Bits
/// shifted past the top of the buffer are lost; the caller sizes the buffer.
pub fn word_shl_ref(words: &mut [u64], word_shift: usize, bit_shift: usize) {
    #[cfg(debug_assertions)]
    {
        assert!(bit_shift < 64);
    }

    let n: usize = words.len();
    if word_shift >= n {
        words.fill(0);
        return;
    }

    if bit_shift == 0 {
        words.copy_within(0..n - word_shift, word_shift);
    } else {
        for i in (word_shift..n).rev() {
            let src: usize = i - word_shift;
            let hi: u64 = words[src] << bit_shift;
            let lo: u64 = if src > 0 {
                words[src - 1] >> (64 - bit_shift)
            } else {
                0
            };
            words[i] = hi | lo;
        }
    }
    words[..word_shift].fill(0);
}

/// In-place right shift by `word_shift` whole words plus `bit_shift` residual
/// bits (`bit_shift < 64`), carrying bits across word boundaries and
/// zero-filling the vacated high words.
pub fn word_shr_ref(words: &mut [u64], word_shift: usize, bit_shift: usize) {
    #[cfg(debug_assertions)]
    {
        assert!(bit_shift < 64);
    }

    let n: usize = words.len();
    if word_shift >= n {
        words.fill(0);
        return;
    }

    if bit_shift == 0 {
        words.copy_within(word_shift..n, 0);
    } else {
        for i in 0..n - word_shift {
            let src: usize = i + word_shift;
            let lo: u64 = words[src] >> bit_shift;
            let hi: u64 = if src + 1 < n {
                words[src + 1] << (64 - bit_shift)
            } else {
                0
            };
            words[i] = lo | hi;
        }
    }
    words[n - word_shift..].fill(0);
}
