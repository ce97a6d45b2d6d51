/// Owned scratch space for product buffers, reusable across calls so that
/// repeated multiplications do not reallocate.
pub struct ScratchOwned {
    data: Vec<u64>,
}

impl ScratchOwned {
    pub fn alloc(words: usize) -> ScratchOwned {
        ScratchOwned {
            data: vec![0u64; words],
        }
    }

    pub fn borrow(&mut self) -> &mut Scratch {
        Scratch::from_words(&mut self.data)
    }
}

/// Borrowed view over scratch words, split off prefix by prefix. The engine
/// never retains a scratch reference beyond the call it was passed to.
#[repr(transparent)]
pub struct Scratch {
    data: [u64],
}

impl Scratch {
    pub fn from_words(data: &mut [u64]) -> &mut Scratch {
        unsafe { &mut *(data as *mut [u64] as *mut Scratch) }
    }

    pub fn available(&self) -> usize {
        self.data.len()
    }

    /// Splits off the first `len` words, returning them with the remaining
    /// scratch. Panics when the scratch is exhausted.
    pub fn take_words(&mut self, len: usize) -> (&mut [u64], &mut Scratch) {
        if len > self.data.len() {
            panic!(
                "attempted to take {} words from scratch with {} left",
                len,
                self.data.len()
            );
        }
        let (take, rem) = self.data.split_at_mut(len);
        (take, Scratch::from_words(rem))
    }
}
