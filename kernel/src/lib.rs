//! Fixed-precision word kernels.
//!
//! Every function here operates on caller-supplied `u64` word slices in
//! little-endian word order, writes only within the supplied lengths, never
//! allocates, and returns either a three-way comparison result or a
//! carry/borrow word. The `_ref` suffix marks the portable reference
//! implementation; the whole crate is a replaceable collaborator behind
//! these signatures.
//!
//! Loop bounds depend only on operand lengths, so the memory access pattern
//! of the add/sub/mul/shift kernels is length-determined. No constant-time
//! claim is made for the hardware division used by [`word_rem_ref`] and
//! [`word_div_rem_ref`]; substitute a vetted kernel before using those on
//! secret moduli.

pub mod add;
pub mod cmp;
pub mod mul;
pub mod rem;
pub mod shift;
pub mod sub;

pub use add::{word_add_ref, word_add_word_ref};
pub use cmp::{word_cmp_ref, word_significant_ref};
pub use mul::{word_mul_ref, word_scale_add_ref, word_scale_ref, word_sqr_ref};
pub use rem::{word_div_rem_ref, word_rem_ref};
pub use shift::{word_shl_ref, word_shr_ref};
pub use sub::{word_sub_into_ref, word_sub_ref, word_sub_rev_ref};
