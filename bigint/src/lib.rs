pub mod add_sub;
pub mod big_int;
pub mod cmp;
pub mod codec;
pub mod ct;
pub mod div;
pub mod error;
pub mod modular;
pub mod mul;
pub mod ops;
pub mod random;
pub mod scratch;
pub mod serialization;
pub mod shift;
pub mod sign;
#[cfg(test)]
mod tests;

pub use big_int::{BigInt, GROWTH_QUANTUM, WORD_BITS, WORD_BYTES};
pub use codec::Base;
pub use error::Error;
pub use scratch::{Scratch, ScratchOwned};
pub use serialization::{ReaderFrom, WriterTo};
pub use sign::Sign;
