use thiserror::Error;

/// Failures surfaced by the engine. None are retried internally; an
/// operation either completes leaving the value consistent or fails without
/// mutating the receiver.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("division or modulo by zero")]
    DivideByZero,

    #[error("output buffer too small: need {need}, have {have}")]
    Encoding { need: usize, have: usize },

    #[error("malformed input: {0}")]
    Decoding(String),

    #[error("allocation of {0} words exceeds addressable memory")]
    Allocation(usize),
}
