pub mod source;

pub use source::{Source, new_seed};
