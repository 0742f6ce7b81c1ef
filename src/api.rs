//! Vocabulary types and traits of the set API.

pub mod bit_key;

pub use bit_key::BitKey;

pub use crate::utils::InvalidIndex;
