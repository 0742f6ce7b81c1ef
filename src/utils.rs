//! Low-level building blocks of the set: words of bits, and their storage.

mod error;
mod word;
mod word_store;

pub use error::InvalidIndex;
pub use word::{BitWord, IndexInWord, IndexOfWord};
pub use word_store::WordStore;
