//  See `WordStore`.

use core::{
    fmt,
    hash::{Hash, Hasher},
};

use alloc::vec::Vec;

use crate::utils::{BitWord, IndexOfWord};

/// A growable sequence of `BitWord`, zero-extended.
///
/// Any word at or beyond `len()` reads as `ALL_ZEROS`, and all binary operations treat the shorter operand as if it were
/// padded with `ALL_ZEROS` up to the length of the longer one.
///
/// Trailing `ALL_ZEROS` words may or may not be stored; equality and hashing are insensitive to them.
#[derive(Clone, Default)]
pub struct WordStore {
    words: Vec<BitWord>,
}

//
//  Creation
//

impl WordStore {
    /// Creates an empty store, without allocating.
    pub const fn new() -> Self {
        Self { words: Vec::new() }
    }

    /// Creates an empty store, with room for at least `words` words before reallocating.
    pub fn with_capacity(words: usize) -> Self {
        Self {
            words: Vec::with_capacity(words),
        }
    }

    /// Creates a store from its words, lowest bits first.
    pub fn from_words(words: Vec<BitWord>) -> Self {
        Self { words }
    }
}

//
//  Access
//

impl WordStore {
    /// Returns the stored words, including any trailing `ALL_ZEROS`.
    #[inline]
    pub fn words(&self) -> &[BitWord] {
        &self.words
    }

    /// Returns the stored words, excluding any trailing `ALL_ZEROS`.
    #[inline]
    pub fn significant_words(&self) -> &[BitWord] {
        &self.words[..Self::significant_len(&self.words)]
    }

    /// Returns the number of stored words.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns whether no word is stored.
    ///
    /// A store with words may still have all bits reset, see `is_zero`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the number of words which can be stored without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.words.capacity()
    }

    /// Returns the word at the given index, or `ALL_ZEROS` if beyond the stored words.
    #[inline]
    pub fn get(&self, index: IndexOfWord) -> BitWord {
        self.words.get(index.0).copied().unwrap_or(BitWord::ALL_ZEROS)
    }

    /// Returns the word at the given index, if stored.
    #[inline]
    pub fn get_mut(&mut self, index: IndexOfWord) -> Option<&mut BitWord> {
        self.words.get_mut(index.0)
    }

    /// Returns the word at the given index, appending `ALL_ZEROS` words as necessary.
    ///
    /// #   Panics
    ///
    /// If the allocation fails, or the new length overflows, as `Vec` does.
    #[inline]
    pub fn get_or_grow(&mut self, index: IndexOfWord) -> &mut BitWord {
        if index.0 >= self.words.len() {
            self.grow(index);
        }

        &mut self.words[index.0]
    }
}

//
//  Bulk queries
//

impl WordStore {
    /// Returns the number of bits set, across all words.
    pub fn count(&self) -> usize {
        self.words.iter().map(BitWord::count).sum()
    }

    /// Returns whether no bit is set.
    pub fn is_zero(&self) -> bool {
        self.words.iter().all(BitWord::is_zero)
    }

    /// Returns the number of bits set in both `self` and `other`, without materializing their intersection.
    pub fn count_and(&self, other: &Self) -> usize {
        //  `zip` stops at the shorter operand, beyond which the intersection is `ALL_ZEROS`.
        self.words
            .iter()
            .zip(&other.words)
            .map(|(left, right)| (*left & *right).count())
            .sum()
    }
}

// mod query_tests

//
//  Mutations
//

impl WordStore {
    /// Resets all bits, keeping the storage.
    pub fn clear(&mut self) {
        self.words.fill(BitWord::ALL_ZEROS);
    }

    /// Removes trailing `ALL_ZEROS` words, keeping the allocation.
    pub fn trim(&mut self) {
        let len = Self::significant_len(&self.words);

        self.words.truncate(len);
    }

    /// Removes trailing `ALL_ZEROS` words, and releases any spare capacity.
    pub fn shrink_to_fit(&mut self) {
        self.trim();
        self.words.shrink_to_fit();
    }
}

//
//  Word-wise combination
//
//  All combinations trim their result, so that repeated operations do not accumulate trailing `ALL_ZEROS` words.
//

impl WordStore {
    /// Sets `self` to `self | other`.
    pub fn or_with(&mut self, other: &Self) {
        if other.words.len() > self.words.len() {
            self.words.resize(other.words.len(), BitWord::ALL_ZEROS);
        }

        for (left, right) in self.words.iter_mut().zip(&other.words) {
            *left |= *right;
        }

        self.trim();
    }

    /// Sets `self` to `self & other`.
    pub fn and_with(&mut self, other: &Self) {
        //  Beyond the end of `other`, the result is `ALL_ZEROS`.
        self.words.truncate(other.words.len());

        for (left, right) in self.words.iter_mut().zip(&other.words) {
            *left &= *right;
        }

        self.trim();
    }

    /// Sets `self` to `self & !other`.
    ///
    /// Only the words shared by both operands are affected: beyond the end of `other`, `!other` is `ALL_ONES`, and
    /// the words of `self` are kept as is. Words of `other` beyond the end of `self` are irrelevant, as
    /// `ALL_ZEROS & !other` is `ALL_ZEROS`.
    pub fn and_not_with(&mut self, other: &Self) {
        for (left, right) in self.words.iter_mut().zip(&other.words) {
            *left = left.and_not(*right);
        }

        self.trim();
    }

    /// Sets `self` to `self ^ other`.
    pub fn xor_with(&mut self, other: &Self) {
        if other.words.len() > self.words.len() {
            self.words.resize(other.words.len(), BitWord::ALL_ZEROS);
        }

        for (left, right) in self.words.iter_mut().zip(&other.words) {
            *left ^= *right;
        }

        self.trim();
    }
}

// mod combination_tests

//
//  Common traits
//

impl fmt::Debug for WordStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        f.debug_tuple("WordStore").field(&self.words).finish()
    }
}

impl Eq for WordStore {}

impl Hash for WordStore {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.significant_words().hash(state);
    }
}

impl PartialEq for WordStore {
    fn eq(&self, other: &Self) -> bool {
        self.significant_words() == other.significant_words()
    }
}

// mod common_tests

//
//  Implementation details
//

impl WordStore {
    //  Length of `words`, excluding trailing `ALL_ZEROS`.
    fn significant_len(words: &[BitWord]) -> usize {
        words.iter().rposition(|word| !word.is_zero()).map_or(0, |last| last + 1)
    }

    //  Grows `self.words` so that `index` is in bounds.
    #[cold]
    #[inline(never)]
    fn grow(&mut self, index: IndexOfWord) {
        debug_assert!(index.0 >= self.words.len());

        self.words.resize(index.0.saturating_add(1), BitWord::ALL_ZEROS);
    }
}
