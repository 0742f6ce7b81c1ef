//  See `BitWord` type.
//
//  #   Why a dedicated type?
//
//  Bundling methods on an existing type is possible only by "extension" traits, which then require the user to have
//  these traits in scope to invoke them.
//
//  A dedicated type, on top of avoiding type confusion between a word of bits and a member of the set, is more
//  ergonomic as inherent methods can just be called without any hassle.
//
//
//  #   Why `u64`?
//
//  A smaller type means that fewer bits are combined per operation, and thus set algebra is not as effective. A larger
//  type may not be well supported -- looking at you, `u128` -- defeating the purpose of word-parallel operations.
//
//  Since 32-bits & 64-bits CPUs tend to support `u64` natively, including a native population count on most of them,
//  `u64` is the largest well supported type.

use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

/// A word of bits.
///
/// Bit `i` of the word at index `o` in a sequence of words represents the member `o * 64 + i`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct BitWord(pub u64);

/// The index of a word, in a sequence of words.
///
/// #   Why `usize`?
///
/// In Rust, all slices are indexed by a `usize`, and the `IndexOfWord` is used nigh exclusively as an index in slices.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct IndexOfWord(pub usize);

/// The index of a bit in a word.
///
/// The index of a bit in a word is expected to always be strictly less than 64. No index created by `BitWord::split`
/// will ever violate this invariant.
///
/// #   Panics
///
/// In Debug, most operations taking an `IndexInWord` will panic if its value is strictly greater than 63.
///
/// In Release, any high bit will be ignored (masked away).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct IndexInWord(pub u32);

//
//  Constants.
//

impl BitWord {
    /// Number of bits in a word.
    pub const BITS: u64 = 64;

    /// An all-zeros word.
    pub const ALL_ZEROS: Self = Self(0);

    /// An all-ones word.
    pub const ALL_ONES: Self = Self(!0);
}

//
//  Static operations.
//

impl BitWord {
    /// Splits a bit index into an index-of-word/index-in-word pair.
    ///
    /// Returns None if the `index` is too large for the index-of-word part. This will never happen on 64-bits
    /// platforms -- ie, platforms on which `usize` is 64-bits.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use big_set::utils::BitWord;
    /// let (of_word, in_word) = BitWord::split(133).expect("no overflow");
    ///
    /// assert_eq!(2, of_word.0);
    /// assert_eq!(5, in_word.0);
    /// ```
    #[inline]
    pub const fn split(index: u64) -> Option<(IndexOfWord, IndexInWord)> {
        //  Compute both / and % close together, so the optimizer fuses both in a single instruction.
        let of_word = index / Self::BITS;
        let in_word = index % Self::BITS;

        //  FIXME: convert to `.try_into()` when it is const.
        if of_word as usize as u64 != of_word {
            return None;
        }

        Some((IndexOfWord(of_word as _), IndexInWord(in_word as _)))
    }

    /// Fuses an index-of-word/index-in-word pair into a bit index.
    ///
    /// Returns None if the index-of-word is too large for the bit index.
    ///
    /// #   Panics
    ///
    /// See `IndexInWord`.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use big_set::utils::{BitWord, IndexInWord, IndexOfWord};
    /// let index = BitWord::fuse(IndexOfWord(2), IndexInWord(5)).expect("no overflow");
    ///
    /// assert_eq!(133, index);
    /// ```
    #[inline]
    pub const fn fuse(of_word: IndexOfWord, in_word: IndexInWord) -> Option<u64> {
        debug_assert!(in_word.0 < Self::BITS as _);

        //  FIXME: convert to `.try_into()` when it is const.
        if of_word.0 as u64 as usize != of_word.0 {
            return None;
        }

        let Some(index) = (of_word.0 as u64).checked_mul(Self::BITS) else {
            return None;
        };

        //  Mask to ensure the addition doesn't overflow.
        Some(index + (in_word.0 as u64) % Self::BITS)
    }
}

// mod static_tests

//
//  Bit operations.
//

impl BitWord {
    /// Returns the number of bits set.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use big_set::utils::BitWord;
    /// assert_eq!(0, BitWord::ALL_ZEROS.count());
    /// assert_eq!(3, BitWord(0b1011).count());
    /// assert_eq!(64, BitWord::ALL_ONES.count());
    /// ```
    #[inline]
    pub const fn count(&self) -> usize {
        //  Lowers to `popcnt` where available, and to a branch-free bit-twiddling sequence otherwise.
        self.0.count_ones() as _
    }

    /// Returns whether no bit is set.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns whether the given bit is set.
    ///
    /// #   Panics
    ///
    /// See `IndexInWord`.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use big_set::utils::{BitWord, IndexInWord};
    /// let word = BitWord(0b1001);
    ///
    /// assert!(word.is_set(IndexInWord(0)));
    /// assert!(word.is_set(IndexInWord(3)));
    ///
    /// for i in (1..=2).chain(4..=63) {
    ///     assert!(!word.is_set(IndexInWord(i)));
    /// }
    /// ```
    #[inline]
    pub const fn is_set(&self, bit: IndexInWord) -> bool {
        (self.0 & Self::bit_mask(bit)) != 0
    }

    /// Sets a bit.
    ///
    /// Returns whether the bit is newly set, or not.
    ///
    /// #   Panics
    ///
    /// See `IndexInWord`.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use big_set::utils::{BitWord, IndexInWord};
    /// let mut word = BitWord(0b1001);
    ///
    /// assert!(!word.set(IndexInWord(0)));
    /// assert!(word.set(IndexInWord(2)));
    ///
    /// assert_eq!(0b1101, word.0);
    /// ```
    #[inline]
    pub const fn set(&mut self, bit: IndexInWord) -> bool {
        let mask = Self::bit_mask(bit);

        let result = (self.0 & mask) == 0;

        self.0 |= mask;

        result
    }

    /// Resets a bit.
    ///
    /// Returns whether the bit was set, or not.
    ///
    /// #   Panics
    ///
    /// See `IndexInWord`.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use big_set::utils::{BitWord, IndexInWord};
    /// let mut word = BitWord(0b1001);
    ///
    /// assert!(word.reset(IndexInWord(0)));
    /// assert!(!word.reset(IndexInWord(2)));
    ///
    /// assert_eq!(0b1000, word.0);
    /// ```
    #[inline]
    pub const fn reset(&mut self, bit: IndexInWord) -> bool {
        let mask = Self::bit_mask(bit);

        let result = (self.0 & mask) != 0;

        self.0 &= !mask;

        result
    }

    /// Returns the bits set in `self` but not in `other`.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use big_set::utils::BitWord;
    /// assert_eq!(BitWord(0b1100), BitWord(0b1110).and_not(BitWord(0b0011)));
    /// ```
    #[inline]
    pub const fn and_not(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }
}

// mod bit_tests

//
//  Bitwise traits.
//

impl BitAndAssign for BitWord {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitAnd for BitWord {
    type Output = Self;

    #[inline]
    fn bitand(mut self, rhs: Self) -> Self::Output {
        self &= rhs;
        self
    }
}

impl BitOrAssign for BitWord {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitOr for BitWord {
    type Output = Self;

    #[inline]
    fn bitor(mut self, rhs: Self) -> Self::Output {
        self |= rhs;
        self
    }
}

impl BitXorAssign for BitWord {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl BitXor for BitWord {
    type Output = Self;

    #[inline]
    fn bitxor(mut self, rhs: Self) -> Self::Output {
        self ^= rhs;
        self
    }
}

impl Not for BitWord {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        Self(!self.0)
    }
}

// mod bitwise_tests

//
//  Implementation details
//

impl BitWord {
    //  Mask of the bit.
    #[inline]
    const fn bit_mask(bit: IndexInWord) -> u64 {
        debug_assert!(bit.0 < Self::BITS as _);

        //  Mask to ensure the shift doesn't overflow.
        let shift = bit.0 % Self::BITS as u32;

        1 << shift
    }
}
