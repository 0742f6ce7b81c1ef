//! Dynamically sized set of non-negative integers.

use core::{
    fmt,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Sub, SubAssign},
};

use alloc::vec::Vec;

use crate::{
    api::{BitKey, InvalidIndex},
    utils::{BitWord, IndexInWord, IndexOfWord, WordStore},
};

/// Dynamically sized set of non-negative integers.
///
/// The member `n` is stored as bit `n % 64` of the `n / 64`-th word, and the storage grows as larger members are
/// inserted. Memory usage is thus proportional to the largest member, not to the number of members.
#[derive(Clone, Default, Eq, Hash, PartialEq)]
pub struct BigSet {
    words: WordStore,
}

//
//  Creation
//

impl BigSet {
    /// Creates a new, empty, set.
    ///
    /// Does not allocate.
    pub const fn new() -> Self {
        Self {
            words: WordStore::new(),
        }
    }

    /// Creates a new, empty, set with room for the members `0..bits` before reallocating.
    pub fn with_capacity(bits: usize) -> Self {
        let words = bits.div_ceil(BitWord::BITS as usize);

        Self {
            words: WordStore::with_capacity(words),
        }
    }

    /// Creates a new set containing each of `members`.
    ///
    /// Returns an error on the first negative member.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use big_set::BigSet;
    /// let set = BigSet::from_members([1, 2, 3]).expect("non-negative");
    ///
    /// assert_eq!(3, set.len());
    /// assert!(BigSet::from_members([1, -2]).is_err());
    /// ```
    pub fn from_members<I>(members: I) -> Result<Self, InvalidIndex>
    where
        I: IntoIterator<Item: BitKey>,
    {
        let mut result = Self::new();

        result.insert_all(members)?;

        Ok(result)
    }

    /// Creates a new set from its words, the lowest members first.
    ///
    /// Bit `i` of `words[o]` is the member `o * 64 + i`.
    pub fn from_words(words: Vec<u64>) -> Self {
        let words = words.into_iter().map(BitWord).collect();

        Self {
            words: WordStore::from_words(words),
        }
    }
}

//
//  Queries
//

impl BigSet {
    /// Returns the underlying words, the lowest members first.
    ///
    /// Trailing `ALL_ZEROS` words may be present.
    pub fn words(&self) -> &[BitWord] {
        self.words.words()
    }

    /// Returns the number of members the set can hold without reallocating.
    ///
    /// Equivalently, any member strictly less than the capacity can be inserted without reallocating.
    pub fn capacity(&self) -> usize {
        self.words.capacity().saturating_mul(BitWord::BITS as usize)
    }

    /// Returns whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_zero()
    }

    /// Returns the number of members of the set.
    ///
    /// Its complexity is linear in the number of words, and independent of the number of members.
    pub fn len(&self) -> usize {
        self.words.count()
    }

    /// Returns whether the set contains `member`, or not.
    ///
    /// A key which cannot be a member, such as a negative one, is never contained.
    pub fn contains<K>(&self, member: K) -> bool
    where
        K: BitKey,
    {
        let Ok((of_word, in_word)) = member.split() else {
            return false;
        };

        self.words.get(of_word).is_set(in_word)
    }

    /// Returns whether every member of `self` is a member of `other`.
    ///
    /// That is, whether intersecting `self` with `other` leaves the number of members of `self` unchanged.
    pub fn is_subset(&self, other: &Self) -> bool {
        self.words.count_and(&other.words) == self.len()
    }

    /// Returns whether every member of `other` is a member of `self`.
    pub fn is_superset(&self, other: &Self) -> bool {
        self.words.count_and(&other.words) == other.len()
    }

    /// Returns whether `self` and `other` have no member in common.
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.words.count_and(&other.words) == 0
    }
}

//
//  Mutations
//

impl BigSet {
    /// Inserts `member` in the set.
    ///
    /// Returns:
    ///
    /// -   `Ok(true)`: if the member was newly inserted.
    /// -   `Ok(false)`: if the member was already present.
    /// -   `Err(_)`: if the member is negative; the set is left unchanged.
    pub fn insert<K>(&mut self, member: K) -> Result<bool, InvalidIndex>
    where
        K: BitKey,
    {
        let (of_word, in_word) = member.split()?;

        Ok(self.words.get_or_grow(of_word).set(in_word))
    }

    /// Inserts each of `members` in the set, returning the set itself.
    ///
    /// Returns an error on the first negative member; the members preceding it are inserted.
    pub fn insert_all<I>(&mut self, members: I) -> Result<&mut Self, InvalidIndex>
    where
        I: IntoIterator<Item: BitKey>,
    {
        for member in members {
            self.insert(member)?;
        }

        Ok(self)
    }

    /// Removes `member` from the set.
    ///
    /// Returns:
    ///
    /// -   `Ok(true)`: if the member was present.
    /// -   `Ok(false)`: if the member was absent, in which case this is a no-op.
    /// -   `Err(_)`: if the member is negative; the set is left unchanged.
    pub fn remove<K>(&mut self, member: K) -> Result<bool, InvalidIndex>
    where
        K: BitKey,
    {
        let (of_word, in_word) = member.split()?;

        //  Absent words are `ALL_ZEROS`, hence there is nothing to remove.
        Ok(self.words.get_mut(of_word).is_some_and(|word| word.reset(in_word)))
    }

    /// Removes each of `members` from the set, returning the set itself.
    ///
    /// Returns an error on the first negative member; the members preceding it are removed.
    pub fn remove_all<I>(&mut self, members: I) -> Result<&mut Self, InvalidIndex>
    where
        I: IntoIterator<Item: BitKey>,
    {
        for member in members {
            self.remove(member)?;
        }

        Ok(self)
    }

    /// Clears the set, removing all members.
    ///
    /// The storage is kept, see `shrink_to_fit` to release it.
    pub fn clear(&mut self) {
        self.words.clear();
    }

    /// Releases the storage not needed by the current members.
    pub fn shrink_to_fit(&mut self) {
        self.words.shrink_to_fit();
    }
}

// mod mutation_tests

//
//  In-place set algebra
//

impl BigSet {
    /// Updates `self` to be `self ∪ other`, returning `self`.
    pub fn union_with(&mut self, other: &Self) -> &mut Self {
        self.words.or_with(&other.words);
        self
    }

    /// Updates `self` to be `self ∩ other`, returning `self`.
    pub fn intersect_with(&mut self, other: &Self) -> &mut Self {
        self.words.and_with(&other.words);
        self
    }

    /// Updates `self` to be `self ∖ other`, returning `self`.
    ///
    /// Members of `self` larger than any member `other` could hold are kept as is.
    pub fn difference_with(&mut self, other: &Self) -> &mut Self {
        self.words.and_not_with(&other.words);
        self
    }

    /// Updates `self` to be `self ∆ other`, returning `self`.
    pub fn symmetric_difference_with(&mut self, other: &Self) -> &mut Self {
        self.words.xor_with(&other.words);
        self
    }
}

// mod algebra_tests

//
//  Operators
//
//  The assigning operators are the in-place operations, while the binary operators on references allocate a new set.
//

impl BitOrAssign<&BigSet> for BigSet {
    #[inline]
    fn bitor_assign(&mut self, rhs: &BigSet) {
        self.union_with(rhs);
    }
}

impl BitOr for &BigSet {
    type Output = BigSet;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        let mut result = self.clone();
        result |= rhs;
        result
    }
}

impl BitAndAssign<&BigSet> for BigSet {
    #[inline]
    fn bitand_assign(&mut self, rhs: &BigSet) {
        self.intersect_with(rhs);
    }
}

impl BitAnd for &BigSet {
    type Output = BigSet;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        //  Clone the shorter operand, as the result cannot exceed it.
        let (short, long) = if self.words().len() <= rhs.words().len() {
            (self, rhs)
        } else {
            (rhs, self)
        };

        let mut result = short.clone();
        result &= long;
        result
    }
}

impl SubAssign<&BigSet> for BigSet {
    #[inline]
    fn sub_assign(&mut self, rhs: &BigSet) {
        self.difference_with(rhs);
    }
}

impl Sub for &BigSet {
    type Output = BigSet;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        let mut result = self.clone();
        result -= rhs;
        result
    }
}

impl BitXorAssign<&BigSet> for BigSet {
    #[inline]
    fn bitxor_assign(&mut self, rhs: &BigSet) {
        self.symmetric_difference_with(rhs);
    }
}

impl BitXor for &BigSet {
    type Output = BigSet;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self::Output {
        let mut result = self.clone();
        result ^= rhs;
        result
    }
}

// mod operator_tests

//
//  Conversions
//

impl<K> TryFrom<&[K]> for BigSet
where
    K: BitKey,
{
    type Error = InvalidIndex;

    fn try_from(members: &[K]) -> Result<Self, Self::Error> {
        Self::from_members(members.iter().copied())
    }
}

impl<K, const N: usize> TryFrom<[K; N]> for BigSet
where
    K: BitKey,
{
    type Error = InvalidIndex;

    fn try_from(members: [K; N]) -> Result<Self, Self::Error> {
        Self::from_members(members)
    }
}

//
//  Common traits
//

impl fmt::Debug for BigSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        let mut set = f.debug_set();

        for (of_word, word) in self.words.significant_words().iter().enumerate() {
            let mut bits = *word;

            //  Visit set bits only, clearing the lowest one each time.
            while !bits.is_zero() {
                let in_word = IndexInWord(bits.0.trailing_zeros());

                bits.reset(in_word);

                if let Some(member) = BitWord::fuse(IndexOfWord(of_word), in_word) {
                    set.entry(&member);
                }
            }
        }

        set.finish()
    }
}

#[cfg(test)]
mod common_tests {
    use super::*;

    #[test]
    fn debug() {
        let set = BigSet::from_members([1000, 3, 1, 64]).expect("non-negative");

        assert_eq!("{}", format!("{:?}", BigSet::new()));
        assert_eq!("{1, 3, 64, 1000}", format!("{set:?}"));
    }

    #[test]
    fn eq_ignores_storage() {
        let mut grown = BigSet::from_members([1, 5_000]).expect("non-negative");
        grown.remove(5_000).expect("non-negative");

        assert_eq!(BigSet::from_members([1]).expect("non-negative"), grown);
        assert_ne!(BigSet::from_members([1, 2]).expect("non-negative"), grown);
    }

    #[test]
    fn try_from() {
        let from_slice = BigSet::try_from(&[1i32, 2, 3][..]);
        let from_array = BigSet::try_from([3u64, 2, 1]);

        assert_eq!(from_slice, from_array);
        assert_eq!(Err(InvalidIndex(-3)), BigSet::try_from([1i16, -3]));
    }

    #[test]
    fn from_words() {
        let set = BigSet::from_words(vec![0b1010, 0, 0b1]);

        assert_eq!(BigSet::from_members([1, 3, 128]).expect("non-negative"), set);
        assert_eq!(&[BitWord(0b1010), BitWord(0), BitWord(0b1)], set.words());
    }
} // mod common_tests
