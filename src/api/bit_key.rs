//! A generic key for the set.

use crate::utils::{BitWord, IndexInWord, IndexOfWord, InvalidIndex};

/// A bit key is an integer usable as a member of a `BigSet`.
///
/// Only non-negative keys may be members. Signed keys are accepted for convenience, and negative values are rejected
/// with `InvalidIndex` rather than wrapped around.
pub trait BitKey: Copy {
    /// Returns the bit index associated to the key.
    ///
    /// Returns an error if the key is negative.
    fn into_index(self) -> Result<u64, InvalidIndex>;

    /// Splits the key into an index-of-word/index-in-word pair.
    ///
    /// Returns an error if the key is negative, or too large for the index-of-word part on this platform.
    #[inline]
    fn split(self) -> Result<(IndexOfWord, IndexInWord), InvalidIndex> {
        let index = self.into_index()?;

        BitWord::split(index).ok_or(InvalidIndex(index.into()))
    }
}

macro_rules! unsigned_bit_key {
    ($($t:ty),*) => {$(
        impl BitKey for $t {
            #[inline]
            fn into_index(self) -> Result<u64, InvalidIndex> {
                Ok(self.into())
            }
        }
    )*};
}

macro_rules! signed_bit_key {
    ($($t:ty),*) => {$(
        impl BitKey for $t {
            #[inline]
            fn into_index(self) -> Result<u64, InvalidIndex> {
                u64::try_from(self).map_err(|_| InvalidIndex(self.into()))
            }
        }
    )*};
}

unsigned_bit_key!(u8, u16, u32, u64);
signed_bit_key!(i8, i16, i32, i64);

impl BitKey for usize {
    #[inline]
    fn into_index(self) -> Result<u64, InvalidIndex> {
        //  Only fails on platforms with a `usize` wider than 64 bits.
        u64::try_from(self).map_err(|_| InvalidIndex(self as i128))
    }
}

impl BitKey for isize {
    #[inline]
    fn into_index(self) -> Result<u64, InvalidIndex> {
        u64::try_from(self).map_err(|_| InvalidIndex(self as i128))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsigned() {
        assert_eq!(Ok(0), 0u8.into_index());
        assert_eq!(Ok(255), u8::MAX.into_index());
        assert_eq!(Ok(65_535), u16::MAX.into_index());
        assert_eq!(Ok(4_294_967_295), u32::MAX.into_index());
        assert_eq!(Ok(u64::MAX), u64::MAX.into_index());
        assert_eq!(Ok(42), 42usize.into_index());
    }

    #[test]
    fn signed_non_negative() {
        assert_eq!(Ok(0), 0i8.into_index());
        assert_eq!(Ok(127), i8::MAX.into_index());
        assert_eq!(Ok(1_000_000), 1_000_000i32.into_index());
        assert_eq!(Ok(i64::MAX as u64), i64::MAX.into_index());
        assert_eq!(Ok(42), 42isize.into_index());
    }

    #[test]
    fn signed_negative() {
        assert_eq!(Err(InvalidIndex(-1)), (-1i8).into_index());
        assert_eq!(Err(InvalidIndex(-300)), (-300i16).into_index());
        assert_eq!(Err(InvalidIndex(-1)), (-1i32).into_index());
        assert_eq!(Err(InvalidIndex(i64::MIN.into())), i64::MIN.into_index());
        assert_eq!(Err(InvalidIndex(-7)), (-7isize).into_index());
    }

    #[test]
    fn split() {
        assert_eq!(Ok((IndexOfWord(2), IndexInWord(5))), 133u32.split());
        assert_eq!(Ok((IndexOfWord(0), IndexInWord(63))), 63i64.split());
        assert_eq!(Err(InvalidIndex(-64)), (-64i64).split());
    }

    #[test]
    #[cfg(not(target_pointer_width = "64"))]
    fn split_overflow() {
        assert_eq!(Err(InvalidIndex(u64::MAX.into())), u64::MAX.split());
    }
} // mod tests
