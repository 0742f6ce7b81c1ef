//  Errors.

use core::{error, fmt};

/// An error in addressing a bit: the key is negative, or too large for this platform.
///
/// The offending key is kept as an `i128`, which is wide enough for any key, signed or unsigned.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct InvalidIndex(pub i128);

impl InvalidIndex {
    /// Returns the offending key.
    #[inline]
    pub const fn index(&self) -> i128 {
        self.0
    }
}

impl fmt::Display for InvalidIndex {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "InvalidIndex({})", self.0)
    }
}

impl error::Error for InvalidIndex {}

// mod tests
