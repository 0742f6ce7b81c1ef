//! Set algebra producing new sets.
//!
//! Each function borrows its operands, and returns a freshly allocated set which shares no storage with them. See the
//! `*_with` methods of `BigSet` for the in-place equivalents.
//!
//! #   Examples
//!
//! ```
//! #   use big_set::{BigSet, algorithm};
//! let s = BigSet::from_members([1, 2, 3, 4]).expect("non-negative");
//! let t = BigSet::from_members([3, 4, 5]).expect("non-negative");
//!
//! assert_eq!(BigSet::from_members([1, 2, 3, 4, 5]), Ok(algorithm::union(&s, &t)));
//! assert_eq!(BigSet::from_members([3, 4]), Ok(algorithm::intersection(&s, &t)));
//! assert_eq!(BigSet::from_members([1, 2]), Ok(algorithm::difference(&s, &t)));
//! assert_eq!(BigSet::from_members([1, 2, 5]), Ok(algorithm::symmetric_difference(&s, &t)));
//! ```

use crate::collections::BigSet;

/// Returns `s ∪ t`.
pub fn union(s: &BigSet, t: &BigSet) -> BigSet {
    s | t
}

/// Returns `s ∩ t`.
pub fn intersection(s: &BigSet, t: &BigSet) -> BigSet {
    s & t
}

/// Returns `s ∖ t`.
///
/// Members of `s` larger than any member `t` could hold are always part of the result.
pub fn difference(s: &BigSet, t: &BigSet) -> BigSet {
    s - t
}

/// Returns `s ∆ t`.
pub fn symmetric_difference(s: &BigSet, t: &BigSet) -> BigSet {
    s ^ t
}

/// Returns whether `s ⊆ t`.
pub fn is_subset(s: &BigSet, t: &BigSet) -> bool {
    s.is_subset(t)
}

/// Returns whether `s ⊇ t`.
pub fn is_superset(s: &BigSet, t: &BigSet) -> bool {
    s.is_superset(t)
}

/// Returns whether `s ∩ t = ∅`.
pub fn is_disjoint(s: &BigSet, t: &BigSet) -> bool {
    s.is_disjoint(t)
}

// mod tests
