//! A set of non-negative integers, backed by a growable bit vector.
//!
//! #   Organization
//!
//! This crate is composed of multiple top modules:
//!
//! -   The `api` top module contains the vocabulary types and traits: the keys, and the error.
//! -   The `algorithm` module contains the set algebra returning new sets.
//! -   The `collections` module contains the set itself, `BigSet`.
//! -   The `utils` module contains the low-level types upon which the set is built: words of bits, and their storage.
//!
//!
//! #   Representation
//!
//! The member `n` is bit `n % 64` of the `n / 64`-th word of a growable sequence of `u64`. Set algebra is thus
//! performed 64 members at a time, and `len` is a population count per word.
//!
//! Memory usage is proportional to the largest member: a set containing only `1_000_000` occupies about 122 KiB. This
//! suits dense-ish universes, such as identifiers up to a few millions, rather than sparse ones.
//!
//!
//! #   Keys
//!
//! Members may be given as any primitive integer, signed or not. Negative keys are rejected with `InvalidIndex`,
//! rather than wrapped around into unrelated members.
//!
//! ```
//! #   use big_set::{BigSet, InvalidIndex};
//! let mut set = BigSet::new();
//!
//! assert_eq!(Ok(true), set.insert(42u32));
//! assert_eq!(Ok(false), set.insert(42i64));
//! assert_eq!(Err(InvalidIndex(-1)), set.insert(-1));
//!
//! assert!(set.contains(42usize));
//! assert_eq!(1, set.len());
//! ```
//!
//!
//! #   In-place or not?
//!
//! Each binary operation comes in two flavors:
//!
//! -   In-place, mutating the receiver: `union_with`, `intersect_with`, `difference_with`, `symmetric_difference_with`,
//!     or equivalently the `|=`, `&=`, `-=`, and `^=` operators.
//! -   Pure, allocating a new set: `algorithm::{union, intersection, difference, symmetric_difference}`, or
//!     equivalently the `|`, `&`, `-`, and `^` operators on references.
//!
//! ```
//! #   use big_set::{BigSet, algorithm};
//! let mut s = BigSet::from_members([1, 2, 3, 4]).expect("non-negative");
//! let t = BigSet::from_members([1, 4, 5]).expect("non-negative");
//!
//! let pure = algorithm::symmetric_difference(&s, &t);
//! s.symmetric_difference_with(&t);
//!
//! assert_eq!(pure, s);
//! assert_eq!(3, s.len());
//! ```
//!
//!
//! #   Concurrency
//!
//! `BigSet` is `Send` and `Sync`; mutation requires exclusive access, so concurrent writers need an external lock.

#![cfg_attr(not(test), no_std)]
//  Lints
#![deny(missing_docs)]
//  This author prefers to keep its test modules close to what they are testing.
#![allow(clippy::items_after_test_module)]

extern crate alloc;

pub mod algorithm;
pub mod api;
pub mod collections;
pub mod utils;

pub use api::{BitKey, InvalidIndex};
pub use collections::BigSet;
