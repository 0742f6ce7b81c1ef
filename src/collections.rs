//! Implementations of bit-keyed sets.

//  Design considerations
//
//  #   Why both methods and operators?
//
//  The `*_with` methods mutate in place and return the receiver, for chaining. The operators on references allocate a
//  new set, as do the free functions of `algorithm`, and read naturally in expressions.

pub mod big_set;

pub use big_set::BigSet;
