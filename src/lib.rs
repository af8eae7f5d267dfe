//! # Synthetic Iterator Kit
//!
//! Iterators that simulate the different capability categories over a plain contiguous
//! buffer, so generic algorithms can be tested against the weakest guarantee they claim
//! to need.
//!
//! ## Kinds
//!
//! 1. [`InputIterator`]: single pass. Copies share an epoch record and a copy becomes
//!    unusable as soon as a sibling advances; misuse panics with a diagnostic.
//! 2. [`ForwardIterator`]: multi-pass, copies are independent.
//! 3. [`RandomIterator`]: offsets, distances and ordering over mutable elements.
//! 4. [`ConstRandomIterator`]: the same over immutable elements.
//!
//! Only [`InputIterator`] checks anything. The other kinds perform no validity or bounds
//! checks at all, which is what lets them expose algorithms that step out of range.
//!
//! ## Usage Example
//!
//! ```
//! use harness_iter::{classify, ConstRandomIterator, IteratorCategory, RandomAccessCursor};
//!
//! fn distance<C: RandomAccessCursor>(first: &C, last: &C) -> isize {
//!     last.distance_from(first)
//! }
//!
//! let buf = [3, 1, 4, 1, 5];
//! // SAFETY: nothing is dereferenced outside `buf`.
//! let (begin, end) = unsafe { ConstRandomIterator::bounds(&buf) };
//! assert_eq!(distance(&begin, &end), 5);
//! assert_eq!(
//!     classify::<ConstRandomIterator<i32>>().category,
//!     IteratorCategory::RandomAccess
//! );
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod error;    // Invalid-use diagnostics
pub mod forward;  // Multi-pass forward iterator
pub mod input;    // Single-pass iterator with epoch tracking
mod position;     // Pointer stepping shared by all kinds
pub mod random;   // Random-access iterators
pub mod traits;   // Categories and cursor traits

// Re-exports for convenience
pub use error::{InvalidIteratorUse, Operation};
pub use forward::ForwardIterator;
pub use input::{InputIterator, LineageProbe};
pub use random::{ConstRandomIterator, RandomIterator};
pub use traits::{
    classify, Classification, ForwardCursor, InputCursor, IteratorCategory, IteratorTraits,
    RandomAccessCursor,
};
