//! Capability descriptions for the synthetic iterators
//!
//! Two layers live here:
//!
//! 1. **Classification**: [`IteratorTraits`] tells generic test code which category an
//!    iterator belongs to, what it yields, and whether it hands out mutable access.
//! 2. **Cursor traits**: [`InputCursor`], [`ForwardCursor`] and [`RandomAccessCursor`]
//!    are the bounds generic algorithms under test are written against. Each kit type
//!    implements exactly the traits its category allows, so an algorithm that demands
//!    more than it needs fails to compile against the weaker iterators.

use std::fmt;

/// Iterator capability category, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IteratorCategory {
    /// Single pass; copies are invalidated once any sibling advances.
    Input,
    /// Multi-pass; copies traverse independently.
    Forward,
    /// Multi-pass with constant-time offsets, distances and ordering.
    RandomAccess,
}

impl IteratorCategory {
    /// True if an iterator of this category can be used where `required` is expected.
    pub fn satisfies(self, required: IteratorCategory) -> bool {
        self >= required
    }

    /// True if copies of this iterator can be traversed independently.
    pub fn is_multi_pass(self) -> bool {
        self.satisfies(IteratorCategory::Forward)
    }
}

impl fmt::Display for IteratorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IteratorCategory::Input => "input",
            IteratorCategory::Forward => "forward",
            IteratorCategory::RandomAccess => "random-access",
        };
        f.write_str(name)
    }
}

/// Static trait information every kit iterator declares.
pub trait IteratorTraits {
    /// Element type stored in the underlying buffer.
    type Value;
    /// Signed distance between two positions, in elements.
    type Difference;
    /// Capability category.
    const CATEGORY: IteratorCategory;
    /// Whether dereferencing yields mutable access to the element.
    const MUTABLE: bool;
}

/// Runtime snapshot of an iterator type's [`IteratorTraits`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Capability category.
    pub category: IteratorCategory,
    /// Whether element access is mutable.
    pub mutable: bool,
    /// Name of the value type.
    pub value_type: &'static str,
}

/// Describe the iterator type `I`.
pub fn classify<I: IteratorTraits>() -> Classification {
    Classification {
        category: I::CATEGORY,
        mutable: I::MUTABLE,
        value_type: std::any::type_name::<I::Value>(),
    }
}

/// Minimal single-pass cursor: read the current element, step, compare positions.
pub trait InputCursor: PartialEq {
    /// Value produced by [`InputCursor::read`].
    type Item;

    /// Read the element at the current position.
    fn read(&self) -> Self::Item;

    /// Step to the next position.
    fn advance(&mut self);
}

/// Multi-pass cursor: copies may be advanced independently.
pub trait ForwardCursor: InputCursor + Clone {}

/// Cursor with constant-time offsets and position ordering.
pub trait RandomAccessCursor: ForwardCursor + PartialOrd {
    /// Cursor `n` elements away (negative `n` moves backwards).
    fn offset(&self, n: isize) -> Self;

    /// Signed number of elements from `origin` to `self`.
    fn distance_from(&self, origin: &Self) -> isize;
}
