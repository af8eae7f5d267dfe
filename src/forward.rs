//! Multi-pass forward iterator
//!
//! A bare position with no invalidation tracking: copies are independent and may be
//! advanced in any order.

use std::fmt;

use crate::position;
use crate::traits::{ForwardCursor, InputCursor, IteratorCategory, IteratorTraits};

/// Forward iterator over caller-owned contiguous storage.
pub struct ForwardIterator<T> {
    ptr: *mut T,
}

// SAFETY: equivalent to holding `&mut T`; aliasing between copies is the caller's
// responsibility under the construction contract.
unsafe impl<T: Send> Send for ForwardIterator<T> {}

impl<T> ForwardIterator<T> {
    /// Wrap the position `ptr`.
    ///
    /// # Safety
    ///
    /// Every position this iterator or any copy of it is dereferenced at must point to
    /// an initialized element of a live buffer, and a reference obtained through
    /// [`ForwardIterator::get_mut`] must not overlap any other live reference to the
    /// same element. Positions are never bounds-checked.
    pub unsafe fn new(ptr: *mut T) -> Self {
        Self { ptr }
    }

    /// Iterator at the first element of `buf`.
    ///
    /// # Safety
    ///
    /// Same contract as [`ForwardIterator::new`].
    pub unsafe fn begin(buf: &mut [T]) -> Self {
        Self::new(buf.as_mut_ptr())
    }

    /// Shared access to the current element.
    pub fn get(&self) -> &T {
        // SAFETY: covered by the contract of `ForwardIterator::new`.
        unsafe { &*self.ptr }
    }

    /// Mutable access to the current element.
    pub fn get_mut(&mut self) -> &mut T {
        // SAFETY: covered by the contract of `ForwardIterator::new`.
        unsafe { &mut *self.ptr }
    }

    /// Step to the next element.
    pub fn advance(&mut self) -> &mut Self {
        self.ptr = position::offset_mut(self.ptr, 1);
        self
    }

    /// Current position.
    pub fn as_ptr(&self) -> *mut T {
        self.ptr
    }
}

impl<T> Clone for ForwardIterator<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ForwardIterator<T> {}

impl<T> PartialEq for ForwardIterator<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr == other.ptr
    }
}

impl<T> Eq for ForwardIterator<T> {}

impl<T> fmt::Debug for ForwardIterator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ForwardIterator").field(&self.ptr).finish()
    }
}

impl<T> IteratorTraits for ForwardIterator<T> {
    type Value = T;
    type Difference = isize;
    const CATEGORY: IteratorCategory = IteratorCategory::Forward;
    const MUTABLE: bool = true;
}

impl<T: Clone> InputCursor for ForwardIterator<T> {
    type Item = T;

    fn read(&self) -> T {
        self.get().clone()
    }

    fn advance(&mut self) {
        ForwardIterator::advance(self);
    }
}

impl<T: Clone> ForwardCursor for ForwardIterator<T> {}
