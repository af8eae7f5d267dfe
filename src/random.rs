//! Random-access iterators over mutable and immutable elements
//!
//! Both kinds support offsets, signed distances and position ordering. Nothing is
//! bounds-checked: these iterators exist to test an algorithm's own bounds discipline, and
//! forming a position outside the buffer is harmless until it is dereferenced.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};

use crate::position;
use crate::traits::{
    ForwardCursor, InputCursor, IteratorCategory, IteratorTraits, RandomAccessCursor,
};

/// Random-access iterator with mutable element access.
pub struct RandomIterator<T> {
    ptr: *mut T,
}

// SAFETY: equivalent to holding `&mut T`; aliasing between copies is the caller's
// responsibility under the construction contract.
unsafe impl<T: Send> Send for RandomIterator<T> {}

impl<T> RandomIterator<T> {
    /// Wrap the position `ptr`.
    ///
    /// # Safety
    ///
    /// Every position this iterator, its copies or its offsets are dereferenced at must
    /// point to an initialized element of a live buffer, and a reference obtained through
    /// [`RandomIterator::get_mut`] must not overlap any other live reference to the same
    /// element.
    pub unsafe fn new(ptr: *mut T) -> Self {
        Self { ptr }
    }

    /// `[begin, end)` iterators spanning `buf`.
    ///
    /// # Safety
    ///
    /// Same contract as [`RandomIterator::new`]. `end` must not be dereferenced.
    pub unsafe fn bounds(buf: &mut [T]) -> (Self, Self) {
        let range = position::range_mut(buf);
        (Self::new(range.start), Self::new(range.end))
    }

    /// Shared access to the current element.
    pub fn get(&self) -> &T {
        // SAFETY: covered by the contract of `RandomIterator::new`.
        unsafe { &*self.ptr }
    }

    /// Mutable access to the current element.
    pub fn get_mut(&mut self) -> &mut T {
        // SAFETY: covered by the contract of `RandomIterator::new`.
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

impl<T> Clone for RandomIterator<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RandomIterator<T> {}

impl<T> PartialEq for RandomIterator<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr == other.ptr
    }
}

impl<T> Eq for RandomIterator<T> {}

impl<T> PartialOrd for RandomIterator<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for RandomIterator<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ptr.cmp(&other.ptr)
    }
}

impl<T> Sub for RandomIterator<T> {
    type Output = isize;

    fn sub(self, origin: Self) -> isize {
        position::distance(self.ptr, origin.ptr)
    }
}

impl<T> Add<isize> for RandomIterator<T> {
    type Output = Self;

    fn add(self, n: isize) -> Self {
        Self {
            ptr: position::offset_mut(self.ptr, n),
        }
    }
}

impl<T> fmt::Debug for RandomIterator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RandomIterator").field(&self.ptr).finish()
    }
}

impl<T> IteratorTraits for RandomIterator<T> {
    type Value = T;
    type Difference = isize;
    const CATEGORY: IteratorCategory = IteratorCategory::RandomAccess;
    const MUTABLE: bool = true;
}

impl<T: Clone> InputCursor for RandomIterator<T> {
    type Item = T;

    fn read(&self) -> T {
        self.get().clone()
    }

    fn advance(&mut self) {
        RandomIterator::advance(self);
    }
}

impl<T: Clone> ForwardCursor for RandomIterator<T> {}

impl<T: Clone> RandomAccessCursor for RandomIterator<T> {
    fn offset(&self, n: isize) -> Self {
        *self + n
    }

    fn distance_from(&self, origin: &Self) -> isize {
        *self - *origin
    }
}

/// Random-access iterator with read-only element access.
pub struct ConstRandomIterator<T> {
    ptr: *const T,
}

// SAFETY: equivalent to holding `&T`.
unsafe impl<T: Sync> Send for ConstRandomIterator<T> {}
// SAFETY: see above.
unsafe impl<T: Sync> Sync for ConstRandomIterator<T> {}

impl<T> ConstRandomIterator<T> {
    /// Wrap the position `ptr`.
    ///
    /// # Safety
    ///
    /// Every position this iterator, its copies or its offsets are dereferenced at must
    /// point to an initialized element of a buffer that outlives the access and is not
    /// mutated during it.
    pub unsafe fn new(ptr: *const T) -> Self {
        Self { ptr }
    }

    /// `[begin, end)` iterators spanning `buf`.
    ///
    /// # Safety
    ///
    /// Same contract as [`ConstRandomIterator::new`]. `end` must not be dereferenced.
    pub unsafe fn bounds(buf: &[T]) -> (Self, Self) {
        let range = position::range(buf);
        (Self::new(range.start), Self::new(range.end))
    }

    /// Access the current element.
    pub fn get(&self) -> &T {
        // SAFETY: covered by the contract of `ConstRandomIterator::new`.
        unsafe { &*self.ptr }
    }

    /// Step to the next element.
    pub fn advance(&mut self) -> &mut Self {
        self.ptr = position::offset(self.ptr, 1);
        self
    }

    /// Current position.
    pub fn as_ptr(&self) -> *const T {
        self.ptr
    }
}

impl<T> From<RandomIterator<T>> for ConstRandomIterator<T> {
    fn from(it: RandomIterator<T>) -> Self {
        Self {
            ptr: it.ptr.cast_const(),
        }
    }
}

impl<T> Clone for ConstRandomIterator<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ConstRandomIterator<T> {}

impl<T> PartialEq for ConstRandomIterator<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr == other.ptr
    }
}

impl<T> Eq for ConstRandomIterator<T> {}

impl<T> PartialOrd for ConstRandomIterator<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for ConstRandomIterator<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ptr.cmp(&other.ptr)
    }
}

impl<T> Sub for ConstRandomIterator<T> {
    type Output = isize;

    fn sub(self, origin: Self) -> isize {
        position::distance(self.ptr, origin.ptr)
    }
}

impl<T> Add<isize> for ConstRandomIterator<T> {
    type Output = Self;

    fn add(self, n: isize) -> Self {
        Self {
            ptr: position::offset(self.ptr, n),
        }
    }
}

impl<T> fmt::Debug for ConstRandomIterator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ConstRandomIterator").field(&self.ptr).finish()
    }
}

impl<T> IteratorTraits for ConstRandomIterator<T> {
    type Value = T;
    type Difference = isize;
    const CATEGORY: IteratorCategory = IteratorCategory::RandomAccess;
    const MUTABLE: bool = false;
}

impl<T: Clone> InputCursor for ConstRandomIterator<T> {
    type Item = T;

    fn read(&self) -> T {
        self.get().clone()
    }

    fn advance(&mut self) {
        ConstRandomIterator::advance(self);
    }
}

impl<T: Clone> ForwardCursor for ConstRandomIterator<T> {}

impl<T: Clone> RandomAccessCursor for ConstRandomIterator<T> {
    fn offset(&self, n: isize) -> Self {
        *self + n
    }

    fn distance_from(&self, origin: &Self) -> isize {
        *self - *origin
    }
}
