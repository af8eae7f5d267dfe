//! Single-pass input iterator with stale-copy detection
//!
//! Every [`InputIterator`] built with [`InputIterator::new`] starts a *lineage*: a shared
//! epoch record plus the iterator's own private epoch. Copies join the lineage and start
//! with the same private epoch. Advancing bumps both the advancing iterator's epoch and the
//! shared one, which leaves every sibling that did not advance permanently behind.
//!
//! An iterator is valid exactly when its private epoch equals the lineage epoch. Reading,
//! advancing, copying, assigning from or comparing a stale iterator is a bug in the code under
//! test and panics with an [`InvalidIteratorUse`] diagnostic.
//!
//! ```
//! use harness_iter::InputIterator;
//!
//! let buf = [10, 20, 30];
//! // SAFETY: only the first two elements are read.
//! let mut a = unsafe { InputIterator::new(buf.as_ptr()) };
//! assert_eq!(a.read(), 10);
//! a.advance();
//!
//! let b = a.clone();
//! assert_eq!(b.read(), 20);
//! a.advance();
//! assert!(!b.is_valid());
//! ```

mod epoch;

pub use epoch::LineageProbe;

use std::fmt;
use std::mem::{self, ManuallyDrop};
use std::sync::Arc;

use tracing::{error, trace};

use crate::error::{InvalidIteratorUse, Operation};
use crate::position;
use crate::traits::{InputCursor, IteratorCategory, IteratorTraits};
use epoch::EpochRecord;

/// Single-pass iterator over caller-owned contiguous storage.
pub struct InputIterator<T> {
    ptr: *const T,
    shared: ManuallyDrop<Arc<EpochRecord>>,
    current_epoch: usize,
}

// SAFETY: the iterator only ever reads through `ptr`, so sharing it across threads is
// equivalent to sharing `&T`. The lineage record is an `Arc` of atomics.
unsafe impl<T: Sync> Send for InputIterator<T> {}
// SAFETY: see above.
unsafe impl<T: Sync> Sync for InputIterator<T> {}

impl<T> InputIterator<T> {
    /// Start a new lineage at `ptr` with epoch 0.
    ///
    /// # Safety
    ///
    /// Every position this iterator or any copy of it is read at must point to an
    /// initialized element of a buffer that outlives those reads and is not mutated
    /// while they happen. Positions are never bounds-checked.
    pub unsafe fn new(ptr: *const T) -> Self {
        let shared = EpochRecord::new_shared();
        trace!(record = ?Arc::as_ptr(&shared), "started input iterator lineage");
        Self {
            ptr,
            shared: ManuallyDrop::new(shared),
            current_epoch: 0,
        }
    }

    /// Two independent lineages at the first and one-past-last positions of `buf`.
    ///
    /// # Safety
    ///
    /// Same contract as [`InputIterator::new`]. The end iterator must not be read.
    pub unsafe fn bounds(buf: &[T]) -> (Self, Self) {
        let range = position::range(buf);
        (Self::new(range.start), Self::new(range.end))
    }

    /// True if this iterator has not been overtaken by a sibling.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.current_epoch == self.shared.epoch()
    }

    /// Check that `operation` may be performed on this iterator.
    pub fn check(&self, operation: Operation) -> Result<(), InvalidIteratorUse> {
        let shared_epoch = self.shared.epoch();
        if self.current_epoch == shared_epoch {
            Ok(())
        } else {
            Err(InvalidIteratorUse {
                operation,
                current_epoch: self.current_epoch,
                shared_epoch,
            })
        }
    }

    /// Private epoch: how many times this iterator's lineage had advanced when it last
    /// caught up.
    pub fn epoch(&self) -> usize {
        self.current_epoch
    }

    /// Current position.
    pub fn as_ptr(&self) -> *const T {
        self.ptr
    }

    /// Number of live iterators in this lineage, including `self`.
    pub fn lineage_size(&self) -> usize {
        Arc::strong_count(&*self.shared)
    }

    /// Weak observer for this lineage's shared record.
    pub fn lineage_probe(&self) -> LineageProbe {
        LineageProbe::new(&*self.shared)
    }

    /// True if `self` and `other` descend from the same construction.
    pub fn same_lineage(&self, other: &Self) -> bool {
        Arc::ptr_eq(&*self.shared, &*other.shared)
    }

    /// Read the element at the current position.
    ///
    /// # Panics
    ///
    /// If the iterator has been invalidated.
    pub fn read(&self) -> T
    where
        T: Clone,
    {
        self.require(Operation::Dereference);
        // SAFETY: covered by the contract of `InputIterator::new`.
        unsafe { (*self.ptr).clone() }
    }

    /// Step to the next element, invalidating every sibling that has not advanced with us.
    ///
    /// # Panics
    ///
    /// If the iterator has already been invalidated.
    pub fn advance(&mut self) -> &mut Self {
        self.require(Operation::Increment);
        self.ptr = position::offset(self.ptr, 1);
        self.current_epoch += 1;
        let shared_epoch = self.shared.bump();
        trace!(epoch = shared_epoch, "advanced input iterator");
        self
    }

    fn require(&self, operation: Operation) {
        if let Err(err) = self.check(operation) {
            error!(%err, "invalid input iterator use");
            panic!("{err}");
        }
    }
}

impl<T> Clone for InputIterator<T> {
    /// Join this iterator's lineage at the same position and epoch.
    ///
    /// # Panics
    ///
    /// If `self` has been invalidated.
    fn clone(&self) -> Self {
        self.require(Operation::Copy);
        Self {
            ptr: self.ptr,
            shared: ManuallyDrop::new(Arc::clone(&*self.shared)),
            current_epoch: self.current_epoch,
        }
    }

    /// Become a copy of `source`, leaving the current lineage if it differs.
    ///
    /// # Panics
    ///
    /// If `source` has been invalidated.
    fn clone_from(&mut self, source: &Self) {
        source.require(Operation::Assign);
        self.ptr = source.ptr;
        self.current_epoch = source.current_epoch;
        if Arc::ptr_eq(&*self.shared, &*source.shared) {
            return;
        }
        let joined = ManuallyDrop::new(Arc::clone(&*source.shared));
        let previous = mem::replace(&mut self.shared, joined);
        release(ManuallyDrop::into_inner(previous));
    }
}

impl<T> PartialEq for InputIterator<T> {
    /// Compare positions.
    ///
    /// # Panics
    ///
    /// If either operand has been invalidated.
    fn eq(&self, other: &Self) -> bool {
        self.require(Operation::Compare);
        other.require(Operation::CompareWith);
        self.ptr == other.ptr
    }
}

impl<T> Drop for InputIterator<T> {
    fn drop(&mut self) {
        // SAFETY: `shared` is never touched again after this.
        let shared = unsafe { ManuallyDrop::take(&mut self.shared) };
        release(shared);
    }
}

/// Drop one share of a lineage record, logging when it was the last one.
fn release(record: Arc<EpochRecord>) {
    let addr = Arc::as_ptr(&record);
    if Arc::into_inner(record).is_some() {
        trace!(record = ?addr, "released input iterator lineage");
    }
}

impl<T> fmt::Debug for InputIterator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputIterator")
            .field("ptr", &self.ptr)
            .field("current_epoch", &self.current_epoch)
            .field("shared_epoch", &self.shared.epoch())
            .field("sharers", &Arc::strong_count(&*self.shared))
            .finish()
    }
}

impl<T> IteratorTraits for InputIterator<T> {
    type Value = T;
    type Difference = isize;
    const CATEGORY: IteratorCategory = IteratorCategory::Input;
    const MUTABLE: bool = true;
}

impl<T: Clone> InputCursor for InputIterator<T> {
    type Item = T;

    fn read(&self) -> T {
        InputIterator::read(self)
    }

    fn advance(&mut self) {
        InputIterator::advance(self);
    }
}
