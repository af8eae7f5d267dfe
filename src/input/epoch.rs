//! Shared epoch record for one input-iterator lineage
//!
//! The record only stores the lineage epoch. The number of live sharers is the
//! strong count of the `Arc` that owns it, and the record is freed with the last one.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Weak};

/// Epoch counter shared by every copy in a lineage.
#[derive(Debug, Default)]
pub(crate) struct EpochRecord {
    epoch: AtomicUsize,
}

impl EpochRecord {
    /// Start a lineage at epoch 0.
    pub(crate) fn new_shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Current lineage epoch.
    #[inline]
    pub(crate) fn epoch(&self) -> usize {
        self.epoch.load(Ordering::Acquire)
    }

    /// Bump the lineage epoch, returning the new value.
    #[inline]
    pub(crate) fn bump(&self) -> usize {
        self.epoch.fetch_add(1, Ordering::AcqRel) + 1
    }
}

/// Weak observer of a lineage record.
///
/// Holding a probe does not keep the record alive, so it can be used to check that
/// dropping the last iterator of a lineage actually released the record.
#[derive(Debug, Clone)]
pub struct LineageProbe {
    record: Weak<EpochRecord>,
}

impl LineageProbe {
    pub(crate) fn new(record: &Arc<EpochRecord>) -> Self {
        Self {
            record: Arc::downgrade(record),
        }
    }

    /// True while at least one iterator of the lineage is alive.
    pub fn is_alive(&self) -> bool {
        self.record.strong_count() > 0
    }

    /// Number of live iterators sharing the record.
    pub fn sharers(&self) -> usize {
        self.record.strong_count()
    }

    /// Lineage epoch, or `None` once the record has been released.
    pub fn epoch(&self) -> Option<usize> {
        self.record.upgrade().map(|record| record.epoch())
    }
}
