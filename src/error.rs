//! Invalid-use diagnostics for single-pass iterators
//!
//! A stale [`InputIterator`](crate::InputIterator) is a defect in the code under test,
//! so the public operations turn these errors into panics. The error type itself is
//! exposed for harness code that wants to probe validity without aborting.

use std::fmt;

use thiserror::Error;

/// Operation attempted on an input iterator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Copy-construction (`Clone::clone`).
    Copy,
    /// Copy-assignment (`Clone::clone_from`).
    Assign,
    /// Reading the current element.
    Dereference,
    /// Advancing to the next element.
    Increment,
    /// Equality comparison, left operand.
    Compare,
    /// Equality comparison, right operand.
    CompareWith,
}

impl Operation {
    /// Diagnostic text reported when this operation hits a stale iterator.
    pub fn diagnostic(self) -> &'static str {
        match self {
            Operation::Copy => "Copying an invalidated iterator",
            Operation::Assign => "Assigning an invalidated iterator",
            Operation::Dereference => "Dereferencing an invalidated input iterator",
            Operation::Increment => "Incrementing an invalidated input iterator",
            Operation::Compare => "Comparing an invalidated input iterator",
            Operation::CompareWith => "Comparing with an invalidated input iterator",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.diagnostic())
    }
}

/// An operation was attempted on an input iterator whose lineage has moved past it.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{operation} (iterator epoch {current_epoch}, lineage epoch {shared_epoch})")]
pub struct InvalidIteratorUse {
    /// What was attempted.
    pub operation: Operation,
    /// Private epoch of the offending iterator.
    pub current_epoch: usize,
    /// Epoch of the shared lineage record at the time of the check.
    pub shared_epoch: usize,
}
