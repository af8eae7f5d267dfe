#![allow(dead_code)]

use harness_iter::{ConstRandomIterator, ForwardIterator, InputIterator, RandomIterator};
use tracing_subscriber::EnvFilter;

/// Install a test-writer subscriber filtered by `HARNESS_ITER_LOG` (default `warn`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("HARNESS_ITER_LOG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

pub fn input_over<T>(buf: &[T]) -> InputIterator<T> {
    // SAFETY: tests only read positions inside `buf`.
    unsafe { InputIterator::new(buf.as_ptr()) }
}

pub fn forward_over<T>(buf: &mut [T]) -> ForwardIterator<T> {
    // SAFETY: tests only dereference positions inside `buf`.
    unsafe { ForwardIterator::begin(buf) }
}

pub fn random_over<T>(buf: &mut [T]) -> (RandomIterator<T>, RandomIterator<T>) {
    // SAFETY: tests only dereference positions inside `buf`.
    unsafe { RandomIterator::bounds(buf) }
}

pub fn const_random_over<T>(buf: &[T]) -> (ConstRandomIterator<T>, ConstRandomIterator<T>) {
    // SAFETY: tests only dereference positions inside `buf`.
    unsafe { ConstRandomIterator::bounds(buf) }
}
