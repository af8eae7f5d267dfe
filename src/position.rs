//! Position arithmetic shared by every iterator kind
//!
//! Zero-sized elements all live at one address, so positions over them move by
//! `align_of::<T>()` bytes per element instead of `size_of::<T>()`. The resulting pointers
//! stay non-null and aligned, which is all a zero-sized read needs.

use std::mem;
use std::ops::Range;

/// Bytes between consecutive positions.
#[inline]
fn stride<T>() -> usize {
    match mem::size_of::<T>() {
        0 => mem::align_of::<T>(),
        size => size,
    }
}

/// Position `n` elements away from `ptr`.
#[inline]
pub(crate) fn offset<T>(ptr: *const T, n: isize) -> *const T {
    if mem::size_of::<T>() == 0 {
        let bytes = n.wrapping_mul(stride::<T>() as isize);
        ptr.cast::<u8>().wrapping_offset(bytes).cast()
    } else {
        ptr.wrapping_offset(n)
    }
}

/// Mutable flavour of [`offset`].
#[inline]
pub(crate) fn offset_mut<T>(ptr: *mut T, n: isize) -> *mut T {
    offset(ptr.cast_const(), n).cast_mut()
}

/// Signed number of elements from `from` to `to`.
#[inline]
pub(crate) fn distance<T>(to: *const T, from: *const T) -> isize {
    (to as usize as isize).wrapping_sub(from as usize as isize) / stride::<T>() as isize
}

/// `[start, end)` positions spanning `buf`.
pub(crate) fn range<T>(buf: &[T]) -> Range<*const T> {
    let start = buf.as_ptr();
    start..offset(start, buf.len() as isize)
}

/// Mutable flavour of [`range`].
pub(crate) fn range_mut<T>(buf: &mut [T]) -> Range<*mut T> {
    let start = buf.as_mut_ptr();
    start..offset_mut(start, buf.len() as isize)
}
