//! Random-access iterator tests
//!
//! Checks distances, offsets, ordering and element access over buffers of
//! several sizes for both the mutable and the const flavour.

mod common;

use common::{const_random_over, random_over};
use harness_iter::{ConstRandomIterator, RandomAccessCursor, RandomIterator};
use test_case::test_case;

#[test_case(0; "empty")]
#[test_case(1; "single")]
#[test_case(7; "odd")]
#[test_case(64; "larger")]
#[allow(clippy::eq_op)]
fn test_end_minus_begin_is_len(k: usize) {
    let mut buf: Vec<u32> = (0..k as u32).collect();
    let (begin, end) = random_over(&mut buf);
    assert_eq!(end - begin, k as isize);
    assert_eq!(begin < end, k > 0);
    assert!(!(end < begin));

    for n in 0..=k as isize {
        assert!(begin + n == begin + n);
        assert_eq!((begin + n) - begin, n);
    }
    for i in 0..k {
        assert_eq!(*(begin + i as isize).get(), i as u32);
    }
}

#[test_case(0; "empty")]
#[test_case(3; "small")]
#[test_case(32; "larger")]
fn test_const_end_minus_begin_is_len(k: usize) {
    let buf: Vec<String> = (0..k).map(|i| format!("item-{i}")).collect();
    let (begin, end) = const_random_over(&buf);
    assert_eq!(end - begin, k as isize);
    assert_eq!(begin < end, k > 0);
    for (i, expected) in buf.iter().enumerate() {
        assert_eq!((begin + i as isize).get(), expected);
    }
}

#[test]
fn test_advance_matches_offset_by_one() {
    let mut buf = [1, 2, 3];
    let (begin, end) = random_over(&mut buf);
    let mut it = begin;
    it.advance();
    assert_eq!(it, begin + 1);
    it.advance().advance();
    assert_eq!(it, end);
    assert!(it != begin);
}

#[test]
fn test_negative_offsets_walk_backwards() {
    let buf = [10, 20, 30, 40];
    let (begin, end) = const_random_over(&buf);
    let last = end + -1;
    assert_eq!(*last.get(), 40);
    assert_eq!(last.offset(-3), begin);
    assert_eq!(begin.distance_from(&last), -3);
}

#[test]
fn test_writes_through_copies_are_visible() {
    let mut buf = [0i64; 4];
    let (begin, _) = random_over(&mut buf);
    for i in 0..4 {
        let mut slot = begin + i;
        *slot.get_mut() = i as i64 * 10;
    }
    let reader: ConstRandomIterator<i64> = begin.into();
    assert_eq!(*(reader + 3).get(), 30);
    assert_eq!(buf, [0, 10, 20, 30]);
}

#[test]
fn test_ordering_is_total_over_positions() {
    let mut buf = [0u8; 5];
    let (begin, end) = random_over(&mut buf);
    let mut positions: Vec<RandomIterator<u8>> = (0..5).rev().map(|i| begin + i).collect();
    positions.sort();
    assert_eq!(positions.first().copied(), Some(begin));
    assert_eq!(positions.last().copied(), Some(end + -1));
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_zero_sized_elements_keep_distinct_positions() {
    let mut buf = vec![(); 6];
    let (begin, end) = random_over(&mut buf);
    assert_eq!(end - begin, 6);
    assert!(begin < end);
    assert_eq!(begin + 6, end);
    assert_eq!((begin + 2).distance_from(&begin), 2);

    let (cbegin, cend) = const_random_over(&buf);
    let mut it = cbegin;
    let mut visited = 0;
    while it != cend {
        it.advance();
        visited += 1;
    }
    assert_eq!(visited, 6);
}
