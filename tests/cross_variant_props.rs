mod common;

use common::{const_random_over, forward_over, input_over, random_over};
use harness_iter::InputCursor;
use proptest::prelude::*;

proptest! {
    #[test]
    fn forward_and_random_read_the_same_sequence(
        buf in proptest::collection::vec(any::<i32>(), 1..64),
        steps_hint in 0usize..64,
    ) {
        let steps = steps_hint % buf.len();
        let mut storage = buf.clone();

        let (begin, _) = random_over(&mut storage);
        let mut random = begin;
        let mut random_seen = Vec::with_capacity(steps + 1);
        for _ in 0..steps {
            random_seen.push(random.read());
            random.advance();
        }
        random_seen.push(random.read());

        let mut forward = forward_over(&mut storage);
        let mut forward_seen = Vec::with_capacity(steps + 1);
        for _ in 0..steps {
            forward_seen.push(forward.read());
            forward.advance();
        }
        forward_seen.push(forward.read());

        prop_assert_eq!(&random_seen, &forward_seen);
        prop_assert_eq!(&random_seen[..], &buf[..=steps]);
    }

    #[test]
    fn random_access_reads_every_index(buf in proptest::collection::vec(any::<u16>(), 0..128)) {
        let (begin, end) = const_random_over(&buf);
        prop_assert_eq!(end - begin, buf.len() as isize);
        prop_assert_eq!(begin < end, !buf.is_empty());
        for (i, expected) in buf.iter().enumerate() {
            let it = begin + i as isize;
            prop_assert_eq!(it.get(), expected);
            prop_assert!((begin + i as isize) < end);
        }
    }

    #[test]
    fn input_lineages_advance_in_lockstep(
        left in proptest::collection::vec(any::<i64>(), 1..32),
        right in proptest::collection::vec(any::<i64>(), 1..32),
    ) {
        let steps = left.len().min(right.len()) - 1;
        let mut a = input_over(&left);
        let mut b = input_over(&right);
        for _ in 0..steps {
            a.advance();
            b.advance();
        }
        prop_assert!(a == input_over(&left[steps..]));
        prop_assert!(b == input_over(&right[steps..]));
        prop_assert_eq!(a.read(), left[steps]);
        prop_assert_eq!(b.read(), right[steps]);
        prop_assert_eq!(a.epoch(), steps);
    }

    #[test]
    fn every_copy_goes_stale_after_one_advance(copies in 1usize..16) {
        let buf = [1u8, 2];
        let mut original = input_over(&buf);
        let siblings: Vec<_> = (0..copies).map(|_| original.clone()).collect();
        prop_assert_eq!(original.lineage_size(), copies + 1);

        original.advance();
        prop_assert!(original.is_valid());
        prop_assert!(siblings.iter().all(|sibling| !sibling.is_valid()));

        let probe = original.lineage_probe();
        drop(siblings);
        prop_assert_eq!(probe.sharers(), 1);
        drop(original);
        prop_assert!(!probe.is_alive());
    }
}
