//! Property-based tests for lazy traversal.

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use proptest::prelude::*;

    use crate::{Bounded, FnRule, Link, Node, NodeHandle, Sequence};

    // Successor adds one, predecessor subtracts one: value tracks index.
    fn counter(calls: &Cell<usize>) -> impl crate::Rule<i64> + '_ {
        FnRule::new(
            move |node: &Node<i64>| {
                calls.set(calls.get() + 1);
                Some(node.value() - 1)
            },
            move |node: &Node<i64>| {
                calls.set(calls.get() + 1);
                Some(node.value() + 1)
            },
        )
    }

    fn step_by_step(
        seq: &mut Sequence<i64, impl crate::Rule<i64>>,
        from: NodeHandle,
        offset: i64,
    ) -> NodeHandle {
        let mut current = from;
        for _ in 0..offset.unsigned_abs() {
            current = if offset < 0 {
                seq.predecessor(current).unwrap()
            } else {
                seq.successor(current).unwrap()
            };
        }
        current
    }

    proptest! {
        #[test]
        fn index_matches_step_count(k in 0usize..64) {
            let calls = Cell::new(0);
            let mut seq = Sequence::new(counter(&calls));
            let origin = seq.head(0);

            let mut current = origin;
            for step in 0..k {
                prop_assert_eq!(seq.index(current), step as i64);
                current = seq.successor(current).unwrap();
            }
            prop_assert_eq!(seq.index(current), k as i64);
        }

        #[test]
        fn indexed_access_matches_stepping(offset in -40i64..40) {
            let calls = Cell::new(0);
            let mut seq = Sequence::new(counter(&calls));
            let origin = seq.origin(0);

            let by_steps = step_by_step(&mut seq, origin, offset);
            let by_index = seq.at(origin, offset).unwrap();
            prop_assert_eq!(by_steps, by_index);
            prop_assert_eq!(*seq.value(by_index), offset);
            prop_assert_eq!(seq.index(by_index), offset);
        }

        #[test]
        fn each_slot_is_computed_once(offsets in proptest::collection::vec(-20i64..20, 1..10)) {
            let calls = Cell::new(0);
            let mut seq = Sequence::new(counter(&calls));
            let origin = seq.origin(0);

            for &offset in &offsets {
                seq.at(origin, offset).unwrap();
            }
            let lowest = offsets.iter().copied().min().unwrap_or(0).min(0);
            let highest = offsets.iter().copied().max().unwrap_or(0).max(0);
            let expected = usize::try_from(highest - lowest).unwrap();

            prop_assert_eq!(calls.get(), expected);
            prop_assert_eq!(seq.len(), expected + 1);
        }

        #[test]
        fn resolved_links_agree_with_indices(len in 1usize..32) {
            let successor = FnRule::forward(|n: &Node<i64>| Some(n.value() + 1));
            let mut seq = Sequence::new(Bounded::finite(successor, len));
            let origin = seq.head(0);
            prop_assert!(seq.at(origin, len as i64).is_err());

            for (handle, node) in seq.iter() {
                if let Link::Resolved(next) = node.successor_link() {
                    prop_assert_eq!(seq.index(next), node.index() + 1);
                    prop_assert_eq!(seq[next].predecessor_link(), Link::Resolved(handle));
                }
            }
            prop_assert_eq!(seq.len(), len);
        }
    }
}
