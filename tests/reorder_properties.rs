//! Property-based invariants for edge-aware reordering.
//!
//! 1. Dropping an entry onto itself returns the input unchanged and borrowed.
//! 2. Every successful reorder is a permutation of the input.
//! 3. Only the moved entry changes relative position; everything else keeps order.
//! 4. The moved entry ends up on the requested side of its target.
//! 5. Repeating a call from the same starting list gives the same result.
//! 6. Out-of-range indices are rejected, never panic.

use std::borrow::Cow;

use layerbar::layers::{Edge, MissingEdgePolicy, reorder_destination_index, reorder_with_edge};
use proptest::prelude::*;

fn edge_strategy() -> impl Strategy<Value = Option<Edge>> {
    prop_oneof![Just(None), Just(Some(Edge::Top)), Just(Some(Edge::Bottom))]
}

fn policy_strategy() -> impl Strategy<Value = MissingEdgePolicy> {
    prop_oneof![
        Just(MissingEdgePolicy::InsertBefore),
        Just(MissingEdgePolicy::TargetSlot)
    ]
}

/// A list of distinct entries plus valid start and target indices.
fn list_and_indices() -> impl Strategy<Value = (Vec<u32>, usize, usize)> {
    (1usize..40).prop_flat_map(|len| {
        let list: Vec<u32> = (0..len as u32).collect();
        (Just(list), 0..len, 0..len)
    })
}

proptest! {
    #[test]
    fn self_drop_is_identity(
        (list, start, _) in list_and_indices(),
        edge in edge_strategy(),
        policy in policy_strategy(),
    ) {
        let result = reorder_with_edge(&list, start, start, edge, policy).unwrap();
        prop_assert!(matches!(result, Cow::Borrowed(_)));
        prop_assert_eq!(&*result, list.as_slice());
    }

    #[test]
    fn reorder_is_a_permutation(
        (list, start, target) in list_and_indices(),
        edge in edge_strategy(),
        policy in policy_strategy(),
    ) {
        let result = reorder_with_edge(&list, start, target, edge, policy).unwrap();
        let mut sorted = result.to_vec();
        sorted.sort_unstable();
        prop_assert_eq!(sorted, list.clone());
    }

    #[test]
    fn other_entries_keep_their_relative_order(
        (list, start, target) in list_and_indices(),
        edge in edge_strategy(),
        policy in policy_strategy(),
    ) {
        let moved = list[start];
        let result = reorder_with_edge(&list, start, target, edge, policy).unwrap();
        let before: Vec<u32> = list.iter().copied().filter(|value| *value != moved).collect();
        let after: Vec<u32> = result.iter().copied().filter(|value| *value != moved).collect();
        prop_assert_eq!(before, after);
        let finish = reorder_destination_index(start, target, edge, policy);
        prop_assert_eq!(result[finish], moved);
    }

    #[test]
    fn moved_entry_lands_on_the_requested_edge(
        (list, start, target) in list_and_indices(),
        edge in prop_oneof![Just(Edge::Top), Just(Edge::Bottom)],
    ) {
        prop_assume!(start != target);
        let result = reorder_with_edge(
            &list,
            start,
            target,
            Some(edge),
            MissingEdgePolicy::InsertBefore,
        )
        .unwrap();
        let moved_at = result.iter().position(|value| *value == list[start]).unwrap();
        let target_at = result.iter().position(|value| *value == list[target]).unwrap();
        match edge {
            Edge::Top => prop_assert_eq!(moved_at + 1, target_at),
            Edge::Bottom => prop_assert_eq!(moved_at, target_at + 1),
        }
    }

    #[test]
    fn reorder_is_deterministic(
        (list, start, target) in list_and_indices(),
        edge in edge_strategy(),
        policy in policy_strategy(),
    ) {
        let first = reorder_with_edge(&list, start, target, edge, policy).unwrap();
        let second = reorder_with_edge(&list, start, target, edge, policy).unwrap();
        prop_assert_eq!(&*first, &*second);
    }

    #[test]
    fn out_of_range_indices_are_errors(
        (list, start, target) in list_and_indices(),
        overshoot in 0usize..10,
        edge in edge_strategy(),
    ) {
        let len = list.len();
        let policy = MissingEdgePolicy::InsertBefore;
        prop_assert!(reorder_with_edge(&list, len + overshoot, target, edge, policy).is_err());
        prop_assert!(reorder_with_edge(&list, start, len + overshoot, edge, policy).is_err());
    }
}

#[test]
fn empty_list_rejects_every_index() {
    let empty: [u32; 0] = [];
    assert!(reorder_with_edge(&empty, 0, 0, None, MissingEdgePolicy::InsertBefore).is_err());
}
