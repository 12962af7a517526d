//! Edge-aware list reordering.
//!
//! Given a dragged index, a target index and the edge of the target closest
//! to the pointer, compute where the dragged entry lands and build the new
//! list. The input slice is never mutated.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Side of a drop target the pointer is closest to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Bottom,
}

/// Where an entry lands when the drop target reported no closest edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingEdgePolicy {
    /// Land immediately before the target.
    #[default]
    InsertBefore,
    /// Take over the target's index. Moving down this lands after the
    /// target, moving up it lands before it.
    TargetSlot,
}

/// Caller contract violations for [`reorder_with_edge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReorderError {
    #[error("{role} index {index} is out of bounds for a list of {len}")]
    IndexOutOfBounds {
        role: IndexRole,
        index: usize,
        len: usize,
    },
}

/// Which argument of a reorder call was invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexRole {
    Start,
    Target,
}

impl std::fmt::Display for IndexRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Target => f.write_str("target"),
        }
    }
}

/// Final index of the moved entry once it has been removed and reinserted.
pub fn reorder_destination_index(
    start_index: usize,
    index_of_target: usize,
    closest_edge: Option<Edge>,
    policy: MissingEdgePolicy,
) -> usize {
    if start_index == index_of_target {
        return start_index;
    }
    let goes_after = match (closest_edge, policy) {
        (Some(Edge::Bottom), _) => true,
        (Some(Edge::Top), _) => false,
        (None, MissingEdgePolicy::InsertBefore) => false,
        (None, MissingEdgePolicy::TargetSlot) => return index_of_target,
    };
    let moving_forward = start_index < index_of_target;
    match (moving_forward, goes_after) {
        // Removing the entry shifts the target up by one.
        (true, true) => index_of_target,
        (true, false) => index_of_target - 1,
        (false, true) => index_of_target + 1,
        (false, false) => index_of_target,
    }
}

/// Move `list[start_index]` next to `list[index_of_target]`.
///
/// Dropping an entry on itself yields `Cow::Borrowed` with the input list;
/// every actual move yields `Cow::Owned`, even when the computed position
/// equals the starting one.
pub fn reorder_with_edge<T: Clone>(
    list: &[T],
    start_index: usize,
    index_of_target: usize,
    closest_edge: Option<Edge>,
    policy: MissingEdgePolicy,
) -> Result<Cow<'_, [T]>, ReorderError> {
    let len = list.len();
    if start_index >= len {
        return Err(ReorderError::IndexOutOfBounds {
            role: IndexRole::Start,
            index: start_index,
            len,
        });
    }
    if index_of_target >= len {
        return Err(ReorderError::IndexOutOfBounds {
            role: IndexRole::Target,
            index: index_of_target,
            len,
        });
    }
    if start_index == index_of_target {
        return Ok(Cow::Borrowed(list));
    }
    let finish_index =
        reorder_destination_index(start_index, index_of_target, closest_edge, policy);
    let mut next = list.to_vec();
    let moved = next.remove(start_index);
    next.insert(finish_index, moved);
    Ok(Cow::Owned(next))
}
