//! Per-row interaction state.
//!
//! Each mounted row owns one [`ItemStateMachine`]. Transition methods return
//! `true` only when the state actually changed so the renderer can skip
//! redundant repaints. Refused transitions (locked rows, wrong state) are
//! silent no-ops.

use crate::layers::{Edge, Layer, LayerId, LayerKind};
use egui::Id;
use std::collections::HashMap;

/// Where the floating preview of a lifted row is rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewContainer {
    /// Id of the egui `Area` hosting the preview.
    pub area_id: Id,
    pub label: String,
    pub kind: LayerKind,
}

impl PreviewContainer {
    pub fn for_layer(layer: &Layer) -> Self {
        Self {
            area_id: Id::new(("layer_drag_preview", layer.id.as_str())),
            label: layer.label.clone(),
            kind: layer.kind,
        }
    }
}

/// Visual state of a single row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ItemInteraction {
    #[default]
    Idle,
    /// Gesture started on this row; its preview is being rendered.
    Previewing { container: PreviewContainer },
    /// This row is the one being dragged.
    Dragging,
    /// Another row is hovering over this one.
    DraggedOver { closest_edge: Option<Edge> },
    /// Plain hover feedback, unrelated to dragging.
    Highlighted,
}

impl ItemInteraction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Previewing { .. } => "preview",
            Self::Dragging => "is-dragging",
            Self::DraggedOver { .. } => "is-dragging-over",
            Self::Highlighted => "highlighted",
        }
    }

    fn is_resting(&self) -> bool {
        matches!(self, Self::Idle | Self::Highlighted)
    }
}

#[derive(Clone, Debug, Default)]
pub struct ItemStateMachine {
    state: ItemInteraction,
    locked: bool,
}

impl ItemStateMachine {
    pub fn new(locked: bool) -> Self {
        Self {
            state: ItemInteraction::Idle,
            locked,
        }
    }

    pub fn state(&self) -> &ItemInteraction {
        &self.state
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Mirror the layer's lock flag. A row locked while hovered stops accepting.
    pub fn set_locked(&mut self, locked: bool) -> bool {
        self.locked = locked;
        if locked && matches!(self.state, ItemInteraction::DraggedOver { .. }) {
            return self.set(ItemInteraction::Idle);
        }
        false
    }

    pub fn begin_preview(&mut self, container: PreviewContainer) -> bool {
        if self.locked || !self.state.is_resting() {
            return false;
        }
        self.set(ItemInteraction::Previewing { container })
    }

    pub fn start_dragging(&mut self) -> bool {
        if !matches!(self.state, ItemInteraction::Previewing { .. }) {
            return false;
        }
        self.set(ItemInteraction::Dragging)
    }

    pub fn drag_enter(&mut self, closest_edge: Option<Edge>) -> bool {
        if self.locked {
            return false;
        }
        if matches!(self.state, ItemInteraction::DraggedOver { .. }) {
            return self.drag_over(closest_edge);
        }
        if self.state.is_resting() {
            return self.set(ItemInteraction::DraggedOver { closest_edge });
        }
        false
    }

    /// Update the edge while hovered; unchanged edges are coalesced.
    pub fn drag_over(&mut self, closest_edge: Option<Edge>) -> bool {
        if let ItemInteraction::DraggedOver {
            closest_edge: current,
        } = self.state
            && current != closest_edge
        {
            return self.set(ItemInteraction::DraggedOver { closest_edge });
        }
        false
    }

    pub fn drag_leave(&mut self) -> bool {
        if matches!(self.state, ItemInteraction::DraggedOver { .. }) {
            return self.set(ItemInteraction::Idle);
        }
        false
    }

    /// Gesture ended with a drop; every state returns to idle.
    pub fn finish_drop(&mut self) -> bool {
        self.set(ItemInteraction::Idle)
    }

    /// Gesture aborted; every state returns to idle.
    pub fn cancel(&mut self) -> bool {
        self.set(ItemInteraction::Idle)
    }

    pub fn pointer_enter(&mut self) -> bool {
        if self.state == ItemInteraction::Idle {
            return self.set(ItemInteraction::Highlighted);
        }
        false
    }

    pub fn pointer_leave(&mut self) -> bool {
        if self.state == ItemInteraction::Highlighted {
            return self.set(ItemInteraction::Idle);
        }
        false
    }

    fn set(&mut self, next: ItemInteraction) -> bool {
        if self.state == next {
            return false;
        }
        self.state = next;
        true
    }
}

/// State machines of all mounted rows, keyed by layer id.
#[derive(Clone, Debug, Default)]
pub struct RowStates {
    rows: HashMap<LayerId, ItemStateMachine>,
}

impl RowStates {
    /// Mount rows for new layers, unmount rows whose layer is gone and
    /// refresh lock flags.
    pub fn sync(&mut self, layers: &[Layer]) {
        self.rows
            .retain(|id, _| layers.iter().any(|layer| &layer.id == id));
        for layer in layers {
            self.rows
                .entry(layer.id.clone())
                .or_insert_with(|| ItemStateMachine::new(layer.locked))
                .set_locked(layer.locked);
        }
    }

    pub fn get(&self, id: &LayerId) -> Option<&ItemStateMachine> {
        self.rows.get(id)
    }

    pub fn state_of(&self, id: &LayerId) -> ItemInteraction {
        self.rows
            .get(id)
            .map(|row| row.state().clone())
            .unwrap_or_default()
    }

    /// Run a transition on one row. Unknown ids are ignored.
    pub fn dispatch(
        &mut self,
        id: &LayerId,
        transition: impl FnOnce(&mut ItemStateMachine) -> bool,
    ) -> bool {
        self.rows.get_mut(id).is_some_and(transition)
    }

    /// Return every row to idle, hover highlights included.
    pub fn end_gesture(&mut self, cancelled: bool) -> usize {
        self.rows
            .values_mut()
            .map(|row| if cancelled { row.cancel() } else { row.finish_drop() })
            .filter(|changed| *changed)
            .count()
    }

    pub fn dragging_count(&self) -> usize {
        self.rows
            .values()
            .filter(|row| *row.state() == ItemInteraction::Dragging)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container() -> PreviewContainer {
        PreviewContainer::for_layer(&Layer::new(
            LayerId::from_string("layer-1"),
            "Survey",
            LayerKind::Data,
        ))
    }

    fn every_state() -> Vec<ItemInteraction> {
        vec![
            ItemInteraction::Idle,
            ItemInteraction::Previewing {
                container: container(),
            },
            ItemInteraction::Dragging,
            ItemInteraction::DraggedOver { closest_edge: None },
            ItemInteraction::DraggedOver {
                closest_edge: Some(Edge::Top),
            },
            ItemInteraction::Highlighted,
        ]
    }

    #[test]
    fn preview_then_drag_then_drop() {
        let mut row = ItemStateMachine::new(false);
        assert!(row.begin_preview(container()));
        assert_eq!(row.state().name(), "preview");
        assert!(row.start_dragging());
        assert_eq!(*row.state(), ItemInteraction::Dragging);
        assert!(row.finish_drop());
        assert_eq!(*row.state(), ItemInteraction::Idle);
    }

    #[test]
    fn dragging_requires_a_preview_first() {
        let mut row = ItemStateMachine::new(false);
        assert!(!row.start_dragging());
        assert_eq!(*row.state(), ItemInteraction::Idle);
    }

    #[test]
    fn locked_rows_refuse_drag_and_drop() {
        let mut row = ItemStateMachine::new(true);
        assert!(!row.begin_preview(container()));
        assert!(!row.start_dragging());
        assert!(!row.drag_enter(Some(Edge::Bottom)));
        assert_eq!(*row.state(), ItemInteraction::Idle);
        assert!(row.pointer_enter());
        assert!(!row.begin_preview(container()));
        assert_eq!(*row.state(), ItemInteraction::Highlighted);
    }

    #[test]
    fn repeated_edge_updates_are_coalesced() {
        let mut row = ItemStateMachine::new(false);
        assert!(row.drag_enter(Some(Edge::Top)));
        assert!(!row.drag_over(Some(Edge::Top)));
        assert!(!row.drag_enter(Some(Edge::Top)));
        assert!(row.drag_over(Some(Edge::Bottom)));
        assert_eq!(
            *row.state(),
            ItemInteraction::DraggedOver {
                closest_edge: Some(Edge::Bottom)
            }
        );
        assert!(row.drag_leave());
        assert_eq!(*row.state(), ItemInteraction::Idle);
    }

    #[test]
    fn hover_never_overrides_drag_states() {
        let mut row = ItemStateMachine::new(false);
        row.drag_enter(None);
        assert!(!row.pointer_enter());
        assert!(!row.pointer_leave());
        assert_eq!(*row.state(), ItemInteraction::DraggedOver { closest_edge: None });
    }

    #[test]
    fn highlighted_row_can_be_dragged_over() {
        let mut row = ItemStateMachine::new(false);
        row.pointer_enter();
        assert!(row.drag_enter(Some(Edge::Bottom)));
    }

    #[test]
    fn drop_and_cancel_close_every_state() {
        for state in every_state() {
            for cancelled in [false, true] {
                let mut row = ItemStateMachine {
                    state: state.clone(),
                    locked: false,
                };
                if cancelled {
                    row.cancel();
                } else {
                    row.finish_drop();
                }
                assert_eq!(*row.state(), ItemInteraction::Idle, "from {state:?}");
            }
        }
    }

    #[test]
    fn locking_a_hovered_row_releases_it() {
        let mut row = ItemStateMachine::new(false);
        row.drag_enter(Some(Edge::Top));
        assert!(row.set_locked(true));
        assert_eq!(*row.state(), ItemInteraction::Idle);
    }

    #[test]
    fn sync_mounts_and_unmounts_rows() {
        let a = Layer::new(LayerId::from_string("a"), "A", LayerKind::Data);
        let mut b = Layer::new(LayerId::from_string("b"), "B", LayerKind::Drawing);
        b.locked = true;
        let mut rows = RowStates::default();
        rows.sync(&[a.clone(), b.clone()]);
        assert!(rows.get(&a.id).is_some());
        assert!(rows.get(&b.id).unwrap().is_locked());
        rows.sync(&[b.clone()]);
        assert!(rows.get(&b.id).is_some());
        assert!(rows.get(&a.id).is_none());
        assert!(!rows.dispatch(&a.id, |row| row.pointer_enter()));
    }

    #[test]
    fn ending_a_gesture_clears_hover_highlights() {
        let a = Layer::new(LayerId::from_string("a"), "A", LayerKind::Data);
        let b = Layer::new(LayerId::from_string("b"), "B", LayerKind::Data);
        let mut rows = RowStates::default();
        rows.sync(&[a.clone(), b.clone()]);
        rows.dispatch(&a.id, |row| row.pointer_enter());
        rows.dispatch(&b.id, |row| row.drag_enter(Some(Edge::Bottom)));
        assert_eq!(rows.end_gesture(true), 2);
        assert_eq!(rows.state_of(&a.id), ItemInteraction::Idle);
        assert_eq!(rows.state_of(&b.id), ItemInteraction::Idle);
    }
}
