use super::drag_drop_controller::{DragDropActions, DragDropController};
use super::*;
use egui::{Pos2, Rect};
use std::path::PathBuf;

impl SidebarController {
    fn drag_drop(&mut self) -> DragDropController<'_> {
        DragDropController::new(self)
    }

    /// Pointer pressed on a row. Locked or unknown layers are ignored.
    pub fn start_layer_drag(&mut self, layer_id: &LayerId, pos: Pos2) {
        self.drag_drop().start_layer_drag(layer_id, pos);
    }

    /// Track the pointer; promotes a pending press to a drag past the start distance.
    pub fn update_drag_pointer(&mut self, pos: Pos2) {
        self.drag_drop().update_drag_pointer(pos);
    }

    /// Pointer is over `target`, whose row occupies `rect`.
    pub fn hover_drop_target(&mut self, target: &LayerId, rect: Rect, pos: Pos2) {
        self.drag_drop().hover_drop_target(target, rect, pos);
    }

    /// Pointer left every drop target.
    pub fn clear_drop_target(&mut self) {
        self.drag_drop().clear_drop_target();
    }

    /// Pointer released: commit the reorder if a target accepted it.
    pub fn finish_layer_drag(&mut self) {
        self.drag_drop().finish_layer_drag();
    }

    pub fn cancel_layer_drag(&mut self) {
        self.drag_drop().cancel_layer_drag();
    }

    /// Files hovered over the window by the OS. An empty list ends the gesture.
    pub fn observe_external_drag(&mut self, paths: Vec<PathBuf>) {
        self.drag_drop().observe_external_drag(paths);
    }

    pub fn accepts_payload(&self, payload: &DragPayload) -> bool {
        DragDropController::can_accept(payload)
    }
}
