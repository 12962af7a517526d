use super::super::*;
use crate::layers::{LayerKind, seed_layers};
use egui::{Pos2, Rect, pos2, vec2};

pub(super) const ROW_HEIGHT: f32 = 32.0;

pub(super) fn layer(id: &str, locked: bool) -> Layer {
    let mut layer = Layer::new(LayerId::from_string(id), id.to_uppercase(), LayerKind::Data);
    layer.locked = locked;
    layer
}

pub(super) fn controller_with(ids: &[&str]) -> SidebarController {
    let layers = ids.iter().map(|id| layer(id, false)).collect();
    SidebarController::new(AppSettings::default(), layers)
}

pub(super) fn seeded_controller() -> SidebarController {
    SidebarController::new(AppSettings::default(), seed_layers())
}

pub(super) fn id(value: &str) -> LayerId {
    LayerId::from_string(value)
}

pub(super) fn order(controller: &SidebarController) -> Vec<String> {
    controller
        .layers()
        .iter()
        .map(|layer| layer.id.as_str().to_string())
        .collect()
}

/// Rect of the row at `index` in a list starting at y = 0.
pub(super) fn row_rect(index: usize) -> Rect {
    Rect::from_min_size(pos2(0.0, index as f32 * ROW_HEIGHT), vec2(300.0, ROW_HEIGHT))
}

pub(super) fn upper_half(index: usize) -> Pos2 {
    row_rect(index).center() - vec2(0.0, ROW_HEIGHT / 4.0)
}

pub(super) fn lower_half(index: usize) -> Pos2 {
    row_rect(index).center() + vec2(0.0, ROW_HEIGHT / 4.0)
}

/// Press on `source` and move far enough to lift it.
pub(super) fn lift(controller: &mut SidebarController, source: &str, index: usize) {
    let origin = row_rect(index).center();
    controller.start_layer_drag(&id(source), origin);
    controller.update_drag_pointer(origin + vec2(0.0, 20.0));
}

/// Drag `source` (at `source_index`) over `target` at the given pointer and release.
pub(super) fn drag_and_drop(
    controller: &mut SidebarController,
    source: &str,
    source_index: usize,
    target: &str,
    target_index: usize,
    pointer: Pos2,
) {
    lift(controller, source, source_index);
    controller.update_drag_pointer(pointer);
    controller.hover_drop_target(&id(target), row_rect(target_index), pointer);
    controller.finish_layer_drag();
}
