use crate::layers::Edge;
use egui::{Pos2, Rect};

/// Edge of `rect` nearest to `pointer`, measured vertically.
///
/// Ties go to the top edge. A degenerate rect has no meaningful edge.
pub fn closest_edge(rect: Rect, pointer: Pos2) -> Option<Edge> {
    if !rect.is_finite() || rect.height() <= 0.0 || !pointer.y.is_finite() {
        return None;
    }
    let to_top = (pointer.y - rect.top()).abs();
    let to_bottom = (rect.bottom() - pointer.y).abs();
    if to_top <= to_bottom {
        Some(Edge::Top)
    } else {
        Some(Edge::Bottom)
    }
}
