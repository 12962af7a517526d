use super::style;
use crate::layers::Edge;
use eframe::egui::{Painter, Rect, pos2};

const TERMINAL_RADIUS: f32 = 4.0;

/// Vertical position of the indicator line, centred in the gap on `edge`.
pub(super) fn indicator_y(rect: Rect, edge: Edge, gap: f32) -> f32 {
    match edge {
        Edge::Top => rect.top() - gap / 2.0,
        Edge::Bottom => rect.bottom() + gap / 2.0,
    }
}

pub(super) fn paint(painter: &Painter, rect: Rect, edge: Edge, gap: f32) {
    let stroke = style::drop_indicator_stroke();
    let y = indicator_y(rect, edge, gap);
    let start = pos2(rect.left() + TERMINAL_RADIUS, y);
    painter.circle_stroke(start, TERMINAL_RADIUS, stroke);
    painter.line_segment([pos2(start.x + TERMINAL_RADIUS, y), pos2(rect.right(), y)], stroke);
}
