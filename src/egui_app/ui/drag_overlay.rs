use super::layer_row::kind_icon;
use super::{SidebarApp, style};
use eframe::egui::{self, Align2, Area, Frame, Margin, Order, RichText, Stroke, Vec2};

impl SidebarApp {
    /// Floating copy of the lifted row, following the pointer.
    pub(super) fn render_drag_overlay(&mut self, ctx: &egui::Context) {
        let drag = &self.controller.ui.drag;
        if !drag.is_active() {
            return;
        }
        let (Some(pos), Some(preview)) = (drag.position, drag.preview.as_ref()) else {
            return;
        };
        let [dx, dy] = self.controller.settings().drag.preview_offset;
        let palette = style::palette();
        Area::new(preview.area_id)
            .order(Order::Tooltip)
            .pivot(Align2::LEFT_TOP)
            .current_pos(pos + Vec2::new(dx, dy))
            .interactable(false)
            .show(ctx, |ui| {
                Frame::new()
                    .fill(palette.bg_tertiary)
                    .stroke(Stroke::new(1.0, palette.accent_ice))
                    .corner_radius(4.0)
                    .inner_margin(Margin::same(6))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(kind_icon(preview.kind)).color(palette.accent_ice));
                            ui.label(RichText::new(&preview.label).color(palette.text_primary));
                        });
                    });
            });
    }
}
