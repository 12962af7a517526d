use super::input::InputSnapshot;
use super::layer_row::{RowAction, RowView, render_layer_row};
use super::{SidebarApp, style};
use eframe::egui::{self, Frame, Margin, RichText, Sense, Ui};

const HANDLE_WIDTH: f32 = 6.0;
const ROW_HEIGHT: f32 = 30.0;

impl SidebarApp {
    pub(super) fn render_top_bar(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::top("top_bar")
            .frame(Frame::new().fill(palette.bg_primary).inner_margin(Margin::same(6)))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let toggle = if self.controller.ui.sidebar.is_tucked() {
                        "▶"
                    } else {
                        "◀"
                    };
                    if ui
                        .button(toggle)
                        .on_hover_text("Show or hide the layer sidebar")
                        .clicked()
                    {
                        self.controller.toggle_sidebar();
                    }
                    ui.label(RichText::new("Layerbar").color(palette.text_primary));
                });
            });
    }

    pub(super) fn render_sidebar(&mut self, ctx: &egui::Context, input: &InputSnapshot) {
        if self.controller.ui.sidebar.is_tucked() {
            if self.controller.ui.drag.source_layer().is_some() {
                self.controller.clear_drop_target();
            }
            return;
        }
        let palette = style::palette();
        let width = self.controller.ui.sidebar.width;
        let panel = egui::SidePanel::left("layer_sidebar")
            .resizable(false)
            .exact_width(width)
            .frame(
                Frame::new()
                    .fill(palette.bg_secondary)
                    .stroke(style::inner_border())
                    .inner_margin(Margin::same(8)),
            )
            .show(ctx, |ui| {
                self.render_sidebar_header(ui);
                ui.separator();
                self.render_layer_list(ui, input);
            });
        self.render_resize_handle(ctx, panel.response.rect);
    }

    fn render_sidebar_header(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.heading("Layers");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("+ Data Layer").clicked() {
                    self.controller.add_data_layer();
                }
            });
        });
    }

    fn render_layer_list(&mut self, ui: &mut Ui, input: &InputSnapshot) {
        let gap = self.controller.settings().drag.drop_indicator_gap;
        let layers = self.controller.layers().to_vec();
        let drag_active = self.controller.ui.drag.is_active();
        let now = std::time::Instant::now();
        let mut actions = Vec::new();
        let mut hovered_target = None;
        egui::ScrollArea::vertical()
            .id_salt("layer_list_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.spacing_mut().item_spacing.y = gap;
                let row_width = ui.available_width();
                let visible = ui.clip_rect();
                for layer in &layers {
                    let view = RowView {
                        layer,
                        interaction: self.controller.ui.rows.state_of(&layer.id),
                        flash: self
                            .controller
                            .ui
                            .flash
                            .as_ref()
                            .filter(|flash| flash.layer_id == layer.id)
                            .and_then(|flash| flash.intensity(now)),
                        width: row_width,
                        height: ROW_HEIGHT,
                        gap,
                    };
                    let outcome = ui.push_id(layer.id.as_str(), |ui| render_layer_row(ui, view));
                    let outcome = outcome.inner;
                    if drag_active
                        && let Some(pos) = input.pointer
                        && visible.contains(pos)
                        && outcome.hit_rect.contains(pos)
                    {
                        hovered_target = Some((layer.id.clone(), outcome.rect, pos));
                    }
                    if outcome.pressed
                        && input.primary_pressed
                        && let Some(origin) = input.press_origin.or(input.pointer)
                    {
                        actions.push(RowAction::Press(layer.id.clone(), origin));
                    }
                    actions.push(RowAction::Hover(layer.id.clone(), outcome.hovered));
                    actions.extend(outcome.actions);
                }
            });
        for action in actions {
            self.apply_row_action(action);
        }
        if drag_active {
            match hovered_target {
                Some((target, rect, pos)) => self.controller.hover_drop_target(&target, rect, pos),
                None => self.controller.clear_drop_target(),
            }
        }
    }

    fn apply_row_action(&mut self, action: RowAction) {
        match action {
            RowAction::Press(id, origin) => self.controller.start_layer_drag(&id, origin),
            RowAction::Hover(id, hovered) => {
                self.controller.set_row_hovered(&id, hovered);
            }
            RowAction::ToggleLock(id) => {
                self.controller.toggle_lock(&id);
            }
            RowAction::ToggleVisibility(id) => {
                self.controller.toggle_visibility(&id);
            }
            RowAction::ToggleFilter(id) => {
                self.controller.toggle_filter(&id);
            }
            RowAction::SetOpacity(id, opacity) => {
                self.controller.set_opacity(&id, opacity);
            }
            RowAction::Menu(id, menu_action) => self.controller.run_menu_action(&id, menu_action),
        }
    }

    fn render_resize_handle(&mut self, ctx: &egui::Context, panel_rect: egui::Rect) {
        let handle_rect = egui::Rect::from_min_max(
            egui::pos2(panel_rect.right() - HANDLE_WIDTH / 2.0, panel_rect.top()),
            egui::pos2(panel_rect.right() + HANDLE_WIDTH / 2.0, panel_rect.bottom()),
        );
        egui::Area::new(egui::Id::new("sidebar_resize_handle"))
            .order(egui::Order::Foreground)
            .fixed_pos(handle_rect.min)
            .show(ctx, |ui| {
                let (rect, response) = ui.allocate_exact_size(handle_rect.size(), Sense::drag());
                let response = response.on_hover_cursor(egui::CursorIcon::ResizeHorizontal);
                if response.hovered() || response.dragged() {
                    ui.painter()
                        .rect_filled(rect, 0.0, style::palette().panel_outline);
                }
                let pointer_x = response.interact_pointer_pos().map(|pos| pos.x);
                if response.drag_started()
                    && let Some(x) = pointer_x
                {
                    self.controller.begin_sidebar_resize(x);
                } else if response.dragged()
                    && let Some(x) = pointer_x
                {
                    self.controller.resize_sidebar(x);
                }
                if response.drag_stopped() {
                    self.controller.end_sidebar_resize();
                }
            });
    }
}
