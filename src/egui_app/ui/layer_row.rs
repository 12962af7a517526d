use super::{drop_indicator, style};
use crate::egui_app::controller::LayerMenuAction;
use crate::egui_app::state::ItemInteraction;
use crate::layers::{Layer, LayerId, LayerKind};
use eframe::egui::{
    self, Align, Color32, Label, Layout, Pos2, Rect, RichText, Sense, Ui, UiBuilder, vec2,
};

/// Everything a row needs to draw itself for one frame.
pub(super) struct RowView<'a> {
    pub layer: &'a Layer,
    pub interaction: ItemInteraction,
    /// Post-move flash intensity, when this row was just moved.
    pub flash: Option<f32>,
    pub width: f32,
    pub height: f32,
    pub gap: f32,
}

/// User intents collected while drawing, applied once the list is laid out.
#[derive(Clone, Debug, PartialEq)]
pub(super) enum RowAction {
    Press(LayerId, Pos2),
    Hover(LayerId, bool),
    ToggleLock(LayerId),
    ToggleVisibility(LayerId),
    ToggleFilter(LayerId),
    SetOpacity(LayerId, u8),
    Menu(LayerId, LayerMenuAction),
}

pub(super) struct RowOutcome {
    pub rect: Rect,
    /// Row rect grown into half the gap on each side so targets tile the list.
    pub hit_rect: Rect,
    pub pressed: bool,
    pub hovered: bool,
    pub actions: Vec<RowAction>,
}

pub(super) fn kind_icon(kind: LayerKind) -> &'static str {
    match kind {
        LayerKind::ProjectBoundary => "⬚",
        LayerKind::Data => "☰",
        LayerKind::Drawing => "✏",
    }
}

pub(super) fn render_layer_row(ui: &mut Ui, view: RowView<'_>) -> RowOutcome {
    let (rect, response) =
        ui.allocate_exact_size(vec2(view.width, view.height), Sense::click_and_drag());
    let hovered = ui.rect_contains_pointer(rect);
    let background = match view.interaction {
        ItemInteraction::DraggedOver { .. } => Some(style::row_drag_over_fill()),
        ItemInteraction::Highlighted => Some(style::row_hover_fill()),
        _ => None,
    };
    if let Some(fill) = background {
        ui.painter().rect_filled(rect, 0.0, fill);
    }
    if let Some(intensity) = view.flash {
        ui.painter().rect_filled(rect, 0.0, style::flash_fill(intensity));
    }

    let mut actions = Vec::new();
    let mut content = ui.new_child(
        UiBuilder::new()
            .max_rect(rect.shrink2(vec2(6.0, 2.0)))
            .layout(Layout::right_to_left(Align::Center)),
    );
    if view.interaction == ItemInteraction::Dragging {
        content.multiply_opacity(style::DRAGGING_ROW_OPACITY);
    }
    render_row_controls(&mut content, view.layer, &mut actions);
    content.with_layout(Layout::left_to_right(Align::Center), |ui| {
        render_row_label(ui, view.layer);
    });

    if let ItemInteraction::DraggedOver {
        closest_edge: Some(edge),
    } = view.interaction
    {
        drop_indicator::paint(ui.painter(), rect, edge, view.gap);
    }

    RowOutcome {
        rect,
        hit_rect: rect.expand2(vec2(0.0, view.gap / 2.0)),
        pressed: response.is_pointer_button_down_on(),
        hovered,
        actions,
    }
}

fn render_row_label(ui: &mut Ui, layer: &Layer) {
    let palette = style::palette();
    let text_color = if layer.locked {
        style::locked_text()
    } else if !layer.visible {
        palette.text_muted
    } else {
        palette.text_primary
    };
    ui.add(
        Label::new(RichText::new(kind_icon(layer.kind)).color(palette.accent_ice))
            .selectable(false),
    )
    .on_hover_text(layer.kind.label());
    ui.add(
        Label::new(RichText::new(&layer.label).color(text_color))
            .truncate()
            .selectable(false),
    );
}

fn render_row_controls(ui: &mut Ui, layer: &Layer, actions: &mut Vec<RowAction>) {
    let palette = style::palette();
    ui.menu_button("…", |ui| {
        for action in LayerMenuAction::ALL {
            if ui.button(action.label()).clicked() {
                actions.push(RowAction::Menu(layer.id.clone(), action));
                ui.close();
            }
        }
    });

    let filter_icon = if layer.filtered { "▼" } else { "▽" };
    if icon_button(ui, filter_icon, palette.text_muted, "Filter").clicked() {
        actions.push(RowAction::ToggleFilter(layer.id.clone()));
    }

    let (eye_color, eye_hint) = if layer.visible {
        (palette.text_primary, "Hide layer")
    } else {
        (palette.text_muted, "Show layer")
    };
    if icon_button(ui, "👁", eye_color, eye_hint).clicked() {
        actions.push(RowAction::ToggleVisibility(layer.id.clone()));
    }

    let (lock_icon, lock_color, lock_hint) = if layer.locked {
        ("🔒", palette.accent_copper, "Unlock layer")
    } else {
        ("🔓", palette.text_muted, "Lock layer")
    };
    if icon_button(ui, lock_icon, lock_color, lock_hint).clicked() {
        actions.push(RowAction::ToggleLock(layer.id.clone()));
    }

    let mut opacity = layer.opacity;
    let response = ui
        .add(
            egui::DragValue::new(&mut opacity)
                .range(0..=100)
                .speed(1.0)
                .suffix("%"),
        )
        .on_hover_text("Opacity");
    if response.changed() {
        actions.push(RowAction::SetOpacity(layer.id.clone(), opacity));
    }
}

fn icon_button(ui: &mut Ui, icon: &str, color: Color32, hint: &str) -> egui::Response {
    ui.add(egui::Button::new(RichText::new(icon).color(color)).frame(false))
        .on_hover_text(hint)
}
