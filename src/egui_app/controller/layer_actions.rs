use super::*;
use crate::layers::LayerKind;

/// Entries of a row's overflow menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayerMenuAction {
    ShowLegend,
    Manage,
    ZoomToBounds,
    Delete,
}

impl LayerMenuAction {
    pub const ALL: [LayerMenuAction; 4] = [
        LayerMenuAction::ShowLegend,
        LayerMenuAction::Manage,
        LayerMenuAction::ZoomToBounds,
        LayerMenuAction::Delete,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::ShowLegend => "Show legend",
            Self::Manage => "Manage",
            Self::ZoomToBounds => "Zoom to bounds",
            Self::Delete => "Delete",
        }
    }
}

impl SidebarController {
    pub fn toggle_lock(&mut self, id: &LayerId) -> bool {
        self.edit_layer(id, |layer| layer.locked = !layer.locked)
    }

    pub fn toggle_visibility(&mut self, id: &LayerId) -> bool {
        self.edit_layer(id, |layer| layer.visible = !layer.visible)
    }

    pub fn toggle_filter(&mut self, id: &LayerId) -> bool {
        self.edit_layer(id, |layer| layer.filtered = !layer.filtered)
    }

    /// Set opacity in percent; values above 100 are clamped.
    pub fn set_opacity(&mut self, id: &LayerId, opacity: u8) -> bool {
        let opacity = opacity.min(100);
        if self.store.get(id).is_some_and(|layer| layer.opacity == opacity) {
            return false;
        }
        self.edit_layer(id, |layer| layer.opacity = opacity)
    }

    /// Append an empty data layer at the bottom of the list.
    pub fn add_data_layer(&mut self) -> LayerId {
        let id = LayerId::generate();
        let count = self
            .layers()
            .iter()
            .filter(|layer| layer.kind == LayerKind::Data)
            .count();
        let mut next = self.layers().to_vec();
        next.push(Layer::new(
            id.clone(),
            format!("New Data Layer {}", count + 1),
            LayerKind::Data,
        ));
        self.commit_layers(next);
        info!(layer = %id, "Added data layer");
        self.set_status("Added data layer", StatusTone::Info);
        id
    }

    pub fn delete_layer(&mut self, id: &LayerId) -> bool {
        let Some(index) = self.store.index_of(id) else {
            warn!(layer = %id, "Delete requested for unknown layer");
            return false;
        };
        if self.ui.drag.source_layer() == Some(id) {
            self.cancel_layer_drag();
        }
        let mut next = self.layers().to_vec();
        let removed = next.remove(index);
        self.commit_layers(next);
        if self
            .ui
            .flash
            .as_ref()
            .is_some_and(|flash| &flash.layer_id == id)
        {
            self.ui.flash = None;
        }
        info!(layer = %id, "Deleted layer");
        self.set_status(format!("Deleted {}", removed.label), StatusTone::Info);
        true
    }

    pub fn run_menu_action(&mut self, id: &LayerId, action: LayerMenuAction) {
        let Some(label) = self.layer(id).map(|layer| layer.label.clone()) else {
            return;
        };
        match action {
            LayerMenuAction::Delete => {
                self.delete_layer(id);
            }
            LayerMenuAction::ShowLegend | LayerMenuAction::Manage | LayerMenuAction::ZoomToBounds => {
                self.set_status(
                    format!("{}: {label} (not available in this build)", action.label()),
                    StatusTone::Warning,
                );
            }
        }
    }

    /// Track hover highlighting on a row outside of drag gestures.
    pub fn set_row_hovered(&mut self, id: &LayerId, hovered: bool) -> bool {
        if self.ui.drag.is_active() {
            return false;
        }
        if hovered {
            self.ui.rows.dispatch(id, |row| row.pointer_enter())
        } else {
            self.ui.rows.dispatch(id, |row| row.pointer_leave())
        }
    }
}
