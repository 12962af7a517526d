//! Bridges the layer store and persisted settings to the egui sidebar.

mod drag;
mod drag_drop_controller;
mod layer_actions;
mod sidebar_layout;


pub use drag_drop_controller::closest_edge;
pub use layer_actions::LayerMenuAction;

use crate::egui_app::state::*;
use crate::egui_app::ui::style::StatusTone;
use crate::layers::config::{self, AppSettings, ConfigError};
use crate::layers::{Layer, LayerId, LayerStore};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Maintains app state and bridges the layer list to the egui UI.
pub struct SidebarController {
    pub ui: UiState,
    store: LayerStore,
    settings: AppSettings,
}

impl SidebarController {
    pub fn new(settings: AppSettings, layers: Vec<Layer>) -> Self {
        let settings = settings.normalized();
        let mut ui = UiState {
            sidebar: SidebarState::from_settings(&settings.sidebar),
            ..UiState::default()
        };
        ui.rows.sync(&layers);
        Self {
            ui,
            store: LayerStore::new(layers),
            settings,
        }
    }

    /// Load persisted settings and apply them to the UI.
    pub fn load_configuration(&mut self) -> Result<(), ConfigError> {
        let settings = config::load_or_default()?;
        self.apply_settings(settings);
        Ok(())
    }

    pub fn apply_settings(&mut self, settings: AppSettings) {
        let settings = settings.normalized();
        self.ui.sidebar = SidebarState::from_settings(&settings.sidebar);
        self.settings = settings;
    }

    /// Persist the sidebar width; layer order is never saved.
    pub fn save_configuration(&mut self) -> Result<(), ConfigError> {
        self.settings.sidebar.width = if self.ui.sidebar.is_tucked() {
            self.ui.sidebar.open_width
        } else {
            self.ui.sidebar.width
        };
        config::save(&self.settings)?;
        info!(width = self.settings.sidebar.width, "Saved sidebar settings");
        Ok(())
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn layers(&self) -> &[Layer] {
        self.store.layers()
    }

    pub fn layer(&self, id: &LayerId) -> Option<&Layer> {
        self.store.get(id)
    }

    pub fn revision(&self) -> u64 {
        self.store.revision()
    }

    /// Drop an expired post-move flash. Returns true while one is still fading.
    pub fn tick(&mut self, now: Instant) -> bool {
        match &self.ui.flash {
            Some(flash) if flash.is_finished(now) => {
                self.ui.flash = None;
                false
            }
            Some(_) => true,
            None => false,
        }
    }

    pub(crate) fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status.set(text, tone);
    }

    /// Swap in a new layer list and remount rows against it.
    fn commit_layers(&mut self, layers: Vec<Layer>) {
        self.store.replace(layers);
        self.ui.rows.sync(self.store.layers());
    }

    fn edit_layer(&mut self, id: &LayerId, edit: impl FnOnce(&mut Layer)) -> bool {
        if !self.store.update(id, edit) {
            warn!(layer = %id, "Edit requested for unknown layer");
            return false;
        }
        self.ui.rows.sync(self.store.layers());
        true
    }

    fn flash_duration(&self) -> Duration {
        Duration::from_millis(self.settings.flash.duration_ms)
    }
}
