//! egui renderer for the layer sidebar.

mod drag_overlay;
mod drop_indicator;
mod input;
mod layer_row;
mod sidebar_panel;
mod status_bar;
pub mod style;

use crate::egui_app::controller::SidebarController;
use crate::layers::config::AppSettings;
use crate::layers::{Layer, seed_layers};
use eframe::egui;
use input::InputSnapshot;
use std::time::Instant;
use tracing::warn;

/// Smallest window that still fits a usable sidebar.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(480.0, 360.0);

/// Renders the sidebar using the shared controller state.
pub struct SidebarApp {
    controller: SidebarController,
    visuals_set: bool,
}

impl SidebarApp {
    /// Create the app with the demo project, loading persisted settings.
    pub fn new() -> Result<Self, String> {
        Self::with_layers(seed_layers())
    }

    pub fn with_layers(layers: Vec<Layer>) -> Result<Self, String> {
        let mut controller = SidebarController::new(AppSettings::default(), layers);
        controller
            .load_configuration()
            .map_err(|err| format!("Failed to load config: {err}"))?;
        Ok(Self {
            controller,
            visuals_set: false,
        })
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }
}

impl eframe::App for SidebarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        let input = InputSnapshot::capture(ctx);
        // Drops commit before the list is laid out so every row renders the new order.
        self.handle_drag_input(&input);
        self.render_status(ctx);
        self.render_top_bar(ctx);
        self.render_sidebar(ctx, &input);
        egui::CentralPanel::default().show(ctx, |_ui| {});
        self.render_drag_overlay(ctx);
        if self.controller.tick(Instant::now()) || self.controller.ui.drag.payload.is_some() {
            ctx.request_repaint();
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Err(err) = self.controller.save_configuration() {
            warn!("Failed to save settings: {err}");
        }
    }
}
