//! Library exports for reuse in benchmarks and tests.
/// Application directory resolution.
pub mod app_dirs;
/// Shared egui UI modules.
pub mod egui_app;
/// Layer model, reordering and settings.
pub mod layers;
/// File and console logging setup.
pub mod logging;
