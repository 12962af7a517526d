//! egui front end: state, controller and renderer for the layer sidebar.

pub mod controller;
pub mod state;
pub mod ui;
