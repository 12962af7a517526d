use super::super::*;
use super::common::*;
use crate::app_dirs::ConfigBaseGuard;
use crate::layers::config as settings_io;
use tempfile::tempdir;

#[test]
fn resize_and_tuck_round_trip() {
    let mut controller = controller_with(&["l0"]);
    controller.begin_sidebar_resize(350.0);
    assert_eq!(controller.resize_sidebar(400.0), 400.0);
    controller.end_sidebar_resize();
    controller.toggle_sidebar();
    assert!(controller.ui.sidebar.is_tucked());
    controller.toggle_sidebar();
    assert_eq!(controller.ui.sidebar.width, 350.0);
}

#[test]
fn toggle_brings_back_a_sliver_sized_panel() {
    let mut controller = controller_with(&["l0"]);
    controller.begin_sidebar_resize(350.0);
    controller.resize_sidebar(3.0);
    controller.end_sidebar_resize();
    controller.toggle_sidebar();
    assert!(controller.ui.sidebar.is_tucked());
    controller.toggle_sidebar();
    assert_eq!(controller.ui.sidebar.width, 350.0);
}

#[test]
fn saved_configuration_keeps_resized_width() {
    let temp = tempdir().unwrap();
    let _guard = ConfigBaseGuard::set(temp.path().to_path_buf());
    let mut controller = controller_with(&["l0"]);
    controller.begin_sidebar_resize(0.0);
    controller.resize_sidebar(80.0);
    controller.end_sidebar_resize();
    controller.save_configuration().unwrap();

    let loaded = settings_io::load_or_default().unwrap();
    assert_eq!(loaded.sidebar.width, 430.0);

    let mut reloaded = controller_with(&["l0"]);
    reloaded.load_configuration().unwrap();
    assert_eq!(reloaded.ui.sidebar.width, 430.0);
    assert_eq!(reloaded.ui.sidebar.open_width, 430.0);
}

#[test]
fn saved_configuration_keeps_open_width_when_tucked() {
    let temp = tempdir().unwrap();
    let _guard = ConfigBaseGuard::set(temp.path().to_path_buf());
    let mut controller = controller_with(&["l0"]);
    controller.toggle_sidebar();
    controller.save_configuration().unwrap();
    assert_eq!(settings_io::load_or_default().unwrap().sidebar.width, 350.0);
}

#[test]
fn missing_config_leaves_defaults() {
    let temp = tempdir().unwrap();
    let _guard = ConfigBaseGuard::set(temp.path().to_path_buf());
    let mut controller = controller_with(&["l0"]);
    controller.load_configuration().unwrap();
    assert_eq!(controller.settings(), &AppSettings::default());
}
