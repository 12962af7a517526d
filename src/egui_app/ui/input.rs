use super::SidebarApp;
use eframe::egui;
use std::path::PathBuf;

/// Pointer and keyboard facts read once at the start of a frame.
#[derive(Clone, Debug, Default)]
pub(super) struct InputSnapshot {
    pub escape: bool,
    pub pointer: Option<egui::Pos2>,
    pub primary_pressed: bool,
    pub primary_down: bool,
    pub any_released: bool,
    pub press_origin: Option<egui::Pos2>,
    /// The pointer left the window.
    pub pointer_gone: bool,
    pub window_focused: bool,
    pub hovered_files: Vec<PathBuf>,
}

impl InputSnapshot {
    pub(super) fn capture(ctx: &egui::Context) -> Self {
        ctx.input(|i| Self {
            escape: i.key_pressed(egui::Key::Escape),
            pointer: i.pointer.latest_pos(),
            primary_pressed: i.pointer.primary_pressed(),
            primary_down: i.pointer.primary_down(),
            any_released: i.pointer.any_released(),
            press_origin: i.pointer.press_origin(),
            pointer_gone: i
                .events
                .iter()
                .any(|event| matches!(event, egui::Event::PointerGone)),
            window_focused: i.focused,
            hovered_files: i
                .raw
                .hovered_files
                .iter()
                .filter_map(|file| file.path.clone())
                .collect(),
        })
    }
}

impl SidebarApp {
    pub(super) fn handle_drag_input(&mut self, input: &InputSnapshot) {
        self.controller
            .observe_external_drag(input.hovered_files.clone());
        if self.controller.ui.drag.source_layer().is_none() {
            return;
        }
        if input.escape || input.pointer_gone || !input.window_focused {
            self.controller.cancel_layer_drag();
            return;
        }
        if let Some(pos) = input.pointer {
            self.controller.update_drag_pointer(pos);
        }
        if input.any_released || !input.primary_down {
            self.controller.finish_layer_drag();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::egui_app::controller::SidebarController;
    use crate::egui_app::state::ItemInteraction;
    use crate::layers::config::AppSettings;
    use crate::layers::{Layer, LayerId, LayerKind};
    use eframe::egui::{Rect, pos2, vec2};

    const ROW_HEIGHT: f32 = 32.0;

    fn app_with(ids: &[&str]) -> SidebarApp {
        let layers = ids
            .iter()
            .map(|id| Layer::new(LayerId::from_string(*id), id.to_uppercase(), LayerKind::Data))
            .collect();
        SidebarApp {
            controller: SidebarController::new(AppSettings::default(), layers),
            visuals_set: false,
        }
    }

    fn row_rect(index: usize) -> Rect {
        Rect::from_min_size(pos2(0.0, index as f32 * ROW_HEIGHT), vec2(300.0, ROW_HEIGHT))
    }

    fn held_at(pos: egui::Pos2) -> InputSnapshot {
        InputSnapshot {
            pointer: Some(pos),
            primary_down: true,
            window_focused: true,
            ..InputSnapshot::default()
        }
    }

    /// Lift `l0` and hover it over the top half of `l2`.
    fn drag_l0_over_l2(app: &mut SidebarApp) -> egui::Pos2 {
        let origin = row_rect(0).center();
        app.controller
            .start_layer_drag(&LayerId::from_string("l0"), origin);
        let over = row_rect(2).center() - vec2(0.0, ROW_HEIGHT / 4.0);
        app.handle_drag_input(&held_at(over));
        app.controller
            .hover_drop_target(&LayerId::from_string("l2"), row_rect(2), over);
        assert!(app.controller.ui.drag.is_active());
        over
    }

    fn assert_all_idle(app: &SidebarApp) {
        for layer in app.controller.layers() {
            assert_eq!(
                app.controller.ui.rows.state_of(&layer.id),
                ItemInteraction::Idle,
                "{}",
                layer.id
            );
        }
        assert!(app.controller.ui.drag.payload.is_none());
    }

    fn order(app: &SidebarApp) -> Vec<&str> {
        app.controller
            .layers()
            .iter()
            .map(|layer| layer.id.as_str())
            .collect()
    }

    #[test]
    fn escape_cancels_without_commit() {
        let mut app = app_with(&["l0", "l1", "l2"]);
        let over = drag_l0_over_l2(&mut app);
        app.handle_drag_input(&InputSnapshot {
            escape: true,
            ..held_at(over)
        });
        assert_all_idle(&app);
        assert_eq!(app.controller.revision(), 0);
        assert_eq!(order(&app), ["l0", "l1", "l2"]);
    }

    #[test]
    fn pointer_leaving_the_window_cancels() {
        let mut app = app_with(&["l0", "l1", "l2"]);
        let over = drag_l0_over_l2(&mut app);
        app.handle_drag_input(&InputSnapshot {
            pointer_gone: true,
            ..held_at(over)
        });
        assert_all_idle(&app);
        assert_eq!(app.controller.revision(), 0);
    }

    #[test]
    fn losing_window_focus_cancels() {
        let mut app = app_with(&["l0", "l1", "l2"]);
        let over = drag_l0_over_l2(&mut app);
        app.handle_drag_input(&InputSnapshot {
            window_focused: false,
            ..held_at(over)
        });
        assert_all_idle(&app);
        assert_eq!(app.controller.revision(), 0);
    }

    #[test]
    fn release_commits_the_drop() {
        let mut app = app_with(&["l0", "l1", "l2"]);
        let over = drag_l0_over_l2(&mut app);
        app.handle_drag_input(&InputSnapshot {
            any_released: true,
            primary_down: false,
            ..held_at(over)
        });
        assert_all_idle(&app);
        assert_eq!(app.controller.revision(), 1);
        assert_eq!(order(&app), ["l1", "l0", "l2"]);
    }

    #[test]
    fn held_pointer_keeps_the_gesture_alive() {
        let mut app = app_with(&["l0", "l1", "l2"]);
        let over = drag_l0_over_l2(&mut app);
        app.handle_drag_input(&held_at(over));
        assert!(app.controller.ui.drag.is_active());
        assert_eq!(
            app.controller.ui.rows.state_of(&LayerId::from_string("l0")),
            ItemInteraction::Dragging
        );
    }
}
