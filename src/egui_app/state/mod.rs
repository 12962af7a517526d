//! Shared state types for the egui sidebar.

mod drag;
mod flash;
mod interaction;
mod sidebar;
mod status;

pub use drag::*;
pub use flash::*;
pub use interaction::*;
pub use sidebar::*;
pub use status::*;

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug)]
pub struct UiState {
    pub status: StatusBarState,
    pub sidebar: SidebarState,
    pub drag: DragState,
    /// Interaction state of every mounted row.
    pub rows: RowStates,
    pub flash: Option<PostMoveFlash>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            status: StatusBarState::idle(),
            sidebar: SidebarState::default(),
            drag: DragState::default(),
            rows: RowStates::default(),
            flash: None,
        }
    }
}
