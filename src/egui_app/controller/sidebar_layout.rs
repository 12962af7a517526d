use super::*;

impl SidebarController {
    pub fn begin_sidebar_resize(&mut self, pointer_x: f32) {
        self.ui.sidebar.begin_resize(pointer_x);
    }

    pub fn resize_sidebar(&mut self, pointer_x: f32) -> f32 {
        self.ui.sidebar.resize_to(pointer_x)
    }

    pub fn end_sidebar_resize(&mut self) {
        if self.ui.sidebar.is_resizing() {
            self.ui.sidebar.end_resize();
            debug!(width = self.ui.sidebar.width, "Sidebar resized");
        }
    }

    /// Collapse the sidebar, or reopen it at its last width.
    pub fn toggle_sidebar(&mut self) {
        self.ui.sidebar.toggle_tucked();
        debug!(tucked = self.ui.sidebar.is_tucked(), "Sidebar toggled");
    }
}
