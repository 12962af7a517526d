use crate::layers::config::SidebarSettings;

/// Width and resize gesture of the sidebar panel.
#[derive(Clone, Debug, PartialEq)]
pub struct SidebarState {
    pub width: f32,
    /// Width restored when the panel is un-tucked.
    pub open_width: f32,
    pub tucked_width: f32,
    pub max_width: f32,
    /// Pointer x of the last resize step while the handle is held.
    resize_anchor: Option<f32>,
}

impl Default for SidebarState {
    fn default() -> Self {
        Self::from_settings(&SidebarSettings::default())
    }
}

impl SidebarState {
    pub fn from_settings(settings: &SidebarSettings) -> Self {
        Self {
            width: settings.width,
            open_width: settings.open_width(),
            tucked_width: settings.tucked_width(),
            max_width: settings.max_width,
            resize_anchor: None,
        }
    }

    pub fn is_tucked(&self) -> bool {
        self.width <= self.tucked_width
    }

    pub fn is_resizing(&self) -> bool {
        self.resize_anchor.is_some()
    }

    pub fn begin_resize(&mut self, pointer_x: f32) {
        self.resize_anchor = Some(pointer_x);
    }

    /// Grow or shrink by the pointer travel since the last step.
    pub fn resize_to(&mut self, pointer_x: f32) -> f32 {
        if let Some(anchor) = self.resize_anchor {
            self.width = (self.width + (pointer_x - anchor)).clamp(self.tucked_width, self.max_width);
            self.resize_anchor = Some(pointer_x);
        }
        self.width
    }

    pub fn end_resize(&mut self) {
        self.resize_anchor = None;
    }

    pub fn toggle_tucked(&mut self) {
        self.width = if self.is_tucked() {
            self.open_width
        } else {
            self.tucked_width
        };
    }
}
