use super::SidebarController;

/// Short-lived view of the controller scoped to the drag gesture.
pub(crate) struct DragDropController<'a> {
    controller: &'a mut SidebarController,
}

impl<'a> DragDropController<'a> {
    pub(crate) fn new(controller: &'a mut SidebarController) -> Self {
        Self { controller }
    }
}

impl std::ops::Deref for DragDropController<'_> {
    type Target = SidebarController;

    fn deref(&self) -> &Self::Target {
        self.controller
    }
}

impl std::ops::DerefMut for DragDropController<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.controller
    }
}
