use super::interaction::PreviewContainer;
use crate::layers::LayerId;
use egui::Pos2;
use std::path::PathBuf;

pub use crate::layers::Edge;

/// Data carried by a drag gesture.
///
/// Every variant is an explicit discriminator; the layer list only reacts to
/// [`DragPayload::Layer`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DragPayload {
    /// A row of this layer list.
    Layer { layer_id: LayerId },
    /// Files dragged in from the OS file manager.
    ExternalFiles { paths: Vec<PathBuf> },
}

impl DragPayload {
    pub fn layer_id(&self) -> Option<&LayerId> {
        match self {
            DragPayload::Layer { layer_id } => Some(layer_id),
            DragPayload::ExternalFiles { .. } => None,
        }
    }
}

/// Progress of the current gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragPhase {
    #[default]
    Idle,
    /// Pointer is down on a row but has not moved far enough to drag.
    Pending,
    /// The row is lifted and drop targets are live.
    Active,
}

/// Drop target currently under the pointer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DropHit {
    pub target: LayerId,
    pub closest_edge: Option<Edge>,
}

/// The single drag session of the sidebar.
#[derive(Clone, Debug, Default)]
pub struct DragState {
    pub payload: Option<DragPayload>,
    pub phase: DragPhase,
    /// Snapshot rendered as the floating preview.
    pub preview: Option<PreviewContainer>,
    pub origin: Option<Pos2>,
    pub position: Option<Pos2>,
    pub hit: Option<DropHit>,
}

impl DragState {
    pub fn is_active(&self) -> bool {
        self.phase == DragPhase::Active
    }

    /// Id of the layer being dragged, if the gesture belongs to this list.
    pub fn source_layer(&self) -> Option<&LayerId> {
        self.payload.as_ref().and_then(DragPayload::layer_id)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
