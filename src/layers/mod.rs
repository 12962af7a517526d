//! Layer data model and the ordered layer list.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod config;
mod config_defaults;
pub mod config_types;
pub mod reorder;
mod seed;

pub use reorder::{Edge, MissingEdgePolicy, ReorderError, reorder_destination_index, reorder_with_edge};
pub use seed::seed_layers;

/// Stable identifier for a layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerId(String);

impl LayerId {
    /// Create a fresh unique identifier for a layer added at runtime.
    pub fn generate() -> Self {
        Self(format!("layer-{}", Uuid::new_v4()))
    }

    /// Rehydrate an identifier from a known string.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Category of map data a layer holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayerKind {
    ProjectBoundary,
    Data,
    Drawing,
}

impl LayerKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::ProjectBoundary => "Project boundary",
            Self::Data => "Data",
            Self::Drawing => "Drawing",
        }
    }
}

/// One entry of the layer list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layer {
    pub id: LayerId,
    pub label: String,
    /// Locked layers can neither be dragged nor dropped onto.
    pub locked: bool,
    pub visible: bool,
    pub filtered: bool,
    pub active: bool,
    /// Opacity percentage, 0–100.
    pub opacity: u8,
    pub kind: LayerKind,
    /// Nested layers. Modeled for completeness; reordering only touches the top level.
    #[serde(default)]
    pub children: Vec<Layer>,
}

impl Layer {
    /// Unlocked, visible, fully opaque layer.
    pub fn new(id: LayerId, label: impl Into<String>, kind: LayerKind) -> Self {
        Self {
            id,
            label: label.into(),
            locked: false,
            visible: true,
            filtered: false,
            active: true,
            opacity: 100,
            kind,
            children: Vec::new(),
        }
    }
}

/// Owner of the ordered layer list.
///
/// The list is only ever swapped out as a whole through [`LayerStore::replace`];
/// `revision` increases with every replacement.
#[derive(Debug, Clone, Default)]
pub struct LayerStore {
    layers: Vec<Layer>,
    revision: u64,
}

impl LayerStore {
    pub fn new(layers: Vec<Layer>) -> Self {
        Self {
            layers,
            revision: 0,
        }
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn index_of(&self, id: &LayerId) -> Option<usize> {
        self.layers.iter().position(|layer| &layer.id == id)
    }

    pub fn get(&self, id: &LayerId) -> Option<&Layer> {
        self.layers.iter().find(|layer| &layer.id == id)
    }

    /// Commit a complete replacement list.
    pub fn replace(&mut self, layers: Vec<Layer>) {
        self.layers = layers;
        self.revision += 1;
    }

    /// Build and commit a new list with `edit` applied to the matching layer.
    ///
    /// Returns false (and commits nothing) when no layer has `id`.
    pub fn update(&mut self, id: &LayerId, edit: impl FnOnce(&mut Layer)) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        let mut next = self.layers.clone();
        edit(&mut next[index]);
        self.replace(next);
        true
    }
}
