mod actions;
mod drag_state;
mod edge;

pub(crate) use actions::DragDropActions;
pub(crate) use drag_state::DragDropController;
pub use edge::closest_edge;

use super::*;
use crate::layers::reorder_with_edge;
use egui::{Pos2, Rect};
use std::borrow::Cow;
use std::path::PathBuf;
use tracing::{debug, info, warn};
