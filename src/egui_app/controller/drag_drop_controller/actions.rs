use super::*;

pub(crate) trait DragDropActions {
    fn start_layer_drag(&mut self, layer_id: &LayerId, pos: Pos2);
    fn update_drag_pointer(&mut self, pos: Pos2);
    fn hover_drop_target(&mut self, target: &LayerId, rect: Rect, pos: Pos2);
    fn clear_drop_target(&mut self);
    fn finish_layer_drag(&mut self);
    fn cancel_layer_drag(&mut self);
    fn observe_external_drag(&mut self, paths: Vec<PathBuf>);
}

impl DragDropActions for DragDropController<'_> {
    fn start_layer_drag(&mut self, layer_id: &LayerId, pos: Pos2) {
        if self.ui.drag.payload.is_some() {
            debug!(layer = %layer_id, "Ignoring press while another drag is in progress");
            return;
        }
        let Some(layer) = self.store.get(layer_id) else {
            debug!(layer = %layer_id, "Press on unknown layer");
            return;
        };
        if layer.locked {
            debug!(layer = %layer_id, "Locked layer cannot be dragged");
            return;
        }
        let container = PreviewContainer::for_layer(layer);
        if !self
            .ui
            .rows
            .dispatch(layer_id, |row| row.begin_preview(container.clone()))
        {
            return;
        }
        self.ui.drag.payload = Some(DragPayload::Layer {
            layer_id: layer_id.clone(),
        });
        self.ui.drag.phase = DragPhase::Pending;
        self.ui.drag.preview = Some(container);
        self.ui.drag.origin = Some(pos);
        self.ui.drag.position = Some(pos);
    }

    fn update_drag_pointer(&mut self, pos: Pos2) {
        if self.ui.drag.payload.is_none() {
            return;
        }
        self.ui.drag.position = Some(pos);
        if self.ui.drag.phase != DragPhase::Pending {
            return;
        }
        let Some(origin) = self.ui.drag.origin else {
            return;
        };
        let threshold = self.settings.drag.start_distance;
        if origin.distance_sq(pos) < threshold * threshold {
            return;
        }
        let Some(source) = self.ui.drag.source_layer().cloned() else {
            return;
        };
        self.ui.drag.phase = DragPhase::Active;
        self.ui.rows.dispatch(&source, |row| row.start_dragging());
        info!(layer = %source, "Layer drag started");
    }

    fn hover_drop_target(&mut self, target: &LayerId, rect: Rect, pos: Pos2) {
        if !self.ui.drag.is_active() {
            return;
        }
        self.ui.drag.position = Some(pos);
        let Some(payload) = self.ui.drag.payload.as_ref() else {
            return;
        };
        if !Self::can_accept(payload) {
            return;
        }
        if !self.accepts_drop_on(target) {
            self.clear_drop_target();
            return;
        }
        let closest_edge = closest_edge(rect, pos);
        let same_target = self
            .ui
            .drag
            .hit
            .as_ref()
            .is_some_and(|hit| &hit.target == target);
        if same_target {
            self.ui.rows.dispatch(target, |row| row.drag_over(closest_edge));
        } else {
            self.clear_drop_target();
            self.ui.rows.dispatch(target, |row| row.drag_enter(closest_edge));
        }
        self.ui.drag.hit = Some(DropHit {
            target: target.clone(),
            closest_edge,
        });
    }

    fn clear_drop_target(&mut self) {
        if let Some(hit) = self.ui.drag.hit.take() {
            self.ui.rows.dispatch(&hit.target, |row| row.drag_leave());
        }
    }

    fn finish_layer_drag(&mut self) {
        let Some(payload) = self.ui.drag.payload.clone() else {
            self.reset_drag(false);
            return;
        };
        if !self.ui.drag.is_active() {
            // Released before crossing the start distance: a click, not a drop.
            self.reset_drag(true);
            return;
        }
        let hit = self.ui.drag.hit.clone();
        self.reset_drag(false);
        let DragPayload::Layer { layer_id } = payload else {
            debug!("Ignoring drop of a payload this list does not accept");
            return;
        };
        let Some(hit) = hit else {
            debug!(layer = %layer_id, "Layer dropped outside any target");
            return;
        };
        self.commit_drop(&layer_id, &hit);
    }

    fn cancel_layer_drag(&mut self) {
        if self.ui.drag.payload.is_none() {
            return;
        }
        if let Some(source) = self.ui.drag.source_layer() {
            info!(layer = %source, "Layer drag cancelled");
        }
        self.reset_drag(true);
    }

    fn observe_external_drag(&mut self, paths: Vec<PathBuf>) {
        let external_in_progress = matches!(
            self.ui.drag.payload,
            Some(DragPayload::ExternalFiles { .. })
        );
        if paths.is_empty() {
            if external_in_progress {
                self.ui.drag.clear();
            }
            return;
        }
        if self.ui.drag.payload.is_some() {
            return;
        }
        debug!(count = paths.len(), "External files hovering over the sidebar");
        self.ui.drag.payload = Some(DragPayload::ExternalFiles { paths });
        self.ui.drag.phase = DragPhase::Active;
    }
}

impl DragDropController<'_> {
    /// Only rows of this list may be dropped onto it.
    pub(crate) fn can_accept(payload: &DragPayload) -> bool {
        matches!(payload, DragPayload::Layer { .. })
    }

    fn accepts_drop_on(&self, target: &LayerId) -> bool {
        if self.ui.drag.source_layer() == Some(target) {
            return false;
        }
        self.store.get(target).is_some_and(|layer| !layer.locked)
    }

    fn reset_drag(&mut self, cancelled: bool) {
        self.ui.rows.end_gesture(cancelled);
        self.ui.drag.clear();
    }

    fn commit_drop(&mut self, source: &LayerId, hit: &DropHit) {
        let (Some(start_index), Some(target_index)) =
            (self.store.index_of(source), self.store.index_of(&hit.target))
        else {
            debug!(
                layer = %source,
                target = %hit.target,
                "Drop refers to a layer that no longer exists"
            );
            return;
        };
        let layers = self.store.layers();
        if layers[start_index].locked || layers[target_index].locked {
            debug!(layer = %source, target = %hit.target, "Drop involving a locked layer refused");
            return;
        }
        let policy = self.settings.drag.missing_edge;
        let next = match reorder_with_edge(
            layers,
            start_index,
            target_index,
            hit.closest_edge,
            policy,
        ) {
            Ok(Cow::Owned(next)) => next,
            Ok(Cow::Borrowed(_)) => return,
            Err(err) => {
                warn!(%err, layer = %source, "Layer reorder rejected");
                self.set_status(format!("Could not move layer: {err}"), StatusTone::Error);
                return;
            }
        };
        let finish_index = next
            .iter()
            .position(|layer| &layer.id == source)
            .unwrap_or(start_index);
        let label = next[finish_index].label.clone();
        let total = next.len();
        self.commit_layers(next);
        let duration = self.flash_duration();
        self.ui.flash = Some(PostMoveFlash::new(source.clone(), Instant::now(), duration));
        info!(
            layer = %source,
            from = start_index,
            to = finish_index,
            "Layer moved"
        );
        self.set_status(
            format!("Moved {label} to position {} of {total}", finish_index + 1),
            StatusTone::Info,
        );
    }
}
