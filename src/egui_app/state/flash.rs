use crate::layers::LayerId;
use std::time::{Duration, Instant};

/// Short highlight on a row that was just moved.
///
/// Purely cosmetic: it decays on its own and a newer flash replaces it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostMoveFlash {
    pub layer_id: LayerId,
    pub started_at: Instant,
    pub duration: Duration,
}

impl PostMoveFlash {
    pub fn new(layer_id: LayerId, started_at: Instant, duration: Duration) -> Self {
        Self {
            layer_id,
            started_at,
            duration,
        }
    }

    /// Highlight strength in `(0, 1]`, or `None` once the flash has decayed.
    pub fn intensity(&self, now: Instant) -> Option<f32> {
        let elapsed = now.saturating_duration_since(self.started_at);
        if elapsed >= self.duration {
            return None;
        }
        let progress = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        // Ease out so most of the fade happens early.
        Some((1.0 - progress).powi(2))
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.intensity(now).is_none()
    }
}
