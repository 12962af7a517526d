pub(super) const TUCKED_SIDEBAR_WIDTH: f32 = 0.0;
/// Narrowest width the tuck toggle reopens the sidebar at.
pub(super) const MIN_OPEN_SIDEBAR_WIDTH: f32 = 120.0;
pub(super) const MAX_FLASH_DURATION_MS: u64 = 5_000;

pub(super) fn default_sidebar_width() -> f32 {
    350.0
}

pub(super) fn default_sidebar_max_width() -> f32 {
    600.0
}

pub(super) fn default_start_distance() -> f32 {
    4.0
}

pub(super) fn default_preview_offset() -> [f32; 2] {
    [16.0, 8.0]
}

pub(super) fn default_drop_indicator_gap() -> f32 {
    8.0
}

pub(super) fn default_flash_duration_ms() -> u64 {
    700
}

pub(super) fn clamp_sidebar_width(width: f32, max_width: f32) -> f32 {
    if width.is_finite() {
        width.clamp(TUCKED_SIDEBAR_WIDTH, max_width)
    } else {
        default_sidebar_width().min(max_width)
    }
}

pub(super) fn non_negative_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        fallback
    }
}
