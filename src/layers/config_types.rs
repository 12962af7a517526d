use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::config_defaults::{
    MAX_FLASH_DURATION_MS, MIN_OPEN_SIDEBAR_WIDTH, TUCKED_SIDEBAR_WIDTH, clamp_sidebar_width, default_drop_indicator_gap,
    default_flash_duration_ms, default_preview_offset, default_sidebar_max_width,
    default_sidebar_width, default_start_distance, non_negative_or,
};
use super::reorder::MissingEdgePolicy;

/// Settings persisted in `config.toml`.
///
/// Config keys (TOML): `sidebar.width`, `sidebar.max_width`,
/// `drag.start_distance`, `drag.preview_offset`, `drag.drop_indicator_gap`,
/// `drag.missing_edge`, `flash.duration_ms`.
///
/// Layer order is never stored here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub sidebar: SidebarSettings,
    #[serde(default)]
    pub drag: DragSettings,
    #[serde(default)]
    pub flash: FlashSettings,
}

impl AppSettings {
    /// Clamp values loaded from disk into usable ranges.
    pub fn normalized(mut self) -> Self {
        let defaults = SidebarSettings::default();
        self.sidebar.max_width = non_negative_or(self.sidebar.max_width, defaults.max_width);
        self.sidebar.width = clamp_sidebar_width(self.sidebar.width, self.sidebar.max_width);
        let drag_defaults = DragSettings::default();
        self.drag.start_distance =
            non_negative_or(self.drag.start_distance, drag_defaults.start_distance);
        self.drag.drop_indicator_gap =
            non_negative_or(self.drag.drop_indicator_gap, drag_defaults.drop_indicator_gap);
        if !self.drag.preview_offset.iter().all(|value| value.is_finite()) {
            self.drag.preview_offset = drag_defaults.preview_offset;
        }
        self.flash.duration_ms = self.flash.duration_ms.min(MAX_FLASH_DURATION_MS);
        self
    }
}

/// Sidebar panel geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SidebarSettings {
    /// Width restored on launch and when un-tucking.
    #[serde(default = "default_sidebar_width")]
    pub width: f32,
    #[serde(default = "default_sidebar_max_width")]
    pub max_width: f32,
}

impl SidebarSettings {
    pub fn tucked_width(&self) -> f32 {
        TUCKED_SIDEBAR_WIDTH
    }

    /// Width the tuck toggle reopens at. Falls back to the stock width when
    /// the configured one is too narrow to use.
    pub fn open_width(&self) -> f32 {
        let width = if self.width >= MIN_OPEN_SIDEBAR_WIDTH {
            self.width
        } else {
            default_sidebar_width()
        };
        width.min(self.max_width)
    }
}

impl Default for SidebarSettings {
    fn default() -> Self {
        Self {
            width: default_sidebar_width(),
            max_width: default_sidebar_max_width(),
        }
    }
}

/// Drag gesture tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragSettings {
    /// Pointer travel in points before a press turns into a drag.
    #[serde(default = "default_start_distance")]
    pub start_distance: f32,
    /// Offset of the floating preview from the pointer, `[x, y]` in points.
    #[serde(default = "default_preview_offset")]
    pub preview_offset: [f32; 2],
    /// Gap between rows that the drop indicator line is centred in.
    #[serde(default = "default_drop_indicator_gap")]
    pub drop_indicator_gap: f32,
    #[serde(default)]
    pub missing_edge: MissingEdgePolicy,
}

impl Default for DragSettings {
    fn default() -> Self {
        Self {
            start_distance: default_start_distance(),
            preview_offset: default_preview_offset(),
            drop_indicator_gap: default_drop_indicator_gap(),
            missing_edge: MissingEdgePolicy::default(),
        }
    }
}

/// Post-move highlight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlashSettings {
    #[serde(default = "default_flash_duration_ms")]
    pub duration_ms: u64,
}

impl Default for FlashSettings {
    fn default() -> Self {
        Self {
            duration_ms: default_flash_duration_ms(),
        }
    }
}

/// Errors that may occur while loading or saving settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No usable config directory found.
    #[error("No suitable config directory found")]
    NoConfigDir,
    /// Failed to create the config directory.
    #[error("Unable to create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to read the config file.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to write the config file.
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to parse TOML config.
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// Failed to serialize config to TOML.
    #[error("Failed to serialize config to TOML at {path}: {source}")]
    SerializeToml {
        path: PathBuf,
        source: toml::ser::Error,
    },
}
