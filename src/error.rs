//! Error type shared by geometry construction, sweeping and settings loading

use glam::DVec2;
use thiserror::Error;

/// Errors produced by this crate.
///
/// Overlap, containment and distance queries are total and never produce one.
#[derive(Debug, Error)]
pub enum GeomError {
    /// Corners are inverted on at least one axis (or width/height was negative).
    #[error("invalid extent: bottom-right {bottom_right} precedes top-left {top_left}")]
    InvalidExtent { top_left: DVec2, bottom_right: DVec2 },

    /// A swept move advanced `steps` unit steps without reaching the target box.
    #[error("motion unresolved after {steps} steps from {start}")]
    MotionUnresolved { steps: u32, start: DVec2 },

    /// Settings file could not be read.
    #[error("settings io error: {0}")]
    SettingsIo(#[from] std::io::Error),

    /// Settings file was not valid JSON for [`crate::SweepSettings`].
    #[error("settings parse error: {0}")]
    SettingsParse(#[from] serde_json::Error),
}

/// Crate result alias
pub type Result<T> = std::result::Result<T, GeomError>;
