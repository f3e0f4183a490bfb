//! Sweep and debug-draw settings
//!
//! Loaded from a JSON file; any missing field takes its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::MAX_SWEEP_STEPS;
use crate::error::Result;
use crate::renderer::colors;

/// Tunable behaviour for swept movement and debug drawing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepSettings {
    /// Unit steps a single swept move may take before giving up
    pub max_sweep_steps: u32,

    // === Debug ===
    /// Draw entity boxes
    pub debug_draw: bool,
    /// Fill color for debug boxes (RGBA)
    pub debug_color: [f32; 4],
}

impl Default for SweepSettings {
    fn default() -> Self {
        Self {
            max_sweep_steps: MAX_SWEEP_STEPS,
            debug_draw: false,
            debug_color: colors::DEBUG_AABB,
        }
    }
}

impl SweepSettings {
    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize settings as pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings from a JSON file, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::info!("Using default settings ({})", e);
                Self::default()
            }
        }
    }
}
