//! Pixel AABB - axis-aligned boxes for 2D entity collision
//!
//! Core modules:
//! - `sim`: Box geometry, overlap/containment queries, swept movement, world queries
//! - `renderer`: Debug-draw hook (filled rectangles into a vertex buffer)
//! - `settings`: Data-driven sweep configuration
//! - `error`: Error type for construction, sweeping and settings

pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{GeomError, Result};
pub use settings::SweepSettings;
pub use sim::{Aabb, Bounded, Entity, EntityWorld, World};

/// Crate-wide constants
pub mod consts {
    /// Default cap on unit steps taken by a single swept move
    pub const MAX_SWEEP_STEPS: u32 = 4096;

    /// Offset added before flooring when snapping to pixels
    pub const PIXEL_ROUND_BIAS: f64 = 0.5;
}

/// Snap a coordinate to a whole pixel: `floor(x + 0.5)`.
///
/// Halves always go toward positive infinity, including below zero
/// (`-2.5` snaps to `-2`, `-2.7` to `-3`).
#[inline]
pub fn pixel_round(x: f64) -> f64 {
    (x + consts::PIXEL_ROUND_BIAS).floor()
}

/// Truncate a real-valued extent or gap toward zero.
#[inline]
pub fn pixel_trunc(x: f64) -> i32 {
    x as i32
}
