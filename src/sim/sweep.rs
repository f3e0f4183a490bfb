//! Discrete swept movement
//!
//! Marches a box along a direction one unit step at a time until the next
//! step would penetrate another box, then snaps the last clear position to
//! whole pixels. This trades precision for simplicity: there is no
//! time-of-impact solve, and the stepping/rounding must stay exactly as-is
//! for pixel-identical placement.

use glam::DVec2;

use super::aabb::Aabb;
use crate::consts::MAX_SWEEP_STEPS;
use crate::error::{GeomError, Result};
use crate::pixel_round;
use crate::settings::SweepSettings;

impl Aabb {
    /// Move as far as possible along `velocity` without overlapping `other`
    ///
    /// Only the direction of `velocity` matters. The box is left at, and the
    /// call returns, the snapped resting top-left. If the box already overlaps
    /// `other` or `velocity` is zero, nothing moves and the current top-left
    /// is returned.
    ///
    /// Gives up after [`MAX_SWEEP_STEPS`] steps; see
    /// [`Aabb::move_towards_bounded`].
    pub fn move_towards(&mut self, velocity: DVec2, other: &Aabb) -> Result<DVec2> {
        self.move_towards_bounded(velocity, other, MAX_SWEEP_STEPS)
    }

    /// [`Aabb::move_towards`] using the step limit from `settings`
    pub fn move_towards_with(
        &mut self,
        velocity: DVec2,
        other: &Aabb,
        settings: &SweepSettings,
    ) -> Result<DVec2> {
        self.move_towards_bounded(velocity, other, settings.max_sweep_steps)
    }

    /// [`Aabb::move_towards`] with an explicit step limit
    ///
    /// Tests the start position plus up to `max_steps` unit advances. If none
    /// of them overlaps `other` the box is put back where it started and
    /// [`GeomError::MotionUnresolved`] is returned.
    pub fn move_towards_bounded(
        &mut self,
        velocity: DVec2,
        other: &Aabb,
        max_steps: u32,
    ) -> Result<DVec2> {
        let start = self.top_left();
        let v_bar = velocity.normalize_or_zero();

        if self.overlaps(other) || v_bar == DVec2::ZERO {
            return Ok(start);
        }

        let original = *self;
        let diagonal = self.bottom_right() - start;
        let mut prev_pos = start;
        let mut new_pos = start;

        for _ in 0..=max_steps {
            self.place(new_pos, diagonal);
            if self.overlaps(other) {
                let rest = DVec2::new(pixel_round(prev_pos.x), pixel_round(prev_pos.y));
                self.place(rest, diagonal);
                log::trace!("Sweep from {} along {} came to rest at {}", start, v_bar, rest);
                return Ok(rest);
            }
            prev_pos = new_pos;
            new_pos = prev_pos + v_bar;
        }

        *self = original;
        log::warn!(
            "Sweep from {} along {} never reached target after {} steps",
            start,
            v_bar,
            max_steps
        );
        Err(GeomError::MotionUnresolved {
            steps: max_steps,
            start,
        })
    }

    /// Non-mutating form of [`Aabb::move_towards`]
    ///
    /// Returns the moved copy together with its resting top-left.
    pub fn swept(&self, velocity: DVec2, other: &Aabb) -> Result<(Aabb, DVec2)> {
        let mut moved = *self;
        let rest = moved.move_towards(velocity, other)?;
        Ok((moved, rest))
    }
}
