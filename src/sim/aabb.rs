//! Axis-aligned bounding box geometry
//!
//! A box is stored as its top-left and bottom-right corners in screen space
//! (y grows downward). Width and height are always derived from the corners and
//! truncated to whole pixels when exposed.

use glam::{DVec2, IVec2};
use serde::{Deserialize, Serialize};

use crate::error::{GeomError, Result};
use crate::pixel_trunc;

/// Rectangular region that completely contains an entity
///
/// Invariant: `bottom_right` is never left of or above `top_left`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAabb")]
pub struct Aabb {
    top_left: DVec2,
    bottom_right: DVec2,
}

/// Unvalidated wire form, checked on the way in
#[derive(Deserialize)]
struct RawAabb {
    top_left: DVec2,
    bottom_right: DVec2,
}

impl TryFrom<RawAabb> for Aabb {
    type Error = GeomError;

    fn try_from(raw: RawAabb) -> Result<Self> {
        Aabb::from_corners(raw.top_left, raw.bottom_right)
    }
}

impl Aabb {
    /// Create a box from two opposite corners
    ///
    /// Fails with [`GeomError::InvalidExtent`] if either corner is not finite
    /// or `bottom_right` precedes `top_left` on either axis.
    pub fn from_corners(top_left: DVec2, bottom_right: DVec2) -> Result<Self> {
        let ordered = bottom_right.x >= top_left.x && bottom_right.y >= top_left.y;
        if !(top_left.is_finite() && bottom_right.is_finite() && ordered) {
            log::debug!("Rejected invalid box {} -> {}", top_left, bottom_right);
            return Err(GeomError::InvalidExtent {
                top_left,
                bottom_right,
            });
        }
        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    /// Create a box from its top-left corner and a size in pixels
    pub fn from_top_left_and_size(top_left: DVec2, width: i32, height: i32) -> Result<Self> {
        Self::from_corners(
            top_left,
            top_left + DVec2::new(width as f64, height as f64),
        )
    }

    #[inline]
    pub fn top_left(&self) -> DVec2 {
        self.top_left
    }

    #[inline]
    pub fn bottom_right(&self) -> DVec2 {
        self.bottom_right
    }

    /// Width in whole pixels (truncated toward zero)
    #[inline]
    pub fn width(&self) -> i32 {
        pixel_trunc(self.bottom_right.x - self.top_left.x)
    }

    /// Height in whole pixels (truncated toward zero)
    #[inline]
    pub fn height(&self) -> i32 {
        pixel_trunc(self.bottom_right.y - self.top_left.y)
    }

    pub fn bottom_left(&self) -> DVec2 {
        DVec2::new(self.top_left.x, self.top_left.y + self.height() as f64)
    }

    pub fn top_right(&self) -> DVec2 {
        DVec2::new(self.top_left.x + self.width() as f64, self.top_left.y)
    }

    /// Move the box to a new top-left corner, keeping its size
    pub fn move_to(&mut self, new_top_left: DVec2) {
        // Diagonal must be taken before top_left is overwritten
        let diagonal = self.bottom_right - self.top_left;
        self.place(new_top_left, diagonal);
    }

    /// Put the box at `top_left` with a diagonal captured earlier
    ///
    /// Successive placements through fractional positions share one diagonal.
    pub(crate) fn place(&mut self, top_left: DVec2, diagonal: DVec2) {
        self.top_left = top_left;
        self.bottom_right = top_left + diagonal;
    }

    /// Move the box to an integer top-left corner, keeping its size
    pub fn move_to_xy(&mut self, x: i32, y: i32) {
        self.move_to(DVec2::new(x as f64, y as f64));
    }

    /// Move the box by a whole number of pixels
    pub fn move_by(&mut self, dx: i32, dy: i32) {
        self.move_to(self.top_left + DVec2::new(dx as f64, dy as f64));
    }

    /// Whether the interiors of two boxes intersect
    ///
    /// Comparisons are strict: boxes that only share an edge do not overlap,
    /// so a box can rest flush against another.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.top_left.x < other.bottom_right.x
            && self.bottom_right.x > other.top_left.x
            && self.top_left.y < other.bottom_right.y
            && self.bottom_right.y > other.top_left.y
    }

    /// Whether `point` lies inside `aabb`, boundary included
    pub fn inside_point(point: DVec2, aabb: &Aabb) -> bool {
        aabb.contains_point(point)
    }

    /// Whether `point` lies inside this box, boundary included
    ///
    /// Unlike [`Aabb::overlaps`], touching an edge counts.
    pub fn contains_point(&self, point: DVec2) -> bool {
        point.x >= self.top_left.x
            && point.x <= self.bottom_right.x
            && point.y >= self.top_left.y
            && point.y <= self.bottom_right.y
    }

    /// Signed gap between the edges of this box and `other`, per axis
    ///
    /// Each axis is `min(near - other_far, far - other_near)` truncated toward
    /// zero. Negative on an axis where the boxes overlap.
    pub fn distance_to(&self, other: &Aabb) -> IVec2 {
        let dx = (self.top_left.x - other.bottom_right.x)
            .min(self.bottom_right.x - other.top_left.x);
        let dy = (self.top_left.y - other.bottom_right.y)
            .min(self.bottom_right.y - other.top_left.y);
        IVec2::new(pixel_trunc(dx), pixel_trunc(dy))
    }
}
