//! Axis-aligned collision geometry
//!
//! Walls are tile-sized squares produced by the level loader; entities are
//! rectangles in the same integer world space. Overlap uses exclusive edges,
//! so a tile-aligned entity fits exactly through a one-tile corridor.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in integer world units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Square covering one tile of the given edge length
    pub const fn tile(tile: IVec2, size: i32) -> Self {
        Self {
            x: tile.x * size,
            y: tile.y * size,
            w: size,
            h: size,
        }
    }

    /// This rect shifted by a displacement
    #[inline]
    pub const fn translated(&self, delta: IVec2) -> Self {
        Self {
            x: self.x + delta.x,
            y: self.y + delta.y,
            w: self.w,
            h: self.h,
        }
    }

    /// Center point of the rect
    #[inline]
    pub const fn center(&self) -> IVec2 {
        IVec2::new(self.x + self.w / 2, self.y + self.h / 2)
    }

    /// True iff the rects overlap; touching edges do not count
    #[inline]
    pub const fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }
}

/// True iff the candidate rect overlaps any wall. O(walls) per call, which is
/// fine at maze scale; no spatial index.
pub fn blocked(rect: &Rect, walls: &[Rect]) -> bool {
    walls.iter().any(|wall| rect.overlaps(wall))
}
