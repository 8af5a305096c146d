//! Geometry primitives
//!
//! Pixel coordinates, rectangular hit regions and polygon translation.
//! All polygons in the UI are fixed-size tables, so translation works on
//! arrays and never allocates.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Integer pixel coordinate
///
/// Used both as an absolute screen position and as a relative offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0)
    pub const ZERO: Self = Self::new(0, 0);

    /// Create a new point
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return this point shifted by `offset`, saturating at the `i32` range
    pub const fn offset(self, offset: Point) -> Self {
        Self {
            x: self.x.saturating_add(offset.x),
            y: self.y.saturating_add(offset.y),
        }
    }
}

/// Axis-aligned rectangle used for hit-testing
///
/// Bounds are inclusive on all four edges: a region at (10, 10) with size
/// (5, 5) contains both (10, 10) and (15, 15).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Region {
    /// Top-left corner
    pub position: Point,
    /// Width (x) and height (y)
    pub size: Point,
}

impl Region {
    /// Create a region from its top-left corner and size
    pub const fn new(position: Point, size: Point) -> Self {
        Self { position, size }
    }

    /// Check whether `(x, y)` lies inside the region, edges included
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.position.x
            && x <= self.position.x.saturating_add(self.size.x)
            && y >= self.position.y
            && y <= self.position.y.saturating_add(self.size.y)
    }

    /// Check whether a point lies inside the region, edges included
    pub const fn contains_point(&self, point: Point) -> bool {
        self.contains(point.x, point.y)
    }

    /// Return this region moved by `offset`; the size is unchanged
    pub const fn offset(self, offset: Point) -> Self {
        Self {
            position: self.position.offset(offset),
            size: self.size,
        }
    }

    /// Return the same region with its width replaced
    pub const fn with_width(self, width: i32) -> Self {
        Self {
            position: self.position,
            size: Point::new(width, self.size.y),
        }
    }

    /// The four corners, clockwise from the top-left
    pub const fn corners(&self) -> [Point; 4] {
        let Point { x, y } = self.position;
        let Point { x: w, y: h } = self.size;
        [
            Point::new(x, y),
            Point::new(x.saturating_add(w), y),
            Point::new(x.saturating_add(w), y.saturating_add(h)),
            Point::new(x, y.saturating_add(h)),
        ]
    }
}

/// Shift every point of a polygon by `offset`
pub fn translate<const N: usize>(points: &[Point; N], offset: Point) -> [Point; N] {
    core::array::from_fn(|i| points[i].offset(offset))
}
