//! Axis-aligned ground rectangle

use crate::core::types::DVec2;

/// Rectangle on the ground plane defined by center and half-extents.
/// `x` is longitude, `y` latitude, both in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Footprint {
    pub center: DVec2,
    pub half_extent: DVec2,
}

impl Footprint {
    /// Create footprint from center and full widths
    pub fn from_center_size(center: DVec2, size: DVec2) -> Self {
        Self {
            center,
            half_extent: size / 2.0,
        }
    }

    /// Check if point is inside, edges included
    pub fn contains_point(&self, p: DVec2) -> bool {
        (p.x - self.center.x).abs() <= self.half_extent.x
            && (p.y - self.center.y).abs() <= self.half_extent.y
    }

    /// Copy moved by `offset`
    pub fn translated(&self, offset: DVec2) -> Self {
        Self {
            center: self.center + offset,
            half_extent: self.half_extent,
        }
    }

    /// Corners counter-clockwise starting at (min x, min y)
    pub fn corners(&self) -> [DVec2; 4] {
        let min = self.center - self.half_extent;
        let max = self.center + self.half_extent;
        [
            DVec2::new(min.x, min.y),
            DVec2::new(max.x, min.y),
            DVec2::new(max.x, max.y),
            DVec2::new(min.x, max.y),
        ]
    }
}
