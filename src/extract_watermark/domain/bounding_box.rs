use std::fmt;
use crate::domain::margin::RegionSpec;

/// Crop rectangle as (left, top, right, bottom), right/bottom exclusive.
///
/// Coordinates are signed: a spec larger than the image yields a box that
/// starts left of or above the origin, and that has to stay representable
/// so it can be reported and rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub left: i64,
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
}

impl BoundingBox {
    pub fn new(left: i64, top: i64, right: i64, bottom: i64) -> Self {
        Self { left, top, right, bottom }
    }

    pub fn anchored_bottom_right(width: u32, height: u32, spec: &RegionSpec) -> Self {
        let size = i64::from(spec.size);
        let left = i64::from(width) - i64::from(spec.margins.right) - size;
        let top = i64::from(height) - i64::from(spec.margins.bottom) - size;
        Self::new(left, top, left + size, top + size)
    }

    pub fn width(&self) -> i64 {
        self.right - self.left
    }

    pub fn height(&self) -> i64 {
        self.bottom - self.top
    }

    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.left >= 0
            && self.top >= 0
            && self.right <= i64::from(width)
            && self.bottom <= i64::from(height)
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.left, self.top, self.right, self.bottom)
    }
}
