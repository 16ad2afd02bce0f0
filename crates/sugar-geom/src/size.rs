use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use super::{Point, Rect};

/// A `Size` is a width and height with no location. Extents are non-negative
/// once standardized; subtraction may produce negative intermediates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Size {
    /// Construct a size from two scalars.
    pub fn new(width: impl Into<f64>, height: impl Into<f64>) -> Self {
        Self {
            width: width.into(),
            height: height.into(),
        }
    }

    /// A zero-valued size.
    pub fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }
}

impl Add for Size {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            width: self.width + other.width,
            height: self.height + other.height,
        }
    }
}

impl Sub for Size {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            width: self.width - other.width,
            height: self.height - other.height,
        }
    }
}

/// Commutes with `Point + Size`: the size stays the extent.
impl Add<Point> for Size {
    type Output = Rect;

    fn add(self, origin: Point) -> Rect {
        Rect::from_parts(origin, self)
    }
}

impl From<(f64, f64)> for Size {
    fn from(v: (f64, f64)) -> Self {
        Self {
            width: v.0,
            height: v.1,
        }
    }
}

impl From<[f64; 2]> for Size {
    fn from(v: [f64; 2]) -> Self {
        Self {
            width: v[0],
            height: v[1],
        }
    }
}
