use serde::{Deserialize, Serialize};

/// A displacement. Kept apart from `Point` so positions and movements cannot
/// be mixed up by accident.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Offset {
    /// Horizontal displacement.
    pub horizontal: f64,
    /// Vertical displacement.
    pub vertical: f64,
}

impl Offset {
    /// Construct an offset from two scalars.
    pub fn new(horizontal: impl Into<f64>, vertical: impl Into<f64>) -> Self {
        Self {
            horizontal: horizontal.into(),
            vertical: vertical.into(),
        }
    }

    /// No displacement.
    pub fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Return true when both components are zero.
    pub fn is_zero(&self) -> bool {
        self.horizontal == 0.0 && self.vertical == 0.0
    }
}

impl From<(f64, f64)> for Offset {
    fn from(v: (f64, f64)) -> Self {
        Self {
            horizontal: v.0,
            vertical: v.1,
        }
    }
}
