use serde::{Deserialize, Serialize};

/// Per-edge distances used to shrink or pad a rect.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeInsets {
    /// Distance from the top edge.
    pub top: f64,
    /// Distance from the left edge.
    pub left: f64,
    /// Distance from the bottom edge.
    pub bottom: f64,
    /// Distance from the right edge.
    pub right: f64,
}

impl EdgeInsets {
    /// Construct insets from four scalars, in top, left, bottom, right order.
    pub fn new(
        top: impl Into<f64>,
        left: impl Into<f64>,
        bottom: impl Into<f64>,
        right: impl Into<f64>,
    ) -> Self {
        Self {
            top: top.into(),
            left: left.into(),
            bottom: bottom.into(),
            right: right.into(),
        }
    }

    /// The same inset on every edge.
    pub fn uniform(v: impl Into<f64>) -> Self {
        let v = v.into();
        Self {
            top: v,
            left: v,
            bottom: v,
            right: v,
        }
    }

    /// Zero insets.
    pub fn zero() -> Self {
        Self::uniform(0.0)
    }

    /// Return true when every edge is zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl From<[f64; 4]> for EdgeInsets {
    fn from(v: [f64; 4]) -> Self {
        Self {
            top: v[0],
            left: v[1],
            bottom: v[2],
            right: v[3],
        }
    }
}
