//! Canonical 2-D geometry values and the normalizer that builds them.
//!
//! Callers hand geometry around in whatever shape is convenient: bare scalars,
//! arrays, tuples, existing values, or the frame of a view. The normalizer
//! coerces each of these into exactly one canonical [`Point`], [`Size`],
//! [`Rect`], [`EdgeInsets`] or [`Offset`], and the arithmetic on those types
//! never has to look at input shapes again.
//!
//! ```
//! use sugar_geom::{Point, Rect, Size, point, rect};
//!
//! # fn main() -> sugar_geom::Result<()> {
//! assert_eq!(point([3, 4])?, Point::new(3, 4));
//! let a = rect(([0, 0], [2, 2]))?;
//! let b = rect([5, 5, 1, 1])?;
//! assert_eq!(a + b, Rect::new(0, 0, 6, 6));
//! assert_eq!(Point::new(1, 2) + Size::new(3, 4), Rect::new(1, 2, 3, 4));
//! # Ok(())
//! # }
//! ```

/// Frame adjustment with a restore point.
mod adjust;
/// Flat map representation.
mod dict;
/// Error types for geometry construction.
mod error;
/// Frame-bearing object capabilities.
mod frame;
/// Per-edge insets.
mod insets;
/// Input shape coercion.
mod normalize;
/// Displacement type.
mod offset;
/// Point helpers.
mod point;
/// Rectangle operations.
mod rect;
/// Accepted input shapes.
mod shape;
/// Width/height size type.
mod size;
/// One-dimensional intervals.
mod span;

pub use adjust::Adjuster;
pub use dict::{Dict, MapRepr};
pub use error::{Error, Result};
pub use frame::{FrameMut, HasFrame};
pub use insets::EdgeInsets;
pub use normalize::{Normalize, edge_insets, offset, point, rect, rect_from, size};
pub use offset::Offset;
pub use point::Point;
pub use rect::{INFINITE_EXTENT, NULL_ORIGIN, Probe, Rect};
pub use shape::{Shape, ToShape};
pub use size::Size;
