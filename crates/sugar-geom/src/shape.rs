use std::fmt;

use super::{EdgeInsets, HasFrame, Offset, Point, Rect, Size};

/// Every input shape the normalizer understands. Raw values from callers are
/// converted into a `Shape` first, then coerced into a canonical type.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Absent value.
    Null,
    /// A single number.
    Scalar(f64),
    /// A string. Never a valid geometry, but representable so it can be
    /// reported.
    Text(String),
    /// An ordered sequence.
    Seq(Vec<Self>),
    /// An existing point.
    Point(Point),
    /// An existing size.
    Size(Size),
    /// An existing rect.
    Rect(Rect),
    /// Existing insets.
    EdgeInsets(EdgeInsets),
    /// An existing offset.
    Offset(Offset),
    /// The frame read from a frame-bearing object.
    Frame(Rect),
}

impl Shape {
    /// Capture the frame of a frame-bearing object.
    pub fn frame_of(f: &impl HasFrame) -> Self {
        Self::Frame(f.frame())
    }

    /// The number held by a `Scalar`.
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(v) => Some(*v),
            _ => None,
        }
    }

    /// The elements of a `Seq`.
    pub fn as_seq(&self) -> Option<&[Self]> {
        match self {
            Self::Seq(items) => Some(items),
            _ => None,
        }
    }
}

/// Write a comma-separated list of shapes.
fn write_list(f: &mut fmt::Formatter<'_>, items: &[Shape]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

/// Write a rect's components, naming the sentinel variants.
fn write_rect(f: &mut fmt::Formatter<'_>, name: &str, r: &Rect) -> fmt::Result {
    match r {
        Rect::Finite { origin, size } => write!(
            f,
            "{name}({}, {}, {}, {})",
            origin.x, origin.y, size.width, size.height
        ),
        Rect::Null => write!(f, "{name}(null)"),
        Rect::Infinite => write!(f, "{name}(infinite)"),
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Scalar(v) => write!(f, "{v}"),
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Seq(items) => {
                write!(f, "[")?;
                write_list(f, items)?;
                write!(f, "]")
            }
            Self::Point(p) => write!(f, "Point({}, {})", p.x, p.y),
            Self::Size(s) => write!(f, "Size({}, {})", s.width, s.height),
            Self::Rect(r) => write_rect(f, "Rect", r),
            Self::EdgeInsets(e) => write!(
                f,
                "EdgeInsets({}, {}, {}, {})",
                e.top, e.left, e.bottom, e.right
            ),
            Self::Offset(o) => write!(f, "Offset({}, {})", o.horizontal, o.vertical),
            Self::Frame(r) => write_rect(f, "Frame", r),
        }
    }
}

/// A positional argument list, printed without brackets.
pub(crate) struct ArgList<'a>(pub &'a [Shape]);

impl fmt::Display for ArgList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, self.0)
    }
}

/// Convert a plain value into a `Shape`.
pub trait ToShape {
    /// Encode the value as a `Shape`.
    fn to_shape(self) -> Shape;
}

impl ToShape for Shape {
    fn to_shape(self) -> Shape {
        self
    }
}

impl ToShape for &Shape {
    fn to_shape(self) -> Shape {
        self.clone()
    }
}

impl ToShape for f64 {
    fn to_shape(self) -> Shape {
        Shape::Scalar(self)
    }
}

impl ToShape for f32 {
    fn to_shape(self) -> Shape {
        Shape::Scalar(f64::from(self))
    }
}

/// Implement `ToShape` for integer primitives that convert losslessly.
macro_rules! impl_int_to_shape {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ToShape for $ty {
                fn to_shape(self) -> Shape {
                    Shape::Scalar(f64::from(self))
                }
            }
        )+
    };
}

impl_int_to_shape!(i8, i16, i32, u8, u16, u32);

/// Implement `ToShape` for wide integer primitives. Magnitudes above 2^53
/// round to the nearest representable `f64`.
macro_rules! impl_wide_int_to_shape {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ToShape for $ty {
                fn to_shape(self) -> Shape {
                    Shape::Scalar(self as f64)
                }
            }
        )+
    };
}

impl_wide_int_to_shape!(i64, u64, isize, usize);

impl ToShape for &str {
    fn to_shape(self) -> Shape {
        Shape::Text(self.to_string())
    }
}

impl ToShape for String {
    fn to_shape(self) -> Shape {
        Shape::Text(self)
    }
}

impl ToShape for () {
    fn to_shape(self) -> Shape {
        Shape::Null
    }
}

impl<T> ToShape for Option<T>
where
    T: ToShape,
{
    fn to_shape(self) -> Shape {
        match self {
            Some(value) => value.to_shape(),
            None => Shape::Null,
        }
    }
}

impl ToShape for Point {
    fn to_shape(self) -> Shape {
        Shape::Point(self)
    }
}

impl ToShape for Size {
    fn to_shape(self) -> Shape {
        Shape::Size(self)
    }
}

impl ToShape for Rect {
    fn to_shape(self) -> Shape {
        Shape::Rect(self)
    }
}

impl ToShape for EdgeInsets {
    fn to_shape(self) -> Shape {
        Shape::EdgeInsets(self)
    }
}

impl ToShape for Offset {
    fn to_shape(self) -> Shape {
        Shape::Offset(self)
    }
}

impl<T> ToShape for Vec<T>
where
    T: ToShape,
{
    fn to_shape(self) -> Shape {
        Shape::Seq(self.into_iter().map(ToShape::to_shape).collect())
    }
}

impl<T, const N: usize> ToShape for [T; N]
where
    T: ToShape,
{
    fn to_shape(self) -> Shape {
        Shape::Seq(self.into_iter().map(ToShape::to_shape).collect())
    }
}

impl<T> ToShape for &[T]
where
    T: ToShape + Clone,
{
    fn to_shape(self) -> Shape {
        Shape::Seq(self.iter().cloned().map(ToShape::to_shape).collect())
    }
}

/// Implement `ToShape` for tuple arities.
macro_rules! impl_tuple_to_shape {
    ($($idx:tt : $name:ident),+ $(,)?) => {
        impl<$($name),+> ToShape for ($($name,)+)
        where
            $($name: ToShape,)+
        {
            fn to_shape(self) -> Shape {
                Shape::Seq(vec![$(self.$idx.to_shape(),)+])
            }
        }
    };
}

impl_tuple_to_shape!(0: T1, 1: T2);
impl_tuple_to_shape!(0: T1, 1: T2, 2: T3);
impl_tuple_to_shape!(0: T1, 1: T2, 2: T3, 3: T4);

/// Build a positional argument list of [`Shape`]s from heterogeneous values.
///
/// ```
/// use sugar_geom::{Normalize, Rect, shapes};
///
/// let r = Rect::normalize_args(&shapes![[1, 2], [3, 4]]).unwrap();
/// assert_eq!(r, Rect::new(1, 2, 3, 4));
/// ```
#[macro_export]
macro_rules! shapes {
    ($($value:expr),* $(,)?) => {
        vec![$($crate::ToShape::to_shape($value)),*]
    };
}
