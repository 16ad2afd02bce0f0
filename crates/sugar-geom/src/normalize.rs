//! Canonicalizing constructors.
//!
//! Every construction path funnels through [`Normalize`]: a single argument
//! goes through [`Normalize::normalize`], a positional argument list through
//! [`Normalize::normalize_args`]. Inputs that match none of the accepted shapes
//! for the target type fail with [`Error::InvalidArgument`].

use super::{
    EdgeInsets, Offset, Point, Rect, Size,
    error::{Error, Result},
    shape::{ArgList, Shape, ToShape},
};

/// Coerce heterogeneous input shapes into one canonical value.
pub trait Normalize: Sized {
    /// Type name reported in errors.
    const NAME: &'static str;

    /// Coerce a single argument.
    fn normalize(shape: &Shape) -> Result<Self>;

    /// Coerce a positional argument list.
    fn normalize_args(args: &[Shape]) -> Result<Self>;
}

/// Extract exactly `N` scalars from a sequence.
fn scalars<const N: usize>(items: &[Shape]) -> Option<[f64; N]> {
    if items.len() != N {
        return None;
    }
    let mut out = [0.0; N];
    for (slot, item) in out.iter_mut().zip(items) {
        *slot = item.as_scalar()?;
    }
    Some(out)
}

/// Point from a point or a two-element sequence.
fn point_of(shape: &Shape) -> Option<Point> {
    match shape {
        Shape::Point(p) => Some(*p),
        Shape::Seq(items) => scalars::<2>(items).map(Point::from),
        _ => None,
    }
}

/// Size from a size or a two-element sequence.
fn size_of(shape: &Shape) -> Option<Size> {
    match shape {
        Shape::Size(s) => Some(*s),
        Shape::Seq(items) => scalars::<2>(items).map(Size::from),
        _ => None,
    }
}

/// Rect from, in order of priority: a rect, a captured frame,
/// `[point, size]`, or `[x, y, w, h]`.
fn rect_of(shape: &Shape) -> Option<Rect> {
    match shape {
        Shape::Rect(r) | Shape::Frame(r) => Some(*r),
        Shape::Seq(items) => match items.as_slice() {
            [origin, size] => Some(Rect::from_parts(point_of(origin)?, size_of(size)?)),
            _ => scalars::<4>(items).map(|[x, y, w, h]| Rect::new(x, y, w, h)),
        },
        _ => None,
    }
}

/// Insets from a four-element sequence, insets, or a single broadcast scalar.
fn insets_of(shape: &Shape) -> Option<EdgeInsets> {
    match shape {
        Shape::Seq(items) => scalars::<4>(items).map(EdgeInsets::from),
        Shape::EdgeInsets(e) => Some(*e),
        Shape::Scalar(v) => Some(EdgeInsets::uniform(*v)),
        _ => None,
    }
}

/// Offset from a two-element sequence or an offset.
fn offset_of(shape: &Shape) -> Option<Offset> {
    match shape {
        Shape::Seq(items) => scalars::<2>(items).map(|[h, v]| Offset::new(h, v)),
        Shape::Offset(o) => Some(*o),
        _ => None,
    }
}

/// Shared single-argument path: convert or report the rejected shape.
fn single<T: Normalize>(shape: &Shape, f: fn(&Shape) -> Option<T>) -> Result<T> {
    f(shape).ok_or_else(|| Error::invalid(T::NAME, shape))
}

/// Shared positional path for types built from one shape or two scalars.
fn pair<T: Normalize>(args: &[Shape], build: fn(f64, f64) -> T) -> Result<T> {
    match args {
        [one] => T::normalize(one),
        [a, b] => match (a.as_scalar(), b.as_scalar()) {
            (Some(a), Some(b)) => Ok(build(a, b)),
            _ => Err(Error::invalid(T::NAME, ArgList(args))),
        },
        _ => Err(Error::invalid(T::NAME, ArgList(args))),
    }
}

impl Normalize for Point {
    const NAME: &'static str = "Point";

    fn normalize(shape: &Shape) -> Result<Self> {
        single(shape, point_of)
    }

    fn normalize_args(args: &[Shape]) -> Result<Self> {
        pair(args, |x, y| Self { x, y })
    }
}

impl Normalize for Size {
    const NAME: &'static str = "Size";

    fn normalize(shape: &Shape) -> Result<Self> {
        single(shape, size_of)
    }

    fn normalize_args(args: &[Shape]) -> Result<Self> {
        pair(args, |width, height| Self { width, height })
    }
}

impl Normalize for Offset {
    const NAME: &'static str = "Offset";

    fn normalize(shape: &Shape) -> Result<Self> {
        single(shape, offset_of)
    }

    fn normalize_args(args: &[Shape]) -> Result<Self> {
        pair(args, |horizontal, vertical| Self {
            horizontal,
            vertical,
        })
    }
}

impl Normalize for Rect {
    const NAME: &'static str = "Rect";

    fn normalize(shape: &Shape) -> Result<Self> {
        single(shape, rect_of)
    }

    /// One argument takes the single-argument path. Two arguments are an
    /// origin and a size, each point- or size-shaped; two bare scalars are
    /// rejected. Four arguments are `x, y, w, h`.
    fn normalize_args(args: &[Shape]) -> Result<Self> {
        let rect = match args {
            [one] => return Self::normalize(one),
            [origin, size] => point_of(origin)
                .zip(size_of(size))
                .map(|(o, s)| Self::from_parts(o, s)),
            [_, _, _, _] => scalars::<4>(args).map(|[x, y, w, h]| Self::new(x, y, w, h)),
            _ => None,
        };
        rect.ok_or_else(|| Error::invalid(Self::NAME, ArgList(args)))
    }
}

impl Normalize for EdgeInsets {
    const NAME: &'static str = "EdgeInsets";

    fn normalize(shape: &Shape) -> Result<Self> {
        single(shape, insets_of)
    }

    fn normalize_args(args: &[Shape]) -> Result<Self> {
        match args {
            [one] => Self::normalize(one),
            _ => scalars::<4>(args)
                .map(EdgeInsets::from)
                .ok_or_else(|| Error::invalid(Self::NAME, ArgList(args))),
        }
    }
}

/// Coerce a single argument into a `Point`.
pub fn point(a: impl ToShape) -> Result<Point> {
    Point::normalize(&a.to_shape())
}

/// Coerce a single argument into a `Size`.
pub fn size(a: impl ToShape) -> Result<Size> {
    Size::normalize(&a.to_shape())
}

/// Coerce a single argument into a `Rect`.
pub fn rect(a: impl ToShape) -> Result<Rect> {
    Rect::normalize(&a.to_shape())
}

/// Build a `Rect` from an origin and a size, each given in any point- or
/// size-shaped form.
pub fn rect_from(origin: impl ToShape, size: impl ToShape) -> Result<Rect> {
    Rect::normalize_args(&[origin.to_shape(), size.to_shape()])
}

/// Coerce a single argument into `EdgeInsets`.
pub fn edge_insets(a: impl ToShape) -> Result<EdgeInsets> {
    EdgeInsets::normalize(&a.to_shape())
}

/// Coerce a single argument into an `Offset`.
pub fn offset(a: impl ToShape) -> Result<Offset> {
    Offset::normalize(&a.to_shape())
}

#[cfg(test)]
mod tests {
    use std::fmt::Debug;

    use proptest::prelude::*;

    use super::*;
    use crate::{HasFrame, shapes};

    struct View {
        frame: Rect,
    }

    impl HasFrame for View {
        fn origin(&self) -> Point {
            self.frame.origin()
        }

        fn size(&self) -> Size {
            self.frame.size()
        }
    }

    fn rejects<T: Normalize + Debug>(r: Result<T>, target: &str, input: &str) {
        match r {
            Err(Error::InvalidArgument { target: t, input: i }) => {
                assert_eq!(t, target);
                assert_eq!(i, input);
            }
            Ok(v) => panic!("expected rejection, got {v:?}"),
        }
    }

    #[test]
    fn tpoint() -> Result<()> {
        assert_eq!(point([3, 4])?, Point::new(3, 4));
        assert_eq!(point(Point::new(3, 4))?, Point::new(3, 4));
        assert_eq!(point((3.5, 4))?, Point::new(3.5, 4));
        assert_eq!(Point::normalize_args(&shapes![3, 4])?, Point::new(3, 4));
        assert_eq!(Point::normalize_args(&shapes![[3, 4]])?, Point::new(3, 4));

        rejects(point("not-a-shape"), "Point", "\"not-a-shape\"");
        rejects(point(3), "Point", "3");
        rejects(point([1, 2, 3]), "Point", "[1, 2, 3]");
        rejects(point(Size::new(1, 2)), "Point", "Size(1, 2)");
        rejects(point(()), "Point", "null");
        rejects(Point::normalize_args(&shapes![1, "y"]), "Point", "1, \"y\"");
        rejects(Point::normalize_args(&shapes![]), "Point", "");
        Ok(())
    }

    #[test]
    fn tsize() -> Result<()> {
        assert_eq!(size([5, 6])?, Size::new(5, 6));
        assert_eq!(size(Size::new(5, 6))?, Size::new(5, 6));
        assert_eq!(Size::normalize_args(&shapes![5, 6])?, Size::new(5, 6));
        rejects(size(Point::new(5, 6)), "Size", "Point(5, 6)");
        rejects(Size::normalize_args(&shapes![1, 2, 3]), "Size", "1, 2, 3");
        Ok(())
    }

    #[test]
    fn trect() -> Result<()> {
        let want = Rect::new(1, 2, 3, 4);
        assert_eq!(rect(want)?, want);
        assert_eq!(rect([1, 2, 3, 4])?, want);
        assert_eq!(rect(([1, 2], [3, 4]))?, want);
        assert_eq!(rect((Point::new(1, 2), Size::new(3, 4)))?, want);
        assert_eq!(rect_from([1, 2], Size::new(3, 4))?, want);
        assert_eq!(rect_from(Point::new(1, 2), [3, 4])?, want);
        assert_eq!(Rect::normalize_args(&shapes![1, 2, 3, 4])?, want);
        assert_eq!(Rect::normalize_args(&shapes![[1, 2, 3, 4]])?, want);
        assert!(rect(Rect::Null)?.is_null());

        let view = View { frame: want };
        assert_eq!(rect(Shape::frame_of(&view))?, want);

        rejects(rect_from(1, 2), "Rect", "1, 2");
        rejects(
            Rect::normalize_args(&shapes![1, 2, 3]),
            "Rect",
            "1, 2, 3",
        );
        rejects(
            Rect::normalize_args(&shapes![1, 2, 3, 4, 5]),
            "Rect",
            "1, 2, 3, 4, 5",
        );
        rejects(rect([1, 2, 3]), "Rect", "[1, 2, 3]");
        rejects(rect(([1, 2], 3)), "Rect", "[[1, 2], 3]");
        rejects(rect(Point::new(1, 2)), "Rect", "Point(1, 2)");
        rejects(rect("frame"), "Rect", "\"frame\"");
        Ok(())
    }

    #[test]
    fn tinsets() -> Result<()> {
        let want = EdgeInsets::new(1, 2, 3, 4);
        assert_eq!(edge_insets([1, 2, 3, 4])?, want);
        assert_eq!(edge_insets(want)?, want);
        assert_eq!(edge_insets(5)?, EdgeInsets::uniform(5));
        assert_eq!(EdgeInsets::normalize_args(&shapes![1, 2, 3, 4])?, want);
        assert_eq!(EdgeInsets::normalize_args(&shapes![2])?, EdgeInsets::uniform(2));
        rejects(edge_insets([1, 2]), "EdgeInsets", "[1, 2]");
        rejects(
            EdgeInsets::normalize_args(&shapes![1, 2]),
            "EdgeInsets",
            "1, 2",
        );
        Ok(())
    }

    #[test]
    fn toffset() -> Result<()> {
        let want = Offset::new(1, -1);
        assert_eq!(offset([1, -1])?, want);
        assert_eq!(offset(want)?, want);
        assert_eq!(Offset::normalize_args(&shapes![1, -1])?, want);
        rejects(offset(Point::new(1, -1)), "Offset", "Point(1, -1)");
        rejects(offset(1), "Offset", "1");
        Ok(())
    }

    proptest! {
        #[test]
        fn equivalent_shapes_agree(x in -1e6f64..1e6, y in -1e6f64..1e6) {
            let p = Point::new(x, y);
            prop_assert_eq!(point([x, y]).unwrap(), p);
            prop_assert_eq!(point((x, y)).unwrap(), p);
            prop_assert_eq!(point(vec![x, y]).unwrap(), p);
            prop_assert_eq!(point(p).unwrap(), p);
            prop_assert_eq!(Point::normalize_args(&shapes![x, y]).unwrap(), p);
        }

        #[test]
        fn rect_paths_agree(
            x in -1e6f64..1e6,
            y in -1e6f64..1e6,
            w in 0f64..1e6,
            h in 0f64..1e6,
        ) {
            let r = Rect::new(x, y, w, h);
            prop_assert_eq!(rect([x, y, w, h]).unwrap(), r);
            prop_assert_eq!(rect(([x, y], [w, h])).unwrap(), r);
            prop_assert_eq!(rect_from([x, y], [w, h]).unwrap(), r);
            prop_assert_eq!(Rect::normalize_args(&shapes![x, y, w, h]).unwrap(), r);
            prop_assert_eq!(Point::new(x, y) + Size::new(w, h), r);
            prop_assert_eq!(Size::new(w, h) + Point::new(x, y), r);
        }
    }
}
