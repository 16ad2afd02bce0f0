use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use super::{EdgeInsets, HasFrame, Point, Size, span::Span};

/// Origin coordinate reported by the null rect.
pub const NULL_ORIGIN: f64 = f64::INFINITY;

/// Width and height reported by the infinite rect.
pub const INFINITE_EXTENT: f64 = f64::MAX;

/// Origin coordinate reported by the infinite rect.
const INFINITE_ORIGIN: f64 = -f64::MAX / 2.0;

/// A rectangle.
///
/// Degenerate results are represented by the `Null` and `Infinite` variants
/// rather than by magic coordinates. Building a rect from raw parts that carry
/// the sentinel values (see [`NULL_ORIGIN`] and [`INFINITE_EXTENT`]) produces
/// the matching variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawRect")]
pub enum Rect {
    /// An ordinary rectangle.
    Finite {
        /// Top-left corner.
        origin: Point,
        /// Extent.
        size: Size,
    },
    /// The empty set, produced by intersecting disjoint rects.
    Null,
    /// The rect that contains every finite point.
    Infinite,
}

/// Wire form of [`Rect`]. Decoding goes through [`Rect::from_parts`] so that
/// sentinel parts fold into their variants.
#[derive(Deserialize)]
enum RawRect {
    /// Raw origin and extent.
    Finite {
        /// Top-left corner.
        origin: Point,
        /// Extent.
        size: Size,
    },
    /// The null rect.
    Null,
    /// The infinite rect.
    Infinite,
}

impl From<RawRect> for Rect {
    fn from(raw: RawRect) -> Self {
        match raw {
            RawRect::Finite { origin, size } => Self::from_parts(origin, size),
            RawRect::Null => Self::Null,
            RawRect::Infinite => Self::Infinite,
        }
    }
}

/// Something a rect can be tested against for containment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Probe {
    /// A single location.
    Point(Point),
    /// A whole rectangle.
    Rect(Rect),
}

impl From<Point> for Probe {
    fn from(p: Point) -> Self {
        Self::Point(p)
    }
}

impl From<Rect> for Probe {
    fn from(r: Rect) -> Self {
        Self::Rect(r)
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::zero()
    }
}

impl Rect {
    /// Construct a rect from four scalars.
    pub fn new(x: impl Into<f64>, y: impl Into<f64>, w: impl Into<f64>, h: impl Into<f64>) -> Self {
        Self::from_parts(Point::new(x, y), Size::new(w, h))
    }

    /// Construct a rect from an origin and a size, folding sentinel values into
    /// the `Null` and `Infinite` variants.
    pub fn from_parts(origin: Point, size: Size) -> Self {
        if origin.x == NULL_ORIGIN || origin.y == NULL_ORIGIN {
            Self::Null
        } else if size.width == INFINITE_EXTENT && size.height == INFINITE_EXTENT {
            Self::Infinite
        } else {
            Self::Finite { origin, size }
        }
    }

    /// Read the frame of a frame-bearing object.
    pub fn from_frame(f: &impl HasFrame) -> Self {
        Self::from_parts(f.origin(), f.size())
    }

    /// A zero-sized rect at the origin.
    pub fn zero() -> Self {
        Self::Finite {
            origin: Point::zero(),
            size: Size::zero(),
        }
    }

    /// The top-left corner. The null rect reports `(NULL_ORIGIN, NULL_ORIGIN)`.
    pub fn origin(&self) -> Point {
        match self {
            Self::Finite { origin, .. } => *origin,
            Self::Null => Point::new(NULL_ORIGIN, NULL_ORIGIN),
            Self::Infinite => Point::new(INFINITE_ORIGIN, INFINITE_ORIGIN),
        }
    }

    /// The extent. The null rect reports a zero size.
    pub fn size(&self) -> Size {
        match self {
            Self::Finite { size, .. } => *size,
            Self::Null => Size::zero(),
            Self::Infinite => Size::new(INFINITE_EXTENT, INFINITE_EXTENT),
        }
    }

    /// Horizontal extent.
    pub fn width(&self) -> f64 {
        self.size().width
    }

    /// Vertical extent.
    pub fn height(&self) -> f64 {
        self.size().height
    }

    /// `origin.x`
    pub fn left(&self) -> f64 {
        self.origin().x
    }

    /// `origin.x + width`
    pub fn right(&self) -> f64 {
        self.origin().x + self.width()
    }

    /// `origin.y`
    pub fn top(&self) -> f64 {
        self.origin().y
    }

    /// `origin.y + height`
    pub fn bottom(&self) -> f64 {
        self.origin().y + self.height()
    }

    /// The midpoint of both axes.
    pub fn center(&self) -> Point {
        let o = self.origin();
        let s = self.size();
        Point::new(o.x + s.width / 2.0, o.y + s.height / 2.0)
    }

    /// True if the rect has no area. The null rect is empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Finite { size, .. } => size.width == 0.0 || size.height == 0.0,
            Self::Null => true,
            Self::Infinite => false,
        }
    }

    /// True for the null rect.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// True for the infinite rect.
    pub fn is_infinite(&self) -> bool {
        matches!(self, Self::Infinite)
    }

    /// Return an equivalent rect with a non-negative width and height.
    pub fn standardize(&self) -> Self {
        match self {
            Self::Finite { origin, size } => {
                let h = Span::new(origin.x, size.width);
                let v = Span::new(origin.y, size.height);
                Self::from_spans(h, v)
            }
            other => *other,
        }
    }

    /// The horizontal span of this rect, standardized.
    fn hspan(&self) -> Span {
        Span::new(self.left(), self.width())
    }

    /// The vertical span of this rect, standardized.
    fn vspan(&self) -> Span {
        Span::new(self.top(), self.height())
    }

    /// Rebuild a rect from one span per axis.
    fn from_spans(h: Span, v: Span) -> Self {
        Self::from_parts(Point::new(h.off, v.off), Size::new(h.len, v.len))
    }

    /// The smallest rect enclosing both rects, whether or not they overlap.
    /// The null rect is the identity, the infinite rect absorbs.
    pub fn union(&self, other: &Self) -> Self {
        match (self, other) {
            (Self::Null, r) | (r, Self::Null) => r.standardize(),
            (Self::Infinite, _) | (_, Self::Infinite) => Self::Infinite,
            _ => Self::from_spans(
                self.hspan().enclose(&other.hspan()),
                self.vspan().enclose(&other.vspan()),
            ),
        }
    }

    /// Move the origin by `delta`, keeping the size.
    pub fn translate(&self, delta: Point) -> Self {
        match self {
            Self::Finite { origin, size } => Self::from_parts(*origin + delta, *size),
            other => *other,
        }
    }

    /// Expand symmetrically by `by.width` on the left and right and by
    /// `by.height` on the top and bottom. Negative amounts shrink.
    pub fn grow(&self, by: Size) -> Self {
        match self {
            Self::Finite { origin, size } => Self::from_parts(
                Point::new(origin.x - by.width, origin.y - by.height),
                Size::new(size.width + 2.0 * by.width, size.height + 2.0 * by.height),
            ),
            other => *other,
        }
    }

    /// Shrink symmetrically; the inverse of `grow`.
    pub fn inset(&self, by: Size) -> Self {
        self.grow(Size::new(-by.width, -by.height))
    }

    /// Shrink each edge independently.
    pub fn inset_edges(&self, insets: EdgeInsets) -> Self {
        match self {
            Self::Finite { origin, size } => Self::from_parts(
                Point::new(origin.x + insets.left, origin.y + insets.top),
                Size::new(
                    size.width - insets.left - insets.right,
                    size.height - insets.top - insets.bottom,
                ),
            ),
            other => *other,
        }
    }

    /// The overlapping region of two rects. Disjoint, abutting or empty
    /// operands produce the null rect.
    pub fn intersection(&self, other: &Self) -> Self {
        match (self, other) {
            (Self::Null, _) | (_, Self::Null) => Self::Null,
            (Self::Infinite, Self::Infinite) => Self::Infinite,
            (Self::Infinite, r) | (r, Self::Infinite) => {
                if r.is_empty() {
                    Self::Null
                } else {
                    r.standardize()
                }
            }
            _ => match (
                self.hspan().intersection(&other.hspan()),
                self.vspan().intersection(&other.vspan()),
            ) {
                (Some(h), Some(v)) => Self::from_spans(h, v),
                _ => Self::Null,
            },
        }
    }

    /// Do the two rects share any area?
    pub fn intersects(&self, other: &Self) -> bool {
        !self.intersection(other).is_null()
    }

    /// Does the point fall within this rect? Same rule as `contains_point`.
    pub fn intersects_point(&self, p: Point) -> bool {
        self.contains_point(p)
    }

    /// Does this rectangle contain the point? Bounds are half-open: the left
    /// and top edges are inside, the right and bottom edges are not.
    pub fn contains_point(&self, p: Point) -> bool {
        match self {
            Self::Finite { .. } => {
                self.hspan().contains_value(p.x) && self.vspan().contains_value(p.y)
            }
            Self::Null => false,
            Self::Infinite => p.x.is_finite() && p.y.is_finite(),
        }
    }

    /// Does this rectangle completely enclose the other? Edges may coincide.
    pub fn contains_rect(&self, other: &Self) -> bool {
        match (self, other) {
            (_, Self::Null) | (Self::Infinite, _) => true,
            (Self::Null, _) | (_, Self::Infinite) => false,
            _ => {
                self.hspan().contains(&other.hspan()) && self.vspan().contains(&other.vspan())
            }
        }
    }

    /// Containment test dispatching on the probe type.
    pub fn contains(&self, probe: impl Into<Probe>) -> bool {
        match probe.into() {
            Probe::Point(p) => self.contains_point(p),
            Probe::Rect(r) => self.contains_rect(&r),
        }
    }
}

/// Bounding-box union.
impl Add for Rect {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.union(&other)
    }
}

/// Translation.
impl Add<Point> for Rect {
    type Output = Self;

    fn add(self, delta: Point) -> Self {
        self.translate(delta)
    }
}

/// Symmetric growth.
impl Add<Size> for Rect {
    type Output = Self;

    fn add(self, by: Size) -> Self {
        self.grow(by)
    }
}

/// Symmetric inset.
impl Sub<Size> for Rect {
    type Output = Self;

    fn sub(self, by: Size) -> Self {
        self.inset(by)
    }
}

impl From<(Point, Size)> for Rect {
    fn from(v: (Point, Size)) -> Self {
        Self::from_parts(v.0, v.1)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn sentinels_fold_into_variants() {
        assert!(Rect::new(NULL_ORIGIN, 0, 0, 0).is_null());
        assert!(Rect::new(3, NULL_ORIGIN, 5, 5).is_null());
        assert!(Rect::new(0, 0, INFINITE_EXTENT, INFINITE_EXTENT).is_infinite());
        assert!(!Rect::new(0, 0, INFINITE_EXTENT, 1).is_infinite());

        assert_eq!(Rect::Null.origin(), Point::new(NULL_ORIGIN, NULL_ORIGIN));
        assert_eq!(Rect::Null.size(), Size::zero());
        assert_eq!(Rect::Infinite.width(), INFINITE_EXTENT);
        assert_eq!(Rect::Infinite.center(), Point::zero());
        assert_eq!(Rect::from_parts(Rect::Null.origin(), Rect::Null.size()), Rect::Null);
        assert_eq!(
            Rect::from_parts(Rect::Infinite.origin(), Rect::Infinite.size()),
            Rect::Infinite
        );
    }

    #[test]
    fn predicates() {
        assert!(Rect::zero().is_empty());
        assert!(Rect::new(1, 1, 0, 5).is_empty());
        assert!(!Rect::new(1, 1, 1, 5).is_empty());
        assert!(Rect::Null.is_empty());
        assert!(!Rect::Infinite.is_empty());
        assert!(!Rect::zero().is_null());
        assert!(!Rect::zero().is_infinite());
    }

    #[test]
    fn edges() {
        let r = Rect::new(10, 20, 4, 6);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 14.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 26.0);
        assert_eq!(r.width(), 4.0);
        assert_eq!(r.height(), 6.0);
        assert_eq!(r.center(), Point::new(12, 23));
    }

    #[test]
    fn union() {
        let a = Rect::new(0, 0, 2, 2);
        let b = Rect::new(5, 5, 1, 1);
        assert_eq!(a + b, Rect::new(0, 0, 6, 6));
        assert_eq!(b + a, Rect::new(0, 0, 6, 6));
        assert_eq!(a + Rect::Null, a);
        assert_eq!(Rect::Null + a, a);
        assert_eq!(a + Rect::Infinite, Rect::Infinite);
        assert_eq!(Rect::Null + Rect::Null, Rect::Null);
    }

    #[test]
    fn translate_and_grow() {
        let r = Rect::new(10, 10, 4, 4);
        assert_eq!(r + Point::new(1, -2), Rect::new(11, 8, 4, 4));
        assert_eq!(r + Size::new(1, 1), Rect::new(9, 9, 6, 6));
        assert_eq!(r - Size::new(1, 1), Rect::new(11, 11, 2, 2));
        assert_eq!(Rect::Null + Point::new(1, 1), Rect::Null);
        assert_eq!(Rect::Infinite + Size::new(1, 1), Rect::Infinite);
    }

    #[test]
    fn inset_edges() {
        let r = Rect::new(0, 0, 10, 10);
        assert_eq!(
            r.inset_edges(EdgeInsets::new(1, 2, 3, 4)),
            Rect::new(2, 1, 4, 6)
        );
        assert_eq!(r.inset_edges(EdgeInsets::zero()), r);
    }

    #[test]
    fn intersection() {
        let a = Rect::new(0, 0, 10, 10);
        assert_eq!(a.intersection(&Rect::new(5, 5, 10, 10)), Rect::new(5, 5, 5, 5));
        assert_eq!(a.intersection(&Rect::new(2, 2, 2, 2)), Rect::new(2, 2, 2, 2));
        assert!(Rect::new(0, 0, 1, 1)
            .intersection(&Rect::new(10, 10, 1, 1))
            .is_null());
        // Abutting rects share no area.
        assert!(a.intersection(&Rect::new(10, 0, 5, 5)).is_null());
        assert!(a.intersection(&Rect::new(2, 2, 0, 0)).is_null());
        assert_eq!(a.intersection(&Rect::Infinite), a);
        assert!(a.intersection(&Rect::Null).is_null());
        assert!(Rect::Infinite.intersection(&Rect::Infinite).is_infinite());

        assert!(a.intersects(&Rect::new(9, 9, 5, 5)));
        assert!(!a.intersects(&Rect::new(10, 10, 5, 5)));
    }

    #[test]
    fn negative_extents_are_standardized() {
        let r = Rect::new(10, 10, -4, -4);
        assert_eq!(r.standardize(), Rect::new(6, 6, 4, 4));
        assert_eq!(r + Rect::new(0, 0, 1, 1), Rect::new(0, 0, 10, 10));
        assert!(r.contains_point(Point::new(7, 7)));
    }

    #[test]
    fn contains() {
        let r = Rect::new(10, 10, 10, 10);
        assert!(r.contains_point(Point::new(10, 10)));
        assert!(!r.contains_point(Point::new(9, 10)));
        assert!(!r.contains_point(Point::new(20, 20)));
        assert!(r.contains_point(Point::new(19.999, 19.999)));
        assert!(!r.contains_point(Point::new(20, 15)));
        assert!(!r.contains_point(Point::new(15, 20)));
        assert!(r.intersects_point(Point::new(15, 15)));

        assert!(r.contains(Rect::new(10, 10, 1, 1)));
        assert!(r.contains(r));
        assert!(!r.contains(Rect::new(15, 15, 10, 1)));
        assert!(r.contains(Point::new(12, 12)));
        assert!(r.contains(Rect::Null));
        assert!(!r.contains(Rect::Infinite));
        assert!(Rect::Infinite.contains(r));
        assert!(!Rect::Null.contains(r));
        assert!(!Rect::Null.contains_point(Point::zero()));
        assert!(Rect::Infinite.contains_point(Point::new(-1e300, 1e300)));
    }

    /// Integer-valued coordinates keep float arithmetic exact.
    fn coord() -> impl Strategy<Value = f64> {
        (-1000i32..1000).prop_map(f64::from)
    }

    fn extent() -> impl Strategy<Value = f64> {
        (0i32..1000).prop_map(f64::from)
    }

    prop_compose! {
        fn finite_rect()(x in coord(), y in coord(), w in extent(), h in extent()) -> Rect {
            Rect::new(x, y, w, h)
        }
    }

    proptest! {
        #[test]
        fn union_commutes_and_bounds(a in finite_rect(), b in finite_rect()) {
            let u = a + b;
            prop_assert_eq!(u, b + a);
            prop_assert_eq!(u.left(), a.left().min(b.left()));
            prop_assert_eq!(u.top(), a.top().min(b.top()));
            prop_assert_eq!(u.right(), a.right().max(b.right()));
            prop_assert_eq!(u.bottom(), a.bottom().max(b.bottom()));
            prop_assert!(u.contains_rect(&a));
            prop_assert!(u.contains_rect(&b));
        }

        #[test]
        fn translate_by_zero_is_identity(r in finite_rect()) {
            prop_assert_eq!(r + Point::zero(), r);
        }

        #[test]
        fn grow_then_inset(r in finite_rect(), w in extent(), h in extent()) {
            let g = r + Size::new(w, h);
            prop_assert_eq!(g.size(), Size::new(r.width() + 2.0 * w, r.height() + 2.0 * h));
            prop_assert_eq!(g.origin(), Point::new(r.left() - w, r.top() - h));
            prop_assert_eq!(g - Size::new(w, h), r);
        }

        #[test]
        fn half_open_containment(r in finite_rect(), fx in 0.0f64..1.0, fy in 0.0f64..1.0) {
            let p = Point::new(r.left() + fx * r.width(), r.top() + fy * r.height());
            let inside = p.x < r.right() && p.y < r.bottom();
            prop_assert_eq!(r.contains_point(p), inside);
            prop_assert!(!r.contains_point(Point::new(r.right(), r.top())));
            prop_assert!(!r.contains_point(Point::new(r.left(), r.bottom())));
        }

        #[test]
        fn intersection_is_contained(a in finite_rect(), b in finite_rect()) {
            let i = a.intersection(&b);
            prop_assert_eq!(i, b.intersection(&a));
            if !i.is_null() {
                prop_assert!(a.contains_rect(&i));
                prop_assert!(b.contains_rect(&i));
                prop_assert!(a.intersects(&b));
            }
        }
    }
}
