/// A directionless interval on a single axis. Rect operations decompose into
/// one span per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    /// The offset of this span.
    pub off: f64,
    /// The length of this span. Never negative.
    pub len: f64,
}

impl Span {
    /// Construct a span from an offset and a possibly negative length,
    /// flipping it so the length is non-negative.
    pub fn new(off: f64, len: f64) -> Self {
        if len < 0.0 {
            Self {
                off: off + len,
                len: -len,
            }
        } else {
            Self { off, len }
        }
    }

    /// The far limit of the span.
    pub fn far(&self) -> f64 {
        self.off + self.len
    }

    /// Return a span that encloses this span and another, whether or not they
    /// overlap.
    pub fn enclose(&self, other: &Self) -> Self {
        let off = self.off.min(other.off);
        Self {
            off,
            len: self.far().max(other.far()) - off,
        }
    }

    /// Does other lie completely within this span? Both ends are inclusive.
    pub fn contains(&self, other: &Self) -> bool {
        self.off <= other.off && self.far() >= other.far()
    }

    /// Does the value fall inside the half-open interval `[off, far)`?
    pub fn contains_value(&self, v: f64) -> bool {
        self.off <= v && v < self.far()
    }

    /// Return the overlap between this span and other. The span returned
    /// always has a non-zero length, so abutting spans do not intersect.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let off = self.off.max(other.off);
        let far = self.far().min(other.far());
        if off < far {
            Some(Self {
                off,
                len: far - off,
            })
        } else {
            None
        }
    }
}
