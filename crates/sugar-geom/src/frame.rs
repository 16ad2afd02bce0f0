use super::{Point, Rect, Size};

/// Anything that exposes a frame: an origin and a size. Host view or layer
/// types implement this to be accepted wherever a rect is expected.
pub trait HasFrame {
    /// Top-left corner of the frame.
    fn origin(&self) -> Point;

    /// Extent of the frame.
    fn size(&self) -> Size;

    /// The frame as a rect.
    fn frame(&self) -> Rect {
        Rect::from_parts(self.origin(), self.size())
    }
}

/// A frame-bearing object whose frame can be replaced.
pub trait FrameMut: HasFrame {
    /// Replace the frame.
    fn set_frame(&mut self, frame: Rect);
}

impl HasFrame for Rect {
    fn origin(&self) -> Point {
        Self::origin(self)
    }

    fn size(&self) -> Size {
        Self::size(self)
    }

    fn frame(&self) -> Rect {
        *self
    }
}

impl FrameMut for Rect {
    fn set_frame(&mut self, frame: Rect) {
        *self = frame;
    }
}
