//! Interactive frame nudging.
//!
//! An [`Adjuster`] wraps a frame-bearing object and moves or resizes its frame
//! by small amounts, remembering the frame it started with so that every
//! change can be undone at once.

use super::{
    FrameMut, Point, Rect, Size,
    error::Result,
    normalize::{point, size},
    shape::ToShape,
};

/// Moves and resizes the frame of a borrowed target.
pub struct Adjuster<'a, T: FrameMut> {
    /// The object being adjusted.
    target: &'a mut T,
    /// Frame recorded when adjustment started.
    restore: Rect,
}

impl<'a, T: FrameMut> Adjuster<'a, T> {
    /// Start adjusting `target`, recording its current frame.
    pub fn new(target: &'a mut T) -> Self {
        let restore = target.frame();
        Self { target, restore }
    }

    /// The target's current frame.
    pub fn frame(&self) -> Rect {
        self.target.frame()
    }

    /// The frame that `restore` will return to.
    pub fn saved(&self) -> Rect {
        self.restore
    }

    /// Apply `f` to the current origin and size and store the result.
    fn update(&mut self, f: impl FnOnce(Point, Size) -> (Point, Size)) -> &mut Self {
        let current = self.target.frame();
        let (origin, size) = f(current.origin(), current.size());
        let next = Rect::from_parts(origin, size);
        tracing::trace!("adjust frame {:?} -> {:?}", current, next);
        self.target.set_frame(next);
        self
    }

    /// Move left by `v`.
    pub fn left(&mut self, v: f64) -> &mut Self {
        self.right(-v)
    }

    /// Move right by `v`.
    pub fn right(&mut self, v: f64) -> &mut Self {
        self.update(|o, s| (o.scroll(v, 0.0), s))
    }

    /// Move up by `v`.
    pub fn up(&mut self, v: f64) -> &mut Self {
        self.down(-v)
    }

    /// Move down by `v`.
    pub fn down(&mut self, v: f64) -> &mut Self {
        self.update(|o, s| (o.scroll(0.0, v), s))
    }

    /// Narrow by `v`.
    pub fn thinner(&mut self, v: f64) -> &mut Self {
        self.wider(-v)
    }

    /// Widen by `v`.
    pub fn wider(&mut self, v: f64) -> &mut Self {
        self.update(|o, s| (o, s + Size::new(v, 0.0)))
    }

    /// Shorten by `v`.
    pub fn shorter(&mut self, v: f64) -> &mut Self {
        self.taller(-v)
    }

    /// Heighten by `v`.
    pub fn taller(&mut self, v: f64) -> &mut Self {
        self.update(|o, s| (o, s + Size::new(0.0, v)))
    }

    /// Place the origin at a point-shaped position.
    pub fn move_to(&mut self, position: impl ToShape) -> Result<&mut Self> {
        let position = point(position)?;
        Ok(self.update(|_, s| (position, s)))
    }

    /// Translate the origin by a point-shaped delta.
    pub fn delta_to(&mut self, delta: impl ToShape) -> Result<&mut Self> {
        let delta = point(delta)?;
        Ok(self.update(|o, s| (o + delta, s)))
    }

    /// Replace the size with a size-shaped value.
    pub fn resize(&mut self, extent: impl ToShape) -> Result<&mut Self> {
        let extent = size(extent)?;
        Ok(self.update(|o, _| (o, extent)))
    }

    /// Return the target to the frame it had when adjustment started.
    pub fn restore(&mut self) -> &mut Self {
        tracing::trace!("restore frame {:?}", self.restore);
        self.target.set_frame(self.restore);
        self
    }
}
