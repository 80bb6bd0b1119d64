//! Axis-aligned rectangles
//!
//! World-space bounding boxes for the player and static obstacles. Rect
//! overlap is only the broad phase; the fine-grained test goes through the
//! per-pixel masks in [`mask`](super::mask).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in world space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    /// Width and height must be positive
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        debug_assert!(w > 0.0 && h > 0.0, "degenerate rect {w}x{h}");
        Self { x, y, w, h }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Top-left corner
    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Move the bottom edge to `y`, keeping the size
    pub fn set_bottom(&mut self, y: f32) {
        self.y = y - self.h;
    }

    /// Move the top edge to `y`, keeping the size
    pub fn set_top(&mut self, y: f32) {
        self.y = y;
    }

    /// Resize in place, keeping the top-left corner
    pub fn set_size(&mut self, w: f32, h: f32) {
        debug_assert!(w > 0.0 && h > 0.0, "degenerate rect {w}x{h}");
        self.w = w;
        self.h = h;
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }

    /// Broad-phase overlap test; touching edges do not count
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 60.0);
    }

    #[test]
    fn test_overlaps() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&Rect::new(5.0, 5.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Rect::new(20.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        // Standing exactly on a tile must not register as a collision
        let player = Rect::new(0.0, 0.0, 10.0, 10.0);
        let floor = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!player.overlaps(&floor));
    }

    #[test]
    fn test_set_bottom_and_top() {
        let mut r = Rect::new(0.0, 0.0, 10.0, 16.0);
        r.set_bottom(100.0);
        assert_eq!(r.y, 84.0);
        assert_eq!(r.bottom(), 100.0);
        r.set_top(50.0);
        assert_eq!(r.y, 50.0);
    }
}
