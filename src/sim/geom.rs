//! Axis-aligned rectangles and the two overlap predicates the game needs
//!
//! Collision between entities uses strict inequalities: boxes that merely
//! share an edge or corner do not collide. UI hit testing is the opposite,
//! a point on a button's border still counts as inside.

use glam::Vec2;

/// An axis-aligned rectangle in logical units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Inclusive point-in-rect test (UI hit boxes)
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.left() && p.x <= self.right() && p.y >= self.top() && p.y <= self.bottom()
    }
}

/// Strict AABB overlap: touching edges do not count
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    a.left() < b.right() && a.right() > b.left() && a.top() < b.bottom() && a.bottom() > b.top()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_is_strict_on_shared_edge() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let touching = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!rects_overlap(&a, &touching));
        assert!(!rects_overlap(&touching, &a));
    }

    #[test]
    fn overlap_is_strict_on_shared_corner() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let corner = Rect::new(10.0, 10.0, 5.0, 5.0);
        assert!(!rects_overlap(&a, &corner));
        assert!(!rects_overlap(&corner, &a));
    }

    #[test]
    fn one_unit_overlap_collides_symmetrically() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(9.0, 9.0, 10.0, 10.0);
        assert!(rects_overlap(&a, &b));
        assert!(rects_overlap(&b, &a));
    }

    #[test]
    fn containment_overlaps() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 10.0, 10.0);
        assert!(rects_overlap(&outer, &inner));
        assert!(rects_overlap(&inner, &outer));
    }

    #[test]
    fn point_containment_is_inclusive() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert!(r.contains(Vec2::new(10.0, 20.0)));
        assert!(r.contains(Vec2::new(110.0, 70.0)));
        assert!(r.contains(Vec2::new(60.0, 45.0)));
        assert!(!r.contains(Vec2::new(9.9, 45.0)));
        assert!(!r.contains(Vec2::new(60.0, 70.1)));
    }
}
