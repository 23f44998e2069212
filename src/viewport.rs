//! Logical-to-physical coordinate mapping
//!
//! The sim and UI layout live in the fixed 640x360 logical space; this module
//! fits that space into whatever container the page provides, preserving the
//! aspect ratio (letterbox/pillarbox), and maps rects out and pointer
//! positions back in. Recomputed on every resize; same input, same output.

use glam::Vec2;

use crate::consts::{BASE_HEIGHT, BASE_WIDTH};
use crate::sim::Rect;

/// Derived geometry for the current canvas size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Physical canvas width in pixels
    pub width: f32,
    /// Physical canvas height in pixels
    pub height: f32,
    /// Uniform logical-to-physical scale factor
    pub scale: f32,
}

impl Viewport {
    /// Fit the base aspect ratio inside the container
    pub fn fit(container_w: f32, container_h: f32) -> Self {
        let aspect = BASE_WIDTH / BASE_HEIGHT;
        let (width, height) = if container_w / container_h > aspect {
            (container_h * aspect, container_h)
        } else {
            (container_w, container_w / aspect)
        };
        Self {
            width,
            height,
            scale: width / BASE_WIDTH,
        }
    }

    /// Scale a logical length to pixels
    #[inline]
    pub fn px(&self, logical: f32) -> f32 {
        logical * self.scale
    }

    /// Map a logical rect to a pixel rect
    pub fn to_screen_rect(&self, r: Rect) -> Rect {
        Rect {
            pos: r.pos * self.scale,
            size: r.size * self.scale,
        }
    }

    /// Map a pixel position on the canvas back into logical space
    pub fn to_logical(&self, x: f32, y: f32) -> Vec2 {
        Vec2::new(x / self.scale, y / self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_container_is_height_limited() {
        // 16:9 base inside a very wide strip: height wins
        let vp = Viewport::fit(2000.0, 360.0);
        assert_eq!(vp.height, 360.0);
        assert_eq!(vp.width, 640.0);
        assert_eq!(vp.scale, 1.0);
    }

    #[test]
    fn tall_container_is_width_limited() {
        let vp = Viewport::fit(320.0, 1000.0);
        assert_eq!(vp.width, 320.0);
        assert_eq!(vp.height, 180.0);
        assert_eq!(vp.scale, 0.5);
    }

    #[test]
    fn exact_aspect_fills_the_container() {
        let vp = Viewport::fit(1280.0, 720.0);
        assert_eq!(vp.width, 1280.0);
        assert_eq!(vp.height, 720.0);
        assert_eq!(vp.scale, 2.0);
    }

    #[test]
    fn fit_is_idempotent() {
        let a = Viewport::fit(777.0, 431.0);
        let b = Viewport::fit(777.0, 431.0);
        assert_eq!(a, b);
    }

    #[test]
    fn screen_and_logical_round_trip() {
        let vp = Viewport::fit(1280.0, 720.0);
        let r = Rect::new(20.0, 310.0, 100.0, 50.0);
        let s = vp.to_screen_rect(r);
        assert_eq!(s, Rect::new(40.0, 620.0, 200.0, 100.0));

        let back = vp.to_logical(s.pos.x, s.pos.y);
        assert!((back.x - r.pos.x).abs() < 1e-4);
        assert!((back.y - r.pos.y).abs() < 1e-4);
    }

    #[test]
    fn aspect_ratio_is_preserved() {
        for (w, h) in [(100.0, 900.0), (3000.0, 50.0), (640.0, 360.0)] {
            let vp = Viewport::fit(w, h);
            let ratio = vp.width / vp.height;
            assert!((ratio - BASE_WIDTH / BASE_HEIGHT).abs() < 1e-4);
            assert!(vp.width <= w + 1e-3);
            assert!(vp.height <= h + 1e-3);
        }
    }
}
