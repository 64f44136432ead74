//! Circle and rectangle primitives
//!
//! The bounding circle is the canonical collision shape for every entity;
//! the rectangle only backs screen-space hit tests (turret picking) and the
//! minimap camera box.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (top-left origin, like screen space)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
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

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    pub fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.left(), self.top()),
            Vec2::new(self.right(), self.top()),
            Vec2::new(self.right(), self.bottom()),
            Vec2::new(self.left(), self.bottom()),
        ]
    }
}

/// A circle in world coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

impl Circle {
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        Self { x, y, radius }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Two circles collide iff their centers are strictly closer than the
    /// sum of radii. Touching circles do not count.
    pub fn intersects(&self, other: &Circle) -> bool {
        self.center().distance(other.center()) < self.radius + other.radius
    }

    /// Closed containment: a point exactly on the edge is inside.
    pub fn contains_point(&self, point: Vec2) -> bool {
        (point - self.center()).length() <= self.radius
    }

    /// Two-stage circle/rectangle overlap: exact corner containment first,
    /// then an axis-separation fallback on the circle's bounding extent.
    pub fn intersects_rect(&self, rect: &Rect) -> bool {
        for corner in rect.corners() {
            if self.contains_point(corner) {
                return true;
            }
        }

        if self.x - self.radius > rect.right() || self.x + self.radius < rect.left() {
            return false;
        }
        if self.y - self.radius > rect.bottom() || self.y + self.radius < rect.top() {
            return false;
        }

        true
    }

    /// Point at `radius * percent_from_edge` from the center along `angle`.
    ///
    /// X is measured with sine and Y with cosine - rotated 90° from the
    /// usual polar mapping. The spawn ring and turret attachment points are
    /// laid out in this convention.
    pub fn position_on_edge(&self, angle: f32, percent_from_edge: f32) -> Vec2 {
        let r = self.radius * percent_from_edge;
        Vec2::new(self.x + r * angle.sin(), self.y + r * angle.cos())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::PI;

    #[test]
    fn test_circle_intersects_overlapping() {
        // Distance 9 < radii sum 10: they DO intersect
        let a = Circle::new(0.0, 0.0, 5.0);
        let b = Circle::new(9.0, 0.0, 5.0);
        assert!(a.intersects(&b));
    }

    #[test]
    fn test_circle_touching_is_not_intersecting() {
        // Distance exactly equal to radii sum: strict < says no
        let a = Circle::new(0.0, 0.0, 5.0);
        let b = Circle::new(10.0, 0.0, 5.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_circle_disjoint() {
        let a = Circle::new(0.0, 0.0, 5.0);
        let b = Circle::new(20.0, 0.0, 5.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_contains_point_edge_is_closed() {
        let c = Circle::new(0.0, 0.0, 5.0);
        assert!(c.contains_point(Vec2::new(5.0, 0.0)));
        assert!(c.contains_point(Vec2::ZERO));
        assert!(!c.contains_point(Vec2::new(5.01, 0.0)));
    }

    #[test]
    fn test_position_on_edge_uses_sin_cos_mapping() {
        let c = Circle::new(0.0, 0.0, 100.0);
        // angle 0: sin(0)=0, cos(0)=1 -> (0, 100), NOT (100, 0)
        let p = c.position_on_edge(0.0, 1.0);
        assert!(p.x.abs() < 1e-3);
        assert!((p.y - 100.0).abs() < 1e-3);
        // angle π/2: (100, 0)
        let p = c.position_on_edge(PI / 2.0, 1.0);
        assert!((p.x - 100.0).abs() < 1e-3);
        assert!(p.y.abs() < 1e-3);
    }

    #[test]
    fn test_position_on_edge_percent_scales_radius() {
        let c = Circle::new(10.0, 20.0, 100.0);
        let p = c.position_on_edge(PI / 2.0, 6.5);
        assert!((p.x - 660.0).abs() < 1e-2);
        assert!((p.y - 20.0).abs() < 1e-2);
    }

    #[test]
    fn test_rect_corner_inside_circle() {
        let c = Circle::new(0.0, 0.0, 5.0);
        let r = Rect::new(3.0, 3.0, 50.0, 50.0);
        assert!(c.intersects_rect(&r));
    }

    #[test]
    fn test_circle_inside_rect_no_corner_contained() {
        // Circle entirely inside a big rect: no corner is in the circle,
        // the axis fallback still reports overlap
        let c = Circle::new(50.0, 50.0, 5.0);
        let r = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(c.intersects_rect(&r));
    }

    #[test]
    fn test_circle_rect_separated() {
        let c = Circle::new(-20.0, -20.0, 5.0);
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!c.intersects_rect(&r));
    }

    proptest! {
        #[test]
        fn circle_intersection_is_symmetric(
            ax in -1000.0f32..1000.0, ay in -1000.0f32..1000.0, ar in 0.1f32..500.0,
            bx in -1000.0f32..1000.0, by in -1000.0f32..1000.0, br in 0.1f32..500.0,
        ) {
            let a = Circle::new(ax, ay, ar);
            let b = Circle::new(bx, by, br);
            prop_assert_eq!(a.intersects(&b), b.intersects(&a));
        }

        #[test]
        fn position_on_edge_distance_matches(angle in 0.0f32..(2.0 * PI), pct in 0.0f32..10.0) {
            let c = Circle::new(0.0, 0.0, 464.0);
            let p = c.position_on_edge(angle, pct);
            let dist = (p - c.center()).length();
            prop_assert!((dist - 464.0 * pct).abs() < 0.5);
        }
    }
}
