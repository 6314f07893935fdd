use kurbo::{Point, Rect, Vec2};
use smallvec::SmallVec;

use super::SegmentGeometry;

/// A circular arc, parameterized by center, radius, and a start/end angle
/// pair (radians). `end_angle` may be less than `start_angle` to represent a
/// clockwise sweep; `position_at` interpolates linearly between them.
///
/// Modeled on the `CircleArc` representation used elsewhere in the corpus
/// for curve-fitting diagnostics, adapted here into a first-class segment
/// kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arc {
    pub center: Point,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl Arc {
    pub fn new(center: Point, radius: f64, start_angle: f64, end_angle: f64) -> Self {
        Arc { center, radius, start_angle, end_angle }
    }

    fn angle_at(&self, t: f64) -> f64 {
        self.start_angle + t * (self.end_angle - self.start_angle)
    }

    fn point_at_angle(&self, angle: f64) -> Point {
        Point::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        )
    }
}

impl SegmentGeometry for Arc {
    fn start(&self) -> Point {
        self.point_at_angle(self.start_angle)
    }

    fn end(&self) -> Point {
        self.point_at_angle(self.end_angle)
    }

    fn start_tangent(&self) -> Vec2 {
        self.tangent_at(0.0)
    }

    fn end_tangent(&self) -> Vec2 {
        self.tangent_at(1.0)
    }

    fn bounds(&self) -> Rect {
        let mut rect = Rect::from_points(self.start(), self.end());
        let (lo, hi) = if self.start_angle <= self.end_angle {
            (self.start_angle, self.end_angle)
        } else {
            (self.end_angle, self.start_angle)
        };
        // Axis-aligned extrema occur at multiples of pi/2.
        let mut k = (lo / std::f64::consts::FRAC_PI_2).ceil() as i64;
        loop {
            let angle = k as f64 * std::f64::consts::FRAC_PI_2;
            if angle > hi {
                break;
            }
            if angle >= lo {
                rect = rect.union_pt(self.point_at_angle(angle));
            }
            k += 1;
        }
        rect
    }

    fn position_at(&self, t: f64) -> Point {
        self.point_at_angle(self.angle_at(t))
    }

    fn tangent_at(&self, t: f64) -> Vec2 {
        let angle = self.angle_at(t);
        let sweep = self.end_angle - self.start_angle;
        Vec2::new(-angle.sin(), angle.cos()) * sweep
    }

    fn subdivided(&self, t: f64) -> (Self, Self) {
        let mid = self.angle_at(t);
        (
            Arc::new(self.center, self.radius, self.start_angle, mid),
            Arc::new(self.center, self.radius, mid, self.end_angle),
        )
    }

    fn subsegment(&self, t0: f64, t1: f64) -> Self {
        Arc::new(self.center, self.radius, self.angle_at(t0), self.angle_at(t1))
    }

    fn reversed(&self) -> Self {
        Arc::new(self.center, self.radius, self.end_angle, self.start_angle)
    }

    fn signed_area_contribution(&self) -> f64 {
        let r = self.radius;
        let (cx, cy) = (self.center.x, self.center.y);
        let (a0, a1) = (self.start_angle, self.end_angle);
        let integral = r * r * (a1 - a0) + r * cx * (a1.sin() - a0.sin()) + r * cy * (a0.cos() - a1.cos());
        0.5 * integral
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn position_at_endpoints() {
        let a = Arc::new(Point::new(0.0, 0.0), 5.0, 0.0, PI);
        assert!(a.position_at(0.0).distance(Point::new(5.0, 0.0)) < 1e-9);
        assert!(a.position_at(1.0).distance(Point::new(-5.0, 0.0)) < 1e-9);
    }

    #[test]
    fn subdivided_endpoints_match() {
        let a = Arc::new(Point::new(1.0, 1.0), 3.0, 0.0, PI);
        let (left, right) = a.subdivided(0.3);
        assert!(left.start().distance(a.start()) < 1e-9);
        assert!(right.end().distance(a.end()) < 1e-9);
        assert!(left.end().distance(right.start()) < 1e-9);
    }

    #[test]
    fn reversed_swaps_endpoints() {
        let a = Arc::new(Point::new(0.0, 0.0), 2.0, 0.0, PI / 2.0);
        let r = a.reversed();
        assert!(r.start().distance(a.end()) < 1e-9);
        assert!(r.end().distance(a.start()) < 1e-9);
    }

    #[test]
    fn full_circle_area_matches_pi_r_squared() {
        let a = Arc::new(Point::new(0.0, 0.0), 4.0, 0.0, 2.0 * PI);
        assert!((a.signed_area_contribution() - PI * 16.0).abs() < 1e-6);
    }

    #[test]
    fn bounds_include_quadrant_extrema() {
        let a = Arc::new(Point::new(0.0, 0.0), 1.0, -0.1, PI / 2.0 + 0.1);
        let b = a.bounds();
        assert!(b.y1 > 0.999);
        assert!(b.x1 > 0.999);
    }
}
