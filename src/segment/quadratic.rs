use kurbo::{Point, Rect, Vec2};
use roots::find_roots_linear;
use smallvec::SmallVec;

use super::{Overlap, SegmentGeometry};

/// A quadratic Bézier segment with one control point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quadratic {
    pub p0: Point,
    pub p1: Point,
    pub p2: Point,
}

impl Quadratic {
    pub fn new(p0: Point, p1: Point, p2: Point) -> Self {
        Quadratic { p0, p1, p2 }
    }

    fn coeffs_axis(&self, axis: impl Fn(Point) -> f64) -> (f64, f64, f64) {
        // B(t) = (1-t)^2 p0 + 2(1-t)t p1 + t^2 p2
        //      = p0 + 2t(p1 - p0) + t^2 (p0 - 2p1 + p2)
        let (p0, p1, p2) = (axis(self.p0), axis(self.p1), axis(self.p2));
        (p0 - 2.0 * p1 + p2, 2.0 * (p1 - p0), p0)
    }

    /// Parameter values where the derivative along `axis` is zero (bounding
    /// box extrema candidates).
    fn extrema_axis(&self, axis: impl Fn(Point) -> f64) -> SmallVec<[f64; 1]> {
        let (a, b, _c) = self.coeffs_axis(axis);
        // d/dt B(t) = 2a t + b
        let mut out = SmallVec::new();
        if a.abs() > f64::EPSILON {
            for t in find_roots_linear(2.0 * a, b).as_ref() {
                if *t > 0.0 && *t < 1.0 {
                    out.push(*t);
                }
            }
        }
        out
    }
}

impl SegmentGeometry for Quadratic {
    fn start(&self) -> Point {
        self.p0
    }

    fn end(&self) -> Point {
        self.p2
    }

    fn start_tangent(&self) -> Vec2 {
        let t = self.p1 - self.p0;
        if t.hypot2() > f64::EPSILON {
            t
        } else {
            self.p2 - self.p0
        }
    }

    fn end_tangent(&self) -> Vec2 {
        let t = self.p2 - self.p1;
        if t.hypot2() > f64::EPSILON {
            t
        } else {
            self.p2 - self.p0
        }
    }

    fn bounds(&self) -> Rect {
        let mut rect = Rect::from_points(self.p0, self.p2);
        for t in self.extrema_axis(|p| p.x) {
            rect = rect.union_pt(self.position_at(t));
        }
        for t in self.extrema_axis(|p| p.y) {
            rect = rect.union_pt(self.position_at(t));
        }
        rect
    }

    fn position_at(&self, t: f64) -> Point {
        let mt = 1.0 - t;
        let w0 = mt * mt;
        let w1 = 2.0 * mt * t;
        let w2 = t * t;
        Point::new(
            w0 * self.p0.x + w1 * self.p1.x + w2 * self.p2.x,
            w0 * self.p0.y + w1 * self.p1.y + w2 * self.p2.y,
        )
    }

    fn tangent_at(&self, t: f64) -> Vec2 {
        2.0 * (1.0 - t) * (self.p1 - self.p0) + 2.0 * t * (self.p2 - self.p1)
    }

    fn subdivided(&self, t: f64) -> (Self, Self) {
        let p01 = self.p0.lerp(self.p1, t);
        let p12 = self.p1.lerp(self.p2, t);
        let p012 = p01.lerp(p12, t);
        (Quadratic::new(self.p0, p01, p012), Quadratic::new(p012, p12, self.p2))
    }

    fn subsegment(&self, t0: f64, t1: f64) -> Self {
        let (_, right) = self.subdivided(t0);
        let span = (t1 - t0) / (1.0 - t0).max(f64::EPSILON);
        if t0 >= 1.0 - f64::EPSILON {
            Quadratic::new(self.p2, self.p2, self.p2)
        } else {
            let (left, _) = right.subdivided(span.clamp(0.0, 1.0));
            left
        }
    }

    fn reversed(&self) -> Self {
        Quadratic::new(self.p2, self.p1, self.p0)
    }

    fn signed_area_contribution(&self) -> f64 {
        // Exact shoelace-style contribution for a quadratic Bezier, derived
        // from integrating 0.5*(x dy - y dx) over t in [0, 1].
        let (x0, y0) = (self.p0.x, self.p0.y);
        let (x1, y1) = (self.p1.x, self.p1.y);
        let (x2, y2) = (self.p2.x, self.p2.y);
        (x0 * (2.0 * y1 + y2) + x1 * (2.0 * y2 - 2.0 * y0) - x2 * (2.0 * y1 + y0)) / 6.0
    }
}

/// Overlapping-interval detection for two `Quadratic` segments (§4.A).
///
/// Two quadratics overlap only if they trace the same underlying curve.
/// Detected by matching `b`'s control points against `a`'s parametric
/// form: if `b.p0` and `b.p2` both lie on `a` at parameters `qt0`/`qt2`,
/// and `b`'s midpoint position matches `a`'s position at the midpoint
/// parameter, the curves coincide over the shared span.
pub fn overlaps(a: &Quadratic, b: &Quadratic, epsilon: f64) -> SmallVec<[Overlap; 2]> {
    let mut out = SmallVec::new();
    let Some(qt0) = locate_on_quadratic(a, b.p0, epsilon) else {
        return out;
    };
    let Some(qt1) = locate_on_quadratic(a, b.p2, epsilon) else {
        return out;
    };
    let mid_b = b.position_at(0.5);
    let mid_t = (qt0 + qt1) / 2.0;
    if a.position_at(mid_t).distance(mid_b) > epsilon {
        return out;
    }
    let orientation: i8 = if qt1 >= qt0 { 1 } else { -1 };
    let (t0, t1) = if orientation > 0 { (qt0, qt1) } else { (qt1, qt0) };
    let t0c = t0.max(0.0);
    let t1c = t1.min(1.0);
    if t1c - t0c <= epsilon {
        return out;
    }
    let point_t0 = a.position_at(t0c);
    let point_t1 = a.position_at(t1c);
    let qb0 = locate_on_quadratic(b, point_t0, epsilon).unwrap_or(if orientation > 0 { 0.0 } else { 1.0 });
    let qb1 = locate_on_quadratic(b, point_t1, epsilon).unwrap_or(if orientation > 0 { 1.0 } else { 0.0 });
    out.push(Overlap { t0: t0c, t1: t1c, qt0: qb0, qt1: qb1, orientation });
    out
}

/// Find `t` such that `quad.position_at(t)` is within `epsilon` of `p`, by
/// sampling and Newton-refining the closest point. Returns `None` if no
/// parameter comes within `epsilon`.
fn locate_on_quadratic(quad: &Quadratic, p: Point, epsilon: f64) -> Option<f64> {
    const SAMPLES: usize = 32;
    let mut best_t = 0.0;
    let mut best_d = f64::MAX;
    for i in 0..=SAMPLES {
        let t = i as f64 / SAMPLES as f64;
        let d = quad.position_at(t).distance(p);
        if d < best_d {
            best_d = d;
            best_t = t;
        }
    }
    let mut t = best_t;
    for _ in 0..8 {
        let tangent = quad.tangent_at(t);
        let denom = tangent.hypot2();
        if denom <= f64::EPSILON {
            break;
        }
        let err = quad.position_at(t) - p;
        let step = err.dot(tangent) / denom;
        t = (t - step).clamp(0.0, 1.0);
    }
    if quad.position_at(t).distance(p) <= epsilon {
        Some(t)
    } else {
        None
    }
}
