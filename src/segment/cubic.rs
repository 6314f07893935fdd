use kurbo::{Point, Rect, Vec2};
use roots::find_roots_quadratic;
use smallvec::SmallVec;

use super::{Overlap, SegmentGeometry, SelfIntersection};

/// A cubic Bézier segment with two control points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cubic {
    pub p0: Point,
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
}

impl Cubic {
    pub fn new(p0: Point, p1: Point, p2: Point, p3: Point) -> Self {
        Cubic { p0, p1, p2, p3 }
    }

    fn extrema_axis(&self, axis: impl Fn(Point) -> f64) -> SmallVec<[f64; 2]> {
        // B(t) in Bernstein form; d/dt B(t) is a quadratic in t with
        // coefficients derived from the control-point differences.
        let (p0, p1, p2, p3) = (axis(self.p0), axis(self.p1), axis(self.p2), axis(self.p3));
        let a = -p0 + 3.0 * p1 - 3.0 * p2 + p3;
        let b = 2.0 * (p0 - 2.0 * p1 + p2);
        let c = -p0 + p1;
        let mut out = SmallVec::new();
        if a.abs() > f64::EPSILON {
            for t in find_roots_quadratic(3.0 * a, 2.0 * b, c).as_ref() {
                if *t > 0.0 && *t < 1.0 {
                    out.push(*t);
                }
            }
        } else if b.abs() > f64::EPSILON {
            let t = -c / b;
            if t > 0.0 && t < 1.0 {
                out.push(t);
            }
        }
        out
    }

    /// Find `t` minimizing `|position_at(t) - p|`, via coarse sampling
    /// followed by Newton refinement. Used by overlap detection.
    fn locate(&self, p: Point, epsilon: f64) -> Option<f64> {
        const SAMPLES: usize = 48;
        let mut best_t = 0.0;
        let mut best_d = f64::MAX;
        for i in 0..=SAMPLES {
            let t = i as f64 / SAMPLES as f64;
            let d = self.position_at(t).distance(p);
            if d < best_d {
                best_d = d;
                best_t = t;
            }
        }
        let mut t = best_t;
        for _ in 0..10 {
            let tangent = self.tangent_at(t);
            let denom = tangent.hypot2();
            if denom <= f64::EPSILON {
                break;
            }
            let err = self.position_at(t) - p;
            let step = err.dot(tangent) / denom;
            t = (t - step).clamp(0.0, 1.0);
        }
        if self.position_at(t).distance(p) <= epsilon {
            Some(t)
        } else {
            None
        }
    }
}

impl SegmentGeometry for Cubic {
    fn start(&self) -> Point {
        self.p0
    }

    fn end(&self) -> Point {
        self.p3
    }

    fn start_tangent(&self) -> Vec2 {
        for q in [self.p1, self.p2, self.p3] {
            let t = q - self.p0;
            if t.hypot2() > f64::EPSILON {
                return t;
            }
        }
        Vec2::ZERO
    }

    fn end_tangent(&self) -> Vec2 {
        for q in [self.p2, self.p1, self.p0] {
            let t = self.p3 - q;
            if t.hypot2() > f64::EPSILON {
                return t;
            }
        }
        Vec2::ZERO
    }

    fn bounds(&self) -> Rect {
        let mut rect = Rect::from_points(self.p0, self.p3);
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
        let w0 = mt * mt * mt;
        let w1 = 3.0 * mt * mt * t;
        let w2 = 3.0 * mt * t * t;
        let w3 = t * t * t;
        Point::new(
            w0 * self.p0.x + w1 * self.p1.x + w2 * self.p2.x + w3 * self.p3.x,
            w0 * self.p0.y + w1 * self.p1.y + w2 * self.p2.y + w3 * self.p3.y,
        )
    }

    fn tangent_at(&self, t: f64) -> Vec2 {
        let mt = 1.0 - t;
        3.0 * mt * mt * (self.p1 - self.p0) + 6.0 * mt * t * (self.p2 - self.p1) + 3.0 * t * t * (self.p3 - self.p2)
    }

    fn subdivided(&self, t: f64) -> (Self, Self) {
        let p01 = self.p0.lerp(self.p1, t);
        let p12 = self.p1.lerp(self.p2, t);
        let p23 = self.p2.lerp(self.p3, t);
        let p012 = p01.lerp(p12, t);
        let p123 = p12.lerp(p23, t);
        let p0123 = p012.lerp(p123, t);
        (
            Cubic::new(self.p0, p01, p012, p0123),
            Cubic::new(p0123, p123, p23, self.p3),
        )
    }

    fn subsegment(&self, t0: f64, t1: f64) -> Self {
        if t0 >= 1.0 - f64::EPSILON {
            return Cubic::new(self.p3, self.p3, self.p3, self.p3);
        }
        let (_, right) = self.subdivided(t0);
        let span = ((t1 - t0) / (1.0 - t0)).clamp(0.0, 1.0);
        let (left, _) = right.subdivided(span);
        left
    }

    fn reversed(&self) -> Self {
        Cubic::new(self.p3, self.p2, self.p1, self.p0)
    }

    fn signed_area_contribution(&self) -> f64 {
        // Exact contribution of a cubic Bezier to 0.5 * integral(x dy - y dx),
        // expanded from the Bernstein basis.
        let pts = [self.p0, self.p1, self.p2, self.p3];
        // Green's theorem via the control polygon with Bezier correction
        // weights (standard result for cubic Bezier area integrals).
        let w: [[f64; 4]; 4] = [
            [0.0, 6.0, -3.0, 1.0],
            [-6.0, 0.0, 3.0, 2.0],
            [3.0, -3.0, 0.0, 3.0],
            [-1.0, -2.0, -3.0, 0.0],
        ];
        let mut sum = 0.0;
        for i in 0..4 {
            for j in 0..4 {
                sum += w[i][j] * (pts[i].x * pts[j].y);
            }
        }
        sum / 20.0
    }
}

/// Cubic self-intersection (§4.A): find `aT < bT` such that `position_at(aT)
/// == position_at(bT)`, excluding the trivial `aT == bT` diagonal and
/// excluding near-endpoint pairs (an open edge case noted in §9).
///
/// Implemented as a coarse grid search for the closest non-adjacent
/// parameter pair, refined by alternating 1D minimization. This is simpler
/// than the closed-form double-point classification of the cubic's
/// implicitization, at the cost of missing loops with an extremely short
/// span; acceptable for the interactive-scale inputs this crate targets
/// (see DESIGN.md Open Questions).
pub fn self_intersection(cubic: &Cubic, epsilon: f64) -> Option<SelfIntersection> {
    const N: usize = 40;
    let positions: Vec<Point> = (0..=N).map(|i| cubic.position_at(i as f64 / N as f64)).collect();

    let mut best: Option<(usize, usize, f64)> = None;
    for i in 0..=N {
        // Require at least 2 grid steps of separation to skip adjacent
        // samples of the same smooth arc.
        for j in (i + 2)..=N {
            let d = positions[i].distance(positions[j]);
            if best.map(|(_, _, bd)| d < bd).unwrap_or(true) {
                best = Some((i, j, d));
            }
        }
    }

    let (i, j, coarse_d) = best?;
    // A coarse grid hit needs to already be reasonably close, else refinement
    // won't converge to a true crossing rather than the curve's closest
    // non-adjacent approach.
    let span = cubic.bounds().width().max(cubic.bounds().height()).max(1.0);
    if coarse_d > span * 0.25 {
        return None;
    }

    let mut t0 = i as f64 / N as f64;
    let mut t1 = j as f64 / N as f64;
    for _ in 0..24 {
        t0 = refine_1d(cubic, t0, t1, epsilon);
        t1 = refine_1d(cubic, t1, t0, epsilon);
    }

    if t0 > t1 {
        std::mem::swap(&mut t0, &mut t1);
    }
    if t1 - t0 < 1e-6 {
        return None;
    }

    let p0 = cubic.position_at(t0);
    let p1 = cubic.position_at(t1);
    if p0.distance(p1) > epsilon {
        return None;
    }
    Some(SelfIntersection {
        a_t: t0,
        b_t: t1,
        point: p0.midpoint(p1),
    })
}

/// Minimize `|cubic.position_at(t) - cubic.position_at(fixed)|` over `t` near
/// its current value, by golden-section search within a shrinking bracket.
fn refine_1d(cubic: &Cubic, t: f64, fixed: f64, _epsilon: f64) -> f64 {
    let target = cubic.position_at(fixed);
    let mut lo = (t - 0.05).max(0.0);
    let mut hi = (t + 0.05).min(1.0);
    for _ in 0..30 {
        let m1 = lo + (hi - lo) / 3.0;
        let m2 = hi - (hi - lo) / 3.0;
        let d1 = cubic.position_at(m1).distance(target);
        let d2 = cubic.position_at(m2).distance(target);
        if d1 < d2 {
            hi = m2;
        } else {
            lo = m1;
        }
    }
    (lo + hi) / 2.0
}

impl Cubic {
    pub fn self_intersection(&self, epsilon: f64) -> Option<SelfIntersection> {
        self_intersection(self, epsilon)
    }
}

/// Overlapping-interval detection for two `Cubic` segments (§4.A), by the
/// same endpoint-location-plus-midpoint-check strategy as quadratics.
pub fn overlaps(a: &Cubic, b: &Cubic, epsilon: f64) -> SmallVec<[Overlap; 2]> {
    let mut out = SmallVec::new();
    let Some(qt0) = a.locate(b.p0, epsilon) else {
        return out;
    };
    let Some(qt1) = a.locate(b.p3, epsilon) else {
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
    let qb0 = b.locate(point_t0, epsilon).unwrap_or(if orientation > 0 { 0.0 } else { 1.0 });
    let qb1 = b.locate(point_t1, epsilon).unwrap_or(if orientation > 0 { 1.0 } else { 0.0 });
    out.push(Overlap { t0: t0c, t1: t1c, qt0: qb0, qt1: qb1, orientation });
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn figure_eight_ish() -> Cubic {
        // A classic self-intersecting cubic (loop).
        Cubic::new(
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
            Point::new(10.0, 0.0),
        )
    }

    #[test]
    fn position_at_endpoints() {
        let c = figure_eight_ish();
        assert_eq!(c.position_at(0.0), c.p0);
        assert_eq!(c.position_at(1.0), c.p3);
    }

    #[test]
    fn subdivided_endpoints_match() {
        let c = figure_eight_ish();
        let (a, b) = c.subdivided(0.37);
        assert_eq!(a.p0, c.p0);
        assert_eq!(b.p3, c.p3);
        assert!(a.p3.distance(b.p0) < 1e-9);
    }

    #[test]
    fn detects_self_intersection_loop() {
        let c = figure_eight_ish();
        let hit = c.self_intersection(1e-3);
        assert!(hit.is_some());
        let hit = hit.unwrap();
        assert!(hit.a_t < hit.b_t);
        assert!(c.position_at(hit.a_t).distance(c.position_at(hit.b_t)) < 1e-2);
    }

    #[test]
    fn no_self_intersection_for_simple_arc() {
        let c = Cubic::new(Point::new(0.0, 0.0), Point::new(3.0, 5.0), Point::new(7.0, 5.0), Point::new(10.0, 0.0));
        assert!(c.self_intersection(1e-6).is_none());
    }

    #[test]
    fn overlap_partial_reparameterized() {
        let c = Cubic::new(Point::new(0.0, 0.0), Point::new(3.0, 8.0), Point::new(7.0, 8.0), Point::new(10.0, 0.0));
        let (_, right) = c.subdivided(0.3);
        let hits = overlaps(&c, &right, 1e-4);
        assert_eq!(hits.len(), 1);
        assert!((hits[0].t0 - 0.3).abs() < 1e-3);
        assert!((hits[0].t1 - 1.0).abs() < 1e-3);
    }
}
