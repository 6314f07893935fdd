use kurbo::{Point, Rect, Vec2};
use smallvec::SmallVec;

use super::{Overlap, SegmentGeometry};

/// A straight segment from `p0` to `p1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub p0: Point,
    pub p1: Point,
}

impl Line {
    pub fn new(p0: Point, p1: Point) -> Self {
        Line { p0, p1 }
    }

    /// Parameter of the closest point on the infinite extension of this
    /// line to `p`, with no clamping to `[0, 1]`.
    pub fn project_unclamped(&self, p: Point) -> f64 {
        let d = self.p1 - self.p0;
        let len_sq = d.hypot2();
        if len_sq <= f64::EPSILON {
            0.0
        } else {
            (p - self.p0).dot(d) / len_sq
        }
    }
}

impl SegmentGeometry for Line {
    fn start(&self) -> Point {
        self.p0
    }

    fn end(&self) -> Point {
        self.p1
    }

    fn start_tangent(&self) -> Vec2 {
        self.p1 - self.p0
    }

    fn end_tangent(&self) -> Vec2 {
        self.p1 - self.p0
    }

    fn bounds(&self) -> Rect {
        Rect::from_points(self.p0, self.p1)
    }

    fn position_at(&self, t: f64) -> Point {
        self.p0 + (self.p1 - self.p0) * t
    }

    fn tangent_at(&self, _t: f64) -> Vec2 {
        self.p1 - self.p0
    }

    fn subdivided(&self, t: f64) -> (Self, Self) {
        let mid = self.position_at(t);
        (Line::new(self.p0, mid), Line::new(mid, self.p1))
    }

    fn subsegment(&self, t0: f64, t1: f64) -> Self {
        Line::new(self.position_at(t0), self.position_at(t1))
    }

    fn reversed(&self) -> Self {
        Line::new(self.p1, self.p0)
    }

    fn signed_area_contribution(&self) -> f64 {
        0.5 * (self.p0.x * self.p1.y - self.p1.x * self.p0.y)
    }
}

/// Overlapping-interval detection for two `Line` segments (§4.A).
///
/// Two lines overlap only if they are collinear; the overlap is then the
/// parameter range of `b` that falls within `a`'s span (and vice versa).
pub fn overlaps(a: &Line, b: &Line, epsilon: f64) -> SmallVec<[Overlap; 2]> {
    let dir = a.p1 - a.p0;
    let len = dir.hypot();
    if len <= epsilon {
        return SmallVec::new();
    }
    let normal = Vec2::new(-dir.y, dir.x) / len;
    // Collinearity: both of b's endpoints must lie on a's infinite line.
    if (b.p0 - a.p0).dot(normal).abs() > epsilon || (b.p1 - a.p0).dot(normal).abs() > epsilon {
        return SmallVec::new();
    }

    let b0 = a.project_unclamped(b.p0);
    let b1 = a.project_unclamped(b.p1);
    let orientation: i8 = if b1 >= b0 { 1 } else { -1 };
    let (qt0, qt1) = if orientation > 0 { (b0, b1) } else { (b1, b0) };

    let t0 = qt0.max(0.0);
    let t1 = qt1.min(1.0);
    if t1 - t0 <= epsilon {
        return SmallVec::new();
    }

    let mut out = SmallVec::new();
    out.push(Overlap {
        t0,
        t1,
        qt0: b.project_unclamped(a.position_at(t0)),
        qt1: b.project_unclamped(a.position_at(t1)),
        orientation,
    });
    out
}
