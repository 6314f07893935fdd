//! Generic pairwise curve intersection (§4.A), used to build the vertex set
//! consumed by [`crate::graph::phases::intersection::eliminate_intersection`].
//!
//! Line/line pairs go through a closed-form solve. Every other pairing
//! (including mixed kinds) goes through bounding-box-pruned subdivision with
//! a final Newton refinement, the same strategy bezier-curve libraries in
//! the corpus use when no closed form is available.

use kurbo::Point;
use smallvec::SmallVec;

use super::{Line, Segment, SegmentGeometry};

/// A transversal intersection between two segments, in each segment's own
/// `[0, 1]` parameterization.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    pub a_t: f64,
    pub b_t: f64,
    pub point: Point,
}

/// A shared sub-interval between two like-typed, coincident segments.
/// `t0`/`t1` are in `a`'s parameterization; `qt0`/`qt1` are the matching
/// parameters in `b`, which may run in the opposite direction
/// (`orientation == -1`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Overlap {
    pub t0: f64,
    pub t1: f64,
    pub qt0: f64,
    pub qt1: f64,
    pub orientation: i8,
}

/// A self-crossing of a single cubic segment (§4.A); `a_t < b_t`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SelfIntersection {
    pub a_t: f64,
    pub b_t: f64,
    pub point: Point,
}

const MAX_DEPTH: u32 = 24;
const MIN_SPAN: f64 = 1e-9;
const MAX_HITS: usize = 8;

pub fn intersect(a: &Segment, b: &Segment, endpoint_epsilon: f64) -> SmallVec<[Intersection; 4]> {
    if let (Segment::Line(la), Segment::Line(lb)) = (a, b) {
        return line_line(la, lb, endpoint_epsilon);
    }

    let mut raw = Vec::new();
    subdivide(a, 0.0, 1.0, b, 0.0, 1.0, endpoint_epsilon, 0, &mut raw);

    let mut out: SmallVec<[Intersection; 4]> = SmallVec::new();
    for hit in raw {
        let dup = out
            .iter()
            .any(|h: &Intersection| (h.a_t - hit.a_t).abs() < 1e-6 && (h.b_t - hit.b_t).abs() < 1e-6);
        if !dup {
            out.push(hit);
        }
    }
    out
}

fn line_line(a: &Line, b: &Line, eps: f64) -> SmallVec<[Intersection; 4]> {
    let d1 = a.p1 - a.p0;
    let d2 = b.p1 - b.p0;
    let denom = d1.x * d2.y - d1.y * d2.x;
    let mut out = SmallVec::new();
    if denom.abs() < 1e-14 {
        return out;
    }
    let dp = b.p0 - a.p0;
    let t = (dp.x * d2.y - dp.y * d2.x) / denom;
    let u = (dp.x * d1.y - dp.y * d1.x) / denom;
    if t >= -eps && t <= 1.0 + eps && u >= -eps && u <= 1.0 + eps {
        let at = t.clamp(0.0, 1.0);
        let bt = u.clamp(0.0, 1.0);
        out.push(Intersection { a_t: at, b_t: bt, point: a.position_at(at) });
    }
    out
}

fn subdivide(a: &Segment, a0: f64, a1: f64, b: &Segment, b0: f64, b1: f64, eps: f64, depth: u32, out: &mut Vec<Intersection>) {
    if out.len() >= MAX_HITS {
        return;
    }
    let bounds_a = a.subsegment(a0, a1).bounds().inflate(eps.max(1e-9), eps.max(1e-9));
    let bounds_b = b.subsegment(b0, b1).bounds().inflate(eps.max(1e-9), eps.max(1e-9));
    if bounds_a.intersect(bounds_b).is_empty() {
        return;
    }

    let span_a = a1 - a0;
    let span_b = b1 - b0;
    if depth >= MAX_DEPTH || (span_a < MIN_SPAN && span_b < MIN_SPAN) {
        let at = (a0 + a1) * 0.5;
        let bt = (b0 + b1) * 0.5;
        if let Some((rat, rbt)) = refine(a, b, at, bt) {
            let pa = a.position_at(rat);
            let pb = b.position_at(rbt);
            if pa.distance(pb) <= eps.max(1e-6) {
                out.push(Intersection { a_t: rat, b_t: rbt, point: pa.midpoint(pb) });
            }
        }
        return;
    }

    let am = (a0 + a1) * 0.5;
    let bm = (b0 + b1) * 0.5;
    subdivide(a, a0, am, b, b0, bm, eps, depth + 1, out);
    subdivide(a, a0, am, b, bm, b1, eps, depth + 1, out);
    subdivide(a, am, a1, b, b0, bm, eps, depth + 1, out);
    subdivide(a, am, a1, b, bm, b1, eps, depth + 1, out);
}

/// Newton iteration on the 2x2 system `a(at) + ta*da = b(bt) + tb*db`,
/// solving for the parameter corrections `da`/`db` at each step.
fn refine(a: &Segment, b: &Segment, mut at: f64, mut bt: f64) -> Option<(f64, f64)> {
    for _ in 0..8 {
        let pa = a.position_at(at);
        let pb = b.position_at(bt);
        let ta = a.tangent_at(at);
        let tb = b.tangent_at(bt);
        let d = pb - pa;
        let denom = ta.x * (-tb.y) - ta.y * (-tb.x);
        if denom.abs() < 1e-12 {
            break;
        }
        let da = (d.x * (-tb.y) - d.y * (-tb.x)) / denom;
        let db = (ta.x * d.y - ta.y * d.x) / denom;
        at = (at + da).clamp(0.0, 1.0);
        bt = (bt + db).clamp(0.0, 1.0);
    }
    Some((at, bt))
}
