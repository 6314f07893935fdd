//! Shared fixtures for the integration tests: shape builders and the
//! nonzero-winding point-in-shape oracle used in place of rasterization
//! (see the crate's test-harness notes).

use cagraph::segment::{Line, Quadratic, Ray, Segment, SegmentGeometry};
use cagraph::shape::{Shape, Subpath};
use kurbo::{Point, Vec2};

pub fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Shape {
    let segs = vec![
        Segment::Line(Line::new(Point::new(x0, y0), Point::new(x1, y0))),
        Segment::Line(Line::new(Point::new(x1, y0), Point::new(x1, y1))),
        Segment::Line(Line::new(Point::new(x1, y1), Point::new(x0, y1))),
        Segment::Line(Line::new(Point::new(x0, y1), Point::new(x0, y0))),
    ];
    Shape::new(vec![Subpath::closed(segs)])
}

pub fn triangle(p0: Point, p1: Point, p2: Point) -> Shape {
    let segs = vec![Segment::Line(Line::new(p0, p1)), Segment::Line(Line::new(p1, p2)), Segment::Line(Line::new(p2, p0))];
    Shape::new(vec![Subpath::closed(segs)])
}

/// A rectangle with a smaller rectangular hole, as two subpaths of one
/// shape: the outer ring wound the same way [`rect`] is, the inner ring
/// wound the opposite way so the two cancel under the nonzero rule.
pub fn rect_with_hole(outer: (f64, f64, f64, f64), hole: (f64, f64, f64, f64)) -> Shape {
    let (ox0, oy0, ox1, oy1) = outer;
    let (hx0, hy0, hx1, hy1) = hole;
    let outer_segs = vec![
        Segment::Line(Line::new(Point::new(ox0, oy0), Point::new(ox1, oy0))),
        Segment::Line(Line::new(Point::new(ox1, oy0), Point::new(ox1, oy1))),
        Segment::Line(Line::new(Point::new(ox1, oy1), Point::new(ox0, oy1))),
        Segment::Line(Line::new(Point::new(ox0, oy1), Point::new(ox0, oy0))),
    ];
    let hole_segs = vec![
        Segment::Line(Line::new(Point::new(hx0, hy0), Point::new(hx0, hy1))),
        Segment::Line(Line::new(Point::new(hx0, hy1), Point::new(hx1, hy1))),
        Segment::Line(Line::new(Point::new(hx1, hy1), Point::new(hx1, hy0))),
        Segment::Line(Line::new(Point::new(hx1, hy0), Point::new(hx0, hy0))),
    ];
    Shape::new(vec![Subpath::closed(outer_segs), Subpath::closed(hole_segs)])
}

/// Winding number of `shape` around `point` under the nonzero rule, found
/// by casting a ray in a fixed, deliberately off-axis direction (so it
/// never grazes an axis-aligned edge) and summing crossing signs.
pub fn winding_at(shape: &Shape, point: Point) -> i32 {
    let ray = Ray::new(point, Vec2::new(1.0, 0.00013));
    let mut total = 0i32;
    for subpath in &shape.subpaths {
        let mut segs = subpath.segments.clone();
        if let Some(closing) = subpath.closing_segment() {
            segs.push(closing);
        }
        for seg in &segs {
            for hit in seg.intersect_ray(&ray, 1e-9) {
                total += hit.wind as i32;
            }
        }
    }
    total
}

pub fn filled_at(shape: &Shape, point: Point) -> bool {
    winding_at(shape, point) != 0
}

/// An `n*n` grid of sample points over `[x0, x1] x [y0, y1]`, offset by
/// half a cell so no sample lands exactly on a grid-aligned input edge.
pub fn sample_grid(x0: f64, y0: f64, x1: f64, y1: f64, n: usize) -> Vec<Point> {
    let mut points = Vec::with_capacity(n * n);
    for i in 0..n {
        for j in 0..n {
            let fx = (i as f64 + 0.5) / n as f64;
            let fy = (j as f64 + 0.5) / n as f64;
            points.push(Point::new(x0 + fx * (x1 - x0), y0 + fy * (y1 - y0)));
        }
    }
    points
}

/// A single cubic, split at `t=0.3` and `t=0.7`: the left piece (`[0, 0.7]`)
/// and right piece (`[0.3, 1.0]`) overlap on `t in [0.3, 0.7]`.
pub fn split_cubic_pieces() -> (Segment, Segment) {
    use cagraph::segment::Cubic;
    let c = Cubic::new(Point::new(0.0, 0.0), Point::new(20.0, 80.0), Point::new(60.0, -40.0), Point::new(100.0, 30.0));
    let left = Segment::Cubic(c.subsegment(0.0, 0.7));
    let right = Segment::Cubic(c.subsegment(0.3, 1.0));
    (left, right)
}

pub fn split_quadratic_pieces() -> (Segment, Segment) {
    let q = Quadratic::new(Point::new(0.0, 0.0), Point::new(50.0, 90.0), Point::new(100.0, 0.0));
    let left = Segment::Quadratic(q.subsegment(0.0, 0.7));
    let right = Segment::Quadratic(q.subsegment(0.3, 1.0));
    (left, right)
}

/// Close an open curve piece running from `start` to `end` back to `start`
/// with two straight lines through `via`, forming a closed subpath shape.
pub fn close_piece_through(piece: Segment, via: Point) -> Shape {
    let start = piece.start();
    let end = piece.end();
    let segs = vec![piece, Segment::Line(Line::new(end, via)), Segment::Line(Line::new(via, start))];
    Shape::new(vec![Subpath::closed(segs)])
}
