//! Ray casting against a single segment (§4.A / §G.11), used both for
//! winding-number evaluation and for the "extreme ray" hole-nesting test.

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

use super::Segment;

/// A semi-infinite ray from `origin` in `direction` (not required to be
/// unit-length).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Point,
    pub direction: Vec2,
}

impl Ray {
    pub fn new(origin: Point, direction: Vec2) -> Self {
        Ray { origin, direction }
    }
}

/// A single ray/segment crossing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    /// Distance from the ray origin, along `direction`, to the crossing.
    pub distance: f64,
    pub point: Point,
    /// The segment's normal direction at the crossing.
    pub normal: Vec2,
    /// `+1` if the segment crosses left-to-right relative to the ray
    /// direction, `-1` otherwise; the sign a winding-number accumulator
    /// sums over.
    pub wind: i8,
}

const SAMPLES: usize = 64;
const BISECT_ITERS: usize = 40;

/// Every crossing of `segment` by `ray`, excluding crossings within
/// `back_clip_epsilon` of the ray origin (these are considered to lie on
/// the ray's own source vertex rather than ahead of it).
pub fn intersect_ray(segment: &Segment, ray: &Ray, back_clip_epsilon: f64) -> SmallVec<[RayHit; 2]> {
    let mut out = SmallVec::new();
    let len = ray.direction.hypot();
    if len <= f64::EPSILON {
        return out;
    }
    let unit_dir = ray.direction / len;
    let normal = Vec2::new(-unit_dir.y, unit_dir.x);

    let signed = |t: f64| (segment.position_at(t) - ray.origin).dot(normal);

    let mut samples = [0.0f64; SAMPLES + 1];
    for (i, s) in samples.iter_mut().enumerate() {
        *s = signed(i as f64 / SAMPLES as f64);
    }

    for i in 0..SAMPLES {
        let (f0, f1) = (samples[i], samples[i + 1]);
        if f0 * f1 > 0.0 {
            continue;
        }
        let mut lo = i as f64 / SAMPLES as f64;
        let mut hi = (i + 1) as f64 / SAMPLES as f64;
        let mut f_lo = f0;
        for _ in 0..BISECT_ITERS {
            let mid = (lo + hi) * 0.5;
            let f_mid = signed(mid);
            if f_lo.signum() == f_mid.signum() {
                lo = mid;
                f_lo = f_mid;
            } else {
                hi = mid;
            }
        }
        let t = (lo + hi) * 0.5;
        let point = segment.position_at(t);
        let distance = (point - ray.origin).dot(unit_dir);
        if distance <= back_clip_epsilon {
            continue;
        }
        let tangent = segment.tangent_at(t);
        let seg_normal = Vec2::new(-tangent.y, tangent.x);
        let cross = unit_dir.x * tangent.y - unit_dir.y * tangent.x;
        let wind: i8 = if cross >= 0.0 { 1 } else { -1 };
        out.push(RayHit { distance, point, normal: seg_normal, wind });
        if out.len() == out.capacity() {
            break;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::Line;
    use kurbo::Point;

    #[test]
    fn ray_hits_crossing_line() {
        let seg = Segment::Line(Line::new(Point::new(0.0, -5.0), Point::new(0.0, 5.0)));
        let ray = Ray::new(Point::new(-10.0, 0.0), Vec2::new(1.0, 0.0));
        let hits = intersect_ray(&seg, &ray, 1e-8);
        assert_eq!(hits.len(), 1);
        assert!((hits[0].distance - 10.0).abs() < 1e-6);
    }

    #[test]
    fn ray_misses_non_crossing_line() {
        let seg = Segment::Line(Line::new(Point::new(5.0, -5.0), Point::new(5.0, -1.0)));
        let ray = Ray::new(Point::new(-10.0, 0.0), Vec2::new(1.0, 0.0));
        assert!(intersect_ray(&seg, &ray, 1e-8).is_empty());
    }

    #[test]
    fn ray_ignores_hits_behind_origin() {
        let seg = Segment::Line(Line::new(Point::new(-20.0, -5.0), Point::new(-20.0, 5.0)));
        let ray = Ray::new(Point::new(-10.0, 0.0), Vec2::new(1.0, 0.0));
        assert!(intersect_ray(&seg, &ray, 1e-8).is_empty());
    }
}
