//! Uniform capabilities over the four curve kinds a [`Shape`](crate::shape::Shape)
//! is built from, per §4.A of the design: a tagged variant (`Segment`) plus a
//! shared trait (`SegmentGeometry`) implemented by each concrete curve type.

mod arc;
mod cubic;
mod line;
mod quadratic;

pub mod intersect;
pub mod ray;

pub use arc::Arc;
pub use cubic::Cubic;
pub use line::Line;
pub use quadratic::Quadratic;

pub use intersect::{Intersection, Overlap, SelfIntersection};
pub use ray::{Ray, RayHit};

use kurbo::{Point, Rect, Vec2};
use smallvec::SmallVec;

/// Capabilities shared by every concrete curve type. The pipeline never
/// calls these directly on a bare `Line`/`Quadratic`/`Cubic`/`Arc` — it goes
/// through [`Segment`], which dispatches to these per variant.
pub trait SegmentGeometry: Sized + Clone {
    fn start(&self) -> Point;
    fn end(&self) -> Point;
    fn start_tangent(&self) -> Vec2;
    fn end_tangent(&self) -> Vec2;
    fn bounds(&self) -> Rect;
    fn position_at(&self, t: f64) -> Point;
    fn tangent_at(&self, t: f64) -> Vec2;
    /// Split at `t`, returning the `[0, t]` and `[t, 1]` pieces.
    fn subdivided(&self, t: f64) -> (Self, Self);
    /// The sub-curve over `[t0, t1]`, reparameterized to `[0, 1]`.
    fn subsegment(&self, t0: f64, t1: f64) -> Self;
    fn reversed(&self) -> Self;
    /// This segment's contribution to a closed polygon's shoelace area
    /// (`0.5 * integral of x dy - y dx` along the curve), used by
    /// `Boundary::signed_area`.
    fn signed_area_contribution(&self) -> f64;
}

/// A single parametric curve segment: one of the four kinds a [`Shape`](crate::shape::Shape)
/// may be built from.
#[derive(Clone, Debug, PartialEq)]
pub enum Segment {
    Line(Line),
    Quadratic(Quadratic),
    Cubic(Cubic),
    Arc(Arc),
}

macro_rules! dispatch {
    ($self:ident, $method:ident ( $($arg:expr),* )) => {
        match $self {
            Segment::Line(s) => s.$method($($arg),*),
            Segment::Quadratic(s) => s.$method($($arg),*),
            Segment::Cubic(s) => s.$method($($arg),*),
            Segment::Arc(s) => s.$method($($arg),*),
        }
    };
}

impl Segment {
    pub fn start(&self) -> Point {
        dispatch!(self, start())
    }

    pub fn end(&self) -> Point {
        dispatch!(self, end())
    }

    pub fn start_tangent(&self) -> Vec2 {
        dispatch!(self, start_tangent())
    }

    pub fn end_tangent(&self) -> Vec2 {
        dispatch!(self, end_tangent())
    }

    pub fn bounds(&self) -> Rect {
        dispatch!(self, bounds())
    }

    pub fn position_at(&self, t: f64) -> Point {
        dispatch!(self, position_at(t))
    }

    pub fn tangent_at(&self, t: f64) -> Vec2 {
        dispatch!(self, tangent_at(t))
    }

    pub fn signed_area_contribution(&self) -> f64 {
        dispatch!(self, signed_area_contribution())
    }

    pub fn subdivided(&self, t: f64) -> (Segment, Segment) {
        match self {
            Segment::Line(s) => {
                let (a, b) = s.subdivided(t);
                (Segment::Line(a), Segment::Line(b))
            }
            Segment::Quadratic(s) => {
                let (a, b) = s.subdivided(t);
                (Segment::Quadratic(a), Segment::Quadratic(b))
            }
            Segment::Cubic(s) => {
                let (a, b) = s.subdivided(t);
                (Segment::Cubic(a), Segment::Cubic(b))
            }
            Segment::Arc(s) => {
                let (a, b) = s.subdivided(t);
                (Segment::Arc(a), Segment::Arc(b))
            }
        }
    }

    pub fn subsegment(&self, t0: f64, t1: f64) -> Segment {
        match self {
            Segment::Line(s) => Segment::Line(s.subsegment(t0, t1)),
            Segment::Quadratic(s) => Segment::Quadratic(s.subsegment(t0, t1)),
            Segment::Cubic(s) => Segment::Cubic(s.subsegment(t0, t1)),
            Segment::Arc(s) => Segment::Arc(s.subsegment(t0, t1)),
        }
    }

    pub fn reversed(&self) -> Segment {
        match self {
            Segment::Line(s) => Segment::Line(s.reversed()),
            Segment::Quadratic(s) => Segment::Quadratic(s.reversed()),
            Segment::Cubic(s) => Segment::Cubic(s.reversed()),
            Segment::Arc(s) => Segment::Arc(s.reversed()),
        }
    }

    /// All intersections with `other`, both returning `aT`/`bT` in `[0, 1]`.
    pub fn intersect(&self, other: &Segment, endpoint_epsilon: f64) -> SmallVec<[Intersection; 4]> {
        intersect::intersect(self, other, endpoint_epsilon)
    }

    /// Intersections with an outgoing ray, used for winding-number casts.
    pub fn intersect_ray(&self, ray: &Ray, back_clip_epsilon: f64) -> SmallVec<[RayHit; 2]> {
        ray::intersect_ray(self, ray, back_clip_epsilon)
    }

    /// True if `self` and `other` are the same concrete curve kind (a
    /// precondition for [`Self::overlaps`]).
    pub fn same_kind(&self, other: &Segment) -> bool {
        matches!(
            (self, other),
            (Segment::Line(_), Segment::Line(_))
                | (Segment::Quadratic(_), Segment::Quadratic(_))
                | (Segment::Cubic(_), Segment::Cubic(_))
                | (Segment::Arc(_), Segment::Arc(_))
        )
    }

    /// Like-type overlap detection (§4.A); only defined for Line/Line,
    /// Quadratic/Quadratic and Cubic/Cubic pairs. Returns an empty list for
    /// `Arc` pairs and mismatched kinds (arcs never overlap along an
    /// interval in this crate's inputs, see DESIGN.md).
    pub fn overlaps(&self, other: &Segment, epsilon: f64) -> SmallVec<[Overlap; 2]> {
        match (self, other) {
            (Segment::Line(a), Segment::Line(b)) => line::overlaps(a, b, epsilon),
            (Segment::Quadratic(a), Segment::Quadratic(b)) => quadratic::overlaps(a, b, epsilon),
            (Segment::Cubic(a), Segment::Cubic(b)) => cubic::overlaps(a, b, epsilon),
            _ => SmallVec::new(),
        }
    }

    /// Cubic self-intersection (§4.A); always `None` for non-cubic segments.
    pub fn self_intersection(&self, epsilon: f64) -> Option<SelfIntersection> {
        match self {
            Segment::Cubic(c) => c.self_intersection(epsilon),
            _ => None,
        }
    }

    pub fn is_finite(&self) -> bool {
        let b = self.bounds();
        b.x0.is_finite() && b.y0.is_finite() && b.x1.is_finite() && b.y1.is_finite()
    }
}
