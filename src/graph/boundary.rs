use super::BoundaryId;
use super::HalfEdgeId;

/// A closed cycle of half-edges bounding a face on one side, produced by
/// [`extract_faces`](super::phases::faces::extract_faces).
///
/// A positive `signed_area` marks an *inner* boundary (CCW, bounds a finite
/// face from outside); negative marks an *outer* boundary (CW, bounds a
/// hole or sits on the unbounded face's inside), per §3.
#[derive(Clone, Debug)]
pub struct Boundary {
    pub half_edges: Vec<HalfEdgeId>,
    pub signed_area: f64,
    pub child_boundaries: Vec<BoundaryId>,
}

impl Boundary {
    pub fn is_inner(&self) -> bool {
        self.signed_area > 0.0
    }

    pub fn is_outer(&self) -> bool {
        self.signed_area < 0.0
    }
}
