use kurbo::Point;
use smallvec::SmallVec;

use super::HalfEdgeId;

/// A point in the plane plus the half-edges that start there, kept sorted
/// counter-clockwise by outgoing tangent angle once
/// [`order_vertex_edges`](super::phases::order::order_vertex_edges) has run.
///
/// The `visited`/`visit_index`/`low_index`/`parent` fields are transient
/// scratch state used only during
/// [`remove_bridges`](super::phases::bridges::remove_bridges)'s Tarjan pass;
/// every other phase ignores them.
#[derive(Clone, Debug)]
pub struct Vertex {
    pub point: Point,
    pub incident_half_edges: SmallVec<[HalfEdgeId; 4]>,
    pub(crate) live: bool,
    pub(crate) visited: bool,
    pub(crate) visit_index: u32,
    pub(crate) low_index: u32,
    pub(crate) parent: Option<HalfEdgeId>,
}

impl Vertex {
    pub fn new(point: Point) -> Self {
        Vertex {
            point,
            incident_half_edges: SmallVec::new(),
            live: true,
            visited: false,
            visit_index: 0,
            low_index: 0,
            parent: None,
        }
    }

    pub fn is_live(&self) -> bool {
        self.live
    }

    pub fn degree(&self) -> usize {
        self.incident_half_edges.len()
    }
}
