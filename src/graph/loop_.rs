use super::HalfEdgeId;

/// One original input subpath, preserved across every split performed by
/// the simplification phases. `half_edges` is kept in head-to-tail
/// traversal order; phases that subdivide an edge splice the replacement
/// half-edges in place via [`Graph::splice_half_edge`](super::Graph::splice_half_edge).
#[derive(Clone, Debug)]
pub struct Loop {
    pub shape_id: u32,
    pub half_edges: Vec<HalfEdgeId>,
}
