//! The planar-graph core: an arena of vertices, edges, half-edges, loops,
//! boundaries and faces, plus the simplification pipeline in [`phases`].
//!
//! One flat `Vec` per object kind, `Copy` newtype ids indexing into it, no
//! generational reuse. This arena also owns `Loop` and `Boundary` arenas on
//! top of the usual vertex/edge/half-edge/face set, since the pipeline
//! needs to splice input-contour membership and nested-hole structure that
//! a bare DCEL doesn't track.

pub mod boundary;
pub mod edge;
pub mod face;
pub mod halfedge;
pub mod loop_;
pub mod phases;
pub mod vertex;

pub use boundary::Boundary;
pub use edge::Edge;
pub use face::Face;
pub use halfedge::HalfEdge;
pub use loop_::Loop;
pub use vertex::Vertex;

use std::collections::BTreeSet;
use std::fmt;

use kurbo::Point;

use crate::error::{Error, Result};
use crate::segment::Segment;
use crate::shape::Shape;
use crate::tolerances::Tolerances;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub usize);

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}#{}", stringify!($name), self.0)
            }
        }
    };
}

define_id!(VertexId);
define_id!(EdgeId);
define_id!(HalfEdgeId);
define_id!(LoopId);
define_id!(BoundaryId);
define_id!(FaceId);

/// Index `0` among faces is always the unbounded face (`boundary == None`),
/// created by [`Graph::new`].
pub const UNBOUNDED_FACE: FaceId = FaceId(0);

/// The planar subdivision under construction. Owns every vertex, edge,
/// half-edge, loop, boundary and face created over the lifetime of one
/// pipeline run.
///
/// "Disposing" an object during a phase tombstones it (`live = false` on
/// `Vertex`/`Edge`) rather than freeing its slot; arenas only grow, trading
/// peak memory for simplicity.
pub struct Graph {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    half_edges: Vec<HalfEdge>,
    loops: Vec<Loop>,
    boundaries: Vec<Boundary>,
    faces: Vec<Face>,
    pub shape_ids: BTreeSet<u32>,
    pub unbounded_face: FaceId,
    pub tolerances: Tolerances,
}

impl Graph {
    pub fn new(tolerances: Tolerances) -> Self {
        Graph {
            vertices: Vec::new(),
            edges: Vec::new(),
            half_edges: Vec::new(),
            loops: Vec::new(),
            boundaries: Vec::new(),
            faces: vec![Face::default()],
            shape_ids: BTreeSet::new(),
            unbounded_face: UNBOUNDED_FACE,
            tolerances,
        }
    }

    // -- accessors -----------------------------------------------------

    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.vertices[id.0]
    }
    pub fn vertex_mut(&mut self, id: VertexId) -> &mut Vertex {
        &mut self.vertices[id.0]
    }
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.vertices.len()).map(VertexId).filter(move |id| self.vertices[id.0].live)
    }

    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.0]
    }
    pub fn edge_mut(&mut self, id: EdgeId) -> &mut Edge {
        &mut self.edges[id.0]
    }
    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        (0..self.edges.len()).map(EdgeId).filter(move |id| self.edges[id.0].live)
    }

    pub fn half_edge(&self, id: HalfEdgeId) -> &HalfEdge {
        &self.half_edges[id.0]
    }
    pub fn half_edge_mut(&mut self, id: HalfEdgeId) -> &mut HalfEdge {
        &mut self.half_edges[id.0]
    }
    pub fn half_edge_ids(&self) -> impl Iterator<Item = HalfEdgeId> + '_ {
        (0..self.half_edges.len()).map(HalfEdgeId).filter(move |id| self.edges[self.half_edges[id.0].edge.0].live)
    }

    pub fn loop_(&self, id: LoopId) -> &Loop {
        &self.loops[id.0]
    }
    pub fn loop_mut(&mut self, id: LoopId) -> &mut Loop {
        &mut self.loops[id.0]
    }
    pub fn loop_ids(&self) -> impl Iterator<Item = LoopId> + '_ {
        (0..self.loops.len()).map(LoopId)
    }

    pub fn boundary(&self, id: BoundaryId) -> &Boundary {
        &self.boundaries[id.0]
    }
    pub fn boundary_mut(&mut self, id: BoundaryId) -> &mut Boundary {
        &mut self.boundaries[id.0]
    }
    pub fn boundary_ids(&self) -> impl Iterator<Item = BoundaryId> + '_ {
        (0..self.boundaries.len()).map(BoundaryId)
    }

    pub fn face(&self, id: FaceId) -> &Face {
        &self.faces[id.0]
    }
    pub fn face_mut(&mut self, id: FaceId) -> &mut Face {
        &mut self.faces[id.0]
    }
    pub fn face_ids(&self) -> impl Iterator<Item = FaceId> + '_ {
        (0..self.faces.len()).map(FaceId)
    }

    /// The segment carried by `half_edge`, oriented in its traversal
    /// direction (reversed from the owning edge's stored segment when the
    /// half-edge is the reversed half).
    pub fn half_edge_segment(&self, id: HalfEdgeId) -> Segment {
        let he = &self.half_edges[id.0];
        let seg = self.edges[he.edge.0].segment.clone();
        if he.forward { seg } else { seg.reversed() }
    }

    pub fn origin(&self, id: HalfEdgeId) -> VertexId {
        self.half_edges[id.0].origin
    }

    pub fn dest(&self, id: HalfEdgeId) -> VertexId {
        let twin = self.half_edges[id.0].twin;
        self.half_edges[twin.0].origin
    }

    // -- construction ----------------------------------------------------

    pub fn add_vertex(&mut self, point: Point) -> VertexId {
        let id = VertexId(self.vertices.len());
        self.vertices.push(Vertex::new(point));
        id
    }

    /// Add an edge carrying `segment` between two existing vertices,
    /// wiring up both half-edges and registering them in each endpoint's
    /// incidence list. Does not touch any loop; callers that need the new
    /// half-edges to belong to a loop must add that separately.
    pub fn add_edge(&mut self, segment: Segment, start: VertexId, end: VertexId) -> EdgeId {
        let edge_id = EdgeId(self.edges.len());
        let fwd = HalfEdgeId(self.half_edges.len());
        let rev = HalfEdgeId(self.half_edges.len() + 1);
        self.half_edges.push(HalfEdge { edge: edge_id, forward: true, origin: start, twin: rev, next: None, face: None });
        self.half_edges.push(HalfEdge { edge: edge_id, forward: false, origin: end, twin: fwd, next: None, face: None });
        self.edges.push(Edge { segment, start_vertex: start, end_vertex: end, forward_half: fwd, reversed_half: rev, live: true });
        self.vertices[start.0].incident_half_edges.push(fwd);
        self.vertices[end.0].incident_half_edges.push(rev);
        edge_id
    }

    /// Tombstone `id` and drop both its half-edges from their endpoints'
    /// incidence lists. Does not touch loops; see [`Graph::splice_half_edge`].
    pub fn remove_edge(&mut self, id: EdgeId) {
        let edge = self.edges[id.0].clone();
        self.vertices[edge.start_vertex.0].incident_half_edges.retain(|h| *h != edge.forward_half);
        self.vertices[edge.end_vertex.0].incident_half_edges.retain(|h| *h != edge.reversed_half);
        self.edges[id.0].live = false;
    }

    pub fn remove_vertex(&mut self, id: VertexId) {
        self.vertices[id.0].live = false;
        self.vertices[id.0].incident_half_edges.clear();
    }

    pub fn add_loop(&mut self, shape_id: u32, half_edges: Vec<HalfEdgeId>) -> LoopId {
        let id = LoopId(self.loops.len());
        self.loops.push(Loop { shape_id, half_edges });
        self.shape_ids.insert(shape_id);
        id
    }

    pub fn add_boundary(&mut self, half_edges: Vec<HalfEdgeId>, signed_area: f64) -> BoundaryId {
        let id = BoundaryId(self.boundaries.len());
        self.boundaries.push(Boundary { half_edges, signed_area, child_boundaries: Vec::new() });
        id
    }

    pub fn add_face(&mut self) -> FaceId {
        let id = FaceId(self.faces.len());
        self.faces.push(Face::default());
        id
    }

    /// Replace every occurrence of `old` (or its twin) across every loop
    /// with `replacement_forward` (or, where the loop used the twin, the
    /// reverse of `replacement_forward`'s twins) — the "splice the loop
    /// occurrences" step named throughout §4.G.
    pub fn splice_half_edge(&mut self, old: HalfEdgeId, replacement_forward: &[HalfEdgeId]) {
        let old_twin = self.half_edges[old.0].twin;
        let replacement_reversed: Vec<HalfEdgeId> =
            replacement_forward.iter().rev().map(|h| self.half_edges[h.0].twin).collect();
        for lp in self.loops.iter_mut() {
            let mut i = 0;
            while i < lp.half_edges.len() {
                if lp.half_edges[i] == old {
                    lp.half_edges.splice(i..i + 1, replacement_forward.iter().copied());
                    i += replacement_forward.len();
                } else if lp.half_edges[i] == old_twin {
                    lp.half_edges.splice(i..i + 1, replacement_reversed.iter().copied());
                    i += replacement_reversed.len();
                } else {
                    i += 1;
                }
            }
        }
    }

    /// Split `edge_id` at parameter `t` into two new edges. Returns the
    /// new midpoint vertex and the ids of the two new edges (`before`,
    /// `after`), and splices the old edge's occurrences in every loop.
    pub fn split_edge(&mut self, edge_id: EdgeId, t: f64) -> (VertexId, EdgeId, EdgeId) {
        let edge = self.edges[edge_id.0].clone();
        let (left, right) = edge.segment.subdivided(t);
        let mid = self.add_vertex(edge.segment.position_at(t));

        let before = self.add_edge(left, edge.start_vertex, mid);
        let after = self.add_edge(right, mid, edge.end_vertex);

        let fwd_replacement = [self.edges[before.0].forward_half, self.edges[after.0].forward_half];
        self.splice_half_edge(edge.forward_half, &fwd_replacement);
        self.remove_edge(edge_id);
        (mid, before, after)
    }

    /// Run the ingestion + 11-phase simplification pipeline described in
    /// §4.G, leaving the graph's faces populated with winding maps. Does
    /// not filter or emit — see [`crate::filters::binary_result`] for the
    /// full convenience entry point.
    pub fn compute_simplified_faces(&mut self) -> Result<()> {
        phases::overlap::eliminate_overlap(self);
        phases::self_intersection::eliminate_self_intersection(self);
        phases::intersection::eliminate_intersection(self);
        phases::collapse::collapse_vertices(self);
        phases::bridges::remove_bridges(self);
        phases::prune::remove_single_edge_vertices(self);
        phases::order::order_vertex_edges(self);
        phases::faces::extract_faces(self);
        phases::boundary_graph::compute_boundary_graph(self)?;
        phases::winding::compute_winding_map(self)?;
        Ok(())
    }

    /// Ingest one input shape under `shape_id`, per §4.G.1.
    pub fn add_shape(&mut self, shape: &Shape, shape_id: u32) -> Result<()> {
        phases::ingestion::add_shape(self, shape, shape_id)
    }

    pub fn compute_face_inclusion(&mut self, filter: impl Fn(&ahash::AHashMap<u32, i32>) -> bool) {
        phases::inclusion::compute_face_inclusion(self, filter);
    }

    pub fn create_filled_subgraph(&self) -> Result<Graph> {
        phases::filled_subgraph::create_filled_subgraph(self)
    }

    pub fn faces_to_shape(&self) -> Shape {
        phases::emit::faces_to_shape(self)
    }
}
