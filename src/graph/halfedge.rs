use super::{EdgeId, FaceId, HalfEdgeId, VertexId};

/// One oriented side of an [`Edge`](super::Edge). `next` is set by
/// [`extract_faces`](super::phases::faces::extract_faces); before that it is
/// `None`. `face` is set by the same pass.
#[derive(Clone, Copy, Debug)]
pub struct HalfEdge {
    pub edge: EdgeId,
    pub forward: bool,
    pub origin: VertexId,
    pub twin: HalfEdgeId,
    pub next: Option<HalfEdgeId>,
    pub face: Option<FaceId>,
}
