//! G.9 — `orderVertexEdges`: sort each vertex's incident half-edges
//! counter-clockwise by outgoing tangent angle. [`extract_faces`](super::faces::extract_faces)'s
//! `next` relation depends on this order.

use smallvec::SmallVec;

use crate::graph::{Graph, HalfEdgeId, VertexId};

pub fn order_vertex_edges(graph: &mut Graph) {
    let ids: Vec<VertexId> = graph.vertex_ids().collect();
    for v in ids {
        let incident: Vec<HalfEdgeId> = graph.vertex(v).incident_half_edges.to_vec();
        let mut angled: Vec<(HalfEdgeId, f64)> = incident
            .into_iter()
            .map(|he| {
                let tangent = graph.half_edge_segment(he).start_tangent();
                (he, tangent.y.atan2(tangent.x))
            })
            .collect();
        angled.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
        let sorted: SmallVec<[HalfEdgeId; 4]> = angled.into_iter().map(|(he, _)| he).collect();
        graph.vertex_mut(v).incident_half_edges = sorted;
    }
}
