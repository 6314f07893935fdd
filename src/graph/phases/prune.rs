//! G.8 — `removeSingleEdgeVertices`: repeatedly drop any vertex with fewer
//! than two incident half-edges, disposing its incident edge if one exists.
//! After G.7 this only mops up fully isolated remnants (degree 0).

use crate::graph::{Graph, VertexId};

pub fn remove_single_edge_vertices(graph: &mut Graph) {
    loop {
        let ids: Vec<VertexId> = graph.vertex_ids().collect();
        let mut changed = false;
        for v in ids {
            if !graph.vertex(v).is_live() {
                continue;
            }
            if graph.vertex(v).degree() >= 2 {
                continue;
            }
            if let Some(&he) = graph.vertex(v).incident_half_edges.first() {
                let edge_id = graph.half_edge(he).edge;
                let fwd = graph.edge(edge_id).forward_half;
                graph.splice_half_edge(fwd, &[]);
                graph.remove_edge(edge_id);
            }
            graph.remove_vertex(v);
            changed = true;
        }
        if !changed {
            break;
        }
    }
}
