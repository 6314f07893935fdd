//! G.6 — `collapseVertices`: repeatedly merge vertex pairs closer than
//! `vertexEpsilon`, rewiring every edge that touched either one.
//!
//! Edges directly spanning the merged pair collapse to nothing (spliced out
//! of any loop). A self-loop sitting entirely at one of the two merged
//! vertices is *not* treated as degenerate — it is kept and simply relabeled
//! to the merged vertex, since it represents real curve extent (e.g. a
//! self-intersection loop from G.3), not a point.

use crate::graph::{EdgeId, Graph, VertexId};

pub fn collapse_vertices(graph: &mut Graph) {
    let eps = graph.tolerances.vertex_epsilon;
    loop {
        let ids: Vec<VertexId> = graph.vertex_ids().collect();
        let mut changed = false;
        'outer: for i in 0..ids.len() {
            for j in (i + 1)..ids.len() {
                let (a, b) = (ids[i], ids[j]);
                if !graph.vertex(a).is_live() || !graph.vertex(b).is_live() {
                    continue;
                }
                let d = graph.vertex(a).point.distance(graph.vertex(b).point);
                if d < eps {
                    collapse_pair(graph, a, b);
                    changed = true;
                    break 'outer;
                }
            }
        }
        if !changed {
            break;
        }
    }
}

fn collapse_pair(graph: &mut Graph, a: VertexId, b: VertexId) {
    let pa = graph.vertex(a).point;
    let pb = graph.vertex(b).point;
    let merged_point = if pa.distance(pb) == 0.0 { pa } else { pa.midpoint(pb) };
    let merged = graph.add_vertex(merged_point);

    let edge_ids: Vec<EdgeId> = graph.edge_ids().collect();
    for id in edge_ids {
        let e = graph.edge(id).clone();
        let start_in = e.start_vertex == a || e.start_vertex == b;
        let end_in = e.end_vertex == a || e.end_vertex == b;
        if !start_in && !end_in {
            continue;
        }
        let degenerate = (e.start_vertex == a && e.end_vertex == b) || (e.start_vertex == b && e.end_vertex == a);
        if degenerate {
            graph.splice_half_edge(e.forward_half, &[]);
            graph.remove_edge(id);
            continue;
        }
        if start_in {
            rewire_start(graph, id, merged);
        }
        if end_in {
            rewire_end(graph, id, merged);
        }
    }
    graph.remove_vertex(a);
    graph.remove_vertex(b);
}

fn rewire_start(graph: &mut Graph, id: EdgeId, merged: VertexId) {
    let e = graph.edge(id).clone();
    let old = e.start_vertex;
    graph.vertex_mut(old).incident_half_edges.retain(|h| *h != e.forward_half);
    graph.vertex_mut(merged).incident_half_edges.push(e.forward_half);
    graph.half_edge_mut(e.forward_half).origin = merged;
    graph.edge_mut(id).start_vertex = merged;
}

fn rewire_end(graph: &mut Graph, id: EdgeId, merged: VertexId) {
    let e = graph.edge(id).clone();
    let old = e.end_vertex;
    graph.vertex_mut(old).incident_half_edges.retain(|h| *h != e.reversed_half);
    graph.vertex_mut(merged).incident_half_edges.push(e.reversed_half);
    graph.half_edge_mut(e.reversed_half).origin = merged;
    graph.edge_mut(id).end_vertex = merged;
}
