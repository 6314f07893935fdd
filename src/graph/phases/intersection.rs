//! G.4 — `eliminateIntersection`: repeatedly find a transversal
//! intersection between two edges (of any kinds) and split both at it,
//! sharing one vertex between the two new splits.

use crate::graph::{EdgeId, Graph, VertexId};

pub fn eliminate_intersection(graph: &mut Graph) {
    let eps = graph.tolerances.intersection_endpoint_epsilon;
    loop {
        let ids: Vec<EdgeId> = graph.edge_ids().collect();
        let mut changed = false;
        'outer: for i in 0..ids.len() {
            for j in (i + 1)..ids.len() {
                let (a_id, b_id) = (ids[i], ids[j]);
                if !graph.edge(a_id).is_live() || !graph.edge(b_id).is_live() {
                    continue;
                }
                let seg_a = graph.edge(a_id).segment.clone();
                let seg_b = graph.edge(b_id).segment.clone();
                for hit in seg_a.intersect(&seg_b, eps) {
                    let a_touch = hit.a_t < eps || hit.a_t > 1.0 - eps;
                    let b_touch = hit.b_t < eps || hit.b_t > 1.0 - eps;
                    if a_touch && b_touch {
                        continue;
                    }
                    simple_split(graph, a_id, b_id, hit.a_t, hit.b_t, eps);
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

fn simple_split(graph: &mut Graph, a_id: EdgeId, b_id: EdgeId, a_t: f64, b_t: f64, eps: f64) {
    let a_internal = a_t > eps && a_t < 1.0 - eps;
    let b_internal = b_t > eps && b_t < 1.0 - eps;

    let a_edge = graph.edge(a_id).clone();
    let b_edge = graph.edge(b_id).clone();

    let shared_vertex: VertexId = if a_internal && b_internal {
        graph.add_vertex(a_edge.segment.position_at(a_t))
    } else if !a_internal {
        if a_t <= 0.5 { a_edge.start_vertex } else { a_edge.end_vertex }
    } else {
        if b_t <= 0.5 { b_edge.start_vertex } else { b_edge.end_vertex }
    };

    if a_internal {
        split_edge_with_vertex(graph, a_id, a_t, shared_vertex);
    }
    if b_internal {
        split_edge_with_vertex(graph, b_id, b_t, shared_vertex);
    }
}

fn split_edge_with_vertex(graph: &mut Graph, edge_id: EdgeId, t: f64, mid: VertexId) {
    let edge = graph.edge(edge_id).clone();
    let seg = edge.segment.clone();
    let before = graph.add_edge(seg.subsegment(0.0, t), edge.start_vertex, mid);
    let after = graph.add_edge(seg.subsegment(t, 1.0), mid, edge.end_vertex);
    let repl = [graph.edge(before).forward_half, graph.edge(after).forward_half];
    graph.splice_half_edge(edge.forward_half, &repl);
    graph.remove_edge(edge_id);
}
