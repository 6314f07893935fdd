//! G.2 — `eliminateOverlap`: repeatedly find a pair of like-typed edges that
//! overlap along a real sub-interval and split them down to a shared middle
//! edge.
//!
//! The shared middle edge is rebuilt from the first edge's (`a`'s)
//! parameterization only, per §9's design note. `b`'s before/after pieces
//! reuse `a`'s own cut vertices directly at the overlap boundary wherever
//! that boundary falls strictly inside `b` (so the replacement half-edge
//! chain is continuous immediately, with no dangling duplicate vertex).
//! The one case that can't be anchored this way is an overlap boundary that
//! lands exactly on one of `b`'s own pre-existing endpoints: that endpoint
//! is a real vertex other edges may already touch, so it is left in place
//! and merged onto `a`'s coincident vertex by
//! [`collapse_vertices`](super::collapse::collapse_vertices), which is
//! guaranteed to run later in the pipeline and whose epsilon matches the
//! overlap epsilon by default. `b`'s other, now-unused original endpoint
//! vertex (when the overlap consumes the whole of `b`) is left orphaned and
//! swept up by [`remove_single_edge_vertices`](super::prune::remove_single_edge_vertices).

use crate::graph::{EdgeId, Graph, VertexId};
use crate::segment::Overlap;

pub fn eliminate_overlap(graph: &mut Graph) {
    let eps = graph.tolerances.overlap_epsilon;
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
                if !seg_a.same_kind(&seg_b) {
                    continue;
                }
                for hit in seg_a.overlaps(&seg_b, eps) {
                    if (hit.t1 - hit.t0).abs() > eps && (hit.qt1 - hit.qt0).abs() > eps {
                        split_overlap(graph, a_id, b_id, hit, eps);
                        changed = true;
                        break 'outer;
                    }
                }
            }
        }
        if !changed {
            break;
        }
    }
}

/// Cut `edge_id` at parameters `t0 <= t1` (snapping either end to the exact
/// endpoint when within `eps` of it), returning the optional before/after
/// edges and the vertices bounding the un-materialized middle span.
///
/// `anchor_start`/`anchor_end` are used in place of minting a fresh vertex
/// when the corresponding cut falls strictly inside the segment — this is
/// how the caller makes `b`'s cut land on `a`'s own vertex rather than a new
/// one at the same point. They're ignored when the cut snaps to an existing
/// endpoint of `edge_id` itself, since that vertex is real and already has
/// its own incident edges.
fn cut_points(
    graph: &mut Graph,
    edge_id: EdgeId,
    t0: f64,
    t1: f64,
    eps: f64,
    anchor_start: Option<VertexId>,
    anchor_end: Option<VertexId>,
) -> (Option<EdgeId>, VertexId, VertexId, Option<EdgeId>) {
    let edge = graph.edge(edge_id).clone();
    let seg = edge.segment.clone();
    let t0s = if t0 <= eps { 0.0 } else if t0 >= 1.0 - eps { 1.0 } else { t0 };
    let t1s = if t1 <= eps { 0.0 } else if t1 >= 1.0 - eps { 1.0 } else { t1 };

    let v_start = if t0s <= 0.0 {
        edge.start_vertex
    } else if let Some(v) = anchor_start {
        v
    } else {
        graph.add_vertex(seg.position_at(t0s))
    };
    let v_end = if t1s >= 1.0 {
        edge.end_vertex
    } else if let Some(v) = anchor_end {
        v
    } else {
        graph.add_vertex(seg.position_at(t1s))
    };

    let before = if t0s > 0.0 { Some(graph.add_edge(seg.subsegment(0.0, t0s), edge.start_vertex, v_start)) } else { None };
    let after = if t1s < 1.0 { Some(graph.add_edge(seg.subsegment(t1s, 1.0), v_end, edge.end_vertex)) } else { None };

    (before, v_start, v_end, after)
}

fn split_overlap(graph: &mut Graph, a_id: EdgeId, b_id: EdgeId, hit: Overlap, eps: f64) {
    let a = graph.edge(a_id).clone();
    let b = graph.edge(b_id).clone();

    let (a_before, a_v0, a_v1, a_after) = cut_points(graph, a_id, hit.t0, hit.t1, eps, None, None);
    let (qlo, qhi) = if hit.qt0 <= hit.qt1 { (hit.qt0, hit.qt1) } else { (hit.qt1, hit.qt0) };
    // b's own parameterization may run opposite a's; map the anchor at
    // whichever of a's cut vertices corresponds to b's low/high end.
    let (anchor_lo, anchor_hi) = if hit.orientation > 0 { (Some(a_v0), Some(a_v1)) } else { (Some(a_v1), Some(a_v0)) };
    let (b_before, b_v0, b_v1, b_after) = cut_points(graph, b_id, qlo, qhi, eps, anchor_lo, anchor_hi);
    let _ = (b_v0, b_v1); // only a's vertices anchor the shared middle; see module docs

    let middle = graph.add_edge(a.segment.subsegment(hit.t0, hit.t1), a_v0, a_v1);

    let mut a_repl = Vec::new();
    if let Some(e) = a_before {
        a_repl.push(graph.edge(e).forward_half);
    }
    a_repl.push(graph.edge(middle).forward_half);
    if let Some(e) = a_after {
        a_repl.push(graph.edge(e).forward_half);
    }
    graph.splice_half_edge(a.forward_half, &a_repl);

    let mut b_repl = Vec::new();
    if let Some(e) = b_before {
        b_repl.push(graph.edge(e).forward_half);
    }
    if hit.orientation > 0 {
        b_repl.push(graph.edge(middle).forward_half);
    } else {
        b_repl.push(graph.edge(middle).reversed_half);
    }
    if let Some(e) = b_after {
        b_repl.push(graph.edge(e).forward_half);
    }
    graph.splice_half_edge(b.forward_half, &b_repl);

    graph.remove_edge(a_id);
    graph.remove_edge(b_id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::{Line, Segment};
    use crate::tolerances::Tolerances;
    use kurbo::Point;

    #[test]
    fn collapses_overlapping_collinear_lines_to_three_edges() {
        let mut g = Graph::new(Tolerances::default());
        let v0 = g.add_vertex(Point::new(0.0, 0.0));
        let v1 = g.add_vertex(Point::new(10.0, 0.0));
        let v2 = g.add_vertex(Point::new(5.0, 0.0));
        let v3 = g.add_vertex(Point::new(15.0, 0.0));
        g.add_edge(Segment::Line(Line::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0))), v0, v1);
        g.add_edge(Segment::Line(Line::new(Point::new(5.0, 0.0), Point::new(15.0, 0.0))), v2, v3);

        eliminate_overlap(&mut g);
        // before(a 0..0.5), middle(shared), after(b 0.5..1.0): 3 live edges
        assert_eq!(g.edge_ids().count(), 3);

        // the replacement chain spliced in for b must be continuous: every
        // live edge's end vertex should be the start vertex of some other
        // live edge, except at the two true free ends (v0 and v3).
        let mut starts: Vec<VertexId> = Vec::new();
        let mut ends: Vec<VertexId> = Vec::new();
        for id in g.edge_ids() {
            let e = g.edge(id);
            starts.push(e.start_vertex);
            ends.push(e.end_vertex);
        }
        for end in &ends {
            assert!(*end == v3 || starts.contains(end), "edge end vertex {end:?} dangles");
        }
        for start in &starts {
            assert!(*start == v0 || ends.contains(start), "edge start vertex {start:?} dangles");
        }
    }
}
