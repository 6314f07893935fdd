//! G.3 — `eliminateSelfIntersection`: split each self-intersecting cubic
//! into three pieces around a single new vertex shared by the start and
//! end of the middle (looped) piece.
//!
//! Unlike G.2/G.4/G.6/G.8 this phase is not listed among the "restart on
//! change" loops in §9 — a single pass over the edges present at phase
//! entry is sufficient, since a cubic's self-intersection (if any) is
//! resolved by its own split and the three resulting pieces are each
//! self-intersection-free sub-cubics of a once-looped curve.

use crate::graph::{EdgeId, Graph};
use crate::segment::SelfIntersection;

pub fn eliminate_self_intersection(graph: &mut Graph) {
    let eps = graph.tolerances.intersection_endpoint_epsilon;
    let ids: Vec<EdgeId> = graph.edge_ids().collect();
    for edge_id in ids {
        if !graph.edge(edge_id).is_live() {
            continue;
        }
        let seg = graph.edge(edge_id).segment.clone();
        if let Some(si) = seg.self_intersection(eps) {
            split_self_intersection(graph, edge_id, si);
        }
    }
}

fn split_self_intersection(graph: &mut Graph, edge_id: EdgeId, si: SelfIntersection) {
    let edge = graph.edge(edge_id).clone();
    let seg = edge.segment.clone();
    let v = graph.add_vertex(si.point);

    let before = graph.add_edge(seg.subsegment(0.0, si.a_t), edge.start_vertex, v);
    let middle = graph.add_edge(seg.subsegment(si.a_t, si.b_t), v, v);
    let after = graph.add_edge(seg.subsegment(si.b_t, 1.0), v, edge.end_vertex);

    let repl = [graph.edge(before).forward_half, graph.edge(middle).forward_half, graph.edge(after).forward_half];
    graph.splice_half_edge(edge.forward_half, &repl);
    graph.remove_edge(edge_id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::{Cubic, Segment};
    use crate::tolerances::Tolerances;
    use kurbo::Point;

    #[test]
    fn splits_looped_cubic_into_three_edges() {
        let mut g = Graph::new(Tolerances::default());
        let cubic = Cubic::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0), Point::new(0.0, 10.0), Point::new(10.0, 0.0));
        let v0 = g.add_vertex(cubic.p0);
        let v1 = g.add_vertex(cubic.p3);
        g.add_edge(Segment::Cubic(cubic), v0, v1);

        eliminate_self_intersection(&mut g);
        assert_eq!(g.edge_ids().count(), 3);
    }

    #[test]
    fn leaves_simple_cubic_untouched() {
        let mut g = Graph::new(Tolerances::default());
        let cubic = Cubic::new(Point::new(0.0, 0.0), Point::new(3.0, 5.0), Point::new(7.0, 5.0), Point::new(10.0, 0.0));
        let v0 = g.add_vertex(cubic.p0);
        let v1 = g.add_vertex(cubic.p3);
        g.add_edge(Segment::Cubic(cubic), v0, v1);

        eliminate_self_intersection(&mut g);
        assert_eq!(g.edge_ids().count(), 1);
    }
}
