//! G.10 — `extractFaces`: derive each half-edge's `next` pointer from the
//! sorted incidence at its destination vertex, then walk `next`-cycles into
//! [`Boundary`](crate::graph::Boundary)s. Inner (positive-area) boundaries
//! each get their own [`Face`](crate::graph::Face) immediately; outer
//! boundaries are resolved to a containing face in
//! [`compute_boundary_graph`](super::boundary_graph::compute_boundary_graph).

use ahash::AHashSet;

use crate::graph::{Graph, HalfEdgeId};

pub fn extract_faces(graph: &mut Graph) {
    compute_next_pointers(graph);

    let he_ids: Vec<HalfEdgeId> = graph.half_edge_ids().collect();
    let mut visited: AHashSet<HalfEdgeId> = AHashSet::default();

    for start in he_ids {
        if visited.contains(&start) {
            continue;
        }
        let mut cycle = Vec::new();
        let mut cur = start;
        loop {
            if !visited.insert(cur) {
                break;
            }
            cycle.push(cur);
            cur = match graph.half_edge(cur).next {
                Some(n) => n,
                None => break,
            };
            if cur == start {
                break;
            }
        }

        let signed_area: f64 = cycle.iter().map(|&he| graph.half_edge_segment(he).signed_area_contribution()).sum();
        let boundary_id = graph.add_boundary(cycle.clone(), signed_area);

        if signed_area > 0.0 {
            let face_id = graph.add_face();
            graph.face_mut(face_id).boundary = Some(boundary_id);
            for &he in &cycle {
                graph.half_edge_mut(he).face = Some(face_id);
            }
        }
    }
}

/// `next(h)`: the half-edge leaving `h`'s destination immediately clockwise
/// from `h`'s twin in that vertex's CCW-sorted incidence list, i.e. the
/// entry just before the twin. This traces the face on the left of every
/// half-edge.
fn compute_next_pointers(graph: &mut Graph) {
    let he_ids: Vec<HalfEdgeId> = graph.half_edge_ids().collect();
    for h in he_ids {
        let v = graph.dest(h);
        let twin = graph.half_edge(h).twin;
        let incident = graph.vertex(v).incident_half_edges.clone();
        if incident.is_empty() {
            continue;
        }
        let pos = incident.iter().position(|&x| x == twin);
        let pos = match pos {
            Some(p) => p,
            None => continue,
        };
        let prev_index = (pos + incident.len() - 1) % incident.len();
        graph.half_edge_mut(h).next = Some(incident[prev_index]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::phases::order::order_vertex_edges;
    use crate::segment::{Line, Segment};
    use crate::tolerances::Tolerances;
    use kurbo::Point;

    fn triangle_graph() -> Graph {
        let mut g = Graph::new(Tolerances::default());
        let v0 = g.add_vertex(Point::new(0.0, 0.0));
        let v1 = g.add_vertex(Point::new(10.0, 0.0));
        let v2 = g.add_vertex(Point::new(5.0, 10.0));
        g.add_edge(Segment::Line(Line::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0))), v0, v1);
        g.add_edge(Segment::Line(Line::new(Point::new(10.0, 0.0), Point::new(5.0, 10.0))), v1, v2);
        g.add_edge(Segment::Line(Line::new(Point::new(5.0, 10.0), Point::new(0.0, 0.0))), v2, v0);
        g
    }

    #[test]
    fn triangle_yields_one_inner_and_one_outer_boundary() {
        let mut g = triangle_graph();
        order_vertex_edges(&mut g);
        extract_faces(&mut g);

        let inner = g.boundary_ids().filter(|&b| g.boundary(b).is_inner()).count();
        let outer = g.boundary_ids().filter(|&b| g.boundary(b).is_outer()).count();
        assert_eq!(inner, 1);
        assert_eq!(outer, 1);
        assert_eq!(g.face_ids().count(), 2); // unbounded + the triangle's interior
    }

    #[test]
    fn every_half_edge_gets_a_next() {
        let mut g = triangle_graph();
        order_vertex_edges(&mut g);
        extract_faces(&mut g);
        for he in g.half_edge_ids() {
            assert!(g.half_edge(he).next.is_some());
        }
    }
}
