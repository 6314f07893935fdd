//! G.13 — `computeFaceInclusion`: decide which faces are "filled" under a
//! boolean-op filter applied to each face's winding map. A face with no
//! winding map (shouldn't happen once G.12 has run to completion) is
//! treated as unfilled.

use ahash::AHashMap;

use crate::graph::Graph;

pub fn compute_face_inclusion(graph: &mut Graph, filter: impl Fn(&AHashMap<u32, i32>) -> bool) {
    let empty: AHashMap<u32, i32> = AHashMap::default();
    for face_id in graph.face_ids().collect::<Vec<_>>() {
        let filled = match &graph.face(face_id).winding_map {
            Some(m) => filter(m),
            None => filter(&empty),
        };
        graph.face_mut(face_id).filled = Some(filled);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::phases::{boundary_graph, faces, ingestion, order, winding};
    use crate::segment::{Line, Segment};
    use crate::shape::{Shape, Subpath};
    use crate::tolerances::Tolerances;
    use kurbo::Point;

    #[test]
    fn union_filter_fills_the_square_interior() {
        let mut g = Graph::new(Tolerances::default());
        let segs = vec![
            Segment::Line(Line::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0))),
            Segment::Line(Line::new(Point::new(10.0, 0.0), Point::new(10.0, 10.0))),
            Segment::Line(Line::new(Point::new(10.0, 10.0), Point::new(0.0, 10.0))),
            Segment::Line(Line::new(Point::new(0.0, 10.0), Point::new(0.0, 0.0))),
        ];
        ingestion::add_shape(&mut g, &Shape::new(vec![Subpath::closed(segs)]), 0).unwrap();
        order::order_vertex_edges(&mut g);
        faces::extract_faces(&mut g);
        boundary_graph::compute_boundary_graph(&mut g).unwrap();
        winding::compute_winding_map(&mut g).unwrap();

        compute_face_inclusion(&mut g, crate::filters::UNION);

        let inner = g.face_ids().find(|&f| f != g.unbounded_face && g.face(f).boundary.is_some()).unwrap();
        assert_eq!(g.face(inner).filled, Some(true));
        assert_eq!(g.face(g.unbounded_face).filled, Some(false));
    }
}
