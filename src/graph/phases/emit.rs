//! G.15 — `facesToShape`: walk every filled face's boundary and holes back
//! out into a [`Shape`].

use crate::graph::{Graph, HalfEdgeId};
use crate::shape::{Shape, Subpath};

pub fn faces_to_shape(graph: &Graph) -> Shape {
    let mut subpaths = Vec::new();
    for face_id in graph.face_ids() {
        let face = graph.face(face_id);
        if face.filled != Some(true) {
            continue;
        }
        if let Some(b) = face.boundary {
            subpaths.push(boundary_to_subpath(graph, &graph.boundary(b).half_edges));
        }
        for hole in &face.holes {
            subpaths.push(boundary_to_subpath(graph, &graph.boundary(*hole).half_edges));
        }
    }
    Shape::new(subpaths)
}

fn boundary_to_subpath(graph: &Graph, half_edges: &[HalfEdgeId]) -> Subpath {
    let segments = half_edges.iter().map(|&he| graph.half_edge_segment(he)).collect();
    Subpath::closed(segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::phases::{boundary_graph, faces, inclusion, ingestion, order, winding};
    use crate::graph::Graph;
    use crate::segment::{Line, Segment};
    use crate::shape::Subpath as SubpathIn;
    use crate::tolerances::Tolerances;
    use kurbo::Point;

    #[test]
    fn emits_one_subpath_for_a_filled_square() {
        let mut g = Graph::new(Tolerances::default());
        let segs = vec![
            Segment::Line(Line::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0))),
            Segment::Line(Line::new(Point::new(10.0, 0.0), Point::new(10.0, 10.0))),
            Segment::Line(Line::new(Point::new(10.0, 10.0), Point::new(0.0, 10.0))),
            Segment::Line(Line::new(Point::new(0.0, 10.0), Point::new(0.0, 0.0))),
        ];
        ingestion::add_shape(&mut g, &Shape::new(vec![SubpathIn::closed(segs)]), 0).unwrap();
        order::order_vertex_edges(&mut g);
        faces::extract_faces(&mut g);
        boundary_graph::compute_boundary_graph(&mut g).unwrap();
        winding::compute_winding_map(&mut g).unwrap();
        inclusion::compute_face_inclusion(&mut g, crate::filters::UNION);
        let filled = g.create_filled_subgraph().unwrap();

        let shape = filled.faces_to_shape();
        assert_eq!(shape.subpaths.len(), 1);
        assert_eq!(shape.subpaths[0].segments.len(), 4);
    }
}
