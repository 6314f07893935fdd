//! G.11 — `computeBoundaryGraph`: resolve every outer (non-positive-area)
//! boundary produced by [`extract_faces`](super::faces::extract_faces) to
//! the face that contains it, attaching it as a hole of that face.
//!
//! An outer boundary's containing face is found by casting a ray from one
//! of its half-edges at a fixed angle and taking the nearest crossing. That
//! crossing may itself belong to an outer boundary that hasn't been
//! resolved yet (boundaries can nest arbitrarily deep), so resolution runs
//! as a fixpoint: keep resolving whatever boundaries have a ready answer
//! and stop when a full pass makes no progress.

use kurbo::Vec2;

use crate::error::{Error, Result};
use crate::graph::{BoundaryId, EdgeId, FaceId, Graph, HalfEdgeId};
use crate::segment::ray::{Ray, RayHit};

pub fn compute_boundary_graph(graph: &mut Graph) -> Result<()> {
    let mut pending: Vec<BoundaryId> = graph.boundary_ids().filter(|&b| graph.boundary(b).is_outer()).collect();

    loop {
        let before = pending.len();
        let mut still_pending = Vec::new();

        for boundary_id in pending {
            match resolve_one(graph, boundary_id) {
                Some(face_id) => attach_hole(graph, boundary_id, face_id),
                None => still_pending.push(boundary_id),
            }
        }

        if still_pending.is_empty() {
            return Ok(());
        }
        if still_pending.len() == before {
            return Err(Error::IndeterminateRay { boundary: still_pending[0], attempts: 0 });
        }
        pending = still_pending;
    }
}

/// Try to resolve `boundary_id`'s containing face via the nearest ray
/// crossing whose owning half-edge already has a face assigned. Returns
/// `None` if the nearest relevant crossing isn't resolved yet.
fn resolve_one(graph: &Graph, boundary_id: BoundaryId) -> Option<FaceId> {
    let boundary = graph.boundary(boundary_id);
    let first = *boundary.half_edges.first()?;
    let origin = graph.half_edge_segment(first).position_at(0.5);
    let angle = graph.tolerances.extreme_ray_angle;
    let ray = Ray::new(origin, Vec2::new(angle.cos(), angle.sin()));

    let own: Vec<HalfEdgeId> = boundary.half_edges.clone();

    let mut best: Option<(f64, HalfEdgeId, RayHit)> = None;
    for edge_id in graph.edge_ids() {
        let fwd = graph.edge(edge_id).forward_half;
        if own.contains(&fwd) {
            continue;
        }
        let hits = crate::segment::ray::intersect_ray(&graph.half_edge_segment(fwd), &ray, graph.tolerances.ray_back_clip_epsilon);
        for hit in hits {
            if best.as_ref().map_or(true, |(d, _, _)| hit.distance < *d) {
                best = Some((hit.distance, fwd, hit));
            }
        }
    }

    let (_, fwd, hit) = match best {
        Some(b) => b,
        // Ray hit nothing at all: this boundary isn't nested inside
        // anything and borders the unbounded face directly.
        None => return Some(graph.unbounded_face),
    };
    let candidate = if hit.wind >= 0 { fwd } else { graph.half_edge(fwd).twin };
    graph.half_edge(candidate).face
}

fn attach_hole(graph: &mut Graph, boundary_id: BoundaryId, face_id: FaceId) {
    graph.face_mut(face_id).holes.push(boundary_id);
    let half_edges = graph.boundary(boundary_id).half_edges.clone();
    for he in half_edges {
        graph.half_edge_mut(he).face = Some(face_id);
    }
}

#[allow(dead_code)]
fn edge_of(graph: &Graph, he: HalfEdgeId) -> EdgeId {
    graph.half_edge(he).edge
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::phases::{faces, order};
    use crate::segment::{Line, Segment};
    use crate::tolerances::Tolerances;
    use kurbo::Point;

    /// A square with a smaller square hole inside it, fully ingested as two
    /// separate closed loops sharing no vertices.
    fn square_with_hole() -> Graph {
        let mut g = Graph::new(Tolerances::default());

        let o0 = g.add_vertex(Point::new(0.0, 0.0));
        let o1 = g.add_vertex(Point::new(10.0, 0.0));
        let o2 = g.add_vertex(Point::new(10.0, 10.0));
        let o3 = g.add_vertex(Point::new(0.0, 10.0));
        g.add_edge(Segment::Line(Line::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0))), o0, o1);
        g.add_edge(Segment::Line(Line::new(Point::new(10.0, 0.0), Point::new(10.0, 10.0))), o1, o2);
        g.add_edge(Segment::Line(Line::new(Point::new(10.0, 10.0), Point::new(0.0, 10.0))), o2, o3);
        g.add_edge(Segment::Line(Line::new(Point::new(0.0, 10.0), Point::new(0.0, 0.0))), o3, o0);

        // inner hole boundary traversed clockwise (negative area) so it
        // reads as an "outer" (hole) boundary from inside the filled face.
        let i0 = g.add_vertex(Point::new(3.0, 3.0));
        let i1 = g.add_vertex(Point::new(3.0, 7.0));
        let i2 = g.add_vertex(Point::new(7.0, 7.0));
        let i3 = g.add_vertex(Point::new(7.0, 3.0));
        g.add_edge(Segment::Line(Line::new(Point::new(3.0, 3.0), Point::new(3.0, 7.0))), i0, i1);
        g.add_edge(Segment::Line(Line::new(Point::new(3.0, 7.0), Point::new(7.0, 7.0))), i1, i2);
        g.add_edge(Segment::Line(Line::new(Point::new(7.0, 7.0), Point::new(7.0, 3.0))), i2, i3);
        g.add_edge(Segment::Line(Line::new(Point::new(7.0, 3.0), Point::new(3.0, 3.0))), i3, i0);

        g
    }

    #[test]
    fn hole_boundary_attaches_to_enclosing_face() {
        let mut g = square_with_hole();
        order::order_vertex_edges(&mut g);
        faces::extract_faces(&mut g);
        compute_boundary_graph(&mut g).unwrap();

        let outer_ring_face = g
            .face_ids()
            .find(|&f| f != g.unbounded_face && g.face(f).boundary.is_some() && !g.face(f).holes.is_empty());
        assert!(outer_ring_face.is_some());
    }
}
