//! G.14 — `createFilledSubGraph`: rebuild a clean graph containing only the
//! edges that actually separate filled from unfilled space, then rerun
//! face extraction on that smaller graph so the filled regions can be
//! walked out as boundaries.
//!
//! The rebuilt graph never gets any [`Loop`](crate::graph::Loop)s — loops
//! only existed to drive G.12's winding computation, which is already
//! done by the time this phase runs. That means [`Graph::splice_half_edge`]
//! is a no-op here and edges can be removed directly during
//! `collapse_adjacent_edges`.

use ahash::AHashMap;

use crate::error::Result;
use crate::graph::{FaceId, Graph, VertexId};
use crate::segment::Segment;
use crate::tolerances::Tolerances;

use super::{boundary_graph, faces, order};

pub fn create_filled_subgraph(graph: &Graph) -> Result<Graph> {
    let mut out = Graph::new(graph.tolerances);
    let mut vertex_map: AHashMap<VertexId, VertexId> = AHashMap::default();

    for edge_id in graph.edge_ids() {
        let edge = graph.edge(edge_id);
        let forward_filled = graph.face(graph.half_edge(edge.forward_half).face.unwrap()).filled.unwrap_or(false);
        let reversed_filled = graph.face(graph.half_edge(edge.reversed_half).face.unwrap()).filled.unwrap_or(false);
        if forward_filled == reversed_filled {
            continue;
        }
        let start = get_or_create_vertex(graph, &mut out, &mut vertex_map, edge.start_vertex);
        let end = get_or_create_vertex(graph, &mut out, &mut vertex_map, edge.end_vertex);
        out.add_edge(edge.segment.clone(), start, end);
    }

    collapse_adjacent_edges(&mut out);
    order::order_vertex_edges(&mut out);
    faces::extract_faces(&mut out);
    boundary_graph::compute_boundary_graph(&mut out)?;
    fill_alternating_faces(&mut out);
    Ok(out)
}

fn get_or_create_vertex(source: &Graph, out: &mut Graph, map: &mut AHashMap<VertexId, VertexId>, id: VertexId) -> VertexId {
    if let Some(&existing) = map.get(&id) {
        return existing;
    }
    let point = source.vertex(id).point;
    let new_id = out.add_vertex(point);
    map.insert(id, new_id);
    new_id
}

/// Merge any degree-2 vertex joining two straight edges whose tangents are
/// opposite (within `collinear_tangent_epsilon`) into one direct edge
/// between the far endpoints. Purely a tidy-up: it changes nothing about
/// which points are filled.
fn collapse_adjacent_edges(graph: &mut Graph) {
    let eps = graph.tolerances.collinear_tangent_epsilon;
    loop {
        let ids: Vec<VertexId> = graph.vertex_ids().collect();
        let mut changed = false;
        for v in ids {
            if !graph.vertex(v).is_live() || graph.vertex(v).degree() != 2 {
                continue;
            }
            let incident = graph.vertex(v).incident_half_edges.to_vec();
            let (h0, h1) = (incident[0], incident[1]);
            let e0 = graph.half_edge(h0).edge;
            let e1 = graph.half_edge(h1).edge;
            if e0 == e1 {
                continue; // a lone self-loop, leave it
            }
            let (Segment::Line(_), Segment::Line(_)) = (&graph.edge(e0).segment, &graph.edge(e1).segment) else {
                continue;
            };
            let t0 = graph.half_edge_segment(h0).start_tangent();
            let t1 = graph.half_edge_segment(h1).start_tangent();
            let cos_angle = t0.normalize().dot(t1.normalize());
            if (cos_angle + 1.0).abs() > eps {
                continue;
            }

            let far0 = graph.dest(h0);
            let far1 = graph.dest(h1);
            let replacement = if graph.half_edge(h0).origin == v {
                crate::segment::Line::new(graph.vertex(far0).point, graph.vertex(far1).point)
            } else {
                crate::segment::Line::new(graph.vertex(far1).point, graph.vertex(far0).point)
            };
            graph.remove_edge(e0);
            graph.remove_edge(e1);
            graph.remove_vertex(v);
            let (start, end) = if graph.vertex(far0).is_live() { (far0, far1) } else { (far1, far0) };
            graph.add_edge(Segment::Line(replacement), start, end);
            changed = true;
            break;
        }
        if !changed {
            break;
        }
    }
}

fn fill_alternating_faces(graph: &mut Graph) {
    graph.face_mut(graph.unbounded_face).filled = Some(false);
    let mut queue = std::collections::VecDeque::new();
    queue.push_back(graph.unbounded_face);
    let mut visited: std::collections::HashSet<FaceId> = std::collections::HashSet::new();
    visited.insert(graph.unbounded_face);

    while let Some(face_id) = queue.pop_front() {
        let cur = graph.face(face_id).filled.unwrap_or(false);
        for neighbor in neighbors(graph, face_id) {
            if visited.insert(neighbor) {
                graph.face_mut(neighbor).filled = Some(!cur);
                queue.push_back(neighbor);
            }
        }
    }
}

fn neighbors(graph: &Graph, face_id: FaceId) -> Vec<FaceId> {
    let face = graph.face(face_id).clone();
    let mut border = Vec::new();
    if let Some(b) = face.boundary {
        border.extend(graph.boundary(b).half_edges.iter().copied());
    }
    for hole in &face.holes {
        border.extend(graph.boundary(*hole).half_edges.iter().copied());
    }
    border
        .into_iter()
        .filter_map(|he| {
            let edge_id = graph.half_edge(he).edge;
            let is_forward = graph.half_edge(he).forward;
            let other = if is_forward { graph.edge(edge_id).reversed_half } else { graph.edge(edge_id).forward_half };
            graph.half_edge(other).face
        })
        .collect()
}
