//! G.12 — `computeWindingMap`: assign every face a per-shape winding
//! number.
//!
//! Crossing an edge from the face on one side to the face on the other
//! changes the winding number of whichever shapes traverse that edge by a
//! fixed amount (the "edge differential"): +1 per loop occurrence that
//! traverses the edge forward, -1 per occurrence traversing it reversed.
//! The unbounded face is winding zero for every shape by definition; every
//! other face's winding is recovered by walking that differential outward
//! from a face whose winding is already known. Like G.11 this is a
//! fixpoint over "faces with at least one already-resolved neighbor",
//! since face adjacency order isn't otherwise known up front.

use ahash::AHashMap;

use crate::error::{Error, Result};
use crate::graph::{EdgeId, FaceId, Graph};

pub fn compute_winding_map(graph: &mut Graph) -> Result<()> {
    let shape_ids: Vec<u32> = graph.shape_ids.iter().copied().collect();
    let zero: AHashMap<u32, i32> = shape_ids.iter().map(|&s| (s, 0)).collect();
    graph.face_mut(graph.unbounded_face).winding_map = Some(zero);

    let differential = build_differential(graph);

    let mut pending: Vec<FaceId> = graph.face_ids().filter(|&f| f != graph.unbounded_face).collect();
    loop {
        let before = pending.len();
        let mut still_pending = Vec::new();
        for face_id in pending {
            if !try_resolve(graph, face_id, &differential) {
                still_pending.push(face_id);
            }
        }
        if still_pending.is_empty() {
            return Ok(());
        }
        if still_pending.len() == before {
            return Err(Error::NumericalFailure {
                phase: "computeWindingMap",
                detail: format!("{} face(s) never reached a resolved neighbor", still_pending.len()),
            });
        }
        pending = still_pending;
    }
}

fn build_differential(graph: &Graph) -> AHashMap<(EdgeId, u32), i32> {
    let mut differential: AHashMap<(EdgeId, u32), i32> = AHashMap::default();
    for loop_id in graph.loop_ids() {
        let lp = graph.loop_(loop_id);
        for &he in &lp.half_edges {
            let edge_id = graph.half_edge(he).edge;
            if !graph.edge(edge_id).is_live() {
                continue;
            }
            let sign: i32 = if graph.half_edge(he).forward { 1 } else { -1 };
            *differential.entry((edge_id, lp.shape_id)).or_insert(0) += sign;
        }
    }
    differential
}

/// Look across every edge bordering `face_id` for a neighbor whose winding
/// map is already known; if found, derive `face_id`'s map from it and
/// return `true`.
fn try_resolve(graph: &mut Graph, face_id: FaceId, differential: &AHashMap<(EdgeId, u32), i32>) -> bool {
    let face = graph.face(face_id).clone();
    let mut border = Vec::new();
    if let Some(b) = face.boundary {
        border.extend(graph.boundary(b).half_edges.iter().copied());
    }
    for hole in &face.holes {
        border.extend(graph.boundary(*hole).half_edges.iter().copied());
    }

    for he in border {
        let edge_id = graph.half_edge(he).edge;
        let edge = graph.edge(edge_id);
        let is_forward = graph.half_edge(he).forward;
        let other_half = if is_forward { edge.reversed_half } else { edge.forward_half };
        let other_face = match graph.half_edge(other_half).face {
            Some(f) => f,
            None => continue,
        };
        let other_map = match &graph.face(other_face).winding_map {
            Some(m) => m.clone(),
            None => continue,
        };

        let mut map = other_map;
        for (shape_id, w) in map.iter_mut() {
            let diff = differential.get(&(edge_id, *shape_id)).copied().unwrap_or(0);
            *w += if is_forward { diff } else { -diff };
        }
        graph.face_mut(face_id).winding_map = Some(map);
        return true;
    }
    false
}
