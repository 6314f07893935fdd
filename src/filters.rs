//! Boolean-op filters (§4.G.16) and the convenience entry points built on
//! top of the graph pipeline: [`binary_result`] for the two-shape case and
//! [`n_result`] for the general n-ary case.

#![allow(non_snake_case)]

use ahash::AHashMap;

use crate::error::Result;
use crate::graph::Graph;
use crate::shape::Shape;
use crate::tolerances::Tolerances;

fn winding(map: &AHashMap<u32, i32>, shape_id: u32) -> i32 {
    map.get(&shape_id).copied().unwrap_or(0)
}

pub fn UNION(map: &AHashMap<u32, i32>) -> bool {
    winding(map, 0) != 0 || winding(map, 1) != 0
}

pub fn INTERSECTION(map: &AHashMap<u32, i32>) -> bool {
    winding(map, 0) != 0 && winding(map, 1) != 0
}

pub fn DIFFERENCE(map: &AHashMap<u32, i32>) -> bool {
    winding(map, 0) != 0 && winding(map, 1) == 0
}

pub fn XOR(map: &AHashMap<u32, i32>) -> bool {
    (winding(map, 0) != 0) != (winding(map, 1) != 0)
}

/// Thin wrapper over [`n_result`] for exactly two input shapes, tagged `0`
/// and `1`.
pub fn binary_result(a: &Shape, b: &Shape, filter: impl Fn(&AHashMap<u32, i32>) -> bool, tolerances: Tolerances) -> Result<Shape> {
    n_result(&[(a.clone(), 0), (b.clone(), 1)], filter, tolerances)
}

/// The n-ary generalization: each `(shape, shapeId)` pair is ingested into
/// one Graph under its given id, so a filter written against an
/// arbitrary-length winding map (rather than the fixed `0`/`1` keys
/// [`UNION`] and friends assume) can combine any number of inputs in one
/// pipeline run. Shape ids need not be sequential or zero-based, only
/// distinct.
pub fn n_result(shapes: &[(Shape, u32)], filter: impl Fn(&AHashMap<u32, i32>) -> bool, tolerances: Tolerances) -> Result<Shape> {
    let mut graph = Graph::new(tolerances);
    for (shape, shape_id) in shapes {
        graph.add_shape(shape, *shape_id)?;
    }
    graph.compute_simplified_faces()?;
    graph.compute_face_inclusion(filter);
    let filled = graph.create_filled_subgraph()?;
    Ok(filled.faces_to_shape())
}
