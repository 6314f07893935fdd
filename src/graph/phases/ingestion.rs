//! G.1 — `addShape`/`addSubpath`: turn input [`Shape`]s into vertices,
//! edges and loops. No fusion of nearby vertices happens here; that is
//! [`collapse_vertices`](super::collapse::collapse_vertices)'s job (G.6).

use kurbo::Point;

use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId};
use crate::shape::{Shape, Subpath};

pub fn add_shape(graph: &mut Graph, shape: &Shape, shape_id: u32) -> Result<()> {
    for (subpath_index, subpath) in shape.subpaths.iter().enumerate() {
        add_subpath(graph, subpath, shape_id, subpath_index)?;
    }
    Ok(())
}

fn add_subpath(graph: &mut Graph, subpath: &Subpath, shape_id: u32, subpath_index: usize) -> Result<()> {
    let mut segments = subpath.segments.clone();
    if let Some(closing) = subpath.closing_segment() {
        segments.push(closing);
    }
    if segments.is_empty() {
        return Ok(());
    }
    for seg in &segments {
        if !seg.is_finite() {
            return Err(Error::InvalidGeometry { shape_id, subpath_index });
        }
    }

    let n = segments.len();
    let eps = graph.tolerances.vertex_epsilon;
    let join = |a: Point, b: Point| -> Point {
        if a.distance(b) < eps { a.midpoint(b) } else { b }
    };

    let mut verts: Vec<VertexId> = Vec::with_capacity(n + 1);
    if subpath.closed {
        for i in 0..n {
            let prev_end = segments[(i + n - 1) % n].end();
            let cur_start = segments[i].start();
            verts.push(graph.add_vertex(join(prev_end, cur_start)));
        }
    } else {
        verts.push(graph.add_vertex(segments[0].start()));
        for i in 1..n {
            verts.push(graph.add_vertex(join(segments[i - 1].end(), segments[i].start())));
        }
        verts.push(graph.add_vertex(segments[n - 1].end()));
    }

    let mut half_edges = Vec::with_capacity(n);
    for (i, seg) in segments.into_iter().enumerate() {
        let start = verts[i];
        let end = if subpath.closed { verts[(i + 1) % n] } else { verts[i + 1] };
        let edge_id = graph.add_edge(seg, start, end);
        half_edges.push(graph.edge(edge_id).forward_half);
    }
    graph.add_loop(shape_id, half_edges);
    Ok(())
}
