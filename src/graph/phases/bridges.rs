//! G.7 — `removeBridges`: Tarjan's bridge-finding algorithm over the
//! undirected multigraph of live edges, removing every bridge (an edge
//! whose removal disconnects its two endpoints' 2-edge-connected
//! component). Bridges cannot bound a finite face, so dropping them
//! simplifies face extraction without changing the filled point-set.
//!
//! The DFS marks edges visited rather than vertex pairs, since this is a
//! multigraph (two vertices may share several edges).

use ahash::AHashSet;

use crate::graph::{EdgeId, Graph, HalfEdgeId, VertexId};

pub fn remove_bridges(graph: &mut Graph) {
    let vertex_ids: Vec<VertexId> = graph.vertex_ids().collect();
    for &v in &vertex_ids {
        let vertex = graph.vertex_mut(v);
        vertex.visited = false;
        vertex.visit_index = 0;
        vertex.low_index = 0;
        vertex.parent = None;
    }

    let mut bridges: Vec<EdgeId> = Vec::new();
    let mut timer: u32 = 0;
    let mut visited_edges: AHashSet<EdgeId> = AHashSet::default();

    for start in vertex_ids {
        if graph.vertex(start).visited {
            continue;
        }
        dfs(graph, start, &mut timer, &mut visited_edges, &mut bridges);
    }

    for b in bridges {
        if graph.edge(b).is_live() {
            let fwd = graph.edge(b).forward_half;
            graph.splice_half_edge(fwd, &[]);
            graph.remove_edge(b);
        }
    }
}

fn dfs(graph: &mut Graph, v: VertexId, timer: &mut u32, visited_edges: &mut AHashSet<EdgeId>, bridges: &mut Vec<EdgeId>) {
    graph.vertex_mut(v).visited = true;
    *timer += 1;
    graph.vertex_mut(v).visit_index = *timer;
    graph.vertex_mut(v).low_index = *timer;

    let incident: Vec<HalfEdgeId> = graph.vertex(v).incident_half_edges.to_vec();
    for he in incident {
        let edge_id = graph.half_edge(he).edge;
        if !graph.edge(edge_id).is_live() {
            continue;
        }
        if !visited_edges.insert(edge_id) {
            continue;
        }
        let to = graph.dest(he);
        if !graph.vertex(to).visited {
            graph.vertex_mut(to).parent = Some(he);
            dfs(graph, to, timer, visited_edges, bridges);
            let to_low = graph.vertex(to).low_index;
            if to_low < graph.vertex(v).low_index {
                graph.vertex_mut(v).low_index = to_low;
            }
            if to_low > graph.vertex(v).visit_index {
                bridges.push(edge_id);
            }
        } else {
            let to_visit = graph.vertex(to).visit_index;
            if to_visit < graph.vertex(v).low_index {
                graph.vertex_mut(v).low_index = to_visit;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::{Line, Segment};
    use crate::tolerances::Tolerances;
    use kurbo::Point;

    #[test]
    fn removes_dangling_edge_off_a_cycle() {
        let mut g = Graph::new(Tolerances::default());
        let v0 = g.add_vertex(Point::new(0.0, 0.0));
        let v1 = g.add_vertex(Point::new(10.0, 0.0));
        let v2 = g.add_vertex(Point::new(5.0, 10.0));
        let v3 = g.add_vertex(Point::new(5.0, -10.0)); // dangling tail off v0

        g.add_edge(Segment::Line(Line::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0))), v0, v1);
        g.add_edge(Segment::Line(Line::new(Point::new(10.0, 0.0), Point::new(5.0, 10.0))), v1, v2);
        g.add_edge(Segment::Line(Line::new(Point::new(5.0, 10.0), Point::new(0.0, 0.0))), v2, v0);
        g.add_edge(Segment::Line(Line::new(Point::new(0.0, 0.0), Point::new(5.0, -10.0))), v0, v3);

        remove_bridges(&mut g);
        assert_eq!(g.edge_ids().count(), 3);
    }

    #[test]
    fn keeps_a_simple_cycle_intact() {
        let mut g = Graph::new(Tolerances::default());
        let v0 = g.add_vertex(Point::new(0.0, 0.0));
        let v1 = g.add_vertex(Point::new(10.0, 0.0));
        let v2 = g.add_vertex(Point::new(5.0, 10.0));
        g.add_edge(Segment::Line(Line::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0))), v0, v1);
        g.add_edge(Segment::Line(Line::new(Point::new(10.0, 0.0), Point::new(5.0, 10.0))), v1, v2);
        g.add_edge(Segment::Line(Line::new(Point::new(5.0, 10.0), Point::new(0.0, 0.0))), v2, v0);

        remove_bridges(&mut g);
        assert_eq!(g.edge_ids().count(), 3);
    }
}
