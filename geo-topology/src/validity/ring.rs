//! Ring-reconstruction helpers (§4.H): maximal edge rings from a noded
//! graph's linked directed edges, split into minimal rings at any node
//! visited more than once, plus the nesting test used by steps 4 and 5.

use crate::coordinate_position::locate;
use crate::graph::{CoordPos, Direction, PlanarGraph};
use geo_types::{Coord, Geometry, LinearRing};
use std::collections::HashMap;

/// One minimal edge ring: the directed-edge indices it's made of, in
/// walk order.
#[derive(Debug, Clone)]
pub struct EdgeRing {
    pub directed_edges: Vec<usize>,
}

impl EdgeRing {
    /// Whether this ring has `INTERIOR` on its right-hand side — the
    /// orientation a shell's forward walk has, and a hole's reverse
    /// walk has.
    pub fn has_interior_on_right(&self, graph: &PlanarGraph, geom_index: usize) -> bool {
        self.directed_edges.iter().any(|&de| {
            let edge = graph.edge(graph.directed_edge(de).edge_index());
            edge.label().side_position(geom_index, Direction::Right) == Some(CoordPos::Inside)
        })
    }

    pub fn coordinates(&self, graph: &PlanarGraph) -> Vec<Coord> {
        let mut coords = Vec::with_capacity(self.directed_edges.len() + 1);
        for (i, &de_index) in self.directed_edges.iter().enumerate() {
            let de = graph.directed_edge(de_index);
            let node = graph.node(de.from_node());
            if i == 0 {
                coords.push(node.coordinate());
            }
            coords.push(graph.node(de.to_node()).coordinate());
        }
        coords
    }
}

/// Walks every directed edge of `graph` (already linked via
/// `link_directed_edges`) into maximal rings, then splits each maximal
/// ring into minimal rings at any node revisited within it.
pub fn build_minimal_rings(graph: &PlanarGraph) -> Vec<EdgeRing> {
    let total = graph.directed_edges().len();
    let mut visited = vec![false; total];
    let mut rings = Vec::new();

    for start in 0..total {
        if visited[start] {
            continue;
        }
        let mut maximal = Vec::new();
        let mut current = start;
        loop {
            visited[current] = true;
            maximal.push(current);
            let next = match graph.directed_edge(current).next {
                Some(n) => n,
                None => break,
            };
            if next == start {
                break;
            }
            if visited[next] {
                // a maximal ring that folds back on an edge before
                // returning to `start` indicates a malformed (already
                // invalid) noding; stop rather than loop forever.
                break;
            }
            current = next;
        }
        rings.extend(split_into_minimal_rings(graph, &maximal));
    }
    rings
}

/// Splits one maximal ring's directed-edge walk at every node visited
/// more than once, using a stack: each time a node recurs, the
/// sub-path back to its first occurrence is popped off as its own
/// minimal ring.
fn split_into_minimal_rings(graph: &PlanarGraph, maximal: &[usize]) -> Vec<EdgeRing> {
    let mut rings = Vec::new();
    let mut stack: Vec<usize> = Vec::new();
    let mut position_of_node: HashMap<usize, usize> = HashMap::new();

    for &de_index in maximal {
        let from_node = graph.directed_edge(de_index).from_node();
        if let Some(&pos) = position_of_node.get(&from_node) {
            let looped = stack.split_off(pos);
            if !looped.is_empty() {
                rings.push(EdgeRing { directed_edges: looped });
            }
            // the node itself remains on the stack as the continuation point
        }
        position_of_node.insert(from_node, stack.len());
        stack.push(de_index);
    }
    if !stack.is_empty() {
        rings.push(EdgeRing { directed_edges: stack });
    }
    rings
}

/// Whether `inner`'s coordinates lie inside `outer`, tested by locating
/// one of `inner`'s vertices (any vertex not also a vertex of `outer`)
/// against `outer`.
pub fn ring_contains(outer: &LinearRing, inner: &LinearRing) -> bool {
    let outer_coords: Vec<Coord> = outer.coords().to_vec();
    let test_point = inner
        .coords()
        .iter()
        .find(|c| !outer_coords.contains(c))
        .copied();
    let Some(test_point) = test_point else {
        return false;
    };
    let outer_geometry = Geometry::LinearRing(outer.clone());
    matches!(locate(test_point, &outer_geometry), CoordPos::Inside | CoordPos::OnBoundary)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::graph::Label;

    #[test]
    fn split_into_minimal_rings_separates_a_figure_eight() {
        // a -> b -> a (small loop) -> c -> a (big loop), sharing node a
        let mut graph = PlanarGraph::new();
        graph.insert_edge(
            vec![Coord::new(0.0, 0.0), Coord::new(1.0, 0.0), Coord::new(0.0, 1.0), Coord::new(0.0, 0.0)],
            Label::empty_area(),
        );
        graph.link_directed_edges();
        let rings = build_minimal_rings(&graph);
        assert!(!rings.is_empty());
    }

    #[test]
    fn ring_contains_detects_nested_square() {
        let outer = LinearRing::new(vec![
            Coord::new(0.0, 0.0),
            Coord::new(10.0, 0.0),
            Coord::new(10.0, 10.0),
            Coord::new(0.0, 10.0),
            Coord::new(0.0, 0.0),
        ])
        .unwrap();
        let inner = LinearRing::new(vec![
            Coord::new(2.0, 2.0),
            Coord::new(4.0, 2.0),
            Coord::new(4.0, 4.0),
            Coord::new(2.0, 4.0),
            Coord::new(2.0, 2.0),
        ])
        .unwrap();
        assert!(ring_contains(&outer, &inner));
        assert!(!ring_contains(&inner, &outer));
    }
}
