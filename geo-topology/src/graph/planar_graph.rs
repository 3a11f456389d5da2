use super::{CoordPos, DirectedEdge, Edge, Label, Node};
use geo_types::Coord;

use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Lexicographic-on-`(x, y)` ordering key for the node map, matching the
/// deterministic-traversal guarantee of §5: the graph's iteration order
/// must never depend on coordinate hashing.
#[derive(Clone, Copy, Debug)]
pub(crate) struct NodeKey(pub(crate) Coord);

impl PartialEq for NodeKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.x == other.0.x && self.0.y == other.0.y
    }
}
impl Eq for NodeKey {}
impl PartialOrd for NodeKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for NodeKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .x
            .partial_cmp(&other.0.x)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.0.y.partial_cmp(&other.0.y).unwrap_or(Ordering::Equal))
    }
}

/// The planar graph: an arena of nodes, edges, and directed edges.
/// Inter-entity relationships (from/to node, the opposite directed edge,
/// ring-walk `next` pointers) are plain indices into the arena's `Vec`s,
/// never owning pointers — see the crate-level design notes on why a
/// reference-cycle-free arena replaces the node/edge-end back-reference
/// graphs a naive port would otherwise need.
#[derive(Debug, Clone, Default)]
pub struct PlanarGraph {
    nodes: Vec<Node>,
    node_index: BTreeMap<NodeKey, usize>,
    edges: Vec<Edge>,
    directed_edges: Vec<DirectedEdge>,
}

impl PlanarGraph {
    pub fn new() -> Self {
        PlanarGraph::default()
    }

    pub fn node(&self, index: usize) -> &Node {
        &self.nodes[index]
    }

    pub fn node_mut(&mut self, index: usize) -> &mut Node {
        &mut self.nodes[index]
    }

    /// Iterates nodes in lexicographic coordinate order (deterministic,
    /// per §5).
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.node_index.values().map(move |&i| &self.nodes[i])
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn find_node(&self, coord: Coord) -> Option<usize> {
        self.node_index.get(&NodeKey(coord)).copied()
    }

    /// Finds or creates the node at `coord`, returning its arena index.
    pub fn add_node_with_coordinate(&mut self, coord: Coord) -> usize {
        debug_assert!(coord.x.is_finite() && coord.y.is_finite());
        if let Some(&index) = self.node_index.get(&NodeKey(coord)) {
            return index;
        }
        let index = self.nodes.len();
        self.nodes.push(Node::new(coord));
        self.node_index.insert(NodeKey(coord), index);
        index
    }

    pub fn edge(&self, index: usize) -> &Edge {
        &self.edges[index]
    }

    pub fn edge_mut(&mut self, index: usize) -> &mut Edge {
        &mut self.edges[index]
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn directed_edge(&self, index: usize) -> &DirectedEdge {
        &self.directed_edges[index]
    }

    pub fn directed_edge_mut(&mut self, index: usize) -> &mut DirectedEdge {
        &mut self.directed_edges[index]
    }

    pub fn directed_edges(&self) -> &[DirectedEdge] {
        &self.directed_edges
    }

    /// Links every directed edge to the next one walking its ring
    /// clockwise (§4.H): at each node, an incoming directed edge's
    /// `next` is the outgoing edge immediately before it in the node's
    /// counter-clockwise angular order (equivalently, the next one
    /// clockwise). Produces *maximal* edge rings; splitting those into
    /// minimal rings at repeated nodes is the caller's job.
    pub fn link_directed_edges(&mut self) {
        for node_index in 0..self.nodes.len() {
            let star = self.nodes[node_index].star().to_vec();
            let n = star.len();
            if n == 0 {
                continue;
            }
            for i in 0..n {
                let outgoing = star[i];
                let prev = star[(i + n - 1) % n];
                let incoming = self.directed_edges[prev].sym;
                self.directed_edges[incoming].next = Some(outgoing);
            }
        }
    }

    /// Inserts a new edge and its two `DirectedEdge`s (forward and
    /// reverse), wiring each into its endpoint node's star in
    /// counter-clockwise angular order. Returns the new edge's index.
    pub fn insert_edge(&mut self, coords: Vec<Coord>, label: Label) -> usize {
        let first = coords[0];
        let last = *coords.last().unwrap();
        let second = coords[1];
        let second_to_last = coords[coords.len() - 2];

        let edge_index = self.edges.len();
        let mut edge = Edge::new(coords, label);
        // Every edge always has at least its two endpoints in its
        // intersection list, even if no other edge ever crosses it —
        // the relate engine's edge-end builder relies on every edge
        // contributing at least one sub-edge per endpoint.
        edge.add_edge_intersection_list_endpoints();
        self.edges.push(edge);

        let from_node = self.add_node_with_coordinate(first);
        let to_node = self.add_node_with_coordinate(last);

        let forward_index = self.directed_edges.len();
        self.directed_edges.push(DirectedEdge::new(
            edge_index, from_node, to_node, first, second, true,
        ));
        let backward_index = self.directed_edges.len();
        self.directed_edges.push(DirectedEdge::new(
            edge_index, to_node, from_node, last, second_to_last, false,
        ));
        self.directed_edges[forward_index].sym = backward_index;
        self.directed_edges[backward_index].sym = forward_index;

        self.nodes[from_node].star_mut().push(forward_index);
        self.sort_star(from_node);
        self.nodes[to_node].star_mut().push(backward_index);
        self.sort_star(to_node);

        edge_index
    }

    fn sort_star(&mut self, node_index: usize) {
        let directed_edges = &self.directed_edges;
        self.nodes[node_index]
            .star_mut()
            .sort_by(|&a, &b| directed_edges[a].angle().partial_cmp(&directed_edges[b].angle()).unwrap());
    }

    pub fn is_boundary_node(&self, geom_index: usize, coord: Coord) -> bool {
        self.find_node(coord)
            .map(|index| self.nodes[index].label().on_position(geom_index) == Some(CoordPos::OnBoundary))
            .unwrap_or(false)
    }

    pub fn boundary_nodes(&self, geom_index: usize) -> impl Iterator<Item = &Node> {
        self.nodes().filter(move |node| {
            node.label().on_position(geom_index) == Some(CoordPos::OnBoundary)
        })
    }

    /// Clones the graph, swapping every label's geometry-0/geometry-1
    /// slots if `to_arg_index` differs from `from_arg_index`. Used when a
    /// relate operation needs the same graph to play both argument roles
    /// (e.g. `A.relate(A)`).
    pub fn clone_for_arg_index(&self, from_arg_index: usize, to_arg_index: usize) -> Self {
        let mut graph = self.clone();
        if from_arg_index != to_arg_index {
            for node in &mut graph.nodes {
                node.label_mut().swap_args();
            }
            for edge in &mut graph.edges {
                edge.label_mut().swap_args();
            }
        }
        graph
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn insert_edge_wires_sym_pointers() {
        let mut graph = PlanarGraph::new();
        let coords = vec![Coord::new(0.0, 0.0), Coord::new(1.0, 0.0), Coord::new(1.0, 1.0)];
        graph.insert_edge(coords, Label::empty_line_or_point());

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.directed_edges().len(), 2);
        let de0 = graph.directed_edge(0);
        let de1 = graph.directed_edge(de0.sym);
        assert_eq!(de1.sym, 0);
        assert_eq!(de0.from_node(), de1.to_node());
        assert_eq!(de0.to_node(), de1.from_node());
    }

    #[test]
    fn shared_endpoint_reuses_the_same_node() {
        let mut graph = PlanarGraph::new();
        graph.insert_edge(vec![Coord::new(0.0, 0.0), Coord::new(1.0, 0.0)], Label::empty_line_or_point());
        graph.insert_edge(vec![Coord::new(0.0, 0.0), Coord::new(0.0, 1.0)], Label::empty_line_or_point());
        assert_eq!(graph.node_count(), 3);
        let shared = graph.find_node(Coord::new(0.0, 0.0)).unwrap();
        assert_eq!(graph.node(shared).star().len(), 2);
    }
}
