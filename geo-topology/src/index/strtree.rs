//! Sort-Tile-Recursive packed R-tree: a query-only spatial index built
//! once from a batch of `(Envelope, item)` pairs.

use geo_types::Envelope;

const DEFAULT_NODE_CAPACITY: usize = 10;

enum Node<T> {
    Leaf { envelope: Envelope, item: T },
    Branch { envelope: Envelope, children: Vec<Node<T>> },
}

impl<T> Node<T> {
    fn envelope(&self) -> &Envelope {
        match self {
            Node::Leaf { envelope, .. } => envelope,
            Node::Branch { envelope, .. } => envelope,
        }
    }
}

/// A packed, immutable R-tree. Built once; `query` and `query_visitor`
/// are the only operations afterward.
pub struct StrTree<T> {
    root: Option<Node<T>>,
    node_capacity: usize,
}

impl<T> StrTree<T> {
    pub fn build(items: Vec<(Envelope, T)>) -> Self {
        Self::build_with_capacity(items, DEFAULT_NODE_CAPACITY)
    }

    pub fn build_with_capacity(items: Vec<(Envelope, T)>, node_capacity: usize) -> Self {
        let leaves: Vec<Node<T>> = items
            .into_iter()
            .map(|(envelope, item)| Node::Leaf { envelope, item })
            .collect();
        let root = pack(leaves, node_capacity);
        StrTree { root, node_capacity }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn query(&self, query_envelope: &Envelope) -> Vec<&T> {
        let mut out = Vec::new();
        self.query_visitor(query_envelope, |item| out.push(item));
        out
    }

    pub fn query_visitor<'a>(&'a self, query_envelope: &Envelope, mut visit: impl FnMut(&'a T)) {
        if let Some(root) = &self.root {
            query_node(root, query_envelope, &mut visit);
        }
    }

    pub fn node_capacity(&self) -> usize {
        self.node_capacity
    }
}

fn query_node<'a, T>(node: &'a Node<T>, query_envelope: &Envelope, visit: &mut impl FnMut(&'a T)) {
    if !node.envelope().intersects(query_envelope) {
        return;
    }
    match node {
        Node::Leaf { item, .. } => visit(item),
        Node::Branch { children, .. } => {
            for child in children {
                query_node(child, query_envelope, visit);
            }
        }
    }
}

/// Packs one level of nodes into the next, repeating until a single
/// root remains. Each packing pass follows the STR recipe: sort by
/// x-midpoint, slice into `ceil(sqrt(n/M))` vertical strips, sort each
/// strip by y-midpoint, and group runs of `M` into parent nodes.
fn pack<T>(mut level: Vec<Node<T>>, node_capacity: usize) -> Option<Node<T>> {
    if level.is_empty() {
        return None;
    }
    loop {
        if level.len() == 1 {
            return level.pop();
        }
        level = str_pack_one_level(level, node_capacity);
    }
}

fn str_pack_one_level<T>(mut nodes: Vec<Node<T>>, node_capacity: usize) -> Vec<Node<T>> {
    let n = nodes.len();
    let num_leaf_nodes = n.div_ceil(node_capacity);
    let num_slices = (num_leaf_nodes as f64).sqrt().ceil() as usize;
    let num_slices = num_slices.max(1);
    let slice_capacity = (n as f64 / num_slices as f64).ceil() as usize;
    let slice_capacity = slice_capacity.max(1);

    nodes.sort_by(|a, b| x_mid(a.envelope()).partial_cmp(&x_mid(b.envelope())).unwrap());

    let mut parents = Vec::with_capacity(num_leaf_nodes);
    for slice in nodes.chunks_mut(slice_capacity) {
        slice.sort_by(|a, b| y_mid(a.envelope()).partial_cmp(&y_mid(b.envelope())).unwrap());
        for run in slice.chunks_mut(node_capacity) {
            let children: Vec<Node<T>> = run.drain(..).collect();
            let mut envelope = Envelope::empty();
            for child in &children {
                envelope.expand_to_include_envelope(child.envelope());
            }
            parents.push(Node::Branch { envelope, children });
        }
    }
    parents
}

fn x_mid(env: &Envelope) -> f64 {
    (env.min_x() + env.max_x()) / 2.0
}

fn y_mid(env: &Envelope) -> f64 {
    (env.min_y() + env.max_y()) / 2.0
}

#[cfg(test)]
mod test {
    use super::*;
    use geo_types::Coord;

    fn env(x: f64, y: f64) -> Envelope {
        Envelope::of_point(Coord::new(x, y))
    }

    #[test]
    fn empty_tree_returns_nothing() {
        let tree: StrTree<usize> = StrTree::build(Vec::new());
        assert!(tree.is_empty());
        assert!(tree.query(&env(0.0, 0.0)).is_empty());
    }

    #[test]
    fn finds_matching_items() {
        let items: Vec<(Envelope, usize)> = (0..200).map(|i| (env(i as f64, i as f64), i)).collect();
        let tree = StrTree::build_with_capacity(items, 4);
        let results = tree.query(&Envelope::new(10.0, 10.0, 10.0, 10.0));
        assert_eq!(results, vec![&10usize]);
    }

    #[test]
    fn range_query_returns_all_overlapping_items() {
        let items: Vec<(Envelope, usize)> = (0..50).map(|i| (env(i as f64, 0.0), i)).collect();
        let tree = StrTree::build_with_capacity(items, 4);
        let mut results = tree.query(&Envelope::new(5.0, 9.0, -1.0, 1.0));
        results.sort();
        assert_eq!(results, vec![&5usize, &6, &7, &8, &9]);
    }
}
