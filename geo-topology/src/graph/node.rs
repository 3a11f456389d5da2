use super::{CoordPos, Label};
use geo_types::Coord;

/// A node of the planar graph: a coordinate shared by one or more edges,
/// together with its topological label and the indices (into the parent
/// graph's directed-edge arena) of every directed edge leaving it, kept
/// in counter-clockwise angular order.
#[derive(Debug, Clone)]
pub struct Node {
    coordinate: Coord,
    label: Label,
    star: Vec<usize>,
}

impl Node {
    pub(crate) fn new(coordinate: Coord) -> Self {
        Node {
            coordinate,
            label: Label::empty_line_or_point(),
            star: Vec::new(),
        }
    }

    pub fn coordinate(&self) -> Coord {
        self.coordinate
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn label_mut(&mut self) -> &mut Label {
        &mut self.label
    }

    /// Directed-edge arena indices of the edges leaving this node, in
    /// counter-clockwise angular order.
    pub fn star(&self) -> &[usize] {
        &self.star
    }

    pub(crate) fn star_mut(&mut self) -> &mut Vec<usize> {
        &mut self.star
    }

    pub fn set_label_on_position(&mut self, geom_index: usize, position: CoordPos) {
        self.label.set_on_position(geom_index, position);
    }

    /// Updates the node's label to BOUNDARY for `geom_index`, obeying the
    /// mod-2 rule: a second boundary touch at an already-boundary node
    /// flips it back to interior.
    pub fn set_label_boundary(&mut self, geom_index: usize) {
        let new_position = match self.label.on_position(geom_index) {
            Some(CoordPos::OnBoundary) => CoordPos::Inside,
            Some(CoordPos::Inside) => CoordPos::OnBoundary,
            None | Some(CoordPos::Outside) => CoordPos::OnBoundary,
        };
        self.label.set_on_position(geom_index, new_position);
    }
}
