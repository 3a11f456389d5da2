use super::{CoordPos, Direction, Edge, EdgeEnd, IntersectionMatrix, Label};
use geo_types::Coord;

/// A collection of `EdgeEnd`s that originate at the same node and share
/// the same direction — i.e. they all lie exactly on top of one another.
/// Computing one composite label for the bundle is how the relate engine
/// avoids treating coincident edges as independent crossings.
#[derive(Clone, Debug)]
pub struct EdgeEndBundle {
    coordinate: Coord,
    edge_ends: Vec<EdgeEnd>,
}

impl EdgeEndBundle {
    pub fn new(coordinate: Coord) -> Self {
        EdgeEndBundle { coordinate, edge_ends: Vec::new() }
    }

    pub fn coordinate(&self) -> Coord {
        self.coordinate
    }

    pub fn insert(&mut self, edge_end: EdgeEnd) {
        self.edge_ends.push(edge_end);
    }

    pub fn edge_ends(&self) -> &[EdgeEnd] {
        &self.edge_ends
    }

    /// Computes the bundle's composite `ON`/side labels from its members'
    /// labels, per the merge rules of §4.F step 7.
    pub fn into_labeled(mut self) -> LabeledEdgeEndBundle {
        let is_area = self.edge_ends.iter().any(|e| e.label().is_area());
        let mut label = if is_area { Label::empty_area() } else { Label::empty_line_or_point() };

        for geom_index in 0..2 {
            self.compute_label_on(&mut label, geom_index);
            if is_area {
                self.compute_label_side(&mut label, geom_index, Direction::Left);
                self.compute_label_side(&mut label, geom_index, Direction::Right);
            }
        }

        LabeledEdgeEndBundle { label, coordinate: self.coordinate, edge_end_bundle: self }
    }

    /// ON-merge rule: odd boundary count -> boundary; even (>=2) -> interior;
    /// any interior edge-end -> interior; else no position.
    fn compute_label_on(&self, label: &mut Label, geom_index: usize) {
        let mut boundary_count = 0;
        let mut found_interior = false;
        for edge_end in &self.edge_ends {
            match edge_end.label().on_position(geom_index) {
                Some(CoordPos::OnBoundary) => boundary_count += 1,
                Some(CoordPos::Inside) => found_interior = true,
                None | Some(CoordPos::Outside) => {}
            }
        }

        let mut position = found_interior.then_some(CoordPos::Inside);
        if boundary_count > 0 {
            position = Some(CoordPos::from_boundary_count(boundary_count));
        }
        if let Some(position) = position {
            label.set_on_position(geom_index, position);
        }
    }

    /// SIDES-merge rule: any interior edge-end on this side -> interior;
    /// else any exterior -> exterior; else no position.
    fn compute_label_side(&self, label: &mut Label, geom_index: usize, side: Direction) {
        let mut position = None;
        for edge_end in &self.edge_ends {
            if !edge_end.label().is_geom_area(geom_index) {
                continue;
            }
            match edge_end.label().side_position(geom_index, side) {
                Some(CoordPos::Inside) => {
                    position = Some(CoordPos::Inside);
                    break;
                }
                Some(CoordPos::Outside) => position = Some(CoordPos::Outside),
                None | Some(CoordPos::OnBoundary) => {}
            }
        }
        if let Some(position) = position {
            label.set_position(geom_index, side, position);
        }
    }
}

/// An `EdgeEndBundle` whose composite label has been computed.
#[derive(Clone, Debug)]
pub struct LabeledEdgeEndBundle {
    label: Label,
    coordinate: Coord,
    edge_end_bundle: EdgeEndBundle,
}

impl LabeledEdgeEndBundle {
    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn label_mut(&mut self) -> &mut Label {
        &mut self.label
    }

    pub fn coordinate(&self) -> Coord {
        self.coordinate
    }

    pub fn bundle(&self) -> &EdgeEndBundle {
        &self.edge_end_bundle
    }

    pub fn update_intersection_matrix(&self, matrix: &mut IntersectionMatrix) {
        Edge::update_intersection_matrix(&self.label, matrix);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use super::super::TopologyPosition;

    #[test]
    fn odd_boundary_count_merges_to_boundary() {
        let mut bundle = EdgeEndBundle::new(Coord::new(0.0, 0.0));
        let mut label_a = Label::empty_line_or_point();
        label_a.set_on_position(0, CoordPos::OnBoundary);
        bundle.insert(EdgeEnd::new(Coord::new(0.0, 0.0), Coord::new(1.0, 0.0), label_a));

        let labeled = bundle.into_labeled();
        assert_eq!(labeled.label().on_position(0), Some(CoordPos::OnBoundary));
    }

    #[test]
    fn area_bundle_merges_sides() {
        let mut bundle = EdgeEndBundle::new(Coord::new(0.0, 0.0));
        let mut label = Label::empty_area();
        *label.position_mut(0) = TopologyPosition::area(CoordPos::OnBoundary, CoordPos::Inside, CoordPos::Outside);
        bundle.insert(EdgeEnd::new(Coord::new(0.0, 0.0), Coord::new(1.0, 0.0), label));

        let labeled = bundle.into_labeled();
        assert_eq!(labeled.label().side_position(0, Direction::Left), Some(CoordPos::Inside));
        assert_eq!(labeled.label().side_position(0, Direction::Right), Some(CoordPos::Outside));
    }
}
