use super::{Direction, EdgeIntersection, IntersectionMatrix, Label};
use geo_types::{Dimensions, Coord};

use std::collections::BTreeSet;

/// One of the graph's edges: an ordered, non-empty run of coordinates
/// (a whole LineString or polygon ring, before any splitting at
/// intersections), its topological label, and the intersections other
/// edges have recorded against it.
#[derive(Debug, Clone)]
pub struct Edge {
    coords: Vec<Coord>,
    edge_intersections: BTreeSet<EdgeIntersection>,
    label: Label,
}

impl Edge {
    /// `coords` must have at least 2 distinct points; callers (the
    /// geometry-graph builder) are responsible for having already
    /// collapsed consecutive duplicates and rejected the empty-edge case.
    pub(crate) fn new(mut coords: Vec<Coord>, label: Label) -> Self {
        assert!(coords.len() >= 2, "edge must have at least 2 coordinates");
        coords.shrink_to_fit();
        Edge {
            coords,
            label,
            edge_intersections: BTreeSet::new(),
        }
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn label_mut(&mut self) -> &mut Label {
        &mut self.label
    }

    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    pub fn is_closed(&self) -> bool {
        self.coords.first() == self.coords.last()
    }

    pub fn edge_intersections(&self) -> &BTreeSet<EdgeIntersection> {
        &self.edge_intersections
    }

    pub fn add_edge_intersection_list_endpoints(&mut self) {
        let max_segment_index = self.coords.len() - 1;
        self.edge_intersections
            .insert(EdgeIntersection::new(self.coords[0], 0, 0.0));
        self.edge_intersections.insert(EdgeIntersection::new(
            self.coords[max_segment_index],
            max_segment_index,
            0.0,
        ));
    }

    /// Records an intersection at `coord`, on the segment starting at
    /// `segment_index`. An intersection that falls exactly on a vertex is
    /// normalized to the higher of the two segment indices that share it,
    /// so that equal coordinates always produce equal `EdgeIntersection`s.
    pub fn add_intersection(&mut self, coord: Coord, segment_index: usize, dist: f64) {
        let mut normalized_segment_index = segment_index;
        let mut normalized_dist = dist;
        let next_segment_index = segment_index + 1;
        if next_segment_index < self.coords.len() && self.coords[next_segment_index] == coord {
            normalized_segment_index = next_segment_index;
            normalized_dist = 0.0;
        }
        self.edge_intersections.insert(EdgeIntersection::new(
            coord,
            normalized_segment_index,
            normalized_dist,
        ));
    }

    /// Updates the matrix with this edge's contribution: its `ON`
    /// position always; its `LEFT`/`RIGHT` positions too if it's an area
    /// edge. Only contributes where both geometries have a labelling.
    pub fn update_intersection_matrix(label: &Label, matrix: &mut IntersectionMatrix) {
        matrix.set_at_least_if_in_both(
            label.on_position(0),
            label.on_position(1),
            Dimensions::OneDimensional,
        );
        if label.is_area() {
            matrix.set_at_least_if_in_both(
                label.side_position(0, Direction::Left),
                label.side_position(1, Direction::Left),
                Dimensions::TwoDimensional,
            );
            matrix.set_at_least_if_in_both(
                label.side_position(0, Direction::Right),
                label.side_position(1, Direction::Right),
                Dimensions::TwoDimensional,
            );
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn vertex_intersections_normalize_to_the_higher_segment_index() {
        let mut edge = Edge::new(
            vec![Coord::new(0.0, 0.0), Coord::new(1.0, 0.0), Coord::new(2.0, 0.0)],
            Label::empty_line_or_point(),
        );
        edge.add_intersection(Coord::new(1.0, 0.0), 0, 1.0);
        let intersection = edge.edge_intersections().iter().next().unwrap();
        assert_eq!(intersection.segment_index(), 1);
        assert_eq!(intersection.dist(), 0.0);
    }
}
