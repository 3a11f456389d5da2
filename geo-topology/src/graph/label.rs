use super::{CoordPos, Direction, TopologyPosition};

/// The topological label of a node or edge: its `TopologyPosition`
/// relative to each of the two source geometries (argument 0 and
/// argument 1 of a relate/validity operation).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Label {
    positions: [TopologyPosition; 2],
}

impl Label {
    /// A label with only one geometry's position set, used while building
    /// a single geometry's graph before the other argument is known.
    pub fn new(geom_index: usize, position: TopologyPosition) -> Self {
        let mut positions = [TopologyPosition::empty(), TopologyPosition::empty()];
        positions[geom_index] = position;
        Label { positions }
    }

    pub fn empty_line_or_point() -> Self {
        Label {
            positions: [TopologyPosition::empty(), TopologyPosition::empty()],
        }
    }

    pub fn empty_area() -> Self {
        Label {
            positions: [TopologyPosition::empty_area(), TopologyPosition::empty_area()],
        }
    }

    pub fn position(&self, geom_index: usize) -> &TopologyPosition {
        &self.positions[geom_index]
    }

    pub fn position_mut(&mut self, geom_index: usize) -> &mut TopologyPosition {
        &mut self.positions[geom_index]
    }

    pub fn on_position(&self, geom_index: usize) -> Option<CoordPos> {
        self.positions[geom_index].get(Direction::On)
    }

    pub fn side_position(&self, geom_index: usize, direction: Direction) -> Option<CoordPos> {
        self.positions[geom_index].get(direction)
    }

    pub fn set_on_position(&mut self, geom_index: usize, position: CoordPos) {
        self.positions[geom_index].set(Direction::On, position);
    }

    pub fn set_position(&mut self, geom_index: usize, direction: Direction, position: CoordPos) {
        self.positions[geom_index].set(direction, position);
    }

    pub fn set_all_positions_if_empty(&mut self, geom_index: usize, position: CoordPos) {
        self.positions[geom_index].set_all_if_empty(position);
    }

    pub fn is_area(&self) -> bool {
        self.positions[0].is_area() || self.positions[1].is_area()
    }

    pub fn is_geom_area(&self, geom_index: usize) -> bool {
        self.positions[geom_index].is_area()
    }

    pub fn is_line(&self, geom_index: usize) -> bool {
        !self.positions[geom_index].is_area()
    }

    pub fn is_any_empty(&self, geom_index: usize) -> bool {
        self.positions[geom_index].is_any_empty()
    }

    /// Number of geometries (0, 1, or 2) for which this label carries any
    /// position at all.
    pub fn geometry_count(&self) -> usize {
        self.positions.iter().filter(|p| !p.is_empty()).count()
    }

    /// Swaps which geometry (0 or 1) each position applies to, and flips
    /// each position's left/right sides. Used when cloning a graph for
    /// the opposite argument index.
    pub fn swap_args(&mut self) {
        self.positions.swap(0, 1);
        for position in &mut self.positions {
            position.flip();
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn geometry_count_counts_nonempty_positions() {
        let mut label = Label::empty_line_or_point();
        assert_eq!(label.geometry_count(), 0);
        label.set_on_position(0, CoordPos::Inside);
        assert_eq!(label.geometry_count(), 1);
        label.set_on_position(1, CoordPos::Outside);
        assert_eq!(label.geometry_count(), 2);
    }

    #[test]
    fn swap_args_exchanges_geometry_slots() {
        let mut label = Label::empty_line_or_point();
        label.set_on_position(0, CoordPos::Inside);
        label.set_on_position(1, CoordPos::OnBoundary);
        label.swap_args();
        assert_eq!(label.on_position(0), Some(CoordPos::OnBoundary));
        assert_eq!(label.on_position(1), Some(CoordPos::Inside));
    }
}
