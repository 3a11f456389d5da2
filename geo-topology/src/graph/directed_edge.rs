use crate::kernel::Quadrant;
use geo_types::Coord;

/// One of the two orientations of an `Edge`. `DirectedEdge`s live in the
/// parent `PlanarGraph`'s arena; every field below that "points" at
/// another graph entity is an arena index, never an owning reference —
/// the cyclic from/to/sym/next relationships this models would require
/// `Rc`/`Weak` cycles otherwise.
#[derive(Debug, Clone, Copy)]
pub struct DirectedEdge {
    edge_index: usize,
    from_node: usize,
    to_node: usize,
    direction_point: Coord,
    quadrant: Option<Quadrant>,
    angle: f64,
    is_forward: bool,
    /// Index, in the parent graph's directed-edge arena, of this edge's
    /// opposite orientation.
    pub sym: usize,
    /// Set during ring reconstruction (§4.H): the next directed edge
    /// walking this ring clockwise (shells) or counter-clockwise (holes).
    pub next: Option<usize>,
    /// Set once this directed edge has been assigned to a minimal edge
    /// ring, identified by an opaque ring id.
    pub ring: Option<usize>,
}

impl DirectedEdge {
    pub(crate) fn new(
        edge_index: usize,
        from_node: usize,
        to_node: usize,
        from_coord: Coord,
        direction_point: Coord,
        is_forward: bool,
    ) -> Self {
        let dx = direction_point.x - from_coord.x;
        let dy = direction_point.y - from_coord.y;
        DirectedEdge {
            edge_index,
            from_node,
            to_node,
            direction_point,
            quadrant: Quadrant::new(dx, dy),
            angle: dy.atan2(dx),
            is_forward,
            sym: usize::MAX,
            next: None,
            ring: None,
        }
    }

    pub fn edge_index(&self) -> usize {
        self.edge_index
    }

    pub fn from_node(&self) -> usize {
        self.from_node
    }

    pub fn to_node(&self) -> usize {
        self.to_node
    }

    pub fn direction_point(&self) -> Coord {
        self.direction_point
    }

    pub fn quadrant(&self) -> Option<Quadrant> {
        self.quadrant
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// `true` if this directed edge traverses its edge's coordinate list
    /// in forward (stored) order; `false` for the reverse direction.
    pub fn is_forward(&self) -> bool {
        self.is_forward
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn angle_matches_direction_vector() {
        let de = DirectedEdge::new(0, 0, 1, Coord::new(0.0, 0.0), Coord::new(1.0, 0.0), true);
        assert!((de.angle() - 0.0).abs() < 1e-12);
    }
}
