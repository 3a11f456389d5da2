use crate::{Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon};

/// The topological dimension of a geometry or of a `DE-9IM` cell.
///
/// Distinct from `usize` because a cell may also be *empty* — there is no
/// dimension to report for an intersection that doesn't occur.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum Dimensions {
    Empty,
    ZeroDimensional,
    OneDimensional,
    TwoDimensional,
}

impl Dimensions {
    /// The DE-9IM character for this dimension: `F`, `0`, `1`, or `2`.
    pub fn as_matrix_char(&self) -> char {
        match self {
            Dimensions::Empty => 'F',
            Dimensions::ZeroDimensional => '0',
            Dimensions::OneDimensional => '1',
            Dimensions::TwoDimensional => '2',
        }
    }

    /// `-1` for empty, else the dimension number, matching the encoding
    /// used internally by the `IntersectionMatrix` cells.
    pub fn as_cell_value(&self) -> i8 {
        match self {
            Dimensions::Empty => -1,
            Dimensions::ZeroDimensional => 0,
            Dimensions::OneDimensional => 1,
            Dimensions::TwoDimensional => 2,
        }
    }

    pub fn from_cell_value(v: i8) -> Self {
        match v {
            -1 => Dimensions::Empty,
            0 => Dimensions::ZeroDimensional,
            1 => Dimensions::OneDimensional,
            2 => Dimensions::TwoDimensional,
            _ => panic!("invalid DE-9IM cell value: {v}"),
        }
    }
}

/// A geometry's dimension, and the dimension of its OGC boundary.
pub trait HasDimensions {
    fn is_empty(&self) -> bool;
    fn dimensions(&self) -> Dimensions;
    fn boundary_dimensions(&self) -> Dimensions;
}

impl HasDimensions for Point {
    fn is_empty(&self) -> bool {
        false
    }
    fn dimensions(&self) -> Dimensions {
        Dimensions::ZeroDimensional
    }
    fn boundary_dimensions(&self) -> Dimensions {
        Dimensions::Empty
    }
}

impl HasDimensions for MultiPoint {
    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    fn dimensions(&self) -> Dimensions {
        if self.is_empty() {
            Dimensions::Empty
        } else {
            Dimensions::ZeroDimensional
        }
    }
    fn boundary_dimensions(&self) -> Dimensions {
        Dimensions::Empty
    }
}

impl HasDimensions for LineString {
    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    fn dimensions(&self) -> Dimensions {
        if self.is_empty() {
            Dimensions::Empty
        } else {
            Dimensions::OneDimensional
        }
    }
    /// Empty for a closed ring (Mod-2 rule, zero endpoints); `0`-dimensional
    /// for an open `LineString` (its two distinct endpoints).
    fn boundary_dimensions(&self) -> Dimensions {
        if self.is_empty() || self.is_closed() {
            Dimensions::Empty
        } else {
            Dimensions::ZeroDimensional
        }
    }
}

impl HasDimensions for MultiLineString {
    fn is_empty(&self) -> bool {
        self.0.iter().all(|ls| ls.is_empty())
    }
    fn dimensions(&self) -> Dimensions {
        if self.is_empty() {
            Dimensions::Empty
        } else {
            Dimensions::OneDimensional
        }
    }
    fn boundary_dimensions(&self) -> Dimensions {
        if self.is_empty() {
            return Dimensions::Empty;
        }
        // Mod-2 rule is evaluated across the whole collection by the
        // graph builder, not per-component; component dimension alone
        // only tells us whether *some* boundary point can exist.
        if self.0.iter().any(|ls| !ls.is_closed()) {
            Dimensions::ZeroDimensional
        } else {
            Dimensions::Empty
        }
    }
}

impl HasDimensions for Polygon {
    fn is_empty(&self) -> bool {
        false
    }
    fn dimensions(&self) -> Dimensions {
        Dimensions::TwoDimensional
    }
    fn boundary_dimensions(&self) -> Dimensions {
        Dimensions::OneDimensional
    }
}

impl HasDimensions for MultiPolygon {
    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    fn dimensions(&self) -> Dimensions {
        if self.is_empty() {
            Dimensions::Empty
        } else {
            Dimensions::TwoDimensional
        }
    }
    fn boundary_dimensions(&self) -> Dimensions {
        if self.is_empty() {
            Dimensions::Empty
        } else {
            Dimensions::OneDimensional
        }
    }
}

impl HasDimensions for GeometryCollection {
    fn is_empty(&self) -> bool {
        self.0.iter().all(|g| g.is_empty())
    }
    fn dimensions(&self) -> Dimensions {
        self.0.iter().map(|g| g.dimensions()).max().unwrap_or(Dimensions::Empty)
    }
    fn boundary_dimensions(&self) -> Dimensions {
        self.0
            .iter()
            .map(|g| g.boundary_dimensions())
            .max()
            .unwrap_or(Dimensions::Empty)
    }
}

impl HasDimensions for Geometry {
    fn is_empty(&self) -> bool {
        match self {
            Geometry::Point(g) => g.is_empty(),
            Geometry::LineString(g) => g.is_empty(),
            Geometry::LinearRing(g) => g.num_points() == 0,
            Geometry::Polygon(g) => g.is_empty(),
            Geometry::MultiPoint(g) => g.is_empty(),
            Geometry::MultiLineString(g) => g.is_empty(),
            Geometry::MultiPolygon(g) => g.is_empty(),
            Geometry::GeometryCollection(g) => g.is_empty(),
        }
    }
    fn dimensions(&self) -> Dimensions {
        match self {
            Geometry::Point(g) => g.dimensions(),
            Geometry::LineString(g) => g.dimensions(),
            Geometry::LinearRing(_) => Dimensions::OneDimensional,
            Geometry::Polygon(g) => g.dimensions(),
            Geometry::MultiPoint(g) => g.dimensions(),
            Geometry::MultiLineString(g) => g.dimensions(),
            Geometry::MultiPolygon(g) => g.dimensions(),
            Geometry::GeometryCollection(g) => g.dimensions(),
        }
    }
    fn boundary_dimensions(&self) -> Dimensions {
        match self {
            Geometry::Point(g) => g.boundary_dimensions(),
            Geometry::LineString(g) => g.boundary_dimensions(),
            Geometry::LinearRing(_) => Dimensions::Empty,
            Geometry::Polygon(g) => g.boundary_dimensions(),
            Geometry::MultiPoint(g) => g.boundary_dimensions(),
            Geometry::MultiLineString(g) => g.boundary_dimensions(),
            Geometry::MultiPolygon(g) => g.boundary_dimensions(),
            Geometry::GeometryCollection(g) => g.boundary_dimensions(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Coord;

    #[test]
    fn closed_linestring_has_empty_boundary() {
        let ring = LineString::new(vec![
            Coord::new(0.0, 0.0),
            Coord::new(1.0, 0.0),
            Coord::new(1.0, 1.0),
            Coord::new(0.0, 0.0),
        ]);
        assert_eq!(ring.boundary_dimensions(), Dimensions::Empty);
    }

    #[test]
    fn open_linestring_has_point_boundary() {
        let ls = LineString::new(vec![Coord::new(0.0, 0.0), Coord::new(1.0, 1.0)]);
        assert_eq!(ls.boundary_dimensions(), Dimensions::ZeroDimensional);
    }
}
