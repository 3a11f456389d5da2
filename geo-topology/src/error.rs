//! Top-level error types: construction failures (surfaced to the
//! caller of a graph-building operation) and algorithmic failures (an
//! invariant broken inside the relate/validity engine itself).

use geo_types::Coord;
use std::fmt;

/// A geometry could not be turned into a usable planar graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// An edge (LineString or polygon ring) had fewer than 2 distinct
    /// coordinates after consecutive duplicates were removed.
    EmptyEdge,
    /// A coordinate was NaN or +-infinite.
    NonCoordinateData,
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::EmptyEdge => write!(f, "edge has fewer than 2 distinct coordinates"),
            GraphError::NonCoordinateData => write!(f, "coordinate is NaN or infinite"),
        }
    }
}

impl std::error::Error for GraphError {}

/// An internal invariant of the relate or validity engine was violated.
/// Carries the coordinate nearest the violation. Fatal: the operation
/// that triggered it aborts rather than returning a partial result, and
/// is never retried internally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TopologyError {
    coordinate: Coord,
}

impl TopologyError {
    pub fn new(coordinate: Coord) -> Self {
        TopologyError { coordinate }
    }

    pub fn coordinate(&self) -> Coord {
        self.coordinate
    }
}

impl fmt::Display for TopologyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "topology invariant violated near ({}, {})", self.coordinate.x, self.coordinate.y)
    }
}

impl std::error::Error for TopologyError {}

/// Walks every coordinate reachable from `geometry` and fails on the
/// first one that is NaN or infinite, or the first edge collapsed to
/// fewer than 2 distinct points by duplicate removal.
pub fn validate_geometry(geometry: &geo_types::Geometry) -> Result<(), GraphError> {
    use geo_types::Geometry;

    fn check_coords(coords: &[Coord]) -> Result<(), GraphError> {
        if coords.iter().any(|c| !c.is_valid()) {
            return Err(GraphError::NonCoordinateData);
        }
        Ok(())
    }

    fn check_line(coords: &[Coord]) -> Result<(), GraphError> {
        check_coords(coords)?;
        let mut distinct = 0usize;
        let mut last: Option<Coord> = None;
        for &c in coords {
            if last != Some(c) {
                distinct += 1;
                last = Some(c);
            }
        }
        if distinct < 2 {
            return Err(GraphError::EmptyEdge);
        }
        Ok(())
    }

    match geometry {
        Geometry::Point(p) => check_coords(&[p.coord()]),
        Geometry::MultiPoint(mp) => {
            for p in mp.iter() {
                check_coords(&[p.coord()])?;
            }
            Ok(())
        }
        Geometry::LineString(ls) => {
            if ls.is_empty() {
                Ok(())
            } else {
                check_line(ls.coords())
            }
        }
        Geometry::LinearRing(ring) => check_coords(ring.coords()),
        Geometry::MultiLineString(mls) => {
            for ls in mls.iter() {
                if !ls.is_empty() {
                    check_line(ls.coords())?;
                }
            }
            Ok(())
        }
        Geometry::Polygon(poly) => {
            check_coords(poly.exterior().coords())?;
            for hole in poly.interiors() {
                check_coords(hole.coords())?;
            }
            Ok(())
        }
        Geometry::MultiPolygon(mpoly) => {
            for poly in mpoly.iter() {
                validate_geometry(&Geometry::Polygon(poly.clone()))?;
            }
            Ok(())
        }
        Geometry::GeometryCollection(gc) => {
            for g in gc.iter() {
                validate_geometry(g)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use geo_types::{Geometry, LineString, Point};

    #[test]
    fn rejects_nan_coordinate() {
        let g = Geometry::Point(Point::new(f64::NAN, 0.0));
        assert_eq!(validate_geometry(&g), Err(GraphError::NonCoordinateData));
    }

    #[test]
    fn rejects_collapsed_line() {
        let g = Geometry::LineString(LineString::new(vec![Coord::new(1.0, 1.0), Coord::new(1.0, 1.0)]));
        assert_eq!(validate_geometry(&g), Err(GraphError::EmptyEdge));
    }

    #[test]
    fn accepts_well_formed_line() {
        let g = Geometry::LineString(LineString::new(vec![Coord::new(0.0, 0.0), Coord::new(1.0, 1.0)]));
        assert_eq!(validate_geometry(&g), Ok(()));
    }
}
