//! The validity engine (§4.G): decides whether a polygonal geometry is
//! OGC-valid, short-circuiting at the first failing check.

pub mod error;
mod ring;

pub use error::{ValidityError, ValidityErrorKind};

use crate::graph::GeometryGraph;
use crate::intersection::LineIntersector;
use geo_types::{Coord, Geometry, LinearRing, MultiPolygon, Polygon};

/// Returns the first validity problem found in `geometry`, or `None` if
/// it's OGC-valid. Never mutates its input.
pub fn check_validity(geometry: &Geometry) -> Option<ValidityError> {
    if let Some(err) = check_coordinates(geometry) {
        return Some(err);
    }
    match geometry {
        Geometry::Polygon(polygon) => check_polygon(polygon),
        Geometry::MultiPolygon(multi_polygon) => check_multi_polygon(multi_polygon),
        Geometry::GeometryCollection(collection) => {
            collection.iter().find_map(check_validity)
        }
        // Point/LineString/MultiPoint/MultiLineString/LinearRing carry no
        // area-specific invariants beyond coordinate validity and (for
        // rings) the too-few-points/not-closed checks LinearRing's own
        // constructor already enforces.
        _ => None,
    }
}

pub fn is_valid(geometry: &Geometry) -> bool {
    check_validity(geometry).is_none()
}

fn check_coordinates(geometry: &Geometry) -> Option<ValidityError> {
    fn bad_coord(coords: &[Coord]) -> Option<Coord> {
        coords.iter().find(|c| !c.is_valid()).copied()
    }
    let invalid = match geometry {
        Geometry::Point(p) => bad_coord(&[p.coord()]),
        Geometry::MultiPoint(mp) => mp.iter().find_map(|p| bad_coord(&[p.coord()])),
        Geometry::LineString(ls) => bad_coord(ls.coords()),
        Geometry::LinearRing(r) => bad_coord(r.coords()),
        Geometry::MultiLineString(mls) => mls.iter().find_map(|ls| bad_coord(ls.coords())),
        Geometry::Polygon(poly) => bad_coord(poly.exterior().coords())
            .or_else(|| poly.interiors().iter().find_map(|r| bad_coord(r.coords()))),
        Geometry::MultiPolygon(mpoly) => mpoly.iter().find_map(|poly| {
            bad_coord(poly.exterior().coords()).or_else(|| poly.interiors().iter().find_map(|r| bad_coord(r.coords())))
        }),
        Geometry::GeometryCollection(gc) => return gc.iter().find_map(check_coordinates),
    };
    invalid.map(|c| ValidityError::new(ValidityErrorKind::InvalidCoordinate, c))
}

fn check_polygon(polygon: &Polygon) -> Option<ValidityError> {
    check_repeated_points(polygon.exterior())
        .or_else(|| polygon.interiors().iter().find_map(check_repeated_points))
        .or_else(|| check_holes_inside_shell(polygon))
        .or_else(|| check_holes_not_nested(polygon))
        .or_else(|| check_duplicate_rings(polygon.rings()))
        .or_else(|| check_self_intersection(&Geometry::Polygon(polygon.clone())))
        .or_else(|| check_connected_interior(polygon))
}

fn check_multi_polygon(multi_polygon: &MultiPolygon) -> Option<ValidityError> {
    for polygon in multi_polygon.iter() {
        if let Some(err) = check_polygon(polygon) {
            return Some(err);
        }
    }
    check_shells_not_nested(multi_polygon).or_else(|| {
        check_duplicate_rings(multi_polygon.iter().map(|p| p.exterior()))
    })
}

/// A Polygon ring may not contain consecutive identical points (for
/// other area components the check is delegated to ring construction,
/// which already rejects a collapsed ring outright).
fn check_repeated_points(ring: &LinearRing) -> Option<ValidityError> {
    ring.coords()
        .windows(2)
        .find(|w| w[0] == w[1])
        .map(|w| ValidityError::new(ValidityErrorKind::RepeatedPoint, w[0]))
}

fn check_holes_inside_shell(polygon: &Polygon) -> Option<ValidityError> {
    for hole in polygon.interiors() {
        if !ring::ring_contains(polygon.exterior(), hole) {
            let coord = hole.coords().first().copied().unwrap_or(Coord::new(0.0, 0.0));
            return Some(ValidityError::new(ValidityErrorKind::HoleOutsideShell, coord));
        }
    }
    None
}

fn check_holes_not_nested(polygon: &Polygon) -> Option<ValidityError> {
    let holes = polygon.interiors();
    for i in 0..holes.len() {
        for j in 0..holes.len() {
            if i == j {
                continue;
            }
            if ring::ring_contains(&holes[i], &holes[j]) {
                let coord = holes[j].coords().first().copied().unwrap_or(Coord::new(0.0, 0.0));
                return Some(ValidityError::new(ValidityErrorKind::NestedHoles, coord));
            }
        }
    }
    None
}

fn check_shells_not_nested(multi_polygon: &MultiPolygon) -> Option<ValidityError> {
    let shells: Vec<&LinearRing> = multi_polygon.iter().map(|p| p.exterior()).collect();
    for i in 0..shells.len() {
        for j in 0..shells.len() {
            if i == j {
                continue;
            }
            if ring::ring_contains(shells[i], shells[j]) {
                let coord = shells[j].coords().first().copied().unwrap_or(Coord::new(0.0, 0.0));
                return Some(ValidityError::new(ValidityErrorKind::NestedShells, coord));
            }
        }
    }
    None
}

/// Two rings with the same coordinate sequence, up to rotation of the
/// start point, are a duplicate-ring error.
fn check_duplicate_rings<'a>(rings: impl Iterator<Item = &'a LinearRing>) -> Option<ValidityError> {
    let rings: Vec<&LinearRing> = rings.collect();
    for i in 0..rings.len() {
        for j in (i + 1)..rings.len() {
            if rings_equal_up_to_rotation(rings[i], rings[j]) {
                let coord = rings[j].coords().first().copied().unwrap_or(Coord::new(0.0, 0.0));
                return Some(ValidityError::new(ValidityErrorKind::DuplicateRings, coord));
            }
        }
    }
    None
}

fn rings_equal_up_to_rotation(a: &LinearRing, b: &LinearRing) -> bool {
    let a = a.coords();
    let b = b.coords();
    if a.len() != b.len() {
        return false;
    }
    // open both rings (drop the repeated closing point) before rotating
    let a = &a[..a.len() - 1];
    let b = &b[..b.len() - 1];
    if a.is_empty() {
        return true;
    }
    let Some(start) = a.iter().position(|c| *c == b[0]) else {
        return false;
    };
    (0..a.len()).all(|i| a[(start + i) % a.len()] == b[i])
}

/// No proper intersection of the geometry's edges with themselves, and
/// the labels around every self-intersection node must be consistent
/// (no area edge whose exterior side is actually interior).
///
/// The second half is checked by relating the geometry's own graph
/// against a clone of itself standing in as argument 1: the edge-end
/// bundle builder's side-label propagation surfaces any inconsistency
/// as a `TopologyError`, exactly as it would for a real two-geometry
/// relate.
fn check_self_intersection(geometry: &Geometry) -> Option<ValidityError> {
    let intersector = LineIntersector::new();
    let mut graph_a = GeometryGraph::new(0, geometry.clone());
    let self_nodes = graph_a.compute_self_nodes(&intersector);
    if let Some(coordinate) = self_nodes.proper_coordinate {
        return Some(ValidityError::new(ValidityErrorKind::RingSelfIntersection, coordinate));
    }

    let mut graph_b = GeometryGraph::new(1, geometry.clone());
    *graph_b.planar_graph_mut() = graph_a.planar_graph().clone_for_arg_index(0, 1);

    match crate::relate::edge_end_builder::build_labeled_bundles([&graph_a, &graph_b]) {
        Ok(_) => None,
        Err(topology_error) => {
            Some(ValidityError::new(ValidityErrorKind::SelfIntersection, topology_error.coordinate()))
        }
    }
}

/// The interior of a Polygon with holes must be connected: a minimal
/// edge ring traversal starting from the shell must reach every
/// directed edge exactly once. A hole touching the shell at more than
/// one point can chain-split the interior; that shows up as a minimal
/// ring the shell's traversal never reaches.
fn check_connected_interior(polygon: &Polygon) -> Option<ValidityError> {
    if polygon.interiors().is_empty() {
        return None;
    }
    let mut graph = GeometryGraph::new(0, Geometry::Polygon(polygon.clone()));
    let intersector = LineIntersector::new();
    graph.compute_self_nodes(&intersector);
    graph.planar_graph_mut().link_directed_edges();
    let rings = ring::build_minimal_rings(graph.planar_graph());

    let total_directed_edges = graph.planar_graph().directed_edges().len();
    let covered: usize = rings.iter().map(|r| r.directed_edges.len()).sum();

    if covered < total_directed_edges {
        let coordinate = polygon
            .interiors()
            .first()
            .and_then(|h| h.coords().first().copied())
            .unwrap_or(Coord::new(0.0, 0.0));
        return Some(ValidityError::new(ValidityErrorKind::DisconnectedInterior, coordinate));
    }
    None
}

#[cfg(test)]
mod test {
    use super::*;
    use geo_types::Coord;

    fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> LinearRing {
        LinearRing::new(vec![
            Coord::new(x0, y0),
            Coord::new(x1, y0),
            Coord::new(x1, y1),
            Coord::new(x0, y1),
            Coord::new(x0, y0),
        ])
        .unwrap()
    }

    #[test]
    fn simple_square_is_valid() {
        let polygon = Polygon::new(square(0.0, 0.0, 10.0, 10.0), vec![]);
        assert!(is_valid(&Geometry::Polygon(polygon)));
    }

    #[test]
    fn hole_outside_shell_is_invalid() {
        let polygon = Polygon::new(square(0.0, 0.0, 10.0, 10.0), vec![square(20.0, 20.0, 22.0, 22.0)]);
        let err = check_validity(&Geometry::Polygon(polygon)).unwrap();
        assert_eq!(err.kind(), ValidityErrorKind::HoleOutsideShell);
    }

    #[test]
    fn nested_holes_are_invalid() {
        let polygon = Polygon::new(
            square(0.0, 0.0, 10.0, 10.0),
            vec![square(1.0, 1.0, 8.0, 8.0), square(2.0, 2.0, 4.0, 4.0)],
        );
        let err = check_validity(&Geometry::Polygon(polygon)).unwrap();
        assert_eq!(err.kind(), ValidityErrorKind::NestedHoles);
    }

    #[test]
    fn nan_coordinate_is_invalid() {
        let g = Geometry::Point(geo_types::Point::new(f64::NAN, 0.0));
        let err = check_validity(&g).unwrap();
        assert_eq!(err.kind(), ValidityErrorKind::InvalidCoordinate);
    }

    #[test]
    fn duplicate_rings_are_invalid() {
        let polygon = Polygon::new(
            square(0.0, 0.0, 10.0, 10.0),
            vec![square(1.0, 1.0, 4.0, 4.0), square(1.0, 1.0, 4.0, 4.0)],
        );
        let err = check_validity(&Geometry::Polygon(polygon)).unwrap();
        assert_eq!(err.kind(), ValidityErrorKind::DuplicateRings);
    }
}
