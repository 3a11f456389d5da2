//! The relate operation: computes the DE-9IM `IntersectionMatrix`
//! between two geometries (§4.F) and the derived boolean predicates
//! built on top of it (§6).

pub(crate) mod edge_end_builder;

use crate::coordinate_position::locate;
use crate::error::TopologyError;
use crate::graph::{
    compute_mutual_intersections, CoordPos, GeometryGraph, IntersectionMatrix, MutualIntersectionSummary, NodeKey,
};
use crate::intersection::LineIntersector;
use geo_types::{Dimensions, Geometry, HasDimensions};

/// Computes the full `IntersectionMatrix` between `a` and `b`.
///
/// Callers that only need a boolean predicate should prefer the
/// dedicated `intersects`/`disjoint`/... functions below: they run the
/// same graph construction but never pay for a relation a fast-path
/// already decided.
pub fn relate(a: &Geometry, b: &Geometry) -> Result<IntersectionMatrix, TopologyError> {
    if a.is_empty() || b.is_empty() {
        return Ok(empty_matrix(a, b));
    }

    let intersector = LineIntersector::new();
    let mut graph_a = GeometryGraph::new(0, a.clone());
    let mut graph_b = GeometryGraph::new(1, b.clone());
    graph_a.compute_self_nodes(&intersector);
    graph_b.compute_self_nodes(&intersector);
    let summary = compute_mutual_intersections(&mut graph_a, &mut graph_b, &intersector);

    let mut matrix = IntersectionMatrix::empty();
    matrix.set_at_least(CoordPos::Outside, CoordPos::Outside, Dimensions::TwoDimensional);
    apply_proper_intersection_patterns(&mut matrix, a.dimensions(), b.dimensions(), summary)
        .expect("fast-path patterns are fixed, well-formed strings");

    let bundles = edge_end_builder::build_labeled_bundles([&graph_a, &graph_b])?;
    for labeled in bundles.values().flatten() {
        labeled.update_intersection_matrix(&mut matrix);
    }

    label_isolated_point_nodes(&graph_a, &graph_b, &bundles, &mut matrix);
    label_isolated_point_nodes(&graph_b, &graph_a, &bundles, &mut matrix);

    Ok(matrix)
}

/// The matrix for a pair where at least one side is empty: every cell
/// touching the empty geometry's rows/columns is `F`, and the other
/// geometry's own interior/boundary/exterior dimensions fill the rest.
fn empty_matrix(a: &Geometry, b: &Geometry) -> IntersectionMatrix {
    let mut matrix = IntersectionMatrix::empty();
    if a.is_empty() && b.is_empty() {
        return matrix;
    }
    if a.is_empty() {
        fill_exterior_row(&mut matrix, b, true);
    } else {
        fill_exterior_row(&mut matrix, a, false);
    }
    matrix
}

fn fill_exterior_row(matrix: &mut IntersectionMatrix, present: &Geometry, present_is_b: bool) {
    let interior_dim = present.dimensions();
    let boundary_dim = present.boundary_dimensions();
    if present_is_b {
        matrix.set_at_least(CoordPos::Outside, CoordPos::Inside, interior_dim);
        matrix.set_at_least(CoordPos::Outside, CoordPos::OnBoundary, boundary_dim);
    } else {
        matrix.set_at_least(CoordPos::Inside, CoordPos::Outside, interior_dim);
        matrix.set_at_least(CoordPos::OnBoundary, CoordPos::Outside, boundary_dim);
    }
}

/// Applies the fixed lower-bound patterns a proper (or proper-interior)
/// intersection guarantees, keyed on the two geometries' dimensions.
/// These are shortcuts: without them the bundle-labelling pass below
/// would eventually derive the same cells, but only after visiting
/// every edge end at the crossing.
fn apply_proper_intersection_patterns(
    matrix: &mut IntersectionMatrix,
    dim_a: Dimensions,
    dim_b: Dimensions,
    summary: MutualIntersectionSummary,
) -> Result<(), crate::graph::InvalidPatternError> {
    use Dimensions::*;
    match (dim_a, dim_b) {
        (TwoDimensional, TwoDimensional) => {
            if summary.has_proper {
                matrix.set_at_least_from_string("212101212")?;
            }
        }
        (TwoDimensional, OneDimensional) => {
            if summary.has_proper {
                matrix.set_at_least_from_string("FFF0FFFF2")?;
            }
            if summary.has_proper_interior {
                matrix.set_at_least_from_string("1FFFFF1FF")?;
            }
        }
        (OneDimensional, TwoDimensional) => {
            if summary.has_proper {
                matrix.set_at_least_from_string("F0FFFFFF2")?;
            }
            if summary.has_proper_interior {
                matrix.set_at_least_from_string("1F1FFFFFF")?;
            }
        }
        (OneDimensional, OneDimensional) => {
            if summary.has_proper_interior {
                matrix.set_at_least_from_string("0FFFFFFFF")?;
            }
        }
        _ => {}
    }
    Ok(())
}

/// Contributes a 0-dimensional cell for every node of `own` that has no
/// incident edge at all — a bare `Point`/`MultiPoint` component, which
/// never produces an `EdgeEnd` and so is otherwise invisible to the
/// bundle-based labelling pass.
fn label_isolated_point_nodes(
    own: &GeometryGraph,
    other: &GeometryGraph,
    bundles: &std::collections::BTreeMap<NodeKey, Vec<crate::graph::LabeledEdgeEndBundle>>,
    matrix: &mut IntersectionMatrix,
) {
    for node in own.planar_graph().nodes() {
        if !node.star().is_empty() {
            continue;
        }
        let coordinate = node.coordinate();
        if bundles.contains_key(&NodeKey(coordinate)) {
            continue;
        }
        let Some(own_position) = node.label().on_position(own.arg_index()) else {
            continue;
        };
        let other_position = match other.geometry().dimensions() {
            Dimensions::Empty => CoordPos::Outside,
            _ => locate(coordinate, other.geometry()),
        };
        if own.arg_index() == 0 {
            matrix.set_at_least(own_position, other_position, Dimensions::ZeroDimensional);
        } else {
            matrix.set_at_least(other_position, own_position, Dimensions::ZeroDimensional);
        }
    }
}

/// Whether `a` and `b` share at least one point.
pub fn intersects(a: &Geometry, b: &Geometry) -> Result<bool, TopologyError> {
    Ok(relate(a, b)?.is_intersects())
}

pub fn disjoint(a: &Geometry, b: &Geometry) -> Result<bool, TopologyError> {
    Ok(relate(a, b)?.is_disjoint())
}

pub fn touches(a: &Geometry, b: &Geometry) -> Result<bool, TopologyError> {
    Ok(relate(a, b)?.is_touches(a.dimensions(), b.dimensions()))
}

pub fn crosses(a: &Geometry, b: &Geometry) -> Result<bool, TopologyError> {
    Ok(relate(a, b)?.is_crosses(a.dimensions(), b.dimensions()))
}

pub fn overlaps(a: &Geometry, b: &Geometry) -> Result<bool, TopologyError> {
    Ok(relate(a, b)?.is_overlaps(a.dimensions(), b.dimensions()))
}

pub fn within(a: &Geometry, b: &Geometry) -> Result<bool, TopologyError> {
    Ok(relate(a, b)?.is_within())
}

pub fn contains(a: &Geometry, b: &Geometry) -> Result<bool, TopologyError> {
    Ok(relate(a, b)?.is_contains())
}

pub fn covers(a: &Geometry, b: &Geometry) -> Result<bool, TopologyError> {
    Ok(relate(a, b)?.is_covers())
}

pub fn covered_by(a: &Geometry, b: &Geometry) -> Result<bool, TopologyError> {
    Ok(relate(a, b)?.is_covered_by())
}

/// DE-9IM equality: not the same as coordinate-for-coordinate equality
/// (`equals_exact`) — two geometries can be DE-9IM equal while using
/// entirely different vertex sequences to describe the same point set.
pub fn equals(a: &Geometry, b: &Geometry) -> Result<bool, TopologyError> {
    Ok(relate(a, b)?.is_equals(a.dimensions(), b.dimensions()))
}

/// Coordinate-sequence equality within `tolerance`, ignoring DE-9IM
/// semantics entirely: same geometry variant, same ring/point counts,
/// each coordinate within `tolerance` of its counterpart in order.
pub fn equals_exact(a: &Geometry, b: &Geometry, tolerance: f64) -> bool {
    use geo_types::{Coord, LineString};

    fn coords_match(xs: &[Coord], ys: &[Coord], tolerance: f64) -> bool {
        xs.len() == ys.len()
            && xs.iter().zip(ys).all(|(p, q)| {
                (p.x - q.x).abs() <= tolerance && (p.y - q.y).abs() <= tolerance
            })
    }
    fn line_strings_match(a: &LineString, b: &LineString, tolerance: f64) -> bool {
        coords_match(a.coords(), b.coords(), tolerance)
    }

    match (a, b) {
        (Geometry::Point(p), Geometry::Point(q)) => {
            (p.x() - q.x()).abs() <= tolerance && (p.y() - q.y()).abs() <= tolerance
        }
        (Geometry::LineString(p), Geometry::LineString(q)) => line_strings_match(p, q, tolerance),
        (Geometry::LinearRing(p), Geometry::LinearRing(q)) => {
            line_strings_match(p.line_string(), q.line_string(), tolerance)
        }
        (Geometry::Polygon(p), Geometry::Polygon(q)) => {
            line_strings_match(p.exterior().line_string(), q.exterior().line_string(), tolerance)
                && p.interiors().len() == q.interiors().len()
                && p.interiors()
                    .iter()
                    .zip(q.interiors())
                    .all(|(r, s)| line_strings_match(r.line_string(), s.line_string(), tolerance))
        }
        (Geometry::MultiPoint(p), Geometry::MultiPoint(q)) => {
            p.len() == q.len()
                && p.iter().zip(q.iter()).all(|(x, y)| {
                    (x.x() - y.x()).abs() <= tolerance && (x.y() - y.y()).abs() <= tolerance
                })
        }
        (Geometry::MultiLineString(p), Geometry::MultiLineString(q)) => {
            p.len() == q.len() && p.iter().zip(q.iter()).all(|(x, y)| line_strings_match(x, y, tolerance))
        }
        (Geometry::MultiPolygon(p), Geometry::MultiPolygon(q)) => {
            p.len() == q.len()
                && p.iter().zip(q.iter()).all(|(x, y)| {
                    equals_exact(&Geometry::Polygon(x.clone()), &Geometry::Polygon(y.clone()), tolerance)
                })
        }
        (Geometry::GeometryCollection(p), Geometry::GeometryCollection(q)) => {
            p.len() == q.len() && p.iter().zip(q.iter()).all(|(x, y)| equals_exact(x, y, tolerance))
        }
        _ => false,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use geo_types::{Coord, LinearRing, LineString, Point, Polygon};

    fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> Polygon {
        Polygon::new(
            LinearRing::new(vec![
                Coord::new(x0, y0),
                Coord::new(x1, y0),
                Coord::new(x1, y1),
                Coord::new(x0, y1),
                Coord::new(x0, y0),
            ])
            .unwrap(),
            vec![],
        )
    }

    #[test]
    fn disjoint_squares_are_disjoint_and_not_intersecting() {
        let a = Geometry::Polygon(square(0.0, 0.0, 1.0, 1.0));
        let b = Geometry::Polygon(square(5.0, 5.0, 6.0, 6.0));
        assert!(disjoint(&a, &b).unwrap());
        assert!(!intersects(&a, &b).unwrap());
    }

    #[test]
    fn overlapping_squares_overlap() {
        let a = Geometry::Polygon(square(0.0, 0.0, 2.0, 2.0));
        let b = Geometry::Polygon(square(1.0, 1.0, 3.0, 3.0));
        assert!(overlaps(&a, &b).unwrap());
        assert!(intersects(&a, &b).unwrap());
        assert!(!within(&a, &b).unwrap());
        assert!(!contains(&a, &b).unwrap());
    }

    #[test]
    fn edge_sharing_squares_touch() {
        let a = Geometry::Polygon(square(0.0, 0.0, 1.0, 1.0));
        let b = Geometry::Polygon(square(1.0, 0.0, 2.0, 1.0));
        assert!(touches(&a, &b).unwrap());
        assert!(!overlaps(&a, &b).unwrap());
        assert!(intersects(&a, &b).unwrap());
    }

    #[test]
    fn nested_square_is_within_the_outer_one() {
        let outer = Geometry::Polygon(square(0.0, 0.0, 10.0, 10.0));
        let inner = Geometry::Polygon(square(2.0, 2.0, 4.0, 4.0));
        assert!(within(&inner, &outer).unwrap());
        assert!(contains(&outer, &inner).unwrap());
        assert!(!touches(&inner, &outer).unwrap());
    }

    #[test]
    fn crossing_lines_cross() {
        let a = Geometry::LineString(LineString::new(vec![Coord::new(0.0, 0.0), Coord::new(2.0, 2.0)]));
        let b = Geometry::LineString(LineString::new(vec![Coord::new(0.0, 2.0), Coord::new(2.0, 0.0)]));
        assert!(crosses(&a, &b).unwrap());
    }

    #[test]
    fn a_point_on_a_line_is_covered_but_does_not_cross() {
        let line = Geometry::LineString(LineString::new(vec![Coord::new(0.0, 0.0), Coord::new(2.0, 0.0)]));
        let point = Geometry::Point(Point::new(1.0, 0.0));
        assert!(intersects(&point, &line).unwrap());
        assert!(covered_by(&point, &line).unwrap());
        assert!(!crosses(&point, &line).unwrap());
    }

    #[test]
    fn disjoint_point_contributes_no_intersection() {
        let point = Geometry::Point(Point::new(5.0, 5.0));
        let other = Geometry::Point(Point::new(1.0, 1.0));
        assert!(disjoint(&point, &other).unwrap());
    }

    #[test]
    fn coincident_points_intersect_and_are_equal() {
        let a = Geometry::Point(Point::new(1.0, 1.0));
        let b = Geometry::Point(Point::new(1.0, 1.0));
        assert!(intersects(&a, &b).unwrap());
        assert!(!disjoint(&a, &b).unwrap());
        assert!(equals(&a, &b).unwrap());
    }

    #[test]
    fn identical_squares_are_equal() {
        let a = Geometry::Polygon(square(0.0, 0.0, 1.0, 1.0));
        let b = Geometry::Polygon(square(0.0, 0.0, 1.0, 1.0));
        assert!(equals(&a, &b).unwrap());
    }

    #[test]
    fn equals_exact_respects_tolerance_and_vertex_order() {
        let a = Geometry::Point(Point::new(1.0, 1.0));
        let b = Geometry::Point(Point::new(1.0 + 1e-10, 1.0));
        assert!(equals_exact(&a, &b, 1e-6));
        assert!(!equals_exact(&a, &b, 0.0));
    }
}
