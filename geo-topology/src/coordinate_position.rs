//! Point location: given a coordinate and a geometry, where does the
//! point sit relative to it — inside, on the boundary, or outside.
//!
//! Used by the relate engine to label isolated nodes (present in only
//! one of the two input graphs) and by the validity engine's
//! hole-inside-shell and shell-nesting checks.

use crate::graph::CoordPos;
use crate::kernel::{self, Orientation};
use geo_types::{Coord, Geometry, LinearRing, LineString, Point};

/// Where `coord` sits relative to `geometry`.
pub fn locate(coord: Coord, geometry: &Geometry) -> CoordPos {
    match geometry {
        Geometry::Point(p) => locate_in_point(coord, p),
        Geometry::MultiPoint(mp) => {
            if mp.iter().any(|p| p.coord() == coord) {
                CoordPos::Inside
            } else {
                CoordPos::Outside
            }
        }
        Geometry::LineString(ls) => locate_in_line_string(coord, ls),
        Geometry::LinearRing(ring) => locate_in_line_string(coord, ring.line_string()),
        Geometry::Polygon(poly) => {
            if !poly.envelope().intersects_point(coord) {
                return CoordPos::Outside;
            }
            locate_in_polygon_rings(coord, poly.exterior(), poly.interiors())
        }
        Geometry::MultiLineString(mls) => {
            let mut boundary_count = 0usize;
            let mut is_inside = false;
            for ls in mls.iter() {
                match locate_in_line_string(coord, ls) {
                    CoordPos::Inside => is_inside = true,
                    CoordPos::OnBoundary => boundary_count += 1,
                    CoordPos::Outside => {}
                }
            }
            combine(is_inside, boundary_count)
        }
        Geometry::MultiPolygon(mpoly) => {
            let mut is_inside = false;
            for poly in mpoly.iter() {
                if !poly.envelope().intersects_point(coord) {
                    continue;
                }
                match locate_in_polygon_rings(coord, poly.exterior(), poly.interiors()) {
                    CoordPos::OnBoundary => return CoordPos::OnBoundary,
                    CoordPos::Inside => is_inside = true,
                    CoordPos::Outside => {}
                }
            }
            if is_inside {
                CoordPos::Inside
            } else {
                CoordPos::Outside
            }
        }
        Geometry::GeometryCollection(gc) => {
            let mut boundary_count = 0usize;
            let mut is_inside = false;
            for g in gc.iter() {
                match locate(coord, g) {
                    CoordPos::Inside => is_inside = true,
                    CoordPos::OnBoundary => boundary_count += 1,
                    CoordPos::Outside => {}
                }
            }
            combine(is_inside, boundary_count)
        }
    }
}

fn combine(is_inside: bool, boundary_count: usize) -> CoordPos {
    if boundary_count % 2 == 1 {
        CoordPos::OnBoundary
    } else if is_inside {
        CoordPos::Inside
    } else {
        CoordPos::Outside
    }
}

fn locate_in_point(coord: Coord, point: &Point) -> CoordPos {
    if point.coord() == coord {
        CoordPos::Inside
    } else {
        CoordPos::Outside
    }
}

fn locate_in_line_string(coord: Coord, line_string: &LineString) -> CoordPos {
    let coords = line_string.coords();
    if coords.is_empty() {
        return CoordPos::Outside;
    }
    if coords.len() == 1 {
        return if coords[0] == coord { CoordPos::Inside } else { CoordPos::Outside };
    }

    let is_closed = line_string.is_closed();
    if !is_closed && (coord == coords[0] || coord == *coords.last().unwrap()) {
        return CoordPos::OnBoundary;
    }

    for line in line_string.lines() {
        if on_segment(coord, line.start, line.end) {
            return CoordPos::Inside;
        }
    }
    CoordPos::Outside
}

fn locate_in_polygon_rings(coord: Coord, exterior: &LinearRing, interiors: &[LinearRing]) -> CoordPos {
    match ring_position(coord, exterior) {
        CoordPos::Outside => return CoordPos::Outside,
        CoordPos::OnBoundary => return CoordPos::OnBoundary,
        CoordPos::Inside => {}
    }
    for hole in interiors {
        match ring_position(coord, hole) {
            CoordPos::Outside => {}
            CoordPos::OnBoundary => return CoordPos::OnBoundary,
            CoordPos::Inside => return CoordPos::Outside,
        }
    }
    CoordPos::Inside
}

/// Ray-casting point-in-ring test, refined to distinguish an exact
/// boundary hit from a true interior crossing count.
fn ring_position(coord: Coord, ring: &LinearRing) -> CoordPos {
    let coords = ring.coords();
    debug_assert!(coords.len() >= 4);

    let mut crossings = 0usize;
    for line in ring.lines() {
        let (a, b) = (line.start, line.end);
        if on_segment(coord, a, b) {
            return CoordPos::OnBoundary;
        }
        if (a.y > coord.y) != (b.y > coord.y) {
            let x_at_coord_y = a.x + (coord.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if coord.x < x_at_coord_y {
                crossings += 1;
            } else if coord.x == x_at_coord_y {
                return CoordPos::OnBoundary;
            }
        }
    }
    if crossings % 2 == 1 {
        CoordPos::Inside
    } else {
        CoordPos::Outside
    }
}

fn on_segment(p: Coord, a: Coord, b: Coord) -> bool {
    if kernel::orientation_index(a, b, p) != Orientation::Collinear {
        return false;
    }
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

#[cfg(test)]
mod test {
    use super::*;
    use geo_types::{MultiPolygon, Polygon};

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
    fn point_in_point_geometry() {
        let g = Geometry::Point(Point::new(1.0, 1.0));
        assert_eq!(locate(Coord::new(1.0, 1.0), &g), CoordPos::Inside);
        assert_eq!(locate(Coord::new(2.0, 1.0), &g), CoordPos::Outside);
    }

    #[test]
    fn open_line_string_endpoints_are_boundary() {
        let ls = LineString::new(vec![Coord::new(0.0, 0.0), Coord::new(1.0, 0.0), Coord::new(2.0, 0.0)]);
        let g = Geometry::LineString(ls);
        assert_eq!(locate(Coord::new(0.0, 0.0), &g), CoordPos::OnBoundary);
        assert_eq!(locate(Coord::new(1.0, 0.0), &g), CoordPos::Inside);
        assert_eq!(locate(Coord::new(0.5, 1.0), &g), CoordPos::Outside);
    }

    #[test]
    fn closed_line_string_has_no_boundary() {
        let ls = LineString::new(vec![
            Coord::new(0.0, 0.0),
            Coord::new(1.0, 0.0),
            Coord::new(1.0, 1.0),
            Coord::new(0.0, 0.0),
        ]);
        let g = Geometry::LineString(ls);
        assert_eq!(locate(Coord::new(0.0, 0.0), &g), CoordPos::Inside);
    }

    #[test]
    fn polygon_with_hole() {
        let exterior = square(0.0, 0.0, 10.0, 10.0);
        let hole = square(3.0, 3.0, 6.0, 6.0);
        let poly = Polygon::new(exterior, vec![hole]);
        let g = Geometry::Polygon(poly);
        assert_eq!(locate(Coord::new(1.0, 1.0), &g), CoordPos::Inside);
        assert_eq!(locate(Coord::new(4.0, 4.0), &g), CoordPos::Outside);
        assert_eq!(locate(Coord::new(3.0, 4.0), &g), CoordPos::OnBoundary);
        assert_eq!(locate(Coord::new(0.0, 0.0), &g), CoordPos::OnBoundary);
        assert_eq!(locate(Coord::new(20.0, 20.0), &g), CoordPos::Outside);
    }

    #[test]
    fn multi_polygon_checks_every_member() {
        let a = Polygon::new(square(0.0, 0.0, 1.0, 1.0), vec![]);
        let b = Polygon::new(square(5.0, 5.0, 6.0, 6.0), vec![]);
        let g = Geometry::MultiPolygon(MultiPolygon::new(vec![a, b]));
        assert_eq!(locate(Coord::new(0.5, 0.5), &g), CoordPos::Inside);
        assert_eq!(locate(Coord::new(5.5, 5.5), &g), CoordPos::Inside);
        assert_eq!(locate(Coord::new(3.0, 3.0), &g), CoordPos::Outside);
    }
}
