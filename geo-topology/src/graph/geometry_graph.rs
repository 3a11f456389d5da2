//! Builds a `PlanarGraph` from a `Geometry` (§4.E): extracts edges,
//! finds self-intersections, and labels boundary points under the mod-2
//! rule.

use super::{CoordPos, Label, PlanarGraph, TopologyPosition};
use crate::index::{find_overlapping_segments, MonotoneChainSet};
use crate::intersection::{Intersection, LineIntersector};
use crate::kernel::is_ccw;
use geo_types::{Coord, Geometry, HasDimensions, Line, LinearRing, LineString, Polygon};

/// A geometry's planar graph, tagged with which argument position (0 or
/// 1) it plays in a relate/validity operation.
#[derive(Clone)]
pub struct GeometryGraph {
    arg_index: usize,
    geometry: Geometry,
    use_boundary_determination_rule: bool,
    has_computed_self_nodes: bool,
    planar_graph: PlanarGraph,
}

/// Whether a geometry's own self-noding pass found a proper
/// self-intersection, and if so, where.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SelfIntersectionSummary {
    pub proper_coordinate: Option<Coord>,
}

impl GeometryGraph {
    pub fn new(arg_index: usize, geometry: Geometry) -> Self {
        let mut graph = GeometryGraph {
            arg_index,
            geometry,
            use_boundary_determination_rule: true,
            has_computed_self_nodes: false,
            planar_graph: PlanarGraph::new(),
        };
        let geometry = graph.geometry.clone();
        graph.add_geometry(&geometry);
        graph
    }

    pub fn arg_index(&self) -> usize {
        self.arg_index
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn planar_graph(&self) -> &PlanarGraph {
        &self.planar_graph
    }

    pub fn planar_graph_mut(&mut self) -> &mut PlanarGraph {
        &mut self.planar_graph
    }

    /// The mod-2 boundary-determination rule, applied to the number of
    /// times a point has been seen as a line-component endpoint (or a
    /// ring-boundary touch for collections that obey the rule).
    pub fn determine_boundary(boundary_count: usize) -> CoordPos {
        CoordPos::from_boundary_count(boundary_count)
    }

    pub fn is_boundary_node(&self, coord: Coord) -> bool {
        self.planar_graph.is_boundary_node(self.arg_index, coord)
    }

    pub fn boundary_nodes(&self) -> impl Iterator<Item = &super::Node> {
        self.planar_graph.boundary_nodes(self.arg_index)
    }

    fn add_geometry(&mut self, geometry: &Geometry) {
        if geometry.is_empty() {
            return;
        }
        match geometry {
            Geometry::Point(point) => self.add_point(point.coord()),
            Geometry::LineString(line_string) => self.add_line_string(line_string),
            Geometry::LinearRing(ring) => self.add_line_string(ring.line_string()),
            Geometry::Polygon(polygon) => self.add_polygon(polygon),
            Geometry::MultiPoint(multi_point) => {
                for point in multi_point.iter() {
                    self.add_point(point.coord());
                }
            }
            Geometry::MultiLineString(multi_line_string) => {
                for line_string in multi_line_string.iter() {
                    self.add_line_string(line_string);
                }
            }
            Geometry::MultiPolygon(multi_polygon) => {
                // Unlike every other collection type, a MultiPolygon's
                // component shells/holes are never also under the mod-2
                // boundary-determination rule: their boundary labelling
                // comes entirely from their own ring orientation.
                self.use_boundary_determination_rule = false;
                for polygon in multi_polygon.iter() {
                    self.add_polygon(polygon);
                }
            }
            Geometry::GeometryCollection(collection) => {
                for geometry in collection.iter() {
                    self.add_geometry(geometry);
                }
            }
        }
    }

    fn add_point(&mut self, coord: Coord) {
        self.insert_point(coord, CoordPos::Inside);
    }

    fn add_line_string(&mut self, line_string: &LineString) {
        let deduped = line_string.without_consecutive_duplicates();
        if deduped.num_points() < 2 {
            return;
        }
        let coords = deduped.coords().to_vec();
        self.insert_boundary_point(*coords.first().unwrap());
        self.insert_boundary_point(*coords.last().unwrap());

        let label = Label::new(self.arg_index, TopologyPosition::line_or_point(CoordPos::Inside));
        self.planar_graph.insert_edge(coords, label);
    }

    fn add_polygon(&mut self, polygon: &Polygon) {
        self.add_polygon_ring(polygon.exterior(), CoordPos::Outside, CoordPos::Inside);
        // Holes are labelled opposite to the shell: the polygon interior
        // lies on the opposite side of a hole ring from the side it lies
        // on for the shell.
        for hole in polygon.interiors() {
            self.add_polygon_ring(hole, CoordPos::Inside, CoordPos::Outside);
        }
    }

    fn add_polygon_ring(&mut self, ring: &LinearRing, cw_left: CoordPos, cw_right: CoordPos) {
        let deduped = ring.line_string().without_consecutive_duplicates();
        if deduped.is_empty() {
            return;
        }
        let coords = deduped.coords().to_vec();
        if coords.len() < 4 {
            return;
        }
        let first = coords[0];

        let (left, right) = if is_ccw_coords(&coords) {
            (cw_right, cw_left)
        } else {
            (cw_left, cw_right)
        };

        let label = Label::new(
            self.arg_index,
            TopologyPosition::area(CoordPos::OnBoundary, left, right),
        );
        self.planar_graph.insert_edge(coords, label);
        self.insert_point(first, CoordPos::OnBoundary);
    }

    fn insert_point(&mut self, coord: Coord, position: CoordPos) {
        let node_index = self.planar_graph.add_node_with_coordinate(coord);
        self.planar_graph
            .node_mut(node_index)
            .set_label_on_position(self.arg_index, position);
    }

    fn insert_boundary_point(&mut self, coord: Coord) {
        let arg_index = self.arg_index;
        let node_index = self.planar_graph.add_node_with_coordinate(coord);
        self.planar_graph.node_mut(node_index).set_label_boundary(arg_index);
    }

    /// Finds this geometry's self-intersections and adds them as graph
    /// nodes. Idempotent: a second call is a no-op (and reports no
    /// proper intersection, since none is recomputed).
    pub fn compute_self_nodes(&mut self, intersector: &LineIntersector) -> SelfIntersectionSummary {
        if self.has_computed_self_nodes {
            return SelfIntersectionSummary::default();
        }
        self.has_computed_self_nodes = true;

        let edge_count = self.planar_graph.edge_count();
        let chain_sets: Vec<MonotoneChainSet> = (0..edge_count)
            .map(|i| MonotoneChainSet::build(self.planar_graph.edge(i).coords()))
            .collect();

        let mut found: Vec<(usize, Coord, usize, f64)> = Vec::new();
        let mut summary = SelfIntersectionSummary::default();
        for i in 0..edge_count {
            for j in i..edge_count {
                let coords_i = self.planar_graph.edge(i).coords().to_vec();
                let coords_j = self.planar_graph.edge(j).coords().to_vec();
                let mut pairs = Vec::new();
                find_overlapping_segments(&coords_i, &chain_sets[i], &coords_j, &chain_sets[j], |a, b| {
                    pairs.push((a, b));
                });
                for (seg_i, seg_j) in pairs {
                    if i == j && seg_i.abs_diff(seg_j) <= 1 {
                        // adjacent/identical segments of the same edge always "touch" at a shared vertex
                        continue;
                    }
                    let p = Line::new(coords_i[seg_i], coords_i[seg_i + 1]);
                    let q = Line::new(coords_j[seg_j], coords_j[seg_j + 1]);
                    let intersection = intersector.compute(p, q);
                    if let Intersection::Point { at, is_proper } = intersection {
                        if is_proper && summary.proper_coordinate.is_none() {
                            summary.proper_coordinate = Some(at);
                        }
                    }
                    match intersection {
                        Intersection::Point { at, .. } => {
                            found.push((i, at, seg_i, 0.0));
                            found.push((j, at, seg_j, 0.0));
                        }
                        Intersection::Collinear { a, b } => {
                            found.push((i, a, seg_i, 0.0));
                            found.push((i, b, seg_i, 0.0));
                            found.push((j, a, seg_j, 0.0));
                            found.push((j, b, seg_j, 0.0));
                        }
                        Intersection::None => {}
                    }
                }
            }
        }

        for (edge_index, coord, seg, _dist) in &found {
            let dist = point_segment_distance(*coord, self.planar_graph.edge(*edge_index).coords(), *seg);
            self.planar_graph.edge_mut(*edge_index).add_intersection(*coord, *seg, dist);
        }

        self.add_self_intersection_nodes();
        summary
    }

    fn add_self_intersection_nodes(&mut self) {
        let arg_index = self.arg_index;
        let use_rule = self.use_boundary_determination_rule;
        let per_edge: Vec<(CoordPos, Vec<Coord>)> = self
            .planar_graph
            .edges()
            .iter()
            .map(|edge| {
                let position = edge.label().on_position(arg_index).unwrap_or(CoordPos::Inside);
                let coords = edge.edge_intersections().iter().map(|i| i.coordinate()).collect();
                (position, coords)
            })
            .collect();

        for (position, coords) in per_edge {
            for coord in coords {
                if self.is_boundary_node(coord) {
                    continue;
                }
                if position == CoordPos::OnBoundary && use_rule {
                    self.insert_boundary_point(coord);
                } else {
                    self.insert_point(coord, position);
                }
            }
        }
    }
}

fn is_ccw_coords(coords: &[Coord]) -> bool {
    match LinearRing::new(coords.to_vec()) {
        Ok(ring) => is_ccw(&ring),
        Err(_) => false,
    }
}

fn point_segment_distance(coord: Coord, edge_coords: &[Coord], segment_index: usize) -> f64 {
    if coord == edge_coords[segment_index] {
        0.0
    } else {
        coord.distance(&edge_coords[segment_index])
    }
}

/// Whether this pair of geometries shares a "proper" intersection (a
/// crossing that isn't at a shared endpoint/vertex of either noded
/// edge) and, more narrowly, a proper intersection that additionally
/// doesn't fall on either geometry's boundary — used by the relate
/// engine's fast-path lower bounds (§4.F step 4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MutualIntersectionSummary {
    pub has_proper: bool,
    pub has_proper_interior: bool,
}

/// Computes all mutual intersections between two geometry graphs'
/// edges (§4.F step 2), recording them as `EdgeIntersection`s on both.
pub fn compute_mutual_intersections(
    a: &mut GeometryGraph,
    b: &mut GeometryGraph,
    intersector: &LineIntersector,
) -> MutualIntersectionSummary {
    let edge_count_a = a.planar_graph.edge_count();
    let edge_count_b = b.planar_graph.edge_count();

    let chains_a: Vec<MonotoneChainSet> = (0..edge_count_a)
        .map(|i| MonotoneChainSet::build(a.planar_graph.edge(i).coords()))
        .collect();
    let chains_b: Vec<MonotoneChainSet> = (0..edge_count_b)
        .map(|i| MonotoneChainSet::build(b.planar_graph.edge(i).coords()))
        .collect();

    let mut found_a: Vec<(usize, Coord, usize)> = Vec::new();
    let mut found_b: Vec<(usize, Coord, usize)> = Vec::new();
    let mut summary = MutualIntersectionSummary::default();

    for i in 0..edge_count_a {
        let coords_a = a.planar_graph.edge(i).coords().to_vec();
        for j in 0..edge_count_b {
            let coords_b = b.planar_graph.edge(j).coords().to_vec();
            let mut pairs = Vec::new();
            find_overlapping_segments(&coords_a, &chains_a[i], &coords_b, &chains_b[j], |x, y| {
                pairs.push((x, y));
            });
            for (seg_a, seg_b) in pairs {
                let p = Line::new(coords_a[seg_a], coords_a[seg_a + 1]);
                let q = Line::new(coords_b[seg_b], coords_b[seg_b + 1]);
                let intersection = intersector.compute(p, q);
                if let Intersection::Point { at, is_proper } = intersection {
                    if is_proper {
                        summary.has_proper = true;
                        if !a.is_boundary_node(at) && !b.is_boundary_node(at) {
                            summary.has_proper_interior = true;
                        }
                    }
                }
                match intersection {
                    Intersection::Point { at, .. } => {
                        found_a.push((i, at, seg_a));
                        found_b.push((j, at, seg_b));
                    }
                    Intersection::Collinear { a: s, b: e } => {
                        found_a.push((i, s, seg_a));
                        found_a.push((i, e, seg_a));
                        found_b.push((j, s, seg_b));
                        found_b.push((j, e, seg_b));
                    }
                    Intersection::None => {}
                }
            }
        }
    }

    for (edge_index, coord, seg) in found_a {
        let coords = a.planar_graph.edge(edge_index).coords().to_vec();
        let dist = point_segment_distance(coord, &coords, seg);
        let edge = a.planar_graph.edge_mut(edge_index);
        edge.add_intersection(coord, seg, dist);
    }
    for (edge_index, coord, seg) in found_b {
        let coords = b.planar_graph.edge(edge_index).coords().to_vec();
        let dist = point_segment_distance(coord, &coords, seg);
        let edge = b.planar_graph.edge_mut(edge_index);
        edge.add_intersection(coord, seg, dist);
    }

    summary
}

#[cfg(test)]
mod test {
    use super::*;
    use geo_types::Point;

    #[test]
    fn point_geometry_creates_one_inside_node() {
        let graph = GeometryGraph::new(0, Geometry::Point(Point::new(1.0, 2.0)));
        assert_eq!(graph.planar_graph().node_count(), 1);
        let node = graph.planar_graph().node(0);
        assert_eq!(node.label().on_position(0), Some(CoordPos::Inside));
    }

    #[test]
    fn closed_linestring_has_empty_boundary_so_no_boundary_node() {
        let ring = LineString::new(vec![
            Coord::new(0.0, 0.0),
            Coord::new(1.0, 0.0),
            Coord::new(1.0, 1.0),
            Coord::new(0.0, 0.0),
        ]);
        let graph = GeometryGraph::new(0, Geometry::LineString(ring));
        let node = graph.planar_graph().node(graph.planar_graph().find_node(Coord::new(0.0, 0.0)).unwrap());
        // endpoint seen twice (start and end) -> mod-2 -> interior, not boundary
        assert_eq!(node.label().on_position(0), Some(CoordPos::Inside));
    }

    #[test]
    fn open_linestring_endpoints_are_boundary() {
        let line = LineString::new(vec![Coord::new(0.0, 0.0), Coord::new(1.0, 0.0)]);
        let graph = GeometryGraph::new(0, Geometry::LineString(line));
        let node = graph.planar_graph().node(graph.planar_graph().find_node(Coord::new(0.0, 0.0)).unwrap());
        assert_eq!(node.label().on_position(0), Some(CoordPos::OnBoundary));
    }
}
