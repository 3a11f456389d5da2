//! Builds the `EdgeEnd`s incident to every node of a noded edge, groups
//! them into `EdgeEndBundle`s, and labels each node's bundles (§4.F
//! step 7).

use crate::coordinate_position::locate;
use crate::error::TopologyError;
use crate::graph::{
    CoordPos, Direction, Edge, EdgeEnd, EdgeEndBundle, EdgeEndKey, GeometryGraph, Label, LabeledEdgeEndBundle, NodeKey,
};
use geo_types::{Coord, Dimensions, HasDimensions};
use std::collections::BTreeMap;

/// Every directed half-edge leaving `edge`'s endpoints and intersection
/// points, paired with the node coordinate it leaves from.
///
/// An edge with `n` recorded intersections (endpoints included) is split
/// into `n - 1` sub-edges; each sub-edge contributes one `EdgeEnd` at
/// each of its two endpoints, one in the stored coordinate direction and
/// one — with its side label flipped — in reverse.
fn edge_ends_for_edge(edge: &Edge) -> Vec<(Coord, EdgeEnd)> {
    let coords = edge.coords();
    let last_segment = coords.len() - 1;

    let mut out = Vec::new();
    for intersection in edge.edge_intersections() {
        let si = intersection.segment_index();
        let dist = intersection.dist();
        let coord = intersection.coordinate();

        let forward_point = if si < last_segment { Some(coords[si + 1]) } else { None };
        let backward_point = if dist > 0.0 {
            Some(coords[si])
        } else if si > 0 {
            Some(coords[si - 1])
        } else {
            None
        };

        if let Some(forward_point) = forward_point {
            out.push((coord, EdgeEnd::new(coord, forward_point, *edge.label())));
        }
        if let Some(backward_point) = backward_point {
            out.push((coord, EdgeEnd::new(coord, backward_point, reversed_label(edge.label()))));
        }
    }
    out
}

/// The label as seen walking an edge in the opposite direction: `ON`
/// stays the same, but `LEFT`/`RIGHT` swap.
fn reversed_label(label: &Label) -> Label {
    let mut reversed = *label;
    for geom_index in 0..2 {
        reversed.position_mut(geom_index).flip();
    }
    reversed
}

/// All edge-ends of both input graphs, grouped first by node coordinate
/// and then by direction (an `EdgeEndBundle`), with every bundle's
/// composite label computed and the per-node side-consistency and
/// dimensional-collapse steps applied.
pub fn build_labeled_bundles(
    graphs: [&GeometryGraph; 2],
) -> Result<BTreeMap<NodeKey, Vec<LabeledEdgeEndBundle>>, TopologyError> {
    let mut by_node: BTreeMap<NodeKey, BTreeMap<EdgeEndKey, EdgeEndBundle>> = BTreeMap::new();

    for graph in graphs {
        for edge in graph.planar_graph().edges() {
            for (coord, edge_end) in edge_ends_for_edge(edge) {
                let key = NodeKey(coord);
                let bundle = by_node
                    .entry(key)
                    .or_default()
                    .entry(edge_end.key())
                    .or_insert_with(|| EdgeEndBundle::new(coord));
                bundle.insert(edge_end);
            }
        }
    }

    let mut result = BTreeMap::new();
    for (node_key, bundles_by_key) in by_node {
        let mut labeled: Vec<LabeledEdgeEndBundle> =
            bundles_by_key.into_iter().map(|(_, bundle)| bundle.into_labeled()).collect();

        propagate_side_labels(&mut labeled, 0)?;
        propagate_side_labels(&mut labeled, 1)?;

        for bundle in &mut labeled {
            let coordinate = bundle.coordinate();
            let label = bundle.label_mut();
            for geom_index in 0..2 {
                if !label.is_any_empty(geom_index) {
                    continue;
                }
                // A 0-dimensional target can never meet a graph edge
                // except at a recorded intersection, so an edge with no
                // label here is necessarily exterior to it; only
                // targets with positive dimension are worth a point
                // location.
                let target = graphs[geom_index].geometry();
                let position = match target.dimensions() {
                    Dimensions::OneDimensional | Dimensions::TwoDimensional => locate(coordinate, target),
                    Dimensions::ZeroDimensional | Dimensions::Empty => CoordPos::Outside,
                };
                label.set_all_positions_if_empty(geom_index, position);
            }
        }

        result.insert(node_key, labeled);
    }

    Ok(result)
}

/// Walks a node's bundles in angular order, filling in any unset `ON`
/// position from the side location established by the preceding bundle,
/// and carrying the "current interior side" across bundles whose own
/// side labels are absent. A `RIGHT` position that contradicts the
/// carried location is a `TopologyError`: the noding is inconsistent.
fn propagate_side_labels(bundles: &mut [LabeledEdgeEndBundle], geom_index: usize) -> Result<(), TopologyError> {
    let mut start_loc = None;
    for bundle in bundles.iter() {
        if bundle.label().is_geom_area(geom_index) {
            if let Some(left) = bundle.label().side_position(geom_index, Direction::Left) {
                start_loc = Some(left);
            }
        }
    }
    let mut loc = match start_loc {
        Some(loc) => loc,
        None => return Ok(()),
    };

    for bundle in bundles.iter_mut() {
        let coordinate = bundle.coordinate();
        let label = bundle.label_mut();
        if label.on_position(geom_index).is_none() {
            label.set_on_position(geom_index, loc);
        }
        if label.is_geom_area(geom_index) {
            let right = label.side_position(geom_index, Direction::Right);
            let left = label.side_position(geom_index, Direction::Left);
            match right {
                Some(right_loc) => {
                    if right_loc != loc {
                        return Err(TopologyError::new(coordinate));
                    }
                    loc = left.ok_or_else(|| TopologyError::new(coordinate))?;
                }
                None => {
                    debug_assert!(left.is_none(), "found single null side at {coordinate:?}");
                    label.set_position(geom_index, Direction::Right, loc);
                    label.set_position(geom_index, Direction::Left, loc);
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use geo_types::{Geometry, LineString, Polygon};

    #[test]
    fn crossing_lines_label_the_intersection_node_on_both() {
        let a = GeometryGraph::new(
            0,
            Geometry::LineString(LineString::new(vec![Coord::new(0.0, 0.0), Coord::new(2.0, 2.0)])),
        );
        let b = GeometryGraph::new(
            1,
            Geometry::LineString(LineString::new(vec![Coord::new(0.0, 2.0), Coord::new(2.0, 0.0)])),
        );
        let bundles = build_labeled_bundles([&a, &b]).unwrap();
        let mid = NodeKey(Coord::new(1.0, 1.0));
        assert!(bundles.contains_key(&mid));
    }

    #[test]
    fn polygon_boundary_node_gets_area_side_labels() {
        let ring = vec![
            Coord::new(0.0, 0.0),
            Coord::new(1.0, 0.0),
            Coord::new(1.0, 1.0),
            Coord::new(0.0, 1.0),
            Coord::new(0.0, 0.0),
        ];
        let poly = Polygon::new(geo_types::LinearRing::new(ring).unwrap(), vec![]);
        let a = GeometryGraph::new(0, Geometry::Polygon(poly));
        let b = GeometryGraph::new(1, Geometry::Point(geo_types::Point::new(5.0, 5.0)));
        let bundles = build_labeled_bundles([&a, &b]).unwrap();
        let corner = NodeKey(Coord::new(0.0, 0.0));
        let labeled = &bundles[&corner];
        assert!(labeled.iter().any(|b| b.label().is_geom_area(0)));
    }
}
