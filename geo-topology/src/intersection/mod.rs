//! Robust segment × segment intersection.
//!
//! Ported from the same homogeneous-coordinate algorithm JTS's
//! `RobustLineIntersector` uses: orientation tests establish *that* two
//! segments meet and whether the meeting point is a shared endpoint,
//! and only when neither shortcut applies is the full intersection
//! point computed, with a nearest-endpoint fallback for the
//! ill-conditioned (near-parallel) case.

use geo_types::{Coord, Envelope, Line, PrecisionModel};

use crate::kernel::{orientation_index, Orientation};

/// The outcome of intersecting two segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intersection {
    None,
    Point { at: Coord, is_proper: bool },
    Collinear { a: Coord, b: Coord },
}

impl Intersection {
    pub fn is_proper(&self) -> bool {
        matches!(self, Intersection::Point { is_proper: true, .. })
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Intersection::None)
    }
}

/// A reusable intersector instance. Holds no mutable state beyond the
/// precision model it rounds results to — safe to share across
/// computations within one thread, but (per the resource model) never
/// across threads.
#[derive(Clone, Copy, Debug, Default)]
pub struct LineIntersector {
    precision_model: Option<PrecisionModel>,
}

impl LineIntersector {
    pub fn new() -> Self {
        LineIntersector { precision_model: None }
    }

    pub fn with_precision_model(precision_model: PrecisionModel) -> Self {
        LineIntersector {
            precision_model: Some(precision_model),
        }
    }

    pub fn compute(&self, p: Line, q: Line) -> Intersection {
        let result = compute_raw(p, q);
        self.snap(result)
    }

    fn snap(&self, intersection: Intersection) -> Intersection {
        let Some(model) = self.precision_model else {
            return intersection;
        };
        match intersection {
            Intersection::Point { at, is_proper } => Intersection::Point {
                at: model.make_precise(at),
                is_proper,
            },
            Intersection::Collinear { a, b } => Intersection::Collinear {
                a: model.make_precise(a),
                b: model.make_precise(b),
            },
            Intersection::None => Intersection::None,
        }
    }
}

fn envelope_of(l: Line) -> Envelope {
    Envelope::of_coords(l.start, l.end)
}

fn compute_raw(p: Line, q: Line) -> Intersection {
    if !envelope_of(p).intersects(&envelope_of(q)) {
        return Intersection::None;
    }

    use Orientation::*;
    let p_q1 = orientation_index(p.start, p.end, q.start);
    let p_q2 = orientation_index(p.start, p.end, q.end);
    if matches!((p_q1, p_q2), (Clockwise, Clockwise) | (CounterClockwise, CounterClockwise)) {
        return Intersection::None;
    }

    let q_p1 = orientation_index(q.start, q.end, p.start);
    let q_p2 = orientation_index(q.start, q.end, p.end);
    if matches!((q_p1, q_p2), (Clockwise, Clockwise) | (CounterClockwise, CounterClockwise)) {
        return Intersection::None;
    }

    if matches!((p_q1, p_q2, q_p1, q_p2), (Collinear, Collinear, Collinear, Collinear)) {
        return collinear_intersection(p, q);
    }

    // A single intersection point exists. If one of the orientation
    // tests came back collinear, the intersection is a shared endpoint
    // — copy it exactly rather than recomputing it, for robustness.
    if p_q1 == Collinear || p_q2 == Collinear || q_p1 == Collinear || q_p2 == Collinear {
        let at = if p.start == q.start || p.start == q.end {
            p.start
        } else if p.end == q.start || p.end == q.end {
            p.end
        } else if p_q1 == Collinear {
            q.start
        } else if p_q2 == Collinear {
            q.end
        } else if q_p1 == Collinear {
            p.start
        } else {
            debug_assert_eq!(q_p2, Collinear);
            p.end
        };
        Intersection::Point { at, is_proper: false }
    } else {
        Intersection::Point {
            at: proper_intersection(p, q),
            is_proper: true,
        }
    }
}

fn collinear_intersection(p: Line, q: Line) -> Intersection {
    let p_bounds = envelope_of(p);
    let q_bounds = envelope_of(q);

    let collinear = |a: Coord, b: Coord| Intersection::Collinear { a, b };
    let improper = |at: Coord| Intersection::Point { at, is_proper: false };

    match (
        p_bounds.intersects_point(q.start),
        p_bounds.intersects_point(q.end),
        q_bounds.intersects_point(p.start),
        q_bounds.intersects_point(p.end),
    ) {
        (true, true, _, _) => collinear(q.start, q.end),
        (_, _, true, true) => collinear(p.start, p.end),
        (true, false, true, false) if q.start == p.start => improper(q.start),
        (true, _, true, _) => collinear(q.start, p.start),
        (true, false, false, true) if q.start == p.end => improper(q.start),
        (true, _, _, true) => collinear(q.start, p.end),
        (false, true, true, false) if q.end == p.start => improper(q.end),
        (_, true, true, _) => collinear(q.end, p.start),
        (false, true, false, true) if q.end == p.end => improper(q.end),
        (_, true, _, true) => collinear(q.end, p.end),
        _ => Intersection::None,
    }
}

fn point_line_distance(p: Coord, l: Line) -> f64 {
    if l.start == l.end {
        return p.distance(&l.start);
    }
    let dx = l.end.x - l.start.x;
    let dy = l.end.y - l.start.y;
    let len2 = dx * dx + dy * dy;
    let t = ((p.x - l.start.x) * dx + (p.y - l.start.y) * dy) / len2;
    if t <= 0.0 {
        p.distance(&l.start)
    } else if t >= 1.0 {
        p.distance(&l.end)
    } else {
        let proj = Coord::new(l.start.x + t * dx, l.start.y + t * dy);
        p.distance(&proj)
    }
}

/// The endpoint (of either segment) closest to the *other* segment — a
/// reasonable stand-in for the true intersection point when the
/// homogeneous-coordinate computation is too ill-conditioned to trust.
fn nearest_endpoint(p: Line, q: Line) -> Coord {
    let mut nearest = p.start;
    let mut min_dist = point_line_distance(p.start, q);

    let d = point_line_distance(p.end, q);
    if d < min_dist {
        min_dist = d;
        nearest = p.end;
    }
    let d = point_line_distance(q.start, p);
    if d < min_dist {
        min_dist = d;
        nearest = q.start;
    }
    let d = point_line_distance(q.end, p);
    if d < min_dist {
        nearest = q.end;
    }
    nearest
}

/// Homogeneous-coordinate intersection, conditioned by recentring both
/// segments on the midpoint of the overlap of their envelopes to keep
/// as many significant bits as possible.
fn raw_line_intersection(p: Line, q: Line) -> Option<Coord> {
    let p_min_x = p.start.x.min(p.end.x);
    let p_min_y = p.start.y.min(p.end.y);
    let p_max_x = p.start.x.max(p.end.x);
    let p_max_y = p.start.y.max(p.end.y);

    let q_min_x = q.start.x.min(q.end.x);
    let q_min_y = q.start.y.min(q.end.y);
    let q_max_x = q.start.x.max(q.end.x);
    let q_max_y = q.start.y.max(q.end.y);

    let int_min_x = p_min_x.max(q_min_x);
    let int_max_x = p_max_x.min(q_max_x);
    let int_min_y = p_min_y.max(q_min_y);
    let int_max_y = p_max_y.min(q_max_y);

    let mid_x = (int_min_x + int_max_x) / 2.0;
    let mid_y = (int_min_y + int_max_y) / 2.0;

    let p1x = p.start.x - mid_x;
    let p1y = p.start.y - mid_y;
    let p2x = p.end.x - mid_x;
    let p2y = p.end.y - mid_y;
    let q1x = q.start.x - mid_x;
    let q1y = q.start.y - mid_y;
    let q2x = q.end.x - mid_x;
    let q2y = q.end.y - mid_y;

    let px = p1y - p2y;
    let py = p2x - p1x;
    let pw = p1x * p2y - p2x * p1y;

    let qx = q1y - q2y;
    let qy = q2x - q1x;
    let qw = q1x * q2y - q2x * q1y;

    let xw = py * qw - qy * pw;
    let yw = qx * pw - px * qw;
    let w = px * qy - qx * py;

    let x_int = xw / w;
    let y_int = yw / w;

    if x_int.is_nan() || x_int.is_infinite() || y_int.is_nan() || y_int.is_infinite() {
        None
    } else {
        Some(Coord::new(x_int + mid_x, y_int + mid_y))
    }
}

fn proper_intersection(p: Line, q: Line) -> Coord {
    let mut at = raw_line_intersection(p, q).unwrap_or_else(|| nearest_endpoint(p, q));
    if !(envelope_of(p).intersects_point(at) && envelope_of(q).intersects_point(at)) {
        at = nearest_endpoint(p, q);
    }
    at
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    fn li() -> LineIntersector {
        LineIntersector::new()
    }

    #[test]
    fn crossing_segments_give_proper_point() {
        let p = Line::new(Coord::new(0.0, 0.0), Coord::new(5.0, 5.0));
        let q = Line::new(Coord::new(0.0, 5.0), Coord::new(5.0, 0.0));
        match li().compute(p, q) {
            Intersection::Point { at, is_proper } => {
                assert_relative_eq!(at, Coord::new(2.5, 2.5));
                assert!(is_proper);
            }
            other => panic!("expected a proper point, got {other:?}"),
        }
    }

    #[test]
    fn disjoint_bounding_rects_are_no_intersection() {
        let p = Line::new(Coord::new(0.0, 0.0), Coord::new(5.0, 5.0));
        let q = Line::new(Coord::new(0.0, 1.0), Coord::new(5.0, 6.0));
        assert_eq!(li().compute(p, q), Intersection::None);
    }

    #[test]
    fn shared_endpoint_is_copied_exactly() {
        let p = Line::new(Coord::new(0.0, 0.0), Coord::new(5.0, 5.0));
        let q = Line::new(Coord::new(5.0, 5.0), Coord::new(5.0, 0.0));
        assert_eq!(
            li().compute(p, q),
            Intersection::Point {
                at: Coord::new(5.0, 5.0),
                is_proper: false,
            }
        );
    }

    #[test]
    fn overlapping_collinear_segments() {
        let p = Line::new(Coord::new(0.0, 0.0), Coord::new(5.0, 5.0));
        let q = Line::new(Coord::new(3.0, 3.0), Coord::new(6.0, 6.0));
        assert_eq!(
            li().compute(p, q),
            Intersection::Collinear {
                a: Coord::new(3.0, 3.0),
                b: Coord::new(5.0, 5.0),
            }
        );
    }

    /// Based on JTS's `testCentralEndpointHeuristicFailure` regression:
    /// one segment lies at a sharp angle to the other with only one
    /// endpoint close to it; a naive centroid heuristic picks the wrong
    /// endpoint.
    #[test]
    fn central_endpoint_heuristic_failure_1() {
        let p = Line::new(Coord::new(163.81867067, -211.31840378), Coord::new(165.9174252, -214.1665075));
        let q = Line::new(
            Coord::new(2.84139601, -57.95412726),
            Coord::new(469.59990601, -502.63851732),
        );
        match li().compute(p, q) {
            Intersection::Point { at, is_proper } => {
                assert_relative_eq!(at, Coord::new(163.81867067, -211.31840378));
                assert!(is_proper);
            }
            other => panic!("expected a proper point, got {other:?}"),
        }
    }

    #[test]
    fn nearly_parallel_segments_do_not_intersect() {
        let p = Line::new(Coord::new(-42.0, 163.2), Coord::new(21.2, 265.2));
        let q = Line::new(Coord::new(-26.2, 188.7), Coord::new(37.0, 290.7));
        assert_eq!(li().compute(p, q), Intersection::None);
    }

    #[test]
    fn snaps_to_precision_model_when_configured() {
        let intersector = LineIntersector::with_precision_model(PrecisionModel::Fixed { scale: 10.0 });
        let p = Line::new(Coord::new(0.0, 0.0), Coord::new(5.0, 5.03));
        let q = Line::new(Coord::new(0.0, 5.03), Coord::new(5.0, 0.0));
        match intersector.compute(p, q) {
            Intersection::Point { at, .. } => {
                assert_eq!(at, PrecisionModel::Fixed { scale: 10.0 }.make_precise(at));
            }
            other => panic!("expected a point intersection, got {other:?}"),
        }
    }
}
