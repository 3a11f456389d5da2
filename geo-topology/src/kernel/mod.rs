//! Numeric predicates: orientation, ring-in, ring-orientation.
//!
//! All three are deterministic for identical inputs and are the
//! foundation every other component builds on — the line intersector,
//! the graph builder's mutual-noding pass, and the validity engine's
//! point-in-ring tests all bottom out here.

mod quadrant;
pub use quadrant::Quadrant;

use geo_types::{Coord, LinearRing};

/// The sign of the turn `p -> q -> r` makes.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
    Collinear,
}

impl Orientation {
    pub fn reversed(self) -> Orientation {
        match self {
            Orientation::Clockwise => Orientation::CounterClockwise,
            Orientation::CounterClockwise => Orientation::Clockwise,
            Orientation::Collinear => Orientation::Collinear,
        }
    }
}

/// Sign of the signed area `(q-p) x (r-p)`, computed with Shewchuk's
/// adaptive-precision predicate so the sign is exact at double precision
/// rather than merely "probably right".
///
/// `orient(p, q, r) = -orient(q, p, r)` always, including in the
/// near-collinear case where both may independently round to
/// `Collinear`.
pub fn orientation_index(p: Coord, q: Coord, r: Coord) -> Orientation {
    let det = robust::orient2d(
        robust::Coord { x: p.x, y: p.y },
        robust::Coord { x: q.x, y: q.y },
        robust::Coord { x: r.x, y: r.y },
    );
    if det > 0.0 {
        Orientation::CounterClockwise
    } else if det < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Ray-casting point-in-ring test: casts an axis-parallel ray from `p`
/// and counts crossings with the ring's edges. A point exactly on the
/// ring counts as inside (OGC boundary-inclusive semantics).
pub fn point_in_ring(p: Coord, ring: &[Coord]) -> bool {
    if ring.len() < 4 {
        return false;
    }
    let mut crossings = 0usize;
    let n = ring.len();
    for i in 0..n - 1 {
        let a = ring[i];
        let b = ring[i + 1];

        if on_segment(p, a, b) {
            return true;
        }

        // Does the segment straddle the horizontal line through p?
        if (a.y > p.y) != (b.y > p.y) {
            let x_at_p_y = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if p.x < x_at_p_y {
                crossings += 1;
            } else if p.x == x_at_p_y {
                return true;
            }
        }
    }
    crossings % 2 == 1
}

fn on_segment(p: Coord, a: Coord, b: Coord) -> bool {
    if orientation_index(a, b, p) != Orientation::Collinear {
        return false;
    }
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

/// `true` iff the ring's signed area is positive, i.e. it winds
/// counter-clockwise. Panics on degenerate (< 4 point) input, matching
/// `LinearRing`'s own construction invariant.
pub fn is_ccw(ring: &LinearRing) -> bool {
    signed_area(ring.coords()) > 0.0
}

fn signed_area(coords: &[Coord]) -> f64 {
    assert!(coords.len() >= 4, "a ring must have at least 4 coordinates");
    let mut sum = 0.0;
    for w in coords.windows(2) {
        sum += w[0].x * w[1].y - w[1].x * w[0].y;
    }
    sum / 2.0
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn orientation_is_antisymmetric() {
        let p = Coord::new(0.0, 0.0);
        let q = Coord::new(1.0, 0.0);
        let r = Coord::new(1.0, 1.0);
        assert_eq!(orientation_index(p, q, r), Orientation::CounterClockwise);
        assert_eq!(orientation_index(q, p, r), Orientation::Clockwise);
        assert_eq!(orientation_index(p, r, q), Orientation::Clockwise);
    }

    #[test]
    fn collinear_points_are_detected() {
        let p = Coord::new(0.0, 0.0);
        let q = Coord::new(1.0, 1.0);
        let r = Coord::new(2.0, 2.0);
        assert_eq!(orientation_index(p, q, r), Orientation::Collinear);
    }

    #[test]
    fn point_in_unit_square() {
        let ring = vec![
            Coord::new(0.0, 0.0),
            Coord::new(1.0, 0.0),
            Coord::new(1.0, 1.0),
            Coord::new(0.0, 1.0),
            Coord::new(0.0, 0.0),
        ];
        assert!(point_in_ring(Coord::new(0.5, 0.5), &ring));
        assert!(!point_in_ring(Coord::new(1.5, 0.5), &ring));
        // boundary-inclusive
        assert!(point_in_ring(Coord::new(0.0, 0.5), &ring));
        assert!(point_in_ring(Coord::new(1.0, 1.0), &ring));
    }

    #[test]
    fn ccw_square_is_ccw() {
        let ring = LinearRing::new(vec![
            Coord::new(0.0, 0.0),
            Coord::new(1.0, 0.0),
            Coord::new(1.0, 1.0),
            Coord::new(0.0, 1.0),
            Coord::new(0.0, 0.0),
        ])
        .unwrap();
        assert!(is_ccw(&ring));
        let cw = LinearRing::new(vec![
            Coord::new(0.0, 0.0),
            Coord::new(0.0, 1.0),
            Coord::new(1.0, 1.0),
            Coord::new(1.0, 0.0),
            Coord::new(0.0, 0.0),
        ])
        .unwrap();
        assert!(!is_ccw(&cw));
    }
}
