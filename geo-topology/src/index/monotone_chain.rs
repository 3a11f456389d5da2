//! Monotone chains: maximal runs of segments whose direction vector
//! stays in one quadrant, used to find candidate intersecting segment
//! pairs in better than `O(n*m)`.

use geo_types::{Coord, Envelope};

use crate::kernel::Quadrant;

/// A maximal contiguous run `[start, end]` (inclusive indices into the
/// parent coordinate list) whose segment directions all lie in one
/// quadrant. Within one chain, segments pairwise never intersect, so
/// only overlaps *between* chains need to be tested.
#[derive(Debug, Clone, Copy)]
pub struct Chain {
    pub start: usize,
    pub end: usize,
    envelope: Envelope,
}

impl Chain {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn envelope(&self) -> Envelope {
        self.envelope
    }
}

/// All the monotone chains of a coordinate sequence (e.g. an `Edge`'s
/// coordinates), built once and queried read-only afterward.
#[derive(Debug, Clone)]
pub struct MonotoneChainSet {
    chains: Vec<Chain>,
}

impl MonotoneChainSet {
    pub fn build(coords: &[Coord]) -> Self {
        let mut chains = Vec::new();
        if coords.len() < 2 {
            return MonotoneChainSet { chains };
        }

        let mut start = 0usize;
        let mut quadrant = Quadrant::new(coords[1].x - coords[0].x, coords[1].y - coords[0].y);

        for i in 1..coords.len() - 1 {
            let next_quadrant = Quadrant::new(coords[i + 1].x - coords[i].x, coords[i + 1].y - coords[i].y);
            // A direction change (or degenerate zero-length segment)
            // ends the current chain.
            if next_quadrant != quadrant {
                chains.push(Chain {
                    start,
                    end: i,
                    envelope: envelope_of_range(coords, start, i),
                });
                start = i;
                quadrant = next_quadrant;
            }
        }
        chains.push(Chain {
            start,
            end: coords.len() - 1,
            envelope: envelope_of_range(coords, start, coords.len() - 1),
        });
        MonotoneChainSet { chains }
    }

    pub fn chains(&self) -> &[Chain] {
        &self.chains
    }
}

fn envelope_of_range(coords: &[Coord], start: usize, end: usize) -> Envelope {
    let mut env = Envelope::empty();
    for c in &coords[start..=end] {
        env.expand_to_include(*c);
    }
    env
}

/// Finds every pair of segment indices `(i, j)` — `i` indexing `coords_a`,
/// `j` indexing `coords_b` — whose segment envelopes overlap, by
/// recursively bisecting overlapping chains down to individual
/// segments. This is the broad-phase filter for §4.E's intersection
/// search: candidates still need the line intersector to confirm an
/// actual intersection.
pub fn find_overlapping_segments(
    coords_a: &[Coord],
    set_a: &MonotoneChainSet,
    coords_b: &[Coord],
    set_b: &MonotoneChainSet,
    mut visit: impl FnMut(usize, usize),
) {
    for ca in set_a.chains() {
        for cb in set_b.chains() {
            if ca.envelope().intersects(&cb.envelope()) {
                overlap_segments(coords_a, *ca, coords_b, *cb, &mut visit);
            }
        }
    }
}

fn overlap_segments(
    coords_a: &[Coord],
    a: Chain,
    coords_b: &[Coord],
    b: Chain,
    visit: &mut impl FnMut(usize, usize),
) {
    if a.len() == 1 && b.len() == 1 {
        visit(a.start, b.start);
        return;
    }
    if a.len() == 1 {
        let (b1, b2) = split(coords_b, b);
        if a.envelope().intersects(&b1.envelope()) {
            overlap_segments(coords_a, a, coords_b, b1, visit);
        }
        if a.envelope().intersects(&b2.envelope()) {
            overlap_segments(coords_a, a, coords_b, b2, visit);
        }
        return;
    }
    if b.len() == 1 {
        let (a1, a2) = split(coords_a, a);
        if a1.envelope().intersects(&b.envelope()) {
            overlap_segments(coords_a, a1, coords_b, b, visit);
        }
        if a2.envelope().intersects(&b.envelope()) {
            overlap_segments(coords_a, a2, coords_b, b, visit);
        }
        return;
    }
    let (a1, a2) = split(coords_a, a);
    let (b1, b2) = split(coords_b, b);
    for half_a in [a1, a2] {
        for half_b in [b1, b2] {
            if half_a.envelope().intersects(&half_b.envelope()) {
                overlap_segments(coords_a, half_a, coords_b, half_b, visit);
            }
        }
    }
}

fn split(coords: &[Coord], chain: Chain) -> (Chain, Chain) {
    let mid = chain.start + chain.len() / 2;
    (
        Chain {
            start: chain.start,
            end: mid,
            envelope: envelope_of_range(coords, chain.start, mid),
        },
        Chain {
            start: mid,
            end: chain.end,
            envelope: envelope_of_range(coords, mid, chain.end),
        },
    )
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn single_direction_is_one_chain() {
        let coords: Vec<Coord> = (0..10).map(|x| Coord::new(x as f64, 0.0)).collect();
        let set = MonotoneChainSet::build(&coords);
        assert_eq!(set.chains().len(), 1);
    }

    #[test]
    fn zigzag_splits_into_chains_per_direction_change() {
        let coords = vec![
            Coord::new(0.0, 0.0),
            Coord::new(1.0, 1.0),
            Coord::new(2.0, 0.0),
            Coord::new(3.0, 1.0),
        ];
        let set = MonotoneChainSet::build(&coords);
        assert_eq!(set.chains().len(), 3);
    }

    #[test]
    fn finds_crossing_segment_pair() {
        let a = vec![Coord::new(0.0, 0.0), Coord::new(5.0, 5.0)];
        let b = vec![Coord::new(0.0, 5.0), Coord::new(5.0, 0.0)];
        let set_a = MonotoneChainSet::build(&a);
        let set_b = MonotoneChainSet::build(&b);
        let mut hits = Vec::new();
        find_overlapping_segments(&a, &set_a, &b, &set_b, |i, j| hits.push((i, j)));
        assert_eq!(hits, vec![(0, 0)]);
    }

    #[test]
    fn finds_no_pairs_for_disjoint_envelopes() {
        let a = vec![Coord::new(0.0, 0.0), Coord::new(1.0, 1.0)];
        let b = vec![Coord::new(10.0, 10.0), Coord::new(11.0, 11.0)];
        let set_a = MonotoneChainSet::build(&a);
        let set_b = MonotoneChainSet::build(&b);
        let mut hits = Vec::new();
        find_overlapping_segments(&a, &set_a, &b, &set_b, |i, j| hits.push((i, j)));
        assert!(hits.is_empty());
    }
}
