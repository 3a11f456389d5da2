use crate::{Coord, Envelope, Line, LineString};

/// A closed, simple 1-D curve: a `LineString` whose first and last
/// coordinates are identical and which has at least 4 points.
///
/// Unlike plain `LineString`s, `LinearRing` never has a boundary — by
/// construction it is closed, so its boundary is always empty. Closure
/// and the minimum point count are construction invariants, checked by
/// [`LinearRing::new`]; self-intersection and nesting are *validity*
/// properties checked separately by the validity engine.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearRing(LineString);

/// Why a coordinate sequence could not be accepted as a `LinearRing`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RingConstructionError {
    TooFewPoints,
    RingNotClosed,
}

impl LinearRing {
    /// Builds a ring from a coordinate sequence, closing it automatically
    /// if the first and last coordinates differ, matching the closing
    /// operation used elsewhere when constructing polygon rings.
    pub fn new_closing(mut coords: Vec<Coord>) -> Result<Self, RingConstructionError> {
        if coords.first() != coords.last() {
            if let Some(first) = coords.first().copied() {
                coords.push(first);
            }
        }
        Self::new(coords)
    }

    /// Builds a ring from an already-closed coordinate sequence.
    pub fn new(coords: Vec<Coord>) -> Result<Self, RingConstructionError> {
        if coords.len() < 4 {
            return Err(RingConstructionError::TooFewPoints);
        }
        if coords.first() != coords.last() {
            return Err(RingConstructionError::RingNotClosed);
        }
        Ok(LinearRing(LineString::new(coords)))
    }

    pub fn line_string(&self) -> &LineString {
        &self.0
    }

    pub fn coords(&self) -> &[Coord] {
        self.0.coords()
    }

    pub fn num_points(&self) -> usize {
        self.0.num_points()
    }

    pub fn lines(&self) -> impl Iterator<Item = Line> + '_ {
        self.0.lines()
    }

    pub fn envelope(&self) -> Envelope {
        self.0.envelope()
    }

    /// Always empty: a `LinearRing` is closed by construction.
    pub fn boundary_is_empty(&self) -> bool {
        true
    }
}

impl TryFrom<LineString> for LinearRing {
    type Error = RingConstructionError;

    fn try_from(ls: LineString) -> Result<Self, Self::Error> {
        LinearRing::new(ls.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rejects_too_few_points() {
        let coords = vec![Coord::new(0.0, 0.0), Coord::new(1.0, 1.0), Coord::new(0.0, 0.0)];
        assert_eq!(LinearRing::new(coords), Err(RingConstructionError::TooFewPoints));
    }

    #[test]
    fn rejects_unclosed_ring() {
        let coords = vec![
            Coord::new(0.0, 0.0),
            Coord::new(1.0, 0.0),
            Coord::new(1.0, 1.0),
            Coord::new(0.0, 1.0),
        ];
        assert_eq!(LinearRing::new(coords), Err(RingConstructionError::RingNotClosed));
    }

    #[test]
    fn closing_constructor_appends_first_point() {
        let coords = vec![
            Coord::new(0.0, 0.0),
            Coord::new(1.0, 0.0),
            Coord::new(1.0, 1.0),
            Coord::new(0.0, 1.0),
        ];
        let ring = LinearRing::new_closing(coords).unwrap();
        assert_eq!(ring.num_points(), 5);
        assert_eq!(ring.coords().first(), ring.coords().last());
    }
}
