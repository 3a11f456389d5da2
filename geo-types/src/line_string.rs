use crate::{Coord, Envelope, Line};

/// An ordered sequence of two or more coordinates, interpreted as a
/// connected sequence of line segments.
///
/// # Semantics
///
/// A `LineString` is _closed_ if its first and last coordinates are
/// identical, and _simple_ if it does not self-intersect except possibly
/// at its endpoints (closed rings). Its boundary is the Mod-2 set of
/// endpoints: empty if closed, the two endpoints otherwise.
#[derive(Clone, Debug, PartialEq)]
pub struct LineString(pub Vec<Coord>);

impl LineString {
    pub fn new(coords: Vec<Coord>) -> Self {
        LineString(coords)
    }

    pub fn coords(&self) -> &[Coord] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn num_points(&self) -> usize {
        self.0.len()
    }

    pub fn is_closed(&self) -> bool {
        self.0.len() >= 2 && self.0.first() == self.0.last()
    }

    /// The two boundary endpoints of an open `LineString`; `None` if
    /// closed or degenerate.
    pub fn boundary_points(&self) -> Option<(Coord, Coord)> {
        if self.0.len() < 2 || self.is_closed() {
            None
        } else {
            Some((self.0[0], *self.0.last().unwrap()))
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = Line> + '_ {
        self.0.windows(2).map(|w| Line::new(w[0], w[1]))
    }

    pub fn envelope(&self) -> Envelope {
        let mut env = Envelope::empty();
        for c in &self.0 {
            env.expand_to_include(*c);
        }
        env
    }

    /// Removes consecutive duplicate coordinates, matching the edge
    /// extraction rule used by graph construction.
    pub fn without_consecutive_duplicates(&self) -> LineString {
        let mut out: Vec<Coord> = Vec::with_capacity(self.0.len());
        for c in &self.0 {
            if out.last() != Some(c) {
                out.push(*c);
            }
        }
        LineString(out)
    }
}

impl From<Vec<Coord>> for LineString {
    fn from(coords: Vec<Coord>) -> Self {
        LineString(coords)
    }
}

impl FromIterator<Coord> for LineString {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        LineString(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn closed_ring_has_no_boundary() {
        let ring = LineString::new(vec![
            Coord::new(0.0, 0.0),
            Coord::new(1.0, 0.0),
            Coord::new(1.0, 1.0),
            Coord::new(0.0, 0.0),
        ]);
        assert!(ring.is_closed());
        assert!(ring.boundary_points().is_none());
    }

    #[test]
    fn open_line_boundary_is_its_endpoints() {
        let line = LineString::new(vec![Coord::new(0.0, 0.0), Coord::new(1.0, 1.0)]);
        assert_eq!(
            line.boundary_points(),
            Some((Coord::new(0.0, 0.0), Coord::new(1.0, 1.0)))
        );
    }

    #[test]
    fn collapses_consecutive_duplicates() {
        let ls = LineString::new(vec![
            Coord::new(0.0, 0.0),
            Coord::new(0.0, 0.0),
            Coord::new(1.0, 1.0),
        ]);
        assert_eq!(ls.without_consecutive_duplicates().num_points(), 2);
    }
}
