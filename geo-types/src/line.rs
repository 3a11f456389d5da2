use crate::{Coord, Envelope, Point};

/// A line segment made of exactly two [`Coord`]s.
///
/// Not a public `Geometry` variant on its own — used internally by the
/// topology core as the unit a monotone chain is built from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub start: Coord,
    pub end: Coord,
}

impl Line {
    pub fn new(start: Coord, end: Coord) -> Self {
        Line { start, end }
    }

    pub fn delta(&self) -> Coord {
        self.end - self.start
    }

    pub fn dx(&self) -> f64 {
        self.delta().x
    }

    pub fn dy(&self) -> f64 {
        self.delta().y
    }

    pub fn start_point(&self) -> Point {
        Point::from(self.start)
    }

    pub fn end_point(&self) -> Point {
        Point::from(self.end)
    }

    pub fn envelope(&self) -> Envelope {
        Envelope::of_coords(self.start, self.end)
    }
}
