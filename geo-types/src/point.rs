use crate::{Coord, Envelope};

#[cfg(any(feature = "approx", test))]
use approx::{AbsDiffEq, RelativeEq};

/// A single point in the plane.
///
/// # Semantics
///
/// The _interior_ of a point is itself (a singleton set); its _boundary_
/// is empty.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point(pub Coord);

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point(Coord::new(x, y))
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }

    pub fn coord(&self) -> Coord {
        self.0
    }

    pub fn envelope(&self) -> Envelope {
        Envelope::of_point(self.0)
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_valid()
    }
}

impl From<Coord> for Point {
    fn from(c: Coord) -> Self {
        Point(c)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

#[cfg(any(feature = "approx", test))]
impl AbsDiffEq for Point {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0.abs_diff_eq(&other.0, epsilon)
    }
}

#[cfg(any(feature = "approx", test))]
impl RelativeEq for Point {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.0.relative_eq(&other.0, epsilon, max_relative)
    }
}
