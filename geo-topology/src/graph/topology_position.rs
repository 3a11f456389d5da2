use super::{CoordPos, Direction};

/// The topological position of one graph component (a node or an edge)
/// relative to a single source geometry: its `ON` position, and for area
/// edges, its `LEFT`/`RIGHT` side positions.
///
/// A line or point component only ever carries an `ON` position; an area
/// edge carries all three.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TopologyPosition {
    /// Structural, not inferred: a line/point position never carries
    /// `LEFT`/`RIGHT` meaning even once those fields happen to hold a
    /// value (e.g. after a dimensional-collapse fallback fills every
    /// field uniformly) — matching the fixed-width line vs. area
    /// location arrays of the source model this was ported from.
    is_area: bool,
    on: Option<CoordPos>,
    left: Option<CoordPos>,
    right: Option<CoordPos>,
}

impl TopologyPosition {
    pub fn empty() -> Self {
        TopologyPosition {
            is_area: false,
            on: None,
            left: None,
            right: None,
        }
    }

    pub fn line_or_point(on: CoordPos) -> Self {
        TopologyPosition {
            is_area: false,
            on: Some(on),
            left: None,
            right: None,
        }
    }

    pub fn area(on: CoordPos, left: CoordPos, right: CoordPos) -> Self {
        TopologyPosition {
            is_area: true,
            on: Some(on),
            left: Some(left),
            right: Some(right),
        }
    }

    pub fn empty_area() -> Self {
        TopologyPosition {
            is_area: true,
            on: None,
            left: None,
            right: None,
        }
    }

    pub fn is_area(&self) -> bool {
        self.is_area
    }

    /// For a line/point position, whether `ON` is unset; for an area
    /// position, whether any of `ON`/`LEFT`/`RIGHT` is unset.
    pub fn is_any_empty(&self) -> bool {
        if self.is_area {
            self.on.is_none() || self.left.is_none() || self.right.is_none()
        } else {
            self.on.is_none()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.on.is_none() && self.left.is_none() && self.right.is_none()
    }

    pub fn get(&self, direction: Direction) -> Option<CoordPos> {
        match direction {
            Direction::On => self.on,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    pub fn set(&mut self, direction: Direction, position: CoordPos) {
        match direction {
            Direction::On => self.on = Some(position),
            Direction::Left => self.left = Some(position),
            Direction::Right => self.right = Some(position),
        }
    }

    pub fn set_all_if_empty(&mut self, position: CoordPos) {
        if self.on.is_none() {
            self.on = Some(position);
        }
        if self.is_area {
            if self.left.is_none() {
                self.left = Some(position);
            }
            if self.right.is_none() {
                self.right = Some(position);
            }
        }
    }

    /// Reverses the meaning of left/right, as happens when an edge's
    /// direction (and therefore which side is which) is flipped.
    pub fn flip(&mut self) {
        std::mem::swap(&mut self.left, &mut self.right);
    }
}

impl Default for TopologyPosition {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn flip_swaps_sides_not_on() {
        let mut position = TopologyPosition::area(CoordPos::OnBoundary, CoordPos::Inside, CoordPos::Outside);
        position.flip();
        assert_eq!(position.get(Direction::On), Some(CoordPos::OnBoundary));
        assert_eq!(position.get(Direction::Left), Some(CoordPos::Outside));
        assert_eq!(position.get(Direction::Right), Some(CoordPos::Inside));
    }

    #[test]
    fn line_position_is_not_area() {
        let position = TopologyPosition::line_or_point(CoordPos::Inside);
        assert!(!position.is_area());
    }
}
