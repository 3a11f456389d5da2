use crate::{Envelope, LinearRing};

/// A bounded planar area: one exterior ring (the _shell_) and zero or
/// more interior rings (_holes_).
///
/// # Validity
///
/// The `Polygon` structure only guarantees that exterior and interior
/// rings are each closed `LinearRing`s (enforced by construction). It
/// does not by itself guarantee OGC validity — that holes lie inside the
/// shell, that rings do not cross, that the interior is connected — that
/// is the validity engine's job.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    exterior: LinearRing,
    interiors: Vec<LinearRing>,
}

impl Polygon {
    pub fn new(exterior: LinearRing, interiors: Vec<LinearRing>) -> Self {
        Polygon { exterior, interiors }
    }

    pub fn exterior(&self) -> &LinearRing {
        &self.exterior
    }

    pub fn interiors(&self) -> &[LinearRing] {
        &self.interiors
    }

    pub fn num_interior_rings(&self) -> usize {
        self.interiors.len()
    }

    pub fn rings(&self) -> impl Iterator<Item = &LinearRing> {
        std::iter::once(&self.exterior).chain(self.interiors.iter())
    }

    pub fn envelope(&self) -> Envelope {
        self.exterior.envelope()
    }
}
