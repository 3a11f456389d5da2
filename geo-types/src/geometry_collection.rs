use crate::{Envelope, Geometry};

/// A heterogeneous collection of [`Geometry`] values.
#[derive(Clone, Debug, PartialEq)]
pub struct GeometryCollection(pub Vec<Geometry>);

impl GeometryCollection {
    pub fn new(geometries: Vec<Geometry>) -> Self {
        GeometryCollection(geometries)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Geometry> {
        self.0.iter()
    }

    pub fn envelope(&self) -> Envelope {
        let mut env = Envelope::empty();
        for g in &self.0 {
            env.expand_to_include_envelope(&g.envelope());
        }
        env
    }
}

impl From<Vec<Geometry>> for GeometryCollection {
    fn from(geometries: Vec<Geometry>) -> Self {
        GeometryCollection(geometries)
    }
}
