use crate::{Envelope, LineString, Point, Polygon};

macro_rules! multi_geometry {
    ($name:ident, $elem:ty, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, PartialEq)]
        pub struct $name(pub Vec<$elem>);

        impl $name {
            pub fn new(items: Vec<$elem>) -> Self {
                $name(items)
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            pub fn iter(&self) -> impl Iterator<Item = &$elem> {
                self.0.iter()
            }

            pub fn len(&self) -> usize {
                self.0.len()
            }
        }

        impl From<Vec<$elem>> for $name {
            fn from(items: Vec<$elem>) -> Self {
                $name(items)
            }
        }
    };
}

multi_geometry!(MultiPoint, Point, "A collection of [`Point`]s.");
multi_geometry!(MultiLineString, LineString, "A collection of [`LineString`]s.");
multi_geometry!(MultiPolygon, Polygon, "A collection of [`Polygon`]s whose interiors are disjoint.");

impl MultiPoint {
    pub fn envelope(&self) -> Envelope {
        let mut env = Envelope::empty();
        for p in &self.0 {
            env.expand_to_include(p.coord());
        }
        env
    }
}

impl MultiLineString {
    pub fn envelope(&self) -> Envelope {
        let mut env = Envelope::empty();
        for ls in &self.0 {
            env.expand_to_include_envelope(&ls.envelope());
        }
        env
    }
}

impl MultiPolygon {
    pub fn envelope(&self) -> Envelope {
        let mut env = Envelope::empty();
        for p in &self.0 {
            env.expand_to_include_envelope(&p.envelope());
        }
        env
    }
}
