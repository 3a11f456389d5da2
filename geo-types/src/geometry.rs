use core::any::type_name;

use crate::{
    Envelope, Error, GeometryCollection, LinearRing, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};

/// A tagged union over every geometry kind the core reasons about.
///
/// Dispatch on `Geometry` is always by `match`; there is no runtime type
/// introspection anywhere in the core.
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    LinearRing(LinearRing),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
}

impl Geometry {
    pub fn envelope(&self) -> Envelope {
        match self {
            Geometry::Point(g) => g.envelope(),
            Geometry::LineString(g) => g.envelope(),
            Geometry::LinearRing(g) => g.envelope(),
            Geometry::Polygon(g) => g.envelope(),
            Geometry::MultiPoint(g) => g.envelope(),
            Geometry::MultiLineString(g) => g.envelope(),
            Geometry::MultiPolygon(g) => g.envelope(),
            Geometry::GeometryCollection(g) => g.envelope(),
        }
    }

    fn type_name(&self) -> &'static str {
        match self {
            Geometry::Point(_) => type_name::<Point>(),
            Geometry::LineString(_) => type_name::<LineString>(),
            Geometry::LinearRing(_) => type_name::<LinearRing>(),
            Geometry::Polygon(_) => type_name::<Polygon>(),
            Geometry::MultiPoint(_) => type_name::<MultiPoint>(),
            Geometry::MultiLineString(_) => type_name::<MultiLineString>(),
            Geometry::MultiPolygon(_) => type_name::<MultiPolygon>(),
            Geometry::GeometryCollection(_) => type_name::<GeometryCollection>(),
        }
    }
}

macro_rules! geometry_conversions {
    ($($variant:ident => $ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Geometry {
                fn from(g: $ty) -> Self {
                    Geometry::$variant(g)
                }
            }

            impl TryFrom<Geometry> for $ty {
                type Error = Error;

                fn try_from(geom: Geometry) -> Result<Self, Self::Error> {
                    match geom {
                        Geometry::$variant(g) => Ok(g),
                        other => Err(Error::MismatchedGeometry {
                            expected: type_name::<$ty>(),
                            found: other.type_name(),
                        }),
                    }
                }
            }
        )+
    };
}

geometry_conversions! {
    Point => Point,
    LineString => LineString,
    LinearRing => LinearRing,
    Polygon => Polygon,
    MultiPoint => MultiPoint,
    MultiLineString => MultiLineString,
    MultiPolygon => MultiPolygon,
    GeometryCollection => GeometryCollection,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn try_from_reports_mismatch() {
        let g: Geometry = Point::new(1.0, 2.0).into();
        let err = LineString::try_from(g).unwrap_err();
        match err {
            Error::MismatchedGeometry { expected, found } => {
                assert!(expected.contains("LineString"));
                assert!(found.contains("Point"));
            }
        }
    }
}
