//! Geospatial primitive data types for planar topology.
//!
//! This crate owns the geometry value types — [`Coord`], [`Envelope`],
//! [`PrecisionModel`], and the OGC `Geometry` variants — and nothing
//! else: no graph, no predicates, no validation. Those live in
//! `geo-topology`, which consumes this crate's types through the
//! collaborator contract they expose (`envelope`, `dimensions`,
//! `boundary_dimensions`, ring/coordinate accessors).

mod coord;
mod dimensions;
mod envelope;
mod error;
mod geometry;
mod geometry_collection;
mod line;
mod line_string;
mod linear_ring;
mod multi;
mod point;
mod polygon;
mod precision;

pub use coord::Coord;
pub use dimensions::{Dimensions, HasDimensions};
pub use envelope::Envelope;
pub use error::Error;
pub use geometry::Geometry;
pub use geometry_collection::GeometryCollection;
pub use line::Line;
pub use line_string::LineString;
pub use linear_ring::{LinearRing, RingConstructionError};
pub use multi::{MultiLineString, MultiPoint, MultiPolygon};
pub use point::Point;
pub use polygon::Polygon;
pub use precision::PrecisionModel;
