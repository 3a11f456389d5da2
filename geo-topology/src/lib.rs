//! Planar graph topology and the OGC relate/validity engines.
//!
//! This crate builds a noded [`graph::PlanarGraph`] from one or two
//! `geo_types::Geometry` values, computes the DE-9IM
//! [`graph::IntersectionMatrix`] between them, and derives the standard
//! boolean predicates (`intersects`, `contains`, `overlaps`, ...) and
//! the OGC validity checks on top of it. The core owns no globals, no
//! logging, and no configuration: every entry point is a pure function
//! over its geometry arguments.

pub mod coordinate_position;
pub mod error;
pub mod graph;
pub mod index;
pub mod intersection;
pub mod kernel;
pub mod relate;
pub mod validity;

pub use error::{validate_geometry, GraphError, TopologyError};
pub use graph::IntersectionMatrix;
pub use relate::{
    contains, covered_by, covers, crosses, disjoint, equals, equals_exact, intersects, overlaps, relate, touches,
    within,
};
pub use validity::{check_validity, is_valid, ValidityError, ValidityErrorKind};
