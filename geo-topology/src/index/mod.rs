//! Spatial indices: four distinct purpose-built structures, not one
//! generic tree wearing different hats. All are read-only after build
//! except the quadtree, which the validity engine mutates incrementally
//! as it walks a polygon's rings.

pub mod monotone_chain;
pub mod quadtree;
pub mod strtree;
pub mod sweepline;

pub use monotone_chain::{find_overlapping_segments, Chain, MonotoneChainSet};
pub use quadtree::Quadtree;
pub use strtree::StrTree;
pub use sweepline::SweepLineIndex;
