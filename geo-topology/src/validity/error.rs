//! The eleven validity error kinds (§7), each carrying the coordinate
//! nearest the problem.

use geo_types::Coord;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValidityErrorKind {
    RepeatedPoint,
    HoleOutsideShell,
    NestedHoles,
    DisconnectedInterior,
    SelfIntersection,
    RingSelfIntersection,
    NestedShells,
    DuplicateRings,
    TooFewPoints,
    InvalidCoordinate,
    RingNotClosed,
}

impl fmt::Display for ValidityErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ValidityErrorKind::RepeatedPoint => "repeated point",
            ValidityErrorKind::HoleOutsideShell => "hole lies outside shell",
            ValidityErrorKind::NestedHoles => "holes are nested",
            ValidityErrorKind::DisconnectedInterior => "interior is disconnected",
            ValidityErrorKind::SelfIntersection => "self-intersection",
            ValidityErrorKind::RingSelfIntersection => "ring self-intersection",
            ValidityErrorKind::NestedShells => "shells are nested",
            ValidityErrorKind::DuplicateRings => "duplicate rings",
            ValidityErrorKind::TooFewPoints => "too few points",
            ValidityErrorKind::InvalidCoordinate => "invalid coordinate",
            ValidityErrorKind::RingNotClosed => "ring is not closed",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidityError {
    kind: ValidityErrorKind,
    coordinate: Coord,
}

impl ValidityError {
    pub fn new(kind: ValidityErrorKind, coordinate: Coord) -> Self {
        ValidityError { kind, coordinate }
    }

    pub fn kind(&self) -> ValidityErrorKind {
        self.kind
    }

    pub fn coordinate(&self) -> Coord {
        self.coordinate
    }
}

impl fmt::Display for ValidityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at ({}, {})", self.kind, self.coordinate.x, self.coordinate.y)
    }
}

impl std::error::Error for ValidityError {}
