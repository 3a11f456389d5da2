use crate::Coord;

/// A rounding rule applied to coordinates before they become part of a
/// graph.
///
/// Precision is a property of a geometry and is carried transitively
/// through operations: the effective precision of a derived result is
/// the more restrictive of its inputs' models (`PrecisionModel::merge`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PrecisionModel {
    /// Full double precision; no rounding.
    Floating,
    /// Round-trips each ordinate through `f32`.
    FloatingSingle,
    /// Round each ordinate to `round(v * scale) / scale`.
    Fixed { scale: f64 },
}

impl PrecisionModel {
    /// How "permissive" a model is, for merge purposes: `Floating` is the
    /// most permissive (never rounds), `Fixed` with a larger scale is
    /// more permissive than one with a smaller scale.
    fn permissiveness(&self) -> f64 {
        match self {
            PrecisionModel::Floating => f64::INFINITY,
            PrecisionModel::FloatingSingle => f64::MAX,
            PrecisionModel::Fixed { scale } => *scale,
        }
    }

    /// The more restrictive of two precision models.
    pub fn merge(&self, other: &PrecisionModel) -> PrecisionModel {
        if self.permissiveness() <= other.permissiveness() {
            *self
        } else {
            *other
        }
    }

    pub fn make_precise(&self, c: Coord) -> Coord {
        match self {
            PrecisionModel::Floating => c,
            PrecisionModel::FloatingSingle => Coord::new(c.x as f32 as f64, c.y as f32 as f64),
            PrecisionModel::Fixed { scale } => {
                Coord::new(round_to_scale(c.x, *scale), round_to_scale(c.y, *scale))
            }
        }
    }
}

fn round_to_scale(v: f64, scale: f64) -> f64 {
    (v * scale).round() / scale
}

impl Default for PrecisionModel {
    fn default() -> Self {
        PrecisionModel::Floating
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn floating_is_identity() {
        let model = PrecisionModel::Floating;
        let c = Coord::new(1.23456789, -9.87654321);
        assert_eq!(model.make_precise(c), c);
    }

    #[test]
    fn fixed_rounds_to_grid() {
        let model = PrecisionModel::Fixed { scale: 100.0 };
        let c = Coord::new(1.234, 1.236);
        let rounded = model.make_precise(c);
        assert_eq!(rounded, Coord::new(1.23, 1.24));
    }

    #[test]
    fn merge_picks_more_restrictive() {
        let fine = PrecisionModel::Fixed { scale: 1000.0 };
        let coarse = PrecisionModel::Fixed { scale: 10.0 };
        assert_eq!(fine.merge(&coarse), coarse);
        assert_eq!(PrecisionModel::Floating.merge(&coarse), coarse);
    }
}
