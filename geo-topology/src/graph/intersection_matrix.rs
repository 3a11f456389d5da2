use super::CoordPos;
use geo_types::Dimensions;

/// A 3x3 DE-9IM matrix over `{Interior, Boundary, Exterior}^2`, each cell
/// holding the dimension of that intersection (or empty).
#[derive(PartialEq, Eq, Clone, Copy)]
pub struct IntersectionMatrix(LocationArray<LocationArray<Dimensions>>);

#[derive(PartialEq, Eq, Clone, Copy)]
struct LocationArray<T>([T; 3]);

impl<T> LocationArray<T> {
    fn iter(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }
}

impl<T> std::ops::Index<CoordPos> for LocationArray<T> {
    type Output = T;
    fn index(&self, index: CoordPos) -> &T {
        match index {
            CoordPos::Inside => &self.0[0],
            CoordPos::OnBoundary => &self.0[1],
            CoordPos::Outside => &self.0[2],
        }
    }
}

impl<T> std::ops::IndexMut<CoordPos> for LocationArray<T> {
    fn index_mut(&mut self, index: CoordPos) -> &mut T {
        match index {
            CoordPos::Inside => &mut self.0[0],
            CoordPos::OnBoundary => &mut self.0[1],
            CoordPos::Outside => &mut self.0[2],
        }
    }
}

/// A malformed 9-character DE-9IM pattern or lower-bound string.
#[derive(Debug)]
pub struct InvalidPatternError {
    message: String,
}

impl std::fmt::Display for InvalidPatternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid DE-9IM pattern: {}", self.message)
    }
}
impl std::error::Error for InvalidPatternError {}

impl std::fmt::Debug for IntersectionMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "IntersectionMatrix({})", self.as_pattern())
    }
}

const POSITIONS: [CoordPos; 3] = [CoordPos::Inside, CoordPos::OnBoundary, CoordPos::Outside];

impl IntersectionMatrix {
    pub fn empty() -> Self {
        IntersectionMatrix(LocationArray([LocationArray([Dimensions::Empty; 3]); 3]))
    }

    pub fn get(&self, a: CoordPos, b: CoordPos) -> Dimensions {
        self.0[a][b]
    }

    pub(crate) fn set(&mut self, a: CoordPos, b: CoordPos, dims: Dimensions) {
        self.0[a][b] = dims;
    }

    /// Raises the cell to at least `minimum`, never lowering an existing
    /// larger value.
    pub(crate) fn set_at_least(&mut self, a: CoordPos, b: CoordPos, minimum: Dimensions) {
        if self.0[a][b] < minimum {
            self.0[a][b] = minimum;
        }
    }

    /// As `set_at_least`, but only if both positions are known; used
    /// whenever a label cell might be absent (e.g. a component that
    /// doesn't touch one of the two geometries at all).
    pub(crate) fn set_at_least_if_in_both(
        &mut self,
        a: Option<CoordPos>,
        b: Option<CoordPos>,
        minimum: Dimensions,
    ) {
        if let (Some(a), Some(b)) = (a, b) {
            self.set_at_least(a, b, minimum);
        }
    }

    /// Raises every cell named in a fixed 9-character lower-bound string
    /// (one of the relate engine's proper-intersection fast-path patterns,
    /// e.g. `"212101212"`). `'F'` leaves the cell untouched.
    pub(crate) fn set_at_least_from_string(&mut self, pattern: &str) -> Result<(), InvalidPatternError> {
        if pattern.len() != 9 {
            return Err(InvalidPatternError {
                message: format!("expected length 9, found {}", pattern.len()),
            });
        }
        let mut chars = pattern.chars();
        for &a in &POSITIONS {
            for &b in &POSITIONS {
                match chars.next().unwrap() {
                    '0' => self.set_at_least(a, b, Dimensions::ZeroDimensional),
                    '1' => self.set_at_least(a, b, Dimensions::OneDimensional),
                    '2' => self.set_at_least(a, b, Dimensions::TwoDimensional),
                    'F' => {}
                    other => {
                        return Err(InvalidPatternError {
                            message: format!("expected '0','1','2','F'; found '{other}'"),
                        })
                    }
                }
            }
        }
        Ok(())
    }

    fn as_pattern(&self) -> String {
        POSITIONS
            .iter()
            .flat_map(|&a| POSITIONS.iter().map(move |&b| self.get(a, b)))
            .map(|dims| match dims {
                Dimensions::Empty => 'F',
                Dimensions::ZeroDimensional => '0',
                Dimensions::OneDimensional => '1',
                Dimensions::TwoDimensional => '2',
            })
            .collect()
    }

    /// Tests the matrix against a 9-character DE-9IM predicate pattern:
    /// `'T'` matches any non-empty dimension, `'*'` matches anything,
    /// `'F'`/`'0'`/`'1'`/`'2'` match exactly.
    pub fn matches(&self, pattern: &str) -> Result<bool, InvalidPatternError> {
        if pattern.len() != 9 {
            return Err(InvalidPatternError {
                message: format!("expected length 9, found {}", pattern.len()),
            });
        }
        let mut chars = pattern.chars();
        for &a in &POSITIONS {
            for &b in &POSITIONS {
                let cell = self.get(a, b);
                let symbol = chars.next().unwrap();
                let ok = match symbol {
                    '*' => true,
                    'T' => cell != Dimensions::Empty,
                    'F' => cell == Dimensions::Empty,
                    '0' => cell == Dimensions::ZeroDimensional,
                    '1' => cell == Dimensions::OneDimensional,
                    '2' => cell == Dimensions::TwoDimensional,
                    other => {
                        return Err(InvalidPatternError {
                            message: format!("expected 'F','0','1','2','T','*'; found '{other}'"),
                        })
                    }
                };
                if !ok {
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }

    /// The matrix with rows and columns swapped — `B.relate(A)` given
    /// `self = A.relate(B)`.
    pub fn transposed(&self) -> IntersectionMatrix {
        let mut out = IntersectionMatrix::empty();
        for &a in &POSITIONS {
            for &b in &POSITIONS {
                out.set(b, a, self.get(a, b));
            }
        }
        out
    }

    pub fn is_equals(&self, dim_a: Dimensions, dim_b: Dimensions) -> bool {
        dim_a == dim_b
            && self.get(CoordPos::Inside, CoordPos::Inside) != Dimensions::Empty
            && self.get(CoordPos::Inside, CoordPos::Outside) == Dimensions::Empty
            && self.get(CoordPos::Outside, CoordPos::Inside) == Dimensions::Empty
            && self.get(CoordPos::OnBoundary, CoordPos::Outside) == Dimensions::Empty
            && self.get(CoordPos::Outside, CoordPos::OnBoundary) == Dimensions::Empty
    }

    pub fn is_contains(&self) -> bool {
        self.get(CoordPos::Inside, CoordPos::Inside) != Dimensions::Empty
            && self.get(CoordPos::Outside, CoordPos::Inside) == Dimensions::Empty
            && self.get(CoordPos::Outside, CoordPos::OnBoundary) == Dimensions::Empty
    }

    pub fn is_within(&self) -> bool {
        self.get(CoordPos::Inside, CoordPos::Inside) != Dimensions::Empty
            && self.get(CoordPos::Inside, CoordPos::Outside) == Dimensions::Empty
            && self.get(CoordPos::OnBoundary, CoordPos::Outside) == Dimensions::Empty
    }

    pub fn is_covers(&self) -> bool {
        let has_point_in_common = self.get(CoordPos::Inside, CoordPos::Inside) != Dimensions::Empty
            || self.get(CoordPos::Inside, CoordPos::OnBoundary) != Dimensions::Empty
            || self.get(CoordPos::OnBoundary, CoordPos::Inside) != Dimensions::Empty
            || self.get(CoordPos::OnBoundary, CoordPos::OnBoundary) != Dimensions::Empty;
        has_point_in_common
            && self.get(CoordPos::Outside, CoordPos::Inside) == Dimensions::Empty
            && self.get(CoordPos::Outside, CoordPos::OnBoundary) == Dimensions::Empty
    }

    pub fn is_covered_by(&self) -> bool {
        self.transposed().is_covers()
    }

    /// Whether `A` and `B` touch, given their respective topological
    /// dimensions; only certain dimension pairs can touch at all (a pair
    /// of points never can, since they either coincide or don't).
    pub fn is_touches(&self, dim_a: Dimensions, dim_b: Dimensions) -> bool {
        if dim_a > dim_b {
            return self.transposed().is_touches(dim_b, dim_a);
        }
        use Dimensions::*;
        let valid_pair = matches!(
            (dim_a, dim_b),
            (TwoDimensional, TwoDimensional)
                | (OneDimensional, OneDimensional)
                | (OneDimensional, TwoDimensional)
                | (ZeroDimensional, TwoDimensional)
                | (ZeroDimensional, OneDimensional)
        );
        if !valid_pair {
            return false;
        }
        self.get(CoordPos::Inside, CoordPos::Inside) == Dimensions::Empty
            && (self.get(CoordPos::Inside, CoordPos::OnBoundary) != Dimensions::Empty
                || self.get(CoordPos::OnBoundary, CoordPos::Inside) != Dimensions::Empty
                || self.get(CoordPos::OnBoundary, CoordPos::OnBoundary) != Dimensions::Empty)
    }

    pub fn is_crosses(&self, dim_a: Dimensions, dim_b: Dimensions) -> bool {
        use Dimensions::*;
        let ii = self.get(CoordPos::Inside, CoordPos::Inside);
        match (dim_a, dim_b) {
            (ZeroDimensional, OneDimensional)
            | (ZeroDimensional, TwoDimensional)
            | (OneDimensional, TwoDimensional) => {
                ii != Dimensions::Empty && self.get(CoordPos::Inside, CoordPos::Outside) != Dimensions::Empty
            }
            (OneDimensional, ZeroDimensional)
            | (TwoDimensional, ZeroDimensional)
            | (TwoDimensional, OneDimensional) => {
                ii != Dimensions::Empty && self.get(CoordPos::Outside, CoordPos::Inside) != Dimensions::Empty
            }
            (OneDimensional, OneDimensional) => ii == Dimensions::ZeroDimensional,
            _ => false,
        }
    }

    pub fn is_overlaps(&self, dim_a: Dimensions, dim_b: Dimensions) -> bool {
        use Dimensions::*;
        let ii = self.get(CoordPos::Inside, CoordPos::Inside);
        match (dim_a, dim_b) {
            (ZeroDimensional, ZeroDimensional) | (TwoDimensional, TwoDimensional) => {
                ii != Dimensions::Empty
                    && self.get(CoordPos::Inside, CoordPos::Outside) != Dimensions::Empty
                    && self.get(CoordPos::Outside, CoordPos::Inside) != Dimensions::Empty
            }
            (OneDimensional, OneDimensional) => {
                ii == Dimensions::OneDimensional
                    && self.get(CoordPos::Inside, CoordPos::Outside) != Dimensions::Empty
                    && self.get(CoordPos::Outside, CoordPos::Inside) != Dimensions::Empty
            }
            _ => false,
        }
    }

    pub fn is_disjoint(&self) -> bool {
        self.get(CoordPos::Inside, CoordPos::Inside) == Dimensions::Empty
            && self.get(CoordPos::Inside, CoordPos::OnBoundary) == Dimensions::Empty
            && self.get(CoordPos::OnBoundary, CoordPos::Inside) == Dimensions::Empty
            && self.get(CoordPos::OnBoundary, CoordPos::OnBoundary) == Dimensions::Empty
    }

    pub fn is_intersects(&self) -> bool {
        !self.is_disjoint()
    }
}

impl std::str::FromStr for IntersectionMatrix {
    type Err = InvalidPatternError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut matrix = IntersectionMatrix::empty();
        matrix.set_at_least_from_string(s)?;
        Ok(matrix)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_and_prints_a_pattern() {
        let matrix: IntersectionMatrix = "2FFF1FFF2".parse().unwrap();
        assert_eq!(format!("{matrix:?}"), "IntersectionMatrix(2FFF1FFF2)");
    }

    #[test]
    fn matches_t_and_star_wildcards() {
        let matrix: IntersectionMatrix = "212101212".parse().unwrap();
        assert!(matrix.matches("T*T***T**").unwrap());
        assert!(matrix.matches("*********").unwrap());
        assert!(!matrix.matches("FFFFFFFFF").unwrap());
    }

    #[test]
    fn disjoint_pattern() {
        let matrix: IntersectionMatrix = "FF1FF0212".parse().unwrap();
        assert!(matrix.is_disjoint());
        assert!(!matrix.is_intersects());
    }
}
