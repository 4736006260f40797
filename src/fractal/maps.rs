use nalgebra::{Matrix2, Vector2};
use rand::Rng;

// ---------------------------------------------------------------------------
// Affine contractions
// ---------------------------------------------------------------------------

/// One planar affine map x ↦ L·x + t.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineMap {
    pub linear: Matrix2<f64>,
    pub translation: Vector2<f64>,
}

impl AffineMap {
    pub fn new(linear: Matrix2<f64>, translation: Vector2<f64>) -> Self {
        Self {
            linear,
            translation,
        }
    }

    /// Build from the flat coefficient row (a, b, c, d, e, f):
    /// x' = a·x + b·y + e, y' = c·x + d·y + f.
    pub fn from_coefficients(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self {
            linear: Matrix2::new(a, b, c, d),
            translation: Vector2::new(e, f),
        }
    }

    pub fn apply(&self, point: &Vector2<f64>) -> Vector2<f64> {
        self.linear * point + self.translation
    }
}

// ---------------------------------------------------------------------------
// Weighted map tables
// ---------------------------------------------------------------------------

/// An iterated function system: affine maps paired with selection
/// probabilities that sum to one.
#[derive(Debug, Clone)]
pub struct Ifs {
    name: &'static str,
    maps: Vec<(AffineMap, f64)>,
}

impl Ifs {
    /// Panics if `maps` is empty.
    pub fn new(name: &'static str, maps: Vec<(AffineMap, f64)>) -> Self {
        assert!(!maps.is_empty(), "an IFS needs at least one map");
        Self { name, maps }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    pub fn maps(&self) -> &[(AffineMap, f64)] {
        &self.maps
    }

    /// Sum of the selection probabilities, in table order.
    pub fn total_probability(&self) -> f64 {
        self.maps.iter().map(|&(_, p)| p).sum()
    }

    /// Select the map whose cumulative probability bracket contains `u`,
    /// a draw from [0, 1). Rounding can leave the cumulative total just
    /// under one, so the walk falls back to the last map.
    pub fn pick(&self, u: f64) -> &AffineMap {
        let mut cumulative = 0.0;
        for (map, p) in &self.maps {
            cumulative += p;
            if u < cumulative {
                return map;
            }
        }
        &self.maps[self.maps.len() - 1].0
    }

    /// Draw one map at random, weighted by the table probabilities.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> &AffineMap {
        self.pick(rng.gen())
    }
}
