//! The classic attractor tables, with the usual selection weights.

use super::maps::{AffineMap, Ifs};

/// Sierpinski triangle: three half-scale copies at the corners of an
/// equilateral triangle, drawn with equal weight.
pub fn sierpinski() -> Ifs {
    let third = 1.0 / 3.0;
    Ifs::new(
        "sierpinski",
        vec![
            (AffineMap::from_coefficients(0.5, 0.0, 0.0, 0.5, 0.0, 0.0), third),
            (AffineMap::from_coefficients(0.5, 0.0, 0.0, 0.5, 0.5, 0.0), third),
            (
                AffineMap::from_coefficients(0.5, 0.0, 0.0, 0.5, 0.25, 3.0_f64.sqrt() / 4.0),
                third,
            ),
        ],
    )
}

/// Barnsley fern. The dominant map builds the stem-to-tip spine; the two
/// middle maps grow the lowest left and right fronds; the last flattens
/// points onto the stem.
pub fn barnsley() -> Ifs {
    Ifs::new(
        "barnsley",
        vec![
            (AffineMap::from_coefficients(0.85, 0.04, -0.04, 0.85, 0.0, 1.6), 0.73),
            (AffineMap::from_coefficients(0.2, -0.26, 0.23, 0.22, 0.0, 1.6), 0.13),
            (AffineMap::from_coefficients(-0.15, 0.28, 0.26, 0.24, 0.0, 0.44), 0.11),
            (AffineMap::from_coefficients(0.0, 0.0, 0.0, 0.16, 0.0, 0.0), 0.03),
        ],
    )
}

/// Heighway dragon.
pub fn dragon() -> Ifs {
    Ifs::new(
        "dragon",
        vec![
            (
                AffineMap::from_coefficients(
                    0.824074, 0.281482, -0.212346, 0.864198, -1.882290, -0.110607,
                ),
                0.787473,
            ),
            (
                AffineMap::from_coefficients(
                    0.088272, 0.520988, -0.463889, -0.377778, 0.785360, 8.095795,
                ),
                0.212527,
            ),
        ],
    )
}

/// Levy C curve: two quarter-turn contractions of equal weight.
pub fn levy() -> Ifs {
    Ifs::new(
        "levy",
        vec![
            (AffineMap::from_coefficients(0.5, -0.5, 0.5, 0.5, 0.0, 0.0), 0.5),
            (AffineMap::from_coefficients(0.5, 0.5, -0.5, 0.5, 0.5, 0.5), 0.5),
        ],
    )
}

/// Every built-in table, for gallery-style sweeps.
pub fn all() -> Vec<Ifs> {
    vec![sierpinski(), barnsley(), dragon(), levy()]
}
