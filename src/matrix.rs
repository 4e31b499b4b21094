//! Linear RGB ↔ CIE XYZ. Both directions are a single 3×3 matrix-vector product using the sRGB
//! primaries and the D65 white point, so linear RGB (1, 1, 1) lands exactly on the reference white
//! that CIELUV is measured against.

use consts::{LRGB_TO_XYZ, XYZ_TO_LRGB};
use coord::Coord;

// each row of the matrix dotted with the vector
fn multiply(matrix: &[[f64; 3]; 3], v: Coord) -> Coord {
    let row = |i: usize| Coord::from(matrix[i]).dot(&v);
    Coord {
        x: row(0),
        y: row(1),
        z: row(2),
    }
}

/// Converts CIE XYZ (D65) to linear sRGB.
pub fn xyz_to_lrgb(xyz: Coord) -> Coord {
    multiply(&XYZ_TO_LRGB, xyz)
}

/// Converts linear sRGB to CIE XYZ (D65).
/// # Example
/// ```
/// # use hsluv::coord::Coord;
/// # use hsluv::matrix::lrgb_to_xyz;
/// let white = lrgb_to_xyz(Coord::new(1., 1., 1.));
/// // Y is the relative luminance, so white is exactly 1
/// assert!((white.y - 1.).abs() <= 1e-12);
/// ```
pub fn lrgb_to_xyz(lrgb: Coord) -> Coord {
    multiply(&LRGB_TO_XYZ, lrgb)
}
