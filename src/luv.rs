//! This module implements the CIELUV color specification, adopted concurrently with CIELAB. L is
//! CIE lightness, a cube-root compression of relative luminance, and u and v measure how far the
//! color's chromaticity sits from the D65 white point, scaled by L so that every gray lands on the
//! u = v = 0 axis.
//!
//! Near black, the chromaticity terms divide by numbers that are practically zero, so any
//! lightness below 2^-13 is treated as pure black: u and v come out as exactly 0, and converting
//! such a lightness back gives XYZ (0, 0, 0).

use consts::{too_small, EPSILON, KAPPA, REF_U, REF_V};
use coord::Coord;

/// Relative luminance Y (white is 1) to CIE lightness L (white is 100).
pub fn y_to_l(y: f64) -> f64 {
    if y <= EPSILON {
        y * KAPPA
    } else {
        116.0 * y.powf(1.0 / 3.0) - 16.0
    }
}

/// CIE lightness L back to relative luminance Y. The linear branch covers L up to 8, which is
/// exactly where `y_to_l` switches over.
pub fn l_to_y(l: f64) -> f64 {
    if l <= 8.0 {
        l / KAPPA
    } else {
        ((l + 16.0) / 116.0).powi(3)
    }
}

/// Converts CIE XYZ (D65) to CIELUV.
/// # Example
///
/// ```
/// # use hsluv::coord::Coord;
/// # use hsluv::luv::xyz_to_luv;
/// // white has no chroma at all
/// let white = xyz_to_luv(Coord::new(0.9504559270516716, 1.0, 1.0890577507598784));
/// assert!((white.x - 100.).abs() <= 1e-9);
/// assert!(white.y.abs() <= 1e-9);
/// assert!(white.z.abs() <= 1e-9);
/// ```
pub fn xyz_to_luv(xyz: Coord) -> Coord {
    let l = y_to_l(xyz.y);
    if too_small(l) {
        return Coord::new(l, 0.0, 0.0);
    }

    // u' and v' chromaticity of the color, compared against those of the white point
    let denom = xyz.dot(&Coord::new(1.0, 15.0, 3.0));
    let u_prime = 4.0 * xyz.x / denom;
    let v_prime = 9.0 * xyz.y / denom;

    Coord {
        x: l,
        y: 13.0 * l * (u_prime - REF_U),
        z: 13.0 * l * (v_prime - REF_V),
    }
}

/// Converts CIELUV back to CIE XYZ (D65).
pub fn luv_to_xyz(luv: Coord) -> Coord {
    let l = luv.x;
    if too_small(l) {
        return Coord::default();
    }

    let u_prime = luv.y / (13.0 * l) + REF_U;
    let v_prime = luv.z / (13.0 * l) + REF_V;

    let y = l_to_y(l);
    let x = 2.25 * u_prime * y / v_prime;
    let z = (3.0 / v_prime - 5.0) * y - x / 3.0;
    Coord { x, y, z }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_lightness_branches() {
        // both branches agree where they meet
        assert!((y_to_l(EPSILON) - 8.0).abs() <= 1e-9);
        assert!((116.0 * EPSILON.powf(1.0 / 3.0) - 16.0 - 8.0).abs() <= 1e-9);
        assert!((l_to_y(8.0) - EPSILON).abs() <= 1e-12);
        assert!((y_to_l(1.0) - 100.0).abs() <= 1e-12);
        for &y in &[0.0, 0.001, 0.005, 0.2, 0.5, 1.0] {
            assert!((l_to_y(y_to_l(y)) - y).abs() <= 1e-12);
        }
    }

    #[test]
    fn test_cieluv_xyz_round_trip() {
        let xyz = Coord::new(0.3, 0.53, 0.65);
        let luv = xyz_to_luv(xyz);
        assert!(luv_to_xyz(luv).approx_equal(&xyz, 1e-12));

        let luv = Coord::new(45.0, 67.0, 49.0);
        assert!(xyz_to_luv(luv_to_xyz(luv)).approx_equal(&luv, 1e-9));

        // a dark color on the linear lightness segment
        let luv = Coord::new(3.0, -2.5, 1.25);
        assert!(xyz_to_luv(luv_to_xyz(luv)).approx_equal(&luv, 1e-9));
    }

    #[test]
    fn test_red() {
        let luv = xyz_to_luv(Coord::new(0.41239079926595948, 0.21263900587151036, 0.019330818715591851));
        assert!((luv.x - 53.2371155954).abs() <= 1e-8);
        assert!((luv.y - 175.0098221629).abs() <= 1e-8);
        assert!((luv.z - 37.7650936256).abs() <= 1e-8);
    }

    #[test]
    fn test_black_is_canonical() {
        // Y small enough that L falls under 2^-13
        let luv = xyz_to_luv(Coord::new(0.0000001, 0.0000001, 0.0000002));
        assert!(luv.x > 0.0);
        assert_eq!(luv.y, 0.0);
        assert_eq!(luv.z, 0.0);
        assert_eq!(xyz_to_luv(Coord::default()), Coord::default());
        assert_eq!(luv_to_xyz(Coord::new(0.0001, 50.0, -20.0)), Coord::default());
    }
}
