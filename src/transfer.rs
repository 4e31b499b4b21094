//! The sRGB transfer curve, which turns physically linear light into the gamma-encoded values
//! stored in images and sent to displays, and back again. The curve is a short linear segment near
//! black spliced onto a 2.4 power function.
//!
//! Inputs are not clamped. A negative channel takes the linear segment in both directions and
//! stays negative; channels above 1 go through the power function and stay above 1. Anything that
//! makes the power function itself undefined simply produces NaN.

use coord::Coord;

/// Encodes one linear-light channel with the sRGB transfer curve.
/// # Example
/// ```
/// # use hsluv::transfer::linear_to_srgb;
/// assert_eq!(linear_to_srgb(0.0), 0.0);
/// assert!((linear_to_srgb(1.0) - 1.0).abs() <= 1e-12);
/// assert!((linear_to_srgb(0.2140) - 0.5).abs() <= 1e-3);
/// ```
pub fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.0031308 {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

/// Decodes one gamma-encoded sRGB channel back to linear light.
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Linear RGB to sRGB, componentwise.
pub fn lrgb_to_srgb(lrgb: Coord) -> Coord {
    lrgb.map(linear_to_srgb)
}

/// sRGB to linear RGB, componentwise.
pub fn srgb_to_lrgb(srgb: Coord) -> Coord {
    srgb.map(srgb_to_linear)
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_transfer_round_trip() {
        for i in 0..=100 {
            let c = i as f64 / 100.0;
            assert!((linear_to_srgb(srgb_to_linear(c)) - c).abs() <= 1e-12);
            assert!((srgb_to_linear(linear_to_srgb(c)) - c).abs() <= 1e-12);
        }
    }

    #[test]
    fn test_linear_segment() {
        // both branches of the curve meet near the threshold
        assert!((srgb_to_linear(0.04045) - 0.04045 / 12.92).abs() <= 1e-15);
        assert!((linear_to_srgb(0.0031308) - 0.0031308 * 12.92).abs() <= 1e-15);
        assert!((linear_to_srgb(0.0031309) - 0.0031309 * 12.92).abs() <= 1e-6);
        // negatives stay on the linear segment
        assert_eq!(srgb_to_linear(-0.5), -0.5 / 12.92);
    }

    #[test]
    fn test_no_clamping() {
        assert!(srgb_to_linear(1.2) > 1.0);
        assert!(linear_to_srgb(1.2) > 1.0);
    }

    #[test]
    fn test_componentwise() {
        let srgb = Coord::new(0.0, 0.5, 1.0);
        let lrgb = srgb_to_lrgb(srgb);
        assert_eq!(lrgb.x, 0.0);
        assert!((lrgb.y - 0.21404114048223255).abs() <= 1e-12);
        assert!((lrgb.z - 1.0).abs() <= 1e-12);
        assert!(lrgb_to_srgb(lrgb).approx_equal(&srgb, 1e-12));
    }
}
