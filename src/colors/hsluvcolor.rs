//! This module implements HSLuv, a human-friendly alternative to HSL built on CIELCHuv. Like HSL it
//! has hue, saturation, and lightness, and like HSL every combination of saturation 0-100 and
//! lightness 0-100 is a displayable sRGB color. Unlike HSL, lightness is CIELUV's perceptual
//! lightness: two colors with the same `l` look equally bright, whatever their hue.
//!
//! The price is that saturation is relative. 100% saturation means "as much chroma as sRGB can show
//! at this hue and lightness", and that maximum varies a lot around the hue circle, so a saturated
//! yellow and a saturated blue at the same lightness aren't equally colorful. If that matters, use
//! [`HPLuvColor`](::colors::HPLuvColor) instead.

use color::{Color, XYZColor};
use coord::Coord;
use hsluv::{hsluv_to_lch, lch_to_hsluv};
use lch::{lch_to_luv, luv_to_lch};
use luv::{luv_to_xyz, xyz_to_luv};
use mix::Mix;
use space::ColorSpace;

/// A color in HSLuv.
/// # Example
///
/// ```
/// # use hsluv::prelude::*;
/// # use hsluv::colors::HSLuvColor;
/// // a row of swatches at one lightness, all exactly as bright as each other
/// let swatches: Vec<RGBColor> = (0..6)
///     .map(|i| HSLuvColor { h: i as f64 * 60., s: 90., l: 65. }.convert())
///     .collect();
/// for swatch in swatches {
///     let back: HSLuvColor = swatch.convert();
///     assert!((back.l - 65.).abs() <= 1e-9);
/// }
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HSLuvColor {
    /// The hue, in degrees. The same as CIELCHuv's: conversions produce values in `[0, 360)`, and
    /// colors with no saturation get 0.
    pub h: f64,
    /// The saturation, as a percentage of the most chroma sRGB can show at this hue and lightness.
    /// 0 is gray and 100 is on the edge of the gamut; anything higher isn't displayable.
    pub s: f64,
    /// The lightness, CIELUV's L: 0 is black and 100 is white. At either end saturation is always 0.
    pub l: f64,
}

impl Color for HSLuvColor {
    /// Converts from XYZ to HSLuv, through CIELUV and CIELCHuv.
    fn from_xyz(xyz: XYZColor) -> HSLuvColor {
        HSLuvColor::from(lch_to_hsluv(luv_to_lch(xyz_to_luv(xyz.into()))))
    }
    /// Converts back to XYZ, the same way.
    fn to_xyz(&self) -> XYZColor {
        XYZColor::from(luv_to_xyz(lch_to_luv(hsluv_to_lch((*self).into()))))
    }
}

impl From<Coord> for HSLuvColor {
    fn from(c: Coord) -> HSLuvColor {
        HSLuvColor {
            h: c.x,
            s: c.y,
            l: c.z,
        }
    }
}

impl From<HSLuvColor> for Coord {
    fn from(val: HSLuvColor) -> Self {
        Coord {
            x: val.h,
            y: val.s,
            z: val.l,
        }
    }
}

impl Mix for HSLuvColor {
    const SPACE: ColorSpace = ColorSpace::Hsluv;
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use color::RGBColor;

    #[test]
    fn test_known_colors() {
        let navy: HSLuvColor = "#123456".parse::<RGBColor>().unwrap().convert();
        assert!((navy.h - 248.6093877694).abs() <= 1e-8);
        assert!((navy.s - 85.4332856963).abs() <= 1e-8);
        assert!((navy.l - 21.0424724210).abs() <= 1e-8);
        let red: HSLuvColor = RGBColor { r: 1.0, g: 0.0, b: 0.0 }.convert();
        assert!((red.s - 100.0).abs() <= 1e-8);
    }

    #[test]
    fn test_grays_have_no_hue() {
        for &v in &[0.0, 0.25, 0.5, 1.0] {
            let gray: HSLuvColor = RGBColor { r: v, g: v, b: v }.convert();
            assert_eq!(gray.h, 0.0);
            assert!(gray.s.abs() <= 1e-8);
        }
    }

    #[test]
    fn test_hsluv_xyz_conversion() {
        let xyz = XYZColor {
            x: 0.3,
            y: 0.35,
            z: 0.4,
        };
        let hsluv: HSLuvColor = xyz.convert();
        let xyz2: XYZColor = hsluv.convert();
        assert!(xyz.approx_equal(&xyz2));
    }

    #[test]
    fn test_hsluv_lerp() {
        let a = HSLuvColor { h: 300.0, s: 100.0, l: 30.0 };
        let b = HSLuvColor { h: 60.0, s: 50.0, l: 80.0 };
        let quarter = a.lerp(b, 0.25);
        assert!((quarter.h - 330.0).abs() <= 1e-10);
        assert!((quarter.s - 87.5).abs() <= 1e-10);
        assert!((quarter.l - 42.5).abs() <= 1e-10);
        assert_eq!(a.lerp(b, -3.0), a);
    }
}
