//! This module implements HPLuv, HSLuv's pastel sibling. Saturation is measured against the
//! largest chroma that's displayable at *every* hue for the given lightness, rather than at the
//! color's own hue, so the same saturation means the same colorfulness all the way around the hue
//! circle. Staying under 100 guarantees a displayable color, but the most vivid colors of each hue
//! need more than 100 and can't be reached without leaving sRGB for some other hue.

use color::{Color, XYZColor};
use coord::Coord;
use hsluv::{hpluv_to_lch, lch_to_hpluv};
use lch::{lch_to_luv, luv_to_lch};
use luv::{luv_to_xyz, xyz_to_luv};
use mix::Mix;
use space::ColorSpace;

/// A color in HPLuv.
/// # Example
///
/// ```
/// # use hsluv::prelude::*;
/// # use hsluv::colors::HPLuvColor;
/// // at 100% everything is in gamut
/// for h in 0..36 {
///     let rgb: RGBColor = HPLuvColor { h: h as f64 * 10., p: 100., l: 50. }.convert();
///     for &c in &[rgb.r, rgb.g, rgb.b] {
///         assert!(c >= -1e-9 && c <= 1. + 1e-9);
///     }
/// }
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HPLuvColor {
    /// The hue, in degrees. The same as CIELCHuv's: conversions produce values in `[0, 360)`, and
    /// colors with no saturation get 0.
    pub h: f64,
    /// The saturation, as a percentage of the most chroma that's displayable at every hue for this
    /// lightness. Can be well over 100 for colors near the edge of the gamut.
    pub p: f64,
    /// The lightness, CIELUV's L: 0 is black and 100 is white. At either end saturation is always 0.
    pub l: f64,
}

impl Color for HPLuvColor {
    /// Converts from XYZ to HPLuv, through CIELUV and CIELCHuv.
    fn from_xyz(xyz: XYZColor) -> HPLuvColor {
        HPLuvColor::from(lch_to_hpluv(luv_to_lch(xyz_to_luv(xyz.into()))))
    }
    /// Converts back to XYZ, the same way.
    fn to_xyz(&self) -> XYZColor {
        XYZColor::from(luv_to_xyz(lch_to_luv(hpluv_to_lch((*self).into()))))
    }
}

impl From<Coord> for HPLuvColor {
    fn from(c: Coord) -> HPLuvColor {
        HPLuvColor {
            h: c.x,
            p: c.y,
            l: c.z,
        }
    }
}

impl From<HPLuvColor> for Coord {
    fn from(val: HPLuvColor) -> Self {
        Coord {
            x: val.h,
            y: val.p,
            z: val.l,
        }
    }
}

impl Mix for HPLuvColor {
    const SPACE: ColorSpace = ColorSpace::Hpluv;
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use color::RGBColor;
    use colors::HSLuvColor;

    #[test]
    fn test_known_colors() {
        let pale: HPLuvColor = "#abcdef".parse::<RGBColor>().unwrap().convert();
        assert!((pale.h - 239.8086672858).abs() <= 1e-8);
        assert!((pale.p - 81.2031617637).abs() <= 1e-8);
        assert!((pale.l - 81.0444845944).abs() <= 1e-8);
        let blue: HPLuvColor = RGBColor { r: 0.0, g: 0.0, b: 1.0 }.convert();
        assert!((blue.p - 513.4126968443).abs() <= 1e-6);
    }

    #[test]
    fn test_never_below_hsluv() {
        for hex in &["#ff0000", "#123456", "#abcdef", "#fedcba"] {
            let rgb: RGBColor = hex.parse().unwrap();
            let hpluv: HPLuvColor = rgb.convert();
            let hsluv: HSLuvColor = rgb.convert();
            assert!(hpluv.p + 1e-9 >= hsluv.s);
            assert_eq!(hpluv.h, hsluv.h);
            assert_eq!(hpluv.l, hsluv.l);
        }
    }

    #[test]
    fn test_hpluv_mix() {
        let a = HPLuvColor { h: 20.0, p: 10.0, l: 40.0 };
        let b = HPLuvColor { h: 200.0, p: 30.0, l: 60.0 };
        let mid = a.mix(b);
        // exactly opposite, so it goes the positive way round
        assert!((mid.h - 110.0).abs() <= 1e-10);
        assert!((mid.p - 20.0).abs() <= 1e-10);
        assert!((mid.l - 50.0).abs() <= 1e-10);
    }
}
