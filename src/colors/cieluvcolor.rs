//! This module implements the CIELUV color specification, which was adopted concurrently with
//! CIELAB. CIELUV is very similar to CIELAB, but with the difference that u and v are roughly
//! equivalent to red and green and luminance is then used to calculate the blue part.

use color::{Color, XYZColor};
use coord::Coord;
use luv::{luv_to_xyz, xyz_to_luv};
use mix::Mix;
use space::ColorSpace;

/// A similar color system to CIELAB, adapted at the same time and with similar goals. It attempts to
/// be an easy-to-convert color space from XYZ that approaches perceptual uniformity. U and V
/// represent chromaticity and roughly equate to CIELAB's A and B, but they're scaled differently and
/// act slightly differently. These coordinates are often referred to as the CIE 1976 UCS (uniform
/// chromaticity scale) diagram, and they're good descriptors of chromaticity. The white point is
/// always D65, the same as sRGB's.
/// # Example
///
/// ```
/// # use hsluv::prelude::*;
/// # use hsluv::colors::CIELUVColor;
/// let white: CIELUVColor = RGBColor { r: 1., g: 1., b: 1. }.convert();
/// assert!((white.l - 100.).abs() <= 1e-9);
/// assert!(white.u.abs() <= 1e-9);
/// assert!(white.v.abs() <= 1e-9);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CIELUVColor {
    /// The luminance component of LUV. Ranges from 0 to 100 by definition.
    pub l: f64,
    /// The component of LUV that roughly equates to how red the color is vs. how green it is.
    /// Positive is red, negative is green; sRGB colors stay within about -84 to 176.
    pub u: f64,
    /// The component of LUV that roughly equates to how yellow vs. blue the color is. Positive is
    /// yellow, negative is blue; sRGB colors stay within about -135 to 108.
    pub v: f64,
}

impl Color for CIELUVColor {
    /// Given an XYZ color, gets a new CIELUV color. Very dark colors (lightness under 2^-13) come
    /// out as pure black, with u and v both 0.
    fn from_xyz(xyz: XYZColor) -> CIELUVColor {
        CIELUVColor::from(xyz_to_luv(xyz.into()))
    }
    /// Returns an XYZ color that corresponds to the CIELUV color.
    fn to_xyz(&self) -> XYZColor {
        XYZColor::from(luv_to_xyz((*self).into()))
    }
}

impl From<Coord> for CIELUVColor {
    fn from(c: Coord) -> CIELUVColor {
        CIELUVColor {
            l: c.x,
            u: c.y,
            v: c.z,
        }
    }
}

impl From<CIELUVColor> for Coord {
    fn from(val: CIELUVColor) -> Self {
        Coord {
            x: val.l,
            y: val.u,
            z: val.v,
        }
    }
}

impl Mix for CIELUVColor {
    const SPACE: ColorSpace = ColorSpace::Luv;
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use color::RGBColor;

    #[test]
    fn test_cieluv_xyz_conversion() {
        let xyz = XYZColor {
            x: 0.4,
            y: 0.6,
            z: 0.2,
        };
        let luv: CIELUVColor = xyz.convert();
        let xyz2: XYZColor = luv.convert();
        assert!(xyz.approx_equal(&xyz2));
    }

    #[test]
    fn test_known_colors() {
        let magenta: CIELUVColor = RGBColor { r: 1.0, g: 0.0, b: 1.0 }.convert();
        assert!((magenta.l - 60.3227313546).abs() <= 1e-9);
        assert!((magenta.u - 84.0556019898).abs() <= 1e-9);
        assert!((magenta.v + 108.6963654918).abs() <= 1e-9);
        let black: CIELUVColor = RGBColor { r: 0.0, g: 0.0, b: 0.0 }.convert();
        assert_eq!(black, CIELUVColor { l: 0.0, u: 0.0, v: 0.0 });
    }

    #[test]
    fn test_cieluv_mix_is_straight() {
        let a = CIELUVColor { l: 40.0, u: -20.0, v: 10.0 };
        let b = CIELUVColor { l: 60.0, u: 20.0, v: 30.0 };
        assert_eq!(a.mix(b), CIELUVColor { l: 50.0, u: 0.0, v: 20.0 });
    }
}
