//! This module implements the CIELCHuv color space, a cylindrical transformation of the
//! CIELUV space, akin to the relationship between CIELAB and CIELCH. HSLuv and HPLuv are both built
//! on top of it.

use color::{Color, XYZColor};
use coord::Coord;
use lch::{lch_to_luv, luv_to_lch};
use luv::{luv_to_xyz, xyz_to_luv};
use mix::Mix;
use space::ColorSpace;

/// The polar version of CIELUV, analogous to the relationship between CIELCH and CIELAB. Sometimes
/// referred to as CIEHCL, but this crate uses CIELCHuv to be explicit and avoid any confusion.
/// # Example
///
/// ```
/// # use hsluv::prelude::*;
/// # use hsluv::colors::CIELCHuvColor;
/// // hue-shift red to yellow, keeping same brightness: really ends up to be brown
/// let red = RGBColor{r: 0.7, g: 0.1, b: 0.1};
/// let red_lch: CIELCHuvColor = red.convert();
/// let mut yellow = red_lch;
/// yellow.h = yellow.h + 60.;
/// let brown: RGBColor = yellow.convert();
/// assert!(brown.r > brown.b && brown.g > brown.b);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CIELCHuvColor {
    /// The luminance component. Exactly the same as CIELUV. Varies between 0 and 100 by definition.
    pub l: f64,
    /// The chroma component: essentially, how colorful the color is compared to white. (This is
    /// contrasted with saturation, which is how colorful a color is when compared to an equivalently
    /// bright grayscale color: a dark, deep red may have high saturation and low chroma.) This varies
    /// between 0 and about 180 for sRGB colors, and is the radius in cylindrical coordinates.
    pub c: f64,
    /// The hue component, in degrees from the +u axis towards +v: about 12 for sRGB red, 128 for
    /// green, and 266 for blue. Conversions produce values in `[0, 360)`, and grays always get 0.
    pub h: f64,
}

impl Color for CIELCHuvColor {
    /// Converts from XYZ to CIELCHuv through CIELUV.
    fn from_xyz(xyz: XYZColor) -> CIELCHuvColor {
        CIELCHuvColor::from(luv_to_lch(xyz_to_luv(xyz.into())))
    }
    /// Gets the XYZ color that corresponds to this one, through CIELUV.
    fn to_xyz(&self) -> XYZColor {
        XYZColor::from(luv_to_xyz(lch_to_luv((*self).into())))
    }
}

impl From<Coord> for CIELCHuvColor {
    fn from(c: Coord) -> CIELCHuvColor {
        CIELCHuvColor {
            l: c.x,
            c: c.y,
            h: c.z,
        }
    }
}

impl From<CIELCHuvColor> for Coord {
    fn from(val: CIELCHuvColor) -> Self {
        Coord {
            x: val.l,
            y: val.c,
            z: val.h,
        }
    }
}

impl Mix for CIELCHuvColor {
    const SPACE: ColorSpace = ColorSpace::Lch;
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_cielchuv_xyz_conversion() {
        let xyz = XYZColor {
            x: 0.4,
            y: 0.6,
            z: 0.2,
        };
        let lchuv: CIELCHuvColor = xyz.convert();
        let xyz2: XYZColor = lchuv.convert();
        assert!(xyz.approx_equal(&xyz2));
    }

    #[test]
    fn test_hue_mix_crosses_zero() {
        let a = CIELCHuvColor { l: 50.0, c: 40.0, h: 350.0 };
        let b = CIELCHuvColor { l: 50.0, c: 40.0, h: 30.0 };
        let mid = a.mix(b);
        assert!((mid.h - 10.0).abs() <= 1e-10);
        assert!((mid.c - 40.0).abs() <= 1e-10);
    }
}
