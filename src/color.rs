//! This module defines the [`Color`] trait, which every typed color in this crate implements, along
//! with the two colors everything else is defined against: [`RGBColor`], which is what goes on the
//! screen, and [`XYZColor`], which every conversion passes through.
//!
//! The free functions in [`convert`](::convert) do the actual math on bare [`Coord`]s. The types
//! here wrap them so that a color carries its space with it, and so that converting between any two
//! spaces is a single call:
//!
//! ```
//! # use hsluv::prelude::*;
//! # use hsluv::colors::HSLuvColor;
//! let rgb: RGBColor = "#3a7bd5".parse().unwrap();
//! let hsluv: HSLuvColor = rgb.convert();
//! let back: RGBColor = hsluv.convert();
//! assert!(rgb.approx_equal(&back));
//! ```

use std::fmt;
use std::str::FromStr;

use convert::{srgb_to_xyz, xyz_to_srgb};
use coord::Coord;
use hex::{parse_hex, Hex, HexParseError};
use mix::Mix;
use space::ColorSpace;

/// How close two colors' XYZ components have to be for [`Color::approx_equal`].
const XYZ_EPSILON: f64 = 1e-9;

/// A trait that includes any color representation that can be converted to and from the CIE 1931 XYZ
/// color space, under the D65 white point.
pub trait Color: Sized {
    /// Converts from a color in CIE XYZ to this representation.
    fn from_xyz(xyz: XYZColor) -> Self;
    /// Converts from this color to CIE XYZ.
    fn to_xyz(&self) -> XYZColor;
    /// Converts generic colors from one representation to another, by going through XYZ.
    /// # Example
    /// ```
    /// # use hsluv::prelude::*;
    /// # use hsluv::colors::CIELCHuvColor;
    /// let red = RGBColor { r: 1., g: 0., b: 0. };
    /// let lch: CIELCHuvColor = red.convert();
    /// assert!((lch.h - 12.17705063).abs() <= 1e-8);
    /// ```
    fn convert<T: Color>(&self) -> T {
        T::from_xyz(self.to_xyz())
    }
    /// Returns `true` if the two colors are the same color up to floating-point error, regardless
    /// of how either one is represented. The comparison is done in XYZ.
    fn approx_equal<T: Color>(&self, other: &T) -> bool {
        let c1: Coord = self.to_xyz().into();
        let c2: Coord = other.to_xyz().into();
        c1.approx_equal(&c2, XYZ_EPSILON)
    }
}

/// A point in the CIE 1931 XYZ color space, relative to the D65 white point with white at `y = 1`.
/// Every other color in this crate is defined by how it converts to and from this one.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct XYZColor {
    /// The X axis of the CIE 1931 XYZ space, roughly representing the long-wavelength receptors in
    /// the human eye: the red receptors.
    pub x: f64,
    /// The Y axis, the relative luminance: how bright the color is, from 0 (black) to 1 (white).
    pub y: f64,
    /// The Z axis, roughly representing the short-wavelength receptors: the blue ones.
    pub z: f64,
}

impl Color for XYZColor {
    fn from_xyz(xyz: XYZColor) -> XYZColor {
        xyz
    }
    fn to_xyz(&self) -> XYZColor {
        *self
    }
}

impl From<Coord> for XYZColor {
    fn from(c: Coord) -> XYZColor {
        XYZColor {
            x: c.x,
            y: c.y,
            z: c.z,
        }
    }
}

impl From<XYZColor> for Coord {
    fn from(val: XYZColor) -> Self {
        Coord {
            x: val.x,
            y: val.y,
            z: val.z,
        }
    }
}

impl Mix for XYZColor {
    const SPACE: ColorSpace = ColorSpace::Xyz;
}

/// A color in the sRGB space, the one monitors and the web assume. Components are floating-point
/// values between 0 and 1, gamma-encoded; out-of-range values are allowed and simply aren't
/// displayable. Formatting gives the `#rrggbb` hex code, and parsing accepts one.
/// # Example
/// ```
/// # use hsluv::prelude::*;
/// let rgb = RGBColor { r: 1., g: 0.5, b: 0. };
/// assert_eq!(rgb.to_string(), "#ff7f00");
/// let parsed: RGBColor = "#FF7F00".parse().unwrap();
/// assert!((parsed.g - 127. / 255.).abs() <= 1e-12);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RGBColor {
    /// The red component, between 0 and 1.
    pub r: f64,
    /// The green component, between 0 and 1.
    pub g: f64,
    /// The blue component, between 0 and 1.
    pub b: f64,
}

impl RGBColor {
    /// Parses a `#rrggbb` hex code (either case) into a color.
    /// # Errors
    /// Returns a [`HexParseError`] describing the first problem with the string.
    pub fn from_hex_code(hex: &str) -> Result<RGBColor, HexParseError> {
        parse_hex(hex).map(RGBColor::from)
    }
}

impl Color for RGBColor {
    fn from_xyz(xyz: XYZColor) -> RGBColor {
        RGBColor::from(xyz_to_srgb(xyz.into()))
    }
    fn to_xyz(&self) -> XYZColor {
        XYZColor::from(srgb_to_xyz((*self).into()))
    }
}

impl From<Coord> for RGBColor {
    fn from(c: Coord) -> RGBColor {
        RGBColor {
            r: c.x,
            g: c.y,
            b: c.z,
        }
    }
}

impl From<RGBColor> for Coord {
    fn from(val: RGBColor) -> Self {
        Coord {
            x: val.r,
            y: val.g,
            z: val.b,
        }
    }
}

impl Mix for RGBColor {
    const SPACE: ColorSpace = ColorSpace::Srgb;
}

impl fmt::Display for RGBColor {
    /// Writes the lowercase `#rrggbb` code, truncating each channel to a byte.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", Hex((*self).into()))
    }
}

impl FromStr for RGBColor {
    type Err = HexParseError;

    fn from_str(s: &str) -> Result<RGBColor, HexParseError> {
        RGBColor::from_hex_code(s)
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_rgb_to_string() {
        let c1 = RGBColor {
            r: 0.0,
            g: 0.0,
            b: 0.0,
        };
        let c2 = RGBColor {
            r: 1.0,
            g: 0.0,
            b: 1.0,
        };
        let c3 = RGBColor {
            r: 0.2,
            g: 0.4,
            b: 0.8,
        };
        assert_eq!(c1.to_string(), "#000000");
        assert_eq!(c2.to_string(), "#ff00ff");
        assert_eq!(c3.to_string(), "#3366cc");
        assert_eq!(format!("{}", c3), "#3366cc");
    }

    #[test]
    fn test_rgb_from_string() {
        let c: RGBColor = "#0000ff".parse().unwrap();
        assert_eq!(c, RGBColor { r: 0.0, g: 0.0, b: 1.0 });
        assert_eq!("0000ff".parse::<RGBColor>(), Err(HexParseError::InvalidLength));
        assert_eq!("#0000fg".parse::<RGBColor>(), Err(HexParseError::InvalidDigit));
        assert_eq!(
            RGBColor::from_hex_code("#ffffff"),
            Ok(RGBColor { r: 1.0, g: 1.0, b: 1.0 })
        );
    }

    #[test]
    fn test_xyz_rgb_conversion() {
        let red = RGBColor { r: 1.0, g: 0.0, b: 0.0 };
        let xyz: XYZColor = red.convert();
        assert!((xyz.x - 0.4123907993).abs() <= 1e-9);
        assert!((xyz.y - 0.2126390059).abs() <= 1e-9);
        assert!((xyz.z - 0.0193308187).abs() <= 1e-9);
        let back: RGBColor = xyz.convert();
        assert!(back.approx_equal(&red));
        // white is the reference white
        let white: XYZColor = RGBColor { r: 1.0, g: 1.0, b: 1.0 }.convert();
        assert!((white.y - 1.0).abs() <= 1e-12);
    }

    #[test]
    fn test_approx_equal() {
        let a = RGBColor { r: 0.3, g: 0.6, b: 0.9 };
        let b = RGBColor {
            r: 0.3 + 1e-13,
            g: 0.6,
            b: 0.9,
        };
        let c = RGBColor { r: 0.31, g: 0.6, b: 0.9 };
        assert!(a.approx_equal(&b));
        assert!(!a.approx_equal(&c));
        // across types too
        let xyz: XYZColor = a.convert();
        assert!(xyz.approx_equal(&a));
    }

    #[test]
    fn test_rgb_mix() {
        let black = RGBColor { r: 0.0, g: 0.0, b: 0.0 };
        let white = RGBColor { r: 1.0, g: 1.0, b: 1.0 };
        assert_eq!(black.mix(white), RGBColor { r: 0.5, g: 0.5, b: 0.5 });
        assert_eq!(black.lerp(white, 3.0), white);
        let xyz1 = XYZColor { x: 0.2, y: 0.4, z: 0.6 };
        let xyz2 = XYZColor { x: 0.4, y: 0.2, z: 0.0 };
        let mid = xyz1.mix(xyz2);
        assert!((mid.x - 0.3).abs() <= 1e-12);
        assert!((mid.y - 0.3).abs() <= 1e-12);
        assert!((mid.z - 0.3).abs() <= 1e-12);
    }
}
