//! Linear RGB: sRGB with the transfer curve undone, so each channel is proportional to the light
//! actually emitted. Mixing here is physically meaningful (it's what two overlapping lights do),
//! which is why blends in linear RGB look brighter in the middle than blends in sRGB.

use color::{Color, XYZColor};
use coord::Coord;
use matrix::{lrgb_to_xyz, xyz_to_lrgb};
use mix::Mix;
use space::ColorSpace;

/// A color in linear-light sRGB, with the same primaries and white point as [`RGBColor`] but no
/// gamma encoding. Components are between 0 and 1 for displayable colors.
///
/// [`RGBColor`]: ../../color/struct.RGBColor.html
/// # Example
///
/// ```
/// # use hsluv::prelude::*;
/// # use hsluv::colors::LinearRGBColor;
/// let mid_gray = RGBColor { r: 0.5, g: 0.5, b: 0.5 };
/// let linear: LinearRGBColor = mid_gray.convert();
/// // half the signal is only about a fifth of the light
/// assert!((linear.r - 0.214).abs() <= 1e-3);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearRGBColor {
    /// The red component, between 0 and 1.
    pub r: f64,
    /// The green component, between 0 and 1.
    pub g: f64,
    /// The blue component, between 0 and 1.
    pub b: f64,
}

impl Color for LinearRGBColor {
    fn from_xyz(xyz: XYZColor) -> LinearRGBColor {
        LinearRGBColor::from(xyz_to_lrgb(xyz.into()))
    }
    fn to_xyz(&self) -> XYZColor {
        XYZColor::from(lrgb_to_xyz((*self).into()))
    }
}

impl From<Coord> for LinearRGBColor {
    fn from(c: Coord) -> LinearRGBColor {
        LinearRGBColor {
            r: c.x,
            g: c.y,
            b: c.z,
        }
    }
}

impl From<LinearRGBColor> for Coord {
    fn from(val: LinearRGBColor) -> Self {
        Coord {
            x: val.r,
            y: val.g,
            z: val.b,
        }
    }
}

impl Mix for LinearRGBColor {
    const SPACE: ColorSpace = ColorSpace::LinearRgb;
}
