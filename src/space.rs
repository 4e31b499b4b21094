//! A runtime name for each color space in the conversion chain, for code that picks its working
//! space from a setting or a serialized value rather than at compile time. Everything routes
//! through sRGB, since that's what callers hand in and expect back.

use convert::*;
use coord::Coord;

/// One of the color spaces a [`Coord`] can be read in.
/// # Example
/// ```
/// # use hsluv::coord::Coord;
/// # use hsluv::space::ColorSpace;
/// let teal = Coord::new(0.0, 0.5, 0.5);
/// for space in ColorSpace::all() {
///     let there = space.from_srgb(teal);
///     assert!(space.to_srgb(there).approx_equal(&teal, 1e-9));
/// }
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorSpace {
    /// Gamma-encoded sRGB, `(r, g, b)` in 0-1.
    Srgb,
    /// sRGB with the transfer curve undone, `(r, g, b)` in 0-1.
    LinearRgb,
    /// CIE 1931 XYZ under D65, `(X, Y, Z)` with white at Y = 1.
    Xyz,
    /// CIELUV, `(L, u, v)`.
    Luv,
    /// CIELCh(uv), `(L, C, h)`.
    Lch,
    /// HSLuv, `(h, s, l)`.
    Hsluv,
    /// HPLuv, `(h, p, l)`.
    Hpluv,
}

/// Which component of a [`Coord`] holds the hue, for the spaces that have one.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HueAxis {
    /// `x`, as in HSLuv and HPLuv.
    X,
    /// `z`, as in CIELCh(uv).
    Z,
}

impl HueAxis {
    /// Reads the hue out of a coordinate.
    pub fn get(self, coord: &Coord) -> f64 {
        match self {
            HueAxis::X => coord.x,
            HueAxis::Z => coord.z,
        }
    }

    /// Returns a copy of `coord` with the hue replaced.
    pub fn set(self, coord: Coord, hue: f64) -> Coord {
        match self {
            HueAxis::X => Coord { x: hue, ..coord },
            HueAxis::Z => Coord { z: hue, ..coord },
        }
    }
}

impl ColorSpace {
    /// Every space, in chain order from sRGB outwards.
    pub fn all() -> [ColorSpace; 7] {
        [
            ColorSpace::Srgb,
            ColorSpace::LinearRgb,
            ColorSpace::Xyz,
            ColorSpace::Luv,
            ColorSpace::Lch,
            ColorSpace::Hsluv,
            ColorSpace::Hpluv,
        ]
    }

    /// Converts an sRGB color into this space.
    pub fn from_srgb(self, srgb: Coord) -> Coord {
        match self {
            ColorSpace::Srgb => srgb,
            ColorSpace::LinearRgb => srgb_to_lrgb(srgb),
            ColorSpace::Xyz => srgb_to_xyz(srgb),
            ColorSpace::Luv => srgb_to_luv(srgb),
            ColorSpace::Lch => srgb_to_lch(srgb),
            ColorSpace::Hsluv => srgb_to_hsluv(srgb),
            ColorSpace::Hpluv => srgb_to_hpluv(srgb),
        }
    }

    /// Converts a color in this space back to sRGB.
    pub fn to_srgb(self, coord: Coord) -> Coord {
        match self {
            ColorSpace::Srgb => coord,
            ColorSpace::LinearRgb => lrgb_to_srgb(coord),
            ColorSpace::Xyz => xyz_to_srgb(coord),
            ColorSpace::Luv => luv_to_srgb(coord),
            ColorSpace::Lch => lch_to_srgb(coord),
            ColorSpace::Hsluv => hsluv_to_srgb(coord),
            ColorSpace::Hpluv => hpluv_to_srgb(coord),
        }
    }

    /// The component that holds the hue angle, in degrees, or `None` if this space is rectangular.
    pub fn hue_axis(self) -> Option<HueAxis> {
        match self {
            ColorSpace::Lch => Some(HueAxis::Z),
            ColorSpace::Hsluv | ColorSpace::Hpluv => Some(HueAxis::X),
            _ => None,
        }
    }
}
