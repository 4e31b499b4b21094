//! Interpolation and hue rotation. In HSLuv and HPLuv, blending two colors channel by channel
//! gives evenly spaced steps in lightness and saturation, as long as the hue takes the short way
//! around the circle: halfway between 350 and 10 degrees should be 0, not 180. Everything here
//! handles the hue that way.
//!
//! There are three levels:
//! - plain numbers: [`interpolate`], [`interpolate_hue`], [`normalize_hue`], [`normalize_hue_delta`]
//! - coordinates in a known space: [`lerp_coords`], [`lerp_hsluv`], [`lerp_hpluv`], [`rotate_hue`]
//! - sRGB colors blended or rotated in some other space, and handed back as sRGB:
//!   [`lerp_in_space`], [`rotate_hue_in_space`], and their linear RGB twins
//!
//! The [`Mix`] trait puts the same operations on the typed colors in [`colors`](::colors).
//!
//! Note that there is one very crucial thing to remember about mixing: it differs depending on the
//! color space being used. Blending the same two colors in sRGB and in HSLuv can give very
//! different results, which is why [`Mix`] only mixes two colors of the same type.

use color::Color;
use coord::Coord;
use space::ColorSpace;
use transfer::{lrgb_to_srgb, srgb_to_lrgb};

/// Brings any angle in degrees into `[0, 360)`.
/// # Example
/// ```
/// # use hsluv::mix::normalize_hue;
/// assert_eq!(normalize_hue(370.), 10.);
/// assert_eq!(normalize_hue(-90.), 270.);
/// ```
pub fn normalize_hue(h: f64) -> f64 {
    let h = h % 360.0;
    let h = if h < 0.0 { h + 360.0 } else { h };
    // a tiny negative remainder rounds up to exactly 360 when shifted
    if h >= 360.0 {
        0.0
    } else {
        h
    }
}

/// Brings a difference between two hues into `(-180, 180]`: the signed length of the shortest
/// arc. Going exactly halfway round is always reported as +180.
pub fn normalize_hue_delta(dh: f64) -> f64 {
    let dh = normalize_hue(dh);
    if dh > 180.0 {
        dh - 360.0
    } else {
        dh
    }
}

/// Plain linear interpolation between two numbers. `t` is not clamped.
pub fn interpolate(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Interpolates between two hues along the shortest arc, returning a hue in `[0, 360)`. `t` is not
/// clamped.
/// # Example
/// ```
/// # use hsluv::mix::interpolate_hue;
/// // across the seam, not the long way round
/// assert!((interpolate_hue(350., 10., 0.5) - 0.).abs() <= 1e-10);
/// assert!((interpolate_hue(10., 350., 0.25) - 5.).abs() <= 1e-10);
/// ```
pub fn interpolate_hue(a: f64, b: f64, t: f64) -> f64 {
    normalize_hue(a + normalize_hue_delta(b - a) * t)
}

fn clamp_unit(t: f64) -> f64 {
    if t < 0.0 {
        0.0
    } else if t > 1.0 {
        1.0
    } else {
        t
    }
}

/// Interpolates between two coordinates that are both in `space`. The hue component, if the space
/// has one, goes the short way round; everything else is a straight line. `t` is clamped to
/// `[0, 1]`.
pub fn lerp_coords(a: Coord, b: Coord, t: f64, space: ColorSpace) -> Coord {
    let t = clamp_unit(t);
    let straight = a.lerp(&b, t);
    match space.hue_axis() {
        Some(axis) => axis.set(straight, interpolate_hue(axis.get(&a), axis.get(&b), t)),
        None => straight,
    }
}

/// Interpolates between two HSLuv colors. `t` is clamped to `[0, 1]`.
pub fn lerp_hsluv(a: Coord, b: Coord, t: f64) -> Coord {
    lerp_coords(a, b, t, ColorSpace::Hsluv)
}

/// Interpolates between two HPLuv colors. `t` is clamped to `[0, 1]`.
pub fn lerp_hpluv(a: Coord, b: Coord, t: f64) -> Coord {
    lerp_coords(a, b, t, ColorSpace::Hpluv)
}

/// Interpolates between two sRGB colors by converting both into `space`, blending there, and
/// converting back to sRGB. `t` is clamped to `[0, 1]`.
/// # Example
/// ```
/// # use hsluv::coord::Coord;
/// # use hsluv::mix::lerp_in_space;
/// # use hsluv::space::ColorSpace;
/// let red = Coord::new(1., 0., 0.);
/// let blue = Coord::new(0., 0., 1.);
/// // the ends are the ends, in any space
/// assert!(lerp_in_space(red, blue, 0., ColorSpace::Hsluv).approx_equal(&red, 1e-9));
/// assert!(lerp_in_space(red, blue, 7., ColorSpace::Hsluv).approx_equal(&blue, 1e-9));
/// ```
pub fn lerp_in_space(srgb_a: Coord, srgb_b: Coord, t: f64, space: ColorSpace) -> Coord {
    let a = space.from_srgb(srgb_a);
    let b = space.from_srgb(srgb_b);
    space.to_srgb(lerp_coords(a, b, t, space))
}

/// Like [`lerp_in_space`], but the colors going in and coming out are linear RGB.
pub fn lerp_lrgb_in_space(lrgb_a: Coord, lrgb_b: Coord, t: f64, space: ColorSpace) -> Coord {
    srgb_to_lrgb(lerp_in_space(
        lrgb_to_srgb(lrgb_a),
        lrgb_to_srgb(lrgb_b),
        t,
        space,
    ))
}

/// Rotates the hue of an HSLuv or HPLuv color by `delta` degrees, leaving saturation and lightness
/// alone. The result's hue is in `[0, 360)`.
pub fn rotate_hue(hsl: Coord, delta: f64) -> Coord {
    Coord {
        x: normalize_hue(hsl.x + delta),
        ..hsl
    }
}

/// Rotates the hue of an sRGB color by `delta` degrees in `space`, returning sRGB. Spaces without a
/// hue (sRGB, linear RGB, XYZ, CIELUV) hand the color back unchanged.
/// # Example
/// ```
/// # use hsluv::coord::Coord;
/// # use hsluv::mix::rotate_hue_in_space;
/// # use hsluv::space::ColorSpace;
/// let color = Coord::new(0.8, 0.3, 0.2);
/// let turned = rotate_hue_in_space(color, 360., ColorSpace::Hsluv);
/// assert!(turned.approx_equal(&color, 1e-9));
/// ```
pub fn rotate_hue_in_space(srgb: Coord, delta: f64, space: ColorSpace) -> Coord {
    match space.hue_axis() {
        Some(axis) => {
            let there = space.from_srgb(srgb);
            let turned = axis.set(there, normalize_hue(axis.get(&there) + delta));
            space.to_srgb(turned)
        }
        None => srgb,
    }
}

/// Like [`rotate_hue_in_space`], but the color going in and coming out is linear RGB.
pub fn rotate_lrgb_hue_in_space(lrgb: Coord, delta: f64, space: ColorSpace) -> Coord {
    srgb_to_lrgb(rotate_hue_in_space(lrgb_to_srgb(lrgb), delta, space))
}

/// Describes a Color that can be mixed with other colors in its own 3D space. Mixing, in this
/// context, is walking along the path between two colors' coordinates, with the hue (if the space
/// has one) taking the shorter way round.
///
/// A Color only needs to say which [`ColorSpace`] its coordinates are in; the blending itself comes
/// for free.
/// # Example
/// ```
/// # use hsluv::prelude::*;
/// # use hsluv::colors::HSLuvColor;
/// let a = HSLuvColor { h: 340., s: 80., l: 40. };
/// let b = HSLuvColor { h: 20., s: 40., l: 60. };
/// let mid = a.mix(b);
/// assert!(mid.h.abs() <= 1e-10);
/// assert!((mid.s - 60.).abs() <= 1e-10);
/// assert!((mid.l - 50.).abs() <= 1e-10);
/// ```
pub trait Mix: Color + From<Coord> + Into<Coord> + Copy {
    /// The space this type's coordinates live in.
    const SPACE: ColorSpace;

    /// Walks from `self` (at `t = 0`) to `other` (at `t = 1`). `t` is clamped to `[0, 1]`.
    fn lerp(self, other: Self, t: f64) -> Self {
        Self::from(lerp_coords(self.into(), other.into(), t, Self::SPACE))
    }

    /// The color halfway between the two.
    fn mix(self, other: Self) -> Self {
        self.lerp(other, 0.5)
    }
}
