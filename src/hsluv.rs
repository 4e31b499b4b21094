//! HSLuv and HPLuv, the two saturation-normalized views of CIELCh(uv).
//!
//! Both keep CIELCh's lightness and hue and replace chroma with a percentage of the largest chroma
//! sRGB can show. HSLuv measures against the exact gamut boundary for the color's own lightness
//! and hue, so 100% saturation is always the most vivid displayable color at that hue, but equal
//! saturations at different hues can look very different in colorfulness. HPLuv measures against
//! the largest chroma that's safe for *every* hue at that lightness, so saturation means the same
//! thing all the way around the hue circle, at the cost of never reaching the most vivid colors
//! (saturations over 100 are possible and simply leave the gamut).
//!
//! The conversions are each other's inverses except at a few points where a component is
//! meaningless and is reset rather than preserved:
//! - black and white (lightness within 2^-13 of 0 or 100) have no saturation, and no chroma
//! - colors with no chroma or no saturation have hue 0

use bound::{max_chroma_for_lh, max_safe_chroma_for_l};
use consts::{too_small, too_small_or_almost_100};
use coord::Coord;

/// Converts CIELCh(uv) `(L, C, h)` to HSLuv `(h, s, l)`.
/// # Example
/// ```
/// # use hsluv::coord::Coord;
/// # use hsluv::hsluv::lch_to_hsluv;
/// // black: saturation and hue are both undefined, and come out as 0
/// let black = lch_to_hsluv(Coord::new(0., 0., 0.));
/// assert_eq!(black, Coord::new(0., 0., 0.));
/// ```
pub fn lch_to_hsluv(lch: Coord) -> Coord {
    let (l, c, h) = (lch.x, lch.y, lch.z);
    let s = if too_small_or_almost_100(l) {
        0.0
    } else {
        c * 100.0 / max_chroma_for_lh(l, h)
    };
    let h = if too_small(c) { 0.0 } else { h };
    Coord::new(h, s, l)
}

/// Converts HSLuv `(h, s, l)` to CIELCh(uv) `(L, C, h)`.
pub fn hsluv_to_lch(hsluv: Coord) -> Coord {
    let (h, s, l) = (hsluv.x, hsluv.y, hsluv.z);
    let c = if too_small_or_almost_100(l) {
        0.0
    } else {
        max_chroma_for_lh(l, h) * s / 100.0
    };
    let h = if too_small(s) { 0.0 } else { h };
    Coord::new(l, c, h)
}

/// Converts CIELCh(uv) `(L, C, h)` to HPLuv `(h, p, l)`.
pub fn lch_to_hpluv(lch: Coord) -> Coord {
    let (l, c, h) = (lch.x, lch.y, lch.z);
    let p = if too_small_or_almost_100(l) {
        0.0
    } else {
        c * 100.0 / max_safe_chroma_for_l(l)
    };
    let h = if too_small(c) { 0.0 } else { h };
    Coord::new(h, p, l)
}

/// Converts HPLuv `(h, p, l)` to CIELCh(uv) `(L, C, h)`.
pub fn hpluv_to_lch(hpluv: Coord) -> Coord {
    let (h, p, l) = (hpluv.x, hpluv.y, hpluv.z);
    let c = if too_small_or_almost_100(l) {
        0.0
    } else {
        max_safe_chroma_for_l(l) * p / 100.0
    };
    let h = if too_small(p) { 0.0 } else { h };
    Coord::new(l, c, h)
}
