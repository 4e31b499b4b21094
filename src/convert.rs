//! Every pairwise conversion, built by chaining the single-step conversions in the other modules.
//!
//! The chain runs sRGB → linear RGB → XYZ → CIELUV → CIELCh(uv) → HSLuv / HPLuv, and each function
//! here just walks the relevant stretch of it, forwards or backwards. Function names use `srgb` for
//! gamma-encoded RGB, `lrgb` for linear RGB, and `hex` for the `#rrggbb` notation of sRGB.
//!
//! # Example
//! ```
//! # use hsluv::coord::Coord;
//! # use hsluv::convert::{hsluv_to_srgb, srgb_to_hsluv};
//! let gray = Coord::new(0.5, 0.5, 0.5);
//! let hsluv = srgb_to_hsluv(gray);
//! // grays have no hue and no saturation
//! assert_eq!(hsluv.x, 0.);
//! assert!(hsluv.y.abs() <= 1e-9);
//! assert!(hsluv_to_srgb(hsluv).approx_equal(&gray, 1e-9));
//! ```

use coord::Coord;
use hsluv::{hpluv_to_lch, hsluv_to_lch, lch_to_hpluv, lch_to_hsluv};
use lch::{lch_to_luv, luv_to_lch};
use luv::{luv_to_xyz, xyz_to_luv};

pub use hex::{hex_to_srgb, srgb_to_hex};
pub use matrix::{lrgb_to_xyz, xyz_to_lrgb};
pub use transfer::{lrgb_to_srgb, srgb_to_lrgb};

// linear RGB

/// CIELUV to linear RGB.
pub fn luv_to_lrgb(luv: Coord) -> Coord {
    xyz_to_lrgb(luv_to_xyz(luv))
}

/// Linear RGB to CIELUV.
pub fn lrgb_to_luv(lrgb: Coord) -> Coord {
    xyz_to_luv(lrgb_to_xyz(lrgb))
}

/// CIELCh(uv) to linear RGB.
pub fn lch_to_lrgb(lch: Coord) -> Coord {
    luv_to_lrgb(lch_to_luv(lch))
}

/// Linear RGB to CIELCh(uv).
pub fn lrgb_to_lch(lrgb: Coord) -> Coord {
    luv_to_lch(lrgb_to_luv(lrgb))
}

/// HSLuv to linear RGB.
pub fn hsluv_to_lrgb(hsluv: Coord) -> Coord {
    lch_to_lrgb(hsluv_to_lch(hsluv))
}

/// Linear RGB to HSLuv.
pub fn lrgb_to_hsluv(lrgb: Coord) -> Coord {
    lch_to_hsluv(lrgb_to_lch(lrgb))
}

/// HPLuv to linear RGB.
pub fn hpluv_to_lrgb(hpluv: Coord) -> Coord {
    lch_to_lrgb(hpluv_to_lch(hpluv))
}

/// Linear RGB to HPLuv.
pub fn lrgb_to_hpluv(lrgb: Coord) -> Coord {
    lch_to_hpluv(lrgb_to_lch(lrgb))
}

// sRGB

/// CIE XYZ to sRGB.
pub fn xyz_to_srgb(xyz: Coord) -> Coord {
    lrgb_to_srgb(xyz_to_lrgb(xyz))
}

/// sRGB to CIE XYZ.
pub fn srgb_to_xyz(srgb: Coord) -> Coord {
    lrgb_to_xyz(srgb_to_lrgb(srgb))
}

/// CIELUV to sRGB.
pub fn luv_to_srgb(luv: Coord) -> Coord {
    lrgb_to_srgb(luv_to_lrgb(luv))
}

/// sRGB to CIELUV.
pub fn srgb_to_luv(srgb: Coord) -> Coord {
    lrgb_to_luv(srgb_to_lrgb(srgb))
}

/// CIELCh(uv) to sRGB.
pub fn lch_to_srgb(lch: Coord) -> Coord {
    lrgb_to_srgb(lch_to_lrgb(lch))
}

/// sRGB to CIELCh(uv).
pub fn srgb_to_lch(srgb: Coord) -> Coord {
    lrgb_to_lch(srgb_to_lrgb(srgb))
}

/// HSLuv to sRGB.
pub fn hsluv_to_srgb(hsluv: Coord) -> Coord {
    lrgb_to_srgb(hsluv_to_lrgb(hsluv))
}

/// sRGB to HSLuv.
pub fn srgb_to_hsluv(srgb: Coord) -> Coord {
    lrgb_to_hsluv(srgb_to_lrgb(srgb))
}

/// HPLuv to sRGB.
pub fn hpluv_to_srgb(hpluv: Coord) -> Coord {
    lrgb_to_srgb(hpluv_to_lrgb(hpluv))
}

/// sRGB to HPLuv.
pub fn srgb_to_hpluv(srgb: Coord) -> Coord {
    lrgb_to_hpluv(srgb_to_lrgb(srgb))
}

// hex: malformed strings decode as black, like `hex_to_srgb`

/// Linear RGB to `#rrggbb`.
pub fn lrgb_to_hex(lrgb: Coord) -> String {
    srgb_to_hex(lrgb_to_srgb(lrgb))
}

/// `#rrggbb` to linear RGB.
pub fn hex_to_lrgb(hex: &str) -> Coord {
    srgb_to_lrgb(hex_to_srgb(hex))
}

/// CIE XYZ to `#rrggbb`.
pub fn xyz_to_hex(xyz: Coord) -> String {
    srgb_to_hex(xyz_to_srgb(xyz))
}

/// `#rrggbb` to CIE XYZ.
pub fn hex_to_xyz(hex: &str) -> Coord {
    srgb_to_xyz(hex_to_srgb(hex))
}

/// CIELUV to `#rrggbb`.
pub fn luv_to_hex(luv: Coord) -> String {
    srgb_to_hex(luv_to_srgb(luv))
}

/// `#rrggbb` to CIELUV.
pub fn hex_to_luv(hex: &str) -> Coord {
    srgb_to_luv(hex_to_srgb(hex))
}

/// CIELCh(uv) to `#rrggbb`.
pub fn lch_to_hex(lch: Coord) -> String {
    srgb_to_hex(lch_to_srgb(lch))
}

/// `#rrggbb` to CIELCh(uv).
pub fn hex_to_lch(hex: &str) -> Coord {
    srgb_to_lch(hex_to_srgb(hex))
}

/// HSLuv to `#rrggbb`. Like every hex encoding here this truncates, so a channel that comes back
/// from the float math as 0.9999999999999997 is written as `fe`, not `ff`.
/// # Example
/// ```
/// # use hsluv::coord::Coord;
/// # use hsluv::convert::{hex_to_hsluv, hsluv_to_hex};
/// # use hsluv::hex::hex_to_srgb;
/// assert_eq!(hsluv_to_hex(Coord::new(0., 0., 0.)), "#000000");
/// let back = hex_to_srgb(&hsluv_to_hex(hex_to_hsluv("#3a7bd5")));
/// assert!(back.approx_equal(&hex_to_srgb("#3a7bd5"), 1.5 / 255.));
/// ```
pub fn hsluv_to_hex(hsluv: Coord) -> String {
    srgb_to_hex(hsluv_to_srgb(hsluv))
}

/// `#rrggbb` to HSLuv.
pub fn hex_to_hsluv(hex: &str) -> Coord {
    srgb_to_hsluv(hex_to_srgb(hex))
}

/// HPLuv to `#rrggbb`.
pub fn hpluv_to_hex(hpluv: Coord) -> String {
    srgb_to_hex(hpluv_to_srgb(hpluv))
}

/// `#rrggbb` to HPLuv.
pub fn hex_to_hpluv(hex: &str) -> Coord {
    srgb_to_hpluv(hex_to_srgb(hex))
}
