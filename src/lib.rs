//! HSLuv and HPLuv are human-friendly alternatives to HSL. Plain HSL is a cheap reshaping of the
//! sRGB cube, so its lightness and saturation say very little about how a color actually looks: a
//! "50% lightness" yellow and a "50% lightness" blue are nowhere near each other in perceived
//! brightness. HSLuv keeps the familiar hue/saturation/lightness controls but builds them on top of
//! CIELUV, a space designed to approach perceptual uniformity, and then stretches chroma so that
//! every (hue, lightness) pair has a full 0-100 saturation range that stays inside the sRGB gamut.
//!
//! Every conversion in this crate walks the same colorimetric chain:
//!
//! sRGB → linear RGB → CIE XYZ (D65) → CIELUV → CIELCh(uv) → HSLuv / HPLuv
//!
//! and back. The free functions in [`convert`] expose every pairwise shortcut over the plain
//! [`Coord`](coord::Coord) triple; the typed structs in [`colors`] and [`color`] wrap the same math
//! behind the [`Color`](color::Color) trait, so that `rgb.convert::<HSLuvColor>()` just works.
//!
//! The only part of this with real algorithmic content is [`bound`]: for a given lightness, it
//! finds the six lines that bound the sRGB gamut in the CIELUV chroma plane and uses them to find
//! the largest chroma that is still displayable.

#![doc(html_root_url = "https://docs.rs/hsluv/0.1.0")]
// we don't mess around with documentation
#![deny(missing_docs)]
// Clippy doesn't like long decimals, but adding separators in decimals isn't any more readable
// compare -0.96924363628087983 with -0.969_243_636_280_879_83
#![allow(clippy::unreadable_literal)]
#![allow(clippy::excessive_precision)]

extern crate float_cmp;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
extern crate num;
extern crate regex;
extern crate serde;
#[macro_use]
extern crate serde_derive;

pub mod bound;
pub mod color;
pub mod colors;
mod consts;
pub mod convert;
pub mod coord;
pub mod hex;
pub mod hsluv;
pub mod lch;
pub mod luv;
pub mod matrix;
pub mod mix;
pub mod prelude;
pub mod space;
pub mod transfer;
