//! The `#rrggbb` hex notation for sRGB colors.
//!
//! Encoding scales each channel by 255 and *truncates*, so it never rounds a channel up to the next
//! byte; channels outside 0-1 are pinned to `00` or `ff` so the output is always exactly seven
//! characters. Decoding is strict about the shape (exactly seven characters, a leading `#`, six hex
//! digits in either case) and never does a partial parse. [`parse_hex`] reports what went wrong;
//! [`hex_to_srgb`] and [`hex_to_srgb_or`] swallow the error and hand back a default color instead.

use std::error::Error;
use std::fmt;

use regex::Regex;

use coord::Coord;

lazy_static! {
    static ref HEX_PATTERN: Regex =
        Regex::new(r"^#([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$").unwrap();
}

/// An error in parsing a `#rrggbb` hex string.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum HexParseError {
    /// The string isn't exactly seven characters long.
    InvalidLength,
    /// The string doesn't start with `#`.
    MissingHash,
    /// Something after the `#` isn't a hex digit.
    InvalidDigit,
}

impl fmt::Display for HexParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let msg = match *self {
            HexParseError::InvalidLength => "hex color must be exactly 7 characters",
            HexParseError::MissingHash => "hex color must start with '#'",
            HexParseError::InvalidDigit => "hex color contains a non-hex digit",
        };
        f.write_str(msg)
    }
}

impl Error for HexParseError {}

/// Displays an sRGB coordinate as `#rrggbb`, lowercase. This is what [`srgb_to_hex`] and
/// [`write_hex`] use, and it's handy on its own inside `format!`.
/// # Example
/// ```
/// # use hsluv::coord::Coord;
/// # use hsluv::hex::Hex;
/// let orange = Coord::new(1., 0.5, 0.);
/// assert_eq!(format!("color: {}", Hex(orange)), "color: #ff7f00");
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Hex(pub Coord);

// truncation, not rounding; `as` saturates out-of-range values and sends NaN to 0
fn to_byte(c: f64) -> u8 {
    (c * 255.0) as u8
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Hex(rgb) = *self;
        write!(
            f,
            "#{:02x}{:02x}{:02x}",
            to_byte(rgb.x),
            to_byte(rgb.y),
            to_byte(rgb.z)
        )
    }
}

/// Encodes an sRGB color as a new `#rrggbb` string.
/// # Example
/// ```
/// # use hsluv::coord::Coord;
/// # use hsluv::hex::srgb_to_hex;
/// assert_eq!(srgb_to_hex(Coord::new(1., 0., 0.)), "#ff0000");
/// ```
pub fn srgb_to_hex(srgb: Coord) -> String {
    Hex(srgb).to_string()
}

/// Encodes an sRGB color as `#rrggbb` into a buffer the caller owns, so repeated encoding doesn't
/// need a fresh allocation each time.
pub fn write_hex<W: fmt::Write>(srgb: Coord, out: &mut W) -> fmt::Result {
    write!(out, "{}", Hex(srgb))
}

/// Decodes a `#rrggbb` string (either case) into an sRGB color with channels in 0-1.
/// # Errors
/// Returns the first problem found, checking the length, then the `#`, then the digits.
pub fn parse_hex(hex: &str) -> Result<Coord, HexParseError> {
    if hex.chars().count() != 7 {
        return Err(HexParseError::InvalidLength);
    }
    if !hex.starts_with('#') {
        return Err(HexParseError::MissingHash);
    }
    let caps = HEX_PATTERN
        .captures(hex)
        .ok_or(HexParseError::InvalidDigit)?;
    let channel = |i: usize| -> Result<f64, HexParseError> {
        let digits = caps.get(i).ok_or(HexParseError::InvalidDigit)?;
        let byte =
            u8::from_str_radix(digits.as_str(), 16).map_err(|_| HexParseError::InvalidDigit)?;
        Ok(f64::from(byte) / 255.0)
    };
    Ok(Coord::new(channel(1)?, channel(2)?, channel(3)?))
}

/// Decodes a `#rrggbb` string, giving back `default` if it's malformed.
pub fn hex_to_srgb_or(hex: &str, default: Coord) -> Coord {
    match parse_hex(hex) {
        Ok(rgb) => rgb,
        Err(e) => {
            debug!("using default {:?} for hex color {:?}: {}", default, hex, e);
            default
        }
    }
}

/// Decodes a `#rrggbb` string, giving back black (all zeros) if it's malformed.
/// # Example
/// ```
/// # use hsluv::coord::Coord;
/// # use hsluv::hex::hex_to_srgb;
/// assert_eq!(hex_to_srgb("#ffffff"), Coord::new(1., 1., 1.));
/// assert_eq!(hex_to_srgb("bad"), Coord::new(0., 0., 0.));
/// ```
pub fn hex_to_srgb(hex: &str) -> Coord {
    hex_to_srgb_or(hex, Coord::default())
}
