//! This module implements CIELCh(uv), the polar version of CIELUV: L is untouched, chroma is the
//! distance from the gray axis, and hue is the angle around it in degrees, measured from the +u
//! axis towards +v.
//!
//! Grays have no hue. When chroma is under 2^-13 the hue is reported as exactly 0, which means the
//! hue a color had before it was desaturated is gone for good; converting back can't recover it.

use consts::too_small;
use coord::Coord;

/// Converts CIELUV to CIELCh(uv). The hue is in `[0, 360)`.
/// # Example
///
/// ```
/// # use hsluv::coord::Coord;
/// # use hsluv::lch::luv_to_lch;
/// let lch = luv_to_lch(Coord::new(50., 0., -20.));
/// assert_eq!(lch.y, 20.);
/// assert!((lch.z - 270.).abs() <= 1e-10);
/// ```
pub fn luv_to_lch(luv: Coord) -> Coord {
    let c = luv.y.hypot(luv.z);
    if too_small(c) {
        return Coord::new(luv.x, c, 0.0);
    }

    let unbounded_h = luv.z.atan2(luv.y).to_degrees();
    // atan2 gives (-180, 180]
    let h = if unbounded_h < 0.0 {
        unbounded_h + 360.0
    } else {
        unbounded_h
    };
    Coord::new(luv.x, c, h)
}

/// Converts CIELCh(uv) to CIELUV.
pub fn lch_to_luv(lch: Coord) -> Coord {
    let rad_h = lch.z.to_radians();
    Coord::new(lch.x, rad_h.cos() * lch.y, rad_h.sin() * lch.y)
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_lch_luv_round_trip() {
        for &h in &[0.0, 12.177, 90.0, 179.9, 180.0, 265.87, 359.5] {
            let lch = Coord::new(53.0, 40.0, h);
            let back = luv_to_lch(lch_to_luv(lch));
            assert!((back.x - lch.x).abs() <= 1e-10);
            assert!((back.y - lch.y).abs() <= 1e-10);
            assert!((back.z - lch.z).abs() <= 1e-9);
        }
    }

    #[test]
    fn test_hue_range() {
        let lch = luv_to_lch(Coord::new(60.0, 10.0, -1e-3));
        assert!(lch.z >= 0.0 && lch.z < 360.0);
        assert!(lch.z > 359.0);
    }

    #[test]
    fn test_gray_hue_is_zero() {
        let lch = luv_to_lch(Coord::new(53.5, -0.00001, -0.00005));
        assert_eq!(lch.z, 0.0);
        // the hue is gone after a round trip
        let gray = Coord::new(53.5, 0.0001, 200.0);
        assert_eq!(luv_to_lch(lch_to_luv(gray)).z, 0.0);
    }
}
