//! This module describes the edge of the sRGB gamut as it appears in the CIELUV chroma plane, and
//! uses it to answer the one question HSLuv and HPLuv need: how much chroma can a color of a given
//! lightness (and, for HSLuv, hue) have before some RGB channel leaves the 0-1 range?
//!
//! Fix the lightness L. Each linear RGB channel is then a function of u and v alone, and the set of
//! (u, v) where a channel is exactly 0, or exactly 1, is a straight line. Three channels with two
//! limits each give six lines, and the region they enclose around the gray axis is the slice of
//! the sRGB gamut at that lightness: a convex hexagon (or, near black and white, a tiny sliver of
//! one). Everything here is closed-form; there's no searching or iteration.
//!
//! ```
//! # use hsluv::bound::{max_chroma_for_lh, max_safe_chroma_for_l};
//! let l = 60.;
//! let circle = max_safe_chroma_for_l(l);
//! // the inscribed circle never reaches past the hexagon, whichever way you look
//! for h in 0..360 {
//!     assert!(circle <= max_chroma_for_lh(l, h as f64) + 1e-9);
//! }
//! ```

use consts::{EPSILON, KAPPA, XYZ_TO_LRGB};

/// A ray that never meets a boundary line going forwards is given this length, which is longer
/// than any real sRGB chroma, so it always loses to the lines the ray does cross.
const RAY_MISS_LENGTH: f64 = 1000.0;

/// A line `v = slope * u + intercept` in the CIELUV chroma plane at some fixed lightness, along
/// which one linear RGB channel is exactly 0 or exactly 1.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundLine {
    /// The slope of the line, dv/du.
    pub slope: f64,
    /// Where the line crosses the v axis.
    pub intercept: f64,
}

impl BoundLine {
    /// The squared distance from the gray axis (the origin of the chroma plane) to the closest
    /// point on this line: the foot of the perpendicular `v = -u / slope` dropped from the origin.
    fn distance_from_origin_squared(&self) -> f64 {
        let u = self.intercept / (-1.0 / self.slope - self.slope);
        let v = self.intercept + u * self.slope;
        u * u + v * v
    }

    /// The distance from the gray axis to the closest point on this line.
    pub fn distance_from_origin(&self) -> f64 {
        self.distance_from_origin_squared().sqrt()
    }

    /// Casts a ray from the origin with the given hue angle, in radians, and returns how far along
    /// it the line is crossed. A negative result means the line is behind the ray; a non-finite
    /// one means the ray is parallel to it.
    pub fn ray_length(&self, theta: f64) -> f64 {
        self.ray_length_with(theta.sin(), -theta.cos())
    }

    // solves intercept + slope * (len * cos) = len * sin for len
    fn ray_length_with(&self, sin: f64, neg_cos: f64) -> f64 {
        self.intercept / (sin + neg_cos * self.slope)
    }
}

/// The L-independent part of the two lines belonging to one row of the XYZ to linear RGB matrix.
#[derive(Debug, Copy, Clone)]
struct RowCoefficients {
    // numerator of the slope
    k: f64,
    // denominator of the slope
    d: f64,
    // intercept per unit of lightness
    a: f64,
}

impl RowCoefficients {
    fn from_row(m: &[f64; 3]) -> RowCoefficients {
        let kd = 1.0 / 126452.0;
        RowCoefficients {
            k: (3.0 * m[0] - m[2]) * 94839.0 * kd,
            d: 5.0 * m[2] - m[1],
            a: (731718.0 * m[0] + 769860.0 * m[1] + 838422.0 * m[2]) * kd,
        }
    }

    /// The line where this channel is 0. Its slope doesn't depend on lightness at all.
    fn zero_line(&self, l: f64) -> BoundLine {
        BoundLine {
            slope: self.k / self.d,
            intercept: self.a * l / self.d,
        }
    }

    /// The line where this channel is 1, given the relative luminance `y` matching `l`.
    fn one_line(&self, l: f64, y: f64) -> BoundLine {
        let denom = self.d * y + 1.0;
        BoundLine {
            slope: self.k * y / denom,
            intercept: l * (self.a * y - 769860.0 / 126452.0) / denom,
        }
    }
}

lazy_static! {
    static ref ROW_COEFFICIENTS: [RowCoefficients; 3] = [
        RowCoefficients::from_row(&XYZ_TO_LRGB[0]),
        RowCoefficients::from_row(&XYZ_TO_LRGB[1]),
        RowCoefficients::from_row(&XYZ_TO_LRGB[2]),
    ];
}

/// Returns the six lines that bound the sRGB gamut in the chroma plane at lightness `l`. They come
/// in channel order (red, green, blue), and for each channel the line where it's 0 comes before
/// the line where it's 1.
/// # Example
/// ```
/// # use hsluv::bound::get_bounds;
/// let bounds = get_bounds(50.);
/// assert_eq!(bounds.len(), 6);
/// // the gray axis is inside the gamut, so no line passes through it
/// assert!(bounds.iter().all(|line| line.intercept != 0.));
/// ```
pub fn get_bounds(l: f64) -> [BoundLine; 6] {
    // relative luminance for this lightness, using the same two branches as CIELUV
    let sub1 = (l + 16.0).powi(3) / 1560896.0;
    let sub2 = if sub1 > EPSILON { sub1 } else { l / KAPPA };

    let rows = &*ROW_COEFFICIENTS;
    [
        rows[0].zero_line(l),
        rows[0].one_line(l, sub2),
        rows[1].zero_line(l),
        rows[1].one_line(l, sub2),
        rows[2].zero_line(l),
        rows[2].one_line(l, sub2),
    ]
}

/// The largest chroma that is inside the sRGB gamut at lightness `l` for every hue at once: the
/// radius of the biggest circle around the gray axis that fits in the gamut's hexagon. This is
/// what HPLuv measures saturation against.
pub fn max_safe_chroma_for_l(l: f64) -> f64 {
    get_bounds(l)
        .iter()
        .map(BoundLine::distance_from_origin_squared)
        .fold(::std::f64::INFINITY, f64::min)
        .sqrt()
}

/// The largest chroma that is inside the sRGB gamut at lightness `l` and hue `h` (in degrees): how
/// far a ray from the gray axis in that direction travels before it leaves the hexagon. This is
/// what HSLuv measures saturation against.
/// # Example
/// ```
/// # use hsluv::bound::max_chroma_for_lh;
/// // somewhere around 137.6 for a mid-lightness red-pink
/// assert!((max_chroma_for_lh(50., 0.) - 137.61884523630928).abs() <= 1e-9);
/// ```
pub fn max_chroma_for_lh(l: f64, h: f64) -> f64 {
    let theta = h.to_radians();
    let (sin, neg_cos) = (theta.sin(), -theta.cos());
    get_bounds(l)
        .iter()
        .map(|line| {
            let length = line.ray_length_with(sin, neg_cos);
            if length < 0.0 {
                RAY_MISS_LENGTH
            } else {
                length
            }
        })
        .fold(::std::f64::INFINITY, f64::min)
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use coord::Coord;
    use lch::lch_to_luv;
    use luv::luv_to_xyz;
    use matrix::xyz_to_lrgb;

    fn lrgb_for_lch(l: f64, c: f64, h: f64) -> Coord {
        xyz_to_lrgb(luv_to_xyz(lch_to_luv(Coord::new(l, c, h))))
    }

    fn in_gamut(rgb: Coord, tolerance: f64) -> bool {
        [rgb.x, rgb.y, rgb.z]
            .iter()
            .all(|&c| c >= -tolerance && c <= 1.0 + tolerance)
    }

    #[test]
    fn test_lines_are_where_channels_saturate() {
        for &l in &[5.0, 30.0, 50.0, 85.0] {
            let bounds = get_bounds(l);
            for (i, line) in bounds.iter().enumerate() {
                // any point on the line pins its channel to 0 or 1
                let u = 10.0;
                let v = line.slope * u + line.intercept;
                let rgb = xyz_to_lrgb(luv_to_xyz(Coord::new(l, u, v)));
                let channel = [rgb.x, rgb.y, rgb.z][i / 2];
                let target = (i % 2) as f64;
                assert!((channel - target).abs() <= 1e-9);
            }
        }
    }

    #[test]
    fn test_safe_chroma_values() {
        assert!((max_safe_chroma_for_l(1.0) - 0.7880625207108592).abs() <= 1e-9);
        assert!((max_safe_chroma_for_l(50.0) - 39.40312603554297).abs() <= 1e-9);
        assert!((max_safe_chroma_for_l(90.0) - 22.173292644852424).abs() <= 1e-9);
        assert!((max_safe_chroma_for_l(99.0) - 2.068809265446936).abs() <= 1e-9);
    }

    #[test]
    fn test_max_chroma_values() {
        assert!((max_chroma_for_lh(50.0, 120.0) - 68.87542338630008).abs() <= 1e-9);
        assert!((max_chroma_for_lh(75.0, 250.0) - 66.71390604720563).abs() <= 1e-9);
        assert!((max_chroma_for_lh(5.0, 40.0) - 7.535716540096453).abs() <= 1e-9);
    }

    #[test]
    fn test_max_chroma_is_on_gamut_edge() {
        for &l in &[2.0, 10.0, 35.0, 50.0, 72.0, 98.0] {
            for h in (0..360).filter(|h| h % 15 == 0) {
                let h = h as f64;
                let c = max_chroma_for_lh(l, h);
                assert!(c.is_finite() && c >= 0.0);
                // just inside is displayable, just outside isn't
                assert!(in_gamut(lrgb_for_lch(l, c * 0.999, h), 1e-9));
                assert!(!in_gamut(lrgb_for_lch(l, c * 1.001, h), 1e-9));
            }
        }
    }

    #[test]
    fn test_primary_reaches_its_bound() {
        // pure red, in LCh
        let red = Coord::new(53.23711559542937, 179.03809692362097, 12.177050630061162);
        assert!((max_chroma_for_lh(red.x, red.z) - red.y).abs() <= 1e-6);
    }

    #[test]
    fn test_circle_inside_hexagon() {
        for &l in &[0.5, 8.0, 20.0, 50.0, 80.0, 99.5] {
            let circle = max_safe_chroma_for_l(l);
            assert!(circle > 0.0 && circle.is_finite());
            for h in 0..360 {
                assert!(circle <= max_chroma_for_lh(l, h as f64) + 1e-9);
            }
        }
    }

    #[test]
    fn test_zero_lightness() {
        assert_eq!(max_safe_chroma_for_l(0.0), 0.0);
        let bounds = get_bounds(0.0);
        assert!(bounds.iter().all(|line| line.intercept == 0.0));
    }

    #[test]
    fn test_line_geometry() {
        let line = BoundLine {
            slope: 1.0,
            intercept: 2.0,
        };
        // v = u + 2 is sqrt(2) away from the origin
        assert!((line.distance_from_origin() - 2.0f64.sqrt()).abs() <= 1e-12);
        // straight up the v axis, the line is hit at v = 2
        assert!((line.ray_length(90.0f64.to_radians()) - 2.0).abs() <= 1e-12);
        // straight down it's behind us
        assert!(line.ray_length(270.0f64.to_radians()) < 0.0);
        let flat = BoundLine {
            slope: 0.0,
            intercept: -3.0,
        };
        assert!((flat.distance_from_origin() - 3.0).abs() <= 1e-12);
    }
}
