//! This module contains a struct, [`Coord`](coord::Coord), that models a 3D coordinate space and
//! supports limited math in 3 dimensions with scalars and other coordinates. Every color space in
//! this crate is a different reading of the same three numbers, so every conversion function takes
//! and returns a `Coord` and leaves the interpretation of the axes to the function's name.

use std::ops::{Add, Div, Mul, Sub};

use float_cmp::ApproxEq;
use num;
use num::{Num, NumCast};

/// Represents a scalar value that can be easily converted, described using the common numeric traits
/// in [`num`]. Anything that falls under this category can be multiplied by a [`Coord`] to scale
/// it. This has no added functionality: it's just for convenience.
pub trait Scalar: NumCast + Num {}

impl<T: NumCast + Num> Scalar for T {}

/// A point in 3D space, and the one value type every conversion in this crate works on.
/// `Coord` has three axes, denoted `x`, `y`, and `z`, and the meaning of each depends on the color
/// space the coordinate is in:
///
/// | space | x | y | z |
/// |---|---|---|---|
/// | sRGB, linear RGB | r | g | b |
/// | CIE XYZ | X | Y | Z |
/// | CIELUV | L | u | v |
/// | CIELCh(uv) | L | C | h |
/// | HSLuv, HPLuv | h | s | l |
///
/// Components are never clamped: values outside the nominal range of a space pass straight through
/// every formula, and it's up to the caller to clamp before display.
///
/// # Examples
/// ## Basic Operations
/// ```
/// # use hsluv::coord::Coord;
/// let point_1 = Coord{x: 1., y: 8., z: 7.};
/// let point_2 = Coord{x: 7., y: 2., z: 3.};
/// // Add two points together to do componentwise addition.
/// let sum = point_1 + point_2;  // the point (8, 10, 10)
/// // Subtract two points the same way.
/// let diff = point_1 - point_2;  // the point (-6, 6, 4)
/// // Scalar multiplication and division work with any numeric type, on the right.
/// let prod = point_1 * 2u8; // the point (2, 16, 14)
/// let quot = point_1 / 2.; // the point (0.5, 4, 3.5)
/// assert_eq!(prod, Coord{x: 2., y: 16., z: 14.});
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
pub struct Coord {
    /// The first axis.
    pub x: f64,
    /// The second axis.
    pub y: f64,
    /// The third axis.
    pub z: f64,
}

impl Add for Coord {
    type Output = Coord;
    fn add(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub for Coord {
    type Output = Coord;
    fn sub(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

// Scalars that don't fit in an f64 scale to NaN rather than panicking, the same way any other
// out-of-domain float would propagate.
impl<U: Scalar> Mul<U> for Coord {
    type Output = Coord;
    fn mul(self, rhs: U) -> Coord {
        let r: f64 = num::cast(rhs).unwrap_or(::std::f64::NAN);
        Coord {
            x: self.x * r,
            y: self.y * r,
            z: self.z * r,
        }
    }
}

impl<U: Scalar> Div<U> for Coord {
    type Output = Coord;
    fn div(self, rhs: U) -> Coord {
        let r: f64 = num::cast(rhs).unwrap_or(::std::f64::NAN);
        Coord {
            x: self.x / r,
            y: self.y / r,
            z: self.z / r,
        }
    }
}

impl From<[f64; 3]> for Coord {
    fn from(arr: [f64; 3]) -> Coord {
        Coord {
            x: arr[0],
            y: arr[1],
            z: arr[2],
        }
    }
}

impl From<(f64, f64, f64)> for Coord {
    fn from(tup: (f64, f64, f64)) -> Coord {
        Coord {
            x: tup.0,
            y: tup.1,
            z: tup.2,
        }
    }
}

impl From<Coord> for [f64; 3] {
    fn from(c: Coord) -> [f64; 3] {
        [c.x, c.y, c.z]
    }
}

impl From<Coord> for (f64, f64, f64) {
    fn from(c: Coord) -> (f64, f64, f64) {
        (c.x, c.y, c.z)
    }
}

impl Coord {
    /// Builds a new `Coord` from its three components, in axis order.
    pub fn new(x: f64, y: f64, z: f64) -> Coord {
        Coord { x, y, z }
    }
    /// Applies the same function to every component, returning a new Coord.
    pub fn map<F: Fn(f64) -> f64>(self, f: F) -> Coord {
        Coord {
            x: f(self.x),
            y: f(self.y),
            z: f(self.z),
        }
    }
    /// The dot product of two points treated as vectors from the origin.
    pub fn dot(&self, other: &Coord) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
    /// The midpoint between two 3D points: returns a new Coord.
    /// # Example
    /// ```
    /// # use hsluv::coord::Coord;
    /// let point1 = Coord{x: 0.25, y: 0., z: 1.};
    /// let point2 = Coord{x: 0.75, y: 1., z: 1.};
    /// let mid = point1.midpoint(&point2);
    /// assert!((mid.x - 0.5).abs() <= 1e-10);
    /// assert!((mid.y - 0.5).abs() <= 1e-10);
    /// assert!((mid.z - 1.).abs() <= 1e-10);
    /// ```
    pub fn midpoint(&self, other: &Coord) -> Coord {
        self.lerp(other, 0.5)
    }
    /// The weighted midpoint: like the midpoint, but with weighted averages instead of the arithmetic
    /// mean. Very strange things may happen if the weight is not between 0 and 1. Note that a small
    /// weight moves values further away from the first point (the one calling the method), while a
    /// larger weight moves values away from the second point (the one being passed in).
    /// # Example
    /// ```
    /// # use hsluv::coord::Coord;
    /// let point1 = Coord{x: 0.2, y: 0., z: 1.};
    /// let point2 = Coord{x: 1., y: 0.8, z: 1.};
    /// let mid = point1.weighted_midpoint(&point2, 0.25);
    /// // note how this is not 0.6 because the weight has shifted it towards the second point
    /// assert!((mid.x - 0.8).abs() <= 1e-10);
    /// assert!((mid.y - 0.6).abs() <= 1e-10);
    /// assert!((mid.z - 1.).abs() <= 1e-10);
    /// ```
    pub fn weighted_midpoint(&self, other: &Coord, weight: f64) -> Coord {
        self.lerp(other, 1.0 - weight)
    }
    /// Linear interpolation: `t = 0` gives `self`, `t = 1` gives `other`, and anything in between
    /// moves along the straight line joining them. `t` is not clamped.
    pub fn lerp(&self, other: &Coord, t: f64) -> Coord {
        Coord {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
            z: self.z + (other.z - self.z) * t,
        }
    }
    /// The Euclidean difference between two 3D points, defined as the square root of the sum of
    /// squares of differences in each axis. Even in CIELUV this is only a rough guide to how
    /// different two colors look, and in the cylindrical spaces it's meaningless near the hue seam:
    /// hues of 359 and 1 are two degrees apart, not 358.
    /// # Example
    /// ```
    /// # use hsluv::coord::Coord;
    /// let point1 = Coord{x: 0., y: 0., z: -1.};
    /// let point2 = Coord{x: 2., y: 3., z: 5.};
    /// let dist = point1.euclidean_distance(&point2);
    /// assert!((dist - 7.).abs() <= 1e-10);
    /// ```
    pub fn euclidean_distance(&self, other: &Coord) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2) + (self.z - other.z).powi(2))
            .sqrt()
    }
    /// Returns `true` if every component is within `epsilon` of the other's, or within a few units
    /// in the last place for values where an absolute tolerance is too coarse.
    pub fn approx_equal(&self, other: &Coord, epsilon: f64) -> bool {
        self.x.approx_eq(other.x, (epsilon, 4))
            && self.y.approx_eq(other.y, (epsilon, 4))
            && self.z.approx_eq(other.z, (epsilon, 4))
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_scalar_ops() {
        let point = Coord::new(1.0, -2.0, 4.0);
        assert_eq!(point * 2u8, Coord::new(2.0, -4.0, 8.0));
        assert_eq!(point / 4.0, Coord::new(0.25, -0.5, 1.0));
        // division by zero is just float division by zero
        let inf = point / 0.0;
        assert!(inf.x.is_infinite() && inf.y.is_infinite() && inf.z.is_infinite());
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Coord::new(0.1, 0.2, 0.3);
        let b = Coord::new(0.9, -0.4, 7.0);
        assert_eq!(a.lerp(&b, 0.0), a);
        assert!(a.lerp(&b, 1.0).approx_equal(&b, 1e-12));
        assert!(a.lerp(&b, 0.5).approx_equal(&a.midpoint(&b), 1e-12));
    }

    #[test]
    fn test_tuple_and_array_conversions() {
        let c: Coord = (1.0, 2.0, 3.0).into();
        let arr: [f64; 3] = c.into();
        assert_eq!(arr, [1.0, 2.0, 3.0]);
        let tup: (f64, f64, f64) = Coord::from([4.0, 5.0, 6.0]).into();
        assert_eq!(tup, (4.0, 5.0, 6.0));
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Coord::default(), Coord::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_approx_equal() {
        let a = Coord::new(1.0, 2.0, 3.0);
        assert!(a.approx_equal(&Coord::new(1.0 + 1e-9, 2.0, 3.0 - 1e-9), 1e-8));
        assert!(!a.approx_equal(&Coord::new(1.1, 2.0, 3.0), 1e-8));
    }
}
