//! This file provides the constants shared by the whole conversion chain: the sRGB primary
//! matrices, the CIELUV reference white, and the thresholds that decide which branch of a piecewise
//! formula applies or when a component is considered degenerate. They're all fixed for sRGB with a
//! D65 white point; nothing here is configurable at runtime.

/// CIE XYZ (D65) to linear sRGB, row-major. Rows are the R, G, and B channels.
// https://en.wikipedia.org/wiki/SRGB#Specification_of_the_transformation
pub(crate) const XYZ_TO_LRGB: [[f64; 3]; 3] = [
    [3.2409699419045214, -1.5373831775700935, -0.49861076029300328],
    [-0.96924363628087983, 1.8759675015077207, 0.041555057407175613],
    [0.055630079696993609, -0.20397695888897657, 1.0569715142428786],
];

/// Linear sRGB to CIE XYZ (D65), row-major. Rows are X, Y, and Z.
pub(crate) const LRGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.41239079926595948, 0.35758433938387796, 0.18048078840183429],
    [0.21263900587151036, 0.71516867876775593, 0.072192315360733715],
    [0.019330818715591851, 0.11919477979462599, 0.95053215224966058],
];

/// u' chromaticity of the D65 reference white.
pub(crate) const REF_U: f64 = 0.19783000664283681;
/// v' chromaticity of the D65 reference white.
pub(crate) const REF_V: f64 = 0.468319994938791;

/// (6/29)^3: the relative luminance below which CIE lightness is linear in Y.
pub(crate) const EPSILON: f64 = 0.0088564516790356308;
/// (29/3)^3: the slope of that linear segment.
pub(crate) const KAPPA: f64 = 903.2962962962963;

/// 2^-13. Lightness, chroma, or saturation below this is treated as exactly zero.
pub(crate) const TOO_SMALL: f64 = 0.0001220703125;

/// True if the value is small enough that the components derived from it are meaningless.
pub(crate) fn too_small(v: f64) -> bool {
    v < TOO_SMALL
}

/// True for black and white, where there's no room left for any chroma.
pub(crate) fn too_small_or_almost_100(v: f64) -> bool {
    too_small(v) || v > 100.0 - TOO_SMALL
}
