//! This module simply brings the most common functionality under a single namespace, to prevent
//! excessive imports. As of now, this prelude includes every trait in the crate, the ubiquitous
//! [`RGBColor`], the associated parse error [`HexParseError`], [`ColorSpace`] for picking a space
//! at runtime, and nothing else. Of particular note is that the other color types found in the
//! [`colors`] module are not included.
//!
//! [`RGBColor`]: ../color/struct.RGBColor.html
//! [`HexParseError`]: ../hex/enum.HexParseError.html
//! [`ColorSpace`]: ../space/enum.ColorSpace.html
//! [`colors`]: ../colors/index.html

pub use color::{Color, RGBColor};
pub use hex::HexParseError;
pub use mix::Mix;
pub use space::ColorSpace;
