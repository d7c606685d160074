//! This module contains the alternative color spaces the engine reasons in. Right now that is only
//! HSL: hue is what harmony is defined on, and HSL is the space the catalog's hand-picked colors are
//! most naturally described in.
pub mod hslcolor;

// for convenience, use this namespace for the color objects
pub use self::hslcolor::{hex_to_hsl, HSLColor};
