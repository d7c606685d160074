//! This file implements HSL, the cylindrical transformation of sRGB that color harmony is defined
//! on. HSL has all of the perceptual problems sRGB has (a yellow and a blue at the same "lightness"
//! look nothing alike), but it puts hue on its own axis, and hue is the only thing the harmony rules
//! look at. Saturation and lightness are kept so reference swatches can be rendered back into RGB at
//! the same intensity as the color they were derived from.
//!
//! Unlike a lot of HSL implementations, components here are in the units people type into a color
//! picker: hue in degrees from 0 up to (but never reaching) 360, saturation and lightness as
//! percentages from 0 to 100. Gray has no hue; it gets a hue of 0 degrees, the same as pure red.

use crate::color::{RGBColor, RGBParseError};

/// A color in the HSL color space, a direct transformation of the sRGB space.
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HSLColor {
    /// The hue component, as an angle in degrees. Always at least 0 and strictly less than 360 for
    /// colors produced by this crate.
    pub h: f64,
    /// The saturation component, as a percentage between 0 and 100.
    pub s: f64,
    /// The lightness component, as a percentage between 0 and 100. Defined as the average of the
    /// largest and smallest RGB components.
    pub l: f64,
}

impl HSLColor {
    /// Parses a hex code (see [`RGBColor::from_hex_code`]) and converts it into HSL.
    ///
    /// # Errors
    /// Propagates the [`RGBParseError`] for anything that isn't a six-digit hex code.
    pub fn from_hex_code(hex: &str) -> Result<HSLColor, RGBParseError> {
        RGBColor::from_hex_code(hex).map(HSLColor::from)
    }
}

impl From<RGBColor> for HSLColor {
    fn from(rgb: RGBColor) -> HSLColor {
        let RGBColor { r, g, b } = rgb;
        let max_c = r.max(g).max(b);
        let min_c = r.min(g).min(b);
        let lightness = (max_c + min_c) / 2.0;

        if max_c == min_c {
            // gray: hue is undefined and saturation is 0
            return HSLColor {
                h: 0.0,
                s: 0.0,
                l: lightness * 100.0,
            };
        }

        let chroma = max_c - min_c;
        let saturation = if lightness > 0.5 {
            chroma / (2.0 - max_c - min_c)
        } else {
            chroma / (max_c + min_c)
        };

        // six sectors of the hue hexagon, two per primary: the largest channel picks the primary and
        // the other two decide which side of it we're on
        let sector = if max_c == r {
            (g - b) / chroma + if g < b { 6.0 } else { 0.0 }
        } else if max_c == g {
            (b - r) / chroma + 2.0
        } else {
            (r - g) / chroma + 4.0
        };
        let mut hue = sector * 60.0;
        // unreachable from 8-bit hex input, but a hand-built RGBColor with a vanishing blue excess
        // rounds the red sector up to exactly 6
        if hue >= 360.0 {
            hue -= 360.0;
        }

        HSLColor {
            h: hue,
            s: saturation * 100.0,
            l: lightness * 100.0,
        }
    }
}

impl From<HSLColor> for RGBColor {
    fn from(hsl: HSLColor) -> RGBColor {
        let h = hsl.h.rem_euclid(360.0);
        let s = hsl.s / 100.0;
        let l = hsl.l / 100.0;
        // chroma is the distance between the largest and smallest component
        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        // the second-largest component, measured up from the smallest
        let x = chroma * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let (r1, g1, b1) = if h <= 60.0 {
            (chroma, x, 0.0)
        } else if h <= 120.0 {
            (x, chroma, 0.0)
        } else if h <= 180.0 {
            (0.0, chroma, x)
        } else if h <= 240.0 {
            (0.0, x, chroma)
        } else if h <= 300.0 {
            (x, 0.0, chroma)
        } else {
            (chroma, 0.0, x)
        };
        let offset = l - chroma / 2.0;
        RGBColor {
            r: r1 + offset,
            g: g1 + offset,
            b: b1 + offset,
        }
    }
}

/// Converts a hex code into HSL without ever failing: anything that doesn't parse as a six-digit hex
/// code becomes `HSLColor { h: 0, s: 0, l: 0 }`. This is the conversion the harmony engine uses, so
/// that a single mistyped record can't stop a whole closet from being classified.
///
/// # Example
/// ```
/// # use closet_harmony::colors::hex_to_hsl;
/// let cyan = hex_to_hsl("#00FFFF");
/// assert_eq!((cyan.h, cyan.s, cyan.l), (180.0, 100.0, 50.0));
/// let junk = hex_to_hsl("not a color");
/// assert_eq!((junk.h, junk.s, junk.l), (0.0, 0.0, 0.0));
/// ```
pub fn hex_to_hsl(hex: &str) -> HSLColor {
    match HSLColor::from_hex_code(hex) {
        Ok(hsl) => hsl,
        Err(e) => {
            debug!("{}, falling back to default HSL", e);
            HSLColor::default()
        }
    }
}
