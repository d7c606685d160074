//! This module defines [`RGBColor`], the color every catalog record is written in, along with the
//! strict hex parser that reads it. Closet records carry their colors as hex triplets such as
//! `#1F2937`, with or without the leading `#` and in either case. Anything that isn't exactly six
//! hex digits is rejected here with an [`RGBParseError`]: the permissive behavior the engine needs is
//! layered on top, in [`hex_to_hsl`](../colors/hslcolor/fn.hex_to_hsl.html), so that callers who do
//! want to know about a bad color still can.

use std::fmt;
use std::str::FromStr;

use regex::Regex;
use thiserror::Error;

lazy_static! {
    // anchored on both ends, so "#FF00001" and " #FF0000" are both rejected
    static ref HEX_CODE_RE: Regex = Regex::new(r"^#?([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$")
        .unwrap();
}

/// An error in reading a hex code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum RGBParseError {
    /// The string was not six hex digits with an optional leading `#`. Carries the offending input.
    #[error("invalid hex code: {0:?}")]
    InvalidHexSyntax(String),
}

/// A color in the sRGB space, with each component stored as a float between 0 and 1. Catalog colors
/// are 8 bits per channel, so in practice every component is some multiple of 1/255, but floats make
/// the conversion into [`HSLColor`](../colors/hslcolor/struct.HSLColor.html) direct.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RGBColor {
    /// The red component, between 0 and 1.
    pub r: f64,
    /// The green component, between 0 and 1.
    pub g: f64,
    /// The blue component, between 0 and 1.
    pub b: f64,
}

impl RGBColor {
    /// Parses a hex code of the form `#rrggbb` or `rrggbb`, case-insensitively.
    ///
    /// # Errors
    /// Returns [`RGBParseError::InvalidHexSyntax`] if the input isn't exactly six hex digits after an
    /// optional `#`. Three-digit shorthand and alpha channels are not accepted.
    ///
    /// # Example
    /// ```
    /// # use closet_harmony::color::RGBColor;
    /// let navy = RGBColor::from_hex_code("#1f2937").unwrap();
    /// assert_eq!(navy.int_rgb_tup(), (31, 41, 55));
    /// assert!(RGBColor::from_hex_code("#fff").is_err());
    /// ```
    pub fn from_hex_code(hex: &str) -> Result<RGBColor, RGBParseError> {
        let caps = HEX_CODE_RE
            .captures(hex)
            .ok_or_else(|| RGBParseError::InvalidHexSyntax(hex.to_string()))?;
        // the regex guarantees each group is exactly two hex digits, so none of these can fail, but
        // the error is mapped anyway rather than unwrapped
        let mut channels = [0u8; 3];
        for (i, channel) in channels.iter_mut().enumerate() {
            *channel = u8::from_str_radix(&caps[i + 1], 16)
                .map_err(|_| RGBParseError::InvalidHexSyntax(hex.to_string()))?;
        }
        Ok(RGBColor::from((channels[0], channels[1], channels[2])))
    }

    /// Returns the components as 8-bit integers, rounding to the nearest value and clamping anything
    /// outside of the 0-1 range.
    pub fn int_rgb_tup(&self) -> (u8, u8, u8) {
        let to_int = |c: f64| (c.max(0.).min(1.) * 255.).round() as u8;
        (to_int(self.r), to_int(self.g), to_int(self.b))
    }

    /// Returns `true` if all three channels are equal: black, white, or a gray in between.
    pub fn is_achromatic(&self) -> bool {
        let (r, g, b) = self.int_rgb_tup();
        r == g && g == b
    }
}

impl From<(u8, u8, u8)> for RGBColor {
    fn from(rgb: (u8, u8, u8)) -> RGBColor {
        let (r, g, b) = rgb;
        RGBColor {
            r: f64::from(r) / 255.,
            g: f64::from(g) / 255.,
            b: f64::from(b) / 255.,
        }
    }
}

impl FromStr for RGBColor {
    type Err = RGBParseError;

    fn from_str(s: &str) -> Result<RGBColor, RGBParseError> {
        RGBColor::from_hex_code(s)
    }
}

/// Formats as an uppercase hex code with a leading `#`, which is also the canonical form colors are
/// stored in after [`normalize_color_tag`](../palette/fn.normalize_color_tag.html).
impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (r, g, b) = self.int_rgb_tup();
        write!(f, "#{:02X}{:02X}{:02X}", r, g, b)
    }
}
