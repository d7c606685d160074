//! This file turns the free-text color field of a closet item into something the engine can read.
//! People adding clothes write "Navy", "navy ", "#1e3a8a", or "1E3A8A" for the same thing; this
//! module maps all of those onto a single canonical `#RRGGBB` code. The table of names is the usual
//! vocabulary of clothing colors rather than any web or paint standard.

use std::collections::HashMap;

use crate::color::RGBColor;

lazy_static! {
    static ref GARMENT_COLORS: HashMap<&'static str, &'static str> = hashmap! {
        "black" => "#000000",
        "white" => "#FFFFFF",
        "ivory" => "#FFFFF0",
        "cream" => "#FFFDD0",
        "beige" => "#F5F5DC",
        "tan" => "#D2B48C",
        "camel" => "#C19A6B",
        "khaki" => "#C3B091",
        "brown" => "#795548",
        "chocolate" => "#5D4037",
        "gray" => "#808080",
        "grey" => "#808080",
        "charcoal" => "#36454F",
        "silver" => "#C0C0C0",
        "red" => "#FF0000",
        "crimson" => "#DC143C",
        "burgundy" => "#800020",
        "maroon" => "#800000",
        "pink" => "#FFC0CB",
        "blush" => "#FBCFE8",
        "coral" => "#FF7F50",
        "orange" => "#FF8800",
        "rust" => "#B7410E",
        "mustard" => "#FFDB58",
        "yellow" => "#FFFF00",
        "gold" => "#FFD700",
        "olive" => "#808000",
        "green" => "#008000",
        "sage" => "#9CAF88",
        "mint" => "#98FF98",
        "emerald" => "#50C878",
        "teal" => "#008080",
        "turquoise" => "#40E0D0",
        "cyan" => "#00FFFF",
        "sky" => "#87CEEB",
        "blue" => "#0000FF",
        "denim" => "#1560BD",
        "royal" => "#4169E1",
        "navy" => "#000080",
        "indigo" => "#4B0082",
        "purple" => "#800080",
        "lavender" => "#E6E6FA",
        "lilac" => "#C8A2C8",
        "plum" => "#8E4585",
        "magenta" => "#FF00FF",
    };
}

/// Looks up a clothing color by name, ignoring case and surrounding whitespace.
///
/// # Example
/// ```
/// # use closet_harmony::palette::named_color;
/// assert_eq!(named_color(" Navy").unwrap().to_string(), "#000080");
/// assert!(named_color("octarine").is_none());
/// ```
pub fn named_color(name: &str) -> Option<RGBColor> {
    let key = name.trim().to_lowercase();
    GARMENT_COLORS
        .get(key.as_str())
        .and_then(|hex| RGBColor::from_hex_code(hex).ok())
}

/// Canonicalizes a color tag as entered by a user.
///
/// - blank input means the item has no color, and gives `None`;
/// - a hex code, with or without `#` and in any case, becomes uppercase `#RRGGBB`;
/// - a known color name becomes its hex code;
/// - anything else is kept as typed (trimmed), and left for the engine to treat as unreadable.
pub fn normalize_color_tag(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(rgb) = RGBColor::from_hex_code(trimmed) {
        return Some(rgb.to_string());
    }
    match named_color(trimmed) {
        Some(rgb) => Some(rgb.to_string()),
        None => {
            debug!("unrecognized color tag {:?}, keeping as is", trimmed);
            Some(trimmed.to_string())
        }
    }
}
