//! Arithmetic on hue, which lives on a circle: 359 degrees and 1 degree are two degrees apart, not
//! 358. Everything in here treats hues modulo 360.

/// The threshold, in degrees, [`is_hue_similar`] is used with when nothing more specific applies.
pub const DEFAULT_HUE_THRESHOLD: f64 = 30.0;

/// Returns `true` if two hues are within `threshold` degrees of each other, going either way around
/// the circle. Both hues are expected to be in [0, 360).
///
/// A threshold of 0 only matches identical hues, and a threshold of 180 or more matches everything.
///
/// # Example
/// ```
/// # use closet_harmony::hue::{is_hue_similar, DEFAULT_HUE_THRESHOLD};
/// assert!(is_hue_similar(350., 10., DEFAULT_HUE_THRESHOLD));
/// assert!(!is_hue_similar(350., 10., 5.));
/// ```
pub fn is_hue_similar(h1: f64, h2: f64, threshold: f64) -> bool {
    let diff = (h1 - h2).abs();
    diff <= threshold || diff >= 360.0 - threshold
}

/// Rotates a hue by some number of degrees, positive or negative, landing in [0, 360).
pub fn rotate(hue: f64, degrees: f64) -> f64 {
    let rotated = (hue + degrees).rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if rotated >= 360.0 {
        0.0
    } else {
        rotated
    }
}

/// The shortest distance between two hues around the circle, between 0 and 180.
pub fn distance(h1: f64, h2: f64) -> f64 {
    let diff = (h1 - h2).rem_euclid(360.0);
    diff.min(360.0 - diff)
}
