//! This module brings the most common functionality under a single namespace, to prevent excessive
//! imports: the engine and its output, the closet types, the two color types, and the free functions
//! most callers start from.

pub use crate::closet::{Category, CategoryFilter, Closet, ClosetItem, Wearable};
pub use crate::color::{RGBColor, RGBParseError};
pub use crate::colors::{hex_to_hsl, HSLColor};
pub use crate::config::HarmonyThresholds;
pub use crate::harmony::{classify, Harmony, HarmonyEngine, RecommendationSet};
pub use crate::hue::{is_hue_similar, DEFAULT_HUE_THRESHOLD};
