//! The recommendation engine. Given a base item and the rest of a closet, [`HarmonyEngine`] sorts the
//! closet into three [`Harmony`] buckets by hue alone:
//!
//! - **monochromatic**: hue close to the base's own;
//! - **complementary**: hue close to the opposite side of the wheel;
//! - **analogous**: hue close to a point a little way around the wheel on either side.
//!
//! The windows overlap once thresholds are widened, so the tests run as an ordered list of rules and
//! the first one a candidate passes decides its bucket. Monochromatic goes first: it's the narrowest
//! window and the most specific match. Candidates that pass no rule are left out entirely.

use std::fmt;

use crate::closet::Wearable;
use crate::color::RGBColor;
use crate::colors::{hex_to_hsl, HSLColor};
use crate::config::HarmonyThresholds;
use crate::hue::{is_hue_similar, rotate};

/// The kinds of color pairing the engine recommends.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Harmony {
    /// Same hue family as the base.
    Monochromatic,
    /// Opposite the base on the color wheel.
    Complementary,
    /// Neighboring the base on the color wheel.
    Analogous,
}

impl Harmony {
    /// Every harmony, in the order rules are evaluated.
    pub const ALL: [Harmony; 3] = [
        Harmony::Monochromatic,
        Harmony::Complementary,
        Harmony::Analogous,
    ];
}

impl fmt::Display for Harmony {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Harmony::Monochromatic => write!(f, "Monochromatic"),
            Harmony::Complementary => write!(f, "Complementary"),
            Harmony::Analogous => write!(f, "Analogous"),
        }
    }
}

/// One step of the classification: a candidate hue passes if it is within `threshold` degrees of
/// any of the `targets`.
#[derive(Debug, Clone, PartialEq)]
pub struct HarmonyRule {
    /// The bucket a passing candidate goes into.
    pub harmony: Harmony,
    /// Reference hues, in degrees.
    pub targets: Vec<f64>,
    /// Maximum circular distance from a target, in degrees.
    pub threshold: f64,
}

impl HarmonyRule {
    /// Whether the given hue passes this rule.
    pub fn matches(&self, hue: f64) -> bool {
        self.targets
            .iter()
            .any(|&target| is_hue_similar(hue, target, self.threshold))
    }
}

/// The engine's output: the candidates that go with the base item, by kind of pairing. Every
/// candidate shows up in at most one bucket, in the same relative order it had in the pool, and the
/// base item itself never shows up at all. An empty set means nothing could be recommended.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationSet<'a, T: 'a> {
    /// Items on the opposite side of the wheel.
    pub complementary: Vec<&'a T>,
    /// Items next to the base on the wheel.
    pub analogous: Vec<&'a T>,
    /// Items in the base's own hue family.
    pub monochromatic: Vec<&'a T>,
}

// derive(Default) would demand T: Default
impl<'a, T> Default for RecommendationSet<'a, T> {
    fn default() -> RecommendationSet<'a, T> {
        RecommendationSet {
            complementary: Vec::new(),
            analogous: Vec::new(),
            monochromatic: Vec::new(),
        }
    }
}

impl<'a, T> RecommendationSet<'a, T> {
    /// The items in one bucket.
    pub fn bucket(&self, harmony: Harmony) -> &[&'a T] {
        match harmony {
            Harmony::Monochromatic => &self.monochromatic,
            Harmony::Complementary => &self.complementary,
            Harmony::Analogous => &self.analogous,
        }
    }

    fn bucket_mut(&mut self, harmony: Harmony) -> &mut Vec<&'a T> {
        match harmony {
            Harmony::Monochromatic => &mut self.monochromatic,
            Harmony::Complementary => &mut self.complementary,
            Harmony::Analogous => &mut self.analogous,
        }
    }

    /// Total number of recommended items across all buckets.
    pub fn len(&self) -> usize {
        self.complementary.len() + self.analogous.len() + self.monochromatic.len()
    }

    /// `true` if nothing was recommended.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over every recommendation with its harmony: monochromatic first, then
    /// complementary, then analogous.
    pub fn iter<'s>(&'s self) -> impl Iterator<Item = (Harmony, &'a T)> + 's {
        Harmony::ALL.iter().flat_map(move |&harmony| {
            self.bucket(harmony).iter().map(move |&item| (harmony, item))
        })
    }
}

/// Hex codes for the reference hues of a base color, at the base's saturation and lightness. Meant
/// for drawing a legend next to each bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceSwatches {
    /// The base color itself, canonicalized.
    pub base: String,
    /// The complementary reference color.
    pub complementary: String,
    /// The two analogous reference colors, clockwise first.
    pub analogous: [String; 2],
}

/// Sorts closet items into harmony buckets relative to a base item. Holds nothing but its
/// thresholds, so one engine can be shared freely across threads and calls.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct HarmonyEngine {
    thresholds: HarmonyThresholds,
}

impl HarmonyEngine {
    /// Creates an engine with the given thresholds.
    pub fn new(thresholds: HarmonyThresholds) -> HarmonyEngine {
        HarmonyEngine { thresholds }
    }

    /// The thresholds this engine classifies with.
    pub fn thresholds(&self) -> &HarmonyThresholds {
        &self.thresholds
    }

    /// The ordered rule list for a base hue. Order matters: the first matching rule wins.
    pub fn rules(&self, base_hue: f64) -> [HarmonyRule; 3] {
        let t = &self.thresholds;
        [
            HarmonyRule {
                harmony: Harmony::Monochromatic,
                targets: vec![base_hue],
                threshold: t.monochromatic,
            },
            HarmonyRule {
                harmony: Harmony::Complementary,
                targets: vec![rotate(base_hue, t.complementary_offset)],
                threshold: t.complementary,
            },
            HarmonyRule {
                harmony: Harmony::Analogous,
                targets: vec![
                    rotate(base_hue, t.analogous_offset),
                    rotate(base_hue, -t.analogous_offset),
                ],
                threshold: t.analogous,
            },
        ]
    }

    /// The bucket a single candidate color would land in next to a base color, if any. Both colors
    /// go through [`hex_to_hsl`], so unreadable colors are read as hue 0.
    pub fn harmony_between(&self, base_hex: &str, candidate_hex: &str) -> Option<Harmony> {
        let rules = self.rules(hex_to_hsl(base_hex).h);
        first_match(&rules, hex_to_hsl(candidate_hex).h)
    }

    /// Classifies every item in `pool` against `base`.
    ///
    /// If `base` has no primary color, nothing can be recommended and the result is empty. Items in
    /// the pool with the same id as `base`, or with no primary color, are skipped.
    pub fn classify<'a, T, I>(&self, base: &T, pool: I) -> RecommendationSet<'a, T>
    where
        T: Wearable + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let mut recs = RecommendationSet::default();
        let base_color = match base.primary_color() {
            Some(color) => color,
            None => {
                debug!("item {} has no primary color, nothing to recommend", base.id());
                return recs;
            }
        };
        let rules = self.rules(hex_to_hsl(base_color).h);

        for candidate in pool {
            if candidate.id() == base.id() {
                continue;
            }
            let color = match candidate.primary_color() {
                Some(color) => color,
                None => continue,
            };
            match first_match(&rules, hex_to_hsl(color).h) {
                Some(harmony) => {
                    trace!("{} ({}) is {} to {}", candidate.id(), color, harmony, base.id());
                    recs.bucket_mut(harmony).push(candidate);
                }
                None => trace!("{} ({}) matches nothing", candidate.id(), color),
            }
        }
        recs
    }

    /// The reference colors for a base color. An unreadable base is read as black, whose swatches
    /// are all black.
    pub fn reference_swatches(&self, base_hex: &str) -> ReferenceSwatches {
        let base = hex_to_hsl(base_hex);
        let t = &self.thresholds;
        let at = |degrees: f64| {
            RGBColor::from(HSLColor {
                h: rotate(base.h, degrees),
                ..base
            })
            .to_string()
        };
        ReferenceSwatches {
            base: RGBColor::from(base).to_string(),
            complementary: at(t.complementary_offset),
            analogous: [at(t.analogous_offset), at(-t.analogous_offset)],
        }
    }
}

fn first_match(rules: &[HarmonyRule], hue: f64) -> Option<Harmony> {
    rules.iter().find(|rule| rule.matches(hue)).map(|rule| rule.harmony)
}

/// Classifies `pool` against `base` with the default thresholds. See [`HarmonyEngine::classify`].
pub fn classify<'a, T, I>(base: &T, pool: I) -> RecommendationSet<'a, T>
where
    T: Wearable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    HarmonyEngine::default().classify(base, pool)
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::closet::ClosetItem;

    fn ids<T: Wearable>(items: &[&T]) -> Vec<String> {
        items.iter().map(|item| item.id().to_string()).collect()
    }

    #[test]
    fn test_red_base() {
        let base = ClosetItem::new("base", "#FF0000");
        let pool = vec![
            ClosetItem::new("cyan", "#00FFFF"),
            ClosetItem::new("orange", "#FF8800"),
            ClosetItem::new("crimson", "#FF0022"),
        ];
        let recs = classify(&base, &pool);
        assert_eq!(ids(&recs.complementary), vec!["cyan"]);
        assert_eq!(ids(&recs.analogous), vec!["orange"]);
        assert_eq!(ids(&recs.monochromatic), vec!["crimson"]);
        assert_eq!(recs.len(), 3);
    }

    #[test]
    fn test_unmatched_are_dropped() {
        let base = ClosetItem::new("base", "#FF0000");
        // green (120) and blue (240) are neither near 0, 180, 30, nor 330
        let pool = vec![
            ClosetItem::new("green", "#00FF00"),
            ClosetItem::new("blue", "#0000FF"),
        ];
        assert!(classify(&base, &pool).is_empty());
    }

    #[test]
    fn test_no_base_color() {
        let base = ClosetItem::uncolored("base");
        let pool = vec![ClosetItem::new("red", "#FF0000")];
        let recs = classify(&base, &pool);
        assert_eq!(recs, RecommendationSet::default());
        // an empty string is no color either
        let blank = ClosetItem::new("blank", "");
        assert!(classify(&blank, &pool).is_empty());
    }

    #[test]
    fn test_self_and_uncolored_skipped() {
        let base = ClosetItem::new("base", "#FF0000");
        let pool = vec![
            ClosetItem::new("base", "#FF0000"),
            ClosetItem::uncolored("plain"),
            ClosetItem::new("twin", "#FF0000"),
        ];
        let recs = classify(&base, &pool);
        assert_eq!(ids(&recs.monochromatic), vec!["twin"]);
        assert_eq!(recs.len(), 1);
    }

    #[test]
    fn test_malformed_colors_read_as_red() {
        // a malformed base reads as hue 0, and so do malformed candidates
        let base = ClosetItem::new("base", "reddish");
        let pool = vec![
            ClosetItem::new("typo", "#FF00"),
            ClosetItem::new("cyan", "#00FFFF"),
        ];
        let recs = classify(&base, &pool);
        assert_eq!(ids(&recs.monochromatic), vec!["typo"]);
        assert_eq!(ids(&recs.complementary), vec!["cyan"]);
    }

    #[test]
    fn test_monochromatic_wins() {
        // with wide analogous and monochromatic windows, a hue 10 degrees off matches both; it must
        // come out monochromatic
        let engine = HarmonyEngine::new(HarmonyThresholds {
            monochromatic: 15.0,
            analogous: 25.0,
            ..HarmonyThresholds::default()
        });
        assert_eq!(
            engine.harmony_between("#FF0000", "#FF2B00"),
            Some(Harmony::Monochromatic)
        );
        let base = ClosetItem::new("base", "#FF0000");
        let pool = vec![ClosetItem::new("near", "#FF2B00")];
        let recs = engine.classify(&base, &pool);
        assert_eq!(ids(&recs.monochromatic), vec!["near"]);
        assert!(recs.analogous.is_empty());
    }

    #[test]
    fn test_order_preserved() {
        let base = ClosetItem::new("base", "#FF0000");
        let pool = vec![
            ClosetItem::new("c", "#FF0022"),
            ClosetItem::new("x", "#00FFFF"),
            ClosetItem::new("a", "#FF0011"),
            ClosetItem::new("b", "#FF1100"),
        ];
        let recs = classify(&base, &pool);
        assert_eq!(ids(&recs.monochromatic), vec!["c", "a", "b"]);
        let flat: Vec<(Harmony, &str)> = recs.iter().map(|(h, item)| (h, item.id())).collect();
        assert_eq!(
            flat,
            vec![
                (Harmony::Monochromatic, "c"),
                (Harmony::Monochromatic, "a"),
                (Harmony::Monochromatic, "b"),
                (Harmony::Complementary, "x"),
            ]
        );
    }

    #[test]
    fn test_rules() {
        let rules = HarmonyEngine::default().rules(10.0);
        assert_eq!(rules[0].harmony, Harmony::Monochromatic);
        assert_eq!(rules[0].targets, vec![10.0]);
        assert_eq!(rules[1].targets, vec![190.0]);
        assert_eq!(rules[2].targets, vec![40.0, 340.0]);
        assert!(rules[2].matches(355.0));
        assert!(!rules[1].matches(355.0));
    }

    #[test]
    fn test_reference_swatches() {
        let swatches = HarmonyEngine::default().reference_swatches("#ff0000");
        assert_eq!(swatches.base, "#FF0000");
        assert_eq!(swatches.complementary, "#00FFFF");
        assert_eq!(swatches.analogous, ["#FF8000".to_string(), "#FF0080".to_string()]);
        let gray = HarmonyEngine::default().reference_swatches("#808080");
        assert_eq!(gray.complementary, "#808080");
    }
}
