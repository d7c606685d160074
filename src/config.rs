//! Tunable constants for the harmony engine. The defaults are the product's long-standing values and
//! changing them changes which items get suggested, so they're only ever overridden on purpose, by a
//! TOML file like this one:
//!
//! ```toml
//! monochromatic = 10.0
//! analogous_offset = 45.0
//! ```
//!
//! Keys that aren't given keep their defaults.

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

/// Errors from loading or validating a [`HarmonyThresholds`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file couldn't be read.
    #[error("could not read config: {0}")]
    Io(#[from] io::Error),
    /// The file wasn't valid TOML, or had values of the wrong type.
    #[error("could not parse config: {0}")]
    Parse(#[from] toml::de::Error),
    /// A value was negative, not finite, or (for thresholds) wider than half the color wheel.
    #[error("invalid value for {field}: {value}")]
    InvalidValue {
        /// The name of the offending key.
        field: &'static str,
        /// The value it was given.
        value: f64,
    },
}

/// The angular windows, in degrees, that decide which harmony a candidate color falls under.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HarmonyThresholds {
    /// How close a candidate's hue must be to the base hue to count as monochromatic.
    pub monochromatic: f64,
    /// How close a candidate's hue must be to the complementary reference hue.
    pub complementary: f64,
    /// How close a candidate's hue must be to either analogous reference hue.
    pub analogous: f64,
    /// How far around the wheel the complementary reference hue is from the base.
    pub complementary_offset: f64,
    /// How far to either side of the base the two analogous reference hues are.
    pub analogous_offset: f64,
}

impl Default for HarmonyThresholds {
    fn default() -> HarmonyThresholds {
        HarmonyThresholds {
            monochromatic: 15.0,
            complementary: 20.0,
            analogous: 20.0,
            complementary_offset: 180.0,
            analogous_offset: 30.0,
        }
    }
}

impl HarmonyThresholds {
    /// Parses thresholds out of a TOML document and validates them.
    ///
    /// # Errors
    /// [`ConfigError::Parse`] for malformed TOML or unknown keys, [`ConfigError::InvalidValue`] for
    /// values that fail [`validate`](#method.validate).
    pub fn from_toml_str(s: &str) -> Result<HarmonyThresholds, ConfigError> {
        let thresholds: HarmonyThresholds = toml::from_str(s)?;
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Reads and parses a TOML file. See [`from_toml_str`](#method.from_toml_str).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<HarmonyThresholds, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let thresholds = HarmonyThresholds::from_toml_str(&contents)?;
        debug!("loaded harmony thresholds from {}: {:?}", path.display(), thresholds);
        Ok(thresholds)
    }

    /// Checks that every value is finite and non-negative, and that no threshold exceeds 180 degrees
    /// (at which point it would match every hue and the bucket would swallow everything after it).
    pub fn validate(&self) -> Result<(), ConfigError> {
        let thresholds = [
            ("monochromatic", self.monochromatic),
            ("complementary", self.complementary),
            ("analogous", self.analogous),
        ];
        for &(field, value) in &thresholds {
            if !value.is_finite() || value < 0.0 || value > 180.0 {
                return Err(ConfigError::InvalidValue { field, value });
            }
        }
        let offsets = [
            ("complementary_offset", self.complementary_offset),
            ("analogous_offset", self.analogous_offset),
        ];
        for &(field, value) in &offsets {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidValue { field, value });
            }
        }
        Ok(())
    }
}
