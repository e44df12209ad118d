//! Configuration for dealing.

use crate::io;
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tabletop_math::angle::Degrees;

/// Configuration parameters for dealing a deck onto the table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DealConfig {
    /// How many standard 52-card decks to combine.
    pub decks: usize,
    /// Seed for the random number generator. A random seed is used when
    /// absent.
    pub seed: Option<u64>,
    /// Upper bound for the random rotation of a card about each axis.
    pub max_rotation: Degrees,
    /// Upper bound for how far a card is lifted off the table.
    pub max_lift: f64,
    /// Directory containing the card face images.
    pub asset_dir: String,
}

impl DealConfig {
    /// Parses the configuration from the RON file at the given path.
    pub fn from_ron_file(file_path: impl AsRef<Path>) -> Result<Self> {
        let file_path = file_path.as_ref();
        log::debug!("Loading deal configuration from {}", file_path.display());
        let config: Self = io::parse_ron_file(file_path)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the parameters describe a valid deal.
    pub fn validate(&self) -> Result<()> {
        if !(self.max_lift.is_finite() && self.max_lift >= 0.0) {
            bail!("Maximum lift must be finite and non-negative, got {}", self.max_lift);
        }
        if !self.max_rotation.0.is_finite() {
            bail!("Maximum rotation must be finite, got {:?}", self.max_rotation);
        }
        Ok(())
    }
}

impl Default for DealConfig {
    fn default() -> Self {
        Self {
            decks: 1,
            seed: None,
            max_rotation: Degrees::FULL_TURN,
            max_lift: 30.0,
            asset_dir: "./cards".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let config: DealConfig = ron::from_str("(decks: 2, seed: Some(9))").unwrap();
        assert_eq!(
            config,
            DealConfig {
                decks: 2,
                seed: Some(9),
                ..DealConfig::default()
            }
        );
    }

    #[test]
    fn rotation_is_given_in_degrees() {
        let config: DealConfig = ron::from_str("(max_rotation: 90.0)").unwrap();
        assert_eq!(config.max_rotation, Degrees(90.0));
    }

    #[test]
    fn negative_lift_is_invalid() {
        let config = DealConfig {
            max_lift: -1.0,
            ..DealConfig::default()
        };
        assert!(config.validate().is_err());
        assert!(DealConfig::default().validate().is_ok());
    }
}
