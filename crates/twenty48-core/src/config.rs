//! Game configuration.

use crate::board::{DEFAULT_SIZE, MAX_SIZE, MIN_SIZE};
use crate::error::ConfigError;
use crate::spawn::DEFAULT_FOUR_PROBABILITY;

/// Minimum drag length, in cells, before a pointer gesture counts as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD: i32 = 2;

/// Configuration for a [`Session`](crate::Session).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Board side length.
    pub size: usize,
    /// Tiles placed on a fresh board.
    pub initial_tiles: usize,
    /// Probability that a spawned tile is a 4.
    pub four_probability: f64,
    /// Minimum swipe displacement, in cells.
    pub swipe_threshold: i32,
    /// RNG seed. `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            initial_tiles: 2,
            four_probability: DEFAULT_FOUR_PROBABILITY,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Set the seed (builder).
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the board size (builder).
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Check every field against its allowed range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&self.size) {
            return Err(ConfigError::Size(self.size));
        }
        if !(0.0..=1.0).contains(&self.four_probability) {
            return Err(ConfigError::FourProbability(self.four_probability));
        }
        if self.swipe_threshold < 1 {
            return Err(ConfigError::SwipeThreshold(self.swipe_threshold));
        }
        let cells = self.size * self.size;
        if self.initial_tiles > cells {
            return Err(ConfigError::InitialTiles {
                tiles: self.initial_tiles,
                cells,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_classic_game() {
        let c = GameConfig::default();
        assert_eq!(c.size, 4);
        assert_eq!(c.initial_tiles, 2);
        assert_eq!(c.four_probability, 0.1);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn rejects_bad_size() {
        assert_eq!(
            GameConfig::default().with_size(1).validate(),
            Err(ConfigError::Size(1))
        );
        assert_eq!(
            GameConfig::default().with_size(9).validate(),
            Err(ConfigError::Size(9))
        );
        assert!(GameConfig::default().with_size(8).validate().is_ok());
    }

    #[test]
    fn rejects_bad_probability() {
        let c = GameConfig {
            four_probability: 1.5,
            ..GameConfig::default()
        };
        assert_eq!(c.validate(), Err(ConfigError::FourProbability(1.5)));
        let nan = GameConfig {
            four_probability: f64::NAN,
            ..GameConfig::default()
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn rejects_bad_threshold_and_tiles() {
        let c = GameConfig {
            swipe_threshold: 0,
            ..GameConfig::default()
        };
        assert_eq!(c.validate(), Err(ConfigError::SwipeThreshold(0)));
        let c = GameConfig {
            size: 2,
            initial_tiles: 5,
            ..GameConfig::default()
        };
        assert_eq!(
            c.validate(),
            Err(ConfigError::InitialTiles { tiles: 5, cells: 4 })
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ConfigError::Size(12).to_string(),
            "board size 12 out of range (2..=8)"
        );
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let c: GameConfig = serde_json::from_str(r#"{"size": 5, "seed": 11}"#).unwrap();
        assert_eq!(c.size, 5);
        assert_eq!(c.seed, Some(11));
        assert_eq!(c.initial_tiles, 2);
    }
}
