//! Rules configuration.
//!
//! `RulesConfig` carries every tunable constant of the rules engine. The
//! defaults reproduce the standard game; alternate house rules can be loaded
//! from JSON or built with the `with_*` methods.

use serde::{Deserialize, Serialize};

use crate::board::{TileId, BOARD_SIZE};
use crate::error::ConfigError;

/// Tunable rule constants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Cash each seat starts with.
    pub starting_cash: i64,

    /// Bonus for passing or landing on Launch after wrapping.
    pub pass_launch_bonus: i64,

    /// Value of the station pot at game start and after each collection.
    pub pot_reset: i64,

    /// Fee to leave deep space early, also forced after the last failed attempt.
    pub bail: i64,

    /// Tile a jailed seat is held on.
    pub jail_tile: TileId,

    /// Failed doubles attempts before bail is forced.
    pub max_jail_attempts: u8,

    /// Consecutive doubles that send a seat to jail.
    pub doubles_limit: u8,

    /// Utility fee multiplier with a single utility.
    pub utility_multiplier: i64,

    /// Utility fee multiplier when one party holds both utilities.
    pub utility_pair_multiplier: i64,

    /// When set, a roll leaves movement in progress and the caller advances it
    /// one tile at a time. When clear, movement completes inside the roll.
    pub staged_movement: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            starting_cash: 1500,
            pass_launch_bonus: 200,
            pot_reset: 200,
            bail: 50,
            jail_tile: TileId::new(10),
            max_jail_attempts: 3,
            doubles_limit: 3,
            utility_multiplier: 4,
            utility_pair_multiplier: 10,
            staged_movement: false,
        }
    }
}

impl RulesConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the constants for consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.starting_cash <= 0 {
            return Err(ConfigError::Invalid("starting_cash must be positive"));
        }
        if self.pass_launch_bonus < 0 || self.pot_reset < 0 || self.bail < 0 {
            return Err(ConfigError::Invalid("amounts must not be negative"));
        }
        if self.jail_tile.index() >= BOARD_SIZE {
            return Err(ConfigError::Invalid("jail_tile is off the board"));
        }
        if self.max_jail_attempts == 0 || self.doubles_limit == 0 {
            return Err(ConfigError::Invalid("attempt limits must be at least 1"));
        }
        Ok(())
    }

    /// Set the starting cash.
    #[must_use]
    pub fn with_starting_cash(mut self, cash: i64) -> Self {
        self.starting_cash = cash;
        self
    }

    /// Set the pass-Launch bonus.
    #[must_use]
    pub fn with_pass_launch_bonus(mut self, bonus: i64) -> Self {
        self.pass_launch_bonus = bonus;
        self
    }

    /// Set the bail amount.
    #[must_use]
    pub fn with_bail(mut self, bail: i64) -> Self {
        self.bail = bail;
        self
    }

    /// Enable or disable tile-by-tile movement staging.
    #[must_use]
    pub fn with_staged_movement(mut self, staged: bool) -> Self {
        self.staged_movement = staged;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RulesConfig::default();

        assert_eq!(config.starting_cash, 1500);
        assert_eq!(config.pass_launch_bonus, 200);
        assert_eq!(config.pot_reset, 200);
        assert_eq!(config.bail, 50);
        assert_eq!(config.jail_tile, TileId::new(10));
        assert!(!config.staged_movement);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = RulesConfig::default()
            .with_starting_cash(2000)
            .with_bail(75)
            .with_staged_movement(true);

        assert_eq!(config.starting_cash, 2000);
        assert_eq!(config.bail, 75);
        assert!(config.staged_movement);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = RulesConfig::from_json(r#"{ "starting_cash": 1000 }"#).unwrap();

        assert_eq!(config.starting_cash, 1000);
        assert_eq!(config.bail, 50);
    }

    #[test]
    fn test_invalid_json_rejected() {
        assert!(matches!(
            RulesConfig::from_json(r#"{ "starting_cash": 0 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            RulesConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = RulesConfig::default().with_bail(60);
        let json = serde_json::to_string(&config).unwrap();

        assert_eq!(RulesConfig::from_json(&json).unwrap(), config);
    }
}
