//! Configuration and reports for the `houseedge` command-line front end.
//!
//! Settings resolve in three layers: built-in defaults, then an optional YAML file, then
//! command-line flags. [`Config::validate`] checks the merged result against the documented
//! parameter ranges before any report is built.

use houseedge_types::casino::{
    BlackjackStrategy, ParameterRange, RouletteVariant, SlotType, BET_AMOUNT_RANGE,
    BLACKJACK_BET_RANGE, BLACKJACK_HANDS_RANGE, DEFAULT_BET_AMOUNT, DEFAULT_BLACKJACK_BET,
    DEFAULT_BLACKJACK_HANDS, DEFAULT_HOUSE_EDGE_PERCENT, DEFAULT_ROULETTE_BET, DEFAULT_ROUNDS,
    DEFAULT_SLOT_BET, DEFAULT_SLOT_SPINS, DEFAULT_STARTING_BANKROLL, HOUSE_EDGE_RANGE,
    ROULETTE_BET_RANGE, ROUNDS_RANGE, SLOT_BET_RANGE, SLOT_SPINS_RANGE, STARTING_BANKROLL_RANGE,
};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};
use thiserror::Error;
use tracing::Level;

pub mod report;

/// Settings for every report, as read from YAML.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_starting_bankroll")]
    pub starting_bankroll: f64,
    #[serde(default = "default_bet_amount")]
    pub bet_amount: f64,
    #[serde(default = "default_house_edge_percent")]
    pub house_edge_percent: f64,
    #[serde(default = "default_rounds")]
    pub rounds: u64,

    #[serde(default)]
    pub roulette_variant: RouletteVariant,
    #[serde(default = "default_roulette_bet")]
    pub roulette_bet: f64,

    #[serde(default)]
    pub blackjack_strategy: BlackjackStrategy,
    #[serde(default = "default_blackjack_hands")]
    pub blackjack_hands: u64,
    #[serde(default = "default_blackjack_bet")]
    pub blackjack_bet: f64,

    #[serde(default)]
    pub slot_type: SlotType,
    #[serde(default = "default_slot_spins")]
    pub slot_spins: u64,
    #[serde(default = "default_slot_bet")]
    pub slot_bet: f64,

    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Fixes the random stream of simulated charts when set.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_starting_bankroll() -> f64 {
    DEFAULT_STARTING_BANKROLL
}

fn default_bet_amount() -> f64 {
    DEFAULT_BET_AMOUNT
}

fn default_house_edge_percent() -> f64 {
    DEFAULT_HOUSE_EDGE_PERCENT
}

fn default_rounds() -> u64 {
    DEFAULT_ROUNDS
}

fn default_roulette_bet() -> f64 {
    DEFAULT_ROULETTE_BET
}

fn default_blackjack_hands() -> u64 {
    DEFAULT_BLACKJACK_HANDS
}

fn default_blackjack_bet() -> f64 {
    DEFAULT_BLACKJACK_BET
}

fn default_slot_spins() -> u64 {
    DEFAULT_SLOT_SPINS
}

fn default_slot_bet() -> f64 {
    DEFAULT_SLOT_BET
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            starting_bankroll: default_starting_bankroll(),
            bet_amount: default_bet_amount(),
            house_edge_percent: default_house_edge_percent(),
            rounds: default_rounds(),
            roulette_variant: RouletteVariant::default(),
            roulette_bet: default_roulette_bet(),
            blackjack_strategy: BlackjackStrategy::default(),
            blackjack_hands: default_blackjack_hands(),
            blackjack_bet: default_blackjack_bet(),
            slot_type: SlotType::default(),
            slot_spins: default_slot_spins(),
            slot_bet: default_slot_bet(),
            log_level: default_log_level(),
            seed: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse config file")]
    Parse(#[source] serde_yaml::Error),
    #[error("invalid log level: {value}")]
    InvalidLogLevel { value: String },
    #[error("{field} must be within [{min}, {max}] (got {value})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Configuration that passed range checks.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidatedConfig {
    pub starting_bankroll: f64,
    pub bet_amount: f64,
    pub house_edge_percent: f64,
    pub rounds: u64,
    pub roulette_variant: RouletteVariant,
    pub roulette_bet: f64,
    pub blackjack_strategy: BlackjackStrategy,
    pub blackjack_hands: u64,
    pub blackjack_bet: f64,
    pub slot_type: SlotType,
    pub slot_spins: u64,
    pub slot_bet: f64,
    pub log_level: Level,
    pub seed: Option<u64>,
}

fn ensure_in_range(range: &ParameterRange, value: f64) -> Result<(), ConfigError> {
    if !range.contains(value) {
        return Err(ConfigError::OutOfRange {
            field: range.name,
            value,
            min: range.min,
            max: range.max,
        });
    }
    Ok(())
}

impl Config {
    /// Parse a YAML document; missing keys take their defaults.
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        // An empty document is a valid, all-default config
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(contents).map_err(ConfigError::Parse)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&contents)
    }

    pub fn validate(self) -> Result<ValidatedConfig, ConfigError> {
        ensure_in_range(&STARTING_BANKROLL_RANGE, self.starting_bankroll)?;
        ensure_in_range(&BET_AMOUNT_RANGE, self.bet_amount)?;
        ensure_in_range(&HOUSE_EDGE_RANGE, self.house_edge_percent)?;
        ensure_in_range(&ROUNDS_RANGE, self.rounds as f64)?;
        ensure_in_range(&ROULETTE_BET_RANGE, self.roulette_bet)?;
        ensure_in_range(&BLACKJACK_HANDS_RANGE, self.blackjack_hands as f64)?;
        ensure_in_range(&BLACKJACK_BET_RANGE, self.blackjack_bet)?;
        ensure_in_range(&SLOT_SPINS_RANGE, self.slot_spins as f64)?;
        ensure_in_range(&SLOT_BET_RANGE, self.slot_bet)?;

        let log_level =
            Level::from_str(&self.log_level).map_err(|_| ConfigError::InvalidLogLevel {
                value: self.log_level.clone(),
            })?;

        Ok(ValidatedConfig {
            starting_bankroll: self.starting_bankroll,
            bet_amount: self.bet_amount,
            house_edge_percent: self.house_edge_percent,
            rounds: self.rounds,
            roulette_variant: self.roulette_variant,
            roulette_bet: self.roulette_bet,
            blackjack_strategy: self.blackjack_strategy,
            blackjack_hands: self.blackjack_hands,
            blackjack_bet: self.blackjack_bet,
            slot_type: self.slot_type,
            slot_spins: self.slot_spins,
            slot_bet: self.slot_bet,
            log_level,
            seed: self.seed,
        })
    }
}

#[cfg(test)]
mod tests;
