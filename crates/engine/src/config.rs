//! Configuration shared by the front ends.

use crate::constants::Side;
use crate::error::ConfigError;

pub const ENV_HUMAN_SIDE: &str = "HASAMI_HUMAN_SIDE";
pub const ENV_SEED: &str = "HASAMI_SEED";
pub const ENV_LOG_LEVEL: &str = "HASAMI_LOG_LEVEL";

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The side entered from the keyboard; the chooser plays the other one.
    pub human_side: Side,
    /// Seed for the random chooser. `None` draws from entropy.
    pub seed: Option<u64>,
    /// Default `env_logger` filter.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            human_side: Side::A,
            seed: None,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Reads `HASAMI_HUMAN_SIDE`, `HASAMI_SEED` and `HASAMI_LOG_LEVEL`, keeping defaults for unset keys.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(value) = lookup(ENV_HUMAN_SIDE) {
            config.human_side = match value.trim().to_ascii_lowercase().as_str() {
                "a" => Side::A,
                "b" => Side::B,
                _ => return Err(invalid(ENV_HUMAN_SIDE, value)),
            };
        }

        if let Some(value) = lookup(ENV_SEED) {
            let seed = value.trim().parse().map_err(|_| invalid(ENV_SEED, value.clone()))?;
            config.seed = Some(seed);
        }

        if let Some(value) = lookup(ENV_LOG_LEVEL) {
            let level = value.trim().to_ascii_lowercase();
            if !LOG_LEVELS.contains(&level.as_str()) {
                return Err(invalid(ENV_LOG_LEVEL, value));
            }
            config.log_level = level;
        }

        Ok(config)
    }
}

fn invalid(key: &'static str, value: String) -> ConfigError {
    ConfigError::Invalid { key, value }
}
