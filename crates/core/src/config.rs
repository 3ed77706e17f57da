//! Game configuration from environment variables.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `MEMORY_MATCH_PAIRS` | 8 |
//! | `MEMORY_MATCH_SEED` | unset (caller picks) |
//! | `MEMORY_MATCH_MISMATCH_DELAY_MS` | 1000 |
//! | `MEMORY_MATCH_SCORE_INCREMENT` | 25 |
//! | `MEMORY_MATCH_LOG` | unset (no log file) |
//!
//! Unset or empty variables fall back to the defaults; set but invalid values
//! are reported as [`ConfigError`].

use crate::error::ConfigError;
use crate::types::{
    DEFAULT_PAIRS, MATCH_SCORE_INCREMENT, MAX_PAIRS, MISMATCH_DELAY_MS, TIMER_PERIOD_MS,
};

pub const PAIRS_VAR: &str = "MEMORY_MATCH_PAIRS";
pub const SEED_VAR: &str = "MEMORY_MATCH_SEED";
pub const MISMATCH_DELAY_VAR: &str = "MEMORY_MATCH_MISMATCH_DELAY_MS";
pub const SCORE_INCREMENT_VAR: &str = "MEMORY_MATCH_SCORE_INCREMENT";
pub const LOG_VAR: &str = "MEMORY_MATCH_LOG";

/// Timing and scoring rules applied by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    pub mismatch_delay_ms: u32,
    pub score_increment: u32,
    pub timer_period_ms: u32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            mismatch_delay_ms: MISMATCH_DELAY_MS,
            score_increment: MATCH_SCORE_INCREMENT,
            timer_period_ms: TIMER_PERIOD_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub pairs: usize,
    pub seed: Option<u32>,
    pub rules: Rules,
    pub log_path: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pairs: DEFAULT_PAIRS,
            seed: None,
            rules: Rules::default(),
            log_path: None,
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| {
            lookup(name)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let mut config = Self::default();

        if let Some(raw) = get(PAIRS_VAR) {
            config.pairs = parse_in_range(PAIRS_VAR, &raw, 1, MAX_PAIRS as u64)? as usize;
        }
        if let Some(raw) = get(SEED_VAR) {
            config.seed = Some(parse_in_range(SEED_VAR, &raw, 0, u32::MAX as u64)? as u32);
        }
        if let Some(raw) = get(MISMATCH_DELAY_VAR) {
            config.rules.mismatch_delay_ms =
                parse_in_range(MISMATCH_DELAY_VAR, &raw, 0, 60_000)? as u32;
        }
        if let Some(raw) = get(SCORE_INCREMENT_VAR) {
            config.rules.score_increment =
                parse_in_range(SCORE_INCREMENT_VAR, &raw, 1, 10_000)? as u32;
        }
        config.log_path = get(LOG_VAR);

        Ok(config)
    }
}

fn parse_in_range(var: &'static str, raw: &str, min: u64, max: u64) -> Result<u64, ConfigError> {
    let value: u64 = raw.parse().map_err(|_| ConfigError::NotANumber {
        var,
        value: raw.to_string(),
    })?;
    if value < min || value > max {
        return Err(ConfigError::OutOfRange {
            var,
            value,
            min,
            max,
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = GameConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.pairs, 8);
        assert_eq!(config.rules.mismatch_delay_ms, 1000);
        assert_eq!(config.rules.score_increment, 25);
        assert!(config.seed.is_none());
        assert!(config.log_path.is_none());
    }

    #[test]
    fn reads_every_variable() {
        let config = GameConfig::from_lookup(lookup(&[
            (PAIRS_VAR, "2"),
            (SEED_VAR, "42"),
            (MISMATCH_DELAY_VAR, "250"),
            (SCORE_INCREMENT_VAR, "10"),
            (LOG_VAR, " /tmp/mm.log "),
        ]))
        .unwrap();
        assert_eq!(config.pairs, 2);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.rules.mismatch_delay_ms, 250);
        assert_eq!(config.rules.score_increment, 10);
        assert_eq!(config.log_path.as_deref(), Some("/tmp/mm.log"));
    }

    #[test]
    fn empty_values_fall_back_to_defaults() {
        let config = GameConfig::from_lookup(lookup(&[(PAIRS_VAR, "  "), (LOG_VAR, "")])).unwrap();
        assert_eq!(config.pairs, DEFAULT_PAIRS);
        assert!(config.log_path.is_none());
    }

    #[test]
    fn rejects_garbage() {
        let err = GameConfig::from_lookup(lookup(&[(PAIRS_VAR, "lots")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::NotANumber {
                var: PAIRS_VAR,
                value: "lots".to_string()
            }
        );
    }

    #[test]
    fn rejects_out_of_range_pairs() {
        assert!(matches!(
            GameConfig::from_lookup(lookup(&[(PAIRS_VAR, "0")])),
            Err(ConfigError::OutOfRange { value: 0, .. })
        ));
        assert!(matches!(
            GameConfig::from_lookup(lookup(&[(PAIRS_VAR, "27")])),
            Err(ConfigError::OutOfRange { value: 27, .. })
        ));
    }
}
