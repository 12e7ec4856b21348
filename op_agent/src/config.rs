//! Agent configuration management.
//!
//! Consolidates all environment variable reads and provides validated configuration.

use odds_poker::bot::{BetCap, StakingConfig};
use std::path::PathBuf;

/// Complete agent configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq)]
pub struct AgentConfig {
    /// Stack, seed pot, minimum bet, and cap
    pub staking: StakingConfig,
    /// Optional JSON odds table replacing the standard one
    pub odds_table: Option<PathBuf>,
}

impl AgentConfig {
    /// Load configuration from environment variables
    ///
    /// # Arguments
    ///
    /// * `preset_override` - Optional preset name override (from CLI args)
    /// * `odds_table_override` - Optional odds table path override (from CLI args)
    ///
    /// # Errors
    ///
    /// Returns error if a variable is present but can't be parsed
    pub fn from_env(
        preset_override: Option<&str>,
        odds_table_override: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        Self::from_lookup(
            |key| std::env::var(key).ok(),
            preset_override,
            odds_table_override,
        )
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Precedence per field: CLI override, then variable, then preset value.
    pub fn from_lookup<F>(
        lookup: F,
        preset_override: Option<&str>,
        odds_table_override: Option<PathBuf>,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let preset = preset_override
            .map(str::to_string)
            .or_else(|| lookup("AGENT_PRESET"))
            .unwrap_or_else(|| "standard".to_string());
        let mut staking = preset_config(&preset)?;

        if let Some(stack) = parse_var(&lookup, "AGENT_STACK")? {
            staking.starting_stack = stack;
        }
        if let Some(seed_pot) = parse_var(&lookup, "AGENT_SEED_POT")? {
            staking.seed_pot = seed_pot;
        }
        if let Some(min_bet) = parse_var(&lookup, "AGENT_MIN_BET")? {
            staking.min_bet = min_bet;
        }
        if let Some(cap) = lookup("AGENT_BET_CAP") {
            staking.bet_cap = parse_bet_cap(&cap)?;
        }

        let odds_table =
            odds_table_override.or_else(|| lookup("AGENT_ODDS_TABLE").map(PathBuf::from));

        Ok(AgentConfig {
            staking,
            odds_table,
        })
    }

    /// Validate configuration after loading
    ///
    /// # Returns
    ///
    /// * `Result<(), ConfigError>` - Success or validation error
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.staking.validate().map_err(|e| ConfigError::Invalid {
            var: "AGENT_*".to_string(),
            reason: e.to_string(),
        })?;

        if self
            .odds_table
            .as_ref()
            .is_some_and(|path| path.as_os_str().is_empty())
        {
            return Err(ConfigError::Invalid {
                var: "AGENT_ODDS_TABLE".to_string(),
                reason: "Must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

fn preset_config(name: &str) -> Result<StakingConfig, ConfigError> {
    match name.to_lowercase().as_str() {
        "standard" => Ok(StakingConfig::standard()),
        "capped" => Ok(StakingConfig::capped()),
        other => Err(ConfigError::Invalid {
            var: "AGENT_PRESET".to_string(),
            reason: format!("Unknown preset {other:?} (expected standard or capped)"),
        }),
    }
}

fn parse_bet_cap(value: &str) -> Result<BetCap, ConfigError> {
    if value.eq_ignore_ascii_case("stack") {
        return Ok(BetCap::Stack);
    }
    value
        .trim()
        .parse()
        .map(BetCap::Fixed)
        .map_err(|_| ConfigError::Invalid {
            var: "AGENT_BET_CAP".to_string(),
            reason: format!("Expected \"stack\" or a chip amount, got {value:?}"),
        })
}

/// Helper to parse an optional variable, rejecting values that don't parse
fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    lookup(key)
        .map(|v| {
            v.trim().parse().map_err(|_| ConfigError::Invalid {
                var: key.to_string(),
                reason: format!("Could not parse {v:?}"),
            })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_to_standard_preset() {
        let config = AgentConfig::from_lookup(lookup_from(&[]), None, None).unwrap();
        assert_eq!(config.staking, StakingConfig::standard());
        assert_eq!(config.odds_table, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_preset_from_env_and_override() {
        let lookup = lookup_from(&[("AGENT_PRESET", "capped")]);
        let config = AgentConfig::from_lookup(&lookup, None, None).unwrap();
        assert_eq!(config.staking, StakingConfig::capped());

        let config = AgentConfig::from_lookup(&lookup, Some("Standard"), None).unwrap();
        assert_eq!(config.staking, StakingConfig::standard());
    }

    #[test]
    fn test_field_overrides() {
        let lookup = lookup_from(&[
            ("AGENT_STACK", "2000"),
            ("AGENT_SEED_POT", "120"),
            ("AGENT_MIN_BET", "20"),
            ("AGENT_BET_CAP", "500"),
            ("AGENT_ODDS_TABLE", "odds.json"),
        ]);
        let config = AgentConfig::from_lookup(lookup, None, None).unwrap();
        assert_eq!(config.staking.starting_stack, 2000);
        assert_eq!(config.staking.seed_pot, 120);
        assert_eq!(config.staking.min_bet, 20);
        assert_eq!(config.staking.bet_cap, BetCap::Fixed(500));
        assert_eq!(config.odds_table, Some(PathBuf::from("odds.json")));
    }

    #[test]
    fn test_bet_cap_stack() {
        let lookup = lookup_from(&[("AGENT_PRESET", "capped"), ("AGENT_BET_CAP", "STACK")]);
        let config = AgentConfig::from_lookup(lookup, None, None).unwrap();
        assert_eq!(config.staking.bet_cap, BetCap::Stack);
    }

    #[test]
    fn test_cli_odds_table_wins() {
        let lookup = lookup_from(&[("AGENT_ODDS_TABLE", "env.json")]);
        let config =
            AgentConfig::from_lookup(lookup, None, Some(PathBuf::from("cli.json"))).unwrap();
        assert_eq!(config.odds_table, Some(PathBuf::from("cli.json")));
    }

    #[test]
    fn test_unknown_preset_rejected() {
        let err = AgentConfig::from_lookup(lookup_from(&[]), Some("loose"), None).unwrap_err();
        assert!(err.to_string().contains("AGENT_PRESET"));
    }

    #[test]
    fn test_unparseable_value_rejected() {
        let lookup = lookup_from(&[("AGENT_SEED_POT", "lots")]);
        let err = AgentConfig::from_lookup(lookup, None, None).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref var, .. } if var == "AGENT_SEED_POT"));

        let lookup = lookup_from(&[("AGENT_BET_CAP", "-1")]);
        let err = AgentConfig::from_lookup(lookup, None, None).unwrap_err();
        assert!(err.to_string().contains("AGENT_BET_CAP"));
    }

    #[test]
    fn test_validation_catches_bad_staking() {
        let lookup = lookup_from(&[("AGENT_MIN_BET", "0")]);
        let config = AgentConfig::from_lookup(lookup, None, None).unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid { .. })));
    }
}
