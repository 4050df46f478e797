//! Configuration loading from environment.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use auction_repo::DEFAULT_EXPIRY_DAYS;

/// Upper bound for `AUCTION_EXPIRY_DAYS`; the expiry cutoff must stay a valid date.
pub const MAX_EXPIRY_DAYS: u64 = 3650;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(anyhow::anyhow!("Unknown LOG_FORMAT: {}", other)),
        }
    }
}

/// Application configuration.
#[derive(Debug)]
pub struct Config {
    pub expiry_days: u64,
    pub sweep_interval: Duration,
    pub sweep_once: bool,
    pub seed_demo_auctions: bool,
    pub log_format: LogFormat,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let expiry_days = parse_or(&lookup, "AUCTION_EXPIRY_DAYS", DEFAULT_EXPIRY_DAYS)?;
        if expiry_days > MAX_EXPIRY_DAYS {
            anyhow::bail!(
                "AUCTION_EXPIRY_DAYS must be at most {}, got {}",
                MAX_EXPIRY_DAYS,
                expiry_days
            );
        }

        let interval_secs: u64 = parse_or(&lookup, "SWEEP_INTERVAL_SECS", 60)?;
        if interval_secs == 0 {
            anyhow::bail!("SWEEP_INTERVAL_SECS must be greater than zero");
        }

        Ok(Self {
            expiry_days,
            sweep_interval: Duration::from_secs(interval_secs),
            sweep_once: parse_or(&lookup, "SWEEP_ONCE", false)?,
            seed_demo_auctions: parse_or(&lookup, "SEED_DEMO_AUCTIONS", false)?,
            log_format: parse_or(&lookup, "LOG_FORMAT", LogFormat::Text)?,
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid {}={:?}: {}", key, raw, e)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.expiry_days, 7);
        assert_eq!(config.sweep_interval, Duration::from_secs(60));
        assert!(!config.sweep_once);
        assert!(!config.seed_demo_auctions);
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("AUCTION_EXPIRY_DAYS", "3"),
            ("SWEEP_INTERVAL_SECS", "5"),
            ("SWEEP_ONCE", "true"),
            ("LOG_FORMAT", "JSON"),
        ])
        .unwrap();
        assert_eq!(config.expiry_days, 3);
        assert_eq!(config.sweep_interval, Duration::from_secs(5));
        assert!(config.sweep_once);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_number_fails() {
        assert!(config_from(&[("AUCTION_EXPIRY_DAYS", "a week")]).is_err());
    }

    #[test]
    fn test_out_of_range_expiry_fails() {
        let err = config_from(&[("AUCTION_EXPIRY_DAYS", "100000000")]).unwrap_err();
        assert!(err.to_string().contains("AUCTION_EXPIRY_DAYS"));
    }

    #[test]
    fn test_max_expiry_is_accepted() {
        let config = config_from(&[("AUCTION_EXPIRY_DAYS", "3650")]).unwrap();
        assert_eq!(config.expiry_days, MAX_EXPIRY_DAYS);
    }

    #[test]
    fn test_zero_interval_fails() {
        assert!(config_from(&[("SWEEP_INTERVAL_SECS", "0")]).is_err());
    }
}
