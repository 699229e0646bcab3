use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use game_core::DEFAULT_SUGGESTION_LIMIT;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
    #[error("TARGET_URL is required when TARGET_PROVIDER is remote")]
    MissingTargetUrl,
}

/// Where the player of the day comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetMode {
    Local,
    Remote,
}

impl FromStr for TargetMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(TargetMode::Local),
            "remote" => Ok(TargetMode::Remote),
            other => Err(other.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub players_file: PathBuf,
    pub target_mode: TargetMode,
    pub target_url: Option<String>,
    pub target_seed: u64,
    pub suggestion_limit: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup, falling back to defaults for missing keys
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let target_mode = parse_or(&lookup, "TARGET_PROVIDER", defaults.target_mode)?;
        let target_url = lookup("TARGET_URL").filter(|url| !url.trim().is_empty());
        if target_mode == TargetMode::Remote && target_url.is_none() {
            return Err(ConfigError::MissingTargetUrl);
        }

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_or(&lookup, "PORT", defaults.port)?,
            players_file: lookup("PLAYERS_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.players_file),
            target_mode,
            target_url,
            target_seed: parse_or(&lookup, "TARGET_SEED", defaults.target_seed)?,
            suggestion_limit: parse_or(&lookup, "SUGGESTION_LIMIT", defaults.suggestion_limit)?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            players_file: PathBuf::from("./data/players.json"),
            target_mode: TargetMode::Local,
            target_url: None,
            target_seed: 0,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value }),
        None => Ok(default),
    }
}
