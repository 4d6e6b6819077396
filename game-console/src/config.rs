use anyhow::{Context, Result, anyhow};
use game_persistence::DEFAULT_SCORES_FILE;
use game_types::Language;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::Level;

#[derive(Debug, Clone)]
pub struct Config {
    pub scores_file: PathBuf,
    pub turn_seconds: u64,
    pub language: Language,
    pub checkpoint_games: bool,
    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let turn_seconds: u64 = var("TURN_SECONDS", "10")
            .parse()
            .context("Invalid TURN_SECONDS")?;
        if turn_seconds == 0 {
            return Err(anyhow!("TURN_SECONDS must be at least 1"));
        }

        let language_code = var("GAME_LANGUAGE", "ru");
        let language = Language::from_code(&language_code)
            .ok_or_else(|| anyhow!("Invalid GAME_LANGUAGE: {}", language_code))?;

        Ok(Self {
            scores_file: PathBuf::from(var("SCORES_FILE", DEFAULT_SCORES_FILE)),
            turn_seconds,
            language,
            checkpoint_games: var("CHECKPOINT_GAMES", "true")
                .parse()
                .context("Invalid CHECKPOINT_GAMES")?,
            log_level: Level::from_str(&var("LOG_LEVEL", "warn")).context("Invalid LOG_LEVEL")?,
        })
    }

    pub fn turn_limit(&self) -> Duration {
        Duration::from_secs(self.turn_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scores_file: PathBuf::from(DEFAULT_SCORES_FILE),
            turn_seconds: 10,
            language: Language::default(),
            checkpoint_games: true,
            log_level: Level::WARN,
        }
    }
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
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.scores_file, PathBuf::from("scores.json"));
        assert_eq!(config.turn_limit(), Duration::from_secs(10));
        assert_eq!(config.language, Language::Russian);
        assert!(config.checkpoint_games);
        assert_eq!(config.log_level, Level::WARN);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("SCORES_FILE", "/tmp/words.json"),
            ("TURN_SECONDS", "30"),
            ("GAME_LANGUAGE", "en"),
            ("CHECKPOINT_GAMES", "false"),
            ("LOG_LEVEL", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.scores_file, PathBuf::from("/tmp/words.json"));
        assert_eq!(config.turn_seconds, 30);
        assert_eq!(config.language, Language::English);
        assert!(!config.checkpoint_games);
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn test_invalid_values() {
        assert!(Config::from_lookup(lookup_from(&[("TURN_SECONDS", "soon")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("TURN_SECONDS", "0")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("GAME_LANGUAGE", "fr")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("CHECKPOINT_GAMES", "maybe")])).is_err());
    }
}
