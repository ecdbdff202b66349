use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::correct::LEVENSHTEIN_LIMIT;
use crate::error::{Error, Result};
use crate::trie::DEFAULT_MAX_WORD_LEN;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Prefix completion.
    #[default]
    Fill,
    /// Spelling correction.
    Correct,
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "f" | "fill" => Ok(Mode::Fill),
            "c" | "correct" => Ok(Mode::Correct),
            other => Err(format!("unknown mode '{}', expected 'fill' or 'correct'", other)),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Fill => write!(f, "fill"),
            Mode::Correct => write!(f, "correct"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Longest word accepted into either trie.
    pub max_word_len: usize,
    /// Maximum number of suggestions per request.
    pub limit: usize,
    /// Weight of edit-distance closeness against frequency when correcting.
    pub alpha: f64,
    pub max_distance: usize,
    pub mode: Mode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_word_len: DEFAULT_MAX_WORD_LEN,
            limit: 3,
            alpha: 0.7,
            max_distance: LEVENSHTEIN_LIMIT,
            mode: Mode::Fill,
        }
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        log::info!("loading config: {}", path.as_ref().display());
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(Error::InvalidConfig(format!(
                "alpha must be within [0, 1], got {}",
                self.alpha
            )));
        }
        if self.max_word_len == 0 {
            return Err(Error::InvalidConfig("max_word_len must be at least 1".into()));
        }
        if self.limit == 0 {
            return Err(Error::InvalidConfig("limit must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.limit, 3);
        assert_eq!(config.max_distance, 2);
    }

    #[test]
    fn test_sample_config_matches_defaults() {
        let config = Config::from_toml_str(include_str!("../config.sample.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_overrides() {
        let text = "limit = 10\nalpha = 0.5\nmode = \"correct\"\n";
        let config = Config::from_toml_str(text).unwrap();
        assert_eq!(config.limit, 10);
        assert_eq!(config.alpha, 0.5);
        assert_eq!(config.mode, Mode::Correct);
        assert_eq!(config.max_word_len, 100);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            Config::from_toml_str("alpha = 1.5"),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            Config::from_toml_str("limit = 0"),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            Config::from_toml_str("limit = \"many\""),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("f".parse::<Mode>(), Ok(Mode::Fill));
        assert_eq!("correct".parse::<Mode>(), Ok(Mode::Correct));
        assert!("x".parse::<Mode>().is_err());
        assert_eq!(Mode::Correct.to_string(), "correct");
    }
}
