//! Startup configuration from environment variables.
//!
//! - `MATH_QUEST_SEED`: u64 seed for problem generation (default: random)
//! - `MATH_QUEST_TOPIC`: initially selected topic (default: "addition")
//! - `MATH_QUEST_DIFFICULTY`: initially selected difficulty (default: "easy")
//! - `MATH_QUEST_LOG_PATH`: write logs to this file (default: logging off)
//! - `MATH_QUEST_LOG_LEVEL`: "error" | "warn" | "info" | "debug" | "trace" (default: "info")
//!
//! Logs never go to stderr: the game owns the terminal.

use std::env;
use std::path::PathBuf;

use log::LevelFilter;

use crate::types::{Difficulty, Topic};

pub const SEED_VAR: &str = "MATH_QUEST_SEED";
pub const TOPIC_VAR: &str = "MATH_QUEST_TOPIC";
pub const DIFFICULTY_VAR: &str = "MATH_QUEST_DIFFICULTY";
pub const LOG_PATH_VAR: &str = "MATH_QUEST_LOG_PATH";
pub const LOG_LEVEL_VAR: &str = "MATH_QUEST_LOG_LEVEL";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}={value:?} is not a valid seed (expected an unsigned integer)")]
    InvalidSeed { var: &'static str, value: String },
    #[error("{var}={value:?} is not a topic (addition, subtraction, multiplication, division)")]
    InvalidTopic { var: &'static str, value: String },
    #[error("{var}={value:?} is not a difficulty (easy, medium, hard)")]
    InvalidDifficulty { var: &'static str, value: String },
    #[error("{var}={value:?} is not a log level (error, warn, info, debug, trace)")]
    InvalidLogLevel { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    /// Fixed seed, or `None` to draw one at startup
    pub seed: Option<u64>,
    pub topic: Topic,
    pub difficulty: Difficulty,
    pub log_path: Option<PathBuf>,
    pub log_level: LevelFilter,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            seed: None,
            topic: Topic::Addition,
            difficulty: Difficulty::Easy,
            log_path: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl QuizConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup (tests pass a map instead of the process env).
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(value) = get(SEED_VAR) {
            config.seed = Some(value.trim().parse().map_err(|_| ConfigError::InvalidSeed {
                var: SEED_VAR,
                value: value.clone(),
            })?);
        }

        if let Some(value) = get(TOPIC_VAR) {
            config.topic = Topic::from_str(&value).ok_or(ConfigError::InvalidTopic {
                var: TOPIC_VAR,
                value,
            })?;
        }

        if let Some(value) = get(DIFFICULTY_VAR) {
            config.difficulty =
                Difficulty::from_str(&value).ok_or(ConfigError::InvalidDifficulty {
                    var: DIFFICULTY_VAR,
                    value,
                })?;
        }

        config.log_path = get(LOG_PATH_VAR).map(PathBuf::from);

        if let Some(value) = get(LOG_LEVEL_VAR) {
            config.log_level = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidLogLevel {
                    var: LOG_LEVEL_VAR,
                    value: value.clone(),
                })?;
        }

        Ok(config)
    }
}
