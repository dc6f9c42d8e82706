//! Startup configuration read from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `BLOCKFALL_WIDTH` | 12 | Arena columns |
//! | `BLOCKFALL_HEIGHT` | 20 | Arena rows |
//! | `BLOCKFALL_DROP_INTERVAL_MS` | 1000 | Gravity interval |
//! | `BLOCKFALL_FRAME_MS` | 16 | Frame interval |
//! | `BLOCKFALL_SOLID_FLOOR` | off | `1`/`true`: pieces land on the bottom edge |
//! | `BLOCKFALL_LOG_PATH` | unset | Log file; logging is off when unset |

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::core::{GameState, Grid};
use crate::types::{ARENA_HEIGHT, ARENA_WIDTH, DROP_INTERVAL_MS, FRAME_MS};

pub const ENV_WIDTH: &str = "BLOCKFALL_WIDTH";
pub const ENV_HEIGHT: &str = "BLOCKFALL_HEIGHT";
pub const ENV_DROP_INTERVAL_MS: &str = "BLOCKFALL_DROP_INTERVAL_MS";
pub const ENV_FRAME_MS: &str = "BLOCKFALL_FRAME_MS";
pub const ENV_SOLID_FLOOR: &str = "BLOCKFALL_SOLID_FLOOR";
pub const ENV_LOG_PATH: &str = "BLOCKFALL_LOG_PATH";

/// Largest accepted arena width or height
pub const MAX_ARENA_SIDE: usize = 1024;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var}: invalid value {value:?}")]
    Invalid { var: &'static str, value: String },
    #[error("{var} must be greater than zero")]
    Zero { var: &'static str },
    #[error("{var} must be at most {max}")]
    TooLarge { var: &'static str, max: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub drop_interval_ms: u64,
    pub frame_ms: u64,
    pub solid_floor: bool,
    pub log_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
            drop_interval_ms: DROP_INTERVAL_MS,
            frame_ms: FRAME_MS,
            solid_floor: false,
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Create from an arbitrary variable lookup; unset variables use defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let log_path = lookup(ENV_LOG_PATH)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let drop_interval_ms =
            positive(&lookup, ENV_DROP_INTERVAL_MS, defaults.drop_interval_ms)?;

        Ok(Self {
            width: arena_side(&lookup, ENV_WIDTH, defaults.width)?,
            height: arena_side(&lookup, ENV_HEIGHT, defaults.height)?,
            drop_interval_ms,
            frame_ms: positive(&lookup, ENV_FRAME_MS, defaults.frame_ms)?,
            solid_floor: flag(&lookup, ENV_SOLID_FLOOR, defaults.solid_floor)?,
            log_path,
        })
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }

    /// Fresh game state with an empty arena of the configured size.
    pub fn build_state(&self) -> GameState {
        let arena = Grid::new(self.width, self.height).with_solid_floor(self.solid_floor);
        GameState::with_arena(arena, self.drop_interval_ms)
    }
}

fn positive<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr + Default + PartialEq,
{
    let Some(raw) = lookup(var) else {
        return Ok(default);
    };
    let value: T = raw.trim().parse().map_err(|_| ConfigError::Invalid {
        var,
        value: raw.clone(),
    })?;
    if value == T::default() {
        return Err(ConfigError::Zero { var });
    }
    Ok(value)
}

fn arena_side(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: usize,
) -> Result<usize, ConfigError> {
    let value = positive(lookup, var, default)?;
    if value > MAX_ARENA_SIDE {
        return Err(ConfigError::TooLarge {
            var,
            max: MAX_ARENA_SIDE,
        });
    }
    Ok(value)
}

fn flag(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: bool,
) -> Result<bool, ConfigError> {
    let Some(raw) = lookup(var) else {
        return Ok(default);
    };
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid { var, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_accepts_common_spellings() {
        let on = |_: &str| Some("TRUE".to_string());
        let off = |_: &str| Some("0".to_string());
        assert_eq!(flag(&on, ENV_SOLID_FLOOR, false), Ok(true));
        assert_eq!(flag(&off, ENV_SOLID_FLOOR, true), Ok(false));
    }

    #[test]
    fn positive_trims_whitespace() {
        let lookup = |_: &str| Some(" 30 ".to_string());
        assert_eq!(positive(&lookup, ENV_WIDTH, 12usize), Ok(30));
    }

    #[test]
    fn arena_side_accepts_the_maximum() {
        let lookup = |_: &str| Some(MAX_ARENA_SIDE.to_string());
        assert_eq!(arena_side(&lookup, ENV_HEIGHT, 20), Ok(MAX_ARENA_SIDE));
    }
}
