//! Application settings
//!
//! Defaults can be overridden through environment variables:
//! - `CHECKERS_RESET_DELAY_MS`: pause between game over and the next game
//! - `CHECKERS_TWEEN_FRAMES`: frames a piece takes to slide to its new square

use std::env;
use std::str::FromStr;
use std::time::Duration;

use log::warn;

pub const RESET_DELAY_VAR: &str = "CHECKERS_RESET_DELAY_MS";
pub const TWEEN_FRAMES_VAR: &str = "CHECKERS_TWEEN_FRAMES";

/// GUI and timing configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppConfig {
    /// How long the result stays on screen before a new game starts
    pub reset_delay: Duration,
    /// Animation length of a move, in frames
    pub tween_frames: u32,
    /// Initial window size
    pub window_size: [f32; 2],
    /// Smallest window size
    pub min_window_size: [f32; 2],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            reset_delay: Duration::from_millis(5000),
            tween_frames: 9,
            window_size: [640.0, 720.0],
            min_window_size: [360.0, 420.0],
        }
    }
}

impl AppConfig {
    /// Defaults with environment overrides applied
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Defaults with overrides from `lookup`. Unparsable values are ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(ms) = parse_var::<u64, _>(&lookup, RESET_DELAY_VAR) {
            config.reset_delay = Duration::from_millis(ms);
        }
        if let Some(frames) = parse_var::<u32, _>(&lookup, TWEEN_FRAMES_VAR) {
            if frames == 0 {
                warn!("{} must be at least 1, keeping {}", TWEEN_FRAMES_VAR, config.tween_frames);
            } else {
                config.tween_frames = frames;
            }
        }

        config
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("ignoring {}={:?}: not a number", key, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.reset_delay, Duration::from_secs(5));
        assert_eq!(config.tween_frames, 9);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(|key| match key {
            RESET_DELAY_VAR => Some("1500".to_string()),
            TWEEN_FRAMES_VAR => Some(" 4 ".to_string()),
            _ => None,
        });
        assert_eq!(config.reset_delay, Duration::from_millis(1500));
        assert_eq!(config.tween_frames, 4);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = AppConfig::from_lookup(|key| match key {
            RESET_DELAY_VAR => Some("soon".to_string()),
            TWEEN_FRAMES_VAR => Some("0".to_string()),
            _ => None,
        });
        assert_eq!(config, AppConfig::default());
    }
}
