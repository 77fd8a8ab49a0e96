//! Task list tuning knobs.
//!
//! # Responsibility
//! - Hold animation timings and optional input bounds in one place.
//! - Parse JSON overrides supplied by the host app.
//!
//! # Invariants
//! - A config returned by `from_json_str` has passed `validate()`.
//! - Missing JSON fields fall back to the reference timings.

use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

const DEFAULT_FADE_IN_MS: u32 = 300;
const DEFAULT_SPRING_FRICTION: f64 = 4.0;
const DEFAULT_PULSE_DIM_TO: f64 = 0.5;
const DEFAULT_PULSE_STEP_MS: u32 = 200;
const DEFAULT_FADE_OUT_MS: u32 = 300;
const DEFAULT_INITIAL_OPACITY: f64 = 0.0;
const DEFAULT_INITIAL_SCALE: f64 = 0.8;

/// Runtime configuration for store animations and input validation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TaskListConfig {
    /// Opacity tween length when a task appears.
    pub fade_in_ms: u32,
    /// Spring friction for the appearance scale.
    pub spring_friction: f64,
    /// Feedback value reached at the dim step of the toggle pulse.
    pub pulse_dim_to: f64,
    /// Duration of each pulse step.
    pub pulse_step_ms: u32,
    /// Opacity tween length before a task is removed.
    pub fade_out_ms: u32,
    pub initial_opacity: f64,
    pub initial_scale: f64,
    /// Unbounded when `None`.
    pub max_text_chars: Option<usize>,
}

impl Default for TaskListConfig {
    fn default() -> Self {
        Self {
            fade_in_ms: DEFAULT_FADE_IN_MS,
            spring_friction: DEFAULT_SPRING_FRICTION,
            pulse_dim_to: DEFAULT_PULSE_DIM_TO,
            pulse_step_ms: DEFAULT_PULSE_STEP_MS,
            fade_out_ms: DEFAULT_FADE_OUT_MS,
            initial_opacity: DEFAULT_INITIAL_OPACITY,
            initial_scale: DEFAULT_INITIAL_SCALE,
            max_text_chars: None,
        }
    }
}

impl TaskListConfig {
    /// Parses a JSON object of overrides and validates the result.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    /// - `ZeroDuration` for any zero-length tween.
    /// - `OutOfRange` for friction <= 0, opacity values outside `0..=1`,
    ///   a non-positive initial scale, or a zero text limit.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("fade_in_ms", self.fade_in_ms),
            ("pulse_step_ms", self.pulse_step_ms),
            ("fade_out_ms", self.fade_out_ms),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroDuration(field));
            }
        }

        if !(self.spring_friction > 0.0) {
            return Err(ConfigError::OutOfRange {
                field: "spring_friction",
                value: self.spring_friction,
            });
        }
        for (field, value) in [
            ("pulse_dim_to", self.pulse_dim_to),
            ("initial_opacity", self.initial_opacity),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::OutOfRange { field, value });
            }
        }
        if !(self.initial_scale > 0.0) {
            return Err(ConfigError::OutOfRange {
                field: "initial_scale",
                value: self.initial_scale,
            });
        }
        if self.max_text_chars == Some(0) {
            return Err(ConfigError::OutOfRange {
                field: "max_text_chars",
                value: 0.0,
            });
        }
        Ok(())
    }
}

/// Configuration parse/validation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Parse(String),
    ZeroDuration(&'static str),
    OutOfRange { field: &'static str, value: f64 },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(message) => write!(f, "invalid task list config: {message}"),
            Self::ZeroDuration(field) => write!(f, "`{field}` must be greater than zero"),
            Self::OutOfRange { field, value } => write!(f, "`{field}` is out of range: {value}"),
        }
    }
}

impl Error for ConfigError {}
