//! Construction defaults and per-call option overrides.
//!
//! Options resolve in order: explicit [`TimecodeOptions`] fields, then values
//! inferred from the input (delimiters captured from a string), then the
//! [`TimecodeConfig`] the parser was built with.

use crate::error::Result;
use crate::format::FormatSpec;
use crate::rate::RateSpec;
use crate::{DEFAULT_DELIMITER, DEFAULT_DROPFRAME, DEFAULT_FPS, DEFAULT_FRAME_DELIMITER};
use serde::{Deserialize, Serialize};

/// Package-level defaults used when neither the caller nor the input supplies a value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimecodeConfig {
    /// Frame rate.
    pub fps: f64,
    /// Drop-frame counting.
    pub dropframe: bool,
    /// Separator between hours, minutes and seconds.
    pub delimiter: char,
    /// Separator before the frames field.
    pub frame_delimiter: char,
}

impl TimecodeConfig {
    /// The built-in defaults: 29.97 fps, non-drop-frame, `:` separators.
    pub const DEFAULT: Self = Self {
        fps: DEFAULT_FPS,
        dropframe: DEFAULT_DROPFRAME,
        delimiter: DEFAULT_DELIMITER,
        frame_delimiter: DEFAULT_FRAME_DELIMITER,
    };

    /// Check that the configured rate and delimiters are usable.
    pub fn validate(&self) -> Result<()> {
        RateSpec::new(self.fps, self.dropframe)?;
        FormatSpec::new(self.delimiter, self.frame_delimiter)?;
        Ok(())
    }
}

impl Default for TimecodeConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Per-call overrides; `None` fields fall through to inferred or default values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimecodeOptions {
    /// Frame rate.
    pub fps: Option<f64>,
    /// Drop-frame counting.
    pub dropframe: Option<bool>,
    /// Separator between hours, minutes and seconds.
    pub delimiter: Option<char>,
    /// Separator before the frames field.
    pub frame_delimiter: Option<char>,
}

impl TimecodeOptions {
    /// Options with nothing set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the frame rate.
    #[must_use]
    pub fn with_fps(mut self, fps: f64) -> Self {
        self.fps = Some(fps);
        self
    }

    /// Set drop-frame counting.
    #[must_use]
    pub fn with_dropframe(mut self, dropframe: bool) -> Self {
        self.dropframe = Some(dropframe);
        self
    }

    /// Set the field delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Set the frame delimiter.
    #[must_use]
    pub fn with_frame_delimiter(mut self, frame_delimiter: char) -> Self {
        self.frame_delimiter = Some(frame_delimiter);
        self
    }

    /// Fill unset fields from `fallback`.
    #[must_use]
    pub fn or(self, fallback: Self) -> Self {
        Self {
            fps: self.fps.or(fallback.fps),
            dropframe: self.dropframe.or(fallback.dropframe),
            delimiter: self.delimiter.or(fallback.delimiter),
            frame_delimiter: self.frame_delimiter.or(fallback.frame_delimiter),
        }
    }

    /// Resolve against `config` into validated rate and format specs.
    pub fn resolve(&self, config: &TimecodeConfig) -> Result<(RateSpec, FormatSpec)> {
        let rate = RateSpec::new(
            self.fps.unwrap_or(config.fps),
            self.dropframe.unwrap_or(config.dropframe),
        )?;
        let format = FormatSpec::new(
            self.delimiter.unwrap_or(config.delimiter),
            self.frame_delimiter.unwrap_or(config.frame_delimiter),
        )?;
        Ok((rate, format))
    }
}

impl From<&TimecodeConfig> for TimecodeOptions {
    fn from(config: &TimecodeConfig) -> Self {
        Self {
            fps: Some(config.fps),
            dropframe: Some(config.dropframe),
            delimiter: Some(config.delimiter),
            frame_delimiter: Some(config.frame_delimiter),
        }
    }
}
