//! Error types for timecode operations.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for timecode operations.
pub type Result<T> = std::result::Result<T, TimecodeError>;

/// Broad category of a [`TimecodeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// A value fell outside the representable timecode domain.
    Range,
    /// An input string did not match the timecode pattern.
    Parse,
    /// A rate or format option was invalid.
    Config,
}

/// Errors that can occur during timecode operations.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq)]
pub enum TimecodeError {
    /// Invalid timecode component value.
    #[error("Invalid timecode component: {component} = {value} (max {max})")]
    InvalidComponent {
        /// Name of the invalid component (hours, minutes, seconds, frames).
        component: String,
        /// The invalid value that was provided.
        value: u64,
        /// The maximum allowed value for this component.
        max: u64,
    },

    /// Frame count above the largest representable timecode.
    #[error("Timecode overflow: {frames} frames exceeds maximum of {max}")]
    Overflow {
        /// The frame count that was produced.
        frames: i64,
        /// The largest frame count allowed at the rate in use.
        max: u64,
    },

    /// Arithmetic produced a negative frame count.
    #[error("Timecode underflow: {frames} frames")]
    Underflow {
        /// The negative frame count that was produced.
        frames: i64,
    },

    /// Division of a timecode by zero.
    #[error("Timecode division by zero")]
    DivisionByZero,

    /// Seconds value that cannot be placed on the frame grid.
    #[error("Invalid seconds value: {seconds}")]
    InvalidSeconds {
        /// The rejected seconds value.
        seconds: f64,
    },

    /// Invalid timecode format in string.
    #[error("Invalid timecode format: {message}")]
    InvalidFormat {
        /// Description of the format error.
        message: String,
    },

    /// Invalid frame rate.
    #[error("Invalid frame rate: {fps} ({reason})")]
    InvalidFrameRate {
        /// The rejected frame rate.
        fps: f64,
        /// Why the frame rate was rejected.
        reason: String,
    },

    /// Invalid delimiter character.
    #[error("Invalid delimiter {delimiter:?}: {reason}")]
    InvalidDelimiter {
        /// The rejected delimiter.
        delimiter: char,
        /// Why the delimiter was rejected.
        reason: String,
    },
}

impl TimecodeError {
    /// Create an invalid component error.
    pub fn invalid_component(component: impl Into<String>, value: u64, max: u64) -> Self {
        Self::InvalidComponent {
            component: component.into(),
            value,
            max,
        }
    }

    /// Create an overflow error.
    pub fn overflow(frames: i64, max: u64) -> Self {
        Self::Overflow { frames, max }
    }

    /// Create an underflow error.
    pub fn underflow(frames: i64) -> Self {
        Self::Underflow { frames }
    }

    /// Create an invalid format error.
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }

    /// Create an invalid frame rate error.
    pub fn invalid_frame_rate(fps: f64, reason: impl Into<String>) -> Self {
        Self::InvalidFrameRate {
            fps,
            reason: reason.into(),
        }
    }

    /// Create an invalid delimiter error.
    pub fn invalid_delimiter(delimiter: char, reason: impl Into<String>) -> Self {
        Self::InvalidDelimiter {
            delimiter,
            reason: reason.into(),
        }
    }

    /// The category this error belongs to.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidComponent { .. }
            | Self::Overflow { .. }
            | Self::Underflow { .. }
            | Self::DivisionByZero
            | Self::InvalidSeconds { .. } => ErrorKind::Range,
            Self::InvalidFormat { .. } => ErrorKind::Parse,
            Self::InvalidFrameRate { .. } | Self::InvalidDelimiter { .. } => ErrorKind::Config,
        }
    }

    /// Whether this is a range error.
    #[must_use]
    pub fn is_range(&self) -> bool {
        self.kind() == ErrorKind::Range
    }

    /// Whether this is a parse error.
    #[must_use]
    pub fn is_parse(&self) -> bool {
        self.kind() == ErrorKind::Parse
    }

    /// Whether this is a configuration error.
    #[must_use]
    pub fn is_config(&self) -> bool {
        self.kind() == ErrorKind::Config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_error_display() {
        let err = TimecodeError::invalid_format("missing separator");
        assert_eq!(
            err.to_string(),
            "Invalid timecode format: missing separator"
        );

        let err = TimecodeError::invalid_component("hours", 100, 99);
        assert_eq!(
            err.to_string(),
            "Invalid timecode component: hours = 100 (max 99)"
        );

        let err = TimecodeError::underflow(-3);
        assert_eq!(err.to_string(), "Timecode underflow: -3 frames");

        let err = TimecodeError::invalid_delimiter('a', "alphanumeric");
        assert_eq!(err.to_string(), "Invalid delimiter 'a': alphanumeric");
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(
            TimecodeError::invalid_component("frames", 120, 99).kind(),
            ErrorKind::Range
        );
        assert!(TimecodeError::overflow(10, 5).is_range());
        assert!(TimecodeError::DivisionByZero.is_range());
        assert!(TimecodeError::invalid_format("x").is_parse());
        assert!(TimecodeError::invalid_frame_rate(0.0, "not positive").is_config());
        assert!(TimecodeError::invalid_delimiter('1', "digit").is_config());
    }

    #[test]
    fn test_error_serialization() {
        let err = TimecodeError::invalid_format("test error");
        let json = serde_json::to_string(&err).unwrap();
        let decoded: TimecodeError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, decoded);
    }
}
