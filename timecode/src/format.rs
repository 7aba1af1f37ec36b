//! Delimiter configuration for rendering timecodes as text.

use crate::error::{Result, TimecodeError};
use crate::{DEFAULT_DELIMITER, DEFAULT_FRAME_DELIMITER};
use serde::Serialize;

/// Separators used between timecode fields.
///
/// `delimiter` separates hours, minutes and seconds; `frame_delimiter` sits
/// before the frames field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FormatSpec {
    delimiter: char,
    frame_delimiter: char,
}

impl FormatSpec {
    /// Create a format, rejecting alphanumeric delimiters.
    pub fn new(delimiter: char, frame_delimiter: char) -> Result<Self> {
        validate_delimiter(delimiter)?;
        validate_delimiter(frame_delimiter)?;
        Ok(Self {
            delimiter,
            frame_delimiter,
        })
    }

    /// Separator between hours, minutes and seconds.
    #[must_use]
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Separator before the frames field.
    #[must_use]
    pub fn frame_delimiter(&self) -> char {
        self.frame_delimiter
    }

    /// Render a tuple as `HH<d>MM<d>SS<fd>FF`.
    #[must_use]
    pub fn render(&self, hours: u8, minutes: u8, seconds: u8, frames: u8) -> String {
        format!(
            "{:02}{d}{:02}{d}{:02}{}{:02}",
            hours,
            minutes,
            seconds,
            self.frame_delimiter,
            frames,
            d = self.delimiter
        )
    }
}

impl Default for FormatSpec {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            frame_delimiter: DEFAULT_FRAME_DELIMITER,
        }
    }
}

pub(crate) fn validate_delimiter(delimiter: char) -> Result<()> {
    if delimiter.is_alphanumeric() {
        return Err(TimecodeError::invalid_delimiter(
            delimiter,
            "delimiters must not be alphanumeric",
        ));
    }
    Ok(())
}
