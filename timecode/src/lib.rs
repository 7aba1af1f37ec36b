//! Video Timecode Values
//!
//! This crate models a position in a video stream as `HH:MM:SS:FF` at a given
//! frame rate, with optional SMPTE drop-frame counting:
//!
//! - **Construction** from a field tuple, an absolute frame count, or a
//!   delimited string
//! - **Drop-Frame Timecode**: skipped frame labels for 29.97/59.94 fps
//! - **Arithmetic** on frame counts with raw integer operands
//! - **Conversion** between frame rates and counting modes
//!
//! # Quick Start
//!
//! ```rust
//! use timecode::Timecode;
//!
//! // Fields at the default rate (29.97 fps, non-drop-frame)
//! let tc = Timecode::new(2, 0, 0, 12).unwrap();
//! assert_eq!(tc.total_frames(), 216012);
//!
//! // Parse from string
//! let tc2: Timecode = "01:30:45:12".parse().unwrap();
//! assert_eq!(tc2.to_string(), "01:30:45:12");
//!
//! // Arithmetic on frame counts
//! let tc3 = (tc2 + 100).unwrap();
//! assert_eq!(tc3.total_frames(), tc2.total_frames() + 100);
//! ```
//!
//! # Drop-Frame Timecode
//!
//! A `;` or `.` before the frames field selects drop-frame counting:
//!
//! ```rust
//! use timecode::Timecode;
//!
//! let tc: Timecode = "01:00:00;00".parse().unwrap();
//! assert!(tc.is_dropframe());
//! assert_eq!(tc.total_frames(), 107892);
//! ```
//!
//! # Options
//!
//! ```rust
//! use timecode::{Timecode, TimecodeOptions};
//!
//! let options = TimecodeOptions::new().with_fps(25.0).with_delimiter('.');
//! let tc = Timecode::with_options(1504u64, &options).unwrap();
//! assert_eq!(tc.to_string(), "00.01.00:04");
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod config;
pub mod convert;
pub mod dropframe;
pub mod error;
pub mod format;
mod ops;
pub mod parser;
pub mod rate;
pub mod timecode;

// Re-export main types
pub use config::{TimecodeConfig, TimecodeOptions};
pub use convert::{frames_to_tuple, max_frames, tuple_to_frames, Components, MAX_COMPONENT};
pub use error::{ErrorKind, Result, TimecodeError};
pub use format::FormatSpec;
pub use parser::{parse_timecode_text, ParsedText, Parser, TimecodeInput};
pub use rate::{FrameRate, RateSpec};
pub use timecode::Timecode;

// Re-export drop-frame utilities
pub use dropframe::{frames_dropped_until, is_dropped_frame, DropFrameConfig};

/// Default frame rate.
pub const DEFAULT_FPS: f64 = 29.97;

/// Default drop-frame setting.
pub const DEFAULT_DROPFRAME: bool = false;

/// Default separator between hours, minutes and seconds.
pub const DEFAULT_DELIMITER: char = ':';

/// Default separator before the frames field.
pub const DEFAULT_FRAME_DELIMITER: char = ':';

/// Create a timecode from its fields at `fps`.
///
/// # Example
/// ```rust
/// use timecode::timecode;
///
/// let tc = timecode(1, 30, 45, 12, 24.0, false).unwrap();
/// assert_eq!(tc.to_string(), "01:30:45:12");
/// ```
pub fn timecode(
    hours: u32,
    minutes: u32,
    seconds: u32,
    frames: u32,
    fps: f64,
    dropframe: bool,
) -> Result<Timecode> {
    let options = TimecodeOptions::new().with_fps(fps).with_dropframe(dropframe);
    Timecode::with_options((hours, minutes, seconds, frames), &options)
}
