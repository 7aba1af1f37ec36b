//! The immutable timecode value.
//!
//! A [`Timecode`] stores an absolute frame count together with the rate and
//! format it was created with. The `hours:minutes:seconds:frames` tuple is
//! derived from the count whenever it is needed.

use crate::config::{TimecodeConfig, TimecodeOptions};
use crate::convert::{self, Components};
use crate::error::{Result, TimecodeError};
use crate::format::FormatSpec;
use crate::parser::{Parser, TimecodeInput};
use crate::rate::RateSpec;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use tracing::debug;

/// A position in a video stream.
///
/// Equality, ordering and hashing look only at [`total_frames`](Self::total_frames);
/// rate and format are metadata. Two timecodes at different rates that happen
/// to share a frame count compare equal.
#[derive(Debug, Clone, Copy)]
pub struct Timecode {
    total_frames: u64,
    rate: RateSpec,
    format: FormatSpec,
}

impl Timecode {
    /// Create a timecode from its fields using the package defaults.
    ///
    /// ```rust
    /// use timecode::Timecode;
    ///
    /// let tc = Timecode::new(2, 0, 0, 12).unwrap();
    /// assert_eq!(tc.total_frames(), 216012);
    /// assert_eq!(tc.to_string(), "02:00:00:12");
    /// ```
    pub fn new(hours: u32, minutes: u32, seconds: u32, frames: u32) -> Result<Self> {
        Self::parse((hours, minutes, seconds, frames))
    }

    /// Create a timecode from any supported input using the package defaults.
    pub fn parse(input: impl Into<TimecodeInput>) -> Result<Self> {
        Parser::default().parse(input)
    }

    /// Create a timecode from any supported input with explicit options.
    ///
    /// ```rust
    /// use timecode::{Timecode, TimecodeOptions};
    ///
    /// let options = TimecodeOptions::new().with_fps(25.0);
    /// let tc = Timecode::with_options("00:00:01:05", &options).unwrap();
    /// assert_eq!(tc.total_frames(), 30);
    /// ```
    pub fn with_options(input: impl Into<TimecodeInput>, options: &TimecodeOptions) -> Result<Self> {
        Parser::default().parse_with(input, options)
    }

    /// Create a timecode from a frame count.
    ///
    /// Fails when the count lies beyond `99:99:99:99` at `rate`.
    pub fn from_frames(total_frames: u64, rate: RateSpec, format: FormatSpec) -> Result<Self> {
        let max = rate.max_frames();
        if total_frames > max {
            return Err(TimecodeError::overflow(
                i64::try_from(total_frames).unwrap_or(i64::MAX),
                max,
            ));
        }
        Ok(Self {
            total_frames,
            rate,
            format,
        })
    }

    /// Create a timecode from a validated tuple.
    #[must_use]
    pub fn from_components(components: Components, rate: RateSpec, format: FormatSpec) -> Self {
        Self {
            total_frames: components.to_frames(&rate),
            rate,
            format,
        }
    }

    /// Create the timecode nearest to `seconds` of elapsed time.
    ///
    /// Uses the fractional rate, so at 29.97 fps one hour of real time is
    /// 107892 frames.
    pub fn from_seconds(seconds: f64, options: &TimecodeOptions) -> Result<Self> {
        if !seconds.is_finite() || seconds < 0.0 {
            return Err(TimecodeError::InvalidSeconds { seconds });
        }
        let (rate, format) = options.resolve(&TimecodeConfig::DEFAULT)?;
        let frames = (seconds * rate.fps()).round();
        if frames > rate.max_frames() as f64 {
            return Err(TimecodeError::overflow(frames as i64, rate.max_frames()));
        }
        Self::from_frames(frames as u64, rate, format)
    }

    /// Absolute frame count from `00:00:00:00`.
    #[must_use]
    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    /// The derived `hours:minutes:seconds:frames` tuple.
    #[must_use]
    pub fn components(&self) -> Components {
        convert::decompose(self.total_frames, &self.rate)
    }

    /// Hours field.
    #[must_use]
    pub fn hours(&self) -> u8 {
        self.components().hours()
    }

    /// Minutes field.
    #[must_use]
    pub fn minutes(&self) -> u8 {
        self.components().minutes()
    }

    /// Seconds field.
    #[must_use]
    pub fn seconds(&self) -> u8 {
        self.components().seconds()
    }

    /// Frames field.
    #[must_use]
    pub fn frames(&self) -> u8 {
        self.components().frames()
    }

    /// The frame rate as given, possibly fractional.
    #[must_use]
    pub fn fps(&self) -> f64 {
        self.rate.fps()
    }

    /// Whether drop-frame counting is in use.
    #[must_use]
    pub fn is_dropframe(&self) -> bool {
        self.rate.is_dropframe()
    }

    /// Rate specification.
    #[must_use]
    pub fn rate(&self) -> &RateSpec {
        &self.rate
    }

    /// Format specification.
    #[must_use]
    pub fn format(&self) -> &FormatSpec {
        &self.format
    }

    /// Largest frame count representable at this timecode's rate.
    #[must_use]
    pub fn max_frames(&self) -> u64 {
        self.rate.max_frames()
    }

    /// Elapsed wall-clock seconds at the fractional rate.
    #[must_use]
    pub fn to_seconds(&self) -> f64 {
        self.total_frames as f64 / self.rate.fps()
    }

    /// Reinterpret the same tuple with drop-frame counting.
    #[must_use]
    pub fn to_dropframe(&self) -> Self {
        self.with_counting(true)
    }

    /// Reinterpret the same tuple without drop-frame counting.
    #[must_use]
    pub fn to_non_dropframe(&self) -> Self {
        self.with_counting(false)
    }

    fn with_counting(&self, dropframe: bool) -> Self {
        if self.rate.is_dropframe() == dropframe {
            return *self;
        }
        Self::from_components(self.components(), self.rate.with_dropframe(dropframe), self.format)
    }

    /// Reinterpret the same tuple at another frame rate.
    ///
    /// The result is non-drop-frame; delimiters are kept.
    ///
    /// ```rust
    /// use timecode::Timecode;
    ///
    /// let tc: Timecode = "00:01:00;04".parse().unwrap();
    /// let pal = tc.convert(25.0).unwrap();
    /// assert!(!pal.is_dropframe());
    /// assert_eq!(pal.to_string(), "00:01:00;04");
    /// assert_eq!(pal.total_frames(), 1504);
    /// ```
    pub fn convert(&self, fps: f64) -> Result<Self> {
        self.convert_with(fps, &TimecodeOptions::new())
    }

    /// Reinterpret the same tuple at another frame rate with explicit options.
    ///
    /// `fps` takes precedence over `options.fps`. Unset delimiters are
    /// inherited from this timecode; drop-frame defaults to off.
    pub fn convert_with(&self, fps: f64, options: &TimecodeOptions) -> Result<Self> {
        let inherited = TimecodeOptions {
            fps: None,
            dropframe: Some(false),
            delimiter: Some(self.format.delimiter()),
            frame_delimiter: Some(self.format.frame_delimiter()),
        };
        let (rate, format) = options
            .with_fps(fps)
            .or(inherited)
            .resolve(&TimecodeConfig::DEFAULT)?;

        let converted = Self::from_components(self.components(), rate, format);
        debug!(
            from = %self.rate,
            to = %rate,
            frames_before = self.total_frames,
            frames_after = converted.total_frames,
            "Converted timecode"
        );
        Ok(converted)
    }

    /// The following frame.
    pub fn next_frame(&self) -> Result<Self> {
        *self + 1
    }

    /// The preceding frame.
    pub fn previous_frame(&self) -> Result<Self> {
        *self - 1
    }

    /// A timecode with this one's rate and format holding `frames`.
    ///
    /// Fails when `frames` is negative or beyond the maximum for the rate.
    pub(crate) fn with_total_frames(&self, frames: i128) -> Result<Self> {
        if frames < 0 {
            return Err(TimecodeError::underflow(
                i64::try_from(frames).unwrap_or(i64::MIN),
            ));
        }
        let max = self.rate.max_frames();
        if frames > max as i128 {
            return Err(TimecodeError::overflow(
                i64::try_from(frames).unwrap_or(i64::MAX),
                max,
            ));
        }
        Ok(Self {
            total_frames: frames as u64,
            rate: self.rate,
            format: self.format,
        })
    }
}

impl Default for Timecode {
    fn default() -> Self {
        let config = TimecodeConfig::DEFAULT;
        Self {
            total_frames: 0,
            rate: RateSpec::flagged(config.fps, config.dropframe),
            format: FormatSpec::default(),
        }
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tc = self.components();
        f.write_str(&self.format.render(
            tc.hours(),
            tc.minutes(),
            tc.seconds(),
            tc.frames(),
        ))
    }
}

impl FromStr for Timecode {
    type Err = TimecodeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl PartialEq for Timecode {
    fn eq(&self, other: &Self) -> bool {
        self.total_frames == other.total_frames
    }
}

impl Eq for Timecode {}

impl Hash for Timecode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.total_frames.hash(state);
    }
}

impl PartialOrd for Timecode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Timecode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.total_frames.cmp(&other.total_frames)
    }
}
