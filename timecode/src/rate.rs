//! Frame rate handling.
//!
//! A [`RateSpec`] pairs a frame rate with the drop-frame flag. The rate may be
//! fractional (29.97, 23.976); all frame-count arithmetic uses the rate rounded
//! to the nearest whole number, the *nominal* rate, while the original value is
//! kept for reporting and wall-clock conversions.

use crate::dropframe::DropFrameConfig;
use crate::error::{Result, TimecodeError};
use serde::Serialize;
use std::fmt;
use tracing::warn;

/// Largest nominal rate whose frame numbers still fit the two-digit field.
pub const MAX_NOMINAL_FPS: u32 = 100;

/// Common frame rates used in video production.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FrameRate {
    /// 23.976 fps (24000/1001, NTSC film)
    Fps23_976,
    /// 24 fps (film)
    Fps24,
    /// 25 fps (PAL)
    Fps25,
    /// 29.97 fps (30000/1001, NTSC)
    Fps29_97,
    /// 30 fps
    Fps30,
    /// 48 fps (HFR film)
    Fps48,
    /// 50 fps (PAL)
    Fps50,
    /// 59.94 fps (60000/1001, NTSC)
    Fps59_94,
    /// 60 fps
    Fps60,
}

impl FrameRate {
    /// Get the frame rate as a rational number (numerator, denominator).
    #[must_use]
    pub fn as_rational(&self) -> (u32, u32) {
        match self {
            Self::Fps23_976 => (24000, 1001),
            Self::Fps24 => (24, 1),
            Self::Fps25 => (25, 1),
            Self::Fps29_97 => (30000, 1001),
            Self::Fps30 => (30, 1),
            Self::Fps48 => (48, 1),
            Self::Fps50 => (50, 1),
            Self::Fps59_94 => (60000, 1001),
            Self::Fps60 => (60, 1),
        }
    }

    /// Get the frame rate as a floating point value.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        let (num, den) = self.as_rational();
        num as f64 / den as f64
    }

    /// Get the nominal frame rate (integer frames per second for timecode display).
    #[must_use]
    pub fn nominal_fps(&self) -> u32 {
        match self {
            Self::Fps23_976 | Self::Fps24 => 24,
            Self::Fps25 => 25,
            Self::Fps29_97 | Self::Fps30 => 30,
            Self::Fps48 => 48,
            Self::Fps50 => 50,
            Self::Fps59_94 | Self::Fps60 => 60,
        }
    }

    /// Check if this frame rate is conventionally counted with drop-frame timecode.
    #[must_use]
    pub fn is_drop_frame_rate(&self) -> bool {
        matches!(self, Self::Fps29_97 | Self::Fps59_94)
    }

    /// Build a [`RateSpec`] for this rate.
    #[must_use]
    pub fn rate_spec(&self, dropframe: bool) -> RateSpec {
        RateSpec::flagged(self.as_f64(), dropframe)
    }
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fps23_976 => write!(f, "23.976"),
            Self::Fps24 => write!(f, "24"),
            Self::Fps25 => write!(f, "25"),
            Self::Fps29_97 => write!(f, "29.97"),
            Self::Fps30 => write!(f, "30"),
            Self::Fps48 => write!(f, "48"),
            Self::Fps50 => write!(f, "50"),
            Self::Fps59_94 => write!(f, "59.94"),
            Self::Fps60 => write!(f, "60"),
        }
    }
}

/// A validated frame rate and drop-frame flag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RateSpec {
    fps: f64,
    dropframe: bool,
}

impl RateSpec {
    /// Create a rate specification.
    ///
    /// The rate must be finite and round to a nominal rate between 1 and
    /// [`MAX_NOMINAL_FPS`].
    pub fn new(fps: f64, dropframe: bool) -> Result<Self> {
        validate_fps(fps)?;
        Ok(Self::flagged(fps, dropframe))
    }

    /// Create a non-drop-frame rate specification.
    pub fn non_drop(fps: f64) -> Result<Self> {
        Self::new(fps, false)
    }

    // Callers guarantee `fps` already passed `validate_fps`.
    pub(crate) fn flagged(fps: f64, dropframe: bool) -> Self {
        let spec = Self { fps, dropframe };
        if dropframe && !spec.is_drop_frame_eligible() {
            warn!(
                fps,
                nominal = spec.nominal_fps(),
                dropped_per_minute = spec.drop_frames_per_minute(),
                "Drop-frame requested outside the 30/60 fps family; using proportional skip count"
            );
        }
        spec
    }

    /// The frame rate as given, possibly fractional.
    #[must_use]
    pub fn fps(&self) -> f64 {
        self.fps
    }

    /// Whether drop-frame counting is enabled.
    #[must_use]
    pub fn is_dropframe(&self) -> bool {
        self.dropframe
    }

    /// The rate rounded to whole frames per second.
    #[must_use]
    pub fn nominal_fps(&self) -> u32 {
        self.fps.round() as u32
    }

    /// Whether the nominal rate belongs to the 30/60 fps drop-frame family.
    #[must_use]
    pub fn is_drop_frame_eligible(&self) -> bool {
        matches!(self.nominal_fps(), 30 | 60)
    }

    /// Frame numbers skipped at the start of each non-tenth minute.
    ///
    /// Zero when drop-frame is disabled.
    #[must_use]
    pub fn drop_frames_per_minute(&self) -> u32 {
        self.drop_frame_config()
            .map_or(0, |config| config.frames_dropped_per_minute)
    }

    /// Drop-frame constants for this rate, if drop-frame counting applies.
    #[must_use]
    pub fn drop_frame_config(&self) -> Option<DropFrameConfig> {
        if self.dropframe {
            DropFrameConfig::for_nominal_fps(self.nominal_fps())
        } else {
            None
        }
    }

    /// The same rate with drop-frame set to `dropframe`.
    #[must_use]
    pub fn with_dropframe(&self, dropframe: bool) -> Self {
        if dropframe == self.dropframe {
            *self
        } else {
            Self::flagged(self.fps, dropframe)
        }
    }

    /// Frame count of `99:99:99:99`, the largest representable timecode.
    #[must_use]
    pub fn max_frames(&self) -> u64 {
        crate::convert::max_frames(self)
    }
}

impl From<FrameRate> for RateSpec {
    /// Uses drop-frame for the NTSC rates that conventionally require it.
    fn from(frame_rate: FrameRate) -> Self {
        frame_rate.rate_spec(frame_rate.is_drop_frame_rate())
    }
}

impl fmt::Display for RateSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.dropframe {
            write!(f, "{} fps DF", self.fps)
        } else {
            write!(f, "{} fps NDF", self.fps)
        }
    }
}

pub(crate) fn validate_fps(fps: f64) -> Result<()> {
    if !fps.is_finite() {
        return Err(TimecodeError::invalid_frame_rate(fps, "not a finite number"));
    }
    if fps <= 0.0 {
        return Err(TimecodeError::invalid_frame_rate(fps, "must be positive"));
    }
    let nominal = fps.round();
    if nominal < 1.0 {
        return Err(TimecodeError::invalid_frame_rate(
            fps,
            "rounds to zero frames per second",
        ));
    }
    if nominal > MAX_NOMINAL_FPS as f64 {
        return Err(TimecodeError::invalid_frame_rate(
            fps,
            format!("frame numbers above {} cannot be displayed", MAX_NOMINAL_FPS - 1),
        ));
    }
    Ok(())
}
