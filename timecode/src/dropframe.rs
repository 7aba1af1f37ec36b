//! Drop-frame timecode arithmetic.
//!
//! Drop-frame timecode compensates for the difference between 30fps and 29.97fps
//! (or 60fps and 59.94fps) by "dropping" frame numbers at specific intervals.
//!
//! The rules are:
//! - Skip frames 0 and 1 (or 0-3 for 59.94) at the start of each minute
//! - Except for minutes 0, 10, 20, 30, 40, 50
//!
//! Only frame *labels* are skipped; no picture is discarded. Other nominal
//! rates skip `round(nominal / 15)` labels per minute.

use crate::rate::RateSpec;
use serde::{Deserialize, Serialize};

/// Drop-frame configuration for a nominal frame rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropFrameConfig {
    /// Number of frames dropped per minute (except every 10th minute)
    pub frames_dropped_per_minute: u32,
    /// Nominal frame rate
    pub nominal_fps: u32,
    /// Frames per 10 minutes (accounting for drops)
    pub frames_per_10_minutes: u64,
    /// Frames per minute (accounting for drops, for non-10th minutes)
    pub frames_per_minute: u64,
}

impl DropFrameConfig {
    /// Get the drop-frame configuration for 29.97 fps.
    #[must_use]
    pub const fn for_29_97() -> Self {
        Self {
            frames_dropped_per_minute: 2,
            nominal_fps: 30,
            // 30 * 60 * 10 - 9 * 2
            frames_per_10_minutes: 17982,
            // 30 * 60 - 2
            frames_per_minute: 1798,
        }
    }

    /// Get the drop-frame configuration for 59.94 fps.
    #[must_use]
    pub const fn for_59_94() -> Self {
        Self {
            frames_dropped_per_minute: 4,
            nominal_fps: 60,
            // 60 * 60 * 10 - 9 * 4
            frames_per_10_minutes: 35964,
            // 60 * 60 - 4
            frames_per_minute: 3596,
        }
    }

    /// Get the configuration for a nominal rate.
    ///
    /// Returns `None` when the rate is too low to skip any frame numbers.
    #[must_use]
    pub fn for_nominal_fps(nominal_fps: u32) -> Option<Self> {
        match nominal_fps {
            30 => Some(Self::for_29_97()),
            60 => Some(Self::for_59_94()),
            _ => {
                let dropped = frames_dropped_per_minute(nominal_fps);
                if dropped == 0 {
                    return None;
                }
                let full_minute = nominal_fps as u64 * 60;
                Some(Self {
                    frames_dropped_per_minute: dropped,
                    nominal_fps,
                    frames_per_10_minutes: full_minute * 10 - 9 * dropped as u64,
                    frames_per_minute: full_minute - dropped as u64,
                })
            }
        }
    }

    /// Frame labels skipped over `total_minutes` whole minutes.
    #[must_use]
    pub fn dropped_before_minute(&self, total_minutes: u64) -> u64 {
        self.frames_dropped_per_minute as u64 * (total_minutes - total_minutes / 10)
    }

    /// Map a drop-frame count to the equivalent non-drop count, re-inserting
    /// the skipped labels so the result decomposes positionally.
    #[must_use]
    pub fn to_nominal_count(&self, frame_count: u64) -> u64 {
        let drop = self.frames_dropped_per_minute as u64;
        let ten_minute_blocks = frame_count / self.frames_per_10_minutes;
        let remainder = frame_count % self.frames_per_10_minutes;

        // The first minute of each ten-minute block keeps all of its labels.
        let skipped_in_block = if remainder > drop {
            drop * ((remainder - drop) / self.frames_per_minute)
        } else {
            0
        };

        frame_count + 9 * drop * ten_minute_blocks + skipped_in_block
    }
}

/// Frame labels skipped per minute at a nominal rate, `round(nominal / 15)`.
#[must_use]
pub fn frames_dropped_per_minute(nominal_fps: u32) -> u32 {
    (nominal_fps + 7) / 15
}

/// Check if a timecode label is one that drop-frame counting skips.
#[must_use]
pub fn is_dropped_frame(minutes: u8, seconds: u8, frames: u8, rate: &RateSpec) -> bool {
    let config = match rate.drop_frame_config() {
        Some(c) => c,
        None => return false,
    };

    // Frames are dropped at the start of each minute except every 10th minute
    seconds == 0 && minutes % 10 != 0 && (frames as u32) < config.frames_dropped_per_minute
}

/// Calculate the number of frame labels skipped before `hours:minutes:00`.
#[must_use]
pub fn frames_dropped_until(hours: u8, minutes: u8, rate: &RateSpec) -> u64 {
    rate.drop_frame_config().map_or(0, |config| {
        config.dropped_before_minute(hours as u64 * 60 + minutes as u64)
    })
}
