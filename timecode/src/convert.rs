//! Conversion between timecode components and absolute frame counts.
//!
//! Every field of a timecode lies in `0..=99`, so the representable domain at a
//! given rate runs from frame 0 up to the count of `99:99:99:99`. Counts whose
//! hours would pass 99 are decomposed by saturating each field at 99 and
//! carrying the remainder into the next smaller one, which keeps the whole
//! domain representable and `99:99:99:99` round-tripping.

use crate::error::{Result, TimecodeError};
use crate::rate::RateSpec;
use serde::Serialize;
use std::fmt;
use tracing::trace;

/// Largest value of any timecode field.
pub const MAX_COMPONENT: u8 = 99;

/// A validated `hours:minutes:seconds:frames` tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Components {
    hours: u8,
    minutes: u8,
    seconds: u8,
    frames: u8,
}

impl Components {
    /// Create a tuple, checking every field against `0..=99`.
    pub fn new(hours: u32, minutes: u32, seconds: u32, frames: u32) -> Result<Self> {
        Ok(Self {
            hours: check_component("hours", hours)?,
            minutes: check_component("minutes", minutes)?,
            seconds: check_component("seconds", seconds)?,
            frames: check_component("frames", frames)?,
        })
    }

    /// Hours field.
    #[must_use]
    pub fn hours(&self) -> u8 {
        self.hours
    }

    /// Minutes field.
    #[must_use]
    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    /// Seconds field.
    #[must_use]
    pub fn seconds(&self) -> u8 {
        self.seconds
    }

    /// Frames field.
    #[must_use]
    pub fn frames(&self) -> u8 {
        self.frames
    }

    /// The fields as a plain tuple.
    #[must_use]
    pub fn as_tuple(&self) -> (u8, u8, u8, u8) {
        (self.hours, self.minutes, self.seconds, self.frames)
    }

    /// Absolute frame count of this tuple at `rate`.
    #[must_use]
    pub fn to_frames(&self, rate: &RateSpec) -> u64 {
        let fps = rate.nominal_fps() as u64;
        let total_minutes = self.hours as u64 * 60 + self.minutes as u64;
        let nominal = (total_minutes * 60 + self.seconds as u64) * fps + self.frames as u64;

        match rate.drop_frame_config() {
            Some(config) => nominal - config.dropped_before_minute(total_minutes),
            None => nominal,
        }
    }
}

impl From<Components> for (u8, u8, u8, u8) {
    fn from(components: Components) -> Self {
        components.as_tuple()
    }
}

impl fmt::Display for Components {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds, self.frames
        )
    }
}

fn check_component(component: &str, value: u32) -> Result<u8> {
    if value > MAX_COMPONENT as u32 {
        return Err(TimecodeError::invalid_component(
            component,
            value as u64,
            MAX_COMPONENT as u64,
        ));
    }
    Ok(value as u8)
}

/// Convert a timecode tuple to an absolute frame count.
///
/// Drop-frame rates subtract the skipped frame labels of every minute that is
/// not a multiple of ten. Labels that drop-frame counting never displays are
/// accepted and computed by the same formula.
pub fn tuple_to_frames(
    hours: u32,
    minutes: u32,
    seconds: u32,
    frames: u32,
    rate: &RateSpec,
) -> Result<u64> {
    let components = Components::new(hours, minutes, seconds, frames)?;
    Ok(components.to_frames(rate))
}

/// Convert an absolute frame count to a timecode tuple.
///
/// Fails when `frame_count` lies beyond `99:99:99:99` at this rate.
pub fn frames_to_tuple(frame_count: u64, rate: &RateSpec) -> Result<Components> {
    let max = max_frames(rate);
    if frame_count > max {
        return Err(TimecodeError::overflow(
            i64::try_from(frame_count).unwrap_or(i64::MAX),
            max,
        ));
    }
    Ok(decompose(frame_count, rate))
}

/// Frame count of `99:99:99:99` at `rate`.
#[must_use]
pub fn max_frames(rate: &RateSpec) -> u64 {
    let max = MAX_COMPONENT;
    Components {
        hours: max,
        minutes: max,
        seconds: max,
        frames: max,
    }
    .to_frames(rate)
}

// Callers guarantee `frame_count <= max_frames(rate)`.
pub(crate) fn decompose(frame_count: u64, rate: &RateSpec) -> Components {
    let nominal = match rate.drop_frame_config() {
        Some(config) => config.to_nominal_count(frame_count),
        None => frame_count,
    };

    let fps = rate.nominal_fps() as u64;
    let cap = MAX_COMPONENT as u64;
    let frames_per_minute = fps * 60;
    let frames_per_hour = frames_per_minute * 60;

    let hours = (nominal / frames_per_hour).min(cap);
    let mut remaining = nominal - hours * frames_per_hour;
    let minutes = (remaining / frames_per_minute).min(cap);
    remaining -= minutes * frames_per_minute;
    let seconds = (remaining / fps).min(cap);
    remaining -= seconds * fps;

    trace!(
        frame_count,
        nominal,
        hours,
        minutes,
        seconds,
        frames = remaining,
        "Decomposed frame count"
    );

    Components {
        hours: hours as u8,
        minutes: minutes as u8,
        seconds: seconds as u8,
        frames: remaining.min(cap) as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ndf(fps: f64) -> RateSpec {
        RateSpec::non_drop(fps).unwrap()
    }

    fn df(fps: f64) -> RateSpec {
        RateSpec::new(fps, true).unwrap()
    }

    #[test]
    fn test_non_drop_frame_count() {
        assert_eq!(tuple_to_frames(2, 0, 0, 12, &ndf(29.97)).unwrap(), 216012);
        assert_eq!(tuple_to_frames(1, 0, 0, 0, &ndf(24.0)).unwrap(), 86400);
        assert_eq!(tuple_to_frames(1, 0, 0, 0, &ndf(25.0)).unwrap(), 90000);
        assert_eq!(
            tuple_to_frames(1, 30, 45, 12, &ndf(24.0)).unwrap(),
            3600 * 24 + 30 * 60 * 24 + 45 * 24 + 12
        );
    }

    #[test]
    fn test_drop_frame_count() {
        let rate = df(29.97);
        assert_eq!(tuple_to_frames(1, 0, 0, 0, &rate).unwrap(), 107892);
        assert_eq!(tuple_to_frames(0, 1, 0, 2, &rate).unwrap(), 1800);
        assert_eq!(tuple_to_frames(0, 10, 0, 0, &rate).unwrap(), 17982);
        assert_eq!(tuple_to_frames(0, 0, 59, 29, &rate).unwrap(), 1799);

        let rate = df(59.94);
        assert_eq!(tuple_to_frames(0, 1, 0, 4, &rate).unwrap(), 3600);
        assert_eq!(tuple_to_frames(1, 0, 0, 0, &rate).unwrap(), 215784);
    }

    #[test]
    fn test_component_range() {
        let rate = ndf(29.97);
        assert!(tuple_to_frames(99, 99, 99, 99, &rate).is_ok());

        let err = tuple_to_frames(100, 0, 0, 0, &rate).unwrap_err();
        assert!(err.is_range());
        assert_eq!(err, TimecodeError::invalid_component("hours", 100, 99));

        assert!(tuple_to_frames(0, 100, 0, 0, &rate).unwrap_err().is_range());
        assert!(tuple_to_frames(0, 0, 100, 0, &rate).unwrap_err().is_range());
        assert!(tuple_to_frames(0, 0, 0, 100, &rate).unwrap_err().is_range());
    }

    #[test]
    fn test_frames_to_tuple_non_drop() {
        let tc = frames_to_tuple(86400, &ndf(24.0)).unwrap();
        assert_eq!(tc.as_tuple(), (1, 0, 0, 0));

        let tc = frames_to_tuple(130332, &ndf(24.0)).unwrap();
        assert_eq!(tc.as_tuple(), (1, 30, 30, 12));

        let tc = frames_to_tuple(216012, &ndf(29.97)).unwrap();
        assert_eq!(tc.as_tuple(), (2, 0, 0, 12));
    }

    #[test]
    fn test_frames_to_tuple_drop_frame() {
        let rate = df(29.97);
        assert_eq!(frames_to_tuple(0, &rate).unwrap().as_tuple(), (0, 0, 0, 0));
        assert_eq!(frames_to_tuple(29, &rate).unwrap().as_tuple(), (0, 0, 0, 29));
        assert_eq!(frames_to_tuple(30, &rate).unwrap().as_tuple(), (0, 0, 1, 0));
        assert_eq!(frames_to_tuple(1799, &rate).unwrap().as_tuple(), (0, 0, 59, 29));
        // Frames 0 and 1 of minute one are skipped
        assert_eq!(frames_to_tuple(1800, &rate).unwrap().as_tuple(), (0, 1, 0, 2));
        assert_eq!(frames_to_tuple(17982, &rate).unwrap().as_tuple(), (0, 10, 0, 0));
        assert_eq!(frames_to_tuple(107892, &rate).unwrap().as_tuple(), (1, 0, 0, 0));

        let rate = df(59.94);
        assert_eq!(frames_to_tuple(3600, &rate).unwrap().as_tuple(), (0, 1, 0, 4));
    }

    #[test]
    fn test_drop_frame_roundtrip() {
        let rate = df(29.97);
        for frame in [0, 29, 30, 1799, 1800, 1801, 17981, 17982, 17983, 107892] {
            let tc = frames_to_tuple(frame, &rate).unwrap();
            assert_eq!(tc.to_frames(&rate), frame, "Frame {} roundtrip failed via {}", frame, tc);
        }
    }

    #[test]
    fn test_maximum_roundtrips() {
        for rate in [ndf(29.97), df(29.97), ndf(24.0), df(59.94), ndf(1.0), ndf(100.0)] {
            let max = max_frames(&rate);
            let tc = frames_to_tuple(max, &rate).unwrap();
            assert_eq!(tc.as_tuple(), (99, 99, 99, 99), "rate {}", rate);
            assert!(frames_to_tuple(max + 1, &rate).unwrap_err().is_range());
        }
    }

    #[test]
    fn test_saturated_region_roundtrips() {
        // Counts past 99:59:59 still decompose within 0..=99 and round-trip.
        for rate in [ndf(29.97), df(29.97), df(59.94)] {
            let max = max_frames(&rate);
            let start = tuple_to_frames(99, 59, 59, 0, &rate).unwrap();
            for frame in (start..=max).step_by(37) {
                let tc = frames_to_tuple(frame, &rate).unwrap();
                assert_eq!(tc.to_frames(&rate), frame, "rate {} via {}", rate, tc);
            }
        }
    }

    #[test]
    fn test_components_display() {
        let tc = Components::new(1, 2, 3, 4).unwrap();
        assert_eq!(tc.to_string(), "01:02:03:04");
        let tuple: (u8, u8, u8, u8) = tc.into();
        assert_eq!(tuple, (1, 2, 3, 4));
    }
}
