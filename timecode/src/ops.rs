//! Frame-count arithmetic on timecodes.
//!
//! `+`, `-`, `*` and `/` work on total frame counts. Either side may be a raw
//! `i64` frame count. The result takes its rate and format from the left
//! operand when that is a [`Timecode`], otherwise from the right one, and must
//! land inside the representable domain of that rate.

use crate::error::{Result, TimecodeError};
use crate::timecode::Timecode;
use std::ops::{Add, Div, Mul, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operation {
    fn apply(self, lhs: i128, rhs: i128) -> Result<i128> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Sub => Ok(lhs - rhs),
            Self::Mul => Ok(lhs * rhs),
            Self::Div => {
                if rhs == 0 {
                    return Err(TimecodeError::DivisionByZero);
                }
                Ok(lhs / rhs)
            }
        }
    }

    /// Apply to two frame counts, producing a timecode shaped like `template`.
    fn compute(self, lhs: i128, rhs: i128, template: &Timecode) -> Result<Timecode> {
        let frames = self.apply(lhs, rhs)?;
        template.with_total_frames(frames)
    }
}

macro_rules! impl_frame_op {
    ($trait:ident, $method:ident, $operation:expr) => {
        impl $trait for Timecode {
            type Output = Result<Timecode>;

            fn $method(self, rhs: Timecode) -> Result<Timecode> {
                $operation.compute(
                    self.total_frames() as i128,
                    rhs.total_frames() as i128,
                    &self,
                )
            }
        }

        impl $trait<i64> for Timecode {
            type Output = Result<Timecode>;

            fn $method(self, rhs: i64) -> Result<Timecode> {
                $operation.compute(self.total_frames() as i128, rhs as i128, &self)
            }
        }

        impl $trait<Timecode> for i64 {
            type Output = Result<Timecode>;

            fn $method(self, rhs: Timecode) -> Result<Timecode> {
                $operation.compute(self as i128, rhs.total_frames() as i128, &rhs)
            }
        }
    };
}

impl_frame_op!(Add, add, Operation::Add);
impl_frame_op!(Sub, sub, Operation::Sub);
impl_frame_op!(Mul, mul, Operation::Mul);
impl_frame_op!(Div, div, Operation::Div);

#[cfg(test)]
mod tests {
    use crate::{Timecode, TimecodeOptions};
    use pretty_assertions::assert_eq;

    fn at(text: &str, fps: f64) -> Timecode {
        Timecode::with_options(text, &TimecodeOptions::new().with_fps(fps)).unwrap()
    }

    #[test]
    fn test_add_timecodes() {
        let tc1 = at("00:00:01:00", 24.0);
        let tc2 = at("00:00:00:12", 24.0);

        let sum = (tc1 + tc2).unwrap();
        assert_eq!(sum.seconds(), 1);
        assert_eq!(sum.frames(), 12);
        assert_eq!(sum.fps(), 24.0);
    }

    #[test]
    fn test_subtract_timecodes() {
        let tc1 = at("00:00:01:00", 24.0);
        let tc2 = at("00:00:00:12", 24.0);

        let diff = (tc1 - tc2).unwrap();
        assert_eq!(diff.seconds(), 0);
        assert_eq!(diff.frames(), 12);

        let err = (tc2 - tc1).unwrap_err();
        assert!(err.is_range());
    }

    #[test]
    fn test_integer_operands() {
        let tc: Timecode = "00:01:00;04".parse().unwrap();
        let later = (tc + 1800).unwrap();
        assert_eq!(later.total_frames(), tc.total_frames() + 1800);
        assert_eq!(later.fps(), tc.fps());
        assert!(later.is_dropframe());
        assert_eq!(later.to_string(), "00:02:00;06");

        let earlier = (tc - 1800).unwrap();
        assert_eq!(earlier.to_string(), "00:00:00;02");

        let negative = (tc + -2000).unwrap_err();
        assert!(negative.is_range());
    }

    #[test]
    fn test_left_integer_takes_right_options() {
        let tc2 = at("00:00:10:00", 25.0);
        let result = (1800 - tc2).unwrap();
        assert_eq!(result.fps(), 25.0);
        assert_eq!(result.total_frames(), 1800 - 250);

        assert!((100 - tc2).unwrap_err().is_range());
    }

    #[test]
    fn test_options_from_left_operand() {
        let ntsc = at("00:00:01:00", 29.97);
        let pal = at("00:00:01:00", 25.0);
        assert_eq!((ntsc + pal).unwrap().fps(), 29.97);
        assert_eq!((pal + ntsc).unwrap().fps(), 25.0);
    }

    #[test]
    fn test_multiply_and_divide() {
        let tc = at("00:00:01:00", 25.0);
        assert_eq!((tc * 3).unwrap().to_string(), "00:00:03:00");
        assert_eq!((3 * tc).unwrap().total_frames(), 75);
        assert_eq!((tc / 2).unwrap().total_frames(), 12);
        assert_eq!((100 / tc).unwrap().total_frames(), 4);
        assert_eq!((tc * tc).unwrap().total_frames(), 625);

        let err = (tc / 0).unwrap_err();
        assert!(err.is_range());

        assert!((tc * -1).unwrap_err().is_range());
    }

    #[test]
    fn test_overflow() {
        let max = Timecode::new(99, 99, 99, 99).unwrap();
        assert!((max + 1).unwrap_err().is_range());
        assert!((max * max).unwrap_err().is_range());
        assert_eq!((max + 0).unwrap(), max);
    }
}
