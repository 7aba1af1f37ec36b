#![no_main]

//! Fuzz target for timecode arithmetic.
//!
//! Tests frame-count operators with arbitrary operands to make sure results
//! either land inside the representable domain or fail with a range error.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use timecode::{RateSpec, Timecode, TimecodeOptions};

#[derive(Arbitrary, Debug)]
struct ArithmeticInput {
    frames: u64,
    operand: i64,
    fps_index: u8,
    dropframe: bool,
    operation: Operation,
}

#[derive(Arbitrary, Debug)]
enum Operation {
    Add,
    Sub,
    Mul,
    Div,
    /// Integer on the left-hand side
    ReverseSub,
    /// Combine with a second timecode
    AddTimecode { other_frames: u64 },
}

const RATES: [f64; 6] = [23.976, 24.0, 25.0, 29.97, 50.0, 59.94];

fuzz_target!(|input: ArithmeticInput| {
    let fps = RATES[input.fps_index as usize % RATES.len()];
    let rate = match RateSpec::new(fps, input.dropframe) {
        Ok(rate) => rate,
        Err(_) => return,
    };
    let max = rate.max_frames();
    let options = TimecodeOptions::new()
        .with_fps(fps)
        .with_dropframe(input.dropframe);

    let tc = match Timecode::with_options(input.frames % (max + 1), &options) {
        Ok(tc) => tc,
        Err(_) => return,
    };

    let result = match input.operation {
        Operation::Add => tc + input.operand,
        Operation::Sub => tc - input.operand,
        Operation::Mul => tc * input.operand,
        Operation::Div => tc / input.operand,
        Operation::ReverseSub => input.operand - tc,
        Operation::AddTimecode { other_frames } => {
            match Timecode::with_options(other_frames % (max + 1), &options) {
                Ok(other) => tc + other,
                Err(_) => return,
            }
        }
    };

    match result {
        Ok(value) => {
            assert!(value.total_frames() <= max);
            assert_eq!(value.fps(), tc.fps());
            let _ = value.to_string();
        }
        Err(err) => assert!(err.is_range()),
    }
});
