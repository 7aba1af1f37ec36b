#![no_main]

//! Fuzz target for timecode string parsing.
//!
//! Tests pattern matching, drop-frame inference and the format/parse
//! roundtrip with arbitrary input to find panics and lossy conversions.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use timecode::{parse_timecode_text, Timecode, TimecodeOptions};

#[derive(Arbitrary, Debug)]
struct ParseInput {
    text: String,
    fps: Option<f64>,
    dropframe: Option<bool>,
}

fuzz_target!(|input: ParseInput| {
    // Limit input size
    if input.text.len() > 64 {
        return;
    }

    // Splitting must never panic
    let _ = parse_timecode_text(&input.text);

    let options = TimecodeOptions {
        fps: input.fps,
        dropframe: input.dropframe,
        ..Default::default()
    };

    if let Ok(tc) = Timecode::with_options(input.text.as_str(), &options) {
        // Derived values - should never panic
        let _ = tc.components();
        let _ = tc.to_seconds();
        let _ = tc.to_dropframe();
        let _ = tc.to_non_dropframe();

        // Rendering and re-parsing with the resolved rate keeps the count
        let resolved = TimecodeOptions::new()
            .with_fps(tc.fps())
            .with_dropframe(tc.is_dropframe());
        let text = tc.to_string();
        let reparsed = Timecode::with_options(text.as_str(), &resolved)
            .expect("rendered timecode must parse");
        assert_eq!(reparsed.total_frames(), tc.total_frames());
        assert_eq!(reparsed.to_string(), text);
    }
});
