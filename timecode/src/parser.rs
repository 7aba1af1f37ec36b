//! Timecode construction from tuples, frame counts and strings.
//!
//! Strings take the form `HH<d>MM<d>SS<fd>FF` where both delimiters are any
//! single non-alphanumeric character. A frame delimiter of `.` or `;` marks the
//! timecode as drop-frame unless the caller says otherwise; the captured
//! delimiters also become the timecode's output format.

use crate::config::{TimecodeConfig, TimecodeOptions};
use crate::convert::Components;
use crate::error::{Result, TimecodeError};
use crate::timecode::Timecode;
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

/// Frame delimiters that imply drop-frame counting.
pub const DROP_FRAME_DELIMITERS: [char; 2] = [';', '.'];

const TIMECODE_PATTERN: &str = r"^([0-9]{1,2})([^\p{Alphabetic}\p{N}])([0-9]{1,2})([^\p{Alphabetic}\p{N}])([0-9]{1,2})([^\p{Alphabetic}\p{N}])([0-9]{1,2})$";

static TIMECODE_REGEX: OnceLock<Regex> = OnceLock::new();

fn timecode_regex() -> &'static Regex {
    TIMECODE_REGEX.get_or_init(|| Regex::new(TIMECODE_PATTERN).expect("timecode pattern is valid"))
}

/// Anything a [`Timecode`] can be constructed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimecodeInput {
    /// Up to four fields `[hours, minutes, seconds, frames]`; missing
    /// trailing fields are zero.
    Components(Vec<u32>),
    /// An absolute frame count.
    Frames(u64),
    /// A delimited timecode string.
    Text(String),
}

impl From<u64> for TimecodeInput {
    fn from(frames: u64) -> Self {
        Self::Frames(frames)
    }
}

impl From<&str> for TimecodeInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for TimecodeInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&String> for TimecodeInput {
    fn from(text: &String) -> Self {
        Self::Text(text.clone())
    }
}

impl From<&[u32]> for TimecodeInput {
    fn from(parts: &[u32]) -> Self {
        Self::Components(parts.to_vec())
    }
}

impl From<Vec<u32>> for TimecodeInput {
    fn from(parts: Vec<u32>) -> Self {
        Self::Components(parts)
    }
}

impl<const N: usize> From<[u32; N]> for TimecodeInput {
    fn from(parts: [u32; N]) -> Self {
        Self::Components(parts.to_vec())
    }
}

impl From<(u32, u32)> for TimecodeInput {
    fn from((hours, minutes): (u32, u32)) -> Self {
        Self::Components(vec![hours, minutes])
    }
}

impl From<(u32, u32, u32)> for TimecodeInput {
    fn from((hours, minutes, seconds): (u32, u32, u32)) -> Self {
        Self::Components(vec![hours, minutes, seconds])
    }
}

impl From<(u32, u32, u32, u32)> for TimecodeInput {
    fn from((hours, minutes, seconds, frames): (u32, u32, u32, u32)) -> Self {
        Self::Components(vec![hours, minutes, seconds, frames])
    }
}

impl From<Components> for TimecodeInput {
    fn from(components: Components) -> Self {
        let (hours, minutes, seconds, frames) = components.as_tuple();
        Self::Components(vec![
            hours as u32,
            minutes as u32,
            seconds as u32,
            frames as u32,
        ])
    }
}

/// Fields and delimiters captured from a timecode string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedText {
    /// `[hours, minutes, seconds, frames]` as written.
    pub fields: [u32; 4],
    /// Separator between hours, minutes and seconds.
    pub delimiter: char,
    /// Separator before the frames field.
    pub frame_delimiter: char,
}

impl ParsedText {
    /// Whether the frame delimiter implies drop-frame counting.
    #[must_use]
    pub fn implies_dropframe(&self) -> bool {
        DROP_FRAME_DELIMITERS.contains(&self.frame_delimiter)
    }

    /// Options inferred from the string: its delimiters, and drop-frame when
    /// the frame delimiter implies it.
    #[must_use]
    pub fn inferred_options(&self) -> TimecodeOptions {
        TimecodeOptions {
            fps: None,
            dropframe: self.implies_dropframe().then_some(true),
            delimiter: Some(self.delimiter),
            frame_delimiter: Some(self.frame_delimiter),
        }
    }
}

/// Split a timecode string into its fields and delimiters.
///
/// Surrounding whitespace is ignored. Each field is one or two digits and
/// both field delimiters must be the same character.
pub fn parse_timecode_text(text: &str) -> Result<ParsedText> {
    let trimmed = text.trim();
    let caps = timecode_regex().captures(trimmed).ok_or_else(|| {
        TimecodeError::invalid_format(format!(
            "Expected HH:MM:SS:FF with single-character delimiters, got {:?}",
            trimmed
        ))
    })?;

    let field = |index: usize| -> Result<u32> {
        caps[index]
            .parse()
            .map_err(|_| TimecodeError::invalid_format(format!("Invalid field: {}", &caps[index])))
    };
    let delimiter = |index: usize| -> Result<char> {
        caps[index]
            .chars()
            .next()
            .ok_or_else(|| TimecodeError::invalid_format("Missing delimiter"))
    };

    let first = delimiter(2)?;
    let second = delimiter(4)?;
    if first != second {
        return Err(TimecodeError::invalid_format(format!(
            "Inconsistent delimiters {:?} and {:?}",
            first, second
        )));
    }

    Ok(ParsedText {
        fields: [field(1)?, field(3)?, field(5)?, field(7)?],
        delimiter: first,
        frame_delimiter: delimiter(6)?,
    })
}

/// Builds timecodes against an immutable set of defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parser {
    config: TimecodeConfig,
}

impl Parser {
    /// Create a parser with custom defaults.
    pub fn new(config: TimecodeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The defaults this parser falls back to.
    #[must_use]
    pub fn config(&self) -> &TimecodeConfig {
        &self.config
    }

    /// Build a timecode using only defaults and values inferred from the input.
    pub fn parse(&self, input: impl Into<TimecodeInput>) -> Result<Timecode> {
        self.parse_with(input, &TimecodeOptions::new())
    }

    /// Build a timecode; explicit `options` win over inferred values, which
    /// win over the parser's defaults.
    pub fn parse_with(
        &self,
        input: impl Into<TimecodeInput>,
        options: &TimecodeOptions,
    ) -> Result<Timecode> {
        match input.into() {
            TimecodeInput::Frames(frames) => {
                let (rate, format) = options.resolve(&self.config)?;
                Timecode::from_frames(frames, rate, format)
            }
            TimecodeInput::Components(parts) => {
                let components = components_from_parts(&parts)?;
                let (rate, format) = options.resolve(&self.config)?;
                Ok(Timecode::from_components(components, rate, format))
            }
            TimecodeInput::Text(text) => {
                let parsed = parse_timecode_text(&text)?;
                let merged = options.or(parsed.inferred_options());
                if parsed.implies_dropframe() && merged.dropframe == Some(true) {
                    debug!(
                        input = %text,
                        frame_delimiter = %parsed.frame_delimiter,
                        "Inferred drop-frame from frame delimiter"
                    );
                }
                let [hours, minutes, seconds, frames] = parsed.fields;
                let components = Components::new(hours, minutes, seconds, frames)?;
                let (rate, format) = merged.resolve(&self.config)?;
                Ok(Timecode::from_components(components, rate, format))
            }
        }
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self {
            config: TimecodeConfig::DEFAULT,
        }
    }
}

fn components_from_parts(parts: &[u32]) -> Result<Components> {
    if parts.len() > 4 {
        return Err(TimecodeError::invalid_format(format!(
            "Expected at most 4 timecode fields, got {}",
            parts.len()
        )));
    }
    let part = |index: usize| parts.get(index).copied().unwrap_or(0);
    Components::new(part(0), part(1), part(2), part(3))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_text_fields() {
        let parsed = parse_timecode_text("01:30:45:12").unwrap();
        assert_eq!(parsed.fields, [1, 30, 45, 12]);
        assert_eq!(parsed.delimiter, ':');
        assert_eq!(parsed.frame_delimiter, ':');
        assert!(!parsed.implies_dropframe());

        let parsed = parse_timecode_text("  1-2-3.4 ").unwrap();
        assert_eq!(parsed.fields, [1, 2, 3, 4]);
        assert_eq!(parsed.delimiter, '-');
        assert_eq!(parsed.frame_delimiter, '.');
        assert!(parsed.implies_dropframe());
    }

    #[test]
    fn test_parse_text_rejects_malformed() {
        for input in [
            "",
            "01:02:03",
            "01:02:03:04:05",
            "001:02:03:04",
            "01:02:03:4a",
            "01a02a03a04",
            "01::02:03:04",
            "01:02.03:04",
            "aa:bb:cc:dd",
        ] {
            let err = parse_timecode_text(input).unwrap_err();
            assert!(err.is_parse(), "{:?} should fail to parse", input);
        }
    }

    #[test]
    fn test_dropframe_inference() {
        let parser = Parser::default();

        let tc = parser.parse("00:01:00;04").unwrap();
        assert!(tc.is_dropframe());
        assert_eq!(tc.total_frames(), 1802);

        let tc = parser.parse("00:01:00.04").unwrap();
        assert!(tc.is_dropframe());

        let tc = parser.parse("00:01:00:04").unwrap();
        assert!(!tc.is_dropframe());
        assert_eq!(tc.total_frames(), 1804);
    }

    #[test]
    fn test_explicit_dropframe_wins() {
        let parser = Parser::default();
        let options = TimecodeOptions::new().with_dropframe(false);
        let tc = parser.parse_with("00:01:00;04", &options).unwrap();
        assert!(!tc.is_dropframe());
        assert_eq!(tc.to_string(), "00:01:00;04");

        let options = TimecodeOptions::new().with_dropframe(true);
        let tc = parser.parse_with("00:01:00:04", &options).unwrap();
        assert!(tc.is_dropframe());
    }

    #[test]
    fn test_captured_delimiters_become_format() {
        let parser = Parser::default();
        let tc = parser.parse("10/20/30;15").unwrap();
        assert_eq!(tc.format().delimiter(), '/');
        assert_eq!(tc.format().frame_delimiter(), ';');
        assert_eq!(tc.to_string(), "10/20/30;15");

        let options = TimecodeOptions::new().with_delimiter(':');
        let tc = parser.parse_with("10/20/30;15", &options).unwrap();
        assert_eq!(tc.to_string(), "10:20:30;15");
    }

    #[test]
    fn test_component_inputs() {
        let parser = Parser::default();
        assert_eq!(parser.parse((2, 0, 0, 12)).unwrap().total_frames(), 216012);
        assert_eq!(parser.parse([0u32, 1]).unwrap().total_frames(), 1800);
        assert_eq!(parser.parse((0, 0, 2)).unwrap().total_frames(), 60);
        assert_eq!(parser.parse(Vec::<u32>::new()).unwrap().total_frames(), 0);

        let err = parser.parse(vec![1, 2, 3, 4, 5]).unwrap_err();
        assert!(err.is_parse());

        let err = parser.parse((100, 0, 0, 0)).unwrap_err();
        assert!(err.is_range());
    }

    #[test]
    fn test_frame_count_input() {
        let parser = Parser::default();
        let tc = parser.parse(216012u64).unwrap();
        assert_eq!(tc.to_string(), "02:00:00:12");

        let max = tc.max_frames();
        assert!(parser.parse(max + 1).unwrap_err().is_range());
    }

    #[test]
    fn test_custom_config() {
        let config = TimecodeConfig {
            fps: 25.0,
            frame_delimiter: '_',
            ..Default::default()
        };
        let parser = Parser::new(config).unwrap();
        let tc = parser.parse((0, 0, 1, 0)).unwrap();
        assert_eq!(tc.total_frames(), 25);
        assert_eq!(tc.to_string(), "00:00:01_00");

        let bad = TimecodeConfig {
            fps: -5.0,
            ..Default::default()
        };
        assert!(Parser::new(bad).unwrap_err().is_config());
    }

    #[test]
    fn test_explicit_fps_option() {
        let parser = Parser::default();
        let options = TimecodeOptions::new().with_fps(0.0);
        assert!(parser.parse_with("00:00:01:00", &options).unwrap_err().is_config());
    }
}
