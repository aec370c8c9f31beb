//! Chinese numeral conversion
//!
//! Folds a run of numeral characters (零一二两三四五六七八九十百千万) into an
//! unsigned magnitude. The documented range is 0..=99_999; larger inputs that
//! still fit in a `u64` are accepted, overflow is reported as malformed.

use crate::{ExtractError, Result};

/// Glyphs that spell an explicit zero.
const ZERO_GLYPHS: [char; 2] = ['零', '〇'];

/// Role of a single character in Chinese numeral notation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumeralToken {
    /// Digit value 0-9
    Digit(u64),
    /// Place-value multiplier within a section (10, 100, 1000)
    Unit(u64),
    /// The 万 marker, closes a section at ×10000
    Myriad,
    /// Anything that is not part of a numeral
    Other,
}

impl NumeralToken {
    /// Classify a character
    pub fn classify(ch: char) -> Self {
        match ch {
            '零' | '〇' => Self::Digit(0),
            '一' => Self::Digit(1),
            '二' | '两' => Self::Digit(2),
            '三' => Self::Digit(3),
            '四' => Self::Digit(4),
            '五' => Self::Digit(5),
            '六' => Self::Digit(6),
            '七' => Self::Digit(7),
            '八' => Self::Digit(8),
            '九' => Self::Digit(9),
            '十' => Self::Unit(10),
            '百' => Self::Unit(100),
            '千' => Self::Unit(1000),
            '万' => Self::Myriad,
            _ => Self::Other,
        }
    }

}

/// Accumulator folded over the token sequence
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct ParseState {
    result: u64,
    section: u64,
    pending_digit: u64,
}

impl ParseState {
    fn push_unit(self, unit: u64) -> Result<Self> {
        let digit = if self.pending_digit == 0 {
            1
        } else {
            self.pending_digit
        };
        let section = digit
            .checked_mul(unit)
            .and_then(|v| v.checked_add(self.section))
            .ok_or_else(overflow)?;
        Ok(Self {
            section,
            pending_digit: 0,
            ..self
        })
    }

    fn push_myriad(self) -> Result<Self> {
        if self.pending_digit == 0 && self.section == 0 {
            return Err(ExtractError::MalformedNumeral(
                "万 without a preceding quantity".to_string(),
            ));
        }
        let result = self
            .section
            .checked_add(self.pending_digit)
            .and_then(|v| v.checked_mul(10_000))
            .and_then(|v| v.checked_add(self.result))
            .ok_or_else(overflow)?;
        Ok(Self {
            result,
            section: 0,
            pending_digit: 0,
        })
    }

    fn finish(self) -> Result<u64> {
        self.section
            .checked_add(self.pending_digit)
            .and_then(|v| v.checked_add(self.result))
            .ok_or_else(overflow)
    }
}

fn overflow() -> ExtractError {
    ExtractError::MalformedNumeral("value out of range".to_string())
}

/// Convert a Chinese numeral string into its magnitude.
///
/// Consumption stops at the first non-numeral character; the rest of the
/// input is ignored. A zero result is only accepted when the input spells a
/// zero glyph somewhere, otherwise it means no numeral was present.
pub fn try_convert(text: &str) -> Result<u64> {
    let mut state = ParseState::default();
    for ch in text.chars() {
        state = match NumeralToken::classify(ch) {
            NumeralToken::Digit(d) => ParseState {
                pending_digit: d,
                ..state
            },
            NumeralToken::Unit(u) => state.push_unit(u)?,
            NumeralToken::Myriad => state.push_myriad()?,
            NumeralToken::Other => break,
        };
    }

    match state.finish()? {
        0 if text.contains(&ZERO_GLYPHS[..]) => Ok(0),
        0 => Err(ExtractError::NoNumeralFound),
        value => Ok(value),
    }
}

/// Convert a Chinese numeral string, discarding the failure reason.
pub fn convert(text: &str) -> Option<u64> {
    try_convert(text).ok()
}
