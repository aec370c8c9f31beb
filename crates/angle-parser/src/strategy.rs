//! Candidate-matching strategies for locating the angle token

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::numeral;
use crate::{ExtractError, Result};

/// Negative marker accepted next to Arabic digits
const ARABIC_MARKER: &str = r"(负的?|minus|negative)?";
/// Negative marker accepted next to Chinese numerals
const CHINESE_MARKER: &str = r"(负的?)?";
const ARABIC_NUMBER: &str = r"\s*(-?[0-9]+)";
const CHINESE_NUMBER: &str = r"([零〇一二两三四五六七八九十百千万]+)";
const DEGREE_UNIT: &str = r"\s*度";

/// One way of locating an angle inside an utterance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Arabic integer followed by 度, e.g. "负90度"
    ArabicWithUnit,
    /// Chinese numeral followed by 度, e.g. "负九十度"
    ChineseWithUnit,
    /// Any Arabic integer
    ArabicStandalone,
    /// Any run of Chinese numeral characters
    ChineseStandalone,
}

impl Strategy {
    /// Anchored strategies first, Arabic before Chinese within each tier.
    pub const DEFAULT_ORDER: [Strategy; 4] = [
        Strategy::ArabicWithUnit,
        Strategy::ChineseWithUnit,
        Strategy::ArabicStandalone,
        Strategy::ChineseStandalone,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::ArabicWithUnit => "arabic_with_unit",
            Strategy::ChineseWithUnit => "chinese_with_unit",
            Strategy::ArabicStandalone => "arabic_standalone",
            Strategy::ChineseStandalone => "chinese_standalone",
        }
    }

    /// Whether the match must be anchored to the degree unit
    pub fn requires_unit(&self) -> bool {
        matches!(self, Strategy::ArabicWithUnit | Strategy::ChineseWithUnit)
    }

    fn is_arabic(&self) -> bool {
        matches!(self, Strategy::ArabicWithUnit | Strategy::ArabicStandalone)
    }

    fn pattern(&self) -> String {
        let unit = if self.requires_unit() { DEGREE_UNIT } else { "" };
        if self.is_arabic() {
            format!("(?i){ARABIC_MARKER}{ARABIC_NUMBER}{unit}")
        } else {
            format!("{CHINESE_MARKER}{CHINESE_NUMBER}{unit}")
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A successful strategy match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyMatch {
    /// Signed angle in degrees
    pub angle: i64,
    /// The matched span of the normalized text
    pub span: String,
}

/// A strategy with its compiled pattern
#[derive(Debug, Clone)]
pub struct Matcher {
    strategy: Strategy,
    regex: Regex,
}

impl Matcher {
    pub fn new(strategy: Strategy) -> Result<Self> {
        Ok(Self {
            strategy,
            regex: Regex::new(&strategy.pattern())?,
        })
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Try the leftmost match of this strategy against normalized text.
    pub fn apply(&self, text: &str) -> Result<StrategyMatch> {
        let captures = self
            .regex
            .captures(text)
            .ok_or(ExtractError::NoNumeralFound)?;
        let negative = captures.get(1).is_some();
        let number = captures
            .get(2)
            .map(|m| m.as_str())
            .ok_or(ExtractError::NoNumeralFound)?;

        let angle = if self.strategy.is_arabic() {
            signed_arabic(number, negative)?
        } else {
            signed_chinese(number, negative)?
        };

        Ok(StrategyMatch {
            angle,
            span: full_match(&captures),
        })
    }
}

fn full_match(captures: &Captures<'_>) -> String {
    captures
        .get(0)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// A marker forces a negative result regardless of a literal minus sign.
fn signed_arabic(number: &str, negative: bool) -> Result<i64> {
    let value = number
        .parse::<i64>()
        .map_err(|e| ExtractError::ParseFailure(format!("{number}: {e}")))?;
    if negative && value > 0 {
        Ok(-value)
    } else {
        Ok(value)
    }
}

fn signed_chinese(number: &str, negative: bool) -> Result<i64> {
    let magnitude = numeral::try_convert(number)?;
    let value = i64::try_from(magnitude)
        .map_err(|e| ExtractError::ParseFailure(format!("{number}: {e}")))?;
    Ok(if negative { -value } else { value })
}
