//! Angle Parser for Voice Commands
//!
//! This crate extracts a signed angle in degrees from transcribed Mandarin
//! utterances such as "运动到负九十度" or "turn to minus 45". Arabic digits and
//! Chinese numerals are both understood; the result drives a joint actuator.

mod error;
mod extractor;
pub mod normalize;
pub mod numeral;
mod strategy;

pub use error::{ExtractError, Result};
pub use extractor::{AngleExtractor, Extraction, ExtractorConfig};
pub use normalize::normalize;
pub use numeral::{convert, try_convert, NumeralToken};
pub use strategy::{Matcher, Strategy, StrategyMatch};

use std::sync::OnceLock;

fn default_extractor() -> Option<&'static AngleExtractor> {
    static DEFAULT: OnceLock<Option<AngleExtractor>> = OnceLock::new();
    DEFAULT
        .get_or_init(|| match AngleExtractor::with_defaults() {
            Ok(extractor) => Some(extractor),
            Err(e) => {
                tracing::error!("Failed to build default angle extractor: {}", e);
                None
            }
        })
        .as_ref()
}

/// Extract the angle from an utterance using the default strategy order
pub fn extract_angle(text: &str) -> Option<i64> {
    default_extractor()?.extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_commands() {
        let test_cases = vec![
            ("运动到90度", Some(90)),
            ("运动到负九十度", Some(-90)),
            ("向左转一百八十度", Some(180)),
            ("退回负的四十五", Some(-45)),
            ("付九十度", Some(-90)),
            ("3个，运动到九十度", Some(90)),
            ("负-90度", Some(-90)),
            ("你好", None),
        ];

        for (command, expected) in test_cases {
            assert_eq!(extract_angle(command), expected, "command: {command}");
        }
    }

    #[test]
    fn test_converter_examples() {
        assert_eq!(convert("十"), Some(10));
        assert_eq!(convert("十三"), Some(13));
        assert_eq!(convert("二十"), Some(20));
        assert_eq!(convert("一百零五"), Some(105));
        assert_eq!(convert("三千零五"), Some(3005));
        assert_eq!(convert("两万"), Some(20_000));
        assert_eq!(convert("万"), None);
        assert_eq!(convert("零"), Some(0));
        assert_eq!(convert("abc"), None);
    }
}
