//! Text normalization applied before pattern matching

/// Canonical minus sign
pub const MINUS: char = '-';

/// Negative prefix in spoken Mandarin
pub const NEGATIVE_PREFIX: char = '负';

/// Homophone of 负 that speech recognition frequently produces
const NEGATIVE_HOMOPHONE: char = '付';

/// Full-width hyphen-minus (U+FF0D) and the Unicode minus sign (U+2212)
const MINUS_VARIANTS: [char; 2] = ['－', '−'];

/// Normalize a transcription into a new string.
///
/// Trims surrounding whitespace, unifies minus variants, folds full-width
/// digits to ASCII, and repairs the 付/负 misrecognition. Idempotent.
pub fn normalize(text: &str) -> String {
    text.trim().chars().map(normalize_char).collect()
}

fn normalize_char(ch: char) -> char {
    match ch {
        c if MINUS_VARIANTS.contains(&c) => MINUS,
        NEGATIVE_HOMOPHONE => NEGATIVE_PREFIX,
        '０'..='９' => char::from_u32(ch as u32 - '０' as u32 + '0' as u32).unwrap_or(ch),
        c => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minus_variants() {
        assert_eq!(normalize("−90度"), "-90度");
        assert_eq!(normalize("－90度"), "-90度");
        assert_eq!(normalize("-90度"), "-90度");
    }

    #[test]
    fn test_homophone_repair() {
        assert_eq!(normalize("付九十度"), "负九十度");
    }

    #[test]
    fn test_full_width_digits() {
        assert_eq!(normalize("运动到９０度"), "运动到90度");
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(normalize("  运动到90度\n"), "运动到90度");
    }

    #[test]
    fn test_leaves_latin_words_alone() {
        assert_eq!(normalize("MINUS 45"), "MINUS 45");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "付－４５度",
            "运动到负九十度",
            " minus −30 ",
            "你好",
            "",
        ];
        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "input: {sample:?}");
        }
    }
}
