use thiserror::Error;

pub type Result<T, E = ExtractError> = core::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("no angle found in utterance")]
    NoNumeralFound,
    #[error("malformed chinese numeral: {0}")]
    MalformedNumeral(String),
    #[error("unparsable integer: {0}")]
    ParseFailure(String),
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}
