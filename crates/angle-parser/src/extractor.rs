//! Ordered strategy dispatch over normalized utterances

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::normalize::normalize;
use crate::strategy::{Matcher, Strategy};
use crate::{ExtractError, Result};

/// Configuration for angle extraction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Strategies in priority order; the first one that matches wins
    #[serde(default = "default_strategies")]
    pub strategies: Vec<Strategy>,
}

fn default_strategies() -> Vec<Strategy> {
    Strategy::DEFAULT_ORDER.to_vec()
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            strategies: default_strategies(),
        }
    }
}

/// Result of a successful extraction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extraction {
    /// Signed angle in degrees
    pub angle: i64,
    /// Strategy that produced the angle
    pub strategy: Strategy,
    /// Matched span within the normalized text
    pub span: String,
    /// The normalized utterance the strategies ran against
    pub normalized: String,
}

/// Locates and signs the angle in a transcribed utterance
#[derive(Debug, Clone)]
pub struct AngleExtractor {
    matchers: Vec<Matcher>,
}

impl AngleExtractor {
    /// Compile the configured strategies
    pub fn new(config: ExtractorConfig) -> Result<Self> {
        let matchers = config
            .strategies
            .into_iter()
            .map(Matcher::new)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { matchers })
    }

    /// Extractor with the default strategy order
    pub fn with_defaults() -> Result<Self> {
        Self::new(ExtractorConfig::default())
    }

    pub fn strategies(&self) -> impl Iterator<Item = Strategy> + '_ {
        self.matchers.iter().map(Matcher::strategy)
    }

    /// Run strategies in order and report which one matched.
    ///
    /// Strategy-local failures (unparsable integers, malformed numerals) fall
    /// through to the next strategy; only exhaustion is reported, as
    /// [`ExtractError::NoNumeralFound`].
    pub fn try_extract(&self, text: &str) -> Result<Extraction> {
        let normalized = normalize(text);
        if normalized.is_empty() {
            return Err(ExtractError::NoNumeralFound);
        }

        for matcher in &self.matchers {
            match matcher.apply(&normalized) {
                Ok(found) => {
                    debug!(
                        strategy = %matcher.strategy(),
                        angle = found.angle,
                        span = %found.span,
                        "angle extracted"
                    );
                    return Ok(Extraction {
                        angle: found.angle,
                        strategy: matcher.strategy(),
                        span: found.span,
                        normalized,
                    });
                }
                Err(reason) => {
                    trace!(strategy = %matcher.strategy(), %reason, "strategy did not match");
                }
            }
        }

        debug!(text = %normalized, "no angle found");
        Err(ExtractError::NoNumeralFound)
    }

    /// Signed angle in degrees, or `None` when the utterance carries no angle
    pub fn extract(&self, text: &str) -> Option<i64> {
        self.try_extract(text).ok().map(|e| e.angle)
    }
}
