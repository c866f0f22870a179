use std::fmt;

use super::encoder::WordIndexEncoder;
use super::model::SentimentModel;
use crate::core::{Metadata, SentimentError};

/// Scores strictly above this mean are classified positive.
pub const POSITIVE_THRESHOLD: f32 = 0.66;

/// Scores strictly above this mean (and at most [`POSITIVE_THRESHOLD`])
/// are classified neutral; everything else is negative.
pub const NEUTRAL_THRESHOLD: f32 = 0.4;

/// Coarse sentiment bucket derived from a model score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Negative,
    Neutral,
    Positive,
}

impl Sentiment {
    pub fn from_score(score: f32) -> Self {
        if score > POSITIVE_THRESHOLD {
            Sentiment::Positive
        } else if score > NEUTRAL_THRESHOLD {
            Sentiment::Neutral
        } else {
            Sentiment::Negative
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
            Sentiment::Positive => "positive",
        };
        write!(f, "{label}")
    }
}

/// Classification outcome: the bucket plus the raw (or averaged) score
/// that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentResult {
    pub sentiment: Sentiment,
    pub score: f32,
}

impl SentimentResult {
    fn from_score(score: f32) -> Self {
        Self {
            sentiment: Sentiment::from_score(score),
            score,
        }
    }
}

impl fmt::Display for SentimentResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.sentiment, self.score)
    }
}

pub struct SentimentPipeline<M: SentimentModel> {
    pub(crate) model: M,
    pub(crate) encoder: WordIndexEncoder,
}

impl<M: SentimentModel> SentimentPipeline<M> {
    /// Assemble a pipeline from an already-loaded model and its metadata.
    /// Most callers go through [`super::SentimentPipelineBuilder`] instead.
    pub fn new(model: M, metadata: Metadata) -> Self {
        Self {
            model,
            encoder: WordIndexEncoder::new(metadata),
        }
    }

    /// Classify a single text.
    pub fn predict(&self, text: &str) -> anyhow::Result<SentimentResult> {
        let sequence = self.encoder.pad(self.encoder.encode(text));
        let score = self.model.predict(&sequence)?;
        Ok(SentimentResult::from_score(score))
    }

    /// Classify a batch of texts as one aggregate result: each text is
    /// scored independently and the arithmetic mean of the scores is
    /// bucketed. An empty batch is rejected rather than producing a
    /// meaningless NaN mean.
    pub fn predict_batch(&self, texts: &[&str]) -> anyhow::Result<SentimentResult> {
        if texts.is_empty() {
            return Err(SentimentError::EmptyBatch.into());
        }

        let scores = texts
            .iter()
            .map(|text| {
                let sequence = self.encoder.pad(self.encoder.encode(text));
                self.model.predict(&sequence)
            })
            .collect::<anyhow::Result<Vec<f32>>>()?;

        let mean = scores.iter().sum::<f32>() / scores.len() as f32;
        Ok(SentimentResult::from_score(mean))
    }

    pub fn encoder(&self) -> &WordIndexEncoder {
        &self.encoder
    }

    pub fn device(&self) -> &candle_core::Device {
        self.model.device()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_bucket_at_the_documented_thresholds() {
        assert_eq!(Sentiment::from_score(0.660001), Sentiment::Positive);
        assert_eq!(Sentiment::from_score(0.66), Sentiment::Neutral);
        assert_eq!(Sentiment::from_score(0.4000001), Sentiment::Neutral);
        assert_eq!(Sentiment::from_score(0.4), Sentiment::Negative);
        assert_eq!(Sentiment::from_score(0.0), Sentiment::Negative);
        assert_eq!(Sentiment::from_score(1.0), Sentiment::Positive);
    }

    #[test]
    fn result_displays_as_label_then_score() {
        let result = SentimentResult::from_score(0.75);
        assert_eq!(result.to_string(), "positive 0.75");
    }
}
