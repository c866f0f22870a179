use std::collections::HashMap;

use crate::core::error::SentimentError;

/// Exclusive upper bound on vocabulary ranks when the metadata document
/// does not carry one itself.
pub const DEFAULT_VOCAB_SIZE: u32 = 20_000;

fn default_vocab_size() -> u32 {
    DEFAULT_VOCAB_SIZE
}

/// Vocabulary metadata shipped alongside a sentiment model.
///
/// Mirrors the `metadata.json` document published with the model weights:
/// the word-to-rank mapping the model was trained on, the fixed sequence
/// length it expects, and the offset applied to in-vocabulary ranks.
/// Loaded once per session and treated as read-only afterwards.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Metadata {
    /// Lowercase word to vocabulary rank.
    pub word_index: HashMap<String, u32>,
    /// Target sequence length fed to the model.
    pub max_len: usize,
    /// Offset added to in-vocabulary ranks to produce token ids.
    pub index_from: u32,
    /// Exclusive upper bound on usable ranks; anything at or above it is
    /// treated as out-of-vocabulary.
    #[serde(default = "default_vocab_size", alias = "vocabulary_size")]
    pub vocab_size: u32,
}

impl Metadata {
    /// Parse and validate a metadata document.
    pub fn from_json(raw: &str) -> Result<Self, SentimentError> {
        let metadata: Metadata = serde_json::from_str(raw)?;
        metadata.validate()?;
        Ok(metadata)
    }

    /// Check the fields once at load time so malformed documents fail fast
    /// with a descriptive error instead of surfacing deep in the pipeline.
    pub fn validate(&self) -> Result<(), SentimentError> {
        if self.max_len == 0 {
            return Err(SentimentError::Metadata(
                "`max_len` must be a positive integer".into(),
            ));
        }
        if self.vocab_size == 0 {
            return Err(SentimentError::Metadata(
                "`vocab_size` must be a positive integer".into(),
            ));
        }
        if self.word_index.is_empty() {
            return Err(SentimentError::Metadata(
                "`word_index` mapping is empty".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_minimal_document() {
        let metadata = Metadata::from_json(
            r#"{"word_index": {"good": 10}, "max_len": 4, "index_from": 3}"#,
        )
        .unwrap();

        assert_eq!(metadata.word_index["good"], 10);
        assert_eq!(metadata.max_len, 4);
        assert_eq!(metadata.index_from, 3);
        assert_eq!(metadata.vocab_size, DEFAULT_VOCAB_SIZE);
    }

    #[test]
    fn accepts_the_published_vocabulary_size_field_name() {
        let metadata = Metadata::from_json(
            r#"{"word_index": {"good": 10}, "max_len": 100, "index_from": 3, "vocabulary_size": 5000}"#,
        )
        .unwrap();

        assert_eq!(metadata.vocab_size, 5000);
    }

    #[test]
    fn rejects_a_zero_max_len() {
        let err = Metadata::from_json(
            r#"{"word_index": {"good": 10}, "max_len": 0, "index_from": 3}"#,
        )
        .unwrap_err();

        assert!(matches!(err, SentimentError::Metadata(_)));
    }

    #[test]
    fn rejects_an_empty_word_index() {
        let err =
            Metadata::from_json(r#"{"word_index": {}, "max_len": 100, "index_from": 3}"#)
                .unwrap_err();

        assert!(matches!(err, SentimentError::Metadata(_)));
    }

    #[test]
    fn rejects_a_missing_field() {
        let err = Metadata::from_json(r#"{"word_index": {"good": 10}, "max_len": 100}"#)
            .unwrap_err();

        assert!(matches!(err, SentimentError::Parse(_)));
    }
}
