use crate::core::Metadata;

/// Token id emitted for any word the vocabulary cannot place: missing from
/// the word index entirely, or ranked beyond the usable vocabulary bound.
pub const UNKNOWN_ID: u32 = 2;

/// Sentinel prepended when a sequence is shorter than the target length.
pub const PAD_ID: u32 = 0;

/// Turns raw text into the fixed-length token sequences the model expects,
/// using the word-index vocabulary the model was trained on.
#[derive(Debug, Clone)]
pub struct WordIndexEncoder {
    metadata: Metadata,
}

impl WordIndexEncoder {
    pub fn new(metadata: Metadata) -> Self {
        Self { metadata }
    }

    pub fn max_len(&self) -> usize {
        self.metadata.max_len
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Encode one text into token ids, one per word token.
    ///
    /// Normalization matches what the model saw in training: trim,
    /// lowercase, delete the four characters `.` `,` `!` `?`, then split on
    /// single spaces. Runs of spaces and other punctuation deliberately
    /// survive as-is; the empty or malformed tokens they produce fall
    /// through to [`UNKNOWN_ID`] like any other vocabulary miss.
    pub fn encode(&self, text: &str) -> Vec<u32> {
        let normalized: String = text
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, '.' | ',' | '!' | '?'))
            .collect();

        normalized
            .split(' ')
            .map(|word| match self.metadata.word_index.get(word) {
                None => UNKNOWN_ID,
                Some(&rank) if rank >= self.metadata.vocab_size => {
                    tracing::warn!(word, rank, "word rank is out of bounds");
                    UNKNOWN_ID
                }
                Some(&rank) => rank + self.metadata.index_from,
            })
            .collect()
    }

    /// Normalize a sequence to exactly `max_len` ids: keep the trailing
    /// `max_len` tokens of an over-long sequence, left-pad a short one
    /// with [`PAD_ID`].
    pub fn pad(&self, mut sequence: Vec<u32>) -> Vec<u32> {
        let max_len = self.metadata.max_len;
        if sequence.len() > max_len {
            sequence.split_off(sequence.len() - max_len)
        } else if sequence.len() < max_len {
            let mut padded = vec![PAD_ID; max_len - sequence.len()];
            padded.extend(sequence);
            padded
        } else {
            sequence
        }
    }

    pub fn pad_sequences(&self, sequences: Vec<Vec<u32>>) -> Vec<Vec<u32>> {
        sequences.into_iter().map(|seq| self.pad(seq)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn encoder(words: &[(&str, u32)], max_len: usize, index_from: u32) -> WordIndexEncoder {
        let word_index: HashMap<String, u32> = words
            .iter()
            .map(|(word, rank)| (word.to_string(), *rank))
            .collect();
        WordIndexEncoder::new(Metadata {
            word_index,
            max_len,
            index_from,
            vocab_size: crate::core::DEFAULT_VOCAB_SIZE,
        })
    }

    #[test]
    fn known_words_are_offset_by_index_from() {
        let encoder = encoder(&[("good", 10)], 4, 3);
        assert_eq!(encoder.encode("good"), vec![13]);
    }

    #[test]
    fn encode_then_pad_always_hits_max_len() {
        let encoder = encoder(&[("good", 10), ("movie", 7)], 4, 3);

        for text in ["", "good", "good movie", "good movie good movie good"] {
            let padded = encoder.pad(encoder.encode(text));
            assert_eq!(padded.len(), 4, "text: {text:?}");
        }
    }

    #[test]
    fn unknown_words_map_to_the_reserved_id() {
        let encoder = encoder(&[("good", 10)], 4, 3);
        assert_eq!(encoder.encode("amazing"), vec![UNKNOWN_ID]);
    }

    #[test]
    fn out_of_bounds_ranks_map_to_the_reserved_id() {
        let encoder = encoder(&[("rare", 20_000)], 4, 3);
        assert_eq!(encoder.encode("rare"), vec![UNKNOWN_ID]);

        // The last in-bounds rank still encodes normally.
        let encoder = self::encoder(&[("rare", 19_999)], 4, 3);
        assert_eq!(encoder.encode("rare"), vec![20_002]);
    }

    #[test]
    fn only_the_four_training_punctuation_marks_are_stripped() {
        let encoder = encoder(&[("good", 10)], 4, 3);

        assert_eq!(encoder.encode("good."), vec![13]);
        assert_eq!(encoder.encode("good,!?"), vec![13]);
        // A semicolon stays attached, so the token misses the vocabulary.
        assert_eq!(encoder.encode("good;"), vec![UNKNOWN_ID]);
    }

    #[test]
    fn text_is_trimmed_and_lowercased() {
        let encoder = encoder(&[("good", 10)], 4, 3);
        assert_eq!(encoder.encode("  GOOD  "), vec![13]);
    }

    #[test]
    fn consecutive_spaces_leave_empty_tokens() {
        // Splitting on single spaces, not whitespace runs, is part of the
        // training-time contract: "good  good" has a hole in the middle.
        let encoder = encoder(&[("good", 10)], 4, 3);
        assert_eq!(encoder.encode("good  good"), vec![13, UNKNOWN_ID, 13]);
    }

    #[test]
    fn short_sequences_are_left_padded_with_zeros() {
        let encoder = encoder(&[("good", 10)], 4, 3);
        assert_eq!(encoder.pad(vec![13]), vec![0, 0, 0, 13]);
    }

    #[test]
    fn long_sequences_keep_the_trailing_tokens_in_order() {
        let encoder = encoder(&[], 3, 0);
        assert_eq!(encoder.pad(vec![1, 2, 3, 4, 5]), vec![3, 4, 5]);
    }

    #[test]
    fn exact_length_sequences_are_unchanged() {
        let encoder = encoder(&[], 3, 0);
        assert_eq!(encoder.pad(vec![7, 8, 9]), vec![7, 8, 9]);
    }

    #[test]
    fn empty_sequences_pad_to_all_zeros() {
        let encoder = encoder(&[], 3, 0);
        assert_eq!(encoder.pad(vec![]), vec![0, 0, 0]);
    }

    #[test]
    fn pad_sequences_normalizes_every_member() {
        let encoder = encoder(&[], 2, 0);
        assert_eq!(
            encoder.pad_sequences(vec![vec![], vec![9], vec![1, 2, 3]]),
            vec![vec![0, 0], vec![0, 9], vec![2, 3]],
        );
    }
}
