use crate::core::Metadata;

/// Interface the pipeline requires from a model backend.
///
/// The backend receives one already-padded token sequence per call, shapes
/// it as a `1 x max_len` batch, and returns a single polarity score in
/// [0, 1]. Any intermediate buffers the backend allocates for the batch are
/// scoped to the call and released before the score is returned.
pub trait SentimentModel {
    type Options: std::fmt::Debug + Clone;

    fn new(options: Self::Options, device: candle_core::Device) -> anyhow::Result<Self>
    where
        Self: Sized;

    /// Load the vocabulary metadata published with this model variant.
    fn get_metadata(options: Self::Options) -> anyhow::Result<Metadata>;

    /// Score one padded sequence; the slice length is always `max_len`.
    fn predict(&self, sequence: &[u32]) -> anyhow::Result<f32>;

    fn device(&self) -> &candle_core::Device;
}
