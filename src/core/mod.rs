pub mod cache;
pub mod error;
pub mod metadata;

pub use cache::{global_cache, ModelCache, ModelOptions};
pub use error::SentimentError;
pub use metadata::{Metadata, DEFAULT_VOCAB_SIZE};
