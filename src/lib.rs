pub mod core;
pub mod models;
pub mod pipelines;

// Re-export core types
pub use core::{Metadata, SentimentError};

// Re-export pipeline types for easier access
pub use pipelines::sentiment_pipeline::{
    Sentiment, SentimentModel, SentimentPipeline, SentimentPipelineBuilder, SentimentResult,
    WordIndexEncoder,
};

// Re-export model types for easier access
pub use models::{SentimentCnnModel, SentimentCnnOptions};
