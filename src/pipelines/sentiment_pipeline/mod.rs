//! Sentiment classification pipeline for short texts.
//!
//! This module turns raw text into the padded token sequences a pretrained
//! sentiment model expects, runs inference, and buckets the resulting score
//! into negative / neutral / positive.
//!
//! ## Main Types
//!
//! - [`SentimentPipeline`] - High-level interface for sentiment classification
//! - [`SentimentPipelineBuilder`] - Builder pattern for pipeline configuration
//! - [`SentimentModel`] - Trait for model backend implementations
//! - [`WordIndexEncoder`] - Text-to-token-sequence encoding and padding
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use sentiment_cnn::pipelines::sentiment_pipeline::*;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let pipeline = SentimentPipelineBuilder::cnn("ljt019/sentiment-cnn-imdb")
//!     .build()
//!     .await?;
//!
//! let result = pipeline.predict("this movie was a delight")?;
//! println!("{result}"); // e.g. "positive 0.83"
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod encoder;
pub mod model;
pub mod pipeline;

pub use builder::SentimentPipelineBuilder;
pub use encoder::{WordIndexEncoder, PAD_ID, UNKNOWN_ID};
pub use model::SentimentModel;
pub use pipeline::{
    Sentiment, SentimentPipeline, SentimentResult, NEUTRAL_THRESHOLD, POSITIVE_THRESHOLD,
};

pub use anyhow::Result;
