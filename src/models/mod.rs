pub mod sentiment_cnn;

pub use sentiment_cnn::{SentimentCnnConfig, SentimentCnnModel, SentimentCnnOptions};
