pub mod sentiment_pipeline;
pub mod utils;

pub use sentiment_pipeline::*;
