use anyhow::{Error as E, Result};
use candle_core::{DType, Device, Tensor, D};
use candle_nn::{Conv1d, Conv1dConfig, Embedding, Linear, Module, VarBuilder};
use hf_hub::{api::sync::Api, Repo, RepoType};

use crate::core::{Metadata, ModelOptions};
use crate::pipelines::sentiment_pipeline::SentimentModel;
use crate::pipelines::utils::loaders::MetadataLoader;

/// Shape of the convolutional sentiment network, read from the
/// `config.json` published next to the weights.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct SentimentCnnConfig {
    /// Rows in the embedding table (vocabulary bound plus reserved ids).
    pub vocab_size: usize,
    pub embedding_dim: usize,
    pub filters: usize,
    pub kernel_size: usize,
    pub hidden_dim: usize,
}

/// Where to fetch a CNN variant from.
#[derive(Debug, Clone)]
pub struct SentimentCnnOptions {
    pub repo: String,
}

impl SentimentCnnOptions {
    pub fn new(repo: &str) -> Self {
        Self { repo: repo.into() }
    }
}

impl ModelOptions for SentimentCnnOptions {
    fn cache_key(&self) -> String {
        format!("sentiment-cnn-{}", self.repo)
    }
}

/// Convolutional sentiment scorer: embedding, single 1-d convolution with
/// global max pooling, and a two-layer head ending in a sigmoid.
///
/// Cloning is cheap; the layer weights are reference-counted tensors, so
/// cached clones share the loaded weights.
#[derive(Clone)]
pub struct SentimentCnnModel {
    embedding: Embedding,
    conv: Conv1d,
    dense_hidden: Linear,
    dense_out: Linear,
    device: Device,
}

impl SentimentCnnModel {
    fn load(options: SentimentCnnOptions, device: Device) -> Result<Self> {
        tracing::info!(repo = %options.repo, "loading sentiment CNN model");

        let api = Api::new()?;
        let repo = api.repo(Repo::new(options.repo.clone(), RepoType::Model));

        let config_filename = repo.get("config.json")?;
        let weights_filename = repo.get("model.safetensors")?;

        let config_content = std::fs::read_to_string(&config_filename).map_err(|e| {
            E::msg(format!(
                "Failed to read config file {:?}: {}",
                config_filename, e
            ))
        })?;
        let config: SentimentCnnConfig = serde_json::from_str(&config_content).map_err(|e| {
            E::msg(format!(
                "Failed to parse config file {:?}: {}",
                config_filename, e
            ))
        })?;

        let vb = unsafe {
            VarBuilder::from_mmaped_safetensors(&[weights_filename], DType::F32, &device)?
        };

        let embedding = candle_nn::embedding(
            config.vocab_size,
            config.embedding_dim,
            vb.pp("embedding"),
        )?;
        let conv = candle_nn::conv1d(
            config.embedding_dim,
            config.filters,
            config.kernel_size,
            Conv1dConfig::default(),
            vb.pp("conv1d"),
        )?;
        let dense_hidden = candle_nn::linear(config.filters, config.hidden_dim, vb.pp("dense1"))?;
        let dense_out = candle_nn::linear(config.hidden_dim, 1, vb.pp("dense2"))?;

        tracing::info!("sentiment CNN model loaded");

        Ok(Self {
            embedding,
            conv,
            dense_hidden,
            dense_out,
            device,
        })
    }

    /// Forward pass over a `1 x max_len` batch of token ids, returning the
    /// sigmoid-squashed polarity score.
    fn forward(&self, input_ids: &Tensor) -> candle_core::Result<Tensor> {
        let embedded = self.embedding.forward(input_ids)?;
        // Conv1d wants (batch, channels, length)
        let features = embedded.transpose(1, 2)?;
        let convolved = self.conv.forward(&features)?.relu()?;
        let pooled = convolved.max(D::Minus1)?;
        let hidden = self.dense_hidden.forward(&pooled)?.relu()?;
        let logit = self.dense_out.forward(&hidden)?;
        candle_nn::ops::sigmoid(&logit)
    }
}

impl SentimentModel for SentimentCnnModel {
    type Options = SentimentCnnOptions;

    fn new(options: Self::Options, device: Device) -> Result<Self> {
        Self::load(options, device)
    }

    fn get_metadata(options: Self::Options) -> Result<Metadata> {
        MetadataLoader::new(&options.repo, "metadata.json").load()
    }

    fn predict(&self, sequence: &[u32]) -> Result<f32> {
        let input = Tensor::new(sequence, &self.device)?.unsqueeze(0)?;
        let scores = self.forward(&input)?;
        // All intermediates drop here; only the scalar survives the call.
        let score = scores.squeeze(1)?.squeeze(0)?.to_scalar::<f32>()?;
        Ok(score)
    }

    fn device(&self) -> &Device {
        &self.device
    }
}
