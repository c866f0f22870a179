use hf_hub::api::sync::Api as HfApi;
use std::path::PathBuf;

use crate::core::Metadata;

/// Fetches a single file from a Hugging Face model repo, downloading it on
/// first use and reusing the local copy afterwards.
#[derive(Debug, Clone)]
pub struct HfLoader {
    pub repo: String,
    pub filename: String,
}

impl HfLoader {
    pub fn new(repo: &str, filename: &str) -> Self {
        Self {
            repo: repo.into(),
            filename: filename.into(),
        }
    }

    pub fn load(&self) -> anyhow::Result<PathBuf> {
        let file_path = {
            let hf_api = HfApi::new()?;
            let hf_repo = self.repo.clone();

            let hf_api = hf_api.model(hf_repo);

            hf_api.get(self.filename.as_str())?
        };

        Ok(file_path)
    }
}

/// Loads and validates the vocabulary metadata document published next to
/// the model weights.
#[derive(Clone)]
pub struct MetadataLoader {
    pub metadata_file_loader: HfLoader,
}

impl MetadataLoader {
    pub fn new(repo: &str, filename: &str) -> Self {
        let metadata_file_loader = HfLoader::new(repo, filename);

        Self {
            metadata_file_loader,
        }
    }

    pub fn load(&self) -> anyhow::Result<Metadata> {
        let metadata_file_path = self.metadata_file_loader.load()?;

        tracing::info!("loading vocabulary metadata from {:?}", metadata_file_path);
        let raw = std::fs::read_to_string(&metadata_file_path)?;
        let metadata = Metadata::from_json(&raw)?;
        tracing::debug!(
            words = metadata.word_index.len(),
            max_len = metadata.max_len,
            "vocabulary metadata loaded"
        );

        Ok(metadata)
    }
}
