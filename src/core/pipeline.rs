use crate::core::convert::{langchain_to_review, review_output_path};
use crate::core::notebook::notebook_to_review;
use crate::core::source::parse_source;
use crate::core::{ConfigProvider, Pipeline, ReviewDocument, SourceDocument, Storage};
use crate::utils::error::Result;
use chrono::Local;

/// Reads one grouping export and writes the review app file next to it.
pub struct ReviewPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ReviewPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ReviewPipeline<S, C> {
    async fn extract(&self) -> Result<SourceDocument> {
        let input_path = self.config.input_path();
        // Checked before reading so a bad name never gets as far as a write.
        review_output_path(input_path)?;

        tracing::debug!("Reading export from: {}", input_path);
        let bytes = self.storage.read_file(input_path).await?;
        tracing::debug!("Read {} bytes", bytes.len());

        parse_source(&bytes, self.config.source_format())
    }

    async fn transform(&self, source: SourceDocument) -> Result<ReviewDocument> {
        let now = Local::now();
        let document = match source {
            SourceDocument::LangChain(export) => langchain_to_review(export, now),
            SourceDocument::Notebook(export) => notebook_to_review(export, now),
        };
        tracing::debug!("Mapped {} groups", document.groups.len());
        Ok(document)
    }

    async fn load(&self, document: &ReviewDocument) -> Result<String> {
        let output_path = review_output_path(self.config.input_path())?;

        // Serialize fully before touching the filesystem.
        let json_data = serde_json::to_string_pretty(document)?;

        tracing::debug!("Writing {} bytes to: {}", json_data.len(), output_path);
        self.storage
            .write_file(&output_path, json_data.as_bytes())
            .await?;

        Ok(output_path)
    }
}
