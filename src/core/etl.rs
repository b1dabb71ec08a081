use crate::core::Pipeline;
use crate::domain::stats::ReviewStats;
use crate::utils::error::Result;

/// Outcome of one successful conversion.
#[derive(Debug, Clone)]
pub struct ConversionReport {
    pub output_path: String,
    pub group_count: usize,
    pub stats: ReviewStats,
}

impl ConversionReport {
    /// Status block printed once the review file is written.
    pub fn status_message(&self, review_url: &str) -> String {
        format!(
            "✅ Converted {} groups\n\
             📁 Saved to: {}\n\
             \n\
             📱 Next steps:\n\
             1. Open {} in your browser\n\
             2. Click 'Import JSON' and select {}\n\
             3. Start reviewing your variant groups!\n",
            self.group_count, self.output_path, review_url, self.output_path
        )
    }
}

pub struct ConversionEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ConversionEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<ConversionReport> {
        tracing::debug!("Starting conversion");

        let source = self.pipeline.extract().await?;
        tracing::debug!("Extracted {} export", source.format_name());

        let document = self.pipeline.transform(source).await?;
        let stats = ReviewStats::from_document(&document);

        let output_path = self.pipeline.load(&document).await?;
        tracing::info!(
            "📊 {} groups ({} pending, {} reviewed), {} of {} products grouped ({:.1}%)",
            stats.total_groups,
            stats.pending_review,
            stats.reviewed(),
            stats.grouped_products,
            stats.total_products,
            stats.grouping_rate
        );

        Ok(ConversionReport {
            output_path,
            group_count: document.groups.len(),
            stats,
        })
    }
}
