use crate::domain::model::{ReviewDocument, SourceDocument, SourceFormat};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn source_format(&self) -> SourceFormat;
    fn review_url(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<SourceDocument>;
    async fn transform(&self, source: SourceDocument) -> Result<ReviewDocument>;
    async fn load(&self, document: &ReviewDocument) -> Result<String>;
}
