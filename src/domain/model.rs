use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_CONFIDENCE: f64 = 0.85;
pub const DEFAULT_REASONING: &str = "SKU pattern match";

// Source documents. Every field is optional: an absent key and an explicit
// `null` both fall back to the review default. Scalars that are only copied
// into the review file stay as raw JSON values, so a numeric SKU or an
// integral rate comes out exactly as it went in.

/// Export written by the LangChain grouping run.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LangChainExport {
    pub metadata: Option<LangChainMetadata>,
    pub grouped_products: Option<Vec<LangChainGroup>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LangChainMetadata {
    pub total_products: Option<Value>,
    pub grouping_rate: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LangChainGroup {
    pub parent_sku: Option<Value>,
    pub parent_title: Option<Value>,
    pub confidence: Option<Value>,
    pub reasoning: Option<Value>,
    pub variant_count: Option<Value>,
    pub common_attributes: Option<Value>,
    pub varying_attributes: Option<Value>,
    pub variants: Option<Vec<LangChainVariant>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LangChainVariant {
    pub sku: Option<Value>,
    pub title: Option<Value>,
    pub attributes: Option<Value>,
}

/// Export written by the grouping notebook.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotebookExport {
    pub metadata: Option<NotebookMetadata>,
    pub groups: Option<Vec<NotebookGroup>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotebookMetadata {
    pub generated: Option<String>,
    pub stats: Option<NotebookStats>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotebookStats {
    pub total_products: Option<Value>,
    pub grouping_rate: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotebookGroup {
    pub parent_sku: Option<Value>,
    pub parent_title: Option<Value>,
    pub variant_count: Option<Value>,
    pub grouping_rationale: Option<String>,
    pub reasoning: Option<String>,
    pub variants: Option<Vec<NotebookVariant>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotebookVariant {
    pub sku: Option<String>,
    pub title: Option<String>,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone)]
pub enum SourceDocument {
    LangChain(LangChainExport),
    Notebook(NotebookExport),
}

impl SourceDocument {
    pub fn format_name(&self) -> &'static str {
        match self {
            SourceDocument::LangChain(_) => "langchain",
            SourceDocument::Notebook(_) => "notebook",
        }
    }
}

// Review app input.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewDocument {
    pub metadata: ReviewMetadata,
    pub groups: Vec<ReviewGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewMetadata {
    /// ISO-8601 timestamp.
    pub generated: String,
    pub total_products: Value,
    pub grouping_rate: Value,
}

impl ReviewMetadata {
    pub fn total_products_count(&self) -> i64 {
        integral(&self.total_products)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewGroup {
    pub id: String,
    pub parent_sku: Value,
    pub parent_title: Value,
    pub confidence: Value,
    pub reasoning: Value,
    pub variant_count: Value,
    pub common_attributes: Value,
    pub varying_attributes: Value,
    pub review_status: ReviewStatus,
    pub variants: Vec<ReviewVariant>,
}

impl ReviewGroup {
    /// `variant_count` as a number; anything non-numeric counts as 0.
    pub fn variant_total(&self) -> u64 {
        integral(&self.variant_count).max(0) as u64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewVariant {
    pub sku: Value,
    pub title: Value,
    pub attributes: Value,
}

pub fn group_id(index: usize) -> String {
    format!("group-{}", index)
}

fn integral(value: &Value) -> i64 {
    value
        .as_i64()
        .or_else(|| value.as_f64().map(|f| f as i64))
        .unwrap_or(0)
}

/// Default for an absent or `null` pass-through field.
pub fn or_default(value: Option<Value>, default: impl Into<Value>) -> Value {
    value.unwrap_or_else(|| default.into())
}

/// Which grouping export the input file is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    #[default]
    Langchain,
    Notebook,
    /// Pick the format from the document shape.
    Auto,
}
