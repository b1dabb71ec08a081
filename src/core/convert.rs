use crate::domain::model::{
    group_id, or_default, LangChainExport, LangChainGroup, LangChainVariant, ReviewDocument,
    ReviewGroup, ReviewMetadata, ReviewStatus, ReviewVariant, DEFAULT_CONFIDENCE,
    DEFAULT_REASONING,
};
use crate::utils::error::Result;
use crate::utils::validation::validate_json_suffix;
use chrono::{DateTime, Local, SecondsFormat};
use serde_json::{Map, Value};

const JSON_SUFFIX: &str = ".json";
const REVIEW_SUFFIX: &str = "_for_review.json";

/// `exports/run.json` -> `exports/run_for_review.json`.
///
/// Paths without a trailing `.json` are rejected; rewriting them would leave
/// the name unchanged and the output would overwrite the input.
pub fn review_output_path(input_path: &str) -> Result<String> {
    validate_json_suffix("input", input_path)?;
    let stem = &input_path[..input_path.len() - JSON_SUFFIX.len()];
    Ok(format!("{}{}", stem, REVIEW_SUFFIX))
}

pub fn format_timestamp(at: DateTime<Local>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, false)
}

/// Maps a LangChain export onto the review app document.
///
/// Groups keep their input order and get `group-<index>` ids. Every group
/// starts out pending, whatever the export says.
pub fn langchain_to_review(export: LangChainExport, generated: DateTime<Local>) -> ReviewDocument {
    let metadata = export.metadata.unwrap_or_default();

    let groups = export
        .grouped_products
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(index, group)| convert_group(index, group))
        .collect();

    ReviewDocument {
        metadata: ReviewMetadata {
            generated: format_timestamp(generated),
            total_products: or_default(metadata.total_products, 0),
            grouping_rate: or_default(metadata.grouping_rate, 0),
        },
        groups,
    }
}

fn convert_group(index: usize, group: LangChainGroup) -> ReviewGroup {
    let variants: Vec<ReviewVariant> = group
        .variants
        .unwrap_or_default()
        .into_iter()
        .map(convert_variant)
        .collect();

    ReviewGroup {
        id: group_id(index),
        parent_sku: or_default(group.parent_sku, ""),
        parent_title: or_default(group.parent_title, ""),
        confidence: or_default(group.confidence, DEFAULT_CONFIDENCE),
        reasoning: or_default(group.reasoning, DEFAULT_REASONING),
        variant_count: or_default(group.variant_count, variants.len() as u64),
        common_attributes: or_default(group.common_attributes, Map::new()),
        varying_attributes: or_default(group.varying_attributes, Vec::<Value>::new()),
        review_status: ReviewStatus::Pending,
        variants,
    }
}

fn convert_variant(variant: LangChainVariant) -> ReviewVariant {
    ReviewVariant {
        sku: or_default(variant.sku, ""),
        title: or_default(variant.title, ""),
        attributes: or_default(variant.attributes, Map::new()),
    }
}
