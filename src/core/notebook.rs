//! Notebook export support.
//!
//! The notebook only records SKUs and titles, so variant attributes are
//! recovered from the title text and the group's common/varying attribute
//! split is recomputed from them.

use crate::core::convert::format_timestamp;
use crate::domain::model::{
    group_id, or_default, NotebookExport, NotebookGroup, NotebookVariant, ReviewDocument,
    ReviewGroup, ReviewMetadata, ReviewStatus, ReviewVariant, DEFAULT_CONFIDENCE,
};
use chrono::{DateTime, Local};
use regex::Regex;
use serde_json::{json, Map, Value};
use std::sync::LazyLock;

static WEIGHT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(?:-\s*(\d+(?:\.\d+)?))?\s*(lb|oz|kg|g|pound|ounce)s?\.?")
        .expect("weight pattern is valid")
});

// Checked in order, first hit wins.
const BASE_PRODUCTS: &[&str] = &[
    "ribeye",
    "strip steak",
    "sirloin",
    "filet mignon",
    "tenderloin",
    "brisket",
    "short ribs",
    "chuck roast",
    "ground beef",
    "ground veal",
    "ground lamb",
    "ground turkey",
    "ground chicken",
    "hot dog",
    "sausage",
    "chicken breast",
    "chicken thigh",
    "chicken wings",
    "whole chicken",
    "turkey",
    "lamb",
    "veal",
    "duck",
    "pastrami",
    "salami",
    "bologna",
    "bacon",
    "hamburger",
    "burger",
    "meatball",
    "soup",
    "cholent",
];

const PREPARATIONS: &[(&[&str], &str)] = &[
    (&["fully cooked", "fully-cooked"], "fully-cooked"),
    (&["smoked"], "smoked"),
    (&["marinated"], "marinated"),
    (&["pickled"], "pickled"),
    (&["corned"], "corned"),
    (&["cured"], "cured"),
    (&["raw", "uncooked"], "raw"),
];

pub fn notebook_to_review(export: NotebookExport, now: DateTime<Local>) -> ReviewDocument {
    let metadata = export.metadata.unwrap_or_default();
    let stats = metadata.stats.unwrap_or_default();

    let groups = export
        .groups
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(index, group)| convert_group(index, group))
        .collect();

    ReviewDocument {
        metadata: ReviewMetadata {
            generated: metadata
                .generated
                .filter(|g| !g.is_empty())
                .unwrap_or_else(|| format_timestamp(now)),
            total_products: or_default(stats.total_products, 0),
            grouping_rate: or_default(stats.grouping_rate, 0),
        },
        groups,
    }
}

fn convert_group(index: usize, group: NotebookGroup) -> ReviewGroup {
    let variants: Vec<ReviewVariant> = group
        .variants
        .unwrap_or_default()
        .into_iter()
        .map(convert_variant)
        .collect();
    let (common_attributes, varying_attributes) = split_attributes(&variants);

    let reasoning = group
        .grouping_rationale
        .filter(|r| !r.is_empty())
        .or(group.reasoning)
        .unwrap_or_default();

    ReviewGroup {
        id: group_id(index),
        parent_sku: or_default(group.parent_sku, ""),
        parent_title: or_default(group.parent_title, ""),
        confidence: json!(DEFAULT_CONFIDENCE),
        reasoning: Value::String(reasoning),
        variant_count: or_default(group.variant_count, variants.len() as u64),
        common_attributes: Value::Object(common_attributes),
        varying_attributes: Value::Array(varying_attributes),
        review_status: ReviewStatus::Pending,
        variants,
    }
}

fn convert_variant(variant: NotebookVariant) -> ReviewVariant {
    let title = variant
        .title
        .filter(|t| !t.is_empty())
        .or(variant.display_name)
        .unwrap_or_default();
    let sku = variant.sku.unwrap_or_default();
    let attributes = title_attributes(&title, &sku);

    ReviewVariant {
        sku: Value::String(sku),
        title: Value::String(title),
        attributes: Value::Object(attributes),
    }
}

/// Attributes recoverable from a product title.
pub fn title_attributes(title: &str, sku: &str) -> Map<String, Value> {
    let mut attributes = Map::new();
    attributes.insert("base_product".to_string(), json!(base_product(title)));
    attributes.extend(weight(title));
    attributes.insert("preparation".to_string(), json!(preparation(title)));
    attributes.insert("kosher".to_string(), json!(is_kosher(title, sku)));
    attributes.insert("organic".to_string(), json!(is_organic(title)));
    attributes
}

pub fn base_product(title: &str) -> &'static str {
    if title.is_empty() {
        return "unknown";
    }
    let lower = title.to_lowercase();
    BASE_PRODUCTS
        .iter()
        .find(|product| lower.contains(*product))
        .copied()
        .unwrap_or("meat product")
}

/// `weight` + `weight_unit` for "5 lb", `weight_min`/`weight_max` +
/// `weight_unit` for "10-12 oz", nothing when no weight is mentioned.
pub fn weight(title: &str) -> Map<String, Value> {
    let mut fields = Map::new();
    let Some(caps) = WEIGHT_PATTERN.captures(title) else {
        return fields;
    };

    let number = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<f64>().ok());
    let unit = match caps[3].to_lowercase().as_str() {
        "pound" => "lb".to_string(),
        "ounce" => "oz".to_string(),
        other => other.to_string(),
    };

    match (number(1), number(2)) {
        (Some(min), Some(max)) => {
            fields.insert("weight_min".to_string(), json!(min));
            fields.insert("weight_max".to_string(), json!(max));
        }
        (Some(single), None) => {
            fields.insert("weight".to_string(), json!(single));
        }
        _ => return fields,
    }
    fields.insert("weight_unit".to_string(), json!(unit));
    fields
}

pub fn preparation(title: &str) -> &'static str {
    let lower = title.to_lowercase();
    PREPARATIONS
        .iter()
        .find(|(needles, _)| needles.iter().any(|n| lower.contains(n)))
        .map(|(_, name)| *name)
        .unwrap_or("fresh")
}

pub fn is_kosher(title: &str, sku: &str) -> bool {
    if title.is_empty() {
        return false;
    }
    let sku = sku.to_uppercase();
    title.to_lowercase().contains("kosher") || sku.starts_with("Y-") || sku.ends_with('P')
}

pub fn is_organic(title: &str) -> bool {
    title.to_lowercase().contains("organic")
}

/// Attributes with one shared, present value across every variant are
/// common; attributes that take more than one value (absence included) are
/// varying. Keys keep their first-seen order.
pub fn split_attributes(variants: &[ReviewVariant]) -> (Map<String, Value>, Vec<Value>) {
    let attribute_maps: Vec<Option<&Map<String, Value>>> =
        variants.iter().map(|v| v.attributes.as_object()).collect();

    let mut keys: Vec<&String> = Vec::new();
    for attributes in attribute_maps.iter().flatten() {
        for key in attributes.keys() {
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
    }

    let mut common = Map::new();
    let mut varying = Vec::new();
    for key in keys {
        let mut distinct: Vec<Option<&Value>> = Vec::new();
        for attributes in &attribute_maps {
            let value = attributes.and_then(|a| a.get(key));
            if !distinct.contains(&value) {
                distinct.push(value);
            }
        }

        match distinct.as_slice() {
            [Some(value)] => {
                common.insert(key.clone(), (*value).clone());
            }
            [_, _, ..] => varying.push(Value::String(key.clone())),
            _ => {}
        }
    }

    (common, varying)
}
