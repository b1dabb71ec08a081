use crate::domain::model::{SourceDocument, SourceFormat};
use crate::utils::error::{ConvertError, Result};
use serde_json::Value;

/// Parses raw export bytes into a typed source document.
///
/// Malformed JSON surfaces as `SerializationError`; well-formed JSON that is
/// not an object, or whose fields have the wrong types, as `ShapeError`.
pub fn parse_source(bytes: &[u8], format: SourceFormat) -> Result<SourceDocument> {
    let value: Value = serde_json::from_slice(bytes)?;

    if !value.is_object() {
        return Err(ConvertError::shape(format!(
            "expected a JSON object at the top level, found {}",
            json_kind(&value)
        )));
    }

    let format = match format {
        SourceFormat::Auto => detect_format(&value)?,
        explicit => explicit,
    };
    tracing::debug!("Reading input as {:?} export", format);

    let document = match format {
        SourceFormat::Notebook => SourceDocument::Notebook(from_value(value)?),
        _ => SourceDocument::LangChain(from_value(value)?),
    };
    Ok(document)
}

/// A `groups` array marks a notebook export, a `grouped_products` array a
/// LangChain export. `groups` is checked first, so a document carrying both
/// is read as a notebook export.
pub fn detect_format(value: &Value) -> Result<SourceFormat> {
    if value.get("groups").is_some_and(Value::is_array) {
        Ok(SourceFormat::Notebook)
    } else if value.get("grouped_products").is_some_and(Value::is_array) {
        Ok(SourceFormat::Langchain)
    } else {
        Err(ConvertError::UnrecognizedFormat)
    }
}

fn from_value<T: serde::de::DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| ConvertError::shape(e.to_string()))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
